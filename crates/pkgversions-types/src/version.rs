use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical `<version>@<reference>` identifier of an installed package.
///
/// The reference may be empty, leaving a trailing `@`. Parsing splits on the first `@`
/// only: references are opaque, and versions are not expected to contain `@`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionIdentifier(String);

impl VersionIdentifier {
    pub const SEPARATOR: char = '@';

    pub fn new(version: &str, reference: &str) -> Self {
        Self(format!("{version}{}{reference}", Self::SEPARATOR))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The declared version (everything before the first `@`).
    pub fn version(&self) -> &str {
        split_version(&self.0)
    }

    /// The source reference (everything after the first `@`).
    pub fn reference(&self) -> &str {
        self.0
            .split_once(Self::SEPARATOR)
            .map(|(_, reference)| reference)
            .unwrap_or("")
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Return the part of a raw identifier before its first `@` (the whole string if none).
pub fn split_version(identifier: &str) -> &str {
    identifier
        .split_once(VersionIdentifier::SEPARATOR)
        .map(|(version, _)| version)
        .unwrap_or(identifier)
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VersionIdentifier> for String {
    fn from(value: VersionIdentifier) -> Self {
        value.0
    }
}
