use pkgversions_types::VersionIdentifier;
use std::collections::BTreeMap;

/// Lookup failure: the package is not part of the mapping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Required package \"{package_name}\" is not installed: cannot detect its version")]
pub struct PackageNotInstalled {
    pub package_name: String,
}

impl PackageNotInstalled {
    pub fn new<S: Into<String>>(package_name: S) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }
}

/// Insertion-ordered package name -> version identifier mapping.
///
/// Inserting an existing name replaces its identifier in place, keeping the position of
/// the first insertion. Iteration order is therefore stable across runs over the same
/// lock data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionMapping {
    entries: Vec<(String, VersionIdentifier)>,
    index: BTreeMap<String, usize>,
}

impl VersionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the replaced identifier, if any.
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        identifier: VersionIdentifier,
    ) -> Option<VersionIdentifier> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, identifier)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, identifier));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&VersionIdentifier> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The stored `<version>@<reference>` identifier, unmodified.
    pub fn get_version(&self, name: &str) -> Result<&VersionIdentifier, PackageNotInstalled> {
        self.get(name).ok_or_else(|| PackageNotInstalled::new(name))
    }

    /// Only the version part of [`Self::get_version`].
    pub fn get_composer_version(&self, name: &str) -> Result<&str, PackageNotInstalled> {
        self.get_version(name).map(VersionIdentifier::version)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &VersionIdentifier)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), id))
    }
}

impl<K: Into<String>> Extend<(K, VersionIdentifier)> for VersionMapping {
    fn extend<I: IntoIterator<Item = (K, VersionIdentifier)>>(&mut self, iter: I) {
        for (name, identifier) in iter {
            self.insert(name, identifier);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, VersionIdentifier)> for VersionMapping {
    fn from_iter<I: IntoIterator<Item = (K, VersionIdentifier)>>(iter: I) -> Self {
        let mut mapping = VersionMapping::new();
        mapping.extend(iter);
        mapping
    }
}
