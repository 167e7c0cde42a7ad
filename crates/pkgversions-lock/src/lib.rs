//! Filesystem adapters: read the lock file and the root manifest.
//!
//! This crate is allowed to do filesystem reads. It should not spawn external processes;
//! the root package's source reference is supplied by the caller (typically the CLI).

#![forbid(unsafe_code)]

mod parse;

use anyhow::Context;
use camino::Utf8Path;
use pkgversions_domain::{PackageDescriptor, StaticLockSource};
use pkgversions_types::LockData;

pub use parse::{RootInput, RootManifest};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Parse arbitrary text as a lock file.
    ///
    /// **Never panics** on any input.
    pub fn parse_lock_json(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_lock_json(text)?;
        Ok(())
    }

    /// Parse arbitrary text as a root manifest.
    ///
    /// **Never panics** on any input.
    pub fn parse_root_manifest(text: &str) -> anyhow::Result<()> {
        let _ = parse::parse_root_manifest(text, &RootInput::default())?;
        Ok(())
    }
}

/// Parse lock-file JSON.
pub fn parse_lock_json(text: &str) -> anyhow::Result<LockData> {
    parse::parse_lock_json(text)
}

/// Parse root-manifest JSON.
pub fn parse_root_manifest(text: &str, input: &RootInput) -> anyhow::Result<RootManifest> {
    parse::parse_root_manifest(text, input)
}

/// Read and parse the lock file. A missing or unreadable lock file is an error.
pub fn read_lock_file(path: &Utf8Path) -> anyhow::Result<LockData> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse::parse_lock_json(&text).with_context(|| format!("parse {}", path))
}

/// Read and parse the root manifest. A missing manifest yields the defaults.
pub fn read_root_manifest(path: &Utf8Path, input: &RootInput) -> anyhow::Result<RootManifest> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(RootManifest::fallback(input));
        }
        Err(err) => return Err(err).with_context(|| format!("read {}", path)),
    };
    parse::parse_root_manifest(&text, input).with_context(|| format!("parse {}", path))
}

/// Read the lock file and pair it with an already-loaded root descriptor.
pub fn load_lock_source(
    lock_path: &Utf8Path,
    root: PackageDescriptor,
) -> anyhow::Result<StaticLockSource> {
    let lock = read_lock_file(lock_path)?;
    Ok(StaticLockSource::new(lock, root))
}
