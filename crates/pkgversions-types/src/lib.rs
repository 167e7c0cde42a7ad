//! Stable DTOs and IDs used across the package-versions workspace.
//!
//! This crate is intentionally boring:
//! - serde models of the lock data written by the package manager
//! - the canonical `<version>@<reference>` identifier
//! - stable names, paths and schema IDs

#![forbid(unsafe_code)]

pub mod ids;
pub mod lock;
pub mod version;

pub use lock::{LockData, LockedPackage, PackageReference};
pub use version::{VersionIdentifier, split_version};
