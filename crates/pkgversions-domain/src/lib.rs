//! Pure version collection (no IO).
//!
//! Input: lock data and a root package descriptor loaded elsewhere.
//! Output: an ordered name -> `<version>@<reference>` mapping and the location of the
//! generated file.

#![forbid(unsafe_code)]

pub mod install;
pub mod mapping;
pub mod model;
pub mod source;

mod collect;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use collect::{Collected, collect};
pub use install::{generated_file_path, locate_install_path};
pub use mapping::{PackageNotInstalled, VersionMapping};
pub use model::{AliasPackage, PackageDescriptor, RootPackage};
pub use source::{LockSource, StaticLockSource};
