//! Lookups against the mapping a run would generate.

use pkgversions_domain::{LockSource, PackageNotInstalled, VersionMapping, collect};
use pkgversions_types::VersionIdentifier;

pub fn run_lookup(
    source: &dyn LockSource,
    package_name: &str,
) -> Result<VersionIdentifier, PackageNotInstalled> {
    let mapping: VersionMapping = collect(source.lock_data(), source.root_package()).collect();
    mapping.get_version(package_name).cloned()
}

pub fn run_lookup_composer_version(
    source: &dyn LockSource,
    package_name: &str,
) -> Result<String, PackageNotInstalled> {
    run_lookup(source, package_name).map(|id| id.version().to_string())
}
