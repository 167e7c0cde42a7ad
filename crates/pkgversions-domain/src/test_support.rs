use crate::model::{PackageDescriptor, RootPackage};
use pkgversions_types::{LockData, LockedPackage};

pub fn pkg(
    name: &str,
    version: &str,
    source_reference: Option<&str>,
    dist_reference: Option<&str>,
) -> LockedPackage {
    let mut package = LockedPackage::new(name, version);
    if let Some(reference) = source_reference {
        package = package.with_source_reference(reference);
    }
    if let Some(reference) = dist_reference {
        package = package.with_dist_reference(reference);
    }
    package
}

pub fn lock(packages: Vec<LockedPackage>, packages_dev: Vec<LockedPackage>) -> LockData {
    LockData::new(packages, packages_dev)
}

pub fn root(name: &str, version: &str, source_reference: &str) -> PackageDescriptor {
    PackageDescriptor::Root(RootPackage::new(name, version, source_reference))
}
