use crate::model::PackageDescriptor;
use pkgversions_types::LockData;

/// Read-only view of what the package manager resolved and installed.
pub trait LockSource {
    fn lock_data(&self) -> &LockData;
    fn root_package(&self) -> &PackageDescriptor;
}

/// A [`LockSource`] over values already in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticLockSource {
    pub lock: LockData,
    pub root: PackageDescriptor,
}

impl StaticLockSource {
    pub fn new(lock: LockData, root: PackageDescriptor) -> Self {
        Self { lock, root }
    }
}

impl LockSource for StaticLockSource {
    fn lock_data(&self) -> &LockData {
        &self.lock
    }

    fn root_package(&self) -> &PackageDescriptor {
        &self.root
    }
}
