use crate::model::PackageDescriptor;
use pkgversions_types::{LockData, LockedPackage, VersionIdentifier};
use std::iter::Chain;
use std::slice::Iter;

/// Lazily walk the resolved dependency set.
///
/// Order: production packages, development packages (each in lock order), then the
/// root package. The root entry keeps the outermost name and version (an aliased root
/// reports its alias version) with the source reference of the real package. Duplicate names are emitted as-is; folding the sequence into
/// a [`crate::VersionMapping`] makes the last occurrence win.
pub fn collect<'a>(lock: &'a LockData, root: &'a PackageDescriptor) -> Collected<'a> {
    Collected {
        packages: lock.packages().iter().chain(lock.packages_dev()),
        root: Some(root),
    }
}

/// Iterator returned by [`collect`]. Single pass; not restartable.
#[derive(Clone, Debug)]
pub struct Collected<'a> {
    packages: Chain<Iter<'a, LockedPackage>, Iter<'a, LockedPackage>>,
    root: Option<&'a PackageDescriptor>,
}

impl<'a> Iterator for Collected<'a> {
    type Item = (&'a str, VersionIdentifier);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(package) = self.packages.next() {
            return Some((
                package.name.as_str(),
                VersionIdentifier::new(&package.version, package.reference()),
            ));
        }

        self.root.take().map(|root| {
            (
                root.name(),
                VersionIdentifier::new(root.version(), root.source_reference()),
            )
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.packages.size_hint();
        let extra = usize::from(self.root.is_some());
        (lower + extra, upper.map(|u| u + extra))
    }
}

impl ExactSizeIterator for Collected<'_> {}
