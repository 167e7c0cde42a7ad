//! Fuzz target for collecting versions out of structured lock data.
//!
//! Checks that the folded mapping always ends with the root entry winning (outermost
//! alias version, real reference), and never holds more than one entry per lock record
//! plus the root.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_collect
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pkgversions_domain::{PackageDescriptor, RootPackage, VersionMapping, collect};
use pkgversions_types::{LockData, LockedPackage, VersionIdentifier};

#[derive(Arbitrary, Debug)]
struct Record {
    name: String,
    version: String,
    source: Option<String>,
    dist: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct Input {
    packages: Vec<Record>,
    packages_dev: Option<Vec<Record>>,
    root_name: String,
    root_version: String,
    root_reference: String,
    alias_versions: Vec<String>,
}

fn to_locked(records: Vec<Record>) -> Vec<LockedPackage> {
    records
        .into_iter()
        .map(|record| {
            let mut package = LockedPackage::new(record.name, record.version);
            if let Some(reference) = record.source {
                package = package.with_source_reference(reference);
            }
            if let Some(reference) = record.dist {
                package = package.with_dist_reference(reference);
            }
            package
        })
        .collect()
}

fuzz_target!(|input: Input| {
    let record_count = input.packages.len() + input.packages_dev.as_ref().map_or(0, Vec::len);
    let lock = LockData::new(
        to_locked(input.packages),
        input.packages_dev.map(to_locked).unwrap_or_default(),
    );

    let mut root = PackageDescriptor::from(RootPackage::new(
        input.root_name.clone(),
        input.root_version.clone(),
        input.root_reference.clone(),
    ));
    let expected_version = input
        .alias_versions
        .last()
        .cloned()
        .unwrap_or_else(|| input.root_version.clone());
    for version in input.alias_versions {
        root = root.aliased_as(input.root_name.clone(), version);
    }

    let collected = collect(&lock, &root);
    assert_eq!(collected.len(), record_count + 1);

    let mapping: VersionMapping = collected.collect();
    assert!(mapping.len() <= record_count + 1);
    assert_eq!(
        mapping.get(&input.root_name),
        Some(&VersionIdentifier::new(&expected_version, &input.root_reference))
    );
});
