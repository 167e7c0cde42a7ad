//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - mapping size for collision-free lock data
//! - reference precedence and identifier shape
//! - root package precedence on name collisions

use crate::collect;
use crate::mapping::VersionMapping;
use crate::test_support::{lock, pkg, root};
use pkgversions_types::{LockedPackage, split_version};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}/[a-z][a-z0-9-]{0,8}"
}

fn arb_version() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        "dev-[a-z]{1,8}",
        "[0-9]\\.x-dev",
    ]
}

fn arb_reference() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[0-9a-f]{0,40}")
}

fn arb_package(name: String) -> impl Strategy<Value = LockedPackage> {
    (arb_version(), arb_reference(), arb_reference()).prop_map(move |(version, source, dist)| {
        pkg(&name, &version, source.as_deref(), dist.as_deref())
    })
}

/// Distinct names split into production and development lists, plus a root name not
/// among them.
fn arb_distinct_lock() -> impl Strategy<Value = (Vec<LockedPackage>, Vec<LockedPackage>)> {
    prop::collection::btree_set(arb_name(), 0..24)
        .prop_flat_map(|names: BTreeSet<String>| {
            let names: Vec<String> = names.into_iter().filter(|n| n != "root/project").collect();
            let split = 0..=names.len();
            (Just(names), split)
        })
        .prop_flat_map(|(names, split)| {
            let (prod, dev) = names.split_at(split);
            let prod: Vec<_> = prod.iter().cloned().map(arb_package).collect();
            let dev: Vec<_> = dev.iter().cloned().map(arb_package).collect();
            (prod, dev)
        })
}

proptest! {
    /// N production + M development packages with distinct names yield N + M + 1 entries.
    #[test]
    fn distinct_names_yield_one_entry_each((prod, dev) in arb_distinct_lock()) {
        let expected = prod.len() + dev.len() + 1;
        let lock = lock(prod, dev);
        let root = root("root/project", "1.0.0", "abc");

        let mapping: VersionMapping = collect(&lock, &root).collect();
        prop_assert_eq!(mapping.len(), expected);
    }

    /// Every identifier is `<version>@<reference>` with the documented precedence.
    #[test]
    fn identifiers_follow_reference_precedence((prod, dev) in arb_distinct_lock()) {
        let lock = lock(prod, dev);
        let root = root("root/project", "1.0.0", "");

        for ((_, id), package) in collect(&lock, &root).zip(lock.packages().iter().chain(lock.packages_dev())) {
            let expected_reference = package
                .source
                .as_ref()
                .and_then(|s| s.reference.clone())
                .or_else(|| package.dist.as_ref().and_then(|d| d.reference.clone()))
                .unwrap_or_default();
            prop_assert_eq!(id.as_str(), format!("{}@{}", package.version, expected_reference));
            prop_assert_eq!(split_version(id.as_str()), package.version.as_str());
        }
    }

    /// The root entry always ends up with the root's own identifier.
    #[test]
    fn root_always_wins(
        (prod, dev) in arb_distinct_lock(),
        version in arb_version(),
        reference in "[0-9a-f]{0,12}",
    ) {
        let collide_with = prod.first().or(dev.first()).map(|p| p.name.clone());
        let root_name = collide_with.unwrap_or_else(|| "root/project".to_string());
        let lock = lock(prod, dev);
        let root = root(&root_name, &version, &reference);

        let mapping: VersionMapping = collect(&lock, &root).collect();
        let stored = mapping.get_version(&root_name).map(|id| id.as_str().to_string());
        prop_assert_eq!(stored, Ok(format!("{version}@{reference}")));
    }

    /// The composer version is everything before the first `@`, whatever the reference.
    #[test]
    fn composer_version_ignores_reference(version in arb_version(), reference in ".{0,20}") {
        let lock = lock(Vec::new(), Vec::new());
        let root = root("root/project", &version, &reference);
        let mapping: VersionMapping = collect(&lock, &root).collect();
        prop_assert_eq!(mapping.get_composer_version("root/project"), Ok(version.as_str()));
    }
}
