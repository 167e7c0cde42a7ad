use anyhow::Context;
use pkgversions_domain::{PackageDescriptor, RootPackage};
use pkgversions_types::{LockData, ids};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Root-package facts that do not come from the manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootInput {
    /// Used when the manifest declares no `version`.
    pub version: Option<String>,
    /// Commit the project is checked out at.
    pub source_reference: Option<String>,
}

/// What the root manifest contributes to a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootManifest {
    pub descriptor: PackageDescriptor,
    /// `config.vendor-dir`, if set.
    pub vendor_dir: Option<String>,
}

impl RootManifest {
    /// Root descriptor for a project without a manifest.
    pub fn fallback(input: &RootInput) -> Self {
        Self {
            descriptor: PackageDescriptor::Root(RootPackage::new(
                ids::DEFAULT_ROOT_NAME,
                root_version(None, input),
                input.source_reference.clone().unwrap_or_default(),
            )),
            vendor_dir: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    extra: Option<ManifestExtra>,
    #[serde(default)]
    config: Option<ManifestConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestExtra {
    #[serde(rename = "branch-alias", default)]
    branch_alias: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestConfig {
    #[serde(rename = "vendor-dir", default)]
    vendor_dir: Option<String>,
}

pub fn parse_lock_json(text: &str) -> anyhow::Result<LockData> {
    serde_json::from_str(text).context("parse lock data")
}

pub fn parse_root_manifest(text: &str, input: &RootInput) -> anyhow::Result<RootManifest> {
    let doc: ManifestDoc = serde_json::from_str(text).context("parse root manifest")?;

    let name = doc
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| ids::DEFAULT_ROOT_NAME.to_string());
    let version = root_version(doc.version, input);

    let alias_version = doc
        .extra
        .as_ref()
        .and_then(|extra| extra.branch_alias.get(&version))
        .cloned();

    let mut descriptor = PackageDescriptor::Root(RootPackage::new(
        name.clone(),
        version,
        input.source_reference.clone().unwrap_or_default(),
    ));
    if let Some(alias_version) = alias_version {
        descriptor = descriptor.aliased_as(name, alias_version);
    }

    Ok(RootManifest {
        descriptor,
        vendor_dir: doc.config.and_then(|c| c.vendor_dir),
    })
}

fn root_version(declared: Option<String>, input: &RootInput) -> String {
    declared
        .or_else(|| input.version.clone())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| ids::DEFAULT_ROOT_VERSION.to_string())
}
