//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::PackageVersionsConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `package-versions.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PackageVersionsConfigV1> {
    let cfg: PackageVersionsConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Validated root manifest path (relative to the project root), read before resolution.
pub fn manifest_path(cfg: &PackageVersionsConfigV1) -> anyhow::Result<camino::Utf8PathBuf> {
    resolve::manifest_path(cfg)
}

/// Resolve the effective settings: CLI overrides, then the config file, then the root
/// manifest's `config.vendor-dir`, then defaults.
pub fn resolve_config(
    cfg: PackageVersionsConfigV1,
    overrides: Overrides,
    manifest_vendor_dir: Option<&str>,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides, manifest_vendor_dir)
}
