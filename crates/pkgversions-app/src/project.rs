//! Loading a project from disk: config, root manifest, lock file.

use anyhow::Context;
use camino::Utf8Path;
use pkgversions_domain::StaticLockSource;
use pkgversions_lock::RootInput;
use pkgversions_settings::{Overrides, PackageVersionsConfigV1, ResolvedConfig};

use crate::generate::GenerateTarget;

/// Input for loading a project.
#[derive(Clone, Debug)]
pub struct ProjectInput<'a> {
    /// Project root (directory containing the root manifest and lock file).
    pub project_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Root version/reference not recorded in the manifest.
    pub root_input: RootInput,
}

/// A project ready for generation.
#[derive(Clone, Debug)]
pub struct Project {
    pub source: StaticLockSource,
    pub target: GenerateTarget,
    pub resolved_config: ResolvedConfig,
}

pub fn load_project(input: ProjectInput<'_>) -> anyhow::Result<Project> {
    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        PackageVersionsConfigV1::default()
    } else {
        pkgversions_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    // The manifest is read before resolution: it may supply the vendor dir.
    let manifest_path = input
        .project_root
        .join(pkgversions_settings::manifest_path(&cfg).context("resolve config")?);
    let manifest = pkgversions_lock::read_root_manifest(&manifest_path, &input.root_input)
        .context("read root manifest")?;

    let resolved =
        pkgversions_settings::resolve_config(cfg, input.overrides, manifest.vendor_dir.as_deref())
            .context("resolve config")?;

    let lock_path = input.project_root.join(&resolved.lock_file);
    let source = pkgversions_lock::load_lock_source(&lock_path, manifest.descriptor)
        .context("read lock file")?;
    tracing::debug!(
        lock = %lock_path,
        packages = source.lock.packages().len(),
        packages_dev = source.lock.packages_dev().len(),
        "loaded lock data"
    );

    let target = GenerateTarget {
        vendor_dir: input.project_root.join(&resolved.vendor_dir),
        self_package: resolved.self_package.clone(),
        output: resolved
            .output
            .as_ref()
            .map(|output| input.project_root.join(output)),
    };

    Ok(Project {
        source,
        target,
        resolved_config: resolved,
    })
}
