use crate::model::PackageVersionsConfigV1;
use camino::Utf8PathBuf;
use pkgversions_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub vendor_dir: Option<String>,
    pub output: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub vendor_dir: Utf8PathBuf,
    pub lock_file: Utf8PathBuf,
    pub manifest: Utf8PathBuf,
    pub self_package: String,
    pub output: Option<Utf8PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            vendor_dir: Utf8PathBuf::from(ids::DEFAULT_VENDOR_DIR),
            lock_file: Utf8PathBuf::from(ids::DEFAULT_LOCK_FILE),
            manifest: Utf8PathBuf::from(ids::DEFAULT_MANIFEST),
            self_package: ids::SELF_PACKAGE_NAME.to_string(),
            output: None,
        }
    }
}

pub fn resolve_config(
    cfg: PackageVersionsConfigV1,
    overrides: Overrides,
    manifest_vendor_dir: Option<&str>,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unknown config schema: {schema} (expected '{}')",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut resolved = ResolvedConfig {
        manifest: manifest_path(&cfg)?,
        ..ResolvedConfig::default()
    };

    if let Some(vendor_dir) = overrides
        .vendor_dir
        .or(cfg.vendor_dir)
        .or_else(|| manifest_vendor_dir.map(str::to_string))
    {
        resolved.vendor_dir = non_empty_path("vendor_dir", vendor_dir)?;
    }

    if let Some(lock_file) = cfg.lock_file {
        resolved.lock_file = non_empty_path("lock_file", lock_file)?;
    }

    if let Some(self_package) = cfg.self_package {
        if self_package.trim().is_empty() {
            anyhow::bail!("self_package must not be empty");
        }
        resolved.self_package = self_package;
    }

    if let Some(output) = overrides.output.or(cfg.output) {
        resolved.output = Some(non_empty_path("output", output)?);
    }

    Ok(resolved)
}

/// Root manifest path from the config, or the default. Needed before full resolution:
/// the manifest itself may supply the vendor dir.
pub fn manifest_path(cfg: &PackageVersionsConfigV1) -> anyhow::Result<Utf8PathBuf> {
    match &cfg.manifest {
        Some(manifest) => non_empty_path("manifest", manifest.clone()),
        None => Ok(Utf8PathBuf::from(ids::DEFAULT_MANIFEST)),
    }
}

fn non_empty_path(key: &str, value: String) -> anyhow::Result<Utf8PathBuf> {
    if value.trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }
    Ok(Utf8PathBuf::from(value))
}
