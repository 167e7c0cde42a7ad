use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `package-versions.toml` schema v1.
///
/// Every key is optional; paths are relative to the project root unless absolute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PackageVersionsConfigV1 {
    /// Optional schema string for tooling (`package-versions.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Dependency install root. Falls back to `config.vendor-dir` in the root manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_dir: Option<String>,

    /// Lock file written by the package manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_file: Option<String>,

    /// Root manifest of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Package whose install directory receives the generated file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_package: Option<String>,

    /// Write the generated file here instead of the located install path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}
