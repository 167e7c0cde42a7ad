//! Stable identifiers, default names and generated-file locations.

/// Package whose install directory hosts the generated file.
pub const SELF_PACKAGE_NAME: &str = "ocramius/package-versions";

/// Name given to a root manifest that does not declare one.
pub const DEFAULT_ROOT_NAME: &str = "__root__";

/// Version given to a root package whose version cannot be determined.
pub const DEFAULT_ROOT_VERSION: &str = "1.0.0+no-version-set";

pub const DEFAULT_VENDOR_DIR: &str = "vendor";
pub const DEFAULT_LOCK_FILE: &str = "composer.lock";
pub const DEFAULT_MANIFEST: &str = "composer.json";
pub const DEFAULT_CONFIG_FILE: &str = "package-versions.toml";

/// Generated file, relative to the install path of [`SELF_PACKAGE_NAME`].
pub const GENERATED_FILE: &str = "src/package_versions/versions.rs";

/// Unix permissions of the generated file (`rw-rw-r--`).
pub const GENERATED_FILE_MODE: u32 = 0o664;

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "package-versions.config.v1";

// Lifecycle events
pub const EVENT_POST_INSTALL_CMD: &str = "post-install-cmd";
pub const EVENT_POST_UPDATE_CMD: &str = "post-update-cmd";
