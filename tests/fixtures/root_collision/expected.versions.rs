//! Installed package versions.
//!
//! Generated by package-versions after `composer install` or `composer update`.
//! This file is overwritten on every run: do not edit it by hand.

use std::fmt;

/// A package name that is not part of [`Versions::VERSIONS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageNotInstalled {
    package_name: String,
}

impl PackageNotInstalled {
    /// Name of the package that was looked up.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

impl fmt::Display for PackageNotInstalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Required package \"{}\" is not installed: cannot detect its version",
            self.package_name
        )
    }
}

impl std::error::Error for PackageNotInstalled {}

/// Versions of the installed packages. Has no values; use the associated functions.
pub enum Versions {}

impl Versions {
    /// Package name -> `<version>@<reference>`, in lock order.
    pub const VERSIONS: &'static [(&'static str, &'static str)] = &[
        ("acme/app", "9.9.9@deadbeef"),
        ("psr/log", "3.0.0@fe5ea303b0887d5caefd3d431c3e61ad47037001"),
    ];

    /// The `<version>@<reference>` identifier of an installed package.
    pub fn get_version(package_name: &str) -> Result<&'static str, PackageNotInstalled> {
        Self::VERSIONS
            .iter()
            .find(|(name, _)| *name == package_name)
            .map(|(_, version)| *version)
            .ok_or_else(|| PackageNotInstalled {
                package_name: package_name.to_string(),
            })
    }

    /// The declared version of an installed package, without its reference.
    pub fn get_composer_version(
        package_name: &str,
    ) -> Result<&'static str, PackageNotInstalled> {
        let version = Self::get_version(package_name)?;
        Ok(version.split_once('@').map_or(version, |(version, _)| version))
    }
}
