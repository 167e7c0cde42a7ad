use serde::{Deserialize, Serialize};

/// The subset of a `composer.lock` document that version collection reads.
///
/// Every other key is ignored. Both package lists tolerate being absent or `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<LockedPackage>>,

    #[serde(
        rename = "packages-dev",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub packages_dev: Option<Vec<LockedPackage>>,
}

impl LockData {
    pub fn new(packages: Vec<LockedPackage>, packages_dev: Vec<LockedPackage>) -> Self {
        Self {
            packages: Some(packages),
            packages_dev: Some(packages_dev),
        }
    }

    /// Production packages in lock order.
    pub fn packages(&self) -> &[LockedPackage] {
        self.packages.as_deref().unwrap_or_default()
    }

    /// Development packages in lock order.
    pub fn packages_dev(&self) -> &[LockedPackage] {
        self.packages_dev.as_deref().unwrap_or_default()
    }
}

/// One installed package record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PackageReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<PackageReference>,
}

/// A `source` or `dist` block; only its `reference` matters here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl PackageReference {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self {
            reference: Some(reference.into()),
        }
    }
}

impl LockedPackage {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source: None,
            dist: None,
        }
    }

    pub fn with_source_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.source = Some(PackageReference::new(reference));
        self
    }

    pub fn with_dist_reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.dist = Some(PackageReference::new(reference));
        self
    }

    /// The installed revision: the source reference, else the dist reference, else `""`.
    ///
    /// A present-but-empty source reference still wins over the dist reference.
    pub fn reference(&self) -> &str {
        self.source
            .as_ref()
            .and_then(|s| s.reference.as_deref())
            .or_else(|| self.dist.as_ref().and_then(|d| d.reference.as_deref()))
            .unwrap_or("")
    }
}
