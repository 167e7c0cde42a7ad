/// The project itself, as described by its root manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootPackage {
    pub name: String,
    pub version: String,
    /// Commit the project is checked out at; empty when unknown.
    pub source_reference: String,
}

/// A package standing in for another one under a different version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasPackage {
    pub name: String,
    pub version: String,
    pub alias_of: Box<PackageDescriptor>,
}

/// The root descriptor handed over by the package manager: the real root package,
/// possibly wrapped in any number of alias layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackageDescriptor {
    Root(RootPackage),
    Alias(AliasPackage),
}

impl RootPackage {
    pub fn new<N, V, R>(name: N, version: V, source_reference: R) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.into(),
            version: version.into(),
            source_reference: source_reference.into(),
        }
    }
}

impl PackageDescriptor {
    /// Wrap `self` in one more alias layer.
    pub fn aliased_as<N: Into<String>, V: Into<String>>(self, name: N, version: V) -> Self {
        PackageDescriptor::Alias(AliasPackage {
            name: name.into(),
            version: version.into(),
            alias_of: Box::new(self),
        })
    }

    /// Follow the alias chain down to the real package.
    pub fn resolve(&self) -> &RootPackage {
        let mut package = self;
        loop {
            match package {
                PackageDescriptor::Root(root) => return root,
                PackageDescriptor::Alias(alias) => package = &alias.alias_of,
            }
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, PackageDescriptor::Alias(_))
    }

    /// Name as declared on the outermost layer.
    pub fn name(&self) -> &str {
        match self {
            PackageDescriptor::Root(root) => &root.name,
            PackageDescriptor::Alias(alias) => &alias.name,
        }
    }

    /// Version as declared on the outermost layer.
    pub fn version(&self) -> &str {
        match self {
            PackageDescriptor::Root(root) => &root.version,
            PackageDescriptor::Alias(alias) => &alias.version,
        }
    }

    /// Source reference of the real package; alias layers carry none of their own.
    pub fn source_reference(&self) -> &str {
        &self.resolve().source_reference
    }
}

impl From<RootPackage> for PackageDescriptor {
    fn from(value: RootPackage) -> Self {
        PackageDescriptor::Root(value)
    }
}
