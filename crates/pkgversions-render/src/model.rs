#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEntry {
    pub package_name: String,
    pub identifier: String,
}

/// Entries in the order they are embedded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderableVersions {
    pub entries: Vec<RenderableEntry>,
}

impl RenderableVersions {
    pub fn push<N: Into<String>, I: Into<String>>(&mut self, package_name: N, identifier: I) {
        self.entries.push(RenderableEntry {
            package_name: package_name.into(),
            identifier: identifier.into(),
        });
    }
}

impl<N: Into<String>, I: Into<String>> FromIterator<(N, I)> for RenderableVersions {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut out = RenderableVersions::default();
        for (package_name, identifier) in iter {
            out.push(package_name, identifier);
        }
        out
    }
}
