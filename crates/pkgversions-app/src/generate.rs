//! The `generate` use case: collect, render, and hand the module to a sink.

use crate::sink::VersionSink;
use camino::Utf8PathBuf;
use pkgversions_domain::{
    LockSource, PackageDescriptor, VersionMapping, collect, generated_file_path,
    locate_install_path,
};
use pkgversions_render::{RenderableVersions, render_rust_module};

/// Where the generated module is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateTarget {
    /// Dependency install root (absolute, or relative to the working directory).
    pub vendor_dir: Utf8PathBuf,
    /// Package whose install directory hosts the module.
    pub self_package: String,
    /// Explicit target file; bypasses install-path location.
    pub output: Option<Utf8PathBuf>,
}

impl GenerateTarget {
    pub fn path_for(&self, root: &PackageDescriptor) -> Utf8PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => generated_file_path(&locate_install_path(
                &self.vendor_dir,
                root,
                &self.self_package,
            )),
        }
    }
}

/// Output from the generate use case.
#[derive(Clone, Debug)]
pub struct GenerateOutput {
    pub mapping: VersionMapping,
    pub target: Utf8PathBuf,
    pub source_text: String,
}

pub fn to_renderable(mapping: &VersionMapping) -> RenderableVersions {
    mapping
        .iter()
        .map(|(name, identifier)| (name, identifier.as_str()))
        .collect()
}

/// Collect and render without writing anything.
pub fn run_render(source: &dyn LockSource) -> (VersionMapping, String) {
    let mapping: VersionMapping = collect(source.lock_data(), source.root_package()).collect();
    let text = render_rust_module(&to_renderable(&mapping));
    (mapping, text)
}

/// Collect, render, and write the module through `sink` (exactly once).
pub fn run_generate(
    source: &dyn LockSource,
    target: &GenerateTarget,
    sink: &mut dyn VersionSink,
) -> anyhow::Result<GenerateOutput> {
    let (mapping, source_text) = run_render(source);
    let path = target.path_for(source.root_package());
    tracing::debug!(packages = mapping.len(), target = %path, "rendered versions module");

    sink.write(&path, &source_text)?;

    Ok(GenerateOutput {
        mapping,
        target: path,
        source_text,
    })
}
