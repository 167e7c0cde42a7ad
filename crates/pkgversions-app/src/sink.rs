//! Persistence of the rendered module.

use anyhow::Context;
use camino::Utf8Path;
use pkgversions_types::ids;
use std::io::Write;

/// Receives the finished source text exactly once per run.
pub trait VersionSink {
    fn write(&mut self, path: &Utf8Path, text: &str) -> anyhow::Result<()>;
}

/// Writes to the filesystem.
///
/// The text goes to a temporary file next to the target which is then renamed over it, so
/// the target is either fully replaced or left untouched. On Unix the file ends up with
/// mode `0664`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsSink;

impl VersionSink for FsSink {
    fn write(&mut self, path: &Utf8Path, text: &str) -> anyhow::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        std::fs::create_dir_all(dir).with_context(|| format!("create directory: {}", dir))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temporary file in {}", dir))?;
        tmp.write_all(text.as_bytes())
            .with_context(|| format!("write temporary file for {}", path))?;
        set_mode(tmp.as_file(), ids::GENERATED_FILE_MODE)
            .with_context(|| format!("set permissions for {}", path))?;
        tmp.persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("write {}", path))?;
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &std::fs::File, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
