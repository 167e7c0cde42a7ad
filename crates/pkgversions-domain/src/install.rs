//! Where the generated file goes.

use crate::model::PackageDescriptor;
use camino::{Utf8Path, Utf8PathBuf};
use pkgversions_types::ids;

/// Install directory of `self_package`.
///
/// When the project *is* `self_package` (after alias resolution) the package lives at
/// the project root, i.e. the parent of the vendor directory. Otherwise it is installed
/// under `<vendor_dir>/<self_package>`.
pub fn locate_install_path(
    vendor_dir: &Utf8Path,
    root: &PackageDescriptor,
    self_package: &str,
) -> Utf8PathBuf {
    if root.resolve().name == self_package {
        return match vendor_dir.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent.to_path_buf(),
            _ => Utf8PathBuf::from("."),
        };
    }

    vendor_dir.join(self_package)
}

/// Full path of the generated source file below an install directory.
pub fn generated_file_path(install_path: &Utf8Path) -> Utf8PathBuf {
    install_path.join(ids::GENERATED_FILE)
}
