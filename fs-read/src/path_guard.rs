use std::path::{Component, Path};

use data_error::{ReadError, Result};

/// Returns `true` if any component of `path` is a `..` reference.
///
/// The check is lexical: symlinks are not resolved and the path does not
/// have to exist. `a..b` or `..hidden` are ordinary names and pass.
pub fn references_parent(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::ParentDir))
}

/// Rejects paths that could escape their base directory.
pub fn check(path: &Path) -> Result<()> {
    if references_parent(path) {
        log::warn!("Refusing to read {}: parent reference", path.display());
        return Err(ReadError::InvalidPath(path.to_path_buf()));
    }
    Ok(())
}
