// xcassets-migrate/src/processors/cleaner.rs
use crate::core::{AssetError, Result};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

/// Removes a directory tree only after it passes the safety gate.
///
/// A missing path is not an error. Any refusal is.
pub fn guarded_remove(path: &Path, expected_parent: &Path) -> Result<()> {
    if !path.exists() {
        log::debug!("Nothing to remove at {}", path.display());
        return Ok(());
    }

    let resolved = validate_removal(path, expected_parent)?;

    log::info!("Removing existing destination: {}", resolved.display());
    std::fs::remove_dir_all(path).map_err(|source| AssetError::RemoveFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Canonicalizes `path` and checks it is neither a root nor outside `expected_parent`.
pub fn validate_removal(path: &Path, expected_parent: &Path) -> Result<PathBuf> {
    let resolved = std::fs::canonicalize(path).map_err(|source| AssetError::UnresolvedPath {
        path: path.to_path_buf(),
        source,
    })?;

    if is_root_or_empty(&resolved) {
        return Err(AssetError::UnsafeDelete(path.to_path_buf()));
    }

    let parent = std::fs::canonicalize(expected_parent).map_err(|source| {
        AssetError::UnresolvedPath {
            path: expected_parent.to_path_buf(),
            source,
        }
    })?;

    if !resolved.starts_with(&parent) {
        return Err(AssetError::OutsideParent {
            path: path.to_path_buf(),
            parent: expected_parent.to_path_buf(),
        });
    }

    Ok(resolved)
}

fn is_root_or_empty(path: &Path) -> bool {
    let raw = path.as_os_str();
    raw.is_empty() || raw == MAIN_SEPARATOR_STR || path.parent().is_none()
}
