// xcassets-migrate/src/processors/scanner.rs
use crate::core::{AssetError, AssetGroup, Result};
use crate::utils::group_for_path;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Lists the top level of a source directory and groups image files by base name.
pub struct SourceScanner;

impl SourceScanner {
    pub fn new() -> Self {
        Self
    }

    /// Returns the unique groups in processing order.
    pub fn scan(&self, source_dir: &Path) -> Result<Vec<AssetGroup>> {
        let walker = WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut groups = BTreeSet::new();

        for entry in walker {
            let entry = entry.map_err(|e| AssetError::ListSource {
                path: source_dir.to_path_buf(),
                source: e.into(),
            })?;

            if !Self::is_regular_file(&entry) {
                log::debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            match group_for_path(entry.path()) {
                Some(group) => {
                    groups.insert(group);
                }
                None => log::debug!("Skipping non-image file: {}", entry.path().display()),
            }
        }

        Ok(groups.into_iter().collect())
    }

    fn is_regular_file(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}
