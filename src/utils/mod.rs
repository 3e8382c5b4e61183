// xcassets-migrate/src/utils/mod.rs
use crate::core::AssetGroup;
use std::path::Path;

pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

const SCALE_SUFFIXES: [&str; 2] = ["@2x", "@3x"];

pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Removes one trailing `@2x` or `@3x` from a file stem.
pub fn strip_scale_suffix(stem: &str) -> &str {
    SCALE_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
        .unwrap_or(stem)
}

/// Maps an image file name to the group it belongs to.
///
/// Returns `None` for names that are not UTF-8 or have no supported extension.
pub fn group_for_path(path: &Path) -> Option<AssetGroup> {
    if !is_supported_format(path) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let extension = path.extension()?.to_str()?;

    Some(AssetGroup::new(
        strip_scale_suffix(stem),
        format!(".{}", extension),
    ))
}
