// xcassets-migrate/src/processors/manifest.rs
use crate::core::{AssetError, Result, Scale};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "Contents.json";

const IDIOM_UNIVERSAL: &str = "universal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub idiom: String,
    pub scale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ManifestEntry {
    pub fn new(scale: Scale, filename: Option<String>) -> Self {
        Self {
            idiom: IDIOM_UNIVERSAL.to_string(),
            scale: scale.as_str().to_string(),
            filename,
        }
    }
}

/// Top-level `Contents.json` of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub info: ManifestInfo,
}

/// `Contents.json` of a single imageset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesetManifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

impl ImagesetManifest {
    pub fn new(images: Vec<ManifestEntry>) -> Self {
        Self {
            images,
            info: ManifestInfo::default(),
        }
    }
}

/// Writes `manifest` as two-space indented JSON to `dir/Contents.json`.
pub fn write_manifest<T: Serialize>(dir: &Path, manifest: &T) -> Result<()> {
    let path = dir.join(MANIFEST_FILE_NAME);

    let write = || -> std::io::Result<()> {
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, manifest).map_err(std::io::Error::from)?;
        writer.flush()
    };

    write().map_err(|source| AssetError::WriteManifest {
        path: path.clone(),
        source,
    })?;

    log::debug!("Wrote manifest: {}", path.display());
    Ok(())
}
