// xcassets-migrate/src/processors/imageset.rs
use super::manifest::{write_manifest, ImagesetManifest, ManifestEntry};
use crate::core::{AssetError, AssetGroup, Result, Scale};
use filetime::FileTime;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Result of building one imageset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesetOutcome {
    pub group: AssetGroup,
    pub imageset_dir: PathBuf,
    /// Scales whose manifest entry carries a filename.
    pub copied: Vec<Scale>,
    /// Scales whose source file existed but could not be copied.
    pub degraded: Vec<Scale>,
}

impl ImagesetOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

pub struct ImagesetBuilder {
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl ImagesetBuilder {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// Creates `<base>.imageset`, copies the variants that exist and writes its manifest.
    ///
    /// Fails only when the directory or the manifest cannot be written. Variants that
    /// are missing or cannot be copied produce entries without a filename.
    pub fn build(&self, group: &AssetGroup, scales: &[Scale]) -> Result<ImagesetOutcome> {
        let imageset_dir = self.dest_dir.join(group.imageset_name());

        std::fs::create_dir_all(&imageset_dir).map_err(|source| AssetError::CreateDir {
            path: imageset_dir.clone(),
            source,
        })?;

        let mut outcome = ImagesetOutcome {
            group: group.clone(),
            imageset_dir: imageset_dir.clone(),
            copied: Vec::new(),
            degraded: Vec::new(),
        };

        let mut images = Vec::with_capacity(scales.len());
        for &scale in scales {
            let variant_name = group.variant_file_name(scale);
            let source_file = self.source_dir.join(&variant_name);

            if !source_file.exists() {
                log::debug!("No {} variant for {}", scale, group);
                images.push(ManifestEntry::new(scale, None));
                continue;
            }

            match copy_preserving_times(&source_file, &imageset_dir.join(&variant_name)) {
                Ok(()) => {
                    outcome.copied.push(scale);
                    images.push(ManifestEntry::new(scale, Some(variant_name)));
                }
                Err(e) => {
                    log::warn!("{}", e);
                    outcome.degraded.push(scale);
                    images.push(ManifestEntry::new(scale, None));
                }
            }
        }

        write_manifest(&imageset_dir, &ImagesetManifest::new(images))?;

        log::info!(
            "Created {} ({} of {} variants)",
            imageset_dir.display(),
            outcome.copied.len(),
            scales.len()
        );

        Ok(outcome)
    }
}

/// Copies file contents and permissions, then carries over access and modification times.
fn copy_preserving_times(from: &Path, to: &Path) -> Result<()> {
    copy_then(from, to, |metadata| {
        filetime::set_file_times(
            to,
            FileTime::from_last_access_time(metadata),
            FileTime::from_last_modification_time(metadata),
        )
    })
}

/// Copies `from` to `to` and runs `finish` on the copy.
///
/// If `finish` fails the copy is removed, so the imageset only holds listed files.
fn copy_then<F>(from: &Path, to: &Path, finish: F) -> Result<()>
where
    F: FnOnce(&Metadata) -> std::io::Result<()>,
{
    let to_error = |source| AssetError::CopyFailed {
        path: from.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(from).map_err(to_error)?;
    std::fs::copy(from, to).map_err(to_error)?;

    if let Err(e) = finish(&metadata) {
        if let Err(cleanup) = std::fs::remove_file(to) {
            log::warn!("Failed to remove partial copy '{}': {}", to.display(), cleanup);
        }
        return Err(to_error(e));
    }

    log::debug!("Copied {} -> {}", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::manifest::MANIFEST_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _root: TempDir,
        source: PathBuf,
        dest: PathBuf,
    }

    fn fixture(files: &[&str]) -> Fixture {
        let root = TempDir::new().unwrap();
        let source = root.path().join("src");
        let dest = root.path().join("dest");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();
        for name in files {
            fs::write(source.join(name), name.as_bytes()).unwrap();
        }
        Fixture {
            _root: root,
            source,
            dest,
        }
    }

    fn read_manifest(dir: &Path) -> ImagesetManifest {
        let json = fs::read_to_string(dir.join(MANIFEST_FILE_NAME)).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_build_with_all_variants() {
        let fx = fixture(&["x.png", "x@2x.png", "x@3x.png"]);
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("x", ".png"), &Scale::ALL)
            .unwrap();

        assert_eq!(outcome.copied, Scale::ALL.to_vec());
        assert!(!outcome.is_degraded());

        let manifest = read_manifest(&outcome.imageset_dir);
        let filenames: Vec<Option<&str>> = manifest
            .images
            .iter()
            .map(|e| e.filename.as_deref())
            .collect();
        assert_eq!(
            filenames,
            vec![Some("x.png"), Some("x@2x.png"), Some("x@3x.png")]
        );
        assert_eq!(
            fs::read(outcome.imageset_dir.join("x@2x.png")).unwrap(),
            b"x@2x.png"
        );
    }

    #[test]
    fn test_missing_variants_have_no_filename() {
        let fx = fixture(&["y.jpg"]);
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("y", ".jpg"), &Scale::ALL)
            .unwrap();

        let manifest = read_manifest(&outcome.imageset_dir);
        assert_eq!(manifest.images.len(), 3);
        assert_eq!(manifest.images[0].filename.as_deref(), Some("y.jpg"));
        assert_eq!(manifest.images[1].scale, "2x");
        assert_eq!(manifest.images[1].filename, None);
        assert_eq!(manifest.images[2].scale, "3x");
        assert_eq!(manifest.images[2].filename, None);
        assert!(!outcome.is_degraded());
    }

    #[test]
    fn test_only_scaled_variant_present() {
        let fx = fixture(&["z@3x.png"]);
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("z", ".png"), &Scale::ALL)
            .unwrap();

        assert_eq!(outcome.copied, vec![Scale::Three]);
        let entries: Vec<_> = fs::read_dir(&outcome.imageset_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_uncopyable_variant_degrades_entry() {
        let fx = fixture(&["x.png", "x@3x.png"]);
        // A directory can be found by name but not copied as a file.
        fs::create_dir(fx.source.join("x@2x.png")).unwrap();
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("x", ".png"), &Scale::ALL)
            .unwrap();

        assert_eq!(outcome.degraded, vec![Scale::Two]);
        assert_eq!(outcome.copied, vec![Scale::One, Scale::Three]);

        let manifest = read_manifest(&outcome.imageset_dir);
        assert_eq!(manifest.images[1].filename, None);
        assert_eq!(manifest.images[2].filename.as_deref(), Some("x@3x.png"));
    }

    #[test]
    fn test_imageset_directory_failure_is_error() {
        let fx = fixture(&["x.png"]);
        fs::write(fx.dest.join("x.imageset"), b"in the way").unwrap();
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let err = builder
            .build(&AssetGroup::new("x", ".png"), &Scale::ALL)
            .unwrap_err();

        assert!(matches!(err, AssetError::CreateDir { .. }));
    }

    #[test]
    fn test_manifest_failure_is_error() {
        let fx = fixture(&["x.png"]);
        fs::create_dir_all(fx.dest.join("x.imageset").join(MANIFEST_FILE_NAME)).unwrap();
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let err = builder
            .build(&AssetGroup::new("x", ".png"), &Scale::ALL)
            .unwrap_err();

        assert!(matches!(err, AssetError::WriteManifest { .. }));
    }

    #[test]
    fn test_copy_keeps_modification_time() {
        let fx = fixture(&["t.png"]);
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("t", ".png"), &[Scale::One])
            .unwrap();

        let original = fs::metadata(fx.source.join("t.png")).unwrap().modified().unwrap();
        let copied = fs::metadata(outcome.imageset_dir.join("t.png"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(original, copied);
    }

    #[test]
    fn test_failed_finish_removes_copy() {
        let fx = fixture(&["p.png"]);
        let target = fx.dest.join("p.png");

        let err = copy_then(&fx.source.join("p.png"), &target, |_| {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
        })
        .unwrap_err();

        assert!(matches!(err, AssetError::CopyFailed { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_read_only_source_copies_cleanly() {
        let fx = fixture(&["r.png"]);
        let source_file = fx.source.join("r.png");
        let mut permissions = fs::metadata(&source_file).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&source_file, permissions).unwrap();
        let builder = ImagesetBuilder::new(&fx.source, &fx.dest);

        let outcome = builder
            .build(&AssetGroup::new("r", ".png"), &Scale::ALL)
            .unwrap();

        assert_eq!(outcome.copied, vec![Scale::One]);
        assert!(!outcome.is_degraded());
        let copied = outcome.imageset_dir.join("r.png");
        assert!(fs::metadata(&copied).unwrap().permissions().readonly());
        assert_eq!(
            fs::metadata(&source_file).unwrap().modified().unwrap(),
            fs::metadata(&copied).unwrap().modified().unwrap()
        );
    }
}
