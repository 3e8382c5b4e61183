// xcassets-migrate/src/core/mod.rs
pub mod migrator;
pub mod paths;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Scale variant of a logical image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scale {
    One,
    Two,
    Three,
}

impl Scale {
    pub const ALL: [Scale; 3] = [Scale::One, Scale::Two, Scale::Three];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::One => "1x",
            Scale::Two => "2x",
            Scale::Three => "3x",
        }
    }

    /// Filename suffix inserted between the base name and the extension.
    pub fn suffix(&self) -> &'static str {
        match self {
            Scale::One => "",
            Scale::Two => "@2x",
            Scale::Three => "@3x",
        }
    }

    /// Expected file name of this variant, e.g. `logo@2x.png`.
    pub fn file_name(&self, base_name: &str, extension: &str) -> String {
        format!("{}{}{}", base_name, self.suffix(), extension)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical image discovered in the source directory.
///
/// The extension keeps its leading dot and on-disk case. Field order drives
/// the derived ordering, which is the processing order of a migration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetGroup {
    pub base_name: String,
    pub extension: String,
}

impl AssetGroup {
    pub fn new(base_name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            extension: extension.into(),
        }
    }

    pub fn imageset_name(&self) -> String {
        format!("{}.imageset", self.base_name)
    }

    pub fn variant_file_name(&self, scale: Scale) -> String {
        scale.file_name(&self.base_name, &self.extension)
    }
}

impl fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_name, self.extension)
    }
}

#[derive(Debug, Clone)]
pub struct MigrateConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// The destination may only be deleted when it lives under this directory.
    pub expected_parent: PathBuf,
    pub scales: Vec<Scale>,
    pub show_progress: bool,
}

impl MigrateConfig {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
        expected_parent: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            expected_parent: expected_parent.into(),
            scales: Scale::ALL.to_vec(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source directory does not exist: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error(
        "Destination '{}' contains source directory '{}'",
        .dest.display(),
        .source_dir.display()
    )]
    DestinationContainsSource { dest: PathBuf, source_dir: PathBuf },

    #[error("Refusing to delete root/empty path: {}", .0.display())]
    UnsafeDelete(PathBuf),

    #[error("Path '{}' is not inside expected parent '{}'", .path.display(), .parent.display())]
    OutsideParent { path: PathBuf, parent: PathBuf },

    #[error("Path validation failed for '{}': {source}", .path.display())]
    UnresolvedPath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove '{}': {source}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    WriteManifest {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list source directory '{}': {source}", .path.display())]
    ListSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy '{}': {source}", .path.display())]
    CopyFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
