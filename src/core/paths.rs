// xcassets-migrate/src/core/paths.rs
use std::path::{Path, PathBuf};

pub const SOURCE_DIR_ENV: &str = "ASSET_SOURCE_DIR";
pub const DEST_DIR_ENV: &str = "ASSET_DEST_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
}

/// Resolves source and destination directories for one run.
///
/// Precedence: explicit argument, then environment variable, then the
/// default layout under the project root. Nothing is validated here.
#[derive(Debug, Clone)]
pub struct PathResolver {
    project_root: PathBuf,
}

impl PathResolver {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn default_source(&self) -> PathBuf {
        self.app_dir().join("Assets")
    }

    pub fn default_dest(&self) -> PathBuf {
        self.app_dir().join("Assets.xcassets")
    }

    /// Directory the destination must live under before it can be deleted.
    pub fn expected_parent(&self) -> PathBuf {
        self.project_root.join("Sources")
    }

    pub fn resolve(&self, source_arg: Option<PathBuf>, dest_arg: Option<PathBuf>) -> AssetPaths {
        self.resolve_with(source_arg, dest_arg, |key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(
        &self,
        source_arg: Option<PathBuf>,
        dest_arg: Option<PathBuf>,
        lookup: F,
    ) -> AssetPaths
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        let source_dir = source_arg
            .or_else(|| from_env(SOURCE_DIR_ENV))
            .unwrap_or_else(|| self.default_source());
        let dest_dir = dest_arg
            .or_else(|| from_env(DEST_DIR_ENV))
            .unwrap_or_else(|| self.default_dest());

        log::debug!(
            "Resolved paths: source={}, dest={}",
            source_dir.display(),
            dest_dir.display()
        );

        AssetPaths {
            source_dir,
            dest_dir,
        }
    }

    fn app_dir(&self) -> PathBuf {
        self.project_root.join("Sources").join("ClaudeUsagePro")
    }
}
