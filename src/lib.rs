mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use crate::core::migrator::{MigrationReport, Migrator};
pub use crate::core::paths::{AssetPaths, PathResolver, DEST_DIR_ENV, SOURCE_DIR_ENV};
pub use crate::core::{AssetError, AssetGroup, MigrateConfig, Result, Scale};
pub use processors::{
    guarded_remove, validate_removal, write_manifest, CatalogManifest, ImagesetBuilder,
    ImagesetManifest, ImagesetOutcome, ManifestEntry, ManifestInfo, SourceScanner,
    MANIFEST_FILE_NAME,
};
pub use utils::{group_for_path, is_supported_format, strip_scale_suffix, IMAGE_EXTENSIONS};

pub mod prelude {
    pub use crate::{
        AssetGroup, ImagesetBuilder, MigrateConfig, Migrator, PathResolver, Scale, SourceScanner,
    };
}
