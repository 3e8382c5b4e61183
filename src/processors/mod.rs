// xcassets-migrate/src/processors/mod.rs
mod cleaner;
mod imageset;
mod manifest;
mod scanner;

pub use cleaner::{guarded_remove, validate_removal};
pub use imageset::{ImagesetBuilder, ImagesetOutcome};
pub use manifest::{
    write_manifest, CatalogManifest, ImagesetManifest, ManifestEntry, ManifestInfo,
    MANIFEST_FILE_NAME,
};
pub use scanner::SourceScanner;

