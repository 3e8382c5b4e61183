// xcassets-migrate/src/core/migrator.rs
use super::{AssetError, AssetGroup, MigrateConfig, Result};
use crate::processors::{
    guarded_remove, write_manifest, CatalogManifest, ImagesetBuilder, ImagesetOutcome,
    SourceScanner,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Imagesets written, in processing order.
    pub imagesets: Vec<ImagesetOutcome>,
    /// Groups whose imageset could not be written, with the reason.
    pub failures: Vec<(AssetGroup, String)>,
}

impl MigrationReport {
    /// True when every group was written. Degraded variants do not count as failures.
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn degraded(&self) -> impl Iterator<Item = &ImagesetOutcome> {
        self.imagesets.iter().filter(|outcome| outcome.is_degraded())
    }

    pub fn has_degraded(&self) -> bool {
        self.degraded().next().is_some()
    }

    /// True when nothing failed and every present variant was copied.
    pub fn is_clean(&self) -> bool {
        self.succeeded() && !self.has_degraded()
    }

    /// Process exit status: 0 for a clean run, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

pub struct Migrator {
    config: MigrateConfig,
    scanner: SourceScanner,
}

impl Migrator {
    pub fn new(config: MigrateConfig) -> Self {
        Self {
            config,
            scanner: SourceScanner::new(),
        }
    }

    pub fn config(&self) -> &MigrateConfig {
        &self.config
    }

    /// Rebuilds the destination catalog from the source directory.
    ///
    /// Returns `Err` when the run had to abort before processing groups. Failures of
    /// individual groups are collected in the report and do not stop the run.
    pub fn migrate(&self) -> Result<MigrationReport> {
        let source_dir = self.config.source_dir.as_path();
        let dest_dir = self.config.dest_dir.as_path();

        self.validate_source(source_dir)?;
        self.validate_destination(source_dir, dest_dir)?;

        guarded_remove(dest_dir, &self.config.expected_parent)?;

        std::fs::create_dir_all(dest_dir).map_err(|source| AssetError::CreateDir {
            path: dest_dir.to_path_buf(),
            source,
        })?;
        write_manifest(dest_dir, &CatalogManifest::default())?;

        let groups = self.scanner.scan(source_dir)?;

        if groups.is_empty() {
            log::warn!("No image files found in {}", source_dir.display());
            return Ok(MigrationReport::default());
        }

        log::info!(
            "Migrating {} images from {}",
            groups.len(),
            source_dir.display()
        );

        let builder = ImagesetBuilder::new(source_dir, dest_dir);
        let pb = self.create_progress_bar(groups.len());
        let mut report = MigrationReport::default();

        for group in groups {
            pb.set_message(group.to_string());

            match builder.build(&group, &self.config.scales) {
                Ok(outcome) => report.imagesets.push(outcome),
                Err(e) => {
                    log::warn!("Failed to create imageset for '{}': {}", group, e);
                    report.failures.push((group, e.to_string()));
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "Wrote {} imagesets ({} failed)",
            report.imagesets.len(),
            report.failures.len()
        ));

        Ok(report)
    }

    fn validate_source(&self, source_dir: &Path) -> Result<()> {
        if !source_dir.exists() {
            return Err(AssetError::MissingSource(source_dir.to_path_buf()));
        }

        if !source_dir.is_dir() {
            return Err(AssetError::SourceNotDirectory(source_dir.to_path_buf()));
        }

        Ok(())
    }

    /// Refuses a destination whose removal would also delete the source images.
    fn validate_destination(&self, source_dir: &Path, dest_dir: &Path) -> Result<()> {
        if !dest_dir.exists() {
            return Ok(());
        }

        let resolved_source = std::fs::canonicalize(source_dir)?;
        let resolved_dest = std::fs::canonicalize(dest_dir)?;

        if resolved_source.starts_with(&resolved_dest) {
            return Err(AssetError::DestinationContainsSource {
                dest: dest_dir.to_path_buf(),
                source_dir: source_dir.to_path_buf(),
            });
        }

        Ok(())
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
