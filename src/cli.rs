// xcassets-migrate/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "xcassets-migrate",
    version,
    about = "Convert a flat directory of images into an Xcode asset catalog"
)]
pub struct Cli {
    /// Directory holding the flat image files [env: ASSET_SOURCE_DIR]
    pub source: Option<PathBuf>,

    /// Asset catalog to (re)create [env: ASSET_DEST_DIR]
    pub dest: Option<PathBuf>,

    /// Project root used for default paths and the deletion guard
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
