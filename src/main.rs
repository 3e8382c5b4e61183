use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;
use xcassets_migrate::{Cli, MigrateConfig, MigrationReport, Migrator, PathResolver};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(cli) {
        Ok(0) => {
            println!("Migration complete");
            ExitCode::SUCCESS
        }
        Ok(status) => {
            println!("Migration completed with errors");
            ExitCode::from(status)
        }
        Err(e) => {
            log::error!("{:#}", e);
            println!("Migration completed with errors");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    let resolver = PathResolver::new(project_root);
    let paths = resolver.resolve(cli.source, cli.dest);

    println!("Source: {}", paths.source_dir.display());
    println!("Destination: {}", paths.dest_dir.display());

    let config = MigrateConfig::new(paths.source_dir, paths.dest_dir, resolver.expected_parent())
        .with_progress(!cli.quiet);

    let report = Migrator::new(config).migrate()?;
    print_summary(&report);

    Ok(report.exit_status())
}

fn print_summary(report: &MigrationReport) {
    println!("Wrote {} imagesets", report.imagesets.len());

    for outcome in report.degraded() {
        let scales: Vec<&str> = outcome.degraded.iter().map(|s| s.as_str()).collect();
        println!(
            "Incomplete: {} (could not copy {})",
            outcome.group,
            scales.join(", ")
        );
    }

    for (group, reason) in &report.failures {
        println!("Failed: {} ({})", group, reason);
    }
}
