//! gamepack - game release packager
//!
//! Copies game directories from a source folder into a target folder under
//! cleaned-up names, builds each one with `go build`, and writes a
//! `metadata.json` index of what was packaged.

use clap::Parser;
use console::style;

mod cli;
mod common;
mod compile;
mod config;
mod discovery;
mod domain;
mod error;
mod logging;
mod metadata;
mod pipeline;
mod progress;

use cli::Cli;
use config::PipelineConfig;
use error::{GamepackError, Result};
use pipeline::PipelineReport;
use progress::ProgressDisplay;

fn run(cli: &Cli) -> Result<PipelineReport> {
    let cwd = std::env::current_dir().map_err(|e| GamepackError::CurrentDirUnavailable {
        reason: e.to_string(),
    })?;
    let source = pipeline::resolve_path(&cwd, &cli.source);
    let target = pipeline::resolve_path(&cwd, &cli.target);

    let config = PipelineConfig {
        dry_run: cli.dry_run,
        ..PipelineConfig::default()
    };

    let progress = if cli.quiet {
        ProgressDisplay::hidden()
    } else {
        ProgressDisplay::new(0)
    };

    match pipeline::run(&config, &source, &target, &progress) {
        Ok(report) => {
            progress.finish();
            Ok(report)
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}

fn print_summary(report: &PipelineReport) {
    let count = report.games.len();
    let noun = if count == 1 { "game" } else { "games" };

    if report.dry_run {
        println!(
            "{} {count} {noun} into {}",
            style("Would package").yellow().bold(),
            report.target.display()
        );
        for game in &report.games {
            println!("  {} -> {}", game.game.source.display(), game.destination.display());
        }
        return;
    }

    println!(
        "{} {count} {noun} into {}",
        style("Packaged").green().bold(),
        report.target.display()
    );
    println!("  metadata: {}", report.metadata_path.display());
    let failures = report.build_failures();
    if failures > 0 {
        println!(
            "  {}",
            style(format!("{failures} build(s) failed, see log for details")).dim()
        );
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(report) => {
            if !cli.quiet {
                print_summary(&report);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
