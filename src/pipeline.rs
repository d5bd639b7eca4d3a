//! Packaging pipeline
//!
//! The run is a fixed sequence:
//! 1. Discover game directories under the source root
//! 2. Derive output names
//! 3. Ensure the target root exists
//! 4. For each game, in discovery order: copy it to the target, then build it
//! 5. Write `metadata.json`
//!
//! Filesystem failures abort the run. Build failures are logged and ignored.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::fs::{copy_and_overwrite, ensure_dir};
use crate::compile::{BuildOutcome, compile_game};
use crate::config::PipelineConfig;
use crate::discovery::{find_game_dirs, pair_with_names};
use crate::domain::{GameDir, Metadata};
use crate::error::Result;
use crate::metadata::write_metadata;
use crate::progress::ProgressDisplay;

/// What happened to one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub game: GameDir,
    pub destination: PathBuf,
    pub build: BuildOutcome,
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub target: PathBuf,
    pub metadata_path: PathBuf,
    pub games: Vec<GameReport>,
    pub dry_run: bool,
}

impl PipelineReport {
    pub fn build_failures(&self) -> usize {
        self.games.iter().filter(|g| g.build.is_failure()).count()
    }
}

/// Resolve `path` against `base`. Absolute paths are returned unchanged.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    base.join(path)
}

/// Run the pipeline from `source` into `target`; both must already be absolute.
pub fn run(
    config: &PipelineConfig,
    source: &Path,
    target: &Path,
    progress: &ProgressDisplay,
) -> Result<PipelineReport> {
    let game_paths = find_game_dirs(source, &config.dir_pattern);
    let games = pair_with_names(game_paths, &config.name_suffix);
    info!(count = games.len(), source = %source.display(), "discovered game directories");

    let metadata_path = target.join(&config.metadata_file_name);
    progress.set_total(games.len() as u64);

    if config.dry_run {
        return Ok(plan(games, target, metadata_path));
    }

    ensure_dir(target)?;

    let mut reports = Vec::with_capacity(games.len());
    for game in games {
        if game.name.is_empty() {
            warn!(source = %game.source.display(), "derived name is empty, copying onto the target root");
        }
        let destination = target.join(&game.name);

        progress.update_game(&game.name, "copying");
        copy_and_overwrite(&game.source, &destination)?;

        progress.update_game(&game.name, "building");
        let build = compile_game(
            &destination,
            &config.code_extension,
            &config.compile_command,
        );
        log_build(&game, &build);

        progress.inc_game();
        reports.push(GameReport {
            game,
            destination,
            build,
        });
    }

    let metadata = Metadata::from_games(reports.iter().map(|r| &r.game));
    write_metadata(&metadata_path, &metadata)?;
    info!(
        path = %metadata_path.display(),
        games = metadata.number_of_games(),
        "wrote metadata"
    );
    debug!(names = ?metadata.game_names(), "packaged games");

    Ok(PipelineReport {
        target: target.to_path_buf(),
        metadata_path,
        games: reports,
        dry_run: false,
    })
}

fn plan(games: Vec<GameDir>, target: &Path, metadata_path: PathBuf) -> PipelineReport {
    let reports = games
        .into_iter()
        .map(|game| {
            let destination = target.join(&game.name);
            info!(
                source = %game.source.display(),
                dest = %destination.display(),
                "would copy and build"
            );
            GameReport {
                game,
                destination,
                build: BuildOutcome::Skipped,
            }
        })
        .collect();

    info!(path = %metadata_path.display(), "would write metadata");
    PipelineReport {
        target: target.to_path_buf(),
        metadata_path,
        games: reports,
        dry_run: true,
    }
}

fn log_build(game: &GameDir, outcome: &BuildOutcome) {
    match outcome {
        BuildOutcome::Skipped | BuildOutcome::Succeeded => {
            debug!(game = %game.name, outcome = %outcome, "build step done");
        }
        BuildOutcome::Failed { .. } | BuildOutcome::ToolNotFound => {
            warn!(game = %game.name, outcome = %outcome, "build failed, continuing");
        }
    }
}
