//! Progress bar display for packaging runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the discovered games
pub struct ProgressDisplay {
    game_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total game count
    pub fn new(total_games: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let game_pb = ProgressBar::new(total_games);
        game_pb.set_style(style);

        Self { game_pb }
    }

    /// A display that draws nothing (quiet mode, tests)
    pub fn hidden() -> Self {
        Self {
            game_pb: ProgressBar::hidden(),
        }
    }

    pub fn set_total(&self, total_games: u64) {
        self.game_pb.set_length(total_games);
    }

    /// Update to show current game being packaged
    pub fn update_game(&self, game_name: &str, step: &str) {
        self.game_pb.set_message(format!("{step} {game_name}"));
    }

    /// Increment game progress
    pub fn inc_game(&self) {
        self.game_pb.inc(1);
    }

    pub fn finish(&self) {
        self.game_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.game_pb.abandon();
    }
}
