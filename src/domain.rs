//! Records passed between pipeline stages

use std::path::PathBuf;

use serde::Serialize;

/// A discovered game directory paired with its output name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDir {
    /// Absolute path of the directory under the source root
    pub source: PathBuf,
    /// Directory name with the game suffix removed
    pub name: String,
}

/// Contents of `metadata.json`
///
/// Only constructible from the name list, so `number_of_games` always equals
/// `game_names.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    game_names: Vec<String>,
    number_of_games: usize,
}

impl Metadata {
    pub fn new(game_names: Vec<String>) -> Self {
        let number_of_games = game_names.len();
        Self {
            game_names,
            number_of_games,
        }
    }

    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a GameDir>) -> Self {
        Self::new(games.into_iter().map(|g| g.name.clone()).collect())
    }

    pub fn game_names(&self) -> &[String] {
        &self.game_names
    }

    pub fn number_of_games(&self) -> usize {
        self.number_of_games
    }
}
