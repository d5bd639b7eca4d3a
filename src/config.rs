//! Pipeline settings
//!
//! gamepack reads no config file. The constants below are the whole
//! configuration; [`PipelineConfig`] exists so tests can substitute a
//! stand-in build command.

/// Substring (case-insensitive) that marks a directory as a game
pub const GAME_DIR_PATTERN: &str = "game";

/// Removed from a game directory's name to form its output name
pub const GAME_NAME_SUFFIX: &str = "_game";

/// Extension of the source file handed to the build command
pub const GAME_CODE_EXTENSION: &str = ".go";

/// Build program followed by its fixed arguments
pub const GAME_COMPILE_COMMAND: &[&str] = &["go", "build"];

/// Name of the index written at the target root
pub const METADATA_FILE_NAME: &str = "metadata.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub dir_pattern: String,
    pub name_suffix: String,
    pub code_extension: String,
    /// Program and leading arguments; the discovered file name is appended
    pub compile_command: Vec<String>,
    pub metadata_file_name: String,
    /// Plan only: discover and log, write nothing, spawn nothing
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dir_pattern: GAME_DIR_PATTERN.to_string(),
            name_suffix: GAME_NAME_SUFFIX.to_string(),
            code_extension: GAME_CODE_EXTENSION.to_string(),
            compile_command: GAME_COMPILE_COMMAND
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            metadata_file_name: METADATA_FILE_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl PipelineConfig {
    /// Replace the build command, keeping every other setting
    #[cfg(test)]
    pub fn with_compile_command(mut self, command: &[&str]) -> Self {
        self.compile_command = command.iter().map(|s| (*s).to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_go_build() {
        let config = PipelineConfig::default();
        assert_eq!(config.compile_command, vec!["go", "build"]);
        assert_eq!(config.code_extension, ".go");
        assert_eq!(config.metadata_file_name, "metadata.json");
        assert!(!config.dry_run);
    }

    #[test]
    fn test_with_compile_command_keeps_other_fields() {
        let config = PipelineConfig::default().with_compile_command(&["true"]);
        assert_eq!(config.compile_command, vec!["true"]);
        assert_eq!(config.dir_pattern, "game");
        assert_eq!(config.name_suffix, "_game");
    }
}
