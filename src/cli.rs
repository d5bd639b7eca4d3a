//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// gamepack - game release packager
///
/// Copies every `*game*` directory found in SOURCE into TARGET, builds it and
/// writes TARGET/metadata.json.
#[derive(Parser, Debug)]
#[command(
    name = "gamepack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy game directories into a release folder, build them and write a metadata index",
    long_about = "Finds the immediate subdirectories of SOURCE whose name contains 'game' \
                  (any case), copies each into TARGET with '_game' removed from its name, \
                  runs 'go build' on the first .go file inside, and writes \
                  TARGET/metadata.json listing the packaged games.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gamepack ./games ./dist             \x1b[90m# Package every game\x1b[0m\n   \
                  gamepack ./games ./dist --dry-run   \x1b[90m# Show what would be packaged\x1b[0m\n"
)]
pub struct Cli {
    /// Directory whose subdirectories are scanned for games
    pub source: PathBuf,

    /// Directory receiving the packaged games and metadata.json
    pub target: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show what would be packaged without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_two_paths() {
        let cli = Cli::try_parse_from(["gamepack", "games", "dist"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("games"));
        assert_eq!(cli.target, PathBuf::from("dist"));
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::try_parse_from(["gamepack", "--dry-run", "-v", "games", "/abs/dist"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.target, PathBuf::from("/abs/dist"));
    }

    #[test]
    fn test_cli_requires_two_paths() {
        assert!(Cli::try_parse_from(["gamepack"]).is_err());
        assert!(Cli::try_parse_from(["gamepack", "games"]).is_err());
        assert!(Cli::try_parse_from(["gamepack", "games", "dist", "extra"]).is_err());
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gamepack", "-q", "-v", "games", "dist"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
