//! Build step for copied game directories
//!
//! Finds the first top-level source file in a game directory and runs the
//! build command on it. The child process gets the game directory as its
//! working directory through [`Command::current_dir`]; this process's own
//! working directory is never touched.
//!
//! A failed build is reported as a [`BuildOutcome`], never as an error.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// How a build attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No source file with the extension at the top level
    Skipped,
    Succeeded,
    /// Non-zero exit; `code` is `None` when killed by a signal or the spawn failed
    Failed { code: Option<i32> },
    /// The build program is not installed or not on `PATH`
    ToolNotFound,
}

impl BuildOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::ToolNotFound)
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped"),
            Self::Succeeded => write!(f, "built"),
            Self::Failed { code: Some(code) } => write!(f, "failed (exit code {code})"),
            Self::Failed { code: None } => write!(f, "failed"),
            Self::ToolNotFound => write!(f, "build tool not found"),
        }
    }
}

/// Name of the first regular file directly in `dir` ending with `extension`.
///
/// Listing order decides which file wins when there are several.
pub fn find_code_file(dir: &Path, extension: &str) -> Option<String> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .find(|name| name.ends_with(extension))
}

/// Run `command` followed by `file_name` with `dir` as working directory.
///
/// Stdin is closed and output is captured and dropped. An empty `command`
/// is treated as a missing tool.
pub fn run_command(command: &[String], file_name: &str, dir: &Path) -> BuildOutcome {
    let Some((program, args)) = command.split_first() else {
        return BuildOutcome::ToolNotFound;
    };

    let output = Command::new(program)
        .args(args)
        .arg(file_name)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => BuildOutcome::Succeeded,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(program = %program, stderr = %stderr.trim(), "build command failed");
            BuildOutcome::Failed {
                code: output.status.code(),
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => BuildOutcome::ToolNotFound,
        Err(e) => {
            debug!(program = %program, error = %e, "could not spawn build command");
            BuildOutcome::Failed { code: None }
        }
    }
}

/// Build the game in `dir` if it holds a source file.
pub fn compile_game(dir: &Path, extension: &str, command: &[String]) -> BuildOutcome {
    let Some(code_file) = find_code_file(dir, extension) else {
        debug!(dir = %dir.display(), extension, "no source file to build");
        return BuildOutcome::Skipped;
    };

    debug!(dir = %dir.display(), file = %code_file, "building");
    run_command(command, &code_file, dir)
}
