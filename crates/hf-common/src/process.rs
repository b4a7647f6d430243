use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("'{program}' was not found on PATH")]
    NotFound { program: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("'{command}' failed with code {code}")]
    Failed { command: String, code: i32 },
}

/// Locate `program` on PATH.
pub fn require_program(program: &str) -> Result<PathBuf, CommandError> {
    which::which(program).map_err(|_| CommandError::NotFound {
        program: program.to_string(),
    })
}

/// Run a command in `cwd` with inherited stdio, failing on a non-zero exit.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<(), CommandError> {
    let bin = require_program(program)?;
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!("Running `{}` in {:?}", command_line, cwd);

    let status = Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| CommandError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: command_line,
            code: status.code().unwrap_or(-1),
        })
    }
}

/// Initialize a git repository in `dir` and record everything in a first commit.
pub fn git_init_with_commit(dir: &Path, message: &str) -> Result<(), CommandError> {
    run_command("git", &["init"], dir)?;
    run_command("git", &["add", "."], dir)?;
    run_command("git", &["commit", "-m", message], dir)?;
    Ok(())
}
