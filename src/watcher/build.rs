//! Build command invocation

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{PkgwatchError, PkgwatchResult};

/// Runs the external build for a batch of changed files.
///
/// Implementations:
/// - `CommandBuildRunner` - spawns the configured build command
/// - test doubles that record invocations
pub trait BuildRunner {
    /// Build `files` and block until done.
    fn run(&mut self, files: &[PathBuf]) -> PkgwatchResult<()>;
}

/// Spawns `<program> <args...> <files...>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct CommandBuildRunner {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl CommandBuildRunner {
    /// `command` is the program followed by its fixed arguments.
    pub fn new(command: &[String], cwd: impl Into<PathBuf>) -> PkgwatchResult<Self> {
        let (program, args) = command
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or(PkgwatchError::EmptyBuildCommand)?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            cwd: cwd.into(),
        })
    }

}

impl BuildRunner for CommandBuildRunner {
    fn run(&mut self, files: &[PathBuf]) -> PkgwatchResult<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| PkgwatchError::BuildSpawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PkgwatchError::BuildFailed { status })
        }
    }
}
