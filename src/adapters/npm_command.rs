use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::domain::{AppError, InstallStrategy};
use crate::ports::BuildTool;

/// Package manager adapter that shells out to `npm` (or a compatible program).
///
/// Child stdout/stderr are inherited so the tool's own diagnostics reach the
/// operator unmodified. No timeout is applied.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    program: String,
    script: String,
}

impl NpmCommandAdapter {
    pub fn new(program: impl Into<String>, script: impl Into<String>) -> Self {
        Self { program: program.into(), script: script.into() }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run_status(&self, args: &[&str], cwd: &Path) -> Result<ExitStatus, AppError> {
        Command::new(&self.program).args(args).current_dir(cwd).status().map_err(|e| {
            AppError::CommandSpawn { command: self.command_line(args), details: e.to_string() }
        })
    }
}

impl BuildTool for NpmCommandAdapter {
    fn install(&self, project: &Path, strategy: InstallStrategy) -> Result<(), AppError> {
        let args = [strategy.subcommand()];
        let status = self.run_status(&args, project)?;
        if !status.success() {
            return Err(AppError::DependencyInstall {
                command: self.command_line(&args),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn build(&self, project: &Path) -> Result<(), AppError> {
        let args = ["run", self.script.as_str()];
        let status = self.run_status(&args, project)?;
        if !status.success() {
            return Err(AppError::Build { command: self.command_line(&args), code: status.code() });
        }
        Ok(())
    }

    fn build_command(&self) -> String {
        self.command_line(&["run", &self.script])
    }
}
