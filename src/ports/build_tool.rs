use std::path::Path;

use crate::domain::{AppError, InstallStrategy};

/// Port for the external project's package manager.
pub trait BuildTool {
    /// Install dependencies in `project` using `strategy`.
    ///
    /// Fails with `AppError::DependencyInstall` on a non-zero exit.
    fn install(&self, project: &Path, strategy: InstallStrategy) -> Result<(), AppError>;

    /// Run the project's build script.
    ///
    /// Fails with `AppError::Build` on a non-zero exit.
    fn build(&self, project: &Path) -> Result<(), AppError>;

    /// Human-readable build command line, for diagnostics and reports.
    fn build_command(&self) -> String;
}
