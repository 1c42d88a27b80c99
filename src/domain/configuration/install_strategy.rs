use serde::Serialize;

/// How missing dependencies of the external project get installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStrategy {
    /// Reproducible install pinned by the lock file (`npm ci`).
    Locked,
    /// General install that may resolve new versions (`npm install`).
    Fresh,
}

impl InstallStrategy {
    pub fn choose(lock_file_present: bool) -> Self {
        if lock_file_present { InstallStrategy::Locked } else { InstallStrategy::Fresh }
    }

    /// Subcommand passed to the package manager.
    pub fn subcommand(&self) -> &'static str {
        match self {
            InstallStrategy::Locked => "ci",
            InstallStrategy::Fresh => "install",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallStrategy::Locked => "locked (lock file present)",
            InstallStrategy::Fresh => "fresh (no lock file)",
        }
    }
}
