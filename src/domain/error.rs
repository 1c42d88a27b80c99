use std::io;

use thiserror::Error;

/// Library-wide error type for pubsync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required path or value is missing or malformed.
    #[error("{0}")]
    Configuration(String),

    /// `pubsync.toml` could not be parsed.
    #[error("Failed to parse {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// External tool could not be started at all.
    #[error("Failed to run '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// Dependency installation exited non-zero.
    #[error("Dependency install '{command}' failed{}", describe_code(.code))]
    DependencyInstall { command: String, code: Option<i32> },

    /// Build command exited non-zero.
    #[error("Build '{command}' failed{}", describe_code(.code))]
    Build { command: String, code: Option<i32> },

    /// Build reported success but left no output directory behind.
    #[error(
        "Build output directory not found: {path}\n  Check that `source.output_dir` in pubsync.toml matches the project's build output location."
    )]
    MissingOutput { path: String },

    /// Filesystem failure on a specific entry while inspecting, clearing or copying.
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A report could not be rendered for output.
    #[error("Failed to render {what}: {details}")]
    Render { what: String, details: String },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit status for this failure.
    ///
    /// External tool failures propagate the tool's own status; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DependencyInstall { code: Some(code), .. }
            | AppError::Build { code: Some(code), .. }
                if *code != 0 =>
            {
                *code
            }
            _ => 1,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::ConfigParse { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::MissingOutput { .. } => io::ErrorKind::NotFound,
            AppError::CommandSpawn { .. }
            | AppError::DependencyInstall { .. }
            | AppError::Build { .. } => io::ErrorKind::Other,
            AppError::Render { .. } => io::ErrorKind::InvalidData,
        }
    }
}
