//! Outcomes of workflow commands, serializable for `--json` output.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::InstallStrategy;

/// Summary of a completed build-and-sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub publish_dir: PathBuf,
    /// `None` when the dependency cache was already present.
    pub install: Option<InstallStrategy>,
    /// Entries removed from the publish directory before copying.
    pub removed_entries: usize,
    pub copied_files: usize,
    pub copied_bytes: u64,
    pub keep_marker_preserved: bool,
    pub image_tag: String,
    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    /// Suggested commands for handing the publish directory to the image build.
    pub fn next_steps(&self, root: &std::path::Path) -> Vec<String> {
        vec![
            format!("docker build -t {} {}", self.image_tag, root.display()),
            format!("docker run --rm -p 8080:80 {}", self.image_tag),
        ]
    }
}

/// Result of a preflight-only check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub source_dir: PathBuf,
    pub publish_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Strategy a sync would use; `None` when the dependency cache is present.
    pub pending_install: Option<InstallStrategy>,
    pub output_present: bool,
    pub build_command: String,
}

/// Differences between the build output and the publish directory.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MirrorDrift {
    /// In the build output but not published.
    pub missing: Vec<PathBuf>,
    /// Published with different contents.
    pub modified: Vec<PathBuf>,
    /// Published but not part of the build output.
    pub extra: Vec<PathBuf>,
    pub checked_files: usize,
}

impl MirrorDrift {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.modified.is_empty() && self.extra.is_empty()
    }
}
