//! Resolved workflow configuration.

use std::path::{Path, PathBuf};

/// Fully resolved inputs for one workflow run.
///
/// Built once at startup by `app::configuration::resolve_config` and passed by
/// reference into every step; nothing downstream reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Repository root the publish directory is anchored to.
    pub root: PathBuf,
    /// External front-end project.
    pub source_dir: PathBuf,
    /// Served static content inside this repository.
    pub publish_dir: PathBuf,
    pub manifest_file: String,
    pub lock_file: String,
    pub dependency_dir: String,
    /// Build output location relative to `source_dir`.
    pub output_subdir: String,
    pub keep_marker: String,
    pub build_tool: String,
    pub build_script: String,
    pub image_tag: String,
}

impl SyncConfig {
    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join(&self.manifest_file)
    }

    pub fn lock_file_path(&self) -> PathBuf {
        self.source_dir.join(&self.lock_file)
    }

    pub fn dependency_cache_path(&self) -> PathBuf {
        self.source_dir.join(&self.dependency_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.source_dir.join(&self.output_subdir)
    }

    /// True for the top-level keep-marker entry of the publish directory.
    pub fn is_keep_marker(&self, entry: &Path) -> bool {
        entry.parent() == Some(self.publish_dir.as_path())
            && entry.file_name().is_some_and(|name| name == self.keep_marker.as_str())
    }
}
