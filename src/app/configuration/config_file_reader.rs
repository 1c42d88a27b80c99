//! `pubsync.toml` loading and repository root discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, FileConfig};

/// Load `<root>/pubsync.toml`, falling back to defaults when the file is absent.
pub fn load_file_config(root: &Path) -> Result<FileConfig, AppError> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content).map_err(|e| AppError::ConfigParse {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Repository root: `explicit` when given, otherwise the nearest ancestor of `cwd`
/// holding `pubsync.toml`, otherwise `cwd`.
pub fn locate_root(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit {
        return if root.is_absolute() { root.to_path_buf() } else { cwd.join(root) };
    }
    cwd.ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}
