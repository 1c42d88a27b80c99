//! Read-only validation run before anything touches the publish directory.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, InstallStrategy, SyncConfig};

/// Validate the source project and publish directory.
///
/// Never mutates the filesystem.
pub fn validate(config: &SyncConfig) -> Result<(), AppError> {
    if !config.source_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Source project directory not found: {}\n  Set PUBSYNC_SOURCE_DIR or `source.dir` in pubsync.toml.",
            config.source_dir.display()
        )));
    }

    let manifest = config.manifest_path();
    if !manifest.is_file() {
        return Err(AppError::config_error(format!(
            "No {} in source project: {}",
            config.manifest_file,
            manifest.display()
        )));
    }

    if !config.publish_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Publish directory not found: {}\n  Create it (with {}) before syncing.",
            config.publish_dir.display(),
            config.keep_marker
        )));
    }

    ensure_inside_root(&config.publish_dir, &config.root)?;
    ensure_disjoint(&config.publish_dir, &config.output_dir())
}

/// Install strategy a sync would use, or `None` when the dependency cache exists.
pub fn pending_install(config: &SyncConfig) -> Option<InstallStrategy> {
    if config.dependency_cache_path().is_dir() {
        None
    } else {
        Some(InstallStrategy::choose(config.lock_file_path().is_file()))
    }
}

/// Clearing empties the publish directory, so it must be strictly below the repository root.
fn ensure_inside_root(publish: &Path, root: &Path) -> Result<(), AppError> {
    let publish = normalize(publish)?;
    let root = normalize(root)?;
    if root.starts_with(&publish) {
        return Err(AppError::config_error(format!(
            "Publish directory {} is the repository root {} or one of its parents\n  Point `publish.dir` in pubsync.toml at a dedicated subdirectory.",
            publish.display(),
            root.display()
        )));
    }
    Ok(())
}

/// Clearing the publish directory must not reach into the build output, and vice versa.
fn ensure_disjoint(publish: &Path, output: &Path) -> Result<(), AppError> {
    let publish = normalize(publish)?;
    let output = normalize(output)?;
    if publish.starts_with(&output) || output.starts_with(&publish) {
        return Err(AppError::config_error(format!(
            "Publish directory {} overlaps build output directory {}",
            publish.display(),
            output.display()
        )));
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor and re-append the rest.
fn normalize(path: &Path) -> Result<PathBuf, AppError> {
    let mut existing = path;
    let mut rest = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(path.to_path_buf()),
        }
    }
    let mut resolved = existing.canonicalize()?;
    resolved.extend(rest.iter().rev());
    Ok(resolved)
}
