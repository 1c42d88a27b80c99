//! Resolve a `SyncConfig` from flags, environment, `pubsync.toml` and defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::app::configuration::config_file_reader::{load_file_config, locate_root};
use crate::domain::{AppError, SyncConfig};

pub const SOURCE_DIR_ENV: &str = "PUBSYNC_SOURCE_DIR";
pub const BUILD_TOOL_ENV: &str = "PUBSYNC_BUILD_TOOL";

/// Source project location used when nothing overrides it, relative to `$HOME`.
const DEFAULT_SOURCE_DIR: &str = "workspace/frontend";

/// Command-line overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
}

/// Environment snapshot, captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub source_dir: Option<OsString>,
    pub build_tool: Option<String>,
    pub home: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            source_dir: std::env::var_os(SOURCE_DIR_ENV).filter(|v| !v.is_empty()),
            build_tool: std::env::var(BUILD_TOOL_ENV).ok().filter(|v| !v.trim().is_empty()),
            home: std::env::var_os("HOME").filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }
}

/// Precedence: flag, then environment, then `pubsync.toml`, then defaults.
pub fn resolve_config(
    overrides: &ConfigOverrides,
    env: &EnvOverrides,
    cwd: &Path,
) -> Result<SyncConfig, AppError> {
    let root = locate_root(overrides.root.as_deref(), cwd);
    let file = load_file_config(&root)?;

    let source_dir = if let Some(dir) = &overrides.source_dir {
        absolutize(&expand_home(dir, env)?, cwd)
    } else if let Some(dir) = &env.source_dir {
        absolutize(&expand_home(Path::new(dir), env)?, cwd)
    } else if let Some(dir) = &file.source.dir {
        absolutize(&expand_home(Path::new(dir), env)?, &root)
    } else {
        let home = env.home.as_ref().ok_or_else(|| {
            AppError::config_error(format!(
                "HOME is not set; set {} to locate the source project",
                SOURCE_DIR_ENV
            ))
        })?;
        home.join(DEFAULT_SOURCE_DIR)
    };

    let build_tool = env.build_tool.clone().unwrap_or(file.build.tool);

    Ok(SyncConfig {
        publish_dir: root.join(&file.publish.dir),
        root,
        source_dir,
        manifest_file: file.source.manifest,
        lock_file: file.source.lock_file,
        dependency_dir: file.source.dependency_dir,
        output_subdir: file.source.output_dir,
        keep_marker: file.publish.keep_marker,
        build_tool,
        build_script: file.build.script,
        image_tag: file.image.tag,
    })
}

/// Expand a leading `~` against `$HOME`.
fn expand_home(path: &Path, env: &EnvOverrides) -> Result<PathBuf, AppError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = env.home.as_ref().ok_or_else(|| {
        AppError::config_error(format!("Cannot expand '{}': HOME is not set", path.display()))
    })?;
    Ok(home.join(rest))
}

fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
