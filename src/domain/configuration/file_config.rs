//! On-disk configuration model for `pubsync.toml`.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Name of the optional configuration file at the repository root.
pub const CONFIG_FILE: &str = "pubsync.toml";

/// Configuration loaded from `pubsync.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub publish: PublishSection,
    #[serde(default)]
    pub image: ImageSection,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.source.validate()?;
        self.build.validate()?;
        self.publish.validate()?;
        if self.image.tag.trim().is_empty() {
            return Err(AppError::config_error("image.tag must not be empty"));
        }
        Ok(())
    }
}

/// External front-end project layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    /// Project directory. `None` falls back to the built-in default under `$HOME`.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_lock_file")]
    pub lock_file: String,
    #[serde(default = "default_dependency_dir")]
    pub dependency_dir: String,
    /// Build output location, relative to the project directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            dir: None,
            manifest: default_manifest(),
            lock_file: default_lock_file(),
            dependency_dir: default_dependency_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl SourceSection {
    fn validate(&self) -> Result<(), AppError> {
        require_relative("source.manifest", &self.manifest)?;
        require_relative("source.lock_file", &self.lock_file)?;
        require_relative("source.dependency_dir", &self.dependency_dir)?;
        require_relative("source.output_dir", &self.output_dir)?;
        if let Some(dir) = &self.dir
            && dir.trim().is_empty()
        {
            return Err(AppError::config_error("source.dir must not be empty when set"));
        }
        Ok(())
    }
}

/// Build tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Program name or path of the package manager.
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Script passed to `<tool> run`.
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self { tool: default_tool(), script: default_script() }
    }
}

impl BuildSection {
    fn validate(&self) -> Result<(), AppError> {
        if self.tool.trim().is_empty() {
            return Err(AppError::config_error("build.tool must not be empty"));
        }
        if self.script.trim().is_empty() {
            return Err(AppError::config_error("build.script must not be empty"));
        }
        Ok(())
    }
}

/// Publish directory inside this repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PublishSection {
    /// Relative to the repository root.
    #[serde(default = "default_publish_dir")]
    pub dir: String,
    #[serde(default = "default_keep_marker")]
    pub keep_marker: String,
}

impl Default for PublishSection {
    fn default() -> Self {
        Self { dir: default_publish_dir(), keep_marker: default_keep_marker() }
    }
}

impl PublishSection {
    fn validate(&self) -> Result<(), AppError> {
        require_relative("publish.dir", &self.dir)?;
        if !Path::new(self.dir.trim()).components().any(|c| matches!(c, Component::Normal(_))) {
            return Err(AppError::config_error(format!(
                "publish.dir must name a subdirectory of the repository, got '{}'",
                self.dir
            )));
        }
        if self.keep_marker.is_empty()
            || self.keep_marker.contains('/')
            || self.keep_marker.contains('\\')
            || self.keep_marker == "."
            || self.keep_marker == ".."
        {
            return Err(AppError::config_error(format!(
                "publish.keep_marker must be a plain file name, got '{}'",
                self.keep_marker
            )));
        }
        Ok(())
    }
}

/// Container image the publish directory feeds. Only used in follow-up suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImageSection {
    #[serde(default = "default_image_tag")]
    pub tag: String,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self { tag: default_image_tag() }
    }
}

fn require_relative(field: &str, value: &str) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", field)));
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        return Err(AppError::config_error(format!(
            "{} must be a relative path, got '{}'",
            field, value
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::config_error(format!(
            "{} must not contain '..', got '{}'",
            field, value
        )));
    }
    Ok(())
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_lock_file() -> String {
    "package-lock.json".to_string()
}

fn default_dependency_dir() -> String {
    "node_modules".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_tool() -> String {
    "npm".to_string()
}

fn default_script() -> String {
    "build".to_string()
}

fn default_publish_dir() -> String {
    "public".to_string()
}

fn default_keep_marker() -> String {
    ".gitkeep".to_string()
}

fn default_image_tag() -> String {
    "frontend-proxy".to_string()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}
