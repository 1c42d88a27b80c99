//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! resolution, context creation and command execution.

use crate::adapters::npm_command::NpmCommandAdapter;
use crate::app::AppContext;
use crate::app::commands::{check, sync, verify};
use crate::app::configuration::{ConfigOverrides, EnvOverrides, resolve_config};
use crate::ports::ProgressReporter;

pub use crate::domain::{AppError, CheckReport, MirrorDrift, SyncConfig, SyncReport};

/// Create an `AppContext` backed by the configured package manager.
fn create_context(config: SyncConfig) -> AppContext<NpmCommandAdapter> {
    let tool = NpmCommandAdapter::new(config.build_tool.clone(), config.build_script.clone());
    AppContext::new(config, tool)
}

/// Resolve configuration from the process environment and current directory.
///
/// Environment overrides are read here, once; later steps only see the result.
pub fn resolve(overrides: &ConfigOverrides) -> Result<SyncConfig, AppError> {
    let cwd = std::env::current_dir()?;
    resolve_config(overrides, &EnvOverrides::from_env(), &cwd)
}

/// Build the source project and mirror its output into the publish directory.
pub fn sync(
    config: SyncConfig,
    reporter: &mut impl ProgressReporter,
) -> Result<SyncReport, AppError> {
    let ctx = create_context(config);
    sync::execute(&ctx, reporter)
}

/// Validate configuration and report what a sync would do, without side effects.
pub fn check(config: SyncConfig) -> Result<CheckReport, AppError> {
    let ctx = create_context(config);
    check::execute(&ctx)
}

/// Compare the existing build output with the publish directory.
pub fn verify(config: &SyncConfig) -> Result<MirrorDrift, AppError> {
    verify::execute(config)
}
