//! Build the external project and mirror its output into the publish directory.

use chrono::Utc;

use crate::adapters::publish_dir::{clear_dir_except, copy_tree, inspect_tree};
use crate::app::AppContext;
use crate::app::commands::preflight;
use crate::domain::{AppError, InstallStrategy, SyncConfig, SyncReport};
use crate::ports::{BuildTool, ProgressReporter};

const TOTAL_STEPS: usize = 6;

/// Run the full pipeline. Every step short-circuits on failure; only the last
/// two steps mutate the publish directory.
pub fn execute<B, R>(ctx: &AppContext<B>, reporter: &mut R) -> Result<SyncReport, AppError>
where
    B: BuildTool,
    R: ProgressReporter,
{
    let config = ctx.config();
    let tool = ctx.build_tool();

    reporter.step(1, TOTAL_STEPS, "Validating paths");
    preflight::validate(config)?;
    reporter.detail(&format!("source:  {}", config.source_dir.display()));
    reporter.detail(&format!("publish: {}", config.publish_dir.display()));

    reporter.step(2, TOTAL_STEPS, "Checking dependencies");
    let install = provision_dependencies(config, tool, reporter)?;

    reporter.step(3, TOTAL_STEPS, &format!("Building with '{}'", tool.build_command()));
    tool.build(&config.source_dir)?;

    reporter.step(4, TOTAL_STEPS, "Verifying build output");
    let output_dir = config.output_dir();
    if !output_dir.is_dir() {
        return Err(AppError::MissingOutput { path: output_dir.display().to_string() });
    }
    let expected = inspect_tree(&output_dir)?;
    reporter.detail(&format!("{} file(s), {} bytes", expected.files, expected.bytes));

    reporter.step(5, TOTAL_STEPS, &format!("Clearing {}", config.publish_dir.display()));
    let keep_marker_preserved = config.publish_dir.join(&config.keep_marker).exists();
    let removed_entries = clear_dir_except(&config.publish_dir, |p| config.is_keep_marker(p))?;

    reporter.step(6, TOTAL_STEPS, &format!("Copying {}", output_dir.display()));
    let stats = copy_tree(&output_dir, &config.publish_dir, |p| {
        keep_marker_preserved && config.is_keep_marker(p)
    })?;

    Ok(SyncReport {
        source_dir: config.source_dir.clone(),
        output_dir,
        publish_dir: config.publish_dir.clone(),
        install,
        removed_entries,
        copied_files: stats.files,
        copied_bytes: stats.bytes,
        keep_marker_preserved,
        image_tag: config.image_tag.clone(),
        finished_at: Utc::now(),
    })
}

/// Install dependencies only when the cache directory is absent.
fn provision_dependencies<B, R>(
    config: &SyncConfig,
    tool: &B,
    reporter: &mut R,
) -> Result<Option<InstallStrategy>, AppError>
where
    B: BuildTool,
    R: ProgressReporter,
{
    match preflight::pending_install(config) {
        None => {
            reporter.detail(&format!("{} present, skipping install", config.dependency_dir));
            Ok(None)
        }
        Some(strategy) => {
            reporter.detail(&format!("Installing dependencies: {}", strategy.label()));
            tool.install(&config.source_dir, strategy)?;
            Ok(Some(strategy))
        }
    }
}
