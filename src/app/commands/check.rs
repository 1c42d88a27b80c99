use crate::app::AppContext;
use crate::app::commands::preflight;
use crate::domain::{AppError, CheckReport};
use crate::ports::BuildTool;

/// Run preflight validation only and describe what a sync would do.
pub fn execute<B: BuildTool>(ctx: &AppContext<B>) -> Result<CheckReport, AppError> {
    let config = ctx.config();
    preflight::validate(config)?;

    Ok(CheckReport {
        source_dir: config.source_dir.clone(),
        publish_dir: config.publish_dir.clone(),
        output_dir: config.output_dir(),
        pending_install: preflight::pending_install(config),
        output_present: config.output_dir().is_dir(),
        build_command: ctx.build_tool().build_command(),
    })
}
