//! Check command implementation.

use crate::app::configuration::ConfigOverrides;
use crate::domain::AppError;

pub fn run_check(overrides: ConfigOverrides, json: bool) -> Result<(), AppError> {
    let config = crate::app::api::resolve(&overrides)?;
    let report = crate::app::api::check(config)?;

    if json {
        return super::print_json(&report);
    }

    println!("✅ Preflight passed");
    println!("  Source:  {}", report.source_dir.display());
    println!("  Publish: {}", report.publish_dir.display());
    println!("  Build:   {}", report.build_command);
    match report.pending_install {
        Some(strategy) => println!("  Dependencies: will install ({})", strategy.label()),
        None => println!("  Dependencies: cache present"),
    }
    let state = if report.output_present { "present" } else { "not built yet" };
    println!("  Output:  {} ({})", report.output_dir.display(), state);
    Ok(())
}
