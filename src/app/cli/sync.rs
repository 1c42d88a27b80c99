//! Sync command implementation.

use crate::adapters::console_reporter::ConsoleReporter;
use crate::app::configuration::ConfigOverrides;
use crate::domain::{AppError, SyncReport};

pub fn run_sync(overrides: ConfigOverrides, json: bool) -> Result<(), AppError> {
    let config = crate::app::api::resolve(&overrides)?;
    let root = config.root.clone();

    let mut reporter = if json { ConsoleReporter::stderr() } else { ConsoleReporter::stdout() };
    let report = crate::app::api::sync(config, &mut reporter)?;

    if json {
        return super::print_json(&report);
    }
    print_summary(&report, &root);
    Ok(())
}

fn print_summary(report: &SyncReport, root: &std::path::Path) {
    println!();
    println!("✅ Published build output to {}", report.publish_dir.display());
    println!(
        "  Copied {} file(s), {} byte(s); removed {} stale entr{}",
        report.copied_files,
        report.copied_bytes,
        report.removed_entries,
        if report.removed_entries == 1 { "y" } else { "ies" }
    );
    if let Some(strategy) = report.install {
        println!("  Installed dependencies: {}", strategy.label());
    }
    if report.keep_marker_preserved {
        println!("  Keep-marker preserved");
    }
    println!("  Finished at {}", report.finished_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("Next steps:");
    for command in report.next_steps(root) {
        println!("  {}", command);
    }
    println!("⚠️  Proxy configuration is not validated by pubsync; check it before deploying.");
}
