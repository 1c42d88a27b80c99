//! Verify command implementation.

use crate::app::configuration::ConfigOverrides;
use crate::domain::AppError;

/// Returns exit code 1 when the publish directory has drifted.
pub fn run_verify(overrides: ConfigOverrides, json: bool) -> Result<i32, AppError> {
    let config = crate::app::api::resolve(&overrides)?;
    let drift = crate::app::api::verify(&config)?;
    let exit_code = if drift.is_clean() { 0 } else { 1 };

    if json {
        super::print_json(&drift)?;
        return Ok(exit_code);
    }

    if drift.is_clean() {
        println!(
            "✅ {} mirrors {} ({} file(s))",
            config.publish_dir.display(),
            config.output_dir().display(),
            drift.checked_files
        );
        return Ok(0);
    }

    println!("⚠️  {} differs from the build output:", config.publish_dir.display());
    for path in &drift.missing {
        println!("  missing   {}", path.display());
    }
    for path in &drift.modified {
        println!("  modified  {}", path.display());
    }
    for path in &drift.extra {
        println!("  extra     {}", path.display());
    }
    Ok(exit_code)
}
