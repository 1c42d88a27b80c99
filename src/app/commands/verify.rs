//! Compare the current build output with the publish directory without rebuilding.
//!
//! Files are compared by SHA-256; directories by presence, so an empty directory
//! missing from the publish side counts as drift.

use std::path::Path;

use crate::adapters::publish_dir::{DIR_DIGEST, digest_tree};
use crate::domain::{AppError, MirrorDrift, SyncConfig};

pub fn execute(config: &SyncConfig) -> Result<MirrorDrift, AppError> {
    let output_dir = config.output_dir();
    if !output_dir.is_dir() {
        return Err(AppError::MissingOutput { path: output_dir.display().to_string() });
    }
    if !config.publish_dir.is_dir() {
        return Err(AppError::config_error(format!(
            "Publish directory not found: {}",
            config.publish_dir.display()
        )));
    }

    let marker = Path::new(&config.keep_marker);
    let mut expected = digest_tree(&output_dir)?;
    let mut published = digest_tree(&config.publish_dir)?;
    expected.remove(marker);
    published.remove(marker);

    let checked_files = expected.values().filter(|digest| digest.as_str() != DIR_DIGEST).count();
    let mut drift = MirrorDrift { checked_files, ..MirrorDrift::default() };
    for (path, digest) in &expected {
        match published.remove(path) {
            None => drift.missing.push(path.clone()),
            Some(actual) if &actual != digest => drift.modified.push(path.clone()),
            Some(_) => {}
        }
    }
    drift.extra = published.into_keys().collect();
    Ok(drift)
}
