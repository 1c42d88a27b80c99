pub mod configuration;
pub mod error;
pub mod report;

pub use configuration::{CONFIG_FILE, FileConfig, InstallStrategy, SyncConfig};
pub use error::AppError;
pub use report::{CheckReport, MirrorDrift, SyncReport};
