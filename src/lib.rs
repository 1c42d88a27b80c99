//! pubsync: build a front-end project and mirror its output into `public/`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{check, resolve, sync, verify};
pub use app::configuration::ConfigOverrides;
pub use domain::{AppError, CheckReport, InstallStrategy, MirrorDrift, SyncConfig, SyncReport};
