//! Configuration resolution.
//!
//! This module owns all environment and file I/O for building a `SyncConfig`.
//! Pure parsing lives in `domain::configuration`.

mod config_file_reader;
mod resolver;

pub use config_file_reader::{load_file_config, locate_root};
pub use resolver::{
    BUILD_TOOL_ENV, ConfigOverrides, EnvOverrides, SOURCE_DIR_ENV, resolve_config,
};
