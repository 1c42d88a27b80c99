pub mod file_config;
pub mod install_strategy;
pub mod sync_config;

pub use file_config::{
    BuildSection, CONFIG_FILE, FileConfig, ImageSection, PublishSection, SourceSection,
    parse_config_content,
};
pub use install_strategy::InstallStrategy;
pub use sync_config::SyncConfig;
