use crate::domain::SyncConfig;
use crate::ports::BuildTool;

/// Application context holding resolved configuration and dependencies for command execution.
pub struct AppContext<B: BuildTool> {
    config: SyncConfig,
    build_tool: B,
}

impl<B: BuildTool> AppContext<B> {
    /// Create a new application context.
    pub fn new(config: SyncConfig, build_tool: B) -> Self {
        Self { config, build_tool }
    }

    /// Get a reference to the resolved configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Get a reference to the package manager.
    pub fn build_tool(&self) -> &B {
        &self.build_tool
    }
}
