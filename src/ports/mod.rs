mod build_tool;
mod progress_reporter;

pub use build_tool::BuildTool;
pub use progress_reporter::ProgressReporter;
