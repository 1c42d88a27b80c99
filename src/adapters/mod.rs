pub mod console_reporter;
pub mod npm_command;
pub mod publish_dir;
