use std::io::Write;

use crate::ports::ProgressReporter;

/// Writes `[k/N]` progress lines to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    to_stderr: bool,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self { to_stderr: false }
    }

    /// Keeps stdout free for machine-readable output.
    pub fn stderr() -> Self {
        Self { to_stderr: true }
    }

    fn emit(&self, line: &str) {
        // Progress is advisory; a closed pipe must not abort the workflow.
        if self.to_stderr {
            let _ = writeln!(std::io::stderr(), "{}", line);
        } else {
            let _ = writeln!(std::io::stdout(), "{}", line);
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn step(&mut self, index: usize, total: usize, message: &str) {
        self.emit(&format!("[{}/{}] {}", index, total, message));
    }

    fn detail(&mut self, message: &str) {
        self.emit(&format!("      {}", message));
    }
}
