use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, InstallStrategy};
use crate::ports::BuildTool;

/// In-process stand-in for the package manager.
///
/// `build` writes `outputs` under `<project>/<output_subdir>` unless configured to fail.
pub struct FakeBuildTool {
    pub calls: Mutex<Vec<String>>,
    pub output_subdir: String,
    pub outputs: Vec<(PathBuf, Vec<u8>)>,
    pub build_exit: Option<i32>,
    pub install_exit: Option<i32>,
    /// Build succeeds without producing the output directory.
    pub skip_output: bool,
}

impl FakeBuildTool {
    pub fn new(output_subdir: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            output_subdir: output_subdir.to_string(),
            outputs: Vec::new(),
            build_exit: None,
            install_exit: None,
            skip_output: false,
        }
    }

    pub fn with_output(mut self, rel: &str, content: &str) -> Self {
        self.outputs.push((PathBuf::from(rel), content.as_bytes().to_vec()));
        self
    }

    pub fn failing_build(mut self, code: i32) -> Self {
        self.build_exit = Some(code);
        self
    }

    pub fn failing_install(mut self, code: i32) -> Self {
        self.install_exit = Some(code);
        self
    }

    pub fn without_output(mut self) -> Self {
        self.skip_output = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl BuildTool for FakeBuildTool {
    fn install(&self, project: &Path, strategy: InstallStrategy) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(format!("install:{}", strategy.subcommand()));
        if let Some(code) = self.install_exit {
            return Err(AppError::DependencyInstall {
                command: format!("npm {}", strategy.subcommand()),
                code: Some(code),
            });
        }
        fs::create_dir_all(project.join("node_modules"))?;
        Ok(())
    }

    fn build(&self, project: &Path) -> Result<(), AppError> {
        self.calls.lock().unwrap().push("build".to_string());
        if let Some(code) = self.build_exit {
            return Err(AppError::Build { command: self.build_command(), code: Some(code) });
        }
        if self.skip_output {
            return Ok(());
        }
        let out = project.join(&self.output_subdir);
        fs::create_dir_all(&out)?;
        for (rel, bytes) in &self.outputs {
            let path = out.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, bytes)?;
        }
        Ok(())
    }

    fn build_command(&self) -> String {
        "npm run build".to_string()
    }
}
