use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::SyncConfig;

/// Temporary repository + external project laid out with default names.
pub struct SyncFixture {
    _root: TempDir,
    pub config: SyncConfig,
}

impl SyncFixture {
    /// Repository with `public/.gitkeep` and a project containing `package.json`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let repo = root.path().join("repo");
        let source = root.path().join("frontend");
        fs::create_dir_all(repo.join("public")).unwrap();
        fs::write(repo.join("public/.gitkeep"), "").unwrap();
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("package.json"), r#"{"name":"frontend"}"#).unwrap();

        let config = SyncConfig {
            root: repo.clone(),
            source_dir: source,
            publish_dir: repo.join("public"),
            manifest_file: "package.json".into(),
            lock_file: "package-lock.json".into(),
            dependency_dir: "node_modules".into(),
            output_subdir: "dist".into(),
            keep_marker: ".gitkeep".into(),
            build_tool: "npm".into(),
            build_script: "build".into(),
            image_tag: "frontend-proxy".into(),
        };
        Self { _root: root, config }
    }

    pub fn publish(&self) -> &Path {
        &self.config.publish_dir
    }

    pub fn source(&self) -> &Path {
        &self.config.source_dir
    }

    pub fn write_publish(&self, rel: &str, content: &str) {
        write_file(&self.publish().join(rel), content);
    }

    pub fn write_source(&self, rel: &str, content: &str) {
        write_file(&self.source().join(rel), content);
    }

    /// Sorted relative file paths with contents under the publish directory.
    pub fn publish_snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        snapshot(self.publish())
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn snapshot(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(base).unwrap().to_path_buf();
            if path.is_dir() {
                out.push((rel, Vec::new()));
                walk(base, &path, out);
            } else {
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    let mut out = Vec::new();
    walk(dir, dir, &mut out);
    out.sort();
    out
}
