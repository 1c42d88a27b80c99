//! Filesystem primitives for the destructive sync and mirror verification.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::AppError;

/// Digest recorded for directories by `digest_tree`.
pub const DIR_DIGEST: &str = "dir";

/// Totals from a recursive copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub bytes: u64,
}

fn at(path: &Path) -> impl FnOnce(io::Error) -> AppError + '_ {
    move |source| AppError::Filesystem { path: path.display().to_string(), source }
}

/// Walk `src` the way `copy_tree` will, resolving every entry.
///
/// Fails on the first dangling symlink, unreadable entry or symlink loop, naming
/// that entry. Never mutates anything.
pub fn inspect_tree(src: &Path) -> Result<CopyStats, AppError> {
    let mut stats = CopyStats::default();
    let mut ancestors = vec![src.canonicalize().map_err(at(src))?];
    inspect_dir(src, &mut ancestors, &mut stats)?;
    Ok(stats)
}

fn inspect_dir(
    dir: &Path,
    ancestors: &mut Vec<PathBuf>,
    stats: &mut CopyStats,
) -> Result<(), AppError> {
    for entry in fs::read_dir(dir).map_err(at(dir))? {
        let path = entry.map_err(at(dir))?.path();
        let metadata = fs::metadata(&path).map_err(at(&path))?;
        if metadata.is_dir() {
            let resolved = path.canonicalize().map_err(at(&path))?;
            if ancestors.contains(&resolved) {
                return Err(AppError::Filesystem {
                    path: path.display().to_string(),
                    source: io::Error::other(format!(
                        "symlink loop back to {}",
                        resolved.display()
                    )),
                });
            }
            ancestors.push(resolved);
            inspect_dir(&path, ancestors, stats)?;
            ancestors.pop();
        } else if metadata.is_file() {
            File::open(&path).map_err(at(&path))?;
            stats.files += 1;
            stats.bytes += metadata.len();
        } else {
            return Err(AppError::Filesystem {
                path: path.display().to_string(),
                source: io::Error::other("not a regular file or directory"),
            });
        }
    }
    Ok(())
}

/// Remove every direct entry of `dir` for which `keep` returns false.
///
/// `dir` itself is never removed. Symlinks are unlinked, not followed.
/// Returns the number of entries removed.
pub fn clear_dir_except<F>(dir: &Path, keep: F) -> Result<usize, AppError>
where
    F: Fn(&Path) -> bool,
{
    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(at(dir))? {
        let path = entry.map_err(at(dir))?.path();
        if keep(&path) {
            continue;
        }
        let metadata = fs::symlink_metadata(&path).map_err(at(&path))?;
        if metadata.is_dir() {
            fs::remove_dir_all(&path).map_err(at(&path))?;
        } else {
            fs::remove_file(&path).map_err(at(&path))?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Recursively copy the contents of `src` into the existing directory `dst`.
///
/// Destination paths for which `skip` returns true are left alone. Symlinks in
/// `src` are copied as the file or directory they resolve to; run `inspect_tree`
/// first so a bad link fails before `dst` is touched.
pub fn copy_tree<F>(src: &Path, dst: &Path, skip: F) -> Result<CopyStats, AppError>
where
    F: Fn(&Path) -> bool,
{
    let mut stats = CopyStats::default();
    copy_dir_contents(src, dst, &skip, &mut stats)?;
    Ok(stats)
}

fn copy_dir_contents<F>(
    src: &Path,
    dst: &Path,
    skip: &F,
    stats: &mut CopyStats,
) -> Result<(), AppError>
where
    F: Fn(&Path) -> bool,
{
    for entry in fs::read_dir(src).map_err(at(src))? {
        let entry = entry.map_err(at(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if skip(&to) {
            continue;
        }

        let metadata = fs::metadata(&from).map_err(at(&from))?;
        if metadata.is_dir() {
            fs::create_dir_all(&to).map_err(at(&to))?;
            copy_dir_contents(&from, &to, skip, stats)?;
        } else {
            stats.bytes += fs::copy(&from, &to).map_err(at(&from))?;
            stats.files += 1;
        }
    }
    Ok(())
}

/// SHA-256 of every file under `root`, keyed by path relative to `root`.
///
/// Directories are recorded with `DIR_DIGEST` so empty ones take part in comparisons.
pub fn digest_tree(root: &Path) -> Result<BTreeMap<PathBuf, String>, AppError> {
    let mut digests = BTreeMap::new();
    collect_digests(root, Path::new(""), &mut digests)?;
    Ok(digests)
}

fn collect_digests(
    dir: &Path,
    relative: &Path,
    digests: &mut BTreeMap<PathBuf, String>,
) -> Result<(), AppError> {
    for entry in fs::read_dir(dir).map_err(at(dir))? {
        let entry = entry.map_err(at(dir))?;
        let path = entry.path();
        let rel = relative.join(entry.file_name());
        if fs::metadata(&path).map_err(at(&path))?.is_dir() {
            collect_digests(&path, &rel, digests)?;
            digests.insert(rel, DIR_DIGEST.to_string());
        } else {
            digests.insert(rel, hash_file(&path).map_err(at(&path))?);
        }
    }
    Ok(())
}

pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}
