use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CUE_MOD_DIR};

/// Locate the project root starting from the current directory.
pub fn current_project_root() -> Result<PathBuf, AppError> {
    let cwd = std::env::current_dir()?;
    Ok(locate_project_root(&cwd))
}

/// Walk upward from `start` to the nearest directory containing `cue.mod`.
///
/// The filesystem root is never probed. Falls back to `start` when no
/// ancestor qualifies. Any stat outcome other than NotFound counts as a hit.
pub fn locate_project_root(start: &Path) -> PathBuf {
    let mut dir = start;
    loop {
        match fs::metadata(dir.join(CUE_MOD_DIR)) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            _ => return dir.to_path_buf(),
        }

        match dir.parent() {
            Some(parent) if parent.parent().is_some() => dir = parent,
            _ => return start.to_path_buf(),
        }
    }
}
