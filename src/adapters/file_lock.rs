use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::AppError;
use crate::ports::{LockProvider, ScopedLock};

/// Advisory `flock`-style lock provider for the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLockProvider;

impl FileLockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LockProvider for FileLockProvider {
    type Guard = FileLock;

    fn acquire(&self, path: &Path) -> Result<FileLock, AppError> {
        let lock_err = |source: io::Error| AppError::Lock { path: path.to_path_buf(), source };

        loop {
            let file = OpenOptions::new()
                .create(true)
                .truncate(false)
                .read(true)
                .write(true)
                .open(path)
                .map_err(lock_err)?;
            FileExt::lock_exclusive(&file).map_err(lock_err)?;

            // The previous holder unlinks the file on release; a lock on the
            // unlinked inode excludes nobody.
            if still_linked(&file, path).map_err(lock_err)? {
                tracing::debug!(lock = %path.display(), "acquired vendor lock");
                return Ok(FileLock { file: Some(file), path: path.to_path_buf() });
            }
            tracing::debug!(lock = %path.display(), "lock file replaced while waiting, retrying");
        }
    }
}

#[cfg(unix)]
fn still_linked(file: &File, path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let held = file.metadata()?;
    match fs::metadata(path) {
        Ok(current) => Ok(held.dev() == current.dev() && held.ino() == current.ino()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(not(unix))]
fn still_linked(_file: &File, path: &Path) -> io::Result<bool> {
    Ok(path.exists())
}

/// Held vendor lock. Released on drop.
#[derive(Debug)]
pub struct FileLock {
    file: Option<File>,
    path: PathBuf,
}

impl FileLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScopedLock for FileLock {
    fn release(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };

        // Unlink while still held so a waiter never validates a doomed inode.
        if let Err(err) = fs::remove_file(&self.path)
            && err.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!(lock = %self.path.display(), error = %err, "failed to remove lock file");
        }
        if let Err(err) = FileExt::unlock(&file) {
            tracing::warn!(lock = %self.path.display(), error = %err, "failed to unlock");
        }
        tracing::debug!(lock = %self.path.display(), "released vendor lock");
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        self.release();
    }
}
