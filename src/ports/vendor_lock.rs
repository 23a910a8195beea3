use std::path::Path;

use crate::domain::AppError;

/// A held exclusive lock. Dropping the guard releases it.
pub trait ScopedLock {
    /// Release the lock and remove its marker file. Calling it twice is a no-op.
    fn release(&mut self);
}

/// Port for acquiring the cross-process lock that serializes vendoring.
pub trait LockProvider {
    type Guard: ScopedLock;

    /// Block until the lock at `path` is held, creating the lock file if absent.
    ///
    /// Contention blocks; only filesystem failures return `AppError::Lock`.
    fn acquire(&self, path: &Path) -> Result<Self::Guard, AppError>;
}
