use crate::ports::{LockProvider, ModuleSource};

/// The two seams a vendoring run is wired through: where module files come
/// from and how the transaction is serialized across processes.
pub struct AppContext<S: ModuleSource, L: LockProvider> {
    source: S,
    locks: L,
}

impl<S: ModuleSource, L: LockProvider> AppContext<S, L> {
    pub fn new(source: S, locks: L) -> Self {
        Self { source, locks }
    }

    /// Bundle that gets extracted into staging.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Guards `cue.mod/pkg/dagger.lock` for the length of one transaction.
    pub fn locks(&self) -> &L {
        &self.locks
    }
}
