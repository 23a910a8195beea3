mod module_source;
mod vendor_lock;

pub use module_source::{ModuleSource, SourceEntry, SourceEntryKind};
pub use vendor_lock::{LockProvider, ScopedLock};
