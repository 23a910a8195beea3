pub mod embedded_module_source;
pub mod file_lock;
pub mod project_root;

pub use embedded_module_source::EmbeddedModuleSource;
pub use file_lock::{FileLock, FileLockProvider};
pub use project_root::{current_project_root, locate_project_root};
