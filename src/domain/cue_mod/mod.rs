//! Type-safe path catalog for the `cue.mod/` module root.
//!
//! All logical vendoring paths are defined here. Transaction code must use
//! these accessors instead of ad-hoc `.join("...")` chains.

mod gitignore;
pub mod paths;

pub use gitignore::render_gitignore;

/// The CUE module root directory name.
pub const CUE_MOD_DIR: &str = "cue.mod";

/// The module descriptor file name.
pub const MODULE_FILE: &str = "module.cue";

/// Descriptor content written when a project has no `module.cue` yet.
pub const EMPTY_MODULE_DESCRIPTOR: &str = "module: \"\"\n";

/// User package directory name.
pub const USR_DIR: &str = "usr";

/// Vendored package directory name.
pub const PKG_DIR: &str = "pkg";

/// Lock file guarding the vendoring transaction.
pub const LOCK_FILE: &str = "dagger.lock";

/// Ignore list regenerated on every transaction.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Suffix of the per-module backup directory used during a swap.
pub const BACKUP_SUFFIX: &str = ".old";

/// Prefix of the per-transaction staging directory.
pub const STAGING_PREFIX: &str = "vendor-";
