//! `cue.mod/` paths.

use std::path::{Path, PathBuf};

use super::{BACKUP_SUFFIX, CUE_MOD_DIR, GITIGNORE_FILE, LOCK_FILE, MODULE_FILE, PKG_DIR, USR_DIR};
use crate::domain::Module;

/// `cue.mod/`
pub fn cue_mod_dir(root: &Path) -> PathBuf {
    root.join(CUE_MOD_DIR)
}

/// `cue.mod/module.cue`
pub fn module_file(root: &Path) -> PathBuf {
    cue_mod_dir(root).join(MODULE_FILE)
}

/// `cue.mod/usr/`
pub fn usr_dir(root: &Path) -> PathBuf {
    cue_mod_dir(root).join(USR_DIR)
}

/// `cue.mod/pkg/`
pub fn pkg_dir(root: &Path) -> PathBuf {
    cue_mod_dir(root).join(PKG_DIR)
}

/// `cue.mod/pkg/dagger.lock`
pub fn lock_file(root: &Path) -> PathBuf {
    pkg_dir(root).join(LOCK_FILE)
}

/// `cue.mod/pkg/.gitignore`
pub fn gitignore(root: &Path) -> PathBuf {
    pkg_dir(root).join(GITIGNORE_FILE)
}

// ── Relative to the package directory ─────────────────────────────

/// `<pkg>/<module>/`
pub fn module_dir(pkg: &Path, module: Module) -> PathBuf {
    pkg.join(module.dir_name())
}

/// `<pkg>/<module>.old/`
pub fn backup_dir(pkg: &Path, module: Module) -> PathBuf {
    pkg.join(format!("{}{}", module.dir_name(), BACKUP_SUFFIX))
}
