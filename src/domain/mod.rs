pub mod cue_mod;
pub mod error;
pub mod module;

pub use cue_mod::{CUE_MOD_DIR, LOCK_FILE, render_gitignore};
pub use error::AppError;
pub use module::{ENGINE_PACKAGE, Module};
