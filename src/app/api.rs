//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedModuleSource, FileLockProvider, current_project_root};
use crate::app::AppContext;
use crate::app::commands;

pub use crate::app::commands::modules::ModuleSummary;
pub use crate::app::commands::vendor::VendorOutcome;
pub use crate::domain::{AppError, Module};

/// Options for a vendoring run.
#[derive(Debug, Clone, Default)]
pub struct VendorOptions {
    /// Project root; located from the current directory when unset or empty.
    pub project_root: Option<PathBuf>,
}

impl VendorOptions {
    fn resolve_root(&self) -> Result<PathBuf, AppError> {
        match &self.project_root {
            Some(root) if !root.as_os_str().is_empty() => Ok(root.clone()),
            _ => current_project_root(),
        }
    }
}

/// Create an `AppContext` backed by the embedded bundle and the filesystem lock.
fn create_context() -> AppContext<EmbeddedModuleSource, FileLockProvider> {
    AppContext::new(EmbeddedModuleSource::new(), FileLockProvider::new())
}

/// Vendor the bundled modules into the project found from the current directory.
pub fn vendor() -> Result<VendorOutcome, AppError> {
    vendor_with(VendorOptions::default())
}

/// Vendor the bundled modules into the project rooted at `path`.
pub fn vendor_at(path: impl Into<PathBuf>) -> Result<VendorOutcome, AppError> {
    vendor_with(VendorOptions { project_root: Some(path.into()) })
}

/// Vendor the bundled modules according to `options`.
pub fn vendor_with(options: VendorOptions) -> Result<VendorOutcome, AppError> {
    let root = options.resolve_root()?;
    ensure_usable_root(&root)?;
    commands::vendor::execute(&create_context(), &root)
}

/// Summaries of every bundled module.
pub fn modules() -> Result<Vec<ModuleSummary>, AppError> {
    commands::modules::list(&EmbeddedModuleSource::new())
}

/// Summary of one bundled module by name.
pub fn module(name: &str) -> Result<ModuleSummary, AppError> {
    commands::modules::show(&EmbeddedModuleSource::new(), name)
}

/// The project root located from the current directory.
pub fn project_root() -> Result<PathBuf, AppError> {
    current_project_root()
}

/// A missing root is fine (scaffolding creates it); an existing non-directory is not.
fn ensure_usable_root(root: &Path) -> Result<(), AppError> {
    match fs::metadata(root) {
        Ok(meta) if !meta.is_dir() => Err(AppError::config_error(format!(
            "Project root {} is not a directory",
            root.display()
        ))),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::Io(err)),
    }
}
