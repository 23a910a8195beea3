//! cuevendor: vendor the bundled dagger CUE packages into a project's `cue.mod/pkg/`.
//!
//! One vendoring run scaffolds `cue.mod/`, takes an exclusive file lock, stages
//! every bundled module in a scratch directory, and renames each staged module
//! over the installed one.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    ModuleSummary, VendorOptions, VendorOutcome, module, modules, project_root, vendor, vendor_at,
    vendor_with,
};
pub use domain::{AppError, ENGINE_PACKAGE, Module};
