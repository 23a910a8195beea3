//! Catalog of the bundled modules.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::{AppError, Module};
use crate::ports::ModuleSource;

/// Summary of one bundled module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub files: usize,
    pub bytes: u64,
    /// SHA-256 over every `(path, contents)` pair of the module, in path order.
    pub digest: String,
}

/// Summarize every bundled module, in swap order.
pub fn list<S: ModuleSource>(source: &S) -> Result<Vec<ModuleSummary>, AppError> {
    Module::ALL.iter().map(|&module| summarize(source, module)).collect()
}

/// Summarize a single bundled module.
pub fn show<S: ModuleSource>(source: &S, name: &str) -> Result<ModuleSummary, AppError> {
    let module: Module = name.parse()?;
    summarize(source, module)
}

fn summarize<S: ModuleSource>(source: &S, module: Module) -> Result<ModuleSummary, AppError> {
    let mut paths: Vec<_> = source
        .entries()
        .into_iter()
        .filter(|entry| entry.is_regular_file() && entry.path.starts_with(module.dir_name()))
        .map(|entry| entry.path)
        .collect();
    paths.sort();

    let mut hasher = Sha256::new();
    let mut bytes = 0u64;
    for path in &paths {
        let contents = source
            .read(path)
            .map_err(|err| AppError::Extraction { path: path.clone(), source: err })?;
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        hasher.update((contents.len() as u64).to_be_bytes());
        hasher.update(&contents);
        bytes += contents.len() as u64;
    }
    let digest = hasher.finalize();

    Ok(ModuleSummary {
        name: module.dir_name().to_string(),
        files: paths.len(),
        bytes,
        digest: digest.iter().map(|byte| format!("{:02x}", byte)).collect(),
    })
}
