use std::io;
use std::path::{Path, PathBuf};

/// Kind of an entry in a module source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEntryKind {
    File,
    Dir,
    /// Anything that is neither a regular file nor a directory (symlinks, devices).
    Other,
}

/// An entry in a module source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path relative to the source root, starting with the module name.
    pub path: PathBuf,
    pub kind: SourceEntryKind,
}

impl SourceEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: SourceEntryKind::File }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), kind: SourceEntryKind::Dir }
    }

    pub fn is_regular_file(&self) -> bool {
        self.kind == SourceEntryKind::File
    }
}

/// Port for the read-only tree of bundled modules.
pub trait ModuleSource {
    /// Every entry of the tree, depth-first, in a stable order.
    fn entries(&self) -> Vec<SourceEntry>;

    /// Read the bytes of a regular file by its relative path.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}
