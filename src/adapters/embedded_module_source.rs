use std::io;
use std::path::Path;

use include_dir::{Dir, DirEntry, include_dir};

use crate::ports::{ModuleSource, SourceEntry};

static MODULES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/modules");

/// Module source backed by the trees embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedModuleSource;

impl EmbeddedModuleSource {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleSource for EmbeddedModuleSource {
    fn entries(&self) -> Vec<SourceEntry> {
        let mut entries = Vec::new();
        collect_entries(&MODULES_DIR, &mut entries);
        entries
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        MODULES_DIR.get_file(path).map(|file| file.contents().to_vec()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not part of the embedded bundle", path.display()),
            )
        })
    }
}

fn collect_entries(dir: &'static Dir, entries: &mut Vec<SourceEntry>) {
    let mut children: Vec<&DirEntry> = dir.entries().iter().collect();
    children.sort_by(|a, b| a.path().cmp(b.path()));

    for entry in children {
        match entry {
            DirEntry::File(file) => entries.push(SourceEntry::file(file.path())),
            DirEntry::Dir(subdir) => {
                entries.push(SourceEntry::dir(subdir.path()));
                collect_entries(subdir, entries);
            }
        }
    }
}
