use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Package inside `dagger.io` that holds the engine definitions.
pub const ENGINE_PACKAGE: &str = "dagger.io/dagger/engine";

/// A CUE module bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    /// Legacy `alpha.dagger.io` package set.
    Alpha,
    /// Core `dagger.io` packages (plan, engine).
    Dagger,
    /// Community `universe.dagger.io` packages.
    Universe,
}

impl Module {
    /// All bundled modules, in swap order.
    pub const ALL: [Module; 3] = [Module::Alpha, Module::Dagger, Module::Universe];

    /// Directory name of this module under `cue.mod/pkg/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Module::Alpha => "alpha.dagger.io",
            Module::Dagger => "dagger.io",
            Module::Universe => "universe.dagger.io",
        }
    }

    /// Parse a module from its directory name.
    pub fn from_dir_name(name: &str) -> Option<Module> {
        Module::ALL.into_iter().find(|module| module.dir_name() == name)
    }

    /// Comma separated list of every module name, for error messages.
    pub fn available() -> String {
        Module::ALL.iter().map(Module::dir_name).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Module {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::from_dir_name(s).ok_or_else(|| AppError::ModuleNotFound {
            name: s.to_string(),
            available: Module::available(),
        })
    }
}
