use super::LOCK_FILE;
use crate::domain::Module;

const HEADER: &str = "# generated by dagger";

/// Render the `cue.mod/pkg/.gitignore` content.
///
/// Lists the lock file and every bundled module, one per line, without a
/// trailing newline after the last entry.
pub fn render_gitignore() -> String {
    let mut lines = vec![HEADER, LOCK_FILE];
    lines.extend(Module::ALL.iter().map(Module::dir_name));
    lines.join("\n")
}
