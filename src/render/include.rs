//! Include-path resolution for `include::` directives.

use crate::config::{PathMode, ANTORA_PREFIX};
use crate::model::SourceFile;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Path used to include `file_name`, a sibling of the source file.
pub fn include_path(source: &SourceFile, file_name: &str, mode: &PathMode) -> String {
    let full = source.dir.join(file_name);
    match mode {
        PathMode::Antora => format!("{}{}", ANTORA_PREFIX, file_name),
        PathMode::Prefix(prefix) => format!("{}{}", prefix, file_name),
        PathMode::RelativeTo(base) => match normalize(&full).strip_prefix(normalize(base)) {
            Ok(relative) => relative.to_string_lossy().to_string(),
            Err(_) => {
                debug!(
                    path = %full.display(),
                    base = %base.display(),
                    "path not under --relative-to directory, using full path"
                );
                full.to_string_lossy().to_string()
            }
        },
        PathMode::Absolute => full.to_string_lossy().to_string(),
    }
}

/// Lexically clean a path: drop `.` and fold `..` into the preceding
/// component. `..` directly under the root is dropped; leading `..` of a
/// relative path is kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
