//! Output path derivation.

use std::path::{Component, Path, PathBuf};

use crate::qualified_name;

/// File extension of generated declaration files.
pub const DECLARATION_EXTENSION: &str = "ts";

/// Derive a file path from a qualified name.
///
/// The package segment is dropped and the remaining segments become
/// directories, e.g. `pkg.nested.Options` → `nested/Options.ts`.
pub fn fqn_to_path(fqn: &str) -> PathBuf {
    let mut path: PathBuf = qualified_name::local_path(fqn).split('.').collect();
    path.set_extension(DECLARATION_EXTENSION);
    path
}

/// Import specifier that reaches `target_dir` from the directory of `from_file`.
///
/// Always ends with `/`; returns `./` when both are the same directory.
/// Paths are compared lexically and should share the same base.
pub fn relative_import(from_file: &Path, target_dir: &Path) -> String {
    let from_dir = from_file.parent().unwrap_or_else(|| Path::new(""));
    let from: Vec<_> = normal_components(from_dir);
    let target: Vec<_> = normal_components(target_dir);

    let common = from
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n("..".to_string(), from.len() - common));
    segments.extend(target[common..].iter().cloned());

    if segments.is_empty() {
        "./".to_string()
    } else {
        format!("{}/", segments.join("/"))
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::RootDir => Some(String::new()),
            _ => None,
        })
        .collect()
}
