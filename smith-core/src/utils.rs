//! Ordering rules for generated output.

use std::cmp::Ordering;

/// Case-insensitive comparison, falling back to a byte comparison so the
/// order stays total.
pub fn compare_lower_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order module specifiers for import lines.
///
/// Bare package names come first, then relative or absolute paths
/// (starting with `.` or `/`); each group is ordered case-insensitively.
pub fn compare_module_specifier(a: &str, b: &str) -> Ordering {
    is_path_specifier(a)
        .cmp(&is_path_specifier(b))
        .then_with(|| compare_lower_case(a, b))
}

fn is_path_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}
