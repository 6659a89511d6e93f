//! Helpers for dot-separated qualified names (`pkg.nested.Name`).
//!
//! The first segment names the owning package; the remaining segments
//! locate the type inside it.

/// The owning package id (first segment).
pub fn package(fqn: &str) -> &str {
    fqn.split('.').next().unwrap_or(fqn)
}

/// The top-level exported symbol within the package (second segment).
///
/// Falls back to the whole name when there is no second segment.
pub fn top_level_symbol(fqn: &str) -> &str {
    fqn.split('.').nth(1).unwrap_or(fqn)
}

/// The path of the type inside its package (`nested.Name`).
///
/// Falls back to the whole name when there is no second segment.
pub fn local_path(fqn: &str) -> &str {
    match fqn.split_once('.') {
        Some((_, rest)) => rest,
        None => fqn,
    }
}

/// The local type name (last segment).
pub fn local_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}

/// Number of segments.
pub fn depth(fqn: &str) -> usize {
    fqn.split('.').count()
}

/// Check that `fqn` names a loadable type (`pkg.Name`, no empty segments).
///
/// Returns `None` if valid, `Some(reason)` if invalid.
pub fn validate(fqn: &str) -> Option<&'static str> {
    if fqn.is_empty() {
        return Some("qualified name cannot be empty");
    }
    if fqn.split('.').any(str::is_empty) {
        return Some("qualified name cannot contain empty segments");
    }
    if depth(fqn) < 2 {
        return Some("qualified name needs a package and a type name, e.g. 'pkg.Name'");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        let fqn = "projen.typescript.ProjenrcOptions";
        assert_eq!(package(fqn), "projen");
        assert_eq!(top_level_symbol(fqn), "typescript");
        assert_eq!(local_path(fqn), "typescript.ProjenrcOptions");
        assert_eq!(local_name(fqn), "ProjenrcOptions");
        assert_eq!(depth(fqn), 3);
    }

    #[test]
    fn test_single_segment_fallbacks() {
        assert_eq!(package("lonely"), "lonely");
        assert_eq!(top_level_symbol("lonely"), "lonely");
        assert_eq!(local_path("lonely"), "lonely");
    }

    #[test]
    fn test_scoped_package() {
        let fqn = "@my-scope/my-pkg.MyFunctionProps";
        assert_eq!(package(fqn), "@my-scope/my-pkg");
        assert_eq!(top_level_symbol(fqn), "MyFunctionProps");
    }

    #[test]
    fn test_validate() {
        assert!(validate("pkg.Name").is_none());
        assert!(validate("pkg.a.b.Name").is_none());
        assert!(validate("").is_some());
        assert!(validate("pkg").is_some());
        assert!(validate("pkg..Name").is_some());
        assert!(validate("pkg.Name.").is_some());
    }
}
