//! Doc block lines.

use structsmith_ir::Docs;

/// Turn docs into the lines of a `/** ... */` block.
///
/// Order: summary, remarks (one line per line break), `@default`,
/// `@deprecated`, `@stability`, then every custom tag. Empty entries are
/// skipped.
pub fn docs_to_lines(docs: Option<&Docs>) -> Vec<String> {
    let Some(docs) = docs else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if let Some(summary) = non_empty(&docs.summary) {
        lines.push(summary.to_string());
    }
    if let Some(remarks) = non_empty(&docs.remarks) {
        lines.extend(remarks.split('\n').map(str::to_string));
    }
    if let Some(default) = non_empty(&docs.default) {
        lines.push(format!("@default {default}"));
    }
    if let Some(deprecated) = non_empty(&docs.deprecated) {
        lines.push(format!("@deprecated {deprecated}"));
    }
    if let Some(stability) = docs.stability {
        lines.push(format!("@stability {stability}"));
    }
    for (tag, value) in &docs.custom {
        lines.push(format!("@{tag} {value}"));
    }
    lines
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
