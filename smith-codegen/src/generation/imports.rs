//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use structsmith_core::{compare_lower_case, compare_module_specifier};

/// Tracks the symbols needed from each module and deduplicates them.
///
/// One collector is built per render call and discarded afterwards.
///
/// # Example
///
/// ```
/// use structsmith_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./", "OtherInterface");
/// imports.add("projen", "typescript");
/// imports.add("./", "more");
///
/// let modules: Vec<_> = imports.sorted().into_iter().map(|(m, _)| m).collect();
/// assert_eq!(modules, vec!["projen", "./"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module specifier -> set of symbols
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Modules and their symbols in output order.
    ///
    /// Modules follow [`compare_module_specifier`]; symbols within a
    /// module are ordered case-insensitively.
    pub fn sorted(&self) -> Vec<(&str, Vec<&str>)> {
        let mut modules: Vec<(&str, Vec<&str>)> = self
            .imports
            .iter()
            .map(|(module, symbols)| {
                let mut symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                symbols.sort_by(|a, b| compare_lower_case(a, b));
                (module.as_str(), symbols)
            })
            .collect();
        modules.sort_by(|(a, _), (b, _)| compare_module_specifier(a, b));
        modules
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_deduplicated() {
        let mut imports = ImportCollector::new();
        imports.add("projen", "typescript");
        imports.add("projen", "typescript");

        assert_eq!(imports.len(), 1);
        assert!(!imports.is_empty());
        assert_eq!(imports.sorted(), vec![("projen", vec!["typescript"])]);
    }

    #[test]
    fn test_symbols_sort_case_insensitively() {
        let mut imports = ImportCollector::new();
        imports.add("./", "OtherInterface");
        imports.add("./", "more");

        assert_eq!(imports.sorted(), vec![("./", vec!["more", "OtherInterface"])]);
    }

    #[test]
    fn test_relative_modules_sort_last() {
        let mut imports = ImportCollector::new();
        imports.add("../../", "Local");
        imports.add("projen", "typescript");
        imports.add("constructs", "Construct");

        let modules: Vec<_> = imports.sorted().into_iter().map(|(m, _)| m).collect();
        assert_eq!(modules, vec!["constructs", "projen", "../../"]);
    }
}
