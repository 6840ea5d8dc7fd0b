//! Import-statement aggregation for generated files.

use std::collections::BTreeSet;

use crate::mapper::ExportBinding;

/// A named TypeScript import: `import {Name} from "source";`
#[derive(Debug, Clone)]
pub struct Import {
    name: String,
    from: String,
}

impl Import {
    pub fn new(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
        }
    }

    /// Render the full import statement.
    pub fn statement(&self) -> String {
        format!("import {{{}}} from \"{}\";", self.name, self.from)
    }
}

/// Collects import statements, deduplicated and sorted lexicographically as
/// whole statements.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    statements: BTreeSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn add(&mut self, import: &Import) {
        self.statements.insert(import.statement());
    }

    /// Add the import statement for an export binding.
    pub fn add_binding(&mut self, binding: &ExportBinding) {
        self.add(&Import::new(binding.export_name(), binding.import_source()));
    }

    /// Iterate statements in their canonical sorted order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
