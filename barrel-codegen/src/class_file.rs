//! Assembly of one generated index-class file.

use crate::builder::CodeBuilder;
use crate::imports::ImportSet;
use crate::render::render_into;
use crate::tree::Node;

/// Banner emitted at the top of every generated file.
const GENERATED_BANNER: &[&str] = &[
    "/**",
    " * Generated by barrel. Do not edit: contents are rewritten on every run.",
    " */",
];

/// A generated index-class file: banner, sorted import block, then the class
/// declaration wrapping the serialized namespace tree.
pub struct ClassFile<'a> {
    class_name: &'a str,
    extends: Option<&'a str>,
    imports: &'a ImportSet,
    tree: &'a Node,
    prefix: Option<&'a str>,
}

impl<'a> ClassFile<'a> {
    pub fn new(class_name: &'a str, imports: &'a ImportSet, tree: &'a Node) -> Self {
        Self {
            class_name,
            extends: None,
            imports,
            tree,
            prefix: None,
        }
    }

    /// Set the base class for an `extends` clause.
    pub fn extends(mut self, base: Option<&'a str>) -> Self {
        self.extends = base;
        self
    }

    /// Set literal text emitted at the top of the class body.
    pub fn prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Render the complete file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for line in GENERATED_BANNER {
            builder.push_line(line);
        }
        builder.push_blank();

        for statement in self.imports.statements() {
            builder.push_line(statement);
        }
        if !self.imports.is_empty() {
            builder.push_blank();
        }

        builder.push_raw(&format!("export class {}", self.class_name));
        if let Some(base) = self.extends {
            builder.push_raw(&format!(" extends {}", base));
        }
        builder.push_raw(" ");
        render_into(&mut builder, self.tree, true, self.prefix);

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::Import;
    use crate::mapper::ExportBinding;
    use crate::tree::NamespaceTree;

    #[test]
    fn test_render_plain_class() {
        let mut tree = NamespaceTree::new();
        tree.insert(&[], ExportBinding::new("UserService", "./userService"))
            .unwrap();
        let mut imports = ImportSet::new();
        imports.add(&Import::new("UserService", "./userService"));
        let root = tree.into_root();

        let rendered = ClassFile::new("Services", &imports, &root).render();

        assert_eq!(
            rendered,
            r#"/**
 * Generated by barrel. Do not edit: contents are rewritten on every run.
 */

import {UserService} from "./userService";

export class Services {
  UserService = UserService;
}
"#
        );
    }

    #[test]
    fn test_render_with_extends_clause() {
        let tree = NamespaceTree::new();
        let mut imports = ImportSet::new();
        imports.add(&Import::new("BaseRegistry", "./base"));
        let root = tree.into_root();

        let rendered = ClassFile::new("Services", &imports, &root)
            .extends(Some("BaseRegistry"))
            .render();

        assert!(rendered.contains("import {BaseRegistry} from \"./base\";"));
        assert!(rendered.contains("export class Services extends BaseRegistry {"));
    }

    #[test]
    fn test_render_with_prefix_content() {
        let tree = NamespaceTree::new();
        let imports = ImportSet::new();
        let root = tree.into_root();

        let rendered = ClassFile::new("Services", &imports, &root)
            .prefix(Some("private constructor() {}"))
            .render();

        assert!(rendered.contains("export class Services {\n  private constructor() {}\n}"));
    }

    #[test]
    fn test_render_without_imports_has_no_double_blank() {
        let tree = NamespaceTree::new();
        let imports = ImportSet::new();
        let root = tree.into_root();

        let rendered = ClassFile::new("Empty", &imports, &root).render();
        assert!(rendered.contains(" */\n\nexport class Empty {"));
    }
}
