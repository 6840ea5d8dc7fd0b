//! Deterministic serialization of the namespace tree.
//!
//! Rendering has two syntactic modes. At the class-body root, entries are
//! field initializers (`key = value;`); at every deeper level they are
//! object-literal properties (`key: value,`). Every entry carries its
//! terminator, including the last one, so regeneration diffs stay minimal.

use std::collections::BTreeMap;

use crate::builder::CodeBuilder;
use crate::tree::Node;

/// Render a node to text.
///
/// A leaf renders as its bare export name; the caller supplies surrounding
/// syntax. A branch renders as a braced block, one line per child in key
/// order. `prefix` lines are emitted at the top of the root block only.
pub fn render(node: &Node, is_root: bool, prefix: Option<&str>) -> String {
    let mut builder = CodeBuilder::typescript();
    render_into(&mut builder, node, is_root, prefix);
    builder.build()
}

pub(crate) fn render_into(
    builder: &mut CodeBuilder,
    node: &Node,
    is_root: bool,
    prefix: Option<&str>,
) {
    match node {
        Node::Leaf(binding) => {
            builder.push_raw(binding.export_name());
        }
        Node::Branch(children) => {
            builder.push_raw("{\n");
            builder.push_indent();
            if let Some(prefix) = prefix {
                for line in prefix.lines() {
                    builder.push_line(line);
                }
            }
            render_entries(builder, children, is_root);
            builder.push_dedent();
            builder.push_line("}");
        }
    }
}

fn render_entries(builder: &mut CodeBuilder, children: &BTreeMap<String, Node>, is_root: bool) {
    let (assign, terminator) = if is_root { (" = ", ";") } else { (": ", ",") };

    for (key, child) in children {
        match child {
            Node::Leaf(binding) => {
                builder.push_line(&format!(
                    "{key}{assign}{}{terminator}",
                    binding.export_name()
                ));
            }
            Node::Branch(grandchildren) => {
                builder.push_line(&format!("{key}{assign}{{"));
                builder.push_indent();
                render_entries(builder, grandchildren, false);
                builder.push_dedent();
                builder.push_line(&format!("}}{terminator}"));
            }
        }
    }
}
