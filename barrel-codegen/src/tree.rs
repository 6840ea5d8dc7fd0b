//! The namespace tree built from mapped files before serialization.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use thiserror::Error;

use crate::mapper::ExportBinding;

/// A node in the namespace tree: one export binding, or a nested scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(ExportBinding),
    Branch(BTreeMap<String, Node>),
}

/// A file and a directory claim the same namespace address.
#[derive(Debug, Error)]
#[error("namespace collision at '{address}': {existing} collides with module '{incoming}'")]
pub struct ConflictError {
    address: String,
    existing: String,
    incoming: String,
}

impl ConflictError {
    /// The dotted address both parties claim.
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// The namespace tree for one generated class. The root is always a branch;
/// sibling keys are kept in lexicographic order by construction.
#[derive(Debug, Clone, Default)]
pub struct NamespaceTree {
    root: BTreeMap<String, Node>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a binding at the address formed by `dirs` plus its export name.
    ///
    /// Missing intermediate scopes are created. A leaf occupying an
    /// intermediate segment, or a scope occupying the final segment, is a
    /// [`ConflictError`]. A leaf already occupying the final segment is
    /// displaced and returned, so the caller can surface the override.
    pub fn insert(
        &mut self,
        dirs: &[String],
        binding: ExportBinding,
    ) -> Result<Option<ExportBinding>, ConflictError> {
        let mut current = &mut self.root;

        for (depth, segment) in dirs.iter().enumerate() {
            let node = current
                .entry(segment.clone())
                .or_insert_with(|| Node::Branch(BTreeMap::new()));
            match node {
                Node::Branch(children) => current = children,
                Node::Leaf(existing) => {
                    return Err(ConflictError {
                        address: dirs[..=depth].join("."),
                        existing: format!("module '{}'", existing.import_source()),
                        incoming: binding.import_source().to_string(),
                    });
                }
            }
        }

        let address = if dirs.is_empty() {
            binding.export_name().to_string()
        } else {
            format!("{}.{}", dirs.join("."), binding.export_name())
        };

        match current.entry(binding.export_name().to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(Node::Leaf(binding));
                Ok(None)
            }
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Node::Branch(_) => Err(ConflictError {
                    address,
                    existing: "a directory scope".to_string(),
                    incoming: binding.import_source().to_string(),
                }),
                node @ Node::Leaf(_) => {
                    let displaced = std::mem::replace(node, Node::Leaf(binding));
                    match displaced {
                        Node::Leaf(displaced) => Ok(Some(displaced)),
                        Node::Branch(_) => Ok(None),
                    }
                }
            },
        }
    }

    /// Borrow the root scope.
    pub fn root(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    /// Consume the tree, yielding the root as a renderable node.
    pub fn into_root(self) -> Node {
        Node::Branch(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(name: &str, source: &str) -> ExportBinding {
        ExportBinding::new(name, source)
    }

    fn segments(dirs: &[&str]) -> Vec<String> {
        dirs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_at_root() {
        let mut tree = NamespaceTree::new();
        let displaced = tree
            .insert(&[], binding("UserService", "./userService"))
            .unwrap();

        assert!(displaced.is_none());
        assert!(matches!(tree.root().get("UserService"), Some(Node::Leaf(_))));
    }

    #[test]
    fn test_insert_creates_intermediate_scopes() {
        let mut tree = NamespaceTree::new();
        tree.insert(
            &segments(&["services", "admin"]),
            binding("RoleService", "./services/admin/roleService"),
        )
        .unwrap();

        let Some(Node::Branch(services)) = tree.root().get("services") else {
            panic!("expected a scope at 'services'");
        };
        let Some(Node::Branch(admin)) = services.get("admin") else {
            panic!("expected a scope at 'services.admin'");
        };
        assert!(matches!(admin.get("RoleService"), Some(Node::Leaf(_))));
    }

    #[test]
    fn test_sibling_scopes_merge() {
        let mut tree = NamespaceTree::new();
        tree.insert(
            &segments(&["services"]),
            binding("UserService", "./services/userService"),
        )
        .unwrap();
        tree.insert(
            &segments(&["services"]),
            binding("RoleService", "./services/roleService"),
        )
        .unwrap();

        let Some(Node::Branch(services)) = tree.root().get("services") else {
            panic!("expected a scope at 'services'");
        };
        assert_eq!(services.len(), 2);
    }

    #[test]
    fn test_leaf_under_leaf_is_a_conflict() {
        let mut tree = NamespaceTree::new();
        tree.insert(&[], binding("services", "./services"))
            .unwrap();

        let err = tree
            .insert(
                &segments(&["services"]),
                binding("UserService", "./services/userService"),
            )
            .unwrap_err();

        assert_eq!(err.address(), "services");
        assert!(err.to_string().contains("./services/userService"));
        assert!(err.to_string().contains("./services"));
    }

    #[test]
    fn test_leaf_over_scope_is_a_conflict() {
        let mut tree = NamespaceTree::new();
        tree.insert(
            &segments(&["services"]),
            binding("UserService", "./services/userService"),
        )
        .unwrap();

        let err = tree
            .insert(&[], binding("services", "./services"))
            .unwrap_err();

        assert_eq!(err.address(), "services");
        assert!(err.to_string().contains("directory scope"));
    }

    #[test]
    fn test_same_address_last_write_wins() {
        let mut tree = NamespaceTree::new();
        tree.insert(&[], binding("UserService", "./user-service"))
            .unwrap();
        let displaced = tree
            .insert(&[], binding("UserService", "./userService"))
            .unwrap()
            .expect("first binding should be displaced");

        assert_eq!(displaced.import_source(), "./user-service");

        let Some(Node::Leaf(kept)) = tree.root().get("UserService") else {
            panic!("expected a leaf at 'UserService'");
        };
        assert_eq!(kept.import_source(), "./userService");
    }

    #[test]
    fn test_root_keys_are_sorted() {
        let mut tree = NamespaceTree::new();
        tree.insert(&[], binding("Zeta", "./zeta")).unwrap();
        tree.insert(&[], binding("Alpha", "./alpha")).unwrap();

        let keys: Vec<&str> = tree.root().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Alpha", "Zeta"]);
    }
}
