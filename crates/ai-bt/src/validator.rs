use crate::{Tree, TreeError};

/// Construction-time structural check run whenever a tree is installed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeValidator;

impl TreeValidator {
    pub fn new() -> Self {
        Self
    }

    /// The root must be a [`RootNode`](crate::RootNode) with at least one child.
    pub fn validate<C: 'static>(&self, tree: &Tree<C>) -> Result<(), TreeError> {
        let root = tree.root();
        let is_marker = tree
            .node(root)
            .map(|node| node.is_root_marker())
            .unwrap_or(false);
        if !is_marker {
            return Err(TreeError::RootNotMarker);
        }

        if tree.children(root).is_empty() {
            return Err(TreeError::RootWithoutChildren);
        }

        Ok(())
    }
}
