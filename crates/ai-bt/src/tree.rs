use core::fmt;

use crate::{Node, TreeError};

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Slot<C> {
    node: Box<dyn Node<C>>,
    children: Vec<NodeId>,
}

/// Arena-backed tree of boxed nodes.
///
/// Nodes are only ever appended as children of an existing node, so the
/// structure is acyclic with a single root at [`Tree::root`].
pub struct Tree<C> {
    slots: Vec<Slot<C>>,
}

impl<C> Tree<C> {
    pub fn new(root: impl Node<C>) -> Self {
        Self::from_boxed(Box::new(root))
    }

    pub fn from_boxed(root: Box<dyn Node<C>>) -> Self {
        Self {
            slots: vec![Slot {
                node: root,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Append `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: impl Node<C>) -> Result<NodeId, TreeError> {
        self.add_boxed_child(parent, Box::new(node))
    }

    pub fn add_boxed_child(
        &mut self,
        parent: NodeId,
        node: Box<dyn Node<C>>,
    ) -> Result<NodeId, TreeError> {
        if parent.index() >= self.slots.len() {
            return Err(TreeError::UnknownNode(parent));
        }

        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            node,
            children: Vec::new(),
        });
        self.slots[parent.index()].children.push(id);
        Ok(id)
    }

    /// Builder-style: append `node` as the last child of the root.
    pub fn with_child(mut self, node: impl Node<C>) -> Self {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            node: Box::new(node),
            children: Vec::new(),
        });
        self.slots[0].children.push(id);
        self
    }

    /// Children of `id` in insertion order; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.index())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&dyn Node<C>> {
        self.slots.get(id.index()).map(|slot| slot.node.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut dyn Node<C>> {
        match self.slots.get_mut(id.index()) {
            Some(slot) => Some(slot.node.as_mut()),
            None => None,
        }
    }
}

impl<C> fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .enumerate()
                    .map(|(i, slot)| (NodeId(i as u32), &slot.children)),
            )
            .finish()
    }
}
