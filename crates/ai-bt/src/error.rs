use thiserror::Error;

use crate::NodeId;

/// Structural problems detected while building or installing a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("root node must be a root marker node")]
    RootNotMarker,

    #[error("root node must have children")]
    RootWithoutChildren,

    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),
}
