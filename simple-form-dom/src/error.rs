use crate::NodeId;

/// Error type for page-model operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The handle does not refer to a live node of this document.
    #[error("Node {0:?} does not exist in this document")]
    InvalidNode(NodeId),

    /// The operation needs an element but got a text node.
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// Appending would make a node its own ancestor.
    #[error("Cannot insert {child:?} into its own descendant {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// The document element cannot be detached.
    #[error("The document root cannot be removed")]
    RootRemoval,
}
