//! Handle manager errors

use rth_core::NodeId;

use crate::ids::HandleId;

/// Failures of manager operations
///
/// None of these are fatal. The manager logs each one and leaves its state
/// unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandleError {
    /// The node already belongs to some handle
    #[error("Node {0} is already handled")]
    AlreadyHandled(NodeId),
    /// A list-based operation got no nodes
    #[error("Empty target list")]
    EmptyList,
    /// No handle with this id
    #[error("Unknown handle: {0}")]
    UnknownHandle(HandleId),
    /// The scene does not know this node
    #[error("Unknown target: {0}")]
    UnknownTarget(NodeId),
    /// The node is not a member of the handle
    #[error("Node {0} is not handled by this handle")]
    NotHandled(NodeId),
    /// An ancestor of the node is already a member
    #[error("Node {0} is a descendant of an existing member")]
    HierarchyConflict(NodeId),
}
