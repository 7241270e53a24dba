//! Scene access
//!
//! The handle engine never owns scene nodes. It reads and writes them through
//! [`SceneProvider`], identified by [`NodeId`].

mod memory;

pub use memory::MemoryScene;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::BoundingBox;
use crate::pose::Pose;

/// Opaque reference to a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read/write access to target nodes
///
/// Positions and rotations are world space, scale is local. Setters on an
/// unknown node are ignored.
pub trait SceneProvider {
    fn contains(&self, node: NodeId) -> bool;

    fn position(&self, node: NodeId) -> Option<Vec3>;
    fn set_position(&mut self, node: NodeId, position: Vec3);

    fn rotation(&self, node: NodeId) -> Option<Quat>;
    fn set_rotation(&mut self, node: NodeId, rotation: Quat);

    fn local_scale(&self, node: NodeId) -> Option<Vec3>;
    fn set_local_scale(&mut self, node: NodeId, scale: Vec3);

    /// Accumulated scale including all parents
    fn world_scale(&self, node: NodeId) -> Option<Vec3>;

    /// World-space bounds of the node's own rendered geometry
    fn renderer_bounds(&self, node: NodeId) -> Option<BoundingBox>;

    /// Fallback bounds for nodes without geometry of their own
    fn hierarchy_bounds(&self, node: NodeId) -> BoundingBox;

    /// True if `ancestor` is a strict ancestor of `node` (any depth)
    fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool;

    fn bounds(&self, node: NodeId) -> BoundingBox {
        self.renderer_bounds(node)
            .unwrap_or_else(|| self.hierarchy_bounds(node))
    }

    /// World position, world rotation and local scale in one value
    fn pose(&self, node: NodeId) -> Option<Pose> {
        Some(Pose::new(
            self.position(node)?,
            self.rotation(node)?,
            self.local_scale(node)?,
        ))
    }
}
