//! In-memory scene tree

use std::collections::HashMap;

use glam::{Mat4, Quat, Vec3};

use super::{NodeId, SceneProvider};
use crate::bounds::BoundingBox;
use crate::pose::Pose;

#[derive(Debug, Clone)]
struct SceneNode {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: Pose,
    /// Mesh bounds in the node's local space
    mesh_bounds: Option<BoundingBox>,
}

/// A parent/child tree of nodes with local transforms
///
/// Serves hosts that have no scene graph of their own, and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    nodes: HashMap<NodeId, SceneNode>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node with the given pose
    pub fn spawn(&mut self, name: impl Into<String>, pose: Pose) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(
            id,
            SceneNode {
                name: name.into(),
                parent: None,
                children: Vec::new(),
                local: pose,
                mesh_bounds: None,
            },
        );
        id
    }

    /// Add a child of `parent` with a pose relative to it
    pub fn spawn_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        local: Pose,
    ) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            tracing::warn!("Cannot add child to unknown node {}", parent);
            return None;
        }
        let id = NodeId::new();
        self.nodes.insert(
            id,
            SceneNode {
                name: name.into(),
                parent: Some(parent),
                children: Vec::new(),
                local,
                mesh_bounds: None,
            },
        );
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }
        Some(id)
    }

    /// Attach geometry bounds (in local space) to a node
    pub fn set_mesh_bounds(&mut self, node: NodeId, bounds: BoundingBox) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.mesh_bounds = Some(bounds);
        }
    }

    /// Remove a node and its whole subtree
    pub fn remove(&mut self, node: NodeId) {
        let Some(removed) = self.nodes.remove(&node) else {
            return;
        };
        if let Some(parent) = removed.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != node);
        }
        let mut stack = removed.children;
        while let Some(child) = stack.pop() {
            if let Some(n) = self.nodes.remove(&child) {
                stack.extend(n.children);
            }
        }
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.name.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn local_pose(&self, node: NodeId) -> Option<Pose> {
        self.nodes.get(&node).map(|n| n.local)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Local-to-world matrix of a node
    pub fn world_matrix(&self, node: NodeId) -> Option<Mat4> {
        let n = self.nodes.get(&node)?;
        let local = n.local.to_matrix();
        match n.parent {
            Some(parent) => Some(self.world_matrix(parent)? * local),
            None => Some(local),
        }
    }

    fn parent_matrix(&self, node: NodeId) -> Mat4 {
        self.parent(node)
            .and_then(|p| self.world_matrix(p))
            .unwrap_or(Mat4::IDENTITY)
    }

    fn parent_rotation(&self, node: NodeId) -> Quat {
        self.parent(node)
            .and_then(|p| self.rotation(p))
            .unwrap_or(Quat::IDENTITY)
    }

    fn subtree_renderer_bounds(&self, node: NodeId) -> Option<BoundingBox> {
        let mut result: Option<BoundingBox> = None;
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(b) = self.renderer_bounds(current) {
                result = Some(match result {
                    Some(acc) => acc.union(&b),
                    None => b,
                });
            }
            stack.extend_from_slice(self.children(current));
        }
        result
    }
}

impl SceneProvider for MemoryScene {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn position(&self, node: NodeId) -> Option<Vec3> {
        self.world_matrix(node).map(|m| m.w_axis.truncate())
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) {
        let local = self.parent_matrix(node).inverse().transform_point3(position);
        if let Some(n) = self.nodes.get_mut(&node) {
            n.local.position = local;
        }
    }

    fn rotation(&self, node: NodeId) -> Option<Quat> {
        let n = self.nodes.get(&node)?;
        let local = n.local.rotation;
        match n.parent {
            Some(parent) => Some((self.rotation(parent)? * local).normalize()),
            None => Some(local),
        }
    }

    fn set_rotation(&mut self, node: NodeId, rotation: Quat) {
        let local = (self.parent_rotation(node).inverse() * rotation).normalize();
        if let Some(n) = self.nodes.get_mut(&node) {
            n.local.rotation = local;
        }
    }

    fn local_scale(&self, node: NodeId) -> Option<Vec3> {
        self.nodes.get(&node).map(|n| n.local.scale)
    }

    fn set_local_scale(&mut self, node: NodeId, scale: Vec3) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.local.scale = scale;
        }
    }

    fn world_scale(&self, node: NodeId) -> Option<Vec3> {
        let n = self.nodes.get(&node)?;
        match n.parent {
            Some(parent) => Some(self.world_scale(parent)? * n.local.scale),
            None => Some(n.local.scale),
        }
    }

    fn renderer_bounds(&self, node: NodeId) -> Option<BoundingBox> {
        let mesh = self.nodes.get(&node)?.mesh_bounds?;
        Some(mesh.transform(&self.world_matrix(node)?))
    }

    fn hierarchy_bounds(&self, node: NodeId) -> BoundingBox {
        self.subtree_renderer_bounds(node).unwrap_or_else(|| {
            BoundingBox::at_point(self.position(node).unwrap_or(Vec3::ZERO))
        })
    }

    fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }
}
