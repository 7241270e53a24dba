//! Group membership and coordinated pose updates

use glam::{Quat, Vec3};
use rth_core::{BoundingBox, NodeId, Origin, Pose, SceneProvider, Space};

use crate::error::HandleError;

#[derive(Debug, Clone)]
struct GroupMember {
    node: NodeId,
    /// Bounds at the last refresh
    bounds: BoundingBox,
    /// Whether the node has geometry of its own
    has_renderer: bool,
}

impl GroupMember {
    fn new(scene: &dyn SceneProvider, node: NodeId) -> Self {
        let renderer = scene.renderer_bounds(node);
        Self {
            node,
            bounds: renderer.unwrap_or_else(|| scene.hierarchy_bounds(node)),
            has_renderer: renderer.is_some(),
        }
    }
}

/// The nodes bound to one handle
///
/// No member is an ancestor of another member; [`add_transform`] enforces
/// this on insertion.
///
/// [`add_transform`]: TransformGroup::add_transform
#[derive(Debug, Clone, Default)]
pub struct TransformGroup {
    members: Vec<GroupMember>,
    origin: Origin,
}

impl TransformGroup {
    /// Empty group using pivot origins
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    ///
    /// Fails if a member is an ancestor of `node`. Members that `node` is an
    /// ancestor of are removed and returned.
    pub fn add_transform(
        &mut self,
        scene: &dyn SceneProvider,
        node: NodeId,
    ) -> Result<Vec<NodeId>, HandleError> {
        if self.contains(node) {
            return Err(HandleError::AlreadyHandled(node));
        }
        if self
            .members
            .iter()
            .any(|m| scene.is_ancestor_of(m.node, node))
        {
            return Err(HandleError::HierarchyConflict(node));
        }

        let mut superseded = Vec::new();
        self.members.retain(|m| {
            let covered = scene.is_ancestor_of(node, m.node);
            if covered {
                superseded.push(m.node);
            }
            !covered
        });

        self.members.push(GroupMember::new(scene, node));
        Ok(superseded)
    }

    /// Remove a node; returns true if the group is now empty
    pub fn remove_transform(&mut self, node: NodeId) -> bool {
        self.members.retain(|m| m.node != node);
        self.members.is_empty()
    }

    /// True if `node` is a member
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.iter().any(|m| m.node == node)
    }

    /// Members in insertion order
    pub fn members(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().map(|m| m.node)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Reference point used for averaging
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// True if members are averaged by their bounds centers
    pub fn is_origin_on_center(&self) -> bool {
        self.origin.is_center()
    }

    /// Switch between pivot and bounds-center averaging
    pub fn set_origin_on_center(&mut self, on_center: bool) {
        self.origin = Origin::from_center(on_center);
    }

    /// Cached bounds of a member
    pub fn cached_bounds(&self, node: NodeId) -> Option<BoundingBox> {
        self.members.iter().find(|m| m.node == node).map(|m| m.bounds)
    }

    fn center_point(&self, scene: &dyn SceneProvider, member: &GroupMember) -> Vec3 {
        match self.origin {
            Origin::Center => member.bounds.center(),
            Origin::Pivot => scene.position(member.node).unwrap_or(member.bounds.center()),
        }
    }

    /// Pose the ghost should take for this group.
    ///
    /// Position is the mean of member reference points. Rotation is the
    /// product of member rotations in local space and identity in world
    /// space. Scale is always one.
    pub fn average_pose(&self, scene: &dyn SceneProvider, space: Space) -> Pose {
        if self.members.is_empty() {
            return Pose::IDENTITY;
        }

        let mut position_sum = Vec3::ZERO;
        let mut rotation = Quat::IDENTITY;
        for member in &self.members {
            position_sum += self.center_point(scene, member);
            if space == Space::Local {
                rotation *= scene.rotation(member.node).unwrap_or(Quat::IDENTITY);
            }
        }

        Pose::new(
            position_sum / self.members.len() as f32,
            rotation.normalize(),
            Vec3::ONE,
        )
    }

    /// Translate every member
    pub fn update_positions(&self, scene: &mut dyn SceneProvider, delta: Vec3) {
        for member in &self.members {
            if let Some(position) = scene.position(member.node) {
                scene.set_position(member.node, position + delta);
            }
        }
    }

    /// Rotate every member about `pivot`.
    ///
    /// Local space orbits each member and also spins it by `delta`. World
    /// space only orbits, member orientations stay as they are.
    pub fn update_rotations(
        &self,
        scene: &mut dyn SceneProvider,
        delta: Quat,
        pivot: Vec3,
        space: Space,
    ) {
        let orbit = match space {
            Space::Local => delta,
            Space::World => {
                let (axis, angle) = delta.to_axis_angle();
                if angle.abs() <= f32::EPSILON {
                    return;
                }
                Quat::from_axis_angle(axis, angle)
            }
        };

        for member in &self.members {
            let Some(position) = scene.position(member.node) else {
                continue;
            };
            scene.set_position(member.node, orbit * (position - pivot) + pivot);

            if space == Space::Local
                && let Some(rotation) = scene.rotation(member.node)
            {
                scene.set_rotation(member.node, (delta * rotation).normalize());
            }
        }
    }

    /// Add `delta` to every member's local scale.
    ///
    /// With center origins, members with geometry are shifted so their
    /// bounds center stays in place.
    pub fn update_scales(&self, scene: &mut dyn SceneProvider, delta: Vec3) {
        for member in &self.members {
            let Some(scale) = scene.local_scale(member.node) else {
                continue;
            };

            let keep_center = self.origin.is_center() && member.has_renderer;
            let old_center = keep_center
                .then(|| scene.renderer_bounds(member.node))
                .flatten()
                .map(|b| b.center());

            scene.set_local_scale(member.node, scale + delta);

            if let Some(old_center) = old_center
                && let Some(new_bounds) = scene.renderer_bounds(member.node)
                && let Some(position) = scene.position(member.node)
            {
                let shift = new_bounds.center() - old_center;
                scene.set_position(member.node, position - shift);
            }
        }
    }

    /// Refresh cached bounds of every member
    pub fn update_bounds(&mut self, scene: &dyn SceneProvider) {
        for member in &mut self.members {
            *member = GroupMember::new(scene, member.node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rth_core::MemoryScene;
    use std::f32::consts::FRAC_PI_2;

    fn two_boxes() -> (MemoryScene, NodeId, NodeId) {
        let mut scene = MemoryScene::new();
        let a = scene.spawn("a", Pose::IDENTITY);
        let b = scene.spawn("b", Pose::from_position(Vec3::new(2.0, 0.0, 0.0)));
        (scene, a, b)
    }

    #[test]
    fn test_pivot_averaging() {
        let (mut scene, a, b) = two_boxes();
        // geometry offset from the pivot so centers differ from positions
        scene.set_mesh_bounds(a, BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0)));
        scene.set_mesh_bounds(b, BoundingBox::new(Vec3::ZERO, Vec3::splat(2.0)));

        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.add_transform(&scene, b).unwrap();

        let avg = group.average_pose(&scene, Space::Local);
        assert!(avg.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
        assert_eq!(avg.scale, Vec3::ONE);

        group.set_origin_on_center(true);
        let avg = group.average_pose(&scene, Space::Local);
        assert!(avg.position.abs_diff_eq(Vec3::new(2.0, 1.0, 1.0), 1e-6));
    }

    #[test]
    fn test_world_average_rotation_is_identity() {
        let mut scene = MemoryScene::new();
        let a = scene.spawn("a", Pose::IDENTITY.with_rotation(Quat::from_rotation_y(0.7)));
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();

        assert_eq!(group.average_pose(&scene, Space::World).rotation, Quat::IDENTITY);
        assert!(group
            .average_pose(&scene, Space::Local)
            .rotation
            .abs_diff_eq(Quat::from_rotation_y(0.7), 1e-6));
    }

    #[test]
    fn test_empty_group_average() {
        let scene = MemoryScene::new();
        let group = TransformGroup::new();
        assert_eq!(group.average_pose(&scene, Space::Local), Pose::IDENTITY);
    }

    #[test]
    fn test_descendant_rejected() {
        let mut scene = MemoryScene::new();
        let parent = scene.spawn("parent", Pose::IDENTITY);
        let child = scene.spawn_child(parent, "child", Pose::IDENTITY).unwrap();
        let grandchild = scene.spawn_child(child, "grandchild", Pose::IDENTITY).unwrap();

        let mut group = TransformGroup::new();
        group.add_transform(&scene, parent).unwrap();
        assert_eq!(
            group.add_transform(&scene, grandchild),
            Err(HandleError::HierarchyConflict(grandchild))
        );
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_ancestor_supersedes_descendants() {
        let mut scene = MemoryScene::new();
        let parent = scene.spawn("parent", Pose::IDENTITY);
        let c1 = scene.spawn_child(parent, "c1", Pose::IDENTITY).unwrap();
        let c2 = scene.spawn_child(parent, "c2", Pose::IDENTITY).unwrap();
        let other = scene.spawn("other", Pose::IDENTITY);

        let mut group = TransformGroup::new();
        group.add_transform(&scene, c1).unwrap();
        group.add_transform(&scene, c2).unwrap();
        group.add_transform(&scene, other).unwrap();

        let removed = group.add_transform(&scene, parent).unwrap();
        assert_eq!(removed, vec![c1, c2]);
        assert_eq!(group.members().collect::<Vec<_>>(), vec![other, parent]);
    }

    #[test]
    fn test_remove_reports_empty() {
        let (scene, a, b) = two_boxes();
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.add_transform(&scene, b).unwrap();

        assert!(!group.remove_transform(a));
        assert!(group.remove_transform(b));
    }

    #[test]
    fn test_update_positions() {
        let (mut scene, a, b) = two_boxes();
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.add_transform(&scene, b).unwrap();

        group.update_positions(&mut scene, Vec3::new(3.0, 0.0, 0.0));
        assert!(scene.position(a).unwrap().abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert!(scene.position(b).unwrap().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_local_rotation_inverse_restores() {
        let mut scene = MemoryScene::new();
        let start = Quat::from_euler(glam::EulerRot::XYZ, 0.2, 0.4, -0.1);
        let a = scene.spawn(
            "a",
            Pose::from_position(Vec3::new(1.0, 2.0, 0.0)).with_rotation(start),
        );
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();

        let pivot = Vec3::new(1.0, 2.0, 0.0);
        let delta = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.9);
        group.update_rotations(&mut scene, delta, pivot, Space::Local);
        assert!(!scene.rotation(a).unwrap().abs_diff_eq(start, 1e-3));

        group.update_rotations(&mut scene, delta.inverse(), pivot, Space::Local);
        assert!(scene.rotation(a).unwrap().abs_diff_eq(start, 1e-5));
        assert!(scene.position(a).unwrap().abs_diff_eq(pivot, 1e-5));
    }

    #[test]
    fn test_world_rotation_orbits_without_spin() {
        let (mut scene, a, b) = two_boxes();
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.add_transform(&scene, b).unwrap();

        let pivot = Vec3::new(1.0, 0.0, 0.0);
        group.update_rotations(&mut scene, Quat::from_rotation_y(FRAC_PI_2), pivot, Space::World);

        // (2,0,0) orbits a quarter turn about +Y around (1,0,0)
        assert!(scene.position(b).unwrap().abs_diff_eq(Vec3::new(1.0, 0.0, -1.0), 1e-5));
        assert!(scene.position(a).unwrap().abs_diff_eq(Vec3::new(1.0, 0.0, 1.0), 1e-5));
        assert_eq!(scene.rotation(a).unwrap(), Quat::IDENTITY);
    }

    #[test]
    fn test_scale_about_center() {
        let mut scene = MemoryScene::new();
        let a = scene.spawn("a", Pose::from_position(Vec3::new(1.0, 0.0, 0.0)));
        scene.set_mesh_bounds(a, BoundingBox::new(Vec3::ZERO, Vec3::ONE));

        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.set_origin_on_center(true);

        let before = scene.bounds(a);
        group.update_scales(&mut scene, Vec3::new(1.0, 0.5, 0.0));
        let after = scene.bounds(a);

        assert!(after.center().abs_diff_eq(before.center(), 1e-5));
        assert_relative_eq!(after.size().x, 2.0 * before.size().x, epsilon = 1e-5);
        assert_relative_eq!(after.size().y, 1.5 * before.size().y, epsilon = 1e-5);
        assert_relative_eq!(after.size().z, before.size().z, epsilon = 1e-5);
    }

    #[test]
    fn test_scale_about_pivot() {
        let mut scene = MemoryScene::new();
        let a = scene.spawn("a", Pose::from_position(Vec3::new(1.0, 0.0, 0.0)));
        scene.set_mesh_bounds(a, BoundingBox::new(Vec3::ZERO, Vec3::ONE));

        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();
        group.update_scales(&mut scene, Vec3::ONE);

        assert_eq!(scene.position(a).unwrap(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(scene.local_scale(a).unwrap(), Vec3::splat(2.0));
    }

    #[test]
    fn test_update_bounds_refreshes_cache() {
        let mut scene = MemoryScene::new();
        let a = scene.spawn("a", Pose::IDENTITY);
        scene.set_mesh_bounds(a, BoundingBox::new(Vec3::ZERO, Vec3::ONE));
        let mut group = TransformGroup::new();
        group.add_transform(&scene, a).unwrap();

        scene.set_position(a, Vec3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(group.cached_bounds(a).unwrap().center().x, 0.5);
        group.update_bounds(&scene);
        assert_relative_eq!(group.cached_bounds(a).unwrap().center().x, 4.5);
    }
}
