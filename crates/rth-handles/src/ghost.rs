//! Pivot proxy of a handle group
//!
//! Interactors never touch scene nodes. They move the ghost, and the ghost
//! reports how far it moved since the last frame. The manager applies that
//! change to every member of the group.

use glam::{Quat, Vec3};
use rth_core::{HandleType, Pose};

use crate::ids::GhostId;

/// Per-frame change of the ghost pose, split by component
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GhostDelta {
    /// Translation since the previous frame
    pub position: Option<Vec3>,
    /// Rotation since the previous frame, `current * previous⁻¹`
    pub rotation: Option<Quat>,
    /// Additive scale change since the previous frame
    pub scale: Option<Vec3>,
}

/// Stand-in pose that interactors manipulate
#[derive(Debug, Clone)]
pub struct Ghost {
    id: GhostId,
    /// Current pose, written by interactors during a drag
    pub pose: Pose,
    initial: Pose,
}

impl Ghost {
    /// Ghost at the given pose
    pub fn new(pose: Pose) -> Self {
        Self {
            id: GhostId::new(),
            pose,
            initial: pose,
        }
    }

    /// Stable identifier
    pub fn id(&self) -> GhostId {
        self.id
    }

    /// Snapshot taken at interaction start or at the last frame
    pub fn initial(&self) -> Pose {
        self.initial
    }

    /// Snapshot the current pose
    pub fn on_interaction_start(&mut self) {
        self.initial = self.pose;
    }

    /// Report the change since the last snapshot for the components
    /// `handle_type` edits, then take a new snapshot
    pub fn on_interaction(&mut self, handle_type: HandleType) -> GhostDelta {
        let delta = GhostDelta {
            position: handle_type
                .has_position()
                .then(|| self.pose.position - self.initial.position),
            rotation: handle_type
                .has_rotation()
                .then(|| (self.pose.rotation * self.initial.rotation.inverse()).normalize()),
            scale: handle_type
                .has_scale()
                .then(|| self.pose.scale - self.initial.scale),
        };
        self.initial = self.pose;
        delta
    }

    /// Move the ghost to `pose` without reporting a change
    pub fn update_transform(&mut self, pose: Pose) {
        self.pose = pose;
        self.initial = pose;
    }

    /// Back to identity
    pub fn reset(&mut self) {
        self.update_transform(Pose::IDENTITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_delta_is_incremental() {
        let mut ghost = Ghost::new(Pose::from_position(Vec3::new(1.0, 0.0, 0.0)));
        ghost.on_interaction_start();

        ghost.pose.position = Vec3::new(2.0, 0.0, 0.0);
        let d = ghost.on_interaction(HandleType::Position);
        assert_eq!(d.position, Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(d.rotation, None);
        assert_eq!(d.scale, None);

        ghost.pose.position = Vec3::new(2.5, 0.0, 0.0);
        let d = ghost.on_interaction(HandleType::Position);
        assert_eq!(d.position, Some(Vec3::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_delta() {
        let mut ghost = Ghost::new(Pose::IDENTITY.with_rotation(Quat::from_rotation_y(0.3)));
        ghost.on_interaction_start();
        ghost.pose.rotation = Quat::from_rotation_y(0.8);

        let d = ghost.on_interaction(HandleType::Rotation);
        let (axis, angle) = d.rotation.unwrap().to_axis_angle();
        assert_relative_eq!(angle, 0.5, epsilon = 1e-5);
        assert!(axis.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn test_all_reports_every_component() {
        let mut ghost = Ghost::new(Pose::IDENTITY);
        ghost.on_interaction_start();
        ghost.pose.scale = Vec3::new(1.5, 1.0, 1.0);

        let d = ghost.on_interaction(HandleType::All);
        assert_eq!(d.position, Some(Vec3::ZERO));
        assert_eq!(d.scale, Some(Vec3::new(0.5, 0.0, 0.0)));
        assert!(d.rotation.is_some());
    }

    #[test]
    fn test_update_transform_resets_snapshot() {
        let mut ghost = Ghost::new(Pose::IDENTITY);
        ghost.update_transform(Pose::from_position(Vec3::ONE));
        let d = ghost.on_interaction(HandleType::Position);
        assert_eq!(d.position, Some(Vec3::ZERO));

        ghost.reset();
        assert_eq!(ghost.pose, Pose::IDENTITY);
    }
}
