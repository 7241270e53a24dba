use glam::{Quat, Vec3};
use rth_core::Axis;

use crate::constants::{AXIS_VISIBILITY_DOT_THRESHOLD, PLANE_OFFSET};

/// World transform of a gizmo, refreshed once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Gizmo origin
    pub position: Vec3,
    /// Gizmo orientation
    pub rotation: Quat,
    /// World size of one gizmo unit
    pub scale: f32,
    /// Camera view direction at the last placement
    pub view_forward: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            view_forward: Vec3::NEG_Z,
        }
    }
}

impl Placement {
    /// World direction of a gizmo axis
    pub fn axis_direction(&self, axis: Axis) -> Vec3 {
        self.rotation * axis.direction()
    }

    /// Gizmo-space point to world space
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (local * self.scale)
    }

    /// False when the axis points almost straight at or away from the camera
    pub fn is_axis_visible(&self, axis: Axis) -> bool {
        self.axis_direction(axis).dot(self.view_forward).abs() <= AXIS_VISIBILITY_DOT_THRESHOLD
    }

    /// Gizmo-space offset of the plane control with this normal.
    ///
    /// Each in-plane axis is flipped when it points away from the camera,
    /// so the control always sits in the quadrant facing the viewer.
    pub fn plane_offset(&self, normal: Axis) -> Vec3 {
        let (a, b) = normal.plane_axes();
        let facing = |axis: Axis| {
            let direction = axis.direction();
            if self.axis_direction(axis).dot(self.view_forward) > 0.0 {
                -direction
            } else {
                direction
            }
        };
        (facing(a) + facing(b)) * PLANE_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_hidden_when_facing_camera() {
        let placement = Placement::default();
        assert!(!placement.is_axis_visible(Axis::Z));
        assert!(placement.is_axis_visible(Axis::X));
        assert!(placement.is_axis_visible(Axis::Y));
    }

    #[test]
    fn test_plane_offset_faces_camera() {
        let mut placement = Placement::default();
        // looking down -Z: both X and Y are perpendicular, no flip
        assert_eq!(placement.plane_offset(Axis::Z), Vec3::new(0.125, 0.125, 0.0));

        // looking along +X and -Y from above-left
        placement.view_forward = Vec3::new(1.0, -1.0, 0.0).normalize();
        assert_eq!(placement.plane_offset(Axis::Z), Vec3::new(-0.125, 0.125, 0.0));
    }

    #[test]
    fn test_to_world() {
        let placement = Placement {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            scale: 2.0,
            view_forward: Vec3::NEG_Z,
        };
        assert!(placement.to_world(Vec3::X).abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-5));
    }
}
