use glam::{Quat, Vec3};
use rth_core::math::signed_angle_in_plane;
use rth_core::snap::snap_value;
use rth_core::{Axis, Color, Plane, Space};

use super::{InteractionContext, Interactor, InteractorState};
use crate::constants::RING_RADIUS;
use crate::ids::InteractorKind;
use crate::visuals::ArcPreview;

/// Rotation about one axis
///
/// The drag angle is measured in the ring's plane from the grab direction
/// (`tangent`) towards `axis × tangent` (`bitangent`), and always applied
/// to the rotation captured at drag start.
#[derive(Debug, Clone)]
pub struct RotationAxis {
    axis: Axis,
    state: InteractorState,
    start_rotation: Quat,
    rotated_axis: Vec3,
    plane: Plane,
    start_hit: Vec3,
    tangent: Vec3,
    bitangent: Vec3,
}

impl RotationAxis {
    /// Control for `axis`
    pub fn new(axis: Axis, default_color: Color) -> Self {
        Self {
            axis,
            state: InteractorState::new(default_color),
            start_rotation: Quat::IDENTITY,
            rotated_axis: axis.direction(),
            plane: Plane::from_point_normal(Vec3::ZERO, axis.direction()),
            start_hit: Vec3::ZERO,
            tangent: Vec3::ZERO,
            bitangent: Vec3::ZERO,
        }
    }
}

impl Interactor for RotationAxis {
    fn kind(&self) -> InteractorKind {
        InteractorKind::RotationAxis(self.axis)
    }

    fn state(&self) -> &InteractorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractorState {
        &mut self.state
    }

    fn start_interaction(&mut self, ctx: &mut InteractionContext<'_>, hit_point: Vec3) {
        self.state.hit_point = hit_point;
        self.start_rotation = ctx.ghost.pose.rotation;
        self.rotated_axis = ctx.config.rotated_axis(self.start_rotation, self.axis);

        let center = ctx.ghost.pose.position;
        self.plane = Plane::from_point_normal(center, self.rotated_axis);
        self.start_hit = self
            .plane
            .raycast(&ctx.ray)
            .unwrap_or_else(|| self.plane.closest_point(hit_point));

        self.tangent = (self.start_hit - center).normalize_or_zero();
        self.bitangent = self.rotated_axis.cross(self.tangent);
    }

    fn interact(&mut self, ctx: &mut InteractionContext<'_>) {
        let Some(hit) = self.plane.raycast(&ctx.ray) else {
            return;
        };

        let center = ctx.ghost.pose.position;
        let direction = (hit - center).normalize_or_zero();
        let mut angle = signed_angle_in_plane(direction, self.tangent, self.bitangent);

        let step = ctx.config.rotation_snap;
        if step != 0.0 {
            angle = snap_value(angle.to_degrees(), step).to_radians();
        }

        ctx.ghost.pose.rotation = match ctx.config.space {
            Space::Local => self.start_rotation * Quat::from_axis_angle(self.axis.direction(), angle),
            Space::World => {
                let local_axis = (self.start_rotation.inverse() * self.axis.direction()).normalize();
                self.start_rotation * Quat::from_axis_angle(local_axis, angle)
            }
        }
        .normalize();
        self.state.delta = angle;

        let arc = ArcPreview::new(
            center,
            self.start_hit,
            self.rotated_axis,
            ctx.gizmo_scale * RING_RADIUS,
            angle,
        );
        ctx.visuals.draw_arc(&arc);
    }
}
