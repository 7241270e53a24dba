use glam::Vec3;
use rth_core::snap::snap_components;
use rth_core::{Axis, Color, Plane, SnappingType};

use super::{InteractionContext, Interactor, InteractorState};
use crate::ids::InteractorKind;

/// Translation inside the plane perpendicular to `normal`
#[derive(Debug, Clone)]
pub struct PositionPlane {
    normal: Axis,
    state: InteractorState,
    plane: Plane,
    start_position: Vec3,
    interaction_offset: Vec3,
}

impl PositionPlane {
    /// Control for the plane with this normal axis
    pub fn new(normal: Axis, default_color: Color) -> Self {
        Self {
            normal,
            state: InteractorState::new(default_color),
            plane: Plane::from_point_normal(Vec3::ZERO, normal.direction()),
            start_position: Vec3::ZERO,
            interaction_offset: Vec3::ZERO,
        }
    }

    /// Sum of the two in-plane axis directions
    fn in_plane_axes(&self) -> Vec3 {
        let (a, b) = self.normal.plane_axes();
        a.direction() + b.direction()
    }
}

impl Interactor for PositionPlane {
    fn kind(&self) -> InteractorKind {
        InteractorKind::PositionPlane(self.normal)
    }

    fn state(&self) -> &InteractorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractorState {
        &mut self.state
    }

    fn start_interaction(&mut self, ctx: &mut InteractionContext<'_>, hit_point: Vec3) {
        self.state.hit_point = hit_point;
        self.start_position = ctx.ghost.pose.position;

        let normal = ctx.config.rotated_axis(ctx.ghost.pose.rotation, self.normal);
        self.plane = Plane::from_point_normal(self.start_position, normal);

        let grab = self
            .plane
            .raycast(&ctx.ray)
            .unwrap_or_else(|| self.plane.closest_point(hit_point));
        self.interaction_offset = self.start_position - grab;
    }

    fn interact(&mut self, ctx: &mut InteractionContext<'_>) {
        // pointer ray parallel to or behind the plane: keep last frame's pose
        let Some(hit) = self.plane.raycast(&ctx.ray) else {
            return;
        };

        let mut offset = hit + self.interaction_offset - self.start_position;

        let steps = ctx.config.position_snap;
        let snap = (steps * self.in_plane_axes()).length();
        if snap != 0.0 && ctx.config.snapping == SnappingType::Relative {
            offset = snap_components(offset, steps);
        }

        let mut position = self.start_position + offset;
        if snap != 0.0 && ctx.config.snapping == SnappingType::Absolute {
            position = snap_components(position, steps);
        }

        self.state.delta = offset.length();
        ctx.ghost.pose.position = position;
    }
}
