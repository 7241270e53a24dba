use glam::Vec3;
use rth_core::math::closest_point_on_ray;
use rth_core::snap::{snap_components, snap_magnitude};
use rth_core::{Axis, Color, Ray, SnappingType};

use super::{InteractionContext, Interactor, InteractorState};
use crate::ids::InteractorKind;

/// Translation along one axis
#[derive(Debug, Clone)]
pub struct PositionAxis {
    axis: Axis,
    state: InteractorState,
    start_position: Vec3,
    axis_ray: Ray,
    /// Pivot minus the grab point on the axis, keeps the grab point under the pointer
    interaction_offset: Vec3,
}

impl PositionAxis {
    /// Control for `axis`
    pub fn new(axis: Axis, default_color: Color) -> Self {
        Self {
            axis,
            state: InteractorState::new(default_color),
            start_position: Vec3::ZERO,
            axis_ray: Ray::new(Vec3::ZERO, axis.direction()),
            interaction_offset: Vec3::ZERO,
        }
    }

    fn point_on_axis(&self, ray: &Ray) -> Vec3 {
        self.axis_ray.point_at(closest_point_on_ray(&self.axis_ray, ray))
    }
}

impl Interactor for PositionAxis {
    fn kind(&self) -> InteractorKind {
        InteractorKind::PositionAxis(self.axis)
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

        let axis = ctx.config.rotated_axis(ctx.ghost.pose.rotation, self.axis);
        self.axis_ray = Ray::new(self.start_position, axis);

        let grab = self.point_on_axis(&ctx.ray);
        self.interaction_offset = self.start_position - grab;
    }

    fn interact(&mut self, ctx: &mut InteractionContext<'_>) {
        let hit = self.point_on_axis(&ctx.ray);
        let mut offset = hit + self.interaction_offset - self.start_position;

        let steps = ctx.config.position_snap;
        let snap = (steps * self.axis.direction()).length();
        if snap != 0.0 && ctx.config.snapping == SnappingType::Relative {
            offset = snap_magnitude(offset, snap);
        }

        let mut position = self.start_position + offset;
        if snap != 0.0 && ctx.config.snapping == SnappingType::Absolute {
            position = snap_components(position, steps);
        }

        self.state.delta = offset.dot(self.axis_ray.direction);
        ctx.ghost.pose.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{drag_context, ray_through};
    use approx::assert_relative_eq;
    use glam::Quat;
    use rth_core::Pose;

    #[test]
    fn test_drag_follows_pointer_along_axis() {
        let mut harness = drag_context(Pose::IDENTITY);
        let mut axis = PositionAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.5, 0.3));
        axis.start_interaction(&mut ctx, Vec3::new(0.5, 0.0, 0.0));

        ctx.ray = ray_through(2.0, 0.7);
        axis.interact(&mut ctx);

        // only the X component of the pointer motion survives
        assert!(ctx.ghost.pose.position.abs_diff_eq(Vec3::new(1.5, 0.0, 0.0), 1e-5));
        assert_relative_eq!(axis.delta(), 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_relative_snap() {
        let mut harness = drag_context(Pose::IDENTITY);
        harness.config.position_snap = Vec3::splat(0.5);
        let mut axis = PositionAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.0));
        axis.start_interaction(&mut ctx, Vec3::ZERO);
        ctx.ray = ray_through(1.23, 0.0);
        axis.interact(&mut ctx);

        assert!(ctx.ghost.pose.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_absolute_snap() {
        let mut harness = drag_context(Pose::from_position(Vec3::new(0.3, 0.0, 0.0)));
        harness.config.position_snap = Vec3::splat(0.5);
        harness.config.snapping = SnappingType::Absolute;
        let mut axis = PositionAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.3, 0.0));
        axis.start_interaction(&mut ctx, Vec3::new(0.3, 0.0, 0.0));
        ctx.ray = ray_through(1.0, 0.0);
        axis.interact(&mut ctx);

        // 0.3 + 0.7 = 1.0 lands on the grid; a further 0.2 rounds back to it
        assert!(ctx.ghost.pose.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
        ctx.ray = ray_through(1.2, 0.0);
        axis.interact(&mut ctx);
        assert!(ctx.ghost.pose.position.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_local_space_uses_rotated_axis() {
        let rotated = Pose::IDENTITY.with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let mut harness = drag_context(rotated);
        let mut axis = PositionAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.0));
        axis.start_interaction(&mut ctx, Vec3::ZERO);
        ctx.ray = ray_through(3.0, 2.0);
        axis.interact(&mut ctx);

        // local X points along world Y
        assert!(ctx.ghost.pose.position.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-5));
    }
}
