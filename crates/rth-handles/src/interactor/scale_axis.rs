use glam::Vec3;
use rth_core::math::closest_point_on_ray;
use rth_core::snap::snap_scale_delta;
use rth_core::{Axis, Color, Ray};

use super::{InteractionContext, Interactor, InteractorState};
use crate::ids::InteractorKind;

/// Scale along one axis
///
/// The scale factor is the ratio of the current pointer distance from the
/// pivot (measured on the axis) to the distance at drag start.
#[derive(Debug, Clone)]
pub struct ScaleAxis {
    axis: Axis,
    state: InteractorState,
    start_scale: Vec3,
    axis_ray: Ray,
    interaction_distance: f32,
}

impl ScaleAxis {
    /// Control for `axis`
    pub fn new(axis: Axis, default_color: Color) -> Self {
        Self {
            axis,
            state: InteractorState::new(default_color),
            start_scale: Vec3::ONE,
            axis_ray: Ray::new(Vec3::ZERO, axis.direction()),
            interaction_distance: 0.0,
        }
    }

    /// Controlled axis
    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn distance_on_axis(&self, ray: &Ray) -> f32 {
        let hit = self.axis_ray.point_at(closest_point_on_ray(&self.axis_ray, ray));
        (hit - self.axis_ray.origin).length()
    }
}

impl Interactor for ScaleAxis {
    fn kind(&self) -> InteractorKind {
        InteractorKind::ScaleAxis(self.axis)
    }

    fn state(&self) -> &InteractorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractorState {
        &mut self.state
    }

    fn start_interaction(&mut self, ctx: &mut InteractionContext<'_>, hit_point: Vec3) {
        self.state.hit_point = hit_point;
        self.start_scale = ctx.ghost.pose.scale;

        let axis = ctx.config.rotated_axis(ctx.ghost.pose.rotation, self.axis);
        self.axis_ray = Ray::new(ctx.ghost.pose.position, axis);
        self.interaction_distance = self.distance_on_axis(&ctx.ray);
    }

    fn interact(&mut self, ctx: &mut InteractionContext<'_>) {
        // grabbed exactly at the pivot: no reference length to scale against
        if self.interaction_distance <= f32::EPSILON {
            return;
        }

        let distance = self.distance_on_axis(&ctx.ray);
        let mut delta = distance / self.interaction_distance - 1.0;

        let direction = self.axis.direction();
        let step = ctx.config.scale_snap.dot(direction).abs();
        let start_factor = self.start_scale.dot(direction).abs();
        delta = snap_scale_delta(delta, step, start_factor, ctx.config.snapping);

        self.state.delta = delta;
        ctx.ghost.pose.scale = self.start_scale * (direction * delta + Vec3::ONE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{drag_context, ray_through};
    use approx::assert_relative_eq;
    use rth_core::{Pose, SnappingType};

    #[test]
    fn test_double_distance_doubles_scale() {
        let mut harness = drag_context(Pose::IDENTITY);
        let mut axis = ScaleAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.5, 0.0));
        axis.start_interaction(&mut ctx, Vec3::new(0.5, 0.0, 0.0));
        ctx.ray = ray_through(1.0, 0.2);
        axis.interact(&mut ctx);

        assert!(ctx.ghost.pose.scale.abs_diff_eq(Vec3::new(2.0, 1.0, 1.0), 1e-5));
        assert_relative_eq!(axis.delta(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_scales_from_start_scale() {
        let mut harness = drag_context(Pose::IDENTITY.with_scale(Vec3::new(1.0, 3.0, 1.0)));
        let mut axis = ScaleAxis::new(Axis::Y, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.5));
        axis.start_interaction(&mut ctx, Vec3::new(0.0, 0.5, 0.0));
        ctx.ray = ray_through(0.0, 0.25);
        axis.interact(&mut ctx);

        assert!(ctx.ghost.pose.scale.abs_diff_eq(Vec3::new(1.0, 1.5, 1.0), 1e-5));
    }

    #[test]
    fn test_relative_snap() {
        let mut harness = drag_context(Pose::IDENTITY);
        harness.config.scale_snap = Vec3::splat(0.25);
        let mut axis = ScaleAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(1.0, 0.0));
        axis.start_interaction(&mut ctx, Vec3::X);
        ctx.ray = ray_through(1.37, 0.0);
        axis.interact(&mut ctx);

        assert_relative_eq!(axis.delta(), 0.25, epsilon = 1e-5);
        assert_relative_eq!(ctx.ghost.pose.scale.x, 1.25, epsilon = 1e-5);
    }

    #[test]
    fn test_absolute_snap() {
        let mut harness = drag_context(Pose::IDENTITY.with_scale(Vec3::new(1.1, 1.0, 1.0)));
        harness.config.scale_snap = Vec3::splat(0.25);
        harness.config.snapping = SnappingType::Absolute;
        let mut axis = ScaleAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(1.0, 0.0));
        axis.start_interaction(&mut ctx, Vec3::X);
        ctx.ray = ray_through(1.37, 0.0);
        axis.interact(&mut ctx);

        // raw factor 1.1 + 0.37 = 1.47 rounds to 1.5
        assert_relative_eq!(axis.delta(), 0.4, epsilon = 1e-5);
    }

    #[test]
    fn test_grab_at_pivot_is_ignored() {
        let mut harness = drag_context(Pose::IDENTITY);
        let mut axis = ScaleAxis::new(Axis::X, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.0));
        axis.start_interaction(&mut ctx, Vec3::ZERO);
        ctx.ray = ray_through(2.0, 0.0);
        axis.interact(&mut ctx);

        assert_eq!(ctx.ghost.pose.scale, Vec3::ONE);
    }
}
