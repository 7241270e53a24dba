use glam::Vec3;
use rth_core::{Color, HandleAxes};

use super::{InteractionContext, Interactor, InteractorState};
use crate::constants::UNIFORM_SCALE_SENSITIVITY;
use crate::ids::InteractorKind;

/// Scale every enabled axis together
///
/// Driven by raw pointer motion rather than geometry. Moving right or up
/// grows, moving left or down shrinks. Screen y grows downwards, so it
/// enters with a negative sign.
#[derive(Debug, Clone)]
pub struct ScaleUniform {
    axes: Vec3,
    state: InteractorState,
    start_scale: Vec3,
}

impl ScaleUniform {
    /// Control scaling the components enabled in `axes`
    pub fn new(axes: HandleAxes, default_color: Color) -> Self {
        Self {
            axes: axes.to_vector(),
            state: InteractorState::new(default_color),
            start_scale: Vec3::ONE,
        }
    }
}

impl Interactor for ScaleUniform {
    fn kind(&self) -> InteractorKind {
        InteractorKind::ScaleUniform
    }

    fn state(&self) -> &InteractorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractorState {
        &mut self.state
    }

    fn start_interaction(&mut self, ctx: &mut InteractionContext<'_>, hit_point: Vec3) {
        self.state.hit_point = hit_point;
        self.state.delta = 0.0;
        self.start_scale = ctx.ghost.pose.scale;
    }

    fn interact(&mut self, ctx: &mut InteractionContext<'_>) {
        let motion = ctx.pointer - ctx.previous_pointer;
        self.state.delta += (motion.x - motion.y) * ctx.delta_time * UNIFORM_SCALE_SENSITIVITY;
        ctx.ghost.pose.scale = self.start_scale + self.start_scale * self.axes * self.state.delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{drag_context, ray_through};
    use approx::assert_relative_eq;
    use glam::Vec2;
    use rth_core::Pose;

    #[test]
    fn test_accumulates_pointer_motion() {
        let mut harness = drag_context(Pose::IDENTITY);
        let mut uniform = ScaleUniform::new(HandleAxes::XYZ, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.0));
        ctx.delta_time = 0.01;
        uniform.start_interaction(&mut ctx, Vec3::ZERO);

        // 10 px right: 10 * 0.01 * 2 = 0.2
        ctx.previous_pointer = Vec2::new(100.0, 100.0);
        ctx.pointer = Vec2::new(110.0, 100.0);
        uniform.interact(&mut ctx);
        assert_relative_eq!(uniform.delta(), 0.2, epsilon = 1e-5);

        // 5 px up: another 0.1
        ctx.previous_pointer = ctx.pointer;
        ctx.pointer = Vec2::new(110.0, 95.0);
        uniform.interact(&mut ctx);
        assert_relative_eq!(uniform.delta(), 0.3, epsilon = 1e-5);
        assert!(ctx.ghost.pose.scale.abs_diff_eq(Vec3::splat(1.3), 1e-5));
    }

    #[test]
    fn test_only_enabled_axes_scale() {
        let mut harness = drag_context(Pose::IDENTITY.with_scale(Vec3::splat(2.0)));
        let mut uniform = ScaleUniform::new(HandleAxes::XZ, [1.0; 4]);

        let mut ctx = harness.context(ray_through(0.0, 0.0));
        ctx.delta_time = 0.1;
        uniform.start_interaction(&mut ctx, Vec3::ZERO);
        ctx.previous_pointer = Vec2::ZERO;
        ctx.pointer = Vec2::new(-2.5, 0.0);
        uniform.interact(&mut ctx);

        // delta -0.5 halves x and z
        assert!(ctx.ghost.pose.scale.abs_diff_eq(Vec3::new(1.0, 2.0, 1.0), 1e-5));
    }

    #[test]
    fn test_end_resets_delta() {
        let mut harness = drag_context(Pose::IDENTITY);
        let mut uniform = ScaleUniform::new(HandleAxes::XYZ, [1.0; 4]);
        let mut ctx = harness.context(ray_through(0.0, 0.0));
        uniform.start_interaction(&mut ctx, Vec3::ZERO);
        ctx.pointer = Vec2::new(50.0, 0.0);
        uniform.interact(&mut ctx);
        assert!(uniform.delta() != 0.0);

        uniform.end_interaction();
        assert_eq!(uniform.delta(), 0.0);
    }
}
