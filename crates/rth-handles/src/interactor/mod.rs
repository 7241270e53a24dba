//! Per-degree-of-freedom controls
//!
//! An interactor turns pointer motion into a new ghost pose. It captures
//! whatever it needs at drag start and recomputes the ghost pose from that
//! start state every frame, so per-frame errors never accumulate.

mod position_axis;
mod position_plane;
mod rotation_axis;
mod scale_axis;
mod scale_uniform;

pub use position_axis::PositionAxis;
pub use position_plane::PositionPlane;
pub use rotation_axis::RotationAxis;
pub use scale_axis::ScaleAxis;
pub use scale_uniform::ScaleUniform;

use glam::{Vec2, Vec3};
use rth_core::{Color, Ray};

use crate::ghost::Ghost;
use crate::handle::HandleConfig;
use crate::ids::InteractorKind;
use crate::visuals::HandleVisuals;

/// State shared by every interactor
#[derive(Debug, Clone, PartialEq)]
pub struct InteractorState {
    /// Current drag amount (distance, angle or scale factor change), 0 at rest
    pub delta: f32,
    /// Color when neither hovered nor dragged
    pub default_color: Color,
    /// Color last sent to the visuals
    pub color: Color,
    /// World point where the pick ray hit this interactor at drag start
    pub hit_point: Vec3,
}

impl InteractorState {
    /// Resting state with the given color
    pub fn new(default_color: Color) -> Self {
        Self {
            delta: 0.0,
            default_color,
            color: default_color,
            hit_point: Vec3::ZERO,
        }
    }
}

/// Everything an interactor may read or write during a drag
pub struct InteractionContext<'a> {
    /// Ghost of the owning handle; interactors write its pose
    pub ghost: &'a mut Ghost,
    /// Configuration of the owning handle
    pub config: &'a HandleConfig,
    /// Camera ray through the current pointer position
    pub ray: Ray,
    /// Pointer position in screen pixels
    pub pointer: Vec2,
    /// Pointer position at the previous frame
    pub previous_pointer: Vec2,
    /// Frame time in seconds
    pub delta_time: f32,
    /// World size of one gizmo unit
    pub gizmo_scale: f32,
    /// Sink for arc previews
    pub visuals: &'a mut dyn HandleVisuals,
}

/// A draggable control
pub trait Interactor: Send + std::fmt::Debug {
    /// Which degree of freedom this controls
    fn kind(&self) -> InteractorKind;

    /// Shared state
    fn state(&self) -> &InteractorState;

    /// Shared state, mutable
    fn state_mut(&mut self) -> &mut InteractorState;

    /// Capture start state. `hit_point` is where the pick ray hit the control.
    fn start_interaction(&mut self, ctx: &mut InteractionContext<'_>, hit_point: Vec3);

    /// Recompute the ghost pose for the current pointer
    fn interact(&mut self, ctx: &mut InteractionContext<'_>);

    /// Back to rest
    fn end_interaction(&mut self) {
        self.state_mut().delta = 0.0;
    }

    /// Current drag amount
    fn delta(&self) -> f32 {
        self.state().delta
    }
}
