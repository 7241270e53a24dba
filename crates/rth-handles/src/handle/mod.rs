//! Handle groups
//!
//! A [`HandleGroup`] is one on-screen gizmo. It owns the ghost it
//! manipulates, the interactors its [`HandleType`] and [`HandleAxes`] call
//! for, and where the gizmo sits in the world.

mod placement;

pub use placement::Placement;

use glam::{Quat, Vec2, Vec3};
use rth_core::config::{AppearanceSettings, HandleDefaults};
use rth_core::constants::{HANDLE_SCALE_MAX, HANDLE_SCALE_MIN};
use rth_core::{Axis, Camera, Color, HandleAxes, HandleType, Pose, Ray, SnappingType, Space};

use crate::events::{EventRegistry, ListenerId};
use crate::ghost::{Ghost, GhostDelta};
use crate::ids::{HandleId, InteractorKind, InteractorRef};
use crate::interactor::{
    InteractionContext, Interactor, PositionAxis, PositionPlane, RotationAxis, ScaleAxis,
    ScaleUniform,
};
use crate::visuals::HandleVisuals;

/// Per-handle configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HandleConfig {
    /// Enabled axes
    pub axes: HandleAxes,
    /// Axis orientation
    pub space: Space,
    /// Edited components
    pub handle_type: HandleType,
    /// Snapping policy
    pub snapping: SnappingType,
    /// Per-axis position increment, 0 disables
    pub position_snap: Vec3,
    /// Rotation increment in degrees, 0 disables
    pub rotation_snap: f32,
    /// Per-axis scale increment, 0 disables
    pub scale_snap: Vec3,
    /// Keep a constant on-screen size
    pub auto_scale: bool,
    /// On-screen size in pixels when auto scaling
    pub auto_scale_pixels: f32,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self::from(&HandleDefaults::default())
    }
}

impl From<&HandleDefaults> for HandleConfig {
    fn from(defaults: &HandleDefaults) -> Self {
        let mut config = Self {
            axes: defaults.axes,
            space: defaults.space,
            handle_type: defaults.handle_type,
            snapping: defaults.snapping,
            position_snap: defaults.position_snap,
            rotation_snap: defaults.rotation_snap,
            scale_snap: defaults.scale_snap,
            auto_scale: defaults.auto_scale,
            auto_scale_pixels: defaults.auto_scale_pixels,
        };
        if config.handle_type == HandleType::Scale {
            config.space = Space::Local;
        }
        config
    }
}

impl HandleConfig {
    /// Direction of `axis` for a target with `rotation`, honoring the space
    pub fn rotated_axis(&self, rotation: Quat, axis: Axis) -> Vec3 {
        match self.space {
            Space::Local => rotation * axis.direction(),
            Space::World => axis.direction(),
        }
    }
}

/// Notifications of a single handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEvent {
    /// A drag on one of the handle's interactors began
    InteractionStart(HandleId),
    /// A drag frame was applied to the targets
    Interaction(HandleId),
    /// A drag ended and the ghost was resynced
    InteractionEnd(HandleId),
    /// The handle is about to be removed
    Destroyed(HandleId),
}

/// Pointer data for one drag frame
#[derive(Debug, Clone, Copy)]
pub struct DragInput {
    /// Camera ray through the pointer
    pub ray: Ray,
    /// Pointer in screen pixels
    pub pointer: Vec2,
    /// Pointer at the previous frame
    pub previous_pointer: Vec2,
    /// Frame time in seconds
    pub delta_time: f32,
}

/// One gizmo bound to a ghost
#[derive(Debug)]
pub struct HandleGroup {
    id: HandleId,
    ghost: Ghost,
    config: HandleConfig,
    appearance: AppearanceSettings,
    interactors: Vec<Box<dyn Interactor>>,
    placement: Placement,
    listeners: EventRegistry<HandleEvent>,
    scale_multiplier: f32,
}

impl HandleGroup {
    /// Gizmo over a ghost at `ghost_pose`, interactors enabled
    pub fn new(
        id: HandleId,
        ghost_pose: Pose,
        config: HandleConfig,
        appearance: AppearanceSettings,
    ) -> Self {
        let scale_multiplier = appearance.clamped_handle_scale();
        let mut handle = Self {
            id,
            ghost: Ghost::new(ghost_pose),
            config,
            appearance,
            interactors: Vec::new(),
            placement: Placement::default(),
            listeners: EventRegistry::new(),
            scale_multiplier,
        };
        handle.enable(ghost_pose);
        handle
    }

    /// Bind to `ghost_pose` and build the interactors for the current type
    pub fn enable(&mut self, ghost_pose: Pose) {
        self.ghost.update_transform(ghost_pose);
        self.rebuild_interactors();
        self.update_placement(None);
    }

    /// Drop every interactor
    pub fn disable(&mut self) {
        self.interactors.clear();
    }

    /// Identifier
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// The ghost this handle manipulates
    pub fn ghost(&self) -> &Ghost {
        &self.ghost
    }

    /// The ghost, mutable
    pub fn ghost_mut(&mut self) -> &mut Ghost {
        &mut self.ghost
    }

    /// Current configuration
    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// Where the gizmo was last placed
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Active interactors
    pub fn interactors(&self) -> impl Iterator<Item = &dyn Interactor> {
        self.interactors.iter().map(|i| i.as_ref())
    }

    /// Look up an interactor by kind
    pub fn interactor(&self, kind: InteractorKind) -> Option<&dyn Interactor> {
        self.interactors
            .iter()
            .find(|i| i.kind() == kind)
            .map(|i| i.as_ref())
    }

    fn interactor_index(&self, kind: InteractorKind) -> Option<usize> {
        self.interactors.iter().position(|i| i.kind() == kind)
    }

    /// Reference for an interactor of this handle
    pub fn interactor_ref(&self, kind: InteractorKind) -> InteractorRef {
        InteractorRef::new(self.id, kind)
    }

    /// Switch the edited components. Scale handles always work in local space.
    pub fn change_handle_type(&mut self, handle_type: HandleType) {
        self.config.handle_type = handle_type;
        if handle_type == HandleType::Scale {
            self.config.space = Space::Local;
        }
        self.rebuild_interactors();
    }

    /// Switch the axis space; ignored for scale handles
    pub fn change_space(&mut self, space: Space) {
        self.config.space = if self.config.handle_type == HandleType::Scale {
            Space::Local
        } else {
            space
        };
    }

    /// Switch the enabled axes
    pub fn change_axes(&mut self, axes: HandleAxes) {
        self.config.axes = axes;
        self.rebuild_interactors();
    }

    /// Replace the snapping policy and increments
    pub fn set_snapping(
        &mut self,
        snapping: SnappingType,
        position_snap: Vec3,
        rotation_snap: f32,
        scale_snap: Vec3,
    ) {
        self.config.snapping = snapping;
        self.config.position_snap = position_snap.max(Vec3::ZERO);
        self.config.rotation_snap = rotation_snap.max(0.0);
        self.config.scale_snap = scale_snap.max(Vec3::ZERO);
    }

    /// Enable or disable constant on-screen size
    pub fn set_auto_scale(&mut self, enabled: bool, pixels: f32) {
        self.config.auto_scale = enabled;
        self.config.auto_scale_pixels = pixels.max(1.0);
    }

    /// Size multiplier on top of auto scaling, clamped to 0.1..=10
    pub fn set_scale(&mut self, multiplier: f32) {
        self.scale_multiplier = multiplier.clamp(HANDLE_SCALE_MIN, HANDLE_SCALE_MAX);
    }

    /// Current size multiplier
    pub fn scale_multiplier(&self) -> f32 {
        self.scale_multiplier
    }

    /// Register a listener for this handle's events
    pub fn subscribe(&mut self, listener: impl FnMut(&HandleEvent) + Send + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub(crate) fn emit(&mut self, event: HandleEvent) {
        self.listeners.emit(&event);
    }

    pub(crate) fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    fn rebuild_interactors(&mut self) {
        let axes = self.config.axes;
        let handle_type = self.config.handle_type;
        let colors = &self.appearance;
        let mut interactors: Vec<Box<dyn Interactor>> = Vec::new();

        if handle_type.has_position() {
            for axis in axes.axes() {
                interactors.push(Box::new(PositionAxis::new(axis, colors.axis_color(axis))));
            }
            for normal in Axis::ALL {
                let (a, b) = normal.plane_axes();
                if axes.has_both(a, b) {
                    interactors.push(Box::new(PositionPlane::new(normal, colors.axis_color(normal))));
                }
            }
        }

        if handle_type.has_rotation() {
            for axis in axes.axes() {
                interactors.push(Box::new(RotationAxis::new(axis, colors.axis_color(axis))));
            }
        }

        if handle_type.has_scale() {
            for axis in axes.axes() {
                interactors.push(Box::new(ScaleAxis::new(axis, colors.axis_color(axis))));
            }
            if axes.is_multi_axis() {
                interactors.push(Box::new(ScaleUniform::new(axes, colors.global_color)));
            }
        }

        self.interactors = interactors;
    }

    /// Place the gizmo on the ghost.
    ///
    /// Rotation follows the ghost in local space and for scale handles,
    /// otherwise it stays identity. With a camera and auto scaling on, the
    /// size keeps the gizmo `auto_scale_pixels` tall on screen.
    pub fn update_placement(&mut self, camera: Option<&Camera>) {
        let position = self.ghost.pose.position;
        let rotation = if self.config.space == Space::Local
            || self.config.handle_type == HandleType::Scale
        {
            self.ghost.pose.rotation
        } else {
            Quat::IDENTITY
        };

        let base = match camera {
            Some(camera) if self.config.auto_scale => {
                camera.world_size_for_pixels(self.config.auto_scale_pixels, position)
            }
            _ => 1.0,
        };

        self.placement = Placement {
            position,
            rotation,
            scale: base * self.scale_multiplier,
            view_forward: camera.map_or(self.placement.view_forward, Camera::forward),
        };
    }

    /// Set an interactor's current color
    pub fn set_color(&mut self, kind: InteractorKind, color: Color, visuals: &mut dyn HandleVisuals) {
        if let Some(i) = self.interactor_index(kind) {
            self.interactors[i].state_mut().color = color;
            visuals.set_color(InteractorRef::new(self.id, kind), color);
        }
    }

    /// Restore an interactor's default color
    pub fn set_default_color(&mut self, kind: InteractorKind, visuals: &mut dyn HandleVisuals) {
        if let Some(color) = self.interactor(kind).map(|i| i.state().default_color) {
            self.set_color(kind, color, visuals);
        }
    }

    fn scale_axis_kinds(&self) -> Vec<InteractorKind> {
        self.interactors
            .iter()
            .map(|i| i.kind())
            .filter(|k| matches!(k, InteractorKind::ScaleAxis(_)))
            .collect()
    }

    /// Begin a drag on `kind`: the interactor captures its start state, then
    /// the ghost snapshots its pose
    pub fn start_interaction(
        &mut self,
        kind: InteractorKind,
        input: DragInput,
        hit_point: Vec3,
        visuals: &mut dyn HandleVisuals,
    ) -> bool {
        let Some(index) = self.interactor_index(kind) else {
            return false;
        };

        let gizmo_scale = self.placement.scale;
        {
            let Self {
                ghost,
                config,
                interactors,
                ..
            } = self;
            let mut ctx = InteractionContext {
                ghost,
                config,
                ray: input.ray,
                pointer: input.pointer,
                previous_pointer: input.previous_pointer,
                delta_time: input.delta_time,
                gizmo_scale,
                visuals: &mut *visuals,
            };
            interactors[index].start_interaction(&mut ctx, hit_point);
        }
        self.ghost.on_interaction_start();

        if kind == InteractorKind::ScaleUniform {
            let linked = self.appearance.linked_color;
            for axis_kind in self.scale_axis_kinds() {
                self.set_color(axis_kind, linked, visuals);
            }
        }
        true
    }

    /// One drag frame on `kind`; returns the ghost's change since last frame
    pub fn interact(
        &mut self,
        kind: InteractorKind,
        input: DragInput,
        visuals: &mut dyn HandleVisuals,
    ) -> Option<GhostDelta> {
        let index = self.interactor_index(kind)?;

        let gizmo_scale = self.placement.scale;
        let delta = {
            let Self {
                ghost,
                config,
                interactors,
                ..
            } = self;
            let mut ctx = InteractionContext {
                ghost,
                config,
                ray: input.ray,
                pointer: input.pointer,
                previous_pointer: input.previous_pointer,
                delta_time: input.delta_time,
                gizmo_scale,
                visuals,
            };
            interactors[index].interact(&mut ctx);
            interactors[index].delta()
        };

        if kind == InteractorKind::ScaleUniform {
            for interactor in self.interactors.iter_mut() {
                if matches!(interactor.kind(), InteractorKind::ScaleAxis(_)) {
                    interactor.state_mut().delta = delta;
                }
            }
        }

        Some(self.ghost.on_interaction(self.config.handle_type))
    }

    /// Zero every interactor's delta and fall back to default colors.
    ///
    /// The visuals only learn about the colors on the next
    /// [`restore_default_colors`](Self::restore_default_colors).
    pub(crate) fn cancel_interactions(&mut self) {
        for interactor in &mut self.interactors {
            interactor.end_interaction();
            let state = interactor.state_mut();
            state.color = state.default_color;
        }
    }

    /// Send every interactor's default color to the visuals
    pub(crate) fn restore_default_colors(&mut self, visuals: &mut dyn HandleVisuals) {
        let kinds: Vec<InteractorKind> = self.interactors.iter().map(|i| i.kind()).collect();
        for kind in kinds {
            self.set_default_color(kind, visuals);
        }
    }

    /// Finish a drag on `kind`
    pub fn end_interaction(&mut self, kind: InteractorKind, visuals: &mut dyn HandleVisuals) {
        let Some(index) = self.interactor_index(kind) else {
            return;
        };
        self.interactors[index].end_interaction();
        self.set_default_color(kind, visuals);

        if kind == InteractorKind::ScaleUniform {
            for axis_kind in self.scale_axis_kinds() {
                if let Some(i) = self.interactor_index(axis_kind) {
                    self.interactors[i].end_interaction();
                }
                self.set_default_color(axis_kind, visuals);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ray_through, RecordingVisuals};
    use rth_core::constants::LINKED_COLOR;

    fn handle(handle_type: HandleType, axes: HandleAxes) -> HandleGroup {
        let config = HandleConfig {
            handle_type,
            axes,
            ..Default::default()
        };
        HandleGroup::new(HandleId::new(), Pose::IDENTITY, config, AppearanceSettings::default())
    }

    fn kinds(handle: &HandleGroup) -> Vec<InteractorKind> {
        handle.interactors().map(|i| i.kind()).collect()
    }

    fn input(x: f32, y: f32) -> DragInput {
        DragInput {
            ray: ray_through(x, y),
            pointer: Vec2::new(x, y),
            previous_pointer: Vec2::new(x, y),
            delta_time: 1.0 / 60.0,
        }
    }

    #[test]
    fn test_position_interactors() {
        let h = handle(HandleType::Position, HandleAxes::XY);
        assert_eq!(
            kinds(&h),
            vec![
                InteractorKind::PositionAxis(Axis::X),
                InteractorKind::PositionAxis(Axis::Y),
                InteractorKind::PositionPlane(Axis::Z),
            ]
        );
    }

    #[test]
    fn test_all_interactors() {
        let h = handle(HandleType::All, HandleAxes::XYZ);
        // 3 axes + 3 planes + 3 rings + 3 scale axes + uniform
        assert_eq!(h.interactors().count(), 13);
        assert!(h.interactor(InteractorKind::ScaleUniform).is_some());
    }

    #[test]
    fn test_single_axis_scale_has_no_uniform() {
        let h = handle(HandleType::Scale, HandleAxes::Z);
        assert_eq!(kinds(&h), vec![InteractorKind::ScaleAxis(Axis::Z)]);
    }

    #[test]
    fn test_scale_forces_local_space() {
        let mut h = handle(HandleType::Position, HandleAxes::XYZ);
        h.change_space(Space::World);
        assert_eq!(h.config().space, Space::World);

        h.change_handle_type(HandleType::Scale);
        assert_eq!(h.config().space, Space::Local);
        h.change_space(Space::World);
        assert_eq!(h.config().space, Space::Local);
    }

    #[test]
    fn test_change_axes_rebuilds() {
        let mut h = handle(HandleType::Rotation, HandleAxes::XYZ);
        h.change_axes(HandleAxes::Y);
        assert_eq!(kinds(&h), vec![InteractorKind::RotationAxis(Axis::Y)]);
    }

    #[test]
    fn test_scale_multiplier_clamped() {
        let mut h = handle(HandleType::Position, HandleAxes::XYZ);
        h.set_scale(50.0);
        assert_eq!(h.scale_multiplier(), 10.0);
        h.set_scale(0.0);
        assert_eq!(h.scale_multiplier(), 0.1);
        h.update_placement(None);
        assert_eq!(h.placement().scale, 0.1);
    }

    #[test]
    fn test_world_placement_has_no_rotation() {
        let mut h = handle(HandleType::Position, HandleAxes::XYZ);
        h.ghost_mut().update_transform(Pose::IDENTITY.with_rotation(Quat::from_rotation_y(1.0)));
        h.update_placement(None);
        assert_eq!(h.placement().rotation, Quat::from_rotation_y(1.0));

        h.change_space(Space::World);
        h.update_placement(None);
        assert_eq!(h.placement().rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_uniform_scale_links_axes() {
        let mut h = handle(HandleType::Scale, HandleAxes::XYZ);
        let mut visuals = RecordingVisuals::default();

        assert!(h.start_interaction(InteractorKind::ScaleUniform, input(0.0, 0.0), Vec3::ZERO, &mut visuals));
        let x = InteractorKind::ScaleAxis(Axis::X);
        assert_eq!(h.interactor(x).unwrap().state().color, LINKED_COLOR);

        let mut frame = input(0.0, 0.0);
        frame.pointer = Vec2::new(30.0, 0.0);
        let delta = h.interact(InteractorKind::ScaleUniform, frame, &mut visuals).unwrap();
        assert!(delta.scale.unwrap().x > 0.0);
        let uniform_delta = h.interactor(InteractorKind::ScaleUniform).unwrap().delta();
        assert_eq!(h.interactor(x).unwrap().delta(), uniform_delta);

        h.end_interaction(InteractorKind::ScaleUniform, &mut visuals);
        let state = h.interactor(x).unwrap().state();
        assert_eq!(state.delta, 0.0);
        assert_eq!(state.color, state.default_color);
        assert_eq!(visuals.color_of(h.interactor_ref(x)), Some(state.default_color));
    }

    #[test]
    fn test_unknown_interactor_is_ignored() {
        let mut h = handle(HandleType::Position, HandleAxes::XYZ);
        let mut visuals = RecordingVisuals::default();
        let kind = InteractorKind::RotationAxis(Axis::X);
        assert!(!h.start_interaction(kind, input(0.0, 0.0), Vec3::ZERO, &mut visuals));
        assert!(h.interact(kind, input(0.0, 0.0), &mut visuals).is_none());
    }

    #[test]
    fn test_events_reach_listeners() {
        use parking_lot::Mutex;
        use std::sync::Arc;

        let mut h = handle(HandleType::Position, HandleAxes::XYZ);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let id = h.subscribe(move |e| s.lock().push(*e));

        h.emit(HandleEvent::InteractionStart(h.id()));
        h.unsubscribe(id);
        h.emit(HandleEvent::InteractionEnd(h.id()));

        assert_eq!(*seen.lock(), vec![HandleEvent::InteractionStart(h.id())]);
    }
}
