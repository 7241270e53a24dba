//! Handle lifecycle and the per-frame update
//!
//! [`TransformHandleManager`] is the single owner of every live handle. It
//! keeps the registries that tie handles, groups, ghosts and targets
//! together, and [`TransformHandleManager::update`] runs once per frame to
//! pick, drag and apply keyboard shortcuts.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use glam::{Vec2, Vec3};
use parking_lot::Mutex;
use rth_core::{
    Camera, CameraId, CameraProvider, HandleAxes, HandleSettings, HandleType, InputProvider,
    KeyCode, NodeId, SceneProvider, SnappingType, Space,
};

use crate::error::HandleError;
use crate::events::{EventRegistry, ListenerId};
use crate::group::TransformGroup;
use crate::handle::{DragInput, HandleConfig, HandleEvent, HandleGroup};
use crate::ids::{GhostId, HandleId, InteractorRef};
use crate::picking::{nearest_interactor_hit, LayerMask, Raycaster};
use crate::visuals::HandleVisuals;

/// Manager behind a lock, for hosts that share it between systems
pub type SharedHandleManager = Arc<Mutex<TransformHandleManager>>;

/// Build a [`SharedHandleManager`]
pub fn create_shared_manager(settings: HandleSettings) -> SharedHandleManager {
    Arc::new(Mutex::new(TransformHandleManager::new(settings)))
}

/// Manager-level notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerEvent {
    /// A handle was created
    HandleCreated(HandleId),
    /// A handle was destroyed
    HandleDestroyed(HandleId),
    /// A drag began on the handle
    InteractionStart(HandleId),
    /// A drag frame was applied
    Interaction(HandleId),
    /// A drag ended
    InteractionEnd(HandleId),
}

/// Everything the host lends the manager for one frame
pub struct Frame<'a> {
    /// Scene nodes the handles edit
    pub scene: &'a mut dyn SceneProvider,
    /// Pointer and keyboard state of this frame
    pub input: &'a dyn InputProvider,
    /// Picking against handle geometry
    pub raycaster: &'a dyn Raycaster,
    /// Camera lookup
    pub cameras: &'a dyn CameraProvider,
    /// Color and arc preview sink
    pub visuals: &'a mut dyn HandleVisuals,
    /// Frame time in seconds
    pub delta_time: f32,
}

/// Owner of every live handle
#[derive(Debug)]
pub struct TransformHandleManager {
    settings: HandleSettings,
    order: Vec<HandleId>,
    handles: HashMap<HandleId, HandleGroup>,
    groups: HashMap<HandleId, TransformGroup>,
    ghosts: HashMap<GhostId, HandleId>,
    handled: HashMap<NodeId, HandleId>,
    listeners: EventRegistry<ManagerEvent>,
    camera: Option<CameraId>,
    picking_enabled: bool,
    hovered: Option<InteractorRef>,
    previous_hovered: Option<InteractorRef>,
    dragging: Option<InteractorRef>,
    previous_pointer: Option<Vec2>,
    /// Handles whose drag was cancelled; colors go out on the next update
    recolor: Vec<HandleId>,
    /// Handles whose bounds must be refreshed on the next update
    stale_bounds: Vec<HandleId>,
}

impl Default for TransformHandleManager {
    fn default() -> Self {
        Self::new(HandleSettings::default())
    }
}

impl TransformHandleManager {
    /// Manager with no handles
    pub fn new(settings: HandleSettings) -> Self {
        Self {
            settings: settings.sanitized(),
            order: Vec::new(),
            handles: HashMap::new(),
            groups: HashMap::new(),
            ghosts: HashMap::new(),
            handled: HashMap::new(),
            listeners: EventRegistry::new(),
            camera: None,
            picking_enabled: true,
            hovered: None,
            previous_hovered: None,
            dragging: None,
            previous_pointer: None,
            recolor: Vec::new(),
            stale_bounds: Vec::new(),
        }
    }

    /// Active settings
    pub fn settings(&self) -> &HandleSettings {
        &self.settings
    }

    /// Replace the settings. Existing handles keep their configuration;
    /// appearance and defaults apply to handles created afterwards.
    pub fn set_settings(&mut self, settings: HandleSettings) {
        self.settings = settings.sanitized();
    }

    /// Live handles in creation order
    pub fn handles(&self) -> impl Iterator<Item = &HandleGroup> {
        self.order.iter().filter_map(|id| self.handles.get(id))
    }

    /// Identifiers of live handles in creation order
    pub fn handle_ids(&self) -> &[HandleId] {
        &self.order
    }

    /// Handle by id
    pub fn handle(&self, id: HandleId) -> Option<&HandleGroup> {
        self.handles.get(&id)
    }

    /// Mutable handle by id
    pub fn handle_mut(&mut self, id: HandleId) -> Option<&mut HandleGroup> {
        self.handles.get_mut(&id)
    }

    /// Targets driven by a handle
    pub fn group(&self, id: HandleId) -> Option<&TransformGroup> {
        self.groups.get(&id)
    }

    /// Handle driving `node`, if any
    pub fn handle_of(&self, node: NodeId) -> Option<HandleId> {
        self.handled.get(&node).copied()
    }

    /// True if some handle drives `node`
    pub fn is_handled(&self, node: NodeId) -> bool {
        self.handled.contains_key(&node)
    }

    /// Handle owning a ghost
    pub fn handle_for_ghost(&self, ghost: GhostId) -> Option<HandleId> {
        self.ghosts.get(&ghost).copied()
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True without live handles
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Interactor under the pointer at the last update
    pub fn hovered(&self) -> Option<InteractorRef> {
        self.hovered
    }

    /// Interactor being dragged
    pub fn dragging(&self) -> Option<InteractorRef> {
        self.dragging
    }

    /// True while a drag is active
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// False once no camera could be found
    pub fn is_picking_enabled(&self) -> bool {
        self.picking_enabled
    }

    /// Use a specific camera for picking and re-enable picking
    pub fn set_camera(&mut self, camera: Option<CameraId>) {
        self.camera = camera;
        self.picking_enabled = true;
    }

    /// Register a listener for manager events
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ManagerEvent) + Send + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Create a handle for a single target
    pub fn create_handle(
        &mut self,
        scene: &dyn SceneProvider,
        target: NodeId,
    ) -> Result<HandleId, HandleError> {
        self.create_handle_from_list(scene, &[target])
    }

    /// Create one handle driving all `targets`.
    ///
    /// Fails without side effects when the list is empty or any target is
    /// already handled or unknown. Targets related by hierarchy collapse to
    /// their topmost ancestor.
    pub fn create_handle_from_list(
        &mut self,
        scene: &dyn SceneProvider,
        targets: &[NodeId],
    ) -> Result<HandleId, HandleError> {
        if targets.is_empty() {
            tracing::warn!("Cannot create a handle without targets");
            return Err(HandleError::EmptyList);
        }
        let mut seen = HashSet::with_capacity(targets.len());
        for &target in targets {
            if self.handled.contains_key(&target) || !seen.insert(target) {
                tracing::warn!("Node {} already has a handle", target);
                return Err(HandleError::AlreadyHandled(target));
            }
            if !scene.contains(target) {
                tracing::warn!("Node {} is not in the scene", target);
                return Err(HandleError::UnknownTarget(target));
            }
        }

        let mut group = TransformGroup::new();
        for &target in targets {
            match group.add_transform(scene, target) {
                Ok(superseded) => {
                    for node in superseded {
                        tracing::debug!("Node {} superseded by ancestor {}", node, target);
                    }
                }
                Err(e) => tracing::debug!("Skipping {}: {}", target, e),
            }
        }

        let id = HandleId::new();
        let config = HandleConfig::from(&self.settings.defaults);
        let pose = group.average_pose(scene, config.space);
        let handle = HandleGroup::new(id, pose, config, self.settings.appearance.clone());

        for node in group.members() {
            self.handled.insert(node, id);
        }
        self.ghosts.insert(handle.ghost().id(), id);
        tracing::info!("Created handle {} for {} target(s)", id, group.len());
        self.handles.insert(id, handle);
        self.groups.insert(id, group);
        self.order.push(id);

        self.listeners.emit(&ManagerEvent::HandleCreated(id));
        Ok(id)
    }

    /// Add a target to an existing handle and recenter its ghost.
    ///
    /// An ancestor of existing members replaces them; a descendant is
    /// rejected.
    pub fn add_target(
        &mut self,
        scene: &dyn SceneProvider,
        target: NodeId,
        handle: HandleId,
    ) -> Result<(), HandleError> {
        if self.handled.contains_key(&target) {
            tracing::warn!("Node {} already has a handle", target);
            return Err(HandleError::AlreadyHandled(target));
        }
        if !scene.contains(target) {
            tracing::warn!("Node {} is not in the scene", target);
            return Err(HandleError::UnknownTarget(target));
        }
        let group = self
            .groups
            .get_mut(&handle)
            .ok_or_else(|| unknown_handle(handle))?;

        let superseded = group.add_transform(scene, target).inspect_err(|e| {
            tracing::warn!("Cannot add {} to handle {}: {}", target, handle, e);
        })?;
        for node in superseded {
            self.handled.remove(&node);
        }
        self.handled.insert(target, handle);
        tracing::debug!("Added {} to handle {}", target, handle);

        self.cancel_drag(handle, Some(scene));
        self.sync_ghost(scene, handle);
        Ok(())
    }

    /// Remove a target from its handle; an emptied handle is destroyed
    pub fn remove_target(
        &mut self,
        scene: &dyn SceneProvider,
        target: NodeId,
        handle: HandleId,
    ) -> Result<(), HandleError> {
        let group = self
            .groups
            .get_mut(&handle)
            .ok_or_else(|| unknown_handle(handle))?;
        if self.handled.get(&target) != Some(&handle) {
            tracing::warn!("Node {} is not driven by handle {}", target, handle);
            return Err(HandleError::NotHandled(target));
        }

        self.handled.remove(&target);
        let emptied = group.remove_transform(target);
        tracing::debug!("Removed {} from handle {}", target, handle);

        if emptied {
            self.destroy_handle(handle)
        } else {
            self.cancel_drag(handle, Some(scene));
            self.sync_ghost(scene, handle);
            Ok(())
        }
    }

    /// Destroy a handle and release its targets
    pub fn destroy_handle(&mut self, id: HandleId) -> Result<(), HandleError> {
        if !self.handles.contains_key(&id) {
            return Err(unknown_handle(id));
        }
        self.cancel_drag(id, None);
        self.recolor.retain(|h| *h != id);
        self.stale_bounds.retain(|h| *h != id);

        let mut handle = self
            .handles
            .remove(&id)
            .ok_or_else(|| unknown_handle(id))?;

        self.order.retain(|h| *h != id);
        self.ghosts.remove(&handle.ghost().id());
        if let Some(group) = self.groups.remove(&id) {
            for node in group.members() {
                self.handled.remove(&node);
            }
        }
        // leftovers, e.g. targets released while the group was rebuilt
        self.handled.retain(|_, h| *h != id);

        if self.hovered.is_some_and(|r| r.handle == id) {
            self.hovered = None;
        }
        if self.previous_hovered.is_some_and(|r| r.handle == id) {
            self.previous_hovered = None;
        }

        handle.emit(HandleEvent::Destroyed(id));
        handle.clear_listeners();
        handle.disable();
        tracing::info!("Destroyed handle {}", id);

        self.listeners.emit(&ManagerEvent::HandleDestroyed(id));
        Ok(())
    }

    /// Destroy every handle
    pub fn destroy_all_handles(&mut self) {
        for id in self.order.clone() {
            let _ = self.destroy_handle(id);
        }
    }

    /// Switch what a handle edits
    pub fn change_handle_type(
        &mut self,
        id: HandleId,
        handle_type: HandleType,
    ) -> Result<(), HandleError> {
        self.cancel_drag(id, None);
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.change_handle_type(handle_type);
        tracing::debug!("Handle {} type {:?}", id, handle_type);
        Ok(())
    }

    /// Switch a handle's axis space and recenter its ghost
    pub fn change_handle_space(
        &mut self,
        scene: &dyn SceneProvider,
        id: HandleId,
        space: Space,
    ) -> Result<(), HandleError> {
        self.cancel_drag(id, Some(scene));
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.change_space(space);
        tracing::debug!("Handle {} space {:?}", id, handle.config().space);
        self.sync_ghost(scene, id);
        Ok(())
    }

    /// Move a handle's ghost between target pivots and bounds centers
    pub fn change_handle_pivot(
        &mut self,
        scene: &dyn SceneProvider,
        id: HandleId,
        origin_on_center: bool,
    ) -> Result<(), HandleError> {
        self.cancel_drag(id, Some(scene));
        let group = self.groups.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        group.set_origin_on_center(origin_on_center);
        tracing::debug!("Handle {} origin {:?}", id, group.origin());
        self.sync_ghost(scene, id);
        Ok(())
    }

    /// Switch which axes a handle exposes
    pub fn change_handle_axes(&mut self, id: HandleId, axes: HandleAxes) -> Result<(), HandleError> {
        self.cancel_drag(id, None);
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.change_axes(axes);
        Ok(())
    }

    /// Snapping policy and increments of a handle
    pub fn set_handle_snapping(
        &mut self,
        id: HandleId,
        snapping: SnappingType,
        position: Vec3,
        rotation: f32,
        scale: Vec3,
    ) -> Result<(), HandleError> {
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.set_snapping(snapping, position, rotation, scale);
        Ok(())
    }

    /// Auto scaling of a handle
    pub fn set_handle_auto_scale(
        &mut self,
        id: HandleId,
        enabled: bool,
        pixels: f32,
    ) -> Result<(), HandleError> {
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.set_auto_scale(enabled, pixels);
        Ok(())
    }

    /// Size multiplier of a handle, clamped to the allowed range
    pub fn set_handle_scale(&mut self, id: HandleId, multiplier: f32) -> Result<(), HandleError> {
        let handle = self.handles.get_mut(&id).ok_or_else(|| unknown_handle(id))?;
        handle.set_scale(multiplier);
        Ok(())
    }

    /// Destroy every handle and reset picking state, e.g. after the host
    /// swapped scenes. Manager listeners stay registered.
    pub fn reinitialize(&mut self) {
        self.destroy_all_handles();
        self.handles.clear();
        self.groups.clear();
        self.ghosts.clear();
        self.handled.clear();
        self.order.clear();
        self.camera = None;
        self.picking_enabled = true;
        self.hovered = None;
        self.previous_hovered = None;
        self.dragging = None;
        self.previous_pointer = None;
        self.recolor.clear();
        self.stale_bounds.clear();
        tracing::info!("Handle manager reinitialized");
    }

    /// Destroy every handle and drop all listeners
    pub fn shutdown(&mut self) {
        self.reinitialize();
        self.listeners.clear();
        tracing::info!("Handle manager shut down");
    }

    /// Run one frame: pick, drag, apply shortcuts and place the gizmos.
    ///
    /// Does nothing while no handle exists.
    pub fn update(&mut self, frame: &mut Frame<'_>) {
        let pointer = frame.input.pointer_position();
        if self.handles.is_empty() {
            self.previous_pointer = Some(pointer);
            return;
        }
        self.settle_cancelled_drags(frame);

        let Some(camera) = self.resolve_camera(frame.cameras) else {
            if self.dragging.is_some() {
                self.end_drag(frame);
            }
            self.clear_hover(frame.visuals);
            self.update_placements(None);
            self.previous_pointer = Some(pointer);
            return;
        };

        let input = DragInput {
            ray: camera.pointer_ray(pointer),
            pointer,
            previous_pointer: self.previous_pointer.unwrap_or(pointer),
            delta_time: frame.delta_time,
        };

        let picking = &self.settings.picking;
        let hits = frame.raycaster.raycast(
            &input.ray,
            picking.max_distance,
            LayerMask(picking.layer_mask),
        );
        let picked = nearest_interactor_hit(hits, picking.max_hits).filter(|(r, _)| {
            self.handles
                .get(&r.handle)
                .is_some_and(|h| h.interactor(r.kind).is_some())
        });
        self.hovered = picked.map(|(r, _)| r);
        self.update_hover(frame.visuals);

        let button = self.settings.picking.pointer_button;
        if frame.input.button_held(button) && self.dragging.is_some() {
            self.drag(frame, input);
        }
        if frame.input.button_down(button)
            && self.dragging.is_none()
            && let Some((target, hit_point)) = picked
        {
            self.start_drag(target, hit_point, input, frame.visuals);
        }
        if frame.input.button_up(button) && self.dragging.is_some() {
            self.end_drag(frame);
        }

        if self.dragging.is_none() {
            self.apply_shortcuts(frame);
        }

        self.update_placements(Some(&camera));
        self.previous_pointer = Some(pointer);
    }

    fn resolve_camera(&mut self, cameras: &dyn CameraProvider) -> Option<Camera> {
        if !self.picking_enabled {
            return None;
        }
        if let Some(id) = self.camera
            && let Some(camera) = cameras.camera(id)
        {
            return Some(camera);
        }

        if let Some(lost) = self.camera {
            tracing::warn!("Camera {:?} lost, looking for the main camera", lost);
        }
        match cameras
            .main_camera()
            .and_then(|id| cameras.camera(id).map(|camera| (id, camera)))
        {
            Some((id, camera)) => {
                self.camera = Some(id);
                Some(camera)
            }
            None => {
                tracing::warn!("No camera available, handle picking disabled");
                self.camera = None;
                self.picking_enabled = false;
                None
            }
        }
    }

    fn update_hover(&mut self, visuals: &mut dyn HandleVisuals) {
        if self.dragging.is_none()
            && let Some(previous) = self.previous_hovered
            && Some(previous) != self.hovered
            && let Some(handle) = self.handles.get_mut(&previous.handle)
        {
            handle.set_default_color(previous.kind, visuals);
        }

        if self.dragging.is_none()
            && let Some(hovered) = self.hovered
            && let Some(handle) = self.handles.get_mut(&hovered.handle)
        {
            let highlight = self.settings.appearance.highlight_color;
            handle.set_color(hovered.kind, highlight, visuals);
        }

        self.previous_hovered = self.hovered;
    }

    fn clear_hover(&mut self, visuals: &mut dyn HandleVisuals) {
        self.hovered = None;
        self.update_hover(visuals);
    }

    fn start_drag(
        &mut self,
        target: InteractorRef,
        hit_point: Vec3,
        input: DragInput,
        visuals: &mut dyn HandleVisuals,
    ) {
        let Some(handle) = self.handles.get_mut(&target.handle) else {
            return;
        };
        if !handle.start_interaction(target.kind, input, hit_point, visuals) {
            return;
        }

        self.dragging = Some(target);
        handle.emit(HandleEvent::InteractionStart(target.handle));
        tracing::debug!("Drag started on {:?} of handle {}", target.kind, target.handle);
        self.listeners
            .emit(&ManagerEvent::InteractionStart(target.handle));
    }

    fn drag(&mut self, frame: &mut Frame<'_>, input: DragInput) {
        let Some(target) = self.dragging else {
            return;
        };
        let id = target.handle;
        let Some(handle) = self.handles.get_mut(&id) else {
            self.dragging = None;
            return;
        };
        let Some(delta) = handle.interact(target.kind, input, frame.visuals) else {
            return;
        };

        if let Some(group) = self.groups.get(&id) {
            if let Some(position) = delta.position {
                group.update_positions(frame.scene, position);
            }
            if let Some(rotation) = delta.rotation {
                let pivot = handle.ghost().pose.position;
                group.update_rotations(frame.scene, rotation, pivot, handle.config().space);
            }
            if let Some(scale) = delta.scale {
                group.update_scales(frame.scene, scale);
            }
        }

        handle.emit(HandleEvent::Interaction(id));
        self.listeners.emit(&ManagerEvent::Interaction(id));
    }

    fn end_drag(&mut self, frame: &mut Frame<'_>) {
        let Some(target) = self.dragging.take() else {
            return;
        };
        let id = target.handle;
        let Some(handle) = self.handles.get_mut(&id) else {
            return;
        };
        handle.end_interaction(target.kind, frame.visuals);

        if let Some(group) = self.groups.get_mut(&id) {
            group.update_bounds(frame.scene);
            let pose = group.average_pose(frame.scene, handle.config().space);
            handle.ghost_mut().update_transform(pose);
        }

        handle.emit(HandleEvent::InteractionEnd(id));
        tracing::debug!("Drag ended on handle {}", id);
        self.listeners.emit(&ManagerEvent::InteractionEnd(id));
    }

    /// End an active drag on `id` without applying anything further.
    ///
    /// Bounds are refreshed right away when `scene` is given, otherwise on
    /// the next update together with a ghost resync. Colors always reach
    /// the visuals on the next update.
    fn cancel_drag(&mut self, id: HandleId, scene: Option<&dyn SceneProvider>) {
        let Some(target) = self.dragging.filter(|r| r.handle == id) else {
            return;
        };
        self.dragging = None;

        if let Some(handle) = self.handles.get_mut(&id) {
            handle.cancel_interactions();
            handle.emit(HandleEvent::InteractionEnd(id));
            self.recolor.push(id);
        }
        if let Some(group) = self.groups.get_mut(&id) {
            match scene {
                Some(scene) => group.update_bounds(scene),
                None => self.stale_bounds.push(id),
            }
        }

        tracing::debug!("Drag on {:?} of handle {} cancelled", target.kind, id);
        self.listeners.emit(&ManagerEvent::InteractionEnd(id));
    }

    fn settle_cancelled_drags(&mut self, frame: &mut Frame<'_>) {
        for id in std::mem::take(&mut self.recolor) {
            if let Some(handle) = self.handles.get_mut(&id) {
                handle.restore_default_colors(frame.visuals);
            }
        }
        for id in std::mem::take(&mut self.stale_bounds) {
            if let Some(group) = self.groups.get_mut(&id) {
                group.update_bounds(frame.scene);
            }
            self.sync_ghost(frame.scene, id);
        }
    }

    fn sync_ghost(&mut self, scene: &dyn SceneProvider, id: HandleId) {
        if let (Some(handle), Some(group)) = (self.handles.get_mut(&id), self.groups.get(&id)) {
            let pose = group.average_pose(scene, handle.config().space);
            handle.ghost_mut().update_transform(pose);
        }
    }

    fn apply_shortcuts(&mut self, frame: &mut Frame<'_>) {
        let shortcuts = &self.settings.shortcuts;
        if !shortcuts.enabled {
            return;
        }
        let pressed = |key: KeyCode| frame.input.key_down(key);

        let handle_type = if pressed(shortcuts.position) {
            Some(HandleType::Position)
        } else if pressed(shortcuts.rotation) {
            Some(HandleType::Rotation)
        } else if pressed(shortcuts.scale) {
            Some(HandleType::Scale)
        } else if pressed(shortcuts.all) {
            Some(HandleType::All)
        } else {
            None
        };
        let toggle_space = pressed(shortcuts.space_toggle);
        let toggle_pivot = pressed(shortcuts.pivot_toggle);
        if handle_type.is_none() && !toggle_space && !toggle_pivot {
            return;
        }
        tracing::debug!(
            ?handle_type,
            toggle_space,
            toggle_pivot,
            "Shortcut applied to {} handle(s)",
            self.order.len()
        );

        for id in self.order.clone() {
            if let Some(handle_type) = handle_type {
                let _ = self.change_handle_type(id, handle_type);
            }
            if toggle_space && let Some(handle) = self.handles.get(&id) {
                let space = handle.config().space.toggled();
                let _ = self.change_handle_space(frame.scene, id, space);
            }
            if toggle_pivot && let Some(group) = self.groups.get(&id) {
                let on_center = !group.is_origin_on_center();
                let _ = self.change_handle_pivot(frame.scene, id, on_center);
            }
        }
    }

    fn update_placements(&mut self, camera: Option<&Camera>) {
        for handle in self.handles.values_mut() {
            handle.update_placement(camera);
        }
    }
}

fn unknown_handle(id: HandleId) -> HandleError {
    tracing::warn!("Unknown handle {}", id);
    HandleError::UnknownHandle(id)
}
