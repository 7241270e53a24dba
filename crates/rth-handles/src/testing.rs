//! Shared test fixtures

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use rth_core::camera::MainCamera;
use rth_core::{Camera, CameraProvider, Color, InputState, MemoryScene, Pose, Ray};

use crate::ghost::Ghost;
use crate::handle::HandleConfig;
use crate::ids::InteractorRef;
use crate::interactor::InteractionContext;
use crate::manager::{Frame, TransformHandleManager};
use crate::picking::GizmoColliders;
use crate::visuals::{ArcPreview, HandleVisuals};

/// Print engine logs in test output (RUST_LOG overrides the filter)
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rth_handles=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Ray from z = 10 straight down -Z through (x, y, 0)
pub fn ray_through(x: f32, y: f32) -> Ray {
    Ray::new(Vec3::new(x, y, 10.0), Vec3::NEG_Z)
}

/// Visuals that remember what they were told
#[derive(Debug, Default)]
pub struct RecordingVisuals {
    pub colors: HashMap<InteractorRef, Color>,
    pub arcs: Vec<ArcPreview>,
}

impl RecordingVisuals {
    pub fn color_of(&self, interactor: InteractorRef) -> Option<Color> {
        self.colors.get(&interactor).copied()
    }
}

impl HandleVisuals for RecordingVisuals {
    fn set_color(&mut self, interactor: InteractorRef, color: Color) {
        self.colors.insert(interactor, color);
    }

    fn draw_arc(&mut self, arc: &ArcPreview) {
        self.arcs.push(*arc);
    }
}

/// A ghost and config to run a single interactor against
pub struct DragHarness {
    pub ghost: Ghost,
    pub config: HandleConfig,
    pub visuals: RecordingVisuals,
}

pub fn drag_context(pose: Pose) -> DragHarness {
    DragHarness {
        ghost: Ghost::new(pose),
        config: HandleConfig::default(),
        visuals: RecordingVisuals::default(),
    }
}

impl DragHarness {
    pub fn context(&mut self, ray: Ray) -> InteractionContext<'_> {
        InteractionContext {
            ghost: &mut self.ghost,
            config: &self.config,
            ray,
            pointer: Vec2::ZERO,
            previous_pointer: Vec2::ZERO,
            delta_time: 1.0 / 60.0,
            gizmo_scale: 1.0,
            visuals: &mut self.visuals,
        }
    }
}

/// Scene, camera, input and visuals driving a manager frame by frame.
///
/// The camera sits at z = 10 looking at the origin, so world X is screen
/// right and world Y is screen up.
pub struct Rig {
    pub scene: MemoryScene,
    pub cameras: MainCamera,
    pub input: InputState,
    pub visuals: RecordingVisuals,
}

impl Rig {
    pub fn new() -> Self {
        init_tracing();
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec2::new(800.0, 600.0));
        Self {
            scene: MemoryScene::new(),
            cameras: MainCamera::new(camera),
            input: InputState::default(),
            visuals: RecordingVisuals::default(),
        }
    }

    pub fn camera(&self) -> Option<Camera> {
        self.cameras.camera(self.cameras.main_camera()?)
    }

    /// Screen position of a world point
    pub fn screen(&self, world: Vec3) -> Vec2 {
        self.camera()
            .and_then(|c| c.world_to_screen(world))
            .unwrap_or(Vec2::ZERO)
    }

    /// Put the pointer over a world point
    pub fn point_at(&mut self, world: Vec3) {
        let screen = self.screen(world);
        self.input.move_pointer(screen);
    }

    /// Run one manager frame, then clear per-frame input edges
    pub fn step(&mut self, manager: &mut TransformHandleManager) {
        let colliders = GizmoColliders::from_manager(manager);
        let mut frame = Frame {
            scene: &mut self.scene,
            input: &self.input,
            raycaster: &colliders,
            cameras: &self.cameras,
            visuals: &mut self.visuals,
            delta_time: 1.0 / 60.0,
        };
        manager.update(&mut frame);
        self.input.next_frame();
    }
}
