//! Runtime transform handles: core types
//!
//! Value types, geometry and the collaborator interfaces the handle engine
//! talks to. Nothing in here owns scene state.
//!
//! # Module Structure
//!
//! ```text
//! rth-core/
//! ├── pose.rs       # Position/rotation/scale value
//! ├── math.rs       # Rays, planes, closest points, signed angles
//! ├── snap.rs       # Relative/absolute snapping policies
//! ├── bounds.rs     # Axis-aligned bounding boxes
//! ├── camera.rs     # Perspective camera, screen <-> world
//! ├── types.rs      # Handle enums (type, axes, space, origin)
//! ├── scene/        # SceneProvider trait + in-memory scene
//! ├── input.rs      # InputProvider trait + per-frame snapshot
//! ├── config.rs     # HandleSettings (ron)
//! └── constants.rs
//! ```

pub mod bounds;
pub mod camera;
pub mod config;
pub mod constants;
pub mod input;
pub mod math;
pub mod pose;
pub mod scene;
pub mod snap;
pub mod types;

pub use bounds::BoundingBox;
pub use camera::{Camera, CameraId, CameraProvider, MainCamera};
pub use config::{ConfigError, HandleSettings};
pub use input::{InputProvider, InputState, KeyCode, PointerButton};
pub use math::{Plane, Ray};
pub use pose::Pose;
pub use scene::{MemoryScene, NodeId, SceneProvider};
pub use snap::SnappingType;
pub use types::{Axis, HandleAxes, HandleType, Origin, Space};

/// RGBA color
pub type Color = [f32; 4];
