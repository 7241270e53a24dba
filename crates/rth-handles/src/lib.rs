//! Runtime transform handles
//!
//! Move, rotate and scale gizmos for scene nodes the host already owns. A
//! [`TransformHandleManager`] owns every live handle, turns pointer input
//! into drags on individual interactors and writes the resulting pose
//! changes back to the scene through [`rth_core::SceneProvider`].
//!
//! # Module Structure
//!
//! ```text
//! rth-handles/
//! ├── manager.rs      # TransformHandleManager, Frame, per-frame update
//! ├── handle/         # HandleGroup: config, interactors, placement
//! ├── interactor/     # One control per degree of freedom
//! ├── group.rs        # TransformGroup: members and coordinated updates
//! ├── ghost.rs        # Pivot proxy, reports per-frame deltas
//! ├── picking/        # Raycaster trait, hits, gizmo colliders
//! ├── visuals.rs      # Color and arc preview sink
//! ├── events.rs       # Listener registries
//! ├── ids.rs
//! ├── error.rs
//! └── constants.rs
//! ```

pub mod constants;
pub mod error;
pub mod events;
pub mod ghost;
pub mod group;
pub mod handle;
pub mod ids;
pub mod interactor;
pub mod manager;
pub mod picking;
pub mod visuals;

#[cfg(test)]
pub(crate) mod testing;

pub use error::HandleError;
pub use events::{EventRegistry, ListenerId};
pub use ghost::{Ghost, GhostDelta};
pub use group::TransformGroup;
pub use handle::{DragInput, HandleConfig, HandleEvent, HandleGroup, Placement};
pub use ids::{GhostId, HandleId, InteractorKind, InteractorRef};
pub use interactor::{InteractionContext, Interactor, InteractorState};
pub use manager::{
    create_shared_manager, Frame, ManagerEvent, SharedHandleManager, TransformHandleManager,
};
pub use picking::{GizmoColliders, HitOwner, LayerMask, RaycastHit, Raycaster};
pub use visuals::{ArcPreview, HandleVisuals, NullVisuals};
