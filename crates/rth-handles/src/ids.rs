//! Identifiers for handles, ghosts and interactors

use rth_core::Axis;
use uuid::Uuid;

/// Identifies a handle group (and its transform group)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(pub Uuid);

impl HandleId {
    /// Fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GhostId(pub Uuid);

impl GhostId {
    /// Fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GhostId {
    fn default() -> Self {
        Self::new()
    }
}

/// The degree of freedom an interactor controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractorKind {
    /// Translate along an axis
    PositionAxis(Axis),
    /// Translate in the plane with this normal
    PositionPlane(Axis),
    /// Rotate about an axis
    RotationAxis(Axis),
    /// Scale along an axis
    ScaleAxis(Axis),
    /// Scale all enabled axes together
    ScaleUniform,
}

/// A specific interactor of a specific handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractorRef {
    /// Owning handle
    pub handle: HandleId,
    /// Which control
    pub kind: InteractorKind,
}

impl InteractorRef {
    /// Build a reference
    pub fn new(handle: HandleId, kind: InteractorKind) -> Self {
        Self { handle, kind }
    }
}
