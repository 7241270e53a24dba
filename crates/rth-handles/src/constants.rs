//! Gizmo geometry, in gizmo units before auto-scaling

/// Length of a position axis
pub const AXIS_LENGTH: f32 = 1.0;

/// Pick radius around axis lines
pub const AXIS_PICK_RADIUS: f32 = 0.08;

/// Rest length of a scale axis
pub const SCALE_AXIS_LENGTH: f32 = 0.75;

/// Radius of a rotation ring
pub const RING_RADIUS: f32 = 1.0;

/// Half width of a rotation ring's pick band
pub const RING_PICK_THICKNESS: f32 = 0.06;

/// Offset factor of a plane control along its in-plane axes
pub const PLANE_OFFSET: f32 = 0.125;

/// Half size of a plane control quad
pub const PLANE_HALF_SIZE: f32 = 0.1;

/// Radius of the uniform scale control
pub const UNIFORM_SCALE_RADIUS: f32 = 0.12;

/// Above this |dot| with the view direction an axis is hidden
pub const AXIS_VISIBILITY_DOT_THRESHOLD: f32 = 0.975;

/// Uniform scale sensitivity per pixel and second
pub const UNIFORM_SCALE_SENSITIVITY: f32 = 2.0;
