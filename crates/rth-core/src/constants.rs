//! Global constants for rth-core

/// Threshold on `1 - (d1·d2)²` below which two rays count as parallel
pub const CLOSEST_POINT_PRECISION: f32 = 0.001;

/// Plane intersection denominator below which a ray counts as parallel
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-6;

/// Default on-screen gizmo size when auto-scale is on
pub const DEFAULT_AUTO_SCALE_PIXELS: f32 = 192.0;

/// Handle scale multiplier limits
pub const HANDLE_SCALE_MIN: f32 = 0.1;
pub const HANDLE_SCALE_MAX: f32 = 10.0;

/// Pick ray length
pub const RAYCAST_MAX_DISTANCE: f32 = 1000.0;

/// Maximum number of pick hits considered per frame
pub const MAX_RAYCAST_HITS: usize = 16;

/// Layer bit the gizmo colliders live on
pub const HANDLE_LAYER: u32 = 1 << 3;

/// Default highlight color (white)
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Default axis colors (RGBA)
pub const X_AXIS_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
pub const Y_AXIS_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 1.0];
pub const Z_AXIS_COLOR: [f32; 4] = [0.2, 0.6, 1.0, 1.0];

/// Uniform scale control color (orange)
pub const GLOBAL_HANDLE_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];

/// Color shown on scale axes while the uniform control drags them (yellow)
pub const LINKED_COLOR: [f32; 4] = [1.0, 0.92, 0.016, 1.0];
