//! Snapping policies
//!
//! Relative snapping rounds the *change* to a multiple of the increment,
//! absolute snapping rounds the *resulting value*. A zero increment disables
//! snapping for that component. Ties round to even.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Snapping behavior of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnappingType {
    /// Snap to fixed points in world space (grid of 1: 0, 1, 2, ...)
    Absolute,
    /// Quantize movement from the start value (grid of 1 from 0.5: 1.5, 2.5, ...)
    #[default]
    Relative,
}

/// Round `value` to the nearest multiple of `step`; `step == 0` is a no-op.
pub fn snap_value(value: f32, step: f32) -> f32 {
    if step == 0.0 {
        return value;
    }
    (value / step).round_ties_even() * step
}

/// Round each component of `value` to its own step, skipping zero steps.
pub fn snap_components(value: Vec3, steps: Vec3) -> Vec3 {
    Vec3::new(
        snap_value(value.x, steps.x),
        snap_value(value.y, steps.y),
        snap_value(value.z, steps.z),
    )
}

/// Round the length of `offset` to a multiple of `step`, keeping its direction.
pub fn snap_magnitude(offset: Vec3, step: f32) -> Vec3 {
    if step == 0.0 {
        return offset;
    }
    snap_value(offset.length(), step) * offset.normalize_or_zero()
}

/// Snap a per-axis scale delta.
///
/// `start_factor` is the start scale along the dragged axis. In absolute mode
/// the total factor `start_factor + delta` is rounded and the delta derived
/// back from it.
pub fn snap_scale_delta(delta: f32, step: f32, start_factor: f32, snapping: SnappingType) -> f32 {
    if step == 0.0 {
        return delta;
    }
    match snapping {
        SnappingType::Relative => snap_value(delta, step),
        SnappingType::Absolute => snap_value(delta + start_factor, step) - start_factor,
    }
}
