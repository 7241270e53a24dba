//! World-space boxes around targets

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned box. Bounds of a target with no geometry collapse to a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Lowest corner
    pub min: Vec3,
    /// Highest corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Box spanning two corners, in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Zero-size box
    pub fn at_point(point: Vec3) -> Self {
        Self::new(point, point)
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self::new(center - half, center + half)
    }

    /// Midpoint, the reference point for center origins
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest box holding both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box around this one after an affine transform.
    ///
    /// The half extents go through the absolute linear part, which gives the
    /// same box as transforming all eight corners.
    pub fn transform(&self, transform: &Mat4) -> BoundingBox {
        let center = transform.transform_point3(self.center());
        let linear = Mat3::from_mat4(*transform);
        let abs = Mat3::from_cols(linear.x_axis.abs(), linear.y_axis.abs(), linear.z_axis.abs());
        Self::from_center_half_extents(center, abs * (self.size() * 0.5))
    }
}
