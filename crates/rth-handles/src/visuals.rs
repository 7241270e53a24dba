//! Rendering side of handles
//!
//! The engine decides colors and arc previews; drawing them is up to the
//! host, through [`HandleVisuals`].

use glam::{Quat, Vec3};
use rth_core::Color;

use crate::ids::InteractorRef;

/// Arc fan data: vertices, normals and triangle indices
pub type ArcMesh = (Vec<[f32; 3]>, Vec<[f32; 3]>, Vec<u32>);

/// Swept-angle preview of an active rotation drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPreview {
    /// Center of the rotation ring in world space
    pub center: Vec3,
    /// Point where the drag started; sets the arc's start direction
    pub from: Vec3,
    /// Rotation axis in world space
    pub axis: Vec3,
    /// Ring radius in world units
    pub radius: f32,
    /// Swept angle in radians
    pub angle: f32,
    /// Number of fan segments
    pub segments: u32,
}

impl ArcPreview {
    /// Arc with one segment per started degree, plus one
    pub fn new(center: Vec3, from: Vec3, axis: Vec3, radius: f32, angle: f32) -> Self {
        let segments = angle.to_degrees().ceil().abs() as u32 + 1;
        Self {
            center,
            from,
            axis,
            radius,
            angle,
            segments,
        }
    }

    /// Triangle fan around `center`; the last vertex is the center itself
    pub fn triangle_fan(&self) -> ArcMesh {
        let n = self.segments.max(1);
        let axis = self.axis.normalize_or_zero();
        let start = (self.from - self.center).normalize_or_zero() * self.radius;

        let mut vertices = Vec::with_capacity(n as usize + 2);
        for i in 0..=n {
            let angle = i as f32 / n as f32 * self.angle;
            let v = Quat::from_axis_angle(axis, angle) * start + self.center;
            vertices.push(v.to_array());
        }
        vertices.push(self.center.to_array());

        let normals = vec![axis.to_array(); vertices.len()];

        let center_index = n + 1;
        let mut indices = Vec::with_capacity(n as usize * 3);
        for i in 0..n {
            indices.extend_from_slice(&[center_index, i, i + 1]);
        }

        (vertices, normals, indices)
    }
}

/// Sink for interactor colors and arc previews
pub trait HandleVisuals {
    /// Set the display color of an interactor
    fn set_color(&mut self, interactor: InteractorRef, color: Color);
    /// Draw a rotation arc for the current frame
    fn draw_arc(&mut self, arc: &ArcPreview);
}

/// Visuals that draw nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisuals;

impl HandleVisuals for NullVisuals {
    fn set_color(&mut self, _interactor: InteractorRef, _color: Color) {}

    fn draw_arc(&mut self, _arc: &ArcPreview) {}
}
