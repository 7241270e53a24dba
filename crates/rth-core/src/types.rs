//! Handle configuration enums

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn to_index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit direction of the axis
    pub fn direction(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The two axes spanning the plane perpendicular to this one
    pub fn plane_axes(&self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Which axes a handle exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleAxes {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
    #[default]
    XYZ,
}

impl HandleAxes {
    pub fn has_axis(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, Self::X | Self::XY | Self::XZ | Self::XYZ),
            Axis::Y => matches!(self, Self::Y | Self::XY | Self::YZ | Self::XYZ),
            Axis::Z => matches!(self, Self::Z | Self::XZ | Self::YZ | Self::XYZ),
        }
    }

    pub fn has_both(&self, a: Axis, b: Axis) -> bool {
        self.has_axis(a) && self.has_axis(b)
    }

    /// Enabled axes in X, Y, Z order
    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(|axis| self.has_axis(*axis))
    }

    /// True when more than one axis is enabled
    pub fn is_multi_axis(&self) -> bool {
        self.axes().count() > 1
    }

    /// 1 for each enabled axis, 0 otherwise
    pub fn to_vector(&self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
            Self::XY => Vec3::new(1.0, 1.0, 0.0),
            Self::XZ => Vec3::new(1.0, 0.0, 1.0),
            Self::YZ => Vec3::new(0.0, 1.0, 1.0),
            Self::XYZ => Vec3::ONE,
        }
    }
}

/// Kind of handle: which transform components it edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandleType {
    #[default]
    Position,
    Rotation,
    Scale,
    PositionRotation,
    PositionScale,
    RotationScale,
    All,
}

impl HandleType {
    pub fn has_position(&self) -> bool {
        match self {
            Self::Position | Self::PositionRotation | Self::PositionScale | Self::All => true,
            Self::Rotation | Self::Scale | Self::RotationScale => false,
        }
    }

    pub fn has_rotation(&self) -> bool {
        match self {
            Self::Rotation | Self::PositionRotation | Self::RotationScale | Self::All => true,
            Self::Position | Self::Scale | Self::PositionScale => false,
        }
    }

    pub fn has_scale(&self) -> bool {
        match self {
            Self::Scale | Self::PositionScale | Self::RotationScale | Self::All => true,
            Self::Position | Self::Rotation | Self::PositionRotation => false,
        }
    }
}

/// Coordinate space of handle axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Space {
    /// Axes follow the target's orientation
    #[default]
    Local,
    /// Axes are the scene's fixed axes
    World,
}

impl Space {
    pub fn toggled(&self) -> Space {
        match self {
            Space::Local => Space::World,
            Space::World => Space::Local,
        }
    }
}

/// Reference point of each group member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    /// The member's own pivot (its position)
    #[default]
    Pivot,
    /// The center of the member's bounds
    Center,
}

impl Origin {
    pub fn is_center(&self) -> bool {
        matches!(self, Origin::Center)
    }

    pub fn from_center(on_center: bool) -> Self {
        if on_center { Origin::Center } else { Origin::Pivot }
    }
}
