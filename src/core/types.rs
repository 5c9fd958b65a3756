use serde::{Deserialize, Serialize};

/// Pixel dimensions of a canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Spatial dimension an axis measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Horizontal,
    Vertical,
}

/// Whether a dimension carries only a primary axis or a primary/secondary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisMode {
    #[default]
    Single,
    Dual,
}

impl AxisMode {
    #[must_use]
    pub fn is_dual(self) -> bool {
        matches!(self, Self::Dual)
    }

    /// Number of label bands reserved for this dimension.
    #[must_use]
    pub fn band_count(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
        }
    }
}

/// Primary or secondary axis within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum AxisSlot {
    #[default]
    Primary,
    Secondary,
}

/// One of the four independent axis identities of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    X,
    X2,
    Y,
    Y2,
}

impl AxisId {
    pub const ALL: [AxisId; 4] = [AxisId::X, AxisId::X2, AxisId::Y, AxisId::Y2];

    #[must_use]
    pub fn from_parts(dimension: Dimension, slot: AxisSlot) -> Self {
        match (dimension, slot) {
            (Dimension::Horizontal, AxisSlot::Primary) => Self::X,
            (Dimension::Horizontal, AxisSlot::Secondary) => Self::X2,
            (Dimension::Vertical, AxisSlot::Primary) => Self::Y,
            (Dimension::Vertical, AxisSlot::Secondary) => Self::Y2,
        }
    }

    #[must_use]
    pub fn dimension(self) -> Dimension {
        match self {
            Self::X | Self::X2 => Dimension::Horizontal,
            Self::Y | Self::Y2 => Dimension::Vertical,
        }
    }

    #[must_use]
    pub fn slot(self) -> AxisSlot {
        match self {
            Self::X | Self::Y => AxisSlot::Primary,
            Self::X2 | Self::Y2 => AxisSlot::Secondary,
        }
    }

    #[must_use]
    pub fn is_secondary(self) -> bool {
        self.slot() == AxisSlot::Secondary
    }

    /// Stable position of this identity in fixed-size per-axis collections.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::X2 => 1,
            Self::Y => 2,
            Self::Y2 => 3,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::X2 => "x2",
            Self::Y => "y",
            Self::Y2 => "y2",
        }
    }
}

/// Axis selection for a point-taking drawing call: one slot per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisPair {
    pub x: AxisSlot,
    pub y: AxisSlot,
}

impl AxisPair {
    pub const PRIMARY: AxisPair = AxisPair {
        x: AxisSlot::Primary,
        y: AxisSlot::Primary,
    };

    pub const SECONDARY: AxisPair = AxisPair {
        x: AxisSlot::Secondary,
        y: AxisSlot::Secondary,
    };

    #[must_use]
    pub const fn new(x: AxisSlot, y: AxisSlot) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn x_axis(self) -> AxisId {
        AxisId::from_parts(Dimension::Horizontal, self.x)
    }

    #[must_use]
    pub fn y_axis(self) -> AxisId {
        AxisId::from_parts(Dimension::Vertical, self.y)
    }
}

/// Point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in canvas pixel space with non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}
