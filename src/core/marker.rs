//! Point-marker glyph geometry.
//!
//! Every shape is scaled so that its area equals the area of a square whose
//! side is the nominal marker size. Markers of different shapes drawn at the
//! same size therefore carry the same visual weight.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::PixelPoint;
use crate::error::{PlotError, PlotResult};

/// Vertex list of one polygonal marker; never spills for the supported shapes.
pub type MarkerVertices = SmallVec<[PixelPoint; 6]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Pentagon,
    Hexagon,
}

impl MarkerShape {
    /// Vertex count of polygonal shapes; `None` for circle and square.
    #[must_use]
    pub fn vertex_count(self) -> Option<usize> {
        match self {
            Self::Circle | Self::Square => None,
            Self::Triangle => Some(3),
            Self::Pentagon => Some(5),
            Self::Hexagon => Some(6),
        }
    }

    /// Factor applied to the half-size to obtain the circumradius.
    ///
    /// The reference area is the square of side `2h`, i.e. `4h²`. A unit-radius
    /// circle has area `π`; a regular n-gon with unit circumradius has area
    /// `n·sin(2π/n)/2`. The factor is `1/sqrt(A/4)` for the shape's unit area `A`,
    /// which gives `2/√π ≈ 1.128` for the circle, `≈ 1.755` for the triangle,
    /// `≈ 1.297` for the pentagon and `≈ 1.241` for the hexagon.
    #[must_use]
    pub fn area_scale(self) -> f64 {
        let unit_area = match (self, self.vertex_count()) {
            (Self::Square, _) => return 1.0,
            (_, None) => PI,
            (_, Some(n)) => {
                let n = n as f64;
                n * (TAU / n).sin() / 2.0
            }
        };
        1.0 / (unit_area / 4.0).sqrt()
    }
}

/// Shape and nominal size of a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub size: f64,
}

impl MarkerStyle {
    #[must_use]
    pub const fn new(shape: MarkerShape, size: f64) -> Self {
        Self { shape, size }
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PlotError::Config(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Resolved geometry for one marker style, shared by every point of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerGeometry {
    Circle { radius: f64 },
    Square { half_size: f64 },
    Polygon { offsets: MarkerVertices },
}

impl MarkerGeometry {
    #[must_use]
    pub fn new(style: MarkerStyle) -> Self {
        let half_size = style.size * 0.5;
        let radius = half_size * style.shape.area_scale();
        match (style.shape, style.shape.vertex_count()) {
            (MarkerShape::Square, _) => Self::Square { half_size },
            (_, None) => Self::Circle { radius },
            (_, Some(count)) => Self::Polygon {
                offsets: polygon_offsets(count, radius),
            },
        }
    }

    /// Polygon vertices centered on `center`; `None` for circle and square.
    #[must_use]
    pub fn vertices_at(&self, center: PixelPoint) -> Option<MarkerVertices> {
        match self {
            Self::Polygon { offsets } => Some(
                offsets
                    .iter()
                    .map(|offset| center.offset(offset.x, offset.y))
                    .collect(),
            ),
            Self::Circle { .. } | Self::Square { .. } => None,
        }
    }
}

/// Vertices at equal angular spacing, clockwise on screen from straight up.
fn polygon_offsets(count: usize, radius: f64) -> MarkerVertices {
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let angle = step * i as f64;
            PixelPoint::new(angle.sin() * radius, -angle.cos() * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon_area(points: &[PixelPoint]) -> f64 {
        let mut twice = 0.0;
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            twice += a.x * b.y - b.x * a.y;
        }
        twice.abs() / 2.0
    }

    #[test]
    fn area_scale_matches_known_constants() {
        assert_relative_eq!(MarkerShape::Circle.area_scale(), 1.128_379_167_095_512, epsilon = 1e-9);
        assert_relative_eq!(MarkerShape::Triangle.area_scale(), 1.754_765_346_932_842, epsilon = 1e-9);
        assert_relative_eq!(MarkerShape::Pentagon.area_scale(), 1.297_050_330_592_269, epsilon = 1e-9);
        assert_relative_eq!(MarkerShape::Hexagon.area_scale(), 1.240_806_478_860_636, epsilon = 1e-9);
        assert_relative_eq!(MarkerShape::Square.area_scale(), 1.0);
    }

    #[test]
    fn polygon_markers_have_square_area() {
        for shape in [MarkerShape::Triangle, MarkerShape::Pentagon, MarkerShape::Hexagon] {
            let geometry = MarkerGeometry::new(MarkerStyle::new(shape, 20.0));
            let vertices = geometry
                .vertices_at(PixelPoint::new(0.0, 0.0))
                .expect("polygon");
            assert_relative_eq!(polygon_area(&vertices), 400.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn first_vertex_points_up() {
        let geometry = MarkerGeometry::new(MarkerStyle::new(MarkerShape::Triangle, 10.0));
        let vertices = geometry
            .vertices_at(PixelPoint::new(50.0, 50.0))
            .expect("polygon");
        assert_eq!(vertices.len(), 3);
        assert_relative_eq!(vertices[0].x, 50.0, epsilon = 1e-12);
        assert!(vertices[0].y < 50.0);
    }

    #[test]
    fn invalid_size_is_rejected() {
        assert!(MarkerStyle::new(MarkerShape::Circle, 0.0).validate().is_err());
        assert!(MarkerStyle::new(MarkerShape::Circle, f64::NAN).validate().is_err());
    }
}
