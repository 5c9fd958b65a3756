mod primitives;
mod recording;
pub mod spline;

use std::path::Path;

pub use primitives::{Color, FontSpec, TextAnchor, TextExtent, TextRun};
pub use recording::{CanvasCommand, RecordingCanvas};

use crate::core::{CanvasSize, PixelPoint, PixelRect};
use crate::error::PlotResult;

/// Raster drawing surface consumed by the plotting session.
///
/// Implementations own one surface of fixed pixel size. All coordinates are
/// in canvas pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Creates a blank surface of `size`.
    fn create(size: CanvasSize) -> PlotResult<Self>
    where
        Self: Sized;

    fn size(&self) -> CanvasSize;

    /// Extension appended by [`crate::api::GraphPlotter::save`] when the path lacks one.
    fn default_extension(&self) -> &'static str;

    fn fill_surface(&mut self, color: Color) -> PlotResult<()>;

    fn stroke_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    fn stroke_rect(&mut self, rect: PixelRect, color: Color, stroke_width: f64) -> PlotResult<()>;

    fn fill_rect(&mut self, rect: PixelRect, color: Color) -> PlotResult<()>;

    fn stroke_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    fn fill_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    ) -> PlotResult<()>;

    fn stroke_polygon(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()>;

    fn stroke_polyline(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    /// Strokes an open interpolating spline through `points`.
    fn stroke_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    /// Strokes a closed interpolating spline through `points`.
    fn stroke_closed_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()>;

    fn fill_closed_curve(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()>;

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextExtent>;

    fn draw_text(&mut self, run: &TextRun<'_>) -> PlotResult<()>;

    fn set_clip(&mut self, rect: PixelRect) -> PlotResult<()>;

    fn reset_clip(&mut self) -> PlotResult<()>;

    /// Persists the surface to `path` exactly as given.
    fn save(&mut self, path: &Path) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, CairoCanvasStats};
