use std::f64::consts::TAU;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cairo::{Antialias, Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::warn;

use crate::core::{CanvasSize, PixelPoint, PixelRect};
use crate::error::{PlotError, PlotResult};
use crate::render::spline::{
    BezierSegment, DEFAULT_TENSION, closed_cardinal_segments, open_cardinal_segments,
};
use crate::render::{Canvas, Color, FontSpec, TextExtent, TextRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoCanvasStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts: usize,
}

/// Cairo + Pango + PangoCairo canvas writing PNG images.
#[derive(Debug)]
pub struct CairoCanvas {
    surface: ImageSurface,
    context: Context,
    stats: CairoCanvasStats,
}

impl CairoCanvas {
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn stats(&self) -> CairoCanvasStats {
        self.stats
    }

    fn stroke(&mut self, color: Color, stroke_width: f64) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context.set_line_width(stroke_width);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill(&mut self, color: Color) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn append_points_path(&self, points: &[PixelPoint], close: bool) {
        self.context.new_path();
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                self.context.move_to(point.x, point.y);
            } else {
                self.context.line_to(point.x, point.y);
            }
        }
        if close {
            self.context.close_path();
        }
    }

    fn append_segments_path(&self, segments: &[BezierSegment], close: bool) {
        self.context.new_path();
        if let Some(first) = segments.first() {
            self.context.move_to(first.start.x, first.start.y);
        }
        for segment in segments {
            self.context.curve_to(
                segment.control1.x,
                segment.control1.y,
                segment.control2.x,
                segment.control2.y,
                segment.end.x,
                segment.end.y,
            );
        }
        if close {
            self.context.close_path();
        }
    }

    fn append_ellipse_path(&self, center: PixelPoint, radius_x: f64, radius_y: f64) -> PlotResult<()> {
        self.context.new_path();
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        self.context.translate(center.x, center.y);
        self.context.scale(radius_x, radius_y);
        self.context.arc(0.0, 0.0, 1.0, 0.0, TAU);
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }

    fn layout(&self, text: &str, font: &FontSpec) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let description = FontDescription::from_string(&format!("{} {}", font.family, font.size));
        layout.set_font_description(Some(&description));
        layout.set_text(text);
        layout
    }
}

impl Canvas for CairoCanvas {
    fn create(size: CanvasSize) -> PlotResult<Self> {
        let (Ok(width), Ok(height)) = (i32::try_from(size.width), i32::try_from(size.height))
        else {
            return Err(PlotError::Config(
                "cairo surface size exceeds i32".to_owned(),
            ));
        };
        if width <= 0 || height <= 0 {
            return Err(PlotError::Config(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.set_antialias(Antialias::Best);

        Ok(Self {
            surface,
            context,
            stats: CairoCanvasStats::default(),
        })
    }

    fn size(&self) -> CanvasSize {
        CanvasSize::new(
            u32::try_from(self.surface.width()).unwrap_or_default(),
            u32::try_from(self.surface.height()).unwrap_or_default(),
        )
    }

    fn default_extension(&self) -> &'static str {
        "png"
    }

    fn fill_surface(&mut self, color: Color) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        self.context.new_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.stroke(color, stroke_width)
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Color, stroke_width: f64) -> PlotResult<()> {
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.stroke(color, stroke_width)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) -> PlotResult<()> {
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.fill(color)
    }

    fn stroke_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        self.append_ellipse_path(center, radius_x, radius_y)?;
        self.stroke(color, stroke_width)
    }

    fn fill_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    ) -> PlotResult<()> {
        self.append_ellipse_path(center, radius_x, radius_y)?;
        self.fill(color)
    }

    fn stroke_polygon(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.append_points_path(points, true);
        self.stroke(color, stroke_width)
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()> {
        if points.len() < 3 {
            return Ok(());
        }
        self.append_points_path(points, true);
        self.fill(color)
    }

    fn stroke_polyline(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.append_points_path(points, false);
        self.stroke(color, stroke_width)
    }

    fn stroke_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let segments = open_cardinal_segments(points, DEFAULT_TENSION);
        if segments.is_empty() {
            return Ok(());
        }
        self.append_segments_path(&segments, false);
        self.stroke(color, stroke_width)
    }

    fn stroke_closed_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let segments = closed_cardinal_segments(points, DEFAULT_TENSION);
        if segments.is_empty() {
            return Ok(());
        }
        self.append_segments_path(&segments, true);
        self.stroke(color, stroke_width)
    }

    fn fill_closed_curve(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()> {
        let segments = closed_cardinal_segments(points, DEFAULT_TENSION);
        if segments.is_empty() {
            return Ok(());
        }
        self.append_segments_path(&segments, true);
        self.fill(color)
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextExtent> {
        let (width, height) = self.layout(text, font).pixel_size();
        Ok(TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    fn draw_text(&mut self, run: &TextRun<'_>) -> PlotResult<()> {
        let layout = self.layout(run.text, run.font);
        let (width, height) = layout.pixel_size();
        let (dx, dy) = run.anchor_offset(TextExtent {
            width: f64::from(width),
            height: f64::from(height),
        });

        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        self.context.new_path();
        self.context.translate(run.position.x, run.position.y);
        self.context.rotate(run.rotation_degrees.to_radians());
        apply_color(&self.context, run.color);
        self.context.move_to(dx, dy);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        self.stats.texts += 1;
        Ok(())
    }

    fn set_clip(&mut self, rect: PixelRect) -> PlotResult<()> {
        self.context.reset_clip();
        self.context.new_path();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
        Ok(())
    }

    fn reset_clip(&mut self) -> PlotResult<()> {
        self.context.reset_clip();
        Ok(())
    }

    fn save(&mut self, path: &Path) -> PlotResult<()> {
        self.surface.flush();
        let mut writer = BufWriter::new(File::create(path)?);
        self.surface.write_to_png(&mut writer).map_err(|err| {
            warn!(path = %path.display(), error = %err, "png encoding failed");
            PlotError::Backend(format!("failed to write png: {err}"))
        })
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    warn!(error = %err, "{prefix}");
    PlotError::Backend(format!("{prefix}: {err}"))
}
