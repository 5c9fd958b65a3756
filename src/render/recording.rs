use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::core::{CanvasSize, PixelPoint, PixelRect};
use crate::error::{PlotError, PlotResult};
use crate::render::{Canvas, Color, FontSpec, TextAnchor, TextExtent, TextRun};

/// Approximate glyph advance used for headless text measurement, in font sizes.
const GLYPH_ADVANCE_RATIO: f64 = 0.6;
/// Approximate line height used for headless text measurement, in font sizes.
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// One primitive issued against a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasCommand {
    FillSurface {
        color: Color,
    },
    StrokeLine {
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        stroke_width: f64,
    },
    StrokeRect {
        rect: PixelRect,
        color: Color,
        stroke_width: f64,
    },
    FillRect {
        rect: PixelRect,
        color: Color,
    },
    StrokeEllipse {
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
        stroke_width: f64,
    },
    FillEllipse {
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    },
    StrokePolygon {
        points: Vec<PixelPoint>,
        color: Color,
        stroke_width: f64,
    },
    FillPolygon {
        points: Vec<PixelPoint>,
        color: Color,
    },
    StrokePolyline {
        points: Vec<PixelPoint>,
        color: Color,
        stroke_width: f64,
    },
    StrokeCurve {
        points: Vec<PixelPoint>,
        color: Color,
        stroke_width: f64,
    },
    StrokeClosedCurve {
        points: Vec<PixelPoint>,
        color: Color,
        stroke_width: f64,
    },
    FillClosedCurve {
        points: Vec<PixelPoint>,
        color: Color,
    },
    Text {
        text: String,
        font: FontSpec,
        position: PixelPoint,
        rotation_degrees: f64,
        h_anchor: TextAnchor,
        v_anchor: TextAnchor,
        color: Color,
    },
    SetClip {
        rect: PixelRect,
    },
    ResetClip,
}

impl CanvasCommand {
    #[must_use]
    pub fn is_clip(&self) -> bool {
        matches!(self, Self::SetClip { .. } | Self::ResetClip)
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct RecordingSnapshot<'a> {
    size: CanvasSize,
    commands: &'a [CanvasCommand],
}

/// Headless canvas that records every primitive instead of rasterizing.
///
/// Rejects non-finite geometry so callers can verify that nothing invalid
/// reaches a real backend. `save` writes the command log as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    size: CanvasSize,
    commands: Vec<CanvasCommand>,
    clip: Option<PixelRect>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    #[must_use]
    pub fn clip(&self) -> Option<PixelRect> {
        self.clip
    }

    /// Removes and returns everything recorded so far.
    pub fn take_commands(&mut self) -> Vec<CanvasCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(CanvasCommand::text).collect()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|e| {
            PlotError::Serialization(format!("failed to serialize canvas commands: {e}"))
        })
    }

    fn snapshot(&self) -> RecordingSnapshot<'_> {
        RecordingSnapshot {
            size: self.size,
            commands: &self.commands,
        }
    }

    fn push(&mut self, command: CanvasCommand) -> PlotResult<()> {
        self.commands.push(command);
        Ok(())
    }
}

fn ensure_finite_points(points: &[PixelPoint]) -> PlotResult<Vec<PixelPoint>> {
    if points.iter().any(|point| !point.is_finite()) {
        return Err(PlotError::Backend(
            "canvas coordinates must be finite".to_owned(),
        ));
    }
    Ok(points.to_vec())
}

fn ensure_finite(values: &[f64]) -> PlotResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(PlotError::Backend(
            "canvas coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

impl Canvas for RecordingCanvas {
    fn create(size: CanvasSize) -> PlotResult<Self> {
        if !size.is_valid() {
            return Err(PlotError::Config(format!(
                "canvas size must be > 0: width={}, height={}",
                size.width, size.height
            )));
        }
        Ok(Self {
            size,
            commands: Vec::new(),
            clip: None,
        })
    }

    fn size(&self) -> CanvasSize {
        self.size
    }

    fn default_extension(&self) -> &'static str {
        "json"
    }

    fn fill_surface(&mut self, color: Color) -> PlotResult<()> {
        self.push(CanvasCommand::FillSurface { color })
    }

    fn stroke_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        ensure_finite(&[from.x, from.y, to.x, to.y, stroke_width])?;
        self.push(CanvasCommand::StrokeLine {
            from,
            to,
            color,
            stroke_width,
        })
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Color, stroke_width: f64) -> PlotResult<()> {
        ensure_finite(&[rect.x, rect.y, rect.width, rect.height, stroke_width])?;
        self.push(CanvasCommand::StrokeRect {
            rect,
            color,
            stroke_width,
        })
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) -> PlotResult<()> {
        ensure_finite(&[rect.x, rect.y, rect.width, rect.height])?;
        self.push(CanvasCommand::FillRect { rect, color })
    }

    fn stroke_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        ensure_finite(&[center.x, center.y, radius_x, radius_y, stroke_width])?;
        self.push(CanvasCommand::StrokeEllipse {
            center,
            radius_x,
            radius_y,
            color,
            stroke_width,
        })
    }

    fn fill_ellipse(
        &mut self,
        center: PixelPoint,
        radius_x: f64,
        radius_y: f64,
        color: Color,
    ) -> PlotResult<()> {
        ensure_finite(&[center.x, center.y, radius_x, radius_y])?;
        self.push(CanvasCommand::FillEllipse {
            center,
            radius_x,
            radius_y,
            color,
        })
    }

    fn stroke_polygon(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::StrokePolygon {
            points,
            color,
            stroke_width,
        })
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::FillPolygon { points, color })
    }

    fn stroke_polyline(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::StrokePolyline {
            points,
            color,
            stroke_width,
        })
    }

    fn stroke_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::StrokeCurve {
            points,
            color,
            stroke_width,
        })
    }

    fn stroke_closed_curve(
        &mut self,
        points: &[PixelPoint],
        color: Color,
        stroke_width: f64,
    ) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::StrokeClosedCurve {
            points,
            color,
            stroke_width,
        })
    }

    fn fill_closed_curve(&mut self, points: &[PixelPoint], color: Color) -> PlotResult<()> {
        let points = ensure_finite_points(points)?;
        self.push(CanvasCommand::FillClosedCurve { points, color })
    }

    fn measure_text(&mut self, text: &str, font: &FontSpec) -> PlotResult<TextExtent> {
        let size = f64::from(font.size);
        Ok(TextExtent {
            width: text.chars().count() as f64 * size * GLYPH_ADVANCE_RATIO,
            height: size * LINE_HEIGHT_RATIO,
        })
    }

    fn draw_text(&mut self, run: &TextRun<'_>) -> PlotResult<()> {
        ensure_finite(&[run.position.x, run.position.y, run.rotation_degrees])?;
        self.push(CanvasCommand::Text {
            text: run.text.to_owned(),
            font: run.font.clone(),
            position: run.position,
            rotation_degrees: run.rotation_degrees,
            h_anchor: run.h_anchor,
            v_anchor: run.v_anchor,
            color: run.color,
        })
    }

    fn set_clip(&mut self, rect: PixelRect) -> PlotResult<()> {
        self.clip = Some(rect);
        self.push(CanvasCommand::SetClip { rect })
    }

    fn reset_clip(&mut self) -> PlotResult<()> {
        self.clip = None;
        self.push(CanvasCommand::ResetClip)
    }

    fn save(&mut self, path: &Path) -> PlotResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.snapshot()).map_err(|e| {
            PlotError::Serialization(format!("failed to write canvas commands: {e}"))
        })
    }
}
