use serde::{Deserialize, Serialize};

use crate::core::types::{AxisMode, CanvasSize, Dimension};
use crate::error::{PlotError, PlotResult};

/// Label band width reserved beside the graph for a y-type axis, in font sizes.
pub const Y_LABEL_BAND_FONT_MULTIPLE: u32 = 7;
/// Label band height reserved beside the graph for an x-type axis, in font sizes.
pub const X_LABEL_BAND_FONT_MULTIPLE: u32 = 4;

/// Inputs to the graph frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLayoutInput {
    pub graph_width: u32,
    pub graph_height: u32,
    pub margin: u32,
    pub font_size: u32,
    pub frame_stroke_width: u32,
    pub x_axis_mode: AxisMode,
    pub y_axis_mode: AxisMode,
}

/// Fixed geometry of the canvas and the graph rectangle inside it.
///
/// Computed once when a session starts and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFrame {
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub frame_stroke_width: u32,
    pub font_size: u32,
    pub canvas: CanvasSize,
}

impl GraphFrame {
    pub fn compute(input: FrameLayoutInput) -> PlotResult<Self> {
        for (name, value) in [
            ("graph width", input.graph_width),
            ("graph height", input.graph_height),
            ("margin", input.margin),
            ("font size", input.font_size),
            ("frame stroke width", input.frame_stroke_width),
        ] {
            if value == 0 {
                return Err(PlotError::Config(format!("{name} must be > 0")));
            }
        }

        let y_band = checked_band(input.font_size, Y_LABEL_BAND_FONT_MULTIPLE)?;
        let x_band = checked_band(input.font_size, X_LABEL_BAND_FONT_MULTIPLE)?;

        let canvas_width = checked_extent(
            input.graph_width,
            input.margin,
            input.y_axis_mode.band_count(),
            y_band,
            input.frame_stroke_width,
        )?;
        let canvas_height = checked_extent(
            input.graph_height,
            input.margin,
            input.x_axis_mode.band_count(),
            x_band,
            input.frame_stroke_width,
        )?;

        let inset = input
            .margin
            .checked_add(input.frame_stroke_width)
            .ok_or_else(overflow_error)?;
        let origin_x = inset.checked_add(y_band).ok_or_else(overflow_error)?;
        let origin_y = match input.x_axis_mode {
            AxisMode::Single => inset,
            AxisMode::Dual => inset.checked_add(x_band).ok_or_else(overflow_error)?,
        };

        Ok(Self {
            origin_x,
            origin_y,
            width: input.graph_width,
            height: input.graph_height,
            margin: input.margin,
            frame_stroke_width: input.frame_stroke_width,
            font_size: input.font_size,
            canvas: CanvasSize::new(canvas_width, canvas_height),
        })
    }

    /// Pixel origin and length of the graph rectangle along one dimension.
    #[must_use]
    pub fn extent(&self, dimension: Dimension) -> (f64, f64) {
        match dimension {
            Dimension::Horizontal => (f64::from(self.origin_x), f64::from(self.width)),
            Dimension::Vertical => (f64::from(self.origin_y), f64::from(self.height)),
        }
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.origin_x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.origin_y + self.height
    }
}

fn overflow_error() -> PlotError {
    PlotError::Config("canvas size overflows the surface limits".to_owned())
}

fn checked_band(font_size: u32, multiple: u32) -> PlotResult<u32> {
    font_size.checked_mul(multiple).ok_or_else(overflow_error)
}

fn checked_extent(
    graph: u32,
    margin: u32,
    bands: u32,
    band: u32,
    frame: u32,
) -> PlotResult<u32> {
    margin
        .checked_mul(2)
        .and_then(|m| bands.checked_mul(band).map(|b| (m, b)))
        .and_then(|(m, b)| frame.checked_mul(2).map(|f| (m, b, f)))
        .and_then(|(m, b, f)| graph.checked_add(m)?.checked_add(b)?.checked_add(f))
        .filter(|total| i32::try_from(*total).is_ok())
        .ok_or_else(overflow_error)
}
