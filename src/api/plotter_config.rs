use serde::{Deserialize, Serialize};

use crate::core::{AxisMode, FrameLayoutInput, GraphFrame};
use crate::error::{PlotError, PlotResult};
use crate::render::FontSpec;

/// Public session bootstrap configuration.
///
/// Serializable so report generators can keep chart setups next to their data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotterConfig {
    pub graph_width: u32,
    pub graph_height: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
    #[serde(default)]
    pub font: FontSpec,
    #[serde(default = "default_frame_stroke_width")]
    pub frame_stroke_width: u32,
    #[serde(default)]
    pub x_axis_mode: AxisMode,
    #[serde(default)]
    pub y_axis_mode: AxisMode,
}

impl PlotterConfig {
    #[must_use]
    pub fn new(graph_width: u32, graph_height: u32) -> Self {
        Self {
            graph_width,
            graph_height,
            margin: default_margin(),
            font: FontSpec::default(),
            frame_stroke_width: default_frame_stroke_width(),
            x_axis_mode: AxisMode::Single,
            y_axis_mode: AxisMode::Single,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_frame_stroke_width(mut self, frame_stroke_width: u32) -> Self {
        self.frame_stroke_width = frame_stroke_width;
        self
    }

    #[must_use]
    pub fn with_x_axis_mode(mut self, mode: AxisMode) -> Self {
        self.x_axis_mode = mode;
        self
    }

    #[must_use]
    pub fn with_y_axis_mode(mut self, mode: AxisMode) -> Self {
        self.y_axis_mode = mode;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        for (name, value) in [
            ("graph_width", self.graph_width),
            ("graph_height", self.graph_height),
            ("margin", self.margin),
            ("font.size", self.font.size),
            ("frame_stroke_width", self.frame_stroke_width),
        ] {
            if value == 0 {
                return Err(PlotError::Config(format!("`{name}` must be > 0")));
            }
        }
        if self.font.family.trim().is_empty() {
            return Err(PlotError::Config(
                "`font.family` must not be empty".to_owned(),
            ));
        }
        GraphFrame::compute(self.layout_input())?;
        Ok(())
    }

    #[must_use]
    pub fn layout_input(&self) -> FrameLayoutInput {
        FrameLayoutInput {
            graph_width: self.graph_width,
            graph_height: self.graph_height,
            margin: self.margin,
            font_size: self.font.size,
            frame_stroke_width: self.frame_stroke_width,
            x_axis_mode: self.x_axis_mode,
            y_axis_mode: self.y_axis_mode,
        }
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::Serialization(format!("failed to serialize plotter config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PlotError::Serialization(format!("failed to parse plotter config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_margin() -> u32 {
    20
}

fn default_frame_stroke_width() -> u32 {
    4
}
