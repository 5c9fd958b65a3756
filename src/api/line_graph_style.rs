use serde::{Deserialize, Serialize};

use crate::core::MarkerStyle;
use crate::error::PlotResult;

use super::validation::validate_stroke_width;

/// Stroke and optional per-sample marker of an evenly spaced line graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGraphStyle {
    pub stroke_width: f64,
    #[serde(default)]
    pub marker: Option<MarkerStyle>,
}

impl LineGraphStyle {
    #[must_use]
    pub const fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            marker: None,
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        validate_stroke_width(self.stroke_width)?;
        if let Some(marker) = self.marker {
            marker.validate()?;
        }
        Ok(self)
    }
}

impl Default for LineGraphStyle {
    fn default() -> Self {
        Self::new(1.0)
    }
}
