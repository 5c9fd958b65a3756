use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 165.0 / 255.0, 0.0);
    pub const VIOLET: Color = Color::rgb(238.0 / 255.0, 130.0 / 255.0, 238.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::Config(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Font resolved by family name and point size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: u32,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Sans", 30)
    }
}

/// Which part of the measured text box sits on the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Begin,
    Center,
    End,
}

impl TextAnchor {
    /// Offset to apply along one axis for a text box of `extent` pixels.
    #[must_use]
    pub fn offset(self, extent: f64) -> f64 {
        match self {
            Self::Begin => 0.0,
            Self::Center => -extent * 0.5,
            Self::End => -extent,
        }
    }
}

/// Measured size of a text run in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// One text draw request.
///
/// The run is rotated by `rotation_degrees` (clockwise on screen) around
/// `position`; anchors are applied in the rotated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font: &'a FontSpec,
    pub position: PixelPoint,
    pub rotation_degrees: f64,
    pub h_anchor: TextAnchor,
    pub v_anchor: TextAnchor,
    pub color: Color,
}

impl TextRun<'_> {
    /// Top-left corner of the text box relative to `position`, in the rotated frame.
    #[must_use]
    pub fn anchor_offset(&self, extent: TextExtent) -> (f64, f64) {
        (
            self.h_anchor.offset(extent.width),
            self.v_anchor.offset(extent.height),
        )
    }
}
