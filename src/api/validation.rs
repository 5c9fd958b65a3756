use crate::error::{PlotError, PlotResult};
use crate::render::Color;

pub(super) fn validate_stroke_width(stroke_width: f64) -> PlotResult<f64> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(PlotError::Config(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(stroke_width)
}

pub(super) fn validate_thickness(thickness: f64) -> PlotResult<f64> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(PlotError::Config(
            "bar thickness must be finite and > 0".to_owned(),
        ));
    }
    Ok(thickness)
}

pub(super) fn validate_color(color: Color) -> PlotResult<Color> {
    color.validate()?;
    Ok(color)
}

pub(super) fn ensure_same_len(x_len: usize, y_len: usize) -> PlotResult<()> {
    if x_len != y_len {
        return Err(PlotError::Dimension { x_len, y_len });
    }
    Ok(())
}
