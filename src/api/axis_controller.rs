use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{AxisId, ClipState, CoordinateMapper, LabelFormat, PixelPoint, ScaleDomain};
use crate::error::PlotResult;
use crate::render::{Canvas, Color, TextAnchor, TextRun};

use super::GraphPlotter;
use super::validation::validate_color;

/// Rotation applied to labels of vertical axes so they read bottom to top.
const VERTICAL_LABEL_ROTATION_DEGREES: f64 = 270.0;

impl<C: Canvas> GraphPlotter<C> {
    /// Draws the caption of `axis` in the label band reserved for it.
    ///
    /// Secondary axes fail with a config error unless their dimension is dual.
    pub fn draw_axis_label(&mut self, axis: AxisId, color: Color, text: &str) -> PlotResult<()> {
        let color = validate_color(color)?;
        self.axes.context(axis)?;

        let frame = self.frame;
        let center_x = f64::from(frame.origin_x + frame.width / 2);
        let center_y = f64::from(frame.origin_y + frame.height / 2);
        let margin = f64::from(frame.margin);
        let canvas_width = f64::from(frame.canvas.width);
        let canvas_height = f64::from(frame.canvas.height);

        let (position, rotation_degrees, h_anchor, v_anchor) = match axis {
            AxisId::X => (
                PixelPoint::new(center_x, canvas_height - margin),
                0.0,
                TextAnchor::Center,
                TextAnchor::End,
            ),
            AxisId::X2 => (
                PixelPoint::new(center_x, margin),
                0.0,
                TextAnchor::Center,
                TextAnchor::Begin,
            ),
            AxisId::Y => (
                PixelPoint::new(margin, center_y),
                VERTICAL_LABEL_ROTATION_DEGREES,
                TextAnchor::Center,
                TextAnchor::Begin,
            ),
            AxisId::Y2 => (
                PixelPoint::new(canvas_width - margin, center_y),
                VERTICAL_LABEL_ROTATION_DEGREES,
                TextAnchor::Center,
                TextAnchor::End,
            ),
        };

        self.require_clip(ClipState::Unclipped)?;
        self.canvas.draw_text(&TextRun {
            text,
            font: &self.font,
            position,
            rotation_degrees,
            h_anchor,
            v_anchor,
            color,
        })
    }

    pub fn draw_x_label(&mut self, color: Color, text: &str) -> PlotResult<()> {
        self.draw_axis_label(AxisId::X, color, text)
    }

    pub fn draw_y_label(&mut self, color: Color, text: &str) -> PlotResult<()> {
        self.draw_axis_label(AxisId::Y, color, text)
    }

    pub fn draw_x2_label(&mut self, color: Color, text: &str) -> PlotResult<()> {
        self.draw_axis_label(AxisId::X2, color, text)
    }

    pub fn draw_y2_label(&mut self, color: Color, text: &str) -> PlotResult<()> {
        self.draw_axis_label(AxisId::Y2, color, text)
    }

    /// Configures `axis` with a linear domain and draws its ticks.
    ///
    /// Returns the number of ticks drawn. Fails with a state error when the
    /// axis was configured before, whatever the arguments.
    pub fn draw_linear_scale(
        &mut self,
        axis: AxisId,
        color: Color,
        min: Decimal,
        max: Decimal,
        step: Decimal,
        format: LabelFormat,
    ) -> PlotResult<usize> {
        self.axes.ensure_configurable(axis)?;
        let color = validate_color(color)?;
        let domain = ScaleDomain::linear(min, max, step)?;
        self.configure_axis(axis, color, domain, format)
    }

    /// Configures `axis` with a base-10 log domain over integer exponents and draws its ticks.
    pub fn draw_log_scale(
        &mut self,
        axis: AxisId,
        color: Color,
        min_exponent: i32,
        max_exponent: i32,
        step: i32,
    ) -> PlotResult<usize> {
        self.axes.ensure_configurable(axis)?;
        let color = validate_color(color)?;
        let domain = ScaleDomain::log10(min_exponent, max_exponent, step)?;
        self.configure_axis(axis, color, domain, LabelFormat::default())
    }

    fn configure_axis(
        &mut self,
        axis: AxisId,
        color: Color,
        domain: ScaleDomain,
        format: LabelFormat,
    ) -> PlotResult<usize> {
        self.axes.configure(axis, domain)?;
        let mapper = CoordinateMapper::new(&domain, &self.frame, axis.dimension());

        self.require_clip(ClipState::Unclipped)?;
        let mut tick_count = 0_usize;
        for tick in domain.ticks(format) {
            let position = mapper.map_transformed(tick.coordinate());
            self.draw_tick(axis, color, position, &tick.label)?;
            tick_count += 1;
        }

        debug!(
            axis = axis.name(),
            kind = ?domain.kind(),
            min = %domain.min(),
            max = %domain.max(),
            step = %domain.step(),
            tick_count,
            "axis configured"
        );
        Ok(tick_count)
    }

    /// Tick mark pointing outward from the frame plus its label.
    fn draw_tick(
        &mut self,
        axis: AxisId,
        color: Color,
        position: f64,
        label: &str,
    ) -> PlotResult<()> {
        let frame = self.frame;
        let stroke = f64::from(frame.frame_stroke_width);
        let length = f64::from(frame.font_size * 3 / 5);
        let gap = f64::from(frame.font_size * 4 / 5);
        let left = f64::from(frame.origin_x) - stroke;
        let top = f64::from(frame.origin_y) - stroke;
        let right = f64::from(frame.right()) + stroke;
        let bottom = f64::from(frame.bottom()) + stroke;

        let (from, to, anchor, h_anchor, v_anchor) = match axis {
            AxisId::X => (
                PixelPoint::new(position, bottom - 1.0),
                PixelPoint::new(position, bottom + length),
                PixelPoint::new(position, bottom + gap),
                TextAnchor::Center,
                TextAnchor::Begin,
            ),
            AxisId::X2 => (
                PixelPoint::new(position, top),
                PixelPoint::new(position, top - length),
                PixelPoint::new(position, top - gap),
                TextAnchor::Center,
                TextAnchor::End,
            ),
            AxisId::Y => (
                PixelPoint::new(left, position),
                PixelPoint::new(left - length, position),
                PixelPoint::new(left - gap, position),
                TextAnchor::End,
                TextAnchor::Center,
            ),
            AxisId::Y2 => (
                PixelPoint::new(right - 1.0, position),
                PixelPoint::new(right + length, position),
                PixelPoint::new(right + gap, position),
                TextAnchor::Begin,
                TextAnchor::Center,
            ),
        };

        self.canvas.stroke_line(from, to, color, stroke)?;
        self.canvas.draw_text(&TextRun {
            text: label,
            font: &self.font,
            position: anchor,
            rotation_degrees: 0.0,
            h_anchor,
            v_anchor,
            color,
        })
    }
}
