use crate::core::layout::GraphFrame;
use crate::core::scale_domain::{ScaleDomain, ScaleKind};
use crate::core::types::Dimension;

/// Maps data values of one axis onto pixel positions inside the graph rectangle.
///
/// Vertical axes are inverted: larger data values land closer to the top.
/// Out-of-domain input (for example a non-positive value on a log axis)
/// produces a non-finite pixel instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    min: f64,
    range: f64,
    kind: ScaleKind,
    origin: f64,
    units: f64,
    dimension: Dimension,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(domain: &ScaleDomain, frame: &GraphFrame, dimension: Dimension) -> Self {
        let (origin, length) = frame.extent(dimension);
        let (min, _) = domain.bounds();
        Self {
            min,
            range: domain.range(),
            kind: domain.kind(),
            origin,
            units: length - 1.0,
            dimension,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Maps a value already expressed in domain coordinates (an exponent on log axes).
    #[must_use]
    pub fn map_transformed(&self, coordinate: f64) -> f64 {
        let normalized = (coordinate - self.min) / self.range;
        match self.dimension {
            Dimension::Horizontal => self.origin + normalized * self.units,
            Dimension::Vertical => self.origin + (1.0 - normalized) * self.units,
        }
    }

    /// Maps a raw data value.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        self.map_transformed(self.kind.transform(value))
    }

    /// Element-wise [`CoordinateMapper::map`].
    #[must_use]
    pub fn map_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|value| self.map(*value)).collect()
    }

    /// Recovers the raw data value at `pixel`.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        let offset = (pixel - self.origin) / self.units;
        let normalized = match self.dimension {
            Dimension::Horizontal => offset,
            Dimension::Vertical => 1.0 - offset,
        };
        let coordinate = self.min + normalized * self.range;
        match self.kind {
            ScaleKind::Linear => coordinate,
            ScaleKind::Log10 => 10f64.powf(coordinate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::FrameLayoutInput;
    use crate::core::types::AxisMode;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;

    fn frame() -> GraphFrame {
        GraphFrame::compute(FrameLayoutInput {
            graph_width: 101,
            graph_height: 51,
            margin: 10,
            font_size: 10,
            frame_stroke_width: 2,
            x_axis_mode: AxisMode::Single,
            y_axis_mode: AxisMode::Single,
        })
        .expect("frame")
    }

    #[test]
    fn horizontal_linear_spans_graph_width() {
        let frame = frame();
        let domain = ScaleDomain::linear(Decimal::ZERO, Decimal::TEN, Decimal::ONE).expect("domain");
        let mapper = CoordinateMapper::new(&domain, &frame, Dimension::Horizontal);

        let left = f64::from(frame.origin_x);
        assert_relative_eq!(mapper.map(0.0), left);
        assert_relative_eq!(mapper.map(10.0), left + 100.0);
        assert_relative_eq!(mapper.map(2.5), left + 25.0);
    }

    #[test]
    fn vertical_linear_is_inverted() {
        let frame = frame();
        let domain = ScaleDomain::linear(Decimal::ZERO, Decimal::TEN, Decimal::ONE).expect("domain");
        let mapper = CoordinateMapper::new(&domain, &frame, Dimension::Vertical);

        let top = f64::from(frame.origin_y);
        assert_relative_eq!(mapper.map(10.0), top);
        assert_relative_eq!(mapper.map(0.0), top + 50.0);
    }

    #[test]
    fn log_axis_maps_exponents_and_flags_non_positive_values() {
        let frame = frame();
        let domain = ScaleDomain::log10(-2, 2, 1).expect("domain");
        let mapper = CoordinateMapper::new(&domain, &frame, Dimension::Horizontal);

        assert_relative_eq!(mapper.map(1.0), mapper.map_transformed(0.0));
        assert_relative_eq!(mapper.map(100.0), f64::from(frame.origin_x) + 100.0);
        assert!(!mapper.map(0.0).is_finite());
        assert!(!mapper.map(-1.0).is_finite());
    }

    #[test]
    fn batch_matches_scalar_mapping() {
        let frame = frame();
        let domain = ScaleDomain::log10(-3, 3, 1).expect("domain");
        let mapper = CoordinateMapper::new(&domain, &frame, Dimension::Vertical);
        let values = [1e-3, 0.02, 1.0, 7.5, 999.0];

        let batch = mapper.map_all(&values);
        for (value, pixel) in values.iter().zip(batch) {
            assert_eq!(pixel.to_bits(), mapper.map(*value).to_bits());
        }
    }
}
