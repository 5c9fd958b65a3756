use rust_decimal::Decimal;
use tracing::trace;

use crate::core::series::finite_runs;
use crate::core::{
    AxisPair, ClipState, CoordinateMapper, DataRect, MarkerGeometry, MarkerStyle, PixelPoint,
    PixelRect, SampleLayout,
};
use crate::error::PlotResult;
use crate::render::{Canvas, Color};

use super::validation::{ensure_same_len, validate_color, validate_stroke_width, validate_thickness};
use super::{GraphPlotter, LineGraphStyle};

/// How a mapped point sequence is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathKind {
    Polyline,
    Curve,
}

impl<C: Canvas> GraphPlotter<C> {
    /// Fills one marker at data position `(x, y)`.
    ///
    /// A point whose mapped position is not finite is skipped without error.
    pub fn draw_point(
        &mut self,
        color: Color,
        x: f64,
        y: f64,
        marker: MarkerStyle,
        axes: AxisPair,
    ) -> PlotResult<()> {
        self.draw_points(color, &[x], &[y], marker, axes)
    }

    /// Fills one marker per `(xs[i], ys[i])`, all sharing one vertex template.
    pub fn draw_points(
        &mut self,
        color: Color,
        xs: &[f64],
        ys: &[f64],
        marker: MarkerStyle,
        axes: AxisPair,
    ) -> PlotResult<()> {
        ensure_same_len(xs.len(), ys.len())?;
        let color = validate_color(color)?;
        let marker = marker.validate()?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;

        let points: Vec<PixelPoint> = map_points(&x_mapper, &y_mapper, xs, ys)
            .into_iter()
            .filter(|point| point.is_finite())
            .collect();
        let skipped = xs.len() - points.len();
        trace!(count = xs.len(), skipped, shape = ?marker.shape, "draw points");
        if points.is_empty() {
            return Ok(());
        }

        let geometry = MarkerGeometry::new(marker);
        self.require_clip(ClipState::GraphRect)?;
        for point in points {
            self.fill_marker(&geometry, point, color)?;
        }
        Ok(())
    }

    /// Strokes a straight segment between two data positions.
    pub fn draw_line(
        &mut self,
        color: Color,
        from: (f64, f64),
        to: (f64, f64),
        stroke_width: f64,
        axes: AxisPair,
    ) -> PlotResult<()> {
        let color = validate_color(color)?;
        let stroke_width = validate_stroke_width(stroke_width)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;

        let from = PixelPoint::new(x_mapper.map(from.0), y_mapper.map(from.1));
        let to = PixelPoint::new(x_mapper.map(to.0), y_mapper.map(to.1));
        if !from.is_finite() || !to.is_finite() {
            trace!("skip line with non-finite endpoint");
            return Ok(());
        }

        self.require_clip(ClipState::GraphRect)?;
        self.canvas.stroke_line(from, to, color, stroke_width)
    }

    /// Strokes straight segments through `(xs[i], ys[i])`.
    ///
    /// Non-finite mapped points split the path; every finite run of two or
    /// more points is stroked on its own.
    pub fn draw_polyline(
        &mut self,
        color: Color,
        xs: &[f64],
        ys: &[f64],
        stroke_width: f64,
        axes: AxisPair,
    ) -> PlotResult<()> {
        ensure_same_len(xs.len(), ys.len())?;
        self.stroke_series(color, xs, ys, stroke_width, axes, PathKind::Polyline)
    }

    /// Strokes an interpolating spline through `(xs[i], ys[i])`.
    pub fn draw_curve(
        &mut self,
        color: Color,
        xs: &[f64],
        ys: &[f64],
        stroke_width: f64,
        axes: AxisPair,
    ) -> PlotResult<()> {
        ensure_same_len(xs.len(), ys.len())?;
        self.stroke_series(color, xs, ys, stroke_width, axes, PathKind::Curve)
    }

    /// Fills the data-space rectangle spanned by two opposite corners in any order.
    pub fn draw_rect(
        &mut self,
        color: Color,
        corner1: (f64, f64),
        corner2: (f64, f64),
        axes: AxisPair,
    ) -> PlotResult<()> {
        let color = validate_color(color)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;
        let rect = DataRect {
            x1: corner1.0,
            y1: corner1.1,
            x2: corner2.0,
            y2: corner2.1,
        };
        self.fill_data_rect(&x_mapper, &y_mapper, rect, color)
    }

    /// Fills a bar from `x = 0` to `x = value` centered on `y`.
    pub fn draw_horizontal_bar(
        &mut self,
        color: Color,
        value: f64,
        y: f64,
        thickness: f64,
        axes: AxisPair,
    ) -> PlotResult<()> {
        let color = validate_color(color)?;
        let thickness = validate_thickness(thickness)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;
        self.fill_data_rect(
            &x_mapper,
            &y_mapper,
            DataRect::horizontal_bar(value, y, thickness),
            color,
        )
    }

    /// Fills a bar from `y = 0` to `y = value` centered on `x`.
    pub fn draw_vertical_bar(
        &mut self,
        color: Color,
        x: f64,
        value: f64,
        thickness: f64,
        axes: AxisPair,
    ) -> PlotResult<()> {
        let color = validate_color(color)?;
        let thickness = validate_thickness(thickness)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;
        self.fill_data_rect(
            &x_mapper,
            &y_mapper,
            DataRect::vertical_bar(x, value, thickness),
            color,
        )
    }

    /// One vertical bar per sample, evenly spaced over `[begin, end]`, each one step wide.
    pub fn draw_histogram(
        &mut self,
        color: Color,
        begin: Decimal,
        end: Decimal,
        data: &[f64],
        axes: AxisPair,
    ) -> PlotResult<()> {
        let layout = SampleLayout::even(begin, end, data.len())?;
        let color = validate_color(color)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;

        let bars: Vec<PixelRect> = layout
            .positions
            .iter()
            .zip(data)
            .filter_map(|(&x, &value)| {
                map_data_rect(&x_mapper, &y_mapper, DataRect::vertical_bar(x, value, layout.step))
            })
            .collect();
        let skipped = data.len() - bars.len();
        trace!(count = data.len(), skipped, step = layout.step, "draw histogram");
        if bars.is_empty() {
            return Ok(());
        }

        self.require_clip(ClipState::GraphRect)?;
        for bar in bars {
            self.canvas.fill_rect(bar, color)?;
        }
        Ok(())
    }

    /// Straight line graph of `data` sampled evenly over `[begin, end]`.
    pub fn draw_line_graph(
        &mut self,
        color: Color,
        begin: Decimal,
        end: Decimal,
        data: &[f64],
        style: LineGraphStyle,
        axes: AxisPair,
    ) -> PlotResult<()> {
        self.draw_sampled_graph(color, begin, end, data, style, axes, PathKind::Polyline)
    }

    /// Smoothed line graph of `data` sampled evenly over `[begin, end]`.
    pub fn draw_smooth_line_graph(
        &mut self,
        color: Color,
        begin: Decimal,
        end: Decimal,
        data: &[f64],
        style: LineGraphStyle,
        axes: AxisPair,
    ) -> PlotResult<()> {
        self.draw_sampled_graph(color, begin, end, data, style, axes, PathKind::Curve)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_sampled_graph(
        &mut self,
        color: Color,
        begin: Decimal,
        end: Decimal,
        data: &[f64],
        style: LineGraphStyle,
        axes: AxisPair,
        kind: PathKind,
    ) -> PlotResult<()> {
        let layout = SampleLayout::even(begin, end, data.len())?;
        let style = style.validate()?;
        let color = validate_color(color)?;
        self.point_mappers(axes)?;

        self.stroke_series(color, &layout.positions, data, style.stroke_width, axes, kind)?;
        if let Some(marker) = style.marker {
            self.draw_points(color, &layout.positions, data, marker, axes)?;
        }
        Ok(())
    }

    fn stroke_series(
        &mut self,
        color: Color,
        xs: &[f64],
        ys: &[f64],
        stroke_width: f64,
        axes: AxisPair,
        kind: PathKind,
    ) -> PlotResult<()> {
        let color = validate_color(color)?;
        let stroke_width = validate_stroke_width(stroke_width)?;
        let (x_mapper, y_mapper) = self.point_mappers(axes)?;

        let points = map_points(&x_mapper, &y_mapper, xs, ys);
        let runs = finite_runs(&points, |point| point.is_finite());

        let strokable: Vec<&[PixelPoint]> = runs
            .iter()
            .map(|run| run.as_slice())
            .filter(|run| run.len() >= 2)
            .collect();
        trace!(
            count = xs.len(),
            runs = runs.len(),
            stroked = strokable.len(),
            kind = ?kind,
            "stroke series"
        );
        if strokable.is_empty() {
            return Ok(());
        }

        self.require_clip(ClipState::GraphRect)?;
        for run in strokable {
            match kind {
                PathKind::Polyline => self.canvas.stroke_polyline(run, color, stroke_width)?,
                PathKind::Curve => self.canvas.stroke_curve(run, color, stroke_width)?,
            }
        }
        Ok(())
    }

    fn fill_marker(
        &mut self,
        geometry: &MarkerGeometry,
        center: PixelPoint,
        color: Color,
    ) -> PlotResult<()> {
        match geometry {
            MarkerGeometry::Circle { radius } => {
                self.canvas.fill_ellipse(center, *radius, *radius, color)
            }
            MarkerGeometry::Square { half_size } => self.canvas.fill_rect(
                PixelRect::new(
                    center.x - half_size,
                    center.y - half_size,
                    half_size * 2.0,
                    half_size * 2.0,
                ),
                color,
            ),
            MarkerGeometry::Polygon { .. } => match geometry.vertices_at(center) {
                Some(vertices) => self.canvas.fill_polygon(&vertices, color),
                None => Ok(()),
            },
        }
    }

    /// Fills `rect` after mapping; skips it without touching the clip when a corner is not finite.
    fn fill_data_rect(
        &mut self,
        x_mapper: &CoordinateMapper,
        y_mapper: &CoordinateMapper,
        rect: DataRect,
        color: Color,
    ) -> PlotResult<()> {
        let Some(rect) = map_data_rect(x_mapper, y_mapper, rect) else {
            trace!("skip rectangle with non-finite corner");
            return Ok(());
        };
        self.require_clip(ClipState::GraphRect)?;
        self.canvas.fill_rect(rect, color)
    }
}

fn map_data_rect(
    x_mapper: &CoordinateMapper,
    y_mapper: &CoordinateMapper,
    rect: DataRect,
) -> Option<PixelRect> {
    let a = PixelPoint::new(x_mapper.map(rect.x1), y_mapper.map(rect.y1));
    let b = PixelPoint::new(x_mapper.map(rect.x2), y_mapper.map(rect.y2));
    (a.is_finite() && b.is_finite()).then(|| PixelRect::from_corners(a, b))
}

fn map_points(
    x_mapper: &CoordinateMapper,
    y_mapper: &CoordinateMapper,
    xs: &[f64],
    ys: &[f64],
) -> Vec<PixelPoint> {
    x_mapper
        .map_all(xs)
        .into_iter()
        .zip(y_mapper.map_all(ys))
        .map(|(x, y)| PixelPoint::new(x, y))
        .collect()
}
