use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{
    AxisId, AxisPair, AxisSet, ClipState, ClipStateManager, CoordinateMapper, GraphFrame,
    PixelRect, ScaleDomain,
};
use crate::error::PlotResult;
use crate::render::{Canvas, Color, FontSpec};

use super::PlotterConfig;

/// One rendering session: a canvas, its fixed graph frame and four axis slots.
///
/// Axes are configured at most once each; every data-drawing call maps
/// through the configured domains and paints clipped to the graph rectangle.
#[derive(Debug)]
pub struct GraphPlotter<C: Canvas> {
    pub(super) canvas: C,
    pub(super) frame: GraphFrame,
    pub(super) font: FontSpec,
    pub(super) axes: AxisSet,
    pub(super) clip: ClipStateManager,
}

impl<C: Canvas> GraphPlotter<C> {
    /// Validates `config`, creates the canvas and paints background and frame.
    pub fn new(config: PlotterConfig) -> PlotResult<Self> {
        config.validate()?;
        let frame = GraphFrame::compute(config.layout_input())?;
        let canvas = C::create(frame.canvas)?;

        let graph_rect = PixelRect::new(
            f64::from(frame.origin_x),
            f64::from(frame.origin_y),
            f64::from(frame.width),
            f64::from(frame.height),
        );

        let mut plotter = Self {
            canvas,
            frame,
            font: config.font,
            axes: AxisSet::new(config.x_axis_mode, config.y_axis_mode),
            clip: ClipStateManager::new(graph_rect),
        };
        plotter.canvas.fill_surface(Color::WHITE)?;
        plotter.draw_frame(Color::BLACK)?;

        debug!(
            canvas_width = frame.canvas.width,
            canvas_height = frame.canvas.height,
            origin_x = frame.origin_x,
            origin_y = frame.origin_y,
            x_axis_mode = ?config.x_axis_mode,
            y_axis_mode = ?config.y_axis_mode,
            "graph plotter created"
        );
        Ok(plotter)
    }

    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[must_use]
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    #[must_use]
    pub fn frame(&self) -> GraphFrame {
        self.frame
    }

    #[must_use]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    #[must_use]
    pub fn clip_state(&self) -> ClipState {
        self.clip.state()
    }

    /// Current domain of `axis`; the default `[0, 1]` domain before configuration.
    pub fn axis_domain(&self, axis: AxisId) -> PlotResult<ScaleDomain> {
        self.axes.domain(axis)
    }

    pub fn is_configured(&self, axis: AxisId) -> PlotResult<bool> {
        self.axes.is_configured(axis)
    }

    /// Pixel coordinate of a raw data value along `axis`.
    pub fn map_value(&self, axis: AxisId, value: f64) -> PlotResult<f64> {
        Ok(self.mapper(axis)?.map(value))
    }

    pub fn map_values(&self, axis: AxisId, values: &[f64]) -> PlotResult<Vec<f64>> {
        Ok(self.mapper(axis)?.map_all(values))
    }

    /// Raw data value shown at pixel coordinate `pixel` along `axis`.
    pub fn invert_pixel(&self, axis: AxisId, pixel: f64) -> PlotResult<f64> {
        Ok(self.mapper(axis)?.invert(pixel))
    }

    /// Persists the canvas, appending its default extension when `path` has none.
    ///
    /// Returns the path actually written.
    pub fn save(&mut self, path: impl AsRef<Path>) -> PlotResult<PathBuf> {
        let path = path.as_ref();
        let target = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(self.canvas.default_extension())
        };
        self.canvas.save(&target)?;
        debug!(path = %target.display(), "graph saved");
        Ok(target)
    }

    pub(super) fn mapper(&self, axis: AxisId) -> PlotResult<CoordinateMapper> {
        let domain = self.axes.domain(axis)?;
        Ok(CoordinateMapper::new(&domain, &self.frame, axis.dimension()))
    }

    pub(super) fn point_mappers(
        &self,
        axes: AxisPair,
    ) -> PlotResult<(CoordinateMapper, CoordinateMapper)> {
        Ok((self.mapper(axes.x_axis())?, self.mapper(axes.y_axis())?))
    }

    pub(super) fn require_clip(&mut self, wanted: ClipState) -> PlotResult<()> {
        self.clip.require(&mut self.canvas, wanted)?;
        Ok(())
    }

    /// Border of `frame_stroke_width` drawn just outside the graph rectangle.
    fn draw_frame(&mut self, color: Color) -> PlotResult<()> {
        self.require_clip(ClipState::Unclipped)?;

        let x = f64::from(self.frame.origin_x);
        let y = f64::from(self.frame.origin_y);
        let w = f64::from(self.frame.width);
        let h = f64::from(self.frame.height);
        let s = f64::from(self.frame.frame_stroke_width);

        for rect in [
            PixelRect::new(x - s, y - s, w + s, s),
            PixelRect::new(x, y + h, w + s, s),
            PixelRect::new(x - s, y, s, h + s),
            PixelRect::new(x + w, y - s, s, h + s),
        ] {
            self.canvas.fill_rect(rect, color)?;
        }
        Ok(())
    }
}
