use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::PixelRect;
use crate::error::PlotResult;
use crate::render::Canvas;

/// Whether painting is currently restricted to the graph rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipState {
    /// Whole canvas; used for frame, labels and ticks.
    #[default]
    Unclipped,
    /// Graph rectangle only; used for data geometry.
    GraphRect,
}

/// Owns the canvas clip flag and issues clip commands only on transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipStateManager {
    state: ClipState,
    graph_rect: PixelRect,
}

impl ClipStateManager {
    #[must_use]
    pub fn new(graph_rect: PixelRect) -> Self {
        Self {
            state: ClipState::Unclipped,
            graph_rect,
        }
    }

    #[must_use]
    pub fn state(&self) -> ClipState {
        self.state
    }

    #[must_use]
    pub fn graph_rect(&self) -> PixelRect {
        self.graph_rect
    }

    /// Moves the canvas into `wanted`. Returns `true` when a clip command was issued.
    pub fn require<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        wanted: ClipState,
    ) -> PlotResult<bool> {
        if self.state == wanted {
            return Ok(false);
        }
        match wanted {
            ClipState::GraphRect => canvas.set_clip(self.graph_rect)?,
            ClipState::Unclipped => canvas.reset_clip()?,
        }
        trace!(from = ?self.state, to = ?wanted, "clip transition");
        self.state = wanted;
        Ok(true)
    }
}
