//! graph-plot: deterministic 2D chart rendering.
//!
//! The crate maps numeric series onto linear or base-10 log axes (up to two
//! per dimension), draws ticks, labels, markers, bars and curves through a
//! pluggable [`render::Canvas`], and saves the result as an image.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphPlotter, LineGraphStyle, PlotterConfig};
pub use error::{PlotError, PlotErrorKind, PlotResult};
