pub mod clip;
pub mod layout;
pub mod mapper;
pub mod marker;
pub mod primitives;
pub mod scale_domain;
pub mod series;
pub mod ticks;
pub mod types;

pub use clip::{ClipState, ClipStateManager};
pub use layout::{FrameLayoutInput, GraphFrame};
pub use mapper::CoordinateMapper;
pub use marker::{MarkerGeometry, MarkerShape, MarkerStyle, MarkerVertices};
pub use scale_domain::{AxisContext, AxisSet, AxisState, ScaleDomain, ScaleKind};
pub use series::{DataRect, SampleLayout};
pub use ticks::{LabelFormat, Tick, TickIter, log_tick_label};
pub use types::{
    AxisId, AxisMode, AxisPair, AxisSlot, CanvasSize, Dimension, PixelPoint, PixelRect,
};
