mod axis_controller;
mod line_graph_style;
mod plotter;
mod plotter_config;
mod series_controller;
mod validation;

pub use line_graph_style::LineGraphStyle;
pub use plotter::GraphPlotter;
pub use plotter_config::PlotterConfig;
