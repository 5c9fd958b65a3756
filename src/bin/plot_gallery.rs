#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
use graph_plot::api::{GraphPlotter, LineGraphStyle, PlotterConfig};
#[cfg(feature = "cairo-backend")]
use graph_plot::core::{AxisId, AxisMode, AxisPair, LabelFormat, MarkerShape, MarkerStyle};
#[cfg(feature = "cairo-backend")]
use graph_plot::error::PlotResult;
#[cfg(feature = "cairo-backend")]
use graph_plot::render::{CairoCanvas, Color};
#[cfg(feature = "cairo-backend")]
use rust_decimal::Decimal;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_DIR: &str = "target/plot_gallery";

#[cfg(feature = "cairo-backend")]
const LINE_SAMPLES: [f64; 9] = [0.42, 0.53, 0.73, 0.45, 0.55, 0.60, 0.40, 0.70, 0.75];

#[cfg(feature = "cairo-backend")]
type Plotter = GraphPlotter<CairoCanvas>;

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let GalleryArgs { output_dir, trace } = parse_args()?;
    let _ = match trace.as_deref() {
        Some(directives) => graph_plot::telemetry::init_tracing(directives),
        None => graph_plot::telemetry::init_default_tracing(),
    };
    fs::create_dir_all(&output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            output_dir.display()
        )
    })?;

    let scenes: [(&str, fn() -> PlotResult<Plotter>); 8] = [
        ("points", points_scene),
        ("points_batch", points_batch_scene),
        ("lines", lines_scene),
        ("histogram", histogram_scene),
        ("line_graph", line_graph_scene),
        ("smooth_line_graph", smooth_line_graph_scene),
        ("dual_axes", dual_axes_scene),
        ("log_plot", log_plot_scene),
    ];

    for (name, build) in scenes {
        let mut plotter = build().map_err(|err| format!("scene `{name}` failed: {err}"))?;
        let path = plotter
            .save(output_dir.join(name))
            .map_err(|err| format!("failed to save scene `{name}`: {err}"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
struct GalleryArgs {
    output_dir: PathBuf,
    trace: Option<String>,
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<GalleryArgs, String> {
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut trace = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--trace" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --trace".to_owned())?;
                trace = Some(value);
            }
            "--help" | "-h" => {
                println!("usage: plot_gallery [--out-dir <dir>] [--trace <filter>]");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(GalleryArgs { output_dir, trace })
}

#[cfg(feature = "cairo-backend")]
fn dec(value: i64, scale: u32) -> Decimal {
    Decimal::new(value, scale)
}

#[cfg(feature = "cairo-backend")]
fn base_plotter(config: PlotterConfig) -> PlotResult<Plotter> {
    GraphPlotter::new(config)
}

#[cfg(feature = "cairo-backend")]
fn framed(x: (i64, i64), y: (i64, i64)) -> PlotResult<Plotter> {
    let mut plotter = base_plotter(PlotterConfig::new(1600, 1000))?;
    let step = dec(5, 2);
    let format = LabelFormat::default();
    plotter.draw_linear_scale(AxisId::X, Color::BLACK, dec(x.0, 2), dec(x.1, 2), step, format)?;
    plotter.draw_linear_scale(AxisId::Y, Color::BLACK, dec(y.0, 2), dec(y.1, 2), step, format)?;
    plotter.draw_x_label(Color::BLACK, "x")?;
    plotter.draw_y_label(Color::BLACK, "y")?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn points_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((40, 80), (20, 50))?;
    let corner = MarkerStyle::new(MarkerShape::Circle, 10.0);
    for (x, y) in [(0.40, 0.20), (0.80, 0.20), (0.40, 0.50), (0.80, 0.50)] {
        plotter.draw_point(Color::VIOLET, x, y, corner, AxisPair::PRIMARY)?;
    }
    for (color, x, y, shape, size) in [
        (Color::BLACK, 0.50, 0.25, MarkerShape::Circle, 10.0),
        (Color::RED, 0.55, 0.30, MarkerShape::Triangle, 20.0),
        (Color::GREEN, 0.60, 0.35, MarkerShape::Square, 30.0),
        (Color::BLUE, 0.65, 0.40, MarkerShape::Pentagon, 40.0),
        (Color::ORANGE, 0.70, 0.45, MarkerShape::Hexagon, 50.0),
    ] {
        plotter.draw_point(color, x, y, MarkerStyle::new(shape, size), AxisPair::PRIMARY)?;
    }
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn points_batch_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((40, 80), (20, 50))?;
    plotter.draw_points(
        Color::BLACK,
        &[0.50, 0.55, 0.60, 0.65, 0.70],
        &[0.25, 0.30, 0.35, 0.40, 0.45],
        MarkerStyle::new(MarkerShape::Circle, 20.0),
        AxisPair::PRIMARY,
    )?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn lines_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((20, 80), (20, 80))?;
    for (i, color) in [
        Color::BLACK,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::ORANGE,
    ]
    .into_iter()
    .enumerate()
    {
        let shift = 0.05 * i as f64;
        plotter.draw_line(
            color,
            (0.50 + shift, 0.25 + shift),
            (0.25 + shift, 0.50 + shift),
            (i + 1) as f64,
            AxisPair::PRIMARY,
        )?;
    }
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn histogram_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((20, 70), (20, 80))?;
    plotter.draw_histogram(
        Color::BLACK,
        dec(25, 2),
        dec(65, 2),
        &LINE_SAMPLES,
        AxisPair::PRIMARY,
    )?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn line_graph_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((20, 70), (40, 80))?;
    plotter.draw_line_graph(
        Color::BLACK,
        dec(25, 2),
        dec(65, 2),
        &LINE_SAMPLES,
        LineGraphStyle::new(5.0).with_marker(MarkerStyle::new(MarkerShape::Square, 16.0)),
        AxisPair::PRIMARY,
    )?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn smooth_line_graph_scene() -> PlotResult<Plotter> {
    let mut plotter = framed((20, 70), (40, 80))?;
    plotter.draw_smooth_line_graph(
        Color::BLACK,
        dec(25, 2),
        dec(65, 2),
        &LINE_SAMPLES,
        LineGraphStyle::new(5.0),
        AxisPair::PRIMARY,
    )?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn dual_axes_scene() -> PlotResult<Plotter> {
    let config = PlotterConfig::new(1600, 1000)
        .with_x_axis_mode(AxisMode::Dual)
        .with_y_axis_mode(AxisMode::Dual);
    let mut plotter = base_plotter(config)?;
    let step = dec(5, 2);
    let format = LabelFormat::default();
    for (axis, min, max) in [
        (AxisId::X, 40, 80),
        (AxisId::Y, 20, 50),
        (AxisId::X2, 50, 70),
        (AxisId::Y2, 25, 45),
    ] {
        plotter.draw_linear_scale(axis, Color::BLACK, dec(min, 2), dec(max, 2), step, format)?;
    }
    plotter.draw_x_label(Color::BLACK, "x")?;
    plotter.draw_y_label(Color::BLACK, "y")?;
    plotter.draw_x2_label(Color::BLACK, "u")?;
    plotter.draw_y2_label(Color::BLACK, "v")?;
    plotter.draw_points(
        Color::BLACK,
        &[0.50, 0.55, 0.60, 0.65, 0.70],
        &[0.25, 0.30, 0.35, 0.40, 0.45],
        MarkerStyle::new(MarkerShape::Circle, 20.0),
        AxisPair::SECONDARY,
    )?;
    Ok(plotter)
}

#[cfg(feature = "cairo-backend")]
fn log_plot_scene() -> PlotResult<Plotter> {
    let mut plotter = base_plotter(PlotterConfig::new(1600, 1000))?;
    plotter.draw_log_scale(AxisId::X, Color::BLACK, -10, 5, 2)?;
    plotter.draw_log_scale(AxisId::Y, Color::BLACK, -5, 2, 2)?;
    plotter.draw_x_label(Color::BLACK, "x")?;
    plotter.draw_y_label(Color::BLACK, "y")?;
    plotter.draw_polyline(
        Color::BLACK,
        &[1e-8, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3],
        &[1e-4, 2e-4, 3e-3, 4e-3, 1e-2, 1e-1, 5e-2, 1e0, 2e-2, 1e-2, 1e-1, 4e-2],
        5.0,
        AxisPair::PRIMARY,
    )?;
    Ok(plotter)
}
