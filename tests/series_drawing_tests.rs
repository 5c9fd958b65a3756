use approx::assert_relative_eq;
use graph_plot::api::{GraphPlotter, LineGraphStyle, PlotterConfig};
use graph_plot::core::{
    AxisId, AxisMode, AxisPair, AxisSlot, ClipState, LabelFormat, MarkerShape, MarkerStyle,
    PixelRect,
};
use graph_plot::error::{PlotError, PlotErrorKind};
use graph_plot::render::{CanvasCommand, Color, RecordingCanvas};
use rust_decimal::Decimal;

const FRAME_COMMANDS: usize = 5;

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

fn scaled_plotter() -> GraphPlotter<RecordingCanvas> {
    let mut plotter = GraphPlotter::new(PlotterConfig::new(1600, 1000)).expect("plotter");
    plotter
        .draw_linear_scale(
            AxisId::X,
            Color::BLACK,
            dec("0.20"),
            dec("0.70"),
            dec("0.05"),
            LabelFormat::default(),
        )
        .expect("x scale");
    plotter
        .draw_linear_scale(
            AxisId::Y,
            Color::BLACK,
            dec("0.20"),
            dec("0.80"),
            dec("0.05"),
            LabelFormat::default(),
        )
        .expect("y scale");
    plotter
}

/// Commands issued after the last axis text, i.e. by data-drawing calls.
fn data_commands(plotter: &GraphPlotter<RecordingCanvas>) -> Vec<CanvasCommand> {
    let commands = plotter.canvas().commands();
    let last_text = commands
        .iter()
        .rposition(|command| matches!(command, CanvasCommand::Text { .. }))
        .map_or(FRAME_COMMANDS, |index| index + 1);
    commands[last_text..].to_vec()
}

fn circle(size: f64) -> MarkerStyle {
    MarkerStyle::new(MarkerShape::Circle, size)
}

#[test]
fn unconfigured_axes_map_against_unit_domain() {
    let plotter = GraphPlotter::<RecordingCanvas>::new(PlotterConfig::new(1600, 1000))
        .expect("plotter");
    assert_relative_eq!(plotter.map_value(AxisId::X, 0.0).expect("x"), 234.0);
    assert_relative_eq!(plotter.map_value(AxisId::X, 1.0).expect("x"), 1833.0);
    assert_relative_eq!(plotter.map_value(AxisId::Y, 0.0).expect("y"), 1023.0);
    assert_relative_eq!(plotter.map_value(AxisId::Y, 1.0).expect("y"), 24.0);
}

#[test]
fn batch_mapping_matches_scalar_mapping() {
    let plotter = scaled_plotter();
    let values = [0.2, 0.33, 0.5, 0.7, 0.9, -1.0];
    let batch = plotter.map_values(AxisId::Y, &values).expect("batch");
    for (value, mapped) in values.iter().zip(batch) {
        assert_eq!(plotter.map_value(AxisId::Y, *value).expect("scalar"), mapped);
    }
}

#[test]
fn data_drawing_clips_once_per_transition() {
    let mut plotter = scaled_plotter();
    plotter
        .draw_point(Color::RED, 0.3, 0.3, circle(10.0), AxisPair::PRIMARY)
        .expect("first point");
    plotter
        .draw_point(Color::RED, 0.4, 0.4, circle(10.0), AxisPair::PRIMARY)
        .expect("second point");
    assert_eq!(plotter.clip_state(), ClipState::GraphRect);

    let clip_commands: Vec<&CanvasCommand> = plotter
        .canvas()
        .commands()
        .iter()
        .filter(|command| command.is_clip())
        .collect();
    assert_eq!(
        clip_commands,
        vec![&CanvasCommand::SetClip {
            rect: PixelRect::new(234.0, 24.0, 1600.0, 1000.0)
        }]
    );

    plotter.draw_x_label(Color::BLACK, "x").expect("label");
    assert_eq!(plotter.clip_state(), ClipState::Unclipped);
    plotter.draw_y_label(Color::BLACK, "y").expect("label");
    plotter
        .draw_point(Color::RED, 0.5, 0.5, circle(10.0), AxisPair::PRIMARY)
        .expect("third point");

    let transitions = plotter
        .canvas()
        .commands()
        .iter()
        .filter(|command| command.is_clip())
        .count();
    assert_eq!(transitions, 3);
}

#[test]
fn marker_shapes_issue_matching_primitives() {
    let mut plotter = scaled_plotter();
    for shape in [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::Triangle,
        MarkerShape::Pentagon,
        MarkerShape::Hexagon,
    ] {
        plotter
            .draw_point(
                Color::BLUE,
                0.45,
                0.5,
                MarkerStyle::new(shape, 20.0),
                AxisPair::PRIMARY,
            )
            .expect("marker");
    }

    let fills: Vec<CanvasCommand> = data_commands(&plotter)
        .into_iter()
        .filter(|command| !command.is_clip())
        .collect();
    assert_eq!(fills.len(), 5);
    assert!(matches!(fills[0], CanvasCommand::FillEllipse { .. }));
    match &fills[1] {
        CanvasCommand::FillRect { rect, .. } => {
            assert_relative_eq!(rect.width, 20.0);
            assert_relative_eq!(rect.height, 20.0);
        }
        other => panic!("expected square fill, got {other:?}"),
    }
    for (command, vertices) in fills[2..].iter().zip([3, 5, 6]) {
        match command {
            CanvasCommand::FillPolygon { points, .. } => assert_eq!(points.len(), vertices),
            other => panic!("expected polygon fill, got {other:?}"),
        }
    }
}

#[test]
fn batch_markers_share_geometry_up_to_translation() {
    let mut plotter = scaled_plotter();
    plotter
        .draw_points(
            Color::BLACK,
            &[0.3, 0.4, 0.5],
            &[0.3, 0.5, 0.7],
            MarkerStyle::new(MarkerShape::Pentagon, 18.0),
            AxisPair::PRIMARY,
        )
        .expect("points");

    let polygons: Vec<Vec<(f64, f64)>> = data_commands(&plotter)
        .iter()
        .filter_map(|command| match command {
            CanvasCommand::FillPolygon { points, .. } => Some(
                points
                    .iter()
                    .map(|point| (point.x - points[0].x, point.y - points[0].y))
                    .collect(),
            ),
            _ => None,
        })
        .collect();
    assert_eq!(polygons.len(), 3);
    for polygon in &polygons[1..] {
        for (a, b) in polygon.iter().zip(&polygons[0]) {
            assert_relative_eq!(a.0, b.0, epsilon = 1e-9);
            assert_relative_eq!(a.1, b.1, epsilon = 1e-9);
        }
    }
}

#[test]
fn unequal_arrays_fail_before_any_primitive() {
    let mut plotter = scaled_plotter();
    let before = plotter.canvas().commands().len();

    let results = [
        plotter.draw_points(
            Color::BLACK,
            &[0.3, 0.4],
            &[0.3, 0.4, 0.5],
            circle(5.0),
            AxisPair::PRIMARY,
        ),
        plotter.draw_polyline(Color::BLACK, &[0.3], &[0.3, 0.4], 2.0, AxisPair::PRIMARY),
        plotter.draw_curve(Color::BLACK, &[0.3, 0.4, 0.5], &[], 2.0, AxisPair::PRIMARY),
    ];
    for result in results {
        assert!(matches!(
            result.expect_err("length mismatch"),
            PlotError::Dimension { .. }
        ));
    }
    assert_eq!(plotter.canvas().commands().len(), before);
    assert_eq!(plotter.clip_state(), ClipState::Unclipped);
}

#[test]
fn invalid_sizes_and_widths_are_config_errors() {
    let mut plotter = scaled_plotter();
    let before = plotter.canvas().commands().len();

    let errors = [
        plotter
            .draw_point(Color::BLACK, 0.3, 0.3, circle(0.0), AxisPair::PRIMARY)
            .expect_err("zero marker"),
        plotter
            .draw_line(Color::BLACK, (0.3, 0.3), (0.4, 0.4), -1.0, AxisPair::PRIMARY)
            .expect_err("negative stroke"),
        plotter
            .draw_vertical_bar(Color::BLACK, 0.3, 0.5, f64::NAN, AxisPair::PRIMARY)
            .expect_err("nan thickness"),
        plotter
            .draw_rect(
                Color::rgb(2.0, 0.0, 0.0),
                (0.3, 0.3),
                (0.4, 0.4),
                AxisPair::PRIMARY,
            )
            .expect_err("out of gamut color"),
    ];
    for err in errors {
        assert_eq!(err.kind(), PlotErrorKind::Config);
    }
    assert_eq!(plotter.canvas().commands().len(), before);
}

#[test]
fn histogram_places_samples_evenly_with_step_wide_bars() {
    let mut plotter = scaled_plotter();
    let data = [0.42, 0.53, 0.73, 0.45, 0.55, 0.60, 0.40, 0.70, 0.75];
    plotter
        .draw_histogram(
            Color::BLACK,
            dec("0.25"),
            dec("0.65"),
            &data,
            AxisPair::PRIMARY,
        )
        .expect("histogram");

    let bars: Vec<PixelRect> = data_commands(&plotter)
        .iter()
        .filter_map(|command| match command {
            CanvasCommand::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 9);

    let step_px = plotter.map_value(AxisId::X, 0.30).expect("x")
        - plotter.map_value(AxisId::X, 0.25).expect("x");
    for (i, bar) in bars.iter().enumerate() {
        let sample = 0.25 + i as f64 * 0.05;
        let center = plotter.map_value(AxisId::X, sample).expect("center");
        assert_relative_eq!(bar.x + bar.width / 2.0, center, epsilon = 1e-6);
        assert_relative_eq!(bar.width, step_px, epsilon = 1e-6);

        let top = plotter.map_value(AxisId::Y, data[i]).expect("top");
        assert_relative_eq!(bar.y, top, epsilon = 1e-6);
    }
    let first_center = bars[0].x + bars[0].width / 2.0;
    let last_center = bars[8].x + bars[8].width / 2.0;
    assert_relative_eq!(first_center, plotter.map_value(AxisId::X, 0.25).expect("x"), epsilon = 1e-9);
    assert_relative_eq!(last_center, plotter.map_value(AxisId::X, 0.65).expect("x"), epsilon = 1e-9);
}

#[test]
fn sampled_helpers_reject_degenerate_input() {
    let mut plotter = scaled_plotter();

    let err = plotter
        .draw_histogram(Color::BLACK, dec("0.5"), dec("0.5"), &[1.0, 2.0], AxisPair::PRIMARY)
        .expect_err("empty interval");
    assert_eq!(err.kind(), PlotErrorKind::Config);

    let err = plotter
        .draw_line_graph(
            Color::BLACK,
            dec("0.25"),
            dec("0.65"),
            &[0.5],
            LineGraphStyle::default(),
            AxisPair::PRIMARY,
        )
        .expect_err("single sample");
    assert!(matches!(
        err,
        PlotError::DegenerateInput {
            actual: 1,
            required: 2
        }
    ));
}

#[test]
fn line_graph_strokes_once_and_overlays_markers() {
    let mut plotter = scaled_plotter();
    let data = [0.42, 0.53, 0.73, 0.45, 0.55, 0.60, 0.40, 0.70, 0.75];
    plotter
        .draw_line_graph(
            Color::BLACK,
            dec("0.25"),
            dec("0.65"),
            &data,
            LineGraphStyle::new(5.0).with_marker(MarkerStyle::new(MarkerShape::Triangle, 12.0)),
            AxisPair::PRIMARY,
        )
        .expect("line graph");

    let commands = data_commands(&plotter);
    let polylines: Vec<&CanvasCommand> = commands
        .iter()
        .filter(|command| matches!(command, CanvasCommand::StrokePolyline { .. }))
        .collect();
    assert_eq!(polylines.len(), 1);
    if let CanvasCommand::StrokePolyline {
        points,
        stroke_width,
        ..
    } = polylines[0]
    {
        assert_eq!(points.len(), 9);
        assert_relative_eq!(*stroke_width, 5.0);
        assert_relative_eq!(points[0].x, plotter.map_value(AxisId::X, 0.25).expect("x"));
        assert_relative_eq!(points[8].x, plotter.map_value(AxisId::X, 0.65).expect("x"));
    }
    let markers = commands
        .iter()
        .filter(|command| matches!(command, CanvasCommand::FillPolygon { .. }))
        .count();
    assert_eq!(markers, 9);
}

#[test]
fn smooth_line_graph_strokes_a_curve() {
    let mut plotter = scaled_plotter();
    plotter
        .draw_smooth_line_graph(
            Color::BLACK,
            dec("0.25"),
            dec("0.65"),
            &[0.42, 0.53, 0.73, 0.45],
            LineGraphStyle::new(3.0),
            AxisPair::PRIMARY,
        )
        .expect("smooth line graph");
    let curves = data_commands(&plotter)
        .iter()
        .filter(|command| matches!(command, CanvasCommand::StrokeCurve { points, .. } if points.len() == 4))
        .count();
    assert_eq!(curves, 1);
}

#[test]
fn non_finite_points_are_skipped_silently() {
    let mut plotter = GraphPlotter::<RecordingCanvas>::new(PlotterConfig::new(800, 600))
        .expect("plotter");
    plotter
        .draw_log_scale(AxisId::Y, Color::BLACK, -2, 2, 1)
        .expect("log y");

    plotter
        .draw_points(
            Color::BLACK,
            &[0.1, 0.2, 0.3, 0.4],
            &[1.0, 0.0, -5.0, f64::NAN],
            circle(6.0),
            AxisPair::PRIMARY,
        )
        .expect("points with out-of-domain values");
    plotter
        .draw_line(Color::BLACK, (0.1, 1.0), (0.2, 0.0), 1.0, AxisPair::PRIMARY)
        .expect("line with log of zero");

    let ellipses = data_commands(&plotter)
        .iter()
        .filter(|command| matches!(command, CanvasCommand::FillEllipse { .. }))
        .count();
    assert_eq!(ellipses, 1);
    assert!(
        !data_commands(&plotter)
            .iter()
            .any(|command| matches!(command, CanvasCommand::StrokeLine { .. }))
    );
}

#[test]
fn fully_skipped_draws_leave_clip_untouched() {
    let mut plotter = GraphPlotter::<RecordingCanvas>::new(PlotterConfig::new(800, 600))
        .expect("plotter");
    plotter
        .draw_log_scale(AxisId::Y, Color::BLACK, -2, 2, 1)
        .expect("log y");
    let before = plotter.canvas().commands().len();

    plotter
        .draw_point(Color::BLACK, 0.5, 0.0, circle(6.0), AxisPair::PRIMARY)
        .expect("point at log of zero");
    plotter
        .draw_points(
            Color::BLACK,
            &[0.1, 0.2],
            &[-1.0, f64::NAN],
            circle(6.0),
            AxisPair::PRIMARY,
        )
        .expect("points outside the log domain");
    plotter
        .draw_vertical_bar(Color::BLACK, 0.5, 10.0, 0.1, AxisPair::PRIMARY)
        .expect("bar from log of zero");
    plotter
        .draw_histogram(
            Color::BLACK,
            dec("0"),
            dec("1"),
            &[1.0, 10.0, 100.0],
            AxisPair::PRIMARY,
        )
        .expect("histogram on log axis");
    plotter
        .draw_polyline(
            Color::BLACK,
            &[0.1, 0.2, 0.3],
            &[1.0, 0.0, 1.0],
            1.0,
            AxisPair::PRIMARY,
        )
        .expect("polyline without a finite pair");

    assert_eq!(plotter.clip_state(), ClipState::Unclipped);
    assert_eq!(plotter.canvas().commands().len(), before);

    plotter
        .draw_point(Color::BLACK, 0.5, 1.0, circle(6.0), AxisPair::PRIMARY)
        .expect("drawable point");
    assert_eq!(plotter.clip_state(), ClipState::GraphRect);
}

#[test]
fn polyline_splits_at_non_finite_points() {
    let mut plotter = GraphPlotter::<RecordingCanvas>::new(PlotterConfig::new(800, 600))
        .expect("plotter");
    plotter
        .draw_log_scale(AxisId::X, Color::BLACK, -8, 3, 1)
        .expect("log x");
    plotter
        .draw_log_scale(AxisId::Y, Color::BLACK, -5, 2, 1)
        .expect("log y");

    plotter
        .draw_polyline(
            Color::BLACK,
            &[1e-8, 1e-7, 1e-6, 1e-5, 1e-4, 1e-3],
            &[1e-4, 2e-4, -1.0, 4e-3, 1e-2, 1e-1],
            2.0,
            AxisPair::PRIMARY,
        )
        .expect("polyline");

    let runs: Vec<usize> = data_commands(&plotter)
        .iter()
        .filter_map(|command| match command {
            CanvasCommand::StrokePolyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .collect();
    assert_eq!(runs, vec![2, 3]);
}

#[test]
fn bars_normalize_reversed_corners() {
    let mut plotter = scaled_plotter();
    plotter
        .draw_horizontal_bar(Color::GREEN, 0.5, 0.4, 0.1, AxisPair::PRIMARY)
        .expect("horizontal bar");
    plotter
        .draw_rect(Color::GREEN, (0.6, 0.7), (0.3, 0.3), AxisPair::PRIMARY)
        .expect("reversed rect");

    for command in data_commands(&plotter) {
        if let CanvasCommand::FillRect { rect, .. } = command {
            assert!(rect.width >= 0.0 && rect.height >= 0.0, "{rect:?}");
        }
    }
}

#[test]
fn secondary_selectors_map_through_secondary_domains() {
    let mut plotter = GraphPlotter::<RecordingCanvas>::new(
        PlotterConfig::new(1600, 1000)
            .with_x_axis_mode(AxisMode::Dual)
            .with_y_axis_mode(AxisMode::Dual),
    )
    .expect("plotter");
    plotter
        .draw_linear_scale(
            AxisId::Y2,
            Color::BLACK,
            dec("0"),
            dec("100"),
            dec("10"),
            LabelFormat::default(),
        )
        .expect("y2");

    let axes = AxisPair::new(AxisSlot::Primary, AxisSlot::Secondary);
    plotter
        .draw_point(Color::BLACK, 0.5, 50.0, circle(8.0), axes)
        .expect("point on y2");

    let center = data_commands(&plotter)
        .iter()
        .find_map(|command| match command {
            CanvasCommand::FillEllipse { center, .. } => Some(*center),
            _ => None,
        })
        .expect("ellipse");
    assert_relative_eq!(center.y, plotter.map_value(AxisId::Y2, 50.0).expect("y2"));
    assert_relative_eq!(center.x, plotter.map_value(AxisId::X, 0.5).expect("x"));
}

#[test]
fn secondary_selectors_fail_on_single_axes() {
    let mut plotter = scaled_plotter();
    let before = plotter.canvas().commands().len();
    let err = plotter
        .draw_points(
            Color::BLACK,
            &[0.3],
            &[0.3],
            circle(4.0),
            AxisPair::SECONDARY,
        )
        .expect_err("secondary on single");
    assert_eq!(err.kind(), PlotErrorKind::Config);
    assert_eq!(plotter.canvas().commands().len(), before);
}
