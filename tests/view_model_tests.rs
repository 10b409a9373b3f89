use chartview::core::{
    ChartKind, ChartModel, Insets, LegendPosition, PlotOrientation, Rect, Viewport,
};
use chartview::render::RecordingRenderer;
use chartview::view::{ChartView, ChartViewConfig, ChartViewEvent};
use chartview::ViewError;

use std::cell::RefCell;
use std::rc::Rc;

fn build_view(kind: ChartKind) -> ChartView<RecordingRenderer> {
    let renderer = RecordingRenderer::new(kind.default_capability(PlotOrientation::Vertical))
        .with_data_area(Rect::new(0.0, 0.0, 100.0, 100.0));
    let config = ChartViewConfig::new(Viewport::new(400, 300));
    ChartView::new(renderer, ChartModel::new(kind), config).expect("view init")
}

fn capture_events(view: &mut ChartView<RecordingRenderer>) -> Rc<RefCell<Vec<ChartViewEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    view.subscribe(Box::new(move |event: &ChartViewEvent| {
        sink.borrow_mut().push(event.clone());
    }));
    events
}

#[test]
fn title_mutation_emits_event_and_invalidates() {
    let mut view = build_view(ChartKind::Line);
    let events = capture_events(&mut view);
    view.paint().expect("paint");

    view.set_title("Quarterly revenue");

    assert_eq!(view.model().title(), "Quarterly revenue");
    assert!(view.needs_repaint());
    assert_eq!(
        events.borrow().as_slice(),
        [ChartViewEvent::ModelChanged { property: "title" }]
    );
}

#[test]
fn paint_skips_when_buffer_is_current() {
    let mut view = build_view(ChartKind::Line);

    assert!(view.paint().expect("first paint"));
    assert!(!view.paint().expect("second paint"));
    assert_eq!(view.renderer().draw_count, 1);

    view.set_subtitle("2007 fiscal year");
    assert!(view.paint().expect("repaint"));
    assert_eq!(view.renderer().draw_count, 2);
}

#[test]
fn orientation_is_rejected_for_pie_charts() {
    let mut view = build_view(ChartKind::Pie);
    let events = capture_events(&mut view);
    view.paint().expect("paint");

    let err = view
        .set_orientation(PlotOrientation::Horizontal)
        .expect_err("pie must reject orientation");
    assert!(matches!(err, ViewError::InvalidConfig(_)));
    assert!(events.borrow().is_empty());
    assert!(!view.needs_repaint());
}

#[test]
fn orientation_change_is_tracked_for_xy_charts() {
    let mut view = build_view(ChartKind::Scatter);
    let events = capture_events(&mut view);

    view.set_orientation(PlotOrientation::Horizontal)
        .expect("orientation change");

    assert_eq!(view.model().orientation(), PlotOrientation::Horizontal);
    assert_eq!(
        events.borrow().as_slice(),
        [ChartViewEvent::ModelChanged {
            property: "orientation"
        }]
    );
}

#[test]
fn legend_position_defaults_to_bottom() {
    let view = build_view(ChartKind::Bar);
    assert_eq!(view.model().legend_position(), LegendPosition::Bottom);
}

#[test]
fn legend_position_mutation_emits_event() {
    let mut view = build_view(ChartKind::Bar);
    let events = capture_events(&mut view);

    view.set_legend_position(LegendPosition::None);

    assert_eq!(view.model().legend_position(), LegendPosition::None);
    assert_eq!(
        events.borrow().as_slice(),
        [ChartViewEvent::ModelChanged {
            property: "legend_position"
        }]
    );
}

#[test]
fn series_metadata_preserves_insertion_order() {
    let mut view = build_view(ChartKind::Line);

    view.insert_series_metadata("south", "dashed");
    view.insert_series_metadata("north", "solid");
    view.insert_series_metadata("east", "dotted");

    let keys: Vec<&str> = view
        .model()
        .series_metadata()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["south", "north", "east"]);
}

#[test]
fn invalid_viewport_is_rejected() {
    let renderer = RecordingRenderer::new(
        ChartKind::Line.default_capability(PlotOrientation::Vertical),
    );
    let config = ChartViewConfig::new(Viewport::new(0, 300));
    let err = ChartView::new(renderer, ChartModel::new(ChartKind::Line), config)
        .expect_err("zero-width viewport must fail");
    assert!(matches!(
        err,
        ViewError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
}

#[test]
fn non_finite_trigger_distance_is_rejected() {
    let renderer = RecordingRenderer::new(
        ChartKind::Line.default_capability(PlotOrientation::Vertical),
    );
    let config =
        ChartViewConfig::new(Viewport::new(400, 300)).with_zoom_trigger_distance(f64::NAN);
    let err = ChartView::new(renderer, ChartModel::new(ChartKind::Line), config)
        .expect_err("NaN trigger must fail");
    assert!(matches!(err, ViewError::InvalidConfig(_)));
}

#[test]
fn oversized_insets_are_rejected() {
    let renderer = RecordingRenderer::new(
        ChartKind::Line.default_capability(PlotOrientation::Vertical),
    );
    let config = ChartViewConfig::new(Viewport::new(400, 300))
        .with_insets(Insets::new(250.0, 0.0, 250.0, 0.0));
    let err = ChartView::new(renderer, ChartModel::new(ChartKind::Line), config)
        .expect_err("insets larger than the viewport must fail");
    assert!(matches!(err, ViewError::InvalidConfig(_)));
}

#[test]
fn viewport_change_validates_and_invalidates() {
    let mut view = build_view(ChartKind::Line);
    view.paint().expect("paint");

    view.set_viewport(Viewport::new(800, 600)).expect("resize");
    assert!(view.needs_repaint());

    let err = view
        .set_viewport(Viewport::new(0, 0))
        .expect_err("invalid resize must fail");
    assert!(matches!(err, ViewError::InvalidViewport { .. }));
    assert_eq!(view.viewport(), Viewport::new(800, 600));
}

#[test]
fn config_survives_serde_round_trip() {
    let config = ChartViewConfig::new(Viewport::new(640, 480))
        .with_insets(Insets::new(4.0, 4.0, 4.0, 4.0))
        .with_zoom_trigger_distance(16.0)
        .with_fill_selection(true);

    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: ChartViewConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(restored, config);
}

#[test]
fn model_survives_serde_round_trip() {
    let mut model = ChartModel::new(ChartKind::TimeSeries);
    model.set_title("Throughput");
    model.set_source("ops dashboard");
    model.set_legend_position(LegendPosition::Right);
    model.insert_series_metadata("p99", "ms");

    let json = serde_json::to_string(&model).expect("serialize model");
    let restored: ChartModel = serde_json::from_str(&json).expect("deserialize model");
    assert_eq!(restored, model);
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn default_tracing_init_is_a_noop_without_the_feature() {
    assert!(!chartview::telemetry::init_default_tracing());
}
