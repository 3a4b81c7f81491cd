use chart_canvas::api::{
    ChartEngine, ChartEngineConfig, ChartFrameConfig, ChartPayload, DEFAULT_DRAW_ORDER, DrawOrder,
    LegendConfig, MarkerConfig, PieChartConfig,
};
use chart_canvas::core::{
    BarData, BarDataSet, CandleData, CandleDataSet, CombinedData, LineData, LineDataSet, PieData,
    PieDataSet, Point, RadarData, RadarDataSet, Size,
};
use chart_canvas::render::NullRenderer;
use chart_canvas::ChartError;

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Size::new(640.0, 480.0)),
    )
    .expect("engine")
}

fn line_payload() -> ChartPayload {
    ChartPayload::Line {
        data: LineData::single(
            LineDataSet::from_values(&[3.0, 7.0, 2.0, 9.0], "series").expect("data set"),
        ),
    }
}

#[test]
fn empty_payload_renders_an_empty_frame() {
    let mut engine = engine();
    engine.render(1.0).expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_shape_count, 0);
}

#[test]
fn line_payload_counts_reach_the_renderer() {
    let mut engine = engine();
    engine.set_payload(line_payload());
    let frame = engine.build_render_frame(1.0);
    engine.render(1.0).expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, frame.lines().count());
    assert_eq!(renderer.last_text_count, frame.texts().count());
    assert_eq!(renderer.last_shape_count, frame.shape_count());
    assert!(renderer.last_line_count > 3);
    assert!(renderer.last_text_count > 0);
}

#[test]
fn every_payload_kind_produces_a_valid_frame() {
    let payloads = vec![
        line_payload(),
        ChartPayload::Bar {
            data: BarData::single(BarDataSet::from_values(&[1.0, -2.0, 3.0], "bars").expect("data set")),
        },
        ChartPayload::HorizontalBar {
            data: BarData::single(
                BarDataSet::stacked(&[&[1.0, 2.0], &[3.0, -1.0]], "stacks").expect("data set"),
            ),
        },
        ChartPayload::Candle {
            data: CandleData::single(
                CandleDataSet::from_ohlc(&[[1.0, 4.0, 0.5, 3.0], [3.0, 3.5, 1.0, 1.5]], "ohlc")
                    .expect("data set"),
            ),
        },
        ChartPayload::Pie {
            data: PieData::single(PieDataSet::from_values(&[1.0, 2.0, 3.0], "pie").expect("data set")),
            config: PieChartConfig::default().with_highlight(1),
        },
        ChartPayload::Radar {
            data: RadarData::new(vec![
                RadarDataSet::from_values(&[1.0, 2.0, 3.0, 4.0], "radar").expect("data set"),
            ]),
            config: Default::default(),
        },
        ChartPayload::combined(
            CombinedData::default()
                .with_bar_data(BarData::single(BarDataSet::from_values(&[2.0, 4.0], "b").expect("data set")))
                .with_line_data(LineData::single(LineDataSet::from_values(&[1.0, 3.0], "l").expect("data set"))),
        ),
    ];
    let mut engine = engine();
    for payload in payloads {
        let kind = payload.kind();
        engine.set_payload(payload);
        let frame = engine.build_render_frame(1.0);
        frame.validate().unwrap_or_else(|error| panic!("{kind}: {error}"));
        assert!(!frame.is_empty(), "{kind} drew nothing");
        engine.render(0.5).unwrap_or_else(|error| panic!("{kind}: {error}"));
    }
    assert_eq!(engine.renderer().frames_rendered, 7);
}

#[test]
fn out_of_range_phase_is_clamped() {
    let mut engine = engine();
    engine.set_payload(line_payload());
    assert_eq!(engine.build_render_frame(3.0), engine.build_render_frame(1.0));
    assert_eq!(engine.build_render_frame(-1.0), engine.build_render_frame(0.0));
}

#[test]
fn clear_drops_the_payload() {
    let mut engine = engine();
    engine.set_payload(line_payload());
    engine.clear();
    assert_eq!(engine.payload(), &ChartPayload::Empty);
    assert!(engine.build_render_frame(1.0).is_empty());
}

#[test]
fn invalid_canvas_is_rejected() {
    let result = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Size::new(0.0, 480.0)),
    );
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn failed_resize_keeps_the_previous_canvas() {
    let mut engine = engine();
    assert!(engine.resize(Size::new(f64::NAN, 10.0)).is_err());
    assert_eq!(engine.canvas(), Size::new(640.0, 480.0));
    engine.resize(Size::new(320.0, 240.0)).expect("resize");
    assert_eq!(engine.build_render_frame(1.0).size, Size::new(320.0, 240.0));
}

#[test]
fn negative_min_offset_is_rejected() {
    let frame = ChartFrameConfig {
        min_offset: -1.0,
        ..ChartFrameConfig::default()
    };
    let config = ChartEngineConfig::default().with_frame(frame);
    assert!(matches!(config.validate(), Err(ChartError::InvalidData(_))));
}

#[test]
fn legend_can_be_switched_off_through_the_config() {
    let config = ChartEngineConfig::new(Size::new(640.0, 480.0)).with_frame(
        ChartFrameConfig::default().with_legend(LegendConfig::disabled()),
    );
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_payload(line_payload());
    let labels: Vec<String> = engine
        .build_render_frame(1.0)
        .texts()
        .map(|text| text.text.clone())
        .collect();
    assert!(!labels.iter().any(|label| label == "series"));
}

#[test]
fn payload_json_is_tagged_by_kind() {
    let payload = line_payload();
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(value["kind"], "line");
    let restored: ChartPayload = serde_json::from_value(value).expect("deserialize");
    assert_eq!(restored, payload);
}

#[test]
fn combined_payload_without_order_uses_the_default() {
    let payload = ChartPayload::Combined {
        data: CombinedData::default(),
        order: vec![DrawOrder::Line],
    };
    let mut value = serde_json::to_value(&payload).expect("serialize");
    value.as_object_mut().expect("object").remove("order");
    let restored: ChartPayload = serde_json::from_value(value).expect("deserialize");
    let ChartPayload::Combined { order, .. } = restored else {
        panic!("expected combined payload");
    };
    assert_eq!(order, DEFAULT_DRAW_ORDER.to_vec());
}

#[test]
fn engine_config_json_round_trips() {
    let config = ChartEngineConfig::new(Size::new(1024.0, 768.0));
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = ChartEngineConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored.canvas, config.canvas);
    assert_eq!(restored.metrics, config.metrics);
}

#[test]
fn malformed_config_json_is_a_serialization_error() {
    let result = ChartEngineConfig::from_json_compat_str("{not json");
    assert!(matches!(result, Err(ChartError::Serialization(_))));
}

#[test]
fn marker_styling_survives_the_config_json() {
    let marker = MarkerConfig {
        text_size: 14.0,
        offset: Point::new(4.0, -20.0),
        ..MarkerConfig::default()
    };
    let config = ChartEngineConfig::new(Size::new(800.0, 600.0))
        .with_frame(ChartFrameConfig::default().with_marker(marker));
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored.frame.marker, marker);
    assert!(restored.frame.marker.enabled);
}
