use chart_canvas::ChartError;
use chart_canvas::api::ChartPayload;
use chart_canvas::core::{
    BarDataSet, BubbleDataSet, CandleDataSet, ChartDataSet, LineDataSet, LineMode,
};

const MISMATCHED_STACKS: &str = r#"{
    "entries": [
        { "x": 0.0, "y": 3.0, "y_values": [1.0, 2.0] },
        { "x": 1.0, "y": 6.0, "y_values": [1.0, 2.0, 3.0] }
    ],
    "style": { "label": "stacks" }
}"#;

#[test]
fn mismatched_stacks_are_rejected_when_decoding() {
    let error = serde_json::from_str::<BarDataSet>(MISMATCHED_STACKS).expect_err("stack mismatch");
    assert!(error.to_string().contains("stacked entry 1"), "{error}");
}

#[test]
fn payload_json_with_mismatched_stacks_is_a_serialization_error() {
    let json = format!(r#"{{ "kind": "bar", "data": {{ "data": {{ "data_sets": [{MISMATCHED_STACKS}] }}, "bar_width": 0.85 }} }}"#);
    let result = ChartPayload::from_json_str(&json);
    let Err(ChartError::Serialization(message)) = result else {
        panic!("expected a serialization error, got {result:?}");
    };
    assert!(message.contains("expected 2"), "{message}");
}

#[test]
fn empty_palette_is_rejected_when_decoding() {
    let json = r#"{ "entries": [{ "x": 0.0, "y": 1.0 }], "style": { "label": "bare", "colors": [] } }"#;
    let error = serde_json::from_str::<LineDataSet>(json).expect_err("empty palette");
    assert!(error.to_string().contains("at least one color"), "{error}");
}

#[test]
fn inverted_candle_is_rejected_when_decoding() {
    let json = r#"{
        "entries": [{ "x": 0.0, "high": 1.0, "low": 4.0, "open": 2.0, "close": 3.0 }],
        "style": { "label": "ohlc" }
    }"#;
    assert!(serde_json::from_str::<CandleDataSet>(json).is_err());
}

#[test]
fn negative_bubble_size_is_rejected_when_decoding() {
    let json = r#"{ "entries": [{ "x": 0.0, "y": 1.0, "size": -2.0 }], "style": { "label": "b" } }"#;
    assert!(serde_json::from_str::<BubbleDataSet>(json).is_err());
}

#[test]
fn kind_style_is_optional_and_survives_a_round_trip() {
    let json = r#"{ "entries": [{ "x": 0.0, "y": 1.0 }, { "x": 1.0, "y": 2.0 }], "style": { "label": "l" } }"#;
    let data_set: LineDataSet = serde_json::from_str(json).expect("decode");
    assert_eq!(data_set.entry_count(), 2);
    assert_eq!(data_set.line_style().mode, LineMode::Linear);

    let stepped = data_set.with_mode(LineMode::Stepped);
    let encoded = serde_json::to_string(&stepped).expect("encode");
    let decoded: LineDataSet = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(decoded, stepped);
}
