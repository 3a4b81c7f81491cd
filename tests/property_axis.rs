use chart_canvas::api::{AxisLabelSlot, compute_axis_values, select_non_overlapping};
use proptest::prelude::*;

proptest! {
    #[test]
    fn axis_values_span_the_range_evenly(
        min in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        count in 2usize..40
    ) {
        let max = min + span;
        let values = compute_axis_values(min, max, count);
        prop_assert_eq!(values.len(), count);
        prop_assert_eq!(values[0], min);
        prop_assert_eq!(values[count - 1], max);
        for pair in values.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn kept_labels_never_overlap(
        centers in prop::collection::vec(0.0f64..1_000.0, 1..30),
        extent in 1.0f64..80.0,
        gap in 0.0f64..10.0
    ) {
        let slots: Vec<AxisLabelSlot> = centers
            .iter()
            .map(|center| AxisLabelSlot::new(*center, format!("{center:.1}"), *center, extent))
            .collect();
        let rightmost = slots
            .iter()
            .map(|slot| slot.start)
            .fold(f64::NEG_INFINITY, f64::max);

        let kept = select_non_overlapping(slots, gap);
        prop_assert!(!kept.is_empty());
        for pair in kept.windows(2) {
            prop_assert!(pair[1].start >= pair[0].end + gap - 1e-9);
        }
        prop_assert_eq!(kept[kept.len() - 1].start, rightmost);
    }
}
