use chart_canvas::api::pie_slices;
use chart_canvas::core::PieDataSet;
use proptest::prelude::*;

proptest! {
    #[test]
    fn slices_cover_the_animated_circle(
        values in prop::collection::vec(0.1f64..1_000.0, 1..20),
        rotation in 0.0f64..360.0,
        phase in 0.01f64..=1.0
    ) {
        let data_set = PieDataSet::from_values(&values, "pie").expect("data set");
        let slices = pie_slices(&data_set, rotation, phase);
        prop_assert_eq!(slices.len(), values.len());

        let total: f64 = slices.iter().map(|slice| slice.sweep_angle).sum();
        prop_assert!((total - 360.0 * phase).abs() <= 1e-6);
        prop_assert!((slices[0].start_angle - rotation).abs() <= 1e-9);
        for pair in slices.windows(2) {
            let expected = pair[0].start_angle + pair[0].slice_angle;
            prop_assert!((pair[1].start_angle - expected).abs() <= 1e-6);
        }
    }

    #[test]
    fn slice_gaps_shrink_every_sweep(
        values in prop::collection::vec(1.0f64..100.0, 1..10),
        space in 0.0f64..4.0
    ) {
        let data_set = PieDataSet::from_values(&values, "pie")
            .expect("data set")
            .with_slice_space(space);
        for slice in pie_slices(&data_set, 270.0, 1.0) {
            prop_assert!(slice.sweep_angle > 0.0);
            prop_assert!((slice.slice_angle - slice.sweep_angle - space).abs() <= 1e-9);
        }
    }
}
