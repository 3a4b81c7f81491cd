use approx::assert_abs_diff_eq;
use chart_canvas::core::{Easing, PhaseXY, Tween, clamp_phase};

#[test]
fn quadratic_curves_at_the_midpoint() {
    assert_abs_diff_eq!(Easing::InQuad.apply(0.5), 0.25);
    assert_abs_diff_eq!(Easing::OutQuad.apply(0.5), 0.75);
    assert_abs_diff_eq!(Easing::InOutQuad.apply(0.5), 0.5);
    assert_abs_diff_eq!(Easing::InCubic.apply(0.5), 0.125);
}

#[test]
fn in_out_curves_are_point_symmetric() {
    for easing in [Easing::InOutQuad, Easing::InOutCubic, Easing::InOutQuart, Easing::InOutSine] {
        for t in [0.1, 0.25, 0.4] {
            assert_abs_diff_eq!(easing.apply(t) + easing.apply(1.0 - t), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn back_curves_overshoot() {
    assert!(Easing::InBack.apply(0.2) < 0.0);
    assert!(Easing::OutBack.apply(0.8) > 1.0);
}

#[test]
fn bounce_stays_inside_the_unit_range() {
    for step in 0..=100 {
        let value = Easing::OutBounce.apply(f64::from(step) / 100.0);
        assert!((-1e-9..=1.0 + 1e-9).contains(&value), "{value}");
    }
}

#[test]
fn monotone_curves_never_step_back() {
    for easing in [Easing::Linear, Easing::OutCubic, Easing::InExpo, Easing::OutCirc] {
        let mut previous = easing.apply(0.0);
        for step in 1..=50 {
            let value = easing.apply(f64::from(step) / 50.0);
            assert!(value >= previous - 1e-12, "{easing:?} at step {step}");
            previous = value;
        }
    }
}

#[test]
fn phase_pairs_multiply() {
    assert_abs_diff_eq!(PhaseXY::new(0.5, 0.5).combined(), 0.25);
    assert_abs_diff_eq!(PhaseXY::default().combined(), 1.0);
}

#[test]
fn zero_length_tween_jumps_after_the_delay() {
    let tween = Tween::new(0, Easing::Linear).with_delay(50);
    assert_abs_diff_eq!(tween.phase_at(49), 0.0);
    assert_abs_diff_eq!(tween.phase_at(50), 1.0);
    assert!(tween.is_finished(50));
}

#[test]
fn default_tween_eases_out() {
    let tween = Tween::default();
    assert!(tween.phase_at(400) > 0.5);
    assert!(!tween.is_finished(799));
}

#[test]
fn infinite_phase_draws_fully() {
    assert_abs_diff_eq!(clamp_phase(f64::INFINITY), 1.0);
    assert_abs_diff_eq!(clamp_phase(f64::NEG_INFINITY), 1.0);
}

#[test]
fn easing_names_serialize_as_variants() {
    let json = serde_json::to_string(&Easing::InOutBounce).expect("serialize");
    assert_eq!(json, "\"InOutBounce\"");
    let easing: Easing = serde_json::from_str("\"OutElastic\"").expect("parse");
    assert_eq!(easing, Easing::OutElastic);
}
