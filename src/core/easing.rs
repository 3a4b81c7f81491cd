//! Easing curves and animation-phase helpers.
//!
//! Animation scheduling is owned by the host: it samples a clock, turns the
//! elapsed time into a progress value with [`Tween::phase_at`] (or its own
//! machinery), and hands the resulting phase to the chart draw call. Every
//! curve here is a pure `f64 -> f64` mapping over `[0, 1]`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::warn;

const BACK_S: f64 = 1.701_58;
const BACK_S2: f64 = BACK_S * 1.525;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Easing {
    pub const ALL: [Self; 28] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
    ];

    /// Maps linear progress `t` to eased progress.
    ///
    /// Elastic and back curves overshoot `[0, 1]` in between; all curves hit
    /// `0` at `t = 0` and `1` at `t = 1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => -t * (t - 2.0),
            Self::InOutQuad => {
                let x = t * 2.0;
                if x < 1.0 {
                    0.5 * x * x
                } else {
                    -0.5 * ((x - 1.0) * (x - 3.0) - 1.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => {
                let x = t - 1.0;
                x * x * x + 1.0
            }
            Self::InOutCubic => {
                let x = t * 2.0;
                if x < 1.0 {
                    0.5 * x * x * x
                } else {
                    let y = x - 2.0;
                    0.5 * (y * y * y + 2.0)
                }
            }
            Self::InQuart => t * t * t * t,
            Self::OutQuart => {
                let x = t - 1.0;
                -(x * x * x * x - 1.0)
            }
            Self::InOutQuart => {
                let x = t * 2.0;
                if x < 1.0 {
                    0.5 * x * x * x * x
                } else {
                    let y = x - 2.0;
                    -0.5 * (y * y * y * y - 2.0)
                }
            }
            Self::InSine => -(t * FRAC_PI_2).cos() + 1.0,
            Self::OutSine => (t * FRAC_PI_2).sin(),
            Self::InOutSine => -0.5 * ((PI * t).cos() - 1.0),
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * (t - 1.0))
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    -(2f64.powf(-10.0 * t)) + 1.0
                }
            }
            Self::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x = t * 2.0;
                if x < 1.0 {
                    0.5 * 2f64.powf(10.0 * (x - 1.0))
                } else {
                    0.5 * (-(2f64.powf(-10.0 * (x - 1.0))) + 2.0)
                }
            }
            Self::InCirc => -((1.0 - t * t).sqrt() - 1.0),
            Self::OutCirc => {
                let x = t - 1.0;
                (1.0 - x * x).sqrt()
            }
            Self::InOutCirc => {
                let x = t * 2.0;
                if x < 1.0 {
                    -0.5 * ((1.0 - x * x).sqrt() - 1.0)
                } else {
                    let y = x - 2.0;
                    0.5 * ((1.0 - y * y).sqrt() + 1.0)
                }
            }
            Self::InElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x = t - 1.0;
                -(2f64.powf(10.0 * x) * ((x - 0.075) * TAU / 0.3).sin())
            }
            Self::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2f64.powf(-10.0 * t) * ((t - 0.075) * TAU / 0.3).sin() + 1.0
            }
            Self::InOutElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x = t * 2.0 - 1.0;
                if x < 0.0 {
                    -0.5 * (2f64.powf(10.0 * x) * ((x - 0.1125) * TAU / 0.45).sin())
                } else {
                    2f64.powf(-10.0 * x) * ((x - 0.1125) * TAU / 0.45).sin() * 0.5 + 1.0
                }
            }
            Self::InBack => t * t * ((BACK_S + 1.0) * t - BACK_S),
            Self::OutBack => {
                let x = t - 1.0;
                x * x * ((BACK_S + 1.0) * x + BACK_S) + 1.0
            }
            Self::InOutBack => {
                let x = t * 2.0;
                if x < 1.0 {
                    0.5 * (x * x * ((BACK_S2 + 1.0) * x - BACK_S2))
                } else {
                    let y = x - 2.0;
                    0.5 * (y * y * ((BACK_S2 + 1.0) * y + BACK_S2) + 2.0)
                }
            }
            Self::InBounce => 1.0 - out_bounce(1.0 - t),
            Self::OutBounce => out_bounce(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - out_bounce(1.0 - t * 2.0)) * 0.5
                } else {
                    out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
                }
            }
        }
    }
}

fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let x = t - 1.5 / 2.75;
        7.5625 * x * x + 0.75
    } else if t < 2.5 / 2.75 {
        let x = t - 2.25 / 2.75;
        7.5625 * x * x + 0.9375
    } else {
        let x = t - 2.625 / 2.75;
        7.5625 * x * x + 0.984_375
    }
}

/// Sanitizes a caller-supplied animation phase into `[0, 1]`.
///
/// Non-finite phases fall back to `1.0` (fully drawn).
#[must_use]
pub fn clamp_phase(phase: f64) -> f64 {
    if !phase.is_finite() {
        warn!(phase, "non-finite animation phase, drawing fully");
        return 1.0;
    }
    if !(0.0..=1.0).contains(&phase) {
        warn!(phase, "animation phase outside [0, 1], clamping");
    }
    phase.clamp(0.0, 1.0)
}

/// Independent X/Y animation progress; chart renderers consume `combined()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseXY {
    pub x: f64,
    pub y: f64,
}

impl PhaseXY {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn combined(self) -> f64 {
        self.x * self.y
    }
}

impl Default for PhaseXY {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Time-based tween description; the host drives the clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tween {
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Eased phase after `elapsed_ms` since the tween was started.
    #[must_use]
    pub fn phase_at(self, elapsed_ms: u64) -> f64 {
        let running = elapsed_ms.saturating_sub(self.delay_ms);
        if self.duration_ms == 0 {
            return if elapsed_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        let t = (running as f64 / self.duration_ms as f64).min(1.0);
        self.easing.apply(t)
    }

    #[must_use]
    pub fn is_finished(self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.delay_ms.saturating_add(self.duration_ms)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(800, Easing::OutCubic)
    }
}
