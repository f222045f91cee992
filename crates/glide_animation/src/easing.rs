//! Easing functions for animations
//!
//! Every curve maps a normalized time value in `[0, 1]` to a progress value
//! with `f(0) == 0` and `f(1) == 1` exactly. Inputs outside `[0, 1]` are not
//! clamped; the result for them is whatever the formula yields.

use crate::error::EasingParseError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Function reference stored by an [`Animation`](crate::Animation)
pub type EasingFn = fn(f32) -> f32;

/// y = x
pub fn linear(x: f32) -> f32 {
    x
}

/// y = 1 - cos(x * PI / 2)
pub fn ease_in_sine(x: f32) -> f32 {
    (1.0 - (x as f64 * PI / 2.0).cos()) as f32
}

/// y = sin(x * PI / 2)
pub fn ease_out_sine(x: f32) -> f32 {
    (x as f64 * PI / 2.0).sin() as f32
}

/// y = -(cos(PI * x) - 1) / 2
pub fn ease_in_out_sine(x: f32) -> f32 {
    // Rearranged so that f(0) is +0.0 rather than -0.0
    ((1.0 - (PI * x as f64).cos()) / 2.0) as f32
}

pub fn ease_in_cubic(x: f32) -> f32 {
    x * x * x
}

pub fn ease_out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

pub fn ease_in_quint(x: f32) -> f32 {
    x * x * x * x * x
}

pub fn ease_out_quint(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(5)
}

pub fn ease_in_out_quint(x: f32) -> f32 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

/// Named easing curve
///
/// Serialized with the camelCase curve names (`"easeInOutCubic"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl Easing {
    /// Every curve, in table order
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(self, t: f32) -> f32 {
        (self.as_fn())(t)
    }

    /// The plain function backing this curve
    pub fn as_fn(self) -> EasingFn {
        match self {
            Easing::Linear => linear,
            Easing::EaseInSine => ease_in_sine,
            Easing::EaseOutSine => ease_out_sine,
            Easing::EaseInOutSine => ease_in_out_sine,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
            Easing::EaseInQuint => ease_in_quint,
            Easing::EaseOutQuint => ease_out_quint,
            Easing::EaseInOutQuint => ease_in_out_quint,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInSine => "easeInSine",
            Easing::EaseOutSine => "easeOutSine",
            Easing::EaseInOutSine => "easeInOutSine",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `easeInOutCubic`, `ease_in_out_cubic` and `ease-in-out-cubic`,
/// ignoring case.
impl FromStr for Easing {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Easing::ALL
            .into_iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| EasingParseError::Unknown(s.to_string()))
    }
}
