// extensions/easing.rs
//
// Easing curves that remap interpolation progress.
// Pure math, no frame or task state.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    /// Overshoot then settle.
    BackOut,
    /// Bouncy finish.
    BounceOut,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress. Input is clamped; output may leave
    /// [0, 1] for `BackOut`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => out(t, |t| t * t),
            Easing::QuadInOut => in_out(t, |t| t * t),

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => out(t, |t| t * t * t),
            Easing::CubicInOut => in_out(t, |t| t * t * t),

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }

            Easing::BounceOut => bounce_out(t),
        }
    }
}

/// Mirror an ease-in curve into its ease-out counterpart.
#[inline]
fn out(t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    1.0 - ease_in(1.0 - t)
}

/// Ease-in for the first half, ease-out for the second.
#[inline]
fn in_out(t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_in(2.0 * t) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t) / 2.0
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 12] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackOut,
        Easing::BounceOut,
    ];

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at 1", easing);
        }
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn in_out_is_symmetric() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 0.0001);
        let a = Easing::QuadInOut.apply(0.2);
        let b = Easing::QuadInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 0.0001);
    }

    #[test]
    fn back_out_overshoots() {
        let late = Easing::BackOut.apply(0.8);
        assert!(late > 1.0, "BackOut should overshoot, got {}", late);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::QuadIn.apply(2.0), 1.0);
        assert_eq!(Easing::QuadIn.apply(-1.0), 0.0);
    }
}
