// extensions/lerp.rs
//
// Linear interpolation for the value types frame interpolations drive.

use glam::{Vec2, Vec3, Vec4};

use crate::api::types::Color;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Values that can be linearly interpolated.
///
/// `t` is not clamped: values outside [0, 1] extrapolate along the same line.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        lerp(self, to, t)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec2::lerp(self, to, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec4::lerp(self, to, t)
    }
}

/// Per channel, alpha included.
impl Lerp for Color {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        Color {
            r: lerp(self.r, to.r, t),
            g: lerp(self.g, to.g, t),
            b: lerp(self.b, to.b, t),
            a: lerp(self.a, to.a, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lerp() {
        assert_eq!(lerp(100.0, 200.0, 0.5), 150.0);
        assert_eq!(0.0_f32.lerp(10.0, 1.0), 10.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(0.0_f32.lerp(10.0, 1.5), 15.0);
        assert_eq!(0.0_f32.lerp(10.0, -0.5), -5.0);
    }

    #[test]
    fn vector_lerp_hits_both_ends() {
        let to2 = Vec2::new(100.0, -50.0);
        assert_eq!(Lerp::lerp(Vec2::ZERO, to2, 0.5), Vec2::new(50.0, -25.0));
        assert_eq!(Lerp::lerp(Vec2::ZERO, to2, 1.0), to2);

        let from3 = Vec3::new(1.0, 2.0, 3.0);
        let to3 = Vec3::new(3.0, 2.0, -1.0);
        assert_eq!(Lerp::lerp(from3, to3, 0.0), from3);
        assert_eq!(Lerp::lerp(from3, to3, 0.5), Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(Lerp::lerp(from3, to3, 1.0), to3);

        let to4 = Vec4::new(0.5, 0.25, 1.0, 0.0);
        assert_eq!(Lerp::lerp(Vec4::ONE, to4, 1.0), to4);
        assert_eq!(Lerp::lerp(Vec4::ZERO, to4, 0.5), Vec4::new(0.25, 0.125, 0.5, 0.0));
    }

    #[test]
    fn color_channels_interpolate_independently() {
        let from = Color::rgba(0.0, 1.0, 0.5, 0.0);
        let to = Color::rgba(1.0, 0.0, 0.5, 1.0);
        let mid = from.lerp(to, 0.25);
        assert_eq!(mid, Color::rgba(0.25, 0.75, 0.5, 0.25));
        assert_eq!(from.lerp(to, 1.0), to);
    }
}
