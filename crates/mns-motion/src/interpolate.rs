//! Blending between two values at eased progress `t`.
//!
//! `t` is not clamped: back and elastic curves push it past 1 and the blend
//! extrapolates accordingly.

use super::types::{AnimatableProperty, StyleFrame};

pub trait Interpolate: Sized {
    /// `self` at `t = 0`, `to` at `t = 1`.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * f64::from(t)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for StyleFrame {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        AnimatableProperty::ALL.into_iter().fold(*self, |frame, property| {
            frame.with(property, self.get(property).interpolate(&to.get(property), t))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_blend() {
        assert_eq!(20.0f64.interpolate(&40.0, 0.0), 20.0);
        assert_eq!(20.0f64.interpolate(&40.0, 0.25), 25.0);
        assert_eq!(20.0f64.interpolate(&40.0, 1.0), 40.0);
        assert_eq!(1.0f32.interpolate(&0.0, 0.5), 0.5);
    }

    #[test]
    fn test_overshoot_runs_past_target() {
        let past = 0.0f64.interpolate(&50.0, 1.2);
        assert!((past - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_frame_blends_every_property() {
        let hidden = StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 40.0).scale(0.9);
        let mid = hidden.interpolate(&StyleFrame::IDENTITY, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.translate_y - 20.0).abs() < 1e-9);
        assert!((mid.scale - 0.95).abs() < 1e-9);
        assert_eq!(mid.translate_x, 0.0);
    }
}
