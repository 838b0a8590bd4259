//! Timing curves.
//!
//! Every curve maps linear progress in `0..=1` to eased progress. Curves that
//! overshoot (`OutBack`, `OutElastic`) may leave that range in the middle but
//! always start at 0 and land on 1.
//!
//! Curves parse from the names animation libraries use, so presets can be
//! written the way designers hand them over:
//!
//! ```
//! use mns_motion::easing::EasingFunction;
//!
//! let card: EasingFunction = "back.out(1.2)".parse().unwrap();
//! assert_eq!(card, EasingFunction::OutBack { overshoot: 1.2 });
//!
//! let css: EasingFunction = "ease-in-out".parse().unwrap();
//! assert!((css.evaluate(0.5) - 0.5).abs() < 1e-3);
//! ```

use std::f32::consts::{PI, TAU};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Overshoot of `easeOutBack` when none is given.
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.70158;

/// Largest exponent a power curve accepts; higher powers are already
/// indistinguishable from a jump.
pub const MAX_POWER: u32 = 16;

/// Where a `steps()` curve places its jumps, as in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepJump {
    Start,
    #[default]
    End,
    /// No jump at either end; needs at least two steps.
    None,
    Both,
}

impl StepJump {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "jump-start" | "start" => Some(Self::Start),
            "jump-end" | "end" => Some(Self::End),
            "jump-none" => Some(Self::None),
            "jump-both" => Some(Self::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    Linear,

    /// CSS `cubic-bezier(x1, y1, x2, y2)`; the keyword curves are constants
    /// of this variant.
    Bezier { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// CSS `steps(count, jump)`.
    Steps { count: u32, jump: StepJump },

    /// `1 - (1 - t)^(power + 1)`: `power1.out` is `easeOutQuad`,
    /// `power3.out` is quartic.
    PowerOut { power: u32 },

    /// Accelerates then decelerates with the same exponent.
    PowerInOut { power: u32 },

    OutExpo,

    /// Passes the target by `overshoot` and settles back.
    OutBack { overshoot: f32 },

    /// Decaying oscillation around the target.
    OutElastic { amplitude: f32, period: f32 },

    InOutSine,
}

impl Default for EasingFunction {
    /// `power1.out`, the usual library default.
    fn default() -> Self {
        Self::out_quad()
    }
}

impl EasingFunction {
    pub const EASE: Self = Self::Bezier { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 };
    pub const EASE_IN: Self = Self::Bezier { x1: 0.42, y1: 0.0, x2: 1.0, y2: 1.0 };
    pub const EASE_OUT: Self = Self::Bezier { x1: 0.0, y1: 0.0, x2: 0.58, y2: 1.0 };
    pub const EASE_IN_OUT: Self = Self::Bezier { x1: 0.42, y1: 0.0, x2: 0.58, y2: 1.0 };

    /// Control-point x values outside `0..=1` are clamped into it, as CSS
    /// would reject them.
    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::Bezier {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub const fn out_quad() -> Self {
        Self::PowerOut { power: 1 }
    }

    pub const fn out_back() -> Self {
        Self::OutBack {
            overshoot: DEFAULT_BACK_OVERSHOOT,
        }
    }

    /// Amplitude below 1 and period outside `0.1..=2` are clamped when the
    /// curve is evaluated.
    pub const fn out_elastic(amplitude: f32, period: f32) -> Self {
        Self::OutElastic { amplitude, period }
    }

    /// Eased progress at `t`, which is clamped to `0..=1` first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Self::Linear => t,
            Self::Bezier { x1, y1, x2, y2 } => {
                let s = bezier_parameter_for(x1, x2, t);
                bezier_component(y1, y2, s)
            }
            Self::Steps { count, jump } => stepped(count, jump, t),
            Self::PowerOut { power } => 1.0 - (1.0 - t).powi(exponent(power)),
            Self::PowerInOut { power } => {
                let exponent = exponent(power);
                if t < 0.5 {
                    (2.0 * t).powi(exponent) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
                }
            }
            Self::OutExpo => 1.0 - (-10.0 * t).exp2(),
            Self::OutBack { overshoot } => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
            Self::OutElastic { amplitude, period } => {
                let a = amplitude.clamp(1.0, 10.0);
                let p = period.clamp(0.1, 2.0);
                let phase = p / TAU * (1.0 / a).asin();
                a * (-10.0 * t).exp2() * ((t - phase) * TAU / p).sin() + 1.0
            }
            Self::InOutSine => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

fn exponent(power: u32) -> i32 {
    power.min(MAX_POWER) as i32 + 1
}

/// CSS step position: count completed intervals, shift by one for a jump at
/// the start, then divide by the number of jumps.
fn stepped(count: u32, jump: StepJump, t: f32) -> f32 {
    let count = count.max(1);
    let jumps = match jump {
        StepJump::Start | StepJump::End => count,
        StepJump::None => count.saturating_sub(1).max(1),
        StepJump::Both => count + 1,
    };
    let mut step = (t * count as f32).floor() as u32;
    if matches!(jump, StepJump::Start | StepJump::Both) {
        step += 1;
    }
    step.min(jumps) as f32 / jumps as f32
}

/// One coordinate of a unit cubic bezier whose end points are 0 and 1.
fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Curve parameter whose x equals `x`. The x component is monotonic for
/// control points in `0..=1`, so bisection always converges.
fn bezier_parameter_for(x1: f32, x2: f32, x: f32) -> f32 {
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut s = x;
    for _ in 0..32 {
        let found = bezier_component(x1, x2, s);
        if (found - x).abs() < 1e-6 {
            break;
        }
        if found < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EasingParseError {
    #[error("unknown easing `{0}`")]
    Unknown(String),
    #[error("easing `{name}` has a bad argument `{argument}`")]
    InvalidArgument { name: String, argument: String },
    #[error("easing `{0}` has unbalanced parentheses")]
    Unbalanced(String),
}

impl FromStr for EasingFunction {
    type Err = EasingParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (name, args) = parse_call(input)?;
        let number = |index: usize, fallback: f32| -> Result<f32, EasingParseError> {
            args.get(index).map_or(Ok(fallback), |raw| {
                raw.parse().map_err(|_| EasingParseError::InvalidArgument {
                    name: name.to_string(),
                    argument: raw.to_string(),
                })
            })
        };

        Ok(match name {
            "linear" | "none" | "power0.out" => Self::Linear,
            "ease" => Self::EASE,
            "ease-in" => Self::EASE_IN,
            "ease-out" => Self::EASE_OUT,
            "ease-in-out" => Self::EASE_IN_OUT,
            "cubic-bezier" => {
                if args.len() != 4 {
                    return Err(EasingParseError::InvalidArgument {
                        name: name.to_string(),
                        argument: args.join(", "),
                    });
                }
                Self::bezier(number(0, 0.0)?, number(1, 0.0)?, number(2, 1.0)?, number(3, 1.0)?)
            }
            "steps" => {
                let invalid = || EasingParseError::InvalidArgument {
                    name: name.to_string(),
                    argument: args.join(", "),
                };
                let count: u32 = match args.first().map(|raw| raw.parse()) {
                    Some(Ok(count)) if count >= 1 => count,
                    _ => return Err(invalid()),
                };
                let jump = match args.get(1) {
                    None => StepJump::End,
                    Some(keyword) => StepJump::parse(keyword).ok_or_else(invalid)?,
                };
                if args.len() > 2 || (jump == StepJump::None && count < 2) {
                    return Err(invalid());
                }
                Self::Steps { count, jump }
            }
            "easeOutQuad" => Self::PowerOut { power: 1 },
            "easeOutCubic" => Self::PowerOut { power: 2 },
            "easeOutQuart" => Self::PowerOut { power: 3 },
            "easeOutQuint" => Self::PowerOut { power: 4 },
            "easeInOutQuad" => Self::PowerInOut { power: 1 },
            "easeInOutCubic" => Self::PowerInOut { power: 2 },
            "easeOutExpo" | "expo.out" => Self::OutExpo,
            "easeInOutSine" | "sine.inOut" => Self::InOutSine,
            "easeOutBack" | "back.out" => Self::OutBack {
                overshoot: number(0, DEFAULT_BACK_OVERSHOOT)?,
            },
            "easeOutElastic" | "elastic.out" => Self::OutElastic {
                amplitude: number(0, 1.0)?,
                period: number(1, 0.5)?,
            },
            other => power_family(other).ok_or_else(|| EasingParseError::Unknown(input.to_string()))?,
        })
    }
}

/// `name(a, b)` into the name and its trimmed, non-empty arguments.
fn parse_call(input: &str) -> Result<(&str, Vec<&str>), EasingParseError> {
    match (input.find('('), input.ends_with(')')) {
        (None, false) if !input.contains(')') => Ok((input, Vec::new())),
        (Some(open), true) => {
            let args = input[open + 1..input.len() - 1]
                .split(',')
                .map(str::trim)
                .filter(|arg| !arg.is_empty())
                .collect();
            Ok((input[..open].trim(), args))
        }
        _ => Err(EasingParseError::Unbalanced(input.to_string())),
    }
}

/// `power{n}.out` and `power{n}.inOut`, for `n` up to [`MAX_POWER`].
fn power_family(name: &str) -> Option<EasingFunction> {
    let (digits, variant) = name.strip_prefix("power")?.split_once('.')?;
    let power = digits.parse().ok().filter(|power| *power <= MAX_POWER)?;
    match (power, variant) {
        (0, "out" | "inOut") => Some(EasingFunction::Linear),
        (power, "out") => Some(EasingFunction::PowerOut { power }),
        (power, "inOut") => Some(EasingFunction::PowerInOut { power }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn preset_curves() -> [EasingFunction; 14] {
        [
            EasingFunction::Steps { count: 4, jump: StepJump::End },
            EasingFunction::Steps { count: 3, jump: StepJump::Both },
            EasingFunction::Linear,
            EasingFunction::EASE,
            EasingFunction::out_quad(),
            EasingFunction::PowerOut { power: 2 },
            EasingFunction::PowerOut { power: 3 },
            EasingFunction::PowerInOut { power: 3 },
            EasingFunction::OutExpo,
            EasingFunction::out_back(),
            EasingFunction::OutBack { overshoot: 1.4 },
            EasingFunction::out_elastic(1.0, 0.8),
            EasingFunction::out_elastic(1.0, 0.6),
            EasingFunction::InOutSine,
        ]
    }

    #[test]
    fn test_every_preset_curve_is_anchored() {
        for curve in preset_curves() {
            assert_eq!(curve.evaluate(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.evaluate(1.0), 1.0, "{curve:?}");
            assert_eq!(curve.evaluate(-3.0), 0.0, "{curve:?}");
            assert_eq!(curve.evaluate(7.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn test_power_out_values() {
        assert!(close(EasingFunction::out_quad().evaluate(0.5), 0.75));
        assert!(close(EasingFunction::PowerOut { power: 2 }.evaluate(0.5), 0.875));
        assert!(close(EasingFunction::PowerOut { power: 3 }.evaluate(0.5), 0.9375));
    }

    #[test]
    fn test_symmetric_curves_cross_at_half() {
        for curve in [
            EasingFunction::EASE_IN_OUT,
            EasingFunction::PowerInOut { power: 3 },
            EasingFunction::InOutSine,
        ] {
            assert!(close(curve.evaluate(0.5), 0.5), "{curve:?}");
            assert!(close(curve.evaluate(0.2) + curve.evaluate(0.8), 1.0), "{curve:?}");
        }
    }

    #[test]
    fn test_ease_keyword_is_front_loaded() {
        assert!(EasingFunction::EASE.evaluate(0.5) > 0.75);
        assert!(EasingFunction::EASE_IN.evaluate(0.5) < 0.5);
        assert!(EasingFunction::EASE_OUT.evaluate(0.5) > 0.5);
    }

    #[test]
    fn test_back_passes_target_before_landing() {
        let curve = EasingFunction::OutBack { overshoot: 1.2 };
        let peak = (1..100).map(|i| curve.evaluate(i as f32 / 100.0)).fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "peak {peak}");
    }

    #[test]
    fn test_elastic_swings_around_target() {
        let curve = EasingFunction::out_elastic(1.0, 0.3);
        let samples: Vec<f32> = (1..100).map(|i| curve.evaluate(i as f32 / 100.0)).collect();
        assert!(samples.iter().any(|v| *v > 1.0));
        assert!(samples.iter().any(|v| *v < 1.0));
    }

    #[test]
    fn test_out_of_range_bezier_points_clamp() {
        assert_eq!(
            EasingFunction::bezier(-0.5, 0.0, 1.5, 1.0),
            EasingFunction::Bezier { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 }
        );
    }

    #[test]
    fn test_library_names_parse() {
        let cases = [
            ("power2.out", EasingFunction::PowerOut { power: 2 }),
            ("power3.out", EasingFunction::PowerOut { power: 3 }),
            ("power3.inOut", EasingFunction::PowerInOut { power: 3 }),
            ("power0.out", EasingFunction::Linear),
            ("easeOutQuad", EasingFunction::out_quad()),
            ("easeOutExpo", EasingFunction::OutExpo),
            ("easeInOutSine", EasingFunction::InOutSine),
            ("easeOutBack", EasingFunction::out_back()),
            ("back.out(1.2)", EasingFunction::OutBack { overshoot: 1.2 }),
            ("easeOutElastic(1, .8)", EasingFunction::out_elastic(1.0, 0.8)),
            ("ease-in-out", EasingFunction::EASE_IN_OUT),
            ("cubic-bezier(0.4, 0, 0.2, 1)", EasingFunction::bezier(0.4, 0.0, 0.2, 1.0)),
        ];
        for (name, expected) in cases {
            assert_eq!(name.parse::<EasingFunction>(), Ok(expected), "{name}");
        }
    }

    #[test]
    fn test_bad_names_are_rejected() {
        assert!(matches!(
            "easeOutWobble".parse::<EasingFunction>(),
            Err(EasingParseError::Unknown(_))
        ));
        assert!(matches!(
            "back.out(lots)".parse::<EasingFunction>(),
            Err(EasingParseError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "cubic-bezier(0.4, 0)".parse::<EasingFunction>(),
            Err(EasingParseError::InvalidArgument { .. })
        ));
        assert!(matches!(
            "easeOutElastic(1, .8".parse::<EasingFunction>(),
            Err(EasingParseError::Unbalanced(_))
        ));
    }

    #[test]
    fn test_steps_follow_css_jump_positions() {
        let end = EasingFunction::Steps { count: 4, jump: StepJump::End };
        assert_eq!(end.evaluate(0.2), 0.0);
        assert_eq!(end.evaluate(0.25), 0.25);
        assert_eq!(end.evaluate(0.99), 0.75);

        let start = EasingFunction::Steps { count: 4, jump: StepJump::Start };
        assert_eq!(start.evaluate(0.1), 0.25);
        assert_eq!(start.evaluate(0.8), 1.0);

        let none = EasingFunction::Steps { count: 3, jump: StepJump::None };
        assert_eq!(none.evaluate(0.2), 0.0);
        assert_eq!(none.evaluate(0.5), 0.5);
        assert_eq!(none.evaluate(0.9), 1.0);

        let both = EasingFunction::Steps { count: 3, jump: StepJump::Both };
        assert_eq!(both.evaluate(0.1), 0.25);
        assert_eq!(both.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_steps_parse() {
        assert_eq!(
            "steps(4, end)".parse::<EasingFunction>(),
            Ok(EasingFunction::Steps { count: 4, jump: StepJump::End })
        );
        assert_eq!(
            "steps(5)".parse::<EasingFunction>(),
            Ok(EasingFunction::Steps { count: 5, jump: StepJump::End })
        );
        assert_eq!(
            "steps(2, jump-none)".parse::<EasingFunction>(),
            Ok(EasingFunction::Steps { count: 2, jump: StepJump::None })
        );
        for bad in ["steps(0)", "steps(1, jump-none)", "steps(3, sideways)", "steps()", "steps(2, end, 4)"] {
            assert!(
                matches!(bad.parse::<EasingFunction>(), Err(EasingParseError::InvalidArgument { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_huge_powers_never_overflow() {
        assert!(matches!(
            "power2147483647.out".parse::<EasingFunction>(),
            Err(EasingParseError::Unknown(_))
        ));
        assert_eq!(
            "power16.inOut".parse::<EasingFunction>(),
            Ok(EasingFunction::PowerInOut { power: MAX_POWER })
        );

        for curve in [
            EasingFunction::PowerOut { power: u32::MAX },
            EasingFunction::PowerInOut { power: u32::MAX },
        ] {
            let mid = curve.evaluate(0.5);
            assert!(mid.is_finite() && (0.0..=1.0).contains(&mid), "{curve:?} gave {mid}");
        }
    }
}
