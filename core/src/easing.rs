//! Contains the [`Easing`] enum with the standard easing types used for animations, and an
//! [`EasingFunction`] trait for defining custom easings.

use dyn_clone::{clone_trait_object, DynClone};
use lazy_static::lazy_static;
use lyon_geom::{CubicBezierSegment, Point};
use std::f32::consts::PI;
use std::fmt::Debug;

/// Provides an easing function, AKA animation timing function, for non-linear interpolation of
/// values.
///
/// Easing functions and [`Lerp`](crate::interpolation::Lerp) are complementary: `Lerp` computes
/// the value of an animated property at a normalized position `x`, while `EasingFunction` decides
/// which `x` the lerp is evaluated at. Linear interpolation is the identity easing.
pub trait EasingFunction: Debug + DynClone {
    /// Computes the `y` value along the curve for a given `x` position.
    ///
    /// Expects `x` to be normalized (from 0 to 1) and returns a normalized y-value which is
    /// typically between 0 and 1, but may be outside that range (e.g. [Easing::OutBack]).
    fn calc(&self, x: f32) -> f32;
}

clone_trait_object!(EasingFunction);

/// Specifies a standard or custom [`EasingFunction`].
///
/// The CSS curves (`Ease`, `In`, `Out`, `InOut`) are evaluated as their defining cubic beziers;
/// the power, back and elastic curves use their closed forms, which are exact and cheaper than a
/// bezier approximation. Anything else can be supplied via [`Custom`](Easing::Custom), e.g. with
/// an ad-hoc [`CubicBezierEasing`].
#[derive(Clone, Debug, Default)]
pub enum Easing {
    /// Straight-line interpolation; no easing.
    #[default]
    Linear,
    /// Curve equivalent to CSS
    /// [`ease`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease).
    Ease,
    /// Curve equivalent to CSS
    /// [`ease-in`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-in).
    In,
    /// Curve equivalent to CSS
    /// [`ease-out`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-out).
    Out,
    /// Curve equivalent to CSS
    /// [`ease-in-out`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-in-out).
    InOut,
    /// Quadratic (`^2`) easing that starts slowly and ends quickly.
    InQuad,
    /// Quadratic (`^2`) easing that starts quickly and ends slowly.
    OutQuad,
    /// Quadratic (`^2`) easing that starts and ends slowly.
    InOutQuad,
    /// Cubic (`^3`) easing that starts slowly and ends quickly.
    InCubic,
    /// Cubic (`^3`) easing that starts quickly and ends slowly.
    OutCubic,
    /// Cubic (`^3`) easing that starts and ends slowly. The workhorse curve for presentation
    /// moves.
    InOutCubic,
    /// Quartic (`^4`) easing that starts slowly and ends quickly.
    InQuart,
    /// Quartic (`^4`) easing that starts quickly and ends slowly.
    OutQuart,
    /// Quartic (`^4`) easing that starts and ends slowly.
    InOutQuart,
    /// Moves slightly backward (negative) before accelerating forward.
    InBack,
    /// Overshoots the terminal value (goes above 1.0) before settling back at the final value.
    OutBack,
    /// Overshoots the terminal value with a decaying oscillation, like a plucked spring.
    OutElastic,
    /// User-defined easing, such as an ad-hoc [CubicBezierEasing].
    Custom(Box<dyn EasingFunction>),
}

impl EasingFunction for Easing {
    fn calc(&self, x: f32) -> f32 {
        let t = x.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => EASE_WEB.calc(t),
            Self::In => EASE_IN.calc(t),
            Self::Out => EASE_OUT.calc(t),
            Self::InOut => EASE_IN_OUT.calc(t),
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => in_out(t, 2),
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => in_out(t, 3),
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => in_out(t, 4),
            Self::InBack => (BACK_C1 + 1.0) * t * t * t - BACK_C1 * t * t,
            Self::OutBack => {
                1.0 + (BACK_C1 + 1.0) * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0) * (t - 1.0)
            }
            Self::OutElastic => out_elastic(t),
            Self::Custom(custom) => custom.calc(t),
        }
    }
}

const BACK_C1: f32 = 1.70158;

/// Symmetric "in-out" power curve of the given exponent.
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        (2.0f32).powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

fn out_elastic(t: f32) -> f32 {
    const C4: f32 = (2.0 * PI) / 3.0;
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (2.0f32).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

lazy_static! {
    static ref EASE_WEB: CubicBezierEasing = CubicBezierEasing::new(0.25, 0.1, 0.25, 1.0);
    static ref EASE_IN: CubicBezierEasing = CubicBezierEasing::new(0.42, 0.0, 1.0, 1.0);
    static ref EASE_OUT: CubicBezierEasing = CubicBezierEasing::new(0.0, 0.0, 0.58, 1.0);
    static ref EASE_IN_OUT: CubicBezierEasing = CubicBezierEasing::new(0.42, 0.0, 0.58, 1.0);
}

/// Easing function defined by a cubic bezier curve with the start and end points fixed at `(0, 0)`
/// and `(1, 1)`, i.e. only the control points are specified.
///
/// Instances of this may be used in [Easing::Custom] when the standard easings do not suffice.
#[derive(Clone, Debug)]
pub struct CubicBezierEasing {
    segment: CubicBezierSegment<f32>,
}

impl CubicBezierEasing {
    /// Creates a new [CubicBezierEasing] with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// To experiment with different curves, see: <https://cubic-bezier.com/>
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            segment: CubicBezierSegment {
                from: Point::new(0.0, 0.0),
                to: Point::new(1.0, 1.0),
                ctrl1: Point::new(x1, y1),
                ctrl2: Point::new(x2, y2),
            },
        }
    }
}

impl EasingFunction for CubicBezierEasing {
    fn calc(&self, x: f32) -> f32 {
        self.segment.y(x)
    }
}
