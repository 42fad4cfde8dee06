//! One-shot property tweens: "reach value V over duration D with easing E".
//!
//! A [`Tween`] is stateless; it is sampled at absolute times by whoever owns the clock, usually a
//! host render loop. Sampling before the delay elapses holds the start value, sampling past the
//! end holds the final value, so a tween can be left in place after it finishes.

use crate::easing::{Easing, EasingFunction};
use crate::interpolation::Lerp;

/// Animates a single value from a start to an end over a fixed duration.
///
/// # Example
///
/// ```
/// use tally_core::easing::Easing;
/// use tally_core::tween::Tween;
///
/// let tween = Tween::new(0.0f32, 47.0)
///     .duration_seconds(3.0)
///     .easing(Easing::InOutCubic);
///
/// assert_eq!(tween.sample(0.0), 0.0);
/// assert_eq!(tween.sample(1.5), 23.5);
/// assert_eq!(tween.sample(10.0), 47.0);
/// ```
#[derive(Clone, Debug)]
pub struct Tween<T: Lerp + Clone> {
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    /// Creates a tween from `from` to `to` with a one-second duration, no delay and linear
    /// easing.
    pub fn new(from: T, to: T) -> Self {
        Self {
            from,
            to,
            duration: 1.0,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    /// Configures the duration, in seconds.
    pub fn duration_seconds(mut self, duration_seconds: f32) -> Self {
        self.duration = duration_seconds;
        self
    }

    /// Configures the delay, in seconds, before the animation starts.
    ///
    /// Samples taken during the delay report [`TweenPosition::NotStarted`] and hold the start
    /// value. Useful for staggering several tweens against a shared clock.
    pub fn delay_seconds(mut self, delay_seconds: f32) -> Self {
        self.delay = delay_seconds;
        self
    }

    /// Configures the easing applied over the active part of the tween.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Computes where `time` falls relative to this tween's delay and duration.
    ///
    /// A zero-length tween is [`Ended`](TweenPosition::Ended) as soon as its delay elapses, which
    /// keeps the normalized position free of division by zero.
    pub fn position(&self, time: f32) -> TweenPosition {
        let time = time - self.delay;
        if time < 0.0 {
            TweenPosition::NotStarted
        } else if time >= self.duration {
            TweenPosition::Ended
        } else {
            TweenPosition::Active(time / self.duration)
        }
    }

    /// Samples the tweened value at `time`.
    pub fn sample(&self, time: f32) -> T {
        let x = match self.position(time) {
            TweenPosition::NotStarted => 0.0,
            TweenPosition::Active(x) => self.easing.calc(x),
            TweenPosition::Ended => 1.0,
        };
        self.from.lerp(&self.to, x)
    }

    /// Returns whether the tween has reached its final value at `time`.
    pub fn is_finished(&self, time: f32) -> bool {
        matches!(self.position(time), TweenPosition::Ended)
    }
}

/// Where a given time falls on a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TweenPosition {
    /// The time is within the configured delay (or negative); the value holds at the start.
    NotStarted,
    /// The tween is in progress; carries the normalized position from `0.0` to `1.0`, before
    /// easing is applied.
    Active(f32),
    /// The time is at or past `delay + duration`; the value holds at the end.
    Ended,
}
