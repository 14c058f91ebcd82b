//! Easing curves and animated values.
//!
//! Curves follow the CSS/Web Animations definitions so a preset played
//! here and the same preset handed to a browser land on the same frames.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// CSS `ease-out`: `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
    /// CSS `ease-in-out`: `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary cubic bezier `(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Curve used by particle bursts: a fast launch that settles softly.
    pub const BURST: Self = Self::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
            Self::Instant => 1.0,
        }
    }

    /// Returns the CSS timing-function keyword for this curve.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_owned(),
            Self::EaseOut => "ease-out".to_owned(),
            Self::EaseInOut => "ease-in-out".to_owned(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            Self::Instant => "step-start".to_owned(),
        }
    }
}

/// One axis of a unit cubic bezier with control points `a1`, `a2`.
fn bezier_axis(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
}

fn bezier_slope(a1: f32, a2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

/// Evaluates a CSS cubic bezier at progress `x`.
///
/// Solves `bx(t) = x` with Newton's method, falling back to bisection
/// when the slope flattens out.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return bezier_axis(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < EPSILON {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..48 {
        let value = bezier_axis(x1, x2, t);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }

    bezier_axis(y1, y2, t)
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.3;

    /// Creates a new animation at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value the animation is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Sets a new target with the timing of the transition that caused it.
    pub fn retarget(&mut self, target: f32, duration: f32, easing: Easing) {
        self.duration = duration;
        self.easing = easing;
        self.set_target(target);
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::EaseOut)
    }
}
