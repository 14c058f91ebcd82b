//! Preset playback.
//!
//! For hosts without a motion engine of their own: eases each transform
//! channel toward whatever the preset says the current state should look
//! like.

use crate::animation::{Animation, Easing};
use crate::interaction::InteractionState;
use crate::preset::{AnimationPreset, AnimationTarget};

/// Resolved transform values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Horizontal translation (px).
    pub x: f32,
    /// Vertical translation (px).
    pub y: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Rotation about the z axis (deg).
    pub rotate: f32,
    /// Rotation about the y axis (deg).
    pub rotate_y: f32,
    /// Opacity (0-1).
    pub opacity: f32,
}

impl Transform {
    /// Untransformed, fully opaque.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_y: 0.0,
        opacity: 1.0,
    };

    /// Applies every field set in `target`.
    #[must_use]
    pub fn with_target(self, target: &AnimationTarget) -> Self {
        Self {
            x: target.x.unwrap_or(self.x),
            y: target.y.unwrap_or(self.y),
            scale: target.scale.unwrap_or(self.scale),
            rotate: target.rotate.unwrap_or(self.rotate),
            rotate_y: target.rotate_y.unwrap_or(self.rotate_y),
            opacity: target.opacity.unwrap_or(self.opacity),
        }
    }

    /// Formats the transform part as a CSS `transform` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg) rotateY({}deg)",
            self.x, self.y, self.scale, self.rotate, self.rotate_y
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::REST
    }
}

/// Drives one element's transform toward its preset.
#[derive(Debug, Clone)]
pub struct MotionDriver {
    x: Animation,
    y: Animation,
    scale: Animation,
    rotate: Animation,
    rotate_y: Animation,
    opacity: Animation,
}

impl MotionDriver {
    /// Creates a driver resting at `initial`.
    #[must_use]
    pub fn new(initial: Transform) -> Self {
        let channel = |v| Animation::new(v, Easing::EaseOut);
        Self {
            x: channel(initial.x),
            y: channel(initial.y),
            scale: channel(initial.scale),
            rotate: channel(initial.rotate),
            rotate_y: channel(initial.rotate_y),
            opacity: channel(initial.opacity),
        }
    }

    /// Resolves the destination for `state`.
    ///
    /// Precedence, lowest first: rest, `animate`, hover, tap.
    #[must_use]
    pub fn destination(preset: &AnimationPreset, state: &InteractionState) -> Transform {
        let mut target = AnimationTarget::EMPTY;
        if let Some(animate) = &preset.animate {
            target = target.overlay(animate);
        }
        if state.hovered {
            if let Some(hover) = &preset.while_hover {
                target = target.overlay(hover);
            }
        }
        if state.pressed {
            if let Some(tap) = &preset.while_tap {
                target = target.overlay(tap);
            }
        }
        Transform::REST.with_target(&target)
    }

    /// Retargets every channel. A missing preset (disabled element) eases
    /// back to rest.
    pub fn apply(&mut self, preset: Option<&AnimationPreset>, state: &InteractionState) {
        let (dest, duration, easing) = match preset {
            Some(p) => (
                Self::destination(p, state),
                p.transition.duration,
                p.transition.easing,
            ),
            None => (Transform::REST, Animation::DEFAULT_DURATION, Easing::EaseOut),
        };

        self.x.retarget(dest.x, duration, easing);
        self.y.retarget(dest.y, duration, easing);
        self.scale.retarget(dest.scale, duration, easing);
        self.rotate.retarget(dest.rotate, duration, easing);
        self.rotate_y.retarget(dest.rotate_y, duration, easing);
        self.opacity.retarget(dest.opacity, duration, easing);
    }

    /// Advances every channel by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for channel in [
            &mut self.x,
            &mut self.y,
            &mut self.scale,
            &mut self.rotate,
            &mut self.rotate_y,
            &mut self.opacity,
        ] {
            channel.update(dt);
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn value(&self) -> Transform {
        Transform {
            x: self.x.value(),
            y: self.y.value(),
            scale: self.scale.value(),
            rotate: self.rotate.value(),
            rotate_y: self.rotate_y.value(),
            opacity: self.opacity.value(),
        }
    }

    /// Returns true once every channel has settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        [
            &self.x,
            &self.y,
            &self.scale,
            &self.rotate,
            &self.rotate_y,
            &self.opacity,
        ]
        .iter()
        .all(|c| c.is_complete())
    }
}

impl Default for MotionDriver {
    fn default() -> Self {
        Self::new(Transform::REST)
    }
}
