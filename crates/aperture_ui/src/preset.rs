//! Declarative animation presets.
//!
//! A preset names *where* an element should animate to in each
//! interaction state; a motion engine (the browser, or [`crate::motion`])
//! decides how to get there.

use serde::Deserialize;

use crate::animation::Easing;

/// A set of transform/opacity destinations. Unset fields keep their
/// resting value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationTarget {
    /// Horizontal translation (px).
    pub x: Option<f32>,
    /// Vertical translation (px).
    pub y: Option<f32>,
    /// Uniform scale.
    pub scale: Option<f32>,
    /// Rotation about the z axis (deg).
    pub rotate: Option<f32>,
    /// Rotation about the y axis (deg).
    pub rotate_y: Option<f32>,
    /// Opacity (0-1).
    pub opacity: Option<f32>,
}

impl AnimationTarget {
    /// Target with no fields set.
    pub const EMPTY: Self = Self {
        x: None,
        y: None,
        scale: None,
        rotate: None,
        rotate_y: None,
        opacity: None,
    };

    /// Sets the horizontal translation.
    #[must_use]
    pub const fn x(mut self, v: f32) -> Self {
        self.x = Some(v);
        self
    }

    /// Sets the vertical translation.
    #[must_use]
    pub const fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }

    /// Sets the scale.
    #[must_use]
    pub const fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    /// Sets the z rotation.
    #[must_use]
    pub const fn rotate(mut self, v: f32) -> Self {
        self.rotate = Some(v);
        self
    }

    /// Sets the y rotation.
    #[must_use]
    pub const fn rotate_y(mut self, v: f32) -> Self {
        self.rotate_y = Some(v);
        self
    }

    /// Sets the opacity.
    #[must_use]
    pub const fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns `self` with every field set in `top` overridden.
    #[must_use]
    pub fn overlay(self, top: &Self) -> Self {
        Self {
            x: top.x.or(self.x),
            y: top.y.or(self.y),
            scale: top.scale.or(self.scale),
            rotate: top.rotate.or(self.rotate),
            rotate_y: top.rotate_y.or(self.rotate_y),
            opacity: top.opacity.or(self.opacity),
        }
    }

    /// Returns the name of the first field holding NaN or infinity.
    pub(crate) fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("rotate", self.rotate),
            ("rotate_y", self.rotate_y),
            ("opacity", self.opacity),
        ]
        .into_iter()
        .find(|(_, v)| v.is_some_and(|v| !v.is_finite()))
        .map(|(name, _)| name)
    }
}

/// Timing for moving between targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Duration (seconds).
    pub duration: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl Transition {
    /// Ease-out transition of the given length.
    #[must_use]
    pub const fn ease_out(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::EaseOut,
        }
    }

    /// Ease-in-out transition of the given length.
    #[must_use]
    pub const fn ease_in_out(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::EaseInOut,
        }
    }
}

/// What an interactive element should animate to, per state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPreset {
    /// Destination while the pointer hovers.
    pub while_hover: Option<AnimationTarget>,
    /// Destination while pressed.
    pub while_tap: Option<AnimationTarget>,
    /// Destination applied unconditionally right now.
    pub animate: Option<AnimationTarget>,
    /// Timing for every destination above.
    pub transition: Transition,
}

/// Hover and tap destinations for one kind of element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementStyle {
    /// Destination while hovered.
    pub hover_animation: AnimationTarget,
    /// Destination while pressed.
    pub tap_animation: AnimationTarget,
}

impl ElementStyle {
    /// Generic card: lift on hover, shrink on tap.
    pub const CARD: Self = Self {
        hover_animation: AnimationTarget::EMPTY.y(-8.0),
        tap_animation: AnimationTarget::EMPTY.scale(0.95),
    };

    /// Portfolio image card.
    pub const IMAGE_CARD: Self = Self {
        hover_animation: AnimationTarget::EMPTY.y(-8.0).scale(1.02),
        tap_animation: AnimationTarget::EMPTY.scale(0.98),
    };

    /// Service listing card.
    pub const SERVICE_CARD: Self = Self {
        hover_animation: AnimationTarget::EMPTY.y(-8.0),
        tap_animation: AnimationTarget::EMPTY.scale(0.98),
    };
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self::CARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_prefers_top() {
        let base = AnimationTarget::EMPTY.y(-8.0).scale(1.02);
        let top = AnimationTarget::EMPTY.scale(0.98);
        let merged = base.overlay(&top);

        assert_eq!(merged.y, Some(-8.0));
        assert_eq!(merged.scale, Some(0.98));
        assert!(AnimationTarget::default().is_empty());
    }

    #[test]
    fn test_style_from_toml() {
        let style: ElementStyle = toml::from_str(
            r"
            hover_animation = { y = -4.0, rotate = 2.0 }
            ",
        )
        .unwrap();

        assert_eq!(style.hover_animation, AnimationTarget::EMPTY.y(-4.0).rotate(2.0));
        // Missing tap falls back to the card default
        assert_eq!(style.tap_animation, ElementStyle::CARD.tap_animation);
    }
}
