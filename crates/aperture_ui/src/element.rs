//! Interactive elements.
//!
//! Couples a tracker with an [`ElementStyle`] and turns the pair into the
//! [`Appearance`] the host applies: an animation preset chosen by
//! modality, the cursor, dimming and the press shadow.

use std::time::Duration;

use crate::config::InteractionConfig;
use crate::input::{InteractionEvent, Modality};
use crate::interaction::{InteractionState, InteractionTracker};
use crate::preset::{AnimationPreset, ElementStyle, Transition};
use crate::style::{BoxShadow, Cursor, DISABLED_OPACITY};
use crate::viewport::ModalityHandle;

/// Everything the host needs to render an element this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Animation preset; `None` for disabled elements.
    pub preset: Option<AnimationPreset>,
    /// Cursor over the element.
    pub cursor: Cursor,
    /// Element opacity.
    pub opacity: f32,
    /// Shadow to draw, if any.
    pub shadow: Option<BoxShadow>,
}

impl Appearance {
    /// Dimmed, non-interactive look.
    pub const DISABLED: Self = Self {
        preset: None,
        cursor: Cursor::NotAllowed,
        opacity: DISABLED_OPACITY,
        shadow: None,
    };

    /// Returns true if the element is rendered as disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.cursor == Cursor::NotAllowed
    }
}

/// A card, button or tile that reacts to hover and press.
#[derive(Debug)]
pub struct InteractiveElement {
    tracker: InteractionTracker,
    style: ElementStyle,
    disabled: bool,
    pointer_transition: Transition,
    touch_transition: Transition,
}

impl InteractiveElement {
    /// Creates an enabled element.
    #[must_use]
    pub fn new(modality: ModalityHandle, style: ElementStyle, config: &InteractionConfig) -> Self {
        Self {
            tracker: InteractionTracker::new(modality, config),
            style,
            disabled: false,
            pointer_transition: config.pointer_transition(),
            touch_transition: config.touch_transition(),
        }
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Enables or disables the element.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Returns true if the element is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the element style.
    #[must_use]
    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    /// Returns the interaction tracker.
    #[must_use]
    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    /// Returns the current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.tracker.state()
    }

    /// Forwards an event to the tracker.
    pub fn handle(&mut self, event: InteractionEvent, now: Duration) -> bool {
        self.tracker.handle(event, now)
    }

    /// Applies delayed transitions due at `now`.
    pub fn advance(&mut self, now: Duration) -> bool {
        self.tracker.advance(now)
    }

    /// Clears interaction state (unmount).
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Resolves the appearance for the current modality and state.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        if self.disabled {
            return Appearance::DISABLED;
        }

        let state = self.tracker.state();
        match self.tracker.modality() {
            Modality::Pointer => Appearance {
                preset: Some(AnimationPreset {
                    while_hover: Some(self.style.hover_animation),
                    while_tap: Some(self.style.tap_animation),
                    animate: None,
                    transition: self.pointer_transition,
                }),
                cursor: Cursor::Pointer,
                opacity: 1.0,
                shadow: None,
            },
            Modality::Touch => Appearance {
                preset: Some(AnimationPreset {
                    while_hover: None,
                    while_tap: Some(self.style.tap_animation),
                    // Replays the hover destination for as long as the finger is down
                    animate: state.pressed.then_some(self.style.hover_animation),
                    transition: self.touch_transition,
                }),
                cursor: Cursor::Pointer,
                opacity: 1.0,
                shadow: state.pressed.then_some(BoxShadow::PRESS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::AnimationTarget;

    fn element(modality: Modality) -> InteractiveElement {
        InteractiveElement::new(
            ModalityHandle::fixed(modality),
            ElementStyle::CARD,
            &InteractionConfig::default(),
        )
    }

    #[test]
    fn test_pointer_preset() {
        let mut el = element(Modality::Pointer);
        el.handle(InteractionEvent::PointerEnter, Duration::ZERO);

        let preset = el.appearance().preset.unwrap();
        assert_eq!(preset.while_hover, Some(AnimationTarget::EMPTY.y(-8.0)));
        assert_eq!(preset.while_tap, Some(AnimationTarget::EMPTY.scale(0.95)));
        assert_eq!(preset.animate, None);
        assert!((preset.transition.duration - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_touch_preset_tracks_press() {
        let mut el = element(Modality::Touch);

        let idle = el.appearance();
        assert_eq!(idle.preset.unwrap().animate, None);
        assert_eq!(idle.shadow, None);

        el.handle(InteractionEvent::TouchStart, Duration::ZERO);
        let pressed = el.appearance();
        let preset = pressed.preset.unwrap();
        assert_eq!(preset.while_hover, None);
        assert_eq!(preset.animate, Some(AnimationTarget::EMPTY.y(-8.0)));
        assert!((preset.transition.duration - 0.2).abs() < f32::EPSILON);
        assert_eq!(pressed.shadow, Some(BoxShadow::PRESS));
    }

    #[test]
    fn test_disabled_has_no_preset() {
        for modality in [Modality::Pointer, Modality::Touch] {
            let mut el = element(modality).with_disabled(true);
            el.handle(InteractionEvent::PointerEnter, Duration::ZERO);
            el.handle(InteractionEvent::TouchStart, Duration::ZERO);
            el.advance(Duration::from_millis(150));

            let look = el.appearance();
            assert_eq!(look, Appearance::DISABLED);
            assert!(look.is_disabled());
        }
    }
}
