//! Input events for element interaction.
//!
//! Hosts translate their native pointer/touch/focus callbacks into
//! [`InteractionEvent`]s and feed them to a tracker.

use std::fmt;

/// Input modality of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modality {
    /// Mouse or trackpad: real hover exists.
    #[default]
    Pointer,
    /// Touch screen: hover is simulated from presses.
    Touch,
}

impl Modality {
    /// Derives the modality from a viewport width.
    ///
    /// Widths strictly below `breakpoint` are treated as touch.
    #[must_use]
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Touch
        } else {
            Self::Pointer
        }
    }

    /// Returns true for touch modality.
    #[inline]
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer => f.write_str("pointer"),
            Self::Touch => f.write_str("touch"),
        }
    }
}

/// A single interaction notification for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    /// Pointer moved over the element.
    PointerEnter,
    /// Pointer left the element.
    PointerLeave,
    /// Pointer button went down on the element.
    PointerDown,
    /// Pointer button was released.
    PointerUp,
    /// Element received keyboard focus.
    Focus,
    /// Element lost keyboard focus.
    Blur,
    /// Finger touched the element.
    TouchStart,
    /// Finger lifted.
    TouchEnd,
}

impl InteractionEvent {
    /// Returns true for enter/leave events.
    #[must_use]
    pub const fn is_hover(self) -> bool {
        matches!(self, Self::PointerEnter | Self::PointerLeave)
    }

    /// Returns true for touch events.
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert_eq!(Modality::from_width(767.0, 768.0), Modality::Touch);
        assert_eq!(Modality::from_width(768.0, 768.0), Modality::Pointer);
        assert_eq!(Modality::from_width(1920.0, 768.0), Modality::Pointer);
    }

    #[test]
    fn test_event_classes() {
        assert!(InteractionEvent::PointerLeave.is_hover());
        assert!(!InteractionEvent::PointerDown.is_hover());
        assert!(InteractionEvent::TouchEnd.is_touch());
        assert!(!InteractionEvent::Focus.is_touch());
    }
}
