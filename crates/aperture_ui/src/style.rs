//! Styling primitives that the interaction layer emits directly.
//!
//! Only the affordances this crate decides on live here: cursor, dimming
//! and the press shadow. Everything else is the host's stylesheet.

use std::fmt;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Formats as a CSS `rgba()` value.
    #[must_use]
    pub fn css(self) -> String {
        // Channels are clamped before conversion
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Mouse cursor shown over an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Clickable.
    #[default]
    Pointer,
    /// Disabled.
    NotAllowed,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer => f.write_str("pointer"),
            Self::NotAllowed => f.write_str("not-allowed"),
        }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Horizontal offset (px).
    pub offset_x: f32,
    /// Vertical offset (px).
    pub offset_y: f32,
    /// Blur radius (px).
    pub blur: f32,
    /// Shadow color.
    pub color: Color,
}

impl BoxShadow {
    /// Lift shown under a card while a finger is on it.
    pub const PRESS: Self = Self {
        offset_x: 0.0,
        offset_y: 8.0,
        blur: 25.0,
        color: Color::rgba(0.0, 0.0, 0.0, 0.15),
    };
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.color.css()
        )
    }
}

/// Opacity applied to disabled elements.
pub const DISABLED_OPACITY: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_shadow_css() {
        assert_eq!(BoxShadow::PRESS.to_string(), "0px 8px 25px rgba(0, 0, 0, 0.15)");
    }

    #[test]
    fn test_cursor_css() {
        assert_eq!(Cursor::NotAllowed.to_string(), "not-allowed");
        assert_eq!(Cursor::default().to_string(), "pointer");
    }
}
