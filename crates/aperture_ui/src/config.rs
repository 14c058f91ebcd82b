//! UI configuration.
//!
//! Loaded once at startup from TOML. Every section and field is optional;
//! missing values fall back to the defaults the site ships with.
//!
//! ```toml
//! [viewport]
//! mobile_breakpoint = 768.0
//!
//! [interaction]
//! hover_delay_ms = 100
//! release_delay_ms = 200
//!
//! [elements.gallery_tile]
//! hover_animation = { y = -4.0, scale = 1.05 }
//! tap_animation = { scale = 0.97 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::preset::{ElementStyle, Transition};
use crate::viewport::MOBILE_BREAKPOINT;

/// Viewport section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Widths below this are treated as touch devices.
    pub mobile_breakpoint: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

/// Interaction timings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    /// Delay between a touch press and simulated hover (ms).
    pub hover_delay_ms: u64,
    /// Delay between a touch release and clearing simulated hover (ms).
    pub release_delay_ms: u64,
    /// Transition length on pointer devices (s).
    pub pointer_transition: f32,
    /// Transition length on touch devices (s).
    pub touch_transition: f32,
}

impl InteractionConfig {
    /// Delay before simulated hover turns on.
    #[must_use]
    pub const fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.hover_delay_ms)
    }

    /// Delay before simulated hover turns off.
    #[must_use]
    pub const fn release_delay(&self) -> Duration {
        Duration::from_millis(self.release_delay_ms)
    }

    /// Transition used for pointer presets.
    #[must_use]
    pub const fn pointer_transition(&self) -> Transition {
        Transition::ease_out(self.pointer_transition)
    }

    /// Transition used for touch presets.
    #[must_use]
    pub const fn touch_transition(&self) -> Transition {
        Transition::ease_out(self.touch_transition)
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hover_delay_ms: 100,
            release_delay_ms: 200,
            pointer_transition: 0.3,
            touch_transition: 0.2,
        }
    }
}

/// Rotating showcase section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Number of faces.
    pub faces: usize,
    /// Time each face stays up (ms).
    pub interval_ms: u64,
    /// Face swap transition length (s).
    pub transition: f32,
}

impl ShowcaseConfig {
    /// Rotation interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            faces: 4,
            interval_ms: 4000,
            transition: 0.8,
        }
    }
}

/// Root of the UI configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Viewport settings.
    pub viewport: ViewportConfig,
    /// Interaction timings.
    pub interaction: InteractionConfig,
    /// Showcase settings.
    pub showcase: ShowcaseConfig,
    /// Named element styles. Built-in names can be overridden.
    pub elements: BTreeMap<String, ElementStyle>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            interaction: InteractionConfig::default(),
            showcase: ShowcaseConfig::default(),
            elements: builtin_elements(),
        }
    }
}

fn builtin_elements() -> BTreeMap<String, ElementStyle> {
    [
        ("card", ElementStyle::CARD),
        ("image_card", ElementStyle::IMAGE_CARD),
        ("service_card", ElementStyle::SERVICE_CARD),
    ]
    .into_iter()
    .map(|(name, style)| (name.to_owned(), style))
    .collect()
}

impl UiConfig {
    /// Parses and validates a TOML document.
    ///
    /// Built-in element styles stay available unless the document
    /// redefines them.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let mut config: Self = toml::from_str(source)?;
        for (name, style) in builtin_elements() {
            config.elements.entry(name).or_insert(style);
        }
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), elements = config.elements.len(), "ui config loaded");
        Ok(config)
    }

    /// Looks up a named element style.
    pub fn element(&self, name: &str) -> UiResult<ElementStyle> {
        self.elements
            .get(name)
            .copied()
            .ok_or_else(|| UiError::UnknownPreset(name.to_owned()))
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> UiResult<()> {
        let breakpoint = self.viewport.mobile_breakpoint;
        if !breakpoint.is_finite() || breakpoint <= 0.0 {
            return Err(invalid(format!("mobile_breakpoint must be positive, got {breakpoint}")));
        }

        for (name, value) in [
            ("pointer_transition", self.interaction.pointer_transition),
            ("touch_transition", self.interaction.touch_transition),
            ("showcase.transition", self.showcase.transition),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be a non-negative duration, got {value}")));
            }
        }

        if self.showcase.faces == 0 {
            return Err(UiError::NoFaces);
        }
        if self.showcase.interval_ms == 0 {
            return Err(invalid("showcase.interval_ms must be non-zero".to_owned()));
        }

        for (name, style) in &self.elements {
            let bad = style
                .hover_animation
                .first_non_finite()
                .or_else(|| style.tap_animation.first_non_finite());
            if let Some(field) = bad {
                return Err(invalid(format!("elements.{name}: {field} is not finite")));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> UiError {
    tracing::warn!(%message, "rejecting ui config");
    UiError::InvalidConfig(message)
}
