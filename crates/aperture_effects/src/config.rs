//! Burst configuration.
//!
//! The site fires three flavours of burst. They share one emitter and
//! differ only in numbers:
//!
//! | preset        | spread (px) | duration (ms) | jitter (rad) | follow-up |
//! |---------------|-------------|---------------|--------------|-----------|
//! | `sparkle`     | 16 – 28     | 420 – 700     | 0.3          | none      |
//! | `nav_desktop` | 18 – 46     | 450 – 700     | 0            | 520 ms    |
//! | `nav_mobile`  | 16 – 42     | 420 – 660     | 0            | 500 ms    |

use std::f32::consts::TAU;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EffectsError, EffectsResult};

/// Background painted on every particle.
pub const DEFAULT_BACKGROUND: &str = "conic-gradient(from 0deg, var(--primary), var(--secondary))";

/// Stacking order for particles: above everything on the page.
pub const PARTICLE_Z_INDEX: i32 = 9999;

/// Largest travel distance or particle size a burst may use (px).
pub const MAX_EXTENT_PX: f32 = 4096.0;

/// Longest particle lifetime a burst may use (ms).
pub const MAX_DURATION_MS: f32 = 60_000.0;

/// Parameters for one particle burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurstConfig {
    /// Number of particles.
    pub count: u32,
    /// Minimum travel distance (px).
    pub spread_min: f32,
    /// Maximum travel distance (px).
    pub spread_max: f32,
    /// Particle diameter (px).
    pub size: f32,
    /// Shortest particle lifetime (ms).
    pub duration_min_ms: f32,
    /// Longest particle lifetime (ms).
    pub duration_max_ms: f32,
    /// Total width of the random offset added to each ray angle (rad).
    /// Zero gives perfectly even spokes.
    pub angle_jitter: f32,
    /// CSS background for each particle.
    pub background: String,
}

impl BurstConfig {
    /// Generic sparkle used around the site.
    #[must_use]
    pub fn sparkle() -> Self {
        Self {
            count: 16,
            spread_min: 16.0,
            spread_max: 28.0,
            size: 5.0,
            duration_min_ms: 420.0,
            duration_max_ms: 700.0,
            angle_jitter: 0.3,
            background: DEFAULT_BACKGROUND.to_owned(),
        }
    }

    /// "Book now" in the desktop navigation bar.
    #[must_use]
    pub fn nav_desktop() -> Self {
        Self {
            spread_min: 18.0,
            spread_max: 46.0,
            duration_min_ms: 450.0,
            duration_max_ms: 700.0,
            angle_jitter: 0.0,
            ..Self::sparkle()
        }
    }

    /// "Book now" in the mobile menu.
    #[must_use]
    pub fn nav_mobile() -> Self {
        Self {
            spread_min: 16.0,
            spread_max: 42.0,
            duration_min_ms: 420.0,
            duration_max_ms: 660.0,
            angle_jitter: 0.0,
            ..Self::sparkle()
        }
    }

    /// Checks ranges and magnitudes. `preset` names the burst in errors.
    pub fn validate(&self, preset: &str) -> EffectsResult<()> {
        if self.count == 0 {
            return Err(EffectsError::EmptyBurst {
                preset: preset.to_owned(),
            });
        }

        for (field, value) in [
            ("spread_min", self.spread_min),
            ("spread_max", self.spread_max),
            ("size", self.size),
            ("duration_min_ms", self.duration_min_ms),
            ("duration_max_ms", self.duration_max_ms),
            ("angle_jitter", self.angle_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(reject(EffectsError::InvalidValue {
                    preset: preset.to_owned(),
                    field,
                    value,
                }));
            }
        }

        for (field, value, max) in [
            ("spread_max", self.spread_max, MAX_EXTENT_PX),
            ("size", self.size, MAX_EXTENT_PX),
            ("duration_max_ms", self.duration_max_ms, MAX_DURATION_MS),
            ("angle_jitter", self.angle_jitter, TAU),
        ] {
            if value > max {
                return Err(reject(EffectsError::OutOfBounds {
                    preset: preset.to_owned(),
                    field,
                    value,
                    max,
                }));
            }
        }

        for (field, min, max) in [
            ("spread", self.spread_min, self.spread_max),
            ("duration", self.duration_min_ms, self.duration_max_ms),
        ] {
            if min > max {
                return Err(reject(EffectsError::InvertedRange {
                    preset: preset.to_owned(),
                    field,
                    min,
                    max,
                }));
            }
        }

        Ok(())
    }
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self::sparkle()
    }
}

/// A burst followed by a delayed action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitConfig {
    /// The burst to fire.
    pub burst: BurstConfig,
    /// Delay before the follow-up action (ms).
    pub follow_up_delay_ms: u64,
}

impl CommitConfig {
    /// Desktop "Book now".
    #[must_use]
    pub fn nav_desktop() -> Self {
        Self {
            burst: BurstConfig::nav_desktop(),
            follow_up_delay_ms: 520,
        }
    }

    /// Mobile "Book now".
    #[must_use]
    pub fn nav_mobile() -> Self {
        Self {
            burst: BurstConfig::nav_mobile(),
            follow_up_delay_ms: 500,
        }
    }

    /// Follow-up delay.
    #[must_use]
    pub const fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self::nav_desktop()
    }
}

/// Root of the effects configuration file.
///
/// ```toml
/// [sparkle]
/// count = 24
///
/// [nav_mobile]
/// follow_up_delay_ms = 450
/// burst = { spread_min = 12.0, spread_max = 36.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    /// Generic sparkle.
    pub sparkle: BurstConfig,
    /// Desktop navigation commit.
    pub nav_desktop: CommitConfig,
    /// Mobile navigation commit.
    pub nav_mobile: CommitConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            sparkle: BurstConfig::sparkle(),
            nav_desktop: CommitConfig::nav_desktop(),
            nav_mobile: CommitConfig::nav_mobile(),
        }
    }
}

impl EffectsConfig {
    /// Parses and validates a TOML document.
    ///
    /// The document is layered over the built-in presets table by table,
    /// so a partial `[nav_mobile]` keeps the mobile numbers it leaves out.
    pub fn from_toml_str(source: &str) -> EffectsResult<Self> {
        let overrides: toml::Table = toml::from_str(source)?;
        let mut merged = toml::Table::try_from(Self::default())?;
        merge_tables(&mut merged, overrides);

        let config: Self = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> EffectsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| EffectsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "effects config loaded");
        Ok(config)
    }

    /// Validates every preset.
    pub fn validate(&self) -> EffectsResult<()> {
        self.sparkle.validate("sparkle")?;
        self.nav_desktop.burst.validate("nav_desktop")?;
        self.nav_mobile.burst.validate("nav_mobile")?;
        Ok(())
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(over) = value {
            if let Some(toml::Value::Table(inner)) = base.get_mut(&key) {
                merge_tables(inner, over);
                continue;
            }
            base.insert(key, toml::Value::Table(over));
        } else {
            base.insert(key, value);
        }
    }
}

fn reject(err: EffectsError) -> EffectsError {
    tracing::warn!(error = %err, "rejecting burst config");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(EffectsConfig::default().validate().is_ok());
        assert_eq!(BurstConfig::nav_desktop().count, 16);
        assert!((BurstConfig::sparkle().angle_jitter - 0.3).abs() < f32::EPSILON);
        assert_eq!(CommitConfig::nav_mobile().follow_up_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_document() {
        let config = EffectsConfig::from_toml_str(
            r"
            [sparkle]
            count = 24

            [nav_mobile]
            follow_up_delay_ms = 450
            ",
        )
        .unwrap();

        assert_eq!(config.sparkle.count, 24);
        assert!((config.sparkle.spread_max - 28.0).abs() < f32::EPSILON);
        assert_eq!(config.nav_mobile.follow_up_delay_ms, 450);
        assert_eq!(config.nav_mobile.burst, BurstConfig::nav_mobile());
        assert_eq!(config.nav_desktop, CommitConfig::nav_desktop());
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let err = EffectsConfig::from_toml_str("[sparkle]\ncolour = 1").unwrap_err();
        assert!(matches!(err, EffectsError::Parse(_)));
    }

    #[test]
    fn test_rejects_inverted_spread() {
        let config = BurstConfig {
            spread_min: 40.0,
            spread_max: 10.0,
            ..BurstConfig::sparkle()
        };
        assert!(matches!(
            config.validate("custom"),
            Err(EffectsError::InvertedRange { field: "spread", .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_nan() {
        let empty = BurstConfig {
            count: 0,
            ..BurstConfig::sparkle()
        };
        assert!(matches!(empty.validate("x"), Err(EffectsError::EmptyBurst { .. })));

        let nan = BurstConfig {
            size: f32::NAN,
            ..BurstConfig::sparkle()
        };
        assert!(matches!(nan.validate("x"), Err(EffectsError::InvalidValue { field: "size", .. })));
    }

    #[test]
    fn test_rejects_oversized_ranges() {
        let spin = BurstConfig {
            angle_jitter: f32::MAX,
            ..BurstConfig::sparkle()
        };
        assert!(matches!(
            spin.validate("x"),
            Err(EffectsError::OutOfBounds { field: "angle_jitter", .. })
        ));

        let full_turn = BurstConfig {
            angle_jitter: TAU,
            ..BurstConfig::sparkle()
        };
        assert!(full_turn.validate("x").is_ok());

        let err = EffectsConfig::from_toml_str("[sparkle]\nspread_max = 3.4e38").unwrap_err();
        assert!(matches!(err, EffectsError::OutOfBounds { field: "spread_max", .. }));

        let err = EffectsConfig::from_toml_str("[nav_mobile.burst]\nduration_max_ms = 1e9").unwrap_err();
        assert!(matches!(err, EffectsError::OutOfBounds { field: "duration_max_ms", .. }));
        assert!(err.to_string().contains("nav_mobile"));
    }
}
