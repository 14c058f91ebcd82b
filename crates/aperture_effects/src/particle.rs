//! Particle bursts.
//!
//! A burst spawns `count` round particles at one point and sends them out
//! along evenly spaced rays:
//!
//! ```text
//!   angle_i    = TAU * i / count + U(-jitter/2, jitter/2)
//!   distance_i = U(spread_min, spread_max)
//!   duration_i = U(duration_min, duration_max)
//! ```
//!
//! Each particle eases out along its ray with [`Easing::BURST`] while
//! shrinking and fading to nothing, then its node is removed from the
//! surface. Randomness comes from a seeded [`ChaCha8Rng`], so a given seed
//! always produces the same burst.

use std::f32::consts::TAU;
use std::time::Duration;

use aperture_ui::{Easing, Rect};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BurstConfig;
use crate::error::EffectsResult;
use crate::surface::{NodeId, NodeStyle, RenderSurface};

/// Burst origin for an element: the center of its bounding box.
#[must_use]
pub fn origin_of(bounds: &Rect) -> (f32, f32) {
    bounds.center()
}

/// One live particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    node: NodeId,
    origin: (f32, f32),
    angle: f32,
    distance: f32,
    duration_us: u64,
    born: Duration,
}

impl Particle {
    /// Surface node drawing this particle.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Ray angle (rad).
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Distance travelled by the end of the flight (px).
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Lifetime.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_micros(self.duration_us)
    }

    /// Spawn time.
    #[must_use]
    pub fn born(&self) -> Duration {
        self.born
    }

    /// Linear progress through the flight, clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.born).as_micros();
        if self.duration_us == 0 || elapsed >= u128::from(self.duration_us) {
            return 1.0;
        }
        elapsed as f32 / self.duration_us as f32
    }

    /// Returns true once the flight is over.
    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.born).as_micros() >= u128::from(self.duration_us)
    }

    /// Style of the particle at `now`.
    #[must_use]
    pub fn style_at(&self, now: Duration, config: &BurstConfig) -> NodeStyle {
        let eased = Easing::BURST.apply(self.progress(now));
        let reach = self.distance * eased;
        NodeStyle {
            translate: (self.angle.cos() * reach, self.angle.sin() * reach),
            scale: 1.0 - eased,
            opacity: 1.0 - eased,
            ..NodeStyle::at_origin(self.origin, config.size, &config.background)
        }
    }
}

/// Emitter counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BurstStats {
    /// Bursts fired.
    pub bursts: u64,
    /// Particles spawned.
    pub spawned: u64,
    /// Particles whose flight finished.
    pub expired: u64,
}

/// Spawns and animates bursts on a render surface.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    config: BurstConfig,
    rng: ChaCha8Rng,
    live: Vec<Particle>,
    stats: BurstStats,
}

impl ParticleEmitter {
    /// Creates an emitter for `config`, seeding its random source with `seed`.
    pub fn new(config: BurstConfig, seed: u64) -> EffectsResult<Self> {
        Self::named("custom", config, seed)
    }

    /// Like [`ParticleEmitter::new`], reporting config errors under `preset`.
    pub fn named(preset: &str, config: BurstConfig, seed: u64) -> EffectsResult<Self> {
        config.validate(preset)?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            live: Vec::new(),
            stats: BurstStats::default(),
        })
    }

    /// Burst parameters.
    #[must_use]
    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    /// Particles still in flight.
    #[must_use]
    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    /// Counters since creation.
    #[must_use]
    pub fn stats(&self) -> BurstStats {
        self.stats
    }

    /// Fires one burst at `origin`. Returns the number of particles spawned.
    ///
    /// Earlier bursts keep flying; bursts overlap freely.
    pub fn emit(
        &mut self,
        origin: (f32, f32),
        now: Duration,
        surface: &mut dyn RenderSurface,
    ) -> usize {
        let count = self.config.count;
        let half_jitter = self.config.angle_jitter / 2.0;
        self.live.reserve(count as usize);

        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let spoke = TAU * i as f32 / count as f32;
            let angle = spoke + self.rng.gen_range(-half_jitter..=half_jitter);
            let distance = self
                .rng
                .gen_range(self.config.spread_min..=self.config.spread_max);
            let duration_ms = self
                .rng
                .gen_range(self.config.duration_min_ms..=self.config.duration_max_ms);

            let node = surface.append(NodeStyle::at_origin(
                origin,
                self.config.size,
                &self.config.background,
            ));
            self.live.push(Particle {
                node,
                origin,
                angle,
                distance,
                duration_us: to_micros(duration_ms),
                born: now,
            });
        }

        self.stats.bursts += 1;
        self.stats.spawned += u64::from(count);
        tracing::debug!(
            x = origin.0,
            y = origin.1,
            count,
            live = self.live.len(),
            "burst emitted"
        );
        count as usize
    }

    /// Moves every live particle to its position at `now` and removes the
    /// ones whose flight is over. Returns the number removed.
    pub fn advance(&mut self, now: Duration, surface: &mut dyn RenderSurface) -> usize {
        let before = self.live.len();
        let config = &self.config;

        self.live.retain(|particle| {
            if particle.is_expired(now) {
                surface.remove(particle.node);
                false
            } else {
                surface.restyle(particle.node, &particle.style_at(now, config));
                true
            }
        });

        let removed = before - self.live.len();
        self.stats.expired += removed as u64;
        if removed > 0 && self.live.is_empty() {
            tracing::trace!(expired = self.stats.expired, "all particles settled");
        }
        removed
    }

    /// Removes every live particle immediately.
    pub fn clear(&mut self, surface: &mut dyn RenderSurface) {
        for particle in self.live.drain(..) {
            surface.remove(particle.node);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_micros(ms: f32) -> u64 {
    (f64::from(ms) * 1000.0).round() as u64
}
