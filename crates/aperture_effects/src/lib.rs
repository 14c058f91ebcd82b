//! # APERTURE EFFECTS
//!
//! Ephemeral particle bursts for the studio site.
//!
//! ```text
//!   activation ──→ CommitAction ──→ ParticleEmitter ──→ RenderSurface
//!                       │                 │               (append / restyle / remove)
//!                       │                 └── ChaCha8Rng (seeded)
//!                       └── TimerSlot ──→ follow-up (navigate, close menu)
//! ```
//!
//! The host owns the surface and the clock. It calls `emit`/`trigger` on
//! activation and `advance` from its frame loop with a monotonic timestamp.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod commit;
pub mod config;
pub mod error;
pub mod particle;
pub mod surface;

pub use commit::CommitAction;
pub use config::{
    BurstConfig, CommitConfig, EffectsConfig, DEFAULT_BACKGROUND, MAX_DURATION_MS, MAX_EXTENT_PX,
    PARTICLE_Z_INDEX,
};
pub use error::{EffectsError, EffectsResult};
pub use particle::{origin_of, BurstStats, Particle, ParticleEmitter};
pub use surface::{MemorySurface, NodeId, NodeStyle, RenderSurface};
