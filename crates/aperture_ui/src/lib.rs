//! # APERTURE UI
//!
//! Headless interaction layer for the studio site:
//! - Hover / press / focus tracking per element
//! - Simulated hover on touch screens
//! - Animation presets chosen by input modality
//! - Rotating showcase on the home page
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     INTERACTION PIPELINE                    │
//! ├────────────────────────────────────────────────────────────┤
//! │  Host events → InteractionTracker → InteractiveElement     │
//! │       ↓               ↓                     ↓              │
//! │  ViewportObserver  TimerSlot          Appearance (preset)  │
//! │  (modality)        (hover sim)        → host / MotionDriver│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Time
//!
//! Nothing in this crate reads a clock. Hosts pass a monotonic
//! [`std::time::Duration`] with every event and call `advance` from their
//! frame loop so delayed transitions can fire.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod element;
pub mod error;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod motion;
pub mod preset;
pub mod showcase;
pub mod style;
pub mod timer;
pub mod viewport;

pub use animation::{Animation, Easing};
pub use config::{InteractionConfig, ShowcaseConfig, UiConfig, ViewportConfig};
pub use element::{Appearance, InteractiveElement};
pub use error::{UiError, UiResult};
pub use input::{InteractionEvent, Modality};
pub use interaction::{HoverPhase, InteractionState, InteractionTracker};
pub use layout::Rect;
pub use motion::{MotionDriver, Transform};
pub use preset::{AnimationPreset, AnimationTarget, ElementStyle, Transition};
pub use showcase::{FaceTransition, ShowcaseRotator};
pub use style::{BoxShadow, Color, Cursor};
pub use timer::{Deadline, TimerSlot};
pub use viewport::{ModalityHandle, ViewportObserver, MOBILE_BREAKPOINT};
