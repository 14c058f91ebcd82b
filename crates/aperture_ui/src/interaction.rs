//! Interaction state tracking.
//!
//! One [`InteractionTracker`] per interactive element. It turns raw
//! pointer/touch/focus events into an [`InteractionState`] snapshot and,
//! on touch devices, synthesizes hover from presses.
//!
//! ## Hover simulation
//!
//! Touch screens have no hover, so on touch modality:
//!
//! ```text
//!            press                 +100ms
//!   IDLE ───────────▶ HOVER_PENDING ───────▶ HOVERED
//!    ▲                    │ release              │ release
//!    │                    ▼                      ▼
//!    └──── (cancelled) ◀──┘        RELEASING ◀───┘
//!    ▲                                 │ +200ms
//!    └─────────────────────────────────┘
//! ```
//!
//! A press during `RELEASING` re-arms the hover transition. Pending
//! transitions live in a single [`TimerSlot`], so re-arming always cancels
//! the stale one.

use std::time::Duration;

use crate::config::InteractionConfig;
use crate::input::{InteractionEvent, Modality};
use crate::timer::TimerSlot;
use crate::viewport::ModalityHandle;

/// Hover/press/focus flags for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InteractionState {
    /// Pointer is over the element, or hover is being simulated.
    pub hovered: bool,
    /// Element is held down.
    pub pressed: bool,
    /// Element has keyboard focus.
    pub focused: bool,
}

/// Where the hover simulation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// Nothing pending, not hovered.
    Idle,
    /// Pressed; hover turns on when the delay elapses.
    HoverPending,
    /// Hovered with nothing pending.
    Hovered,
    /// Released; hover turns off when the delay elapses.
    Releasing,
}

/// Delayed change to `hovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverTransition {
    Enter,
    Exit,
}

/// Tracks interaction state for a single element.
#[derive(Debug)]
pub struct InteractionTracker {
    state: InteractionState,
    modality_source: ModalityHandle,
    modality: Modality,
    hover_delay: Duration,
    release_delay: Duration,
    pending: TimerSlot<HoverTransition>,
}

impl InteractionTracker {
    /// Creates a tracker reading modality from `modality`.
    #[must_use]
    pub fn new(modality: ModalityHandle, config: &InteractionConfig) -> Self {
        let current = modality.get();
        Self {
            state: InteractionState::default(),
            modality_source: modality,
            modality: current,
            hover_delay: config.hover_delay(),
            release_delay: config.release_delay(),
            pending: TimerSlot::new(),
        }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns the modality the tracker is currently acting on.
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Returns the hover simulation phase.
    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        match self.pending.pending().map(|d| d.payload) {
            Some(HoverTransition::Enter) => HoverPhase::HoverPending,
            Some(HoverTransition::Exit) => HoverPhase::Releasing,
            None if self.state.hovered => HoverPhase::Hovered,
            None => HoverPhase::Idle,
        }
    }

    /// Returns when the next delayed transition is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.pending().map(|d| d.due)
    }

    /// Applies an event received at `now`.
    ///
    /// Transitions that fell due before `now` are applied first. Returns
    /// true if the state snapshot changed.
    pub fn handle(&mut self, event: InteractionEvent, now: Duration) -> bool {
        let before = self.state;
        self.advance(now);

        match event {
            InteractionEvent::PointerEnter | InteractionEvent::PointerLeave => {
                // Touch browsers emit synthetic enter/leave that would stick
                if !self.modality.is_touch() {
                    self.state.hovered = event == InteractionEvent::PointerEnter;
                }
            }
            InteractionEvent::PointerDown => self.set_pressed(true, now),
            InteractionEvent::PointerUp => self.set_pressed(false, now),
            InteractionEvent::TouchStart | InteractionEvent::TouchEnd => {
                if self.modality.is_touch() {
                    self.set_pressed(event == InteractionEvent::TouchStart, now);
                }
            }
            InteractionEvent::Focus => self.state.focused = true,
            InteractionEvent::Blur => self.state.focused = false,
        }

        if before != self.state {
            tracing::debug!(?event, state = ?self.state, phase = ?self.phase(), "interaction state changed");
        }
        before != self.state
    }

    /// Applies every delayed transition due at `now` and picks up modality
    /// changes. Returns true if the state snapshot changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let before = self.state;
        self.sync_modality(now);

        if let Some(transition) = self.pending.poll(now) {
            self.state.hovered = transition == HoverTransition::Enter;
        }

        before != self.state
    }

    /// Clears all state and cancels pending transitions (unmount).
    pub fn reset(&mut self) {
        self.state = InteractionState::default();
        self.pending.cancel();
    }

    fn set_pressed(&mut self, pressed: bool, now: Duration) {
        if self.state.pressed == pressed {
            return;
        }
        self.state.pressed = pressed;
        if self.modality.is_touch() {
            self.arm_simulation(now);
        }
    }

    /// Schedules the hover transition implied by the current press state.
    fn arm_simulation(&mut self, now: Duration) {
        if self.state.pressed {
            self.pending.arm(now, self.hover_delay, HoverTransition::Enter);
        } else if self.state.hovered {
            self.pending.arm(now, self.release_delay, HoverTransition::Exit);
        } else {
            // Releasing while not hovered needs no transition
            self.pending.cancel();
        }
    }

    fn sync_modality(&mut self, now: Duration) {
        let current = self.modality_source.get();
        if current == self.modality {
            return;
        }
        tracing::debug!(from = %self.modality, to = %current, "tracker modality switched");
        self.modality = current;
        self.pending.cancel();
        if current.is_touch() {
            self.arm_simulation(now);
        }
    }
}
