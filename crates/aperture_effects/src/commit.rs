//! Commit actions.
//!
//! A commit fires a burst on the activated element and runs a follow-up
//! (navigation, closing a menu) once a fixed delay has passed. The
//! follow-up is independent of the particles: it fires on schedule even
//! if every particle is still in flight, and the particles keep flying
//! after it fires.

use std::time::Duration;

use aperture_ui::TimerSlot;

use crate::config::CommitConfig;
use crate::error::EffectsResult;
use crate::particle::ParticleEmitter;
use crate::surface::RenderSurface;

/// Burst plus delayed follow-up `A`.
#[derive(Debug, Clone)]
pub struct CommitAction<A> {
    emitter: ParticleEmitter,
    follow_up: TimerSlot<A>,
    delay: Duration,
}

impl<A> CommitAction<A> {
    /// Creates a commit action from `config`.
    pub fn new(config: &CommitConfig, seed: u64) -> EffectsResult<Self> {
        Self::named("commit", config, seed)
    }

    /// Like [`CommitAction::new`], reporting config errors under `preset`.
    pub fn named(preset: &str, config: &CommitConfig, seed: u64) -> EffectsResult<Self> {
        Ok(Self {
            emitter: ParticleEmitter::named(preset, config.burst.clone(), seed)?,
            follow_up: TimerSlot::new(),
            delay: config.follow_up_delay(),
        })
    }

    /// Desktop navigation commit.
    pub fn nav_desktop(seed: u64) -> EffectsResult<Self> {
        Self::named("nav_desktop", &CommitConfig::nav_desktop(), seed)
    }

    /// Mobile navigation commit.
    pub fn nav_mobile(seed: u64) -> EffectsResult<Self> {
        Self::named("nav_mobile", &CommitConfig::nav_mobile(), seed)
    }

    /// Fires the burst at `origin` and schedules `action`.
    ///
    /// Triggering again before the follow-up fires replaces the pending
    /// action; it runs once, `delay` after the latest trigger. Returns the
    /// action that was replaced, if any.
    pub fn trigger(
        &mut self,
        origin: (f32, f32),
        now: Duration,
        surface: &mut dyn RenderSurface,
        action: A,
    ) -> Option<A> {
        self.emitter.emit(origin, now, surface);
        let replaced = self.follow_up.arm(now, self.delay, action);
        if replaced.is_some() {
            tracing::debug!(delay_ms = millis(self.delay), "commit re-triggered");
        }
        replaced
    }

    /// Steps the particles and returns the follow-up once it is due.
    pub fn advance(&mut self, now: Duration, surface: &mut dyn RenderSurface) -> Option<A> {
        self.emitter.advance(now, surface);
        let action = self.follow_up.poll(now)?;
        tracing::info!(
            at_ms = millis(now),
            live = self.emitter.live().len(),
            "commit follow-up due"
        );
        Some(action)
    }

    /// Drops the pending follow-up without touching the particles.
    pub fn cancel(&mut self) -> Option<A> {
        self.follow_up.cancel()
    }

    /// When the pending follow-up is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.follow_up.pending().map(|d| d.due)
    }

    /// The burst emitter.
    #[must_use]
    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    /// Follow-up delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Nav {
        Booking,
        Contact,
    }

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_follow_up_fires_once_after_delay() {
        let mut surface = MemorySurface::new();
        let mut commit = CommitAction::nav_mobile(11).unwrap();
        assert!(commit.trigger((20.0, 20.0), ms(0), &mut surface, Nav::Booking).is_none());

        assert_eq!(commit.advance(ms(499), &mut surface), None);
        assert_eq!(commit.advance(ms(500), &mut surface), Some(Nav::Booking));
        assert_eq!(commit.advance(ms(501), &mut surface), None);
        assert_eq!(commit.next_deadline(), None);
    }

    #[test]
    fn test_retrigger_replaces_pending() {
        let mut surface = MemorySurface::new();
        let mut commit = CommitAction::nav_desktop(11).unwrap();
        commit.trigger((0.0, 0.0), ms(0), &mut surface, Nav::Booking);
        let replaced = commit.trigger((0.0, 0.0), ms(100), &mut surface, Nav::Contact);

        assert_eq!(replaced, Some(Nav::Booking));
        assert_eq!(commit.emitter().stats().bursts, 2);
        assert_eq!(commit.advance(ms(520), &mut surface), None);
        assert_eq!(commit.advance(ms(620), &mut surface), Some(Nav::Contact));
    }

    #[test]
    fn test_bad_burst_is_reported_by_name() {
        let mut config = CommitConfig::nav_mobile();
        config.burst.spread_min = 80.0;
        let err = CommitAction::<Nav>::named("nav_mobile", &config, 0).unwrap_err();
        assert!(err.to_string().starts_with("burst nav_mobile: spread range is inverted"));
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(ms(520)), 520);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_cancel_keeps_particles() {
        let mut surface = MemorySurface::new();
        let mut commit = CommitAction::nav_desktop(5).unwrap();
        commit.trigger((0.0, 0.0), ms(0), &mut surface, Nav::Booking);

        assert_eq!(commit.cancel(), Some(Nav::Booking));
        assert_eq!(surface.len(), 16);
        assert_eq!(commit.advance(ms(1000), &mut surface), None);
        assert!(surface.is_empty());
    }
}
