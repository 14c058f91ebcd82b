//! Rotating showcase.
//!
//! The home page hero cycles through service faces on a fixed cadence.
//! Selecting a face by hand jumps straight to it without disturbing the
//! cadence.

use std::time::Duration;

use crate::config::ShowcaseConfig;
use crate::error::{UiError, UiResult};
use crate::preset::{AnimationTarget, Transition};

/// Enter/exit destinations for a face swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTransition {
    /// Where an entering face starts.
    pub initial: AnimationTarget,
    /// Where the visible face sits.
    pub animate: AnimationTarget,
    /// Where a leaving face ends.
    pub exit: AnimationTarget,
    /// Timing for both directions.
    pub transition: Transition,
}

/// Cycles through a fixed number of faces.
#[derive(Debug, Clone)]
pub struct ShowcaseRotator {
    faces: usize,
    current: usize,
    interval: Duration,
    next_rotation: Duration,
    transition: Transition,
}

impl ShowcaseRotator {
    /// Creates a rotator showing face 0 at `now`.
    pub fn new(config: &ShowcaseConfig, now: Duration) -> UiResult<Self> {
        if config.faces == 0 {
            return Err(UiError::NoFaces);
        }
        if config.interval_ms == 0 {
            return Err(UiError::InvalidConfig("showcase interval must be non-zero".to_owned()));
        }
        Ok(Self {
            faces: config.faces,
            current: 0,
            interval: config.interval(),
            next_rotation: now + config.interval(),
            transition: Transition::ease_in_out(config.transition),
        })
    }

    /// Returns the visible face.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of faces.
    #[must_use]
    pub fn faces(&self) -> usize {
        self.faces
    }

    /// Returns when the next automatic rotation happens.
    #[must_use]
    pub fn next_rotation(&self) -> Duration {
        self.next_rotation
    }

    /// Rotates for every interval elapsed by `now`. Returns true if the
    /// visible face changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let before = self.current;
        while self.next_rotation <= now {
            self.current = (self.current + 1) % self.faces;
            self.next_rotation += self.interval;
        }
        if before != self.current {
            tracing::debug!(face = self.current, "showcase rotated");
        }
        before != self.current
    }

    /// Jumps to `index`.
    pub fn select(&mut self, index: usize) -> UiResult<()> {
        if index >= self.faces {
            return Err(UiError::FaceOutOfRange {
                index,
                faces: self.faces,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Returns one flag per face, true for the visible one.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.faces).map(move |i| i == self.current)
    }

    /// Returns the face swap animation.
    #[must_use]
    pub fn face_transition(&self) -> FaceTransition {
        FaceTransition {
            initial: AnimationTarget::EMPTY.rotate_y(90.0).opacity(0.0),
            animate: AnimationTarget::EMPTY.rotate_y(0.0).opacity(1.0),
            exit: AnimationTarget::EMPTY.rotate_y(-90.0).opacity(0.0),
            transition: self.transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator() -> ShowcaseRotator {
        ShowcaseRotator::new(&ShowcaseConfig::default(), Duration::ZERO).unwrap()
    }

    #[test]
    fn test_rotates_and_wraps() {
        let mut r = rotator();
        assert!(!r.advance(Duration::from_millis(3999)));
        assert!(r.advance(Duration::from_millis(4000)));
        assert_eq!(r.current(), 1);

        // Host stalled for three intervals
        r.advance(Duration::from_millis(16_000));
        assert_eq!(r.current(), 0);
        assert_eq!(r.next_rotation(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_select_keeps_cadence() {
        let mut r = rotator();
        r.select(2).unwrap();
        assert_eq!(r.indicators().collect::<Vec<_>>(), vec![false, false, true, false]);
        assert_eq!(r.next_rotation(), Duration::from_millis(4000));

        r.advance(Duration::from_millis(4000));
        assert_eq!(r.current(), 3);
        assert!(matches!(r.select(4), Err(UiError::FaceOutOfRange { index: 4, faces: 4 })));
    }

    #[test]
    fn test_face_transition() {
        let t = rotator().face_transition();
        assert_eq!(t.initial.rotate_y, Some(90.0));
        assert_eq!(t.exit.rotate_y, Some(-90.0));
        assert!((t.transition.duration - 0.8).abs() < f32::EPSILON);
    }
}
