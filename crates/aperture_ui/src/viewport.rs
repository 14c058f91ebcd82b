//! Viewport observation.
//!
//! One [`ViewportObserver`] per page. Every tracker holds a cheap
//! [`ModalityHandle`] clone and reads the current modality from it; only
//! the observer writes.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::input::Modality;

/// Default mobile breakpoint in CSS pixels.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Read-only view of the current modality.
#[derive(Debug, Clone, Default)]
pub struct ModalityHandle(Arc<RwLock<Modality>>);

impl ModalityHandle {
    /// Creates a handle that is not attached to any observer.
    ///
    /// Useful for elements rendered outside a page, and for tests.
    #[must_use]
    pub fn fixed(modality: Modality) -> Self {
        Self(Arc::new(RwLock::new(modality)))
    }

    /// Returns the current modality.
    #[must_use]
    pub fn get(&self) -> Modality {
        *self.0.read()
    }
}

/// Tracks viewport width and publishes the derived modality.
#[derive(Debug)]
pub struct ViewportObserver {
    width: f32,
    breakpoint: f32,
    modality: ModalityHandle,
}

impl ViewportObserver {
    /// Creates an observer for the given initial width.
    #[must_use]
    pub fn new(width: f32, breakpoint: f32) -> Self {
        let modality = Modality::from_width(width, breakpoint);
        Self {
            width,
            breakpoint,
            modality: ModalityHandle::fixed(modality),
        }
    }

    /// Records a resize. Returns true if the modality changed.
    pub fn resize(&mut self, width: f32) -> bool {
        self.width = width;
        let next = Modality::from_width(width, self.breakpoint);
        let mut current = self.modality.0.write();
        if *current == next {
            return false;
        }
        let previous = *current;
        tracing::info!(width, from = %previous, to = %next, "viewport modality changed");
        *current = next;
        true
    }

    /// Returns a handle for trackers.
    #[must_use]
    pub fn handle(&self) -> ModalityHandle {
        self.modality.clone()
    }

    /// Returns the current modality.
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality.get()
    }

    /// Returns the last observed width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the breakpoint in use.
    #[must_use]
    pub fn breakpoint(&self) -> f32 {
        self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_publishes_to_handles() {
        let mut viewport = ViewportObserver::new(1280.0, MOBILE_BREAKPOINT);
        let handle = viewport.handle();
        assert_eq!(handle.get(), Modality::Pointer);

        assert!(viewport.resize(390.0));
        assert_eq!(handle.get(), Modality::Touch);

        // Same side of the breakpoint: no change reported
        assert!(!viewport.resize(400.0));
        assert!((viewport.width() - 400.0).abs() < f32::EPSILON);
    }
}
