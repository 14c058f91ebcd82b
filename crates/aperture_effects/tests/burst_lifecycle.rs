//! # Burst Lifecycle
//!
//! Drives bursts through a memory surface frame by frame and checks node
//! churn, timing bounds and determinism.

use std::time::Duration;

use aperture_effects::{
    origin_of, BurstConfig, CommitAction, MemorySurface, ParticleEmitter, RenderSurface,
};
use aperture_ui::Rect;

const FRAME: Duration = Duration::from_micros(16_667);

fn run_until_empty(emitter: &mut ParticleEmitter, surface: &mut MemorySurface) -> Duration {
    let mut now = Duration::ZERO;
    while !emitter.live().is_empty() {
        now += FRAME;
        emitter.advance(now, surface);
        assert!(now < Duration::from_secs(2), "burst never settled");
    }
    now
}

#[test]
fn sparkle_spawns_sixteen_nodes_and_removes_them_in_time() {
    let config = BurstConfig::sparkle();
    let mut surface = MemorySurface::new();
    let mut emitter = ParticleEmitter::new(config.clone(), 2024).unwrap();

    let origin = origin_of(&Rect::new(100.0, 20.0, 120.0, 40.0));
    assert_eq!(emitter.emit(origin, Duration::ZERO, &mut surface), 16);
    assert_eq!(surface.len(), 16);

    for particle in emitter.live() {
        assert!(particle.distance() >= config.spread_min);
        assert!(particle.distance() <= config.spread_max);
        let lifetime = particle.duration().as_secs_f32() * 1000.0;
        assert!(lifetime >= config.duration_min_ms - 0.01);
        assert!(lifetime <= config.duration_max_ms + 0.01);
    }

    // Nothing is removed before the shortest lifetime
    emitter.advance(Duration::from_millis(419), &mut surface);
    assert_eq!(surface.len(), 16);

    let settled = run_until_empty(&mut emitter, &mut surface);
    assert!(settled <= Duration::from_millis(700) + FRAME);
    assert!(surface.is_empty());
    assert_eq!(surface.appended(), 16);
    assert_eq!(surface.removed(), 16);
    assert_eq!(emitter.stats().expired, 16);
}

#[test]
fn particles_end_at_their_sampled_distance() {
    let config = BurstConfig::nav_desktop();
    let mut surface = MemorySurface::new();
    let mut emitter = ParticleEmitter::new(config.clone(), 8).unwrap();
    emitter.emit((300.0, 24.0), Duration::ZERO, &mut surface);

    for particle in emitter.live() {
        let end = particle.style_at(particle.duration(), &config);
        assert!((end.offset_distance() - particle.distance()).abs() < 1e-3);
        assert!(end.opacity.abs() < 1e-5);
        assert!(end.scale.abs() < 1e-5);
        assert!((end.left - 300.0).abs() < f32::EPSILON);
    }
}

#[test]
fn same_seed_same_burst() {
    let mut a = ParticleEmitter::new(BurstConfig::sparkle(), 42).unwrap();
    let mut b = ParticleEmitter::new(BurstConfig::sparkle(), 42).unwrap();
    let mut c = ParticleEmitter::new(BurstConfig::sparkle(), 43).unwrap();
    let (mut sa, mut sb, mut sc) = (MemorySurface::new(), MemorySurface::new(), MemorySurface::new());

    a.emit((0.0, 0.0), Duration::ZERO, &mut sa);
    b.emit((0.0, 0.0), Duration::ZERO, &mut sb);
    c.emit((0.0, 0.0), Duration::ZERO, &mut sc);

    assert_eq!(a.live(), b.live());
    assert_ne!(a.live(), c.live());
}

#[test]
fn overlapping_bursts_settle_independently() {
    let mut surface = MemorySurface::new();
    let mut emitter = ParticleEmitter::new(BurstConfig::nav_mobile(), 1).unwrap();
    emitter.emit((0.0, 0.0), Duration::ZERO, &mut surface);
    emitter.emit((50.0, 0.0), Duration::from_millis(300), &mut surface);
    assert_eq!(surface.len(), 32);

    // First burst is gone, second is still flying
    emitter.advance(Duration::from_millis(661), &mut surface);
    assert_eq!(surface.len(), 16);
    assert!(surface.iter().all(|(_, style)| (style.left - 50.0).abs() < f32::EPSILON));

    emitter.advance(Duration::from_millis(961), &mut surface);
    assert!(surface.is_empty());
}

#[test]
fn commit_follow_up_is_independent_of_particles() {
    let mut surface = MemorySurface::new();
    let mut commit: CommitAction<&str> = CommitAction::nav_desktop(3).unwrap();
    commit.trigger((200.0, 30.0), Duration::ZERO, &mut surface, "/booking");

    let mut fired = Vec::new();
    let mut now = Duration::ZERO;
    while now < Duration::from_millis(1000) {
        now += FRAME;
        if let Some(route) = commit.advance(now, &mut surface) {
            fired.push((now, route, surface.len()));
        }
    }

    assert_eq!(fired.len(), 1);
    let (at, route, _) = fired[0];
    assert_eq!(route, "/booking");
    assert!(at >= Duration::from_millis(520));
    assert!(at < Duration::from_millis(520) + FRAME);
    assert!(surface.is_empty());
}

#[test]
fn surface_is_only_touched_through_the_trait() {
    struct Counting {
        inner: MemorySurface,
        restyles: usize,
    }

    impl RenderSurface for Counting {
        fn append(&mut self, style: aperture_effects::NodeStyle) -> aperture_effects::NodeId {
            self.inner.append(style)
        }

        fn restyle(&mut self, id: aperture_effects::NodeId, style: &aperture_effects::NodeStyle) {
            self.restyles += 1;
            self.inner.restyle(id, style);
        }

        fn remove(&mut self, id: aperture_effects::NodeId) {
            self.inner.remove(id);
        }
    }

    let mut surface = Counting {
        inner: MemorySurface::new(),
        restyles: 0,
    };
    let mut emitter = ParticleEmitter::new(BurstConfig::sparkle(), 0).unwrap();
    emitter.emit((0.0, 0.0), Duration::ZERO, &mut surface);
    emitter.advance(Duration::from_millis(100), &mut surface);

    assert_eq!(surface.restyles, 16);
    assert_eq!(surface.inner.len(), 16);
}
