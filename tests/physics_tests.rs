// Host-side tests for the orbital particle engine.

use songmap_core::*;
use std::collections::HashSet;
use std::f32::consts::TAU;
use std::time::Duration;

fn make_sim(seed: u64) -> Simulation {
    Simulation::new(PhysicsParams::default(), LatticeParams::default(), seed)
}

fn circular_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn initialize_creates_one_particle_per_song() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(1);
    let outcome = sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    assert_eq!(outcome, InitOutcome::Started(catalog.len()));
    assert!(sim.is_running());

    let snap = sim.snapshot();
    assert_eq!(snap.particles.len(), catalog.len());
    let slugs: HashSet<&str> = snap.particles.iter().map(|p| &*p.slug).collect();
    assert_eq!(slugs.len(), catalog.len(), "slugs must be distinct");
}

#[test]
fn five_songs_spread_over_eight_levels() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(2);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    let levels: Vec<usize> = sim
        .snapshot()
        .particles
        .iter()
        .map(|p| p.ellipse_index)
        .collect();
    assert_eq!(levels, vec![0, 1, 3, 4, 6]);
}

#[test]
fn orbit_direction_alternates_by_catalog_position() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(3);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    for (i, p) in sim.snapshot().particles.iter().enumerate() {
        let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(p.orbit_direction, expected, "particle {i}");
    }
}

#[test]
fn initial_angles_are_normalized() {
    let catalog = Catalog::default_catalog();
    for seed in 0..20 {
        let mut sim = make_sim(seed);
        sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
        for p in sim.snapshot().particles.iter() {
            assert!(
                (0.0..TAU).contains(&p.angle),
                "seed {seed}: {} starts at angle {}",
                p.slug,
                p.angle
            );
        }
    }
}

#[test]
fn initial_positions_stay_near_their_ring() {
    let catalog = Catalog::default_catalog();
    let viewport = Viewport::new(1200.0, 800.0);
    let mut sim = make_sim(4);
    sim.initialize(catalog.songs(), viewport);
    let params = PhysicsParams::default();
    for p in sim.snapshot().particles.iter() {
        let ring = ellipse_for_level(viewport, &LatticeParams::default(), p.ellipse_index);
        let on_ring = ring.point_at(p.angle);
        let off = (p.position - on_ring).abs();
        assert!(
            off.x <= params.position_jitter / 2.0 + 1e-3 && off.y <= params.position_jitter / 2.0 + 1e-3,
            "{} starts {:?} away from its ring",
            p.slug,
            off
        );
    }
}

#[test]
fn driven_angle_ignores_collisions() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(5);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    let before = sim.snapshot();
    let steps = 100;
    for _ in 0..steps {
        sim.step();
    }
    let after = sim.snapshot();
    let speed = PhysicsParams::default().orbital_speed;
    for (a, b) in before.particles.iter().zip(after.particles.iter()) {
        assert_eq!(a.slug, b.slug);
        let expected = (a.angle + steps as f32 * speed * a.orbit_direction).rem_euclid(TAU);
        assert!(
            circular_diff(b.angle, expected) < 1e-3,
            "{}: angle {} expected {}",
            a.slug,
            b.angle,
            expected
        );
    }
    assert_eq!(after.step, steps);
}

#[test]
fn particles_keep_moving() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(6);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    for _ in 0..600 {
        sim.step();
    }
    let a = sim.snapshot();
    sim.step();
    let b = sim.snapshot();
    let moved = a
        .particles
        .iter()
        .zip(b.particles.iter())
        .any(|(p, q)| p.position != q.position);
    assert!(moved, "the orbital drive must never settle");
}

#[test]
fn overlapping_particles_are_pushed_apart() {
    let songs = vec![Song::new("A", "a"), Song::new("B", "b")];
    let params = PhysicsParams {
        angle_jitter: 0.0,
        position_jitter: 0.0,
        radial_strength: 0.0,
        orbital_speed: 0.0,
        ..PhysicsParams::default()
    };
    // A single ring makes both particles share a level.
    let lattice = LatticeParams {
        level_count: 1,
        base_radius: 5.0,
        ..LatticeParams::default()
    };
    let mut sim = Simulation::new(params, lattice, 7);
    sim.initialize(&songs, Viewport::new(400.0, 400.0));
    let start = sim.snapshot();
    let d0 = start.particles[0].position.distance(start.particles[1].position);
    sim.step();
    let next = sim.snapshot();
    let d1 = next.particles[0].position.distance(next.particles[1].position);
    assert!(d0 < 40.0, "setup should overlap, got {d0}");
    assert!(d1 > d0, "collision should separate: {d0} -> {d1}");
}

#[test]
fn zero_songs_leave_the_engine_idle() {
    let mut sim = make_sim(8);
    let outcome = sim.initialize(&[], Viewport::new(1200.0, 800.0));
    assert_eq!(outcome, InitOutcome::Empty);
    assert!(!sim.is_running());
    assert!(sim.snapshot().is_empty());
    assert!(sim.tick(Duration::from_millis(100)).is_none());
}

#[test]
fn unmeasured_viewport_defers_initialization() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(9);
    assert_eq!(
        sim.initialize(catalog.songs(), Viewport::new(0.0, 0.0)),
        InitOutcome::Deferred
    );
    assert_eq!(
        sim.initialize(catalog.songs(), Viewport::new(1200.0, 0.0)),
        InitOutcome::Deferred
    );
    assert!(!sim.is_running());
    assert!(sim.snapshot().is_empty());
}

#[test]
fn reinitialize_draws_fresh_layout() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(10);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    for _ in 0..20 {
        sim.step();
    }
    let old = sim.snapshot();
    let old_offset = sim.rotation_offset();

    sim.initialize(catalog.songs(), Viewport::new(900.0, 700.0));
    let new = sim.snapshot();
    assert_eq!(new.step, 0, "step counter restarts");
    assert_ne!(sim.rotation_offset(), old_offset);
    for (a, b) in old.particles.iter().zip(new.particles.iter()) {
        assert_eq!(a.slug, b.slug, "identities persist in catalog order");
        assert_ne!(a.angle, b.angle, "{}: angle carried over", a.slug);
        assert_ne!(a.position, b.position, "{}: position carried over", a.slug);
        assert_eq!(b.velocity, glam::Vec2::ZERO);
    }
}

#[test]
fn tick_is_throttled_to_the_step_interval() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(11);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));

    assert!(sim.tick(Duration::ZERO).is_some(), "first tick publishes");
    assert!(sim.tick(Duration::from_millis(10)).is_none());
    assert!(sim.tick(Duration::from_millis(10)).is_none());
    let snap = sim.tick(Duration::from_millis(14)).expect("interval reached");
    assert_eq!(snap.step, 2);

    // A long stall runs a single step, no catch-up.
    let snap = sim.tick(Duration::from_secs(1)).expect("stall");
    assert_eq!(snap.step, 3);
}

#[test]
fn stop_discards_particles() {
    let catalog = Catalog::default_catalog();
    let mut sim = make_sim(12);
    sim.initialize(catalog.songs(), Viewport::new(1200.0, 800.0));
    sim.stop();
    assert!(!sim.is_running());
    assert!(sim.snapshot().is_empty());
    assert!(sim.step().is_none());
}
