//! Orbital particle simulation.
//!
//! One particle per song. Every step advances each particle's driven angle
//! along its ring, pulls the particle toward the matching point on the
//! ellipse, separates overlapping particles and integrates with drag. The
//! drive re-energizes the system every step, so it never settles; it runs
//! until [`Simulation::stop`] or the next [`Simulation::initialize`].
//!
//! Typical usage:
//! - `let mut sim = Simulation::new(PhysicsParams::default(), LatticeParams::default(), seed)`
//! - `sim.initialize(catalog.songs(), viewport)` whenever the viewport changes
//! - `sim.tick(dt)` every repaint; it steps at most once per `tick_interval`
//! - read `sim.snapshot()` from the render path

use crate::catalog::Song;
use crate::clock::{FrameTask, Throttle};
use crate::constants::*;
use crate::geometry::{ellipse_for_level, Ellipse, LatticeParams, Viewport};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::rc::Rc;
use std::time::Duration;

/// Force and timing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsParams {
    pub collision_radius: f32,
    pub collision_strength: f32,
    pub radial_strength: f32,
    pub vertical_pull_factor: f32,
    pub velocity_decay: f32,
    pub orbital_speed: f32,
    pub angle_jitter: f32,
    pub position_jitter: f32,
    pub tick_interval: Duration,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            collision_radius: COLLISION_RADIUS,
            collision_strength: COLLISION_STRENGTH,
            radial_strength: RADIAL_STRENGTH,
            vertical_pull_factor: VERTICAL_PULL_FACTOR,
            velocity_decay: VELOCITY_DECAY,
            orbital_speed: ORBITAL_SPEED,
            angle_jitter: ANGLE_JITTER,
            position_jitter: JITTER_AMOUNT,
            tick_interval: TICK_INTERVAL,
        }
    }
}

/// A simulated song node.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub slug: Rc<str>,
    pub title: Rc<str>,
    /// Ring level, fixed for the particle's lifetime.
    pub ellipse_index: usize,
    /// Driven position on the ring in `[0, 2π)`.
    pub angle: f32,
    /// `1.0` or `-1.0`.
    pub orbit_direction: f32,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Immutable copy of the particle set published once per step.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub step: u64,
    pub particles: Rc<[Particle]>,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            step: 0,
            particles: Rc::from(Vec::new()),
        }
    }

    pub fn find(&self, slug: &str) -> Option<&Particle> {
        self.particles.iter().find(|p| &*p.slug == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Particles were created and the engine is running.
    Started(usize),
    /// No songs: nothing to simulate.
    Empty,
    /// Viewport not measured yet; call again once it is.
    Deferred,
}

/// Level for catalog position `index` of `count` songs spread over `levels`.
#[inline]
pub fn level_for_index(index: usize, count: usize, levels: usize) -> usize {
    if count == 0 || levels == 0 {
        return 0;
    }
    (index * levels / count).min(levels - 1)
}

/// Even parity orbits forward, odd parity backward.
#[inline]
pub fn orbit_direction_for_index(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

pub struct Simulation {
    pub params: PhysicsParams,
    pub lattice: LatticeParams,
    particles: Vec<Particle>,
    ellipses: Vec<Ellipse>,
    snapshot: Snapshot,
    throttle: Throttle,
    rng: StdRng,
    rotation_offset: f32,
    running: bool,
    steps: u64,
}

impl Simulation {
    pub fn new(params: PhysicsParams, lattice: LatticeParams, seed: u64) -> Self {
        let throttle = Throttle::new(params.tick_interval);
        Self {
            params,
            lattice,
            particles: Vec::new(),
            ellipses: Vec::new(),
            snapshot: Snapshot::empty(),
            throttle,
            rng: StdRng::seed_from_u64(seed),
            rotation_offset: 0.0,
            running: false,
            steps: 0,
        }
    }

    /// Seeded from OS entropy, for the live page.
    pub fn from_entropy(params: PhysicsParams, lattice: LatticeParams) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(params, lattice, seed)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Global rotation shared by every particle of the current session.
    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    /// (Re)create the particle set for `songs` laid out in `viewport`.
    ///
    /// Any running session is stopped first; angles and velocities are never
    /// carried over.
    pub fn initialize(&mut self, songs: &[Song], viewport: Viewport) -> InitOutcome {
        self.stop();
        if !viewport.is_measured() {
            log::debug!(
                "[physics] viewport {}x{} not measured; deferring",
                viewport.width,
                viewport.height
            );
            return InitOutcome::Deferred;
        }
        if songs.is_empty() {
            log::debug!("[physics] no songs; engine idle");
            return InitOutcome::Empty;
        }

        let levels = self.lattice.level_count;
        self.ellipses = (0..levels)
            .map(|i| ellipse_for_level(viewport, &self.lattice, i))
            .collect();

        let count = songs.len();
        self.rotation_offset = self.rng.gen::<f32>() * TAU;
        let half_jitter = self.params.position_jitter * 0.5;
        let angle_jitter = self.params.angle_jitter;

        let mut particles = Vec::with_capacity(count);
        for (i, song) in songs.iter().enumerate() {
            let level = level_for_index(i, count, levels);
            let jitter = if angle_jitter > 0.0 {
                self.rng.gen_range(-angle_jitter..=angle_jitter)
            } else {
                0.0
            };
            let angle =
                (TAU * i as f32 / count as f32 + self.rotation_offset + jitter).rem_euclid(TAU);
            let base = self.ellipses[level].point_at(angle);
            let offset = if half_jitter > 0.0 {
                Vec2::new(
                    self.rng.gen_range(-half_jitter..=half_jitter),
                    self.rng.gen_range(-half_jitter..=half_jitter),
                )
            } else {
                Vec2::ZERO
            };
            particles.push(Particle {
                slug: Rc::from(song.slug.as_str()),
                title: Rc::from(song.title.as_str()),
                ellipse_index: level,
                angle,
                orbit_direction: orbit_direction_for_index(i),
                position: base + offset,
                velocity: Vec2::ZERO,
            });
        }

        self.particles = particles;
        self.running = true;
        self.publish();
        log::info!(
            "[physics] started: {} particles over {} levels, viewport {}x{}",
            count,
            levels,
            viewport.width,
            viewport.height
        );
        InitOutcome::Started(count)
    }

    /// Cancel the session and discard the particle set.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("[physics] stopped after {} steps", self.steps);
        }
        self.running = false;
        self.particles.clear();
        self.ellipses.clear();
        self.snapshot = Snapshot::empty();
        self.throttle.reset();
        self.steps = 0;
    }

    /// Throttled entry point for the repaint loop. Returns the new snapshot
    /// when a step ran.
    pub fn tick(&mut self, dt: Duration) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        if self.throttle.ready(dt) {
            self.step()
        } else {
            None
        }
    }

    /// Run exactly one physics step and publish the result.
    pub fn step(&mut self) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        self.apply_orbital_drive();
        self.apply_collisions();
        self.integrate();
        self.steps += 1;
        self.publish();
        Some(self.snapshot.clone())
    }

    fn apply_orbital_drive(&mut self) {
        let speed = self.params.orbital_speed;
        let k = self.params.radial_strength;
        let ky = k * self.params.vertical_pull_factor;
        for p in &mut self.particles {
            p.angle = (p.angle + speed * p.orbit_direction).rem_euclid(TAU);
            let target = self.ellipses[p.ellipse_index].point_at(p.angle);
            let delta = target - p.position;
            p.velocity.x += delta.x * k;
            p.velocity.y += delta.y * ky;
        }
    }

    /// Single relaxation pass over all pairs on predicted positions. With
    /// equal radii each particle of an overlapping pair takes half the push.
    fn apply_collisions(&mut self) {
        let Self {
            particles,
            params,
            rng,
            ..
        } = self;
        let r = params.collision_radius * 2.0;
        let r2 = r * r;
        let strength = params.collision_strength;
        let n = particles.len();
        for i in 0..n {
            let predicted = particles[i].position + particles[i].velocity;
            for j in (i + 1)..n {
                let other = particles[j].position + particles[j].velocity;
                let mut d = predicted - other;
                let mut l = d.length_squared();
                if l >= r2 {
                    continue;
                }
                if d.x == 0.0 {
                    d.x = jiggle(rng);
                    l += d.x * d.x;
                }
                if d.y == 0.0 {
                    d.y = jiggle(rng);
                    l += d.y * d.y;
                }
                let len = l.sqrt();
                let push = d * ((r - len) / len * strength);
                particles[i].velocity += push * 0.5;
                particles[j].velocity -= push * 0.5;
            }
        }
    }

    fn integrate(&mut self) {
        let keep = 1.0 - self.params.velocity_decay;
        for p in &mut self.particles {
            p.velocity *= keep;
            p.position += p.velocity;
        }
    }

    fn publish(&mut self) {
        self.snapshot = Snapshot {
            step: self.steps,
            particles: Rc::from(self.particles.clone()),
        };
    }
}

impl FrameTask for Simulation {
    fn on_frame(&mut self, dt: Duration) {
        self.tick(dt);
    }
}

#[inline]
fn jiggle(rng: &mut StdRng) -> f32 {
    (rng.gen::<f32>() - 0.5) * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_for_index_clamps_to_last_level() {
        assert_eq!(level_for_index(0, 1, 8), 0);
        assert_eq!(level_for_index(9, 10, 8), 7);
        assert_eq!(level_for_index(3, 3, 8), 7);
        assert_eq!(level_for_index(0, 0, 8), 0);
    }

    #[test]
    fn orbit_direction_alternates() {
        let dirs: Vec<f32> = (0..4).map(orbit_direction_for_index).collect();
        assert_eq!(dirs, vec![1.0, -1.0, 1.0, -1.0]);
    }
}
