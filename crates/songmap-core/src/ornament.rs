//! Decorative background: clusters of nested rings spinning about fixed
//! axes, each circled by a few small numeric labels.
//!
//! Every parameter is derived from a per-cluster seed through [`hash01`] at
//! construction, so two scenes built from the same [`OrnamentParams`] move
//! identically. After construction the only input is elapsed time.

use crate::clock::FrameTask;
use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

/// Deterministic pseudo-random value in `[0, 1)` for `(seed, index)`.
pub fn hash01(seed: f32, index: u32) -> f32 {
    let v = ((seed as f64) * 12.9898 + (index as f64) * 78.233).sin() * 43_758.545_3;
    let r = (v - v.floor()) as f32;
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Unit vector spread evenly over the sphere from two uniform samples.
fn unit_axis(u: f32, v: f32) -> Vec3 {
    let z = u * 2.0 - 1.0;
    let phi = v * TAU;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let axis = Vec3::new(r * phi.cos(), r * phi.sin(), z).normalize_or_zero();
    if axis == Vec3::ZERO {
        Vec3::Y
    } else {
        axis
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentParams {
    pub cluster_count: usize,
    pub rings_per_cluster: usize,
    pub labels_per_cluster: usize,
    pub base_seed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub field_half_extent: f32,
    pub depth_range: (f32, f32),
}

impl Default for OrnamentParams {
    fn default() -> Self {
        Self {
            cluster_count: ORNAMENT_CLUSTER_COUNT,
            rings_per_cluster: ORNAMENT_RINGS_PER_CLUSTER,
            labels_per_cluster: ORNAMENT_LABELS_PER_CLUSTER,
            base_seed: ORNAMENT_BASE_SEED,
            min_speed: ORNAMENT_MIN_SPEED,
            max_speed: ORNAMENT_MAX_SPEED,
            field_half_extent: ORNAMENT_FIELD_HALF_EXTENT,
            depth_range: ORNAMENT_DEPTH_RANGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingShape {
    pub radius: f32,
    /// Fixed orientation of this ring inside its cluster.
    pub tilt: Quat,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelOrbit {
    pub text: String,
    pub radius: f32,
    /// Rotates the XY orbit circle onto the label's orbital plane.
    pub plane: Quat,
    pub speed: f32,
    pub phase: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentCluster {
    pub seed: f32,
    pub center: Vec3,
    pub rings: SmallVec<[RingShape; 4]>,
    pub axis: Vec3,
    pub speed: f32,
    pub direction: f32,
    pub labels: SmallVec<[LabelOrbit; 4]>,
}

impl OrnamentCluster {
    fn build(index: usize, params: &OrnamentParams) -> Self {
        let seed = params.base_seed + index as f32 * 7.31;
        let h = |k: u32| hash01(seed, k);

        let count = params.cluster_count.max(1) as f32;
        let slot = (index as f32 + 0.5) / count;
        let spacing = 2.0 * params.field_half_extent / count;
        let center = Vec3::new(
            lerp(-params.field_half_extent, params.field_half_extent, slot)
                + (h(0) - 0.5) * spacing * 0.5,
            (h(1) - 0.5) * 2.5,
            lerp(params.depth_range.0, params.depth_range.1, h(2)),
        );

        let size = lerp(0.6, 1.2, h(3));
        let rings = (0..params.rings_per_cluster)
            .map(|r| {
                let k = 10 + r as u32 * 3;
                RingShape {
                    radius: size * (1.0 - r as f32 * 0.22),
                    tilt: Quat::from_axis_angle(unit_axis(h(k), h(k + 1)), h(k + 2) * TAU),
                    alpha: 0.35 - r as f32 * 0.08,
                }
            })
            .collect();

        let labels = (0..params.labels_per_cluster)
            .map(|l| {
                let k = 40 + l as u32 * 5;
                LabelOrbit {
                    text: format!("{:02}", (h(k) * 99.0) as u32 + 1),
                    radius: size * lerp(1.15, 1.6, h(k + 1)),
                    plane: Quat::from_axis_angle(unit_axis(h(k + 2), h(k + 3)), h(k + 4) * TAU),
                    speed: lerp(0.15, 0.5, h(k + 4)),
                    phase: h(k + 3) * TAU,
                }
            })
            .collect();

        Self {
            seed,
            center,
            rings,
            axis: unit_axis(h(4), h(5)),
            speed: lerp(params.min_speed, params.max_speed, h(6)),
            direction: if index % 2 == 0 { 1.0 } else { -1.0 },
            labels,
        }
    }

    pub fn rotation(&self, elapsed: f32) -> Quat {
        Quat::from_axis_angle(self.axis, elapsed * self.speed * self.direction)
    }
}

/// One ring to draw this frame; the model matrix maps the unit circle in the
/// XY plane to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingInstance {
    pub model: Mat4,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelInstance<'a> {
    pub text: &'a str,
    pub position: Vec3,
}

pub struct OrnamentScene {
    clusters: Vec<OrnamentCluster>,
    elapsed: f32,
}

impl OrnamentScene {
    pub fn new(params: &OrnamentParams) -> Self {
        let clusters = (0..params.cluster_count)
            .map(|i| OrnamentCluster::build(i, params))
            .collect::<Vec<_>>();
        log::debug!("[ornament] built {} clusters", clusters.len());
        Self {
            clusters,
            elapsed: 0.0,
        }
    }

    pub fn clusters(&self) -> &[OrnamentCluster] {
        &self.clusters
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f32();
    }

    pub fn ring_count(&self) -> usize {
        self.clusters.iter().map(|c| c.rings.len()).sum()
    }

    pub fn rings(&self) -> impl Iterator<Item = RingInstance> + '_ {
        let t = self.elapsed;
        self.clusters.iter().flat_map(move |c| {
            let spin = c.rotation(t);
            c.rings.iter().map(move |r| RingInstance {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(r.radius),
                    spin * r.tilt,
                    c.center,
                ),
                alpha: r.alpha,
            })
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = LabelInstance<'_>> + '_ {
        let t = self.elapsed;
        self.clusters.iter().flat_map(move |c| {
            let spin = c.rotation(t);
            c.labels.iter().map(move |l| {
                let a = l.phase + t * l.speed * c.direction;
                let local = Vec3::new(a.cos(), a.sin(), 0.0) * l.radius;
                LabelInstance {
                    text: l.text.as_str(),
                    position: c.center + spin * (l.plane * local),
                }
            })
        })
    }
}

impl FrameTask for OrnamentScene {
    fn on_frame(&mut self, dt: Duration) {
        self.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash01_stays_in_unit_interval() {
        for seed in [0.0f32, 1.5, 17.0, 123.456, -42.0] {
            for i in 0..256 {
                let v = hash01(seed, i);
                assert!((0.0..1.0).contains(&v), "hash01({seed}, {i}) = {v}");
            }
        }
    }

    #[test]
    fn unit_axis_is_normalized() {
        for i in 0..32 {
            let a = unit_axis(hash01(3.0, i), hash01(5.0, i));
            assert!((a.length() - 1.0).abs() < 1e-4);
        }
    }
}
