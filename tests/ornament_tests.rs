// Host-side tests for the decorative ring scene and its camera.

use glam::{Vec2, Vec3};
use songmap_core::*;
use std::time::Duration;

#[test]
fn hash_is_deterministic_and_bounded() {
    for i in 0..64 {
        let a = hash01(17.0, i);
        assert_eq!(a, hash01(17.0, i));
        assert!((0.0..1.0).contains(&a), "hash01(17, {i}) = {a}");
    }
    assert_ne!(hash01(17.0, 0), hash01(17.0, 1));
}

#[test]
fn two_scenes_from_the_same_params_move_identically() {
    let params = OrnamentParams::default();
    let mut a = OrnamentScene::new(&params);
    let mut b = OrnamentScene::new(&params);
    assert_eq!(a.clusters(), b.clusters());

    for _ in 0..10 {
        a.advance(Duration::from_millis(16));
        b.advance(Duration::from_millis(16));
    }
    let ra: Vec<RingInstance> = a.rings().collect();
    let rb: Vec<RingInstance> = b.rings().collect();
    assert_eq!(ra, rb);
    let la: Vec<Vec3> = a.labels().map(|l| l.position).collect();
    let lb: Vec<Vec3> = b.labels().map(|l| l.position).collect();
    assert_eq!(la, lb);
}

#[test]
fn scene_shape_follows_params() {
    let params = OrnamentParams::default();
    let scene = OrnamentScene::new(&params);
    assert_eq!(scene.clusters().len(), params.cluster_count);
    assert_eq!(
        scene.ring_count(),
        params.cluster_count * params.rings_per_cluster
    );
    assert_eq!(
        scene.labels().count(),
        params.cluster_count * params.labels_per_cluster
    );
    for (i, c) in scene.clusters().iter().enumerate() {
        let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(c.direction, expected, "cluster {i} direction");
        assert!(c.speed >= params.min_speed && c.speed <= params.max_speed);
        assert!((c.axis.length() - 1.0).abs() < 1e-4);
        for pair in c.rings.windows(2) {
            assert!(pair[1].radius < pair[0].radius, "rings are nested");
        }
        for l in &c.labels {
            assert!(l.text.chars().all(|ch| ch.is_ascii_digit()));
        }
    }
}

#[test]
fn rotation_depends_on_elapsed_time_only() {
    let params = OrnamentParams::default();
    let mut coarse = OrnamentScene::new(&params);
    let mut fine = OrnamentScene::new(&params);
    coarse.advance(Duration::from_millis(1000));
    for _ in 0..100 {
        fine.advance(Duration::from_millis(10));
    }
    for (a, b) in coarse.labels().zip(fine.labels()) {
        assert!(
            a.position.distance(b.position) < 1e-3,
            "frame rate changed the pose: {:?} vs {:?}",
            a.position,
            b.position
        );
    }
}

#[test]
fn rings_actually_turn() {
    let mut scene = OrnamentScene::new(&OrnamentParams::default());
    let before: Vec<RingInstance> = scene.rings().collect();
    scene.advance(Duration::from_secs(2));
    let after: Vec<RingInstance> = scene.rings().collect();
    assert!(before
        .iter()
        .zip(after.iter())
        .all(|(a, b)| a.model != b.model));
}

#[test]
fn camera_projects_the_origin_to_the_viewport_center() {
    let viewport = Viewport::new(1200.0, 800.0);
    let camera = Camera::for_viewport(viewport);
    let center = camera.project(Vec3::ZERO, viewport).expect("in front");
    assert!(center.distance(Vec2::new(600.0, 400.0)) < 1e-2);

    // Up in world space is up on screen.
    let above = camera.project(Vec3::new(0.0, 1.0, 0.0), viewport).expect("in front");
    assert!(above.y < center.y);

    let behind = camera.project(Vec3::new(0.0, 0.0, 20.0), viewport);
    assert!(behind.is_none(), "points behind the eye are culled");
}
