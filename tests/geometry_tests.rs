// Host-side tests for the ellipse lattice.

use glam::Vec2;
use songmap_core::constants::{FLATTEN_FACTOR, GRID_POINT_COUNT, RIB_COUNT};
use songmap_core::*;

#[test]
fn build_lattice_is_deterministic() {
    let params = LatticeParams::default();
    let a = build_lattice(1200.0, 800.0, &params);
    let b = build_lattice(1200.0, 800.0, &params);
    assert_eq!(a, b, "same inputs must give identical ellipses");
    assert_eq!(a.len(), params.level_count);
}

#[test]
fn point_on_ellipse_satisfies_the_ellipse_equation() {
    let center = Vec2::new(600.0, 400.0);
    let (rx, ry) = (140.0f32, 140.0 * 0.85 * FLATTEN_FACTOR);
    for i in 0..360 {
        let angle = (i as f32).to_radians();
        let p = point_on_ellipse(center, rx, ry, angle);
        let lhs = ((p.x - center.x) / rx).powi(2) + ((p.y - center.y) / ry).powi(2);
        assert!((lhs - 1.0).abs() < 1e-4, "angle {angle}: {lhs}");
    }
}

#[test]
fn lattice_is_centered_and_evenly_spaced() {
    let params = LatticeParams::default();
    let ellipses = build_lattice(1200.0, 800.0, &params);
    let top = 400.0 - params.total_height() / 2.0;
    for (i, e) in ellipses.iter().enumerate() {
        assert_eq!(e.index, i);
        assert!((e.center.x - 600.0).abs() < 1e-4);
        let expected_y = top + i as f32 * params.vertical_spacing;
        assert!(
            (e.center.y - expected_y).abs() < 1e-3,
            "level {i}: cy {} != {expected_y}",
            e.center.y
        );
        assert!((e.ry - e.rx * params.width_ratio * FLATTEN_FACTOR).abs() < 1e-4);
    }
}

#[test]
fn rings_shrink_from_top_to_bottom() {
    let ellipses = build_lattice(1200.0, 800.0, &LatticeParams::default());
    assert!((ellipses[0].rx - LatticeParams::default().base_radius).abs() < 1e-4);
    for pair in ellipses.windows(2) {
        assert!(pair[1].rx < pair[0].rx, "rx must decrease with level");
    }
}

#[test]
fn lattice_decorations_follow_the_rings() {
    let params = LatticeParams::default();
    let lattice = Lattice::new(Viewport::new(1200.0, 800.0), &params);
    assert_eq!(lattice.grid_points.len(), params.level_count * GRID_POINT_COUNT);
    assert_eq!(lattice.ribs.len(), RIB_COUNT);

    let labelled: Vec<usize> = lattice
        .grid_points
        .iter()
        .filter(|g| g.ellipse_index == 0)
        .filter_map(|g| g.label())
        .collect();
    assert_eq!(labelled.first(), Some(&1));
    assert!(labelled.iter().all(|n| (n - 1) % 3 == 0));

    let top = lattice.ellipse(0).expect("top ring");
    let bottom = lattice.ellipse(params.level_count - 1).expect("bottom ring");
    assert!(lattice.axis.from.y < top.center.y);
    assert!(lattice.axis.to.y > bottom.center.y);
    assert!(lattice.caption_anchor.y > lattice.axis.to.y);
    assert!(lattice.ellipse(params.level_count).is_none());
}

#[test]
fn zero_viewport_still_builds_a_lattice() {
    let lattice = Lattice::new(Viewport::default(), &LatticeParams::default());
    assert!(!lattice.viewport.is_measured());
    assert_eq!(lattice.ellipses.len(), LatticeParams::default().level_count);
}
