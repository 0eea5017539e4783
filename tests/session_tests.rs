// Host-side tests for a mounted map: resize, hover, keyboard and unmount.

use glam::Vec2;
use songmap_core::constants::REVEAL_INTERVAL;
use songmap_core::*;
use std::rc::Rc;
use std::time::Duration;

fn make_session(reduced_motion: bool) -> MapSession {
    MapSession::new(
        Rc::new(Catalog::default_catalog()),
        ExcerptBook::default_excerpts(),
        SessionConfig {
            reduced_motion,
            ..SessionConfig::default()
        },
        Some(42),
    )
}

fn position_of(session: &MapSession, slug: &str) -> Vec2 {
    session
        .snapshot()
        .find(slug)
        .map(|p| p.position)
        .expect("particle exists")
}

#[test]
fn session_waits_for_a_measured_viewport() {
    let mut s = make_session(false);
    assert_eq!(s.set_viewport(Viewport::new(0.0, 0.0)), None, "unchanged");
    assert!(!s.is_physics_running());
    s.frame(Duration::ZERO);
    assert!(s.snapshot().is_empty());

    let outcome = s.set_viewport(Viewport::new(1200.0, 800.0));
    assert_eq!(outcome, Some(InitOutcome::Started(5)));
    assert!(s.is_physics_running());
    assert_eq!(s.set_viewport(Viewport::new(1200.0, 800.0)), None);
}

#[test]
fn resize_restarts_physics_with_the_same_songs() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    for i in 0..30 {
        s.frame(Duration::from_millis(34 * i));
    }
    let before = s.snapshot();
    assert!(before.step > 0, "physics ran on the clock");
    let offset = s.rotation_offset();

    s.set_viewport(Viewport::new(800.0, 600.0));
    let after = s.snapshot();
    assert_eq!(after.step, 0);
    assert_ne!(s.rotation_offset(), offset);
    let a: Vec<&str> = before.particles.iter().map(|p| &*p.slug).collect();
    let b: Vec<&str> = after.particles.iter().map(|p| &*p.slug).collect();
    assert_eq!(a, b);
    for (p, q) in before.particles.iter().zip(after.particles.iter()) {
        assert_ne!(p.angle, q.angle, "{}: angle carried over", p.slug);
        assert_ne!(p.position, q.position, "{}: position carried over", p.slug);
    }
    assert_eq!(s.lattice().viewport, Viewport::new(800.0, 600.0));

    // Only the rebuilt physics task advances: one fresh step on the next frame.
    s.frame(Duration::from_millis(34 * 30));
    assert_eq!(s.snapshot().step, 1);
}

#[test]
fn ornaments_keep_turning_across_resizes() {
    let mut s = make_session(false);
    s.frame(Duration::ZERO);
    s.frame(Duration::from_millis(500));
    s.set_viewport(Viewport::new(640.0, 480.0));
    s.frame(Duration::from_millis(1000));
    assert!((s.ornaments().elapsed() - 1.0).abs() < 1e-4);
}

#[test]
fn hovering_a_plain_title_shows_it_immediately() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    let at = position_of(&s, "trophy-hunting");

    let cmd = s.pointer_move(at);
    assert_eq!(cmd, Some(TimerCommand::Stop));
    assert_eq!(s.interaction().hovered(), Some("trophy-hunting"));
    let tooltip = s.tooltip().expect("tooltip for the hovered node");
    let body: Vec<&str> = tooltip
        .lines
        .iter()
        .filter(|l| l.role == LineRole::Body)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(body.join(" "), "Trophy Hunting");
    assert_eq!(s.activation_target().as_deref(), Some("/music/trophy-hunting"));

    // Moving within the hit radius does not restart anything.
    assert_eq!(s.pointer_move(at + Vec2::new(1.0, 0.0)), None);
}

#[test]
fn hovering_an_excerpt_song_starts_the_reveal() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    let at = position_of(&s, "supernova");

    assert_eq!(s.pointer_move(at), Some(TimerCommand::Start(REVEAL_INTERVAL)));
    let empty_body = s
        .tooltip()
        .expect("tooltip")
        .lines
        .iter()
        .any(|l| l.role == LineRole::Body && !l.text.is_empty());
    assert!(!empty_body, "reveal starts from nothing");

    while !s.reveal_tick() {}
    let body: Vec<String> = s
        .tooltip()
        .expect("tooltip")
        .lines
        .iter()
        .filter(|l| l.role == LineRole::Body)
        .map(|l| l.text.clone())
        .collect();
    assert_eq!(body.join(" "), "I still sing our favorite songs");

    assert_eq!(s.pointer_leave(), Some(TimerCommand::Stop));
    assert!(s.tooltip().is_none());
}

#[test]
fn reduced_motion_reveals_excerpts_at_once() {
    let mut s = make_session(true);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    let at = position_of(&s, "rush");
    assert_eq!(s.pointer_move(at), Some(TimerCommand::Stop));
}

#[test]
fn keyboard_focus_cycles_in_catalog_order() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    s.focus_next();
    assert_eq!(s.interaction().focused(), Some("rush"));
    s.focus_next();
    assert_eq!(s.interaction().focused(), Some("testing"));
    s.focus_prev();
    s.focus_prev();
    assert_eq!(
        s.interaction().focused(),
        Some("samsara-city-lights-demo"),
        "focus wraps around"
    );
    assert_eq!(
        s.activation_target().as_deref(),
        Some("/music/samsara-city-lights-demo")
    );

    // Hover wins over focus while the pointer is on a node.
    let at = position_of(&s, "rush");
    s.pointer_move(at);
    assert_eq!(s.interaction().active(), Some("rush"));
    s.pointer_leave();
    assert_eq!(s.interaction().active(), Some("samsara-city-lights-demo"));

    assert_eq!(s.blur(), Some(TimerCommand::Stop));
    assert!(s.activation_target().is_none());
}

#[test]
fn clicking_empty_space_opens_nothing_while_a_node_is_focused() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    s.focus_next();
    let empty = Vec2::new(5.0, 5.0);
    s.pointer_move(empty);

    assert_eq!(s.interaction().hovered(), None);
    assert_eq!(s.node_at(empty), None, "no node under the click");
    assert_eq!(
        s.activation_target().as_deref(),
        Some("/music/rush"),
        "keyboard focus still drives Enter"
    );

    let at = position_of(&s, "supernova");
    assert_eq!(s.node_at(at).as_deref(), Some("supernova"));
}

#[test]
fn unmount_cancels_everything() {
    let mut s = make_session(false);
    s.set_viewport(Viewport::new(1200.0, 800.0));
    s.focus_next();
    s.frame(Duration::ZERO);
    s.unmount();

    assert!(!s.is_mounted());
    assert!(!s.is_physics_running());
    assert!(s.snapshot().is_empty());
    assert!(s.interaction().active().is_none());

    let elapsed = s.ornaments().elapsed();
    s.frame(Duration::from_secs(5));
    assert_eq!(s.ornaments().elapsed(), elapsed, "ornament task was cancelled");
    assert_eq!(s.set_viewport(Viewport::new(640.0, 480.0)), None);
}
