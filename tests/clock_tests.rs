// Host-side tests for the shared frame clock.

use songmap_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, Duration)>>>,
}

impl FrameTask for Recorder {
    fn on_frame(&mut self, dt: Duration) {
        self.log.borrow_mut().push((self.name, dt));
    }
}

fn recorder(
    name: &'static str,
    log: &Rc<RefCell<Vec<(&'static str, Duration)>>>,
) -> Rc<RefCell<Recorder>> {
    Rc::new(RefCell::new(Recorder {
        name,
        log: log.clone(),
    }))
}

#[test]
fn tasks_run_in_registration_order_with_frame_delta() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut clock = FrameClock::new();
    clock.register(recorder("physics", &log));
    clock.register(recorder("ornament", &log));

    clock.advance(Duration::from_millis(1000));
    clock.advance(Duration::from_millis(1016));
    assert_eq!(
        *log.borrow(),
        vec![
            ("physics", Duration::ZERO),
            ("ornament", Duration::ZERO),
            ("physics", Duration::from_millis(16)),
            ("ornament", Duration::from_millis(16)),
        ]
    );
}

#[test]
fn cancelled_task_is_never_invoked_again() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut clock = FrameClock::new();
    let physics = clock.register(recorder("physics", &log));
    let ornament = clock.register(recorder("ornament", &log));

    assert!(clock.cancel(physics));
    assert!(!clock.cancel(physics), "second cancel is a no-op");
    assert!(!clock.is_registered(physics));
    assert!(clock.is_registered(ornament));

    clock.advance(Duration::ZERO);
    clock.advance(Duration::from_millis(33));
    assert!(log.borrow().iter().all(|(name, _)| *name == "ornament"));
    assert_eq!(log.borrow().len(), 2);

    clock.cancel_all();
    assert!(clock.is_empty());
    clock.advance(Duration::from_millis(66));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn throttle_opens_once_per_interval() {
    let mut t = Throttle::new(Duration::from_millis(33));
    assert!(t.ready(Duration::ZERO), "first call opens");
    assert!(!t.ready(Duration::from_millis(16)));
    assert!(t.ready(Duration::from_millis(17)));
    assert!(!t.ready(Duration::from_millis(32)));
    assert!(t.ready(Duration::from_millis(500)));
    assert!(!t.ready(Duration::from_millis(1)), "no catch-up after a stall");

    t.reset();
    assert!(t.ready(Duration::ZERO));
    assert_eq!(t.interval(), Duration::from_millis(33));
}
