//! Shared frame clock driving the periodic tasks of the map.
//!
//! The host calls [`FrameClock::advance`] once per repaint with a monotonic
//! timestamp. Each registered task gets the elapsed time since the previous
//! repaint and decides for itself whether to do work (the physics engine
//! throttles to its own rate, the ornament scene runs every frame).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub trait FrameTask {
    fn on_frame(&mut self, dt: Duration);
}

/// Identifies a registration; cancelling it never affects other tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Default)]
pub struct FrameClock {
    tasks: Vec<(TaskHandle, Rc<RefCell<dyn FrameTask>>)>,
    next_id: u64,
    last: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, task: Rc<RefCell<dyn FrameTask>>) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push((handle, task));
        handle
    }

    /// Returns `false` if the handle was already cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(h, _)| *h != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_registered(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Dispatch one repaint. `now` only needs to be monotonic; the first call
    /// delivers a zero delta.
    pub fn advance(&mut self, now: Duration) {
        let dt = match self.last {
            Some(prev) => now.saturating_sub(prev),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        for (_, task) in &self.tasks {
            task.borrow_mut().on_frame(dt);
        }
    }
}

/// Wall-clock gate: lets work through at most once per `interval`.
///
/// Elapsed time accumulates across frames; once it reaches the interval the
/// gate opens and the accumulator restarts from zero. Missed intervals are
/// not replayed.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    elapsed: Duration,
    primed: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            primed: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The first call always opens so a fresh engine publishes immediately.
    pub fn ready(&mut self, dt: Duration) -> bool {
        if !self.primed {
            self.primed = true;
            self.elapsed = Duration::ZERO;
            return true;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.primed = false;
    }
}
