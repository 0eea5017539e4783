use songmap_core::{MapSession, TimerCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the `setInterval` registration that advances the excerpt reveal.
/// One callback is created up front and reused for every restart.
pub struct RevealDriver {
    interval_id: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl RevealDriver {
    pub fn install(session: Rc<RefCell<MapSession>>) -> Rc<RefCell<Self>> {
        let driver = Rc::new(RefCell::new(Self {
            interval_id: None,
            callback: None,
        }));
        let driver_tick = driver.clone();
        let callback = Closure::wrap(Box::new(move || {
            let done = session.borrow_mut().reveal_tick();
            if done {
                driver_tick.borrow_mut().clear();
            }
        }) as Box<dyn FnMut()>);
        driver.borrow_mut().callback = Some(callback);
        driver
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Start(interval) => self.start(interval.as_millis() as i32),
            TimerCommand::Stop => self.clear(),
        }
    }

    fn start(&mut self, interval_ms: i32) {
        self.clear();
        let (Some(window), Some(cb)) = (web::window(), self.callback.as_ref()) else {
            return;
        };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            interval_ms.max(1),
        ) {
            Ok(id) => self.interval_id = Some(id),
            Err(e) => log::warn!("[reveal] setInterval failed: {:?}", e),
        }
    }

    pub fn clear(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }
}
