pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard_handlers;
pub use pointer::{wire_pointer_handlers, InputWiring};

use crate::dom;
use std::cell::Cell;
use std::rc::Rc;

/// Leaving the page unmounts the map: both animation drivers are cancelled
/// and the reveal interval is cleared.
pub fn wire_unmount(w: &InputWiring, running: Rc<Cell<bool>>) {
    let w = w.clone();
    dom::add_window_listener("pagehide", move || {
        running.set(false);
        w.session.borrow_mut().unmount();
        w.reveal.borrow_mut().clear();
    });
}
