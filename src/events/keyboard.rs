use super::pointer::InputWiring;
use crate::dom;
use crate::input::{key_action, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keyboard access on the focusable map canvas: arrows cycle through the
/// nodes, Enter/Space opens the focused one, Escape drops focus.
pub fn wire_keyboard_handlers(w: &InputWiring) {
    w.canvas.set_tab_index(0);
    _ = w.canvas.set_attribute("role", "application");
    _ = w
        .canvas
        .set_attribute("aria-label", "Song map. Use arrow keys to browse songs.");
    wire_keydown(w);
    wire_focus(w);
    wire_blur(w);
}

fn wire_keydown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let Some(action) = key_action(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        match action {
            KeyAction::Next => {
                let command = w.session.borrow_mut().focus_next();
                w.apply(command);
            }
            KeyAction::Prev => {
                let command = w.session.borrow_mut().focus_prev();
                w.apply(command);
            }
            KeyAction::Activate => {
                let target = w.session.borrow().activation_target();
                if let Some(path) = target {
                    log::info!("[key] open {}", path);
                    dom::navigate(&path);
                }
            }
            KeyAction::Dismiss => {
                let command = w.session.borrow_mut().blur();
                w.apply(command);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_focus(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
        // A mouse press also focuses the canvas; only keyboard focus picks a node.
        let from_keyboard = w.canvas.matches(":focus-visible").unwrap_or(false);
        let has_focus = w.session.borrow().interaction().focused().is_some();
        if from_keyboard && !has_focus {
            let command = w.session.borrow_mut().focus_next();
            w.apply(command);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_blur(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::FocusEvent| {
        let command = w.session.borrow_mut().blur();
        w.apply(command);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
    closure.forget();
}
