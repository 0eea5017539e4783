use crate::dom;
use crate::input;
use crate::reveal_timer::RevealDriver;
use songmap_core::{detail_path, MapSession, TimerCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<MapSession>>,
    pub reveal: Rc<RefCell<RevealDriver>>,
}

impl InputWiring {
    /// Forward a reveal command, if the interaction produced one.
    pub fn apply(&self, command: Option<TimerCommand>) {
        if let Some(c) = command {
            self.reveal.borrow_mut().apply(c);
        }
    }

    fn update_cursor(&self) {
        let hovering = self.session.borrow().interaction().hovered().is_some();
        _ = self
            .canvas
            .style()
            .set_property("cursor", if hovering { "pointer" } else { "default" });
    }
}

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_pointerleave(w);
    wire_click(w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let command = w.session.borrow_mut().pointer_move(pos);
        w.apply(command);
        w.update_cursor();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let command = w.session.borrow_mut().pointer_leave();
        w.apply(command);
        w.update_cursor();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // Touch input has no hover, so hit test at the click position.
        // Only a node under the pointer navigates, never keyboard focus.
        let pos = input::pointer_css_px(&ev, &w.canvas);
        let (command, target) = {
            let mut session = w.session.borrow_mut();
            let command = session.pointer_move(pos);
            (command, session.node_at(pos))
        };
        w.apply(command);
        w.update_cursor();
        if let Some(slug) = target {
            let path = detail_path(&slug);
            log::info!("[click] open {}", path);
            ev.prevent_default();
            dom::navigate(&path);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
