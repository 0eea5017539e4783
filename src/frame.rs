use crate::dom;
use crate::draw::MapPainter;
use crate::render::OrnamentRenderer;
use instant::Instant;
use songmap_core::{Camera, MapSession, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<MapSession>>,
    pub root: web::Element,
    pub map_canvas: web::HtmlCanvasElement,
    pub ornament_canvas: web::HtmlCanvasElement,
    pub painter: MapPainter,
    pub gpu: Option<OrnamentRenderer>,
    pub started: Instant,
    /// Cleared on unmount; the loop stops requesting frames once it is false.
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::measure(&self.root);
        dom::sync_canvas_backing_size(&self.map_canvas);
        dom::sync_canvas_backing_size(&self.ornament_canvas);

        let session_rc = self.session.clone();
        let mut session = session_rc.borrow_mut();
        if let Some(outcome) = session.set_viewport(viewport) {
            log::info!(
                "[frame] viewport {:.0}x{:.0}: {:?}",
                viewport.width,
                viewport.height,
                outcome
            );
        }
        session.frame(self.started.elapsed());

        self.paint(&session, viewport);
    }

    fn paint(&mut self, session: &MapSession, viewport: Viewport) {
        let camera = Camera::for_viewport(viewport);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.ornament_canvas.width(), self.ornament_canvas.height());
            if let Err(e) = g.render(camera.view_proj(), session.ornaments().rings()) {
                log::error!("render error: {:?}", e);
            }
        }

        self.painter.begin(viewport, dom::device_pixel_ratio());
        self.painter
            .draw_ornament_labels(&session.ornaments(), &camera, viewport);
        if !viewport.is_measured() {
            return;
        }
        self.painter.draw_lattice(session.lattice());
        let snapshot = session.snapshot();
        self.painter
            .draw_nodes(&snapshot, session.interaction(), viewport.center());
        if let Some(layout) = session.tooltip() {
            self.painter.draw_tooltip(&layout);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, max_rings: usize) -> Option<OrnamentRenderer> {
    dom::sync_canvas_backing_size(canvas);
    match OrnamentRenderer::new(canvas, max_rings).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU unavailable, ornament rings disabled: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let running = frame_ctx.borrow().running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
