#![cfg(target_arch = "wasm32")]
use instant::Instant;
use songmap_core::{Catalog, ExcerptBook, MapSession, SessionConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod draw;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod reveal_timer;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("songmap-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let root: web::Element = dom::element_by_id(&document, ROOT_ID)?;
    let map_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, MAP_CANVAS_ID)?;
    let ornament_canvas: web::HtmlCanvasElement =
        dom::element_by_id(&document, ORNAMENT_CANVAS_ID)?;
    let ctx = map_canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context on #{}", MAP_CANVAS_ID))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let reduced_motion = dom::prefers_reduced_motion(REDUCED_MOTION_QUERY);
    overlay::mark_reduced_motion(&document, reduced_motion);

    let catalog = Rc::new(Catalog::default_catalog());
    overlay::update_page_chrome(&document, catalog.len());
    log::info!(
        "[init] {} songs, reduced motion: {}",
        catalog.len(),
        reduced_motion
    );

    let session = Rc::new(RefCell::new(MapSession::new(
        catalog,
        ExcerptBook::default_excerpts(),
        SessionConfig {
            reduced_motion,
            ..SessionConfig::default()
        },
        None,
    )));
    let reveal = reveal_timer::RevealDriver::install(session.clone());
    let running = Rc::new(Cell::new(true));

    let wiring = events::InputWiring {
        canvas: map_canvas.clone(),
        session: session.clone(),
        reveal,
    };
    events::wire_pointer_handlers(&wiring);
    events::wire_keyboard_handlers(&wiring);
    events::wire_unmount(&wiring, running.clone());

    // The ornament pass is optional; the map itself only needs Canvas 2D.
    let ring_slots = session.borrow().ornaments().ring_count();
    let gpu = frame::init_gpu(&ornament_canvas, ring_slots).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        root,
        map_canvas,
        ornament_canvas,
        painter: draw::MapPainter::new(ctx),
        gpu,
        started: Instant::now(),
        running,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
