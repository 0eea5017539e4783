use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels. The map is laid
/// out in CSS pixels, so no devicePixelRatio scaling happens here.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Keyboard actions the map understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Prev,
    Activate,
    Dismiss,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(KeyAction::Next),
        "ArrowLeft" | "ArrowUp" => Some(KeyAction::Prev),
        "Enter" | " " => Some(KeyAction::Activate),
        "Escape" => Some(KeyAction::Dismiss),
        _ => None,
    }
}
