use cosmic_core::Viewport;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Left button (or touch/pen contact) of the primary pointer.
#[inline]
pub fn is_primary_press(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && ev.button() == 0
}

/// Pointer position in `[-1, 1]²` around the viewport centre.
#[inline]
pub fn pointer_ndc(client: Vec2, viewport: Viewport) -> Vec2 {
    viewport.normalize_point(client)
}

// ---------------- Keyboard helpers ----------------
/// Alt is the panel modifier; Ctrl/Meta+digit stay with the browser (tab switching).
#[inline]
pub fn panel_modifier_held(alt: bool, ctrl: bool, meta: bool) -> bool {
    alt && !ctrl && !meta
}
