use fx_core::{Rect, Region, Section};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements that put the cursor into its interactive zone.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .card, [role=button]";

/// Pointer position in viewport (CSS pixel) coordinates.
#[inline]
pub fn client_px(ev: &web::Event) -> Option<Vec2> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(me.client_x() as f32, me.client_y() as f32))
}

/// `mouseout`/`mouseover` with no related target crossed the window edge.
#[inline]
pub fn crosses_window_edge(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|me| me.related_target().is_none())
        .unwrap_or(false)
}

#[inline]
pub fn dom_rect(r: &web::DomRect) -> Rect {
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Current viewport rectangles of the tracked sections, in registration order.
/// Sections whose element is not in the document yet are skipped.
pub fn measure_regions(document: &web::Document, tracked: &[(Section, String)]) -> Vec<Region> {
    tracked
        .iter()
        .filter_map(|(section, id)| {
            let el = document.get_element_by_id(id)?;
            Some(Region {
                section: *section,
                rect: dom_rect(&el.get_bounding_client_rect()),
            })
        })
        .collect()
}
