use fx_core::Theme;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Theme from the `dark` class on `<html>`.
pub fn read_theme(document: &web::Document) -> Theme {
    match document.document_element() {
        Some(el) if el.class_list().contains("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None => Theme::default(),
    }
}

/// Decorative canvases must never take input or reach assistive technology.
pub fn make_inert(canvas: &web::HtmlCanvasElement) {
    let _ = canvas.set_attribute("aria-hidden", "true");
    let _ = canvas.style().set_property("pointer-events", "none");
}

/// An attached event listener, removed again on drop.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener on `window`.
    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
