use crate::dom::{self, Listener};
use crate::frame::{start_loop, AnimationLoop};
use crate::input::{self, INTERACTIVE_SELECTOR};
use crate::render::CanvasSurface;
use anyhow::anyhow;
use fx_core::{Animator, CursorOverlay, OverlayConfig, Section, Surface, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// marks elements that already carry our enter/leave listeners
const TRACKED_ATTR: &str = "data-fx-cursor";

struct CursorScene {
    overlay: CursorOverlay,
    surface: CanvasSurface,
}

impl Animator for CursorScene {
    fn frame(&mut self, _now_ms: f64) {
        self.overlay.step();
        self.overlay.draw(&mut self.surface);
    }
}

/// One interactive element and its enter/leave listeners.
struct Tracked {
    id: u64,
    el: web::Element,
    _enter: Listener,
    _leave: Listener,
}

/// Sections and interactive elements registered with one mounted cursor.
struct Tracking {
    scene: Rc<RefCell<CursorScene>>,
    sections: RefCell<Vec<(Section, String)>>,
    interactive: RefCell<Vec<Tracked>>,
    next_id: Cell<u64>,
}

impl Tracking {
    fn track_region(&self, id: &str) -> bool {
        let Some(section) = Section::from_id(id) else {
            log::debug!("[cursor] ignoring unknown section id {:?}", id);
            return false;
        };
        {
            let mut sections = self.sections.borrow_mut();
            if sections.iter().any(|(_, known)| known == id) {
                return true;
            }
            sections.push((section, id.to_string()));
        }
        self.refresh_regions();
        true
    }

    /// Re-measure section rectangles; they move whenever the page scrolls.
    fn refresh_regions(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let regions = input::measure_regions(&document, &self.sections.borrow());
        self.scene.borrow_mut().overlay.set_regions(regions);
    }

    fn track_interactive(&self, el: web::Element) {
        if el.has_attribute(TRACKED_ATTR) {
            return;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let s = self.scene.clone();
        let enter = Listener::new(el.as_ref(), "mouseenter", move |_| {
            s.borrow_mut().overlay.interactive_entered(id);
        });
        let s = self.scene.clone();
        let leave = Listener::new(el.as_ref(), "mouseleave", move |_| {
            s.borrow_mut().overlay.interactive_left(id);
        });
        if let (Some(enter), Some(leave)) = (enter, leave) {
            let _ = el.set_attribute(TRACKED_ATTR, "");
            self.interactive.borrow_mut().push(Tracked {
                id,
                el,
                _enter: enter,
                _leave: leave,
            });
        }
    }

    /// Forget elements that left the document. They never fire `mouseleave`,
    /// so the overlay is told to stop treating them as hovered.
    fn prune(&self) {
        let mut detached = Vec::new();
        self.interactive.borrow_mut().retain(|t| {
            if t.el.is_connected() {
                true
            } else {
                let _ = t.el.remove_attribute(TRACKED_ATTR);
                detached.push(t.id);
                false
            }
        });
        if detached.is_empty() {
            return;
        }
        self.scene
            .borrow_mut()
            .overlay
            .retain_interactive(|id| !detached.contains(&id));
        log::debug!("[cursor] dropped {} detached elements", detached.len());
    }

    fn scan(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        self.prune();
        let Ok(nodes) = document.query_selector_all(INTERACTIVE_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                self.track_interactive(el);
            }
        }
    }

    fn release(&self) {
        for t in self.interactive.borrow_mut().drain(..) {
            let _ = t.el.remove_attribute(TRACKED_ATTR);
        }
    }
}

impl Drop for Tracking {
    fn drop(&mut self) {
        self.release();
    }
}

/// Re-scans for interactive elements whenever the document's children change.
struct Rescan {
    observer: web::MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
}

impl Rescan {
    fn start(tracking: &Rc<Tracking>) -> Option<Self> {
        let body = dom::window_document()?.body()?;
        let t = tracking.clone();
        let callback = Closure::wrap(Box::new(move |_: js_sys::Array, _: web::MutationObserver| {
            t.scan();
        }) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
        let observer = match web::MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(o) => o,
            Err(_) => {
                log::info!("[cursor] MutationObserver unavailable; explicit registration only");
                return None;
            }
        };
        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        if observer.observe_with_options(&body, &init).is_err() {
            return None;
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Rescan {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct Mounted {
    tracking: Rc<Tracking>,
    frame: AnimationLoop,
    _listeners: Vec<Listener>,
    _rescan: Option<Rescan>,
}

/// Handle returned to the host page. Inert when mounting failed.
#[wasm_bindgen]
pub struct CursorHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl CursorHandle {
    pub fn set_theme(&self, theme: &str) {
        if let Some(m) = &self.mounted {
            m.tracking
                .scene
                .borrow_mut()
                .overlay
                .set_theme(Theme::parse(theme));
        }
    }

    /// Register a page section by element id. Returns false for unknown ids.
    pub fn track_region(&self, id: &str) -> bool {
        match &self.mounted {
            Some(m) => m.tracking.track_region(id),
            None => false,
        }
    }

    /// Register one element as interactive (link, button, card...).
    pub fn track_interactive(&self, element: web::Element) {
        if let Some(m) = &self.mounted {
            m.tracking.track_interactive(element);
        }
    }

    /// Register every element currently matching the interactive selector.
    pub fn scan(&self) {
        if let Some(m) = &self.mounted {
            m.tracking.scan();
        }
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            m.tracking.release();
            m.tracking.scene.borrow_mut().surface.clear();
            log::info!("[cursor] unmounted");
        }
    }
}

/// Start the cursor overlay on `<canvas id=canvas_id>`, tracking the given
/// section ids.
#[wasm_bindgen]
pub fn mount_cursor(canvas_id: &str, region_ids: js_sys::Array) -> CursorHandle {
    let ids: Vec<String> = region_ids.iter().filter_map(|v| v.as_string()).collect();
    let mounted = match mount(canvas_id, &ids) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[cursor] staying idle: {:?}", e);
            None
        }
    };
    CursorHandle { mounted }
}

fn mount(canvas_id: &str, region_ids: &[String]) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    dom::make_inert(&canvas);

    let mut surface = CanvasSurface::new(canvas)?;
    let size = dom::viewport_size();
    surface.resize(size, dom::device_pixel_ratio());
    let overlay = CursorOverlay::new(
        OverlayConfig::default(),
        size.x,
        size.y,
        dom::read_theme(&document),
    );

    let tracking = Rc::new(Tracking {
        scene: Rc::new(RefCell::new(CursorScene { overlay, surface })),
        sections: RefCell::new(Vec::new()),
        interactive: RefCell::new(Vec::new()),
        next_id: Cell::new(0),
    });
    for id in region_ids {
        tracking.track_region(id);
    }
    tracking.scan();
    log::info!(
        "[cursor] mounted on #{} with {} sections, {} interactive elements",
        canvas_id,
        tracking.sections.borrow().len(),
        tracking.interactive.borrow().len()
    );

    let listeners = wire_listeners(&tracking);
    let rescan = Rescan::start(&tracking);
    let frame = start_loop(tracking.scene.clone());
    Ok(Mounted {
        tracking,
        frame,
        _listeners: listeners,
        _rescan: rescan,
    })
}

fn wire_listeners(tracking: &Rc<Tracking>) -> Vec<Listener> {
    let mut out = Vec::new();

    let t = tracking.clone();
    out.extend(Listener::on_window("pointermove", move |ev| {
        let Some(pos) = input::client_px(&ev) else {
            return;
        };
        t.prune();
        t.refresh_regions();
        t.scene.borrow_mut().overlay.pointer_moved(pos);
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("mouseover", move |ev| {
        if input::crosses_window_edge(&ev) {
            t.scene.borrow_mut().overlay.pointer_entered();
        }
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("mouseout", move |ev| {
        if input::crosses_window_edge(&ev) {
            t.scene.borrow_mut().overlay.pointer_left();
        }
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("pointerdown", move |_| {
        t.scene.borrow_mut().overlay.pointer_down();
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("pointerup", move |_| {
        t.scene.borrow_mut().overlay.pointer_up();
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("scroll", move |_| {
        t.refresh_regions();
    }));

    let t = tracking.clone();
    out.extend(Listener::on_window("resize", move |_| {
        let size = dom::viewport_size();
        let mut sc = t.scene.borrow_mut();
        sc.surface.resize(size, dom::device_pixel_ratio());
        sc.overlay.resize(size.x, size.y);
    }));

    out
}
