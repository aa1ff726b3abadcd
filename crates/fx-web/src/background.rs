use crate::dom::{self, Listener};
use crate::frame::{start_loop, AnimationLoop};
use crate::input;
use crate::render::CanvasSurface;
use anyhow::anyhow;
use fx_core::{Animator, FieldConfig, ParticleField, Surface, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BackgroundScene {
    field: ParticleField,
    surface: CanvasSurface,
}

impl Animator for BackgroundScene {
    fn frame(&mut self, now_ms: f64) {
        self.field.step(now_ms);
        self.field.draw(&mut self.surface);
    }
}

struct Mounted {
    scene: Rc<RefCell<BackgroundScene>>,
    frame: AnimationLoop,
    _listeners: Vec<Listener>,
}

/// Handle returned to the host page. Inert when mounting failed.
#[wasm_bindgen]
pub struct BackgroundHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    pub fn set_theme(&self, theme: &str) {
        if let Some(m) = &self.mounted {
            m.scene.borrow_mut().field.set_theme(Theme::parse(theme));
        }
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    /// Cancel the frame loop, detach every listener and blank the canvas.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            m.scene.borrow_mut().surface.clear();
            log::info!("[field] unmounted");
        }
    }
}

/// Start the particle backdrop on `<canvas id=canvas_id>`.
#[wasm_bindgen]
pub fn mount_background(canvas_id: &str) -> BackgroundHandle {
    let mounted = match mount(canvas_id) {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[field] staying idle: {:?}", e);
            None
        }
    };
    BackgroundHandle { mounted }
}

fn mount(canvas_id: &str) -> anyhow::Result<Mounted> {
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

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let mut field = ParticleField::new(
        FieldConfig::default(),
        size.x,
        size.y,
        dom::read_theme(&document),
        seed,
    );
    field.set_scroll(dom::scroll_y());
    log::info!(
        "[field] mounted {} particles on #{} ({}x{})",
        field.particles().len(),
        canvas_id,
        size.x,
        size.y
    );

    let scene = Rc::new(RefCell::new(BackgroundScene { field, surface }));
    let listeners = wire_listeners(&scene);
    let frame = start_loop(scene.clone());
    Ok(Mounted {
        scene,
        frame,
        _listeners: listeners,
    })
}

fn wire_listeners(scene: &Rc<RefCell<BackgroundScene>>) -> Vec<Listener> {
    let mut out = Vec::new();

    let s = scene.clone();
    out.extend(Listener::on_window("resize", move |_| {
        let size = dom::viewport_size();
        let mut sc = s.borrow_mut();
        if size == sc.field.bounds() {
            return;
        }
        sc.surface.resize(size, dom::device_pixel_ratio());
        sc.field.resize(size.x, size.y);
    }));

    let s = scene.clone();
    out.extend(Listener::on_window("pointermove", move |ev| {
        if let Some(pos) = input::client_px(&ev) {
            s.borrow_mut().field.set_pointer(Some(pos));
        }
    }));

    let s = scene.clone();
    out.extend(Listener::on_window("mouseout", move |ev| {
        if input::crosses_window_edge(&ev) {
            s.borrow_mut().field.set_pointer(None);
        }
    }));

    let s = scene.clone();
    out.extend(Listener::on_window("scroll", move |_| {
        s.borrow_mut().field.set_scroll(dom::scroll_y());
    }));

    out
}
