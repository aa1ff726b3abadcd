use fx_core::Animator;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct LoopState {
    cancelled: Cell<bool>,
    request_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request(&self) {
        if self.cancelled.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// A running `requestAnimationFrame` loop. Cancelled on `cancel` or drop.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn cancel(&self) {
        if self.state.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.state.request_id.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // breaks the closure <-> state cycle
        self.state.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Drive `animator` once per display refresh until the returned loop is cancelled.
pub fn start_loop(animator: Rc<RefCell<dyn Animator>>) -> AnimationLoop {
    let state = Rc::new(LoopState::default());
    let state_tick = state.clone();
    let started = Instant::now();
    *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if state_tick.cancelled.get() {
            return;
        }
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        animator.borrow_mut().frame(now_ms);
        state_tick.request();
    }) as Box<dyn FnMut()>));
    state.request();
    AnimationLoop { state }
}
