#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod background;
mod cursor;
mod dom;
mod frame;
mod input;
mod render;

pub use background::{mount_background, BackgroundHandle};
pub use cursor::{mount_cursor, CursorHandle};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");
    Ok(())
}
