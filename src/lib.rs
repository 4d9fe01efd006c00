#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Scripted pool-table scene for WebGL2.
//!
//! The animation core (balls, pocket light, cue, camera) is plain Rust and
//! takes the current time as an argument; the `wasm` module owns the browser
//! side and drives it from `requestAnimationFrame`.

pub mod balls;
pub mod camera;
pub mod config;
pub mod cue;
pub mod geometry;
pub mod input;
pub mod light;
pub mod materials;
pub mod progress;
pub mod scene;
pub mod schedule;
pub mod shaders;
pub mod table;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod gl;
    mod input;
    mod mesh;
    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // A second init (hot reload) is harmless.
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        log::info!("pool scene starting");
        render::start(canvas)?;
        Ok(())
    }
}
