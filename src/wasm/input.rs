use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Performance, WheelEvent, Window};

use super::render::State;
use crate::camera::View;
use crate::input::Command;

fn listen<E: 'static + wasm_bindgen::convert::FromWasmAbi>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn apply(state: &mut State, command: Command, now_ms: f64) {
    info!("{command:?} at {now_ms:.0} ms");
    match command {
        Command::Strike => state.scene.strike(now_ms),
        Command::Reset => state.scene.reset(),
        Command::TopView => state.camera.animate(View::top(), now_ms),
        Command::OriginalView => state.camera.animate(View::original(), now_ms),
    }
}

/// Keyboard commands on the window; orbit drag and zoom on the canvas.
pub fn attach(
    window: &Window,
    canvas: &HtmlCanvasElement,
    performance: Performance,
    state: Rc<RefCell<State>>,
) -> Result<(), JsValue> {
    {
        let state = state.clone();
        listen(window, "keydown", move |event: KeyboardEvent| {
            let Some(command) = Command::from_key_code(&event.code()) else {
                return;
            };
            if command == Command::Strike {
                // Space would otherwise scroll the page.
                event.prevent_default();
            }
            apply(&mut state.borrow_mut(), command, performance.now());
        })?;
    }
    {
        let state = state.clone();
        listen(canvas, "mousedown", move |event: MouseEvent| {
            state
                .borrow_mut()
                .camera
                .pointer_down(event.client_x() as f32, event.client_y() as f32);
        })?;
    }
    {
        let state = state.clone();
        listen(window, "mousemove", move |event: MouseEvent| {
            state
                .borrow_mut()
                .camera
                .pointer_move(event.client_x() as f32, event.client_y() as f32);
        })?;
    }
    {
        let state = state.clone();
        listen(window, "mouseup", move |_: MouseEvent| {
            state.borrow_mut().camera.pointer_up();
        })?;
    }
    listen(canvas, "wheel", move |event: WheelEvent| {
        event.prevent_default();
        state.borrow_mut().camera.wheel(event.delta_y() as f32);
    })?;
    Ok(())
}
