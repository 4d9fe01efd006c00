#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlShader};

use pool_scene::shaders;

wasm_bindgen_test_configure!(run_in_browser);

fn context() -> GL {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(64);
    canvas.set_height(64);
    canvas
        .get_context("webgl2")
        .unwrap()
        .expect("WebGL2 not supported")
        .dyn_into()
        .unwrap()
}

fn compile(gl: &GL, kind: u32, source: &str) -> WebGlShader {
    let shader = gl.create_shader(kind).unwrap();
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    assert!(ok, "{}", gl.get_shader_info_log(&shader).unwrap_or_default());
    shader
}

#[wasm_bindgen_test]
fn shaders_compile_and_link() {
    let gl = context();
    let vert = compile(&gl, GL::VERTEX_SHADER, shaders::VERTEX_SHADER);
    let frag = compile(&gl, GL::FRAGMENT_SHADER, shaders::FRAGMENT_SHADER);

    let program = gl.create_program().unwrap();
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);
    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    assert!(linked, "{}", gl.get_program_info_log(&program).unwrap_or_default());

    for name in ["uModel", "uPointLightCount", "uPointLightIntensities", "uSpotRadius"] {
        assert!(gl.get_uniform_location(&program, name).is_some(), "missing {name}");
    }
}

#[wasm_bindgen_test]
fn performance_clock_is_available() {
    let performance = web_sys::window().unwrap().performance().unwrap();
    let a = performance.now();
    let b = performance.now();
    assert!(b >= a);
}
