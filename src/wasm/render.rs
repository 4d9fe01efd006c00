use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Mat3;
use log::info;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL, Window};

use super::gl::Program;
use super::input;
use super::mesh::{GpuMesh, Textures};
use crate::camera::OrbitCamera;
use crate::geometry::Shape;
use crate::scene::{DrawItem, PoolScene};
use crate::shaders;

/// Everything input handlers may mutate.
pub struct State {
    pub scene: PoolScene,
    pub camera: OrbitCamera,
}

struct Renderer {
    gl: GL,
    program: Program,
    meshes: HashMap<Shape, GpuMesh>,
    textures: Textures,
}

impl Renderer {
    fn new(gl: GL, scene: &PoolScene) -> Result<Self, JsValue> {
        let program = Program::new(&gl, shaders::VERTEX_SHADER, shaders::FRAGMENT_SHADER)?;

        let mut meshes = HashMap::new();
        for shape in Shape::ALL {
            meshes.insert(shape, GpuMesh::upload(&gl, &shape.mesh())?);
        }

        let mut textures = Textures::new(&gl);
        let static_items = scene.room_draws().iter().chain(scene.table_draws());
        for path in static_items.filter_map(|item| item.material.diffuse_map) {
            textures.load(path)?;
        }

        gl.enable(GL::DEPTH_TEST);
        gl.disable(GL::CULL_FACE);
        gl.clear_color(0.1, 0.1, 0.1, 1.0);

        info!("renderer ready: {} meshes", meshes.len());
        Ok(Self {
            gl,
            program,
            meshes,
            textures,
        })
    }

    fn draw_frame(&self, state: &State) {
        let gl = &self.gl;
        let p = &self.program;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        p.bind();

        let camera = &state.camera;
        p.set_mat4("uView", &camera.view_matrix());
        p.set_mat4("uProjection", &camera.projection_matrix());
        p.set_vec3("uViewPos", camera.eye());

        p.set_vec3("uKeyLightDir", shaders::KEY_LIGHT_DIRECTION);
        p.set_vec3("uKeyLightColor", shaders::KEY_LIGHT_COLOR);
        p.set_vec3("uSpotPosition", shaders::SPOT_POSITION);
        p.set_vec3("uSpotColor", shaders::SPOT_COLOR);
        p.set_f32("uSpotIntensity", shaders::SPOT_INTENSITY);
        p.set_f32("uSpotRadius", shaders::SPOT_RADIUS);

        let lights = state.scene.light_uniforms();
        p.set_vec3_array("uPointLightPositions", &lights.positions);
        p.set_vec3_array("uPointLightColors", &lights.colors);
        p.set_f32_array("uPointLightIntensities", &lights.intensities);
        p.set_i32("uPointLightCount", lights.count);
        p.set_i32("uTexture", 0);

        let scene = &state.scene;
        if let Some((skybox, rest)) = scene.room_draws().split_first() {
            gl.depth_mask(false);
            self.draw_item(skybox);
            gl.depth_mask(true);
            rest.iter().for_each(|item| self.draw_item(item));
        }
        scene.table_draws().iter().for_each(|item| self.draw_item(item));
        scene.ball_draws().iter().for_each(|item| self.draw_item(item));
        scene.cue_draws().iter().for_each(|item| self.draw_item(item));
    }

    fn draw_item(&self, item: &DrawItem) {
        let Some(mesh) = self.meshes.get(&item.shape) else {
            return;
        };
        let p = &self.program;
        p.set_mat4("uModel", &item.transform);
        p.set_mat3("uNormalMatrix", &Mat3::from_mat4(item.transform.inverse().transpose()));

        let m = &item.material;
        p.set_vec3("uAmbient", m.ambient);
        p.set_vec3("uDiffuse", m.diffuse);
        p.set_vec3("uSpecular", m.specular);
        p.set_f32("uShininess", m.shininess);

        let texture = m.diffuse_map.and_then(|path| self.textures.get(path));
        self.gl.active_texture(GL::TEXTURE0);
        self.gl.bind_texture(GL::TEXTURE_2D, texture);
        p.set_bool("uUseTexture", texture.is_some());

        mesh.draw(&self.gl);
    }
}

fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement, gl: &GL, camera: &mut OrbitCamera) {
    let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let w = size(window.inner_width()) as u32;
    let h = size(window.inner_height()) as u32;
    if w == 0 || h == 0 {
        return;
    }
    canvas.set_width(w);
    canvas.set_height(h);
    gl.viewport(0, 0, w as i32, h as i32);
    camera.set_aspect(w as f32 / h as f32);
}

/// Build the scene, wire up input, and start the frame loop.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let performance = window.performance().ok_or("performance clock unavailable")?;
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    let state = Rc::new(RefCell::new(State {
        scene: PoolScene::new(),
        camera: OrbitCamera::default(),
    }));
    let renderer = Renderer::new(gl.clone(), &state.borrow().scene)?;

    fit_to_window(&window, &canvas, &gl, &mut state.borrow_mut().camera);

    // Resize canvas to fit window
    let resize_closure = {
        let canvas = canvas.clone();
        let gl = gl.clone();
        let state = state.clone();
        let win = window.clone();
        Closure::wrap(Box::new(move || {
            fit_to_window(&win, &canvas, &gl, &mut state.borrow_mut().camera);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    input::attach(&window, &canvas, performance.clone(), state.clone())?;

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now_ms = performance.now();
        {
            let mut state = state.borrow_mut();
            state.scene.tick(now_ms);
            state.camera.update(now_ms);
        }
        renderer.draw_frame(&state.borrow());

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }

    info!("frame loop running");
    Ok(())
}
