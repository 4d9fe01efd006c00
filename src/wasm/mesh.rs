use std::collections::HashMap;

use js_sys::{Float32Array, Uint16Array};
use log::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{HtmlImageElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlTexture, WebGlVertexArrayObject};

use super::gl::{NORMAL_ATTRIB, POSITION_ATTRIB, TEX_COORD_ATTRIB};
use crate::geometry::MeshData;

/// A mesh living in GPU buffers behind one vertex array object.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    // Held so the buffers share the mesh's lifetime.
    _buffers: Vec<WebGlBuffer>,
    index_count: i32,
}

fn attribute_buffer(gl: &GL, location: u32, size: i32, data: &[f32]) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl.create_buffer().ok_or("failed to create vertex buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}

impl GpuMesh {
    pub fn upload(gl: &GL, data: &MeshData) -> Result<Self, JsValue> {
        let vao = gl.create_vertex_array().ok_or("failed to create vertex array")?;
        gl.bind_vertex_array(Some(&vao));

        let mut buffers = vec![
            attribute_buffer(gl, POSITION_ATTRIB, 3, &data.positions)?,
            attribute_buffer(gl, NORMAL_ATTRIB, 3, &data.normals)?,
            attribute_buffer(gl, TEX_COORD_ATTRIB, 2, &data.tex_coords)?,
        ];

        let indices = gl.create_buffer().ok_or("failed to create index buffer")?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        let array = Uint16Array::from(data.indices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        buffers.push(indices);

        gl.bind_vertex_array(None);
        Ok(Self {
            vao,
            _buffers: buffers,
            index_count: data.index_count() as i32,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }
}

/// Diffuse maps keyed by path. Each starts as a 1x1 white texel and is
/// replaced in place when its image finishes loading.
pub struct Textures {
    gl: GL,
    by_path: HashMap<&'static str, WebGlTexture>,
}

impl Textures {
    pub fn new(gl: &GL) -> Self {
        Self {
            gl: gl.clone(),
            by_path: HashMap::new(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&WebGlTexture> {
        self.by_path.get(path)
    }

    pub fn load(&mut self, path: &'static str) -> Result<(), JsValue> {
        if self.by_path.contains_key(path) {
            return Ok(());
        }
        let gl = &self.gl;
        let texture = gl.create_texture().ok_or("failed to create texture")?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            1,
            1,
            0,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            Some(&[255u8, 255, 255, 255][..]),
        )?;
        // No mipmaps yet; the default min filter would leave it incomplete.
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);

        let image = HtmlImageElement::new()?;
        let onload = {
            let gl = gl.clone();
            let texture = texture.clone();
            let image = image.clone();
            Closure::wrap(Box::new(move || {
                gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
                if let Err(e) = gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
                    GL::TEXTURE_2D,
                    0,
                    GL::RGBA as i32,
                    GL::RGBA,
                    GL::UNSIGNED_BYTE,
                    &image,
                ) {
                    warn!("texture {path} upload failed: {e:?}");
                    return;
                }
                gl.generate_mipmap(GL::TEXTURE_2D);
                gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::REPEAT as i32);
                gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::REPEAT as i32);
                gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR_MIPMAP_LINEAR as i32);
                debug!("texture {path} loaded");
            }) as Box<dyn FnMut()>)
        };
        let onerror = Closure::wrap(Box::new(move || {
            warn!("texture {path} failed to load, keeping placeholder");
        }) as Box<dyn FnMut()>);
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
        image.set_src(path);

        self.by_path.insert(path, texture);
        Ok(())
    }
}
