use glam::{Mat3, Mat4, Vec3};
use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

pub const POSITION_ATTRIB: u32 = 0;
pub const NORMAL_ATTRIB: u32 = 1;
pub const TEX_COORD_ATTRIB: u32 = 2;

pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("unable to create shader object")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let msg = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown error compiling shader".into());
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&msg))
    }
}

/// Attribute slots are bound before linking so every mesh VAO can use the
/// same fixed locations.
pub fn link_program(gl: &GL, vert: &WebGlShader, frag: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("unable to create program object")?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.bind_attrib_location(&program, POSITION_ATTRIB, "aPosition");
    gl.bind_attrib_location(&program, NORMAL_ATTRIB, "aNormal");
    gl.bind_attrib_location(&program, TEX_COORD_ATTRIB, "aTexCoord");
    gl.link_program(&program);

    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let msg = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown error linking program".into());
        gl.delete_program(Some(&program));
        Err(JsValue::from_str(&msg))
    }
}

/// A linked program plus typed uniform setters. Uniforms the driver
/// optimised away resolve to `None` and the set becomes a no-op.
pub struct Program {
    gl: GL,
    program: WebGlProgram,
}

impl Program {
    pub fn new(gl: &GL, vert_src: &str, frag_src: &str) -> Result<Self, JsValue> {
        let vert = compile_shader(gl, GL::VERTEX_SHADER, vert_src)?;
        let frag = compile_shader(gl, GL::FRAGMENT_SHADER, frag_src)?;
        let program = link_program(gl, &vert, &frag)?;
        gl.delete_shader(Some(&vert));
        gl.delete_shader(Some(&frag));
        Ok(Self {
            gl: gl.clone(),
            program,
        })
    }

    pub fn bind(&self) {
        self.gl.use_program(Some(&self.program));
    }

    fn location(&self, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.program, name)
    }

    pub fn set_mat4(&self, name: &str, m: &Mat4) {
        self.gl
            .uniform_matrix4fv_with_f32_array(self.location(name).as_ref(), false, &m.to_cols_array());
    }

    pub fn set_mat3(&self, name: &str, m: &Mat3) {
        self.gl
            .uniform_matrix3fv_with_f32_array(self.location(name).as_ref(), false, &m.to_cols_array());
    }

    pub fn set_vec3(&self, name: &str, v: Vec3) {
        self.gl.uniform3f(self.location(name).as_ref(), v.x, v.y, v.z);
    }

    pub fn set_vec3_array(&self, name: &str, data: &[f32]) {
        self.gl.uniform3fv_with_f32_array(self.location(name).as_ref(), data);
    }

    pub fn set_f32(&self, name: &str, v: f32) {
        self.gl.uniform1f(self.location(name).as_ref(), v);
    }

    pub fn set_f32_array(&self, name: &str, data: &[f32]) {
        self.gl.uniform1fv_with_f32_array(self.location(name).as_ref(), data);
    }

    pub fn set_i32(&self, name: &str, v: i32) {
        self.gl.uniform1i(self.location(name).as_ref(), v);
    }

    pub fn set_bool(&self, name: &str, v: bool) {
        self.set_i32(name, v as i32);
    }
}
