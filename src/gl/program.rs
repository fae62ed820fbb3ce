use web_sys::{WebGlProgram, WebGlShader, WebGlUniformLocation};

use super::{Buffer, Gl, GlError, Stage, VertexLayout};

/// A linked vertex + fragment shader pair, deleted on drop.
pub struct Program {
    gl: Gl,
    raw: WebGlProgram,
}

impl Program {
    pub fn new(gl: &Gl, vertex_src: &str, fragment_src: &str) -> Result<Self, GlError> {
        let vs = compile(gl, Stage::Vertex, vertex_src)?;
        let fs = match compile(gl, Stage::Fragment, fragment_src) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(Some(&vs));
                return Err(e);
            }
        };
        let raw = gl.create_program().ok_or(GlError::Create("program"))?;
        gl.attach_shader(&raw, &vs);
        gl.attach_shader(&raw, &fs);
        gl.link_program(&raw);
        // linked programs keep their own copy of the binaries
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        let linked = gl
            .get_program_parameter(&raw, Gl::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let log = gl.get_program_info_log(&raw).unwrap_or_default();
            gl.delete_program(Some(&raw));
            tracing::error!("unable to link shader program: {log}");
            return Err(GlError::Link(log));
        }
        Ok(Self { gl: gl.clone(), raw })
    }

    pub fn use_program(&self) {
        self.gl.use_program(Some(&self.raw));
    }

    /// Attribute index, or `None` if the driver optimised it out.
    pub fn attrib(&self, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(&self.raw, name)).ok()
    }

    pub fn uniform(&self, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.raw, name)
    }

    pub fn bind_attrib(&self, name: &str, buffer: &Buffer, layout: VertexLayout) {
        let Some(index) = self.attrib(name) else {
            tracing::trace!("attribute {name} not active, skipping");
            return;
        };
        buffer.bind();
        self.gl.vertex_attrib_pointer_with_i32(
            index,
            layout.size,
            Gl::FLOAT,
            false,
            layout.stride_bytes(),
            layout.offset_bytes(),
        );
        self.gl.enable_vertex_attrib_array(index);
    }

    pub fn set_mat4(&self, name: &str, m: &glam::Mat4) {
        let loc = self.uniform(name);
        self.gl
            .uniform_matrix4fv_with_f32_array(loc.as_ref(), false, &m.to_cols_array());
    }

    pub fn set_f32(&self, name: &str, v: f32) {
        self.gl.uniform1f(self.uniform(name).as_ref(), v);
    }

    pub fn set_i32(&self, name: &str, v: i32) {
        self.gl.uniform1i(self.uniform(name).as_ref(), v);
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.gl.delete_program(Some(&self.raw));
    }
}

fn compile(gl: &Gl, stage: Stage, source: &str) -> Result<WebGlShader, GlError> {
    let kind = match stage {
        Stage::Vertex => Gl::VERTEX_SHADER,
        Stage::Fragment => Gl::FRAGMENT_SHADER,
    };
    let shader = gl.create_shader(kind).ok_or(GlError::Create("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    tracing::error!("{stage} shader compile error: {log}");
    gl.delete_shader(Some(&shader));
    Err(GlError::Compile { stage, log })
}
