use super::geometry::{
    FACE_CUBE_INDEX_COUNT, FACE_CUBE_NORMALS, FACE_CUBE_POSITIONS, face_cube_indices,
    face_cube_tex_coords,
};
use super::{Demo, Frame, SharedDrag, begin_frame, camera, shaders};
use crate::gl::{Buffer, Gl, GlError, Program, Texture, VertexLayout};
use crate::util::scroll_phase;

/// Lit, textured cube with the texture scrolling once per second.
pub struct LightDemo {
    gl: Gl,
    program: Program,
    positions: Buffer,
    tex_coords: Buffer,
    normals: Buffer,
    indices: Buffer,
    texture: Texture,
    drag: SharedDrag,
}

impl LightDemo {
    pub fn new(gl: &Gl, texture_url: &str, drag: SharedDrag) -> Result<Self, GlError> {
        Ok(Self {
            gl: gl.clone(),
            program: Program::new(gl, shaders::LIGHT_VERT, shaders::LIGHT_FRAG)?,
            positions: Buffer::vertices(gl, &FACE_CUBE_POSITIONS)?,
            tex_coords: Buffer::vertices(gl, &face_cube_tex_coords())?,
            normals: Buffer::vertices(gl, &FACE_CUBE_NORMALS)?,
            indices: Buffer::indices(gl, &face_cube_indices())?,
            texture: Texture::from_url(gl, texture_url)?,
            drag,
        })
    }
}

impl Demo for LightDemo {
    fn render_frame(&mut self, frame: &Frame) {
        let rotation = self.drag.borrow().current_rotation();
        let view = camera::view_drag(rotation);
        begin_frame(&self.gl, frame);
        let p = &self.program;
        p.use_program();
        self.texture.bind(0);
        p.set_i32("iSampler", 0);
        p.set_mat4("iPMatrix", &camera::projection(frame.aspect()));
        p.set_mat4("iVMatrix", &view);
        p.set_mat4("iNormalMatrix", &camera::normal_matrix(&view));
        p.set_f32("time", scroll_phase(frame.now_ms));
        p.bind_attrib("iPosition", &self.positions, VertexLayout::packed(3));
        p.bind_attrib("iTextureCoord", &self.tex_coords, VertexLayout::packed(2));
        p.bind_attrib("iNormal", &self.normals, VertexLayout::packed(3));
        self.indices.bind();
        self.gl.draw_elements_with_i32(
            Gl::TRIANGLES,
            FACE_CUBE_INDEX_COUNT,
            Gl::UNSIGNED_SHORT,
            0,
        );
    }
}
