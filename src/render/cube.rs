use glam::Vec3;

use super::geometry::{CUBE_INDICES, CUBE_POSITION_COLOR, CUBE_STRIDE};
use super::{Demo, Frame, begin_frame, camera, shaders};
use crate::gl::{Buffer, Gl, GlError, Program, VertexLayout};
use crate::state::Spin;

const SPIN_AXIS: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Vertex-colored cube drawn from one interleaved buffer.
pub struct CubeDemo {
    gl: Gl,
    program: Program,
    vertices: Buffer,
    indices: Buffer,
    spin: Spin,
}

impl CubeDemo {
    pub fn new(gl: &Gl, spin_step: f32) -> Result<Self, GlError> {
        Ok(Self {
            gl: gl.clone(),
            program: Program::new(gl, shaders::COLOR_VERT, shaders::COLOR_FRAG)?,
            vertices: Buffer::vertices(gl, &CUBE_POSITION_COLOR)?,
            indices: Buffer::indices(gl, &CUBE_INDICES)?,
            spin: Spin::new(spin_step),
        })
    }
}

impl Demo for CubeDemo {
    fn render_frame(&mut self, frame: &Frame) {
        let angle = self.spin.tick();
        begin_frame(&self.gl, frame);
        let p = &self.program;
        p.use_program();
        p.set_mat4("iPMatrix", &camera::projection(frame.aspect()));
        p.set_mat4("iVMatrix", &camera::view_spin(angle, SPIN_AXIS));
        p.bind_attrib(
            "iPosition",
            &self.vertices,
            VertexLayout::interleaved(3, CUBE_STRIDE, 0),
        );
        p.bind_attrib(
            "iColor",
            &self.vertices,
            VertexLayout::interleaved(4, CUBE_STRIDE, 3),
        );
        self.indices.bind();
        self.gl.draw_elements_with_i32(
            Gl::TRIANGLES,
            CUBE_INDICES.len() as i32,
            Gl::UNSIGNED_SHORT,
            0,
        );
    }
}
