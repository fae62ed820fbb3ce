use glam::Vec3;

use super::geometry::{SQUARE_COLORS, SQUARE_POSITIONS, SQUARE_VERTEX_COUNT};
use super::{Demo, Frame, begin_frame, camera, shaders};
use crate::gl::{Buffer, Gl, GlError, Program, VertexLayout};
use crate::state::Spin;

pub struct SquareDemo {
    gl: Gl,
    program: Program,
    positions: Buffer,
    colors: Buffer,
    spin: Spin,
}

impl SquareDemo {
    pub fn new(gl: &Gl, spin_step: f32) -> Result<Self, GlError> {
        Ok(Self {
            gl: gl.clone(),
            program: Program::new(gl, shaders::COLOR_VERT, shaders::COLOR_FRAG)?,
            positions: Buffer::vertices(gl, &SQUARE_POSITIONS)?,
            colors: Buffer::vertices(gl, &SQUARE_COLORS)?,
            spin: Spin::new(spin_step),
        })
    }
}

impl Demo for SquareDemo {
    fn render_frame(&mut self, frame: &Frame) {
        let angle = self.spin.tick();
        begin_frame(&self.gl, frame);
        let p = &self.program;
        p.use_program();
        p.set_mat4("iPMatrix", &camera::projection(frame.aspect()));
        p.set_mat4("iVMatrix", &camera::view_spin(angle, Vec3::Y));
        p.bind_attrib("iPosition", &self.positions, VertexLayout::packed(2));
        p.bind_attrib("iColor", &self.colors, VertexLayout::packed(4));
        self.gl.draw_arrays(Gl::TRIANGLE_STRIP, 0, SQUARE_VERTEX_COUNT);
    }
}
