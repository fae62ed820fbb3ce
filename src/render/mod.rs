//! The four demos. Each owns its GL resources and draws one frame at a time.

pub mod camera;
pub mod cube;
pub mod geometry;
pub mod light;
pub mod shaders;
pub mod square;
pub mod texture;

use std::cell::RefCell;
use std::rc::Rc;

use crate::gl::{Gl, GlError};
use crate::model::{DemoKind, Settings};
use crate::state::DragRotation;

/// What a demo gets to know about the frame being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Wall-clock milliseconds since the epoch.
    pub now_ms: f64,
}

impl Frame {
    pub fn aspect(&self) -> f32 {
        camera::aspect(self.width, self.height)
    }
}

pub trait Demo {
    fn render_frame(&mut self, frame: &Frame);
}

pub type SharedDrag = Rc<RefCell<DragRotation>>;

pub fn build(
    kind: DemoKind,
    gl: &Gl,
    settings: &Settings,
    drag: SharedDrag,
) -> Result<Box<dyn Demo>, GlError> {
    tracing::info!("building {} demo", kind.label());
    let demo: Box<dyn Demo> = match kind {
        DemoKind::Square => Box::new(square::SquareDemo::new(gl, settings.spin_step)?),
        DemoKind::Cube => Box::new(cube::CubeDemo::new(gl, settings.spin_step)?),
        DemoKind::Texture => Box::new(texture::TextureDemo::new(gl, &settings.texture_url, drag)?),
        DemoKind::Light => Box::new(light::LightDemo::new(gl, &settings.texture_url, drag)?),
    };
    Ok(demo)
}

/// Viewport, clear and depth state every demo starts its frame with.
pub(crate) fn begin_frame(gl: &Gl, frame: &Frame) {
    gl.viewport(0, 0, frame.width as i32, frame.height as i32);
    gl.clear_color(0.0, 0.0, 0.0, 1.0);
    gl.clear_depth(1.0);
    gl.enable(Gl::DEPTH_TEST);
    gl.depth_func(Gl::LEQUAL);
    gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
}
