//! Thin owned wrappers over the WebGL 1 calls the demos need.

pub mod buffer;
pub mod error;
pub mod program;
pub mod texture;

pub use buffer::{Buffer, VertexLayout};
pub use error::{GlError, Stage};
pub use program::Program;
pub use texture::Texture;

use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

pub type Gl = WebGlRenderingContext;

pub fn context(canvas: &HtmlCanvasElement) -> Result<Gl, GlError> {
    canvas
        .get_context("webgl")?
        .ok_or(GlError::NoContext)?
        .dyn_into::<Gl>()
        .map_err(|_| GlError::NoContext)
}
