use js_sys::{Float32Array, Uint16Array};
use web_sys::WebGlBuffer;

use super::{Gl, GlError};

const F32_BYTES: i32 = 4;

/// How one attribute is laid out in a float buffer, counted in floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub size: i32,
    pub stride: i32,
    pub offset: i32,
}

impl VertexLayout {
    /// Tightly packed attribute with nothing else in the buffer.
    pub const fn packed(size: i32) -> Self {
        Self { size, stride: 0, offset: 0 }
    }

    pub const fn interleaved(size: i32, stride: i32, offset: i32) -> Self {
        Self { size, stride, offset }
    }

    pub fn stride_bytes(&self) -> i32 {
        self.stride * F32_BYTES
    }

    pub fn offset_bytes(&self) -> i32 {
        self.offset * F32_BYTES
    }
}

/// Static GPU buffer, deleted on drop.
pub struct Buffer {
    gl: Gl,
    raw: WebGlBuffer,
    target: u32,
}

impl Buffer {
    pub fn vertices(gl: &Gl, data: &[f32]) -> Result<Self, GlError> {
        let array = Float32Array::from(data);
        Self::upload(gl, Gl::ARRAY_BUFFER, &array)
    }

    pub fn indices(gl: &Gl, data: &[u16]) -> Result<Self, GlError> {
        let array = Uint16Array::from(data);
        Self::upload(gl, Gl::ELEMENT_ARRAY_BUFFER, &array)
    }

    fn upload(gl: &Gl, target: u32, data: &js_sys::Object) -> Result<Self, GlError> {
        let raw = gl.create_buffer().ok_or(GlError::Create("buffer"))?;
        gl.bind_buffer(target, Some(&raw));
        gl.buffer_data_with_array_buffer_view(target, data, Gl::STATIC_DRAW);
        gl.bind_buffer(target, None);
        Ok(Self {
            gl: gl.clone(),
            raw,
            target,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(self.target, Some(&self.raw));
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_layout_in_bytes() {
        // xyz + rgba per vertex, color after position
        let color = VertexLayout::interleaved(4, 7, 3);
        assert_eq!(color.stride_bytes(), 28);
        assert_eq!(color.offset_bytes(), 12);
        let packed = VertexLayout::packed(2);
        assert_eq!((packed.stride_bytes(), packed.offset_bytes()), (0, 0));
    }
}
