use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlImageElement, WebGlTexture};

use super::{Gl, GlError};

// Opaque white, so an unloaded texture samples as the bare lighting term.
const PLACEHOLDER_PIXEL: [u8; 4] = [255, 255, 255, 255];

/// 2D texture filled from an image URL once the browser has decoded it.
pub struct Texture {
    gl: Gl,
    raw: WebGlTexture,
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Texture {
    pub fn from_url(gl: &Gl, url: &str) -> Result<Self, GlError> {
        let raw = gl.create_texture().ok_or(GlError::Create("texture"))?;
        gl.bind_texture(Gl::TEXTURE_2D, Some(&raw));
        gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            Gl::TEXTURE_2D,
            0,
            Gl::RGBA as i32,
            1,
            1,
            0,
            Gl::RGBA,
            Gl::UNSIGNED_BYTE,
            Some(&PLACEHOLDER_PIXEL[..]),
        )?;
        gl.bind_texture(Gl::TEXTURE_2D, None);

        let image = HtmlImageElement::new()?;
        image.set_cross_origin(Some("anonymous"));

        let onload = {
            let gl = gl.clone();
            let raw = raw.clone();
            let image = image.clone();
            Closure::wrap(Box::new(move || {
                if let Err(e) = upload_image(&gl, &raw, &image) {
                    tracing::error!("texture upload failed: {e}");
                }
            }) as Box<dyn FnMut()>)
        };
        let onerror = {
            let url = url.to_string();
            Closure::wrap(Box::new(move || {
                tracing::error!("failed to load texture image {url}");
            }) as Box<dyn FnMut()>)
        };
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(url);
        tracing::info!("loading texture {url}");

        Ok(Self {
            gl: gl.clone(),
            raw,
            image,
            _onload: onload,
            _onerror: onerror,
        })
    }

    /// Binds to texture unit `unit`.
    pub fn bind(&self, unit: u32) {
        self.gl.active_texture(Gl::TEXTURE0 + unit);
        self.gl.bind_texture(Gl::TEXTURE_2D, Some(&self.raw));
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        // the closures die with us; keep a late load from calling into them
        self.image.set_onload(None);
        self.image.set_onerror(None);
        self.gl.delete_texture(Some(&self.raw));
    }
}

fn upload_image(gl: &Gl, raw: &WebGlTexture, image: &HtmlImageElement) -> Result<(), GlError> {
    gl.bind_texture(Gl::TEXTURE_2D, Some(raw));
    gl.pixel_storei(Gl::UNPACK_FLIP_Y_WEBGL, 1);
    gl.tex_image_2d_with_u32_and_u32_and_image(
        Gl::TEXTURE_2D,
        0,
        Gl::RGBA as i32,
        Gl::RGBA,
        Gl::UNSIGNED_BYTE,
        image,
    )?;
    let (w, h) = (image.natural_width(), image.natural_height());
    if is_power_of_two(w) && is_power_of_two(h) {
        gl.generate_mipmap(Gl::TEXTURE_2D);
    } else {
        // WebGL 1 only samples NPOT textures without mipmaps or repeat
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_S, Gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_WRAP_T, Gl::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(Gl::TEXTURE_2D, Gl::TEXTURE_MIN_FILTER, Gl::LINEAR as i32);
    }
    gl.bind_texture(Gl::TEXTURE_2D, None);
    tracing::info!("texture loaded ({w}x{h})");
    Ok(())
}

pub fn is_power_of_two(n: u32) -> bool {
    n.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_sizes() {
        for n in [1, 2, 64, 256, 1024] {
            assert!(is_power_of_two(n));
        }
        for n in [0, 3, 100, 255, 1000] {
            assert!(!is_power_of_two(n));
        }
    }
}
