//! 图片资源与背景
//!
//! 背景图片可以来自四种资源：位图纹理、离屏渲染目标、矢量图以及
//! 纹理上的精灵区域。资源本身通过 `Rc` 共享，克隆只增加引用计数。

use serde::Serialize;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

use crate::Rect;

/// 资源加载错误
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite rect {rect:?} is outside of a {width}x{height} texture")]
    SpriteOutOfBounds { rect: Rect, width: u32, height: u32 },
}

/// 位图纹理 (RGBA8)
#[derive(Debug, Clone, Serialize)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pixels: Rc<image::RgbaImage>,
}

impl Texture {
    pub fn from_image(img: image::RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: Rc::new(img),
        }
    }

    /// 从 RGBA 数据创建，数据长度不足时补透明像素
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Self {
        let mut buf = data.to_vec();
        buf.resize((width * height * 4) as usize, 0);
        match image::RgbaImage::from_raw(width, height, buf) {
            Some(img) => Self::from_image(img),
            None => Self::from_image(image::RgbaImage::new(width, height)),
        }
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| ResourceError::Decode {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "texture loaded");
        Ok(Self::from_image(img.to_rgba8()))
    }

    pub fn pixels(&self) -> &image::RgbaImage {
        &self.pixels
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pixels, &other.pixels)
    }
}

/// 离屏渲染目标
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTexture {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl RenderTexture {
    pub fn new(label: &str, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            label: label.to_string(),
        }
    }
}

/// 矢量图，保存原始 SVG 源
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorImage {
    pub width: f32,
    pub height: f32,
    #[serde(skip)]
    source: Rc<str>,
}

impl VectorImage {
    pub fn new(width: f32, height: f32, source: &str) -> Self {
        Self {
            width,
            height,
            source: Rc::from(source),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// 精灵：纹理上的一块区域
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub texture: Texture,
    pub rect: Rect,
}

impl Sprite {
    pub fn new(texture: Texture, rect: Rect) -> Result<Self, ResourceError> {
        let fits = rect.x >= 0.0
            && rect.y >= 0.0
            && rect.right() <= texture.width as f32
            && rect.bottom() <= texture.height as f32;
        if !fits {
            return Err(ResourceError::SpriteOutOfBounds {
                rect,
                width: texture.width,
                height: texture.height,
            });
        }
        Ok(Self { texture, rect })
    }

    /// 整张纹理作为精灵
    pub fn whole(texture: Texture) -> Self {
        let rect = Rect::new(0.0, 0.0, texture.width as f32, texture.height as f32);
        Self { texture, rect }
    }
}

/// 背景图片
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    Texture(Texture),
    RenderTexture(RenderTexture),
    VectorImage(VectorImage),
    Sprite(Sprite),
}

impl Background {
    pub fn from_texture(texture: Texture) -> Self {
        Background::Texture(texture)
    }

    pub fn from_render_texture(rt: RenderTexture) -> Self {
        Background::RenderTexture(rt)
    }

    pub fn from_vector_image(vi: VectorImage) -> Self {
        Background::VectorImage(vi)
    }

    pub fn from_sprite(sprite: Sprite) -> Self {
        Background::Sprite(sprite)
    }

    /// 资源的固有尺寸
    pub fn natural_size(&self) -> crate::Size {
        match self {
            Background::Texture(t) => crate::Size::new(t.width as f32, t.height as f32),
            Background::RenderTexture(rt) => crate::Size::new(rt.width as f32, rt.height as f32),
            Background::VectorImage(vi) => crate::Size::new(vi.width, vi.height),
            Background::Sprite(s) => s.rect.size(),
        }
    }
}

impl From<Texture> for Background {
    fn from(texture: Texture) -> Self {
        Background::from_texture(texture)
    }
}

impl From<RenderTexture> for Background {
    fn from(rt: RenderTexture) -> Self {
        Background::from_render_texture(rt)
    }
}

impl From<VectorImage> for Background {
    fn from(vi: VectorImage) -> Self {
        Background::from_vector_image(vi)
    }
}

impl From<Sprite> for Background {
    fn from(sprite: Sprite) -> Self {
        Background::from_sprite(sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_from_rgba_pads_short_data() {
        let tex = Texture::from_rgba(2, 2, &[255, 0, 0, 255]);
        assert_eq!(tex.pixels().get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(tex.pixels().get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_texture_equality_is_identity() {
        let a = Texture::from_rgba(1, 1, &[0; 4]);
        let b = Texture::from_rgba(1, 1, &[0; 4]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_sprite_bounds() {
        let tex = Texture::from_rgba(16, 16, &[]);
        assert!(Sprite::new(tex.clone(), Rect::new(8.0, 8.0, 8.0, 8.0)).is_ok());
        assert!(matches!(
            Sprite::new(tex, Rect::new(8.0, 8.0, 9.0, 8.0)),
            Err(ResourceError::SpriteOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = Texture::load("/nonexistent/bg.png").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bg.png"));
    }

    #[test]
    fn test_natural_size() {
        let bg = Background::from(VectorImage::new(24.0, 12.0, "<svg/>"));
        assert_eq!(bg.natural_size(), crate::Size::new(24.0, 12.0));
    }
}
