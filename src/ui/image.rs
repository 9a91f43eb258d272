//! Image 元素 - 图片显示

use std::any::Any;

use super::element::{Element, ElementBase};
use super::resource::Background;

/// 图片缩放模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// 缩放到填满，可能裁剪
    Cover,
    /// 缩放到完全显示，可能留白
    #[default]
    Contain,
    /// 拉伸填满
    Fill,
}

/// Image - 图片元素
#[derive(Debug, Default)]
pub struct Image {
    base: ElementBase,
    pub image: Option<Background>,
    pub scale_mode: ScaleMode,
}

impl Image {
    pub fn new(image: impl Into<Background>) -> Self {
        Self {
            base: ElementBase::new(),
            image: Some(image.into()),
            scale_mode: ScaleMode::default(),
        }
    }

    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }
}

impl Element for Image {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }
}
