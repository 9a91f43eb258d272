//! Label 元素 - 文本显示

use std::any::Any;

use super::element::{Element, ElementBase};
use crate::Color;

/// Label - 文本元素
#[derive(Debug)]
pub struct Label {
    base: ElementBase,
    pub text: String,
    pub font_size: f32,
    pub text_color: Color,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            base: ElementBase::new(),
            text: text.to_string(),
            font_size: 16.0,
            text_color: Color::BLACK,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl Element for Label {
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
        "Label"
    }
}
