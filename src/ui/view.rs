//! View 元素 - 基础容器

use std::any::Any;

use super::element::{Element, ElementBase};
use super::style::Style;

/// View - 默认的容器元素
#[derive(Debug, Default)]
pub struct View {
    base: ElementBase,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: Style) -> Self {
        Self {
            base: ElementBase::new().with_style(style),
        }
    }
}

impl Element for View {
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
        "View"
    }
}
