//! Button 元素 - 可点击按钮

use std::any::Any;
use std::fmt;

use super::element::{Element, ElementBase};
use crate::Color;

/// Button - 按钮元素
pub struct Button {
    base: ElementBase,
    pub label: String,
    pub disabled: bool,
    on_click: Option<Box<dyn Fn()>>,
}

impl Button {
    pub fn new(label: &str) -> Self {
        let mut base = ElementBase::new();
        base.style.background_color = Color::from_hex(0x007AFF);
        base.style.border_radius = super::style::Corners::all(8.0);

        Self {
            base,
            label: label.to_string(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn set_on_click<F>(&mut self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.on_click = Some(Box::new(callback));
    }

    /// 触发点击，禁用或没有回调时返回 false
    pub fn click(&self) -> bool {
        if self.disabled {
            return false;
        }
        match &self.on_click {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("base", &self.base)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .finish()
    }
}

impl Element for Button {
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
        "Button"
    }
}
