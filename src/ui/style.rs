//! 元素样式记录
//!
//! 宿主框架为每个元素保存的一组可写样式属性。布局相关字段会在
//! 布局阶段交给 taffy，视觉相关字段只保存在这里。

use serde::Serialize;
use std::fmt;

use super::resource::Background;
use crate::Color;

/// 主轴方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FlexDirection {
    Row,
    RowReverse,
    #[default]
    Column,
    ColumnReverse,
}

/// 换行模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Wrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// 主轴对齐
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// 交叉轴对齐，`Auto` 只对 align-self 有意义
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// 定位方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Position {
    #[default]
    Relative,
    Absolute,
}

/// 可见性，隐藏的元素仍然占据布局空间
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// 显示模式，`None` 的元素不参与布局
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DisplayStyle {
    #[default]
    Flex,
    None,
}

/// 溢出处理
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

/// 长度单位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LengthUnit {
    #[default]
    Pixel,
    /// 相对于包含块对应轴的百分比，数值按原样保存（25 表示 25%）
    Percent,
}

/// 带单位的长度
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Pixel)
    }

    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            LengthUnit::Pixel => write!(f, "{}px", self.value),
            LengthUnit::Percent => write!(f, "{}%", self.value),
        }
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::px(value)
    }
}

/// 样式中的长度值：具体长度或 auto 关键字
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StyleLength {
    Auto,
    Length(Length),
}

impl StyleLength {
    pub const ZERO: StyleLength = StyleLength::Length(Length::px(0.0));

    pub fn is_auto(&self) -> bool {
        matches!(self, StyleLength::Auto)
    }

    /// 具体长度，auto 时返回 None
    pub fn length(&self) -> Option<Length> {
        match self {
            StyleLength::Auto => None,
            StyleLength::Length(l) => Some(*l),
        }
    }
}

impl Default for StyleLength {
    fn default() -> Self {
        StyleLength::Auto
    }
}

impl fmt::Display for StyleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleLength::Auto => write!(f, "auto"),
            StyleLength::Length(l) => l.fmt(f),
        }
    }
}

impl From<f32> for StyleLength {
    fn from(value: f32) -> Self {
        StyleLength::Length(Length::px(value))
    }
}

impl From<Length> for StyleLength {
    fn from(length: Length) -> Self {
        StyleLength::Length(length)
    }
}

/// 四条边上的值，顺序为 top, right, bottom, left
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub const fn all(value: T) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// 四个角上的值
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Copy> Corners<T> {
    pub const fn all(value: T) -> Self {
        Self { top_left: value, top_right: value, bottom_right: value, bottom_left: value }
    }
}

/// 元素样式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    // Flex 布局属性
    pub flex_direction: FlexDirection,
    pub flex_wrap: Wrap,
    pub justify_content: Justify,
    pub align_items: Align,
    pub align_self: Align,
    pub align_content: Align,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: StyleLength,

    // 尺寸
    pub width: StyleLength,
    pub height: StyleLength,
    pub min_width: StyleLength,
    pub min_height: StyleLength,
    pub max_width: StyleLength,
    pub max_height: StyleLength,

    // 定位
    pub position: Position,
    pub inset: Edges<StyleLength>,

    // 间距
    pub margin: Edges<StyleLength>,
    pub padding: Edges<StyleLength>,

    // 边框
    pub border_width: Edges<f32>,
    pub border_color: Edges<Color>,
    pub border_radius: Corners<f32>,

    // 视觉属性
    pub background_color: Color,
    pub background_image: Option<Background>,
    pub opacity: f32,
    pub visibility: Visibility,
    pub display: DisplayStyle,
    pub overflow: Overflow,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            flex_wrap: Wrap::NoWrap,
            justify_content: Justify::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            align_content: Align::FlexStart,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: StyleLength::Auto,

            width: StyleLength::Auto,
            height: StyleLength::Auto,
            min_width: StyleLength::Auto,
            min_height: StyleLength::Auto,
            max_width: StyleLength::Auto,
            max_height: StyleLength::Auto,

            position: Position::Relative,
            inset: Edges::all(StyleLength::Auto),

            margin: Edges::all(StyleLength::ZERO),
            padding: Edges::all(StyleLength::ZERO),

            border_width: Edges::all(0.0),
            border_color: Edges::all(Color::TRANSPARENT),
            border_radius: Corners::all(0.0),

            background_color: Color::TRANSPARENT,
            background_image: None,
            opacity: 1.0,
            visibility: Visibility::Visible,
            display: DisplayStyle::Flex,
            overflow: Overflow::Visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::px(12.0).to_string(), "12px");
        assert_eq!(Length::percent(25.0).to_string(), "25%");
        assert_eq!(StyleLength::Auto.to_string(), "auto");
    }

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert!(style.width.is_auto());
        assert_eq!(style.margin.to_array(), [StyleLength::ZERO; 4]);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.opacity, 1.0);
        assert!(style.background_image.is_none());
    }
}
