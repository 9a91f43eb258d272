//! 元素树 → Taffy 布局树
//!
//! 每次计算都根据元素树重建一棵 taffy 树，算完后把绝对位置写回
//! `ElementBase::layout`。根元素放在一个固定为视口大小的节点里，
//! 所以根元素的百分比尺寸相对于视口。

use taffy::prelude::{NodeId, TaffyTree};

use super::{LayoutConfig, LayoutError};
use crate::ui::{
    Align, DisplayStyle, Element, FlexDirection, Justify, LengthUnit, Node, Overflow, Position,
    Style, StyleLength, Wrap,
};
use crate::Rect;

/// 布局引擎
pub struct LayoutEngine {
    taffy: TaffyTree<()>,
    config: LayoutConfig,
    node_count: usize,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            taffy: TaffyTree::new(),
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// 上一次计算涉及的元素数量
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// 计算以 `root` 为根的元素树布局
    pub fn compute<T: Element + ?Sized>(&mut self, root: &Node<T>) -> Result<(), LayoutError> {
        self.taffy = TaffyTree::new();
        if !self.config.rounding {
            self.taffy.disable_rounding();
        }
        self.node_count = 0;

        let root_id = self.build(root)?;

        // 视口节点
        let viewport = self.taffy.new_with_children(
            taffy::Style {
                display: taffy::Display::Flex,
                flex_direction: taffy::FlexDirection::Column,
                size: taffy::Size {
                    width: taffy::Dimension::Length(self.config.viewport_width),
                    height: taffy::Dimension::Length(self.config.viewport_height),
                },
                ..Default::default()
            },
            &[root_id],
        )?;

        self.taffy.compute_layout(
            viewport,
            taffy::Size {
                width: taffy::AvailableSpace::Definite(self.config.viewport_width),
                height: taffy::AvailableSpace::Definite(self.config.viewport_height),
            },
        )?;

        self.write_back(root, root_id, 0.0, 0.0)?;

        tracing::debug!(
            nodes = self.node_count,
            viewport_width = self.config.viewport_width,
            viewport_height = self.config.viewport_height,
            "layout computed"
        );
        Ok(())
    }

    fn build<T: Element + ?Sized>(&mut self, node: &Node<T>) -> Result<NodeId, LayoutError> {
        let style = convert_style(&node.borrow().base().style);

        let mut children = Vec::new();
        for child in node.children() {
            children.push(self.build(&child)?);
        }

        self.node_count += 1;
        Ok(self.taffy.new_with_children(style, &children)?)
    }

    fn write_back<T: Element + ?Sized>(
        &self,
        node: &Node<T>,
        id: NodeId,
        offset_x: f32,
        offset_y: f32,
    ) -> Result<(), LayoutError> {
        let layout = self.taffy.layout(id)?;
        let x = offset_x + layout.location.x;
        let y = offset_y + layout.location.y;
        node.borrow_mut().base_mut().layout = Rect::new(x, y, layout.size.width, layout.size.height);

        // 两棵树的子节点顺序一致
        let taffy_children = self.taffy.children(id)?;
        for (child, child_id) in node.children().iter().zip(taffy_children) {
            self.write_back(child, child_id, x, y)?;
        }
        Ok(())
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// 转换样式，只转换布局相关的属性
fn convert_style(style: &Style) -> taffy::Style {
    taffy::Style {
        display: match style.display {
            DisplayStyle::Flex => taffy::Display::Flex,
            DisplayStyle::None => taffy::Display::None,
        },

        overflow: {
            let overflow = match style.overflow {
                Overflow::Visible => taffy::Overflow::Visible,
                Overflow::Hidden => taffy::Overflow::Hidden,
            };
            taffy::Point { x: overflow, y: overflow }
        },

        position: match style.position {
            Position::Relative => taffy::Position::Relative,
            Position::Absolute => taffy::Position::Absolute,
        },

        inset: taffy::Rect {
            top: length_percentage_auto(style.inset.top),
            right: length_percentage_auto(style.inset.right),
            bottom: length_percentage_auto(style.inset.bottom),
            left: length_percentage_auto(style.inset.left),
        },

        size: taffy::Size {
            width: dimension(style.width),
            height: dimension(style.height),
        },

        min_size: taffy::Size {
            width: dimension(style.min_width),
            height: dimension(style.min_height),
        },

        max_size: taffy::Size {
            width: dimension(style.max_width),
            height: dimension(style.max_height),
        },

        margin: taffy::Rect {
            top: length_percentage_auto(style.margin.top),
            right: length_percentage_auto(style.margin.right),
            bottom: length_percentage_auto(style.margin.bottom),
            left: length_percentage_auto(style.margin.left),
        },

        padding: taffy::Rect {
            top: length_percentage(style.padding.top),
            right: length_percentage(style.padding.right),
            bottom: length_percentage(style.padding.bottom),
            left: length_percentage(style.padding.left),
        },

        border: taffy::Rect {
            top: taffy::LengthPercentage::Length(style.border_width.top),
            right: taffy::LengthPercentage::Length(style.border_width.right),
            bottom: taffy::LengthPercentage::Length(style.border_width.bottom),
            left: taffy::LengthPercentage::Length(style.border_width.left),
        },

        flex_direction: match style.flex_direction {
            FlexDirection::Row => taffy::FlexDirection::Row,
            FlexDirection::RowReverse => taffy::FlexDirection::RowReverse,
            FlexDirection::Column => taffy::FlexDirection::Column,
            FlexDirection::ColumnReverse => taffy::FlexDirection::ColumnReverse,
        },

        flex_wrap: match style.flex_wrap {
            Wrap::NoWrap => taffy::FlexWrap::NoWrap,
            Wrap::Wrap => taffy::FlexWrap::Wrap,
            Wrap::WrapReverse => taffy::FlexWrap::WrapReverse,
        },

        justify_content: Some(match style.justify_content {
            Justify::FlexStart => taffy::JustifyContent::FlexStart,
            Justify::Center => taffy::JustifyContent::Center,
            Justify::FlexEnd => taffy::JustifyContent::FlexEnd,
            Justify::SpaceBetween => taffy::JustifyContent::SpaceBetween,
            Justify::SpaceAround => taffy::JustifyContent::SpaceAround,
            Justify::SpaceEvenly => taffy::JustifyContent::SpaceEvenly,
        }),

        align_items: align_items(style.align_items),
        align_self: align_items(style.align_self),

        align_content: match style.align_content {
            Align::Auto => None,
            Align::FlexStart => Some(taffy::AlignContent::FlexStart),
            Align::Center => Some(taffy::AlignContent::Center),
            Align::FlexEnd => Some(taffy::AlignContent::FlexEnd),
            Align::Stretch => Some(taffy::AlignContent::Stretch),
        },

        flex_grow: style.flex_grow,
        flex_shrink: style.flex_shrink,
        flex_basis: dimension(style.flex_basis),

        ..Default::default()
    }
}

fn align_items(align: Align) -> Option<taffy::AlignItems> {
    match align {
        Align::Auto => None,
        Align::FlexStart => Some(taffy::AlignItems::FlexStart),
        Align::Center => Some(taffy::AlignItems::Center),
        Align::FlexEnd => Some(taffy::AlignItems::FlexEnd),
        Align::Stretch => Some(taffy::AlignItems::Stretch),
    }
}

// taffy 的百分比是 0..1 的比例，宿主保存的是 0..100

fn dimension(value: StyleLength) -> taffy::Dimension {
    match value.length() {
        None => taffy::Dimension::Auto,
        Some(l) => match l.unit {
            LengthUnit::Pixel => taffy::Dimension::Length(l.value),
            LengthUnit::Percent => taffy::Dimension::Percent(l.value / 100.0),
        },
    }
}

fn length_percentage_auto(value: StyleLength) -> taffy::LengthPercentageAuto {
    match value.length() {
        None => taffy::LengthPercentageAuto::Auto,
        Some(l) => match l.unit {
            LengthUnit::Pixel => taffy::LengthPercentageAuto::Length(l.value),
            LengthUnit::Percent => taffy::LengthPercentageAuto::Percent(l.value / 100.0),
        },
    }
}

/// 内边距不支持 auto，按 0 处理
fn length_percentage(value: StyleLength) -> taffy::LengthPercentage {
    match value.length() {
        None => taffy::LengthPercentage::Length(0.0),
        Some(l) => match l.unit {
            LengthUnit::Pixel => taffy::LengthPercentage::Length(l.value),
            LengthUnit::Percent => taffy::LengthPercentage::Percent(l.value / 100.0),
        },
    }
}
