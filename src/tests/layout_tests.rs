//! 布局单元测试
//! 用构建器搭建元素树，交给 Taffy 计算后检查写回的位置

use crate::flex::percent;
use crate::layout::{LayoutConfig, LayoutEngine};
use crate::ui::{DisplayStyle, FlexDirection, Justify, Node, Position, View};
use crate::{Color, Rect};

fn compute(root: &Node<View>, width: f32, height: f32) -> LayoutEngine {
    let mut engine = LayoutEngine::new(LayoutConfig::new(width, height));
    engine.compute(root).unwrap();
    engine
}

/// 测试百分比宽度相对于父元素
#[test]
fn test_percent_widths_in_row() {
    let root = Node::new(View::new());
    let (a, b, c) = {
        let row = root.flex().size_wh(400.0, 100.0).direction(FlexDirection::Row);
        (
            row.add_child().width(percent(25)).height(percent(100)),
            row.add_child().width(percent(50)).height(percent(100)),
            row.add_child().width(percent(25)).height(percent(100)),
        )
    };

    let engine = compute(&root, 400.0, 300.0);
    assert_eq!(engine.node_count(), 4);

    assert_eq!(a.node().layout(), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(b.node().layout(), Rect::new(100.0, 0.0, 200.0, 100.0));
    assert_eq!(c.node().layout(), Rect::new(300.0, 0.0, 100.0, 100.0));
}

/// 测试根元素的百分比相对于视口
#[test]
fn test_root_percent_is_relative_to_viewport() {
    let root = Node::new(View::new());
    root.flex().width(percent(50)).height(percent(25));

    compute(&root, 400.0, 200.0);
    assert_eq!(root.layout().size(), crate::Size::new(200.0, 50.0));
}

/// 测试四值外边距的顺序在布局中生效
#[test]
fn test_margin_order_in_layout() {
    let root = Node::new(View::new());
    let child = root
        .flex()
        .size_wh(200.0, 100.0)
        .direction(FlexDirection::Row)
        .add_child()
        .size(10.0)
        .margin_trbl(1.0, 2.0, 3.0, 4.0);

    compute(&root, 200.0, 100.0);
    let r = child.node().layout();
    assert_eq!((r.x, r.y), (4.0, 1.0));
}

/// 测试 justify-content: center
#[test]
fn test_justify_content_center() {
    let root = Node::new(View::new());
    let child = root
        .flex()
        .size_wh(200.0, 100.0)
        .direction(FlexDirection::Row)
        .justify_content(Justify::Center)
        .add_child()
        .size(50.0);

    compute(&root, 200.0, 100.0);
    assert_eq!(child.node().layout().x, 75.0); // (200 - 50) / 2
}

/// 测试 flex-grow 按比例分配
#[test]
fn test_flex_grow() {
    let root = Node::new(View::new());
    let (a, b) = {
        let row = root.flex().size_wh(300.0, 100.0).direction(FlexDirection::Row);
        (row.add_child().grow(1.0).height(50.0), row.add_child().grow(2.0).height(50.0))
    };

    compute(&root, 300.0, 100.0);
    assert_eq!(a.node().layout().width, 100.0); // 300 * 1/3
    assert_eq!(b.node().layout().width, 200.0); // 300 * 2/3
    assert_eq!(b.node().layout().x, 100.0);
}

/// 测试 display: none 的元素不占空间
#[test]
fn test_display_none_takes_no_space() {
    let root = Node::new(View::new());
    let (hidden, shown) = {
        let row = root.flex().size_wh(200.0, 50.0).direction(FlexDirection::Row);
        (
            row.add_child().size(50.0).display(DisplayStyle::None),
            row.add_child().size(50.0),
        )
    };

    compute(&root, 200.0, 50.0);
    assert_eq!(hidden.node().layout().width, 0.0);
    assert_eq!(shown.node().layout().x, 0.0);
}

/// 测试绝对定位和嵌套元素的绝对坐标
#[test]
fn test_absolute_position_is_accumulated() {
    let root = Node::new(View::new());
    let inner = root
        .flex()
        .size_wh(300.0, 300.0)
        .add_child()
        .position(Position::Absolute)
        .left(10.0)
        .top(20.0)
        .size(100.0);
    let leaf = inner.add_child().position(Position::Absolute).left(5.0).top(5.0).size(10.0);

    compute(&root, 300.0, 300.0);
    assert_eq!(inner.node().layout(), Rect::new(10.0, 20.0, 100.0, 100.0));
    assert_eq!(leaf.node().layout(), Rect::new(15.0, 25.0, 10.0, 10.0));
}

/// 测试边框宽度参与布局，颜色不参与
#[test]
fn test_border_width_offsets_children() {
    let root = Node::new(View::new());
    let child = root
        .flex()
        .size_wh(100.0, 100.0)
        .border(2.0, Color::RED)
        .add_child()
        .size(10.0);

    compute(&root, 100.0, 100.0);
    let r = child.node().layout();
    assert_eq!((r.x, r.y), (2.0, 2.0));
}

/// 测试视觉属性不影响布局
#[test]
fn test_visual_properties_do_not_move_elements() {
    let build = |styled: bool| {
        let root = Node::new(View::new());
        let child = root.flex().size_wh(100.0, 100.0).add_child().size(20.0).when(styled, |c| {
            c.opacity(0.3).background_color(Color::GREEN).border_radius(9.0)
        });
        compute(&root, 100.0, 100.0);
        child.node().layout()
    };
    assert_eq!(build(true), build(false));
}

/// 测试重复计算会使用最新样式
#[test]
fn test_recompute_after_style_change() {
    let root = Node::new(View::new());
    let child = root.flex().size_wh(100.0, 100.0).add_child().size(10.0);

    let mut engine = LayoutEngine::new(LayoutConfig::new(100.0, 100.0));
    engine.compute(&root).unwrap();
    assert_eq!(child.node().layout().width, 10.0);

    child.width(percent(50));
    engine.compute(&root).unwrap();
    assert_eq!(child.node().layout().width, 50.0);
}
