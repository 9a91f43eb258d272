//! 元素树单元测试

use std::cell::Cell;
use std::rc::Rc;

use crate::ui::{Button, HierarchyError, Image, Label, Node, Texture, View};

/// 测试把元素加入自身会报错
#[test]
fn test_try_add_self_is_rejected() {
    let root = Node::new(View::new());
    assert_eq!(root.try_add(&root.erase()), Err(HierarchyError::SelfInsertion(root.id())));
    assert_eq!(root.child_count(), 0);
}

/// 测试把祖先加为子元素会报错
#[test]
fn test_try_add_ancestor_is_rejected() {
    let root = Node::new(View::new());
    let child = root.flex().add_child();
    let grandchild = child.add_child();

    let err = grandchild.node().try_add(&root.erase()).unwrap_err();
    assert_eq!(err, HierarchyError::Cycle { parent: grandchild.node().id(), child: root.id() });
    assert!(root.parent().is_none());
}

#[test]
#[should_panic(expected = "cannot add ancestor")]
fn test_add_ancestor_panics() {
    let root = Node::new(View::new());
    let child = root.flex().add_child();
    child.add_node(&root.erase());
}

/// 测试追加已有父元素的元素时先从原父元素移除
#[test]
fn test_add_moves_child_between_parents() {
    let a = Node::new(View::new());
    let b = Node::new(View::new());
    let child = a.flex().add_child().name("moved");

    b.add(&child.node().erase());

    assert_eq!(a.child_count(), 0);
    assert_eq!(b.child_count(), 1);
    assert_eq!(child.node().parent().unwrap().id(), b.id());
}

/// 测试重复追加同一父元素下的子元素会移到末尾
#[test]
fn test_re_adding_moves_to_end() {
    let root = Node::new(View::new());
    let first = root.flex().add_child().name("first");
    root.flex().add_child().name("second");

    root.add(&first.node().erase());

    let names: Vec<String> = root.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["second", "first"]);
}

/// 测试父元素释放后子元素的父指针失效
#[test]
fn test_parent_is_weak() {
    let child = {
        let root = Node::new(View::new());
        root.flex().add_child().node().clone()
    };
    assert!(child.parent().is_none());
}

/// 测试具体类型检查与访问
#[test]
fn test_type_checks() {
    let label = Node::new(Label::new("hi").with_font_size(20.0)).erase();
    assert!(label.is::<Label>());
    assert!(!label.is::<View>());
    assert_eq!(label.with(|l: &Label| l.font_size), Some(20.0));
    assert_eq!(label.with(|b: &Button| b.label.clone()), None);

    label.with_mut(|l: &mut Label| l.text.push('!'));
    assert_eq!(label.with(|l: &Label| l.text.clone()), Some("hi!".to_string()));
}

/// 测试按钮点击回调
#[test]
fn test_button_click() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let mut button = Button::new("ok").on_click(move || counter.set(counter.get() + 1));

    assert!(button.click());
    assert_eq!(clicks.get(), 1);

    button.disabled = true;
    assert!(!button.click());
    assert!(!Button::default().click());
}

/// 测试 Image 元素持有背景资源
#[test]
fn test_image_element() {
    let image = Node::new(Image::new(Texture::from_rgba(8, 4, &[])));
    let size = image.with(|i: &Image| i.image.as_ref().map(|bg| bg.natural_size()));
    assert_eq!(size.flatten(), Some(crate::Size::new(8.0, 4.0)));
}

/// 测试默认按钮样式可以被构建器覆盖
#[test]
fn test_button_default_style_is_overridable() {
    let root = Node::new(View::new());
    let button = root.flex().add_child_of::<Button>();
    assert_eq!(button.node().style().background_color, crate::Color::from_hex(0x007AFF));

    button.background_color(crate::Color::RED);
    assert_eq!(button.node().style().background_color, crate::Color::RED);
}
