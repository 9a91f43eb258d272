//! 元素基础定义与共享句柄

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

use super::style::Style;
use crate::Rect;

static ELEMENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// 元素 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ElementId(pub u64);

impl ElementId {
    pub fn new() -> Self {
        Self(ELEMENT_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// 树结构错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("cannot add element {0:?} to itself")]
    SelfInsertion(ElementId),
    #[error("cannot add ancestor {child:?} as a child of {parent:?}")]
    Cycle { parent: ElementId, child: ElementId },
}

/// 所有元素共有的状态
pub struct ElementBase {
    id: ElementId,
    pub name: String,
    classes: Vec<String>,
    pub style: Style,
    /// 最近一次布局计算得到的绝对位置
    pub layout: Rect,
    children: Vec<Node>,
    parent: Option<Weak<RefCell<dyn Element>>>,
    self_ref: Option<Weak<RefCell<dyn Element>>>,
}

impl ElementBase {
    pub fn new() -> Self {
        Self {
            id: ElementId::new(),
            name: String::new(),
            classes: Vec::new(),
            style: Style::default(),
            layout: Rect::default(),
            children: Vec::new(),
            parent: None,
            self_ref: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// 加入样式类，已存在时忽略
    pub fn add_to_class_list(&mut self, class_name: &str) {
        if !self.class_list_contains(class_name) {
            self.classes.push(class_name.to_string());
        }
    }

    pub fn remove_from_class_list(&mut self, class_name: &str) {
        self.classes.retain(|c| c != class_name);
    }

    pub fn class_list_contains(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }
}

impl Default for ElementBase {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ElementBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("classes", &self.classes)
            .field("children", &self.children.len())
            .finish()
    }
}

/// 元素 trait
pub trait Element: Any {
    fn base(&self) -> &ElementBase;
    fn base_mut(&mut self) -> &mut ElementBase;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// 元素类型名
    fn type_name(&self) -> &'static str {
        "Element"
    }
}

/// 元素的共享句柄
///
/// 元素不被任何一方独占：父元素、调用方和样式构建器各自持有一个句柄。
/// 只能在创建它的线程上使用。
pub struct Node<T: ?Sized = dyn Element> {
    inner: Rc<RefCell<T>>,
}

impl<T: ?Sized> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Element> Node<T> {
    pub fn new(element: T) -> Self {
        let inner = Rc::new(RefCell::new(element));
        let erased: Rc<RefCell<dyn Element>> = inner.clone();
        inner.borrow_mut().base_mut().self_ref = Some(Rc::downgrade(&erased));
        Self { inner }
    }

    /// 擦除具体类型
    pub fn erase(&self) -> Node {
        let inner: Rc<RefCell<dyn Element>> = self.inner.clone();
        Node { inner }
    }
}

impl<T: Element + Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Element + ?Sized> Node<T> {
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn downgrade(&self) -> WeakNode<T> {
        WeakNode { inner: Rc::downgrade(&self.inner) }
    }

    pub fn id(&self) -> ElementId {
        self.borrow().base().id
    }

    pub fn type_name(&self) -> &'static str {
        self.borrow().type_name()
    }

    pub fn name(&self) -> String {
        self.borrow().base().name.clone()
    }

    pub fn set_name(&self, name: &str) {
        self.borrow_mut().base_mut().name = name.to_string();
    }

    /// 样式记录的副本
    pub fn style(&self) -> Style {
        self.borrow().base().style.clone()
    }

    pub fn update_style(&self, f: impl FnOnce(&mut Style)) {
        f(&mut self.borrow_mut().base_mut().style);
    }

    pub fn layout(&self) -> Rect {
        self.borrow().base().layout
    }

    pub fn classes(&self) -> Vec<String> {
        self.borrow().base().classes.clone()
    }

    pub fn add_to_class_list(&self, class_name: &str) {
        self.borrow_mut().base_mut().add_to_class_list(class_name);
    }

    pub fn remove_from_class_list(&self, class_name: &str) {
        self.borrow_mut().base_mut().remove_from_class_list(class_name);
    }

    pub fn class_list_contains(&self, class_name: &str) -> bool {
        self.borrow().base().class_list_contains(class_name)
    }

    pub fn children(&self) -> Vec<Node> {
        self.borrow().base().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.borrow().base().children.len()
    }

    pub fn child(&self, index: usize) -> Option<Node> {
        self.borrow().base().children.get(index).cloned()
    }

    pub fn parent(&self) -> Option<Node> {
        let parent = self.borrow().base().parent.clone()?;
        parent.upgrade().map(|inner| Node { inner })
    }

    /// 具体类型检查
    pub fn is<C: Element>(&self) -> bool {
        self.borrow().as_any().is::<C>()
    }

    /// 以具体类型访问元素，类型不符时返回 None
    pub fn with<C: Element, R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        let element = self.borrow();
        element.as_any().downcast_ref::<C>().map(f)
    }

    pub fn with_mut<C: Element, R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        let mut element = self.borrow_mut();
        element.as_any_mut().downcast_mut::<C>().map(f)
    }

    /// 追加子元素到末尾
    ///
    /// 子元素已有父元素时先从原父元素移除。加入自身或祖先会 panic。
    pub fn add(&self, child: &Node) {
        if let Err(e) = self.try_add(child) {
            panic!("{e}");
        }
    }

    pub fn try_add(&self, child: &Node) -> Result<(), HierarchyError> {
        let parent_id = self.id();
        let child_id = child.id();
        if parent_id == child_id {
            return Err(HierarchyError::SelfInsertion(child_id));
        }

        let mut ancestor = self.parent();
        while let Some(node) = ancestor {
            if node.id() == child_id {
                return Err(HierarchyError::Cycle { parent: parent_id, child: child_id });
            }
            ancestor = node.parent();
        }

        if let Some(old_parent) = child.parent() {
            old_parent
                .borrow_mut()
                .base_mut()
                .children
                .retain(|c| c.id() != child_id);
            tracing::trace!(child = child_id.0, from = old_parent.id().0, "detached from previous parent");
        }

        let self_ref = self.borrow().base().self_ref.clone();
        self.borrow_mut().base_mut().children.push(child.clone());
        child.borrow_mut().base_mut().parent = self_ref;

        tracing::debug!(
            parent = parent_id.0,
            child = child_id.0,
            kind = child.type_name(),
            index = self.child_count() - 1,
            "child appended"
        );
        Ok(())
    }
}

impl<T: Element + ?Sized> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(element) => write!(f, "Node({} #{})", element.type_name(), element.base().id.0),
            Err(_) => write!(f, "Node(<borrowed>)"),
        }
    }
}

/// 不持有所有权的元素句柄
pub struct WeakNode<T: ?Sized = dyn Element> {
    inner: Weak<RefCell<T>>,
}

impl<T: ?Sized> Clone for WeakNode<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: ?Sized> WeakNode<T> {
    pub fn upgrade(&self) -> Option<Node<T>> {
        self.inner.upgrade().map(|inner| Node { inner })
    }
}
