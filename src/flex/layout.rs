//! FlexLayout - 绑定到单个元素的链式样式构建器
//!
//! 每个设置方法只改写绑定元素的样式记录并返回绑定到同一元素的构建器；
//! 添加子元素的方法返回绑定到新子元素的构建器。构建器本身只持有元素句柄，
//! 克隆代价很低，用完即弃。

use crate::ui::{
    Align, Background, Corners, DisplayStyle, Edges, Element, FlexDirection, Justify, Node,
    Overflow, Position, Style, StyleLength, View, Visibility, WeakNode, Wrap,
};
use crate::Color;

/// 链式 Flex 样式构建器
pub struct FlexLayout<T: ?Sized = dyn Element> {
    node: Node<T>,
}

impl<T: ?Sized> Clone for FlexLayout<T> {
    fn clone(&self) -> Self {
        Self { node: self.node.clone() }
    }
}

impl<T: Element + ?Sized> std::fmt::Debug for FlexLayout<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FlexLayout").field(&self.node).finish()
    }
}

/// 获取元素的构建器
pub fn flex<T: Element + ?Sized>(node: &Node<T>) -> FlexLayout<T> {
    FlexLayout::new(node.clone())
}

impl<T: Element + ?Sized> Node<T> {
    /// 获取该元素的 FlexLayout
    pub fn flex(&self) -> FlexLayout<T> {
        FlexLayout::new(self.clone())
    }
}

impl<T: Element + ?Sized> FlexLayout<T> {
    pub fn new(node: Node<T>) -> Self {
        Self { node }
    }

    /// 从弱句柄创建构建器
    ///
    /// # Panics
    ///
    /// 元素已被释放时 panic。
    pub fn from_weak(weak: &WeakNode<T>) -> Self {
        match weak.upgrade() {
            Some(node) => Self::new(node),
            None => panic!("FlexLayout requires a live element, but the element was dropped"),
        }
    }

    fn apply(&self, f: impl FnOnce(&mut Style)) -> Self {
        self.node.update_style(f);
        self.clone()
    }

    // 1. 布局

    /// 设置主轴方向
    pub fn direction(&self, direction: FlexDirection) -> Self {
        self.apply(|s| s.flex_direction = direction)
    }

    /// 设置换行模式
    pub fn wrap(&self, wrap: Wrap) -> Self {
        self.apply(|s| s.flex_wrap = wrap)
    }

    /// 设置主轴对齐
    pub fn justify_content(&self, justify: Justify) -> Self {
        self.apply(|s| s.justify_content = justify)
    }

    /// 设置交叉轴对齐
    pub fn align_items(&self, align: Align) -> Self {
        self.apply(|s| s.align_items = align)
    }

    /// 设置自身在父元素交叉轴上的对齐
    pub fn align_self(&self, align: Align) -> Self {
        self.apply(|s| s.align_self = align)
    }

    /// 设置多行对齐
    pub fn align_content(&self, align: Align) -> Self {
        self.apply(|s| s.align_content = align)
    }

    // 2. 尺寸
    //
    // 长度参数接受 f32（像素）、Percent、Length 或 StyleLength。

    pub fn width(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.width = value)
    }

    pub fn height(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.height = value)
    }

    /// 宽高设为同一个值
    pub fn size(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| {
            s.width = value;
            s.height = value;
        })
    }

    pub fn size_wh(&self, width: impl Into<StyleLength>, height: impl Into<StyleLength>) -> Self {
        let (width, height) = (width.into(), height.into());
        self.apply(|s| {
            s.width = width;
            s.height = height;
        })
    }

    pub fn min_width(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.min_width = value)
    }

    pub fn min_height(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.min_height = value)
    }

    pub fn max_width(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.max_width = value)
    }

    pub fn max_height(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.max_height = value)
    }

    // 3. Flex 属性

    pub fn grow(&self, value: f32) -> Self {
        self.apply(|s| s.flex_grow = value)
    }

    pub fn shrink(&self, value: f32) -> Self {
        self.apply(|s| s.flex_shrink = value)
    }

    pub fn basis(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.flex_basis = value)
    }

    pub fn basis_auto(&self) -> Self {
        self.apply(|s| s.flex_basis = StyleLength::Auto)
    }

    // 4. 定位

    pub fn position(&self, position: Position) -> Self {
        self.apply(|s| s.position = position)
    }

    pub fn left(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.inset.left = value)
    }

    pub fn top(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.inset.top = value)
    }

    pub fn right(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.inset.right = value)
    }

    pub fn bottom(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.inset.bottom = value)
    }

    // 5. 外边距

    /// 四边外边距设为同一个值
    pub fn margin(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.margin = Edges::all(value))
    }

    /// 上下为 vertical，左右为 horizontal
    pub fn margin_vh(&self, vertical: impl Into<StyleLength>, horizontal: impl Into<StyleLength>) -> Self {
        let edges = symmetric(vertical.into(), horizontal.into());
        self.apply(|s| s.margin = edges)
    }

    /// 按 top, right, bottom, left 顺序设置
    pub fn margin_trbl(
        &self,
        top: impl Into<StyleLength>,
        right: impl Into<StyleLength>,
        bottom: impl Into<StyleLength>,
        left: impl Into<StyleLength>,
    ) -> Self {
        let edges = Edges { top: top.into(), right: right.into(), bottom: bottom.into(), left: left.into() };
        self.apply(|s| s.margin = edges)
    }

    pub fn margin_top(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.margin.top = value)
    }

    pub fn margin_right(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.margin.right = value)
    }

    pub fn margin_bottom(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.margin.bottom = value)
    }

    pub fn margin_left(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.margin.left = value)
    }

    /// 左右外边距
    pub fn margin_horizontal(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| {
            s.margin.left = value;
            s.margin.right = value;
        })
    }

    /// 上下外边距
    pub fn margin_vertical(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| {
            s.margin.top = value;
            s.margin.bottom = value;
        })
    }

    // 6. 内边距

    pub fn padding(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.padding = Edges::all(value))
    }

    pub fn padding_vh(&self, vertical: impl Into<StyleLength>, horizontal: impl Into<StyleLength>) -> Self {
        let edges = symmetric(vertical.into(), horizontal.into());
        self.apply(|s| s.padding = edges)
    }

    pub fn padding_trbl(
        &self,
        top: impl Into<StyleLength>,
        right: impl Into<StyleLength>,
        bottom: impl Into<StyleLength>,
        left: impl Into<StyleLength>,
    ) -> Self {
        let edges = Edges { top: top.into(), right: right.into(), bottom: bottom.into(), left: left.into() };
        self.apply(|s| s.padding = edges)
    }

    pub fn padding_top(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.padding.top = value)
    }

    pub fn padding_right(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.padding.right = value)
    }

    pub fn padding_bottom(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.padding.bottom = value)
    }

    pub fn padding_left(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| s.padding.left = value)
    }

    pub fn padding_horizontal(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| {
            s.padding.left = value;
            s.padding.right = value;
        })
    }

    pub fn padding_vertical(&self, value: impl Into<StyleLength>) -> Self {
        let value = value.into();
        self.apply(|s| {
            s.padding.top = value;
            s.padding.bottom = value;
        })
    }

    // 7. 视觉属性

    pub fn background_color(&self, color: Color) -> Self {
        self.apply(|s| s.background_color = color)
    }

    /// 设置背景图片，接受 Texture、RenderTexture、VectorImage 或 Sprite
    pub fn background_image(&self, image: impl Into<Background>) -> Self {
        let image = image.into();
        self.apply(|s| s.background_image = Some(image))
    }

    /// 四条边使用同样的边框宽度和颜色
    pub fn border(&self, width: f32, color: Color) -> Self {
        self.apply(|s| {
            s.border_width = Edges::all(width);
            s.border_color = Edges::all(color);
        })
    }

    /// 四个角使用同样的圆角半径
    pub fn border_radius(&self, radius: f32) -> Self {
        self.apply(|s| s.border_radius = Corners::all(radius))
    }

    /// 不透明度，超出 [0, 1] 的值原样交给宿主
    pub fn opacity(&self, opacity: f32) -> Self {
        self.apply(|s| s.opacity = opacity)
    }

    pub fn visibility(&self, visibility: Visibility) -> Self {
        self.apply(|s| s.visibility = visibility)
    }

    pub fn display(&self, display: DisplayStyle) -> Self {
        self.apply(|s| s.display = display)
    }

    pub fn overflow(&self, overflow: Overflow) -> Self {
        self.apply(|s| s.overflow = overflow)
    }

    // 8. 子元素

    /// 添加一个默认 View 子元素，返回子元素的构建器
    pub fn add_child(&self) -> FlexLayout<View> {
        self.add_child_of::<View>()
    }

    /// 添加指定类型的子元素，返回子元素的构建器
    pub fn add_child_of<C: Element + Default>(&self) -> FlexLayout<C> {
        let child = Node::new(C::default());
        self.add_element(&child)
    }

    /// 追加已有元素，返回该元素的构建器
    pub fn add_element<C: Element>(&self, child: &Node<C>) -> FlexLayout<C> {
        self.node.add(&child.erase());
        child.flex()
    }

    /// 追加类型已擦除的元素
    pub fn add_node(&self, child: &Node) -> FlexLayout {
        self.node.add(child);
        child.flex()
    }

    /// 以当前构建器调用一次 `configure`，丢弃其返回值
    ///
    /// ```ignore
    /// container.flex().direction(FlexDirection::Row).define(|row| {
    ///     row.add_child().width(percent(25)).height(100.0);
    ///     row.add_child().grow(1.0);
    /// });
    /// ```
    pub fn define<R>(&self, configure: impl FnOnce(&Self) -> R) -> Self {
        let _ = configure(self);
        self.clone()
    }

    /// 条件为真时等同于 `define`，否则什么都不做
    pub fn when<R>(&self, condition: bool, configure: impl FnOnce(&Self) -> R) -> Self {
        if condition {
            let _ = configure(self);
        }
        self.clone()
    }

    // 9. 工具方法

    /// 绑定的元素
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// 以具体类型访问绑定的元素
    pub fn element<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut element = self.node.borrow_mut();
        f(&mut *element)
    }

    pub fn add_class(&self, class_name: &str) -> Self {
        self.node.add_to_class_list(class_name);
        self.clone()
    }

    pub fn remove_class(&self, class_name: &str) -> Self {
        self.node.remove_from_class_list(class_name);
        self.clone()
    }

    pub fn name(&self, name: &str) -> Self {
        self.node.set_name(name);
        self.clone()
    }
}

fn symmetric(vertical: StyleLength, horizontal: StyleLength) -> Edges<StyleLength> {
    Edges { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
}
