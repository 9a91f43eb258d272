//! Mini Flex - 链式 Flexbox 样式构建器
//! 在元素树上以链式调用设置 Flex 样式、组装子元素，布局由 Taffy 计算

mod color;
mod geometry;

pub use color::Color;
pub use geometry::{Rect, Size};

// 宿主 UI 元素树
pub mod ui;

// 链式样式构建器
pub mod flex;

// Taffy 布局
pub mod layout;

pub use flex::{flex, percent, FlexLayout, Percent, PercentExt};
pub use layout::{LayoutConfig, LayoutEngine, LayoutError};
pub use ui::{Element, Node};

// 单元测试
#[cfg(test)]
mod tests;
