//! 宿主 UI 框架：元素树、样式记录与资源

mod element;
mod view;
mod label;
mod button;
mod image;
pub mod resource;
pub mod snapshot;
pub mod style;

pub use element::{Element, ElementBase, ElementId, HierarchyError, Node, WeakNode};
pub use view::View;
pub use label::Label;
pub use button::Button;
pub use image::{Image, ScaleMode};
pub use resource::{Background, RenderTexture, ResourceError, Sprite, Texture, VectorImage};
pub use snapshot::ElementSnapshot;
pub use style::{
    Align, Corners, DisplayStyle, Edges, FlexDirection, Justify, Length, LengthUnit, Overflow,
    Position, Style, StyleLength, Visibility, Wrap,
};
