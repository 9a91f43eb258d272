//! 链式 Flex 样式构建器

mod layout;
mod percent;

pub use layout::{flex, FlexLayout};
pub use percent::{percent, Percent, PercentExt};
