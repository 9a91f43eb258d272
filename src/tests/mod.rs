//! 单元测试模块
//! 覆盖构建器、元素树、布局计算

pub mod tree_tests;
pub mod layout_tests;
