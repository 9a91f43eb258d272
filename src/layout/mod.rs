//! 布局计算（使用 Taffy - Rust 实现的 Flexbox 布局）

mod config;
mod taffy_layout;

pub use config::LayoutConfig;
pub use taffy_layout::LayoutEngine;

use thiserror::Error;

/// 布局错误
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("taffy layout failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
    #[error("invalid layout config: {0}")]
    Config(#[from] serde_json::Error),
}
