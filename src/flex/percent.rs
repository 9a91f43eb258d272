//! 百分比值
//!
//! `percent(25)`、`25_i32.percent()` 或 `25.0f32.p()` 表示“包含块对应轴的
//! 25%”，数值原样保存，不做缩放或截断。

use std::fmt;

use crate::ui::{Length, StyleLength};

/// 百分比
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percent(pub f32);

impl Percent {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Percent> for Length {
    fn from(percent: Percent) -> Self {
        Length::percent(percent.0)
    }
}

impl From<Percent> for StyleLength {
    fn from(percent: Percent) -> Self {
        StyleLength::Length(percent.into())
    }
}

/// 数字转百分比
pub trait PercentExt {
    fn percent(self) -> Percent;

    /// `percent` 的简写
    fn p(self) -> Percent
    where
        Self: Sized,
    {
        self.percent()
    }
}

impl PercentExt for f32 {
    fn percent(self) -> Percent {
        Percent(self)
    }
}

impl PercentExt for f64 {
    fn percent(self) -> Percent {
        Percent(self as f32)
    }
}

impl PercentExt for i32 {
    fn percent(self) -> Percent {
        Percent(self as f32)
    }
}

/// 未标注类型的字面量也能直接使用：`percent(25)`、`percent(12.5)`
pub fn percent(value: impl PercentExt) -> Percent {
    value.percent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LengthUnit;

    #[test]
    fn test_percent_is_not_scaled() {
        let length: Length = percent(25).into();
        assert_eq!(length.value, 25.0);
        assert_eq!(length.unit, LengthUnit::Percent);
    }

    #[test]
    fn test_percent_keeps_out_of_range_values() {
        assert_eq!(Length::from(150.5f32.p()).value, 150.5);
        assert_eq!(Length::from((-10_i32).p()).value, -10.0);
        assert_eq!(percent(12.5).value(), 12.5);
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(25_i32.percent().to_string(), "25%");
        assert_eq!(StyleLength::from(12.5f32.percent()).to_string(), "12.5%");
    }
}
