//! 布局配置

use serde::Deserialize;

use super::LayoutError;

/// 布局视口配置，可从 JSON 读取：
///
/// ```json
/// { "viewportWidth": 375, "viewportHeight": 667, "rounding": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// 是否把布局结果取整到像素
    #[serde(default = "default_rounding")]
    pub rounding: bool,
}

fn default_viewport_width() -> f32 { 375.0 }
fn default_viewport_height() -> f32 { 667.0 }
fn default_rounding() -> bool { true }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            rounding: default_rounding(),
        }
    }
}

impl LayoutConfig {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = LayoutConfig::from_json(r#"{ "viewportWidth": 800 }"#).unwrap();
        assert_eq!(config.viewport_width, 800.0);
        assert_eq!(config.viewport_height, 667.0);
        assert!(config.rounding);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(LayoutConfig::from_json("{}").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = LayoutConfig::from_json("{ viewportWidth: }").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }
}
