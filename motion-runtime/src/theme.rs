//! # 主题
//!
//! 组件使用的颜色与动画速度。

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{MotionError, MotionResult};

/// 动画相关的主题配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTheme {
    /// 动画时长倍率（0 表示关闭动画）
    pub scale: f32,
}

impl Default for AnimationTheme {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// 主题颜色
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// 强调色（悬浮按钮背景）
    pub accent: Color,
    /// 主文字色
    pub text: Color,
    /// 禁用状态
    pub disabled: Color,
    /// 遮罩层
    pub backdrop: Color,
}

/// UI 主题配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// 是否为深色主题
    pub dark: bool,
    /// 颜色
    pub colors: ThemeColors,
    /// 动画
    #[serde(default)]
    pub animation: AnimationTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// 浅色主题（默认）
    pub fn light() -> Self {
        Self {
            dark: false,
            colors: ThemeColors {
                accent: Color::from_rgb_u8(0x03, 0xda, 0xc4),
                text: Color::BLACK,
                disabled: Color::BLACK.with_alpha(0.26),
                backdrop: Color::BLACK.with_alpha(0.5),
            },
            animation: AnimationTheme::default(),
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            dark: true,
            colors: ThemeColors {
                accent: Color::from_rgb_u8(0x03, 0xda, 0xc6),
                text: Color::WHITE,
                disabled: Color::WHITE.with_alpha(0.38),
                backdrop: Color::BLACK.with_alpha(0.5),
            },
            animation: AnimationTheme::default(),
        }
    }

    /// 设置动画倍率
    pub fn with_animation_scale(mut self, scale: f32) -> MotionResult<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(MotionError::InvalidScale { scale });
        }
        self.animation.scale = scale;
        Ok(self)
    }

    /// 按动画倍率换算时长（毫秒）
    pub fn scaled(&self, base_ms: f32) -> f32 {
        base_ms * self.animation.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = Theme::default();
        assert!(!theme.dark);
        assert_eq!(theme.animation.scale, 1.0);
        assert_eq!(theme.colors.text, Color::BLACK);
    }

    #[test]
    fn test_scaled_duration() {
        let theme = Theme::dark().with_animation_scale(2.0).unwrap();
        assert_eq!(theme.scaled(200.0), 400.0);
        assert!(theme.dark);
    }

    #[test]
    fn test_invalid_scale() {
        assert!(Theme::light().with_animation_scale(-1.0).is_err());
        assert!(Theme::light().with_animation_scale(f32::INFINITY).is_err());
        assert_eq!(Theme::light().with_animation_scale(0.0).unwrap().scaled(250.0), 0.0);
    }
}
