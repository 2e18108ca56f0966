//! # Config 模块
//!
//! 宿主配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (JSON)
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use motion_runtime::Theme;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// 主题模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// 宿主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// 动画时长倍率（0 表示关闭动画）
    #[serde(default = "default_animation_scale")]
    pub animation_scale: f32,

    /// 回放帧率 (1 - 240)
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// 主题
    #[serde(default)]
    pub theme: ThemeMode,

    /// 单次回放的最大帧数
    ///
    /// 超过后停止回放并报告未收敛。
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,
}

// 默认值函数
fn default_animation_scale() -> f32 {
    1.0
}

fn default_frame_rate() -> u32 {
    60
}

fn default_max_frames() -> usize {
    600
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            animation_scale: default_animation_scale(),
            frame_rate: default_frame_rate(),
            theme: ThemeMode::default(),
            max_frames: default_max_frames(),
        }
    }
}

impl HostConfig {
    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!(path = %path.display(), "配置文件加载成功");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "配置文件加载失败，使用默认配置");
                Self::default()
            }
        }
    }

    /// 读取并解析配置文件，不做回退
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.animation_scale.is_finite() || self.animation_scale < 0.0 {
            return Err(ConfigError::Validation(format!(
                "动画倍率必须是非负有限数，实际为 {}",
                self.animation_scale
            )));
        }

        if !(1..=240).contains(&self.frame_rate) {
            return Err(ConfigError::Validation(format!(
                "帧率必须在 1 - 240 之间，实际为 {}",
                self.frame_rate
            )));
        }

        if self.max_frames == 0 {
            return Err(ConfigError::Validation(
                "max_frames 必须大于 0".to_string(),
            ));
        }

        Ok(())
    }

    /// 按配置构造组件主题
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let base = match self.theme {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        };
        base.with_animation_scale(self.animation_scale)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    Io(#[from] std::io::Error),
    /// 解析失败
    #[error("配置解析失败: {0}")]
    Parse(#[source] serde_json::Error),
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HostConfig::default();
        assert_eq!(config.animation_scale, 1.0);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.max_frames, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: HostConfig = serde_json::from_str(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.frame_rate, 60);
        assert!(config.theme().unwrap().dark);
    }

    #[test]
    fn test_config_validation() {
        let mut config = HostConfig::default();

        config.frame_rate = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.frame_rate = 241;
        assert!(config.validate().is_err());

        config.frame_rate = 30;
        config.animation_scale = -0.5;
        assert!(config.validate().is_err());
        assert!(config.theme().is_err());

        config.animation_scale = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_theme_carries_scale() {
        let config = HostConfig {
            animation_scale: 2.0,
            ..HostConfig::default()
        };
        let theme = config.theme().unwrap();
        assert_eq!(theme.scaled(100.0), 200.0);
        assert!(!theme.dark);
    }
}
