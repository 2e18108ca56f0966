//! # Icon 模块
//!
//! 可显示图标的标识。组件只比较和转发它，不负责解析或加载资源。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 图标来源
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSource {
    /// 图标库中的命名图标（如 `"plus"`）
    Named(String),
    /// 图片地址
    Uri(String),
    /// 单个字形
    Glyph(char),
}

impl IconSource {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// 从命令行或配置中的字符串推断图标来源
    ///
    /// 含 `://` 的视为地址，单个字符视为字形，其余视为命名图标。
    pub fn parse(input: &str) -> Self {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::Glyph(c),
            _ if input.contains("://") => Self::Uri(input.to_string()),
            _ => Self::Named(input.to_string()),
        }
    }
}

impl From<&str> for IconSource {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSource::Named(name) => write!(f, "{name}"),
            IconSource::Uri(uri) => write!(f, "{uri}"),
            IconSource::Glyph(c) => write!(f, "{c}"),
        }
    }
}
