//! # Error 模块
//!
//! 定义 motion-runtime 中使用的错误类型。

use thiserror::Error;

/// 动效运行时错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// 无效的海拔值（负数或非有限值）
    #[error("无效的海拔值 {value}：必须是非负有限数")]
    InvalidElevation { value: f32 },

    /// 无效的插值区间
    #[error("无效的插值区间：{message}")]
    InvalidRange { message: String },

    /// 时间轴上不存在的属性
    #[error("属性 '{property}' 未在时间轴上注册")]
    UnknownProperty { property: String },

    /// 操作项索引越界
    #[error("无效的操作项索引 {index}，有效范围是 0..{len}")]
    ActionOutOfRange { index: usize, len: usize },

    /// 无法解析的颜色
    #[error("无法解析的颜色 '{input}'")]
    InvalidColor { input: String },

    /// 无效的动画速度倍率
    #[error("无效的动画速度倍率 {scale}：必须是非负有限数")]
    InvalidScale { scale: f32 },
}

/// Result 类型别名
pub type MotionResult<T> = Result<T, MotionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MotionError::ActionOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "无效的操作项索引 4，有效范围是 0..2");

        let err = MotionError::InvalidElevation { value: -1.0 };
        assert!(err.to_string().contains("-1"));
    }
}
