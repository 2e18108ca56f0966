//! # Animation 模块
//!
//! 组件共用的时间轴，负责把数值属性按时间推向目标值。
//!
//! ## 核心设计理念
//!
//! 动画系统只负责 **时间轴管理**：
//! - 知道某个属性从当前值到目标值需要在 duration 内变化
//! - 维护当前值，通过组件自己的属性键查询
//! - **不假设组件类型**，组件自己决定如何使用这些值
//!
//! 时间由宿主推进（`update(dt)`），动画系统不持有时钟。
//!
//! ## 核心概念
//!
//! - `Tween`: 时长 + 延迟 + 缓动
//! - `Animation`: 单个动画实例
//! - `AnimationSystem`: 以属性键索引的时间轴
//! - `EasingFunction`: 缓动函数

mod animation;
mod easing;
mod system;

pub use animation::{Animation, AnimationState, Tween};
pub use easing::EasingFunction;
pub use system::AnimationSystem;
