//! # Motion Runtime
//!
//! 动效组件的核心库。
//!
//! ## 架构概述
//!
//! `motion-runtime` 是纯逻辑核心，不依赖任何 IO、时钟或渲染引擎。
//! 组件持有自己的时间轴，由宿主（Host）推进时间并读取绘制结果：
//!
//! ```text
//! Host                          Component
//!   │                              │
//!   │──── apply(props) ──────────►│ 启动 / 取代动画
//!   │──── tick(dt) ──────────────►│ 推进时间轴
//!   │◄─── frame() ────────────────│
//!   │                              │
//!   │──── press_*(props) ────────►│
//!   │◄─── on_state_change ────────│ 请求开合
//! ```
//!
//! ## 核心类型
//!
//! - [`CrossFadeIcon`]：图标切换时旋转到位的图标
//! - [`ActionGroup`]：错峰展开 / 收起的悬浮按钮组
//! - [`shadow`]：海拔到阴影样式的换算
//! - [`AnimationSystem`]：组件共用的时间轴
//!
//! ## 使用示例
//!
//! ```ignore
//! use motion_runtime::{ActionGroup, ActionItem, GroupProps, Theme};
//!
//! let props = GroupProps::new("plus", false, |state| request(state.open))
//!     .with_action(ActionItem::new("mail", send_mail).with_label("Email"));
//! let mut group = ActionGroup::new(&props, &Theme::default());
//!
//! // 调用方响应请求后重新传入 props
//! group.apply(&props.with_open(true))?;
//! while group.tick(16.0) {
//!     draw(group.frame(&props));
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`animation`]：补间、缓动与时间轴
//! - [`interpolate`]：分段线性插值
//! - [`signal`]：可被外部驱动的数值信号
//! - [`color`] / [`theme`]：颜色与主题
//! - [`icon`]：图标标识
//! - [`cross_fade`] / [`action_group`] / [`shadow`]：组件
//! - [`error`]：错误类型定义

pub mod action_group;
pub mod animation;
pub mod color;
pub mod cross_fade;
pub mod error;
pub mod icon;
pub mod interpolate;
pub mod shadow;
pub mod signal;
pub mod theme;

// 重导出核心类型
pub use action_group::{
    ActionGroup, ActionItem, FabSize, GroupFrame, GroupProps, GroupState, ItemFrame, ItemKey,
    StaggerPlan, ToggleFrame,
};
pub use animation::{AnimationSystem, EasingFunction, Tween};
pub use color::Color;
pub use cross_fade::{CrossFadeIcon, CrossFadeProps, CrossFadeState, IconFrame};
pub use error::{MotionError, MotionResult};
pub use icon::IconSource;
pub use interpolate::Interpolation;
pub use shadow::{Elevation, Shadow, ShadowOffset, ShadowStyle, shadow};
pub use signal::{Signal, SignalSource};
pub use theme::Theme;
