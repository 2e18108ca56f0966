//! # Motion Host
//!
//! 动效组件的无界面宿主实现。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 配置加载（JSON）
//! - 固定步长的帧时钟
//! - 场景回放：触发组件状态变化并逐帧采样
//! - 把采样结果输出为表格或 JSON
//!
//! Host 层不包含动画逻辑，只负责推进时间并读取组件的绘制结果。

pub mod clock;
pub mod config;
pub mod output;
pub mod scenario;

pub use clock::FrameClock;
pub use config::{ConfigError, HostConfig, ThemeMode};
pub use output::{OutputFormat, render};
pub use scenario::{
    CrossFadeScenario, FrameSample, GroupScenario, Playback, Row, Scenario, ShadowScenario, play,
};
