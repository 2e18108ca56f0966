//! # Scenario 模块
//!
//! 脚本化的组件回放：先触发一次状态变化，再按固定步长推进，
//! 每帧记录一条采样，直到动画结束或达到帧数上限。

mod action_group;
mod cross_fade;
mod shadow;

pub use action_group::{GroupSample, GroupScenario};
pub use cross_fade::{CrossFadeSample, CrossFadeScenario};
pub use shadow::{ShadowSample, ShadowScenario};

use serde::Serialize;
use tracing::{debug, warn};

use crate::clock::FrameClock;

/// 可表格化输出的一行
pub trait Row {
    /// 表头
    fn columns() -> Vec<&'static str>;
    /// 与表头对应的单元格
    fn cells(&self) -> Vec<String>;
}

/// 可回放的场景
pub trait Scenario {
    type Sample: Row + Serialize;

    /// 场景名（用于日志）
    fn name(&self) -> &'static str;

    /// 推进时间，返回是否仍有动画在进行
    fn tick(&mut self, dt: f32) -> bool;

    /// 采样当前画面
    fn sample(&self) -> Self::Sample;
}

/// 单帧采样
#[derive(Debug, Clone, Serialize)]
pub struct FrameSample<T> {
    pub frame: usize,
    pub time_ms: f32,
    #[serde(flatten)]
    pub sample: T,
}

/// 一次回放的结果
#[derive(Debug, Clone, Serialize)]
pub struct Playback<T> {
    pub scenario: &'static str,
    /// 动画是否在帧数上限内结束
    pub settled: bool,
    pub frames: Vec<FrameSample<T>>,
}

impl<T> Playback<T> {
    pub fn last(&self) -> Option<&T> {
        self.frames.last().map(|f| &f.sample)
    }
}

/// 回放场景
///
/// 第 0 帧为触发后、推进前的画面。
pub fn play<S: Scenario>(
    scenario: &mut S,
    clock: &mut FrameClock,
    max_frames: usize,
) -> Playback<S::Sample> {
    let mut frames = vec![FrameSample {
        frame: clock.frame(),
        time_ms: clock.elapsed_ms(),
        sample: scenario.sample(),
    }];

    let mut settled = false;
    while clock.frame() < max_frames {
        let dt = clock.tick();
        let active = scenario.tick(dt);
        frames.push(FrameSample {
            frame: clock.frame(),
            time_ms: clock.elapsed_ms(),
            sample: scenario.sample(),
        });
        if !active {
            settled = true;
            break;
        }
    }

    if settled {
        debug!(scenario = scenario.name(), frames = frames.len(), "回放结束");
    } else {
        warn!(scenario = scenario.name(), max_frames, "达到帧数上限，动画未结束");
    }

    Playback {
        scenario: scenario.name(),
        settled,
        frames,
    }
}

fn fmt_value(value: f32) -> String {
    format!("{value:.3}")
}
