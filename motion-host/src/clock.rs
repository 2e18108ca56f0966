//! 固定步长帧时钟
//!
//! 无界面回放不读取真实时间，每帧前进 `1000 / frame_rate` 毫秒。

/// 帧时钟
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: f32,
    frame: usize,
}

impl FrameClock {
    /// `frame_rate` 为 0 时按 1 处理
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_ms: 1000.0 / frame_rate.max(1) as f32,
            frame: 0,
        }
    }

    /// 前进一帧，返回本帧的 dt（毫秒）
    pub fn tick(&mut self) -> f32 {
        self.frame += 1;
        self.frame_ms
    }

    /// 单帧时长（毫秒）
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// 已经过的帧数
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// 已经过的时间（毫秒），按帧数计算，不累积误差
    pub fn elapsed_ms(&self) -> f32 {
        self.frame as f32 * self.frame_ms
    }
}
