//! # Animation 模块
//!
//! 单个补间动画实例定义。
//!
//! 核心设计：动画只关注 f32 值的时间轴变化，不假设属性属于哪个组件。
//! 时间单位统一为毫秒。

use super::EasingFunction;

/// 动画状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// 等待开始（有延迟）
    #[default]
    Pending,
    /// 正在播放
    Playing,
    /// 已完成
    Completed,
}

/// 补间参数：时长、延迟、缓动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// 动画时长（毫秒）
    pub duration_ms: f32,
    /// 启动前的延迟（毫秒）
    pub delay_ms: f32,
    /// 缓动函数
    pub easing: EasingFunction,
}

impl Tween {
    /// 使用默认缓动创建补间
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: EasingFunction::default(),
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }
}

/// 通用动画实例
///
/// 管理单个 f32 值从 `from` 到 `to` 的变化。
/// 延迟期间不改变属性值，真正开始播放时由 [`Animation::rebase`] 重新确定起点。
#[derive(Debug, Clone)]
pub struct Animation {
    /// 起始值
    pub from: f32,
    /// 目标值
    pub to: f32,
    /// 补间参数
    pub tween: Tween,
    /// 当前状态
    pub state: AnimationState,
    /// 当前进度（0.0 - 1.0，已应用缓动）
    pub progress: f32,
    /// 已经过的时间
    elapsed: f32,
}

impl Animation {
    /// 创建新的动画
    pub fn new(from: f32, to: f32, tween: Tween) -> Self {
        Self {
            from,
            to,
            tween,
            state: AnimationState::Pending,
            progress: 0.0,
            elapsed: 0.0,
        }
    }

    /// 更新动画
    ///
    /// # 返回
    /// - `true`: 动画仍在进行中
    /// - `false`: 动画已结束
    pub fn update(&mut self, dt: f32) -> bool {
        let dt = dt.max(0.0);
        match self.state {
            AnimationState::Pending => {
                self.elapsed += dt;
                if self.elapsed >= self.tween.delay_ms {
                    self.state = AnimationState::Playing;
                    self.elapsed -= self.tween.delay_ms;
                    self.update_playing()
                } else {
                    true
                }
            }
            AnimationState::Playing => {
                self.elapsed += dt;
                self.update_playing()
            }
            AnimationState::Completed => false,
        }
    }

    fn update_playing(&mut self) -> bool {
        if self.tween.duration_ms <= 0.0 {
            self.progress = 1.0;
            self.state = AnimationState::Completed;
            return false;
        }

        let raw_progress = self.elapsed / self.tween.duration_ms;
        if raw_progress >= 1.0 {
            self.progress = 1.0;
            self.state = AnimationState::Completed;
            false
        } else {
            self.progress = self.tween.easing.apply(raw_progress);
            true
        }
    }

    /// 重新设定起点（延迟结束时使用属性的当前值）
    pub fn rebase(&mut self, from: f32) {
        self.from = from;
    }

    /// 获取当前值
    pub fn current_value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// 是否仍在等待延迟
    pub fn is_pending(&self) -> bool {
        self.state == AnimationState::Pending
    }

    /// 是否已完成
    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Completed
    }
}
