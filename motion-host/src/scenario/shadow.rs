use motion_runtime::{
    AnimationSystem, EasingFunction, MotionResult, Shadow, SignalSource, Theme, Tween, shadow,
};
use serde::Serialize;

use super::{Row, Scenario, fmt_value};

/// 海拔扫描的基础时长（毫秒）
pub const SWEEP_DURATION_MS: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SweepProperty {
    Elevation,
}

/// 阴影采样：固定海拔，或在时间轴上线性扫描海拔
#[derive(Debug)]
pub struct ShadowScenario {
    shadow: Shadow,
    elevation: SignalSource,
    timeline: AnimationSystem<SweepProperty>,
}

impl ShadowScenario {
    /// 固定海拔
    pub fn fixed(elevation: f32) -> MotionResult<Self> {
        Ok(Self {
            shadow: shadow(elevation)?,
            elevation: SignalSource::new(elevation),
            timeline: AnimationSystem::new(),
        })
    }

    /// 把海拔从 `from` 线性扫描到 `to`，阴影随之插值
    pub fn sweep(from: f32, to: f32, theme: &Theme) -> MotionResult<Self> {
        let elevation = SignalSource::new(from);
        let mut timeline = AnimationSystem::new();
        timeline.insert(SweepProperty::Elevation, from);
        timeline.bind(SweepProperty::Elevation, elevation.clone())?;
        timeline.animate_to(
            SweepProperty::Elevation,
            to,
            Tween::new(theme.scaled(SWEEP_DURATION_MS)).with_easing(EasingFunction::Linear),
        )?;

        Ok(Self {
            shadow: shadow(elevation.clone())?,
            elevation,
            timeline,
        })
    }
}

impl Scenario for ShadowScenario {
    type Sample = ShadowSample;

    fn name(&self) -> &'static str {
        "shadow"
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.timeline.update(dt);
        self.timeline.has_active_animations()
    }

    fn sample(&self) -> ShadowSample {
        let style = self.shadow.sample();
        ShadowSample {
            elevation: self.elevation.get(),
            height: style.as_ref().map(|s| s.offset.height),
            radius: style.as_ref().map(|s| s.radius),
            opacity: style.as_ref().map(|s| s.opacity),
        }
    }
}

/// 无阴影时各字段为 `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowSample {
    pub elevation: f32,
    pub height: Option<f32>,
    pub radius: Option<f32>,
    pub opacity: Option<f32>,
}

impl Row for ShadowSample {
    fn columns() -> Vec<&'static str> {
        vec!["elevation", "height", "radius", "opacity"]
    }

    fn cells(&self) -> Vec<String> {
        let cell = |value: Option<f32>| value.map_or_else(|| "-".to_string(), fmt_value);
        vec![
            fmt_value(self.elevation),
            cell(self.height),
            cell(self.radius),
            cell(self.opacity),
        ]
    }
}
