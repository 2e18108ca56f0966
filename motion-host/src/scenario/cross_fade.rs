use motion_runtime::{Color, CrossFadeIcon, CrossFadeProps, IconSource, MotionResult, Theme};
use serde::Serialize;

use super::{Row, Scenario, fmt_value};

const ICON_SIZE: f32 = 24.0;

/// 图标切换：以 `from` 挂载，再切换到 `to`
#[derive(Debug)]
pub struct CrossFadeScenario {
    icon: CrossFadeIcon,
}

impl CrossFadeScenario {
    /// `open` 为切换后的开合状态，挂载时取相反值
    pub fn new(from: &str, to: &str, open: bool, theme: &Theme) -> MotionResult<Self> {
        let color = theme.colors.text;
        let mount = CrossFadeProps::new(IconSource::parse(from), color, ICON_SIZE).with_open(!open);
        let mut icon = CrossFadeIcon::new(&mount, theme);

        let next = CrossFadeProps::new(IconSource::parse(to), color, ICON_SIZE).with_open(open);
        icon.apply(&next)?;
        Ok(Self { icon })
    }
}

impl Scenario for CrossFadeScenario {
    type Sample = CrossFadeSample;

    fn name(&self) -> &'static str {
        "cross-fade"
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.icon.tick(dt)
    }

    fn sample(&self) -> CrossFadeSample {
        let frame = self.icon.frame();
        CrossFadeSample {
            icon: frame.source,
            previous: frame.previous,
            color: frame.color,
            progress: frame.progress,
            rotation: frame.rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossFadeSample {
    pub icon: IconSource,
    pub previous: Option<IconSource>,
    pub color: Color,
    pub progress: f32,
    pub rotation: f32,
}

impl Row for CrossFadeSample {
    fn columns() -> Vec<&'static str> {
        vec!["icon", "previous", "progress", "rotation"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.icon.to_string(),
            self.previous
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            fmt_value(self.progress),
            fmt_value(self.rotation),
        ]
    }
}
