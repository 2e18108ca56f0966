//! # CrossFade 模块
//!
//! 图标切换动画：图标变化时记录旧图标，共享进度值随开合状态趋向 1 或 0，
//! 新图标按进度旋转到位。
//!
//! 只绘制当前图标；旧图标只用于判断是否处于切换过程中。

use serde::Serialize;
use tracing::debug;

use crate::animation::{AnimationSystem, Tween};
use crate::color::Color;
use crate::error::MotionResult;
use crate::icon::IconSource;
use crate::interpolate::Interpolation;
use crate::theme::Theme;

/// 旋转动画基础时长（毫秒，乘以主题动画倍率）
pub const ROTATION_DURATION_MS: f32 = 200.0;
/// 进度为 1 时的旋转角度
pub const ROTATION_DEGREES: f32 = 45.0;

/// 图标组件的输入
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFadeProps {
    /// 要显示的图标
    pub source: IconSource,
    /// 着色
    pub color: Color,
    /// 边长
    pub size: f32,
    /// 开合状态，决定进度的目标值
    pub open: bool,
}

impl CrossFadeProps {
    pub fn new(source: impl Into<IconSource>, color: Color, size: f32) -> Self {
        Self {
            source: source.into(),
            color,
            size,
            open: true,
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// 当前 / 旧图标对
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossFadeState {
    pub current: IconSource,
    pub previous: Option<IconSource>,
}

impl CrossFadeState {
    pub fn new(source: IconSource) -> Self {
        Self {
            current: source,
            previous: None,
        }
    }

    /// 由新输入推导下一状态
    ///
    /// 图标变化时旧图标被归档；图标不变时状态原样保留。
    pub fn reduce(&self, source: &IconSource) -> Self {
        if *source == self.current {
            return self.clone();
        }
        Self {
            current: source.clone(),
            previous: Some(self.current.clone()),
        }
    }

    /// 是否处于切换过程中
    pub fn is_transitioning(&self) -> bool {
        self.previous.is_some()
    }
}

/// 时间轴上的属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossFadeProperty {
    Progress,
}

/// 某一时刻的绘制结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconFrame {
    /// 绘制的图标
    pub source: IconSource,
    /// 已归档的旧图标（不绘制）
    pub previous: Option<IconSource>,
    pub color: Color,
    pub size: f32,
    /// 进度值
    pub progress: f32,
    /// 旋转角度（度）
    pub rotation: f32,
}

/// 交叉淡入图标
#[derive(Debug)]
pub struct CrossFadeIcon {
    state: CrossFadeState,
    open: bool,
    color: Color,
    size: f32,
    theme: Theme,
    rotation: Interpolation,
    timeline: AnimationSystem<CrossFadeProperty>,
}

impl CrossFadeIcon {
    /// 首次挂载，进度直接处于开合状态对应的值
    pub fn new(props: &CrossFadeProps, theme: &Theme) -> Self {
        let mut timeline = AnimationSystem::new();
        timeline.insert(CrossFadeProperty::Progress, target_for(props.open));

        Self {
            state: CrossFadeState::new(props.source.clone()),
            open: props.open,
            color: props.color,
            size: props.size,
            theme: *theme,
            rotation: Interpolation::unit(0.0, ROTATION_DEGREES),
            timeline,
        }
    }

    /// 应用一次新的输入
    ///
    /// # 返回
    /// 状态是否变化（变化时启动了新的进度动画）
    pub fn apply(&mut self, props: &CrossFadeProps) -> MotionResult<bool> {
        self.color = props.color;
        self.size = props.size;

        let next = self.state.reduce(&props.source);
        let changed = next != self.state || props.open != self.open;
        self.state = next;
        self.open = props.open;

        if changed {
            let target = target_for(self.open);
            let tween = Tween::new(self.theme.scaled(ROTATION_DURATION_MS));
            debug!(
                current = %self.state.current,
                previous = ?self.state.previous.as_ref().map(|p| p.to_string()),
                target,
                duration = tween.duration_ms,
                "图标切换"
            );
            self.timeline
                .animate_to(CrossFadeProperty::Progress, target, tween)?;
        }
        Ok(changed)
    }

    /// 更换主题（影响之后启动的动画时长）
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = *theme;
    }

    /// 推进时间
    ///
    /// # 返回
    /// 是否仍有动画在进行
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timeline.update(dt);
        self.timeline.has_active_animations()
    }

    pub fn state(&self) -> &CrossFadeState {
        &self.state
    }

    pub fn progress(&self) -> f32 {
        self.timeline.value_or(&CrossFadeProperty::Progress, target_for(self.open))
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.has_active_animations()
    }

    /// 当前旋转角度：只有存在旧图标时才跟随进度
    pub fn rotation(&self) -> f32 {
        if self.state.is_transitioning() {
            self.rotation.sample(self.progress())
        } else {
            0.0
        }
    }

    pub fn frame(&self) -> IconFrame {
        IconFrame {
            source: self.state.current.clone(),
            previous: self.state.previous.clone(),
            color: self.color,
            size: self.size,
            progress: self.progress(),
            rotation: self.rotation(),
        }
    }
}

fn target_for(open: bool) -> f32 {
    if open { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(source: &str, open: bool) -> CrossFadeProps {
        CrossFadeProps::new(source, Color::WHITE, 24.0).with_open(open)
    }

    fn settle(icon: &mut CrossFadeIcon) {
        for _ in 0..100 {
            if !icon.tick(16.0) {
                break;
            }
        }
    }

    #[test]
    fn test_reduce_archives_previous_icon() {
        let state = CrossFadeState::new(IconSource::named("plus"));
        let same = state.reduce(&IconSource::named("plus"));
        assert_eq!(same, state);
        assert!(!same.is_transitioning());

        let next = state.reduce(&IconSource::named("close"));
        assert_eq!(next.current, IconSource::named("close"));
        assert_eq!(next.previous, Some(IconSource::named("plus")));

        let again = next.reduce(&IconSource::named("close"));
        assert_eq!(again, next);
    }

    #[test]
    fn test_mount_does_not_animate() {
        let icon = CrossFadeIcon::new(&props("plus", false), &Theme::default());
        assert!(!icon.is_animating());
        assert_eq!(icon.progress(), 0.0);
        assert_eq!(icon.rotation(), 0.0);
        assert_eq!(icon.frame().source, IconSource::named("plus"));
    }

    #[test]
    fn test_icon_change_rotates_into_place() {
        let mut icon = CrossFadeIcon::new(&props("plus", false), &Theme::default());
        assert!(icon.apply(&props("close", true)).unwrap());

        icon.tick(100.0);
        let mid = icon.frame();
        assert_eq!(mid.source, IconSource::named("close"));
        assert_eq!(mid.previous, Some(IconSource::named("plus")));
        assert!(mid.rotation > 0.0 && mid.rotation < ROTATION_DEGREES);

        settle(&mut icon);
        assert_eq!(icon.progress(), 1.0);
        assert_eq!(icon.rotation(), ROTATION_DEGREES);
    }

    #[test]
    fn test_unchanged_props_do_not_restart() {
        let mut icon = CrossFadeIcon::new(&props("plus", true), &Theme::default());
        assert!(!icon.apply(&props("plus", true)).unwrap());
        assert!(!icon.is_animating());
    }

    #[test]
    fn test_open_flag_without_icon_change_keeps_rotation_at_zero() {
        let mut icon = CrossFadeIcon::new(&props("plus", true), &Theme::default());
        assert!(icon.apply(&props("plus", false)).unwrap());
        icon.tick(100.0);
        assert!(icon.progress() < 1.0);
        assert_eq!(icon.rotation(), 0.0);
    }

    #[test]
    fn test_always_renders_latest_icon() {
        let mut icon = CrossFadeIcon::new(&props("a", true), &Theme::default());
        for (i, name) in ["b", "c", "b", "d"].iter().enumerate() {
            icon.apply(&props(name, i % 2 == 0)).unwrap();
            icon.tick(30.0);
            assert_eq!(icon.frame().source, IconSource::parse(name));
        }
    }

    #[test]
    fn test_interrupted_transition_reverses_from_current_value() {
        let mut icon = CrossFadeIcon::new(&props("plus", false), &Theme::default());
        icon.apply(&props("close", true)).unwrap();
        icon.tick(100.0);
        let halfway = icon.progress();

        icon.apply(&props("plus", false)).unwrap();
        icon.tick(0.0);
        assert!((icon.progress() - halfway).abs() < 1e-5);

        settle(&mut icon);
        assert_eq!(icon.progress(), 0.0);
        assert_eq!(icon.rotation(), 0.0);
        assert_eq!(icon.state().previous, Some(IconSource::named("close")));
    }

    #[test]
    fn test_animation_scale() {
        let theme = Theme::default().with_animation_scale(2.0).unwrap();
        let mut icon = CrossFadeIcon::new(&props("plus", false), &theme);
        icon.apply(&props("close", true)).unwrap();
        icon.tick(ROTATION_DURATION_MS);
        assert!(icon.is_animating());
        icon.tick(ROTATION_DURATION_MS);
        assert!(!icon.is_animating());
        assert_eq!(icon.progress(), 1.0);

        let instant = Theme::default().with_animation_scale(0.0).unwrap();
        let mut icon = CrossFadeIcon::new(&props("plus", false), &instant);
        icon.apply(&props("close", true)).unwrap();
        assert!(!icon.tick(0.0));
        assert_eq!(icon.rotation(), ROTATION_DEGREES);
    }

    #[test]
    fn test_theme_change_applies_to_next_switch() {
        let mut icon = CrossFadeIcon::new(&props("plus", false), &Theme::default());
        icon.apply(&props("close", true)).unwrap();
        settle(&mut icon);

        let slow = Theme::default().with_animation_scale(3.0).unwrap();
        icon.set_theme(&slow);
        icon.apply(&props("plus", false)).unwrap();
        icon.tick(ROTATION_DURATION_MS);
        assert!(icon.is_animating());
        assert!(icon.progress() > 0.0);

        icon.tick(2.0 * ROTATION_DURATION_MS);
        assert!(!icon.is_animating());
        assert_eq!(icon.progress(), 0.0);
    }
}
