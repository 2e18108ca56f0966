//! # ActionGroup 模块
//!
//! 悬浮按钮组（speed dial）：遮罩层、一列操作按钮和一个开关按钮。
//!
//! 组件不持有开合状态：调用方传入 `open`，组件通过 `on_state_change`
//! 请求切换。调用方不响应请求时，画面保持不变。
//!
//! ## 动画
//!
//! `open` 每次翻转时同时启动两组动画（取代进行中的动画）：
//! - 遮罩：打开时 250ms 内淡入到 0.32，关闭时 200ms 内淡出到 0
//! - 操作项：相邻两项错开 50ms，每项 150ms 趋向 1 或 0。
//!   打开时从最后一项开始，关闭时从第一项开始
//!
//! 所有时长都乘以主题的动画倍率。

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{AnimationSystem, Tween};
use crate::color::Color;
use crate::cross_fade::{CrossFadeIcon, CrossFadeProps, IconFrame};
use crate::error::{MotionError, MotionResult};
use crate::icon::IconSource;
use crate::interpolate::Interpolation;
use crate::theme::Theme;

/// 遮罩完全显示时的不透明度
pub const BACKDROP_OPACITY: f32 = 0.32;
/// 遮罩淡入时长（毫秒）
pub const BACKDROP_OPEN_MS: f32 = 250.0;
/// 遮罩淡出时长（毫秒）
pub const BACKDROP_CLOSE_MS: f32 = 200.0;
/// 相邻操作项的启动间隔（毫秒）
pub const ITEM_STAGGER_MS: f32 = 50.0;
/// 单个操作项的动画时长（毫秒）
pub const ITEM_DURATION_MS: f32 = 150.0;
/// 打开过程中操作项的最小缩放
pub const ITEM_MIN_SCALE: f32 = 0.8;
/// 浅色主题下标签文字的淡化比例
pub const LABEL_FADE: f32 = 0.54;

/// 开关按钮图标的边长
const TOGGLE_ICON_SIZE: f32 = 24.0;

/// 无参回调
pub type Callback = Rc<dyn Fn()>;
/// 开合请求回调
pub type StateChangeCallback = Rc<dyn Fn(GroupState)>;

/// 请求的开合状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupState {
    pub open: bool,
}

/// 按钮尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabSize {
    Normal,
    #[default]
    Small,
}

/// 单个操作项
#[derive(Clone)]
pub struct ActionItem {
    pub icon: IconSource,
    pub label: Option<String>,
    pub on_press: Callback,
    /// 稳定标识，用于在列表重排时跟踪动画进度
    pub key: Option<String>,
    pub primary: bool,
    pub loading: bool,
    pub size: FabSize,
    /// 覆盖主题推导出的标签颜色
    pub label_color: Option<Color>,
    pub disabled: bool,
    pub accessibility_label: Option<String>,
}

impl ActionItem {
    pub fn new(icon: impl Into<IconSource>, on_press: impl Fn() + 'static) -> Self {
        Self {
            icon: icon.into(),
            label: None,
            on_press: Rc::new(on_press),
            key: None,
            primary: false,
            loading: false,
            size: FabSize::default(),
            label_color: None,
            disabled: false,
            accessibility_label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_size(mut self, size: FabSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// 无障碍标签，缺省时使用文字标签
    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label
            .as_deref()
            .or(self.label.as_deref())
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("key", &self.key)
            .field("primary", &self.primary)
            .field("loading", &self.loading)
            .field("size", &self.size)
            .field("label_color", &self.label_color)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// 按钮组的输入
#[derive(Clone)]
pub struct GroupProps {
    pub actions: Vec<ActionItem>,
    /// 开关按钮图标
    pub icon: IconSource,
    pub open: bool,
    /// 为 false 时隐藏开关按钮
    pub visible: bool,
    pub on_state_change: StateChangeCallback,
    /// 按下开关按钮时的额外回调
    pub on_press: Option<Callback>,
    /// 开关按钮图标颜色
    pub color: Option<Color>,
    pub accessibility_label: Option<String>,
}

impl GroupProps {
    pub fn new(
        icon: impl Into<IconSource>,
        open: bool,
        on_state_change: impl Fn(GroupState) + 'static,
    ) -> Self {
        Self {
            actions: Vec::new(),
            icon: icon.into(),
            open,
            visible: true,
            on_state_change: Rc::new(on_state_change),
            on_press: None,
            color: None,
            accessibility_label: None,
        }
    }

    pub fn with_actions(mut self, actions: Vec<ActionItem>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_action(mut self, action: ActionItem) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<IconSource>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_on_press(mut self, on_press: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(on_press));
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// 各操作项的进度键，与 `actions` 一一对应
    ///
    /// 有 `key` 的项按 key 跟踪，其余按位置跟踪；重复的 key 退回到位置。
    pub fn item_keys(&self) -> Vec<ItemKey> {
        let mut seen = HashSet::new();
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| match &action.key {
                Some(key) if seen.insert(key.as_str()) => ItemKey::Key(key.clone()),
                Some(key) => {
                    debug!(key = %key, index, "重复的操作项 key，改为按位置跟踪");
                    ItemKey::Index(index)
                }
                None => ItemKey::Index(index),
            })
            .collect()
    }
}

impl fmt::Debug for GroupProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupProps")
            .field("actions", &self.actions)
            .field("icon", &self.icon)
            .field("open", &self.open)
            .field("visible", &self.visible)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// 操作项进度的键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKey {
    Key(String),
    Index(usize),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Key(key) => write!(f, "{key}"),
            ItemKey::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// 时间轴上的属性
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupProperty {
    Backdrop,
    Item(ItemKey),
}

/// 一次开合切换的错峰计划
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaggerPlan {
    pub opening: bool,
    /// 按位置排列的启动延迟（毫秒）
    pub delays_ms: Vec<f32>,
    pub item_duration_ms: f32,
    pub backdrop_duration_ms: f32,
}

impl StaggerPlan {
    fn new(opening: bool, count: usize, theme: &Theme) -> Self {
        let stagger = theme.scaled(ITEM_STAGGER_MS);
        let delays_ms = (0..count)
            .map(|index| {
                let step = if opening { count - 1 - index } else { index };
                step as f32 * stagger
            })
            .collect();
        let backdrop = if opening {
            BACKDROP_OPEN_MS
        } else {
            BACKDROP_CLOSE_MS
        };

        Self {
            opening,
            delays_ms,
            item_duration_ms: theme.scaled(ITEM_DURATION_MS),
            backdrop_duration_ms: theme.scaled(backdrop),
        }
    }

    /// 操作项的启动顺序（位置列表）
    pub fn start_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.delays_ms.len()).collect();
        order.sort_by(|a, b| self.delays_ms[*a].total_cmp(&self.delays_ms[*b]));
        order
    }

    /// 整个切换结束所需的时间
    pub fn total_ms(&self) -> f32 {
        let items = self
            .delays_ms
            .iter()
            .fold(0.0_f32, |acc, delay| acc.max(delay + self.item_duration_ms));
        items.max(self.backdrop_duration_ms)
    }
}

/// 单个操作项的绘制结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFrame {
    pub key: ItemKey,
    pub icon: IconSource,
    pub label: Option<String>,
    pub label_color: Color,
    pub accessibility_label: Option<String>,
    pub opacity: f32,
    pub scale: f32,
    pub size: FabSize,
    pub primary: bool,
    pub loading: bool,
    pub disabled: bool,
    /// 当前能否按下
    pub pressable: bool,
}

/// 开关按钮的绘制结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleFrame {
    pub icon: IconFrame,
    pub background: Color,
    pub visible: bool,
    pub accessibility_label: Option<String>,
}

/// 按钮组某一时刻的绘制结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupFrame {
    pub open: bool,
    pub backdrop_color: Color,
    pub backdrop_opacity: f32,
    /// 遮罩能否接收点击
    pub backdrop_pressable: bool,
    pub items: Vec<ItemFrame>,
    pub toggle: ToggleFrame,
}

/// 悬浮按钮组
#[derive(Debug)]
pub struct ActionGroup {
    open: bool,
    keys: Vec<ItemKey>,
    theme: Theme,
    timeline: AnimationSystem<GroupProperty>,
    toggle: CrossFadeIcon,
    item_scale: Interpolation,
    last_stagger: Option<StaggerPlan>,
}

impl ActionGroup {
    /// 首次挂载：各值直接处于 `open` 对应的状态，不播放动画
    pub fn new(props: &GroupProps, theme: &Theme) -> Self {
        let mut timeline = AnimationSystem::new();
        timeline.insert(GroupProperty::Backdrop, backdrop_for(props.open));

        let mut group = Self {
            open: props.open,
            keys: Vec::new(),
            theme: *theme,
            timeline,
            toggle: CrossFadeIcon::new(&toggle_props(props), theme),
            item_scale: Interpolation::unit(ITEM_MIN_SCALE, 1.0),
            last_stagger: None,
        };
        group.reconcile(props);
        group
    }

    /// 应用一次新的输入
    ///
    /// # 返回
    /// `open` 是否翻转（翻转时启动了新的切换动画）
    pub fn apply(&mut self, props: &GroupProps) -> MotionResult<bool> {
        self.reconcile(props);
        self.toggle.apply(&toggle_props(props))?;

        if props.open == self.open {
            return Ok(false);
        }
        self.open = props.open;
        self.transition()?;
        Ok(true)
    }

    /// 让进度表与操作项列表对齐，新增项取当前开合状态对应的值
    fn reconcile(&mut self, props: &GroupProps) {
        let keys = props.item_keys();
        if keys == self.keys {
            return;
        }

        {
            let wanted: HashSet<&ItemKey> = keys.iter().collect();
            self.timeline.retain(|property| match property {
                GroupProperty::Backdrop => true,
                GroupProperty::Item(key) => wanted.contains(key),
            });
        }

        let initial = target_for(props.open);
        for key in &keys {
            if self.timeline.insert(GroupProperty::Item(key.clone()), initial) {
                debug!(key = %key, initial, "新增操作项");
            }
        }
        self.keys = keys;
    }

    fn transition(&mut self) -> MotionResult<()> {
        let plan = StaggerPlan::new(self.open, self.keys.len(), &self.theme);
        debug!(
            open = self.open,
            items = self.keys.len(),
            order = ?plan.start_order(),
            "按钮组切换"
        );

        self.timeline.animate_to(
            GroupProperty::Backdrop,
            backdrop_for(self.open),
            Tween::new(plan.backdrop_duration_ms),
        )?;

        let target = target_for(self.open);
        for (key, delay) in self.keys.iter().zip(&plan.delays_ms) {
            let tween = Tween::new(plan.item_duration_ms).with_delay(*delay);
            self.timeline
                .animate_to(GroupProperty::Item(key.clone()), target, tween)?;
        }

        self.last_stagger = Some(plan);
        Ok(())
    }

    /// 更换主题（影响之后启动的动画）
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = *theme;
        self.toggle.set_theme(theme);
    }

    /// 推进时间
    ///
    /// # 返回
    /// 是否仍有动画在进行
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timeline.update(dt);
        let toggle = self.toggle.tick(dt);
        self.timeline.has_active_animations() || toggle
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.has_active_animations() || self.toggle.is_animating()
    }

    /// 遮罩当前不透明度
    pub fn backdrop(&self) -> f32 {
        self.timeline
            .value_or(&GroupProperty::Backdrop, backdrop_for(self.open))
    }

    /// 指定位置的操作项进度
    pub fn item_progress(&self, index: usize) -> Option<f32> {
        let key = self.keys.get(index)?;
        self.timeline.value(&GroupProperty::Item(key.clone()))
    }

    /// 全部操作项进度，按位置排列
    pub fn item_progresses(&self) -> Vec<f32> {
        (0..self.keys.len())
            .map(|index| self.item_progress(index).unwrap_or(target_for(self.open)))
            .collect()
    }

    /// 最近一次切换的错峰计划
    pub fn last_stagger(&self) -> Option<&StaggerPlan> {
        self.last_stagger.as_ref()
    }

    /// 操作项标签的默认颜色
    pub fn label_color(theme: &Theme) -> Color {
        if theme.dark {
            theme.colors.text
        } else {
            theme.colors.text.fade(LABEL_FADE)
        }
    }

    pub fn frame(&self, props: &GroupProps) -> GroupFrame {
        let label_color = Self::label_color(&self.theme);
        let items = props
            .item_keys()
            .into_iter()
            .zip(&props.actions)
            .map(|(key, action)| {
                let progress = self
                    .timeline
                    .value_or(&GroupProperty::Item(key.clone()), target_for(self.open));
                let scale = if self.open {
                    self.item_scale.sample(progress)
                } else {
                    1.0
                };
                ItemFrame {
                    key,
                    icon: action.icon.clone(),
                    label: action.label.clone(),
                    label_color: if action.disabled {
                        self.theme.colors.disabled
                    } else {
                        action.label_color.unwrap_or(label_color)
                    },
                    accessibility_label: action.accessibility_label().map(str::to_string),
                    opacity: progress,
                    scale,
                    size: action.size,
                    primary: action.primary,
                    loading: action.loading,
                    disabled: action.disabled,
                    pressable: self.open && !action.disabled,
                }
            })
            .collect();

        GroupFrame {
            open: self.open,
            backdrop_color: self.theme.colors.backdrop,
            backdrop_opacity: self.backdrop(),
            backdrop_pressable: self.open,
            items,
            toggle: ToggleFrame {
                icon: self.toggle.frame(),
                background: self.theme.colors.accent,
                visible: props.visible,
                accessibility_label: props.accessibility_label.clone(),
            },
        }
    }

    // ========== 交互 ==========

    /// 按下操作项：先调用操作项回调，再请求关闭
    ///
    /// 按钮组关闭时或操作项被禁用时不响应。
    ///
    /// # 返回
    /// 是否响应了本次按下
    pub fn press_action(&self, props: &GroupProps, index: usize) -> MotionResult<bool> {
        let action = props
            .actions
            .get(index)
            .ok_or(MotionError::ActionOutOfRange {
                index,
                len: props.actions.len(),
            })?;

        if !props.open || action.disabled {
            debug!(index, open = props.open, disabled = action.disabled, "忽略操作项点击");
            return Ok(false);
        }

        (action.on_press)();
        (props.on_state_change)(GroupState { open: false });
        Ok(true)
    }

    /// 按下遮罩：请求关闭
    pub fn press_backdrop(&self, props: &GroupProps) -> bool {
        if !props.open {
            return false;
        }
        (props.on_state_change)(GroupState { open: false });
        true
    }

    /// 按下开关按钮：调用额外回调，再请求切换到相反状态
    pub fn press_toggle(&self, props: &GroupProps) -> bool {
        if !props.visible {
            debug!("开关按钮已隐藏，忽略点击");
            return false;
        }
        if let Some(on_press) = &props.on_press {
            on_press();
        }
        (props.on_state_change)(GroupState { open: !props.open });
        true
    }
}

fn toggle_props(props: &GroupProps) -> CrossFadeProps {
    CrossFadeProps::new(
        props.icon.clone(),
        props.color.unwrap_or(Color::WHITE),
        TOGGLE_ICON_SIZE,
    )
    .with_open(props.open)
}

fn target_for(open: bool) -> f32 {
    if open { 1.0 } else { 0.0 }
}

fn backdrop_for(open: bool) -> f32 {
    if open { BACKDROP_OPACITY } else { 0.0 }
}
