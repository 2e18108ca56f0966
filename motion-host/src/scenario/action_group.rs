use std::cell::RefCell;
use std::rc::Rc;

use motion_runtime::{
    ActionGroup, ActionItem, GroupProps, GroupState, MotionResult, StaggerPlan, Theme,
};
use serde::Serialize;
use tracing::debug;

use super::{Row, Scenario, fmt_value};

/// 回放用的操作项图标
const ACTION_ICONS: [&str; 4] = ["mail", "star", "bell", "share"];

/// 按钮组开合：模拟用户按下开关按钮，宿主响应开合请求
#[derive(Debug)]
pub struct GroupScenario {
    group: ActionGroup,
    props: GroupProps,
    requests: Rc<RefCell<Vec<GroupState>>>,
}

impl GroupScenario {
    /// `open` 为按下开关后的目标状态
    pub fn new(actions: usize, open: bool, theme: &Theme) -> MotionResult<Self> {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = requests.clone();
        let props = GroupProps::new(if open { "plus" } else { "close" }, !open, move |state| {
            sink.borrow_mut().push(state)
        })
        .with_actions(
            (0..actions)
                .map(|i| {
                    ActionItem::new(ACTION_ICONS[i % ACTION_ICONS.len()], || {})
                        .with_label(format!("Action {}", i + 1))
                })
                .collect(),
        );

        let group = ActionGroup::new(&props, theme);
        let mut scenario = Self {
            group,
            props,
            requests,
        };
        scenario.group.press_toggle(&scenario.props);
        scenario.honor_requests()?;
        Ok(scenario)
    }

    /// 把组件发出的开合请求写回 props
    fn honor_requests(&mut self) -> MotionResult<()> {
        let pending: Vec<GroupState> = self.requests.borrow_mut().drain(..).collect();
        for state in pending {
            debug!(open = state.open, "响应开合请求");
            let icon = if state.open { "close" } else { "plus" };
            self.props = self.props.clone().with_open(state.open).with_icon(icon);
            self.group.apply(&self.props)?;
        }
        Ok(())
    }

    pub fn stagger(&self) -> Option<&StaggerPlan> {
        self.group.last_stagger()
    }

    pub fn is_open(&self) -> bool {
        self.group.is_open()
    }
}

impl Scenario for GroupScenario {
    type Sample = GroupSample;

    fn name(&self) -> &'static str {
        "group"
    }

    fn tick(&mut self, dt: f32) -> bool {
        self.group.tick(dt)
    }

    fn sample(&self) -> GroupSample {
        let frame = self.group.frame(&self.props);
        GroupSample {
            open: frame.open,
            backdrop: frame.backdrop_opacity,
            opacity: frame.items.iter().map(|i| i.opacity).collect(),
            scale: frame.items.iter().map(|i| i.scale).collect(),
            toggle_rotation: frame.toggle.icon.rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSample {
    pub open: bool,
    pub backdrop: f32,
    /// 按位置排列
    pub opacity: Vec<f32>,
    pub scale: Vec<f32>,
    pub toggle_rotation: f32,
}

impl Row for GroupSample {
    fn columns() -> Vec<&'static str> {
        vec!["open", "backdrop", "opacity", "scale", "toggle"]
    }

    fn cells(&self) -> Vec<String> {
        let join = |values: &[f32]| {
            values
                .iter()
                .map(|v| format!("{v:.2}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        vec![
            self.open.to_string(),
            fmt_value(self.backdrop),
            join(&self.opacity),
            join(&self.scale),
            fmt_value(self.toggle_rotation),
        ]
    }
}
