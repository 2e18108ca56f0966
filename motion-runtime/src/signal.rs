//! # Signal 模块
//!
//! 随时间变化的数值（由手势、其他动画等外部驱动）。
//!
//! - `SignalSource`: 可共享、可写入的数值单元
//! - `Signal`: 只读的派生值，可以是常量、源或对另一个信号的插值
//!
//! 运行模型是单线程的，共享使用 `Rc<Cell<f32>>`。

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::interpolate::Interpolation;

/// 可写入的信号源
///
/// 克隆得到的是同一个数值单元的另一个句柄。
#[derive(Clone, Default)]
pub struct SignalSource {
    value: Rc<Cell<f32>>,
}

impl SignalSource {
    /// 创建信号源
    pub fn new(initial: f32) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    /// 读取当前值
    pub fn get(&self) -> f32 {
        self.value.get()
    }

    /// 写入新值
    pub fn set(&self, value: f32) {
        self.value.set(value);
    }

    /// 两个句柄是否指向同一个数值单元
    pub fn same_source(&self, other: &SignalSource) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalSource").field(&self.get()).finish()
    }
}

/// 只读信号
#[derive(Debug, Clone)]
pub enum Signal {
    /// 常量
    Constant(f32),
    /// 外部数值源
    Source(SignalSource),
    /// 对另一个信号做分段线性插值
    Interpolated {
        input: Box<Signal>,
        table: Rc<Interpolation>,
    },
}

impl Signal {
    /// 常量信号
    pub fn constant(value: f32) -> Self {
        Self::Constant(value)
    }

    /// 读取当前值
    pub fn sample(&self) -> f32 {
        match self {
            Signal::Constant(value) => *value,
            Signal::Source(source) => source.get(),
            Signal::Interpolated { input, table } => table.sample(input.sample()),
        }
    }

    /// 以当前信号为输入派生插值信号
    pub fn interpolate(&self, table: Interpolation) -> Signal {
        self.interpolate_shared(Rc::new(table))
    }

    /// 同 [`Signal::interpolate`]，复用已有的插值表
    pub fn interpolate_shared(&self, table: Rc<Interpolation>) -> Signal {
        Signal::Interpolated {
            input: Box::new(self.clone()),
            table,
        }
    }

    /// 是否为常量
    pub fn is_constant(&self) -> bool {
        match self {
            Signal::Constant(_) => true,
            Signal::Source(_) => false,
            Signal::Interpolated { input, .. } => input.is_constant(),
        }
    }
}

impl From<f32> for Signal {
    fn from(value: f32) -> Self {
        Signal::Constant(value)
    }
}

impl From<SignalSource> for Signal {
    fn from(source: SignalSource) -> Self {
        Signal::Source(source)
    }
}
