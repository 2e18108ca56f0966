//! # Shadow 模块
//!
//! 把海拔（elevation）换算成平台阴影样式。
//!
//! - 静态海拔：按固定规则查表
//! - 动态海拔：输出随输入信号变化的插值信号

use std::rc::Rc;

use serde::Serialize;

use crate::color::Color;
use crate::error::{MotionError, MotionResult};
use crate::interpolate::Interpolation;
use crate::signal::{Signal, SignalSource};

/// 阴影不透明度
pub const SHADOW_OPACITY: f32 = 0.35;
/// 阴影颜色
pub const SHADOW_COLOR: Color = Color::BLACK;

const ELEVATION_BREAKPOINTS: [f32; 6] = [0.0, 1.0, 2.0, 3.0, 8.0, 24.0];
const HEIGHT_OUTPUTS: [f32; 6] = [0.0, 0.1, 0.5, 0.75, 2.0, 7.0];
const RADIUS_OUTPUTS: [f32; 6] = [0.0, 1.0, 2.5, 5.0, 12.0, 24.0];

/// 海拔输入
#[derive(Debug, Clone)]
pub enum Elevation {
    /// 固定数值
    Static(f32),
    /// 外部驱动的信号
    Dynamic(Signal),
}

impl From<f32> for Elevation {
    fn from(value: f32) -> Self {
        Elevation::Static(value)
    }
}

impl From<Signal> for Elevation {
    fn from(signal: Signal) -> Self {
        Elevation::Dynamic(signal)
    }
}

impl From<SignalSource> for Elevation {
    fn from(source: SignalSource) -> Self {
        Elevation::Dynamic(Signal::Source(source))
    }
}

/// 阴影偏移
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowOffset<T> {
    pub width: T,
    pub height: T,
}

/// 阴影样式
///
/// 静态海拔得到 `ShadowStyle<f32>`，动态海拔得到 `ShadowStyle<Signal>`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowStyle<T = f32> {
    pub color: Color,
    pub offset: ShadowOffset<T>,
    pub opacity: T,
    pub radius: T,
}

impl ShadowStyle<Signal> {
    /// 读取各信号的当前值
    pub fn sample(&self) -> ShadowStyle<f32> {
        ShadowStyle {
            color: self.color,
            offset: ShadowOffset {
                width: self.offset.width.sample(),
                height: self.offset.height.sample(),
            },
            opacity: self.opacity.sample(),
            radius: self.radius.sample(),
        }
    }
}

/// 阴影计算结果
#[derive(Debug, Clone)]
pub enum Shadow {
    /// 无阴影（空样式）
    None,
    /// 固定阴影
    Static(ShadowStyle<f32>),
    /// 随输入变化的阴影
    Dynamic(ShadowStyle<Signal>),
}

impl Shadow {
    pub fn is_none(&self) -> bool {
        matches!(self, Shadow::None)
    }

    /// 当前时刻的阴影样式，无阴影时为 `None`
    pub fn sample(&self) -> Option<ShadowStyle<f32>> {
        match self {
            Shadow::None => None,
            Shadow::Static(style) => Some(style.clone()),
            Shadow::Dynamic(style) => Some(style.sample()),
        }
    }
}

/// 计算阴影样式
pub fn shadow(elevation: impl Into<Elevation>) -> MotionResult<Shadow> {
    match elevation.into() {
        Elevation::Static(value) => Ok(match static_shadow(value)? {
            Some(style) => Shadow::Static(style),
            None => Shadow::None,
        }),
        Elevation::Dynamic(signal) => Ok(Shadow::Dynamic(dynamic_shadow(&signal))),
    }
}

/// 静态海拔的阴影
///
/// - 0：无阴影
/// - 1：高度 0.5，半径 0.75
/// - 2：高度 0.75，半径 1.5
/// - 其他：高度 `elevation - 1`（不低于 0），半径 `elevation`
pub fn static_shadow(elevation: f32) -> MotionResult<Option<ShadowStyle<f32>>> {
    if !elevation.is_finite() || elevation < 0.0 {
        return Err(MotionError::InvalidElevation { value: elevation });
    }
    if elevation == 0.0 {
        return Ok(None);
    }

    let (height, radius) = if elevation == 1.0 {
        (0.5, 0.75)
    } else if elevation == 2.0 {
        (0.75, 1.5)
    } else {
        ((elevation - 1.0).max(0.0), elevation)
    };

    Ok(Some(ShadowStyle {
        color: SHADOW_COLOR,
        offset: ShadowOffset {
            width: 0.0,
            height,
        },
        opacity: SHADOW_OPACITY,
        radius,
    }))
}

/// 动态海拔的阴影
///
/// 高度与半径按断点表插值，超出表的范围时取两端的值。
pub fn dynamic_shadow(elevation: &Signal) -> ShadowStyle<Signal> {
    let (height, radius) = elevation_tables();
    ShadowStyle {
        color: SHADOW_COLOR,
        offset: ShadowOffset {
            width: Signal::constant(0.0),
            height: elevation.interpolate_shared(height),
        },
        opacity: Signal::constant(SHADOW_OPACITY),
        radius: elevation.interpolate_shared(radius),
    }
}

/// 海拔到阴影高度、阴影半径的插值表
pub fn elevation_tables() -> (Rc<Interpolation>, Rc<Interpolation>) {
    (
        Rc::new(Interpolation::from_sorted(&ELEVATION_BREAKPOINTS, &HEIGHT_OUTPUTS)),
        Rc::new(Interpolation::from_sorted(&ELEVATION_BREAKPOINTS, &RADIUS_OUTPUTS)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled(elevation: f32) -> (f32, f32) {
        let style = dynamic_shadow(&Signal::constant(elevation)).sample();
        (style.offset.height, style.radius)
    }

    #[test]
    fn test_zero_elevation_has_no_shadow() {
        assert!(shadow(0.0_f32).unwrap().is_none());
        assert_eq!(static_shadow(0.0).unwrap(), None);
    }

    #[test]
    fn test_static_table() {
        insta::assert_debug_snapshot!(static_shadow(1.0).unwrap(), @r"
        Some(
            ShadowStyle {
                color: Color {
                    r: 0.0,
                    g: 0.0,
                    b: 0.0,
                    a: 1.0,
                },
                offset: ShadowOffset {
                    width: 0.0,
                    height: 0.5,
                },
                opacity: 0.35,
                radius: 0.75,
            },
        )
        ");

        let two = static_shadow(2.0).unwrap().unwrap();
        assert_eq!((two.offset.height, two.radius), (0.75, 1.5));

        let ten = static_shadow(10.0).unwrap().unwrap();
        assert_eq!((ten.offset.height, ten.radius), (9.0, 10.0));
        assert_eq!(ten.opacity, SHADOW_OPACITY);
        assert_eq!(ten.offset.width, 0.0);
    }

    #[test]
    fn test_fractional_elevation_never_goes_negative() {
        let style = static_shadow(0.5).unwrap().unwrap();
        assert_eq!(style.offset.height, 0.0);
        assert_eq!(style.radius, 0.5);
    }

    #[test]
    fn test_invalid_static_elevation() {
        assert_eq!(
            shadow(-1.0_f32).unwrap_err(),
            MotionError::InvalidElevation { value: -1.0 }
        );
        assert!(static_shadow(f32::NAN).is_err());
    }

    #[test]
    fn test_dynamic_breakpoints() {
        for (i, elevation) in ELEVATION_BREAKPOINTS.iter().enumerate() {
            let (height, radius) = sampled(*elevation);
            assert_eq!(height, HEIGHT_OUTPUTS[i]);
            assert_eq!(radius, RADIUS_OUTPUTS[i]);
        }
        assert_eq!(sampled(8.0), (2.0, 12.0));
    }

    #[test]
    fn test_dynamic_interpolates_and_clamps() {
        let (height, radius) = sampled(16.0);
        assert!(height > 2.0 && height < 7.0);
        assert!(radius > 12.0 && radius < 24.0);
        assert!((height - 4.5).abs() < 1e-5);
        assert!((radius - 18.0).abs() < 1e-5);

        assert_eq!(sampled(-3.0), (0.0, 0.0));
        assert_eq!(sampled(100.0), (7.0, 24.0));
    }

    #[test]
    fn test_dynamic_follows_source() {
        let source = SignalSource::new(0.0);
        let dynamic = shadow(source.clone()).unwrap();
        assert!(matches!(dynamic, Shadow::Dynamic(_)));
        assert_eq!(dynamic.sample().unwrap().radius, 0.0);
        assert_eq!(dynamic.sample().unwrap().opacity, SHADOW_OPACITY);

        source.set(3.0);
        let style = dynamic.sample().unwrap();
        assert_eq!(style.offset.height, 0.75);
        assert_eq!(style.radius, 5.0);
    }
}
