//! # Easing 模块
//!
//! 缓动函数库，用于动画的时间插值。
//!
//! 贝塞尔类曲线统一通过 [`cubic_bezier`] 求解，曲线参数与 CSS / Material 规范一致。

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// CSS `ease`
    Ease,
    /// 缓入（先慢后快）
    EaseIn,
    /// 缓出（先快后慢）
    EaseOut,
    /// 缓入缓出（两头慢中间快），计时动画的默认曲线
    #[default]
    EaseInOut,
    /// Material 标准曲线（fast out, slow in）
    Standard,
    /// 自定义三次贝塞尔曲线 `(x1, y1, x2, y2)`
    Bezier(f32, f32, f32, f32),
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            EasingFunction::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            EasingFunction::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            EasingFunction::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            EasingFunction::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            EasingFunction::Bezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// 三次贝塞尔缓动求解
///
/// 先用牛顿迭代求曲线参数，失败时退回二分。
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = fraction;
        for _ in 0..24 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = EasingFunction::EaseInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        let mid = easing.apply(0.5);
        assert!((mid - 0.5).abs() < 0.01);

        let early = easing.apply(0.25);
        let late = easing.apply(0.75);
        assert!((early + late - 1.0).abs() < 0.01);
        assert!(early < 0.25);
    }

    #[test]
    fn test_clamp() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in [
            EasingFunction::Ease,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::Standard,
        ] {
            let mut last = 0.0;
            for step in 1..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value >= last - 1e-4, "{easing:?} 在 {step} 处回退");
                last = value;
            }
            assert!((last - 1.0).abs() < 1e-4);
        }
    }
}
