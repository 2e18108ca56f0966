//! # Interpolate 模块
//!
//! 分段线性插值表，超出输入区间时钳制到两端的输出值。

use crate::error::{MotionError, MotionResult};

/// 线性插值
pub fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

/// 分段线性插值表
///
/// 输入断点必须单调不减，输入与输出一一对应。
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl Interpolation {
    /// 创建插值表并校验
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> MotionResult<Self> {
        if input.len() < 2 {
            return Err(MotionError::InvalidRange {
                message: format!("至少需要 2 个断点，实际 {} 个", input.len()),
            });
        }
        if input.len() != output.len() {
            return Err(MotionError::InvalidRange {
                message: format!(
                    "输入 {} 个断点与输出 {} 个值数量不一致",
                    input.len(),
                    output.len()
                ),
            });
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(MotionError::InvalidRange {
                message: "断点和输出必须是有限数".to_string(),
            });
        }
        if let Some(i) = input.windows(2).position(|w| w[1] < w[0]) {
            return Err(MotionError::InvalidRange {
                message: format!("输入断点必须单调不减：第 {} 个断点 {} 小于前一个", i + 1, input[i + 1]),
            });
        }
        Ok(Self { input, output })
    }

    /// 从 `[0, 1]` 映射到 `[start, end]` 的两点插值表
    pub fn unit(start: f32, end: f32) -> Self {
        Self {
            input: vec![0.0, 1.0],
            output: vec![start, end],
        }
    }

    /// 由已知有序的常量表构造，不做校验
    pub(crate) fn from_sorted(input: &[f32], output: &[f32]) -> Self {
        debug_assert!(input.len() >= 2 && input.len() == output.len());
        debug_assert!(input.windows(2).all(|w| w[0] <= w[1]));
        Self {
            input: input.to_vec(),
            output: output.to_vec(),
        }
    }

    /// 输入断点
    pub fn input(&self) -> &[f32] {
        &self.input
    }

    /// 输出值
    pub fn output(&self) -> &[f32] {
        &self.output
    }

    /// 计算插值
    pub fn sample(&self, x: f32) -> f32 {
        let last = self.input.len() - 1;
        if x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }

        // 找到 x 所在的区间 [input[i], input[i + 1]]
        let i = self
            .input
            .windows(2)
            .position(|w| x <= w[1])
            .unwrap_or(last - 1);

        let (in_start, in_end) = (self.input[i], self.input[i + 1]);
        let (out_start, out_end) = (self.output[i], self.output[i + 1]);
        if x == in_end || in_end == in_start {
            return out_end;
        }
        lerp(out_start, out_end, (x - in_start) / (in_end - in_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_tables() {
        assert!(Interpolation::new(vec![0.0], vec![1.0]).is_err());
        assert!(Interpolation::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(Interpolation::new(vec![1.0, 0.0], vec![0.0, 1.0]).is_err());
        assert!(Interpolation::new(vec![0.0, f32::NAN], vec![0.0, 1.0]).is_err());
    }

    #[test]
    fn test_sample_segments_and_clamp() {
        let table = Interpolation::new(vec![0.0, 10.0, 20.0], vec![0.0, 1.0, 5.0]).unwrap();
        assert_eq!(table.sample(-5.0), 0.0);
        assert_eq!(table.sample(0.0), 0.0);
        assert!((table.sample(5.0) - 0.5).abs() < 1e-6);
        assert_eq!(table.sample(10.0), 1.0);
        assert!((table.sample(15.0) - 3.0).abs() < 1e-6);
        assert_eq!(table.sample(20.0), 5.0);
        assert_eq!(table.sample(100.0), 5.0);
    }

    #[test]
    fn test_unit_table() {
        let rotation = Interpolation::unit(0.0, 45.0);
        assert_eq!(rotation.sample(0.0), 0.0);
        assert!((rotation.sample(0.5) - 22.5).abs() < 1e-5);
        assert_eq!(rotation.sample(1.0), 45.0);
    }

    #[test]
    fn test_flat_segment() {
        let table = Interpolation::new(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 1.0, 3.0, 4.0]).unwrap();
        assert!((table.sample(0.5) - 0.5).abs() < 1e-6);
        assert!((table.sample(1.5) - 3.5).abs() < 1e-6);
    }
}
