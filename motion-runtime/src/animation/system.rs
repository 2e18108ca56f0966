//! # System 模块
//!
//! 通用动画时间轴。
//!
//! 每个组件持有一个 `AnimationSystem`，以自己的属性键类型区分属性：
//! ```rust,ignore
//! let mut system = AnimationSystem::new();
//! system.insert(Property::Progress, 0.0);
//! system.animate_to(Property::Progress, 1.0, Tween::new(200.0))?;
//! system.update(16.0);
//! let progress = system.value_or(&Property::Progress, 0.0);
//! ```
//!
//! 同一属性上启动新动画会立即取代旧动画，新动画从属性的当前值出发。

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::{Animation, Tween};
use crate::error::{MotionError, MotionResult};
use crate::signal::SignalSource;

/// 动画系统
///
/// 只负责：
/// 1. 保存每个属性的当前值
/// 2. 管理时间轴：知道某个属性要在多长时间内走到目标值
/// 3. 把变化推送给绑定的 [`SignalSource`]
pub struct AnimationSystem<K> {
    /// 属性当前值
    values: HashMap<K, f32>,
    /// 进行中的动画
    animations: HashMap<K, Animation>,
    /// 绑定的外部信号
    bindings: HashMap<K, SignalSource>,
}

impl<K: Eq + Hash + Clone + Debug> Default for AnimationSystem<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Debug for AnimationSystem<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSystem")
            .field("values", &self.values.len())
            .field("animations", &self.animations.len())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl<K: Eq + Hash + Clone + Debug> AnimationSystem<K> {
    /// 创建新的动画系统
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            animations: HashMap::new(),
            bindings: HashMap::new(),
        }
    }

    fn unknown(key: &K) -> MotionError {
        MotionError::UnknownProperty {
            property: format!("{key:?}"),
        }
    }

    fn write(&mut self, key: &K, value: f32) {
        if let Some(slot) = self.values.get_mut(key) {
            *slot = value;
        }
        if let Some(source) = self.bindings.get(key) {
            source.set(value);
        }
    }

    // ========== 属性管理 ==========

    /// 注册属性
    ///
    /// 属性已存在时保持原值不变。
    ///
    /// # 返回
    /// 是否为新注册的属性
    pub fn insert(&mut self, key: K, initial: f32) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, initial);
        true
    }

    /// 只保留满足条件的属性，其余属性连同动画和绑定一起注销
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.values.retain(|key, _| keep(key));
        let values = &self.values;
        self.animations.retain(|key, _| values.contains_key(key));
        self.bindings.retain(|key, _| values.contains_key(key));
    }

    /// 把属性绑定到外部信号，之后每次值变化都会写入该信号
    pub fn bind(&mut self, key: K, source: SignalSource) -> MotionResult<()> {
        let value = *self.values.get(&key).ok_or_else(|| Self::unknown(&key))?;
        source.set(value);
        self.bindings.insert(key, source);
        Ok(())
    }

    // ========== 动画控制 ==========

    /// 从当前值开始把属性动画到目标值
    ///
    /// 同一属性上的旧动画会被取代。
    pub fn animate_to(&mut self, key: K, target: f32, tween: Tween) -> MotionResult<()> {
        let current = *self.values.get(&key).ok_or_else(|| Self::unknown(&key))?;
        trace!(property = ?key, from = current, to = target, delay = tween.delay_ms, "启动动画");
        self.animations
            .insert(key, Animation::new(current, target, tween));
        Ok(())
    }

    /// 推进时间轴
    ///
    /// # 参数
    /// - `dt`: 经过的时间（毫秒）
    pub fn update(&mut self, dt: f32) {
        let mut changed: Vec<(K, f32)> = Vec::new();

        for (key, animation) in &mut self.animations {
            let was_pending = animation.is_pending();
            animation.update(dt);
            if animation.is_pending() {
                continue;
            }
            if was_pending {
                // 延迟结束：从属性此刻的值出发
                if let Some(current) = self.values.get(key) {
                    animation.rebase(*current);
                }
            }
            changed.push((key.clone(), animation.current_value()));
        }

        for (key, value) in changed {
            self.write(&key, value);
        }

        self.animations.retain(|_, animation| !animation.is_finished());
    }

    // ========== 查询方法 ==========

    /// 获取属性当前值
    pub fn value(&self, key: &K) -> Option<f32> {
        self.values.get(key).copied()
    }

    /// 获取属性当前值，不存在时返回默认值
    pub fn value_or(&self, key: &K, default: f32) -> f32 {
        self.value(key).unwrap_or(default)
    }

    /// 检查是否有活跃的动画
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Prop {
        Alpha,
        Scale,
    }

    fn linear(duration: f32) -> Tween {
        Tween::new(duration).with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_insert_keeps_existing_value() {
        let mut system = AnimationSystem::new();
        assert!(system.insert(Prop::Alpha, 0.5));
        assert!(!system.insert(Prop::Alpha, 1.0));
        assert_eq!(system.value(&Prop::Alpha), Some(0.5));
    }

    #[test]
    fn test_animate_unknown_property() {
        let mut system: AnimationSystem<Prop> = AnimationSystem::new();
        let err = system.animate_to(Prop::Alpha, 1.0, linear(100.0)).unwrap_err();
        assert!(matches!(err, MotionError::UnknownProperty { .. }));
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut system = AnimationSystem::new();
        system.insert(Prop::Alpha, 0.0);
        system.animate_to(Prop::Alpha, 1.0, linear(100.0)).unwrap();

        system.update(50.0);
        assert!((system.value_or(&Prop::Alpha, -1.0) - 0.5).abs() < 1e-5);
        assert!(system.has_active_animations());

        system.update(60.0);
        assert_eq!(system.value(&Prop::Alpha), Some(1.0));
        assert!(!system.has_active_animations());
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut system = AnimationSystem::new();
        system.insert(Prop::Alpha, 0.0);
        system.animate_to(Prop::Alpha, 1.0, linear(100.0)).unwrap();
        system.update(40.0);

        system.animate_to(Prop::Alpha, 0.0, linear(100.0)).unwrap();
        system.update(0.0);
        assert!((system.value_or(&Prop::Alpha, -1.0) - 0.4).abs() < 1e-5);

        system.update(50.0);
        assert!((system.value_or(&Prop::Alpha, -1.0) - 0.2).abs() < 1e-5);

        system.update(50.0);
        assert_eq!(system.value(&Prop::Alpha), Some(0.0));
        assert!(!system.has_active_animations());
    }

    #[test]
    fn test_delay_holds_value_and_rebases() {
        let mut system = AnimationSystem::new();
        system.insert(Prop::Scale, 0.2);
        system
            .animate_to(Prop::Scale, 1.0, linear(100.0).with_delay(50.0))
            .unwrap();

        system.update(30.0);
        assert_eq!(system.value(&Prop::Scale), Some(0.2));
        assert!(system.has_active_animations());

        system.update(70.0);
        // 延迟 50ms 后播放 50ms：0.2 → 1.0 的一半
        assert!((system.value_or(&Prop::Scale, -1.0) - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_retain_drops_properties_and_animations() {
        let mut system = AnimationSystem::new();
        system.insert(Prop::Alpha, 0.0);
        system.insert(Prop::Scale, 0.0);
        system.animate_to(Prop::Scale, 1.0, linear(100.0)).unwrap();

        system.retain(|key| *key == Prop::Alpha);
        assert_eq!(system.value(&Prop::Alpha), Some(0.0));
        assert_eq!(system.value(&Prop::Scale), None);
        assert!(!system.has_active_animations());
    }

    #[test]
    fn test_bound_signal_follows_updates() {
        let mut system = AnimationSystem::new();
        system.insert(Prop::Alpha, 0.25);
        let source = SignalSource::new(0.0);
        system.bind(Prop::Alpha, source.clone()).unwrap();
        assert_eq!(source.get(), 0.25);

        system.animate_to(Prop::Alpha, 1.0, linear(100.0)).unwrap();
        system.update(100.0);
        assert_eq!(source.get(), 1.0);
    }
}
