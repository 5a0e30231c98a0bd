//! # Effect 模块
//!
//! 效果的统一能力接口。
//!
//! 效果只负责**计算样式**，不负责驱动动画：
//!
//! ```text
//! Host                                Effect
//!   │── before(target) ───────────────►│ 写入起始样式（立即生效，无过渡）
//!   │── contents(target) ─────────────►│ 写入结束样式
//!   │◄─ transition() ──────────────────│ 动画轴 + 时长
//!   │
//!   └─ 宿主的过渡引擎按 axis/duration 做插值
//! ```
//!
//! 宿主可以直接调用这几个方法，也可以用 [`Attachment`] 保证调用顺序。

mod lifecycle;
mod slide;

pub use lifecycle::{Attachment, Stage};
pub use slide::{Direction, Position, SlideEffect, SlideOptions, defaults};

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::error::EffectResult;
use crate::style::StyleTarget;

/// 钩子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// 动画开始前（写入起始样式）
    Before,
    /// 结束样式计算
    Contents,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::Contents => write!(f, "contents"),
        }
    }
}

/// 动画轴（过渡引擎实际插值的样式属性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Left,
    Top,
}

impl Axis {
    /// 对应的 CSS 属性名
    pub fn property(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// 过渡声明：宿主过渡引擎需要的全部参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionSpec {
    /// 动画轴
    pub axis: Axis,
    /// 持续时间
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl TransitionSpec {
    /// 持续时间（毫秒）
    pub fn millis(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// 效果能力接口
///
/// 取代"继承效果基类"的做法：具体效果只需实现配置、两个钩子和过渡声明。
pub trait Effect {
    /// 结构化配置
    type Options;

    /// 效果名（用于日志和错误信息）
    fn name(&self) -> &'static str;

    /// 批量应用配置
    fn configure(&mut self, options: Self::Options) -> EffectResult<()>;

    /// 动画开始前的钩子：把组件放到起始位置
    fn before(&self, target: &mut dyn StyleTarget) -> EffectResult<()>;

    /// 结束样式：把动画目标样式写入组件
    fn contents(&self, target: &mut dyn StyleTarget) -> EffectResult<()>;

    /// 过渡声明
    fn transition(&self) -> TransitionSpec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_property() {
        assert_eq!(Axis::Left.property(), "left");
        assert_eq!(Axis::Top.to_string(), "top");
    }

    #[test]
    fn test_transition_spec_serialization() {
        let spec = TransitionSpec {
            axis: Axis::Top,
            duration: Duration::from_millis(450),
        };
        assert_eq!(spec.millis(), 450);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"axis":"top","duration":450}"#);
    }
}
