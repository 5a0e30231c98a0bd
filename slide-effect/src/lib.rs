//! # Slide Effect
//!
//! 组件"滑入"位置过渡效果的核心库。
//!
//! ## 架构概述
//!
//! `slide-effect` 只计算样式，不驱动动画。宿主在两个固定时刻查询效果：
//!
//! ```text
//! Host                              SlideEffect
//!   │── before(component) ────────►│ position + 起始偏移（立即生效）
//!   │── contents(component) ──────►│ 结束偏移
//!   │◄─ transition() ──────────────│ axis = left/top, duration = speed
//!   │
//!   └─ 宿主过渡引擎在 axis 上插值
//! ```
//!
//! ## 核心类型
//!
//! - [`SlideEffect`]：滑入效果
//! - [`Effect`]：效果能力接口
//! - [`StyleTarget`]：宿主组件需实现的样式写入接口
//! - [`ConfigRegistry`]：带类型校验的配置注册表
//! - [`EffectError`]：统一错误类型
//!
//! ## 使用示例
//!
//! ```ignore
//! use slide_effect::{Attachment, InlineStyle, SlideEffect};
//!
//! let effect = SlideEffect::shorthand("left", "5rem")?;
//! let mut style = InlineStyle::new();
//!
//! let spec = Attachment::new(&effect, &mut style).finish()?;
//! // style: position: relative; left: -5rem;
//! // spec:  axis = left, duration = 300ms
//! ```
//!
//! ## 模块结构
//!
//! - [`config`]：配置注册表与取值校验
//! - [`effect`]：效果接口、Slide 效果、绑定辅助
//! - [`style`]：样式补丁与写入接口
//! - [`error`]：错误类型定义

pub mod config;
pub mod effect;
pub mod error;
pub mod style;

// 重导出核心类型
pub use config::{ConfigRegistry, ConfigValue, FieldKind, FieldSchema};
pub use effect::{
    Attachment, Axis, Direction, Effect, HookKind, Position, SlideEffect, SlideOptions, Stage,
    TransitionSpec,
};
pub use error::{ConfigError, EffectError, EffectResult, StyleError};
pub use style::{InlineStyle, StylePatch, StyleTarget, StyleWrite, WriteMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        // 验证所有公共类型都可以正常使用
        let effect = SlideEffect::new();
        let _spec: TransitionSpec = effect.transition();
        let _style = InlineStyle::new();
        let _patch = StylePatch::single("left", "0");
        let _registry = ConfigRegistry::new();
        let _mode = WriteMode::Passive;
    }
}
