//! # Attachment
//!
//! 把效果绑定到一个组件上执行一次动画的辅助类型。
//!
//! ```text
//! attach ──► prepare() ──► finish() ──► TransitionSpec
//!   │           ▲ 可重复       │
//!   └───────────┴──────────────┘ finish() 会在需要时先补跑 prepare()
//! ```
//!
//! `finish()` 之后再调用 `prepare()` 会把组件拉回起始位置，返回
//! [`EffectError::HookOrder`]。

use super::{Effect, HookKind, TransitionSpec};
use crate::error::{EffectError, EffectResult};
use crate::style::StyleTarget;
use tracing::warn;

/// 绑定阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 刚绑定，起始样式尚未写入
    Attached,
    /// 起始样式已写入
    Prepared,
    /// 结束样式已写入
    Finished,
}

/// 效果与组件的一次绑定
pub struct Attachment<'a, E: Effect> {
    effect: &'a E,
    target: &'a mut dyn StyleTarget,
    stage: Stage,
}

impl<'a, E: Effect> Attachment<'a, E> {
    /// 绑定效果与组件
    pub fn new(effect: &'a E, target: &'a mut dyn StyleTarget) -> Self {
        Self {
            effect,
            target,
            stage: Stage::Attached,
        }
    }

    /// 当前阶段
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 写入起始样式
    pub fn prepare(&mut self) -> EffectResult<()> {
        if self.stage == Stage::Finished {
            warn!(effect = self.effect.name(), "结束样式已应用，拒绝重新写入起始样式");
            return Err(EffectError::HookOrder {
                hook: HookKind::Before,
            });
        }
        self.effect.before(self.target)?;
        self.stage = Stage::Prepared;
        Ok(())
    }

    /// 写入结束样式，返回宿主过渡引擎需要的参数
    pub fn finish(&mut self) -> EffectResult<TransitionSpec> {
        if self.stage == Stage::Attached {
            self.prepare()?;
        }
        self.effect.contents(self.target)?;
        self.stage = Stage::Finished;
        Ok(self.effect.transition())
    }
}
