//! # Error 模块
//!
//! 定义 slide-effect 中使用的错误类型。
//!
//! - [`ConfigError`]：配置项校验失败 / 必需配置项缺失
//! - [`StyleError`]：宿主组件拒绝样式写入
//! - [`EffectError`]：统一错误类型，额外包含钩子执行失败

use thiserror::Error;

use crate::effect::HookKind;

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 未注册的配置项
    #[error("未知配置项 '{key}'，可用配置项：{known}")]
    UnknownKey { key: String, known: String },

    /// 取值不在枚举范围内
    #[error("配置项 '{key}' 的值 '{value}' 无效，可选值：{allowed}")]
    InvalidValue {
        key: String,
        value: String,
        allowed: String,
    },

    /// 取值类型与声明类型不符
    #[error("配置项 '{key}' 期望类型 {expected}，实际值 '{value}'")]
    TypeMismatch {
        key: String,
        expected: String,
        value: String,
    },

    /// 必需配置项未设置
    #[error("必需配置项 '{key}' 尚未设置")]
    Missing { key: String },
}

impl ConfigError {
    /// 是否为校验类错误（未知项 / 越界值 / 类型不符）
    pub fn is_validation(&self) -> bool {
        !self.is_missing()
    }

    /// 是否为缺失类错误
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// 出错的配置项名称
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownKey { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::TypeMismatch { key, .. }
            | Self::Missing { key } => key,
        }
    }
}

/// 样式写入错误
///
/// 由宿主的 [`StyleTarget`](crate::style::StyleTarget) 实现产生。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// 宿主拒绝某条样式声明
    #[error("样式属性 '{property}' 写入被拒绝: {reason}")]
    Rejected { property: String, reason: String },
}

/// slide-effect 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 样式写入错误
    #[error("样式错误: {0}")]
    Style(#[from] StyleError),

    /// 钩子执行失败（保留原始错误）
    #[error("效果 {effect} 的 {hook} 钩子执行失败: {source}")]
    HookExecution {
        effect: &'static str,
        hook: HookKind,
        #[source]
        source: Box<EffectError>,
    },

    /// 钩子调用顺序错误
    #[error("钩子调用顺序错误：{hook} 不能在结束样式应用之后执行")]
    HookOrder { hook: HookKind },
}

impl EffectError {
    /// 包装为钩子执行错误
    pub(crate) fn in_hook(self, effect: &'static str, hook: HookKind) -> Self {
        Self::HookExecution {
            effect,
            hook,
            source: Box::new(self),
        }
    }

    /// 剥离 `HookExecution` 包装，返回最内层的原始错误
    pub fn root_cause(&self) -> &EffectError {
        match self {
            Self::HookExecution { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// 若根因是配置错误，返回该错误
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self.root_cause() {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type EffectResult<T> = Result<T, EffectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        let missing = ConfigError::Missing {
            key: "value".to_string(),
        };
        assert!(missing.is_missing());
        assert!(!missing.is_validation());
        assert_eq!(missing.key(), "value");

        let invalid = ConfigError::InvalidValue {
            key: "position".to_string(),
            value: "bogus".to_string(),
            allowed: "absolute, relative".to_string(),
        };
        assert!(invalid.is_validation());
        assert_eq!(invalid.key(), "position");
    }

    #[test]
    fn test_hook_error_preserves_root_cause() {
        let inner = EffectError::Style(StyleError::Rejected {
            property: "position".to_string(),
            reason: "detached".to_string(),
        });
        let wrapped = inner.clone().in_hook("Slide", HookKind::Before);

        assert_eq!(wrapped.root_cause(), &inner);
        assert!(wrapped.as_config().is_none());
        assert!(std::error::Error::source(&wrapped).is_some());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Missing {
            key: "value".to_string(),
        };
        assert_eq!(err.to_string(), "必需配置项 'value' 尚未设置");
    }
}
