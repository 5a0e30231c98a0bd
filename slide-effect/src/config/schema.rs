//! # Schema
//!
//! 配置项的类型声明与取值校验。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// CSS 长度单位（`0` 以外的尺寸必须带其中之一）
const SIZE_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vw", "vh", "vmin", "vmax", "pt", "pc", "cm", "mm", "in", "ex", "ch",
];

/// 配置项取值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 任意字符串（通常配合 `select` 限定枚举范围）
    Text,
    /// 尺寸：数字 + CSS 单位，例如 `2rem`
    Size,
    /// 可带符号的尺寸，例如 `-100%`
    SignedSize,
    /// 毫秒时长
    Millis,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "string"),
            Self::Size => write!(f, "size"),
            Self::SignedSize => write!(f, "signed size"),
            Self::Millis => write!(f, "millis"),
        }
    }
}

/// 配置项的值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// 文本 / 尺寸（原样保存，不做数值解析）
    Text(String),
    /// 毫秒
    Millis(u64),
}

impl ConfigValue {
    /// 以字符串形式读取
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Millis(_) => None,
        }
    }

    /// 以毫秒形式读取
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Millis(ms) => write!(f, "{}ms", ms),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for ConfigValue {
    fn from(ms: u64) -> Self {
        Self::Millis(ms)
    }
}

/// 配置项声明
///
/// 注册时确定：取值类型、可选值范围、默认值。
/// 没有默认值的配置项在首次设置之前读取会得到 [`ConfigError::Missing`]。
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// 取值类型
    pub kind: FieldKind,
    /// 可选值范围（仅对 `Text` 生效）
    pub select: Option<&'static [&'static str]>,
    /// 默认值
    pub init: Option<ConfigValue>,
}

impl FieldSchema {
    /// 文本配置项
    pub fn text() -> Self {
        Self {
            kind: FieldKind::Text,
            select: None,
            init: None,
        }
    }

    /// 尺寸配置项
    pub fn size() -> Self {
        Self {
            kind: FieldKind::Size,
            select: None,
            init: None,
        }
    }

    /// 可带符号的尺寸配置项
    pub fn signed_size() -> Self {
        Self {
            kind: FieldKind::SignedSize,
            select: None,
            init: None,
        }
    }

    /// 毫秒配置项
    pub fn millis() -> Self {
        Self {
            kind: FieldKind::Millis,
            select: None,
            init: None,
        }
    }

    /// 限定可选值
    pub fn select(mut self, values: &'static [&'static str]) -> Self {
        self.select = Some(values);
        self
    }

    /// 设置默认值
    pub fn init(mut self, value: impl Into<ConfigValue>) -> Self {
        self.init = Some(value.into());
        self
    }

    /// 校验一个候选值
    pub fn validate(&self, key: &str, value: &ConfigValue) -> Result<(), ConfigError> {
        let mismatch = || ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: self.kind.to_string(),
            value: value.to_string(),
        };

        match (self.kind, value) {
            (FieldKind::Text, ConfigValue::Text(s)) => {
                if let Some(select) = self.select
                    && !select.contains(&s.as_str())
                {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: s.clone(),
                        allowed: select.join(", "),
                    });
                }
                Ok(())
            }
            (FieldKind::Size, ConfigValue::Text(s)) if is_size(s) => Ok(()),
            (FieldKind::SignedSize, ConfigValue::Text(s)) if is_signed_size(s) => Ok(()),
            (FieldKind::Millis, ConfigValue::Millis(_)) => Ok(()),
            _ => Err(mismatch()),
        }
    }
}

/// 判断字符串是否为合法尺寸
///
/// 接受 `0`，或 `数字 + 单位`（不带符号；小数点后至少一位数字；单位不区分大小写）。
/// 只检查形状，不解析数值。
pub fn is_size(s: &str) -> bool {
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let (int, frac) = match number.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (number, None),
    };
    match frac {
        Some(frac) if frac.is_empty() || frac.contains('.') => return false,
        None if int.is_empty() => return false,
        _ => {}
    }

    if unit.is_empty() {
        return number.chars().all(|c| c == '0' || c == '.');
    }
    SIZE_UNITS.iter().any(|u| u.eq_ignore_ascii_case(unit))
}

/// 判断字符串是否为合法的带符号尺寸（`+` / `-` 前缀可选）
pub fn is_signed_size(s: &str) -> bool {
    is_size(s.strip_prefix(['-', '+']).unwrap_or(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_size() {
        for ok in [
            "0", "0.0", "2rem", "10px", "1.5em", "50%", "100vw", "0rem", ".5rem", "2REM", "3Px",
        ] {
            assert!(is_size(ok), "{ok} should be a size");
        }
        for bad in [
            "", "rem", "-2rem", "2", "2 rem", "1.2.3px", "10furlongs", ".px", "5.px", "0.", ".",
        ] {
            assert!(!is_size(bad), "{bad} should not be a size");
        }
    }

    #[test]
    fn test_is_signed_size() {
        for ok in ["-100%", "+2rem", "-0", "0", "3px", "-.5em"] {
            assert!(is_signed_size(ok), "{ok} should be a signed size");
        }
        for bad in ["--1px", "-", "-rem", "- 2px", "-5.px"] {
            assert!(!is_signed_size(bad), "{bad} should not be a signed size");
        }
    }

    #[test]
    fn test_validate_signed_size_only_where_declared() {
        let unsigned = FieldSchema::size();
        let signed = FieldSchema::signed_size();

        assert!(matches!(
            unsigned.validate("value", &"-100%".into()),
            Err(ConfigError::TypeMismatch { .. })
        ));
        assert!(signed.validate("initValue", &"-100%".into()).is_ok());
        assert!(signed.validate("initValue", &"wide".into()).is_err());
    }

    #[test]
    fn test_validate_select() {
        let schema = FieldSchema::text().select(&["top", "left"]);
        assert!(schema.validate("direction", &"top".into()).is_ok());

        let err = schema.validate("direction", &"up".into()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "direction".to_string(),
                value: "up".to_string(),
                allowed: "top, left".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_type_mismatch() {
        let size = FieldSchema::size();
        assert!(size.validate("value", &"2rem".into()).is_ok());
        assert!(matches!(
            size.validate("value", &ConfigValue::Millis(3)),
            Err(ConfigError::TypeMismatch { .. })
        ));
        assert!(matches!(
            size.validate("value", &"wide".into()),
            Err(ConfigError::TypeMismatch { .. })
        ));

        let millis = FieldSchema::millis();
        assert!(millis.validate("speed", &300u64.into()).is_ok());
        assert!(millis.validate("speed", &"300".into()).is_err());
    }
}
