//! # Style 模块
//!
//! 效果与宿主组件之间的样式接口。
//!
//! ## 核心类型
//!
//! - [`StylePatch`]：一组有序的 CSS 声明（`属性 → 值`）
//! - [`WriteMode`]：写入方式（立即 / 被动）
//! - [`StyleTarget`]：宿主组件需实现的样式写入接口
//! - [`InlineStyle`]：内置的 `StyleTarget` 实现，记录每次写入
//!
//! 效果本身不持有组件，只在钩子执行时借用 `&mut dyn StyleTarget`。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StyleError;
use tracing::debug;

/// 样式补丁
///
/// 保持插入顺序；同一属性重复插入时覆盖原值、位置不变。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylePatch {
    declarations: Vec<(String, String)>,
}

impl StylePatch {
    /// 创建空补丁
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建只含一条声明的补丁
    pub fn single(property: impl Into<String>, value: impl Into<String>) -> Self {
        let mut patch = Self::new();
        patch.insert(property, value);
        patch
    }

    /// 插入一条声明
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// 查询属性值
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// 遍历所有声明
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for StylePatch {
    /// 输出为 CSS 声明串，例如 `position: absolute; left: 0rem;`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}: {};", property, value)?;
            first = false;
        }
        Ok(())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for StylePatch {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut patch = Self::new();
        for (p, v) in iter {
            patch.insert(p, v);
        }
        patch
    }
}

/// 样式写入方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// 立即写入，覆盖已有声明
    #[default]
    Immediate,
    /// 被动写入：组件已声明该属性时保持原值
    Passive,
}

/// 宿主组件的样式写入接口
pub trait StyleTarget {
    /// 合并一组样式声明
    fn apply_style(&mut self, patch: &StylePatch, mode: WriteMode) -> Result<(), StyleError>;
}

/// 一次样式写入记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleWrite {
    pub patch: StylePatch,
    pub mode: WriteMode,
}

/// 内置样式目标
///
/// 保存合并后的声明，并按顺序记录每一次写入。
/// 适用于没有自己样式对象的宿主，以及测试。
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    current: StylePatch,
    writes: Vec<StyleWrite>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有声明初始化（不计入写入记录）
    pub fn with_declarations(declarations: StylePatch) -> Self {
        Self {
            current: declarations,
            writes: Vec::new(),
        }
    }

    /// 当前某属性的值
    pub fn get(&self, property: &str) -> Option<&str> {
        self.current.get(property)
    }

    /// 合并后的全部声明
    pub fn declarations(&self) -> &StylePatch {
        &self.current
    }

    /// 写入记录（按时间顺序）
    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// 清空写入记录，保留当前声明
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl StyleTarget for InlineStyle {
    fn apply_style(&mut self, patch: &StylePatch, mode: WriteMode) -> Result<(), StyleError> {
        for (property, value) in patch.iter() {
            if mode == WriteMode::Passive && self.current.get(property).is_some() {
                debug!(property, "被动写入：保留已有声明");
                continue;
            }
            self.current.insert(property, value);
        }
        self.writes.push(StyleWrite {
            patch: patch.clone(),
            mode,
        });
        Ok(())
    }
}
