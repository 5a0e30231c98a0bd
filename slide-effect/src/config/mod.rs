//! # Config 模块
//!
//! 效果配置注册表。每个效果在构造时把自己认识的配置项连同类型、
//! 可选值、默认值一起注册进来，此后所有读写都经过注册表校验。
//!
//! ## 读取规则
//!
//! 1. 已设置的值（最高）
//! 2. 注册时声明的默认值
//! 3. 都没有 → [`ConfigError::Missing`]
//!
//! 写入失败时原值保持不变。

mod schema;

pub use schema::{ConfigValue, FieldKind, FieldSchema, is_signed_size, is_size};

use crate::error::ConfigError;
use tracing::debug;

/// 单个配置项：声明 + 当前值
#[derive(Debug, Clone)]
struct Field {
    key: &'static str,
    schema: FieldSchema,
    value: Option<ConfigValue>,
}

/// 配置注册表
///
/// 按注册顺序保存配置项。配置项数量很少，线性查找即可。
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    fields: Vec<Field>,
}

impl ConfigRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册配置项
    ///
    /// 重复注册同一 key 会替换原声明并清空已设置的值。
    pub fn register(&mut self, key: &'static str, schema: FieldSchema) {
        let field = Field {
            key,
            schema,
            value: None,
        };
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// 读取配置项（已设置值优先，其次默认值）
    pub fn get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        let field = self.field(key)?;
        field
            .value
            .as_ref()
            .or(field.schema.init.as_ref())
            .ok_or_else(|| ConfigError::Missing {
                key: key.to_string(),
            })
    }

    /// 校验并写入配置项，返回写入后的值
    pub fn set(
        &mut self,
        key: &str,
        value: impl Into<ConfigValue>,
    ) -> Result<&ConfigValue, ConfigError> {
        let value = value.into();
        let index = self
            .fields
            .iter()
            .position(|f| f.key == key)
            .ok_or_else(|| ConfigError::UnknownKey {
                key: key.to_string(),
                known: self.known_keys(),
            })?;

        let field = &mut self.fields[index];
        field.schema.validate(key, &value)?;
        debug!(key, value = %value, "配置项已更新");
        Ok(field.value.insert(value))
    }

    /// 是否已注册
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }

    /// 是否已显式设置（不含默认值）
    pub fn is_set(&self, key: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.key == key && f.value.is_some())
    }

    /// 查询配置项声明
    pub fn schema(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.schema)
    }

    /// 已注册的所有 key（按注册顺序）
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }

    fn field(&self, key: &str) -> Result<&Field, ConfigError> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| ConfigError::UnknownKey {
                key: key.to_string(),
                known: self.known_keys(),
            })
    }

    fn known_keys(&self) -> String {
        self.keys().collect::<Vec<_>>().join(", ")
    }
}
