//! # Slide 效果
//!
//! 让组件沿四个方向之一从偏移位置滑回原位。
//!
//! ## 样式计算
//!
//! | direction | 动画轴 | 起始样式（before） | 结束样式（contents） |
//! |-----------|--------|--------------------|----------------------|
//! | `left`    | `left` | `left: initValue`  | `left: -value`       |
//! | `right`   | `left` | `left: initValue`  | `left: value`        |
//! | `top`     | `top`  | `top: initValue`   | `top: -value`        |
//! | `bottom`  | `top`  | `top: initValue`   | `top: value`         |
//!
//! `before` 还会先写入 `position`。尺寸一律按原字符串处理，只在需要时加 `-` 前缀。

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{Axis, Effect, HookKind, TransitionSpec};
use crate::config::{ConfigRegistry, ConfigValue, FieldSchema};
use crate::error::{ConfigError, EffectResult};
use crate::style::{StylePatch, StyleTarget, WriteMode};
use tracing::{debug, error, warn};

/// 配置项名称
mod keys {
    pub const POSITION: &str = "position";
    pub const DIRECTION: &str = "direction";
    pub const VALUE: &str = "value";
    pub const INIT_VALUE: &str = "initValue";
    pub const SPEED: &str = "speed";
}

/// Slide 效果的默认参数
pub mod defaults {
    use super::{Direction, Position};

    /// 默认 position
    pub const POSITION: Position = Position::Relative;
    /// 默认方向
    pub const DIRECTION: Direction = Direction::Left;
    /// 默认起始偏移（零长度）
    pub const INIT_VALUE: &str = "0";
    /// 默认动画时长（毫秒）
    pub const SPEED_MS: u64 = 300;
}

/// CSS `position` 取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Absolute,
    Fixed,
    Inherit,
    Initial,
    Relative,
    Static,
    Sticky,
    Unset,
}

impl Position {
    /// 所有可选值（与 CSS 关键字一致）
    pub const NAMES: &'static [&'static str] = &[
        "absolute", "fixed", "inherit", "initial", "relative", "static", "sticky", "unset",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Relative => "relative",
            Self::Static => "static",
            Self::Sticky => "sticky",
            Self::Unset => "unset",
        }
    }
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "inherit" => Ok(Self::Inherit),
            "initial" => Ok(Self::Initial),
            "relative" => Ok(Self::Relative),
            "static" => Ok(Self::Static),
            "sticky" => Ok(Self::Sticky),
            "unset" => Ok(Self::Unset),
            _ => Err(ConfigError::InvalidValue {
                key: keys::POSITION.to_string(),
                value: s.to_string(),
                allowed: Self::NAMES.join(", "),
            }),
        }
    }
}

impl AsRef<str> for Position {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 滑动方向
///
/// 表示组件**朝哪个方向**移动 `value` 的距离：
/// `left` / `top` 写入负偏移，`right` / `bottom` 写入正偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Left,
    Bottom,
    Right,
}

impl Direction {
    /// 所有可选值
    pub const NAMES: &'static [&'static str] = &["top", "left", "bottom", "right"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }

    /// 该方向对应的动画轴
    pub fn axis(&self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Left,
            Self::Top | Self::Bottom => Axis::Top,
        }
    }

    /// 是否朝坐标轴负方向
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "left" => Ok(Self::Left),
            "bottom" => Ok(Self::Bottom),
            "right" => Ok(Self::Right),
            _ => Err(ConfigError::InvalidValue {
                key: keys::DIRECTION.to_string(),
                value: s.to_string(),
                allowed: Self::NAMES.join(", "),
            }),
        }
    }
}

impl AsRef<str> for Direction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 结构化配置
///
/// 每个字段都是可选的，未给出的字段保持当前值。
/// 字段名与配置项名一致（`initValue` 为驼峰）。
///
/// ```text
/// { "direction": "bottom", "value": "10px", "speed": 500 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideOptions {
    pub position: Option<String>,
    pub direction: Option<String>,
    pub value: Option<String>,
    pub init_value: Option<String>,
    pub speed: Option<u64>,
    /// 未识别的字段，`configure` 时报错
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SlideOptions {
    /// 从 JSON 解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Slide 效果
///
/// 持有自己的配置注册表；不持有组件，也没有运行状态。
#[derive(Debug, Clone)]
pub struct SlideEffect {
    config: ConfigRegistry,
    /// 由 direction 决定，set_direction 时同步更新
    axis: Axis,
    /// before 钩子写入 position 时使用的写入方式
    position_mode: WriteMode,
}

impl Default for SlideEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideEffect {
    pub const NAME: &'static str = "Slide";

    /// 创建默认配置的效果（`value` 尚未设置）
    pub fn new() -> Self {
        let mut config = ConfigRegistry::new();
        config.register(
            keys::POSITION,
            FieldSchema::text()
                .select(Position::NAMES)
                .init(defaults::POSITION.as_str()),
        );
        config.register(
            keys::DIRECTION,
            FieldSchema::text()
                .select(Direction::NAMES)
                .init(defaults::DIRECTION.as_str()),
        );
        config.register(keys::VALUE, FieldSchema::size());
        config.register(
            keys::INIT_VALUE,
            FieldSchema::signed_size().init(defaults::INIT_VALUE),
        );
        config.register(keys::SPEED, FieldSchema::millis().init(defaults::SPEED_MS));

        Self {
            config,
            axis: defaults::DIRECTION.axis(),
            position_mode: WriteMode::Immediate,
        }
    }

    /// 简写形式：方向 + 距离
    pub fn shorthand(
        direction: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut effect = Self::new();
        effect.set_direction(direction)?;
        effect.set_value(value)?;
        Ok(effect)
    }

    /// 从结构化配置创建
    pub fn from_options(options: SlideOptions) -> EffectResult<Self> {
        let mut effect = Self::new();
        effect.configure(options)?;
        Ok(effect)
    }

    // ========== position ==========

    pub fn position(&self) -> Position {
        self.text(keys::POSITION)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::POSITION)
    }

    pub fn set_position(&mut self, position: impl AsRef<str>) -> Result<Position, ConfigError> {
        let position = position.as_ref();
        self.config.set(keys::POSITION, position)?;
        position.parse()
    }

    // ========== direction ==========

    pub fn direction(&self) -> Direction {
        self.text(keys::DIRECTION)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::DIRECTION)
    }

    /// 设置方向，同时更新动画轴
    pub fn set_direction(&mut self, direction: impl AsRef<str>) -> Result<Direction, ConfigError> {
        let direction: Direction = direction.as_ref().parse()?;
        self.config.set(keys::DIRECTION, direction.as_str())?;
        self.axis = direction.axis();
        Ok(direction)
    }

    // ========== value / initValue ==========

    /// 移动距离；未设置时返回 [`ConfigError::Missing`]
    pub fn value(&self) -> Result<&str, ConfigError> {
        self.config
            .get(keys::VALUE)
            .map(|v| v.as_text().unwrap_or_default())
    }

    /// 设置移动距离（不带符号，方向决定正负），返回写入后的值
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<String, ConfigError> {
        self.config
            .set(keys::VALUE, ConfigValue::Text(value.into()))
            .map(|v| v.as_text().unwrap_or_default().to_string())
    }

    /// 起始偏移，默认 `0`
    pub fn init_value(&self) -> &str {
        self.text(keys::INIT_VALUE).unwrap_or(defaults::INIT_VALUE)
    }

    /// 设置起始偏移，原样写入动画轴，可带符号（如 `-100%`）
    pub fn set_init_value(&mut self, value: impl Into<String>) -> Result<String, ConfigError> {
        self.config
            .set(keys::INIT_VALUE, ConfigValue::Text(value.into()))
            .map(|v| v.as_text().unwrap_or_default().to_string())
    }

    // ========== speed ==========

    /// 动画时长，默认 300ms
    pub fn speed(&self) -> Duration {
        let ms = self
            .config
            .get(keys::SPEED)
            .ok()
            .and_then(ConfigValue::as_millis)
            .unwrap_or(defaults::SPEED_MS);
        Duration::from_millis(ms)
    }

    pub fn set_speed(&mut self, millis: u64) -> Result<Duration, ConfigError> {
        self.config.set(keys::SPEED, millis)?;
        Ok(Duration::from_millis(millis))
    }

    // ========== 其他 ==========

    /// 当前动画轴
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// before 钩子写入 position 时使用的写入方式（默认 `Immediate`）
    pub fn position_write_mode(&self) -> WriteMode {
        self.position_mode
    }

    pub fn set_position_write_mode(&mut self, mode: WriteMode) {
        self.position_mode = mode;
    }

    /// 按名称读取配置项
    pub fn option(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.config.get(key)
    }

    /// 按名称写入配置项（经注册表校验）
    pub fn set_option(
        &mut self,
        key: &str,
        value: impl Into<ConfigValue>,
    ) -> Result<ConfigValue, ConfigError> {
        let stored = self.config.set(key, value)?.clone();
        if key == keys::DIRECTION {
            self.axis = self.direction().axis();
        }
        Ok(stored)
    }

    /// 已注册的配置项名称
    pub fn option_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.config.keys()
    }

    // ========== 样式计算 ==========

    /// 起始样式：`position` + 动画轴上的起始偏移
    ///
    /// `before` 会把这两条声明分两次写入（先 position）。
    pub fn initial_style(&self) -> StylePatch {
        let mut patch = StylePatch::single("position", self.position().as_str());
        patch.insert(self.axis.property(), self.init_value());
        patch
    }

    /// 结束样式
    pub fn end_style(&self) -> Result<StylePatch, ConfigError> {
        let direction = self.direction();
        let value = self.value()?;
        let offset = if direction.is_negative() {
            format!("-{}", value)
        } else {
            value.to_string()
        };
        Ok(StylePatch::single(direction.axis().property(), offset))
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.config.get(key).ok().and_then(ConfigValue::as_text)
    }

    fn stage(&self, target: &mut dyn StyleTarget) -> EffectResult<()> {
        let position = StylePatch::single("position", self.position().as_str());
        target.apply_style(&position, self.position_mode)?;

        let offset = StylePatch::single(self.axis.property(), self.init_value());
        target.apply_style(&offset, WriteMode::Immediate)?;

        debug!(
            effect = Self::NAME,
            position = %self.position(),
            axis = %self.axis,
            init = self.init_value(),
            "起始样式已写入"
        );
        Ok(())
    }

    fn apply_options(&mut self, options: SlideOptions) -> EffectResult<()> {
        if let Some(key) = options.extra.keys().next() {
            return Err(ConfigError::UnknownKey {
                key: key.clone(),
                known: self.option_keys().collect::<Vec<_>>().join(", "),
            }
            .into());
        }
        if let Some(position) = options.position {
            self.set_position(position)?;
        }
        if let Some(direction) = options.direction {
            self.set_direction(direction)?;
        }
        if let Some(value) = options.value {
            self.set_value(value)?;
        }
        if let Some(init_value) = options.init_value {
            self.set_init_value(init_value)?;
        }
        if let Some(speed) = options.speed {
            self.set_speed(speed)?;
        }
        Ok(())
    }
}

impl Effect for SlideEffect {
    type Options = SlideOptions;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// 全部字段校验通过才生效；任一字段失败时配置保持原样
    fn configure(&mut self, options: SlideOptions) -> EffectResult<()> {
        let mut staged = self.clone();
        if let Err(e) = staged.apply_options(options) {
            warn!(effect = Self::NAME, error = %e, "配置被拒绝");
            return Err(e);
        }
        *self = staged;
        Ok(())
    }

    fn before(&self, target: &mut dyn StyleTarget) -> EffectResult<()> {
        self.stage(target).map_err(|e| {
            error!(effect = Self::NAME, error = %e, "before 钩子执行失败");
            e.in_hook(Self::NAME, HookKind::Before)
        })
    }

    fn contents(&self, target: &mut dyn StyleTarget) -> EffectResult<()> {
        let patch = self.end_style()?;
        target.apply_style(&patch, WriteMode::Immediate)?;
        debug!(effect = Self::NAME, patch = %patch, "结束样式已写入");
        Ok(())
    }

    fn transition(&self) -> TransitionSpec {
        TransitionSpec {
            axis: self.axis,
            duration: self.speed(),
        }
    }
}
