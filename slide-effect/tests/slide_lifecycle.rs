//! # 滑入效果集成测试
//!
//! 测试 宿主组件 → SlideEffect → 样式写入 的完整链路。
//! 这里的组件是测试内实现的 `StyleTarget`，不依赖任何渲染环境。

use slide_effect::{
    Attachment, Axis, ConfigError, Direction, Effect, EffectError, HookKind, SlideEffect,
    SlideOptions, StyleError, StylePatch, StyleTarget, WriteMode,
};

/// 模拟宿主组件：按顺序记录收到的每一条声明
#[derive(Default)]
struct Component {
    id: &'static str,
    log: Vec<(String, String)>,
    locked: bool,
}

impl Component {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    fn last(&self, property: &str) -> Option<&str> {
        self.log
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl StyleTarget for Component {
    fn apply_style(&mut self, patch: &StylePatch, _mode: WriteMode) -> Result<(), StyleError> {
        if self.locked {
            return Err(StyleError::Rejected {
                property: patch.iter().map(|(p, _)| p).collect::<Vec<_>>().join(","),
                reason: format!("{} is locked", self.id),
            });
        }
        self.log.extend(
            patch
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string())),
        );
        Ok(())
    }
}

/// 测试宿主的完整调用顺序：先 before，再 contents，最后读取过渡参数
#[test]
fn test_host_drives_two_phases() {
    let mut effect = SlideEffect::new();
    effect.set_position("absolute").unwrap();
    effect.set_direction(Direction::Right).unwrap();
    effect.set_init_value("0rem").unwrap();
    effect.set_value("12px").unwrap();

    let mut card = Component::new("card");

    // 1. 起始样式
    effect.before(&mut card).unwrap();
    assert_eq!(
        card.log,
        vec![
            ("position".to_string(), "absolute".to_string()),
            ("left".to_string(), "0rem".to_string()),
        ]
    );

    // 2. 结束样式
    effect.contents(&mut card).unwrap();
    assert_eq!(card.last("left"), Some("12px"));

    // 3. 过渡参数
    let spec = effect.transition();
    assert_eq!(spec.axis, Axis::Left);
    assert_eq!(spec.millis(), 300);
}

/// 测试同一个效果可以依次应用到多个组件
#[test]
fn test_one_effect_many_components() {
    let effect = SlideEffect::shorthand("top", "3rem").unwrap();
    let mut header = Component::new("header");
    let mut footer = Component::new("footer");

    for component in [&mut header, &mut footer] {
        let spec = Attachment::new(&effect, component).finish().unwrap();
        assert_eq!(spec.axis, Axis::Top);
    }

    assert_eq!(header.log, footer.log);
    assert_eq!(header.last("top"), Some("-3rem"));
}

/// 测试重新配置后，下一次运行使用新的配置
#[test]
fn test_reconfigure_between_runs() {
    let mut effect = SlideEffect::shorthand("left", "5rem").unwrap();
    let mut panel = Component::new("panel");

    Attachment::new(&effect, &mut panel).finish().unwrap();
    assert_eq!(panel.last("left"), Some("-5rem"));

    let options = SlideOptions::from_json(r#"{ "direction": "bottom", "value": "10px", "speed": 150 }"#)
        .unwrap();
    effect.configure(options).unwrap();

    let spec = Attachment::new(&effect, &mut panel).finish().unwrap();
    assert_eq!(panel.last("top"), Some("10px"));
    assert_eq!(spec.axis, Axis::Top);
    assert_eq!(spec.millis(), 150);
}

/// 测试 before 钩子中的组件错误被包装并保留原始错误
#[test]
fn test_locked_component_fails_in_before() {
    let effect = SlideEffect::shorthand("left", "1rem").unwrap();
    let mut locked = Component::new("locked");
    locked.locked = true;

    let err = Attachment::new(&effect, &mut locked).finish().unwrap_err();
    match err {
        EffectError::HookExecution {
            hook: HookKind::Before,
            ref source,
            ..
        } => {
            assert!(matches!(**source, EffectError::Style(_)));
        }
        other => panic!("Expected HookExecution, got {:?}", other),
    }
    assert!(locked.log.is_empty());
}

/// 测试缺少 value 时 contents 报错，且不写入结束样式
#[test]
fn test_missing_value_surfaces_to_host() {
    let effect = SlideEffect::new();
    let mut widget = Component::new("widget");

    let err = effect.contents(&mut widget).unwrap_err();
    assert_eq!(
        err,
        EffectError::Config(ConfigError::Missing {
            key: "value".to_string()
        })
    );
    assert!(widget.log.is_empty());
}
