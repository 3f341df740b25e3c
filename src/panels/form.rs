//! Declarative panel forms
//!
//! A handler describes its widgets with a [`FormSpec`]; whoever hosts the UI
//! (the terminal app, or a fixed-value double in tests) implements
//! [`Toolkit`] and answers with a [`PanelInput`]: the current value of every
//! widget plus whether the panel's submit button fired on this cycle.

use std::collections::HashMap;

/// Widget flavour and its constraints
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    TextArea,
    /// Masked single-line text
    Password,
    /// Filesystem path to read from
    Path,
    /// Calendar date as YYYY-MM-DD; empty means today
    Date,
    /// `#RRGGBB` color with a default
    Color { default: &'static str },
    /// Exactly one of `options`
    Select {
        options: &'static [&'static str],
        default: usize,
    },
    /// Any subset of `options`
    MultiSelect { options: &'static [&'static str] },
    /// Bounded integer moved with arrow keys
    Slider { min: i64, max: i64, default: i64 },
    /// Typed integer, kept within `min..=max`
    Number { min: i64, max: i64, default: i64 },
}

/// A labelled widget
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Rendered in the side column next to the main form
    pub aside: bool,
}

impl Field {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            aside: false,
        }
    }

    pub fn aside(mut self) -> Self {
        self.aside = true;
        self
    }

    /// Value the widget holds before the user touches it
    pub fn default_value(&self) -> Value {
        match &self.kind {
            FieldKind::Text
            | FieldKind::TextArea
            | FieldKind::Password
            | FieldKind::Path
            | FieldKind::Date => Value::Text(String::new()),
            FieldKind::Color { default } => Value::Text(default.to_string()),
            FieldKind::Select { options, default } => {
                Value::Text(options.get(*default).copied().unwrap_or("").to_string())
            }
            FieldKind::MultiSelect { .. } => Value::Many(Vec::new()),
            FieldKind::Slider { default, .. } | FieldKind::Number { default, .. } => {
                Value::Number(*default)
            }
        }
    }
}

/// All widgets of one panel plus its submit button
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSpec {
    pub fields: Vec<Field>,
    /// Button label; `None` for panels that render without a submit
    pub submit: Option<&'static str>,
}

impl FormSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn submit(mut self, label: &'static str) -> Self {
        self.submit = Some(label);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }
}

/// Current value of one widget
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Many(Vec<String>),
    Number(i64),
}

/// Widget values for one render cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelInput {
    values: HashMap<String, Value>,
    submitted: bool,
}

impl PanelInput {
    /// Every field at its default, not submitted
    pub fn defaults(form: &FormSpec) -> Self {
        Self {
            values: form
                .fields
                .iter()
                .map(|f| (f.key.to_string(), f.default_value()))
                .collect(),
            submitted: false,
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn with_text(self, key: &str, text: &str) -> Self {
        self.with(key, Value::Text(text.to_string()))
    }

    pub fn with_number(self, key: &str, n: i64) -> Self {
        self.with(key, Value::Number(n))
    }

    pub fn with_many(self, key: &str, items: &[&str]) -> Self {
        self.with(
            key,
            Value::Many(items.iter().map(|s| s.to_string()).collect()),
        )
    }

    pub fn submitted(mut self, submitted: bool) -> Self {
        self.submitted = submitted;
        self
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Whether the panel's submit button fired this cycle
    pub fn was_submitted(&self) -> bool {
        self.submitted
    }

    /// Text of a text-like widget ("" if absent)
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(Value::Text(s)) => s.as_str(),
            _ => "",
        }
    }

    /// Selected options of a multi-choice widget (empty if absent)
    pub fn many(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(Value::Many(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Value of a numeric widget (0 if absent)
    pub fn number(&self, key: &str) -> i64 {
        match self.values.get(key) {
            Some(Value::Number(n)) => *n,
            _ => 0,
        }
    }
}

/// Host of the widgets: declares them, reports their values
pub trait Toolkit {
    fn input(&self, label: &str, form: &FormSpec) -> PanelInput;
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &[&str] = &["Tutorial", "Vlog"];

    fn form() -> FormSpec {
        FormSpec::new()
            .field(Field::new("topic", "Video Topic", FieldKind::Text))
            .field(Field::new(
                "style",
                "Content Style",
                FieldKind::Select {
                    options: STYLES,
                    default: 1,
                },
            ))
            .field(Field::new(
                "duration",
                "Duration",
                FieldKind::Slider {
                    min: 3,
                    max: 30,
                    default: 10,
                },
            ))
            .field(Field::new(
                "color",
                "Primary Color",
                FieldKind::Color { default: "#FF0000" },
            ))
            .field(Field::new(
                "platforms",
                "Platforms",
                FieldKind::MultiSelect { options: STYLES },
            ))
            .submit("Go")
    }

    #[test]
    fn defaults_come_from_the_form() {
        let input = PanelInput::defaults(&form());
        assert_eq!(input.text("topic"), "");
        assert_eq!(input.text("style"), "Vlog");
        assert_eq!(input.number("duration"), 10);
        assert_eq!(input.text("color"), "#FF0000");
        assert!(input.many("platforms").is_empty());
        assert!(!input.was_submitted());
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let input = PanelInput::default();
        assert_eq!(input.text("nope"), "");
        assert_eq!(input.number("nope"), 0);
        assert!(input.many("nope").is_empty());
    }

    #[test]
    fn mismatched_kinds_read_as_empty() {
        let input = PanelInput::default().with_number("topic", 3);
        assert_eq!(input.text("topic"), "");
    }

    #[test]
    fn builder_overrides_defaults() {
        let input = PanelInput::defaults(&form())
            .with_text("topic", "Rust")
            .with_many("platforms", &["Vlog"])
            .submitted(true);
        assert_eq!(input.text("topic"), "Rust");
        assert_eq!(input.many("platforms"), ["Vlog".to_string()]);
        assert!(input.was_submitted());
    }
}
