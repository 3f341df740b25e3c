//! Editable widget state behind each panel's form
//!
//! `FormState` holds the live values of one panel's widgets and the focus
//! cursor. `FormBook` keeps one `FormState` per panel label for the whole
//! session and answers the router as its [`Toolkit`], so values survive
//! navigating away and back.

use crate::panels::{Field, FieldKind, FormSpec, PanelInput, Toolkit, Value};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

/// What a key did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key not meant for the form
    Ignored,
    /// Cursor or a value changed
    Changed,
    /// The submit button was pressed
    Submit,
}

/// Live values and cursor for one panel
#[derive(Debug, Clone)]
pub struct FormState {
    spec: FormSpec,
    values: PanelInput,
    /// Index into fields; `fields.len()` is the submit button
    cursor: usize,
    /// Highlighted option inside a multi-choice field
    option_cursor: usize,
}

impl FormState {
    pub fn new(spec: FormSpec) -> Self {
        let values = PanelInput::defaults(&spec);
        Self {
            spec,
            values,
            cursor: 0,
            option_cursor: 0,
        }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn values(&self) -> &PanelInput {
        &self.values
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    /// Number of focus stops (fields plus the submit button, if any)
    fn stops(&self) -> usize {
        self.spec.fields.len() + usize::from(self.spec.submit.is_some())
    }

    pub fn on_submit_button(&self) -> bool {
        self.spec.submit.is_some() && self.cursor == self.spec.fields.len()
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.spec.fields.get(self.cursor)
    }

    /// Whether there is anything to focus at all
    pub fn is_interactive(&self) -> bool {
        self.stops() > 0
    }

    pub fn next(&mut self) {
        if self.stops() > 0 {
            self.cursor = (self.cursor + 1) % self.stops();
            self.option_cursor = 0;
        }
    }

    pub fn prev(&mut self) {
        if self.stops() > 0 {
            self.cursor = (self.cursor + self.stops() - 1) % self.stops();
            self.option_cursor = 0;
        }
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.set(key, value);
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next();
                FormAction::Changed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev();
                FormAction::Changed
            }
            KeyCode::Enter => {
                if self.on_submit_button() {
                    return FormAction::Submit;
                }
                match self.focused_field().map(|f| &f.kind) {
                    Some(FieldKind::TextArea) => self.edit_text(|s| s.push('\n')),
                    Some(_) => {
                        self.next();
                        FormAction::Changed
                    }
                    None => FormAction::Ignored,
                }
            }
            KeyCode::Left => self.step(-1),
            KeyCode::Right => self.step(1),
            KeyCode::Char(' ') if self.is_multi_select() => self.toggle_option(),
            KeyCode::Char(c) => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => FormAction::Ignored,
        }
    }

    fn is_multi_select(&self) -> bool {
        matches!(
            self.focused_field().map(|f| &f.kind),
            Some(FieldKind::MultiSelect { .. })
        )
    }

    /// Left/Right: cycle choices, move sliders, walk multi-choice options
    fn step(&mut self, delta: i64) -> FormAction {
        let Some(field) = self.focused_field().cloned() else {
            return FormAction::Ignored;
        };

        match field.kind {
            FieldKind::Select { options, .. } if !options.is_empty() => {
                let current = self.values.text(field.key);
                let idx = options.iter().position(|o| *o == current).unwrap_or(0) as i64;
                let len = options.len() as i64;
                let next = (idx + delta).rem_euclid(len) as usize;
                self.values.set(field.key, Value::Text(options[next].to_string()));
                FormAction::Changed
            }
            FieldKind::Slider { min, max, .. } => {
                let step = ((max - min) / 50).max(1);
                let n = (self.values.number(field.key) + delta * step).clamp(min, max);
                self.values.set(field.key, Value::Number(n));
                FormAction::Changed
            }
            FieldKind::Number { min, max, .. } => {
                let n = self.values.number(field.key).saturating_add(delta).clamp(min, max);
                self.values.set(field.key, Value::Number(n));
                FormAction::Changed
            }
            FieldKind::MultiSelect { options } if !options.is_empty() => {
                let len = options.len() as i64;
                self.option_cursor = (self.option_cursor as i64 + delta).rem_euclid(len) as usize;
                FormAction::Changed
            }
            _ => FormAction::Ignored,
        }
    }

    fn toggle_option(&mut self) -> FormAction {
        let Some(Field {
            key,
            kind: FieldKind::MultiSelect { options },
            ..
        }) = self.focused_field().cloned()
        else {
            return FormAction::Ignored;
        };
        let Some(option) = options.get(self.option_cursor) else {
            return FormAction::Ignored;
        };

        let mut selected = self.values.many(key).to_vec();
        if let Some(pos) = selected.iter().position(|s| s == option) {
            selected.remove(pos);
        } else {
            selected.push(option.to_string());
        }
        // Keep menu order regardless of toggle order
        selected.sort_by_key(|s| options.iter().position(|o| o == s));
        self.values.set(key, Value::Many(selected));
        FormAction::Changed
    }

    fn type_char(&mut self, c: char) -> FormAction {
        match self.focused_field().map(|f| f.kind.clone()) {
            Some(FieldKind::Number { min, max, .. }) => match c.to_digit(10) {
                Some(d) => {
                    let key = self.spec.fields[self.cursor].key;
                    let n = self
                        .values
                        .number(key)
                        .saturating_mul(10)
                        .saturating_add(i64::from(d));
                    self.values.set(key, Value::Number(n.clamp(min, max)));
                    FormAction::Changed
                }
                None => FormAction::Ignored,
            },
            Some(kind) if is_textual(&kind) => self.edit_text(|s| s.push(c)),
            _ => FormAction::Ignored,
        }
    }

    fn backspace(&mut self) -> FormAction {
        match self.focused_field().map(|f| f.kind.clone()) {
            Some(FieldKind::Number { min, max, .. }) => {
                let key = self.spec.fields[self.cursor].key;
                let n = (self.values.number(key) / 10).clamp(min, max);
                self.values.set(key, Value::Number(n));
                FormAction::Changed
            }
            Some(kind) if is_textual(&kind) => self.edit_text(|s| {
                s.pop();
            }),
            _ => FormAction::Ignored,
        }
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) -> FormAction {
        let Some(field) = self.focused_field() else {
            return FormAction::Ignored;
        };
        let key = field.key;
        let mut text = self.values.text(key).to_string();
        edit(&mut text);
        self.values.set(key, Value::Text(text));
        FormAction::Changed
    }
}

fn is_textual(kind: &FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::Text
            | FieldKind::TextArea
            | FieldKind::Password
            | FieldKind::Path
            | FieldKind::Date
            | FieldKind::Color { .. }
    )
}

/// Every panel's form state for the session, plus the one-shot submit flag
#[derive(Debug, Default)]
pub struct FormBook {
    forms: HashMap<String, FormState>,
    armed: Option<String>,
}

impl FormBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `label`, created from `spec` on first use
    ///
    /// A panel whose form changed shape (e.g. the gate switched it to
    /// Settings) gets fresh state.
    pub fn entry(&mut self, label: &str, spec: FormSpec) -> &mut FormState {
        let stale = self.forms.get(label).is_some_and(|f| f.spec != spec);
        if stale {
            self.forms.remove(label);
        }
        self.forms
            .entry(label.to_string())
            .or_insert_with(|| FormState::new(spec))
    }

    pub fn get(&self, label: &str) -> Option<&FormState> {
        self.forms.get(label)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut FormState> {
        self.forms.get_mut(label)
    }

    /// Mark `label`'s submit button as fired for the next dispatch only
    pub fn arm(&mut self, label: &str) {
        self.armed = Some(label.to_string());
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }
}

impl Toolkit for FormBook {
    fn input(&self, label: &str, form: &FormSpec) -> PanelInput {
        let values = self
            .forms
            .get(label)
            .filter(|f| &f.spec == form)
            .map(|f| f.values.clone())
            .unwrap_or_else(|| PanelInput::defaults(form));
        values.submitted(self.armed.as_deref() == Some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const STYLES: &[&str] = &["Tutorial", "Vlog", "Review"];
    const PLATFORMS: &[&str] = &["Instagram", "TikTok", "Twitter"];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn spec() -> FormSpec {
        FormSpec::new()
            .field(Field::new("topic", "Topic", FieldKind::Text))
            .field(Field::new(
                "style",
                "Style",
                FieldKind::Select {
                    options: STYLES,
                    default: 0,
                },
            ))
            .field(Field::new(
                "minutes",
                "Minutes",
                FieldKind::Slider {
                    min: 3,
                    max: 30,
                    default: 10,
                },
            ))
            .field(Field::new(
                "platforms",
                "Platforms",
                FieldKind::MultiSelect { options: PLATFORMS },
            ))
            .field(Field::new(
                "days",
                "Days",
                FieldKind::Number {
                    min: 1,
                    max: 365,
                    default: 30,
                },
            ))
            .submit("Go")
    }

    #[test]
    fn typing_edits_the_focused_text_field() {
        let mut form = FormState::new(spec());
        for c in "rust".chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.values().text("topic"), "rus");
    }

    #[test]
    fn arrows_cycle_choices_and_clamp_sliders() {
        let mut form = FormState::new(spec());
        form.next();
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.values().text("style"), "Review");

        form.next();
        for _ in 0..40 {
            form.handle_key(key(KeyCode::Right));
        }
        assert_eq!(form.values().number("minutes"), 30);
    }

    #[test]
    fn space_toggles_options_in_menu_order() {
        let mut form = FormState::new(spec());
        form.next();
        form.next();
        form.next();
        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Char(' ')));
        form.handle_key(key(KeyCode::Left));
        form.handle_key(key(KeyCode::Left));
        form.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(form.values().many("platforms"), ["Instagram", "Twitter"]);

        form.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(form.values().many("platforms"), ["Twitter"]);
    }

    #[test]
    fn typed_numbers_stay_within_bounds() {
        let mut form = FormState::new(spec());
        for _ in 0..4 {
            form.next();
        }
        for c in "99999999999999999999999".chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(form.values().number("days"), 365);

        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.values().number("days"), 365);

        for _ in 0..3 {
            form.handle_key(key(KeyCode::Backspace));
        }
        assert_eq!(form.values().number("days"), 1);
    }

    #[test]
    fn enter_submits_only_on_the_button() {
        let mut form = FormState::new(spec());
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Changed);
        form.handle_key(key(KeyCode::BackTab));
        form.handle_key(key(KeyCode::BackTab));
        assert!(form.on_submit_button());
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    }

    #[test]
    fn book_reports_values_and_one_shot_submit() {
        let mut book = FormBook::new();
        book.entry("Script", spec())
            .set("topic", Value::Text("Rust".into()));

        book.arm("Script");
        let input = book.input("Script", &spec());
        assert!(input.was_submitted());
        assert_eq!(input.text("topic"), "Rust");
        assert!(!book.input("Other", &spec()).was_submitted());

        book.disarm();
        assert!(!book.input("Script", &spec()).was_submitted());
    }

    #[test]
    fn mismatched_form_falls_back_to_defaults() {
        let mut book = FormBook::new();
        book.entry("Script", spec())
            .set("topic", Value::Text("Rust".into()));
        let other = FormSpec::new().field(Field::new("topic", "Topic", FieldKind::TextArea));
        assert_eq!(book.input("Script", &other).text("topic"), "");
    }
}
