//! Declarative field constraints evaluated ahead of persistence.
//!
//! Each entity draft describes its fields once as a `const` table of
//! [`FieldSpec`]s and exposes its values through [`Document`]. The
//! evaluator walks the table in declaration order and reports every
//! violation, not just the first, so a client can fix a form in one pass.

use serde_json::Value;

use super::{messages, sanitizers, validators};

/// Named text grammar a field must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Phone,
    Url,
    LinkedinUrl,
    GithubUrl,
    HexColor,
}

impl Pattern {
    pub fn matches(self, input: &str) -> bool {
        match self {
            Pattern::Email => validators::is_valid_email(input),
            Pattern::Phone => validators::is_valid_phone(input),
            Pattern::Url => validators::is_valid_url(input),
            Pattern::LinkedinUrl => validators::is_valid_linkedin_url(input),
            Pattern::GithubUrl => validators::is_valid_github_url(input),
            Pattern::HexColor => validators::is_valid_hex_color(input),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MaxLength(usize),
    MinLength(usize),
    Range { min: i64, max: i64 },
    Min(i64),
    Pattern(Pattern),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key used by [`Document::value`], matches the JSON field name.
    pub name: &'static str,
    /// Human label used in violation messages.
    pub label: &'static str,
    pub constraints: &'static [Constraint],
}

/// Integer input as received from JSON, before it is known to be a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericInput {
    #[default]
    Missing,
    Value(i64),
    NotANumber,
}

impl NumericInput {
    /// Accepts JSON integers and numeric strings; `null` counts as missing.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => NumericInput::Missing,
            Some(Value::Number(n)) => n
                .as_i64()
                .map(NumericInput::Value)
                .unwrap_or(NumericInput::NotANumber),
            Some(Value::String(s)) if s.trim().is_empty() => NumericInput::Missing,
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(NumericInput::Value)
                .unwrap_or(NumericInput::NotANumber),
            Some(_) => NumericInput::NotANumber,
        }
    }

    pub fn value(self) -> Option<i64> {
        match self {
            NumericInput::Value(n) => Some(n),
            _ => None,
        }
    }

    pub fn value_or(self, default: i64) -> i64 {
        self.value().unwrap_or(default)
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        NumericInput::Value(n)
    }
}

/// Lifts loosely typed JSON request fields into draft values. Type
/// mismatches are collected so one response lists every wrongly typed field.
#[derive(Debug, Default)]
pub struct JsonFields {
    messages: Vec<String>,
}

impl JsonFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strings are sanitized; absent, `null` and blank strings are missing.
    pub fn text(&mut self, label: &str, value: Option<Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => sanitizers::sanitize_optional(Some(&s)),
            Some(_) => {
                self.messages.push(messages::not_a_string(label));
                None
            }
        }
    }

    /// Only JSON booleans count; absent or `null` leaves the default to the caller.
    pub fn flag(&mut self, label: &str, value: Option<Value>) -> Option<bool> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => Some(b),
            Some(_) => {
                self.messages.push(messages::not_a_boolean(label));
                None
            }
        }
    }

    pub fn finish<T>(self, draft: T) -> Result<T, ValidationErrors> {
        if self.messages.is_empty() {
            Ok(draft)
        } else {
            Err(ValidationErrors::new(self.messages))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(NumericInput),
}

pub trait Document {
    fn fields() -> &'static [FieldSpec];
    fn value(&self, field: &str) -> FieldValue<'_>;
}

/// Collected violations in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

pub fn validate_document<D: Document>(doc: &D) -> Result<(), ValidationErrors> {
    let mut messages = Vec::new();

    for spec in D::fields() {
        match doc.value(spec.name) {
            FieldValue::Text(raw) => check_text(spec, raw, &mut messages),
            FieldValue::Integer(input) => check_integer(spec, input, &mut messages),
        }
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { messages })
    }
}

fn is_required(spec: &FieldSpec) -> bool {
    spec.constraints.contains(&Constraint::Required)
}

fn check_text(spec: &FieldSpec, raw: Option<&str>, out: &mut Vec<String>) {
    let Some(text) = raw.filter(|t| !t.trim().is_empty()) else {
        if is_required(spec) {
            out.push(messages::required(spec.label));
        }
        return;
    };

    let len = text.chars().count();
    for constraint in spec.constraints {
        match *constraint {
            Constraint::MaxLength(max) if len > max => {
                out.push(messages::max_length(spec.label, max))
            }
            Constraint::MinLength(min) if len < min => {
                out.push(messages::min_length(spec.label, min))
            }
            Constraint::Pattern(pattern) if !pattern.matches(text) => {
                out.push(messages::invalid_format(spec.label))
            }
            _ => {}
        }
    }
}

fn check_integer(spec: &FieldSpec, input: NumericInput, out: &mut Vec<String>) {
    let n = match input {
        NumericInput::Missing => {
            if is_required(spec) {
                out.push(messages::required(spec.label));
            }
            return;
        }
        NumericInput::NotANumber => {
            out.push(messages::not_a_number(spec.label));
            return;
        }
        NumericInput::Value(n) => n,
    };

    for constraint in spec.constraints {
        match *constraint {
            Constraint::Range { min, max } if n < min || n > max => {
                out.push(messages::out_of_range(spec.label, min, max))
            }
            Constraint::Min(min) if n < min => out.push(messages::min_value(spec.label, min)),
            _ => {}
        }
    }
}
