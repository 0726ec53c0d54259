//! Coercion boundary for renderer input.
//!
//! Hosts may hand the renderer any JSON value. Strings are parsed as
//! markdown; everything else is converted to its default string form and
//! shown as plain text.

use serde_json::Value;

/// Input accepted by the markdown renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkdownInput {
    /// Markdown source text.
    Text(String),
    /// Any non-string value.
    Other(Value),
}

impl MarkdownInput {
    /// Coerce a non-string value to its default string form.
    ///
    /// `null` → `"null"`, booleans and numbers → their literal form, arrays →
    /// elements joined with `,` (nulls become empty), objects →
    /// `"[object Object]"`.
    pub fn coerce(value: &Value) -> String {
        match value {
            Value::Null => "null".into(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    other => Self::coerce(other),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".into(),
        }
    }

    /// Text this input renders from.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Other(value) => Self::coerce(&value),
        }
    }
}

impl From<&str> for MarkdownInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MarkdownInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for MarkdownInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}
