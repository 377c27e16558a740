//! Field value objects

use serde::{Deserialize, Serialize};

/// Rule applied to a non-empty value beyond the presence check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Required,
    Email,
    Phone,
    Name,
    Message,
}

/// Result of one validation pass over a single field
///
/// `is_valid == false` always comes with a non-empty `error_message`, and a
/// valid field always has an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub name: String,
    pub raw_value: String,
    pub trimmed_value: String,
    pub required: bool,
    pub is_valid: bool,
    pub error_message: String,
}

impl FieldState {
    /// Capture a field's current value; starts out valid until validated
    pub fn new(name: &str, raw_value: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            raw_value: raw_value.to_string(),
            trimmed_value: raw_value.trim().to_string(),
            required,
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed_value.is_empty()
    }

    /// Required fields are always checked; optional ones only once filled in
    pub fn needs_validation(&self) -> bool {
        self.required || !self.is_empty()
    }

    pub(crate) fn into_valid(mut self) -> Self {
        self.is_valid = true;
        self.error_message.clear();
        self
    }

    pub(crate) fn into_invalid(mut self, message: String) -> Self {
        debug_assert!(!message.is_empty(), "invalid field without a message");
        self.is_valid = false;
        self.error_message = message;
        self
    }
}
