//! Payload handed to the submission transport

use crate::i18n::Locale;
use crate::validation::FieldState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedField {
    pub name: String,
    pub value: String,
}

/// A contact form that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub locale: Locale,
    pub fields: Vec<SubmittedField>,
}

impl ContactSubmission {
    /// Build from validated fields, keeping their order and skipping empty optional ones
    pub fn from_fields(fields: &[FieldState], locale: Locale) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            locale,
            fields: fields
                .iter()
                .filter(|f| !f.is_empty())
                .map(|f| SubmittedField {
                    name: f.name.clone(),
                    value: f.trimmed_value.clone(),
                })
                .collect(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
