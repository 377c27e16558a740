//! Field validation rules

use super::field::{FieldKind, FieldState};
use crate::i18n::{Catalog, Locale, MessageKey};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum length of a name, in characters
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum length of a message, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field is required")]
    Required,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("message must be at least 10 characters")]
    MessageTooShort,
}

impl ValidationError {
    pub fn message_key(self) -> MessageKey {
        match self {
            Self::Required => MessageKey::Required,
            Self::InvalidEmail => MessageKey::InvalidEmail,
            Self::InvalidPhone => MessageKey::InvalidPhone,
            Self::NameTooShort => MessageKey::NameTooShort,
            Self::MessageTooShort => MessageKey::MessageTooShort,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+]?[1-9][0-9]{0,15}$").expect("phone pattern is a valid regex")
    })
}

/// Drop the separators people type into phone numbers: whitespace, `-`, `(`, `)`
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Apply the presence rule and then the kind rule; first failure wins.
///
/// Kind rules only run on non-empty values, so an empty optional field passes.
pub fn check(value: &str, kind: FieldKind, required: bool) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Required => Ok(()),
        FieldKind::Email if !email_pattern().is_match(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Phone if !phone_pattern().is_match(&normalize_phone(value)) => {
            Err(ValidationError::InvalidPhone)
        }
        FieldKind::Name if value.chars().count() < MIN_NAME_CHARS => {
            Err(ValidationError::NameTooShort)
        }
        FieldKind::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(ValidationError::MessageTooShort)
        }
        FieldKind::Email | FieldKind::Phone | FieldKind::Name | FieldKind::Message => Ok(()),
    }
}

/// Validate one field and attach a message in `locale` when it fails
pub fn validate(field: FieldState, kind: FieldKind, locale: Locale, catalog: &Catalog) -> FieldState {
    match check(&field.trimmed_value, kind, field.required) {
        Ok(()) => field.into_valid(),
        Err(err) => {
            tracing::debug!("Field '{}' failed validation: {err}", field.name);
            let message = catalog.message(err.message_key(), locale);
            field.into_invalid(message)
        }
    }
}
