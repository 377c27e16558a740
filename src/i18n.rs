//! Bilingual message catalog
//!
//! Every user-facing string is looked up by key and locale. Lookups never
//! return an empty string: a missing key falls back to the default locale and
//! then to the key itself.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog compiled into the binary
const EMBEDDED_MESSAGES: &str = include_str!("../assets/messages.json");

/// Display language of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Mr,
}

impl Locale {
    /// Locale used when a message is missing from the active one
    pub const FALLBACK: Locale = Locale::En;

    /// The other language (the site has exactly two)
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Mr,
            Self::Mr => Self::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Mr => "mr",
        }
    }

    /// Name of the language written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Mr => "मराठी",
        }
    }

    /// Parse a locale tag, tolerating case and region suffixes (`mr-IN`)
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "mr" => Some(Self::Mr),
            _ => None,
        }
    }
}

/// Keys of the messages produced by the validation and submission workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Required,
    InvalidEmail,
    InvalidPhone,
    NameTooShort,
    MessageTooShort,
    SubmissionSuccess,
    SubmissionFailure,
    SubmissionInProgress,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalid-email",
            Self::InvalidPhone => "invalid-phone",
            Self::NameTooShort => "name-too-short",
            Self::MessageTooShort => "message-too-short",
            Self::SubmissionSuccess => "submission-success",
            Self::SubmissionFailure => "submission-failure",
            Self::SubmissionInProgress => "submission-in-progress",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read message catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid message catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Mapping of (key, locale code) to localized text
///
/// Blocks are keyed by locale code so a catalog file may carry languages the
/// site cannot select yet; those are kept but never looked up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// The catalog shipped with the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_MESSAGES)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for code in catalog.messages.keys() {
            if Locale::parse(code).is_none() {
                tracing::warn!("Message catalog has entries for unsupported locale '{code}'");
            }
        }
        Ok(catalog)
    }

    /// Overlay messages from a JSON file on top of the current ones
    pub fn merge_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge(Self::from_json(&content)?);
        tracing::info!("Merged message catalog from {}", path.display());
        Ok(())
    }

    pub fn merge(&mut self, other: Catalog) {
        for (locale, entries) in other.messages {
            self.messages.entry(locale).or_default().extend(entries);
        }
    }

    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.messages
            .get(locale.code())
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Localized text for `key`; never empty
    pub fn text(&self, key: &str, locale: Locale) -> String {
        if let Some(text) = self.lookup(key, locale) {
            return text.to_string();
        }
        if locale != Locale::FALLBACK {
            if let Some(text) = self.lookup(key, Locale::FALLBACK) {
                tracing::warn!(
                    "Message '{key}' missing for locale {}, using {}",
                    locale.code(),
                    Locale::FALLBACK.code()
                );
                return text.to_string();
            }
        }
        tracing::warn!("Message '{key}' missing from catalog");
        key.to_string()
    }

    pub fn message(&self, key: MessageKey, locale: Locale) -> String {
        self.text(key.as_str(), locale)
    }

    /// Localized text with `{name}` placeholders substituted in order
    pub fn format(&self, key: &str, locale: Locale, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key, locale), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
