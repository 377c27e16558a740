//! Configuration handling for the site

use crate::i18n::Locale;
use crate::submission::SubmissionTimings;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the configured locale
pub const LOCALE_ENV: &str = "YOGA_LOCALE";

/// Default time a notification stays on screen
const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// User configuration for the site
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Language shown at startup
    pub locale: Option<Locale>,
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the success banner stays up, in milliseconds
    pub success_display_ms: Option<u64>,
    /// How long notifications stay up, in milliseconds
    pub notification_ms: Option<u64>,
    /// Make the simulated transport fail every submission
    pub simulate_failure: Option<bool>,
    /// Extra message catalog merged over the built-in one
    pub messages_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "yoga-awareness", "yoga-contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::info!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Startup locale: a valid environment override wins over the file
    pub fn resolve_locale(&self, env_value: Option<&str>) -> Locale {
        env_value
            .and_then(|value| {
                let parsed = Locale::parse(value);
                if parsed.is_none() {
                    tracing::warn!("Ignoring unknown {LOCALE_ENV} value '{value}'");
                }
                parsed
            })
            .or(self.locale)
            .unwrap_or_default()
    }

    pub fn timings(&self) -> SubmissionTimings {
        let defaults = SubmissionTimings::default();
        SubmissionTimings {
            submit_delay: self
                .submit_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            success_display: self
                .success_display_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.success_display),
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms.unwrap_or(DEFAULT_NOTIFICATION_MS))
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }
}
