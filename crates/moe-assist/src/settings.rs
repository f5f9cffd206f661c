//! Persisted assistant settings.
//!
//! Stored as JSON of the shape `{ "apiKey": "...", "prompts": { "SUMMARIZE": "..." } }`.
//! Loading never fails: missing or malformed data falls back to the defaults, and missing
//! fields are filled from the defaults.

use crate::action::AiAction;
use crate::error::SettingsError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Storage key the settings blob is kept under in key-value stores.
pub const SETTINGS_KEY: &str = "moe-editor-settings";

/// User-configurable assistant settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// API key for the model backend.
    pub api_key: String,
    /// Base prompt overrides by action.
    #[serde(deserialize_with = "known_prompts")]
    pub prompts: BTreeMap<AiAction, String>,
}

impl AppSettings {
    /// Settings with only an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The override for `action`, if one is set and non-empty.
    pub fn prompt_override(&self, action: AiAction) -> Option<&str> {
        self.prompts
            .get(&action)
            .map(String::as_str)
            .filter(|prompt| !prompt.trim().is_empty())
    }

    /// Override the base prompt of `action`. An empty prompt restores the default.
    pub fn set_prompt(&mut self, action: AiAction, prompt: impl Into<String>) {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            self.prompts.remove(&action);
        } else {
            self.prompts.insert(action, prompt);
        }
    }

    /// Drop every prompt override.
    pub fn reset_prompts(&mut self) {
        self.prompts.clear();
    }

    /// Parse settings JSON strictly.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse stored settings, falling back to the defaults when absent or malformed.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a file. A missing or unreadable file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json_or_default(Some(&json)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "failed to read settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Accept prompt maps keyed by action name, skipping keys that name no known action.
fn known_prompts<'de, D>(deserializer: D) -> Result<BTreeMap<AiAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, prompt)| match key.parse::<AiAction>() {
            Ok(action) => Some((action, prompt)),
            Err(err) => {
                tracing::debug!(%err, "ignoring prompt override");
                None
            }
        })
        .collect())
}
