//! Error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while requesting or applying an assist result.
pub enum AssistError {
    #[error("no API key configured, add one in settings")]
    /// The settings carry no API key, so no request was made.
    MissingApiKey,

    #[error("an assist request is already running")]
    /// A request is in flight; only a regenerate may supersede it.
    Busy,

    #[error("nothing to process")]
    /// The text to process is empty or whitespace only.
    EmptyInput,

    #[error("no assist result to {0}")]
    /// There is no result panel to act on.
    NoResult(&'static str),

    #[error("ticket {0} is no longer current")]
    /// A response arrived for a request that was superseded or already completed.
    StaleTicket(u64),

    #[error("assist backend failed: {0}")]
    /// The model backend reported a failure.
    Backend(String),
}

#[derive(Debug, Error)]
/// Errors produced while reading or writing persisted settings.
pub enum SettingsError {
    #[error("settings JSON error: {0}")]
    /// The stored settings are not valid JSON of the expected shape.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),
}
