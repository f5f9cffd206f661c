//! Assist action kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A text transformation the assistant can perform.
///
/// Serialized in `SCREAMING_SNAKE_CASE` (`"FIX_GRAMMAR"`), the form used as prompt keys in the
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiAction {
    /// Condense the text.
    Summarize,
    /// Correct grammar and spelling, keeping Markdown intact.
    FixGrammar,
    /// Continue and enrich the text.
    Expand,
    /// Rewrite machine-sounding prose so it reads naturally.
    ReduceAiFlavor,
    /// Translate between Chinese and English.
    Translate,
    /// Follow a free-form instruction typed by the user.
    Custom,
}

impl AiAction {
    /// Every action, in menu order.
    pub const ALL: [AiAction; 6] = [
        AiAction::Summarize,
        AiAction::FixGrammar,
        AiAction::Expand,
        AiAction::ReduceAiFlavor,
        AiAction::Translate,
        AiAction::Custom,
    ];

    /// Actions whose base prompt can be overridden in settings.
    pub const CONFIGURABLE: [AiAction; 5] = [
        AiAction::Summarize,
        AiAction::FixGrammar,
        AiAction::Expand,
        AiAction::ReduceAiFlavor,
        AiAction::Translate,
    ];

    /// Settings key of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            AiAction::Summarize => "SUMMARIZE",
            AiAction::FixGrammar => "FIX_GRAMMAR",
            AiAction::Expand => "EXPAND",
            AiAction::ReduceAiFlavor => "REDUCE_AI_FLAVOR",
            AiAction::Translate => "TRANSLATE",
            AiAction::Custom => "CUSTOM",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            AiAction::Summarize => "Summarize",
            AiAction::FixGrammar => "Fix grammar",
            AiAction::Expand => "Expand",
            AiAction::ReduceAiFlavor => "Humanize",
            AiAction::Translate => "Translate",
            AiAction::Custom => "Custom instruction",
        }
    }
}

impl fmt::Display for AiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown assist action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for AiAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_keys() {
        for action in AiAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            assert_eq!(action.as_str().parse::<AiAction>(), Ok(action));
        }
        assert!("fix_grammar".parse::<AiAction>().is_err());
    }
}
