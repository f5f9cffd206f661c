#![warn(missing_docs)]
//! Moe Assist - AI text actions for the Moe editor
//!
//! `moe-assist` sits on top of [`moe_core`] and turns a pane's selection (or whole document)
//! into a language-model request, then places the answer back into the document through the
//! pane's undo history.
//!
//! - [`action`] - the available actions
//! - [`prompts`] - prompt assembly
//! - [`settings`] - persisted API key and prompt overrides
//! - [`backend`] - the trait a model client implements
//! - [`session`] - request tickets, the result panel and applied-result history
//!
//! The crate performs no I/O of its own besides reading and writing the settings file; the
//! host supplies an [`AssistBackend`].
//!
//! # Example
//!
//! ```rust
//! use moe_assist::{AiAction, AppSettings, AssistError, AssistRequest, AssistSession};
//! use moe_core::{Document, EditorPane};
//! use std::time::Instant;
//!
//! let mut document = Document::new("doc1", "notes.md", "teh quick fox");
//! let mut pane = EditorPane::new(&document);
//! let settings = AppSettings::with_api_key("sk-test");
//! let mut session = AssistSession::new();
//! let now = Instant::now();
//!
//! let mut backend = |_: &AssistRequest| -> Result<String, AssistError> {
//!     Ok("the quick fox".to_string())
//! };
//! session
//!     .run(&mut backend, &mut pane, &document, AiAction::FixGrammar.into(), &settings, now)
//!     .unwrap();
//! assert_eq!(session.apply_label(), Some("Replace all"));
//!
//! session.apply(&mut pane, &mut document).unwrap();
//! assert_eq!(document.content(), "the quick fox");
//! assert!(pane.can_undo());
//! ```

pub mod action;
pub mod backend;
pub mod error;
pub mod prompts;
pub mod session;
pub mod settings;

pub use action::{AiAction, UnknownAction};
pub use backend::{AssistBackend, AssistRequest};
pub use error::{AssistError, SettingsError};
pub use prompts::{
    DEFAULT_CUSTOM_INSTRUCTION, STRICT_OUTPUT, base_prompt, build_prompt, default_prompt,
};
pub use session::{
    AiHistoryItem, AssistResult, AssistSession, Invocation, Placement, ResultStats, Ticket,
};
pub use settings::{AppSettings, SETTINGS_KEY};
