//! Assist request lifecycle.
//!
//! The model call happens outside this crate and may take seconds, so an [`AssistSession`]
//! splits it into steps the host drives:
//!
//! 1. [`AssistSession::begin`] captures the pane's selection, builds the prompt and hands out
//!    an [`AssistRequest`] carrying a [`Ticket`].
//! 2. The host runs the request against its backend and reports back through
//!    [`AssistSession::complete`]. Only the most recent ticket is accepted; responses to
//!    superseded tickets are dropped.
//! 3. The result is shown in a panel where it may be edited or regenerated
//!    ([`AssistSession::regenerate`]) and is finally applied ([`AssistSession::apply`]) or
//!    discarded.
//!
//! [`AssistSession::run`] does all of this synchronously for backends that block.

use crate::action::AiAction;
use crate::backend::{AssistBackend, AssistRequest};
use crate::error::AssistError;
use crate::prompts::build_prompt;
use crate::settings::AppSettings;
use moe_core::{CharIndex, Document, EditorPane, Slot, ToastKind, Workspace, splice_chars};
use std::ops::Range;
use std::time::{Instant, SystemTime};

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Get the underlying numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What to run: an action plus, for [`AiAction::Custom`], the user's instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The action.
    pub action: AiAction,
    /// Free-form instruction for [`AiAction::Custom`].
    pub instruction: Option<String>,
}

impl Invocation {
    /// A custom instruction typed into the inline prompt.
    pub fn custom(instruction: impl Into<String>) -> Self {
        Self {
            action: AiAction::Custom,
            instruction: Some(instruction.into()),
        }
    }
}

impl From<AiAction> for Invocation {
    fn from(action: AiAction) -> Self {
        Self {
            action,
            instruction: None,
        }
    }
}

/// Where an applied result goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Replace the selection captured when the request was made.
    ReplaceSelection,
    /// Replace the whole document (grammar fixes without a selection).
    ReplaceAll,
    /// Append after a blank line.
    Append,
}

impl Placement {
    /// Placement for a request made with `selection` (char offsets).
    pub fn choose(selection: &Range<usize>, action: AiAction) -> Self {
        if selection.end > selection.start {
            Placement::ReplaceSelection
        } else if action == AiAction::FixGrammar {
            Placement::ReplaceAll
        } else {
            Placement::Append
        }
    }

    /// Label for the panel's apply button.
    pub fn label(self) -> &'static str {
        match self {
            Placement::ReplaceSelection => "Replace selection",
            Placement::ReplaceAll => "Replace all",
            Placement::Append => "Insert at end",
        }
    }

    /// The document text after placing `content` into `text`.
    ///
    /// The selection is clamped to `text`, which may have changed since the request.
    pub fn apply(self, text: &str, selection: &Range<usize>, content: &str) -> String {
        match self {
            Placement::ReplaceSelection => splice_chars(text, selection.clone(), content),
            Placement::ReplaceAll => content.to_string(),
            Placement::Append => format!("{text}\n\n{content}"),
        }
    }
}

/// Character and word counts shown under a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultStats {
    /// Unicode scalar values.
    pub chars: usize,
    /// Whitespace-separated words.
    pub words: usize,
}

impl ResultStats {
    /// Count `text`.
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }
}

/// A completed request waiting in the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistResult {
    /// The action that produced it.
    pub action: AiAction,
    /// The text that was sent.
    pub source_text: String,
    /// Selection captured at request time (empty when the whole document was sent).
    pub selection: Range<usize>,
    /// Custom instruction, if any.
    pub instruction: Option<String>,
    /// The model's answer, possibly edited in the panel.
    pub content: String,
}

impl AssistResult {
    /// Where applying this result puts it.
    pub fn placement(&self) -> Placement {
        Placement::choose(&self.selection, self.action)
    }

    /// Counts for the panel footer.
    pub fn stats(&self) -> ResultStats {
        ResultStats::of(&self.content)
    }
}

/// An applied result, kept for the panel's history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiHistoryItem {
    /// Sequential id within the session.
    pub id: u64,
    /// When the result was applied.
    pub timestamp: SystemTime,
    /// The action that produced it.
    pub action: AiAction,
    /// The applied text.
    pub content: String,
}

#[derive(Debug, Clone)]
struct Pending {
    ticket: Ticket,
    action: AiAction,
    text: String,
    selection: Range<usize>,
    instruction: Option<String>,
    regenerate: bool,
}

/// Assist state for one editor pane.
#[derive(Debug, Default)]
pub struct AssistSession {
    next_ticket: u64,
    next_history_id: u64,
    pending: Option<Pending>,
    result: Option<AssistResult>,
    history: Vec<AiHistoryItem>,
}

impl AssistSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `invocation` on `document`.
    ///
    /// Works on the selection captured by the pane (see [`EditorPane::take_assist_selection`])
    /// or on the whole text when nothing is selected. Fails with
    /// [`AssistError::EmptyInput`] for whitespace-only documents, [`AssistError::Busy`]
    /// while another request runs and [`AssistError::MissingApiKey`] (with an error toast)
    /// when no key is configured.
    pub fn begin(
        &mut self,
        pane: &mut EditorPane,
        document: &Document,
        invocation: Invocation,
        settings: &AppSettings,
        now: Instant,
    ) -> Result<AssistRequest, AssistError> {
        if self.pending.is_some() {
            return Err(AssistError::Busy);
        }

        let text = document.content();
        if text.trim().is_empty() {
            return Err(AssistError::EmptyInput);
        }

        let index = CharIndex::new(text);
        let selection = index.clamp(pane.take_assist_selection());
        let source = if selection.end > selection.start {
            text[index.byte_range(selection.clone())].to_string()
        } else {
            text.to_string()
        };

        if !settings.has_api_key() {
            let err = AssistError::MissingApiKey;
            pane.show_toast(err.to_string(), ToastKind::Error, now);
            return Err(err);
        }

        pane.show_toast("AI is thinking...", ToastKind::Loading, now);
        let pending = Pending {
            ticket: self.issue_ticket(),
            action: invocation.action,
            text: source,
            selection,
            instruction: invocation.instruction,
            regenerate: false,
        };
        let request = request_for(&pending, settings);
        tracing::debug!(
            ticket = pending.ticket.get(),
            action = %pending.action,
            chars = pending.text.chars().count(),
            "assist request issued"
        );
        self.pending = Some(pending);
        Ok(request)
    }

    /// Ask again for the result currently in the panel.
    ///
    /// Supersedes any outstanding request: a late answer to the earlier ticket is dropped.
    pub fn regenerate(
        &mut self,
        pane: &mut EditorPane,
        settings: &AppSettings,
        now: Instant,
    ) -> Result<AssistRequest, AssistError> {
        let Some(result) = &self.result else {
            return Err(AssistError::NoResult("regenerate"));
        };
        if !settings.has_api_key() {
            let err = AssistError::MissingApiKey;
            pane.show_toast(err.to_string(), ToastKind::Error, now);
            return Err(err);
        }

        let (action, text, selection, instruction) = (
            result.action,
            result.source_text.clone(),
            result.selection.clone(),
            result.instruction.clone(),
        );
        if let Some(previous) = &self.pending {
            tracing::debug!(ticket = previous.ticket.get(), "superseding assist request");
        }
        let pending = Pending {
            ticket: self.issue_ticket(),
            action,
            text,
            selection,
            instruction,
            regenerate: true,
        };
        let request = request_for(&pending, settings);
        self.pending = Some(pending);
        Ok(request)
    }

    /// Deliver the backend's answer for `ticket`.
    ///
    /// An empty answer keeps the input text. A failure is surfaced as an error toast and
    /// returned; the document is never touched here.
    pub fn complete(
        &mut self,
        pane: &mut EditorPane,
        ticket: Ticket,
        response: Result<String, AssistError>,
        now: Instant,
    ) -> Result<(), AssistError> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                tracing::debug!(ticket = ticket.get(), "dropping response to stale assist ticket");
                return Err(AssistError::StaleTicket(ticket.get()));
            }
        };

        match response {
            Ok(content) => {
                let content = if content.is_empty() {
                    pending.text.clone()
                } else {
                    content
                };
                if pending.regenerate {
                    // The panel may have been closed while regenerating.
                    if let Some(result) = self.result.as_mut() {
                        result.content = content;
                    }
                } else {
                    self.result = Some(AssistResult {
                        action: pending.action,
                        source_text: pending.text,
                        selection: pending.selection,
                        instruction: pending.instruction,
                        content,
                    });
                    pane.show_toast("Done", ToastKind::Success, now);
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, action = %pending.action, "assist request failed");
                let message = if pending.regenerate {
                    "Regeneration failed".to_string()
                } else {
                    err.to_string()
                };
                pane.show_toast(message, ToastKind::Error, now);
                Err(err)
            }
        }
    }

    /// Begin, call `backend` and complete in one step.
    pub fn run(
        &mut self,
        backend: &mut dyn AssistBackend,
        pane: &mut EditorPane,
        document: &Document,
        invocation: Invocation,
        settings: &AppSettings,
        now: Instant,
    ) -> Result<(), AssistError> {
        let request = self.begin(pane, document, invocation, settings, now)?;
        let response = backend.complete(&request);
        self.complete(pane, request.ticket, response, now)
    }

    /// Replace the panel's text (the user edited it before applying).
    pub fn edit_result(&mut self, content: impl Into<String>) -> Result<(), AssistError> {
        let result = self.result.as_mut().ok_or(AssistError::NoResult("edit"))?;
        result.content = content.into();
        Ok(())
    }

    /// Close the panel without applying.
    pub fn discard(&mut self) {
        self.result = None;
    }

    /// Record the panel's result in the history and return the new document text for
    /// `current`. Closes the panel.
    pub fn resolve(&mut self, current: &str) -> Result<String, AssistError> {
        let result = self.result.take().ok_or(AssistError::NoResult("apply"))?;
        self.next_history_id += 1;
        self.history.insert(
            0,
            AiHistoryItem {
                id: self.next_history_id,
                timestamp: SystemTime::now(),
                action: result.action,
                content: result.content.clone(),
            },
        );
        Ok(result
            .placement()
            .apply(current, &result.selection, &result.content))
    }

    /// Apply the panel's result to `document` through the pane's edit pipeline.
    pub fn apply(
        &mut self,
        pane: &mut EditorPane,
        document: &mut Document,
    ) -> Result<bool, AssistError> {
        let text = self.resolve(document.content())?;
        Ok(pane.apply_edit(document, text))
    }

    /// Apply the panel's result to the document in `slot`, touching the save indicator.
    pub fn apply_in(
        &mut self,
        workspace: &mut Workspace,
        slot: Slot,
        now: Instant,
    ) -> Result<bool, AssistError> {
        let text = self.resolve(workspace.document(slot).content())?;
        Ok(workspace.apply_edit(slot, text, now))
    }

    /// Whether a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the outstanding request is a regenerate.
    pub fn is_regenerating(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.regenerate)
    }

    /// The result waiting in the panel.
    pub fn result(&self) -> Option<&AssistResult> {
        self.result.as_ref()
    }

    /// Label for the panel's apply button.
    pub fn apply_label(&self) -> Option<&'static str> {
        self.result.as_ref().map(|result| result.placement().label())
    }

    /// Applied results, newest first.
    pub fn history(&self) -> &[AiHistoryItem] {
        &self.history
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }
}

fn request_for(pending: &Pending, settings: &AppSettings) -> AssistRequest {
    AssistRequest {
        ticket: pending.ticket,
        action: pending.action,
        text: pending.text.clone(),
        prompt: build_prompt(
            pending.action,
            &pending.text,
            settings,
            pending.instruction.as_deref(),
        ),
        api_key: settings.api_key.clone(),
        instruction: pending.instruction.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moe_core::PaneCommand;
    use pretty_assertions::assert_eq;

    fn setup(text: &str) -> (Document, EditorPane, AssistSession, AppSettings) {
        let doc = Document::new("doc1", "notes.md", text);
        let pane = EditorPane::new(&doc);
        (doc, pane, AssistSession::new(), AppSettings::with_api_key("key"))
    }

    #[test]
    fn test_placement_rules() {
        assert_eq!(
            Placement::choose(&(2..5), AiAction::FixGrammar),
            Placement::ReplaceSelection
        );
        assert_eq!(
            Placement::choose(&(3..3), AiAction::FixGrammar),
            Placement::ReplaceAll
        );
        assert_eq!(
            Placement::choose(&(0..0), AiAction::Summarize),
            Placement::Append
        );

        assert_eq!(
            Placement::ReplaceSelection.apply("你好世界", &(2..4), "朋友"),
            "你好朋友"
        );
        assert_eq!(Placement::Append.apply("body", &(0..0), "tail"), "body\n\ntail");
        assert_eq!(Placement::ReplaceAll.apply("body", &(0..0), "new"), "new");
        // A stale selection past the end is clamped.
        assert_eq!(Placement::ReplaceSelection.apply("ab", &(1..9), "X"), "aX");
    }

    #[test]
    fn test_stats() {
        assert_eq!(ResultStats::of("one two\nthree"), ResultStats { chars: 13, words: 3 });
        assert_eq!(ResultStats::of("  "), ResultStats { chars: 2, words: 0 });
        assert_eq!(ResultStats::of("中文"), ResultStats { chars: 2, words: 1 });
    }

    #[test]
    fn test_whitespace_document_is_rejected() {
        let (mut doc, mut pane, mut session, settings) = setup(" \n ");
        pane.execute(&mut doc, PaneCommand::ToggleInlineAssist, Instant::now());
        let result = session.begin(
            &mut pane,
            &doc,
            AiAction::Summarize.into(),
            &settings,
            Instant::now(),
        );
        assert_eq!(result, Err(AssistError::EmptyInput));
        assert!(!session.is_busy());
        // The inline prompt stays open with its captured selection.
        assert!(pane.is_inline_assist_open());
    }

    #[test]
    fn test_missing_key_never_issues_request() {
        let (doc, mut pane, mut session, _) = setup("text");
        let now = Instant::now();
        let result = session.begin(
            &mut pane,
            &doc,
            AiAction::Expand.into(),
            &AppSettings::default(),
            now,
        );
        assert_eq!(result, Err(AssistError::MissingApiKey));
        assert!(!session.is_busy());
        assert_eq!(pane.toast(now).map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn test_busy_and_stale_tickets() {
        let (doc, mut pane, mut session, settings) = setup("text");
        let now = Instant::now();
        let first = session
            .begin(&mut pane, &doc, AiAction::Summarize.into(), &settings, now)
            .unwrap();
        assert_eq!(
            session.begin(&mut pane, &doc, AiAction::Summarize.into(), &settings, now),
            Err(AssistError::Busy)
        );

        session
            .complete(&mut pane, first.ticket, Ok("short".into()), now)
            .unwrap();
        assert_eq!(
            session.complete(&mut pane, first.ticket, Ok("again".into()), now),
            Err(AssistError::StaleTicket(first.ticket.get()))
        );
        assert_eq!(session.result().map(|r| r.content.as_str()), Some("short"));
    }

    #[test]
    fn test_regenerate_supersedes() {
        let (doc, mut pane, mut session, settings) = setup("text");
        let now = Instant::now();
        let first = session
            .begin(&mut pane, &doc, AiAction::Translate.into(), &settings, now)
            .unwrap();
        session
            .complete(&mut pane, first.ticket, Ok("v1".into()), now)
            .unwrap();

        let second = session.regenerate(&mut pane, &settings, now).unwrap();
        assert!(session.is_regenerating());
        let third = session.regenerate(&mut pane, &settings, now).unwrap();
        assert_eq!(second.prompt, third.prompt);

        assert_eq!(
            session.complete(&mut pane, second.ticket, Ok("v2".into()), now),
            Err(AssistError::StaleTicket(second.ticket.get()))
        );
        session
            .complete(&mut pane, third.ticket, Ok("v3".into()), now)
            .unwrap();
        assert_eq!(session.result().map(|r| r.content.as_str()), Some("v3"));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_empty_answer_keeps_input() {
        let (doc, mut pane, mut session, settings) = setup("keep me");
        let now = Instant::now();
        let request = session
            .begin(&mut pane, &doc, AiAction::FixGrammar.into(), &settings, now)
            .unwrap();
        session
            .complete(&mut pane, request.ticket, Ok(String::new()), now)
            .unwrap();
        assert_eq!(session.result().map(|r| r.content.as_str()), Some("keep me"));
    }

    #[test]
    fn test_failure_leaves_document() {
        let (mut doc, mut pane, mut session, settings) = setup("text");
        let now = Instant::now();
        let request = session
            .begin(&mut pane, &doc, AiAction::Expand.into(), &settings, now)
            .unwrap();
        let err = AssistError::Backend("quota exceeded".into());
        assert_eq!(
            session.complete(&mut pane, request.ticket, Err(err.clone()), now),
            Err(err)
        );
        assert!(session.result().is_none());
        assert_eq!(
            session.apply(&mut pane, &mut doc),
            Err(AssistError::NoResult("apply"))
        );
        assert_eq!(doc.content(), "text");

        // A retry is allowed.
        assert!(
            session
                .begin(&mut pane, &doc, AiAction::Expand.into(), &settings, now)
                .is_ok()
        );
    }
}
