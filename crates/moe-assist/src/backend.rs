//! The model backend collaborator.

use crate::action::AiAction;
use crate::error::AssistError;
use crate::session::Ticket;

/// A prepared model request.
///
/// The session builds the full prompt; backends only need `prompt` and `api_key`. The other
/// fields are kept for backends that want to log or route by action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRequest {
    /// Ticket to hand back to [`crate::AssistSession::complete`].
    pub ticket: Ticket,
    /// Requested action.
    pub action: AiAction,
    /// Text being processed (the selection, or the whole document).
    pub text: String,
    /// Full prompt to send.
    pub prompt: String,
    /// API key from the settings; never empty.
    pub api_key: String,
    /// Instruction typed for [`AiAction::Custom`].
    pub instruction: Option<String>,
}

/// Something that can answer an [`AssistRequest`], such as a hosted language-model API.
///
/// Implementations return the model's text. An empty answer is allowed: the session then
/// keeps the input text unchanged.
pub trait AssistBackend {
    /// Run the request to completion.
    fn complete(&mut self, request: &AssistRequest) -> Result<String, AssistError>;
}

impl<F> AssistBackend for F
where
    F: FnMut(&AssistRequest) -> Result<String, AssistError>,
{
    fn complete(&mut self, request: &AssistRequest) -> Result<String, AssistError> {
        self(request)
    }
}
