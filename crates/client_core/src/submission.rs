//! The chat creation form as an explicit state machine.
//!
//! `begin_submit` and `resolve` are the two halves of one submission and are
//! pure with respect to I/O; `submit` glues them around a [`ChatsApi`] call.

use shared::domain::{ChatResource, MAX_TITLE_LEN};
use tracing::{debug, info};

use crate::{locale::Locale, ChatsApi};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
}

impl FormState {
    /// Required-field rule of the title input.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Cuts `title` to the input field's limit of [`MAX_TITLE_LEN`] characters.
pub fn cap_title(mut title: String) -> String {
    if let Some((end, _)) = title.char_indices().nth(MAX_TITLE_LEN) {
        title.truncate(end);
    }
    title
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(ChatResource),
    Failed(String),
}

/// What one create request came back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(ChatResource),
    Rejected { status: u16, detail: Option<String> },
    Transport { message: Option<String> },
}

impl SubmitOutcome {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: Some(message.into()),
        }
    }
}

/// Handed out by [`SubmissionController::begin_submit`] for the request it
/// authorizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub seq: u64,
    pub title: String,
}

#[derive(Debug)]
pub struct SubmissionController {
    form: FormState,
    status: SubmissionStatus,
    locale: Locale,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl SubmissionController {
    pub fn new(locale: Locale) -> Self {
        Self {
            form: FormState::default(),
            status: SubmissionStatus::Idle,
            locale,
            next_seq: 1,
            in_flight: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn title(&self) -> &str {
        &self.form.title
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// The created chat, if the last submission produced one with an identity.
    pub fn result(&self) -> Option<&ChatResource> {
        match &self.status {
            SubmissionStatus::Succeeded(chat) if chat.is_present() => Some(chat),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn update_title(&mut self, value: impl Into<String>) {
        self.form.title = value.into();
    }

    /// Enters `Pending` and returns the request to issue, or `None` while a
    /// request is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_pending() {
            debug!("submit ignored: request already in flight");
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.status = SubmissionStatus::Pending;
        info!(seq, title_len = self.form.title.len(), "submitting chat");

        Some(SubmitTicket {
            seq,
            title: self.form.title.clone(),
        })
    }

    /// Folds the outcome of request `seq` into the status. Outcomes for any
    /// request other than the one in flight are dropped and `false` returned.
    pub fn resolve(&mut self, seq: u64, outcome: SubmitOutcome) -> bool {
        if self.in_flight != Some(seq) {
            debug!(seq, in_flight = ?self.in_flight, "dropping stale submission outcome");
            return false;
        }
        self.in_flight = None;

        let messages = self.locale.messages();
        self.status = match outcome {
            SubmitOutcome::Created(chat) => {
                info!(seq, chat_id = %chat.id, "chat created");
                self.form.title.clear();
                SubmissionStatus::Succeeded(chat)
            }
            SubmitOutcome::Rejected { status, detail } => {
                debug!(seq, status, detail = ?detail, "chat creation rejected");
                SubmissionStatus::Failed(or_fallback(detail, messages.create_failed))
            }
            SubmitOutcome::Transport { message } => {
                debug!(seq, message = ?message, "chat creation transport failure");
                SubmissionStatus::Failed(or_fallback(message, messages.network_error))
            }
        };
        true
    }

    /// Runs one full submission against `api`. A no-op returning `false` while
    /// another submission is pending.
    pub async fn submit<A>(&mut self, api: &A) -> bool
    where
        A: ChatsApi + ?Sized,
    {
        let Some(ticket) = self.begin_submit() else {
            return false;
        };
        let outcome = api.create_chat(&ticket.title).await;
        self.resolve(ticket.seq, outcome)
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

fn or_fallback(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
