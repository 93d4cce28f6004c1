//! Backend commands queued from UI to backend worker.

use client_core::SubmitTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    CreateChat { seq: u64, title: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateChat { .. } => "create_chat",
        }
    }
}

impl From<SubmitTicket> for BackendCommand {
    fn from(ticket: SubmitTicket) -> Self {
        Self::CreateChat {
            seq: ticket.seq,
            title: ticket.title,
        }
    }
}
