use super::*;
use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use chrono::DateTime;
use shared::domain::ChatId;

struct ScriptedApi {
    outcomes: Mutex<VecDeque<SubmitOutcome>>,
    titles: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn new(outcomes: impl IntoIterator<Item = SubmitOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            titles: Mutex::new(Vec::new()),
        }
    }

    fn titles(&self) -> Vec<String> {
        self.titles.lock().expect("titles").clone()
    }
}

#[async_trait]
impl ChatsApi for ScriptedApi {
    async fn create_chat(&self, title: &str) -> SubmitOutcome {
        self.titles.lock().expect("titles").push(title.to_string());
        self.outcomes
            .lock()
            .expect("outcomes")
            .pop_front()
            .expect("unscripted request")
    }
}

fn support_chat() -> ChatResource {
    ChatResource {
        id: ChatId::from("c1"),
        title: "Support".to_string(),
        created_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").expect("timestamp"),
    }
}

fn rejected(detail: &str) -> SubmitOutcome {
    SubmitOutcome::Rejected {
        status: 400,
        detail: Some(detail.to_string()),
    }
}

#[test]
fn starts_idle_with_empty_form() {
    let controller = SubmissionController::new(Locale::En);
    assert_eq!(controller.status(), &SubmissionStatus::Idle);
    assert_eq!(controller.title(), "");
    assert!(!controller.form().is_submittable());
    assert!(controller.result().is_none());
    assert!(controller.error().is_none());
}

#[test]
fn update_title_is_verbatim() {
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("  Support ");
    assert_eq!(controller.title(), "  Support ");
    assert!(controller.form().is_submittable());
}

#[test]
fn cap_title_keeps_at_most_the_input_limit_in_chars() {
    assert_eq!(cap_title("Support".to_string()), "Support");

    let long = "ж".repeat(MAX_TITLE_LEN + 10);
    let capped = cap_title(long);
    assert_eq!(capped.chars().count(), MAX_TITLE_LEN);
    assert!(capped.chars().all(|c| c == 'ж'));

    let exact = "a".repeat(MAX_TITLE_LEN);
    assert_eq!(cap_title(exact.clone()), exact);
}

#[test]
fn begin_submit_enters_pending_before_any_response() {
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");

    let ticket = controller.begin_submit().expect("ticket");

    assert_eq!(ticket.title, "Support");
    assert!(controller.is_pending());
    assert_eq!(controller.title(), "Support");
}

#[test]
fn begin_submit_while_pending_is_a_no_op() {
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    let first = controller.begin_submit().expect("ticket");

    assert!(controller.begin_submit().is_none());
    assert!(controller.is_pending());

    assert!(controller.resolve(first.seq, SubmitOutcome::Created(support_chat())));
    assert!(!controller.is_pending());
}

#[tokio::test]
async fn submit_while_pending_issues_no_request() {
    let api = ScriptedApi::new(Vec::new());
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    let _ticket = controller.begin_submit().expect("ticket");

    assert!(!controller.submit(&api).await);
    assert!(api.titles().is_empty());
    assert!(controller.is_pending());
}

#[tokio::test]
async fn success_resets_title_and_exposes_result() {
    let api = ScriptedApi::new([SubmitOutcome::Created(support_chat())]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");

    assert!(controller.submit(&api).await);

    assert_eq!(api.titles(), vec!["Support".to_string()]);
    assert_eq!(
        controller.status(),
        &SubmissionStatus::Succeeded(support_chat())
    );
    assert_eq!(controller.title(), "");
    assert_eq!(controller.result(), Some(&support_chat()));
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn rejection_keeps_title_and_shows_detail() {
    let api = ScriptedApi::new([rejected("title already exists")]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");

    controller.submit(&api).await;

    assert_eq!(
        controller.status(),
        &SubmissionStatus::Failed("title already exists".to_string())
    );
    assert_eq!(controller.title(), "Support");
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn rejection_without_detail_uses_localized_fallback() {
    let outcome = SubmitOutcome::Rejected {
        status: 500,
        detail: None,
    };

    let api = ScriptedApi::new([outcome.clone()]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    controller.submit(&api).await;
    assert_eq!(controller.error(), Some("could not create chat"));

    let api = ScriptedApi::new([outcome]);
    let mut controller = SubmissionController::new(Locale::Ru);
    controller.update_title("Support");
    controller.submit(&api).await;
    assert_eq!(controller.error(), Some("Не удалось создать чат."));
}

#[tokio::test]
async fn transport_failure_uses_its_message_or_fallback() {
    let api = ScriptedApi::new([
        SubmitOutcome::transport("connection refused"),
        SubmitOutcome::Transport { message: None },
        SubmitOutcome::transport(""),
    ]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");

    controller.submit(&api).await;
    assert_eq!(controller.error(), Some("connection refused"));

    controller.submit(&api).await;
    assert_eq!(controller.error(), Some("network error"));

    controller.submit(&api).await;
    assert_eq!(controller.error(), Some("network error"));
    assert_eq!(controller.title(), "Support");
}

#[tokio::test]
async fn repeated_failures_reflect_latest_attempt() {
    let api = ScriptedApi::new([rejected("first"), rejected("second")]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");

    controller.submit(&api).await;
    controller.submit(&api).await;

    assert_eq!(api.titles().len(), 2);
    assert_eq!(controller.error(), Some("second"));
}

#[tokio::test]
async fn resubmit_clears_previous_panels_while_pending() {
    let api = ScriptedApi::new([rejected("title already exists")]);
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    controller.submit(&api).await;
    assert!(controller.error().is_some());

    let ticket = controller.begin_submit().expect("ticket");
    assert!(controller.error().is_none());
    assert!(controller.result().is_none());

    controller.resolve(ticket.seq, SubmitOutcome::Created(support_chat()));
    controller.update_title("General");
    controller.begin_submit().expect("ticket");
    assert!(controller.result().is_none());
    assert!(controller.error().is_none());
}

#[test]
fn stale_outcome_is_dropped() {
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    let first = controller.begin_submit().expect("ticket");
    controller.resolve(first.seq, rejected("first"));

    let second = controller.begin_submit().expect("ticket");
    assert!(!controller.resolve(first.seq, SubmitOutcome::Created(support_chat())));
    assert!(controller.is_pending());

    assert!(controller.resolve(second.seq, rejected("second")));
    assert_eq!(controller.error(), Some("second"));
}

#[test]
fn resolve_without_request_in_flight_changes_nothing() {
    let mut controller = SubmissionController::new(Locale::En);
    assert!(!controller.resolve(1, SubmitOutcome::Created(support_chat())));
    assert_eq!(controller.status(), &SubmissionStatus::Idle);
}

#[test]
fn success_without_identity_is_not_a_result() {
    let mut controller = SubmissionController::new(Locale::En);
    controller.update_title("Support");
    let ticket = controller.begin_submit().expect("ticket");
    let mut chat = support_chat();
    chat.id = ChatId::default();

    controller.resolve(ticket.seq, SubmitOutcome::Created(chat));

    assert!(!controller.is_pending());
    assert!(controller.result().is_none());
    assert!(controller.error().is_none());
}
