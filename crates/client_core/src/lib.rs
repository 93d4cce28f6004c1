use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ChatResource,
    error::ErrorBody,
    protocol::{ChatResponse, CreateChatRequest, CHATS_PATH},
};
use tracing::debug;
use url::Url;

pub mod config;
pub mod error;
pub mod locale;
pub mod submission;
pub mod view;

pub use error::ClientError;
pub use locale::Locale;
pub use submission::{
    cap_title, FormState, SubmissionController, SubmissionStatus, SubmitOutcome, SubmitTicket,
};
pub use view::{project, DisplayZone, FormView, ViewOptions};

/// The backend collaborator that creates chats.
///
/// Implementations never fail: every error is reported through
/// [`SubmitOutcome`].
#[async_trait]
pub trait ChatsApi: Send + Sync {
    async fn create_chat(&self, title: &str) -> SubmitOutcome;
}

pub struct HttpChatsApi {
    http: Client,
    chats_url: Url,
}

impl HttpChatsApi {
    pub fn new(api_base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Self::with_client(http, api_base_url)
    }

    pub fn with_client(http: Client, api_base_url: &str) -> Result<Self, ClientError> {
        let base = config::parse_base_url(api_base_url)?;
        Ok(Self {
            http,
            chats_url: chats_url(base)?,
        })
    }

    pub fn chats_url(&self) -> &str {
        self.chats_url.as_str()
    }
}

/// Appends [`CHATS_PATH`] to the base url's path, keeping its query.
fn chats_url(mut base: Url) -> Result<Url, ClientError> {
    base.set_fragment(None);
    let raw = base.to_string();
    base.path_segments_mut()
        .map_err(|()| ClientError::OpaqueBaseUrl { url: raw })?
        .pop_if_empty()
        .extend(CHATS_PATH.split('/').filter(|segment| !segment.is_empty()));
    Ok(base)
}

#[async_trait]
impl ChatsApi for HttpChatsApi {
    async fn create_chat(&self, title: &str) -> SubmitOutcome {
        let response = match self
            .http
            .post(self.chats_url.clone())
            .json(&CreateChatRequest {
                title: title.to_string(),
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return SubmitOutcome::transport(err.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return match response.json::<ErrorBody>().await {
                Ok(body) => SubmitOutcome::Rejected {
                    status: status.as_u16(),
                    detail: body.message().map(str::to_string),
                },
                Err(err) => {
                    debug!(status = status.as_u16(), "unreadable error body: {err}");
                    SubmitOutcome::transport(format!("malformed response: {err}"))
                }
            };
        }

        let body: ChatResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => return SubmitOutcome::transport(format!("malformed response: {err}")),
        };
        match ChatResource::try_from(body) {
            Ok(chat) => SubmitOutcome::Created(chat),
            Err(err) => SubmitOutcome::transport(format!("malformed response: {err}")),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
