use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Roster, SignupRequest},
    error::ErrorBody,
    protocol::{MembershipAction, MessageResponse},
};
use tracing::debug;
use url::Url;

pub mod error;
mod fetcher;
mod submitter;

pub use error::{ClientInitError, FetchError, SubmitError};
pub use fetcher::RosterFetcher;
pub use reqwest::StatusCode;
pub use submitter::{
    SignupSubmitter, UnregisterSubmitter, REJECTED_FALLBACK, SIGNUP_FAILED_FALLBACK,
    UNREGISTER_FAILED_FALLBACK,
};

/// The activities HTTP API as seen by the page.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn fetch_roster(&self) -> Result<Roster, FetchError>;
    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, SubmitError>;
    async fn unregister(&self, request: &SignupRequest) -> Result<MessageResponse, SubmitError>;
}

pub struct HttpActivitiesClient {
    http: Client,
    base_url: Url,
}

impl HttpActivitiesClient {
    pub fn new(server_url: &str) -> Result<Self, ClientInitError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, ClientInitError> {
        let base_url = Url::parse(server_url).map_err(|source| ClientInitError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientInitError::NotABase(server_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Appends percent-encoded path segments to the base url.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn membership_url(&self, action: MembershipAction, request: &SignupRequest) -> Url {
        let mut url = self.endpoint(&[
            "activities",
            request.activity.as_str(),
            action.path_segment(),
        ]);
        url.query_pairs_mut().append_pair("email", &request.email);
        url
    }

    async fn post_membership(
        &self,
        action: MembershipAction,
        request: &SignupRequest,
    ) -> Result<MessageResponse, SubmitError> {
        let url = self.membership_url(action, request);
        debug!(%url, "posting membership request");
        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(SubmitError::Transport)?;
        read_membership_response(response).await
    }
}

async fn read_membership_response(response: Response) -> Result<MessageResponse, SubmitError> {
    let status = response.status();
    let body = response.bytes().await.map_err(SubmitError::Transport)?;
    if status.is_success() {
        return serde_json::from_slice(&body)
            .map_err(|source| SubmitError::MalformedResponse { status, source });
    }

    // A rejection body that is not JSON at all is as unreadable as a bad 2xx.
    let error_body: ErrorBody = serde_json::from_slice(&body)
        .map_err(|source| SubmitError::MalformedResponse { status, source })?;
    Err(SubmitError::Rejected {
        status,
        detail: error_body.detail_text().map(str::to_owned),
    })
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesClient {
    async fn fetch_roster(&self) -> Result<Roster, FetchError> {
        let url = self.endpoint(&["activities"]);
        debug!(%url, "fetching activities");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, SubmitError> {
        self.post_membership(MembershipAction::Signup, request).await
    }

    async fn unregister(&self, request: &SignupRequest) -> Result<MessageResponse, SubmitError> {
        self.post_membership(MembershipAction::Unregister, request).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
