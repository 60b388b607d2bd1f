use std::sync::Arc;

use client_core::{ActivitiesApi, FetchError, RosterFetcher, SignupSubmitter, UnregisterSubmitter};
use shared::domain::SignupOutcome;
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::{
    controller::events::FormSubmitEvent,
    feedback::FeedbackPresenter,
    labels,
    page::{FeedbackMessage, PageState},
    renderer::RosterRenderer,
};

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("activities already failed to load: {0}")]
    EarlierFailure(String),
}

/// Wires fetch → render on load and submit → feedback on form submission.
///
/// The page lock is never held across a network call, so overlapping
/// submissions run independently; the last outcome to arrive owns the
/// message area.
pub struct AppController {
    fetcher: RosterFetcher,
    signup: SignupSubmitter,
    unregister: UnregisterSubmitter,
    renderer: RosterRenderer,
    feedback: Mutex<FeedbackPresenter>,
    feedback_rx: watch::Receiver<FeedbackMessage>,
    page: Mutex<PageState>,
    loaded: Mutex<Option<Result<usize, String>>>,
}

impl AppController {
    pub fn new(api: Arc<dyn ActivitiesApi>, feedback: FeedbackPresenter) -> Self {
        let feedback_rx = feedback.subscribe();
        Self {
            fetcher: RosterFetcher::new(Arc::clone(&api)),
            signup: SignupSubmitter::new(Arc::clone(&api)),
            unregister: UnregisterSubmitter::new(api),
            renderer: RosterRenderer::new(),
            feedback: Mutex::new(feedback),
            feedback_rx,
            page: Mutex::new(PageState::new(labels::LOADING)),
            loaded: Mutex::new(None),
        }
    }

    /// Page load: fetch once and render. Returns the number of activities
    /// rendered, or the fetch error that replaced the list. Later calls
    /// repeat the first outcome without fetching again.
    pub async fn init(&self) -> Result<usize, InitError> {
        let mut loaded = self.loaded.lock().await;
        if let Some(previous) = loaded.as_ref() {
            warn!("activities page already initialized; ignoring repeated init");
            return previous.clone().map_err(InitError::EarlierFailure);
        }

        let result = self.fetcher.fetch().await;
        {
            let mut page = self.page.lock().await;
            let PageState {
                activities_list,
                form,
            } = &mut *page;
            self.renderer.render_result(&result, activities_list, &mut form.activity);
        }
        let result = result.map(|roster| roster.len());
        *loaded = Some(result.as_ref().copied().map_err(ToString::to_string));
        result.map_err(InitError::from)
    }

    /// Fills the form as a visitor would. Returns false if `activity` is not
    /// one of the rendered options; the email is set either way.
    pub async fn fill_form(&self, activity: &str, email: &str) -> bool {
        let mut page = self.page.lock().await;
        page.form.email = email.to_string();
        page.form.activity.select(activity)
    }

    pub async fn on_submit(&self, event: &mut FormSubmitEvent) -> SignupOutcome {
        event.prevent_default();

        let (activity, email) = {
            let page = self.page.lock().await;
            (
                page.form.activity.selected_value().to_string(),
                page.form.email.clone(),
            )
        };

        let outcome = self.signup.submit(&activity, &email).await;
        self.feedback.lock().await.show(&outcome);

        if outcome.is_success() {
            self.page.lock().await.form.reset();
            info!(activity = %activity, "signup accepted; form cleared");
        }
        outcome
    }

    /// Removes `email` from `activity`. Like signup, the list is not refreshed.
    pub async fn on_unregister(&self, activity: &str, email: &str) -> SignupOutcome {
        let outcome = self.unregister.submit(activity, email).await;
        self.feedback.lock().await.show(&outcome);
        outcome
    }

    pub async fn hide_feedback(&self) {
        self.feedback.lock().await.hide();
    }

    pub fn subscribe_feedback(&self) -> watch::Receiver<FeedbackMessage> {
        self.feedback_rx.clone()
    }

    pub fn feedback(&self) -> FeedbackMessage {
        self.feedback_rx.borrow().clone()
    }

    pub async fn page(&self) -> PageState {
        self.page.lock().await.clone()
    }
}
