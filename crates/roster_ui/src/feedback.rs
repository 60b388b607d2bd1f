use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use shared::domain::SignupOutcome;
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::page::{FeedbackKind, FeedbackMessage};

pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Owns the page's message area and its single pending auto-hide.
///
/// Every `show` aborts the previous hide before scheduling a new one, so the
/// last shown message always gets the full delay. Scheduling requires a tokio
/// runtime.
pub struct FeedbackPresenter {
    message: Arc<watch::Sender<FeedbackMessage>>,
    hide_after: Duration,
    pending_hide: Option<JoinHandle<()>>,
    generation: u64,
    expired_hides: Arc<AtomicU64>,
}

impl FeedbackPresenter {
    pub fn new(hide_after: Duration) -> Self {
        let (message, _) = watch::channel(FeedbackMessage::default());
        Self {
            message: Arc::new(message),
            hide_after,
            pending_hide: None,
            generation: 0,
            expired_hides: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedbackMessage> {
        self.message.subscribe()
    }

    pub fn current(&self) -> FeedbackMessage {
        self.message.borrow().clone()
    }

    pub fn expired_hides(&self) -> u64 {
        self.expired_hides.load(Ordering::Relaxed)
    }

    pub fn show(&mut self, outcome: &SignupOutcome) {
        self.cancel_pending_hide();
        self.generation += 1;
        let generation = self.generation;

        let kind = match outcome {
            SignupOutcome::Success { .. } => FeedbackKind::Success,
            SignupOutcome::Failure { .. } => FeedbackKind::Error,
        };
        self.message.send_replace(FeedbackMessage {
            text: outcome.text().to_string(),
            kind,
            visible: true,
            generation,
        });

        let message = Arc::clone(&self.message);
        let expired_hides = Arc::clone(&self.expired_hides);
        let delay = self.hide_after;
        debug!(generation, delay_ms = delay.as_millis() as u64, "scheduled feedback hide");
        self.pending_hide = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A newer message has its own timer; only hide the one we were scheduled for.
            let hidden = message.send_if_modified(|current| {
                if current.generation != generation || !current.visible {
                    return false;
                }
                current.visible = false;
                true
            });
            if hidden {
                expired_hides.fetch_add(1, Ordering::Relaxed);
                debug!(generation, "feedback message expired");
            }
        }));
    }

    pub fn hide(&mut self) {
        self.cancel_pending_hide();
        self.message.send_if_modified(|current| {
            let was_visible = current.visible;
            current.visible = false;
            was_visible
        });
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending_hide
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.abort();
        }
    }
}

impl Default for FeedbackPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_AFTER)
    }
}

impl Drop for FeedbackPresenter {
    fn drop(&mut self) {
        self.cancel_pending_hide();
    }
}

#[cfg(test)]
#[path = "tests/feedback_tests.rs"]
mod tests;
