//! Single-attempt membership requests folded into a [`SignupOutcome`].
//!
//! Transport failures and server rejections both end up as
//! `SignupOutcome::Failure`. A transport error that happened after the server
//! committed the change cannot be told apart from a real rejection here.

use std::sync::Arc;

use shared::{
    domain::{SignupOutcome, SignupRequest},
    protocol::{MembershipAction, MessageResponse},
};
use tracing::{error, info, warn};

use crate::{error::SubmitError, ActivitiesApi};

/// Shown when a rejection carries no usable `detail`.
pub const REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED_FALLBACK: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_FALLBACK: &str = "Failed to unregister. Please try again.";

pub struct SignupSubmitter {
    api: Arc<dyn ActivitiesApi>,
}

impl SignupSubmitter {
    pub fn new(api: Arc<dyn ActivitiesApi>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, activity: &str, email: &str) -> SignupOutcome {
        let request = match SignupRequest::new(activity, email) {
            Ok(request) => request,
            Err(err) => {
                return SignupOutcome::Failure {
                    detail: err.to_string(),
                }
            }
        };
        let result = self.api.signup(&request).await;
        interpret(MembershipAction::Signup, &request, result)
    }
}

pub struct UnregisterSubmitter {
    api: Arc<dyn ActivitiesApi>,
}

impl UnregisterSubmitter {
    pub fn new(api: Arc<dyn ActivitiesApi>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, activity: &str, email: &str) -> SignupOutcome {
        let request = match SignupRequest::new(activity, email) {
            Ok(request) => request,
            Err(err) => {
                return SignupOutcome::Failure {
                    detail: err.to_string(),
                }
            }
        };
        let result = self.api.unregister(&request).await;
        interpret(MembershipAction::Unregister, &request, result)
    }
}

fn interpret(
    action: MembershipAction,
    request: &SignupRequest,
    result: Result<MessageResponse, SubmitError>,
) -> SignupOutcome {
    let action_name = action.path_segment();
    match result {
        Ok(MessageResponse { message }) => {
            info!(action = action_name, activity = %request.activity, "membership request accepted");
            SignupOutcome::Success { message }
        }
        Err(SubmitError::Rejected { status, detail }) => {
            warn!(
                action = action_name,
                activity = %request.activity,
                %status,
                detail = detail.as_deref().unwrap_or_default(),
                "membership request rejected"
            );
            SignupOutcome::Failure {
                detail: detail.unwrap_or_else(|| REJECTED_FALLBACK.to_string()),
            }
        }
        Err(err) => {
            error!(action = action_name, activity = %request.activity, error = %err, "error submitting membership request");
            let fallback = match action {
                MembershipAction::Signup => SIGNUP_FAILED_FALLBACK,
                MembershipAction::Unregister => UNREGISTER_FAILED_FALLBACK,
            };
            SignupOutcome::Failure {
                detail: fallback.to_string(),
            }
        }
    }
}
