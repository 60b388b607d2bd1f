use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Body of a rejected request, e.g. `{"detail": "Activity not found"}`.
///
/// Validation failures may carry a structured `detail` (a list of field
/// errors) instead of a string, so the raw value is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(detail.into())),
        }
    }

    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Please select an activity.")]
    MissingActivity,
    #[error("Please enter an email address.")]
    MissingEmail,
}
