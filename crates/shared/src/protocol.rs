use serde::{Deserialize, Serialize};

/// Success body for `POST /activities/{name}/signup` and `/unregister`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    Signup,
    Unregister,
}

impl MembershipAction {
    pub fn path_segment(self) -> &'static str {
        match self {
            MembershipAction::Signup => "signup",
            MembershipAction::Unregister => "unregister",
        }
    }
}
