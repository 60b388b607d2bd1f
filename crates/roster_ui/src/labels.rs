//! Visitor-facing text of the activities page.

pub const LOADING: &str = "Loading activities...";
pub const ACTIVITY_PLACEHOLDER: &str = "-- Select an activity --";
pub const SCHEDULE: &str = "Schedule:";
pub const AVAILABILITY: &str = "Availability:";
pub const PARTICIPANTS_TITLE: &str = "Participants";
pub const NO_PARTICIPANTS: &str = "No participants yet.";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

pub fn spots_remaining(spots_left: i64) -> String {
    format!("{spots_left} remaining")
}
