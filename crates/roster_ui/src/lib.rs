//! Page side of the activities client: page model, roster rendering,
//! transient feedback and the controller that ties them to the API.

pub mod controller;
pub mod feedback;
pub mod labels;
pub mod page;
pub mod renderer;

pub use controller::{AppController, FormSubmitEvent, InitError};
pub use feedback::{FeedbackPresenter, DEFAULT_HIDE_AFTER};
pub use renderer::{avatar_initials, RosterRenderer};

