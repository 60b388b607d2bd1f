//! Controller layer: page events and the fetch/submit orchestration.

mod app_controller;
pub mod events;

pub use app_controller::{AppController, InitError};
pub use events::FormSubmitEvent;

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
