//! In-memory page model: the containers the renderer and presenter write into.

mod controls;
mod element;
pub mod text;

pub use controls::{FeedbackKind, FeedbackMessage, SelectControl, SelectOption, SignupForm};
pub use element::Element;

use crate::labels;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub activities_list: Element,
    pub form: SignupForm,
}

impl PageState {
    pub fn new(loading_text: &str) -> Self {
        let mut form = SignupForm::default();
        form.activity.reset_with_placeholder(labels::ACTIVITY_PLACEHOLDER);
        Self {
            activities_list: Element::new("div")
                .with_class("activities-list")
                .with_child(Element::new("p").with_text(loading_text)),
            form,
        }
    }
}
