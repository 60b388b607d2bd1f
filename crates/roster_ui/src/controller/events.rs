//! Page events delivered to the controller.

/// A signup form submission. The controller marks it handled so the
/// surrounding shell does not perform its default navigation.
#[derive(Debug, Default)]
pub struct FormSubmitEvent {
    default_prevented: bool,
}

impl FormSubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
