#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    default_selected: Option<usize>,
}

impl SelectControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every option and leaves a single disabled, pre-selected placeholder.
    pub fn reset_with_placeholder(&mut self, label: &str) {
        self.options.clear();
        self.options.push(SelectOption {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        });
        self.selected = Some(0);
        self.default_selected = Some(0);
    }

    pub fn push_option(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
            disabled: false,
        });
    }

    /// Selects an enabled option by value. Returns false if none matches.
    pub fn select(&mut self, value: &str) -> bool {
        match self
            .options
            .iter()
            .position(|option| !option.disabled && option.value == value)
        {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn selected_value(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|option| option.value.as_str())
            .unwrap_or_default()
    }

    pub fn reset_selection(&mut self) {
        self.selected = self.default_selected;
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn placeholder(&self) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.disabled)
    }

    pub fn choices(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|option| !option.disabled)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: SelectControl,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.reset_selection();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackKind {
    #[default]
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
    pub visible: bool,
    pub(crate) generation: u64,
}
