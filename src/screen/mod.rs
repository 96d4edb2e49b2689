pub mod form_screen;
pub mod login;
pub mod signup;

pub use form_screen::FormScreen;
pub use login::LoginScreen;
pub use signup::SignUpScreen;

use crate::core::FieldId;

/// Everything a screen host can feed into a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Input { field: String, value: String },
    ToggleVisibility { field: String },
    Submit,
    Back,
    OpenSignUp,
}

impl ScreenEvent {
    pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn toggle(field: impl Into<String>) -> Self {
        Self::ToggleVisibility {
            field: field.into(),
        }
    }
}

/// What the host should do after a screen handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    OpenSignUp,
    Back,
    LoginSucceeded,
    SignUpSucceeded,
}

/// Render data for one field: enough to draw the value, the error border and
/// the supporting text underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub label: String,
    pub display_value: String,
    pub masked: Option<bool>,
    pub is_error: bool,
    pub supporting_text: Option<String>,
}
