pub mod config;
pub mod core;
pub mod error;
pub mod flow;
pub mod screen;
pub mod state;
pub mod validation;

pub use config::ValidationConfig;
pub use crate::core::{FieldId, Form, FormEvent, FormField, FormKind, LoginForm, SignUpForm};
pub use error::{Error, Result};
pub use flow::{AuthFlow, Route};
pub use screen::{FieldView, LoginScreen, Navigation, ScreenEvent, SignUpScreen};
pub use validation::{FormValidator, ValidationContext, ValidationReport};
