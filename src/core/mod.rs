pub mod field;
pub mod form;
pub mod form_event;

pub use field::FormField;
pub use form::{Form, FormKind, LoginForm, SignUpForm};
pub use form_event::FormEvent;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Field names as they appear in error maps and input documents.
pub mod names {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

/// Name of a field within one form. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets `IndexMap<FieldId, _>` be queried with a plain `&str`.
impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for FieldId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl PartialEq<str> for FieldId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
