use crate::core::{FieldId, FormEvent, FormField, names};
use crate::error::{Error, Result};
use crate::validation::ValidationReport;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "signup", alias = "sign_up", alias = "sign-up")]
    SignUp,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SignUp => "signup",
        }
    }

    pub fn field_ids(self) -> &'static [&'static str] {
        match self {
            Self::Login => &[names::EMAIL, names::PASSWORD],
            Self::SignUp => &[
                names::FULL_NAME,
                names::EMAIL,
                names::PASSWORD,
                names::CONFIRM_PASSWORD,
            ],
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed, ordered set of named fields validated together on submit.
pub trait Form {
    fn kind(&self) -> FormKind;

    fn fields(&self) -> Vec<&FormField>;

    fn fields_mut(&mut self) -> Vec<&mut FormField>;

    fn field(&self, id: &str) -> Option<&FormField> {
        self.fields().into_iter().find(|field| field.id() == id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields_mut().into_iter().find(|field| field.id() == id)
    }

    fn values(&self) -> IndexMap<FieldId, String> {
        self.fields()
            .into_iter()
            .map(|field| (field.id().clone(), field.value().to_string()))
            .collect()
    }

    /// Applies a user edit. The edited field loses any error it was showing.
    fn input(&mut self, id: &str, value: String) -> Result<Vec<FormEvent>> {
        let kind = self.kind();
        let field = self.field_mut(id).ok_or_else(|| Error::UnknownField {
            form: kind,
            field: id.to_string(),
        })?;

        let cleared = field.set_value(value.clone());
        let id = field.id().clone();

        let mut events = vec![FormEvent::InputChanged {
            id: id.clone(),
            value,
        }];
        if cleared {
            events.push(FormEvent::ErrorCleared { id });
        }
        Ok(events)
    }

    /// Replaces every field's error with the report's verdict.
    fn apply(&mut self, report: &ValidationReport) -> Vec<FormEvent> {
        let mut events = Vec::new();
        for field in self.fields_mut() {
            match report.error(field.id().as_str()) {
                Some(message) => {
                    field.set_error(Some(message));
                    events.push(FormEvent::ErrorShown {
                        id: field.id().clone(),
                        message: message.to_string(),
                    });
                }
                None if field.has_error() => {
                    field.clear_error();
                    events.push(FormEvent::ErrorCleared {
                        id: field.id().clone(),
                    });
                }
                None => {}
            }
        }
        events
    }

    fn is_submittable(&self) -> bool {
        self.fields().iter().all(|field| !field.has_error())
    }

    fn fill<I, K, V>(&mut self, values: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (id, value) in values {
            self.input(id.as_ref(), value.into())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::new(names::EMAIL, "Email"),
            password: FormField::new(names::PASSWORD, "Password"),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn kind(&self) -> FormKind {
        FormKind::Login
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }

    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::new(names::FULL_NAME, "Full Name"),
            email: FormField::new(names::EMAIL, "Email"),
            password: FormField::new(names::PASSWORD, "Password"),
            confirm_password: FormField::new(names::CONFIRM_PASSWORD, "Confirm Password"),
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn kind(&self) -> FormKind {
        FormKind::SignUp
    }

    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.full_name,
            &mut self.email,
            &mut self.password,
            &mut self.confirm_password,
        ]
    }
}
