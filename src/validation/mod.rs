pub mod validators;

pub use validators::{Validator, run_validators};

use crate::config::{INVALID_EMAIL, PASSWORDS_MISMATCH, ValidationConfig};
use crate::core::{FieldId, Form, FormKind, names};
use crate::error::Result;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

/// Snapshot of every field value in a form, so rules can look across fields.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    values: IndexMap<FieldId, String>,
}

impl ValidationContext {
    pub fn new<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldId>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
        }
    }

    pub fn from_form(form: &dyn Form) -> Self {
        Self {
            values: form.values(),
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn values(&self) -> &IndexMap<FieldId, String> {
        &self.values
    }
}

/// Field name to message, in form order. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: IndexMap<FieldId, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn errors(&self) -> &IndexMap<FieldId, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, id: impl Into<FieldId>, message: impl Into<String>) {
        self.errors.insert(id.into(), message.into());
    }

    pub fn into_parts(self) -> (bool, IndexMap<FieldId, String>) {
        (self.errors.is_empty(), self.errors)
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Ordered per-field rule chains for one kind of form.
///
/// Each field reports at most one message: the first rule in its chain that
/// fails. Rules are registered blank-check first, so a blank field never
/// reaches its format rule.
pub struct FormValidator {
    kind: FormKind,
    rules: IndexMap<FieldId, Vec<Validator>>,
}

impl FormValidator {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            rules: IndexMap::new(),
        }
    }

    pub fn from_config(kind: FormKind, config: &ValidationConfig) -> Result<Self> {
        let email_re = config.email_regex()?;
        let mut validator = Self::new(kind);

        for &id in kind.field_ids() {
            validator = validator.with_rule(id, validators::required(config.required_message(id)));
            validator = match id {
                names::EMAIL => {
                    validator.with_rule(id, validators::pattern(email_re.clone(), INVALID_EMAIL))
                }
                names::PASSWORD => validator.with_rule(
                    id,
                    validators::min_length(config.min_password_len, config.min_length_message()),
                ),
                names::CONFIRM_PASSWORD => validator.with_rule(
                    id,
                    validators::matches_field(names::PASSWORD, PASSWORDS_MISMATCH),
                ),
                _ => validator,
            };
        }

        Ok(validator)
    }

    pub fn with_rule(mut self, id: impl Into<FieldId>, rule: Validator) -> Self {
        self.rules.entry(id.into()).or_default().push(rule);
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn validate(&self, form: &dyn Form) -> ValidationReport {
        self.validate_context(&ValidationContext::from_form(form))
    }

    /// Fields with rules but no value in `ctx` are validated as empty.
    pub fn validate_context(&self, ctx: &ValidationContext) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (id, chain) in &self.rules {
            let value = ctx.text(id.as_str()).unwrap_or_default();
            if let Err(message) = run_validators(chain, value, ctx) {
                report.insert(id.clone(), message);
            }
        }
        debug!(
            form = %self.kind,
            error_count = report.len(),
            "form validated"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::{FormValidator, ValidationContext};
    use crate::config::ValidationConfig;
    use crate::core::{Form, FormKind, LoginForm, SignUpForm, names};

    fn login_validator() -> FormValidator {
        FormValidator::from_config(FormKind::Login, &ValidationConfig::default())
            .expect("default config compiles")
    }

    fn signup_validator() -> FormValidator {
        FormValidator::from_config(FormKind::SignUp, &ValidationConfig::default())
            .expect("default config compiles")
    }

    #[test]
    fn valid_login_has_no_errors() {
        let mut form = LoginForm::new();
        form.fill([(names::EMAIL, "a@b.com"), (names::PASSWORD, "abcdef")])
            .expect("login fields");
        let report = login_validator().validate(&form);
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn blank_fields_report_required() {
        let report = signup_validator().validate(&SignUpForm::new());
        assert_eq!(report.len(), 4);
        assert_eq!(report.error(names::FULL_NAME), Some("full name is required"));
        assert_eq!(report.error(names::EMAIL), Some("email is required"));
        assert_eq!(report.error(names::PASSWORD), Some("password is required"));
        assert_eq!(
            report.error(names::CONFIRM_PASSWORD),
            Some("confirm password is required")
        );
    }

    #[test]
    fn errors_follow_field_order() {
        let report = signup_validator().validate(&SignUpForm::new());
        let order: Vec<&str> = report.errors().keys().map(|id| id.as_str()).collect();
        assert_eq!(order, FormKind::SignUp.field_ids());
    }

    #[test]
    fn missing_values_validate_as_blank() {
        let ctx = ValidationContext::new([(names::EMAIL, "a@b.com")]);
        let report = login_validator().validate_context(&ctx);
        assert_eq!(report.error(names::PASSWORD), Some("password is required"));
        assert_eq!(report.error(names::EMAIL), None);
    }

    #[test]
    fn report_serializes_with_valid_flag() {
        let ctx = ValidationContext::new([(names::EMAIL, "bademail"), (names::PASSWORD, "123")]);
        let report = login_validator().validate_context(&ctx);
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": {
                    "email": "invalid email format",
                    "password": "minimum 6 characters",
                }
            })
        );
    }

    #[test]
    fn into_parts_matches_contract() {
        let ctx = ValidationContext::new([(names::EMAIL, "a@b.com"), (names::PASSWORD, "abcdef")]);
        let (valid, errors) = login_validator().validate_context(&ctx).into_parts();
        assert!(valid);
        assert!(errors.is_empty());
    }
}
