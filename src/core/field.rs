use crate::core::FieldId;

/// A single editable input: name, current value and the error shown under it.
///
/// An empty `error` means the field is currently clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    id: FieldId,
    label: String,
    value: String,
    error: String,
}

impl FormField {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            error: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Replaces the value from user input. Returns `true` when a shown error
    /// was cleared as a result.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        self.value = value.into();
        if self.error.is_empty() {
            return false;
        }
        self.error.clear();
        true
    }

    pub fn set_error(&mut self, error: Option<&str>) {
        match error {
            Some(message) => {
                self.error.clear();
                self.error.push_str(message);
            }
            None => self.error.clear(),
        }
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::FormField;

    #[test]
    fn new_field_starts_empty_and_clean() {
        let field = FormField::new("fullName", "Full Name");
        assert_eq!(field.id().as_str(), "fullName");
        assert_eq!(field.label(), "Full Name");
        assert_eq!(field.value(), "");
        assert!(!field.has_error());
    }

    #[test]
    fn editing_clears_shown_error() {
        let mut field = FormField::new("email", "Email");
        field.set_error(Some("email is required"));
        assert!(field.has_error());

        assert!(field.set_value("a"));
        assert_eq!(field.error(), "");
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn editing_clean_field_reports_nothing_cleared() {
        let mut field = FormField::new("email", "Email");
        assert!(!field.set_value("a@b.com"));
        assert!(!field.has_error());
    }

    #[test]
    fn set_error_none_clears() {
        let mut field = FormField::new("password", "Password").with_value("abc");
        field.set_error(Some("minimum 6 characters"));
        field.set_error(None);
        assert!(!field.has_error());
        assert_eq!(field.value(), "abc");
    }
}
