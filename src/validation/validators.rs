use crate::validation::ValidationContext;
use regex::Regex;

pub type ValidationError = String;
pub type Validator =
    Box<dyn Fn(&str, &ValidationContext) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(
    validators: &[Validator],
    value: &str,
    ctx: &ValidationContext,
) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value, ctx)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

/// Whole-value match. The pattern is expected to carry its own anchors.
pub fn pattern(re: Regex, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str, _: &ValidationContext| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Value must equal the current value of `other` in the same form.
pub fn matches_field(other: impl Into<String>, message: impl Into<String>) -> Validator {
    let other = other.into();
    let message = message.into();
    Box::new(move |value: &str, ctx: &ValidationContext| {
        if ctx.text(&other) == Some(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}
