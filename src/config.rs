use crate::core::{FieldId, names};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const INVALID_EMAIL: &str = "invalid email format";
pub const PASSWORDS_MISMATCH: &str = "passwords do not match";

/// Same shape as Android's `Patterns.EMAIL_ADDRESS`, anchored for a full match.
pub const DEFAULT_EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9+._%\-]{1,256}",
    r"@",
    r"[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
);

pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub min_password_len: usize,
    pub email_pattern: String,
    /// Human name per field, used in "<label> is required". Entries given in
    /// a config file are layered over the defaults.
    #[serde(deserialize_with = "merge_labels")]
    pub labels: IndexMap<FieldId, String>,
}

fn default_labels() -> IndexMap<FieldId, String> {
    [
        (names::FULL_NAME, "full name"),
        (names::EMAIL, "email"),
        (names::PASSWORD, "password"),
        (names::CONFIRM_PASSWORD, "confirm password"),
    ]
    .into_iter()
    .map(|(id, label)| (FieldId::from(id), label.to_string()))
    .collect()
}

fn merge_labels<'de, D>(deserializer: D) -> std::result::Result<IndexMap<FieldId, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = IndexMap::<FieldId, String>::deserialize(deserializer)?;
    let mut labels = default_labels();
    labels.extend(overrides);
    Ok(labels)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            labels: default_labels(),
        }
    }
}

impl ValidationConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).map_err(|source| Error::Parse {
            what: "validation config".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&source)?;
        debug!(
            path = %path.display(),
            min_password_len = config.min_password_len,
            "loaded validation config"
        );
        Ok(config)
    }

    pub fn email_regex(&self) -> Result<Regex> {
        Regex::new(&self.email_pattern).map_err(|source| Error::InvalidPattern {
            pattern: self.email_pattern.clone(),
            source,
        })
    }

    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn required_message(&self, id: &str) -> String {
        format!("{} is required", self.label(id))
    }

    pub fn min_length_message(&self) -> String {
        format!("minimum {} characters", self.min_password_len)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MIN_PASSWORD_LEN, ValidationConfig};
    use crate::core::names;
    use crate::error::Error;

    #[test]
    fn defaults_produce_expected_messages() {
        let config = ValidationConfig::default();
        assert_eq!(config.min_length_message(), "minimum 6 characters");
        assert_eq!(
            config.required_message(names::FULL_NAME),
            "full name is required"
        );
        assert_eq!(config.required_message("nickname"), "nickname is required");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = ValidationConfig::from_yaml_str("min_password_len: 8\n").expect("valid yaml");
        assert_eq!(config.min_password_len, 8);
        assert_eq!(config.min_length_message(), "minimum 8 characters");
        assert_eq!(config.label(names::EMAIL), "email");
    }

    #[test]
    fn labels_override_required_message() {
        let config = ValidationConfig::from_yaml_str("labels:\n  fullName: name\n")
            .expect("valid yaml");
        assert_eq!(config.required_message(names::FULL_NAME), "name is required");
        assert_eq!(
            config.required_message(names::CONFIRM_PASSWORD),
            "confirm password is required"
        );
        assert_eq!(config.label(names::EMAIL), "email");
        assert_eq!(config.label(names::PASSWORD), "password");
        assert_eq!(config.labels.len(), 4);
        assert_eq!(config.min_password_len, DEFAULT_MIN_PASSWORD_LEN);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ValidationConfig::from_yaml_str("max_password_len: 3\n")
            .expect_err("unknown key");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let config = ValidationConfig {
            email_pattern: "([".to_string(),
            ..ValidationConfig::default()
        };
        assert!(matches!(
            config.email_regex(),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rules.yaml");
        std::fs::write(&path, "min_password_len: 10\n").expect("write config");
        let config = ValidationConfig::load(&path).expect("load config");
        assert_eq!(config.min_password_len, 10);

        let missing = ValidationConfig::load(&dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
