use crate::core::FormKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid email pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown field `{field}` for {form} form")]
    UnknownField { form: FormKind, field: String },

    #[error("validator for {validator} forms cannot check a {form} form")]
    ValidatorMismatch { form: FormKind, validator: FormKind },

    #[error("field `{field}` has no visibility toggle")]
    NotMaskable { field: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
