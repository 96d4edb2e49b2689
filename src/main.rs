//! authforms - validate login and sign-up form input from the command line

use anyhow::{Context, Result};
use authforms::core::{Form, FormKind, LoginForm, SignUpForm, names};
use authforms::{FormValidator, ValidationConfig, ValidationReport};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_INVALID: u8 = 2;

/// Validate login and sign-up form input
#[derive(Parser)]
#[command(name = "authforms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML file overriding the default validation rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate login credentials
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Validate a sign-up form
    Signup {
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// Validate a YAML or JSON document of the form `{ form, values }`
    Check { file: PathBuf },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FormDocument {
    form: FormKind,
    #[serde(default)]
    values: IndexMap<String, String>,
}

fn main() -> Result<ExitCode> {
    // AUTHFORMS_LOG takes an EnvFilter directive, e.g. AUTHFORMS_LOG=authforms=debug
    let filter = EnvFilter::try_from_env("AUTHFORMS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Exit code 2 means "form invalid", so usage errors must not reuse clap's 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            err.print()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = match &cli.config {
        Some(path) => ValidationConfig::load(path)?,
        None => ValidationConfig::default(),
    };

    let (kind, values) = match cli.command {
        Commands::Login { email, password } => (
            FormKind::Login,
            IndexMap::from([
                (names::EMAIL.to_string(), email),
                (names::PASSWORD.to_string(), password),
            ]),
        ),
        Commands::Signup {
            full_name,
            email,
            password,
            confirm_password,
        } => (
            FormKind::SignUp,
            IndexMap::from([
                (names::FULL_NAME.to_string(), full_name),
                (names::EMAIL.to_string(), email),
                (names::PASSWORD.to_string(), password),
                (names::CONFIRM_PASSWORD.to_string(), confirm_password),
            ]),
        ),
        Commands::Check { file } => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let doc: FormDocument = serde_yaml::from_str(&source)
                .with_context(|| format!("failed to parse {}", file.display()))?;
            (doc.form, doc.values)
        }
    };

    let report = validate(kind, &config, values)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

fn validate(
    kind: FormKind,
    config: &ValidationConfig,
    values: IndexMap<String, String>,
) -> Result<ValidationReport> {
    let validator = FormValidator::from_config(kind, config)?;
    let report = match kind {
        FormKind::Login => {
            let mut form = LoginForm::new();
            form.fill(values)?;
            validator.validate(&form)
        }
        FormKind::SignUp => {
            let mut form = SignUpForm::new();
            form.fill(values)?;
            validator.validate(&form)
        }
    };
    Ok(report)
}
