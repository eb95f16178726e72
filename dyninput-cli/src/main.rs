#![doc = include_str!("../../docs/en/cli_usage.md")]

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use dyninput::{
    DocumentFormat, FieldValue, FormDefinition, FormState, Locale, definition_schema,
    form_definition_from_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "dyninput",
    version,
    about = "Check field values against a dynamic form definition"
)]
struct Cli {
    /// Form definition: file path or "-" for stdin
    #[arg(short = 'd', long = "definition", value_name = "PATH")]
    definition: Option<String>,

    /// Value to apply, as LABEL=VALUE. Applied in the order given.
    #[arg(short = 's', long = "set", value_name = "LABEL=VALUE", action = ArgAction::Append)]
    values: Vec<String>,

    /// Definition format (detected from the file extension when omitted)
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Language of diagnostics, overriding the definition
    #[arg(long = "locale", value_name = "LOCALE")]
    locale: Option<Locale>,

    /// Print the JSON Schema of definition documents and exit
    #[arg(long = "print-schema")]
    print_schema: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.print_schema {
        let schema = definition_schema().map_err(|err| eyre!("{err:#}"))?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(ExitCode::SUCCESS);
    }

    let spec = cli
        .definition
        .as_deref()
        .ok_or_else(|| eyre!("--definition is required (use --print-schema to see its format)"))?;
    let mut definition = load_definition(spec, cli.format)?;
    if let Some(locale) = cli.locale {
        definition.options.locale = locale;
    }

    let mut form = FormState::from_definition(&definition)?;
    tracing::info!(fields = form.len(), locale = %definition.options.locale, "form ready");
    for assignment in &cli.values {
        let (label, raw) = split_assignment(assignment)?;
        let value = raw_value(&form, label, raw)?;
        form.set_value(label, value)?;
    }

    if let Some(title) = form.title() {
        println!("# {title}");
    }
    for (label, status) in form.statuses() {
        println!("{label}: {status}");
    }
    if form.has_errors() {
        eprintln!("errors:");
        for entry in form.errors() {
            eprintln!("  {}: {entry}", entry.label);
        }
    }

    let invalid = form.invalid_labels();
    if invalid.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("invalid fields: {}", invalid.join(", "));
        Ok(ExitCode::FAILURE)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_definition(spec: &str, format: Option<DocumentFormat>) -> Result<FormDefinition> {
    let (contents, detected) = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read definition from stdin")?;
        (buffer, None)
    } else {
        let path = PathBuf::from(spec);
        let contents = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        (contents, DocumentFormat::from_path(&path))
    };
    let format = format.or(detected).unwrap_or_default();
    form_definition_from_str(&contents, format).map_err(|err| eyre!("{err:#}"))
}

fn split_assignment(assignment: &str) -> Result<(&str, &str)> {
    assignment
        .split_once('=')
        .filter(|(label, _)| !label.is_empty())
        .ok_or_else(|| eyre!("expected LABEL=VALUE, got '{assignment}'"))
}

/// Checkbox fields take a checked state; every other field takes the raw text.
fn raw_value(form: &FormState, label: &str, raw: &str) -> Result<FieldValue> {
    let field = form
        .field(label)
        .ok_or_else(|| eyre!("no field labelled '{label}'"))?;
    if field.is_boolean() {
        return match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(FieldValue::Bool(true)),
            "false" | "off" | "no" | "0" | "" => Ok(FieldValue::Bool(false)),
            other => Err(eyre!("'{other}' is not a checkbox state for {label}")),
        };
    }
    Ok(FieldValue::text(raw))
}
