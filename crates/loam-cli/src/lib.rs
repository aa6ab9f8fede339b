//! Loam CLI commands.
//!
//! Reads schemas and values as JSON (from files, or `-` for stdin) and runs
//! the schema operations over them.

use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use rhizome_loam_schema::{
    ItemIndexing, Options, Schema, SchemaError, check_value_with, synthesize_with, type_tag,
    validate_schema,
};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "loam")]
#[command(about = "Validate schemas, check values and synthesize fixtures")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a schema file
    Lint {
        /// Schema file (or - for stdin)
        schema: String,
    },

    /// Synthesize a value satisfying a schema
    Synth {
        /// Schema file (or - for stdin)
        schema: String,

        /// Skip schema validation
        #[arg(long)]
        no_validate: bool,

        /// Existing JSON object to merge synthesized fields into
        #[arg(long)]
        into: Option<String>,

        /// Print compact JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a value against a schema
    Check {
        /// Value file (or - for stdin)
        value: String,

        /// Schema file (or - for stdin)
        schema: String,

        /// Skip schema validation
        #[arg(long)]
        no_validate: bool,

        /// Reuse array item schemas cyclically instead of wrapping once
        #[arg(long)]
        cyclic_items: bool,

        /// Allow fields marked `optional: true` to be missing
        #[arg(long)]
        honor_optional: bool,
    },
}

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("only one input can be read from stdin")]
    StdinTwice,

    #[error("{path}: expected a JSON object to synthesize into, got {found}")]
    TargetNotObject { path: String, found: &'static str },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Run a parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Lint { schema } => {
            let fields = read_schema(&schema)?;
            validate_schema(&fields)?;
            info!("{} is a valid schema", schema);
            writeln!(out, "ok")?;
        }

        Commands::Synth {
            schema,
            no_validate,
            into,
            compact,
        } => {
            ensure_one_stdin(&schema, into.as_deref().unwrap_or_default())?;
            let fields = read_schema(&schema)?;
            let mut target = match into {
                Some(ref path) => read_object(path)?,
                None => Map::new(),
            };
            let options = Options::new().with_schema_validation(!no_validate);
            synthesize_with(&fields, &mut target, &options)?;

            let value = Value::Object(target);
            let json = if compact {
                serde_json::to_string(&value)
            } else {
                serde_json::to_string_pretty(&value)
            }
            .map_err(|source| CliError::Json {
                path: "<output>".to_string(),
                source,
            })?;
            writeln!(out, "{}", json)?;
        }

        Commands::Check {
            value,
            schema,
            no_validate,
            cyclic_items,
            honor_optional,
        } => {
            ensure_one_stdin(&value, &schema)?;
            let fields = read_schema(&schema)?;
            let document = read_json(&value)?;
            let indexing = if cyclic_items {
                ItemIndexing::Cyclic
            } else {
                ItemIndexing::SingleWrap
            };
            let options = Options::new()
                .with_schema_validation(!no_validate)
                .with_item_indexing(indexing)
                .with_honor_optional(honor_optional);
            check_value_with(&document, &fields, &options)?;
            info!("{} conforms to {}", value, schema);
            writeln!(out, "ok")?;
        }
    }

    Ok(())
}

fn ensure_one_stdin(first: &str, second: &str) -> Result<(), CliError> {
    if first == "-" && second == "-" {
        return Err(CliError::StdinTwice);
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String, CliError> {
    debug!("Reading {}", path);
    let read = |source| CliError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(read)
    }
}

fn read_json(path: &str) -> Result<Value, CliError> {
    let input = read_input(path)?;
    serde_json::from_str(&input).map_err(|source| CliError::Json {
        path: path.to_string(),
        source,
    })
}

fn read_schema(path: &str) -> Result<Schema, CliError> {
    let input = read_input(path)?;
    serde_json::from_str(&input).map_err(|source| CliError::Json {
        path: path.to_string(),
        source,
    })
}

fn read_object(path: &str) -> Result<Map<String, Value>, CliError> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::TargetNotObject {
            path: path.to_string(),
            found: type_tag(&other),
        }),
    }
}
