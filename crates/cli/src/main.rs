#![deny(unsafe_code)]
//! CLI binary for lattice-fourier.
//!
//! Subcommands:
//! - `estimate [field]` — estimate a coefficient grid and print the report
//! - `replay <request.json>` — rerun a saved `EstimateRequest`
//! - `list` — print available fields and their parameters

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use lattice_fourier_core::field::ScalarField;
use lattice_fourier_core::format::rows;
use lattice_fourier_core::request::{DEFAULT_RADIUS, DEFAULT_SAMPLES};
use lattice_fourier_core::{format_report, fourier_grid, EstimateRequest};
use lattice_fourier_fields::FieldKind;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lattice-fourier",
    about = "Estimate 2-D Fourier coefficients of fields on the unit square"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log progress to stderr; repeat for more detail. `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate all coefficients with |n|, |m| <= radius and print the report.
    Estimate {
        /// Field name (e.g. "square").
        #[arg(default_value = "square")]
        field: String,

        /// Wavevector enumeration radius.
        #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: i64,

        /// Sample points per axis.
        #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Rerun an estimate from a JSON request file.
    Replay {
        /// Path to the request document.
        request: PathBuf,
    },
    /// List available fields.
    List,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn estimate(request: &EstimateRequest, json: bool) -> Result<(), CliError> {
    request.validate()?;
    let field = FieldKind::from_name(&request.field, &request.params)?;
    info!(
        field = %request.field,
        radius = request.radius,
        samples = request.samples,
        "estimating coefficients"
    );

    let map = fourier_grid(|z| field.sample(z), request.radius, request.samples)?;

    if json {
        let info = serde_json::json!({
            "field": request.field,
            "radius": request.radius,
            "samples": request.samples,
            "params": field.params(),
            "coefficients": rows(&map),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", format_report(&map));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = FieldKind::list_fields();
            if cli.json {
                let mut fields = serde_json::Map::new();
                for name in names {
                    let field = FieldKind::from_name(name, &serde_json::json!({}))?;
                    fields.insert(name.to_string(), field.param_schema());
                }
                let info = serde_json::json!({ "fields": fields });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Fields:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Estimate {
            field,
            radius,
            samples,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let mut request = EstimateRequest::new(&field, radius, samples);
            request.params = params;
            estimate(&request, cli.json)?;
        }
        Command::Replay { request } => {
            let request = EstimateRequest::load(&request)?;
            estimate(&request, cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
