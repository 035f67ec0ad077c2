//! Failures of the `lattice-fourier` binary and the exit code each one maps to.
//!
//! - 0: report printed
//! - 2: rejected by clap before `run` starts
//! - 10: estimator refused the request, or a field failed at a sample point
//! - 11: a replay request file could not be read
//! - 12: unknown field name, or `--params` the field cannot accept
//! - 13: a request document or the `--json` output failed to (de)serialize

use lattice_fourier_core::FourierError;
use std::fmt;

/// What went wrong while running a subcommand.
pub enum CliError {
    /// The estimator rejected its arguments or a field sample failed.
    Estimate(FourierError),
    /// A request file was missing or unreadable.
    Io(String),
    /// The field name or its parameters were not usable.
    Input(String),
    /// JSON could not be parsed or produced.
    Serialization(String),
}

impl CliError {
    /// Process exit code, as listed in the module docs.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Estimate(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Estimate(e) => write!(f, "estimate failed: {e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl From<FourierError> for CliError {
    fn from(e: FourierError) -> Self {
        match e {
            FourierError::Io(msg) => CliError::Io(msg),
            FourierError::Serialization(msg) => CliError::Serialization(msg),
            e @ (FourierError::UnknownField(_)
            | FourierError::ParamTypeMismatch { .. }
            | FourierError::ParamOutOfRange { .. }) => CliError::Input(e.to_string()),
            other => CliError::Estimate(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
