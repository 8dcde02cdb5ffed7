//! Error handling and exit codes.

use corrstat_core::constants::exit_codes;
use corrstat_core::RegressionError;
use corrstat_data::DataError;

/// Application-level errors not covered by the library crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A dataset command was run without a snapshot.
    #[error("no dataset given: pass --data <FILE> or set CORRSTAT_DATA")]
    MissingDataset,

    /// The points input could not be decoded.
    #[error("invalid points input: {0}")]
    InvalidPoints(#[from] serde_json::Error),
}

/// Map an error to the process exit code.
///
/// The whole `anyhow` context chain is searched, so wrapped library errors
/// keep their specific code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<RegressionError>() {
            return regression_exit_code(e);
        }
        if let Some(e) = cause.downcast_ref::<DataError>() {
            return data_exit_code(e);
        }
        if let Some(e) = cause.downcast_ref::<AppError>() {
            return match e {
                AppError::MissingDataset => exit_codes::ERROR_CONFIG,
                AppError::InvalidPoints(_) => exit_codes::ERROR_GENERIC,
            };
        }
    }
    exit_codes::ERROR_GENERIC
}

fn regression_exit_code(err: &RegressionError) -> i32 {
    match err {
        RegressionError::InsufficientData { .. } => exit_codes::ERROR_INSUFFICIENT,
        RegressionError::DegenerateInput(_) | RegressionError::NonFinite { .. } => {
            exit_codes::ERROR_DEGENERATE
        }
    }
}

fn data_exit_code(err: &DataError) -> i32 {
    match err {
        DataError::Io { .. } | DataError::Parse(_) => exit_codes::ERROR_GENERIC,
        DataError::MissingParameter(_)
        | DataError::UnknownIndicator(_)
        | DataError::YearOutOfRange { .. } => exit_codes::ERROR_CONFIG,
    }
}
