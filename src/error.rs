use thiserror::Error;

/// Malformed nuclear data encountered while building a table or model.
///
/// Only construction can fail; evaluating or sampling a table that was built
/// successfully never returns an error.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("record index {index} out of bounds for record of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("value {value} at record index {index} is not a valid count")]
    InvalidCount { index: usize, value: f64 },

    #[error("unknown interpolation law code {0}")]
    InvalidInterpolation(u32),

    #[error("table needs at least {required} points, found {found}")]
    TooFewPoints { required: usize, found: usize },

    #[error("length mismatch: {what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what} is not strictly increasing at index {index}")]
    NonIncreasingGrid { what: &'static str, index: usize },

    #[error("invalid region breakpoints: {0}")]
    InvalidBreakpoints(String),

    #[error("non-finite value in {what} at index {index}")]
    NonFiniteValue { what: &'static str, index: usize },

    #[error("evaporation bin table needs at least 2 bin edges, found {0}")]
    EmptyBins(usize),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataFormatError>;

/// Checks that `values` is strictly increasing and finite.
pub(crate) fn check_strictly_increasing(what: &'static str, values: &[f64]) -> Result<()> {
    for (index, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(DataFormatError::NonFiniteValue { what, index });
        }
    }
    if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
        return Err(DataFormatError::NonIncreasingGrid {
            what,
            index: index + 1,
        });
    }
    Ok(())
}

pub(crate) fn check_finite(what: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DataFormatError::NonFiniteValue { what, index }),
        None => Ok(()),
    }
}
