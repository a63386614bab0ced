//! Error types for Simplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Simplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in Simplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A 2-D array has rows of different lengths.
    #[error("Shape mismatch: row {row} has length {found}, expected {expected}")]
    ShapeMismatch {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Paired arrays, or a sampling and an array, disagree in length.
    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        /// What was being compared.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// Malformed style, grid-parameter or axis-format string.
    #[error("Cannot parse '{input}': {reason}")]
    FormatParse {
        /// The rejected string.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Axis limits that are not finite or not increasing.
    #[error("Invalid limits: min={min}, max={max}")]
    InvalidLimits {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },

    /// Sampling with a non-positive or non-finite interval.
    #[error("Invalid sampling: {reason}")]
    InvalidSampling {
        /// Why the sampling was rejected.
        reason: String,
    },

    /// A token in a text input could not be read as a number.
    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Text input contained no numbers.
    #[error("Input contains no values")]
    EmptyInput,

    /// Input shape does not fit the requested plot.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl PlotError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(row: usize, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            row,
            expected,
            found,
        }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            found,
        }
    }

    /// Create a FormatParse error.
    pub fn format_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FormatParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSampling error.
    pub fn invalid_sampling(reason: impl Into<String>) -> Self {
        Self::InvalidSampling {
            reason: reason.into(),
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line,
            token: token.into(),
        }
    }
}

/// Check that a pair of axis limits is finite and increasing.
pub(crate) fn check_limits(min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(PlotError::InvalidLimits { min, max })
    }
}

/// Check that two lengths agree.
pub(crate) fn check_length(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PlotError::length_mismatch(what, expected, found))
    }
}
