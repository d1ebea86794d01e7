//! Error types for Black-Scholes pricing and grid sweeps

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BsError {
    /// A market input is outside the domain of the closed-form model.
    #[error("Invalid input: {name} = {value} ({reason})")]
    InvalidInput {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid option kind: '{0}' (expected 'call' or 'put')")]
    InvalidOptionKind(String),

    /// An empty sweep sequence or a malformed axis range.
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),
}

pub type BsResult<T> = Result<T, BsError>;

impl BsError {
    pub fn invalid_input(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            name,
            value,
            reason,
        }
    }

    pub fn invalid_option_kind(tag: impl Into<String>) -> Self {
        Self::InvalidOptionKind(tag.into())
    }

    pub fn invalid_axis(msg: impl Into<String>) -> Self {
        Self::InvalidAxis(msg.into())
    }
}

/// Rejects anything that is not a strictly positive, finite number (NaN included).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> BsResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BsError::invalid_input(
            name,
            value,
            "must be > 0 and finite",
        ))
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> BsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BsError::invalid_input(name, value, "must be finite"))
    }
}
