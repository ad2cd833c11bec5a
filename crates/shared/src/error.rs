use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    OutOfRange,
    AdapterUnavailable,
    EmptyCollection,
    InvalidSetting,
}

/// Failures raised by page controllers. None of them is fatal: callers keep
/// the previous state and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },
    #[error("viewport observer is not available in this environment")]
    AdapterUnavailable,
    #[error("{what} needs at least one item")]
    EmptyCollection { what: &'static str },
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

impl ControllerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ControllerError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ControllerError::AdapterUnavailable => ErrorCode::AdapterUnavailable,
            ControllerError::EmptyCollection { .. } => ErrorCode::EmptyCollection,
            ControllerError::InvalidSetting { .. } => ErrorCode::InvalidSetting,
        }
    }

    pub fn invalid_setting(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }
}

/// Checks `index` against a collection of `len` items.
pub fn check_index(index: usize, len: usize) -> Result<(), ControllerError> {
    if index < len {
        Ok(())
    } else {
        Err(ControllerError::OutOfRange { index, len })
    }
}
