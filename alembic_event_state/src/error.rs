// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised when configuring an input accumulator.
///
/// Runtime updates never fail: zoom saturates and angles wrap.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum StateError {
    /// A configuration value is out of its valid range.
    #[error("invalid value for `{name}`: {value}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Rejects non-finite and non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, StateError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StateError::InvalidArgument { name, value })
    }
}
