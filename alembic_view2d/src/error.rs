// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::Mode;

/// Recoverable conditions reported by a viewport transform.
///
/// None of these leave the transform in an inconsistent state: the operation
/// that reports one either did nothing or fell back to a well-defined value.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// The environment→view matrix cannot be inverted (zero zoom or rate).
    #[error("degenerate transform: the view-to-environment mapping is singular")]
    SingularTransform,

    /// The operation has no meaning in the current coordinate regime.
    #[error("`{operation}` is not supported in {mode:?} mode")]
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Mode the transform was in.
        mode: Mode,
    },

    /// An argument was outside the accepted domain.
    #[error("invalid value for `{name}`: {value}")]
    InvalidArgument {
        /// Name of the rejected argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
