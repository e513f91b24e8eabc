// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alembic_event_state::StateError;
use alembic_view2d::TransformError;
use thiserror::Error;

/// A display name that is not in the registry.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No display is registered under this name.
    #[error("unknown display `{0}`")]
    UnknownDisplay(String),
}

/// Errors raised while configuring or initializing a display.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum DisplayError {
    /// Display kind lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Zoom or rotation settings are invalid.
    #[error(transparent)]
    State(#[from] StateError),
    /// The transform rejected a setting.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
