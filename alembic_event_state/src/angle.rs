// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation angle accumulated from horizontal drag distance.

use crate::StateError;
use crate::error::require_positive;

/// Accumulates a rotation angle in degrees, wrapping into `[0, 360)`.
///
/// Unlike zoom, angles wrap rather than saturate: a full turn is a valid
/// state.
///
/// ```
/// use alembic_event_state::angle::AngleManager;
///
/// let mut angle = AngleManager::new(0.5).unwrap();
/// angle.accumulate(100.0);
/// assert_eq!(angle.total_degrees(), 50.0);
/// angle.accumulate(-200.0);
/// assert_eq!(angle.total_degrees(), 310.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleManager {
    total_degrees: f64,
    sensitivity: f64,
}

impl AngleManager {
    /// Degrees per pixel used by [`AngleManager::default`].
    pub const DEFAULT_SENSITIVITY: f64 = 0.5;

    /// Creates an accumulator turning `sensitivity` degrees per pixel.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidArgument`] if `sensitivity` is not a positive
    /// finite number.
    pub fn new(sensitivity: f64) -> Result<Self, StateError> {
        Ok(Self {
            total_degrees: 0.0,
            sensitivity: require_positive("sensitivity", sensitivity)?,
        })
    }

    /// Degrees per pixel of horizontal drag.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Adds `pixel_dx` pixels of drag and returns the new total in degrees.
    ///
    /// Non-finite input is ignored.
    pub fn accumulate(&mut self, pixel_dx: f64) -> f64 {
        let total = self.total_degrees + pixel_dx * self.sensitivity;
        if total.is_finite() {
            let wrapped = total.rem_euclid(360.0);
            self.total_degrees = if wrapped >= 360.0 { 0.0 } else { wrapped };
        }
        self.total_degrees
    }

    /// Accumulated angle in `[0, 360)` degrees.
    #[must_use]
    pub fn total_degrees(&self) -> f64 {
        self.total_degrees
    }

    /// Accumulated angle in radians.
    #[must_use]
    pub fn total_radians(&self) -> f64 {
        self.total_degrees.to_radians()
    }

    /// Sets the accumulated angle back to zero.
    pub fn reset(&mut self) {
        self.total_degrees = 0.0;
    }
}

impl Default for AngleManager {
    fn default() -> Self {
        Self {
            total_degrees: 0.0,
            sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }
}
