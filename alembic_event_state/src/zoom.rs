// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded zoom level driven by discrete wheel notches.
//!
//! ## Minimal example
//!
//! ```
//! use alembic_event_state::zoom::ZoomManager;
//!
//! let mut zoom = ZoomManager::linear(1.0, 1.0, 10.0, 1.0).unwrap();
//! assert_eq!(zoom.increment(3), 4.0);
//! // Saturates instead of failing.
//! assert_eq!(zoom.increment(100), 10.0);
//! assert_eq!(zoom.decrement(100), 1.0);
//! ```

use crate::StateError;
use crate::error::require_positive;
use crate::logging::trace;

/// How one notch changes the zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ZoomStep {
    /// Adds `step` per notch.
    Linear {
        /// Increment per notch, `> 0`.
        step: f64,
    },
    /// Multiplies by `base` per notch.
    Exponential {
        /// Factor per notch, `> 0`.
        base: f64,
    },
}

impl ZoomStep {
    fn validate(self) -> Result<Self, StateError> {
        match self {
            Self::Linear { step } => require_positive("step", step).map(|_| self),
            Self::Exponential { base } => require_positive("base", base).map(|_| self),
        }
    }

    fn apply(self, level: f64, notches: i32) -> f64 {
        match self {
            Self::Linear { step } => level + f64::from(notches) * step,
            Self::Exponential { base } => level * base.powi(notches),
        }
    }
}

/// A zoom level kept within `[min, max]`.
///
/// The manager holds no reference to a viewport; callers read
/// [`ZoomManager::level`] and hand it to the transform themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomManager {
    level: f64,
    min: f64,
    max: f64,
    step: ZoomStep,
}

impl ZoomManager {
    /// Creates a manager; the initial `level` is clamped into `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidArgument`] if `min > max`, either limit is NaN,
    /// or the step is not strictly positive.
    pub fn new(level: f64, min: f64, max: f64, step: ZoomStep) -> Result<Self, StateError> {
        if min.is_nan() {
            return Err(StateError::InvalidArgument {
                name: "min",
                value: min,
            });
        }
        if max.is_nan() || min > max {
            return Err(StateError::InvalidArgument {
                name: "max",
                value: max,
            });
        }
        let step = step.validate()?;
        let level = if level.is_nan() { min } else { level.clamp(min, max) };
        Ok(Self {
            level,
            min,
            max,
            step,
        })
    }

    /// Shorthand for a manager with [`ZoomStep::Linear`].
    ///
    /// # Errors
    ///
    /// See [`ZoomManager::new`].
    pub fn linear(level: f64, min: f64, max: f64, step: f64) -> Result<Self, StateError> {
        Self::new(level, min, max, ZoomStep::Linear { step })
    }

    /// Shorthand for a manager with [`ZoomStep::Exponential`].
    ///
    /// # Errors
    ///
    /// See [`ZoomManager::new`].
    pub fn exponential(level: f64, min: f64, max: f64, base: f64) -> Result<Self, StateError> {
        Self::new(level, min, max, ZoomStep::Exponential { base })
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Lower limit.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper limit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Stepping rule.
    #[must_use]
    pub fn step(&self) -> ZoomStep {
        self.step
    }

    /// Replaces the stepping rule.
    ///
    /// # Errors
    ///
    /// [`StateError::InvalidArgument`] if the step is not strictly positive;
    /// the previous rule is kept.
    pub fn set_step(&mut self, step: ZoomStep) -> Result<(), StateError> {
        self.step = step.validate()?;
        Ok(())
    }

    /// Steps `notches` forward and returns the new level.
    pub fn increment(&mut self, notches: i32) -> f64 {
        let target = self.step.apply(self.level, notches);
        self.set_zoom(target)
    }

    /// Steps `notches` backward and returns the new level.
    pub fn decrement(&mut self, notches: i32) -> f64 {
        self.increment(notches.saturating_neg())
    }

    /// Overrides the level, clamped into `[min, max]`, and returns it.
    ///
    /// NaN leaves the level unchanged.
    pub fn set_zoom(&mut self, level: f64) -> f64 {
        if level.is_nan() {
            trace!("ignoring NaN zoom level");
            return self.level;
        }
        let clamped = level.clamp(self.min, self.max);
        if clamped != level {
            trace!(requested = level, clamped, "zoom level saturated");
        }
        self.level = clamped;
        self.level
    }
}
