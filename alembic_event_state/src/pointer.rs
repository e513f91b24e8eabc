// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer delta helper: the vector between the last two pointer samples.
//!
//! ## Usage
//!
//! 1) Feed every pointer sample to [`PointerDelta::set_current_position`].
//! 2) Read [`PointerDelta::variation`] to get the movement since the previous
//!    sample, for panning or as rotation input.
//! 3) Call [`PointerDelta::prime`] on pointer press so the first drag sample
//!    does not jump from the origin.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use alembic_event_state::pointer::PointerDelta;
//!
//! let mut pointer = PointerDelta::default();
//! pointer.prime(Point::new(10.0, 20.0));
//! pointer.set_current_position(Point::new(15.0, 25.0));
//! assert_eq!(pointer.variation(), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Last two sampled pointer positions.
///
/// Both samples start at the origin and no primed state is tracked, so
/// without [`PointerDelta::prime`] the first variation is measured from
/// `(0, 0)`.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct PointerDelta {
    previous: Point,
    current: Point,
}

impl PointerDelta {
    /// Records a new sample; the old current sample becomes the previous one.
    pub fn set_current_position(&mut self, pos: Point) {
        self.previous = self.current;
        self.current = pos;
    }

    /// Sets both samples to `pos`, so the next variation starts from there.
    pub fn prime(&mut self, pos: Point) {
        self.previous = pos;
        self.current = pos;
    }

    /// Movement between the previous and the current sample.
    #[must_use]
    pub fn variation(&self) -> Vec2 {
        self.current - self.previous
    }

    /// The previous sample.
    #[must_use]
    pub fn previous(&self) -> Point {
        self.previous
    }

    /// The most recent sample.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }
}
