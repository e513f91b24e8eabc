// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete pixel points and the tolerance policy for continuous ones.
//!
//! Continuous points (both environment and view space) are plain
//! [`kurbo::Point`]s. The space a point lives in is implied by the call that
//! produced it; nothing here tags it.
//!
//! `kurbo::Point` compares exactly. Results of transform arithmetic drift by a
//! few ULPs per operation, so code comparing them should go through
//! [`approx_eq`] rather than `==`.

use core::fmt;

use kurbo::Point;

/// Default tolerance for [`approx_eq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Returns `true` when `a` and `b` agree on both axes within `tolerance`.
///
/// The bound is mixed absolute/relative: `|a - b| <= tolerance * max(1, |a|, |b|)`
/// per axis, so it behaves sensibly for both pixel-scale and large
/// geographic-scale magnitudes. Non-finite coordinates never compare equal.
#[must_use]
pub fn approx_eq(a: Point, b: Point, tolerance: f64) -> bool {
    axis_approx_eq(a.x, b.x, tolerance) && axis_approx_eq(a.y, b.y, tolerance)
}

fn axis_approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}

/// A point on the pixel grid.
///
/// Equality and hashing are exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelPoint {
    /// Column, growing rightwards.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl PixelPoint {
    /// The grid origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a new pixel point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a continuous point to the nearest pixel.
    ///
    /// Halves round up (`2.5 → 3`, `-2.5 → -2`). Values beyond the `i32` range
    /// saturate and NaN maps to `0`.
    #[must_use]
    pub fn from_point(p: Point) -> Self {
        Self {
            x: snap(p.x),
            y: snap(p.y),
        }
    }

    /// Returns the continuous point at this pixel.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates, which is the documented behavior"
)]
fn snap(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

impl From<PixelPoint> for Point {
    fn from(p: PixelPoint) -> Self {
        p.to_point()
    }
}

impl From<Point> for PixelPoint {
    fn from(p: Point) -> Self {
        Self::from_point(p)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
