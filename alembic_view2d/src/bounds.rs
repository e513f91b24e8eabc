// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Size of the rendering surface in pixels.
///
/// Owned by the surface; the engine only reads it.
pub type ViewBounds = Size;

/// Axis-aligned bounding box of the simulated environment.
///
/// For geographic environments the offset is the south-west corner as
/// `(longitude, latitude)` and the size is `(Δlongitude, Δlatitude)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnvironmentBounds {
    /// Minimum corner in environment space.
    pub offset: Point,
    /// Extent along each axis.
    pub size: Size,
}

impl EnvironmentBounds {
    /// Creates bounds from an offset and a size.
    #[must_use]
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Creates bounds covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self {
            offset: rect.origin(),
            size: rect.size(),
        }
    }

    /// Environment width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Environment height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The minimum corner (`offset`).
    #[must_use]
    pub fn min_corner(&self) -> Point {
        self.offset
    }

    /// The corner opposite to [`EnvironmentBounds::min_corner`].
    #[must_use]
    pub fn max_corner(&self) -> Point {
        self.offset + self.size.to_vec2()
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn centroid(&self) -> Point {
        self.offset + self.size.to_vec2() * 0.5
    }

    /// `width / height`; infinite or NaN for degenerate boxes.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.size.width / self.size.height
    }

    /// Returns `true` if either extent is zero, negative or not finite.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.size.width > 0.0
            && self.size.height > 0.0
            && self.size.width.is_finite()
            && self.size.height.is_finite())
    }

    /// The box as a [`Rect`].
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }
}

impl From<Rect> for EnvironmentBounds {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::EnvironmentBounds;

    #[test]
    fn corners_and_centroid() {
        let env = EnvironmentBounds::new(Point::new(-10.0, 5.0), Size::new(20.0, 10.0));
        assert_eq!(env.min_corner(), Point::new(-10.0, 5.0));
        assert_eq!(env.max_corner(), Point::new(10.0, 15.0));
        assert_eq!(env.centroid(), Point::new(0.0, 10.0));
        assert!(!env.is_degenerate());
    }

    #[test]
    fn from_rect_normalizes_orientation() {
        let env = EnvironmentBounds::from_rect(Rect::new(4.0, 4.0, 0.0, 1.0));
        assert_eq!(env.offset, Point::new(0.0, 1.0));
        assert_eq!(env.size, Size::new(4.0, 3.0));
    }

    #[test]
    fn zero_size_is_degenerate() {
        let env = EnvironmentBounds::default();
        assert!(env.is_degenerate());
        assert!(env.aspect_ratio().is_nan());
        assert_eq!(env.centroid(), Point::ZERO);
    }
}
