// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-space outlines for environment obstacles.

use kurbo::{BezPath, Point, Rect};

use crate::Wormhole;

/// A polygonal obstacle described in environment space.
pub trait Obstacle2D {
    /// Polygon vertices in order; the outline closes back to the first one.
    fn vertices(&self) -> &[Point];
}

/// An arbitrary polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonObstacle {
    vertices: Vec<Point>,
}

impl PolygonObstacle {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }
}

impl Obstacle2D for PolygonObstacle {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectObstacle {
    rect: Rect,
    corners: [Point; 4],
}

impl RectObstacle {
    /// Creates a rectangular obstacle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let rect = rect.abs();
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        Self { rect, corners }
    }

    /// The rectangle in environment space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Obstacle2D for RectObstacle {
    fn vertices(&self) -> &[Point] {
        &self.corners
    }
}

/// Maps an obstacle's outline into view space as a closed path.
///
/// An obstacle without vertices yields an empty path.
#[must_use]
pub fn obstacle_to_view_path<W, O>(wormhole: &W, obstacle: &O) -> BezPath
where
    W: Wormhole + ?Sized,
    O: Obstacle2D + ?Sized,
{
    let mut path = BezPath::new();
    let mut vertices = obstacle.vertices().iter();
    let Some(&first) = vertices.next() else {
        return path;
    };
    path.move_to(wormhole.to_view(first));
    for &v in vertices {
        path.line_to(wormhole.to_view(v));
    }
    path.close_path();
    path
}

/// View-space bounding box of an obstacle, or `None` if it has no vertices.
#[must_use]
pub fn obstacle_view_bounds<W, O>(wormhole: &W, obstacle: &O) -> Option<Rect>
where
    W: Wormhole + ?Sized,
    O: Obstacle2D + ?Sized,
{
    obstacle
        .vertices()
        .iter()
        .map(|&v| wormhole.to_view(v))
        .fold(None, |acc: Option<Rect>, p| {
            Some(match acc {
                Some(r) => r.union_pt(p),
                None => Rect::from_points(p, p),
            })
        })
}
