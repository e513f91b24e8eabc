// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alembic View 2D: the transform between a simulated environment and the
//! pixels of a view.
//!
//! A viewport transform ("wormhole") maps environment points to view points
//! and back. It keeps one environment point, the anchor, pinned to one view
//! point, the position, and expresses pan, zoom and rotation relative to
//! that pair. Two regimes are provided:
//! - [`EuclideanWormhole`]: an affine mapping over a flat environment with the
//!   environment y axis pointing up and view y pointing down.
//! - [`MapWormhole`]: spherical Mercator on 256 px tiles, where zoom moves in
//!   whole tile levels and the view is always north-up.
//!
//! [`ViewportTransform`] wraps either one behind the [`Wormhole`] trait so a
//! display can hold a single value regardless of regime.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use alembic_view2d::{EnvironmentBounds, ViewportTransform, Wormhole, approx_eq};
//!
//! let env = EnvironmentBounds::new(Point::ZERO, Size::new(100.0, 50.0));
//! let mut view = ViewportTransform::euclidean(Size::new(800.0, 600.0), env);
//! view.center();
//! view.optimal_zoom();
//!
//! // Zooming around the cursor keeps the point under it in place.
//! let cursor = Point::new(200.0, 150.0);
//! let under_cursor = view.to_env(cursor);
//! view.zoom_on_point(cursor, view.zoom() * 2.0);
//! assert!(approx_eq(view.to_view(under_cursor), cursor, 1e-9));
//! ```
//!
//! ## Features
//!
//! - `logging`: emit `tracing` events for recoverable conditions such as
//!   degenerate bounds or a singular transform.
//! - `serde`: `Serialize`/`Deserialize` for [`Mode`].

mod bounds;
mod error;
mod euclidean;
mod logging;
mod map;
mod modes;
mod obstacle;
mod point;
mod viewport;
mod wormhole;

pub mod mercator;

pub use bounds::{EnvironmentBounds, ViewBounds};
pub use error::TransformError;
pub use euclidean::EuclideanWormhole;
pub use map::{DEFAULT_MAX_ZOOM_LEVEL, MapWormhole};
pub use modes::Mode;
pub use obstacle::{
    Obstacle2D, PolygonObstacle, RectObstacle, obstacle_to_view_path, obstacle_view_bounds,
};
pub use point::{DEFAULT_TOLERANCE, PixelPoint, approx_eq};
pub use viewport::ViewportTransform;
pub use wormhole::{ViewState, Wormhole};

pub use kurbo;
