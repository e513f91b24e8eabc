// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::logging::warn;
use crate::{EnvironmentBounds, Mode, PixelPoint, TransformError};

/// Snapshot of the parameters of a viewport transform.
///
/// `position` is the view-space point that `anchor` (environment space) maps
/// to. Every public operation preserves `to_view(anchor) == position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// View-space location of the anchor.
    pub position: Point,
    /// Environment-space point pinned at `position`.
    pub anchor: Point,
    /// Zoom factor (Euclidean) or tile zoom level (map).
    pub zoom: f64,
    /// Rotation in radians, in `[0, 2π)`.
    pub rotation: f64,
    /// Horizontal stretch rate.
    pub h_rate: f64,
    /// Vertical stretch rate.
    pub v_rate: f64,
    /// Active scaling mode.
    pub mode: Mode,
}

/// Bidirectional mapping between environment space and view space.
///
/// Implementations keep one environment point (the anchor) pinned to one view
/// point and express pan, zoom and rotation relative to it. Anchored
/// operations ([`Wormhole::zoom_on_point`], [`Wormhole::rotate_around_point`])
/// keep the environment point under the pivot fixed on screen.
pub trait Wormhole {
    /// Current size of the view in pixels.
    fn view_size(&self) -> Size;

    /// Updates the view size after the surface was resized.
    fn set_view_size(&mut self, size: Size);

    /// Bounding box of the environment this transform was built for.
    fn env_bounds(&self) -> EnvironmentBounds;

    /// Current scaling mode.
    fn mode(&self) -> Mode;

    /// Switches the scaling mode.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnsupportedOperation`] if the regime cannot honor
    /// `mode`; the state is left unchanged.
    fn set_mode(&mut self, mode: Mode) -> Result<(), TransformError>;

    /// Current zoom.
    fn zoom(&self) -> f64;

    /// Sets the zoom around the current anchor.
    fn set_zoom(&mut self, zoom: f64);

    /// Current rotation in radians.
    fn rotation(&self) -> f64;

    /// Sets the rotation around the current anchor.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnsupportedOperation`] if the regime is always
    /// north-up.
    fn set_rotation(&mut self, radians: f64) -> Result<(), TransformError>;

    /// View-space location of the anchor.
    fn view_position(&self) -> Point;

    /// Snapshot of all transform parameters.
    fn state(&self) -> ViewState;

    /// Maps an environment point into view space.
    fn to_view(&self, env_point: Point) -> Point;

    /// Maps a view point into environment space.
    ///
    /// # Errors
    ///
    /// [`TransformError::SingularTransform`] if the mapping cannot be inverted.
    fn try_to_env(&self, view_point: Point) -> Result<Point, TransformError>;

    /// Maps a view point into environment space.
    ///
    /// When the mapping is singular the condition is logged and the view point
    /// is returned untransformed.
    fn to_env(&self, view_point: Point) -> Point {
        self.try_to_env(view_point).unwrap_or_else(|_err| {
            warn!(error = %_err, x = view_point.x, y = view_point.y, "falling back to untransformed point");
            view_point
        })
    }

    /// Maps an environment point onto the pixel grid.
    fn to_view_pixel(&self, env_point: Point) -> PixelPoint {
        PixelPoint::from_point(self.to_view(env_point))
    }

    /// Returns `true` if `view_point` lies within the view, edges included.
    fn is_inside_view(&self, view_point: Point) -> bool {
        let size = self.view_size();
        (0.0..=size.width).contains(&view_point.x) && (0.0..=size.height).contains(&view_point.y)
    }

    /// Centers the whole environment in the view without changing zoom or
    /// rotation.
    fn center(&mut self);

    /// Pans so that `env_point` lands on the view center.
    fn center_on(&mut self, env_point: Point);

    /// Picks the zoom that shows the whole environment.
    fn optimal_zoom(&mut self);

    /// Pans by a view-space delta.
    fn set_delta_view_position(&mut self, delta: Vec2);

    /// Zooms to `zoom` keeping the environment point under `pivot` in place.
    fn zoom_on_point(&mut self, pivot: Point, zoom: f64);

    /// Rotates to `radians` keeping the environment point under `pivot` in
    /// place.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnsupportedOperation`] if the regime is always
    /// north-up; the state is left unchanged.
    fn rotate_around_point(&mut self, pivot: Point, radians: f64) -> Result<(), TransformError>;
}
