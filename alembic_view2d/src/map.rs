// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::logging::{debug, warn};
use crate::mercator::{self, LatLong, MapPosition};
use crate::{EnvironmentBounds, Mode, TransformError, ViewState, Wormhole};

/// Default highest tile zoom level.
pub const DEFAULT_MAX_ZOOM_LEVEL: u8 = 18;

/// Viewport over a geographic environment rendered on Mercator map tiles.
///
/// Environment points are `(longitude, latitude)` in degrees. The view center
/// always shows [`MapPosition::center`]; zoom moves in whole tile levels and
/// the view is always north-up.
///
/// Points that fall outside the projected map are not extrapolated: they map
/// to the current map center instead.
#[derive(Clone, Debug)]
pub struct MapWormhole {
    view_size: Size,
    env: EnvironmentBounds,
    map: MapPosition,
    max_zoom_level: u8,
}

impl MapWormhole {
    /// Creates a map viewport over the geographic box `env`, centered on it at
    /// zoom level `0`.
    ///
    /// An invalid centroid (outside the valid coordinate range) centers the
    /// map on `(0, 0)`.
    #[must_use]
    pub fn new(view_size: Size, env: EnvironmentBounds) -> Self {
        let center = LatLong::from_point(env.centroid()).unwrap_or_default();
        Self {
            view_size,
            env,
            map: MapPosition::new(center, 0),
            max_zoom_level: DEFAULT_MAX_ZOOM_LEVEL,
        }
    }

    /// Sets the highest zoom level the tile source provides.
    #[must_use]
    pub fn with_max_zoom_level(mut self, max_zoom_level: u8) -> Self {
        self.max_zoom_level = max_zoom_level;
        if self.map.zoom_level() > max_zoom_level {
            self.map.set_zoom_level(max_zoom_level);
        }
        self
    }

    /// Highest zoom level in use.
    #[must_use]
    pub fn max_zoom_level(&self) -> u8 {
        self.max_zoom_level
    }

    /// Read access to the tile state (center and zoom level).
    #[must_use]
    pub fn map_position(&self) -> &MapPosition {
        &self.map
    }

    fn view_center(&self) -> Point {
        (self.view_size.to_vec2() * 0.5).to_point()
    }

    /// View-space location of `env_point`, if it projects onto the map.
    fn project_to_view(&self, env_point: Point) -> Option<Point> {
        let pixel = mercator::project(env_point, self.map.zoom_level())?;
        Some(self.view_center() + (pixel - self.map.center_pixel()))
    }

    fn set_center(&mut self, env_point: Point) {
        let center = LatLong::from_point(env_point).unwrap_or_else(|| {
            warn!(x = env_point.x, y = env_point.y, "invalid map center; using (0, 0)");
            LatLong::default()
        });
        self.map.set_center(center);
    }

    fn bounds_fit_at(&mut self, zoom_level: u8) -> bool {
        self.map.set_zoom_level(zoom_level);
        [self.env.min_corner(), self.env.max_corner()]
            .into_iter()
            .all(|corner| {
                self.project_to_view(corner)
                    .is_some_and(|v| self.is_inside_view(v))
            })
    }

    fn unsupported(&self, operation: &'static str) -> TransformError {
        TransformError::UnsupportedOperation {
            operation,
            mode: Mode::MapProjected,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "clamped into the u8 range before the cast"
)]
fn zoom_level_from(zoom: f64, max_zoom_level: u8) -> u8 {
    if zoom.is_nan() {
        return 0;
    }
    zoom.trunc().clamp(0.0, f64::from(max_zoom_level)) as u8
}

impl Wormhole for MapWormhole {
    fn view_size(&self) -> Size {
        self.view_size
    }

    fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    fn env_bounds(&self) -> EnvironmentBounds {
        self.env
    }

    fn mode(&self) -> Mode {
        Mode::MapProjected
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), TransformError> {
        match mode {
            Mode::MapProjected => Ok(()),
            Mode::Isometric | Mode::AdaptToView => Err(self.unsupported("set_mode")),
        }
    }

    fn zoom(&self) -> f64 {
        f64::from(self.map.zoom_level())
    }

    /// Truncates to a whole level and clamps into `[0, max_zoom_level]`.
    fn set_zoom(&mut self, zoom: f64) {
        self.map
            .set_zoom_level(zoom_level_from(zoom, self.max_zoom_level));
    }

    fn rotation(&self) -> f64 {
        0.0
    }

    fn set_rotation(&mut self, _radians: f64) -> Result<(), TransformError> {
        Err(self.unsupported("set_rotation"))
    }

    fn view_position(&self) -> Point {
        self.view_center()
    }

    fn state(&self) -> ViewState {
        ViewState {
            position: self.view_center(),
            anchor: self.map.center().to_point(),
            zoom: self.zoom(),
            rotation: 0.0,
            h_rate: 1.0,
            v_rate: 1.0,
            mode: Mode::MapProjected,
        }
    }

    fn to_view(&self, env_point: Point) -> Point {
        self.project_to_view(env_point)
            .unwrap_or_else(|| self.view_center())
    }

    fn try_to_env(&self, view_point: Point) -> Result<Point, TransformError> {
        let pixel = self.map.center_pixel() + (view_point - self.view_center());
        Ok(mercator::unproject(pixel, self.map.zoom_level())
            .unwrap_or_else(|| self.map.center().to_point()))
    }

    fn center(&mut self) {
        self.set_center(self.env.centroid());
    }

    fn center_on(&mut self, env_point: Point) {
        self.set_center(env_point);
    }

    /// Picks the most zoomed-in level at which both corners of the environment
    /// box project inside the view, searching down from `max_zoom_level`.
    /// Falls back to level `1` when no level fits.
    fn optimal_zoom(&mut self) {
        let fitting = (1..=self.max_zoom_level)
            .rev()
            .find(|&level| self.bounds_fit_at(level));
        let level = fitting.unwrap_or(1).min(self.max_zoom_level);
        debug!(level, fits = fitting.is_some(), "optimal map zoom");
        self.map.set_zoom_level(level);
    }

    fn set_delta_view_position(&mut self, delta: Vec2) {
        self.map.move_center(delta);
    }

    fn zoom_on_point(&mut self, pivot: Point, zoom: f64) {
        let env_point = self.to_env(pivot);
        self.set_zoom(zoom);
        let moved = self.to_view(env_point);
        self.set_delta_view_position(pivot - moved);
    }

    fn rotate_around_point(&mut self, _pivot: Point, _radians: f64) -> Result<(), TransformError> {
        Err(self.unsupported("rotate_around_point"))
    }
}
