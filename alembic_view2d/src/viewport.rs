// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::mercator::MapPosition;
use crate::{
    EnvironmentBounds, EuclideanWormhole, MapWormhole, Mode, TransformError, ViewState, Wormhole,
};

/// A viewport transform in one of the supported coordinate regimes.
///
/// The regime is fixed at construction: switching between a flat and a
/// geographic environment means building a new transform.
#[derive(Clone, Debug)]
pub enum ViewportTransform {
    /// Affine mapping over a flat environment.
    Euclidean(EuclideanWormhole),
    /// Mercator tile mapping over a geographic environment.
    Map(MapWormhole),
}

macro_rules! dispatch {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            ViewportTransform::Euclidean($w) => $body,
            ViewportTransform::Map($w) => $body,
        }
    };
}

impl ViewportTransform {
    /// Builds a Euclidean transform.
    #[must_use]
    pub fn euclidean(view_size: Size, env: EnvironmentBounds) -> Self {
        Self::Euclidean(EuclideanWormhole::new(view_size, env))
    }

    /// Builds a map transform over a geographic box.
    #[must_use]
    pub fn map(view_size: Size, env: EnvironmentBounds) -> Self {
        Self::Map(MapWormhole::new(view_size, env))
    }

    /// The tile state, for map transforms.
    #[must_use]
    pub fn map_position(&self) -> Option<&MapPosition> {
        match self {
            Self::Euclidean(_) => None,
            Self::Map(w) => Some(w.map_position()),
        }
    }
}

impl From<EuclideanWormhole> for ViewportTransform {
    fn from(w: EuclideanWormhole) -> Self {
        Self::Euclidean(w)
    }
}

impl From<MapWormhole> for ViewportTransform {
    fn from(w: MapWormhole) -> Self {
        Self::Map(w)
    }
}

impl Wormhole for ViewportTransform {
    fn view_size(&self) -> Size {
        dispatch!(self, w => w.view_size())
    }

    fn set_view_size(&mut self, size: Size) {
        dispatch!(self, w => w.set_view_size(size));
    }

    fn env_bounds(&self) -> EnvironmentBounds {
        dispatch!(self, w => w.env_bounds())
    }

    fn mode(&self) -> Mode {
        dispatch!(self, w => w.mode())
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), TransformError> {
        dispatch!(self, w => w.set_mode(mode))
    }

    fn zoom(&self) -> f64 {
        dispatch!(self, w => w.zoom())
    }

    fn set_zoom(&mut self, zoom: f64) {
        dispatch!(self, w => w.set_zoom(zoom));
    }

    fn rotation(&self) -> f64 {
        dispatch!(self, w => w.rotation())
    }

    fn set_rotation(&mut self, radians: f64) -> Result<(), TransformError> {
        dispatch!(self, w => w.set_rotation(radians))
    }

    fn view_position(&self) -> Point {
        dispatch!(self, w => w.view_position())
    }

    fn state(&self) -> ViewState {
        dispatch!(self, w => w.state())
    }

    fn to_view(&self, env_point: Point) -> Point {
        dispatch!(self, w => w.to_view(env_point))
    }

    fn try_to_env(&self, view_point: Point) -> Result<Point, TransformError> {
        dispatch!(self, w => w.try_to_env(view_point))
    }

    fn to_env(&self, view_point: Point) -> Point {
        dispatch!(self, w => w.to_env(view_point))
    }

    fn is_inside_view(&self, view_point: Point) -> bool {
        dispatch!(self, w => w.is_inside_view(view_point))
    }

    fn center(&mut self) {
        dispatch!(self, w => w.center());
    }

    fn center_on(&mut self, env_point: Point) {
        dispatch!(self, w => w.center_on(env_point));
    }

    fn optimal_zoom(&mut self) {
        dispatch!(self, w => w.optimal_zoom());
    }

    fn set_delta_view_position(&mut self, delta: Vec2) {
        dispatch!(self, w => w.set_delta_view_position(delta));
    }

    fn zoom_on_point(&mut self, pivot: Point, zoom: f64) {
        dispatch!(self, w => w.zoom_on_point(pivot, zoom));
    }

    fn rotate_around_point(&mut self, pivot: Point, radians: f64) -> Result<(), TransformError> {
        dispatch!(self, w => w.rotate_around_point(pivot, radians))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::ViewportTransform;
    use crate::{EnvironmentBounds, Mode, Wormhole};

    #[test]
    fn dispatch_reaches_the_right_regime() {
        let env = EnvironmentBounds::new(Point::new(11.3, 44.4), Size::new(0.1, 0.1));
        let flat = ViewportTransform::euclidean(Size::new(640.0, 480.0), env);
        let map = ViewportTransform::map(Size::new(640.0, 480.0), env);

        assert_eq!(flat.mode(), Mode::Isometric);
        assert_eq!(map.mode(), Mode::MapProjected);
        assert!(flat.map_position().is_none());
        assert!(map.map_position().is_some());
        assert_eq!(map.view_position(), Point::new(320.0, 240.0));
        assert_eq!(flat.view_position(), Point::new(0.0, 480.0));
    }

    #[test]
    fn rotation_support_follows_regime() {
        let env = EnvironmentBounds::new(Point::ZERO, Size::new(10.0, 10.0));
        let mut flat = ViewportTransform::euclidean(Size::new(100.0, 100.0), env);
        let mut map = ViewportTransform::map(Size::new(100.0, 100.0), env);
        assert!(flat.rotate_around_point(Point::new(50.0, 50.0), 0.5).is_ok());
        assert!(map.rotate_around_point(Point::new(50.0, 50.0), 0.5).is_err());
        assert!(flat.mode().supports_rotation());
        assert!(!map.mode().supports_rotation());
    }
}
