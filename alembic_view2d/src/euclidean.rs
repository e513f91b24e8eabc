// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use kurbo::{Affine, Point, Size, Vec2};

use crate::logging::{debug, trace, warn};
use crate::{EnvironmentBounds, Mode, TransformError, ViewState, Wormhole};

/// Affine viewport over a flat, continuous environment.
///
/// An environment point `e` maps to view space as
/// `position + R(rotation) · S(zoom·h_rate, -zoom·v_rate) · (e - anchor)`:
/// the y axis is flipped because environment y grows upwards while view y
/// grows downwards.
///
/// Anchored operations re-home the anchor onto the pivot, change the
/// parameter, then re-home back. Re-homing changes `anchor` and `position`
/// together so that the mapping itself is untouched.
#[derive(Clone, Debug)]
pub struct EuclideanWormhole {
    view_size: Size,
    env: EnvironmentBounds,
    position: Point,
    anchor: Point,
    zoom: f64,
    rotation: f64,
    h_rate: f64,
    v_rate: f64,
    mode: Mode,
}

impl EuclideanWormhole {
    /// Creates a transform for an environment of `env` bounds shown in a view
    /// of `view_size` pixels.
    ///
    /// - Zoom is `1.0`, rotation `0.0`, mode [`Mode::Isometric`].
    /// - The environment origin sits at the bottom-left corner of the view.
    #[must_use]
    pub fn new(view_size: Size, env: EnvironmentBounds) -> Self {
        Self {
            view_size,
            env,
            position: Point::new(0.0, view_size.height),
            anchor: Point::ZERO,
            zoom: 1.0,
            rotation: 0.0,
            h_rate: 1.0,
            v_rate: 1.0,
            mode: Mode::Isometric,
        }
    }

    /// Environment point currently pinned at [`Wormhole::view_position`].
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Horizontal stretch rate (`1.0` unless in [`Mode::AdaptToView`]).
    #[must_use]
    pub fn h_rate(&self) -> f64 {
        self.h_rate
    }

    /// Vertical stretch rate (`1.0` unless in [`Mode::AdaptToView`]).
    #[must_use]
    pub fn v_rate(&self) -> f64 {
        self.v_rate
    }

    /// The environment→view affine map.
    #[must_use]
    pub fn env_to_view(&self) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.zoom * self.h_rate, -self.zoom * self.v_rate)
            * Affine::translate(-self.anchor.to_vec2())
    }

    fn adapt_rates(&mut self) {
        self.h_rate = fit_rate(self.view_size.width, self.env.width());
        self.v_rate = fit_rate(self.view_size.height, self.env.height());
        trace!(h_rate = self.h_rate, v_rate = self.v_rate, "adapted stretch rates");
    }

    /// Moves the anchor to the environment point under `view_point` without
    /// changing the mapping.
    fn rehome_on_view(&mut self, view_point: Point) -> Result<(), TransformError> {
        let env_point = self.try_to_env(view_point)?;
        self.anchor = env_point;
        self.position = view_point;
        Ok(())
    }

    /// Moves the anchor to `env_point` without changing the mapping.
    fn rehome_on_env(&mut self, env_point: Point) {
        self.position = self.to_view(env_point);
        self.anchor = env_point;
    }

    fn anchored(&mut self, pivot: Point, change: impl FnOnce(&mut Self)) {
        let original = self.anchor;
        if let Err(_err) = self.rehome_on_view(pivot) {
            warn!(error = %_err, "cannot pin pivot; applying change around the current anchor");
        }
        change(self);
        self.rehome_on_env(original);
    }
}

/// `view / env`, or `1.0` when that is not a usable scale.
fn fit_rate(view: f64, env: f64) -> f64 {
    let rate = view / env;
    if rate.is_finite() && rate > 0.0 {
        rate
    } else {
        warn!(view, env, "cannot fit environment extent to view; using unit rate");
        1.0
    }
}

impl Wormhole for EuclideanWormhole {
    fn view_size(&self) -> Size {
        self.view_size
    }

    fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        if self.mode == Mode::AdaptToView {
            self.adapt_rates();
        }
    }

    fn env_bounds(&self) -> EnvironmentBounds {
        self.env
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), TransformError> {
        match mode {
            Mode::Isometric => {
                self.h_rate = 1.0;
                self.v_rate = 1.0;
            }
            Mode::AdaptToView => self.adapt_rates(),
            Mode::MapProjected => {
                return Err(TransformError::UnsupportedOperation {
                    operation: "set_mode(MapProjected)",
                    mode: self.mode,
                });
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Negative values and NaN become `0.0`; there is no upper bound.
    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.max(0.0);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Stores `radians` normalized into `[0, 2π)`.
    fn set_rotation(&mut self, radians: f64) -> Result<(), TransformError> {
        if !radians.is_finite() {
            return Err(TransformError::InvalidArgument {
                name: "radians",
                value: radians,
            });
        }
        let normalized = radians.rem_euclid(TAU);
        // `rem_euclid` can round up to exactly TAU for tiny negative inputs.
        self.rotation = if normalized >= TAU { 0.0 } else { normalized };
        Ok(())
    }

    fn view_position(&self) -> Point {
        self.position
    }

    fn state(&self) -> ViewState {
        ViewState {
            position: self.position,
            anchor: self.anchor,
            zoom: self.zoom,
            rotation: self.rotation,
            h_rate: self.h_rate,
            v_rate: self.v_rate,
            mode: self.mode,
        }
    }

    fn to_view(&self, env_point: Point) -> Point {
        self.env_to_view() * env_point
    }

    fn try_to_env(&self, view_point: Point) -> Result<Point, TransformError> {
        let transform = self.env_to_view();
        let det = transform.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(TransformError::SingularTransform);
        }
        Ok(transform.inverse() * view_point)
    }

    fn center(&mut self) {
        self.anchor = self.env.centroid();
        self.position = (self.view_size.to_vec2() * 0.5).to_point();
    }

    fn center_on(&mut self, env_point: Point) {
        let view_center = (self.view_size.to_vec2() * 0.5).to_point();
        let delta = view_center - self.to_view(env_point);
        self.set_delta_view_position(delta);
    }

    /// Isometric: the largest zoom that fits both extents. Adapt-to-view: the
    /// stretch rates already fit, so `1.0`.
    ///
    /// Degenerate environments (zero or non-finite size) leave zoom unchanged.
    fn optimal_zoom(&mut self) {
        let candidate = match self.mode {
            Mode::Isometric => {
                let view_ratio = self.view_size.width / self.view_size.height;
                if self.env.aspect_ratio() <= view_ratio {
                    self.view_size.height / self.env.height()
                } else {
                    self.view_size.width / self.env.width()
                }
            }
            Mode::AdaptToView => 1.0,
            Mode::MapProjected => return,
        };
        if candidate.is_finite() && candidate > 0.0 {
            self.zoom = candidate;
        } else {
            debug!(candidate, "no usable optimal zoom; keeping current zoom");
        }
    }

    fn set_delta_view_position(&mut self, delta: Vec2) {
        self.position += delta;
    }

    fn zoom_on_point(&mut self, pivot: Point, zoom: f64) {
        self.anchored(pivot, |w| w.set_zoom(zoom));
    }

    fn rotate_around_point(&mut self, pivot: Point, radians: f64) -> Result<(), TransformError> {
        if !radians.is_finite() {
            return Err(TransformError::InvalidArgument {
                name: "radians",
                value: radians,
            });
        }
        self.anchored(pivot, |w| {
            // Finite input was checked above.
            let _ = w.set_rotation(radians);
        });
        Ok(())
    }
}
