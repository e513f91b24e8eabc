// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display controller: input gestures in, transform updates out.
//!
//! ## Usage
//!
//! 1) Build a [`Display2D`] from a [`DisplayConfig`] and the view size.
//! 2) Call [`Display2D::initialize`] whenever a new environment is loaded.
//!    The transform is rebuilt for it and zoomed to fit.
//! 3) Forward wheel, press and drag events to the `on_*` methods.
//! 4) Read [`Display2D::transform`] while painting a frame.

use alembic_event_state::{AngleManager, PointerDelta, ZoomManager};
use alembic_view2d::{EnvironmentBounds, ViewportTransform, Wormhole};
use kurbo::{Point, Rect, Size};

use crate::logging::{debug, info, warn};
use crate::{DisplayConfig, DisplayError, DisplayKind};

/// What a pointer drag does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Moves the view by the pointer movement.
    #[default]
    Pan,
    /// Rotates the view around its center by the horizontal movement.
    Rotate,
}

/// A 2D display: one transform plus the input state that drives it.
///
/// All mutation happens on the thread that owns the display; the renderer
/// only reads [`Display2D::transform`].
#[derive(Clone, Debug)]
pub struct Display2D {
    config: DisplayConfig,
    view: Size,
    transform: ViewportTransform,
    zoom: ZoomManager,
    angle: AngleManager,
    pointer: PointerDelta,
}

impl Display2D {
    /// Creates a display showing a placeholder environment the size of the
    /// view until [`Display2D::initialize`] is called.
    ///
    /// # Errors
    ///
    /// See [`DisplayConfig::validate`].
    pub fn new(config: DisplayConfig, view: Size) -> Result<Self, DisplayError> {
        config.validate()?;
        let placeholder = EnvironmentBounds::from_rect(Rect::from_origin_size(Point::ZERO, view));
        Ok(Self {
            config,
            view,
            transform: config.kind.build_transform(view, placeholder),
            zoom: config.zoom_config().build()?,
            angle: AngleManager::new(config.rotation_sensitivity)?,
            pointer: PointerDelta::default(),
        })
    }

    /// Shows a new environment.
    ///
    /// The transform is rebuilt, put in the configured mode, centered and
    /// zoomed to fit. A fitted zoom outside the configured limits is clamped
    /// into them, and the accumulated rotation is cleared.
    ///
    /// # Errors
    ///
    /// [`DisplayError::Transform`] if the configured mode is rejected; the
    /// previous transform is kept in that case.
    pub fn initialize(&mut self, env: EnvironmentBounds) -> Result<(), DisplayError> {
        let mut transform = self.config.kind.build_transform(self.view, env);
        if self.config.kind == DisplayKind::Generic2D {
            transform.set_mode(self.config.mode)?;
        }
        transform.center();
        transform.optimal_zoom();
        self.transform = transform;
        self.clamp_fitted_zoom();
        self.angle.reset();
        info!(
            kind = %self.config.kind,
            zoom = self.transform.zoom(),
            "display initialized"
        );
        Ok(())
    }

    /// Follows a resize of the drawing surface.
    pub fn on_resize(&mut self, view: Size) {
        self.view = view;
        self.transform.set_view_size(view);
    }

    /// Zooms by `notches` wheel clicks around `pointer`; positive notches
    /// zoom in.
    pub fn on_wheel(&mut self, pointer: Point, notches: i32) {
        let level = self.zoom.increment(notches);
        self.apply_zoom(pointer, level);
    }

    /// Starts a drag gesture at `pos`.
    pub fn on_pointer_pressed(&mut self, pos: Point) {
        self.pointer.prime(pos);
    }

    /// Continues a drag gesture.
    ///
    /// Rotation on a display that cannot rotate is logged and ignored.
    pub fn on_pointer_dragged(&mut self, pos: Point, gesture: Gesture) {
        self.pointer.set_current_position(pos);
        let delta = self.pointer.variation();
        match gesture {
            Gesture::Pan => self.transform.set_delta_view_position(delta),
            Gesture::Rotate => {
                let degrees = self.angle.accumulate(delta.x);
                let center = self.view_center();
                if let Err(_err) = self
                    .transform
                    .rotate_around_point(center, degrees.to_radians())
                {
                    warn!(error = %_err, "rotation ignored");
                    self.angle.reset();
                }
            }
        }
    }

    /// Centers the view on `center` at zoom `level`.
    ///
    /// A `level` of zero or less (or NaN) picks the zoom that fits the
    /// environment instead, within the configured limits.
    pub fn zoom_to(&mut self, center: Point, level: f64) {
        self.transform.center_on(center);
        let view_center = self.view_center();
        if level > 0.0 {
            let level = self.zoom.set_zoom(level);
            self.apply_zoom(view_center, level);
        } else {
            debug!(level, "no zoom level requested; fitting environment");
            self.transform.optimal_zoom();
            self.transform.center_on(center);
            self.clamp_fitted_zoom();
        }
    }

    /// The transform, for painting.
    #[must_use]
    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    /// Zoom state.
    #[must_use]
    pub fn zoom_manager(&self) -> &ZoomManager {
        &self.zoom
    }

    /// Accumulated rotation.
    #[must_use]
    pub fn angle_manager(&self) -> &AngleManager {
        &self.angle
    }

    /// Settings this display was built with.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Current view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    fn view_center(&self) -> Point {
        (self.view.to_vec2() * 0.5).to_point()
    }

    /// Zooms the transform about `pivot` and makes the zoom manager follow
    /// the level the transform settled on.
    fn apply_zoom(&mut self, pivot: Point, level: f64) {
        self.transform.zoom_on_point(pivot, level);
        self.zoom.set_zoom(self.transform.zoom());
    }

    /// Brings a freshly fitted zoom inside the zoom manager's limits, keeping
    /// the view center still.
    fn clamp_fitted_zoom(&mut self) {
        let fitted = self.transform.zoom();
        let level = self.zoom.set_zoom(fitted);
        if level != fitted {
            debug!(fitted, level, "fitted zoom outside configured limits");
            self.apply_zoom(self.view_center(), level);
        }
    }
}
