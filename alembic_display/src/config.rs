// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alembic_event_state::{AngleManager, StateError, ZoomManager, ZoomStep};
use alembic_view2d::{Mode, TransformError};

use crate::{DisplayError, DisplayKind};

/// Zoom limits and stepping for a display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomConfig {
    /// Initial level, replaced by the optimal zoom once an environment is
    /// shown.
    pub level: f64,
    /// Lower limit.
    pub min: f64,
    /// Upper limit.
    pub max: f64,
    /// Change per wheel notch.
    pub step: ZoomStep,
}

impl ZoomConfig {
    /// Builds the zoom manager these settings describe.
    ///
    /// # Errors
    ///
    /// See [`ZoomManager::new`].
    pub fn build(&self) -> Result<ZoomManager, StateError> {
        ZoomManager::new(self.level, self.min, self.max, self.step)
    }
}

/// Settings for a [`crate::Display2D`].
///
/// With the `serde` feature every field is optional when deserializing:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use alembic_display::{DisplayConfig, DisplayKind};
///
/// let config: DisplayConfig = serde_json::from_str(r#"{ "kind": "MapDisplay" }"#).unwrap();
/// assert_eq!(config.kind, DisplayKind::Map);
/// assert!(config.validate().is_ok());
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DisplayConfig {
    /// Which display to build.
    pub kind: DisplayKind,
    /// Zoom settings; `None` uses [`DisplayKind::default_zoom`].
    pub zoom: Option<ZoomConfig>,
    /// Degrees of rotation per pixel of horizontal drag.
    pub rotation_sensitivity: f64,
    /// Scaling mode for generic displays. Map displays always use
    /// [`Mode::MapProjected`].
    pub mode: Mode,
    /// Whether the renderer draws links between neighboring entities.
    pub draw_links: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            kind: DisplayKind::default(),
            zoom: None,
            rotation_sensitivity: AngleManager::DEFAULT_SENSITIVITY,
            mode: Mode::default(),
            draw_links: false,
        }
    }
}

impl DisplayConfig {
    /// Default settings for a display kind.
    #[must_use]
    pub fn for_kind(kind: DisplayKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Effective zoom settings.
    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom.unwrap_or_else(|| self.kind.default_zoom())
    }

    /// Scaling mode the display will apply.
    #[must_use]
    pub fn effective_mode(&self) -> Mode {
        match self.kind {
            DisplayKind::Generic2D => self.mode,
            DisplayKind::Map => Mode::MapProjected,
        }
    }

    /// Checks the settings without building a display.
    ///
    /// # Errors
    ///
    /// - [`DisplayError::State`] for invalid zoom limits, zoom step or
    ///   rotation sensitivity.
    /// - [`DisplayError::Transform`] for a generic display configured with
    ///   [`Mode::MapProjected`].
    pub fn validate(&self) -> Result<(), DisplayError> {
        self.zoom_config().build()?;
        AngleManager::new(self.rotation_sensitivity)?;
        if self.kind == DisplayKind::Generic2D && self.mode == Mode::MapProjected {
            return Err(TransformError::UnsupportedOperation {
                operation: "set_mode(MapProjected)",
                mode: Mode::Isometric,
            }
            .into());
        }
        Ok(())
    }
}
