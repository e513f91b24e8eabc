// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of display kinds and the names they are configured by.
//!
//! Names are resolved once, when configuration is loaded. A display kind then
//! knows how to build its transform and its default zoom behavior; nothing is
//! looked up by name at render time.

use core::fmt;
use core::str::FromStr;

use alembic_event_state::{StateError, ZoomManager, ZoomStep};
use alembic_view2d::{DEFAULT_MAX_ZOOM_LEVEL, EnvironmentBounds, ViewportTransform};
use kurbo::Size;

use crate::{RegistryError, ZoomConfig};

/// A kind of display, selecting the coordinate regime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum DisplayKind {
    /// A flat environment shown through a Euclidean transform.
    #[default]
    Generic2D,
    /// A geographic environment shown on Mercator map tiles.
    Map,
}

/// Registered names, canonical name first for each kind.
const REGISTRY: &[(&str, DisplayKind)] = &[
    ("Generic2DDisplay", DisplayKind::Generic2D),
    ("generic2d", DisplayKind::Generic2D),
    ("generic", DisplayKind::Generic2D),
    ("MapDisplay", DisplayKind::Map),
    ("map", DisplayKind::Map),
];

impl DisplayKind {
    /// Every display kind.
    pub const ALL: [Self; 2] = [Self::Generic2D, Self::Map];

    /// Looks a display up by name.
    ///
    /// Matching ignores ASCII case, and a dotted path such as
    /// `"monitors.MapDisplay"` is matched on its last segment.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownDisplay`] if no display has that name.
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        let trimmed = name.trim();
        let short = trimmed.rsplit('.').next().unwrap_or(trimmed);
        REGISTRY
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(short))
            .map(|&(_, kind)| kind)
            .ok_or_else(|| RegistryError::UnknownDisplay(name.to_owned()))
    }

    /// The canonical registered name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic2D => "Generic2DDisplay",
            Self::Map => "MapDisplay",
        }
    }

    /// Builds the transform for an environment shown in a view of `view`
    /// pixels.
    #[must_use]
    pub fn build_transform(self, view: Size, env: EnvironmentBounds) -> ViewportTransform {
        match self {
            Self::Generic2D => ViewportTransform::euclidean(view, env),
            Self::Map => ViewportTransform::map(view, env),
        }
    }

    /// Zoom behavior used when the configuration does not override it.
    ///
    /// Generic displays zoom continuously by a constant factor per notch; map
    /// displays move one tile level per notch.
    #[must_use]
    pub fn default_zoom(self) -> ZoomConfig {
        match self {
            Self::Generic2D => ZoomConfig {
                level: 1.0,
                min: 1e-6,
                max: 1e6,
                step: ZoomStep::Exponential { base: 1.1 },
            },
            Self::Map => ZoomConfig {
                level: 1.0,
                min: 1.0,
                max: f64::from(DEFAULT_MAX_ZOOM_LEVEL),
                step: ZoomStep::Linear { step: 1.0 },
            },
        }
    }

    /// A zoom manager with [`DisplayKind::default_zoom`] settings.
    ///
    /// # Errors
    ///
    /// Propagates [`StateError`] from the zoom manager; the built-in settings
    /// are valid.
    pub fn default_zoom_manager(self) -> Result<ZoomManager, StateError> {
        self.default_zoom().build()
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for DisplayKind {
    type Error = RegistryError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl From<DisplayKind> for String {
    fn from(kind: DisplayKind) -> Self {
        kind.name().to_owned()
    }
}
