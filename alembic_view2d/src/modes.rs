// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How environment units are scaled onto the view.
///
/// Shared by [`crate::EuclideanWormhole`] and [`crate::MapWormhole`]; each
/// regime accepts only the modes it can honor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Uniform scale on both axes: the effective scale is the zoom alone.
    #[default]
    Isometric,
    /// Independent per-axis scale so that the environment fills the view.
    ///
    /// The per-axis rates are computed when the mode is entered and when the
    /// view is resized, not on every mapping.
    AdaptToView,
    /// Scale and position follow discrete map tile zoom levels.
    ///
    /// Rotation is not available in this mode: maps are always north-up.
    MapProjected,
}

impl Mode {
    /// Returns `true` if the mode supports rotating the view.
    #[must_use]
    pub fn supports_rotation(self) -> bool {
        !matches!(self, Self::MapProjected)
    }
}
