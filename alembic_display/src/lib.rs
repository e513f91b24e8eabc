// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alembic Display: the glue between input events, viewport transforms and
//! the renderer.
//!
//! - [`DisplayConfig`] describes a display and can be loaded with `serde`.
//! - [`DisplayKind`] is the registry of display kinds. Names from
//!   configuration are resolved once, up front.
//! - [`Display2D`] owns a [`ViewportTransform`](alembic_view2d::ViewportTransform)
//!   and the zoom, angle and pointer state, and turns wheel and drag events
//!   into transform updates.
//! - [`EntitySnapshot`] carries entity positions from the simulation thread to
//!   the renderer, which maps them to view space with [`project_visible`].
//!
//! ```rust
//! use alembic_display::{Display2D, DisplayConfig, EntitySnapshot, EntityState, project_visible};
//! use alembic_view2d::EnvironmentBounds;
//! use kurbo::{Point, Size};
//!
//! let mut display = Display2D::new(DisplayConfig::default(), Size::new(800.0, 600.0)).unwrap();
//! display
//!     .initialize(EnvironmentBounds::new(Point::ZERO, Size::new(40.0, 30.0)))
//!     .unwrap();
//!
//! let snapshot = EntitySnapshot::new();
//! snapshot.replace([
//!     EntityState::new("a", Point::new(20.0, 15.0)),
//!     EntityState::new("b", Point::new(400.0, 15.0)),
//! ]);
//!
//! let visible = project_visible(&snapshot, display.transform());
//! assert_eq!(visible, vec![("a", Point::new(400.0, 300.0))]);
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the configuration types.
//! - `logging`: `tracing` events from this crate and the ones below it.

mod config;
mod display;
mod error;
mod logging;
mod registry;
mod snapshot;

pub use config::{DisplayConfig, ZoomConfig};
pub use display::{Display2D, Gesture};
pub use error::{DisplayError, RegistryError};
pub use registry::DisplayKind;
pub use snapshot::{EntitySnapshot, EntityState, closest_in_view, project_links, project_visible};
