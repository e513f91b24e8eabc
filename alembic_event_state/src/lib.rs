// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alembic Event State: small accumulators that turn raw input into viewport
//! parameters.
//!
//! - [`zoom`]: a bounded zoom level stepped by wheel notches, linearly or
//!   exponentially. It saturates at its limits instead of failing.
//! - [`angle`]: a rotation angle accumulated from horizontal drag distance,
//!   wrapping into `[0, 360)` degrees.
//! - [`pointer`]: the vector between the last two pointer samples, used for
//!   panning and as rotation input.
//!
//! None of these hold a reference to a viewport transform. A display reads
//! their values and calls the transform itself:
//!
//! ```rust
//! use kurbo::Point;
//! use alembic_event_state::{AngleManager, PointerDelta, ZoomManager};
//!
//! let mut zoom = ZoomManager::exponential(1.0, 0.1, 100.0, 1.25).unwrap();
//! let mut angle = AngleManager::default();
//! let mut pointer = PointerDelta::default();
//!
//! // One wheel notch forward.
//! let level = zoom.increment(1);
//! assert_eq!(level, 1.25);
//!
//! // A horizontal drag of 90 px at 0.5 degrees per pixel.
//! pointer.prime(Point::new(10.0, 10.0));
//! pointer.set_current_position(Point::new(100.0, 10.0));
//! angle.accumulate(pointer.variation().x);
//! assert_eq!(angle.total_degrees(), 45.0);
//! ```
//!
//! ## Features
//!
//! - `logging`: `tracing` events when a zoom request saturates.
//! - `serde`: `Serialize`/`Deserialize` for [`ZoomStep`].

pub mod angle;
mod error;
mod logging;
pub mod pointer;
pub mod zoom;

pub use angle::AngleManager;
pub use error::StateError;
pub use pointer::PointerDelta;
pub use zoom::{ZoomManager, ZoomStep};
