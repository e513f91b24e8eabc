// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saturation and wrap-around properties of the input accumulators.

use alembic_event_state::{AngleManager, ZoomManager};
use proptest::prelude::*;

#[test]
fn zoom_between_one_and_ten_saturates() {
    let mut zoom = ZoomManager::linear(1.0, 1.0, 10.0, 1.0).unwrap();
    zoom.decrement(1);
    assert_eq!(zoom.level(), 1.0);
    zoom.increment(100);
    assert_eq!(zoom.level(), 10.0);
}

#[test]
fn seven_hundred_twenty_degrees_of_drag_wraps_to_zero() {
    let sensitivity = 0.5;
    let mut angle = AngleManager::new(sensitivity).unwrap();
    // 720° of drag, delivered as a few uneven pointer moves.
    for dx in [400.0, 360.0, 520.0, 160.0] {
        angle.accumulate(dx);
    }
    assert_eq!(angle.total_degrees(), 0.0);
}

proptest! {
    #[test]
    fn zoom_level_never_leaves_limits(
        start in -50.0..50.0_f64,
        steps in prop::collection::vec(-20_i32..20, 0..40),
        exponential in any::<bool>(),
    ) {
        let mut zoom = if exponential {
            ZoomManager::exponential(start, 0.5, 40.0, 1.3).unwrap()
        } else {
            ZoomManager::linear(start, 0.5, 40.0, 0.75).unwrap()
        };
        for n in steps {
            let level = zoom.increment(n);
            prop_assert!((0.5..=40.0).contains(&level));
        }
    }

    #[test]
    fn angle_stays_in_a_single_turn(
        sensitivity in 0.01..5.0_f64,
        moves in prop::collection::vec(-5_000.0..5_000.0_f64, 0..50),
    ) {
        let mut angle = AngleManager::new(sensitivity).unwrap();
        for dx in moves {
            let total = angle.accumulate(dx);
            prop_assert!((0.0..360.0).contains(&total));
        }
    }
}
