// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading display configuration from JSON and building displays from it.

#![cfg(feature = "serde")]

use alembic_display::{Display2D, DisplayConfig, DisplayError, DisplayKind, RegistryError};
use alembic_event_state::ZoomStep;
use alembic_view2d::{EnvironmentBounds, Mode, Wormhole};
use kurbo::{Point, Size};

#[test]
fn empty_object_is_the_default_config() {
    let config: DisplayConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, DisplayConfig::default());
}

#[test]
fn full_config_round_trips_through_json() {
    let json = r#"{
        "kind": "MapDisplay",
        "zoom": { "level": 3, "min": 2, "max": 16, "step": { "linear": { "step": 1 } } },
        "rotation_sensitivity": 0.25,
        "mode": "MapProjected",
        "draw_links": true
    }"#;
    let config: DisplayConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.kind, DisplayKind::Map);
    assert_eq!(config.zoom.unwrap().step, ZoomStep::Linear { step: 1.0 });
    assert!(config.draw_links);

    let back: DisplayConfig =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn display_names_resolve_at_load_time() {
    let config: DisplayConfig = serde_json::from_str(r#"{ "kind": "generic" }"#).unwrap();
    assert_eq!(config.kind, DisplayKind::Generic2D);

    let err = serde_json::from_str::<DisplayConfig>(r#"{ "kind": "OpenGLDisplay" }"#).unwrap_err();
    assert!(err.to_string().contains("unknown display `OpenGLDisplay`"));
}

#[test]
fn kind_serializes_to_canonical_name() {
    let config = DisplayConfig::for_kind(DisplayKind::Map);
    let value = serde_json::to_value(config).unwrap();
    assert_eq!(value["kind"], "MapDisplay");
    assert_eq!(value["mode"], "Isometric");
}

#[test]
fn invalid_loaded_config_is_refused_by_the_display() {
    let config: DisplayConfig =
        serde_json::from_str(r#"{ "rotation_sensitivity": 0.0 }"#).unwrap();
    assert!(matches!(
        Display2D::new(config, Size::new(100.0, 100.0)),
        Err(DisplayError::State(_))
    ));
}

#[test]
fn adapt_to_view_config_stretches_environment() {
    let config: DisplayConfig = serde_json::from_str(r#"{ "mode": "AdaptToView" }"#).unwrap();
    let mut display = Display2D::new(config, Size::new(400.0, 100.0)).unwrap();
    display
        .initialize(EnvironmentBounds::new(Point::ZERO, Size::new(10.0, 10.0)))
        .unwrap();
    let t = display.transform();
    assert_eq!(t.mode(), Mode::AdaptToView);
    assert_eq!(t.to_view(Point::new(0.0, 0.0)), Point::new(0.0, 100.0));
    assert_eq!(t.to_view(Point::new(10.0, 10.0)), Point::new(400.0, 0.0));
}

#[test]
fn registry_error_message() {
    assert_eq!(
        RegistryError::UnknownDisplay("x".into()).to_string(),
        "unknown display `x`"
    );
}
