// Copyright 2025 the Alembic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spherical Mercator projection on a square tile pyramid.
//!
//! At integer zoom level `z` the whole world is a square of
//! [`map_size`]`(z) = TILE_SIZE · 2^z` pixels with the origin at the
//! north-west corner (longitude −180°, latitude ≈ 85.05°).

use core::f64::consts::PI;

use kurbo::{Point, Vec2};

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Largest latitude representable by the projection, in degrees.
pub const LATITUDE_MAX: f64 = 85.051_128_779_806_59;

/// Edge length of the whole map in pixels at `zoom_level`.
#[must_use]
pub fn map_size(zoom_level: u8) -> f64 {
    TILE_SIZE * 2.0_f64.powi(i32::from(zoom_level))
}

/// Longitude in degrees to a horizontal pixel coordinate.
#[must_use]
pub fn longitude_to_pixel_x(longitude: f64, zoom_level: u8) -> f64 {
    (longitude + 180.0) / 360.0 * map_size(zoom_level)
}

/// Latitude in degrees to a vertical pixel coordinate.
///
/// Latitudes beyond [`LATITUDE_MAX`] are clamped, so the result always lies in
/// `[0, map_size]`.
#[must_use]
pub fn latitude_to_pixel_y(latitude: f64, zoom_level: u8) -> f64 {
    let size = map_size(zoom_level);
    let sin_lat = latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX).to_radians().sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);
    (y * size).clamp(0.0, size)
}

/// Horizontal pixel coordinate to longitude, or `None` outside the map.
#[must_use]
pub fn pixel_x_to_longitude(pixel_x: f64, zoom_level: u8) -> Option<f64> {
    let size = map_size(zoom_level);
    (0.0..=size)
        .contains(&pixel_x)
        .then(|| 360.0 * (pixel_x / size - 0.5))
}

/// Vertical pixel coordinate to latitude, or `None` outside the map.
#[must_use]
pub fn pixel_y_to_latitude(pixel_y: f64, zoom_level: u8) -> Option<f64> {
    let size = map_size(zoom_level);
    (0.0..=size).contains(&pixel_y).then(|| {
        let y = 0.5 - pixel_y / size;
        90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI
    })
}

/// A validated geographic coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLong {
    latitude: f64,
    longitude: f64,
}

impl LatLong {
    /// Creates a coordinate, or `None` if either component is out of range.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        ((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)).then_some(
            Self {
                latitude,
                longitude,
            },
        )
    }

    /// Interprets an environment point as `(longitude, latitude)`.
    #[must_use]
    pub fn from_point(p: Point) -> Option<Self> {
        Self::new(p.y, p.x)
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The coordinate as an environment point `(longitude, latitude)`.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// Projects an environment point `(longitude, latitude)` to map pixels.
///
/// Returns `None` for points that are not valid coordinates.
#[must_use]
pub fn project(env_point: Point, zoom_level: u8) -> Option<Point> {
    let coord = LatLong::from_point(env_point)?;
    Some(Point::new(
        longitude_to_pixel_x(coord.longitude, zoom_level),
        latitude_to_pixel_y(coord.latitude, zoom_level),
    ))
}

/// Maps map pixels back to an environment point, or `None` outside the map.
#[must_use]
pub fn unproject(pixel: Point, zoom_level: u8) -> Option<Point> {
    Some(Point::new(
        pixel_x_to_longitude(pixel.x, zoom_level)?,
        pixel_y_to_latitude(pixel.y, zoom_level)?,
    ))
}

/// Center and zoom level of a tiled map view.
///
/// This is the state a tile renderer reads to decide which tiles to draw.
/// It is owned by [`crate::MapWormhole`]; other code only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    center: LatLong,
    zoom_level: u8,
}

impl MapPosition {
    /// Creates a map position.
    #[must_use]
    pub fn new(center: LatLong, zoom_level: u8) -> Self {
        Self { center, zoom_level }
    }

    /// Geographic coordinate at the middle of the view.
    #[must_use]
    pub fn center(&self) -> LatLong {
        self.center
    }

    /// Current tile zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> u8 {
        self.zoom_level
    }

    /// The center in map pixels at the current zoom level.
    #[must_use]
    pub fn center_pixel(&self) -> Point {
        Point::new(
            longitude_to_pixel_x(self.center.longitude, self.zoom_level),
            latitude_to_pixel_y(self.center.latitude, self.zoom_level),
        )
    }

    pub(crate) fn set_center(&mut self, center: LatLong) {
        self.center = center;
    }

    pub(crate) fn set_zoom_level(&mut self, zoom_level: u8) {
        self.zoom_level = zoom_level;
    }

    /// Drags the map content by `delta` pixels; the center moves the opposite
    /// way and stays inside the map.
    pub(crate) fn move_center(&mut self, delta: Vec2) {
        let size = map_size(self.zoom_level);
        let pixel = self.center_pixel() - delta;
        let x = pixel.x.clamp(0.0, size);
        let y = pixel.y.clamp(0.0, size);
        let longitude =
            pixel_x_to_longitude(x, self.zoom_level).unwrap_or(self.center.longitude);
        let latitude = pixel_y_to_latitude(y, self.zoom_level).unwrap_or(self.center.latitude);
        self.center = LatLong {
            latitude,
            longitude,
        };
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{
        LATITUDE_MAX, LatLong, MapPosition, latitude_to_pixel_y, longitude_to_pixel_x,
        map_size, pixel_x_to_longitude, pixel_y_to_latitude, project, unproject,
    };

    #[test]
    fn map_size_doubles_per_level() {
        assert_eq!(map_size(0), 256.0);
        assert_eq!(map_size(1), 512.0);
        assert_eq!(map_size(18), 256.0 * 262_144.0);
    }

    #[test]
    fn origin_and_extremes() {
        assert_eq!(longitude_to_pixel_x(-180.0, 0), 0.0);
        assert_eq!(longitude_to_pixel_x(180.0, 0), 256.0);
        assert_eq!(longitude_to_pixel_x(0.0, 1), 256.0);
        assert!((latitude_to_pixel_y(0.0, 0) - 128.0).abs() < 1e-9);
        assert!(latitude_to_pixel_y(LATITUDE_MAX, 3).abs() < 1e-6);
        assert_eq!(latitude_to_pixel_y(90.0, 0), latitude_to_pixel_y(LATITUDE_MAX, 0));
    }

    #[test]
    fn inverse_formulas_reject_out_of_range() {
        assert_eq!(pixel_x_to_longitude(-1.0, 0), None);
        assert_eq!(pixel_x_to_longitude(257.0, 0), None);
        assert_eq!(pixel_y_to_latitude(f64::NAN, 0), None);
        assert!((pixel_x_to_longitude(128.0, 0).unwrap()).abs() < 1e-12);
        assert!((pixel_y_to_latitude(0.0, 0).unwrap() - LATITUDE_MAX).abs() < 1e-9);
    }

    #[test]
    fn project_unproject_agree() {
        let bologna = Point::new(11.34, 44.49);
        let px = project(bologna, 12).unwrap();
        let back = unproject(px, 12).unwrap();
        assert!((back.x - bologna.x).abs() < 1e-9);
        assert!((back.y - bologna.y).abs() < 1e-9);
    }

    #[test]
    fn invalid_coordinates_do_not_project() {
        assert_eq!(project(Point::new(190.0, 0.0), 3), None);
        assert_eq!(project(Point::new(0.0, -91.0), 3), None);
        assert!(LatLong::new(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn move_center_follows_drag_and_clamps() {
        let mut pos = MapPosition::new(LatLong::new(0.0, 0.0).unwrap(), 2);
        let start = pos.center_pixel();
        pos.move_center(Vec2::new(100.0, -50.0));
        let moved = pos.center_pixel();
        assert!((moved.x - (start.x - 100.0)).abs() < 1e-6);
        assert!((moved.y - (start.y + 50.0)).abs() < 1e-6);

        pos.move_center(Vec2::new(1e9, 1e9));
        assert!((pos.center().longitude() + 180.0).abs() < 1e-9);
        assert!((pos.center().latitude() - LATITUDE_MAX).abs() < 1e-6);
    }
}
