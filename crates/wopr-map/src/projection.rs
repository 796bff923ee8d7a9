//! Geographic projection: converts between lat/lon and fine pixel coordinates.
//!
//! Plain equirectangular projection over the map's lat/lon window. The map
//! is a display, not a chart, so no distance correction is applied.

use wopr_core::constants::*;
use wopr_core::types::Point;

/// Equirectangular projection of a lat/lon window onto the pixel grid.
///
/// The north-west corner maps to pixel (0, `top_px`); rows above it are
/// headroom for arc peaks. x = East, y = South, both in fine pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MapProjection {
    pub north_lat: f64,
    pub south_lat: f64,
    pub west_lon: f64,
    pub east_lon: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub top_px: f64,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::new(
            MAP_NORTH_LAT,
            MAP_SOUTH_LAT,
            MAP_WEST_LON,
            MAP_EAST_LON,
            MAP_WIDTH_PX,
            MAP_HEIGHT_PX,
        )
        .with_top_offset(ARC_HEADROOM_PX)
    }
}

impl MapProjection {
    pub fn new(
        north_lat: f64,
        south_lat: f64,
        west_lon: f64,
        east_lon: f64,
        width_px: f64,
        height_px: f64,
    ) -> Self {
        Self {
            north_lat,
            south_lat,
            west_lon,
            east_lon,
            width_px,
            height_px,
            top_px: 0.0,
        }
    }

    /// Shift the map down by `top_px` pixels.
    pub fn with_top_offset(mut self, top_px: f64) -> Self {
        self.top_px = top_px;
        self
    }

    /// Pixels per degree of longitude.
    pub fn lon_scale(&self) -> f64 {
        let span = self.east_lon - self.west_lon;
        if span.abs() <= f64::EPSILON {
            return 0.0;
        }
        self.width_px / span
    }

    /// Pixels per degree of latitude.
    pub fn lat_scale(&self) -> f64 {
        let span = self.north_lat - self.south_lat;
        if span.abs() <= f64::EPSILON {
            return 0.0;
        }
        self.height_px / span
    }

    /// Convert lat/lon (degrees) to a pixel coordinate.
    ///
    /// Points outside the window project outside the pixel grid; callers
    /// drop them at rasterization time.
    pub fn to_pixel(&self, lat: f64, lon: f64) -> Point {
        let x = (lon - self.west_lon) * self.lon_scale();
        let y = self.top_px + (self.north_lat - lat) * self.lat_scale();
        Point::new(x, y)
    }

    /// Convert a pixel coordinate back to (lat, lon) in degrees.
    pub fn to_geo(&self, point: Point) -> (f64, f64) {
        let lon_scale = self.lon_scale();
        let lat_scale = self.lat_scale();
        let lon = if lon_scale == 0.0 {
            self.west_lon
        } else {
            self.west_lon + point.x / lon_scale
        };
        let lat = if lat_scale == 0.0 {
            self.north_lat
        } else {
            self.north_lat - (point.y - self.top_px) / lat_scale
        };
        (lat, lon)
    }

    /// Whether a pixel coordinate lies on the map itself, not the headroom.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0
            && point.x < self.width_px
            && point.y >= self.top_px
            && point.y < self.top_px + self.height_px
    }
}
