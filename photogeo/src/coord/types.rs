//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom levels supported by the preview map
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// Street-level zoom used for the preview map grid.
pub const DEFAULT_ZOOM: u8 = 15;

/// Pixel dimensions of a single slippy-map tile.
pub const TILE_SIZE: u32 = 256;

/// A geographic coordinate extracted from photo metadata.
///
/// Latitude is in decimal degrees, positive north; longitude is in
/// decimal degrees, positive east. Absence of GPS data is expressed as
/// `Option<GeoCoordinate>` at the extraction boundary, so a constructed
/// value always carries real (if possibly suspicious) numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from signed decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Hemisphere letter for the latitude ('N' or 'S').
    pub fn lat_hemisphere(&self) -> char {
        if self.latitude >= 0.0 {
            'N'
        } else {
            'S'
        }
    }

    /// Hemisphere letter for the longitude ('E' or 'W').
    pub fn lon_hemisphere(&self) -> char {
        if self.longitude >= 0.0 {
            'E'
        } else {
            'W'
        }
    }
}

impl fmt::Display for GeoCoordinate {
    /// Formats as unsigned decimal degrees with hemisphere letters,
    /// e.g. `35.6812° N, 139.7671° E`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}\u{00B0} {}, {:.4}\u{00B0} {}",
            self.latitude.abs(),
            self.lat_hemisphere(),
            self.longitude.abs(),
            self.lon_hemisphere()
        )
    }
}

/// Tile coordinates in the Web Mercator / slippy-map system.
///
/// `x` runs west to east, `y` runs north to south, both in
/// `0..2^zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
    /// Zoom level (0-19)
    pub zoom: u8,
}

impl TileCoord {
    /// Creates a tile coordinate.
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Returns the tile offset by `(dx, dy)` grid cells, or `None` if
    /// the offset leaves the valid tile range.
    ///
    /// X wraps around the antimeridian; Y does not wrap (there is no
    /// tile above the north edge or below the south edge).
    pub fn neighbor(&self, dx: i32, dy: i32) -> Option<TileCoord> {
        let n = 1i64 << self.zoom;

        let x = (self.x as i64 + dx as i64).rem_euclid(n) as u32;

        let y = self.y as i64 + dy as i64;
        if y < 0 || y >= n {
            return None;
        }

        Some(TileCoord {
            x,
            y: y as u32,
            zoom: self.zoom,
        })
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Sub-tile offset of a coordinate within its containing tile.
///
/// Both components are in `[0, 1)`; `(0, 0)` is the tile's northwest
/// corner. Used to place the location marker at the precise pixel
/// rather than snapping to the tile center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileFraction {
    pub x: f64,
    pub y: f64,
}

/// Errors from coordinate conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude outside the Web Mercator valid range
    #[error("latitude {0} outside Web Mercator range [{MIN_LAT}, {MAX_LAT}]")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180]
    #[error("longitude {0} outside range [{MIN_LON}, {MAX_LON}]")]
    InvalidLongitude(f64),
    /// Zoom level not supported
    #[error("zoom level {0} exceeds maximum {MAX_ZOOM}")]
    InvalidZoom(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display_formatting() {
        let coord = GeoCoordinate::new(35.6812, 139.7671);
        assert_eq!(coord.to_string(), "35.6812\u{00B0} N, 139.7671\u{00B0} E");

        let coord = GeoCoordinate::new(-33.8688, -70.6693);
        assert_eq!(coord.to_string(), "33.8688\u{00B0} S, 70.6693\u{00B0} W");
    }

    #[test]
    fn test_neighbor_wraps_in_x() {
        let tile = TileCoord { x: 0, y: 5, zoom: 4 };
        let west = tile.neighbor(-1, 0).unwrap();
        assert_eq!(west.x, 15);
        assert_eq!(west.y, 5);

        let tile = TileCoord { x: 15, y: 5, zoom: 4 };
        let east = tile.neighbor(1, 0).unwrap();
        assert_eq!(east.x, 0);
    }

    #[test]
    fn test_neighbor_clamps_in_y() {
        let tile = TileCoord { x: 3, y: 0, zoom: 4 };
        assert!(tile.neighbor(0, -1).is_none());

        let tile = TileCoord { x: 3, y: 15, zoom: 4 };
        assert!(tile.neighbor(0, 1).is_none());
        assert!(tile.neighbor(0, -1).is_some());
    }

    #[test]
    fn test_tile_display() {
        let tile = TileCoord {
            x: 29105,
            y: 12903,
            zoom: 15,
        };
        assert_eq!(tile.to_string(), "15/29105/12903");
    }
}
