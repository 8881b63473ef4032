//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator tile coordinates in the standard slippy-map scheme used
//! by raster tile servers.

mod types;

pub use types::{
    CoordError, GeoCoordinate, TileCoord, TileFraction, DEFAULT_ZOOM, MAX_LAT, MAX_LON, MAX_ZOOM,
    MIN_LAT, MIN_LON, MIN_ZOOM, TILE_SIZE,
};

use std::f64::consts::PI;

/// Projects a geographic coordinate onto the slippy-map tile grid.
///
/// Returns both the discrete tile address and the fractional offset of
/// the coordinate within that tile, so callers can position a marker at
/// the exact pixel rather than the tile center.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level (0 to 19)
///
/// # Errors
///
/// Returns `CoordError` if any input is outside its valid range.
pub fn project(lat: f64, lon: f64, zoom: u8) -> Result<(TileCoord, TileFraction), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let n = 2.0_f64.powi(zoom as i32);

    let x_tile = n * (lon + 180.0) / 360.0;

    // Web Mercator: y = n * (1 - ln(tan(lat) + sec(lat)) / pi) / 2
    let lat_rad = lat * PI / 180.0;
    let y_tile = n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    let x = x_tile.floor();
    let y = y_tile.floor();

    Ok((
        TileCoord {
            x: x as u32,
            y: y as u32,
            zoom,
        },
        TileFraction {
            x: x_tile - x,
            y: y_tile - y,
        },
    ))
}

/// Converts a fractional tile position back to geographic coordinates.
///
/// Integer inputs yield the corresponding tile's northwest corner;
/// `(x + 0.5, y + 0.5)` yields the tile center.
pub fn tile_to_lat_lon(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let n = 2.0_f64.powi(zoom as i32);

    let lon = x / n * 360.0 - 180.0;

    let lat_rad = (PI * (1.0 - 2.0 * y / n)).sinh().atan();
    let lat = lat_rad * 180.0 / PI;

    (lat, lon)
}
