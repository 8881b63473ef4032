//! Map composition.
//!
//! Assembles the 3x3 tile grid around a photo location into one square
//! canvas and drops a marker on the exact position. Missing tiles leave
//! their cell as water-colored background; if every tile is missing the
//! composer substitutes the offline fallback graphic instead.

mod fallback;

use crate::coord::{self, GeoCoordinate, TileFraction};
use crate::raster::{Color, RasterBuffer};
use crate::tile::TileSource;
use std::sync::Arc;
use tracing::{debug, warn};

/// Grid edge length in tiles. The photo tile sits in the center cell.
pub const GRID_TILES: u32 = 3;

/// Background color for grid cells whose tile could not be fetched.
/// Matches the water tint of the OSM standard style.
const WATER_COLOR: Color = Color::rgb(170, 211, 223);

const MARKER_COLOR: Color = Color::rgb(220, 50, 50);

/// Composes square map previews from a tile source.
pub struct MapComposer {
    tiles: Arc<dyn TileSource>,
    zoom: u8,
}

impl MapComposer {
    /// Creates a composer fetching from `tiles` at the given zoom level.
    pub fn new(tiles: Arc<dyn TileSource>, zoom: u8) -> Self {
        Self { tiles, zoom }
    }

    /// Edge length in pixels of the composed canvas.
    pub fn canvas_size(&self) -> u32 {
        self.tiles.tile_size() * GRID_TILES
    }

    /// Composes the map preview for a photo location.
    ///
    /// The output is always `canvas_size()` square. Tiles are fetched
    /// row-major around the center tile; horizontal neighbors wrap
    /// across the antimeridian, vertical neighbors past the poles are
    /// skipped. If no tile at all could be fetched the offline fallback
    /// graphic is returned, so composition never fails.
    pub fn compose(&self, coordinate: GeoCoordinate) -> RasterBuffer {
        let size = self.canvas_size();

        let (center, fraction) =
            match coord::project(coordinate.latitude, coordinate.longitude, self.zoom) {
                Ok(projected) => projected,
                Err(e) => {
                    warn!(%coordinate, error = %e, "coordinate not projectable, using fallback");
                    return fallback::render(coordinate, size);
                }
            };

        let tile_size = self.tiles.tile_size();
        let mut canvas = RasterBuffer::filled(size, size, WATER_COLOR);
        let mut fetched = 0u32;

        for dy in -1..=1i32 {
            for dx in -1..=1i32 {
                let Some(address) = center.neighbor(dx, dy) else {
                    continue;
                };
                if let Some(tile) = self.tiles.fetch(&address) {
                    canvas.blit(
                        &tile,
                        (dx + 1) * tile_size as i32,
                        (dy + 1) * tile_size as i32,
                    );
                    fetched += 1;
                }
            }
        }

        if fetched == 0 {
            warn!(%coordinate, tile = %center, "no map tiles available, using fallback");
            return fallback::render(coordinate, size);
        }

        debug!(%coordinate, tile = %center, fetched, "map composed");

        let (marker_x, marker_y) = marker_position(tile_size, fraction);
        draw_marker(&mut canvas, marker_x, marker_y);

        canvas
    }
}

/// Pixel position of the location marker on the composed canvas.
///
/// The center tile occupies the middle grid cell, so the marker lands
/// one tile in plus the fractional offset within the center tile.
fn marker_position(tile_size: u32, fraction: TileFraction) -> (i32, i32) {
    let tile_size = tile_size as f64;
    (
        (tile_size + fraction.x * tile_size) as i32,
        (tile_size + fraction.y * tile_size) as i32,
    )
}

/// Draws the location pin: red disc with a white border and white core.
fn draw_marker(canvas: &mut RasterBuffer, x: i32, y: i32) {
    canvas.draw_filled_circle(x, y, 9, Color::WHITE);
    canvas.draw_filled_circle(x, y, 8, MARKER_COLOR);
    canvas.draw_filled_circle(x, y, 3, Color::WHITE);
}
