//! Tile acquisition abstraction.
//!
//! [`TileSource`] is the seam between the map composer and the network:
//! it yields a decoded raster tile or nothing. "Nothing" covers every
//! possible failure — timeout, error status, empty body, undecodable
//! payload, wrong dimensions — because a missing map cell degrades the
//! preview, it never fails it. The composer treats each grid cell
//! independently and does not retry.

use crate::coord::TileCoord;
use crate::provider::TileProvider;
use crate::raster::RasterBuffer;
use std::sync::Arc;
use tracing::{debug, warn};

/// Source of decoded raster tiles.
///
/// Implementors must be infallible in the Rust sense: all failure modes
/// collapse to `None`.
pub trait TileSource: Send + Sync {
    /// Fetches and decodes one tile, or `None` if it is unavailable
    /// for any reason.
    fn fetch(&self, tile: &TileCoord) -> Option<RasterBuffer>;

    /// Edge length in pixels of the tiles this source yields.
    fn tile_size(&self) -> u32;
}

/// [`TileSource`] backed by an HTTP tile provider.
///
/// Downloads one tile per call, decodes the compressed payload, and
/// verifies it has the expected pixel dimensions. Every failure is
/// logged at `warn` and reported as absent.
pub struct HttpTileFetcher {
    provider: Arc<dyn TileProvider>,
    tile_size: u32,
}

impl HttpTileFetcher {
    /// Creates a fetcher over the given provider.
    ///
    /// # Arguments
    ///
    /// * `provider` - Tile provider to download from
    /// * `tile_size` - Expected tile edge length in pixels
    pub fn new(provider: Arc<dyn TileProvider>, tile_size: u32) -> Self {
        Self {
            provider,
            tile_size,
        }
    }
}

impl TileSource for HttpTileFetcher {
    fn fetch(&self, tile: &TileCoord) -> Option<RasterBuffer> {
        let bytes = match self.provider.download_tile(tile) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(%tile, provider = self.provider.name(), error = %e, "tile download failed");
                return None;
            }
        };

        let raster = match RasterBuffer::decode(&bytes) {
            Ok(raster) => raster,
            Err(e) => {
                warn!(%tile, error = %e, "tile payload not decodable");
                return None;
            }
        };

        if raster.dimensions() != (self.tile_size, self.tile_size) {
            warn!(
                %tile,
                width = raster.width(),
                height = raster.height(),
                expected = self.tile_size,
                "tile has unexpected dimensions"
            );
            return None;
        }

        debug!(%tile, "tile fetched");
        Some(raster)
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }
}
