//! OpenStreetMap raster tile provider.
//!
//! Downloads standard OSM raster tiles via the public tile endpoint.
//!
//! # URL Pattern
//!
//! `https://tile.openstreetmap.org/{zoom}/{x}/{y}.png`
//!
//! - Standard XYZ slippy-map coordinates
//! - Tiles are 256×256 PNG images
//! - No API key required; the tile usage policy requires a valid
//!   User-Agent and forbids bulk scraping, both of which suit a
//!   one-off 3×3 preview grid
//!
//! The base URL is configurable so alternate slippy-map endpoints
//! (CartoDB, self-hosted) can be substituted without code changes.

use super::http::HttpClient;
use super::types::{ProviderError, TileProvider};
use crate::coord::TileCoord;

/// Default base URL for OpenStreetMap tiles.
pub const OSM_BASE_URL: &str = "https://tile.openstreetmap.org";

/// Maximum zoom level served by the standard OSM tile layer.
const MAX_ZOOM: u8 = 19;

/// OpenStreetMap tile provider.
///
/// # Example
///
/// ```ignore
/// use photogeo::provider::{OsmTileProvider, ReqwestClient};
///
/// let client = ReqwestClient::new()?;
/// let provider = OsmTileProvider::new(client);
/// ```
pub struct OsmTileProvider<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> OsmTileProvider<C> {
    /// Creates a provider for the public OSM tile endpoint.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, OSM_BASE_URL)
    }

    /// Creates a provider for an alternate slippy-map endpoint.
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Builds the tile URL: `{base}/{zoom}/{x}/{y}.png`.
    fn build_url(&self, tile: &TileCoord) -> String {
        format!("{}/{}/{}/{}.png", self.base_url, tile.zoom, tile.x, tile.y)
    }
}

impl<C: HttpClient> TileProvider for OsmTileProvider<C> {
    fn download_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError> {
        if !self.supports_zoom(tile.zoom) {
            return Err(ProviderError::UnsupportedZoom(tile.zoom));
        }

        let url = self.build_url(tile);
        self.http_client.get(&url)
    }

    fn name(&self) -> &str {
        "OpenStreetMap"
    }

    fn max_zoom(&self) -> u8 {
        MAX_ZOOM
    }
}
