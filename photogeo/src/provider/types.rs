//! Provider types and traits

use crate::coord::TileCoord;

/// Errors that can occur while talking to a tile server.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (transport error, timeout, or error status)
    #[error("HTTP error: {0}")]
    Http(String),
    /// Zoom level not served by this provider
    #[error("zoom level {0} not supported by provider")]
    UnsupportedZoom(u8),
    /// Response was transported successfully but is unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for raster map-tile providers.
///
/// Implementors download one compressed tile image per call, addressed
/// by slippy-map coordinates. One request per call: retry policy
/// belongs to callers, and the map composer deliberately has none.
pub trait TileProvider: Send + Sync {
    /// Downloads the compressed image bytes for one tile.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on any transport failure, error status,
    /// or empty body.
    fn download_tile(&self, tile: &TileCoord) -> Result<Vec<u8>, ProviderError>;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the maximum zoom level this provider serves.
    fn max_zoom(&self) -> u8;

    /// Checks whether this provider serves the given zoom level.
    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom <= self.max_zoom()
    }
}
