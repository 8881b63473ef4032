//! Preview configuration.

use crate::coord::{DEFAULT_ZOOM, TILE_SIZE};
use crate::provider::{DEFAULT_TIMEOUT_SECS, OSM_BASE_URL};

/// Configuration for preview composition.
///
/// Groups the session constants — map zoom, tile geometry, tile
/// endpoint, and network timeout — with sensible defaults. None of
/// these vary within a preview session.
///
/// # Example
///
/// ```
/// use photogeo::config::PreviewConfig;
///
/// // Using defaults
/// let config = PreviewConfig::default();
/// assert_eq!(config.zoom(), 15);
/// assert_eq!(config.tile_size(), 256);
///
/// // Custom configuration
/// let config = PreviewConfig::new()
///     .with_zoom(12)
///     .with_tile_base_url("https://tiles.example.com");
/// assert_eq!(config.zoom(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// Slippy-map zoom level for the preview map
    zoom: u8,
    /// Tile edge length in pixels
    tile_size: u32,
    /// Base URL of the tile endpoint
    tile_base_url: String,
    /// Connect+read timeout per tile request, in seconds
    timeout_secs: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_size: TILE_SIZE,
            tile_base_url: OSM_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PreviewConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the map zoom level. Default: 15 (street level).
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the expected tile edge length in pixels. Default: 256.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the tile endpoint base URL. Default: the public
    /// OpenStreetMap tile server.
    pub fn with_tile_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.tile_base_url = base_url.into();
        self
    }

    /// Set the per-tile network timeout in seconds. Default: 10.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Get the map zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Get the tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Get the tile endpoint base URL.
    pub fn tile_base_url(&self) -> &str {
        &self.tile_base_url
    }

    /// Get the per-tile network timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}
