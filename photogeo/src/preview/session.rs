//! Preview session lifecycle.
//!
//! Models the host contract as three calls: `load` a photo by path,
//! `render` into a client rectangle, `release` everything. The session
//! owns the decoded photo and the composed map exclusively; a reload
//! swaps in the new state only once it is fully built, so a render
//! racing a reload never observes a half-loaded session.

use super::renderer;
use crate::config::PreviewConfig;
use crate::map::MapComposer;
use crate::metadata::{self, ExifMetadataReader, PhotoMetadata};
use crate::provider::{OsmTileProvider, ProviderError, ReqwestClient};
use crate::raster::{RasterBuffer, RasterError};
use crate::tile::{HttpTileFetcher, TileSource};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Errors that are fatal to a preview session.
///
/// Only photo decode and transport-stack construction can fail here.
/// Metadata and tile problems degrade the preview instead.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The primary photo could not be read or decoded
    #[error("photo not readable: {0}")]
    Photo(#[from] RasterError),

    /// The HTTP client could not be constructed
    #[error("tile transport unavailable: {0}")]
    Transport(#[from] ProviderError),
}

/// Everything one loaded photo owns.
struct LoadedState {
    photo: RasterBuffer,
    map: Option<RasterBuffer>,
    metadata: PhotoMetadata,
}

/// A photo preview session.
///
/// Construct once per preview pane, then `load` each photo the host
/// selects. `render` may be called any number of times between loads,
/// including zero, and tolerates being called before the first load.
pub struct PreviewSession {
    composer: MapComposer,
    state: Option<LoadedState>,
}

impl PreviewSession {
    /// Creates a session downloading tiles over HTTP per `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Transport`] if the HTTP client cannot
    /// be built.
    pub fn new(config: &PreviewConfig) -> Result<Self, PreviewError> {
        let client = ReqwestClient::with_timeout(config.timeout_secs())?;
        let provider = OsmTileProvider::with_base_url(client, config.tile_base_url());
        let fetcher = HttpTileFetcher::new(Arc::new(provider), config.tile_size());
        Ok(Self::with_tile_source(Arc::new(fetcher), config))
    }

    /// Creates a session over an arbitrary tile source.
    pub fn with_tile_source(tiles: Arc<dyn TileSource>, config: &PreviewConfig) -> Self {
        Self {
            composer: MapComposer::new(tiles, config.zoom()),
            state: None,
        }
    }

    /// Loads a photo and composes its map preview.
    ///
    /// The photo decode is the only fatal step. Missing or unreadable
    /// metadata and tile failures leave the session loaded without a
    /// map. Prior state is replaced only after the new state is
    /// complete; on error the previous photo stays loaded.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Photo`] if the file cannot be read or
    /// decoded as an image.
    pub fn load(&mut self, path: &Path) -> Result<(), PreviewError> {
        let photo = RasterBuffer::open(path)?;

        let photo_metadata = match ExifMetadataReader::open(path) {
            Ok(reader) => metadata::read_photo_metadata(&reader),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no readable metadata");
                PhotoMetadata::default()
            }
        };

        let map = photo_metadata
            .coordinate
            .map(|coordinate| self.composer.compose(coordinate));

        info!(
            path = %path.display(),
            width = photo.width(),
            height = photo.height(),
            geotagged = map.is_some(),
            "photo loaded"
        );

        self.state = Some(LoadedState {
            photo,
            map,
            metadata: photo_metadata,
        });
        Ok(())
    }

    /// Renders the preview surface for the given client size.
    ///
    /// Returns `None` when no photo is loaded. Safe to call on every
    /// resize; each call yields a fresh buffer.
    pub fn render(&self, width: u32, height: u32) -> Option<RasterBuffer> {
        let state = self.state.as_ref()?;
        Some(renderer::render(
            &state.photo,
            state.map.as_ref(),
            width,
            height,
        ))
    }

    /// Metadata of the loaded photo, if any.
    pub fn metadata(&self) -> Option<&PhotoMetadata> {
        self.state.as_ref().map(|state| &state.metadata)
    }

    /// Releases the loaded photo and map. Idempotent.
    pub fn release(&mut self) {
        if self.state.take().is_some() {
            debug!("session state released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use crate::coord::TileCoord;
    use crate::raster::Color;
    use std::fs;

    struct AbsentTileSource;

    impl TileSource for AbsentTileSource {
        fn fetch(&self, _tile: &TileCoord) -> Option<RasterBuffer> {
            None
        }

        fn tile_size(&self) -> u32 {
            256
        }
    }

    fn offline_session() -> PreviewSession {
        PreviewSession::with_tile_source(Arc::new(AbsentTileSource), &PreviewConfig::default())
    }

    fn write_plain_png(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("plain.png");
        let photo = RasterBuffer::filled(32, 24, Color::rgb(90, 120, 150));
        photo
            .to_rgba()
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn test_render_before_load_is_none() {
        let session = offline_session();
        assert!(session.render(300, 300).is_none());
    }

    #[test]
    fn test_load_photo_without_gps() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_plain_png(dir.path());

        let mut session = offline_session();
        session.load(&path).unwrap();

        let metadata = session.metadata().unwrap();
        assert!(metadata.coordinate.is_none());

        let surface = session.render(300, 300).unwrap();
        assert_eq!(surface.dimensions(), (300, 300));
    }

    #[test]
    fn test_load_failure_keeps_previous_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let good = write_plain_png(dir.path());
        let bad = dir.path().join("broken.jpg");
        fs::write(&bad, b"not an image at all").unwrap();

        let mut session = offline_session();
        session.load(&good).unwrap();
        assert!(session.load(&bad).is_err());

        // Previous photo still renders.
        assert!(session.render(200, 200).is_some());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let mut session = offline_session();
        let result = session.load(Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(PreviewError::Photo(_))));
    }

    #[test]
    fn test_release_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_plain_png(dir.path());

        let mut session = offline_session();
        session.load(&path).unwrap();
        session.release();
        session.release();
        assert!(session.render(100, 100).is_none());
    }
}
