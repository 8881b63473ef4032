//! End-to-end preview tests over the public API.
//!
//! Exercises the session lifecycle against real files on disk and the
//! composer against stub tile sources, without touching the network.

use photogeo::config::PreviewConfig;
use photogeo::coord::{GeoCoordinate, TileCoord};
use photogeo::map::MapComposer;
use photogeo::preview::PreviewSession;
use photogeo::raster::{Color, RasterBuffer};
use photogeo::tile::TileSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;

/// Yields a solid tile for every address and records what was asked.
struct RecordingTileSource {
    requests: Mutex<Vec<TileCoord>>,
}

impl RecordingTileSource {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl TileSource for RecordingTileSource {
    fn fetch(&self, tile: &TileCoord) -> Option<RasterBuffer> {
        self.requests.lock().unwrap().push(*tile);
        Some(RasterBuffer::filled(256, 256, Color::rgb(120, 160, 120)))
    }

    fn tile_size(&self) -> u32 {
        256
    }
}

struct AbsentTileSource;

impl TileSource for AbsentTileSource {
    fn fetch(&self, _tile: &TileCoord) -> Option<RasterBuffer> {
        None
    }

    fn tile_size(&self) -> u32 {
        256
    }
}

fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let photo = RasterBuffer::filled(width, height, Color::rgb(80, 90, 100));
    photo
        .to_rgba()
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

#[test]
fn composer_requests_full_grid_around_location() {
    let source = Arc::new(RecordingTileSource::new());
    let composer = MapComposer::new(source.clone(), 15);

    let tokyo = GeoCoordinate {
        latitude: 35.681236,
        longitude: 139.767125,
    };
    let canvas = composer.compose(tokyo);
    assert_eq!(canvas.dimensions(), (768, 768));

    let requests = source.requests.lock().unwrap();
    assert_eq!(requests.len(), 9);
    // Row-major around the center tile.
    assert_eq!(requests[0], TileCoord::new(29104, 12902, 15));
    assert_eq!(requests[4], TileCoord::new(29105, 12903, 15));
    assert_eq!(requests[8], TileCoord::new(29106, 12904, 15));
}

#[test]
fn session_without_gps_renders_photo_only_surface() {
    let temp = tempfile::TempDir::new().unwrap();
    let photo_path = write_photo(temp.path(), "plain.png", 400, 300);

    let mut session =
        PreviewSession::with_tile_source(Arc::new(RecordingTileSource::new()), &PreviewConfig::default());
    session.load(&photo_path).unwrap();

    // A PNG without EXIF has no coordinate, so no tile is ever fetched.
    let metadata = session.metadata().unwrap();
    assert!(metadata.coordinate.is_none());

    let surface = session.render(640, 480).unwrap();
    assert_eq!(surface.dimensions(), (640, 480));
}

#[test]
fn session_survives_resize_storm() {
    let temp = tempfile::TempDir::new().unwrap();
    let photo_path = write_photo(temp.path(), "plain.png", 1024, 768);

    let mut session =
        PreviewSession::with_tile_source(Arc::new(AbsentTileSource), &PreviewConfig::default());
    session.load(&photo_path).unwrap();

    for (width, height) in [(100, 100), (1, 1), (1920, 1080), (33, 777)] {
        let surface = session.render(width, height).unwrap();
        assert_eq!(surface.dimensions(), (width, height));
    }
}

#[test]
fn reload_replaces_previous_photo() {
    let temp = tempfile::TempDir::new().unwrap();
    let first = write_photo(temp.path(), "first.png", 100, 100);
    let second = write_photo(temp.path(), "second.png", 200, 50);

    let mut session =
        PreviewSession::with_tile_source(Arc::new(AbsentTileSource), &PreviewConfig::default());
    session.load(&first).unwrap();
    session.load(&second).unwrap();

    // Still renders after the swap; the old buffers are gone with the
    // old state.
    let surface = session.render(300, 300).unwrap();
    assert_eq!(surface.dimensions(), (300, 300));
}
