//! PhotoGeo - GPS-aware photo preview composition
//!
//! This library turns a geotagged photo into a preview surface showing
//! the photo alongside a map of where it was taken: EXIF GPS
//! extraction, Web Mercator tile addressing, best-effort slippy-map
//! tile retrieval, and raster composition.
//!
//! # High-Level API
//!
//! The [`preview`] module provides the session facade most callers
//! want:
//!
//! ```ignore
//! use photogeo::config::PreviewConfig;
//! use photogeo::preview::PreviewSession;
//!
//! let mut session = PreviewSession::new(&PreviewConfig::default())?;
//! session.load(Path::new("vacation.jpg"))?;
//! let surface = session.render(800, 600);
//! ```

pub mod config;
pub mod coord;
pub mod logging;
pub mod map;
pub mod metadata;
pub mod preview;
pub mod provider;
pub mod raster;
pub mod tile;

/// Version of the PhotoGeo library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
