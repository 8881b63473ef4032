//! Map tile provider abstraction
//!
//! This module provides traits and implementations for downloading
//! raster map tiles over HTTP. The [`HttpClient`] trait isolates the
//! network transport so providers can be exercised against mock
//! clients in tests.

mod http;
mod osm;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use osm::{OsmTileProvider, OSM_BASE_URL};
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use http::tests::{MockHttpClient, RecordingHttpClient};
