//! Metadata tag store access.
//!
//! [`MetadataReader`] is the query surface over an image's embedded tag
//! store, keyed by hierarchical path strings in the WIC convention
//! (`/app1/ifd/gps/{ushort=2}`). The trait exists for dependency
//! injection: production code reads tags through `kamadak-exif`, tests
//! use an in-memory mock.

use super::value::MetadataValue;
use exif::{Context, Exif, In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Errors opening an image's metadata store.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// File could not be read
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// No EXIF block or unparseable metadata
    #[error("failed to parse EXIF metadata: {0}")]
    Exif(#[from] exif::Error),
}

/// Query surface over an image's embedded metadata tags.
///
/// `query` never fails: an absent or unreadable tag is reported as
/// [`MetadataValue::Empty`], since metadata is always optional content.
pub trait MetadataReader {
    /// Looks up a tag by hierarchical path and returns its typed value.
    fn query(&self, path: &str) -> MetadataValue;
}

/// EXIF-backed metadata reader.
///
/// Translates path queries into EXIF tag lookups. `kamadak-exif`
/// normalizes where encoders physically placed the GPS IFD, so all
/// known path variants for the same tag resolve to the same field.
pub struct ExifMetadataReader {
    exif: Exif,
}

impl ExifMetadataReader {
    /// Opens an image file and parses its EXIF block.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if the file cannot be read or carries no
    /// parseable EXIF data. Callers on the preview path treat this as
    /// "no GPS" rather than a failure.
    pub fn open(path: &Path) -> Result<Self, MetadataError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let exif = exif::Reader::new().read_from_container(&mut reader)?;
        Ok(Self { exif })
    }

    fn convert(value: &Value) -> MetadataValue {
        match value {
            Value::Rational(rationals) => MetadataValue::Rational32(
                rationals.iter().map(|r| (r.num, r.denom)).collect(),
            ),
            Value::SRational(rationals) => {
                MetadataValue::Doubles(rationals.iter().map(|r| r.to_f64()).collect())
            }
            Value::Double(values) => MetadataValue::Doubles(values.clone()),
            Value::Float(values) => {
                MetadataValue::Doubles(values.iter().map(|&v| v as f64).collect())
            }
            Value::Ascii(strings) => match strings.first() {
                Some(bytes) => MetadataValue::Ascii(
                    String::from_utf8_lossy(bytes).trim_end_matches('\0').to_string(),
                ),
                None => MetadataValue::Empty,
            },
            _ => MetadataValue::Empty,
        }
    }
}

impl MetadataReader for ExifMetadataReader {
    fn query(&self, path: &str) -> MetadataValue {
        let Some(tag_number) = parse_tag_number(path) else {
            debug!(path, "unparseable metadata path");
            return MetadataValue::Empty;
        };

        let context = if path.contains("/gps") {
            Context::Gps
        } else if path.contains("/exif") {
            Context::Exif
        } else {
            Context::Tiff
        };

        match self.exif.get_field(Tag(context, tag_number), In::PRIMARY) {
            Some(field) => Self::convert(&field.value),
            None => MetadataValue::Empty,
        }
    }
}

/// Parses the trailing `{ushort=N}` tag selector from a metadata path.
fn parse_tag_number(path: &str) -> Option<u16> {
    let start = path.rfind("{ushort=")? + "{ushort=".len();
    let end = path[start..].find('}')? + start;
    path[start..end].parse().ok()
}

/// In-memory metadata reader for tests.
#[cfg(test)]
pub struct MockMetadataReader {
    tags: std::collections::HashMap<String, MetadataValue>,
}

#[cfg(test)]
impl MockMetadataReader {
    pub fn new() -> Self {
        Self {
            tags: std::collections::HashMap::new(),
        }
    }

    pub fn with_tag(mut self, path: &str, value: MetadataValue) -> Self {
        self.tags.insert(path.to_string(), value);
        self
    }
}

#[cfg(test)]
impl MetadataReader for MockMetadataReader {
    fn query(&self, path: &str) -> MetadataValue {
        self.tags.get(path).cloned().unwrap_or(MetadataValue::Empty)
    }
}
