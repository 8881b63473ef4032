//! GPS and camera metadata extraction.
//!
//! Reads geotag fields from an image's embedded metadata store and
//! resolves them into a signed decimal [`GeoCoordinate`], handling the
//! tag-path and numeric-encoding variations different camera encoders
//! produce. Extraction is strictly best-effort: any failure surfaces as
//! "no GPS", never as an error, because location data is optional
//! preview content.

mod reader;
mod value;

pub use reader::{ExifMetadataReader, MetadataError, MetadataReader};
pub use value::MetadataValue;

#[cfg(test)]
pub use reader::MockMetadataReader;

use crate::coord::GeoCoordinate;
use tracing::debug;

/// Known path variants for each GPS tag, tried in order.
///
/// Different encoders place the GPS IFD at different locations: the
/// primary EXIF-in-JPEG path, a bare IFD path, or a sub-IFD path.
/// Lookup stops at the first variant that yields a value.
const LAT_PATHS: [&str; 3] = [
    "/app1/ifd/gps/{ushort=2}",
    "/ifd/gps/{ushort=2}",
    "/app1/ifd/gps/subifd:{ushort=2}",
];
const LAT_REF_PATHS: [&str; 3] = [
    "/app1/ifd/gps/{ushort=1}",
    "/ifd/gps/{ushort=1}",
    "/app1/ifd/gps/subifd:{ushort=1}",
];
const LON_PATHS: [&str; 3] = [
    "/app1/ifd/gps/{ushort=4}",
    "/ifd/gps/{ushort=4}",
    "/app1/ifd/gps/subifd:{ushort=4}",
];
const LON_REF_PATHS: [&str; 3] = [
    "/app1/ifd/gps/{ushort=3}",
    "/ifd/gps/{ushort=3}",
    "/app1/ifd/gps/subifd:{ushort=3}",
];

/// Camera and capture tags for the supplemental metadata readout.
const MAKE_PATH: &str = "/app1/ifd/{ushort=271}";
const MODEL_PATH: &str = "/app1/ifd/{ushort=272}";
const DATE_TAKEN_PATH: &str = "/app1/ifd/exif/{ushort=36867}";
const ALTITUDE_PATH: &str = "/app1/ifd/gps/{ushort=6}";

/// Extracts the GPS coordinate from a metadata store, if present.
///
/// Returns `None` when either tag is missing, and also when both tags
/// decode to exactly zero: an all-zero GPS block almost always means
/// the sensor wrote placeholder zeros rather than a real fix at the
/// Null Island origin. A genuine (0, 0) fix is indistinguishable from
/// that case and is deliberately treated as absent.
pub fn extract_coordinate(reader: &dyn MetadataReader) -> Option<GeoCoordinate> {
    let latitude = read_axis(reader, &LAT_PATHS, &LAT_REF_PATHS, 'S')?;
    let longitude = read_axis(reader, &LON_PATHS, &LON_REF_PATHS, 'W')?;

    if latitude == 0.0 && longitude == 0.0 {
        debug!("GPS tags present but all-zero, treating as absent");
        return None;
    }

    Some(GeoCoordinate::new(latitude, longitude))
}

/// Resolves one axis (latitude or longitude) across the known path
/// variants, applying the hemisphere reference that negates it.
fn read_axis(
    reader: &dyn MetadataReader,
    value_paths: &[&str],
    ref_paths: &[&str],
    negative_hemisphere: char,
) -> Option<f64> {
    for (value_path, ref_path) in value_paths.iter().zip(ref_paths) {
        let value = reader.query(value_path);
        if value.is_empty() {
            continue;
        }

        let mut degrees = value.to_decimal_degrees();
        if reader.query(ref_path).is_hemisphere(negative_hemisphere) {
            degrees = -degrees;
        }
        return Some(degrees);
    }
    None
}

/// Supplemental photo metadata shown alongside the preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoMetadata {
    /// GPS coordinate, if the photo is geotagged
    pub coordinate: Option<GeoCoordinate>,
    /// Camera manufacturer (EXIF Make)
    pub camera_make: Option<String>,
    /// Camera model (EXIF Model)
    pub camera_model: Option<String>,
    /// Original capture timestamp, as recorded (`YYYY:MM:DD HH:MM:SS`)
    pub taken_at: Option<String>,
    /// GPS altitude in meters, if recorded
    pub altitude_m: Option<f64>,
}

impl PhotoMetadata {
    /// Combined camera name, e.g. `"Canon EOS R5"`.
    pub fn camera_name(&self) -> Option<String> {
        match (&self.camera_make, &self.camera_model) {
            (Some(make), Some(model)) => Some(format!("{} {}", make, model)),
            (Some(make), None) => Some(make.clone()),
            (None, Some(model)) => Some(model.clone()),
            (None, None) => None,
        }
    }
}

/// Reads the full supplemental metadata set from a tag store.
pub fn read_photo_metadata(reader: &dyn MetadataReader) -> PhotoMetadata {
    let owned = |path: &str| reader.query(path).as_string().map(str::to_string);

    PhotoMetadata {
        coordinate: extract_coordinate(reader),
        camera_make: owned(MAKE_PATH),
        camera_model: owned(MODEL_PATH),
        taken_at: owned(DATE_TAKEN_PATH),
        altitude_m: reader.query(ALTITUDE_PATH).to_double(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo_tags() -> MockMetadataReader {
        MockMetadataReader::new()
            .with_tag(
                "/app1/ifd/gps/{ushort=2}",
                MetadataValue::Rational64(vec![(35, 1), (40, 1), (50, 1)]),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=1}",
                MetadataValue::Ascii("N".into()),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=4}",
                MetadataValue::Rational64(vec![(139, 1), (46, 1), (1, 1)]),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=3}",
                MetadataValue::Ascii("E".into()),
            )
    }

    #[test]
    fn test_concrete_dms_scenario() {
        let coord = extract_coordinate(&tokyo_tags()).expect("GPS present");
        assert!((coord.latitude - 35.680556).abs() < 1e-5);
        assert!((coord.longitude - 139.766944).abs() < 1e-5);
    }

    #[test]
    fn test_southern_hemisphere_negates_latitude() {
        let reader = tokyo_tags().with_tag(
            "/app1/ifd/gps/{ushort=1}",
            MetadataValue::Ascii("S".into()),
        );
        let coord = extract_coordinate(&reader).unwrap();
        assert!(coord.latitude < 0.0);
        assert!((coord.latitude + 35.680556).abs() < 1e-5);
    }

    #[test]
    fn test_wide_string_reference_negates() {
        let reader = tokyo_tags()
            .with_tag(
                "/app1/ifd/gps/{ushort=1}",
                MetadataValue::Wide("S".into()),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=3}",
                MetadataValue::Wide("W".into()),
            );
        let coord = extract_coordinate(&reader).unwrap();
        assert!(coord.latitude < 0.0);
        assert!(coord.longitude < 0.0);
    }

    #[test]
    fn test_absent_reference_leaves_sign_unchanged() {
        let reader = MockMetadataReader::new()
            .with_tag(
                "/app1/ifd/gps/{ushort=2}",
                MetadataValue::Doubles(vec![35.0, 40.0, 50.0]),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=4}",
                MetadataValue::Doubles(vec![139.0, 46.0, 1.0]),
            );
        let coord = extract_coordinate(&reader).unwrap();
        assert!(coord.latitude > 0.0);
        assert!(coord.longitude > 0.0);
    }

    #[test]
    fn test_missing_tags_yield_absent() {
        assert_eq!(extract_coordinate(&MockMetadataReader::new()), None);

        // Latitude alone is not a fix
        let reader = MockMetadataReader::new().with_tag(
            "/app1/ifd/gps/{ushort=2}",
            MetadataValue::Rational32(vec![(35, 1), (0, 1), (0, 1)]),
        );
        assert_eq!(extract_coordinate(&reader), None);
    }

    #[test]
    fn test_all_zero_tags_suppressed() {
        // Both tags present but decoding to exactly (0, 0): treated as
        // a mis-tagged placeholder block, not a Null Island fix.
        let reader = MockMetadataReader::new()
            .with_tag(
                "/app1/ifd/gps/{ushort=2}",
                MetadataValue::Rational64(vec![(0, 1), (0, 1), (0, 1)]),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=4}",
                MetadataValue::Rational64(vec![(0, 1), (0, 1), (0, 1)]),
            );
        assert_eq!(extract_coordinate(&reader), None);
    }

    #[test]
    fn test_zero_latitude_alone_is_valid() {
        // Only one axis at zero is an ordinary equatorial coordinate.
        let reader = MockMetadataReader::new()
            .with_tag(
                "/app1/ifd/gps/{ushort=2}",
                MetadataValue::Rational64(vec![(0, 1), (0, 1), (0, 1)]),
            )
            .with_tag(
                "/app1/ifd/gps/{ushort=4}",
                MetadataValue::Rational64(vec![(103, 1), (51, 1), (0, 1)]),
            );
        let coord = extract_coordinate(&reader).expect("equatorial fix is valid");
        assert_eq!(coord.latitude, 0.0);
        assert!(coord.longitude > 103.0);
    }

    #[test]
    fn test_bare_ifd_path_variant() {
        // Tags only under the bare IFD path; the primary path misses.
        let reader = MockMetadataReader::new()
            .with_tag(
                "/ifd/gps/{ushort=2}",
                MetadataValue::Rational32(vec![(48, 1), (51, 1), (2952, 100)]),
            )
            .with_tag("/ifd/gps/{ushort=1}", MetadataValue::Ascii("N".into()))
            .with_tag(
                "/ifd/gps/{ushort=4}",
                MetadataValue::Rational32(vec![(2, 1), (17, 1), (4007, 100)]),
            )
            .with_tag("/ifd/gps/{ushort=3}", MetadataValue::Ascii("E".into()));

        let coord = extract_coordinate(&reader).expect("bare IFD variant");
        assert!((coord.latitude - 48.858).abs() < 0.001);
        assert!((coord.longitude - 2.294).abs() < 0.001);
    }

    #[test]
    fn test_photo_metadata_camera_name() {
        let reader = tokyo_tags()
            .with_tag(MAKE_PATH, MetadataValue::Ascii("Canon".into()))
            .with_tag(MODEL_PATH, MetadataValue::Ascii("EOS R5".into()))
            .with_tag(
                DATE_TAKEN_PATH,
                MetadataValue::Ascii("2024:05:12 09:30:00".into()),
            )
            .with_tag(ALTITUDE_PATH, MetadataValue::Rational32(vec![(123, 10)]));

        let metadata = read_photo_metadata(&reader);
        assert_eq!(metadata.camera_name().as_deref(), Some("Canon EOS R5"));
        assert_eq!(metadata.taken_at.as_deref(), Some("2024:05:12 09:30:00"));
        assert_eq!(metadata.altitude_m, Some(12.3));
        assert!(metadata.coordinate.is_some());
    }

    #[test]
    fn test_photo_metadata_defaults_empty() {
        let metadata = read_photo_metadata(&MockMetadataReader::new());
        assert_eq!(metadata, PhotoMetadata::default());
        assert_eq!(metadata.camera_name(), None);
    }
}
