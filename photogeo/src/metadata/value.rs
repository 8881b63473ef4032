//! Tagged metadata value type.
//!
//! Image metadata stores arrive with loosely-typed values: GPS
//! coordinates may be encoded as 64-bit rational pairs, 32-bit rational
//! pairs, or raw double triples, and hemisphere references as narrow or
//! wide strings depending on the encoder. [`MetadataValue`] models the
//! recognized cases explicitly so extraction logic switches on the tag
//! rather than on ambient dynamic typing.

/// A typed metadata value returned from a tag query.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// Array of 64-bit numerator/denominator pairs
    Rational64(Vec<(u64, u64)>),
    /// Array of 32-bit numerator/denominator pairs
    Rational32(Vec<(u32, u32)>),
    /// Array of raw doubles
    Doubles(Vec<f64>),
    /// Narrow (byte) string
    Ascii(String),
    /// Wide (UTF-16 sourced) string
    Wide(String),
    /// Tag not present or unreadable
    Empty,
}

impl MetadataValue {
    /// Whether the tag was absent or unreadable.
    pub fn is_empty(&self) -> bool {
        matches!(self, MetadataValue::Empty)
    }

    /// Converts a degrees/minutes/seconds triple to signed decimal
    /// degrees: `deg + min/60 + sec/3600`.
    ///
    /// A zero or missing denominator contributes 0 for that component.
    /// Values that are present but not in any recognized numeric
    /// encoding convert to 0.0, matching how a permissive metadata
    /// consumer treats malformed GPS blocks.
    pub fn to_decimal_degrees(&self) -> f64 {
        let (degrees, minutes, seconds) = match self {
            MetadataValue::Rational64(pairs) if pairs.len() >= 3 => (
                ratio_u64(pairs[0]),
                ratio_u64(pairs[1]),
                ratio_u64(pairs[2]),
            ),
            MetadataValue::Rational32(pairs) if pairs.len() >= 3 => (
                ratio_u32(pairs[0]),
                ratio_u32(pairs[1]),
                ratio_u32(pairs[2]),
            ),
            MetadataValue::Doubles(values) if values.len() >= 3 => {
                (values[0], values[1], values[2])
            }
            _ => (0.0, 0.0, 0.0),
        };

        degrees + minutes / 60.0 + seconds / 3600.0
    }

    /// Converts a single rational or double value (e.g. GPS altitude).
    pub fn to_double(&self) -> Option<f64> {
        match self {
            MetadataValue::Rational64(pairs) if !pairs.is_empty() => Some(ratio_u64(pairs[0])),
            MetadataValue::Rational32(pairs) if !pairs.is_empty() => Some(ratio_u32(pairs[0])),
            MetadataValue::Doubles(values) if !values.is_empty() => Some(values[0]),
            _ => None,
        }
    }

    /// The string payload, if this is a narrow or wide string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            MetadataValue::Ascii(s) | MetadataValue::Wide(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether this value is a hemisphere reference beginning with the
    /// given letter. Both narrow and wide encodings are checked.
    pub fn is_hemisphere(&self, letter: char) -> bool {
        self.as_string()
            .and_then(|s| s.chars().next())
            .map(|c| c == letter)
            .unwrap_or(false)
    }
}

fn ratio_u64((num, den): (u64, u64)) -> f64 {
    if den != 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}

fn ratio_u32((num, den): (u32, u32)) -> f64 {
    if den != 0 {
        num as f64 / den as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational64_dms_conversion() {
        // 35° 40' 50" = 35.680555...
        let value = MetadataValue::Rational64(vec![(35, 1), (40, 1), (50, 1)]);
        assert!((value.to_decimal_degrees() - 35.680555555).abs() < 1e-6);
    }

    #[test]
    fn test_rational32_dms_conversion() {
        let value = MetadataValue::Rational32(vec![(139, 1), (46, 1), (1, 1)]);
        assert!((value.to_decimal_degrees() - 139.766944444).abs() < 1e-6);
    }

    #[test]
    fn test_double_triple_conversion() {
        let value = MetadataValue::Doubles(vec![51.0, 30.0, 0.0]);
        assert!((value.to_decimal_degrees() - 51.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_contributes_zero() {
        let value = MetadataValue::Rational64(vec![(35, 1), (40, 0), (50, 1)]);
        let expected = 35.0 + 50.0 / 3600.0;
        assert!((value.to_decimal_degrees() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_rationals() {
        // Sub-second precision via large denominators
        let value = MetadataValue::Rational32(vec![(35, 1), (40, 1), (5012, 100)]);
        let expected = 35.0 + 40.0 / 60.0 + 50.12 / 3600.0;
        assert!((value.to_decimal_degrees() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_encoding_converts_to_zero() {
        assert_eq!(MetadataValue::Ascii("35".into()).to_decimal_degrees(), 0.0);
        assert_eq!(
            MetadataValue::Rational64(vec![(35, 1)]).to_decimal_degrees(),
            0.0
        );
    }

    #[test]
    fn test_hemisphere_narrow_and_wide() {
        assert!(MetadataValue::Ascii("S".into()).is_hemisphere('S'));
        assert!(MetadataValue::Wide("S".into()).is_hemisphere('S'));
        assert!(!MetadataValue::Ascii("N".into()).is_hemisphere('S'));
        assert!(!MetadataValue::Empty.is_hemisphere('S'));
    }

    #[test]
    fn test_to_double_single_rational() {
        let value = MetadataValue::Rational32(vec![(1234, 10)]);
        assert_eq!(value.to_double(), Some(123.4));
        assert_eq!(MetadataValue::Empty.to_double(), None);
    }
}
