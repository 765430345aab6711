//! Photo transfer encoding.
//!
//! Photos live in the database as raw bytes and cross the wire as standard,
//! padded base64.

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text.trim())
}

/// Wire form of a nullable photo column: a NULL stays `None`, never `""`.
pub fn encode_optional(bytes: Option<&[u8]>) -> Option<String> {
    bytes.map(encode)
}

/// Storage form of an optional wire photo. Missing or blank text means "no photo".
pub fn decode_optional(text: Option<&str>) -> Result<Option<Vec<u8>>, base64::DecodeError> {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => decode(t).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_byte_value_survives_a_round_trip() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(1021).collect();
        assert_eq!(decode(&encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn known_value() {
        assert_eq!(encode(b"hello"), "aGVsbG8=");
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(decode("not base64!!").is_err());
        assert!(decode("aGVsbG8").is_err());
    }

    #[test]
    fn absent_photo_maps_to_none() {
        assert_eq!(encode_optional(None), None);
        assert_eq!(encode_optional(Some(&[])), Some(String::new()));
        assert_eq!(decode_optional(None).unwrap(), None);
        assert_eq!(decode_optional(Some("  ")).unwrap(), None);
        assert_eq!(decode_optional(Some("aGVsbG8=")).unwrap(), Some(b"hello".to_vec()));
        assert!(decode_optional(Some("%%%")).is_err());
    }
}
