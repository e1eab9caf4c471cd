//! Versioned binary envelope wrapping one photo payload.
//!
//! Every blob placed in the secret store is wrapped in this envelope so a
//! later load can be validated before the payload is trusted. The layout is
//! fixed:
//!
//! ```text
//! magic "SVLT" (4) | version u16 BE | codec u8 | flags u8 (reserved, 0) |
//! payload length u32 BE | payload
//! ```
//!
//! Decoding is strict: short input, wrong magic, an unsupported version, a
//! set reserved flag, an unknown codec tag, and any payload length mismatch
//! (truncation or trailing bytes) are all rejected.

use crate::camera::types::PhotoCodec;
use crate::error_handling::types::ArchiveError;

/// Magic bytes at the start of every envelope.
pub const MAGIC: [u8; 4] = *b"SVLT";

/// Current envelope version.
pub const VERSION: u16 = 1;

const HEADER_LEN: usize = 12;

/// A validated envelope: the codec tag and the raw photo payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedPhoto {
    pub codec: PhotoCodec,
    pub payload: Vec<u8>,
}

/// Wraps a photo payload in the envelope.
pub fn encode(payload: &[u8], codec: PhotoCodec) -> Vec<u8> {
    let mut blob = Vec::with_capacity(HEADER_LEN + payload.len());
    blob.extend_from_slice(&MAGIC);
    blob.extend_from_slice(&VERSION.to_be_bytes());
    blob.push(codec.code());
    blob.push(0); // reserved
    blob.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    blob.extend_from_slice(payload);
    blob
}

/// Validates an envelope and returns the wrapped payload.
pub fn decode(blob: &[u8]) -> Result<ArchivedPhoto, ArchiveError> {
    if blob.len() < HEADER_LEN {
        return Err(ArchiveError::TooShort(blob.len()));
    }
    if blob[0..4] != MAGIC {
        return Err(ArchiveError::BadMagic);
    }

    let version = u16::from_be_bytes([blob[4], blob[5]]);
    if version != VERSION {
        return Err(ArchiveError::UnsupportedVersion(version));
    }

    let codec = PhotoCodec::from_code(blob[6]).ok_or(ArchiveError::UnknownCodec(blob[6]))?;
    if blob[7] != 0 {
        return Err(ArchiveError::ReservedFlags(blob[7]));
    }

    let declared = u32::from_be_bytes([blob[8], blob[9], blob[10], blob[11]]) as usize;
    let actual = blob.len() - HEADER_LEN;
    if declared != actual {
        return Err(ArchiveError::LengthMismatch { declared, actual });
    }

    Ok(ArchivedPhoto {
        codec,
        payload: blob[HEADER_LEN..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let payload = b"\xff\xd8fake jpeg body\xff\xd9";
        let blob = encode(payload, PhotoCodec::Jpeg);
        let photo = decode(&blob).unwrap();
        assert_eq!(photo.codec, PhotoCodec::Jpeg);
        assert_eq!(photo.payload, payload);
    }

    #[test]
    fn test_decode_rejects_short_input() {
        assert_eq!(decode(&[]), Err(ArchiveError::TooShort(0)));
        assert_eq!(decode(&MAGIC), Err(ArchiveError::TooShort(4)));
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let mut blob = encode(b"x", PhotoCodec::Raw);
        blob[0] = b'X';
        assert_eq!(decode(&blob), Err(ArchiveError::BadMagic));
    }

    #[test]
    fn test_decode_rejects_unsupported_version() {
        let mut blob = encode(b"x", PhotoCodec::Raw);
        blob[4] = 0;
        blob[5] = 9;
        assert_eq!(decode(&blob), Err(ArchiveError::UnsupportedVersion(9)));
    }

    #[test]
    fn test_decode_rejects_unknown_codec() {
        let mut blob = encode(b"x", PhotoCodec::Raw);
        blob[6] = 0xEE;
        assert_eq!(decode(&blob), Err(ArchiveError::UnknownCodec(0xEE)));
    }

    #[test]
    fn test_decode_rejects_reserved_flags() {
        let mut blob = encode(b"x", PhotoCodec::Raw);
        blob[7] = 0x01;
        assert_eq!(decode(&blob), Err(ArchiveError::ReservedFlags(0x01)));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let mut blob = encode(b"abcdef", PhotoCodec::Png);
        blob.truncate(blob.len() - 2);
        assert_eq!(
            decode(&blob),
            Err(ArchiveError::LengthMismatch { declared: 6, actual: 4 })
        );
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut blob = encode(b"abcdef", PhotoCodec::Png);
        blob.push(0);
        assert_eq!(
            decode(&blob),
            Err(ArchiveError::LengthMismatch { declared: 6, actual: 7 })
        );
    }

    #[test]
    fn test_empty_payload_roundtrips() {
        let blob = encode(b"", PhotoCodec::Raw);
        assert_eq!(blob.len(), 12);
        let photo = decode(&blob).unwrap();
        assert!(photo.payload.is_empty());
    }
}
