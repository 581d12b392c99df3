//! Response frame decoding and encoding.
//!
//! Every multi-byte response is a run of 3-byte chunks, each carrying one
//! big-endian data word and the CRC-8 of that word:
//!
//! ```text
//! +---------+---------+-------+---------+---------+-------+-----
//! | data_hi | data_lo | crc8  | data_hi | data_lo | crc8  | ...
//! +---------+---------+-------+---------+---------+-------+-----
//! ```
//!
//! Decoding verifies every chunk and then drops the CRC bytes, yielding the
//! compacted payload (2/3 of the raw length).

use bytes::BufMut;

use crate::checksum;
use crate::constants::{CHUNK_SIZE, WORD_SIZE};
use crate::error::ProtocolError;
use crate::Result;

/// Number of compacted payload bytes carried by a raw frame of `raw_length` bytes.
pub const fn compacted_length(raw_length: usize) -> usize {
    raw_length / CHUNK_SIZE * WORD_SIZE
}

/// Validate a raw frame and strip its checksum bytes.
///
/// The frame is rejected as a whole if any chunk fails its checksum; no
/// partial payload is ever returned.
pub fn decode_frame(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.len() % CHUNK_SIZE != 0 {
        return Err(ProtocolError::FrameLength { length: raw.len() });
    }

    let mut payload = Vec::with_capacity(compacted_length(raw.len()));
    for (index, chunk) in raw.chunks_exact(CHUNK_SIZE).enumerate() {
        let word = [chunk[0], chunk[1]];
        let expected = checksum::compute(word);
        if expected != chunk[2] {
            return Err(ProtocolError::ChecksumMismatch {
                chunk: index,
                expected,
                actual: chunk[2],
            });
        }
        payload.extend_from_slice(&word);
    }

    Ok(payload)
}

/// Build a raw frame from a compacted payload by appending a CRC-8 after
/// every data word. Inverse of [`decode_frame`].
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() % WORD_SIZE != 0 {
        return Err(ProtocolError::OddPayload {
            length: payload.len(),
        });
    }

    let mut buf = Vec::with_capacity(payload.len() / WORD_SIZE * CHUNK_SIZE);
    for word in payload.chunks_exact(WORD_SIZE) {
        let word = [word[0], word[1]];
        buf.put_slice(&word);
        buf.put_u8(checksum::compute(word));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_drops_every_third_byte() {
        let raw = [0xBE, 0xEF, 0x92, 0x00, 0x00, 0x81];
        let payload = decode_frame(&raw).expect("should decode frame");
        assert_eq!(payload, vec![0xBE, 0xEF, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_preserves_order_and_length() {
        let payload: Vec<u8> = (0u8..18).collect();
        let raw = encode_frame(&payload).expect("should encode payload");
        assert_eq!(raw.len(), 27);

        let decoded = decode_frame(&raw).expect("should decode frame");
        assert_eq!(decoded.len(), raw.len() * 2 / 3);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_decode_empty_frame() {
        assert_eq!(decode_frame(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(
            decode_frame(&[0xBE, 0xEF, 0x92, 0x00]),
            Err(ProtocolError::FrameLength { length: 4 })
        );
    }

    #[test]
    fn test_decode_rejects_any_corrupted_chunk() {
        let payload: Vec<u8> = (0u8..18).map(|b| b.wrapping_mul(37)).collect();
        let raw = encode_frame(&payload).expect("should encode payload");

        for chunk in 0..raw.len() / CHUNK_SIZE {
            let mut corrupted = raw.clone();
            corrupted[chunk * CHUNK_SIZE + 2] ^= 0x01;
            match decode_frame(&corrupted) {
                Err(ProtocolError::ChecksumMismatch { chunk: failed, .. }) => {
                    assert_eq!(failed, chunk)
                }
                other => panic!("expected checksum error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_decode_rejects_corrupted_data_byte() {
        let mut raw = encode_frame(&[0x00, 0x80]).expect("should encode payload");
        raw[0] = 0x01;
        assert!(matches!(
            decode_frame(&raw),
            Err(ProtocolError::ChecksumMismatch { chunk: 0, .. })
        ));
    }

    #[test]
    fn test_encode_rejects_odd_payload() {
        assert_eq!(
            encode_frame(&[0x01, 0x02, 0x03]),
            Err(ProtocolError::OddPayload { length: 3 })
        );
    }

    #[test]
    fn test_compacted_length() {
        assert_eq!(compacted_length(48), 32);
        assert_eq!(compacted_length(27), 18);
        assert_eq!(compacted_length(3), 2);
        assert_eq!(compacted_length(0), 0);
    }
}
