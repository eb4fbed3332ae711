use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

/// Golomb-Rice is the crate-internal default; the other two operate over
/// the ASCII decimal, space-separated rendering of the diff-encoded
/// integer sequence, matching the original byte-stream back-ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodecKind {
    GolombRice { k: u32 },
    Zip,
    Lz4,
}

fn values_to_ascii(values: &[u64]) -> String {
    use itertools::Itertools;
    values.iter().map(u64::to_string).join(" ")
}

fn ascii_to_values(s: &str) -> Result<Vec<u64>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(' ')
        .map(|tok| tok.parse::<u64>().map_err(|e| Error::CodecError(format!("malformed integer token: {}", e))))
        .collect()
}

pub fn encode(values: &[u64], kind: CodecKind) -> Result<Vec<u8>> {
    match kind {
        CodecKind::GolombRice { k } => Ok(super::golomb_rice::encode(values, k)),
        CodecKind::Zip => {
            let ascii = values_to_ascii(values);
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(ascii.as_bytes())
                .map_err(|e| Error::CodecError(format!("deflate write failed: {}", e)))?;
            encoder
                .finish()
                .map_err(|e| Error::CodecError(format!("deflate finish failed: {}", e)))
        }
        CodecKind::Lz4 => {
            let ascii = values_to_ascii(values);
            Ok(lz4_flex::compress_prepend_size(ascii.as_bytes()))
        }
    }
}

pub fn decode(bytes: &[u8], kind: CodecKind) -> Result<Vec<u64>> {
    match kind {
        CodecKind::GolombRice { k } => Ok(super::golomb_rice::decode(bytes, k)),
        CodecKind::Zip => {
            let mut decoder = ZlibDecoder::new(bytes);
            let mut ascii = String::new();
            decoder
                .read_to_string(&mut ascii)
                .map_err(|e| Error::CodecError(format!("inflate failed: {}", e)))?;
            ascii_to_values(&ascii)
        }
        CodecKind::Lz4 => {
            let raw = lz4_flex::decompress_size_prepended(bytes)
                .map_err(|e| Error::CodecError(format!("lz4 decompress failed: {}", e)))?;
            let ascii = String::from_utf8(raw)
                .map_err(|e| Error::CodecError(format!("lz4 payload is not valid utf-8: {}", e)))?;
            ascii_to_values(&ascii)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_round_trips() {
        let values = vec![0, 1, 2, 300, 17];
        let encoded = encode(&values, CodecKind::Zip).unwrap();
        assert_eq!(decode(&encoded, CodecKind::Zip).unwrap(), values);
    }

    #[test]
    fn lz4_round_trips() {
        let values = vec![9, 8, 7, 123456, 0];
        let encoded = encode(&values, CodecKind::Lz4).unwrap();
        assert_eq!(decode(&encoded, CodecKind::Lz4).unwrap(), values);
    }

    #[test]
    fn golomb_rice_round_trips() {
        let values = vec![1, 2, 3];
        let kind = CodecKind::GolombRice { k: 2 };
        let encoded = encode(&values, kind).unwrap();
        assert_eq!(decode(&encoded, kind).unwrap(), values);
    }
}
