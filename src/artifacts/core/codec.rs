//! zlib codec for loose objects
//!
//! Every object file on disk is `compress(serialize(object))`. The level is
//! fixed at [`flate2::Compression::default`]; reading never depends on it.

use crate::errors::{ObjectError, Result};
use bytes::Bytes;
use flate2::{Decompress, FlushDecompress, Status};
use std::io::Write;

pub fn compress(data: &[u8]) -> Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;

    Ok(encoder.finish()?.into())
}

/// Inflate a complete zlib stream.
///
/// The stream must reach its end marker: empty, garbage and truncated input
/// are all reported as [`ObjectError::CorruptObject`].
pub fn decompress(data: &[u8]) -> Result<Bytes> {
    let mut decoder = Decompress::new(true);
    let mut decompressed_content = Vec::with_capacity(data.len().saturating_mul(2).max(64));

    loop {
        let (total_in, total_out) = (decoder.total_in(), decoder.total_out());
        let input = &data[total_in as usize..];

        let status = decoder
            .decompress_vec(input, &mut decompressed_content, FlushDecompress::None)
            .map_err(|e| ObjectError::corrupt(format!("unable to decompress object content: {e}")))?;

        if status == Status::StreamEnd {
            return Ok(decompressed_content.into());
        }

        if decompressed_content.len() == decompressed_content.capacity() {
            decompressed_content.reserve(decompressed_content.capacity());
        } else if decoder.total_in() == total_in && decoder.total_out() == total_out {
            return Err(ObjectError::corrupt("truncated object content"));
        }
    }
}
