//! # Text Compression
//!
//! Text <-> `Base64(DEFLATE(UTF-8))` round trips.
//!
//! The DEFLATE stream is raw (no zlib or gzip framing) and compressed at
//! the best level; the Base64 alphabet is the standard padded one.

use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::{Compression, read::DeflateDecoder, write::DeflateEncoder};

use crate::{
    errors::{SKResult, StrkitError},
    support::strings::string_from_utf8_lossy,
};

/// Standard Base64 of `bytes`.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Compress `text` to a Base64 string.
///
/// ## Errors
/// [`StrkitError::Io`] if the compressor fails.
pub fn compress(text: &str) -> SKResult<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;

    log::debug!(
        "compressed {} bytes to {} bytes",
        text.len(),
        compressed.len()
    );
    Ok(to_base64(&compressed))
}

/// Decompress a string produced by [`compress`].
///
/// Invalid UTF-8 in the decompressed bytes is replaced with `U+FFFD`.
///
/// ## Errors
/// [`StrkitError::InvalidEncoding`] if `encoded` is not Base64, or does not
/// hold a DEFLATE stream.
pub fn decompress(encoded: &str) -> SKResult<String> {
    let compressed = STANDARD
        .decode(encoded.trim())
        .map_err(|e| StrkitError::InvalidEncoding(format!("base64: {e}")))?;

    let mut decoder = DeflateDecoder::new(compressed.as_slice());
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(|e| StrkitError::InvalidEncoding(format!("deflate: {e}")))?;

    log::debug!(
        "decompressed {} bytes to {} bytes",
        compressed.len(),
        bytes.len()
    );
    Ok(string_from_utf8_lossy(bytes))
}
