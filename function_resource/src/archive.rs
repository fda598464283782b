//! Helpers for turning a local code archive into an upload payload

use base64::Engine;
use base64::engine::general_purpose;
use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Reads the code archive fully into memory as raw bytes.
///
/// The platform SDK owns transport encoding, so nothing is re-encoded here.
/// A missing or unreadable path surfaces as a plain [io::Error].
pub fn read_archive(path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
}

/// Reads the code archive and returns a standard base64 rendition for
/// transports that require a text-safe payload.
///
/// The returned buffer is sized exactly to the encoded output, padding
/// included. An empty archive encodes to an empty payload.
pub fn read_archive_base64(path: &Path) -> io::Result<Vec<u8>> {
    let data = std::fs::read(path)?;
    Ok(general_purpose::STANDARD.encode(data).into_bytes())
}

/// Base64-encoded SHA-256 digest of an archive, matching the representation
/// the platform reports for deployed code
pub fn code_sha256(archive: &[u8]) -> String {
    general_purpose::STANDARD.encode(Sha256::digest(archive))
}
