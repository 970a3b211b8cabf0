//! Journal attachments as data URLs.
//!
//! Attachments are stored the way the journal has always kept them: a
//! `data:<mime>;base64,<payload>` string per file.

use super::journal::MediaKind;
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

/// MIME type for a file extension, falling back to a generic type of `kind`.
pub fn mime_type(kind: MediaKind, extension: &str) -> &'static str {
    match (kind, extension.to_lowercase().as_str()) {
        (MediaKind::Image, "png") => "image/png",
        (MediaKind::Image, "jpg" | "jpeg") => "image/jpeg",
        (MediaKind::Image, "gif") => "image/gif",
        (MediaKind::Image, "webp") => "image/webp",
        (MediaKind::Image, "svg") => "image/svg+xml",
        (MediaKind::Image, _) => "image/*",
        (MediaKind::Audio, "mp3") => "audio/mpeg",
        (MediaKind::Audio, "wav") => "audio/wav",
        (MediaKind::Audio, "ogg") => "audio/ogg",
        (MediaKind::Audio, "m4a") => "audio/mp4",
        (MediaKind::Audio, "webm") => "audio/webm",
        (MediaKind::Audio, _) => "audio/*",
    }
}

pub fn encode_data_url(kind: MediaKind, extension: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type(kind, extension), STANDARD.encode(bytes))
}

/// Reads `path` and encodes it as an attachment of `kind`.
pub fn read_data_url(kind: MediaKind, path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    Ok(encode_data_url(kind, extension, &bytes))
}
