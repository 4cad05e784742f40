//! Charset detection and UTF-8 decoding for export attachments.
//!
//! Notebook exports arrive as email attachments and usually declare their
//! charset in a meta tag (recent exports are UTF-8, older desktop-app
//! exports have been seen in legacy single-byte encodings). The declaration
//! is honored when present; everything else is treated as UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Charset declaration inside a meta tag, covering both the
/// `<meta charset="...">` and the
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("meta charset regex")
});

/// Picks the document's encoding from its charset declaration.
///
/// Only the first 1024 bytes are examined; the declaration sits in the
/// document head. An unknown or missing label falls back to UTF-8.
#[must_use]
pub fn detect_charset(bytes: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes raw export bytes to a UTF-8 string.
///
/// Decoding is lossy: bytes invalid in the detected encoding become the
/// Unicode replacement character rather than failing the parse.
#[must_use]
pub fn decode_export(bytes: &[u8]) -> String {
    let (decoded, _, _) = detect_charset(bytes).decode(bytes);
    decoded.into_owned()
}
