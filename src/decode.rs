//! Byte decoding and HTML entity resolution ahead of stripping.

/// Turns raw article bytes into text the stripper can work on.
///
/// Implementations must never fail: bytes they cannot decode are dropped.
pub trait Decoder: Send + Sync {
    /// Decode raw bytes into text.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Expand character references such as `&amp;` and `&#8212;`.
    fn resolve_entities(&self, text: &str) -> String;
}

/// Lenient UTF-8 decoder with HTML entity resolution.
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8Decoder;

impl Decoder for Utf8Decoder {
    fn decode(&self, bytes: &[u8]) -> String {
        let mut text = String::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            // Invalid sequences are skipped, not replaced with U+FFFD
            text.push_str(chunk.valid());
        }
        text
    }

    fn resolve_entities(&self, text: &str) -> String {
        html_escape::decode_html_entities(text).into_owned()
    }
}
