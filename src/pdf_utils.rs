//! Shared PDF parsing utilities.

use lopdf::Document;

/// Extract a string value from a PDF dictionary for a given key.
///
/// Returns `Some(String)` if the key exists and contains a valid non-empty string,
/// `None` otherwise.
pub fn extract_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|v| v.as_str().ok())
        .map(|s| String::from_utf8_lossy(s).trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read a string entry (e.g. `Title`) from the trailer's `/Info` dictionary.
/// `/Info` may be inline or an indirect reference.
pub fn info_entry(document: &Document, key: &[u8]) -> Option<String> {
    let info = document.trailer.get(b"Info").ok()?;
    let dict = match info.as_reference() {
        Ok(id) => document.get_dictionary(id).ok()?,
        Err(_) => info.as_dict().ok()?,
    };
    extract_string_from_dict(dict, key)
}

/// Collapse runs of whitespace (including the newlines lopdf inserts between
/// text operations) into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
