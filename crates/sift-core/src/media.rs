//! Media Truncator
//!
//! Bounds the size of embedded base64 media references while keeping a
//! recognizable identity: the mime type and the head of the payload
//! survive, the bulk is replaced by a marker. Remote and relative URLs
//! pass through untouched.

/// Base64 payload characters kept before the marker
const BASE64_KEEP: usize = 50;

/// Marker appended to a truncated payload
pub const TRUNCATION_MARKER: &str = "...[truncated]";

/// Truncate a `data:<mime>;base64,<payload>` src; anything else is
/// returned unchanged
pub fn truncate_media_src(src: &str) -> String {
    if let Some(rest) = src.strip_prefix("data:") {
        if let Some((mime, payload)) = rest.split_once(";base64,") {
            if is_mime_type(mime) && !payload.is_empty() {
                let truncated: String = if payload.len() > BASE64_KEEP {
                    let head: String = payload.chars().take(BASE64_KEEP).collect();
                    format!("{head}{TRUNCATION_MARKER}")
                } else {
                    payload.to_string()
                };
                return format!("data:{mime};base64,{truncated}");
            }
        }
    }
    src.to_string()
}

/// Loose mime shape check: alphanumeric start, then alphanumeric, `/` or `+`
fn is_mime_type(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '+')
}
