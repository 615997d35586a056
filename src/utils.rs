//! Small validation helpers shared by the pipeline.
//!
//! - URL well-formedness check used to gate the `uri` output field
//! - String clamping for over-long text fields

use tracing::warn;
use url::Url;

/// Maximum length, in characters, of a text field in the output.
pub const MAX_FIELD_CHARS: usize = 256;

/// Report whether `s` is a syntactically well-formed URL.
///
/// Requires at minimum a scheme and an authority (host). Pure syntax check:
/// no network access, no reachability probe.
///
/// # Examples
///
/// ```
/// use hn_reader::utils::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/story"));
/// assert!(!is_valid_url("example.com/story"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Clamp a text field to [`MAX_FIELD_CHARS`] characters.
///
/// Long titles are rare but the API does not bound them; truncation keeps
/// the output readable. An empty input is passed through unchanged (the
/// caller decides what an absent field maps to).
pub fn clamp_field(s: &str) -> String {
    if s.chars().count() <= MAX_FIELD_CHARS {
        s.to_string()
    } else {
        warn!(
            chars = s.chars().count(),
            max = MAX_FIELD_CHARS,
            "Text field too long; truncating"
        );
        s.chars().take(MAX_FIELD_CHARS).collect()
    }
}
