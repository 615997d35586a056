//! JSON rendering of the ranked post list.
//!
//! The output is a JSON array with 4-space indentation and `": "` key-value
//! separators, records in rank order, keys in declared field order.
//! serde_json writes non-ASCII text through as-is, so titles keep characters
//! like en-dashes readable instead of turning into `\u` escapes.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::RankedPost;

/// Render the ordered post list as an indented JSON document.
pub fn render(posts: &[RankedPost]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, RankedPost};

    fn post(rank: u32, title: &str) -> RankedPost {
        RankedPost::from_item(
            Item {
                id: 100 + u64::from(rank),
                title: Some(title.to_string()),
                by: Some("pg".to_string()),
                score: Some(42),
                url: Some("https://example.com/story".to_string()),
                kids: vec![1, 2],
            },
            rank,
        )
    }

    #[test]
    fn test_render_uses_four_space_indent() {
        let rendered = render(&[post(1, "First")]).unwrap();
        assert!(rendered.starts_with("[\n    {\n"));
        assert!(rendered.contains("\"title\": \"First\""));
        assert!(rendered.ends_with("}\n]"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_preserves_record_and_key_order() {
        let rendered = render(&[post(1, "First"), post(2, "Second")]).unwrap();
        assert!(rendered.find("First").unwrap() < rendered.find("Second").unwrap());

        let keys = ["\"title\"", "\"uri\"", "\"author\"", "\"points\"", "\"comments\"", "\"rank\""];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| rendered.find(key).expect("key missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_keeps_non_ascii_readable() {
        let title = "Dropbox – Throw away your USB drive";
        let rendered = render(&[post(1, title)]).unwrap();

        assert!(rendered.contains('\u{2013}'));
        assert!(!rendered.contains("\\u"));

        // Decoding the rendered text yields the exact original string back.
        let decoded: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(decoded[0]["title"], title);
    }
}
