//! HTML Escaping
//!
//! Helpers for placing entry-derived text into generated markup.

/// Escape `& < > " '` (ampersand first). `None` escapes to an empty string.
///
/// Not idempotent: escaping twice double-encodes `&`, so escape exactly once per render.
pub fn escape_html<'a>(value: impl Into<Option<&'a str>>) -> String {
    let Some(unsafe_text) = value.into() else {
        return String::new();
    };
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape text and keep its line breaks as `<br>`
pub fn text_to_html(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_empty_and_none() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html(None::<&str>), "");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape_html("&");
        assert_eq!(once, "&amp;");
        assert_eq!(escape_html(once.as_str()), "&amp;amp;");
    }

    #[test]
    fn test_escaped_output_has_no_raw_markup() {
        let samples = ["<script>alert('x')</script>", "\"quoted\"", "a && b", "&lt;", "plain"];
        for s in samples {
            let out = escape_html(s);
            assert!(!out.contains('<'));
            assert!(!out.contains('>'));
            assert!(!out.contains('"'));
            assert!(!out.contains('\''));
            // Every remaining ampersand starts one of the five references
            for (i, _) in out.match_indices('&') {
                let rest = &out[i..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"].iter().any(|r| rest.starts_with(r)),
                    "bare ampersand in {:?}",
                    out
                );
            }
        }
    }

    #[test]
    fn test_text_to_html_keeps_line_breaks() {
        assert_eq!(text_to_html("a<b\r\nc\nd"), "a&lt;b<br>c<br>d");
    }
}
