//! Channel body formatting.
//!
//! - Email bodies are wrapped in a fixed HTML envelope. The content is
//!   inserted verbatim; callers that need escaping must escape first.
//! - Push bodies are cut to the payload limit on a character boundary.

use courier_core::utils::truncate_string;

/// Opening half of the email envelope.
pub const HTML_ENVELOPE_OPEN: &str = "<html><body>";

/// Closing half of the email envelope.
pub const HTML_ENVELOPE_CLOSE: &str = "</body></html>";

/// Wrap content in the email HTML envelope.
pub fn html_envelope(content: &str) -> String {
    let mut out =
        String::with_capacity(HTML_ENVELOPE_OPEN.len() + content.len() + HTML_ENVELOPE_CLOSE.len());
    out.push_str(HTML_ENVELOPE_OPEN);
    out.push_str(content);
    out.push_str(HTML_ENVELOPE_CLOSE);
    out
}

/// Fit content into a push payload of at most `max_len` characters.
pub fn push_body(content: &str, max_len: usize) -> String {
    truncate_string(content, max_len)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope() {
        assert_eq!(
            html_envelope("Invoice ready"),
            "<html><body>Invoice ready</body></html>"
        );
    }

    #[test]
    fn test_envelope_empty() {
        assert_eq!(html_envelope(""), "<html><body></body></html>");
    }

    #[test]
    fn test_envelope_does_not_escape() {
        assert_eq!(
            html_envelope("<b>a & b</b>"),
            "<html><body><b>a & b</b></body></html>"
        );
    }

    #[test]
    fn test_envelope_multiline() {
        let content = "line one\nline two";
        assert_eq!(
            html_envelope(content),
            format!("{HTML_ENVELOPE_OPEN}{content}{HTML_ENVELOPE_CLOSE}")
        );
    }

    #[test]
    fn test_push_body_short() {
        assert_eq!(push_body("Invoice ready", 178), "Invoice ready");
    }

    #[test]
    fn test_push_body_truncated() {
        let long = "a".repeat(200);
        let body = push_body(&long, 178);
        assert_eq!(body.chars().count(), 178);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_push_body_unicode_boundary() {
        let body = push_body("ação ação ação", 8);
        assert_eq!(body, "ação ...");
    }
}
