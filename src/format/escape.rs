//! Output escaping: html entities and url component encoding

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes percent-encoded when a value is substituted into a url template.
/// Everything outside ascii alphanumerics and `- _ . ! ~ * ' ( )` is encoded,
/// non-ascii as UTF-8 byte sequences.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a stringified value for the url template's `value` local
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Escape characters with special meaning in html markup
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }

    #[test]
    fn test_escape_html_amp_first() {
        // `<` must not be double-escaped into `&amp;lt;`
        assert_eq!(escape_html("&<"), "&amp;&lt;");
    }

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(
            encode_uri_component("AZaz09-_.!~*'()"),
            "AZaz09-_.!~*'()"
        );
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_uri_component("a/b c&d"), "a%2Fb%20c%26d");
        assert_eq!(encode_uri_component("x=1?y=2"), "x%3D1%3Fy%3D2");
    }

    #[test]
    fn test_encode_non_ascii_as_utf8() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }
}
