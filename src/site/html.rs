//! Minimal escaping for server-rendered markup and inline scripts.

/// Escape a value for use in element text or a double-quoted attribute.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a quoted JavaScript string in an inline `<script>`.
///
/// Entities are not decoded inside script elements, so quotes, backslashes,
/// markup characters and line terminators become `\uXXXX` escapes instead.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '\'' | '"' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
                out.push_str(&format!("\\u{:04x}", c as u32))
            }
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Quotos"), "Quotos");
    }

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_js_string_keeps_urls_verbatim() {
        assert_eq!(js_string("/quotos-frontend.js"), "/quotos-frontend.js");
        assert_eq!(js_string("/a?b=1&c=2"), "/a?b=1\\u0026c=2");
    }

    #[test]
    fn test_js_string_cannot_close_string_or_script() {
        assert_eq!(
            js_string("x'</script>"),
            "x\\u0027\\u003c/script\\u003e"
        );
        assert_eq!(js_string("a\\b\n"), "a\\u005cb\\u000a");
    }
}
