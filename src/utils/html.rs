//! HTML escaping used when rendering head elements.
//!
//! - `escape()` for text content (`<title>`)
//! - `escape_attr()` for attribute values (`content`, `href`)

use std::borrow::Cow;

/// Characters that must be escaped in text content.
const TEXT_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters that must be escaped inside quoted attribute values.
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Borrows the input when nothing needs escaping.
///
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape a value placed inside a double- or single-quoted attribute.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c).filter(|_| chars.contains(&c)) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert!(matches!(escape("hello world"), Cow::Borrowed(_)));
        assert!(matches!(escape_attr("/css/main.css"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        // Quotes are fine in text content
        assert_eq!(escape(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
        assert_eq!(escape_attr("?a=1&b=2"), "?a=1&amp;b=2");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
        assert_eq!(escape_attr(""), "");
    }
}
