//! HTML escaping.

/// Escape text content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Sole & <Ankle>"), "Sole &amp; &lt;Ankle&gt;");
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"/a?b=1&c="2""#), "/a?b=1&amp;c=&quot;2&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }
}
