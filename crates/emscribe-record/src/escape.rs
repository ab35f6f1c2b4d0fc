//! Markup escaping for values embedded in the serialized record

/// Escape characters significant in the record's textual serialization
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("300 kV"), "300 kV");
    }

    #[test]
    fn test_all_specials_escaped() {
        assert_eq!(
            escape_text(r#"<a & "b's">"#),
            "&lt;a &amp; &quot;b&apos;s&quot;&gt;"
        );
    }

    #[test]
    fn test_ampersand_not_double_escaped() {
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }
}
