// HTML helpers

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap content in an element, with an optional class attribute
pub fn wrap_in_tag(content: &str, tag: &str, class: &str) -> String {
    if class.is_empty() {
        format!("<{tag}>{content}</{tag}>")
    } else {
        format!("<{tag} class=\"{}\">{content}</{tag}>", escape_attr(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a&b \"c\" <d>"), "a&amp;b &quot;c&quot; &lt;d&gt;");
        assert_eq!(escape_attr("plain"), "plain");
    }

    #[test]
    fn test_wrap_in_tag() {
        assert_eq!(wrap_in_tag("x", "div", ""), "<div>x</div>");
        assert_eq!(wrap_in_tag("x", "p", "audio"), "<p class=\"audio\">x</p>");
    }
}
