//! HTML escaping helpers.

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Whether an attribute value must be escaped before it can sit inside a
/// single-quoted attribute.
///
/// Values are assumed to be entity-encoded already; only a stray quote or
/// `<` forces a second pass.
#[must_use]
pub(crate) fn needs_attr_escape(value: &str) -> bool {
    value.contains(['\'', '"', '<'])
}
