//! Attribute sets and the selector-string shorthand.
//!
//! An [`AttributeSet`] is an ordered list of unique `key => value` pairs. It can be
//! built explicitly, or parsed from one of two string shorthands:
//!
//! - a bare string such as `"blog-post"`, taken as the value of `class`
//! - a selector string such as `"id=main, class=wide"`, parsed into pairs

/// Ordered attribute mapping used to build markup tags.
///
/// Keys are case-sensitive and unique; setting an existing key replaces its
/// value in place so the original insertion order is kept.
///
/// # Example
///
/// ```
/// use folio_markup::AttributeSet;
///
/// let attrs = AttributeSet::from("a=1, b=2");
/// assert_eq!(attrs.get("a"), Some("1"));
/// assert_eq!(attrs.get("b"), Some("2"));
///
/// let attrs = AttributeSet::from("blog-post");
/// assert_eq!(attrs.get("class"), Some("blog-post"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding only a `class` attribute.
    #[must_use]
    pub fn class(value: impl Into<String>) -> Self {
        let mut attrs = Self::new();
        attrs.set("class", value);
        attrs
    }

    /// Interpret a shorthand string.
    ///
    /// A string containing `=` is parsed as a selector string; anything else
    /// is the value of the `class` attribute.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.contains('=') {
            Self::parse_selector(input)
        } else if input.is_empty() {
            Self::new()
        } else {
            Self::class(input)
        }
    }

    /// Parse a selector string: comma-separated `key=value` pairs.
    ///
    /// Values may be wrapped in single or double quotes, and a quoted value
    /// may hold commas. Entries that do not parse (no `=`, empty or invalid
    /// key, a second `=` in an unquoted value, an unterminated quote) are
    /// dropped; the rest of the string is still used.
    #[must_use]
    pub fn parse_selector(input: &str) -> Self {
        let mut attrs = Self::new();

        for entry in split_entries(input) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match parse_pair(entry) {
                Some((key, value)) => attrs.set(key, value),
                None => tracing::debug!(entry, "Skipping malformed selector entry"),
            }
        }

        attrs
    }

    /// Set an attribute, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set an attribute only when the caller has not supplied a non-empty one.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        if self.get(key).is_none_or(str::is_empty) {
            self.set(key, value);
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a selector string on commas that are not inside a quoted value.
///
/// A quote only opens a value when it directly follows `=`. An unterminated
/// quote runs to the end of the input.
fn split_entries(input: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut quote = None;
    let mut after_eq = false;

    for (i, c) in input.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
                after_eq = false;
            }
            continue;
        }
        match c {
            ',' => {
                entries.push(&input[start..i]);
                start = i + 1;
                after_eq = false;
            }
            '=' => after_eq = true,
            '"' | '\'' if after_eq => quote = Some(c),
            c if !c.is_whitespace() => after_eq = false,
            _ => {}
        }
    }
    entries.push(&input[start..]);

    entries
}

/// Parse one `key=value` selector entry.
fn parse_pair(entry: &str) -> Option<(&str, &str)> {
    let (key, value) = entry.split_once('=')?;
    let key = key.trim();

    if key.is_empty() || !key.chars().all(is_key_char) {
        return None;
    }

    let value = value.trim();
    let quoted = value.starts_with(['"', '\'']);
    let value = unquote(value)?;
    if !quoted && value.contains('=') {
        return None;
    }

    Some((key, value))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Strip one pair of matching surrounding quotes.
///
/// Returns `None` when the value opens a quote it never closes.
fn unquote(value: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest.strip_suffix(quote);
        }
    }
    Some(value)
}

impl From<&str> for AttributeSet {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&String> for AttributeSet {
    fn from(input: &String) -> Self {
        Self::parse(input)
    }
}

impl From<String> for AttributeSet {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<Option<&str>> for AttributeSet {
    fn from(input: Option<&str>) -> Self {
        input.map(Self::parse).unwrap_or_default()
    }
}

impl From<&AttributeSet> for AttributeSet {
    fn from(attrs: &AttributeSet) -> Self {
        attrs.clone()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}
