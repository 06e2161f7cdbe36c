//! Class-substitution registry.
//!
//! Markup code refers to styling roles through logical class tokens such as
//! `pagination` or `blog-comment`. A theme maps those tokens to the literal
//! classes its CSS framework expects; every `class` attribute emitted by
//! [`Markup`](crate::Markup) is passed through [`ClassSubstitutions::resolve`].

use std::collections::HashMap;

/// Mapping from logical class token to replacement class list.
///
/// Tokens without an entry resolve to themselves.
///
/// # Example
///
/// ```
/// use folio_markup::ClassSubstitutions;
///
/// let mut classes = ClassSubstitutions::new();
/// classes.set("gallery", "gallery clearfix");
///
/// assert_eq!(classes.resolve("gallery"), "gallery clearfix");
/// assert_eq!(classes.resolve("widget"), "widget");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSubstitutions {
    entries: HashMap<String, String>,
}

impl ClassSubstitutions {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the substitution for a single token.
    pub fn set(&mut self, token: impl Into<String>, replacement: impl Into<String>) {
        self.entries.insert(token.into(), replacement.into());
    }

    /// Merge many substitutions; entries for existing tokens are overwritten.
    pub fn extend<I, K, V>(&mut self, substitutions: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (token, replacement) in substitutions {
            self.set(token, replacement);
        }
    }

    /// Resolve a token to its replacement, or return it unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map_or(token, String::as_str)
    }

    /// Number of registered substitutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no substitutions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ClassSubstitutions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut classes = Self::new();
        classes.extend(iter);
        classes
    }
}
