//! Tag builder.
//!
//! [`Markup`] turns attribute sets into attribute strings and wraps content
//! in tags. It owns the theme's [`ClassSubstitutions`], so every `class`
//! attribute it emits is already translated to the theme's vocabulary.

use std::fmt::Write;

use crate::attrs::AttributeSet;
use crate::classes::ClassSubstitutions;
use crate::escape::{escape_html, needs_attr_escape};

/// A content node that can be the target of a link.
pub trait Linkable {
    /// URL of the node.
    fn url(&self) -> &str;

    /// Title used as link text when none is given.
    fn title(&self) -> &str;
}

/// An image asset that knows its own dimensions.
pub trait ImageLike {
    /// URL of the image file.
    fn url(&self) -> &str;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Description used as `alt` text.
    fn description(&self) -> &str;
}

/// Markup builder bound to a class-substitution registry.
///
/// # Example
///
/// ```
/// use folio_markup::Markup;
///
/// let mut markup = Markup::new();
/// markup.set_class("gallery", "gallery clearfix");
///
/// assert_eq!(
///     markup.ul("<li>x</li>", "gallery"),
///     "<ul class='gallery clearfix'><li>x</li></ul>"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Markup {
    classes: ClassSubstitutions,
}

impl Markup {
    /// Create a builder with an empty substitution registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder around an existing registry.
    #[must_use]
    pub fn with_classes(classes: ClassSubstitutions) -> Self {
        Self { classes }
    }

    /// The substitution registry.
    #[must_use]
    pub fn classes(&self) -> &ClassSubstitutions {
        &self.classes
    }

    /// Register a single class substitution.
    pub fn set_class(&mut self, token: impl Into<String>, replacement: impl Into<String>) {
        self.classes.set(token, replacement);
    }

    /// Merge several class substitutions into the registry.
    pub fn set_classes<I, K, V>(&mut self, substitutions: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.classes.extend(substitutions);
    }

    /// Resolve a class token through the registry.
    #[must_use]
    pub fn resolve_class<'a>(&'a self, token: &'a str) -> &'a str {
        self.classes.resolve(token)
    }

    /// Serialize attributes as ` key='value'` pairs.
    ///
    /// The result has a leading space when at least one attribute survives,
    /// otherwise it is empty. Values holding a quote or `<` are escaped, then
    /// `class` values are substituted; substituted class lists are embedded as
    /// registered.
    #[must_use]
    pub fn attr_str(&self, attrs: impl Into<AttributeSet>, remove_empty: bool) -> String {
        let attrs = attrs.into();
        let mut out = String::new();

        for (key, value) in attrs.iter() {
            if remove_empty && value.is_empty() {
                continue;
            }

            let escaped;
            let mut value = value;
            if needs_attr_escape(value) {
                escaped = escape_html(value);
                value = &escaped;
            }

            if key == "class" {
                value = self.classes.resolve(value);
            }

            write!(out, " {key}='{value}'").unwrap();
        }

        out
    }

    /// Wrap content in `<tag attrs>...</tag>`.
    #[must_use]
    pub fn wrap(&self, content: &str, tag: &str, attrs: impl Into<AttributeSet>) -> String {
        let attrs = self.attr_str(attrs, true);
        format!("<{tag}{attrs}>{content}</{tag}>")
    }

    /// Render a void element such as `<img ... />`.
    ///
    /// Empty attributes are kept so that e.g. `alt=''` survives.
    #[must_use]
    pub fn void(&self, tag: &str, attrs: impl Into<AttributeSet>) -> String {
        let attrs = self.attr_str(attrs, false);
        format!("<{tag}{attrs} />")
    }

    /// `<p>` element.
    #[must_use]
    pub fn p(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "p", attrs)
    }

    /// `<span>` element.
    #[must_use]
    pub fn span(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "span", attrs)
    }

    /// `<div>` element.
    #[must_use]
    pub fn div(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "div", attrs)
    }

    /// `<ul>` element.
    #[must_use]
    pub fn ul(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "ul", attrs)
    }

    /// `<li>` element.
    #[must_use]
    pub fn li(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "li", attrs)
    }

    /// `<blockquote>` element.
    #[must_use]
    pub fn blockquote(&self, content: &str, attrs: impl Into<AttributeSet>) -> String {
        self.wrap(content, "blockquote", attrs)
    }

    /// Line break.
    #[must_use]
    pub fn br(&self) -> &'static str {
        "<br />"
    }

    /// `<a href>` element.
    ///
    /// The `href` is emitted first; an `href` in `attrs` replaces it.
    #[must_use]
    pub fn link(&self, href: &str, text: &str, attrs: impl Into<AttributeSet>) -> String {
        let mut all = AttributeSet::new().with("href", href);
        for (key, value) in attrs.into().iter() {
            all.set(key, value);
        }
        self.wrap(text, "a", all)
    }

    /// Link to a content node, using its title when `text` is empty.
    #[must_use]
    pub fn link_page(
        &self,
        page: &impl Linkable,
        text: &str,
        attrs: impl Into<AttributeSet>,
    ) -> String {
        let text = if text.is_empty() { page.title() } else { text };
        self.link(page.url(), text, attrs)
    }

    /// `<img>` element for a plain URL; `alt` defaults to empty.
    #[must_use]
    pub fn image(&self, src: &str, attrs: impl Into<AttributeSet>) -> String {
        let mut attrs = attrs.into();
        attrs.set("src", src);
        attrs.set_default("alt", "");
        self.void("img", attrs)
    }

    /// `<img>` element for an image asset.
    ///
    /// `src`, `width`, `height` and `alt` are taken from the image only when
    /// the caller did not supply them.
    #[must_use]
    pub fn image_of(&self, image: &impl ImageLike, attrs: impl Into<AttributeSet>) -> String {
        let mut attrs = attrs.into();
        attrs.set_default("src", image.url());
        attrs.set_default("width", image.width().to_string());
        attrs.set_default("height", image.height().to_string());
        attrs.set_default("alt", image.description());
        self.void("img", attrs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct TestPage;

    impl Linkable for TestPage {
        fn url(&self) -> &str {
            "/blog/hello/"
        }

        fn title(&self) -> &str {
            "Hello"
        }
    }

    struct TestImage;

    impl ImageLike for TestImage {
        fn url(&self) -> &str {
            "/files/photo.jpg"
        }

        fn width(&self) -> u32 {
            640
        }

        fn height(&self) -> u32 {
            480
        }

        fn description(&self) -> &str {
            "A photo"
        }
    }

    #[test]
    fn test_attr_str_empty() {
        let markup = Markup::new();
        assert_eq!(markup.attr_str(AttributeSet::new(), true), "");
        assert_eq!(markup.attr_str("", true), "");
    }

    #[test]
    fn test_attr_str_escapes_quotes_but_not_plain_class() {
        let markup = Markup::new();
        let attrs = AttributeSet::from([("class", "x"), ("title", "a\"b")]);
        let out = markup.attr_str(attrs, true);
        assert_eq!(out, " class='x' title='a&quot;b'");
    }

    #[test]
    fn test_attr_str_remove_empty() {
        let markup = Markup::new();
        let attrs = AttributeSet::from([("a", ""), ("b", "1")]);
        assert_eq!(markup.attr_str(&attrs, true), " b='1'");
        assert_eq!(markup.attr_str(&attrs, false), " a='' b='1'");
    }

    #[test]
    fn test_attr_str_substitutes_class() {
        let mut markup = Markup::new();
        markup.set_class("pagination", "MarkupPagerNav");
        assert_eq!(
            markup.attr_str("pagination", true),
            " class='MarkupPagerNav'"
        );
    }

    #[test]
    fn test_substituted_class_is_not_reescaped() {
        let mut markup = Markup::new();
        markup.set_class("fancy", "a&b");
        assert_eq!(markup.attr_str("fancy", true), " class='a&b'");
    }

    #[test]
    fn test_attr_str_only_class_key_is_substituted() {
        let mut markup = Markup::new();
        markup.set_class("on", "active");
        let attrs = AttributeSet::from([("id", "on"), ("class", "on")]);
        assert_eq!(markup.attr_str(attrs, true), " id='on' class='active'");
    }

    #[test]
    fn test_wrap() {
        let markup = Markup::new();
        assert_eq!(markup.wrap("hi", "p", "lead"), "<p class='lead'>hi</p>");
        assert_eq!(markup.div("x", AttributeSet::new()), "<div>x</div>");
        assert_eq!(
            markup.span("x", "id=a, class=b"),
            "<span id='a' class='b'>x</span>"
        );
    }

    #[test]
    fn test_named_wrappers() {
        let markup = Markup::new();
        assert_eq!(markup.p("t", ""), "<p>t</p>");
        assert_eq!(markup.ul("t", ""), "<ul>t</ul>");
        assert_eq!(markup.li("t", ""), "<li>t</li>");
        assert_eq!(markup.blockquote("t", ""), "<blockquote>t</blockquote>");
        assert_eq!(markup.br(), "<br />");
    }

    #[test]
    fn test_link() {
        let markup = Markup::new();
        assert_eq!(
            markup.link("/about/", "About", "more"),
            "<a href='/about/' class='more'>About</a>"
        );
    }

    #[test]
    fn test_link_page_falls_back_to_title() {
        let markup = Markup::new();
        assert_eq!(
            markup.link_page(&TestPage, "", ""),
            "<a href='/blog/hello/'>Hello</a>"
        );
        assert_eq!(
            markup.link_page(&TestPage, "Read", ""),
            "<a href='/blog/hello/'>Read</a>"
        );
    }

    #[test]
    fn test_image_defaults_alt() {
        let markup = Markup::new();
        assert_eq!(
            markup.image("/a.png", ""),
            "<img src='/a.png' alt='' />"
        );
    }

    #[test]
    fn test_image_of_infers_attributes() {
        let markup = Markup::new();
        assert_eq!(
            markup.image_of(&TestImage, ""),
            "<img src='/files/photo.jpg' width='640' height='480' alt='A photo' />"
        );
    }

    #[test]
    fn test_image_of_caller_attributes_win() {
        let markup = Markup::new();
        let attrs = AttributeSet::from([("width", "100"), ("alt", "Mine")]);
        assert_eq!(
            markup.image_of(&TestImage, attrs),
            "<img width='100' alt='Mine' src='/files/photo.jpg' height='480' />"
        );
    }
}
