//! Overridable fragment renderers for blog content.
//!
//! A [`Theme`] turns typed content ([`Post`], [`Comment`], [`Image`], ...)
//! into HTML fragments using a [`Markup`](folio_markup::Markup) builder.
//!
//! # Architecture
//!
//! - [`Theme`]: one method per fragment kind, each with a default
//! - [`blog`]: the base implementations, callable from overrides
//! - [`BlogTheme`]: the base theme with ProcessWire-compatible classes
//! - [`FoundationTheme`]: Foundation classes, headings and pager on top of it
//!
//! Request-specific inputs (current page, viewer, site URLs, page number)
//! travel in a [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use folio_theme::{BlogTheme, Paginated, RenderContext, Theme};
//!
//! let theme = BlogTheme::new();
//! let out = theme.posts(&Paginated::default(), false, &RenderContext::default());
//! assert_eq!(out, "<div class='blog-posts'><h2>No posts to display</h2></div>");
//! ```

pub mod blog;
mod content;
mod context;
mod foundation;
pub mod pager;
mod text;
mod theme;

use folio_config::{ThemeConfig, ThemeVariant};

pub use blog::BlogTheme;
pub use content::{
    ArchiveMonth, ArchiveYear, Author, AuthorProfile, Category, Comment, CommentStatus, Image,
    NavItem, PageInfo, PageRef, Paginated, Post,
};
pub use context::{RenderContext, Viewer};
pub use foundation::FoundationTheme;
pub use pager::PagerOptions;
pub use theme::Theme;

/// Build the configured built-in theme.
#[must_use]
pub fn build_theme(config: &ThemeConfig) -> Box<dyn Theme> {
    match config.variant {
        ThemeVariant::Blog => Box::new(BlogTheme::from_config(config)),
        ThemeVariant::Foundation => Box::new(FoundationTheme::from_config(config)),
    }
}
