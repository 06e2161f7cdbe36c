//! Foundation theme.
//!
//! Layers Foundation CSS classes over [`BlogTheme`] and overrides the
//! headings and the pager. Everything else is inherited.

use folio_config::ThemeConfig;
use folio_markup::Markup;

use crate::blog::BlogTheme;
use crate::content::PageInfo;
use crate::context::RenderContext;
use crate::pager::{self, PagerOptions};
use crate::theme::Theme;

/// Class substitutions the Foundation theme adds on top of the base ones.
pub const FOUNDATION_CLASSES: [(&str, &str); 7] = [
    ("num-posts", "white label num-posts"),
    ("page-num", "white label page-num"),
    ("date", "white label date"),
    ("alert-success", "alert-box success"),
    ("alert-error", "alert-box error"),
    ("link-next-prev", "link-next-prev block-grid two-up"),
    ("pagination", "pagination"),
];

/// Theme for the Foundation front-end framework.
#[derive(Clone, Debug)]
pub struct FoundationTheme {
    base: BlogTheme,
}

impl Default for FoundationTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FoundationTheme {
    /// Base theme with the Foundation substitutions layered on top.
    #[must_use]
    pub fn new() -> Self {
        let mut base = BlogTheme::new();
        base.markup_mut().set_classes(FOUNDATION_CLASSES);
        Self { base }
    }

    /// Foundation theme with configuration applied. Configured substitutions
    /// win over both built-in tables.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::new();
        theme.base.configure(config);
        theme
    }

    /// Mutable access to the markup builder, for registering substitutions.
    pub fn markup_mut(&mut self) -> &mut Markup {
        self.base.markup_mut()
    }
}

impl Theme for FoundationTheme {
    fn markup(&self) -> &Markup {
        self.base.markup()
    }

    fn thumb_size(&self) -> (u32, u32) {
        self.base.thumb_size()
    }

    fn pagination(&self, info: PageInfo, ctx: &RenderContext) -> String {
        let options = PagerOptions {
            current_item_class: "current".to_owned(),
            separator_item_class: "unavailable".to_owned(),
            ..PagerOptions::default()
        };
        pager::render_pager(self.markup(), info, &ctx.page.url, &options)
    }

    fn headline(&self, text: &str) -> String {
        self.markup().wrap(text, "h2", "headline")
    }

    fn subhead(&self, text: &str) -> String {
        self.markup().wrap(text, "h4", "subhead")
    }
}
