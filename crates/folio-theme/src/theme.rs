//! Theme trait for overridable fragment rendering.
//!
//! Every fragment kind is one method of [`Theme`]. Each method has a default
//! that calls the base implementation in [`blog`](crate::blog), and those base
//! implementations build sub-fragments by calling back through the trait, so
//! an override in a derived theme is picked up everywhere it is used.
//!
//! An override can still reach the base behavior by calling the matching
//! function in [`blog`](crate::blog) directly.
//!
//! # Example
//!
//! ```
//! use folio_markup::Markup;
//! use folio_theme::{BlogTheme, Theme};
//!
//! struct Shouting(BlogTheme);
//!
//! impl Theme for Shouting {
//!     fn markup(&self) -> &Markup { self.0.markup() }
//!     fn thumb_size(&self) -> (u32, u32) { self.0.thumb_size() }
//!
//!     fn headline(&self, text: &str) -> String {
//!         folio_theme::blog::headline(self, &text.to_uppercase())
//!     }
//! }
//!
//! assert_eq!(Shouting(BlogTheme::new()).headline("hi"), "<h1>HI</h1>");
//! ```

use folio_markup::Markup;

use crate::blog;
use crate::content::{
    ArchiveYear, AuthorProfile, Category, Comment, Image, NavItem, PageInfo, PageRef, Paginated,
    Post,
};
use crate::context::RenderContext;

/// A bundle of fragment renderers plus the state they read.
///
/// Implementors supply [`markup`](Self::markup) and
/// [`thumb_size`](Self::thumb_size) and override any rendering method they
/// want to change.
pub trait Theme {
    /// Markup builder holding this theme's class substitutions.
    fn markup(&self) -> &Markup;

    /// Gallery thumbnail `(width, height)` in pixels.
    fn thumb_size(&self) -> (u32, u32);

    /// List of posts, with a placeholder when empty and pagination when the
    /// collection spans several pages.
    fn posts(&self, posts: &Paginated<Post>, small: bool, ctx: &RenderContext) -> String {
        blog::posts(self, posts, small, ctx)
    }

    /// One post: head, body and foot.
    fn post(&self, post: &Post, small: bool, ctx: &RenderContext) -> String {
        blog::post(self, post, small, ctx)
    }

    /// Title and byline of a post.
    fn post_head(&self, post: &Post, small: bool, ctx: &RenderContext) -> String {
        blog::post_head(self, post, small, ctx)
    }

    /// Body (or summary) of a post.
    fn post_body(&self, post: &Post, small: bool, ctx: &RenderContext) -> String {
        blog::post_body(self, post, small, ctx)
    }

    /// Comment-count link below a post.
    fn post_foot(&self, post: &Post, small: bool, ctx: &RenderContext) -> String {
        blog::post_foot(self, post, small, ctx)
    }

    /// A formatted date.
    fn date(&self, date: &str) -> String {
        blog::date(self, date)
    }

    /// Links to the neighbouring posts.
    fn link_next_prev(&self, next: Option<&PageRef>, prev: Option<&PageRef>) -> String {
        blog::link_next_prev(self, next, prev)
    }

    /// Thumbnail gallery; empty when there are no images.
    fn gallery(&self, images: &[Image]) -> String {
        blog::gallery(self, images)
    }

    /// Comment list, limited to `limit` entries when non-zero.
    fn comments(&self, comments: &[Comment], limit: usize, ctx: &RenderContext) -> String {
        blog::comments(self, comments, limit, ctx)
    }

    /// One comment.
    fn comment(&self, comment: &Comment, ctx: &RenderContext) -> String {
        blog::comment(self, comment, ctx)
    }

    /// Back/Next links for a paged comment list.
    fn comments_pagination(&self, fetched: usize, limit: usize, ctx: &RenderContext) -> String {
        blog::comments_pagination(self, fetched, limit, ctx)
    }

    /// List of categories.
    fn categories(&self, categories: &[Category]) -> String {
        blog::categories(self, categories)
    }

    /// One category with its leading posts.
    fn category(&self, category: &Category) -> String {
        blog::category(self, category)
    }

    /// Author biography with photo.
    fn author_bio(&self, profile: &AuthorProfile, ctx: &RenderContext) -> String {
        blog::author_bio(self, profile, ctx)
    }

    /// Archive list by year and month.
    fn archives(&self, years: &[ArchiveYear], ctx: &RenderContext) -> String {
        blog::archives(self, years, ctx)
    }

    /// Breadcrumb trail.
    fn breadcrumbs(&self, items: &[NavItem]) -> String {
        blog::breadcrumbs(self, items)
    }

    /// Secondary navigation, highlighting the item whose URL is `current`.
    fn subnav(&self, items: &[NavItem], current: &str) -> String {
        blog::subnav(self, items, current)
    }

    /// "View More" link.
    fn link_more(&self, url: &str, text: &str) -> String {
        blog::link_more(self, url, text)
    }

    /// RSS feed link.
    fn link_rss(&self, url: &str, text: &str) -> String {
        blog::link_rss(self, url, text)
    }

    /// Label with a post count.
    fn num_posts(&self, n: usize) -> String {
        blog::num_posts(self, n)
    }

    /// Label with the current page number.
    fn page_num(&self, n: usize) -> String {
        blog::page_num(self, n)
    }

    /// Numbered pagination for the current page.
    fn pagination(&self, info: PageInfo, ctx: &RenderContext) -> String {
        blog::pagination(self, info, ctx)
    }

    /// Primary headline.
    fn headline(&self, text: &str) -> String {
        blog::headline(self, text)
    }

    /// Secondary headline.
    fn subhead(&self, text: &str) -> String {
        blog::subhead(self, text)
    }

    /// Sidebar widgets, already rendered.
    fn widgets(&self, rendered: &[String]) -> String {
        blog::widgets(self, rendered)
    }

    /// Shortcuts for authors and superusers.
    fn admin_widget(&self, posts_parent: &PageRef, ctx: &RenderContext) -> String {
        blog::admin_widget(self, posts_parent, ctx)
    }
}
