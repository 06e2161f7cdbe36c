//! Base blog theme.
//!
//! The functions in this module are the base implementations behind every
//! [`Theme`] method. They are generic over the theme so that sub-fragments are
//! rendered through the trait, letting overrides take effect everywhere.

use folio_config::ThemeConfig;
use folio_markup::{AttributeSet, Markup, escape_html};

use crate::content::{
    ArchiveYear, AuthorProfile, Category, Comment, CommentStatus, Image, NavItem, PageInfo,
    PageRef, Paginated, Post,
};
use crate::context::RenderContext;
use crate::pager::{self, PagerOptions};
use crate::text::{self, SUMMARY_LENGTH};
use crate::theme::Theme;

/// Class substitutions registered by the base blog theme.
pub const BLOG_CLASSES: [(&str, &str); 7] = [
    ("pagination", "MarkupPagerNav"),
    ("blog-comments", "blog-comments CommentList"),
    ("blog-comment", "blog-comment CommentListItem"),
    ("blog-comment-head", "blog-comment-head CommentHeader"),
    ("blog-comment-body", "blog-comment-body CommentText"),
    ("gallery", "gallery clearfix"),
    ("author", "author clearfix"),
];

/// Default gallery thumbnail size in pixels.
const DEFAULT_THUMB_SIZE: u32 = 100;

/// The base blog theme.
///
/// # Example
///
/// ```
/// use folio_theme::{BlogTheme, Theme};
///
/// let theme = BlogTheme::new();
/// assert_eq!(theme.date("June 1, 2012"), "<span class='date'>June 1, 2012</span>");
/// assert_eq!(theme.gallery(&[]), "");
/// ```
#[derive(Clone, Debug)]
pub struct BlogTheme {
    markup: Markup,
    thumb_width: u32,
    thumb_height: u32,
}

impl Default for BlogTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogTheme {
    /// Base theme with its default class substitutions and 100x100 thumbnails.
    #[must_use]
    pub fn new() -> Self {
        let mut markup = Markup::new();
        markup.set_classes(BLOG_CLASSES);
        Self {
            markup,
            thumb_width: DEFAULT_THUMB_SIZE,
            thumb_height: DEFAULT_THUMB_SIZE,
        }
    }

    /// Base theme with configuration applied.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::new();
        theme.configure(config);
        theme
    }

    /// Apply thumbnail size and layer configured class substitutions on top
    /// of the ones already registered.
    pub fn configure(&mut self, config: &ThemeConfig) {
        self.set_thumb_size(config.thumb_width, config.thumb_height);
        self.markup.set_classes(&config.class_substitutions);
        tracing::debug!(
            substitutions = self.markup.classes().len(),
            thumb_width = self.thumb_width,
            thumb_height = self.thumb_height,
            "Configured theme"
        );
    }

    /// Mutable access to the markup builder, for registering substitutions.
    pub fn markup_mut(&mut self) -> &mut Markup {
        &mut self.markup
    }

    /// Set the gallery thumbnail size.
    pub fn set_thumb_size(&mut self, width: u32, height: u32) {
        self.thumb_width = width;
        self.thumb_height = height;
    }
}

impl Theme for BlogTheme {
    fn markup(&self) -> &Markup {
        &self.markup
    }

    fn thumb_size(&self) -> (u32, u32) {
        (self.thumb_width, self.thumb_height)
    }
}

/// Base [`Theme::posts`].
pub fn posts<T: Theme + ?Sized>(
    theme: &T,
    posts: &Paginated<Post>,
    small: bool,
    ctx: &RenderContext,
) -> String {
    let mut out: String = posts
        .items
        .iter()
        .map(|post| theme.post(post, small, ctx))
        .collect();
    if posts.is_empty() {
        out.push_str(&theme.subhead("No posts to display"));
    }

    let class = if small {
        "blog-posts blog-posts-small"
    } else {
        "blog-posts"
    };
    let mut out = theme.markup().div(&out, class);

    let info = posts.info();
    if info.is_paginated() {
        out.push_str(&theme.pagination(info, ctx));
    }

    out
}

/// Base [`Theme::post`].
pub fn post<T: Theme + ?Sized>(
    theme: &T,
    post: &Post,
    small: bool,
    ctx: &RenderContext,
) -> String {
    let m = theme.markup();
    let head = m.div(&theme.post_head(post, small, ctx), "blog-post-head");
    let body = m.div(&theme.post_body(post, small, ctx), "blog-post-body");
    let foot = m.div(&theme.post_foot(post, small, ctx), "blog-post-foot");
    m.div(&format!("{head}{body}{foot}"), "blog-post")
}

/// Base [`Theme::post_head`].
pub fn post_head<T: Theme + ?Sized>(
    theme: &T,
    post: &Post,
    small: bool,
    ctx: &RenderContext,
) -> String {
    let m = theme.markup();

    let mut title = post.page.title.clone();
    if !ctx.is_current(&post.page) {
        title = m.link(&post.page.url, &title, "");
    }
    let title = if small {
        theme.subhead(&title)
    } else {
        theme.headline(&title)
    };

    let author_url = format!("{}{}/", ctx.site.authors_url, post.author.name);
    let author_link = m.link(&author_url, post.author.display_name(), "");
    let date = theme.date(&post.date);

    let categories = post
        .categories
        .iter()
        .map(|c| m.link_page(c, "", ""))
        .collect::<Vec<_>>()
        .join(" / ");

    let byline = if categories.is_empty() {
        format!("Posted by {author_link} on {date}")
    } else {
        format!("Posted by {author_link} on {date} in {categories}")
    };

    format!("{title} {}", m.p(&byline, "blog-post-byline"))
}

/// Base [`Theme::post_body`].
///
/// The summary view uses the post's own summary, or one generated from the
/// body. A gallery placeholder paragraph is dropped from summaries and
/// replaced by the post's gallery in the full view.
pub fn post_body<T: Theme + ?Sized>(
    theme: &T,
    post: &Post,
    small: bool,
    _ctx: &RenderContext,
) -> String {
    let body = if small {
        let summary = if post.summary.trim().is_empty() {
            let body = text::replace_gallery_placeholder(&post.body, "");
            text::summarize(&body, SUMMARY_LENGTH)
        } else {
            post.summary.clone()
        };
        let more = theme.link_more(&post.page.url, "");
        theme
            .markup()
            .p(&format!("{summary} {more}"), "blog-post-summary")
    } else {
        post.body.clone()
    };

    if !text::has_gallery_placeholder(&body) {
        return body;
    }

    if small {
        text::replace_gallery_placeholder(&body, "")
    } else {
        tracing::debug!(
            post = %post.page.url,
            images = post.images.len(),
            "Expanding gallery placeholder"
        );
        text::replace_gallery_placeholder(&body, &theme.gallery(&post.images))
    }
}

/// Base [`Theme::post_foot`].
pub fn post_foot<T: Theme + ?Sized>(
    theme: &T,
    post: &Post,
    _small: bool,
    _ctx: &RenderContext,
) -> String {
    let label = text::count_label(post.comment_count, "Comment", "Comments");
    theme
        .markup()
        .link(&format!("{}#comments", post.page.url), &label, "num-comments")
}

/// Base [`Theme::date`].
pub fn date<T: Theme + ?Sized>(theme: &T, date: &str) -> String {
    theme.markup().span(date, "date")
}

/// Base [`Theme::link_next_prev`].
pub fn link_next_prev<T: Theme + ?Sized>(
    theme: &T,
    next: Option<&PageRef>,
    prev: Option<&PageRef>,
) -> String {
    let m = theme.markup();

    let prev_link = prev
        .map(|p| m.link(&p.url, &format!("&laquo; {}", p.title), ""))
        .unwrap_or_default();
    let next_link = next
        .map(|n| m.link(&n.url, &format!("{} &raquo;", n.title), ""))
        .unwrap_or_default();

    let items = m.li(&prev_link, "link-prev") + &m.li(&next_link, "link-next");
    m.ul(&items, "link-next-prev")
}

/// Base [`Theme::gallery`].
pub fn gallery<T: Theme + ?Sized>(theme: &T, images: &[Image]) -> String {
    let m = theme.markup();
    let (width, height) = theme.thumb_size();

    let items: String = images
        .iter()
        .map(|image| {
            let thumb = image.sized(width, height);
            let attrs = AttributeSet::new()
                .with("rel", "gallery")
                .with("class", "lightbox")
                .with("title", image.description.as_str());
            let link = m.link(&image.url, &m.image_of(&thumb, AttributeSet::new()), attrs);
            m.li(&link, "")
        })
        .collect();

    if items.is_empty() {
        items
    } else {
        m.ul(&items, "gallery")
    }
}

/// Base [`Theme::comments`].
///
/// Comments that are not approved are only shown to viewers who can edit the
/// current page.
pub fn comments<T: Theme + ?Sized>(
    theme: &T,
    comments: &[Comment],
    limit: usize,
    ctx: &RenderContext,
) -> String {
    let m = theme.markup();

    let visible: Vec<&Comment> = comments
        .iter()
        .filter(|c| ctx.editable || c.status == CommentStatus::Approved)
        .collect();
    let hidden = comments.len() - visible.len();
    if hidden > 0 {
        tracing::debug!(hidden, "Hiding unapproved comments");
    }

    let shown = if limit > 0 && visible.len() > limit {
        &visible[..limit]
    } else {
        &visible[..]
    };
    if shown.is_empty() {
        return String::new();
    }

    let items: String = shown
        .iter()
        .map(|c| {
            let attrs = AttributeSet::new()
                .with("id", format!("comment{}", c.id))
                .with("class", "blog-comment");
            m.li(&theme.comment(c, ctx), attrs)
        })
        .collect();

    let mut out = if ctx.current_is_post() {
        theme.subhead(&text::count_label(visible.len(), "Comment", "Comments"))
    } else {
        String::new()
    };
    out.push_str(&m.ul(&items, "blog-comments"));
    out.push_str(&theme.comments_pagination(visible.len(), limit, ctx));
    out
}

/// Base [`Theme::comment`].
pub fn comment<T: Theme + ?Sized>(theme: &T, comment: &Comment, ctx: &RenderContext) -> String {
    let m = theme.markup();
    let cite = escape_html(comment.cite.trim());
    let date = theme.date(&comment.created);

    let mut header = match &comment.page {
        Some(page) if !ctx.is_current(page) => m.link(
            &format!("{}#comment{}", page.url, comment.id),
            &format!("{cite} replied to {} {date}", page.title),
            "",
        ),
        _ => format!("Comment by {cite} on {date}"),
    };

    match comment.status {
        CommentStatus::Pending => {
            header.push(' ');
            header.push_str(&m.span("PENDING", "blog-comment-status-pending"));
        }
        CommentStatus::Spam => {
            header.push(' ');
            header.push_str(&m.span("SPAM", "blog-comment-status-spam"));
        }
        CommentStatus::Approved => {}
    }

    let body = text::paragraphs(&escape_html(comment.text.trim()), m.br());
    let inner = m.p(&header, "blog-comment-head") + &m.div(&m.p(&body, ""), "blog-comment-body");
    m.blockquote(&inner, "")
}

/// Base [`Theme::comments_pagination`].
///
/// `fetched` is the number of visible comments loaded for this page; one more
/// than `limit` means a next page exists.
pub fn comments_pagination<T: Theme + ?Sized>(
    theme: &T,
    fetched: usize,
    limit: usize,
    ctx: &RenderContext,
) -> String {
    let page_num = ctx.page_num.max(1);
    if limit == 0 || (fetched <= limit && page_num <= 1) {
        return String::new();
    }

    let m = theme.markup();
    let base = &ctx.page.url;
    let mut nav = String::new();

    if page_num > 1 {
        let url = pager::page_url(base, page_num - 1);
        nav.push_str(&m.link(&url, "Back", "comments-pagination-back button"));
        nav.push(' ');
    }
    if fetched > limit {
        let url = pager::page_url(base, page_num + 1);
        nav.push_str(&m.link(&url, "Next", "comments-pagination-next button"));
        nav.push(' ');
    }

    m.p(&nav, "comments-pagination")
}

/// Base [`Theme::categories`].
pub fn categories<T: Theme + ?Sized>(theme: &T, categories: &[Category]) -> String {
    if categories.is_empty() {
        return theme.subhead("No categories to display");
    }

    let m = theme.markup();
    let items: String = categories
        .iter()
        .map(|c| m.li(&theme.category(c), ""))
        .collect();
    m.ul(&items, "categories")
}

/// Base [`Theme::category`].
pub fn category<T: Theme + ?Sized>(theme: &T, category: &Category) -> String {
    let m = theme.markup();
    let mut title = m.link_page(&category.page, "", "");
    let mut list = String::new();

    if let Some(posts) = category.posts.as_ref().filter(|p| p.total > 0) {
        title.push(' ');
        title.push_str(&theme.num_posts(posts.total));

        let mut items: String = posts
            .items
            .iter()
            .map(|p| m.li(&m.link_page(p, "", ""), ""))
            .collect();
        if posts.total > posts.items.len() {
            items.push_str(&m.li(&theme.link_more(&category.page.url, ""), ""));
        }
        list = m.ul(&items, "posts");
    }

    m.div(&(theme.subhead(&title) + &list), "category")
}

/// Base [`Theme::author_bio`].
pub fn author_bio<T: Theme + ?Sized>(
    theme: &T,
    profile: &AuthorProfile,
    ctx: &RenderContext,
) -> String {
    let m = theme.markup();
    let author = &profile.author;
    let mut out = String::new();

    if ctx.url_segment.as_deref() != Some(author.name.as_str()) {
        let url = format!("{}{}/", ctx.site.authors_url, author.name);
        out.push_str(&theme.subhead(&m.link(&url, author.display_name(), "")));
    }

    if let Some(photo) = &profile.photo {
        let (thumb_width, _) = theme.thumb_size();
        let thumb = photo.sized_to_width(thumb_width);
        out.push_str(&m.link(&photo.url, &m.image_of(&thumb, "author-photo"), "lightbox"));
    }

    out.push_str(&profile.body);
    m.div(&out, "author")
}

/// Base [`Theme::archives`].
///
/// Months without posts are skipped.
pub fn archives<T: Theme + ?Sized>(
    theme: &T,
    years: &[ArchiveYear],
    ctx: &RenderContext,
) -> String {
    if years.is_empty() {
        return theme.subhead("No archives to display");
    }

    let m = theme.markup();
    let base = &ctx.site.archives_url;
    let mut out = String::new();

    for year in years {
        let y = year.year;
        let months: String = year
            .months
            .iter()
            .filter(|month| month.count > 0)
            .map(|month| {
                let label = format!("{} {}", month.name, theme.num_posts(month.count));
                m.li(&m.link(&format!("{base}{y}/{}/", month.month), &label, ""), "")
            })
            .collect();

        let mut item = theme.subhead(&m.link(&format!("{base}{y}/"), &y.to_string(), ""));
        if !months.is_empty() {
            item.push_str(&m.ul(&months, "months"));
        }
        out.push_str(&m.li(&item, ""));
    }

    m.ul(&out, "archives")
}

/// Base [`Theme::breadcrumbs`].
pub fn breadcrumbs<T: Theme + ?Sized>(theme: &T, items: &[NavItem]) -> String {
    let m = theme.markup();
    let out: String = items
        .iter()
        .map(|item| m.li(&m.link_page(item, "", ""), ""))
        .collect();
    if out.is_empty() {
        out
    } else {
        m.ul(&out, "breadcrumbs")
    }
}

/// Base [`Theme::subnav`].
pub fn subnav<T: Theme + ?Sized>(theme: &T, items: &[NavItem], current: &str) -> String {
    let m = theme.markup();
    let out: String = items
        .iter()
        .map(|item| {
            let class = if item.url == current { "on" } else { "" };
            m.li(&m.link_page(item, "", class), class)
        })
        .collect();
    if out.is_empty() {
        out
    } else {
        m.ul(&out, "subnav links")
    }
}

/// Base [`Theme::link_more`].
pub fn link_more<T: Theme + ?Sized>(theme: &T, url: &str, text: &str) -> String {
    let text = if text.is_empty() { "View More" } else { text };
    theme.markup().link(url, text, "more") + " "
}

/// Base [`Theme::link_rss`].
pub fn link_rss<T: Theme + ?Sized>(theme: &T, url: &str, text: &str) -> String {
    let text = if text.is_empty() { "RSS" } else { text };
    theme.markup().link(url, text, "rss")
}

/// Base [`Theme::num_posts`].
pub fn num_posts<T: Theme + ?Sized>(theme: &T, n: usize) -> String {
    theme
        .markup()
        .span(&text::count_label(n, "post", "posts"), "num-posts")
}

/// Base [`Theme::page_num`].
pub fn page_num<T: Theme + ?Sized>(theme: &T, n: usize) -> String {
    theme.markup().span(&format!("Page {n}"), "page-num")
}

/// Base [`Theme::pagination`].
pub fn pagination<T: Theme + ?Sized>(theme: &T, info: PageInfo, ctx: &RenderContext) -> String {
    pager::render_pager(theme.markup(), info, &ctx.page.url, &PagerOptions::default())
}

/// Base [`Theme::headline`].
pub fn headline<T: Theme + ?Sized>(theme: &T, text: &str) -> String {
    theme.markup().wrap(text, "h1", "")
}

/// Base [`Theme::subhead`].
pub fn subhead<T: Theme + ?Sized>(theme: &T, text: &str) -> String {
    theme.markup().wrap(text, "h2", "")
}

/// Base [`Theme::widgets`].
pub fn widgets<T: Theme + ?Sized>(theme: &T, rendered: &[String]) -> String {
    let m = theme.markup();
    rendered.iter().map(|w| m.div(w, "widget")).collect()
}

/// Base [`Theme::admin_widget`].
///
/// Only superusers and viewers with the `author` role get the widget.
pub fn admin_widget<T: Theme + ?Sized>(
    theme: &T,
    posts_parent: &PageRef,
    ctx: &RenderContext,
) -> String {
    let viewer = &ctx.viewer;
    if !viewer.superuser && !viewer.has_role("author") {
        return String::new();
    }

    let m = theme.markup();
    let admin = &ctx.site.admin_url;
    let item = |url: &str, text: &str, class: &str| m.li(&m.link(url, text, class), "");

    let mut links = String::new();
    if ctx.editable {
        links.push_str(&item(
            &format!("{admin}page/edit/?id={}", ctx.page.id),
            "Edit this page",
            "edit-page",
        ));
    }
    links.push_str(&item(
        &format!("{admin}page/add/?parent_id={}", posts_parent.id),
        "Create new blog post",
        "create-post",
    ));
    links.push_str(&item(&format!("{admin}profile/"), "Edit your profile", "edit-profile"));
    links.push_str(&item(&format!("{admin}login/logout/"), "Logout", "logout"));

    let out = theme.subhead(viewer.display_name()) + &m.ul(&links, "links");
    m.div(&out, "admin widget")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{ArchiveMonth, Author};
    use crate::context::Viewer;

    fn home_ctx() -> RenderContext {
        RenderContext::new(PageRef::new(1, "/", "Home"))
    }

    fn post_ctx() -> RenderContext {
        RenderContext::new(PageRef::new(1001, "/posts/hello/", "Hello").with_template("post"))
    }

    fn sample_post() -> Post {
        Post {
            page: PageRef::new(1001, "/posts/hello/", "Hello").with_template("post"),
            date: "June 1, 2012".to_owned(),
            author: Author {
                name: "ryan".to_owned(),
                title: "Ryan".to_owned(),
            },
            categories: vec![
                PageRef::new(2001, "/categories/news/", "News"),
                PageRef::new(2002, "/categories/tips/", "Tips"),
            ],
            body: "<p>Body text</p>".to_owned(),
            summary: String::new(),
            images: vec![sample_image()],
            comment_count: 2,
        }
    }

    fn sample_image() -> Image {
        Image {
            url: "/files/1/lake.jpg".to_owned(),
            width: 800,
            height: 600,
            description: "Lake".to_owned(),
        }
    }

    fn sample_comment(id: u64, status: CommentStatus) -> Comment {
        Comment {
            id,
            cite: "Ann".to_owned(),
            text: format!("Comment {id}"),
            created: "May 2".to_owned(),
            status,
            page: None,
        }
    }

    #[test]
    fn test_full_post() {
        let theme = BlogTheme::new();
        let out = theme.post(&sample_post(), false, &home_ctx());
        assert_eq!(
            out,
            "<div class='blog-post'>\
             <div class='blog-post-head'><h1><a href='/posts/hello/'>Hello</a></h1> \
             <p class='blog-post-byline'>Posted by <a href='/authors/ryan/'>Ryan</a> on \
             <span class='date'>June 1, 2012</span> in \
             <a href='/categories/news/'>News</a> / <a href='/categories/tips/'>Tips</a></p></div>\
             <div class='blog-post-body'><p>Body text</p></div>\
             <div class='blog-post-foot'>\
             <a href='/posts/hello/#comments' class='num-comments'>2 Comments</a></div>\
             </div>"
        );
    }

    #[test]
    fn test_post_head_current_page_not_linked() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.categories.clear();
        let out = theme.post_head(&post, false, &post_ctx());
        assert_eq!(
            out,
            "<h1>Hello</h1> <p class='blog-post-byline'>Posted by \
             <a href='/authors/ryan/'>Ryan</a> on <span class='date'>June 1, 2012</span></p>"
        );
    }

    #[test]
    fn test_post_head_small_uses_subhead() {
        let theme = BlogTheme::new();
        let out = theme.post_head(&sample_post(), true, &home_ctx());
        assert!(out.starts_with("<h2><a href='/posts/hello/'>Hello</a></h2> "));
    }

    #[test]
    fn test_post_foot_singular() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.comment_count = 1;
        assert_eq!(
            theme.post_foot(&post, false, &home_ctx()),
            "<a href='/posts/hello/#comments' class='num-comments'>1 Comment</a>"
        );
    }

    #[test]
    fn test_post_body_generated_summary() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.body = format!("<p>{}</p>", "word ".repeat(200));
        let out = theme.post_body(&post, true, &home_ctx());

        assert!(out.starts_with("<p class='blog-post-summary'>word word"));
        assert!(out.contains("word&hellip; <a href='/posts/hello/' class='more'>View More</a> </p>"));
        assert!(!out.contains("<p>word"));
    }

    #[test]
    fn test_post_body_explicit_summary_wins() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.summary = "Hand written.".to_owned();
        assert_eq!(
            theme.post_body(&post, true, &home_ctx()),
            "<p class='blog-post-summary'>Hand written. \
             <a href='/posts/hello/' class='more'>View More</a> </p>"
        );
    }

    #[test]
    fn test_post_body_gallery_placeholder_full_view() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.body = "<p>Intro</p><p>Images</p><p>Outro</p>".to_owned();
        let out = theme.post_body(&post, false, &home_ctx());

        assert!(out.starts_with("<p>Intro</p><ul class='gallery clearfix'>"));
        assert!(out.ends_with("</ul><p>Outro</p>"));
    }

    #[test]
    fn test_post_body_gallery_placeholder_summary_view() {
        let theme = BlogTheme::new();
        let mut post = sample_post();
        post.body = "<p>Intro</p><p>images</p>".to_owned();
        let out = theme.post_body(&post, true, &home_ctx());

        assert!(out.starts_with("<p class='blog-post-summary'>Intro "));
        assert!(!out.contains("images"));
        assert!(!out.contains("gallery"));
    }

    #[test]
    fn test_posts_empty_shows_placeholder() {
        let theme = BlogTheme::new();
        let out = theme.posts(&Paginated::default(), false, &home_ctx());
        assert_eq!(out, "<div class='blog-posts'><h2>No posts to display</h2></div>");
        assert!(!out.contains("blog-post'"));
    }

    #[test]
    fn test_posts_small_class() {
        let theme = BlogTheme::new();
        let out = theme.posts(&Paginated::all(vec![sample_post()]), true, &home_ctx());
        assert!(out.starts_with("<div class='blog-posts blog-posts-small'><div class='blog-post'>"));
        assert!(!out.contains("MarkupPagerNav"));
    }

    #[test]
    fn test_posts_appends_pagination() {
        let theme = BlogTheme::new();
        let posts = Paginated::page(vec![sample_post()], 0, 1, 3);
        let out = theme.posts(&posts, false, &home_ctx());
        assert!(out.contains("</div><ul class='MarkupPagerNav'>"));
        assert!(out.contains("<a href='/page2'><span>2</span></a>"));
    }

    #[test]
    fn test_gallery_empty() {
        let theme = BlogTheme::new();
        assert_eq!(theme.gallery(&[]), "");
    }

    #[test]
    fn test_gallery() {
        let theme = BlogTheme::new();
        assert_eq!(
            theme.gallery(&[sample_image()]),
            "<ul class='gallery clearfix'><li>\
             <a href='/files/1/lake.jpg' rel='gallery' class='lightbox' title='Lake'>\
             <img src='/files/1/lake.100x100.jpg' width='100' height='100' alt='Lake' />\
             </a></li></ul>"
        );
    }

    #[test]
    fn test_comment() {
        let theme = BlogTheme::new();
        let comment = Comment {
            id: 5,
            cite: "  Ann <b> ".to_owned(),
            text: "Hi\n\nThere\nyou".to_owned(),
            created: "May 2".to_owned(),
            status: CommentStatus::Approved,
            page: None,
        };
        assert_eq!(
            theme.comment(&comment, &home_ctx()),
            "<blockquote><p class='blog-comment-head CommentHeader'>Comment by Ann &lt;b&gt; on \
             <span class='date'>May 2</span></p>\
             <div class='blog-comment-body CommentText'><p>Hi</p><p>There<br />you</p></div>\
             </blockquote>"
        );
    }

    #[test]
    fn test_comment_reply_on_other_page() {
        let theme = BlogTheme::new();
        let mut comment = sample_comment(5, CommentStatus::Approved);
        comment.page = Some(PageRef::new(1001, "/posts/hello/", "Hello"));

        let out = theme.comment(&comment, &home_ctx());
        assert!(out.contains(
            "<a href='/posts/hello/#comment5'>Ann replied to Hello <span class='date'>May 2</span></a>"
        ));

        let out = theme.comment(&comment, &post_ctx());
        assert!(out.contains("Comment by Ann on"));
    }

    #[test]
    fn test_comment_status_markers() {
        let theme = BlogTheme::new();
        let pending = theme.comment(&sample_comment(1, CommentStatus::Pending), &home_ctx());
        assert!(pending.contains(" <span class='blog-comment-status-pending'>PENDING</span></p>"));
        let spam = theme.comment(&sample_comment(2, CommentStatus::Spam), &home_ctx());
        assert!(spam.contains(" <span class='blog-comment-status-spam'>SPAM</span></p>"));
    }

    #[test]
    fn test_comments_hidden_from_guests() {
        let theme = BlogTheme::new();
        let comments = [
            sample_comment(1, CommentStatus::Approved),
            sample_comment(2, CommentStatus::Pending),
            sample_comment(3, CommentStatus::Spam),
        ];
        let out = theme.comments(&comments, 0, &post_ctx());

        assert!(out.starts_with("<h2>1 Comment</h2><ul class='blog-comments CommentList'>"));
        assert!(out.contains("<li id='comment1' class='blog-comment CommentListItem'>"));
        assert!(!out.contains("comment2"));
        assert!(!out.contains("comment3"));
        assert!(!out.contains("PENDING"));
        assert!(!out.contains("SPAM"));
    }

    #[test]
    fn test_comments_visible_to_editors() {
        let theme = BlogTheme::new();
        let comments = [
            sample_comment(1, CommentStatus::Approved),
            sample_comment(2, CommentStatus::Pending),
            sample_comment(3, CommentStatus::Spam),
        ];
        let out = theme.comments(&comments, 0, &post_ctx().with_editable(true));

        assert!(out.starts_with("<h2>3 Comments</h2>"));
        assert!(out.contains("id='comment2'"));
        assert!(out.contains("id='comment3'"));
        assert!(out.contains("PENDING"));
        assert!(out.contains("SPAM"));
    }

    #[test]
    fn test_comments_only_unapproved_for_guest_is_empty() {
        let theme = BlogTheme::new();
        let comments = [sample_comment(2, CommentStatus::Pending)];
        assert_eq!(theme.comments(&comments, 0, &post_ctx()), "");
    }

    #[test]
    fn test_comments_no_headline_off_post() {
        let theme = BlogTheme::new();
        let comments = [sample_comment(1, CommentStatus::Approved)];
        let out = theme.comments(&comments, 0, &home_ctx());
        assert!(out.starts_with("<ul class='blog-comments CommentList'>"));
    }

    #[test]
    fn test_comments_limit_and_next_link() {
        let theme = BlogTheme::new();
        let comments: Vec<_> = (1..=3)
            .map(|id| sample_comment(id, CommentStatus::Approved))
            .collect();
        let out = theme.comments(&comments, 2, &post_ctx());

        assert!(out.contains("id='comment1'"));
        assert!(out.contains("id='comment2'"));
        assert!(!out.contains("id='comment3'"));
        assert!(out.ends_with(
            "<p class='comments-pagination'>\
             <a href='/posts/hello/page2' class='comments-pagination-next button'>Next</a> </p>"
        ));
    }

    #[test]
    fn test_comments_pagination_back_links() {
        let theme = BlogTheme::new();
        assert_eq!(
            theme.comments_pagination(1, 2, &post_ctx().with_page_num(2)),
            "<p class='comments-pagination'>\
             <a href='/posts/hello/' class='comments-pagination-back button'>Back</a> </p>"
        );
        let out = theme.comments_pagination(3, 2, &post_ctx().with_page_num(3));
        assert!(out.contains("<a href='/posts/hello/page2' class='comments-pagination-back button'>Back</a> "));
        assert!(out.contains("<a href='/posts/hello/page4' class='comments-pagination-next button'>Next</a> "));
    }

    #[test]
    fn test_comments_pagination_not_needed() {
        let theme = BlogTheme::new();
        assert_eq!(theme.comments_pagination(2, 2, &post_ctx()), "");
        assert_eq!(theme.comments_pagination(5, 0, &post_ctx()), "");
    }

    #[test]
    fn test_link_next_prev_missing_neighbour() {
        let theme = BlogTheme::new();
        let next = PageRef::new(3, "/posts/b/", "B");
        assert_eq!(
            theme.link_next_prev(Some(&next), None),
            "<ul class='link-next-prev'><li class='link-prev'></li>\
             <li class='link-next'><a href='/posts/b/'>B &raquo;</a></li></ul>"
        );
    }

    #[test]
    fn test_categories_empty() {
        let theme = BlogTheme::new();
        assert_eq!(theme.categories(&[]), "<h2>No categories to display</h2>");
    }

    #[test]
    fn test_category_with_posts() {
        let theme = BlogTheme::new();
        let category = Category {
            page: PageRef::new(2001, "/categories/news/", "News"),
            posts: Some(Paginated::page(
                vec![
                    PageRef::new(11, "/posts/a/", "A"),
                    PageRef::new(12, "/posts/b/", "B"),
                ],
                0,
                2,
                5,
            )),
        };
        assert_eq!(
            theme.categories(&[category]),
            "<ul class='categories'><li><div class='category'>\
             <h2><a href='/categories/news/'>News</a> <span class='num-posts'>5 posts</span></h2>\
             <ul class='posts'><li><a href='/posts/a/'>A</a></li><li><a href='/posts/b/'>B</a></li>\
             <li><a href='/categories/news/' class='more'>View More</a> </li></ul>\
             </div></li></ul>"
        );
    }

    #[test]
    fn test_category_without_posts() {
        let theme = BlogTheme::new();
        let category = Category {
            page: PageRef::new(2001, "/categories/news/", "News"),
            posts: None,
        };
        assert_eq!(
            theme.category(&category),
            "<div class='category'><h2><a href='/categories/news/'>News</a></h2></div>"
        );
    }

    fn sample_profile() -> AuthorProfile {
        AuthorProfile {
            author: Author {
                name: "ryan".to_owned(),
                title: "Ryan".to_owned(),
            },
            photo: Some(Image {
                url: "/files/ryan.jpg".to_owned(),
                width: 400,
                height: 300,
                description: String::new(),
            }),
            body: "<p>Bio</p>".to_owned(),
        }
    }

    #[test]
    fn test_author_bio() {
        let theme = BlogTheme::new();
        assert_eq!(
            theme.author_bio(&sample_profile(), &home_ctx()),
            "<div class='author clearfix'><h2><a href='/authors/ryan/'>Ryan</a></h2>\
             <a href='/files/ryan.jpg' class='lightbox'>\
             <img class='author-photo' src='/files/ryan.100x75.jpg' width='100' height='75' alt='' />\
             </a><p>Bio</p></div>"
        );
    }

    #[test]
    fn test_author_bio_on_author_page_skips_heading() {
        let theme = BlogTheme::new();
        let ctx = home_ctx().with_url_segment("ryan");
        let out = theme.author_bio(&sample_profile(), &ctx);
        assert!(out.starts_with("<div class='author clearfix'><a href='/files/ryan.jpg'"));
    }

    #[test]
    fn test_archives() {
        let theme = BlogTheme::new();
        let years = [ArchiveYear {
            year: 2012,
            months: vec![
                ArchiveMonth {
                    month: 1,
                    name: "January".to_owned(),
                    count: 2,
                },
                ArchiveMonth {
                    month: 2,
                    name: "February".to_owned(),
                    count: 0,
                },
                ArchiveMonth {
                    month: 3,
                    name: "March".to_owned(),
                    count: 1,
                },
            ],
        }];
        assert_eq!(
            theme.archives(&years, &home_ctx()),
            "<ul class='archives'><li><h2><a href='/archives/2012/'>2012</a></h2>\
             <ul class='months'>\
             <li><a href='/archives/2012/1/'>January <span class='num-posts'>2 posts</span></a></li>\
             <li><a href='/archives/2012/3/'>March <span class='num-posts'>1 post</span></a></li>\
             </ul></li></ul>"
        );
    }

    #[test]
    fn test_archives_empty() {
        let theme = BlogTheme::new();
        assert_eq!(theme.archives(&[], &home_ctx()), "<h2>No archives to display</h2>");
    }

    #[test]
    fn test_breadcrumbs() {
        let theme = BlogTheme::new();
        let items = [NavItem::new("/", "Home"), NavItem::new("/posts/", "Posts")];
        assert_eq!(
            theme.breadcrumbs(&items),
            "<ul class='breadcrumbs'><li><a href='/'>Home</a></li>\
             <li><a href='/posts/'>Posts</a></li></ul>"
        );
        assert_eq!(theme.breadcrumbs(&[]), "");
    }

    #[test]
    fn test_subnav_marks_current() {
        let mut theme = BlogTheme::new();
        theme.markup_mut().set_class("on", "active");
        let items = [NavItem::new("/a/", "A"), NavItem::new("/b/", "B")];
        assert_eq!(
            theme.subnav(&items, "/b/"),
            "<ul class='subnav links'><li><a href='/a/'>A</a></li>\
             <li class='active'><a href='/b/' class='active'>B</a></li></ul>"
        );
    }

    #[test]
    fn test_small_helpers() {
        let theme = BlogTheme::new();
        assert_eq!(
            theme.link_more("/x/", ""),
            "<a href='/x/' class='more'>View More</a> "
        );
        assert_eq!(
            theme.link_rss("/rss/", ""),
            "<a href='/rss/' class='rss'>RSS</a>"
        );
        assert_eq!(theme.num_posts(1), "<span class='num-posts'>1 post</span>");
        assert_eq!(theme.page_num(3), "<span class='page-num'>Page 3</span>");
        assert_eq!(theme.headline("T"), "<h1>T</h1>");
        assert_eq!(theme.subhead("T"), "<h2>T</h2>");
    }

    #[test]
    fn test_widgets() {
        let theme = BlogTheme::new();
        let rendered = ["<p>a</p>".to_owned(), "<p>b</p>".to_owned()];
        assert_eq!(
            theme.widgets(&rendered),
            "<div class='widget'><p>a</p></div><div class='widget'><p>b</p></div>"
        );
    }

    #[test]
    fn test_admin_widget_hidden_for_guests() {
        let theme = BlogTheme::new();
        let posts = PageRef::new(1000, "/posts/", "Posts");
        assert_eq!(theme.admin_widget(&posts, &home_ctx()), "");
    }

    #[test]
    fn test_admin_widget_for_author() {
        let theme = BlogTheme::new();
        let posts = PageRef::new(1000, "/posts/", "Posts");
        let viewer = Viewer {
            name: "ann".to_owned(),
            title: "Ann".to_owned(),
            roles: vec!["author".to_owned()],
            superuser: false,
        };
        let ctx = post_ctx().with_viewer(viewer).with_editable(true);
        assert_eq!(
            theme.admin_widget(&posts, &ctx),
            "<div class='admin widget'><h2>Ann</h2><ul class='links'>\
             <li><a href='/processwire/page/edit/?id=1001' class='edit-page'>Edit this page</a></li>\
             <li><a href='/processwire/page/add/?parent_id=1000' class='create-post'>Create new blog post</a></li>\
             <li><a href='/processwire/profile/' class='edit-profile'>Edit your profile</a></li>\
             <li><a href='/processwire/login/logout/' class='logout'>Logout</a></li>\
             </ul></div>"
        );
    }

    #[test]
    fn test_configured_substitutions_layer_over_defaults() {
        let mut config = ThemeConfig::default();
        config
            .class_substitutions
            .insert("gallery".to_owned(), "photos".to_owned());
        config.thumb_width = 60;
        config.thumb_height = 40;
        let theme = BlogTheme::from_config(&config);

        assert_eq!(theme.markup().resolve_class("gallery"), "photos");
        assert_eq!(theme.markup().resolve_class("author"), "author clearfix");
        assert_eq!(theme.thumb_size(), (60, 40));
        assert!(theme.gallery(&[sample_image()]).contains("lake.60x40.jpg"));
    }
}
