//! Content nodes consumed by the renderers.
//!
//! These are plain values resolved by the content repository before a render
//! pass starts. Renderers only read them.

use folio_markup::{ImageLike, Linkable};
use serde::Deserialize;

/// A page in the content tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRef {
    /// Page id; `0` for pages that do not exist.
    pub id: u64,
    /// URL name (last path segment).
    pub name: String,
    /// Absolute URL, with trailing slash.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Template name, e.g. `post` or `category`.
    pub template: String,
}

impl PageRef {
    /// Create a page reference from its id, URL and title.
    #[must_use]
    pub fn new(id: u64, url: impl Into<String>, title: impl Into<String>) -> Self {
        let url = url.into();
        let name = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_owned();
        Self {
            id,
            name,
            url,
            title: title.into(),
            template: String::new(),
        }
    }

    /// Builder: set the template name.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }
}

impl Linkable for PageRef {
    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// The user who created a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Login name, used in author URLs.
    pub name: String,
    /// Display name; may be empty.
    pub title: String,
}

impl Author {
    /// Title if set, otherwise the login name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

/// An image file attached to a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Image {
    /// URL of the original file.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Description, used as alt text and link title.
    pub description: String,
}

impl Image {
    /// The resized variant of this image at exactly `width` x `height`.
    ///
    /// Variants follow the `name.WxH.ext` file naming convention, so
    /// `/files/1/photo.jpg` at 100x100 becomes `/files/1/photo.100x100.jpg`.
    #[must_use]
    pub fn sized(&self, width: u32, height: u32) -> Self {
        let (dir, file) = match self.url.rfind('/') {
            Some(pos) => self.url.split_at(pos + 1),
            None => ("", self.url.as_str()),
        };
        let file = match file.rfind('.') {
            Some(pos) if pos > 0 => format!("{}.{width}x{height}{}", &file[..pos], &file[pos..]),
            _ => format!("{file}.{width}x{height}"),
        };

        Self {
            url: format!("{dir}{file}"),
            width,
            height,
            description: self.description.clone(),
        }
    }

    /// The resized variant at `width`, keeping the aspect ratio.
    #[must_use]
    pub fn sized_to_width(&self, width: u32) -> Self {
        let height = if self.width == 0 {
            0
        } else {
            let scaled = u64::from(self.height) * u64::from(width) / u64::from(self.width);
            u32::try_from(scaled).unwrap_or(u32::MAX)
        };
        self.sized(width, height)
    }
}

impl ImageLike for Image {
    fn url(&self) -> &str {
        &self.url
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A blog post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Post {
    /// The page holding the post.
    pub page: PageRef,
    /// Publication date, already formatted for display.
    pub date: String,
    /// Creator of the post.
    pub author: Author,
    /// Categories the post is filed under.
    pub categories: Vec<PageRef>,
    /// Full body markup.
    pub body: String,
    /// Hand-written summary; empty when the summary should be generated.
    pub summary: String,
    /// Images available to the body's gallery placeholder.
    pub images: Vec<Image>,
    /// Number of comments on the post.
    pub comment_count: usize,
}

/// Moderation state of a comment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Flagged as spam.
    Spam,
    /// Awaiting moderation.
    Pending,
    /// Visible to everyone.
    #[default]
    Approved,
}

/// A reader comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Comment id, unique per site.
    pub id: u64,
    /// Name given by the commenter (raw text).
    pub cite: String,
    /// Comment body (raw text).
    pub text: String,
    /// Creation date, already formatted for display.
    pub created: String,
    /// Moderation state.
    pub status: CommentStatus,
    /// The page the comment was posted on, when known.
    pub page: Option<PageRef>,
}

/// Position of a page of results within a larger collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Index of the first item on this page.
    pub start: usize,
    /// Maximum items per page; `0` means unlimited.
    pub limit: usize,
    /// Total items across all pages.
    pub total: usize,
}

impl PageInfo {
    /// Whether the collection spans more than one page.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.limit > 0 && self.limit < self.total
    }

    /// Number of pages in the collection (at least 1).
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit).max(1)
        }
    }

    /// 1-based number of the current page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.start / self.limit + 1
        }
    }
}

/// One page of a larger collection, with the metadata needed for pagination.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Index of the first item on this page.
    pub start: usize,
    /// Maximum items per page; `0` means unlimited.
    pub limit: usize,
    /// Total items across all pages.
    pub total: usize,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            start: 0,
            limit: 0,
            total: 0,
        }
    }
}

impl<T> Paginated<T> {
    /// A complete, unpaginated collection.
    #[must_use]
    pub fn all(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            start: 0,
            limit: 0,
            total,
        }
    }

    /// One page out of `total` items.
    #[must_use]
    pub fn page(items: Vec<T>, start: usize, limit: usize, total: usize) -> Self {
        Self {
            items,
            start,
            limit,
            total,
        }
    }

    /// Pagination metadata for this page.
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo {
            start: self.start,
            limit: self.limit,
            total: self.total,
        }
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A category, optionally with a few of its posts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Category {
    /// The category page.
    pub page: PageRef,
    /// Leading posts of the category; `None` when posts are not listed.
    pub posts: Option<Paginated<PageRef>>,
}

/// An author page with biography.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorProfile {
    /// The author's user name and display title.
    pub author: Author,
    /// First profile photo, if any.
    pub photo: Option<Image>,
    /// Biography markup.
    pub body: String,
}

/// Post counts for one year of the archive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArchiveYear {
    /// Calendar year.
    pub year: i32,
    /// Months of the year, in display order.
    pub months: Vec<ArchiveMonth>,
}

/// Post count for one month of the archive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArchiveMonth {
    /// Month number, 1-12.
    pub month: u32,
    /// Month name for display.
    pub name: String,
    /// Number of posts published that month.
    pub count: usize,
}

/// A `url => title` navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Link target.
    pub url: String,
    /// Link text.
    pub title: String,
}

impl NavItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

impl From<&PageRef> for NavItem {
    fn from(page: &PageRef) -> Self {
        Self::new(page.url.clone(), page.title.clone())
    }
}

impl Linkable for NavItem {
    fn url(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }
}
