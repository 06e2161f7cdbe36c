//! Per-request render context.
//!
//! Renderers never look up the current page, viewer or site settings from
//! global state; everything request-specific travels in a [`RenderContext`].

use folio_config::SiteConfig;
use serde::Deserialize;

use crate::content::PageRef;

/// The user viewing the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Viewer {
    /// Login name; empty for guests.
    pub name: String,
    /// Display name; may be empty.
    pub title: String,
    /// Role names held by the viewer.
    pub roles: Vec<String>,
    /// Whether the viewer is a superuser.
    pub superuser: bool,
}

impl Viewer {
    /// Whether the viewer holds the named role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

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

/// Request-scoped inputs shared by all renderers in one pass.
///
/// # Example
///
/// ```
/// use folio_theme::{PageRef, RenderContext};
///
/// let page = PageRef::new(1001, "/posts/hello/", "Hello").with_template("post");
/// let ctx = RenderContext::new(page).with_editable(true).with_page_num(2);
///
/// assert!(ctx.current_is_post());
/// assert_eq!(ctx.page_num, 2);
/// ```
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// The page being rendered.
    pub page: PageRef,
    /// Whether the viewer may edit the current page.
    pub editable: bool,
    /// The viewer.
    pub viewer: Viewer,
    /// Site URLs.
    pub site: SiteConfig,
    /// 1-based pagination number of the request.
    pub page_num: usize,
    /// First URL segment after the page path, if any.
    pub url_segment: Option<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(PageRef::default())
    }
}

impl RenderContext {
    /// Context for rendering `page` as a guest on page 1.
    #[must_use]
    pub fn new(page: PageRef) -> Self {
        Self {
            page,
            editable: false,
            viewer: Viewer::default(),
            site: SiteConfig::default(),
            page_num: 1,
            url_segment: None,
        }
    }

    /// Builder: set whether the current page is editable by the viewer.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Builder: set the viewer.
    #[must_use]
    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = viewer;
        self
    }

    /// Builder: set the site URLs.
    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Builder: set the pagination number (values below 1 become 1).
    #[must_use]
    pub fn with_page_num(mut self, page_num: usize) -> Self {
        self.page_num = page_num.max(1);
        self
    }

    /// Builder: set the first URL segment.
    #[must_use]
    pub fn with_url_segment(mut self, segment: impl Into<String>) -> Self {
        self.url_segment = Some(segment.into());
        self
    }

    /// Whether `page` is the page being rendered.
    #[must_use]
    pub fn is_current(&self, page: &PageRef) -> bool {
        if page.id != 0 && self.page.id != 0 {
            page.id == self.page.id
        } else {
            !page.url.is_empty() && page.url == self.page.url
        }
    }

    /// Whether the page being rendered is a blog post.
    #[must_use]
    pub fn current_is_post(&self) -> bool {
        self.page.template == "post"
    }
}
