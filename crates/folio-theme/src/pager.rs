//! Numbered pagination links.
//!
//! [`render_pager`] produces a `ul` of previous / numbered / next links for a
//! [`PageInfo`]. Every class it emits comes from [`PagerOptions`] and passes
//! through the theme's class substitutions, so themes restyle the pager by
//! changing options rather than logic.

use folio_markup::Markup;

use crate::content::PageInfo;

/// Classes and labels used by [`render_pager`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerOptions {
    /// Class token for the `ul`.
    pub list_class: String,
    /// Class of the item for the current page.
    pub current_item_class: String,
    /// Class of the `&hellip;` item between non-adjacent page numbers.
    pub separator_item_class: String,
    /// Class of the "previous" item.
    pub previous_item_class: String,
    /// Class of the "next" item.
    pub next_item_class: String,
    /// Text of the "previous" link.
    pub previous_label: String,
    /// Text of the "next" link.
    pub next_label: String,
    /// How many numbered links to show around the current page.
    pub num_page_links: usize,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            list_class: "pagination".to_owned(),
            current_item_class: "MarkupPagerNavOn".to_owned(),
            separator_item_class: "MarkupPagerNavSeparator".to_owned(),
            previous_item_class: "MarkupPagerNavPrevious".to_owned(),
            next_item_class: "MarkupPagerNavNext".to_owned(),
            previous_label: "&lsaquo; Prev".to_owned(),
            next_label: "Next &rsaquo;".to_owned(),
            num_page_links: 10,
        }
    }
}

/// URL of page `n` of a listing at `base_url`.
///
/// Page 1 is the listing itself; later pages append `page{n}`.
pub fn page_url(base_url: &str, n: usize) -> String {
    if n <= 1 {
        base_url.to_owned()
    } else {
        format!("{base_url}page{n}")
    }
}

/// Render pagination for `info`, or an empty string for a single page.
pub fn render_pager(
    markup: &Markup,
    info: PageInfo,
    base_url: &str,
    options: &PagerOptions,
) -> String {
    let total = info.page_count();
    if total <= 1 {
        return String::new();
    }
    let current = info.current_page().clamp(1, total);
    let (first, last) = page_window(current, total, options.num_page_links.max(1));

    let item = |n: usize, label: &str, class: &str| {
        let link = markup.link(&page_url(base_url, n), &format!("<span>{label}</span>"), "");
        markup.li(&link, class)
    };
    let separator = || markup.li("&hellip;", options.separator_item_class.as_str());

    let mut out = String::new();

    if current > 1 {
        out.push_str(&item(
            current - 1,
            &options.previous_label,
            &options.previous_item_class,
        ));
    }

    if first > 1 {
        out.push_str(&item(1, "1", ""));
        if first > 2 {
            out.push_str(&separator());
        }
    }

    for n in first..=last {
        let class = if n == current {
            options.current_item_class.as_str()
        } else {
            ""
        };
        out.push_str(&item(n, &n.to_string(), class));
    }

    if last < total {
        if last + 1 < total {
            out.push_str(&separator());
        }
        out.push_str(&item(total, &total.to_string(), ""));
    }

    if current < total {
        out.push_str(&item(
            current + 1,
            &options.next_label,
            &options.next_item_class,
        ));
    }

    markup.ul(&out, options.list_class.as_str())
}

/// First and last page numbers of the visible window around `current`.
fn page_window(current: usize, total: usize, size: usize) -> (usize, usize) {
    if total <= size {
        return (1, total);
    }
    let first = current.saturating_sub(size / 2).max(1);
    let last = (first + size - 1).min(total);
    let first = last + 1 - size;
    (first, last)
}
