//! Attribute and tag builder with theme-level class substitution.
//!
//! This crate is the leaf of folio's markup stack:
//!
//! - [`AttributeSet`]: ordered attributes, parsed from a bare class string or
//!   a `key=value, key=value` selector string
//! - [`ClassSubstitutions`]: logical class token → literal class list
//! - [`Markup`]: serializes attributes and wraps content in tags, resolving
//!   every `class` attribute through its substitution registry
//!
//! Nothing here can fail: malformed attribute input is dropped rather than
//! reported, because a bad fragment must never abort a page.
//!
//! # Example
//!
//! ```
//! use folio_markup::Markup;
//!
//! let mut markup = Markup::new();
//! markup.set_class("date", "white label date");
//!
//! let date = markup.span("June 1, 2012", "date");
//! assert_eq!(date, "<span class='white label date'>June 1, 2012</span>");
//! ```

mod attrs;
mod builder;
mod classes;
mod escape;

pub use attrs::AttributeSet;
pub use builder::{ImageLike, Linkable, Markup};
pub use classes::ClassSubstitutions;
pub use escape::escape_html;
