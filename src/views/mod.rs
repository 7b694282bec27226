//! Browser-side list views, rendered to HTML strings.
//!
//! A view starts out loading, fetches its endpoint once when mounted, and
//! renders whatever records that single fetch produced.

mod fetch;
mod home;
mod list;
mod render;

pub use fetch::{ContentFetcher, HttpFetcher, RouterFetcher};
pub use home::Home;
pub use list::{ListView, PageList, PostList, ViewState};
pub use render::{INVALID_DATE, escape_html, format_display_date};
