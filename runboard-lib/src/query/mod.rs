//! The three derivation stages: filter, sort, paginate.
//!
//! Each stage is a pure function over borrowed rows.

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::{SearchQuery, filter_runs};
pub use page::{PageControls, PageNav, PageSize, page_bounds, page_slice, total_pages};
pub use sort::{SortDescriptor, SortDirection, sort_runs};
