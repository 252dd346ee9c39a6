//! Core of the model runs dashboard.
//!
//! Rows flow through three pure stages, [`query::filter`] then
//! [`query::sort`] then [`query::page`], driven by a single
//! [`view::ViewState`]. Nothing here touches a terminal; front-ends render a
//! [`view::TableView`] and feed user input back as [`view::Action`]s.

pub mod error;
pub mod model;
pub mod query;
pub mod view;

pub use error::{Error, Result};
pub use model::{ModelRun, SortColumn};
pub use query::{PageNav, PageSize, SortDescriptor, SortDirection};
pub use view::{Action, Dashboard, TableView, ViewState};
