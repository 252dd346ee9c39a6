//! View state, its transitions and the derived table view.

mod actions;
mod dashboard;
mod state;
mod table;

pub use actions::{ActionTrigger, RowAction, RowActionHandler};
pub use dashboard::Dashboard;
pub use state::{Action, ViewState};
pub use table::{TableView, derive};
