use crate::model::ModelRun;
use crate::query::{
    PageControls, PageSize, SortDescriptor, filter_runs, page_slice, sort_runs, total_pages,
};

use super::actions::{ActionTrigger, RowAction};
use super::state::ViewState;

/// What a front-end renders for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a ModelRun>,
    /// Rows left after filtering.
    pub matched: usize,
    /// Current page as held by the state.
    pub page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    pub sort: SortDescriptor,
    pub controls: PageControls,
}

impl<'a> TableView<'a> {
    /// Builds the view from rows that are already filtered and sorted.
    pub(super) fn from_sorted(sorted: &[&'a ModelRun], state: &ViewState) -> Self {
        let size = state.page_size.get();
        let total_pages = total_pages(sorted.len(), size);
        Self {
            rows: page_slice(sorted, state.page, size).to_vec(),
            matched: sorted.len(),
            page: state.page,
            total_pages,
            page_size: state.page_size,
            sort: state.sort,
            controls: PageControls::new(state.page, total_pages),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trigger for `action` on the page row at `index`.
    pub fn trigger(&self, index: usize, action: RowAction) -> Option<ActionTrigger> {
        self.rows.get(index).map(|run| run.trigger(action))
    }
}

/// Runs the filter, sort and page stages for `state`.
pub fn derive<'a>(rows: &'a [ModelRun], state: &ViewState) -> TableView<'a> {
    let filtered = filter_runs(rows, &state.search);
    let sorted = sort_runs(filtered, &state.sort);
    TableView::from_sorted(&sorted, state)
}
