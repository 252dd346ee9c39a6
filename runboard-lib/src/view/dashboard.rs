use log::trace;

use crate::model::ModelRun;
use crate::query::{SearchQuery, SortDescriptor, total_pages};

use super::actions::{RowAction, RowActionHandler};
use super::state::{Action, ViewState};
use super::table::TableView;

/// Filtered and sorted row order for one `(search, sort)` pair.
#[derive(Debug, Clone)]
struct CachedOrder {
    search: String,
    sort: SortDescriptor,
    indices: Vec<usize>,
}

impl CachedOrder {
    fn is_for(&self, state: &ViewState) -> bool {
        self.search == state.search && self.sort == state.sort
    }
}

/// Owns the row set and the view state.
///
/// Paging through the same search and sort reuses the cached order; only
/// the page slice is recomputed.
#[derive(Debug, Clone)]
pub struct Dashboard {
    runs: Vec<ModelRun>,
    state: ViewState,
    order: Option<CachedOrder>,
}

impl Dashboard {
    pub fn new(runs: Vec<ModelRun>) -> Self {
        Self {
            runs,
            state: ViewState::new(),
            order: None,
        }
    }

    pub fn runs(&self) -> &[ModelRun] {
        &self.runs
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies a user action to the view state.
    pub fn dispatch(&mut self, action: Action) {
        let total_pages = self.total_pages();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action, total_pages);
    }

    /// Rows left after filtering.
    pub fn matched(&mut self) -> usize {
        self.ordered_indices().len()
    }

    pub fn total_pages(&mut self) -> usize {
        let size = self.state.page_size.get();
        total_pages(self.matched(), size)
    }

    /// The current page.
    pub fn view(&mut self) -> TableView<'_> {
        self.ordered_indices();
        let runs = &self.runs;
        let sorted: Vec<&ModelRun> = self
            .order
            .iter()
            .flat_map(|order| order.indices.iter().map(|&index| &runs[index]))
            .collect();
        TableView::from_sorted(&sorted, &self.state)
    }

    /// Sends `action` for the row with `row_id` to `handler`.
    ///
    /// Returns false, without calling the handler, when no such row exists.
    pub fn trigger<H>(&self, row_id: &str, action: RowAction, handler: &mut H) -> bool
    where
        H: RowActionHandler + ?Sized,
    {
        match self.runs.iter().find(|run| run.id == row_id) {
            Some(run) => {
                handler.handle(&run.trigger(action));
                true
            }
            None => false,
        }
    }

    fn ordered_indices(&mut self) -> &[usize] {
        let stale = !self
            .order
            .as_ref()
            .is_some_and(|order| order.is_for(&self.state));

        if stale {
            let query = SearchQuery::parse(&self.state.search);
            let sort = self.state.sort;
            let runs = &self.runs;

            let mut indices: Vec<usize> = (0..runs.len())
                .filter(|&index| query.matches(&runs[index]))
                .collect();
            if sort.column.is_some() {
                indices.sort_by(|&a, &b| sort.compare(&runs[a], &runs[b]));
            }
            trace!(
                "Rebuilt row order: {} of {} rows match",
                indices.len(),
                runs.len()
            );

            self.order = Some(CachedOrder {
                search: self.state.search.clone(),
                sort,
                indices,
            });
        }

        self.order
            .as_ref()
            .map(|order| order.indices.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SortColumn, sample_runs};
    use crate::query::{PageNav, PageSize};
    use crate::view::{ActionTrigger, derive};

    fn many_runs(count: usize) -> Vec<ModelRun> {
        let template = sample_runs().remove(0);
        (0..count)
            .map(|i| ModelRun {
                id: i.to_string(),
                run_id: format!("run{:03}", i),
                accuracy: (i * 7 % 100) as f64,
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_dispatch_navigation_uses_filtered_page_count() {
        let mut dashboard = Dashboard::new(many_runs(23));
        dashboard.dispatch(Action::Navigate(PageNav::Last));
        assert_eq!(dashboard.state().page, 3);

        let view = dashboard.view();
        assert_eq!(view.rows.len(), 3);
        assert!(!view.controls.next);
    }

    #[test]
    fn test_search_narrows_and_resets_page() {
        let mut dashboard = Dashboard::new(many_runs(23));
        dashboard.dispatch(Action::Navigate(PageNav::Next));
        assert_eq!(dashboard.state().page, 2);

        dashboard.dispatch(Action::SetSearch("run01".into()));
        assert_eq!(dashboard.state().page, 1);
        assert_eq!(dashboard.matched(), 10);
        assert_eq!(dashboard.total_pages(), 1);
    }

    #[test]
    fn test_page_size_change() {
        let mut dashboard = Dashboard::new(many_runs(23));
        dashboard.dispatch(Action::SetPageSize(PageSize::Five));
        assert_eq!(dashboard.total_pages(), 5);
        dashboard.dispatch(Action::Navigate(PageNav::Goto(4)));
        dashboard.dispatch(Action::SetPageSize(PageSize::TwentyFive));
        assert_eq!(dashboard.state().page, 1);
        assert_eq!(dashboard.view().rows.len(), 23);
    }

    #[test]
    fn test_cached_view_matches_direct_derivation() {
        let runs = many_runs(40);
        let mut dashboard = Dashboard::new(runs.clone());
        let actions = [
            Action::SortBy(SortColumn::Accuracy),
            Action::Navigate(PageNav::Next),
            Action::SortBy(SortColumn::Accuracy),
            Action::SetSearch("run00, run03".into()),
            Action::Navigate(PageNav::Last),
            Action::SetPageSize(PageSize::Five),
            Action::Navigate(PageNav::Goto(3)),
        ];

        for action in actions {
            dashboard.dispatch(action);
            let state = dashboard.state().clone();
            let expected = derive(&runs, &state);
            assert_eq!(dashboard.view(), expected, "diverged at {:?}", state);
        }
    }

    #[test]
    fn test_trigger_reaches_handler() {
        let dashboard = Dashboard::new(sample_runs());
        let mut seen: Vec<ActionTrigger> = Vec::new();
        let mut handler = |trigger: &ActionTrigger| seen.push(trigger.clone());

        assert!(dashboard.trigger("2", RowAction::Results, &mut handler));
        assert!(!dashboard.trigger("missing", RowAction::Results, &mut handler));

        assert_eq!(
            seen,
            [ActionTrigger {
                action: RowAction::Results,
                row_id: "2".into(),
            }]
        );
    }
}
