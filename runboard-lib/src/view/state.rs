use log::debug;

use crate::model::SortColumn;
use crate::query::{PageNav, PageSize, SortDescriptor};

/// State driving the derivation stages.
///
/// Passed by value: every transition returns a new state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub search: String,
    /// 1-based.
    pub page: usize,
    pub page_size: PageSize,
    pub sort: SortDescriptor,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: PageSize::default(),
            sort: SortDescriptor::new(),
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search text edited.
    SetSearch(String),
    /// Column header activated.
    SortBy(SortColumn),
    /// Pagination control activated.
    Navigate(PageNav),
    /// Page-size selector changed.
    SetPageSize(PageSize),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action`. `total_pages` is the page count of the current
    /// filtered set and only matters for navigation.
    ///
    /// Editing the search or changing the page size returns to page 1.
    /// Sorting keeps the current page.
    pub fn apply(self, action: Action, total_pages: usize) -> Self {
        match action {
            Action::SetSearch(search) => {
                debug!("Search set to {:?}", search);
                Self {
                    search,
                    page: 1,
                    ..self
                }
            }
            Action::SortBy(column) => {
                let sort = self.sort.toggle(column);
                debug!("Sorting by {} {:?}", column.key(), sort.direction);
                Self { sort, ..self }
            }
            Action::Navigate(nav) => {
                let page = nav.resolve(self.page, total_pages);
                debug!("Page {:?}: {} -> {} of {}", nav, self.page, page, total_pages);
                Self { page, ..self }
            }
            Action::SetPageSize(page_size) => {
                debug!("Page size set to {}", page_size);
                Self {
                    page_size,
                    page: 1,
                    ..self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.search, "");
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, PageSize::Ten);
        assert_eq!(state.sort, SortDescriptor::new());
        assert_eq!(state.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_search_resets_page() {
        let state = ViewState {
            page: 3,
            ..ViewState::new()
        };
        let state = state.apply(Action::SetSearch("acu".into()), 5);
        assert_eq!(state.search, "acu");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_resets_page() {
        let state = ViewState {
            page: 4,
            ..ViewState::new()
        };
        let state = state.apply(Action::SetPageSize(PageSize::Fifty), 5);
        assert_eq!(state.page_size, PageSize::Fifty);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_keeps_page() {
        let state = ViewState {
            page: 2,
            ..ViewState::new()
        };
        let state = state.apply(Action::SortBy(SortColumn::Auc), 3);
        assert_eq!(state.page, 2);
        assert_eq!(state.sort.column, Some(SortColumn::Auc));
    }

    #[test]
    fn test_sort_twice_toggles_direction() {
        let state = ViewState::new()
            .apply(Action::SortBy(SortColumn::Accuracy), 1)
            .apply(Action::SortBy(SortColumn::Accuracy), 1);
        assert_eq!(state.sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_navigation_clamps() {
        let state = ViewState::new().apply(Action::Navigate(PageNav::Previous), 3);
        assert_eq!(state.page, 1);

        let state = state.apply(Action::Navigate(PageNav::Goto(10)), 3);
        assert_eq!(state.page, 3);

        let state = state.apply(Action::Navigate(PageNav::Next), 3);
        assert_eq!(state.page, 3);

        let state = state.apply(Action::Navigate(PageNav::First), 3);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_is_stored_verbatim() {
        let state = ViewState::new().apply(Action::SetSearch("  ACU, ".into()), 1);
        assert_eq!(state.search, "  ACU, ");
    }
}
