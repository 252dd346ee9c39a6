//! Column sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{ModelRun, SortColumn};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Selected column (if any) and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortDescriptor {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// No column selected, ascending.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Header activation.
    ///
    /// The selected column flips direction. Any other column becomes the
    /// selection, ascending.
    pub fn toggle(self, column: SortColumn) -> Self {
        match self.column {
            Some(current) if current == column => Self::by(column, self.direction.flipped()),
            _ => Self::by(column, SortDirection::Ascending),
        }
    }

    /// Direction shown on `column`'s header, if it is the sorted one.
    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        (self.column == Some(column)).then_some(self.direction)
    }

    /// Compares two rows. Always `Equal` when no column is selected.
    pub fn compare(&self, a: &ModelRun, b: &ModelRun) -> Ordering {
        match self.column {
            Some(column) => self
                .direction
                .apply(a.value(column).compare(&b.value(column))),
            None => Ordering::Equal,
        }
    }
}

/// Orders rows by `sort`.
///
/// The sort is stable: rows comparing equal keep their input order in both
/// directions. Without a selected column the input is returned untouched.
pub fn sort_runs<'a>(mut rows: Vec<&'a ModelRun>, sort: &SortDescriptor) -> Vec<&'a ModelRun> {
    if sort.column.is_some() {
        rows.sort_by(|a, b| sort.compare(a, b));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_runs;

    fn sorted_ids(rows: &[ModelRun], sort: SortDescriptor) -> Vec<String> {
        sort_runs(rows.iter().collect(), &sort)
            .into_iter()
            .map(|run| run.run_id.clone())
            .collect()
    }

    #[test]
    fn test_toggle_new_column_starts_ascending() {
        let sort = SortDescriptor::new().toggle(SortColumn::Accuracy);
        assert_eq!(sort, SortDescriptor::by(SortColumn::Accuracy, SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_same_column_flips() {
        let sort = SortDescriptor::new()
            .toggle(SortColumn::Accuracy)
            .toggle(SortColumn::Accuracy);
        assert_eq!(sort.direction, SortDirection::Descending);

        let sort = sort.toggle(SortColumn::Accuracy);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let sort = SortDescriptor::by(SortColumn::Accuracy, SortDirection::Descending)
            .toggle(SortColumn::Recall);
        assert_eq!(sort, SortDescriptor::by(SortColumn::Recall, SortDirection::Ascending));
    }

    #[test]
    fn test_direction_for() {
        let sort = SortDescriptor::by(SortColumn::Auc, SortDirection::Descending);
        assert_eq!(sort.direction_for(SortColumn::Auc), Some(SortDirection::Descending));
        assert_eq!(sort.direction_for(SortColumn::RunId), None);
    }

    #[test]
    fn test_no_column_keeps_input_order() {
        let rows = sample_runs();
        assert_eq!(
            sorted_ids(&rows, SortDescriptor::new()),
            ["7c030e5896303a24", "cf60269128195d44"]
        );
    }

    #[test]
    fn test_accuracy_ascending_and_descending() {
        let rows = sample_runs();
        assert_eq!(
            sorted_ids(&rows, SortDescriptor::by(SortColumn::Accuracy, SortDirection::Ascending)),
            ["cf60269128195d44", "7c030e5896303a24"]
        );
        assert_eq!(
            sorted_ids(&rows, SortDescriptor::by(SortColumn::Accuracy, SortDirection::Descending)),
            ["7c030e5896303a24", "cf60269128195d44"]
        );
    }

    #[test]
    fn test_start_date_sorts_as_text() {
        let rows = sample_runs();
        assert_eq!(
            sorted_ids(&rows, SortDescriptor::by(SortColumn::StartDate, SortDirection::Ascending)),
            ["7c030e5896303a24", "cf60269128195d44"]
        );
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        // Both sample rows have recall 100.
        let rows = sample_runs();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(
                sorted_ids(&rows, SortDescriptor::by(SortColumn::Recall, direction)),
                ["7c030e5896303a24", "cf60269128195d44"]
            );
        }
    }
}
