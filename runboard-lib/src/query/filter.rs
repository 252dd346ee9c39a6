//! Search box filtering.

use crate::model::ModelRun;

/// A parsed search box value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Blank input. Every row matches.
    All,
    /// Trimmed, lower-cased, non-empty terms.
    ///
    /// Empty when the input held nothing but separators, in which case no
    /// row matches.
    Terms(Vec<String>),
}

impl SearchQuery {
    /// Parses a comma separated list of terms.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::All;
        }

        let terms = text
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self::Terms(terms)
    }

    /// A row matches when any term is a substring of any searchable field.
    pub fn matches(&self, run: &ModelRun) -> bool {
        match self {
            Self::All => true,
            Self::Terms(terms) => {
                let fields = run.searchable_fields().map(|field| field.to_lowercase());
                terms
                    .iter()
                    .any(|term| fields.iter().any(|field| field.contains(term.as_str())))
            }
        }
    }
}

/// Keeps the rows matching `search`, in their original order.
pub fn filter_runs<'a>(rows: &'a [ModelRun], search: &str) -> Vec<&'a ModelRun> {
    let query = SearchQuery::parse(search);
    rows.iter().filter(|run| query.matches(run)).collect()
}
