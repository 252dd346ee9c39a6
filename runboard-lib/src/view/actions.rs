//! Per-row action affordances.
//!
//! The dashboard only carries these triggers to the embedding application.
//! What "Evaluations" or "Results" does is up to the handler.

use std::fmt;

/// An action offered on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Evaluations,
    Results,
}

impl RowAction {
    /// In the order they appear in the Actions column.
    pub const ALL: [RowAction; 2] = [RowAction::Evaluations, RowAction::Results];

    pub fn label(self) -> &'static str {
        match self {
            Self::Evaluations => "Evaluations",
            Self::Results => "Results",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An activated row action, carrying the row's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionTrigger {
    pub action: RowAction,
    pub row_id: String,
}

/// Receives row action triggers.
pub trait RowActionHandler {
    fn handle(&mut self, trigger: &ActionTrigger);
}

impl<F> RowActionHandler for F
where
    F: FnMut(&ActionTrigger),
{
    fn handle(&mut self, trigger: &ActionTrigger) {
        self(trigger)
    }
}
