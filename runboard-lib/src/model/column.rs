//! Sortable columns and the values they order by.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A sortable table column, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    RunId,
    ProviderSid,
    ModelName,
    StartDate,
    EndDate,
    Accuracy,
    Precision,
    Recall,
    F1Score,
    Auc,
}

impl SortColumn {
    /// Every column, left to right.
    pub const ALL: [SortColumn; 10] = [
        SortColumn::RunId,
        SortColumn::ProviderSid,
        SortColumn::ModelName,
        SortColumn::StartDate,
        SortColumn::EndDate,
        SortColumn::Accuracy,
        SortColumn::Precision,
        SortColumn::Recall,
        SortColumn::F1Score,
        SortColumn::Auc,
    ];

    /// Stable key, matching the row's serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::RunId => "runId",
            Self::ProviderSid => "providerSid",
            Self::ModelName => "modelName",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Accuracy => "accuracy",
            Self::Precision => "precision",
            Self::Recall => "recall",
            Self::F1Score => "f1Score",
            Self::Auc => "auc",
        }
    }

    /// Header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::RunId => "Run ID",
            Self::ProviderSid => "Provider SID",
            Self::ModelName => "Model Name",
            Self::StartDate => "Start Date",
            Self::EndDate => "End Date",
            Self::Accuracy => "Accuracy (%)",
            Self::Precision => "Precision (%)",
            Self::Recall => "Recall (%)",
            Self::F1Score => "F1 Score (%)",
            Self::Auc => "AUC (%)",
        }
    }

    /// Whether the column holds one of the metric percentages.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Accuracy | Self::Precision | Self::Recall | Self::F1Score | Self::Auc
        )
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.key() == s)
            .ok_or_else(|| Error::UnknownColumn(s.to_string()))
    }
}

/// A borrowed cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl SortValue<'_> {
    /// Native ordering: lexicographic for text, numeric for metrics.
    ///
    /// A column never mixes the two kinds; text orders before numbers so the
    /// comparison stays total.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for SortValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for column in SortColumn::ALL {
            assert_eq!(column.key().parse::<SortColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "id".parse::<SortColumn>().unwrap_err();
        assert!(matches!(err, Error::UnknownColumn(ref key) if key == "id"));
    }

    #[test]
    fn test_serde_uses_row_field_names() {
        assert_eq!(
            serde_json::to_string(&SortColumn::F1Score).unwrap(),
            "\"f1Score\""
        );
        let column: SortColumn = serde_json::from_str("\"providerSid\"").unwrap();
        assert_eq!(column, SortColumn::ProviderSid);
    }

    #[test]
    fn test_numeric_columns() {
        let numeric: Vec<_> = SortColumn::ALL
            .into_iter()
            .filter(|c| c.is_numeric())
            .collect();
        assert_eq!(numeric.len(), 5);
        assert!(!SortColumn::StartDate.is_numeric());
    }

    #[test]
    fn test_text_compares_lexicographically() {
        // Dates are display strings, so "02/..." sorts before "11/..."
        // regardless of year.
        let a = SortValue::Text("02/01/2025");
        let b = SortValue::Text("11/01/2024");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(
            SortValue::Number(9.5).compare(&SortValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Number(100.0).compare(&SortValue::Number(100.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_number_display_drops_trailing_zero() {
        assert_eq!(SortValue::Number(100.0).to_string(), "100");
        assert_eq!(SortValue::Number(83.87).to_string(), "83.87");
    }
}
