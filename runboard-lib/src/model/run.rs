use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::view::{ActionTrigger, RowAction};

use super::column::{SortColumn, SortValue};

/// One model evaluation run, as shown in a table row.
///
/// Rows are treated as an already validated, immutable list. Uniqueness of
/// `id` is assumed but not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRun {
    pub id: String,
    pub run_id: String,
    pub provider_sid: String,
    pub model_name: String,
    /// Display string (`MM/DD/YYYY`), never parsed.
    pub start_date: String,
    /// Display string (`MM/DD/YYYY`), never parsed.
    pub end_date: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub auc: f64,
}

impl ModelRun {
    /// The cell value for `column`.
    pub fn value(&self, column: SortColumn) -> SortValue<'_> {
        match column {
            SortColumn::RunId => SortValue::Text(&self.run_id),
            SortColumn::ProviderSid => SortValue::Text(&self.provider_sid),
            SortColumn::ModelName => SortValue::Text(&self.model_name),
            SortColumn::StartDate => SortValue::Text(&self.start_date),
            SortColumn::EndDate => SortValue::Text(&self.end_date),
            SortColumn::Accuracy => SortValue::Number(self.accuracy),
            SortColumn::Precision => SortValue::Number(self.precision),
            SortColumn::Recall => SortValue::Number(self.recall),
            SortColumn::F1Score => SortValue::Number(self.f1_score),
            SortColumn::Auc => SortValue::Number(self.auc),
        }
    }

    /// Fields the search box matches against.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.run_id, &self.provider_sid, &self.model_name]
    }

    /// The trigger this row exposes for `action`.
    pub fn trigger(&self, action: RowAction) -> ActionTrigger {
        ActionTrigger {
            action,
            row_id: self.id.clone(),
        }
    }
}

/// Reads a JSON array of runs.
pub fn load_runs(reader: impl Read) -> Result<Vec<ModelRun>> {
    let runs: Vec<ModelRun> = serde_json::from_reader(reader)?;
    log::debug!("Loaded {} model runs", runs.len());
    Ok(runs)
}

/// Reads a JSON array of runs from a file.
pub fn load_runs_from_path(path: impl AsRef<Path>) -> Result<Vec<ModelRun>> {
    let path = path.as_ref();
    log::info!("Loading model runs from {}", path.display());
    let file = File::open(path)?;
    load_runs(BufReader::new(file))
}
