//! Row data model.

mod column;
mod run;
mod sample;

pub use column::{SortColumn, SortValue};
pub use run::{ModelRun, load_runs, load_runs_from_path};
pub use sample::sample_runs;
