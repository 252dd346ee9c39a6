mod app;
mod canvas;
mod error;
mod paths;
mod render;
mod settings;
mod terminal;

use std::fs::{self, File};

use log::{LevelFilter, error, info, warn};
use runboard_lib::model::{load_runs_from_path, sample_runs};
use runboard_lib::view::ActionTrigger;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::canvas::Canvas;
use crate::error::AppError;
use crate::settings::Settings;
use crate::terminal::Terminal;

fn main() {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(settings.log_level);
    if let Some(e) = settings_error {
        warn!("Using default settings: {}", e);
    }

    if let Err(e) = run(&settings) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Starts the file logger. Logging stays off if the log file can't be
/// created.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let runs = match &settings.runs_file {
        Some(path) => load_runs_from_path(path)?,
        None => sample_runs(),
    };
    info!("Starting with {} model runs", runs.len());

    let handler = |trigger: &ActionTrigger| {
        info!("Row action {} on row {}", trigger.action, trigger.row_id);
    };
    let mut app = App::new(runs, Box::new(handler));
    let mut terminal = Terminal::new()?;

    while !app.should_exit() {
        let (width, height) = terminal.size()?;
        let mut canvas = Canvas::new(width, height);
        app.draw(&mut canvas);
        terminal.draw(&canvas)?;

        app.handle_event(terminal.read_event()?);
    }

    info!("Exiting");
    Ok(())
}
