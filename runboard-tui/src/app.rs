use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::{debug, info};
use runboard_lib::model::ModelRun;
use runboard_lib::view::{ActionTrigger, RowAction, RowActionHandler};
use runboard_lib::{Action, Dashboard, PageNav, PageSize, SortColumn};

use crate::canvas::Canvas;
use crate::render::{self, Chrome, Focus, Hit, HitMap, SizeStep};

/// The dashboard page plus the cursor and focus state around it.
pub struct App {
    dashboard: Dashboard,
    focus: Focus,
    /// Index into [`SortColumn::ALL`].
    header_cursor: usize,
    /// Row index on the current page.
    row_cursor: usize,
    status: Option<String>,
    hits: HitMap,
    exit: bool,
    handler: Box<dyn RowActionHandler>,
}

impl App {
    pub fn new(runs: Vec<ModelRun>, handler: Box<dyn RowActionHandler>) -> Self {
        Self {
            dashboard: Dashboard::new(runs),
            focus: Focus::Search,
            header_cursor: 0,
            row_cursor: 0,
            status: None,
            hits: HitMap::default(),
            exit: false,
            handler,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn draw(&mut self, canvas: &mut Canvas) {
        let search = self.dashboard.state().search.clone();
        let chrome = Chrome {
            search: &search,
            focus: self.focus,
            header_cursor: self.header_cursor,
            row_cursor: self.row_cursor,
            status: self.status.as_deref(),
        };
        let view = self.dashboard.view();
        self.hits = render::draw(&view, &chrome, canvas);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.handle_click(column, row),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if ctrl => self.exit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Table,
                    Focus::Table => Focus::Search,
                };
            }
            _ => match self.focus {
                Focus::Search => self.search_key(key),
                Focus::Table => self.table_key(key),
            },
        }
    }

    fn search_key(&mut self, key: KeyEvent) {
        let mut search = self.dashboard.state().search.clone();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => search.push(c),
            KeyCode::Backspace => {
                if search.pop().is_none() {
                    return;
                }
            }
            KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::Table;
                return;
            }
            _ => return,
        }
        self.dispatch(Action::SetSearch(search));
    }

    fn table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Left => self.header_cursor = self.header_cursor.saturating_sub(1),
            KeyCode::Right => {
                self.header_cursor = (self.header_cursor + 1).min(SortColumn::ALL.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char('s') => {
                self.dispatch(Action::SortBy(SortColumn::ALL[self.header_cursor]));
            }
            KeyCode::Up => self.row_cursor = self.row_cursor.saturating_sub(1),
            KeyCode::Down => {
                let last = self.page_len().saturating_sub(1);
                self.row_cursor = (self.row_cursor + 1).min(last);
            }
            KeyCode::Char('e') => self.trigger_at_cursor(RowAction::Evaluations),
            KeyCode::Char('r') => self.trigger_at_cursor(RowAction::Results),
            KeyCode::Home => self.dispatch(Action::Navigate(PageNav::First)),
            KeyCode::PageUp => self.dispatch(Action::Navigate(PageNav::Previous)),
            KeyCode::PageDown => self.dispatch(Action::Navigate(PageNav::Next)),
            KeyCode::End => self.dispatch(Action::Navigate(PageNav::Last)),
            KeyCode::Char('+') => self.step_page_size(SizeStep::Larger),
            KeyCode::Char('-') => self.step_page_size(SizeStep::Smaller),
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let Some(hit) = self.hits.at(x, y).cloned() else {
            return;
        };
        debug!("Click at ({}, {}): {:?}", x, y, hit);

        match hit {
            Hit::Search => self.focus = Focus::Search,
            Hit::Header(column) => {
                self.focus = Focus::Table;
                self.header_cursor = SortColumn::ALL
                    .iter()
                    .position(|&c| c == column)
                    .unwrap_or(0);
                self.dispatch(Action::SortBy(column));
            }
            Hit::Row(index) => {
                self.focus = Focus::Table;
                self.row_cursor = index;
            }
            Hit::Action(trigger) => self.fire(trigger),
            Hit::Nav(nav) => self.dispatch(Action::Navigate(nav)),
            Hit::PageSize(step) => self.step_page_size(step),
        }
    }

    fn step_page_size(&mut self, step: SizeStep) {
        let current = self.dashboard.state().page_size;
        let size: PageSize = match step {
            SizeStep::Larger => current.next(),
            SizeStep::Smaller => current.previous(),
        };
        if size != current {
            self.dispatch(Action::SetPageSize(size));
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.dashboard.dispatch(action);
        let last = self.page_len().saturating_sub(1);
        self.row_cursor = self.row_cursor.min(last);
    }

    fn page_len(&mut self) -> usize {
        self.dashboard.view().rows.len()
    }

    fn trigger_at_cursor(&mut self, action: RowAction) {
        if let Some(trigger) = self.dashboard.view().trigger(self.row_cursor, action) {
            self.fire(trigger);
        }
    }

    fn fire(&mut self, trigger: ActionTrigger) {
        let run_id = self
            .dashboard
            .runs()
            .iter()
            .find(|run| run.id == trigger.row_id)
            .map(|run| run.run_id.clone());

        let Some(run_id) = run_id else {
            return;
        };
        info!("{} requested for run {}", trigger.action, run_id);
        self.status = Some(format!("{} requested for run {}", trigger.action, run_id));
        self.dashboard
            .trigger(&trigger.row_id, trigger.action, self.handler.as_mut());
    }
}
