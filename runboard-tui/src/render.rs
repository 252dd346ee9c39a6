//! Draws the dashboard page and records clickable regions.

use crossterm::style::Color;
use runboard_lib::model::SortColumn;
use runboard_lib::query::{PageNav, PageSize, SortDirection};
use runboard_lib::view::{ActionTrigger, RowAction, TableView};

use crate::canvas::{Canvas, Style, text_width};

pub const TITLE: &str = "Acute Care Utilization Model Runs";
pub const SEARCH_LABEL: &str = "Search: ";
pub const SEARCH_PLACEHOLDER: &str = "Comma separated Run IDs, Providers, or Model Names";
const ACTIONS_HEADER: &str = "Actions";
const HELP: &str = "Tab focus · ←/→ column · Enter sort · ↑/↓ row · e/r actions · \
                    PgUp/PgDn/Home/End page · +/- rows · Esc quit";

const ACCENT: Color = Color::Rgb { r: 37, g: 99, b: 235 };
const MUTED: Color = Color::Rgb { r: 156, g: 163, b: 175 };
const HIGHLIGHT: Color = Color::Rgb { r: 40, g: 40, b: 70 };

const MARGIN: u16 = 2;
const COLUMN_GAP: u16 = 2;
const ACTION_GAP: u16 = 2;

/// Which part of the page receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Table,
}

/// Direction of a page-size selector click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStep {
    Smaller,
    Larger,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Search,
    Header(SortColumn),
    /// Row index on the current page.
    Row(usize),
    Action(ActionTrigger),
    Nav(PageNav),
    PageSize(SizeStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    x: u16,
    y: u16,
    width: u16,
}

impl Region {
    fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x.saturating_add(self.width)
    }
}

/// Clickable regions from the last draw.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Region, Hit)>,
}

impl HitMap {
    fn push(&mut self, x: u16, y: u16, width: u16, hit: Hit) {
        self.regions.push((Region { x, y, width }, hit));
    }

    /// The region under `(x, y)`. Regions pushed later sit on top.
    pub fn at(&self, x: u16, y: u16) -> Option<&Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(region, _)| region.contains(x, y))
            .map(|(_, hit)| hit)
    }
}

/// Page state that lives outside the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub search: &'a str,
    pub focus: Focus,
    pub header_cursor: usize,
    pub row_cursor: usize,
    pub status: Option<&'a str>,
}

pub fn draw(view: &TableView<'_>, chrome: &Chrome<'_>, canvas: &mut Canvas) -> HitMap {
    let mut hits = HitMap::default();
    let widths = column_widths(view);
    let table_width = table_width(&widths);
    let rule = Style::new().fg(MUTED);

    let mut y = 0;
    canvas.print(MARGIN, y, TITLE, Style::new().bold());
    y += 2;

    draw_search(chrome, canvas, &mut hits, y);
    y += 2;

    draw_header(view, chrome, &widths, canvas, &mut hits, y);
    y += 1;
    canvas.fill(MARGIN, y, table_width, '─', rule);
    y += 1;

    for (index, _) in view.rows.iter().enumerate() {
        draw_row(view, chrome, index, &widths, canvas, &mut hits, y);
        y += 1;
    }

    canvas.fill(MARGIN, y, table_width, '─', rule);
    y += 1;

    draw_pagination(view, canvas, &mut hits, y);
    y += 2;

    if let Some(status) = chrome.status {
        canvas.print(MARGIN, y, status, Style::new().fg(ACCENT));
    }

    let help_y = canvas.height().saturating_sub(1);
    if help_y > y {
        canvas.print(MARGIN, help_y, HELP, Style::new().dim());
    }

    hits
}

fn draw_search(chrome: &Chrome<'_>, canvas: &mut Canvas, hits: &mut HitMap, y: u16) {
    let focused = chrome.focus == Focus::Search;
    let x = canvas.print(MARGIN, y, SEARCH_LABEL, Style::new().bold());
    let field_width = canvas.width().saturating_sub(x + MARGIN);

    let field = if focused {
        Style::new().underline()
    } else {
        Style::new()
    };
    canvas.fill(x, y, field_width, ' ', field);
    hits.push(x, y, field_width, Hit::Search);

    if chrome.search.is_empty() {
        if focused {
            canvas.print_clipped(x, y, "▏", field.fg(ACCENT), 1);
        }
        canvas.print_clipped(x + 1, y, SEARCH_PLACEHOLDER, field.fg(MUTED), field_width.saturating_sub(1));
    } else {
        // Keep the end of the text, where typing happens, in view.
        let visible = tail_fit(chrome.search, field_width.saturating_sub(1));
        let end = canvas.print(x, y, visible, field);
        if focused {
            canvas.print_clipped(end, y, "▏", field.fg(ACCENT), 1);
        }
    }
}

fn draw_header(
    view: &TableView<'_>,
    chrome: &Chrome<'_>,
    widths: &[u16],
    canvas: &mut Canvas,
    hits: &mut HitMap,
    y: u16,
) {
    let mut x = MARGIN;
    for (index, (&column, &width)) in SortColumn::ALL.iter().zip(widths).enumerate() {
        let current = chrome.focus == Focus::Table && chrome.header_cursor == index;
        let label = if current {
            Style::new().bold().underline().fg(ACCENT)
        } else {
            Style::new().bold()
        };
        let (indicator, indicator_style) = match view.sort.direction_for(column) {
            None => ("▲", Style::new().fg(MUTED).dim()),
            Some(SortDirection::Ascending) => ("▲", Style::new()),
            Some(SortDirection::Descending) => ("▼", Style::new()),
        };

        let end = canvas.print_clipped(x, y, column.label(), label, width);
        canvas.print_clipped(end + 1, y, indicator, indicator_style, 1);
        hits.push(x, y, width, Hit::Header(column));
        x += width + COLUMN_GAP;
    }
    canvas.print(x, y, ACTIONS_HEADER, Style::new().bold());
}

fn draw_row(
    view: &TableView<'_>,
    chrome: &Chrome<'_>,
    index: usize,
    widths: &[u16],
    canvas: &mut Canvas,
    hits: &mut HitMap,
    y: u16,
) {
    let run = view.rows[index];
    let base = if chrome.focus == Focus::Table && chrome.row_cursor == index {
        Style::new().bg(HIGHLIGHT)
    } else {
        Style::new()
    };

    let row_width = table_width(widths);
    canvas.fill(MARGIN, y, row_width, ' ', base);
    hits.push(MARGIN, y, row_width, Hit::Row(index));

    let mut x = MARGIN;
    for (&column, &width) in SortColumn::ALL.iter().zip(widths) {
        canvas.print_clipped(x, y, &run.value(column).to_string(), base, width);
        x += width + COLUMN_GAP;
    }

    for action in RowAction::ALL {
        let label = action.label();
        let end = canvas.print(x, y, label, base.fg(ACCENT));
        hits.push(x, y, end - x, Hit::Action(run.trigger(action)));
        x = end + ACTION_GAP;
    }
}

fn draw_pagination(view: &TableView<'_>, canvas: &mut Canvas, hits: &mut HitMap, y: u16) {
    let controls = view.controls;
    let mut x = MARGIN;

    for (label, nav) in [("«", PageNav::First), ("‹", PageNav::Previous)] {
        x = nav_button(canvas, hits, x, y, label, nav, controls.is_enabled(nav));
    }

    let page = format!(" {} ", view.page);
    x = canvas.print(x, y, &page, Style::new().bold().fg(ACCENT)) + 1;

    for (label, nav) in [("›", PageNav::Next), ("»", PageNav::Last)] {
        x = nav_button(canvas, hits, x, y, label, nav, controls.is_enabled(nav));
    }

    x = canvas.print(x + 3, y, "Rows per page:", Style::new().fg(MUTED)) + 1;
    let size = view.page_size;
    x = size_button(canvas, hits, x, y, "‹", SizeStep::Smaller, size != PageSize::Five);
    x = canvas.print(x, y, &size.to_string(), Style::new().bold()) + 1;
    x = size_button(canvas, hits, x, y, "›", SizeStep::Larger, size != PageSize::Fifty);

    let summary = format!(
        "Page {} of {} · {} matching",
        view.page, view.total_pages, view.matched
    );
    canvas.print(x + 3, y, &summary, Style::new().fg(MUTED));
}

fn nav_button(
    canvas: &mut Canvas,
    hits: &mut HitMap,
    x: u16,
    y: u16,
    label: &str,
    nav: PageNav,
    enabled: bool,
) -> u16 {
    let style = if enabled {
        Style::new()
    } else {
        Style::new().fg(MUTED).dim()
    };
    let end = canvas.print(x, y, label, style);
    if enabled {
        hits.push(x, y, end - x, Hit::Nav(nav));
    }
    end + 2
}

fn size_button(
    canvas: &mut Canvas,
    hits: &mut HitMap,
    x: u16,
    y: u16,
    label: &str,
    step: SizeStep,
    enabled: bool,
) -> u16 {
    let style = if enabled {
        Style::new()
    } else {
        Style::new().fg(MUTED).dim()
    };
    let end = canvas.print(x, y, label, style);
    if enabled {
        hits.push(x, y, end - x, Hit::PageSize(step));
    }
    end + 1
}

/// Width of each column: header plus sort indicator, or the widest cell on
/// the page.
fn column_widths(view: &TableView<'_>) -> Vec<u16> {
    SortColumn::ALL
        .iter()
        .map(|&column| {
            let header = text_width(column.label()) + 2;
            view.rows
                .iter()
                .map(|run| text_width(&run.value(column).to_string()))
                .fold(header, u16::max)
        })
        .collect()
}

fn table_width(widths: &[u16]) -> u16 {
    let columns: u16 = widths.iter().map(|w| w + COLUMN_GAP).sum();
    let actions: u16 = RowAction::ALL
        .iter()
        .map(|a| text_width(a.label()))
        .sum::<u16>()
        + ACTION_GAP;
    columns + actions
}

/// Longest suffix of `text` that fits in `width` columns.
fn tail_fit(text: &str, width: u16) -> &str {
    if text_width(text) <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &text[start..]
}
