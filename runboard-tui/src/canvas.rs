//! Off-screen cell grid the renderer draws into.

use crossterm::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
    /// Right half of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
            wide_continuation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Writes `text` at `(x, y)`, clipped to the right edge.
    ///
    /// Returns the column after the last written character.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        self.print_clipped(x, y, text, style, self.width.saturating_sub(x))
    }

    /// Writes at most `max_width` columns of `text` at `(x, y)`.
    pub fn print_clipped(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        if y >= self.height {
            return x;
        }
        let limit = x.saturating_add(max_width).min(self.width);
        let mut cx = x;

        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > limit {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        ch: ' ',
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }

        cx
    }

    /// Repeats `ch` across `width` columns.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, ch: char, style: Style) {
        let end = x.saturating_add(width).min(self.width);
        for cx in x..end {
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    style,
                    wide_continuation: false,
                },
            );
        }
    }

    /// Plain text of row `y`.
    pub fn line(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.ch)
            .collect()
    }

    /// Cells that differ from `other`, which must have the same size.
    pub fn diff<'a>(&'a self, other: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }
}
