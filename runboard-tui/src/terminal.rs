use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::canvas::{Canvas, Style};

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Option<Canvas>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        stdout.flush()?;

        Ok(Self {
            stdout,
            previous: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Blocks until the next terminal event.
    pub fn read_event(&self) -> io::Result<Event> {
        event::read()
    }

    /// Writes the cells that changed since the last draw.
    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        let resized = self
            .previous
            .as_ref()
            .is_none_or(|prev| prev.width() != canvas.width() || prev.height() != canvas.height());
        if resized {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            self.previous = Some(Canvas::new(canvas.width(), canvas.height()));
        }

        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_style: Option<Style> = None;
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        if let Some(previous) = &self.previous {
            for (x, y, cell) in canvas.diff(previous) {
                if cell.wide_continuation {
                    continue;
                }

                if last_pos != Some((x, y)) {
                    queue!(self.stdout, cursor::MoveTo(x, y))?;
                }

                if last_style != Some(cell.style) {
                    apply_style(&mut self.stdout, cell.style)?;
                    last_style = Some(cell.style);
                }

                queue!(self.stdout, Print(cell.ch))?;
                let width = unicode_width::UnicodeWidthChar::width(cell.ch).unwrap_or(1).max(1);
                last_pos = Some((x + width as u16, y));
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        self.previous = Some(canvas.clone());
        Ok(())
    }
}

fn apply_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    queue!(out, SetForegroundColor(style.fg.unwrap_or(Color::Reset)))?;
    queue!(out, SetBackgroundColor(style.bg.unwrap_or(Color::Reset)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
