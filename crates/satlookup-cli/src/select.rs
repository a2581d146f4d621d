//! Scrolling select list on the terminal.
//!
//! Implements [`ChoicePrompt`] with crossterm in raw mode. Only a window of
//! rows is drawn; the list is erased again once a choice is made.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};

use satlookup_lib::{ChoicePrompt, Error, Result, SelectRequest};

use crate::terminal::{supports_unicode, ColorPalette};

/// Rows visible at once.
pub const DEFAULT_WINDOW: usize = 5;

/// Cursor and scroll position over a list of `len` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cursor: usize,
    pub top: usize,
    len: usize,
    size: usize,
}

impl Viewport {
    /// Start at `cursor`, scrolled so it is the first visible row when the list
    /// is long enough.
    pub fn new(len: usize, size: usize, cursor: usize) -> Self {
        let size = size.max(1);
        let cursor = cursor.min(len.saturating_sub(1));
        let top = cursor.min(len.saturating_sub(size));
        Self {
            cursor,
            top,
            len,
            size,
        }
    }

    pub fn up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.top {
                self.top = self.cursor;
            }
        }
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            if self.cursor >= self.top + self.size {
                self.top = self.cursor + 1 - self.size;
            }
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.top = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len.saturating_sub(1);
        self.top = self.len.saturating_sub(self.size);
    }

    pub fn visible(&self) -> Range<usize> {
        self.top..(self.top + self.size).min(self.len)
    }
}

/// Operator intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Home,
    End,
    Select,
    Interrupt,
}

pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Interrupt)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Down),
        KeyCode::Home => Some(KeyAction::Home),
        KeyCode::End => Some(KeyAction::End),
        KeyCode::Enter => Some(KeyAction::Select),
        KeyCode::Esc => Some(KeyAction::Interrupt),
        _ => None,
    }
}

/// Disables raw mode when dropped, including on early returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub struct TerminalSelect {
    window: usize,
    palette: ColorPalette,
    marker: &'static str,
}

impl TerminalSelect {
    pub fn new(palette: ColorPalette) -> Self {
        let marker = if supports_unicode() { "▸ " } else { "> " };
        Self {
            window: DEFAULT_WINDOW,
            palette,
            marker,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Draw label and visible rows over the previous frame of `previous` lines.
    fn draw<W: Write>(
        &self,
        out: &mut W,
        request: &SelectRequest<'_>,
        viewport: &Viewport,
        previous: u16,
    ) -> io::Result<u16> {
        let p = &self.palette;
        if previous > 0 {
            queue!(out, cursor::MoveUp(previous))?;
        }
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::FromCursorDown),
            Print(format!("{}? {}{}\r\n", p.cyan, request.label, p.reset))
        )?;

        let rows = viewport.visible();
        let drawn = rows.len() + 1;
        for index in rows {
            let item = &request.items[index];
            let line = if index == viewport.cursor {
                format!("{}{}{}{}", p.white_bold, self.marker, item, p.reset)
            } else {
                format!("  {}", item)
            };
            queue!(out, Print(line), Print("\r\n"))?;
        }
        out.flush()?;
        Ok(drawn as u16)
    }

    fn erase<W: Write>(out: &mut W, lines: u16) -> io::Result<()> {
        if lines > 0 {
            queue!(out, cursor::MoveUp(lines))?;
        }
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        out.flush()
    }

    /// Draw, react to events and erase the list again, whatever the outcome.
    fn run<W, E>(&self, out: &mut W, request: &SelectRequest<'_>, mut next_event: E) -> Result<usize>
    where
        W: Write,
        E: FnMut() -> io::Result<Event>,
    {
        let mut viewport = Viewport::new(request.items.len(), self.window, request.cursor);
        let mut drawn = 0;
        let chosen = self.event_loop(out, request, &mut viewport, &mut drawn, &mut next_event);

        let erased = Self::erase(out, drawn);
        let index = chosen?;
        erased?;
        Ok(index)
    }

    fn event_loop<W, E>(
        &self,
        out: &mut W,
        request: &SelectRequest<'_>,
        viewport: &mut Viewport,
        drawn: &mut u16,
        next_event: &mut E,
    ) -> Result<usize>
    where
        W: Write,
        E: FnMut() -> io::Result<Event>,
    {
        loop {
            *drawn = self.draw(out, request, viewport, *drawn)?;

            let Event::Key(key) = next_event()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key_action(&key) {
                Some(KeyAction::Up) => viewport.up(),
                Some(KeyAction::Down) => viewport.down(),
                Some(KeyAction::Home) => viewport.home(),
                Some(KeyAction::End) => viewport.end(),
                Some(KeyAction::Select) => return Ok(viewport.cursor),
                Some(KeyAction::Interrupt) => return Err(Error::PromptInterrupted),
                None => {}
            }
        }
    }
}

impl ChoicePrompt for TerminalSelect {
    fn present(&mut self, request: &SelectRequest<'_>) -> Result<usize> {
        if request.items.is_empty() {
            return Err(Error::InvalidSelection {
                index: 0,
                choices: 0,
            });
        }

        let _raw = RawModeGuard::enable()?;
        self.run(&mut io::stdout(), request, event::read)
    }
}
