//! Output formatting for the interactive display.
//!
//! Renderers write to any `io::Write` and take a resolved [`ColorPalette`]
//! and [`BoxStyle`] so they behave the same in tests and on a terminal.

use std::io::{self, Write};

use satlookup_lib::TleRecord;

use crate::terminal::{Capabilities, ColorPalette};

/// Visible width of a boxed card, borders included.
pub const CARD_WIDTH: usize = 63;

/// Error line shown when a Space-Track request fails.
pub const API_ERROR: &str = "ERROR: API REQUEST TO SPACE TRACK";
/// Error line shown when the select widget fails.
pub const PROMPT_FAILED: &str = "PROMPT FAILED";
/// Error line shown for rejected integer input.
pub const INVALID_INPUT: &str = "INVALID INPUT";

/// Border characters for boxed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BoxStyle {
    pub const UNICODE: BoxStyle = BoxStyle {
        vertical: '║',
        horizontal: '═',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
    };

    pub const ASCII: BoxStyle = BoxStyle {
        vertical: '|',
        horizontal: '-',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };

    pub fn for_caps(caps: Capabilities) -> Self {
        if caps.unicode {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }

    fn border(&self, left: char, right: char) -> String {
        let mut line = String::with_capacity(CARD_WIDTH * 3);
        line.push(left);
        line.extend(std::iter::repeat(self.horizontal).take(CARD_WIDTH - 2));
        line.push(right);
        line
    }

    pub fn top(&self) -> String {
        self.border(self.top_left, self.top_right)
    }

    pub fn bottom(&self) -> String {
        self.border(self.bottom_left, self.bottom_right)
    }

    /// One `intro: input` row padded to [`CARD_WIDTH`].
    ///
    /// Values longer than the card push the right border out instead of
    /// being truncated.
    pub fn row(&self, intro: &str, input: &str) -> String {
        let used = 6 + intro.chars().count() + input.chars().count();
        let padding = CARD_WIDTH.saturating_sub(used);
        format!(
            "{v} {intro}: {input}{pad} {v}",
            v = self.vertical,
            pad = " ".repeat(padding)
        )
    }
}

/// Resolved colors and border characters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: ColorPalette,
    pub boxes: BoxStyle,
}

impl Theme {
    pub fn detect() -> Self {
        let caps = Capabilities::detect();
        Self {
            palette: ColorPalette::for_caps(caps),
            boxes: BoxStyle::for_caps(caps),
        }
    }

    pub fn plain() -> Self {
        Self {
            palette: ColorPalette::plain(),
            boxes: BoxStyle::ASCII,
        }
    }

    pub fn without_color(mut self) -> Self {
        self.palette = ColorPalette::plain();
        self
    }
}

/// `║ intro: input ║` row using Unicode borders.
pub fn box_row(intro: &str, input: &str) -> String {
    BoxStyle::UNICODE.row(intro, input)
}

/// Print the CLI banner.
pub fn print_logo<W: Write + ?Sized>(out: &mut W, palette: &ColorPalette, style: &BoxStyle) -> io::Result<()> {
    let ColorPalette {
        cyan, orange, reset, ..
    } = *palette;
    writeln!(out, "{cyan}{}{reset}", style.top())?;
    writeln!(out, "{cyan}{}{reset}", banner_row(style, orange, reset, "S A T L O O K U P"))?;
    writeln!(
        out,
        "{cyan}{}{reset}",
        banner_row(style, orange, reset, ">> SPACE-TRACK CATALOG & TLE TERMINAL")
    )?;
    writeln!(out, "{cyan}{}{reset}", style.bottom())
}

fn banner_row(style: &BoxStyle, color: &str, reset: &str, text: &str) -> String {
    let inner = CARD_WIDTH - 4;
    format!(
        "{v} {color}{text:<inner$}{reset} {v}",
        v = style.vertical,
        inner = inner
    )
}

/// Print the main menu choices.
pub fn print_menu<W: Write + ?Sized>(out: &mut W, palette: &ColorPalette) -> io::Result<()> {
    let ColorPalette {
        cyan, gray, reset, ..
    } = *palette;
    writeln!(out)?;
    writeln!(out, " {cyan}[1]{reset} Browse satellite catalog")?;
    writeln!(out, " {cyan}[2]{reset} Look up TLE by catalog ID")?;
    writeln!(out, " {gray}[0] Exit{reset}")
}

/// Render a TLE record: summary card, then name and both lines verbatim.
pub fn render_tle<W: Write + ?Sized>(
    out: &mut W,
    record: &TleRecord,
    catalog_id: &str,
    palette: &ColorPalette,
    style: &BoxStyle,
) -> io::Result<()> {
    let ColorPalette {
        cyan,
        green,
        white_bold,
        reset,
        ..
    } = *palette;

    writeln!(out)?;
    writeln!(out, "{cyan}{}{reset}", style.top())?;
    writeln!(out, "{cyan}{}{reset}", style.row("Satellite", &record.name))?;
    writeln!(out, "{cyan}{}{reset}", style.row("Catalog ID", catalog_id))?;
    writeln!(out, "{cyan}{}{reset}", style.bottom())?;
    writeln!(out, "{white_bold}{}{reset}", record.name)?;
    writeln!(out, "{green}{}{reset}", record.line_one)?;
    writeln!(out, "{green}{}{reset}", record.line_two)
}

/// Print a red `[!]` report line.
pub fn report<W: Write + ?Sized>(out: &mut W, palette: &ColorPalette, message: &str) -> io::Result<()> {
    writeln!(out, "{}  [!] {}{}", palette.red, message, palette.reset)
}

/// Print a secondary (gray) notice.
pub fn notice<W: Write + ?Sized>(out: &mut W, palette: &ColorPalette, message: &str) -> io::Result<()> {
    writeln!(out, "{}  {}{}", palette.gray, message, palette.reset)
}
