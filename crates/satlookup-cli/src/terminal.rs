//! Terminal styling and capability detection.
//!
//! Renderers never read the environment themselves; they take a resolved
//! [`ColorPalette`] so output can be asserted on without escape codes.

/// ANSI escape codes used by the display.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Error reports.
    pub const RED: &str = "\x1b[31m";
    /// Farewell line.
    pub const BLUE: &str = "\x1b[34m";
    /// Borders, menu keys and the select label.
    pub const CYAN: &str = "\x1b[36m";
    /// Element set lines.
    pub const GREEN: &str = "\x1b[32m";
    pub const GRAY: &str = "\x1b[90m";
    /// Object names and the select cursor row.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Banner title (256-color).
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Color codes for one run; every field is empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub gray: &'static str,
    pub white_bold: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            red: colors::RED,
            blue: colors::BLUE,
            cyan: colors::CYAN,
            green: colors::GREEN,
            gray: colors::GRAY,
            white_bold: colors::WHITE_BOLD,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            red: "",
            blue: "",
            cyan: "",
            green: "",
            gray: "",
            white_bold: "",
            orange: "",
        }
    }

    #[must_use]
    pub fn for_caps(caps: Capabilities) -> Self {
        if caps.color {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// What the attached terminal is assumed to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub color: bool,
    pub unicode: bool,
}

impl Capabilities {
    /// Read `NO_COLOR`, `TERM`, `LANG` and `LC_ALL` from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Derive capabilities from an environment lookup.
    ///
    /// Color is on unless `NO_COLOR` is set (https://no-color.org/) or
    /// `TERM=dumb`. Unicode needs a UTF locale in `LANG` or `LC_ALL`; Windows
    /// consoles are assumed to cope unless `TERM=dumb`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dumb = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let utf_locale = ["LANG", "LC_ALL"]
            .iter()
            .filter_map(|key| lookup(key))
            .any(|value| value.to_uppercase().contains("UTF"));

        Self {
            color: lookup("NO_COLOR").is_none() && !dumb,
            unicode: utf_locale || (cfg!(windows) && !dumb),
        }
    }
}

#[must_use]
pub fn supports_unicode() -> bool {
    Capabilities::detect().unicode
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(vars: &[(&str, &str)]) -> Capabilities {
        Capabilities::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn palettes_differ_only_by_codes() {
        let colored = ColorPalette::colored();
        assert_eq!(colored.red, "\x1b[31m");
        assert_eq!(colored.blue, "\x1b[34m");
        assert!(ColorPalette::plain().red.is_empty());
        assert!(ColorPalette::plain().reset.is_empty());
    }

    #[test]
    fn no_color_disables_palette() {
        let caps = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")]);
        assert!(!caps.color);
        assert_eq!(ColorPalette::for_caps(caps), ColorPalette::plain());
    }

    #[test]
    fn dumb_terminal_disables_color() {
        assert!(!caps(&[("TERM", "DUMB")]).color);
    }

    #[test]
    fn ordinary_terminal_gets_color() {
        let caps = caps(&[("TERM", "xterm-256color")]);
        assert!(caps.color);
        assert_eq!(ColorPalette::for_caps(caps), ColorPalette::colored());
    }

    #[test]
    fn utf_locale_enables_unicode() {
        assert!(caps(&[("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LANG", "C"), ("LC_ALL", "de_DE.utf8")]).unicode);
    }

    #[test]
    #[cfg(not(windows))]
    fn plain_locale_falls_back_to_ascii() {
        assert!(!caps(&[("LANG", "C")]).unicode);
        assert!(!caps(&[]).unicode);
    }
}
