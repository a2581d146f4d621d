//! Interactive main menu.
//!
//! The menu loops on the bounded prompt with `0` as the exit sentinel. Every
//! way out of the loop ends the process through [`escape_orbit`].

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use satlookup_cli::output::{print_logo, print_menu, report, Theme, INVALID_INPUT};
use satlookup_cli::prompt::BoundedPrompt;
use satlookup_cli::terminal::ColorPalette;
use satlookup_lib::{SpaceTrackClient, SpaceTrackConfig};

use super::browse::browse_live;
use super::lookup::{resolve_target, show_tle};

pub const MENU_EXIT: i64 = 0;
pub const MENU_BROWSE: i64 = 1;
pub const MENU_LOOKUP: i64 = 2;

/// Actions the menu dispatches to.
pub trait MenuBackend {
    fn browse(&mut self, out: &mut dyn Write) -> io::Result<()>;
    fn lookup(&mut self, target: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Backend talking to Space-Track. The client is built on first use so the
/// menu still starts when credentials are missing.
pub struct LiveBackend {
    theme: Theme,
    client: Option<SpaceTrackClient>,
}

impl LiveBackend {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            client: None,
        }
    }

    fn client(&mut self, out: &mut dyn Write) -> io::Result<Option<&SpaceTrackClient>> {
        if self.client.is_none() {
            let built = SpaceTrackConfig::from_env().and_then(SpaceTrackClient::new);
            match built {
                Ok(client) => self.client = Some(client),
                Err(err) => {
                    warn!(error = %err, "space-track client unavailable");
                    report(out, &self.theme.palette, &err.to_string())?;
                    return Ok(None);
                }
            }
        }
        Ok(self.client.as_ref())
    }
}

impl MenuBackend for LiveBackend {
    fn browse(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let theme = self.theme;
        match self.client(out)? {
            Some(client) => browse_live(client, out, &theme),
            None => Ok(()),
        }
    }

    fn lookup(&mut self, target: &str, out: &mut dyn Write) -> io::Result<()> {
        let theme = self.theme;
        let (name, catalog_id) = resolve_target(target, None);
        if let Some(client) = self.client(out)? {
            show_tle(client, &name, &catalog_id, out, &theme)?;
        }
        Ok(())
    }
}

/// Run the menu until the operator exits or input closes.
pub fn run_menu<R, W, B>(prompt: &mut BoundedPrompt<R, W>, backend: &mut B, theme: &Theme) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    B: MenuBackend + ?Sized,
{
    loop {
        print_menu(prompt.writer(), &theme.palette)?;
        let Some(choice) = prompt.prompt_int(MENU_EXIT, MENU_LOOKUP)? else {
            debug!(retries = prompt.retries(), "menu exit");
            return Ok(());
        };

        match choice {
            MENU_BROWSE => backend.browse(prompt.writer())?,
            MENU_LOOKUP => match prompt.prompt_text("CATALOG ID")? {
                None => return Ok(()),
                Some(target) if target.is_empty() => {
                    report(prompt.writer(), &theme.palette, INVALID_INPUT)?
                }
                Some(target) => backend.lookup(&target, prompt.writer())?,
            },
            _ => {}
        }
    }
}

/// Print the farewell line and terminate with status 1.
pub fn escape_orbit<W: Write + ?Sized>(out: &mut W, palette: &ColorPalette) -> ! {
    let _ = writeln!(out, "\n{} Escaping Orbit...{}", palette.blue, palette.reset);
    let _ = out.flush();
    std::process::exit(1)
}

/// Handle the menu subcommand (also the default).
pub fn handle_menu(theme: &Theme) -> Result<()> {
    let mut stdout = io::stdout();
    print_logo(&mut stdout, &theme.palette, &theme.boxes)?;

    let stdin = io::stdin();
    let mut prompt = BoundedPrompt::new(stdin.lock(), stdout, theme.palette);
    let mut backend = LiveBackend::new(*theme);
    if let Err(err) = run_menu(&mut prompt, &mut backend, theme) {
        warn!(error = %err, "menu terminated by I/O error");
    }

    escape_orbit(prompt.writer(), &theme.palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
    }

    impl MenuBackend for Recording {
        fn browse(&mut self, out: &mut dyn Write) -> io::Result<()> {
            self.calls.push("browse".to_string());
            writeln!(out, "browsed")
        }

        fn lookup(&mut self, target: &str, out: &mut dyn Write) -> io::Result<()> {
            self.calls.push(format!("lookup:{}", target));
            writeln!(out, "looked up {}", target)
        }
    }

    fn run(input: &str) -> (Vec<String>, String, usize) {
        let mut prompt = BoundedPrompt::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            ColorPalette::plain(),
        );
        let mut backend = Recording::default();
        run_menu(&mut prompt, &mut backend, &Theme::plain()).expect("menu runs");
        let retries = prompt.retries();
        let out = String::from_utf8(prompt.writer().clone()).expect("utf8");
        (backend.calls, out, retries)
    }

    #[test]
    fn zero_exits_immediately() {
        let (calls, out, _) = run("0\n1\n");
        assert!(calls.is_empty());
        assert!(out.contains("[1] Browse satellite catalog"));
    }

    #[test]
    fn dispatches_browse_and_lookup() {
        let (calls, out, _) = run("1\n2\nISS (ZARYA) (25544)\n0\n");
        assert_eq!(calls, ["browse", "lookup:ISS (ZARYA) (25544)"]);
        assert!(out.contains("browsed"));
        assert_eq!(out.matches("[0] Exit").count(), 3);
    }

    #[test]
    fn invalid_choices_are_retried() {
        let (calls, out, retries) = run("abc\n9\n-1\n1\n0\n");
        assert_eq!(calls, ["browse"]);
        assert_eq!(retries, 3);
        assert_eq!(out.matches("INVALID INPUT").count(), 3);
    }

    #[test]
    fn empty_catalog_id_is_rejected() {
        let (calls, out, _) = run("2\n   \n0\n");
        assert!(calls.is_empty());
        assert!(out.contains("CATALOG ID >"));
        assert_eq!(out.matches("INVALID INPUT").count(), 1);
    }

    #[test]
    fn closed_input_ends_menu() {
        let (calls, _, _) = run("2\n");
        assert!(calls.is_empty());
    }
}
