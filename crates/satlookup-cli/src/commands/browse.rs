//! Browse command handler: page through the catalog and show the chosen TLE.

use std::io::{self, Write};

use anyhow::{Context, Result};

use satlookup_cli::output::{notice, report, Theme, API_ERROR, PROMPT_FAILED};
use satlookup_cli::select::TerminalSelect;
use satlookup_lib::{
    BrowseOutcome, CatalogBrowser, CatalogSource, ChoicePrompt, ElementSource, SpaceTrackClient,
    SpaceTrackConfig,
};

use super::lookup::show_tle;

/// Run one browse session and, on selection, the detail lookup.
///
/// Aborted sessions are reported to the operator; only output failures are
/// returned as errors.
pub fn run_browse<S, P, W>(
    source: &S,
    prompt: &mut P,
    page_size: usize,
    out: &mut W,
    theme: &Theme,
) -> io::Result<()>
where
    S: CatalogSource + ElementSource + ?Sized,
    P: ChoicePrompt + ?Sized,
    W: Write + ?Sized,
{
    match CatalogBrowser::new(source, prompt, page_size).browse() {
        BrowseOutcome::Selected(entry) => {
            show_tle(source, &entry.name, &entry.catalog_id, out, theme)?;
        }
        BrowseOutcome::FetchFailed(_) => report(out, &theme.palette, API_ERROR)?,
        BrowseOutcome::PromptFailed(_) => report(out, &theme.palette, PROMPT_FAILED)?,
        BrowseOutcome::Exhausted => notice(out, &theme.palette, "No further catalog entries.")?,
    }
    Ok(())
}

/// Browse against the live service with the terminal select widget.
pub fn browse_live<W: Write + ?Sized>(
    client: &SpaceTrackClient,
    out: &mut W,
    theme: &Theme,
) -> io::Result<()> {
    let mut select = TerminalSelect::new(theme.palette);
    run_browse(client, &mut select, client.page_size(), out, theme)
}

/// Handle the browse subcommand.
pub fn handle_browse(theme: &Theme) -> Result<()> {
    let config = SpaceTrackConfig::from_env().context("space-track credentials are required")?;
    let client = SpaceTrackClient::new(config).context("failed to build the space-track client")?;

    browse_live(&client, &mut io::stdout(), theme).context("failed to write browse output")
}
