//! TLE command handler for single catalog lookups.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;

use satlookup_cli::output::{render_tle, report, Theme, API_ERROR};
use satlookup_lib::{lookup_tle, split_label, ElementSource, Error, SpaceTrackClient, SpaceTrackConfig};

/// Split operator input into a display name and a catalog identifier.
///
/// Accepts a bare identifier (`25544`) or a select label
/// (`ISS (ZARYA) (25544)`). An explicit `name` wins over the label's name.
pub fn resolve_target(input: &str, name: Option<&str>) -> (String, String) {
    let input = input.trim();
    let (label_name, id) = split_label(input).unwrap_or(("", input));

    let name = match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ if !label_name.is_empty() => label_name.to_string(),
        _ => format!("NORAD {}", id),
    };
    (name, id.to_string())
}

/// Look up one element set and render it, reporting failures locally.
///
/// Returns whether a record was shown.
pub fn show_tle<S, W>(
    source: &S,
    name: &str,
    catalog_id: &str,
    out: &mut W,
    theme: &Theme,
) -> io::Result<bool>
where
    S: ElementSource + ?Sized,
    W: Write + ?Sized,
{
    match lookup_tle(source, name, catalog_id) {
        Ok(record) => {
            render_tle(out, &record, catalog_id.trim(), &theme.palette, &theme.boxes)?;
            Ok(true)
        }
        Err(err) => {
            warn!(catalog_id, error = %err, "TLE lookup failed");
            let message = match err {
                Error::InvalidCatalogId { .. } => err.to_string(),
                _ => API_ERROR.to_string(),
            };
            report(out, &theme.palette, &message)?;
            Ok(false)
        }
    }
}

/// Handle the tle subcommand.
pub fn handle_tle(target: &str, name: Option<&str>, theme: &Theme) -> Result<()> {
    let config = SpaceTrackConfig::from_env().context("space-track credentials are required")?;
    let client = SpaceTrackClient::new(config).context("failed to build the space-track client")?;

    let (name, catalog_id) = resolve_target(target, name);
    let mut stdout = io::stdout();
    if !show_tle(&client, &name, &catalog_id, &mut stdout, theme)? {
        bail!("TLE lookup for catalog id '{}' failed", catalog_id);
    }
    Ok(())
}
