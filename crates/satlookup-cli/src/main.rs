mod commands;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use satlookup_cli::output::Theme;

use commands::browse::handle_browse;
use commands::lookup::handle_tle;
use commands::menu::handle_menu;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse the Space-Track satellite catalog and fetch two-line element sets"
)]
struct Cli {
    /// Disable ANSI colors regardless of terminal detection.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default when no subcommand is given).
    Menu,
    /// Page through the catalog and show the TLE of the chosen object.
    Browse,
    /// Print the most recent TLE for one catalog object.
    Tle {
        /// NORAD catalog id, or a label such as "ISS (ZARYA) (25544)".
        target: String,
        /// Name printed above the element lines.
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut theme = Theme::detect();
    if cli.no_color {
        theme = theme.without_color();
    }

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => handle_menu(&theme),
        Command::Browse => handle_browse(&theme),
        Command::Tle { target, name } => handle_tle(&target, name.as_deref(), &theme),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
