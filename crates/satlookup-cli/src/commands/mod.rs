// Handlers for the CLI subcommands.
//
// main.rs parses arguments and dispatches here; each module owns one command.

pub mod browse;
pub mod lookup;
pub mod menu;
