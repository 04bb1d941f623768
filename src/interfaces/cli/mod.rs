//! CLI interface module
//!
//! `list`, `get` and `set` against an opened build directory.

pub mod commands;

use std::io::Write;

use crate::cli::Commands;
use crate::errors::Result;
use crate::meson::MesonRunner;
use crate::runtime::Session;

use commands::{get_option, list_options, set_options};

/// Run a CLI command from clap-parsed input. Returns the exit code.
pub fn run_command<R: MesonRunner, W: Write>(
    session: &mut Session<R>,
    cmd: Commands,
    out: &mut W,
) -> Result<i32> {
    match cmd {
        Commands::List { section, json } => {
            list_options(&session.store, section, json, out)?;
            Ok(0)
        }
        Commands::Get { name, json } => {
            get_option(&session.store, &name, json, out)?;
            Ok(0)
        }
        Commands::Set {
            assignments,
            no_reconfigure,
        } => set_options(session, &assignments, !no_reconfigure, out),
    }
}
