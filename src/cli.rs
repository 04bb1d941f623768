//! Command-line interface definitions using clap
//!
//! Without a subcommand the interactive editor starts; `list`, `get` and
//! `set` work on the same build directory without a terminal UI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::meson::Section;

/// mmeson - edit the options of a Meson build directory
#[derive(Parser, Debug)]
#[command(name = "mmeson")]
#[command(version)]
#[command(about = "Interactive editor for Meson build options", long_about = None)]
pub struct Cli {
    /// Meson build directory
    #[arg(required_unless_present = "print_config")]
    pub builddir: Option<PathBuf>,

    /// Meson binary to use (overrides the configuration file)
    #[arg(long, value_name = "BIN")]
    pub meson: Option<String>,

    /// Configuration file (default: mmeson.toml, optional)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Non-interactive commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List build options grouped by section
    List {
        /// Only show one section (user, base, compiler, core, directory, test, backend)
        #[arg(long)]
        section: Option<Section>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the value and metadata of one option
    Get {
        /// Option name (e.g., buildtype, zlib:tests)
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set one or more options and apply them
    Set {
        /// Assignments in NAME=VALUE form
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,

        /// Only run `meson configure`, skip `meson setup --reconfigure`
        #[arg(long)]
        no_reconfigure: bool,
    },
}

/// Split `name=value` at the first `=`.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing option name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}
