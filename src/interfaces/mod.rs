//! User interfaces: the non-interactive commands and the terminal UI

pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
