//! mmeson - a ccmake-style editor for Meson build options
//!
//! Reads the options of a configured build directory from Meson's
//! introspection files, lets the user edit them, and applies the edits
//! through `meson configure` and `meson setup --reconfigure`.
//!
//! # Features
//! - **tui**: Interactive terminal user interface (default)
//!
//! # Architecture
//! - `meson`: Introspection input, typed values, Meson invocation
//! - `store`: Options with committed and pending values
//! - `interfaces`: Non-interactive commands and the TUI
//! - `config`: Configuration file and environment overrides
//! - `runtime`: Session lifecycle and exit actions
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod meson;
pub mod runtime;
pub mod store;
pub mod system;
