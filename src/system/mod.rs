//! System-level modules
//!
//! - Logging initialization
//! - Panic handling (terminal restore, crash log)

pub mod logging;
pub mod panic_handler;
