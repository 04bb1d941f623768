//! Panic handler module
//!
//! Restores the terminal when the TUI was active, writes a crash report to
//! the temp directory and prints a short message.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::PathBuf;

use chrono::Utc;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

pub const CRASH_LOG_FILE: &str = "mmeson-crash.log";

pub fn crash_log_path() -> PathBuf {
    std::env::temp_dir().join(CRASH_LOG_FILE)
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        // 先恢复终端，否则后面的输出会落在备用屏幕里
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        let path = crash_log_path();
        if let Err(e) = write_crash_log(&path, &timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        eprintln!();
        eprintln!("mmeson panicked: {}", message);
        eprintln!("Details saved to {}", path.display());
        eprintln!();
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use crossterm::execute;
    use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, crossterm::cursor::Show);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

fn write_crash_log(
    path: &std::path::Path,
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
