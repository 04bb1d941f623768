//! Set options command

use std::io::Write;

use colored::Colorize;
use tracing::info;

use crate::errors::{MmesonError, Result};
use crate::meson::MesonRunner;
use crate::runtime::Session;

/// Validate every assignment, then apply them in one commit.
///
/// A single invalid assignment aborts before Meson runs and leaves the
/// store as it was.
pub fn set_options<R: MesonRunner, W: Write>(
    session: &mut Session<R>,
    assignments: &[(String, String)],
    reconfigure: bool,
    out: &mut W,
) -> Result<i32> {
    for (name, value) in assignments {
        if let Err(e) = session.store.set_from_str(name, value) {
            session.store.discard();
            return Err(e);
        }
    }

    let changes = session.store.dirty_count();
    if changes == 0 {
        writeln!(out, "Nothing to configure!")?;
        return Ok(0);
    }

    info!("Applying {} change(s) from the command line", changes);
    writeln!(
        out,
        "{} {}",
        "Configuring".yellow(),
        format!("{} changes", changes).bold()
    )?;
    out.flush()?;

    match session.store.commit(&session.meson, reconfigure) {
        Ok(report) => {
            for output in [&report.configure, &report.reconfigure].into_iter().flatten() {
                out.write_all(output.combined().as_bytes())?;
            }
            writeln!(
                out,
                "{} {}",
                "✓".bold().green(),
                report.applied.join(", ").cyan()
            )?;
            Ok(0)
        }
        Err(MmesonError::ExternalCommand { status, output, .. }) => {
            out.write_all(output.as_bytes())?;
            Ok(status.unwrap_or(1))
        }
        Err(e) => Err(e),
    }
}
