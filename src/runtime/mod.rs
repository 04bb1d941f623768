//! Session lifecycle
//!
//! Opens a build directory, hands the option store to the TUI or to a
//! non-interactive command, and afterwards carries out what the user chose
//! on exit.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::errors::{MmesonError, Result};
use crate::meson::{BuildDir, Meson, MesonRunner, ProjectInfo, SystemRunner};
use crate::store::OptionStore;

/// What happens to pending edits when the interactive session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    /// Quit without applying (`q`)
    Discard,
    /// `meson configure` only (`g`)
    Configure,
    /// `meson configure` followed by `meson setup --reconfigure` (`c`)
    Reconfigure,
}

/// One opened build directory with its options and Meson handle.
pub struct Session<R> {
    pub build_dir: BuildDir,
    pub store: OptionStore,
    pub meson: Meson<R>,
    pub project: ProjectInfo,
    pub meson_version: String,
}

impl Session<SystemRunner> {
    pub fn open(builddir: &Path, binary: &str) -> Result<Self> {
        Self::open_with(builddir, binary, SystemRunner)
    }
}

impl<R: MesonRunner> Session<R> {
    pub fn open_with(builddir: &Path, binary: &str, runner: R) -> Result<Self> {
        let build_dir = BuildDir::open(builddir)?;
        let meson_info = build_dir.meson_info()?;
        let project = build_dir.project_info()?;
        let store = OptionStore::load(&build_dir)?;
        let meson = Meson::new(binary, &build_dir, meson_info.directories.source, runner);

        info!(
            "Opened {} {} in {}",
            project.descriptive_name,
            project.version,
            build_dir.path().display()
        );

        Ok(Self {
            build_dir,
            store,
            meson,
            project,
            meson_version: meson_info.meson_version.full,
        })
    }

    /// `Build options for <project> <version> (Meson <version>)`
    pub fn header(&self) -> String {
        format!(
            "Build options for {} {} (Meson {})",
            self.project.descriptive_name, self.project.version, self.meson_version
        )
    }

    /// Carry out the exit action and return the process exit code.
    ///
    /// Our own messages go to `out`, flushed before each Meson run so they
    /// stay ahead of Meson's output. Output a runner captured is copied to
    /// `out` unchanged.
    pub fn finish<W: Write>(&mut self, action: ExitAction, out: &mut W) -> Result<i32> {
        let changes = self.store.dirty_count();

        if action == ExitAction::Discard {
            if changes != 0 {
                writeln!(out, "Ignoring {} changes", changes)?;
            }
            return Ok(0);
        }

        if changes == 0 {
            writeln!(out, "Nothing to configure!")?;
            return Ok(0);
        }

        writeln!(out, "Configuring {} changes", changes)?;
        out.flush()?;
        match self.store.commit(&self.meson, false) {
            Ok(report) => {
                if let Some(output) = &report.configure {
                    out.write_all(output.combined().as_bytes())?;
                }
            }
            Err(MmesonError::ExternalCommand { status, output, .. }) => {
                out.write_all(output.as_bytes())?;
                if action == ExitAction::Reconfigure {
                    writeln!(out, "Configuration failed, skipping reconfiguration!")?;
                }
                return Ok(status.unwrap_or(1));
            }
            Err(e) => return Err(e),
        }

        if action == ExitAction::Configure {
            return Ok(0);
        }

        writeln!(out, "Reconfiguring project")?;
        out.flush()?;
        match self.meson.reconfigure() {
            Ok(output) => {
                out.write_all(output.combined().as_bytes())?;
                Ok(0)
            }
            Err(MmesonError::ExternalCommand { status, output, .. }) => {
                warn!("Reconfigure failed with status {:?}", status);
                out.write_all(output.as_bytes())?;
                Ok(status.unwrap_or(1))
            }
            Err(e) => Err(e),
        }
    }
}

/// Open the build directory named on the command line and run either the
/// TUI or the requested command. Returns the process exit code.
pub fn run(cli: Cli, config: AppConfig) -> anyhow::Result<i32> {
    let builddir = cli
        .builddir
        .context("No build directory given")?;
    let binary = meson_binary(cli.meson.as_deref(), &config);

    let mut session = Session::open(&builddir, &binary)
        .with_context(|| format!("Failed to open {}", builddir.display()))?;

    let mut stdout = std::io::stdout();
    match cli.command {
        Some(command) => Ok(crate::interfaces::cli::run_command(
            &mut session,
            command,
            &mut stdout,
        )?),
        None => run_interactive(&mut session, &config, &mut stdout),
    }
}

/// `--meson` wins over the configured binary, which already carries the
/// `MMESON__MESON__BINARY` override.
pub fn meson_binary(flag: Option<&str>, config: &AppConfig) -> String {
    flag.map(str::to_string)
        .unwrap_or_else(|| config.meson.binary.clone())
}

#[cfg(feature = "tui")]
fn run_interactive<R: MesonRunner, W: Write>(
    session: &mut Session<R>,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<i32> {
    let action = crate::interfaces::tui::run_tui(session, config.tui.confirm_discard)
        .map_err(MmesonError::from)?;
    info!("TUI exited with {:?}", action);
    Ok(session.finish(action, out)?)
}

#[cfg(not(feature = "tui"))]
fn run_interactive<R: MesonRunner, W: Write>(
    _session: &mut Session<R>,
    _config: &AppConfig,
    _out: &mut W,
) -> anyhow::Result<i32> {
    anyhow::bail!("mmeson was built without the `tui` feature; use list/get/set instead")
}
