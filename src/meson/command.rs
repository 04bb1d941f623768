//! Meson invocation
//!
//! All changes to a build directory go through `meson configure` and
//! `meson setup --reconfigure`. The process boundary sits behind the
//! [`MesonRunner`] trait so the option store can be exercised without a
//! Meson installation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::intro::BuildDir;
use super::value::OptionValue;
use crate::errors::{MmesonError, Result};

/// Result of one Meson run.
///
/// `stdout`/`stderr` hold whatever the runner captured. [`SystemRunner`]
/// lets Meson write to the terminal directly, so both stay empty there.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// stdout followed by stderr, as the tool wrote them
    pub fn combined(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(&self.stdout);
        out.push_str(&self.stderr);
        out
    }
}

/// Runs an external program to completion.
pub trait MesonRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput>;
}

/// Runs Meson as a child process sharing our stdin, stdout and stderr.
///
/// Output appears live and in order on the descriptors Meson chose.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl MesonRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| MmesonError::file_operation(format!("Failed to run {}: {}", program, e)))?;

        Ok(CommandOutput {
            status: status.code(),
            ..CommandOutput::default()
        })
    }
}

/// The Meson binary bound to one build directory.
#[derive(Debug, Clone)]
pub struct Meson<R> {
    binary: String,
    build_dir: PathBuf,
    source_dir: PathBuf,
    runner: R,
}

impl<R: MesonRunner> Meson<R> {
    pub fn new<B: Into<String>>(binary: B, build_dir: &BuildDir, source_dir: PathBuf, runner: R) -> Self {
        Self {
            binary: binary.into(),
            build_dir: build_dir.path().to_path_buf(),
            source_dir,
            runner,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Arguments for `meson configure <builddir> -Dname=value...`
    pub fn configure_args(&self, assignments: &[(&str, &OptionValue)]) -> Vec<String> {
        let mut args = vec![
            "configure".to_string(),
            self.build_dir.to_string_lossy().into_owned(),
        ];
        args.extend(
            assignments
                .iter()
                .map(|(name, value)| format!("-D{}={}", name, value.to_meson_arg())),
        );
        args
    }

    /// Arguments for `meson setup --reconfigure <builddir>`
    pub fn reconfigure_args(&self) -> Vec<String> {
        vec![
            "setup".to_string(),
            "--reconfigure".to_string(),
            self.build_dir.to_string_lossy().into_owned(),
        ]
    }

    pub fn configure(&self, assignments: &[(&str, &OptionValue)]) -> Result<CommandOutput> {
        info!("Configuring {} option(s)", assignments.len());
        self.execute(self.configure_args(assignments))
    }

    pub fn reconfigure(&self) -> Result<CommandOutput> {
        info!("Reconfiguring {}", self.build_dir.display());
        self.execute(self.reconfigure_args())
    }

    fn execute(&self, args: Vec<String>) -> Result<CommandOutput> {
        let command_line = format!("{} {}", self.binary, args.join(" "));
        debug!("Running `{}` in {}", command_line, self.source_dir.display());

        let output = self.runner.run(&self.binary, &args, &self.source_dir)?;
        if !output.success() {
            warn!("`{}` failed with status {:?}", command_line, output.status);
            return Err(MmesonError::external_command(
                command_line,
                output.status,
                output.combined(),
            ));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct ScriptedRunner {
        calls: RefCell<Vec<Vec<String>>>,
        status: i32,
    }

    impl MesonRunner for ScriptedRunner {
        fn run(&self, _program: &str, args: &[String], _cwd: &Path) -> Result<CommandOutput> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(CommandOutput {
                status: Some(self.status),
                stdout: "out\n".to_string(),
                stderr: "err\n".to_string(),
            })
        }
    }

    fn build_dir(temp: &TempDir) -> BuildDir {
        let info = temp.path().join("meson-info");
        std::fs::create_dir_all(&info).unwrap();
        std::fs::write(info.join("meson-info.json"), "{}").unwrap();
        BuildDir::open(temp.path()).unwrap()
    }

    fn meson(temp: &TempDir, status: i32) -> Meson<ScriptedRunner> {
        let runner = ScriptedRunner {
            calls: RefCell::new(Vec::new()),
            status,
        };
        Meson::new("meson", &build_dir(temp), temp.path().to_path_buf(), runner)
    }

    #[test]
    fn test_configure_args() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, 0);
        let value = OptionValue::Boolean(true);
        let args = meson.configure_args(&[("werror", &value)]);
        assert_eq!(args[0], "configure");
        assert_eq!(args[1], meson.build_dir().to_string_lossy());
        assert_eq!(args[2], "-Dwerror=true");
    }

    #[test]
    fn test_reconfigure_args() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, 0);
        let args = meson.reconfigure_args();
        assert_eq!(&args[..2], &["setup".to_string(), "--reconfigure".to_string()]);
    }

    #[test]
    fn test_failure_carries_status_and_output() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, 4);
        let err = meson.reconfigure().unwrap_err();
        match err {
            MmesonError::ExternalCommand {
                command,
                status,
                output,
            } => {
                assert!(command.starts_with("meson setup --reconfigure"));
                assert_eq!(status, Some(4));
                assert_eq!(output, "out\nerr\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(meson.runner().calls.borrow().len(), 1);
    }
}
