//! Option store
//!
//! Holds every option of one build directory with its committed and pending
//! value, and reconciles the two through Meson on commit.

mod option;

pub use option::MesonOption;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::errors::{MmesonError, Result};
use crate::meson::{BuildDir, CommandOutput, Meson, MesonRunner, OptionType, OptionValue};

/// What a successful commit did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Names of the options that were applied
    pub applied: Vec<String>,
    pub configure: Option<CommandOutput>,
    pub reconfigure: Option<CommandOutput>,
}

impl CommitReport {
    /// Nothing was dirty, so Meson was never run.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct OptionStore {
    options: Vec<MesonOption>,
    by_name: HashMap<String, usize>,
}

impl OptionStore {
    /// Load every option listed in `intro-buildoptions.json`.
    ///
    /// Either all entries load or the call fails; there is no partially
    /// populated store.
    pub fn load(build_dir: &BuildDir) -> Result<Self> {
        let raw = build_dir.build_options()?;
        let options = raw
            .into_iter()
            .map(MesonOption::from_raw)
            .collect::<Result<Vec<_>>>()?;
        info!("Loaded {} build options", options.len());
        Ok(Self::from_options(options))
    }

    /// Re-read the listing, replacing the contents only if loading succeeds.
    pub fn reload(&mut self, build_dir: &BuildDir) -> Result<()> {
        *self = Self::load(build_dir)?;
        Ok(())
    }

    pub fn from_options(mut options: Vec<MesonOption>) -> Self {
        options.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        let by_name = options
            .iter()
            .enumerate()
            .map(|(idx, option)| (option.name.clone(), idx))
            .collect();
        Self { options, by_name }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn options(&self) -> &[MesonOption] {
        &self.options
    }

    pub fn get(&self, name: &str) -> Option<&MesonOption> {
        self.by_name.get(name).map(|&idx| &self.options[idx])
    }

    pub fn get_index(&self, index: usize) -> Option<&MesonOption> {
        self.options.get(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn is_dirty(&self) -> bool {
        self.options.iter().any(MesonOption::is_dirty)
    }

    pub fn dirty_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_dirty()).count()
    }

    pub fn dirty_options(&self) -> impl Iterator<Item = &MesonOption> {
        self.options.iter().filter(|o| o.is_dirty())
    }

    fn option_mut(&mut self, name: &str) -> Result<&mut MesonOption> {
        let idx = *self
            .by_name
            .get(name)
            .ok_or_else(|| MmesonError::not_found(format!("Unknown option '{}'", name)))?;
        Ok(&mut self.options[idx])
    }

    /// Set the pending value of an option.
    ///
    /// Returns whether the option is dirty afterwards. On a validation
    /// error the option is left untouched.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<bool> {
        let option = self.option_mut(name)?;
        option.set_pending(value)?;
        debug!("Set {} = {} (dirty: {})", name, option.value(), option.is_dirty());
        Ok(option.is_dirty())
    }

    /// Parse `text` according to the option's declared type, then `set` it.
    pub fn set_from_str(&mut self, name: &str, text: &str) -> Result<bool> {
        let option_type = self
            .get(name)
            .map(|o| o.option_type)
            .ok_or_else(|| MmesonError::not_found(format!("Unknown option '{}'", name)))?;
        let value = OptionValue::parse(option_type, text)?;
        self.set(name, value)
    }

    /// Flip a boolean option.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let option = self.option_mut(name)?;
        let OptionValue::Boolean(current) = *option.value() else {
            return Err(MmesonError::validation(format!(
                "Option '{}' is not a boolean",
                name
            )));
        };
        self.set(name, OptionValue::Boolean(!current))
    }

    /// Rotate a combo option to its next (or previous) choice.
    pub fn cycle(&mut self, name: &str, forward: bool) -> Result<bool> {
        let option = self.option_mut(name)?;
        if option.option_type != OptionType::Combo {
            return Err(MmesonError::validation(format!(
                "Option '{}' is not a combo",
                name
            )));
        }
        let Some(next) = option.rotated_choice(forward) else {
            return Ok(option.is_dirty());
        };
        self.set(name, next)
    }

    /// Drop the pending edit of one option.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        self.option_mut(name)?.reset();
        Ok(())
    }

    /// Drop every pending edit. Returns how many options were dirty.
    pub fn discard(&mut self) -> usize {
        let mut discarded = 0;
        for option in self.options.iter_mut().filter(|o| o.is_dirty()) {
            option.reset();
            discarded += 1;
        }
        if discarded > 0 {
            info!("Discarded {} pending change(s)", discarded);
        }
        discarded
    }

    /// Apply all dirty options with `meson configure`, then optionally run
    /// `meson setup --reconfigure`.
    ///
    /// A failed configure leaves every option dirty and skips the
    /// reconfigure. Once configure succeeds the pending values are the
    /// committed ones, even if the reconfigure fails afterwards; that
    /// error then carries the output of both runs.
    pub fn commit<R: MesonRunner>(
        &mut self,
        meson: &Meson<R>,
        reconfigure: bool,
    ) -> Result<CommitReport> {
        let applied: Vec<String> = self.dirty_options().map(|o| o.name.clone()).collect();
        if applied.is_empty() {
            debug!("Nothing to configure");
            return Ok(CommitReport::default());
        }

        let configure = {
            let assignments: Vec<(&str, &OptionValue)> = self
                .dirty_options()
                .map(|o| (o.name.as_str(), o.value()))
                .collect();
            meson.configure(&assignments)?
        };

        for option in self.options.iter_mut().filter(|o| o.is_dirty()) {
            option.mark_committed();
        }
        info!("Committed {} option(s)", applied.len());

        let reconfigure = if reconfigure {
            match meson.reconfigure() {
                Ok(output) => Some(output),
                Err(MmesonError::ExternalCommand {
                    command,
                    status,
                    output,
                }) => {
                    return Err(MmesonError::external_command(
                        command,
                        status,
                        configure.combined() + &output,
                    ));
                }
                Err(e) => return Err(e),
            }
        } else {
            None
        };

        Ok(CommitReport {
            applied,
            configure: Some(configure),
            reconfigure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meson::{Machine, Section};
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::TempDir;

    /// Fails every call whose first argument equals `fail_on`.
    struct FakeRunner {
        calls: RefCell<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on,
            }
        }
    }

    impl MesonRunner for FakeRunner {
        fn run(&self, _program: &str, args: &[String], _cwd: &Path) -> Result<CommandOutput> {
            self.calls.borrow_mut().push(args.to_vec());
            let failed = self.fail_on == args.first().map(String::as_str);
            Ok(CommandOutput {
                status: Some(if failed { 1 } else { 0 }),
                stdout: format!("{} ran\n", args[0]),
                stderr: String::new(),
            })
        }
    }

    fn sample_store() -> OptionStore {
        OptionStore::from_options(vec![
            MesonOption::new(
                "werror",
                OptionValue::Boolean(false),
                "Treat warnings as errors",
                None,
                Section::Core,
                Machine::Any,
            ),
            MesonOption::new(
                "buildtype",
                OptionValue::Combo("debug".into()),
                "Build type to use",
                Some(vec!["plain".into(), "debug".into(), "release".into()]),
                Section::Core,
                Machine::Any,
            ),
            MesonOption::new(
                "docs",
                OptionValue::Boolean(true),
                "Build documentation",
                None,
                Section::User,
                Machine::Any,
            ),
            MesonOption::new(
                "zlib:tests",
                OptionValue::Boolean(false),
                "",
                None,
                Section::User,
                Machine::Any,
            ),
            MesonOption::new(
                "b_lto",
                OptionValue::Boolean(false),
                "",
                None,
                Section::Base,
                Machine::Any,
            ),
        ])
    }

    fn meson(temp: &TempDir, runner: FakeRunner) -> Meson<FakeRunner> {
        let info = temp.path().join("meson-info");
        std::fs::create_dir_all(&info).unwrap();
        std::fs::write(info.join("meson-info.json"), "{}").unwrap();
        let build_dir = BuildDir::open(temp.path()).unwrap();
        Meson::new("meson", &build_dir, temp.path().to_path_buf(), runner)
    }

    #[test]
    fn test_sort_order() {
        let store = sample_store();
        let names: Vec<&str> = store.options().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["docs", "b_lto", "buildtype", "werror", "zlib:tests"]
        );
        assert_eq!(store.position("werror"), Some(3));
    }

    #[test]
    fn test_set_then_discard_restores_value() {
        let mut store = sample_store();
        assert!(store.set("werror", OptionValue::Boolean(true)).unwrap());
        assert!(store.is_dirty());

        assert_eq!(store.discard(), 1);
        assert!(!store.is_dirty());
        assert_eq!(
            store.get("werror").unwrap().value(),
            &OptionValue::Boolean(false)
        );
    }

    #[test]
    fn test_setting_committed_value_clears_dirty() {
        let mut store = sample_store();
        store.set_from_str("buildtype", "release").unwrap();
        assert_eq!(store.dirty_count(), 1);
        assert!(!store.set_from_str("buildtype", "debug").unwrap());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_invalid_boolean_leaves_option_untouched() {
        let mut store = sample_store();
        let err = store.set_from_str("werror", "sometimes").unwrap_err();
        assert!(matches!(err, MmesonError::Validation(_)));
        let option = store.get("werror").unwrap();
        assert_eq!(option.value(), &OptionValue::Boolean(false));
        assert!(!option.is_dirty());
    }

    #[test]
    fn test_unknown_option_is_not_found() {
        let mut store = sample_store();
        let err = store.set_from_str("nope", "1").unwrap_err();
        assert!(matches!(err, MmesonError::NotFound(_)));
        assert!(store.reset("nope").is_err());
    }

    #[test]
    fn test_toggle_and_cycle() {
        let mut store = sample_store();
        assert!(store.toggle("docs").unwrap());
        assert!(!store.toggle("docs").unwrap());

        assert!(store.cycle("buildtype", true).unwrap());
        assert_eq!(
            store.get("buildtype").unwrap().value(),
            &OptionValue::Combo("release".into())
        );
        assert!(store.cycle("buildtype", false).is_ok());
        assert!(!store.is_dirty());

        assert!(store.toggle("buildtype").is_err());
        assert!(store.cycle("docs", true).is_err());
    }

    #[test]
    fn test_reset_single_option() {
        let mut store = sample_store();
        store.toggle("docs").unwrap();
        store.toggle("werror").unwrap();
        store.reset("docs").unwrap();
        assert_eq!(store.dirty_count(), 1);
        assert!(store.get("werror").unwrap().is_dirty());
    }

    #[test]
    fn test_commit_without_changes_runs_nothing() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, FakeRunner::new(None));
        let mut store = sample_store();
        let report = store.commit(&meson, true).unwrap();
        assert!(report.is_noop());
        assert!(meson.runner().calls.borrow().is_empty());
    }

    #[test]
    fn test_commit_clears_dirty_and_reconfigures() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, FakeRunner::new(None));
        let mut store = sample_store();
        store.toggle("werror").unwrap();
        store.set_from_str("buildtype", "plain").unwrap();

        let report = store.commit(&meson, true).unwrap();
        assert_eq!(report.applied, vec!["buildtype", "werror"]);
        assert!(report.reconfigure.is_some());
        assert!(!store.is_dirty());
        assert_eq!(
            store.get("werror").unwrap().committed(),
            &OptionValue::Boolean(true)
        );

        let calls = meson.runner().calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(&calls[0][2..], &["-Dbuildtype=plain", "-Dwerror=true"]);
        assert_eq!(calls[1][0], "setup");
    }

    #[test]
    fn test_commit_without_reconfigure() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, FakeRunner::new(None));
        let mut store = sample_store();
        store.toggle("docs").unwrap();

        let report = store.commit(&meson, false).unwrap();
        assert!(report.reconfigure.is_none());
        assert_eq!(meson.runner().calls.borrow().len(), 1);
    }

    #[test]
    fn test_failed_configure_keeps_options_dirty() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, FakeRunner::new(Some("configure")));
        let mut store = sample_store();
        store.toggle("docs").unwrap();

        let err = store.commit(&meson, true).unwrap_err();
        assert!(matches!(err, MmesonError::ExternalCommand { status: Some(1), .. }));
        assert!(store.get("docs").unwrap().is_dirty());
        // 配置失败时不会执行 reconfigure
        assert_eq!(meson.runner().calls.borrow().len(), 1);
    }

    #[test]
    fn test_failed_reconfigure_still_commits() {
        let temp = TempDir::new().unwrap();
        let meson = meson(&temp, FakeRunner::new(Some("setup")));
        let mut store = sample_store();
        store.toggle("docs").unwrap();

        let err = store.commit(&meson, true).unwrap_err();
        match err {
            MmesonError::ExternalCommand { output, .. } => {
                assert_eq!(output, "configure ran\nsetup ran\n");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!store.is_dirty());
    }
}
