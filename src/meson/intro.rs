//! Build directory introspection
//!
//! Meson writes machine-readable descriptions of a configured build
//! directory into `<builddir>/meson-info/`. This module locates and parses
//! the three files we need.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::types::{Machine, OptionType, Section};
use crate::errors::{MmesonError, Result};

pub const INFO_DIR: &str = "meson-info";
pub const MESON_INFO_FILE: &str = "meson-info.json";
pub const PROJECT_INFO_FILE: &str = "intro-projectinfo.json";
pub const BUILD_OPTIONS_FILE: &str = "intro-buildoptions.json";

#[derive(Debug, Clone, Deserialize)]
pub struct MesonInfo {
    pub meson_version: MesonVersion,
    pub directories: Directories,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MesonVersion {
    pub full: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Directories {
    pub source: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    pub descriptive_name: String,
    pub version: String,
}

/// One entry of `intro-buildoptions.json`, before type checking.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuildOption {
    pub name: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    #[serde(default)]
    pub description: Option<String>,
    /// Older Meson versions list `[true, false]` for booleans, so the
    /// entries are not guaranteed to be strings.
    #[serde(default)]
    pub choices: Option<Vec<Value>>,
    pub section: Section,
    pub machine: Machine,
}

impl RawBuildOption {
    pub fn choice_strings(&self) -> Option<Vec<String>> {
        self.choices.as_ref().map(|choices| {
            choices
                .iter()
                .map(|choice| match choice {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
    }
}

/// A directory that Meson has configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDir {
    path: PathBuf,
}

impl BuildDir {
    /// Open a build directory, checking that Meson has configured it.
    ///
    /// The path is canonicalized because Meson is later run from the source
    /// directory, where a relative build path would no longer resolve.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(MmesonError::configuration(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let marker = path.join(INFO_DIR).join(MESON_INFO_FILE);
        if !marker.is_file() {
            return Err(MmesonError::configuration(format!(
                "{} is not a Meson build directory ({} not found)",
                path.display(),
                Path::new(INFO_DIR).join(MESON_INFO_FILE).display()
            )));
        }

        let path = fs::canonicalize(path)?;
        debug!("Opened build directory: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn intro_path(&self, intro_file: &str) -> PathBuf {
        self.path.join(INFO_DIR).join(intro_file)
    }

    /// Load and deserialize one introspection file.
    pub fn read_intro<T: DeserializeOwned>(&self, intro_file: &str) -> Result<T> {
        let path = self.intro_path(intro_file);
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MmesonError::configuration(format!(
                "{} does not exist; run `meson setup` on this directory first",
                path.display()
            )),
            _ => MmesonError::file_operation(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        serde_json::from_str(&content)
            .map_err(|e| MmesonError::introspection(format!("{}: {}", path.display(), e)))
    }

    pub fn meson_info(&self) -> Result<MesonInfo> {
        self.read_intro(MESON_INFO_FILE)
    }

    pub fn project_info(&self) -> Result<ProjectInfo> {
        self.read_intro(PROJECT_INFO_FILE)
    }

    pub fn build_options(&self) -> Result<Vec<RawBuildOption>> {
        self.read_intro(BUILD_OPTIONS_FILE)
    }
}
