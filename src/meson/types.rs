//! Meson 选项元数据类型
//!
//! Type, section and machine tags as reported by `meson introspect`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Declared type of a build option.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OptionType {
    String,
    Boolean,
    Combo,
    Integer,
    Array,
}

/// Section an option belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Section {
    User,
    Base,
    Compiler,
    Core,
    Directory,
    Test,
    Backend,
    /// Sections added by Meson versions newer than this tool
    #[serde(other)]
    Other,
}

impl Section {
    /// Display order: project options first, backend internals last.
    pub fn rank(self) -> u8 {
        match self {
            Self::User => 1,
            Self::Base => 2,
            Self::Compiler => 3,
            Self::Core => 4,
            Self::Directory => 5,
            Self::Test => 6,
            Self::Backend => 7,
            Self::Other => 8,
        }
    }
}

/// Machine an option applies to when cross compiling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Machine {
    Any,
    Host,
    Build,
    #[serde(other)]
    Other,
}
