//! Everything that talks to Meson: introspection input, typed values and
//! the `configure` / `setup --reconfigure` commands.

mod command;
mod intro;
mod types;
mod value;

pub use command::{CommandOutput, Meson, MesonRunner, SystemRunner};
pub use intro::{
    BUILD_OPTIONS_FILE, BuildDir, INFO_DIR, MESON_INFO_FILE, MesonInfo, PROJECT_INFO_FILE,
    ProjectInfo, RawBuildOption,
};
pub use types::{Machine, OptionType, Section};
pub use value::{OptionValue, parse_array};
