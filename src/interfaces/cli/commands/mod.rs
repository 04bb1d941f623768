//! CLI command implementations

mod get;
mod list;
mod set;

pub use get::get_option;
pub use list::list_options;
pub use set::set_options;

use serde::Serialize;

use crate::meson::OptionValue;
use crate::store::MesonOption;

/// Serializable view of one option for `--json` output
#[derive(Debug, Serialize)]
pub(crate) struct OptionDetail<'a> {
    name: &'a str,
    value: serde_json::Value,
    #[serde(rename = "type")]
    option_type: String,
    section: String,
    machine: String,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<&'a [String]>,
}

impl<'a> From<&'a MesonOption> for OptionDetail<'a> {
    fn from(option: &'a MesonOption) -> Self {
        let value = match option.value() {
            OptionValue::String(s) | OptionValue::Combo(s) => serde_json::Value::from(s.as_str()),
            OptionValue::Boolean(b) => serde_json::Value::from(*b),
            OptionValue::Integer(i) => serde_json::Value::from(*i),
            OptionValue::Array(items) => serde_json::Value::from(items.clone()),
        };
        Self {
            name: &option.name,
            value,
            option_type: option.option_type.to_string(),
            section: option.section.to_string(),
            machine: option.machine.to_string(),
            description: &option.description,
            choices: option.choices.as_deref(),
        }
    }
}
