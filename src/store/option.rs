//! A single build option and its committed/pending value pair

use crate::errors::{MmesonError, Result};
use crate::meson::{Machine, OptionType, OptionValue, RawBuildOption, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesonOption {
    pub name: String,
    pub option_type: OptionType,
    pub description: String,
    /// Candidates for combos; the allowed item set for arrays that declare one
    pub choices: Option<Vec<String>>,
    pub section: Section,
    pub machine: Machine,
    committed: OptionValue,
    pending: OptionValue,
}

impl MesonOption {
    pub fn new<N: Into<String>, D: Into<String>>(
        name: N,
        value: OptionValue,
        description: D,
        choices: Option<Vec<String>>,
        section: Section,
        machine: Machine,
    ) -> Self {
        Self {
            name: name.into(),
            option_type: value.option_type(),
            description: description.into(),
            choices,
            section,
            machine,
            committed: value.clone(),
            pending: value,
        }
    }

    /// Type-check one introspection entry.
    pub fn from_raw(raw: RawBuildOption) -> Result<Self> {
        let value = OptionValue::from_json(raw.option_type, &raw.value)
            .map_err(|e| MmesonError::introspection(format!("option '{}': {}", raw.name, e.message())))?;

        // 布尔选项的 choices 没有意义
        let choices = match raw.option_type {
            OptionType::Combo | OptionType::Array => raw.choice_strings(),
            _ => None,
        };

        Ok(Self::new(
            raw.name,
            value,
            raw.description.unwrap_or_default(),
            choices,
            raw.section,
            raw.machine,
        ))
    }

    /// Current (possibly edited) value
    pub fn value(&self) -> &OptionValue {
        &self.pending
    }

    /// Value cached in the build directory
    pub fn committed(&self) -> &OptionValue {
        &self.committed
    }

    pub fn is_dirty(&self) -> bool {
        self.pending != self.committed
    }

    /// `foo` for `foo:opt`, `None` for top-level project options
    pub fn subproject(&self) -> Option<&str> {
        self.name.split_once(':').map(|(sub, _)| sub)
    }

    /// Name without the subproject prefix
    pub fn base_name(&self) -> &str {
        self.name
            .split_once(':')
            .map(|(_, name)| name)
            .unwrap_or(&self.name)
    }

    pub(crate) fn sort_key(&self) -> (&str, u8, &str) {
        (
            self.subproject().unwrap_or(""),
            self.section.rank(),
            self.base_name(),
        )
    }

    /// Check a candidate value against the declared type and choices.
    pub fn validate(&self, value: &OptionValue) -> Result<()> {
        if value.option_type() != self.option_type {
            return Err(MmesonError::validation(format!(
                "Option '{}' is of type {}, got a {} value",
                self.name,
                self.option_type,
                value.option_type()
            )));
        }

        let Some(choices) = &self.choices else {
            return Ok(());
        };

        match value {
            OptionValue::Combo(choice) if !choices.contains(choice) => {
                Err(MmesonError::validation(format!(
                    "Invalid value '{}' for '{}'. Valid options: {}",
                    choice,
                    self.name,
                    choices.join(", ")
                )))
            }
            OptionValue::Array(items) => {
                let invalid: Vec<&str> = items
                    .iter()
                    .filter(|item| !choices.contains(*item))
                    .map(String::as_str)
                    .collect();
                if invalid.is_empty() {
                    Ok(())
                } else {
                    Err(MmesonError::validation(format!(
                        "Invalid items {:?} for '{}'. Valid options: {}",
                        invalid,
                        self.name,
                        choices.join(", ")
                    )))
                }
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn set_pending(&mut self, value: OptionValue) -> Result<()> {
        self.validate(&value)?;
        self.pending = value;
        Ok(())
    }

    /// The value a combo would take after rotating one step.
    pub(crate) fn rotated_choice(&self, forward: bool) -> Option<OptionValue> {
        let (OptionValue::Combo(current), Some(choices)) = (&self.pending, &self.choices) else {
            return None;
        };
        if choices.is_empty() {
            return None;
        }
        let len = choices.len();
        let next = match choices.iter().position(|c| c == current) {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None => 0,
        };
        Some(OptionValue::Combo(choices[next].clone()))
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed = self.pending.clone();
    }

    pub(crate) fn reset(&mut self) {
        self.pending = self.committed.clone();
    }
}
