//! Get option command

use std::io::Write;

use colored::Colorize;

use super::OptionDetail;
use crate::errors::{MmesonError, Result};
use crate::store::OptionStore;

pub fn get_option<W: Write>(store: &OptionStore, name: &str, json: bool, out: &mut W) -> Result<()> {
    let option = store
        .get(name)
        .ok_or_else(|| MmesonError::not_found(format!("Unknown option '{}'", name)))?;

    if json {
        let detail = OptionDetail::from(option);
        writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
        return Ok(());
    }

    writeln!(out, "{}: {}", "Name".bold(), option.name.green())?;
    writeln!(out, "{}: {}", "Value".bold(), option.value().to_string().white())?;
    writeln!(out, "{}: {}", "Type".bold(), option.option_type)?;
    writeln!(out, "{}: {}", "Section".bold(), option.section)?;
    writeln!(out, "{}: {}", "Machine".bold(), option.machine)?;
    if !option.description.is_empty() {
        writeln!(out, "{}: {}", "Description".bold(), option.description)?;
    }
    if let Some(choices) = &option.choices {
        writeln!(out, "{}: {}", "Choices".bold(), choices.join(", ").cyan())?;
    }
    Ok(())
}
