//! List options command

use std::io::Write;

use colored::Colorize;

use super::OptionDetail;
use crate::errors::Result;
use crate::meson::Section;
use crate::store::OptionStore;

pub fn list_options<W: Write>(
    store: &OptionStore,
    section: Option<Section>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let options: Vec<_> = store
        .options()
        .iter()
        .filter(|o| section.is_none_or(|s| o.section == s))
        .collect();

    if json {
        let details: Vec<OptionDetail> = options.iter().map(|o| OptionDetail::from(*o)).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&details)?)?;
        return Ok(());
    }

    if options.is_empty() {
        writeln!(out, "{} No build options found", "ℹ".bold().blue())?;
        return Ok(());
    }

    // 按 (subproject, section) 分组输出，顺序与加载顺序一致
    let mut current_group: Option<(Option<&str>, Section)> = None;
    for option in &options {
        let group = (option.subproject(), option.section);
        if current_group != Some(group) {
            if current_group.is_some() {
                writeln!(out)?;
            }
            let heading = match group.0 {
                Some(sub) => format!("{} ({})", group.1, sub),
                None => group.1.to_string(),
            };
            writeln!(out, "{}", format!("{}:", heading).bold().green())?;
            current_group = Some(group);
        }

        writeln!(
            out,
            "  {} = {} {}",
            option.name.cyan(),
            option.value().to_string().white(),
            format!("[{}]", option.option_type).dimmed()
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} Total {} options",
        "ℹ".bold().blue(),
        options.len().to_string().green()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meson::{Machine, OptionValue};
    use crate::store::MesonOption;

    fn store() -> OptionStore {
        OptionStore::from_options(vec![
            MesonOption::new(
                "buildtype",
                OptionValue::Combo("debug".into()),
                "",
                Some(vec!["debug".into(), "release".into()]),
                Section::Core,
                Machine::Any,
            ),
            MesonOption::new(
                "docs",
                OptionValue::Boolean(true),
                "Build docs",
                None,
                Section::User,
                Machine::Any,
            ),
        ])
    }

    #[test]
    fn test_list_filters_by_section() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        list_options(&store(), Some(Section::User), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("user:"));
        assert!(text.contains("docs = true [boolean]"));
        assert!(!text.contains("buildtype"));
    }

    #[test]
    fn test_list_json() {
        let mut out = Vec::new();
        list_options(&store(), None, true, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "docs");
        assert_eq!(items[1]["value"], "debug");
        assert_eq!(items[1]["choices"][1], "release");
    }
}
