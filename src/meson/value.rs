//! Typed option values
//!
//! Conversion between the JSON values found in `intro-buildoptions.json`,
//! the text a user types into the editor, and the `-D` arguments passed to
//! `meson configure`.

use std::fmt;

use serde_json::Value;

use super::types::OptionType;
use crate::errors::{MmesonError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Boolean(bool),
    Combo(String),
    Integer(i64),
    Array(Vec<String>),
}

impl OptionValue {
    pub fn option_type(&self) -> OptionType {
        match self {
            Self::String(_) => OptionType::String,
            Self::Boolean(_) => OptionType::Boolean,
            Self::Combo(_) => OptionType::Combo,
            Self::Integer(_) => OptionType::Integer,
            Self::Array(_) => OptionType::Array,
        }
    }

    /// Build a value of the declared type from introspection JSON.
    pub fn from_json(option_type: OptionType, value: &Value) -> Result<Self> {
        let parsed = match (option_type, value) {
            (OptionType::String, Value::String(s)) => Some(Self::String(s.clone())),
            (OptionType::Boolean, Value::Bool(b)) => Some(Self::Boolean(*b)),
            (OptionType::Combo, Value::String(s)) => Some(Self::Combo(s.clone())),
            (OptionType::Integer, Value::Number(n)) => n.as_i64().map(Self::Integer),
            (OptionType::Array, Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect::<Option<Vec<String>>>()
                .map(Self::Array),
            _ => None,
        };

        parsed.ok_or_else(|| {
            MmesonError::introspection(format!(
                "Value {} does not match declared type '{}'",
                value, option_type
            ))
        })
    }

    /// Parse editor text into a value of the declared type.
    ///
    /// Only the shape is checked here; choice membership is checked by the
    /// option itself.
    pub fn parse(option_type: OptionType, text: &str) -> Result<Self> {
        match option_type {
            OptionType::String => Ok(Self::String(text.to_string())),
            OptionType::Combo => Ok(Self::Combo(text.trim().to_string())),
            OptionType::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Self::Boolean(true)),
                "false" => Ok(Self::Boolean(false)),
                _ => Err(MmesonError::validation(format!(
                    "'{}' is not a boolean. Valid: true, false",
                    text.trim()
                ))),
            },
            OptionType::Integer => text.trim().parse::<i64>().map(Self::Integer).map_err(|_| {
                MmesonError::validation(format!("'{}' is not an integer", text.trim()))
            }),
            OptionType::Array => parse_array(text)
                .map(Self::Array)
                .map_err(MmesonError::validation),
        }
    }

    /// Render as the right-hand side of a `-Dname=value` argument.
    ///
    /// No shell sits between us and Meson, so strings are passed verbatim.
    pub fn to_meson_arg(&self) -> String {
        match self {
            Self::String(s) | Self::Combo(s) => s.clone(),
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Array(items) => format_array(items, ","),
        }
    }

    /// Text used to prefill the editor; `parse` accepts it back unchanged.
    pub fn to_edit_text(&self) -> String {
        match self {
            Self::Array(items) => format_array(items, ", "),
            other => other.to_meson_arg(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_edit_text())
    }
}

fn format_array(items: &[String], separator: &str) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote_item(item)).collect();
    format!("[{}]", quoted.join(separator))
}

/// Single-quoted Meson string literal. Control characters are escaped so
/// the literal stays on one line.
fn quote_item(item: &str) -> String {
    let mut quoted = String::with_capacity(item.len() + 2);
    quoted.push('\'');
    for c in item.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // Cc 类别都在 U+009F 以内
            c if c.is_control() => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Decode the character after a backslash inside a quoted item.
fn unescape<I: Iterator<Item = char>>(chars: &mut I) -> std::result::Result<char, String> {
    let escaped = chars
        .next()
        .ok_or_else(|| "Dangling '\\' at end of list".to_string())?;

    let width = match escaped {
        'n' => return Ok('\n'),
        't' => return Ok('\t'),
        'r' => return Ok('\r'),
        'a' => return Ok('\x07'),
        'b' => return Ok('\x08'),
        'f' => return Ok('\x0c'),
        'v' => return Ok('\x0b'),
        'x' => 2,
        'u' => 4,
        other => return Ok(other),
    };

    let digits: String = chars.by_ref().take(width).collect();
    Some(&digits)
        .filter(|d| d.len() == width && d.chars().all(|c| c.is_ascii_hexdigit()))
        .and_then(|d| u32::from_str_radix(d, 16).ok())
        .and_then(char::from_u32)
        .ok_or_else(|| format!("Invalid escape '\\{}{}'", escaped, digits))
}

/// Parse an array given either as a bracketed list (`['a', "b"]`) or as a
/// bare comma separated list (`a, b`).
pub fn parse_array(text: &str) -> std::result::Result<Vec<String>, String> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .ok_or_else(|| format!("Unterminated list: missing ']' in {}", trimmed))?,
        None => trimmed,
    };
    split_list(inner)
}

fn split_list(inner: &str) -> std::result::Result<Vec<String>, String> {
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        match chars.peek().copied() {
            None => break,
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                let mut item = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => item.push(unescape(&mut chars)?),
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        c => item.push(c),
                    }
                }
                if !closed {
                    return Err(format!("Unterminated quote in list: {}", inner));
                }
                items.push(item);

                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                match chars.next() {
                    None => break,
                    Some(',') => {}
                    Some(c) => return Err(format!("Unexpected '{}' after quoted item", c)),
                }
            }
            Some(_) => {
                let mut item = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ',' {
                        break;
                    }
                    item.push(c);
                    chars.next();
                }
                let item = item.trim_end();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
                // 跳过分隔符
                if chars.next().is_none() {
                    break;
                }
            }
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_matches_declared_type() {
        assert_eq!(
            OptionValue::from_json(OptionType::Boolean, &json!(true)).unwrap(),
            OptionValue::Boolean(true)
        );
        assert_eq!(
            OptionValue::from_json(OptionType::Integer, &json!(42)).unwrap(),
            OptionValue::Integer(42)
        );
        assert_eq!(
            OptionValue::from_json(OptionType::Array, &json!(["-Wall", "-O2"])).unwrap(),
            OptionValue::Array(vec!["-Wall".into(), "-O2".into()])
        );
        assert_eq!(
            OptionValue::from_json(OptionType::Combo, &json!("auto")).unwrap(),
            OptionValue::Combo("auto".into())
        );
    }

    #[test]
    fn test_from_json_rejects_mismatch() {
        let err = OptionValue::from_json(OptionType::Boolean, &json!("yes")).unwrap_err();
        assert!(matches!(err, MmesonError::Introspection(_)));
        assert!(OptionValue::from_json(OptionType::Array, &json!([1, 2])).is_err());
        assert!(OptionValue::from_json(OptionType::Integer, &json!(1.5)).is_err());
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(
            OptionValue::parse(OptionType::Boolean, "TRUE").unwrap(),
            OptionValue::Boolean(true)
        );
        assert_eq!(
            OptionValue::parse(OptionType::Boolean, " false ").unwrap(),
            OptionValue::Boolean(false)
        );
        let err = OptionValue::parse(OptionType::Boolean, "maybe").unwrap_err();
        assert!(matches!(err, MmesonError::Validation(_)));
        assert!(OptionValue::parse(OptionType::Boolean, "1").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(
            OptionValue::parse(OptionType::Integer, "-12").unwrap(),
            OptionValue::Integer(-12)
        );
        assert!(OptionValue::parse(OptionType::Integer, "12a").is_err());
        assert!(OptionValue::parse(OptionType::Integer, "").is_err());
    }

    #[test]
    fn test_parse_string_keeps_whitespace() {
        assert_eq!(
            OptionValue::parse(OptionType::String, " /usr/local ").unwrap(),
            OptionValue::String(" /usr/local ".into())
        );
    }

    #[test]
    fn test_parse_array_forms() {
        assert_eq!(parse_array("[]").unwrap(), Vec::<String>::new());
        assert_eq!(parse_array("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_array("['a', \"b\"]").unwrap(), vec!["a", "b"]);
        assert_eq!(parse_array("a, b ,c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(parse_array("['a',]").unwrap(), vec!["a"]);
        assert_eq!(parse_array("['a,b']").unwrap(), vec!["a,b"]);
        assert_eq!(parse_array(r"['it\'s']").unwrap(), vec!["it's"]);
    }

    #[test]
    fn test_parse_array_errors() {
        assert!(parse_array("['a'").is_err());
        assert!(parse_array("['a]").is_err());
        assert!(parse_array("['a' 'b']").is_err());
    }

    #[test]
    fn test_meson_arg_format() {
        assert_eq!(OptionValue::Boolean(false).to_meson_arg(), "false");
        assert_eq!(OptionValue::Integer(3).to_meson_arg(), "3");
        assert_eq!(
            OptionValue::String("hello world".into()).to_meson_arg(),
            "hello world"
        );
        assert_eq!(OptionValue::Array(vec![]).to_meson_arg(), "[]");
        assert_eq!(
            OptionValue::Array(vec!["a".into(), "it's".into()]).to_meson_arg(),
            r"['a','it\'s']"
        );
    }

    #[test]
    fn test_meson_arg_escapes_control_characters() {
        let value = OptionValue::Array(vec!["line\none".into(), "tab\there".into(), "bell\x07".into()]);
        assert_eq!(
            value.to_meson_arg(),
            r"['line\none','tab\there','bell\x07']"
        );
        assert!(!value.to_meson_arg().contains('\n'));
    }

    #[test]
    fn test_parse_array_decodes_escapes() {
        assert_eq!(
            parse_array(r#"['a\nb', 'c\td', '\x41é', 'q\"']"#).unwrap(),
            vec!["a\nb", "c\td", "Aé", "q\""]
        );
        assert!(parse_array(r"['\x4']").is_err());
        assert!(parse_array(r"['\uzzzz']").is_err());
    }

    #[test]
    fn test_edit_text_parses_back() {
        let value = OptionValue::Array(vec!["x y".into(), r"back\slash".into(), "multi\nline".into()]);
        let text = value.to_edit_text();
        assert_eq!(OptionValue::parse(OptionType::Array, &text).unwrap(), value);
    }
}
