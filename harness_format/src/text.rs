use log::warn;
use serde_json::Value;

use crate::{FormatError, Result, js_type_of};

/// Upper-cases the first character and every character that follows a space.
///
/// ```
/// assert_eq!(harness_format::make_capital_name("hello world"), "Hello World");
/// ```
pub fn make_capital_name(name: &str) -> String {
    let mut capitalized = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if at_word_start {
            capitalized.extend(c.to_uppercase());
        } else {
            capitalized.push(c);
        }
        at_word_start = c == ' ';
    }

    capitalized
}

/// Pads a string value with `fill_value` up to `new_length` characters.
///
/// Fails with [`FormatError::TypeUnsupported`] for anything but a string.
/// A string already longer than `new_length` is returned unchanged, see
/// [`resize_str`].
pub fn resize(value: Option<&Value>, new_length: usize, fill_value: &str) -> Result<String> {
    match value {
        Some(Value::String(text)) => Ok(resize_str(text, new_length, fill_value)),
        other => {
            let type_name = js_type_of(other);
            warn!("resize called with a {type_name}, only string is supported");
            Err(FormatError::TypeUnsupported { type_name })
        }
    }
}

/// Appends whole copies of `fill_value` while `text` is shorter than `new_length`.
///
/// The result can overshoot `new_length` when `fill_value` is longer than
/// one character. Text longer than `new_length` comes back untouched; use
/// [`truncate_or_pad`] to cut it instead.
pub fn resize_str(text: &str, new_length: usize, fill_value: &str) -> String {
    let length = text.chars().count();
    if length > new_length {
        return text.to_owned();
    }
    pad(text.to_owned(), length, new_length, fill_value)
}

/// Like [`resize_str`], but text longer than `new_length` is cut to `new_length` characters.
pub fn truncate_or_pad(text: &str, new_length: usize, fill_value: &str) -> String {
    let length = text.chars().count();
    if length > new_length {
        return text.chars().take(new_length).collect();
    }
    pad(text.to_owned(), length, new_length, fill_value)
}

fn pad(mut text: String, mut length: usize, new_length: usize, fill_value: &str) -> String {
    let fill_length = fill_value.chars().count();
    if fill_length == 0 {
        // Nothing to append with, padding would never terminate
        return text;
    }

    while length < new_length {
        text.push_str(fill_value);
        length += fill_length;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_make_capital_name() {
        assert_eq!(make_capital_name("hello world"), "Hello World");
        assert_eq!(make_capital_name("a"), "A");
        assert_eq!(make_capital_name(""), "");
        assert_eq!(make_capital_name("already Capital"), "Already Capital");
        assert_eq!(make_capital_name("two  spaces"), "Two  Spaces");
        assert_eq!(make_capital_name("trailing "), "Trailing ");
        assert_eq!(make_capital_name("tab\tseparated"), "Tab\tseparated");
        assert_eq!(make_capital_name("straße ßig"), "Straße SSig");
    }

    #[test]
    fn test_resize_pads() {
        assert_eq!(resize(Some(&json!("ab")), 5, "x").unwrap(), "abxxx");
        assert_eq!(resize(Some(&json!("ab")), 2, "x").unwrap(), "ab");
        assert_eq!(resize(Some(&json!("")), 3, "-").unwrap(), "---");
    }

    #[test]
    fn test_resize_overshoots_with_long_fill() {
        assert_eq!(resize_str("a", 4, "xy"), "axyxy");
    }

    #[test]
    fn test_resize_keeps_longer_text() {
        assert_eq!(resize(Some(&json!("abcdef")), 3, "x").unwrap(), "abcdef");
    }

    #[test]
    fn test_resize_with_empty_fill() {
        assert_eq!(resize_str("ab", 5, ""), "ab");
    }

    #[test]
    fn test_resize_rejects_non_string() {
        assert_eq!(
            resize(Some(&json!(5)), 5, "x"),
            Err(FormatError::TypeUnsupported {
                type_name: "number"
            })
        );
        assert_eq!(
            resize(None, 5, "x"),
            Err(FormatError::TypeUnsupported {
                type_name: "undefined"
            })
        );
    }

    #[test]
    fn test_truncate_or_pad() {
        assert_eq!(truncate_or_pad("abcdef", 3, "x"), "abc");
        assert_eq!(truncate_or_pad("ab", 4, "x"), "abxx");
        assert_eq!(truncate_or_pad("héllo", 2, "x"), "hé");
    }
}
