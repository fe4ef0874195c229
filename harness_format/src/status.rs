use log::warn;
use serde_json::Value;

use crate::{FormatError, Result, format_number, js_type_of};

/// Renders a status value for test output.
///
/// Strings are wrapped in double quotes without escaping, numbers use
/// JavaScript number formatting and `None` renders as `"undefined"`.
/// Null, arrays and objects fail with [`FormatError::UnsupportedType`].
pub fn format_status(status: Option<&Value>) -> Result<String> {
    match status {
        None => Ok("undefined".to_owned()),
        Some(Value::String(text)) => Ok(format!("\"{text}\"")),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(format_number)
            .ok_or(FormatError::UnsupportedType {
                type_name: "number",
            }),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        Some(other) => {
            let type_name = js_type_of(Some(other));
            warn!("unknown status type: {type_name}");
            Err(FormatError::UnsupportedType { type_name })
        }
    }
}
