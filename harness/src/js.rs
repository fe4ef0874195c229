//! The formatting helpers applied to raw `JsValue`s.
//!
//! These follow the same rules as the `serde_json` based helpers in
//! `harness_format`, with `JsValue::UNDEFINED` standing in for `None`.

use harness_format::{FormatError, format_number, resize_str};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `Object(value)` boxes primitives and hands objects back unchanged.
    #[wasm_bindgen(js_name = Object)]
    fn to_object(value: &JsValue) -> Object;
}

/// `typeof` name of a JS value.
pub fn type_of(value: &JsValue) -> &'static str {
    if value.is_undefined() {
        "undefined"
    } else if value.as_string().is_some() {
        "string"
    } else if value.as_f64().is_some() {
        "number"
    } else if value.as_bool().is_some() {
        "boolean"
    } else if value.is_function() {
        "function"
    } else if value.is_symbol() {
        "symbol"
    } else if value.is_bigint() {
        "bigint"
    } else {
        "object"
    }
}

/// True unless the value is undefined or null.
pub fn is_valid_argument(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

/// See [`harness_format::format_status`].
pub fn format_status(status: &JsValue) -> Result<String, FormatError> {
    if status.is_undefined() {
        return Ok("undefined".to_owned());
    }
    if let Some(text) = status.as_string() {
        return Ok(format!("\"{text}\""));
    }
    if let Some(number) = status.as_f64() {
        return Ok(format_number(number));
    }
    if let Some(flag) = status.as_bool() {
        return Ok(flag.to_string());
    }

    let type_name = type_of(status);
    log::warn!("unknown status type: {type_name}");
    Err(FormatError::UnsupportedType { type_name })
}

/// Walks a dot-separated property path; `JsValue::UNDEFINED` when a falsy
/// value is reached before the path ends.
///
/// Truthy primitives resolve like property access does in JavaScript, so
/// `"s.length"` on `{ s: "abc" }` is `3`. Errors thrown by getters are
/// returned as `Err`.
pub fn get_attr(obj: &JsValue, path: &str) -> Result<JsValue, JsValue> {
    if obj.is_falsy() || path.is_empty() {
        return Ok(JsValue::UNDEFINED);
    }

    let mut current = obj.clone();
    for key in path.split('.') {
        if current.is_falsy() {
            return Ok(JsValue::UNDEFINED);
        }
        current = Reflect::get(&to_object(&current), &JsValue::from_str(key))?;
    }
    Ok(current)
}

/// See [`harness_format::resize`].
pub fn resize(value: &JsValue, new_length: usize, fill_value: &str) -> Result<String, FormatError> {
    match value.as_string() {
        Some(text) => Ok(resize_str(&text, new_length, fill_value)),
        None => {
            let type_name = type_of(value);
            log::warn!("resize called with a {type_name}, only string is supported");
            Err(FormatError::TypeUnsupported { type_name })
        }
    }
}
