use serde_json::Value;

/// `typeof` name of a value, `"undefined"` for `None`.
///
/// `null`, arrays and objects all report `"object"`, as in JavaScript.
pub fn js_type_of(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
    }
}

/// JavaScript truthiness: undefined, null, false, 0, NaN and "" are falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number
            .as_f64()
            .is_some_and(|number| number != 0.0 && !number.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// True unless the argument is undefined or null.
pub fn is_valid_argument(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid_argument() {
        assert!(!is_valid_argument(None));
        assert!(!is_valid_argument(Some(&Value::Null)));

        // Falsy values are still valid arguments
        assert!(is_valid_argument(Some(&json!(0))));
        assert!(is_valid_argument(Some(&json!(false))));
        assert!(is_valid_argument(Some(&json!(""))));
        assert!(is_valid_argument(Some(&json!({}))));
        assert!(is_valid_argument(Some(&json!([]))));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(""))));

        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(-1))));
        assert!(is_truthy(Some(&json!("0"))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn test_js_type_of() {
        assert_eq!(js_type_of(None), "undefined");
        assert_eq!(js_type_of(Some(&Value::Null)), "object");
        assert_eq!(js_type_of(Some(&json!([1]))), "object");
        assert_eq!(js_type_of(Some(&json!(1.5))), "number");
        assert_eq!(js_type_of(Some(&json!("x"))), "string");
        assert_eq!(js_type_of(Some(&json!(true))), "boolean");
    }
}
