use serde_json::Value;

use crate::is_truthy;

/// Follows a dot-separated property path such as `"a.b.c"` from `obj`.
///
/// Returns `None` (undefined) when `obj` is falsy, `path` is empty, a
/// property is missing, or a falsy value is reached before the last
/// segment. The final value itself may be falsy.
pub fn get_attr<'a>(obj: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    if !is_truthy(obj) || path.is_empty() {
        return None;
    }

    path.split('.').try_fold(obj?, |current, key| {
        if !is_truthy(Some(current)) {
            return None;
        }
        property(current, key)
    })
}

fn property<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
        _ => None,
    }
}

// Only canonical indices ("0", "12", not "012" or "+1") address array elements.
fn array_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}
