//! Formatting helpers shared by the harness DOM layer and test code.
//!
//! Dynamic values are `serde_json::Value`s. A missing value (JavaScript
//! `undefined`) is `None`, `null` is `Value::Null`.

mod attr;
mod error;
mod number;
mod status;
mod text;
mod value;

pub use attr::get_attr;
pub use error::{FormatError, Result};
pub use number::{format_number, parse_int, round, size_to_text};
pub use status::format_status;
pub use text::{make_capital_name, resize, resize_str, truncate_or_pad};
pub use value::{is_truthy, is_valid_argument, js_type_of};

pub use serde_json;
