//! DOM helpers for browser test harnesses.
//!
//! Every DOM operation goes through a [`DomPlatform`]: [`WebPlatform`] talks
//! to the browser through `web-sys`, [`MemoryPlatform`] is a deterministic
//! in-memory document for native tests. The DOM-free helpers from
//! `harness_format` are re-exported at the crate root.

mod dom;
mod error;
mod memory;
mod platform;
mod util;

#[cfg(feature = "web")]
pub mod js;
#[cfg(feature = "web")]
pub mod logger;
#[cfg(feature = "web")]
mod web;

pub mod prelude;

pub use dom::{create_element, fire_event, get_closest_element, get_element_width};
pub use error::{DomError, Error, Result};
pub use memory::{MemoryElement, MemoryPlatform, RecordedEvent};
pub use platform::{DomPlatform, EventInit, EventSupport};
pub use util::Util;
#[cfg(feature = "web")]
pub use web::WebPlatform;

pub use harness_format::{
    FormatError, format_number, format_status, get_attr, is_truthy, is_valid_argument,
    js_type_of, make_capital_name, parse_int, resize, resize_str, round, size_to_text,
    truncate_or_pad,
};

pub use harness_format::serde_json;
#[cfg(feature = "web")]
pub use js_sys;
#[cfg(feature = "web")]
pub use wasm_bindgen;
#[cfg(feature = "web")]
pub use web_sys;
