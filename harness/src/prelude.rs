//! Common imports for harness tests.

pub use crate::{
    DomPlatform, EventSupport, MemoryPlatform, Util, format_status, get_attr, is_valid_argument,
    make_capital_name, resize, round, size_to_text,
};

#[cfg(feature = "web")]
pub use crate::WebPlatform;
