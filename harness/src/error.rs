use harness_format::FormatError;
use thiserror::Error;
#[cfg(feature = "web")]
use wasm_bindgen::JsCast;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a [`DomPlatform`](crate::DomPlatform) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No global `window` object.
    #[error("no global window object")]
    NoWindow,
    /// The window has no `document`.
    #[error("no document object")]
    NoDocument,
    /// The host threw.
    #[error("{0}")]
    Js(String),
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.to_string()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}

/// Any error raised by the harness helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// DOM access failed.
    #[error(transparent)]
    Dom(#[from] DomError),
    /// A formatting helper rejected its input.
    #[error(transparent)]
    Format(#[from] FormatError),
}
