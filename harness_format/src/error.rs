use thiserror::Error;

/// Result alias for the formatting helpers.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Input rejected by a formatting helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `format_status` got something that is not undefined, a string, a number or a boolean.
    #[error("unknown status type: {type_name}")]
    UnsupportedType {
        /// `typeof` name of the rejected value.
        type_name: &'static str,
    },
    /// `resize` got something that is not a string.
    #[error("only string is supported, got {type_name}")]
    TypeUnsupported {
        /// `typeof` name of the rejected value.
        type_name: &'static str,
    },
}
