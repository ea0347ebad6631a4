//! Error types for the extension traits.
//!
//! Only hard failures live here. Lookups that may legitimately find nothing
//! return `Option` instead.

use thiserror::Error;

/// Result type alias for fallible extension methods
pub type Result<T> = std::result::Result<T, SugarError>;

/// Hard failures raised by the extension traits
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SugarError {
    /// A string operation needed at least one character
    #[error("Cannot capitalize an empty string")]
    EmptyString,

    /// No entry satisfied the lookup predicate
    #[error("No matching element")]
    NoMatchingElement,

    /// Flooring to a multiple of zero is undefined
    #[error("Factor must be non-zero")]
    ZeroFactor,

    /// A float computation overflowed or was fed NaN or infinity
    #[error("Result is not a finite number")]
    NotFinite,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(SugarError::EmptyString.to_string(), "Cannot capitalize an empty string");
        assert_eq!(SugarError::NoMatchingElement.to_string(), "No matching element");
        assert_eq!(SugarError::ZeroFactor.to_string(), "Factor must be non-zero");
        assert_eq!(SugarError::NotFinite.to_string(), "Result is not a finite number");
    }
}
