use std::str::Utf8Error;
use thiserror::Error;

pub type Il2CppResult<T> = anyhow::Result<T, Il2CppError>;

/// Errors surfaced by the metadata wrappers.
///
/// Unrecognized type tags are deliberately *not* an error: signature derivation
/// degrades to a pointer representation and logs a warning instead, since a newer
/// runtime may carry tags this crate has never seen.
#[derive(Error, Debug)]
pub enum Il2CppError {
    #[error("null handle encountered")]
    NullHandle,

    #[error("UTF-8 conversion error: {0}")]
    Utf8Conversion(#[from] Utf8Error),

    #[error("external error: {0}")]
    External(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_message() {
        assert_eq!(
            Il2CppError::NullHandle.to_string(),
            "null handle encountered"
        );
    }

    #[test]
    fn utf8_error_converts() {
        let bad = std::str::from_utf8(&[0x80]).unwrap_err();
        let err: Il2CppError = bad.into();
        assert!(matches!(err, Il2CppError::Utf8Conversion(_)));
    }
}
