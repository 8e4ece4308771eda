//! Structural errors of the sizing engine.
//!
//! These mean the caller broke the contract (inconsistent input shape),
//! not that the process conditions are physically out of range; the latter
//! are collected on the result instead.

use thiserror::Error;
use vf_core::CoreError;

pub type SizingResult<T> = Result<T, SizingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Gas/steam input requires gas properties (gamma with molecular weight or normal density)")]
    MissingGasProperties,

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_converts() {
        let err: SizingError = CoreError::InvalidArg { what: "x" }.into();
        assert!(matches!(err, SizingError::Core(_)));
    }
}
