//! Adapters from the "(value, error)" completion shape to `Result`.
use crate::{Error, Result};

/// Always propagates `error`.
pub fn rethrow<R>(error: Error) -> Result<R> {
    Err(error)
}

/// Propagates `error` if present, otherwise succeeds with no value.
pub fn return_null_or_rethrow<R>(error: Option<Error>) -> Result<Option<R>> {
    match error {
        Some(error) => Err(error),
        None => Ok(None),
    }
}

/// Propagates `error` if present, otherwise succeeds with `result`.
pub fn return_or_rethrow<R>(error: Option<Error>, result: R) -> Result<R> {
    match error {
        Some(error) => Err(error),
        None => Ok(result),
    }
}
