use crate::{Error, Result};
use futures::TryFutureExt;
use std::future::Future;

/// Target of the log records produced when a statement fails.
pub const LOG_TARGET: &str = "reloop::errors";

/// Maximum number of bytes of a statement kept by [`truncate_long!`].
pub const STATEMENT_DISPLAY_LEN: usize = 497;

/// Formats the statement cut to at most [`STATEMENT_DISPLAY_LEN`] bytes, ending with `...`
/// when something was dropped.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {{
        let query: &str = $query;
        let mut end = ::std::cmp::min(query.len(), $crate::STATEMENT_DISPLAY_LEN);
        while !query.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}{}",
            query[..end].trim_end(),
            if end < query.len() { "..." } else { "" },
        )
    }};
}

/// Logs the failure of a statement, if any. It does not affect the outcome.
pub fn log_sql_error(error: Option<&Error>, message: impl FnOnce() -> String, sql: &str) {
    if let Some(error) = error {
        log::error!(target: LOG_TARGET, "Failed to execute statement:\n{}", truncate_long!(sql));
        log::error!(target: LOG_TARGET, "{}: {:#}", message(), error);
    }
}

pub trait LogStatementError<T>: Future<Output = Result<T>> + Sized {
    /// Logs the error through [`log_sql_error`] when the future fails, the result is returned
    /// unchanged.
    fn log_statement_error<M>(
        self,
        message: M,
        sql: impl Into<String>,
    ) -> impl Future<Output = Result<T>>
    where
        M: FnOnce() -> String,
    {
        let sql = sql.into();
        self.inspect_err(move |error| log_sql_error(Some(error), message, &sql))
    }
}

impl<T, F: Future<Output = Result<T>>> LogStatementError<T> for F {}

#[cfg(test)]
mod tests {
    #[test]
    fn truncate_long_statements() {
        assert_eq!(truncate_long!("SELECT 1;  "), "SELECT 1;");
        let long = format!("SELECT '{}';", "x".repeat(600));
        let truncated = truncate_long!(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.len(), 497 + 3);
        let wide = "é".repeat(300);
        let truncated = truncate_long!(&wide);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.len(), 496 + 3);
    }
}
