use super::Error;

/// Error when a statement fails to execute.
///
/// Carries the offending SQL text. The underlying driver or pool failure is
/// chained as the cause, so a query error is usually built as
/// `cause.context(Error::query_execution(sql))`.
#[derive(Debug)]
pub(super) struct QueryExecutionError {
    sql: Box<str>,
}

impl QueryExecutionError {
    pub(super) fn sql(&self) -> &str {
        &self.sql
    }
}

impl std::error::Error for QueryExecutionError {}

impl core::fmt::Display for QueryExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "query failed `{}`", self.sql)
    }
}

impl Error {
    /// Creates a query execution error for the given SQL text.
    pub fn query_execution(sql: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::QueryExecution(QueryExecutionError {
            sql: sql.into().into(),
        }))
    }

    /// Returns `true` if this error is a query execution error.
    pub fn is_query_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::QueryExecution(_))
    }
}
