use super::Error;

/// Error when the backend rejects a synthesized DDL statement.
#[derive(Debug)]
pub(super) struct DdlExecutionError {
    sql: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DdlExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DdlExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("DDL execution failed: ")?;
        super::fmt_source_chain(self.inner.as_ref(), f)?;
        write!(f, "; statement=`{}`", self.sql)
    }
}

impl Error {
    /// Creates an error for a DDL statement the backend refused to execute.
    ///
    /// The backend's native error is kept as the source so the caller sees
    /// exactly what the database reported.
    pub fn ddl_execution(
        sql: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::DdlExecution(DdlExecutionError {
            sql: sql.into().into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a DDL
    /// execution error.
    pub fn is_ddl_execution(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DdlExecution(_)))
    }

    /// The statement that failed, if this is a DDL execution error.
    pub fn ddl_statement(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::DdlExecution(err) => Some(&*err.sql),
            _ => None,
        })
    }
}
