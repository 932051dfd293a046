use super::Error;

/// Error when the backend cannot be reached or refuses the session.
#[derive(Debug)]
pub(super) enum ConnectionError {
    /// The driver reported a network, handshake or authentication failure.
    Source(Box<dyn std::error::Error + Send + Sync>),

    /// The configured connect timeout elapsed.
    Timeout { seconds: u64 },
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectionError::Source(err) => Some(err.as_ref()),
            ConnectionError::Timeout { .. } => None,
        }
    }
}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("connection failed: ")?;
        match self {
            ConnectionError::Source(err) => super::fmt_source_chain(err.as_ref(), f),
            ConnectionError::Timeout { seconds } => write!(f, "timed out after {seconds}s"),
        }
    }
}

impl Error {
    /// Creates a connection error carrying the driver's native error.
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Connection(ConnectionError::Source(
            Box::new(err),
        )))
    }

    /// Creates a connection error for an elapsed connect timeout.
    pub fn connection_timeout(seconds: u64) -> Error {
        Error::from(super::ErrorKind::Connection(ConnectionError::Timeout {
            seconds,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a connection
    /// error.
    pub fn is_connection(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Connection(_)))
    }
}
