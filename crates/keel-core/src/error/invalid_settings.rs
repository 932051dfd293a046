use super::Error;

#[derive(Debug)]
pub(super) struct InvalidSettings {
    message: Box<str>,
}

impl Error {
    /// Creates an error for unusable connection settings.
    pub fn invalid_settings(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSettings(InvalidSettings {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_settings(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidSettings(_)))
    }
}

impl std::fmt::Display for InvalidSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid settings: {}", self.message)
    }
}
