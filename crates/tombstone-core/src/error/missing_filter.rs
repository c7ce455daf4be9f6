use super::Error;

/// Error when an UPDATE or DELETE has no scoping predicate and unrestricted
/// mutation is not allowed.
///
/// Raised while the statement is built; nothing is sent to the database.
#[derive(Debug)]
pub(super) struct MissingFilterError {
    context: Box<str>,
}

impl std::error::Error for MissingFilterError {}

impl core::fmt::Display for MissingFilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing scoping predicate: {}", self.context)
    }
}

impl Error {
    /// Creates a missing filter error.
    pub fn missing_filter(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingFilter(MissingFilterError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing filter error.
    pub fn is_missing_filter(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingFilter(_))
    }
}
