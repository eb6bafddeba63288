use thiserror::Error;

/// Category of an expected failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-supplied input failed a precondition
    Validation,
    /// Referenced entity does not exist
    NotFound,
    /// Infrastructure failure, never caused by the caller
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }

    /// Build an error from a bare message.
    ///
    /// The kind is inferred from the text: anything mentioning "not found"
    /// (in any case) is a [`ErrorKind::NotFound`], everything else is a
    /// [`ErrorKind::Validation`].
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.to_lowercase().contains("not found") {
            Self::not_found(message)
        } else {
            Self::validation(message)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Success/failure queries and fail-fast accessors for [`DomainResult`].
///
/// `value` and `error` treat a mismatched state as a programming error and
/// panic instead of substituting a default.
pub trait Outcome<T> {
    fn is_success(&self) -> bool;
    fn is_failure(&self) -> bool;
    fn value(self) -> T;
    fn error(&self) -> &str;
}

impl<T> Outcome<T> for DomainResult<T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_failure(&self) -> bool {
        self.is_err()
    }

    #[track_caller]
    fn value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("Cannot access value of a failed result: {}", err),
        }
    }

    #[track_caller]
    fn error(&self) -> &str {
        match self {
            Ok(_) => panic!("Cannot access error of a successful result"),
            Err(err) => err.message(),
        }
    }
}
