//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    /// A length, count or minimum that must be a positive integer was not.
    #[error("Invalid {name}: expected a positive integer, got {value:?}")]
    InvalidArgument { name: &'static str, value: String },
    /// Reading input or writing presenter output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PasswordError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        PasswordError::InvalidArgument {
            name,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PasswordError::invalid("count", 0);
        assert_eq!(
            err.to_string(),
            "Invalid count: expected a positive integer, got \"0\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PasswordError = io.into();
        assert!(matches!(err, PasswordError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: closed");
    }
}
