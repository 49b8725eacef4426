//! Top-level error type for a whole run
//!
//! There is no recoverable channel and nothing is retried: the binary
//! reports the message and exits non-zero.

use std::fmt;
use std::io;

use crate::parser::ParseError;
use crate::scanner::ScanError;

/// Any failure that aborts a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Decode(String),
    Scan(ScanError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "io error: {}", msg),
            Error::Decode(msg) => write!(f, "invalid record set: {}", msg),
            Error::Scan(err) => err.fmt(f),
            Error::Parse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::Scan(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_errors_keep_their_message() {
        let err = Error::from(ScanError::UnrecognizedCharacter {
            character: '#',
            line: 2,
            column: 1,
        });
        assert_eq!(
            err.to_string(),
            "unrecognized character '#' at line 2, column 1"
        );
    }

    #[test]
    fn io_errors_are_wrapped_as_strings() {
        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(matches!(err, Error::Io(_)));
    }
}
