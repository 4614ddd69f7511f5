//! Error handling for the bfc compiler
//!
//! A Brainfuck program can only be malformed in one way: unbalanced loop
//! brackets. Everything else that is not a command is ignored by the
//! lexer, so the error surface stays small.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    #[error("Mismatched ']' at {location}: no open loop to close")]
    UnmatchedLoopEnd { location: SourceLocation },

    #[error("Unclosed '[' at {location}: loop never ends")]
    UnclosedLoop { location: SourceLocation },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompilerError::UnmatchedLoopEnd {
            location: SourceLocation::new(3, 7),
        };
        assert_eq!(
            format!("{}", err),
            "Mismatched ']' at 3:7: no open loop to close"
        );

        let err = CompilerError::UnclosedLoop {
            location: SourceLocation::new(1, 2),
        };
        assert_eq!(format!("{}", err), "Unclosed '[' at 1:2: loop never ends");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CompilerError = io_err.into();
        assert!(matches!(err, CompilerError::IoError { .. }));
    }
}
