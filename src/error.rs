//! Error types for the relative error aggregator.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing, unreadable or permission-denied
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Line does not hold exactly a makespan and an error value
    #[error("line {line}: expected `<makespan> <error>`, got {content:?}")]
    Format { line: usize, content: String },

    /// Numeric conversion failed
    #[error("line {line}: cannot parse {token:?}: {reason}")]
    Parse {
        line: usize,
        token: String,
        reason: String,
    },

    #[error("line {line}: makespan is zero")]
    DivisionByZero { line: usize },

    /// No records, so the mean is undefined
    #[error("input contains no records")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let error = Error::Format {
            line: 3,
            content: "100".to_string(),
        };
        let error_str = format!("{error}");
        assert!(error_str.contains("line 3"));
        assert!(error_str.contains("\"100\""));
    }

    #[test]
    fn test_parse_error_message() {
        let error = Error::Parse {
            line: 7,
            token: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        let error_str = format!("{error}");
        assert!(error_str.contains("line 7"));
        assert!(error_str.contains("abc"));
        assert!(error_str.contains("invalid float literal"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{error}").contains("IO error"));
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(format!("{}", Error::EmptyInput), "input contains no records");
    }
}
