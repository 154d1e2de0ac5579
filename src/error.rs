// src/error.rs
// =============================================================================
// Error types returned by the link extractor.
//
// Extraction is all-or-nothing: a caller either gets the full, ordered list
// of links or exactly one of these errors. Walking the tree and normalizing
// text cannot fail, so the only failures come from reading the input and from
// the HTML parser.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    /// The byte stream could not be read to completion
    #[error("failed to read HTML input: {0}")]
    Input(#[from] std::io::Error),

    /// The parser could not produce an acceptable tree from the input
    #[error("failed to parse HTML: {message}")]
    Parse { message: String },
}

impl LinkError {
    pub fn parse(message: impl Into<String>) -> Self {
        LinkError::Parse {
            message: message.into(),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, LinkError::Input(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LinkError::Parse { .. })
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts_to_input() {
        let err: LinkError = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated").into();
        assert!(err.is_input());
        assert!(!err.is_parse());
        assert_eq!(err.to_string(), "failed to read HTML input: truncated");
    }

    #[test]
    fn test_parse_error_message() {
        let err = LinkError::parse("Unexpected token");
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "failed to parse HTML: Unexpected token");
    }
}
