//! # Error Handling
//!
//! Provides the `RewriteError` enum used across the rewriting pipeline.

use derive_more::{Display, From};

/// Errors produced while rewriting a Go source file.
///
/// We use `derive_more` for boilerplate.
/// Note: the string-carrying variants are excluded from `From` so that every
/// construction site attaches a message.
#[derive(Debug, Display, From)]
pub enum RewriteError {
    /// Wrapper for standard IO errors (read, create, write).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input could not be parsed as Go source.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The rewritten buffer could not be rendered back to valid Go source.
    #[from(ignore)]
    #[display("Format Error: {_0}")]
    Format(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for RewriteError {}

impl RewriteError {
    /// Prefixes the message with context (a phase name or file path),
    /// keeping the error kind.
    ///
    /// Each pipeline phase wraps its failure exactly once, so callers always
    /// see which phase failed without losing the taxonomy.
    #[must_use]
    pub fn bubble(self, context: &str) -> Self {
        match self {
            Self::Io(e) => {
                let kind = e.kind();
                Self::Io(std::io::Error::new(kind, format!("{}: {}", context, e)))
            }
            Self::Parse(msg) => Self::Parse(format!("{}: {}", context, msg)),
            Self::Format(msg) => Self::Format(format!("{}: {}", context, msg)),
        }
    }
}

/// Helper type alias for Result using RewriteError.
pub type RewriteResult<T> = Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "locked");
        let err: RewriteError = io_err.into();
        assert!(matches!(err, RewriteError::Io(_)));
    }

    #[test]
    fn test_bubble_keeps_io_kind() {
        let err = RewriteError::Io(Error::new(ErrorKind::NotFound, "gone"));
        match err.bubble("failed to read web/models.go") {
            RewriteError::Io(e) => {
                assert_eq!(e.kind(), ErrorKind::NotFound);
                assert_eq!(e.to_string(), "failed to read web/models.go: gone");
            }
            other => panic!("expected Io, got {}", other),
        }
    }

    #[test]
    fn test_bubble_prefixes_parse_message() {
        let err = RewriteError::Parse("syntax error at line 3, column 7".into());
        let bubbled = err.bubble("web/models.go");
        assert_eq!(
            format!("{}", bubbled),
            "Parse Error: web/models.go: syntax error at line 3, column 7"
        );
    }
}
