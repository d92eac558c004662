use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use crate::position::Position;

/// What went wrong while parsing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A `{` appeared where a node name was required.
    #[error("Invalid character {{ - expected name.")]
    ExpectedName,
    /// A `}` appeared with no open node to close.
    #[error("Unexpected }} - no matching {{.")]
    UnexpectedClosingBrace,
    /// The document ended with at least one node still open.
    #[error("Finalized parser with incomplete document - expected closing }} to match {{")]
    UnclosedNode,
    /// Input was fed to a parser that had already been finalized.
    #[error("Attempt to continue parsing using finalized parser")]
    ParseAfterFinalize,
    /// `finalize` was called a second time.
    #[error("Attempt to finalize already-finalized parser")]
    FinalizeAfterFinalize,
}

impl ErrorKind {
    /// Whether this is a syntax error in the document, as opposed to misuse
    /// of the parser.
    #[must_use]
    pub const fn is_syntax(self) -> bool {
        matches!(
            self,
            Self::ExpectedName | Self::UnexpectedClosingBrace | Self::UnclosedNode
        )
    }
}

/// The error returned by [`Parser`](crate::Parser) operations.
///
/// Syntax errors carry the position at which they were detected. For
/// [`ErrorKind::UnclosedNode`] that is the position of the `{` left open,
/// not the end of input. Misuse errors carry no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    kind: ErrorKind,
    position: Option<Position>,
}

impl ParserError {
    pub(crate) const fn at(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    pub(crate) const fn misuse(kind: ErrorKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    /// The kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the failure was detected, if it relates to a place in the input.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Whether the error points at a place in the input. True for syntax
    /// errors, false for misuse of a finalized parser.
    #[must_use]
    pub const fn is_positioned(&self) -> bool {
        self.position.is_some()
    }

    /// The message without any position prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(Position { line, column }) => write!(f, "[{line}:{column}] {}", self.kind),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl core::error::Error for ParserError {}
