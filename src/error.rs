//! # Error Types
//!
//! There are exactly two kinds of analysis failure:
//!
//! - [`LexError`]: an unrecognized character; lexing halts at it.
//! - [`SyntaxError`]: a grammar violation, including the semantic
//!   "uninitialized variable" and "missing operator" checks.
//!
//! [`AnalysisError`] unifies both for callers that run the whole pipeline.
//! Conversions are derived with `#[from]`, so `?` works across the phases.
use crate::cursor::{Position, Span};
use smartstring::alias::String;
use thiserror::Error;

/// An unrecognized character in the input.
///
/// The tokens recognized before the offending character are still returned
/// by the lexer alongside this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character {ch:?} at offset {} ({position})", .position.offset)]
pub struct LexError {
    /// The character no lexeme category matched.
    pub ch: char,
    /// Where the character starts.
    pub position: Position,
}

impl LexError {
    /// Character offset of the offending character.
    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

/// What rule a [`SyntaxError`] violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expected ';'")]
    ExpectedDelimiter,

    #[error("expected identifier")]
    ExpectedIdentifier,

    #[error("expected ':='")]
    ExpectedAssign,

    #[error("expected ')'")]
    ExpectedCloseParen,

    #[error("expected identifier, constant or parenthesized expression")]
    ExpectedOperand,

    /// An identifier was read before any assignment defined it.
    #[error("variable '{0}' was not initialized")]
    Uninitialized(String),

    /// A statement consisted of a lone identifier or constant.
    #[error("a logical expression must contain at least one operator")]
    MissingOperator,

    /// Operator chains or `(`/`not` nesting went past the parser's depth
    /// limit.
    #[error("expression nested too deeply")]
    TooDeep,
}

/// A grammar or semantic violation found by the parser.
///
/// Parsing stops at the first one. `cursor` is the index of the token at
/// which the error was raised; `span` is that token's span, or `None` when
/// the input ended early. `position` is always set: the start of the
/// offending token, or the end of the last token when the input ended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub cursor: usize,
    pub position: Position,
    pub span: Option<Span>,
}

impl SyntaxError {
    pub fn new(
        kind: SyntaxErrorKind,
        cursor: usize,
        position: Position,
        span: Option<Span>,
    ) -> Self {
        Self {
            kind,
            cursor,
            position,
            span,
        }
    }

    /// Character offset to highlight.
    pub fn offset(&self) -> usize {
        self.position.offset
    }
}

/// Any failure of the lexer-parser pipeline.
///
/// # Example
/// ```rust
/// # use boolang::{AnalysisError, LexError, Position};
/// let underlying = LexError { ch: '@', position: Position::new(2, 0, 2) };
/// let err: AnalysisError = underlying.into();
/// assert!(matches!(err, AnalysisError::Lex(_)));
/// assert_eq!(err.offset(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl AnalysisError {
    /// Character offset a client should highlight.
    pub fn offset(&self) -> usize {
        match self {
            AnalysisError::Lex(e) => e.offset(),
            AnalysisError::Syntax(e) => e.offset(),
        }
    }
}
