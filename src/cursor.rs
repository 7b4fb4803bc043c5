//! Source positions, spans and the scanning cursor.
//!
//! Positions are 0-based and counted in characters, so that an offset can be
//! handed to a text widget for highlighting without any byte arithmetic. The
//! [`Cursor`] additionally keeps the byte index it needs for slicing and for
//! running anchored pattern searches.

use std::fmt;

/// A 0-based position in source text.
///
/// `offset` counts characters from the start of the input; `line` and
/// `column` count characters as well. [`Display`](fmt::Display) prints the
/// human-facing 1-based `line:column` form.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based character offset from the start of the input.
    pub offset: usize,
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for
/// `start <= end`.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Pretty-print for diagnostics (human-readable, 1-based).
    #[inline]
    pub fn display(&self) -> String {
        format!("span {} to {}", self.start, self.end)
    }
}

/// Tracks the current scanning position.
///
/// `Cursor` advances over input text, keeping the byte index used for slicing
/// in step with the character-based [`Position`] reported to callers.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    /// Byte index into the input.
    pub pos: usize,
    /// Character position corresponding to `pos`.
    pub position: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by consuming a single character `c`.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.position.offset += 1;
        self.pos += c.len_utf8();
    }

    /// Advance over every character of `s`, returning the span it covered.
    pub fn advance_str(&mut self, s: &str) -> Span {
        let start = self.position;
        s.chars().for_each(|c| self.advance(c));
        Span::new(start, self.position)
    }
}
