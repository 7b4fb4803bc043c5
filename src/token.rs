//! # Tokens
//!
//! This module defines the token type produced by the lexer and consumed by
//! the parser:
//!
//! - [`Category`]: the five-way lexical classification,
//! - [`Token`]: an immutable `(lexeme, category, span)` triple.
//!
//! Tokens are read-only once produced. The span's start offset is what a
//! presentation client uses to highlight a token or an error.
use crate::cursor::Span;
use smartstring::alias::String;
use std::fmt;

/// The lexical category of a [`Token`].
///
/// The declaration order is also the lexer's matching priority: when several
/// categories could match at the same position, the earliest one wins. This
/// is what makes `T` a [`Category::Constant`] rather than an identifier and
/// `and` an [`Category::Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `T` or `F`.
    Constant,
    /// `:=`, `or`, `xor`, `and`, `not`.
    Operator,
    /// A letter followed by letters or digits.
    Identifier,
    /// `(` or `)`.
    Parenthesis,
    /// `;`.
    Delimiter,
}

impl Category {
    /// All categories, in matching priority order.
    pub const ALL: [Category; 5] = [
        Category::Constant,
        Category::Operator,
        Category::Identifier,
        Category::Parenthesis,
        Category::Delimiter,
    ];

    /// Human-readable label used in tables and diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Constant => "Constant",
            Category::Operator => "Operator",
            Category::Identifier => "Identifier",
            Category::Parenthesis => "Parenthesis",
            Category::Delimiter => "Delimiter",
        }
    }

    /// Pattern the lexer runs, anchored at the current position, for this
    /// category.
    ///
    /// Word boundaries are ASCII-only: `[0-9A-Za-z_]` are word characters,
    /// anything non-ASCII is not. So in `Té` the `T` is still a constant and
    /// `é` is what the lexer rejects.
    pub const fn pattern(self) -> &'static str {
        match self {
            Category::Constant => r"(?-u:\b)[TF](?-u:\b)",
            Category::Operator => r":=|(?-u:\b)(?:or|xor|and|not)(?-u:\b)",
            Category::Identifier => r"(?-u:\b)[a-zA-Z][a-zA-Z0-9]*(?-u:\b)",
            Category::Parenthesis => r"[()]",
            Category::Delimiter => r";",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single lexical token.
///
/// # Example
/// ```rust
/// # use boolang::{tokenize, Category};
/// let stream = tokenize("x1 := T;");
/// let tok = &stream.tokens[0];
/// assert_eq!(tok.lexeme(), "x1");
/// assert_eq!(tok.category(), Category::Identifier);
/// assert_eq!(tok.offset(), 0);
/// assert_eq!(stream.tokens[2].offset(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    category: Category,
    span: Span,
}

impl Token {
    pub fn new(lexeme: impl AsRef<str>, category: Category, span: Span) -> Self {
        Self {
            lexeme: String::from(lexeme.as_ref()),
            category,
            span,
        }
    }

    /// The matched source text.
    pub fn lexeme(&self) -> &str {
        self.lexeme.as_str()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Character offset of the token's first character.
    pub fn offset(&self) -> usize {
        self.span.start.offset
    }

    /// Returns `true` if the token has category `category` and text `lexeme`.
    #[inline]
    pub fn is(&self, category: Category, lexeme: &str) -> bool {
        self.category == category && self.lexeme.as_str() == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lexeme, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Position;

    fn sp(start: usize, end: usize) -> Span {
        Span::new(Position::new(start, 0, start), Position::new(end, 0, end))
    }

    #[test]
    fn categories_are_listed_in_priority_order() {
        assert_eq!(Category::ALL[0], Category::Constant);
        assert_eq!(Category::ALL[1], Category::Operator);
        assert_eq!(Category::ALL[2], Category::Identifier);
        assert_eq!(Category::ALL[4], Category::Delimiter);
    }

    #[test]
    fn category_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            ["Constant", "Operator", "Identifier", "Parenthesis", "Delimiter"]
        );
    }

    #[test]
    fn token_accessors_return_values() {
        let t = Token::new("xor", Category::Operator, sp(4, 7));
        assert_eq!(t.lexeme(), "xor");
        assert_eq!(t.category(), Category::Operator);
        assert_eq!(t.offset(), 4);
        assert!(t.is(Category::Operator, "xor"));
        assert!(!t.is(Category::Identifier, "xor"));
    }

    #[test]
    fn token_display_shows_pair() {
        let t = Token::new(";", Category::Delimiter, sp(0, 1));
        assert_eq!(t.to_string(), "(;, Delimiter)");
    }

    #[test]
    fn token_is_cloneable_and_debuggable() {
        let t1 = Token::new("T", Category::Constant, sp(0, 1));
        let t2 = t1.clone();
        assert_eq!(t1, t2);
        assert!(format!("{t1:?}").contains("Token"));
    }
}
