//! Grouping of a token list into numbered statements, for tabular display.

use crate::token::{Category, Token};

/// One `;`-terminated run of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement<'t> {
    /// 1-based statement number.
    pub number: usize,
    /// The statement's tokens, including its terminating `;` if any.
    pub tokens: &'t [Token],
}

impl Statement<'_> {
    /// Display label such as `Statement 2`.
    ///
    /// A statement made only of its delimiter has an empty label.
    pub fn label(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("Statement {}", self.number)
        }
    }

    /// Returns `true` if the statement has no tokens besides its delimiter.
    pub fn is_empty(&self) -> bool {
        self.body().is_empty()
    }

    /// Tokens without the terminating delimiter.
    pub fn body(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, body)) if last.category() == Category::Delimiter => body,
            _ => self.tokens,
        }
    }
}

/// Splits `tokens` after every delimiter.
///
/// # Example
/// ```rust
/// # use boolang::{statements, tokenize};
/// let tokens = tokenize("x := T; x or F").into_result().unwrap();
/// let stmts = statements(&tokens);
/// assert_eq!(stmts.len(), 2);
/// assert_eq!(stmts[0].tokens.len(), 4);
/// assert_eq!(stmts[1].label(), "Statement 2");
/// ```
pub fn statements(tokens: &[Token]) -> Vec<Statement<'_>> {
    tokens
        .split_inclusive(|t| t.category() == Category::Delimiter)
        .enumerate()
        .map(|(i, tokens)| Statement {
            number: i + 1,
            tokens,
        })
        .collect()
}
