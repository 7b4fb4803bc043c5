//! # Parser
//!
//! A recursive-descent parser that validates a token stream against the
//! statement grammar and tracks variable initialization in a [`SymTab`].
//!
//! ```text
//! Program        := StatementList
//! StatementList  := Statement (';' Statement)*
//! Statement      := Assignment | LogicalExpr
//! Assignment     := Identifier ':=' LogicalExpr
//! LogicalExpr    := AndXorChain ( ('or'|'xor'|'and') LogicalExpr )*
//! AndXorChain    := AndChain ( 'xor' AndXorChain )*
//! AndChain       := Atom ( 'and' AndChain )*
//! Atom           := Identifier | Constant | 'not' Atom | '(' LogicalExpr ')'
//! ```
//!
//! ## Behavior highlights
//! - **Precedence** from low to high: `or`, `xor`, `and`, then `not` and
//!   atoms. Each level recurses into itself after its operator, so chains of
//!   the same operator are right-associative.
//! - **Assignments** define their target only after the right-hand side
//!   parsed, so `x := x and T` needs an earlier definition of `x`.
//! - **Identifiers** in expression position must already be defined.
//! - **Bare statements**: a lone identifier or constant followed by `;` or
//!   the end of input is rejected. The check looks one token ahead only, so
//!   `(x);` is accepted.
//! - A trailing `;` after the last statement is optional, and an empty token
//!   list is an empty program.
//! - **Depth**: every rule call counts one level. Past [`MAX_DEPTH`] levels
//!   the parse fails with [`SyntaxErrorKind::TooDeep`] instead of growing
//!   the stack without bound. A long `and` chain costs one level per
//!   operator, a parenthesized group four.
//!
//! No tree is built: the parser only accepts or rejects, stopping at the
//! first error.

use crate::cursor::Position;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::symtab::SymTab;
use crate::token::{Category, Token};

/// Deepest rule nesting accepted before [`SyntaxErrorKind::TooDeep`].
pub const MAX_DEPTH: usize = 512;

/// Summary of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    /// Final cursor; always equal to the number of tokens.
    pub cursor: usize,
    /// Number of statements parsed.
    pub statements: usize,
}

/// Recursive-descent parser over a borrowed token slice.
///
/// The parser owns nothing but its cursor. The symbol table is borrowed so
/// that a host can inspect it afterwards; use [`parse_program`] for a run
/// with a fresh, discarded table.
///
/// # Example
/// ```rust
/// # use boolang::{tokenize, Parser, SymTab};
/// let tokens = tokenize("x := T; y := x and F;").into_result().unwrap();
/// let mut symtab = SymTab::new();
/// let parsed = Parser::new(&tokens, &mut symtab).parse_program().unwrap();
/// assert_eq!(parsed.statements, 2);
/// assert_eq!(parsed.cursor, tokens.len());
/// assert!(symtab.is_defined("x") && symtab.is_defined("y"));
/// ```
pub struct Parser<'t, 's> {
    tokens: &'t [Token],
    pos: usize,
    symtab: &'s mut SymTab,
}

impl<'t, 's> Parser<'t, 's> {
    pub fn new(tokens: &'t [Token], symtab: &'s mut SymTab) -> Self {
        Self {
            tokens,
            pos: 0,
            symtab,
        }
    }

    /// Index of the next token to be consumed.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Parses the whole token list as a program.
    pub fn parse_program(&mut self) -> Result<Parsed, SyntaxError> {
        let statements = self.parse_statement_list()?;
        log::debug!(
            "program accepted: {} statements, {} variables defined",
            statements,
            self.symtab.len()
        );
        Ok(Parsed {
            cursor: self.pos,
            statements,
        })
    }

    #[inline]
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_at(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + n)
    }

    /// Builds an error located at the current token, or just past the last
    /// token at end of input.
    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        let span = self.peek().map(Token::span);
        let position = match span {
            Some(span) => span.start,
            None => self
                .tokens
                .last()
                .map_or(Position::default(), |t| t.span().end),
        };
        SyntaxError::new(kind, self.pos, position, span)
    }

    /// Fails once rule nesting reaches past [`MAX_DEPTH`].
    #[inline]
    fn check_depth(&self, depth: usize) -> Result<(), SyntaxError> {
        if depth > MAX_DEPTH {
            log::debug!("nesting limit hit at token {}", self.pos);
            return Err(self.error(SyntaxErrorKind::TooDeep));
        }
        Ok(())
    }

    /// Consumes the current token if it is the operator `op`.
    fn eat_operator(&mut self, op: &str) -> bool {
        if self.peek().is_some_and(|t| t.is(Category::Operator, op)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_statement_list(&mut self) -> Result<usize, SyntaxError> {
        let mut count = 0;
        while self.pos < self.tokens.len() {
            let start = self.pos;
            self.parse_statement()?;
            count += 1;
            log::debug!("statement {} parsed (tokens {}..{})", count, start, self.pos);

            match self.peek() {
                Some(t) if t.is(Category::Delimiter, ";") => self.pos += 1,
                Some(_) => return Err(self.error(SyntaxErrorKind::ExpectedDelimiter)),
                None => {}
            }
        }
        Ok(count)
    }

    fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        let Some(tok) = self.peek() else {
            return Err(self.error(SyntaxErrorKind::UnexpectedEnd));
        };

        if tok.category() == Category::Identifier
            && self
                .peek_at(1)
                .is_some_and(|t| t.is(Category::Operator, ":="))
        {
            return self.parse_assignment();
        }

        if matches!(tok.category(), Category::Identifier | Category::Constant)
            && self
                .peek_at(1)
                .is_none_or(|t| t.is(Category::Delimiter, ";"))
        {
            return Err(self.error(SyntaxErrorKind::MissingOperator));
        }

        self.parse_logical_expr(0)
    }

    fn parse_assignment(&mut self) -> Result<(), SyntaxError> {
        let target = match self.peek() {
            Some(t) if t.category() == Category::Identifier => t,
            _ => return Err(self.error(SyntaxErrorKind::ExpectedIdentifier)),
        };
        self.pos += 1;

        if !self.eat_operator(":=") {
            return Err(self.error(SyntaxErrorKind::ExpectedAssign));
        }

        self.parse_logical_expr(0)?;

        if self.symtab.define(target.lexeme(), target.span()) {
            log::trace!("defined {:?} at {}", target.lexeme(), target.span().display());
        }
        Ok(())
    }

    fn parse_logical_expr(&mut self, depth: usize) -> Result<(), SyntaxError> {
        self.check_depth(depth)?;
        self.parse_and_xor_chain(depth + 1)?;
        while self.eat_operator("or") || self.eat_operator("xor") || self.eat_operator("and") {
            self.parse_logical_expr(depth + 1)?;
        }
        Ok(())
    }

    fn parse_and_xor_chain(&mut self, depth: usize) -> Result<(), SyntaxError> {
        self.check_depth(depth)?;
        self.parse_and_chain(depth + 1)?;
        while self.eat_operator("xor") {
            self.parse_and_xor_chain(depth + 1)?;
        }
        Ok(())
    }

    fn parse_and_chain(&mut self, depth: usize) -> Result<(), SyntaxError> {
        self.check_depth(depth)?;
        self.parse_atom(depth + 1)?;
        while self.eat_operator("and") {
            self.parse_and_chain(depth + 1)?;
        }
        Ok(())
    }

    fn parse_atom(&mut self, depth: usize) -> Result<(), SyntaxError> {
        self.check_depth(depth)?;
        let Some(tok) = self.peek() else {
            return Err(self.error(SyntaxErrorKind::UnexpectedEnd));
        };

        match tok.category() {
            Category::Identifier => {
                if !self.symtab.is_defined(tok.lexeme()) {
                    return Err(self.error(SyntaxErrorKind::Uninitialized(tok.lexeme().into())));
                }
                self.pos += 1;
                Ok(())
            }
            Category::Constant => {
                self.pos += 1;
                Ok(())
            }
            Category::Operator if tok.lexeme() == "not" => {
                self.pos += 1;
                self.parse_atom(depth + 1)
            }
            Category::Parenthesis if tok.lexeme() == "(" => {
                self.pos += 1;
                self.parse_logical_expr(depth + 1)?;
                match self.peek() {
                    Some(t) if t.is(Category::Parenthesis, ")") => {
                        self.pos += 1;
                        Ok(())
                    }
                    _ => Err(self.error(SyntaxErrorKind::ExpectedCloseParen)),
                }
            }
            _ => Err(self.error(SyntaxErrorKind::ExpectedOperand)),
        }
    }
}

/// Parses `tokens` as a program with a fresh symbol table.
///
/// The table is discarded when the call returns, so repeated calls on the
/// same tokens always give the same result.
///
/// # Example
/// ```rust
/// # use boolang::{parse_program, tokenize, SyntaxErrorKind};
/// let tokens = tokenize("y := x and F;").into_result().unwrap();
/// let err = parse_program(&tokens).unwrap_err();
/// assert_eq!(err.kind, SyntaxErrorKind::Uninitialized("x".into()));
/// assert_eq!(err.to_string(), "variable 'x' was not initialized");
/// ```
pub fn parse_program(tokens: &[Token]) -> Result<Parsed, SyntaxError> {
    let mut symtab = SymTab::new();
    Parser::new(tokens, &mut symtab).parse_program()
}
