//! The two-phase pipeline: tokenize, then parse if lexing succeeded.

use crate::error::AnalysisError;
use crate::lexer::tokenize;
use crate::parser::{Parsed, Parser};
use crate::statement::{Statement, statements};
use crate::symtab::SymTab;
use crate::token::Token;

/// Outcome of analyzing one piece of source text.
///
/// `tokens` is always populated with whatever the lexer recognized, even
/// when lexing failed part-way, so a client can display it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symtab: SymTab,
    pub outcome: Result<Parsed, AnalysisError>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Character offset to highlight, if the analysis failed.
    ///
    /// An error at end of input points just past the last token.
    pub fn error_offset(&self) -> Option<usize> {
        self.outcome.as_ref().err().map(AnalysisError::offset)
    }

    /// The token list grouped into numbered statements.
    pub fn statements(&self) -> Vec<Statement<'_>> {
        statements(&self.tokens)
    }
}

/// Lexes `text` and, if that succeeds, parses it with a fresh symbol table.
///
/// # Example
/// ```rust
/// # use boolang::{analyze, AnalysisError};
/// let ok = analyze("x := T; y := x and F;");
/// assert!(ok.is_ok());
/// assert!(ok.symtab.is_defined("y"));
///
/// let bad = analyze("x := T; y @ x");
/// assert!(matches!(bad.outcome, Err(AnalysisError::Lex(_))));
/// assert_eq!(bad.error_offset(), Some(10));
/// assert_eq!(bad.tokens.len(), 5);
/// ```
pub fn analyze(text: &str) -> Analysis {
    let stream = tokenize(text);
    let mut symtab = SymTab::new();

    let outcome = match stream.error {
        Some(err) => Err(err.into()),
        None => Parser::new(&stream.tokens, &mut symtab)
            .parse_program()
            .map_err(AnalysisError::from),
    };
    if let Err(err) = &outcome {
        log::debug!("analysis failed: {err}");
    }

    Analysis {
        tokens: stream.tokens,
        symtab,
        outcome,
    }
}
