//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # boolang
//!
//! Lexer and parser for a small language of boolean assignment statements:
//!
//! ```text
//! // flags // a := T; b := not a or (a xor F); a and b;
//! ```
//!
//! The crate turns source text into a classified token stream and validates
//! that stream against the grammar, reporting the first lexical or syntactic
//! error. Nothing is evaluated: assignment only records that a variable has
//! been defined, and reading a variable that was never assigned is an error.
//!
//! ## Overview
//!
//! - [`lexer`]: tokenizes text into [`Token`]s with a [`Category`] and a
//!   [`Span`], stopping at the first unknown character.
//! - [`parser`]: recursive-descent validation with a [`SymTab`] tracking
//!   which variables are defined.
//! - [`symtab`]: the flat table of defined names.
//! - [`statement`]: groups tokens into numbered statements for display.
//! - [`analysis`]: runs both phases the way a presentation client would.
//!
//! ## Example
//!
//! ```rust
//! use boolang::{tokenize, parse_program, Category};
//!
//! let stream = tokenize("x1 := T;");
//! assert!(stream.is_ok());
//! let cats: Vec<_> = stream.tokens.iter().map(|t| t.category()).collect();
//! assert_eq!(
//!     cats,
//!     [Category::Identifier, Category::Operator, Category::Constant, Category::Delimiter]
//! );
//! assert!(parse_program(&stream.tokens).is_ok());
//! ```
pub mod analysis;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod statement;
pub mod symtab;
pub mod token;

pub use analysis::{Analysis, analyze};
pub use cursor::{Position, Span};
pub use error::{AnalysisError, LexError, SyntaxError, SyntaxErrorKind};
pub use lexer::{Lexer, LexerStats, TokenStream, tokenize};
pub use parser::{Parsed, Parser, parse_program};
pub use statement::{Statement, statements};
pub use symtab::SymTab;
pub use token::{Category, Token};
