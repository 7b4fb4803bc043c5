//! Lexer module.
//!
//! Turns source text into a stream of classified [`Token`]s. This is the first
//! stage of the pipeline; its output is consumed by the
//! [`parser`](crate::parser) module.
//!
//! # Overview
//! Each lexeme category is described by a regular expression
//! ([`Category::pattern`]). At every position the lexer skips whitespace and
//! `// ... //` comments, then tries the categories in the fixed priority
//! order of [`Category::ALL`], running each pattern as an anchored search at
//! the current position. The first category that matches wins.
//!
//! Patterns are searched over the whole input with the search range starting
//! at the cursor, so word-boundary assertions see the surrounding characters.
//! That is what makes `Tand` a single identifier instead of `T` + `and`.
//! The boundaries are ASCII word boundaries, so a non-ASCII letter next to a
//! lexeme neither joins nor blocks it.
//!
//! # Errors
//! The first character no category matches stops lexing. The tokens
//! recognized so far are kept and returned together with the [`LexError`].
use crate::cursor::{Cursor, Position};
use crate::error::LexError;
use crate::token::{Category, Token};
use once_cell::sync::Lazy;
use regex_automata::{Anchored, Input, meta::Regex};
use std::iter::FusedIterator;

/// `.` does not match a newline, so a comment never spans lines.
const COMMENT_PATTERN: &str = r"//.*?//";

/// One compiled pattern per category, in [`Category::ALL`] order.
static RULE_REGEXES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|&c| (c, Regex::new(c.pattern()).unwrap()))
        .collect()
});

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(COMMENT_PATTERN).unwrap());

/// Counters collected while lexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Number of tokens produced.
    pub matches: usize,
    /// Number of comments skipped.
    pub comments: usize,
}

/// The result of tokenizing a whole input.
///
/// `error` is `Some` when lexing stopped at an unknown character; `tokens`
/// then holds everything recognized before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub error: Option<LexError>,
}

impl TokenStream {
    /// Returns `true` if the whole input was tokenized.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts into a `Result`, dropping the partial tokens on failure.
    pub fn into_result(self) -> Result<Vec<Token>, LexError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Source-level lexer.
///
/// `Lexer` is an iterator of `Result<Token, LexError>`. It is fused: after
/// the input is exhausted or an error was yielded, it only returns `None`.
///
/// # Lifetimes
/// - `'source`: The lifetime of the input string being tokenized.
///
/// # Example
/// ```rust
/// # use boolang::{Category, Lexer};
/// let mut lexer = Lexer::new("T and F");
/// let first = lexer.next().unwrap().unwrap();
/// assert_eq!(first.category(), Category::Constant);
/// assert_eq!(lexer.count(), 2);
/// ```
pub struct Lexer<'source> {
    input: &'source str,
    cursor: Cursor,
    end_flag: bool,
    stats: LexerStats,
}

impl<'source> Lexer<'source> {
    /// Creates a new [`Lexer`] positioned at the start of `input`.
    pub fn new(input: &'source str) -> Self {
        Self {
            input,
            cursor: Cursor::new(),
            end_flag: false,
            stats: LexerStats::default(),
        }
    }

    /// Current scanning position.
    pub fn position(&self) -> Position {
        self.cursor.position
    }

    pub fn stats(&self) -> LexerStats {
        self.stats.clone()
    }

    /// Runs `re` anchored at the cursor and returns the byte index where the
    /// match ends.
    fn match_at(&self, re: &Regex) -> Option<usize> {
        let input = Input::new(self.input)
            .range(self.cursor.pos..)
            .anchored(Anchored::Yes);
        re.search(&input).map(|m| m.end())
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.input[self.cursor.pos..].chars().next() {
            if c.is_whitespace() {
                self.cursor.advance(c);
                continue;
            }
            let Some(end) = self.match_at(&COMMENT_RE) else {
                break;
            };
            let text = &self.input[self.cursor.pos..end];
            let span = self.cursor.advance_str(text);
            self.stats.comments += 1;
            log::trace!("COMMENT: {:?} at {}", text, span.display());
        }
    }

    /// Retrieves the next token from the input, if available.
    ///
    /// Returns `None` at end of input, and after an error was returned once.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.end_flag {
            return None;
        }
        self.skip_trivia();

        let Some(ch) = self.input[self.cursor.pos..].chars().next() else {
            self.end_flag = true;
            return None;
        };

        for (category, re) in RULE_REGEXES.iter() {
            if let Some(end) = self.match_at(re) {
                let lexeme = &self.input[self.cursor.pos..end];
                let span = self.cursor.advance_str(lexeme);
                self.stats.matches += 1;
                log::trace!(
                    "MATCHED: Category: {:?}, Lexeme: {:?}, Span: {}",
                    category,
                    lexeme,
                    span.display()
                );
                return Some(Ok(Token::new(lexeme, *category, span)));
            }
        }

        self.end_flag = true;
        let err = LexError {
            ch,
            position: self.cursor.position,
        };
        log::debug!("lexing stopped: {err}");
        Some(Err(err))
    }

    /// Tokenizes the entire input.
    ///
    /// Collects tokens until the input is exhausted or the first error.
    pub fn tokenize_all(input: &'source str) -> TokenStream {
        let mut stream = TokenStream::default();
        for item in Lexer::new(input) {
            match item {
                Ok(tok) => stream.tokens.push(tok),
                Err(err) => stream.error = Some(err),
            }
        }
        stream
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `text` into a [`TokenStream`].
///
/// # Example
/// ```rust
/// # use boolang::{tokenize, Category};
/// let stream = tokenize("x @ y");
/// assert_eq!(stream.tokens.len(), 1);
/// assert_eq!(stream.tokens[0].category(), Category::Identifier);
/// let err = stream.error.unwrap();
/// assert_eq!(err.ch, '@');
/// assert_eq!(err.offset(), 2);
/// ```
pub fn tokenize(text: &str) -> TokenStream {
    Lexer::tokenize_all(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(stream: &TokenStream) -> Vec<(&str, Category)> {
        stream
            .tokens
            .iter()
            .map(|t| (t.lexeme(), t.category()))
            .collect()
    }

    #[test]
    fn constants_and_operator() {
        let _ = env_logger::builder().is_test(true).try_init();
        let s = tokenize("T and F");
        assert!(s.is_ok());
        assert_eq!(
            pairs(&s),
            [
                ("T", Category::Constant),
                ("and", Category::Operator),
                ("F", Category::Constant)
            ]
        );
    }

    #[test]
    fn assignment_statement() {
        let s = tokenize("x1 := T;");
        assert!(s.is_ok());
        assert_eq!(
            pairs(&s),
            [
                ("x1", Category::Identifier),
                (":=", Category::Operator),
                ("T", Category::Constant),
                (";", Category::Delimiter)
            ]
        );
    }

    #[test]
    fn unknown_character_stops_lexing() {
        let s = tokenize("x @ y");
        assert_eq!(pairs(&s), [("x", Category::Identifier)]);
        let err = s.error.unwrap();
        assert_eq!(err.ch, '@');
        assert_eq!(err.position, Position::new(2, 0, 2));
    }

    #[test]
    fn whole_word_matching() {
        let s = tokenize("Tand notT F1 android T");
        assert!(s.is_ok());
        assert_eq!(
            pairs(&s),
            [
                ("Tand", Category::Identifier),
                ("notT", Category::Identifier),
                ("F1", Category::Identifier),
                ("android", Category::Identifier),
                ("T", Category::Constant)
            ]
        );
    }

    #[test]
    fn all_keywords_are_operators() {
        let s = tokenize("or xor and not :=");
        assert!(s.tokens.iter().all(|t| t.category() == Category::Operator));
        assert_eq!(s.tokens.len(), 5);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let s = tokenize("AND Or");
        assert_eq!(
            pairs(&s),
            [("AND", Category::Identifier), ("Or", Category::Identifier)]
        );
    }

    #[test]
    fn tokens_without_whitespace() {
        let s = tokenize("a:=(not b)xor(T);");
        assert!(s.is_ok());
        assert_eq!(
            pairs(&s),
            [
                ("a", Category::Identifier),
                (":=", Category::Operator),
                ("(", Category::Parenthesis),
                ("not", Category::Operator),
                ("b", Category::Identifier),
                (")", Category::Parenthesis),
                ("xor", Category::Operator),
                ("(", Category::Parenthesis),
                ("T", Category::Constant),
                (")", Category::Parenthesis),
                (";", Category::Delimiter)
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut lexer = Lexer::new("// set x // x := T; //again// y := x;");
        let toks: Vec<_> = lexer.by_ref().map(Result::unwrap).collect();
        assert_eq!(toks.len(), 8);
        assert_eq!(toks[0].lexeme(), "x");
        assert_eq!(toks[0].offset(), 12);
        assert_eq!(lexer.stats().comments, 2);
        assert_eq!(lexer.stats().matches, 8);
    }

    #[test]
    fn comment_is_non_greedy() {
        let s = tokenize("//a// b //c//");
        assert!(s.is_ok());
        assert_eq!(pairs(&s), [("b", Category::Identifier)]);
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let s = tokenize("x // no end");
        assert_eq!(s.tokens.len(), 1);
        let err = s.error.unwrap();
        assert_eq!(err.ch, '/');
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn comment_does_not_cross_lines() {
        let s = tokenize("// first\n second //");
        let err = s.error.unwrap();
        assert_eq!(err.ch, '/');
        assert_eq!(err.position, Position::new(0, 0, 0));
    }

    #[test]
    fn positions_track_lines_and_characters() {
        let s = tokenize("x := T;\n  y @ z");
        let err = s.error.as_ref().unwrap();
        assert_eq!(err.position, Position::new(12, 1, 4));
        let y = &s.tokens[4];
        assert_eq!(y.lexeme(), "y");
        assert_eq!(y.span().start, Position::new(10, 1, 2));
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let s = tokenize("//é// x ä");
        assert_eq!(s.tokens[0].offset(), 6);
        let err = s.error.unwrap();
        assert_eq!(err.ch, 'ä');
        assert_eq!(err.offset(), 8);
    }

    #[test]
    fn digits_cannot_start_a_lexeme() {
        let s = tokenize("1x");
        assert!(s.tokens.is_empty());
        assert_eq!(s.error.unwrap().ch, '1');
    }

    #[test]
    fn non_ascii_letter_is_not_a_word_character() {
        let s = tokenize("x := Té;");
        assert_eq!(
            pairs(&s),
            [
                ("x", Category::Identifier),
                (":=", Category::Operator),
                ("T", Category::Constant)
            ]
        );
        let err = s.error.unwrap();
        assert_eq!(err.ch, 'é');
        assert_eq!(err.offset(), 6);

        let s = tokenize("ä and");
        assert!(s.tokens.is_empty());
        assert_eq!(s.error.unwrap().ch, 'ä');

        let s = tokenize("//ß//xor");
        assert_eq!(pairs(&s), [("xor", Category::Operator)]);
    }

    #[test]
    fn rules_follow_category_priority() {
        let order: Vec<_> = RULE_REGEXES.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn underscore_breaks_the_word_boundary() {
        // `_` is a word character, so `a` cannot end at a boundary before it.
        let s = tokenize("a_b");
        assert!(s.tokens.is_empty());
        assert_eq!(s.error.unwrap().ch, 'a');
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(tokenize(""), TokenStream::default());
        let s = tokenize(" \t\n // only a comment // \r\n");
        assert!(s.is_ok());
        assert!(s.tokens.is_empty());
    }

    #[test]
    fn lexer_is_fused_after_error() {
        let mut lexer = Lexer::new("a # b");
        assert!(lexer.next().unwrap().is_ok());
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn into_result_drops_partial_tokens() {
        assert_eq!(tokenize("a b").into_result().unwrap().len(), 2);
        assert!(tokenize("a ! b").into_result().is_err());
    }

    #[test]
    fn token_count_equals_lexeme_count() {
        let text = "a := T; b := not a or (a xor F) // done //;";
        let s = tokenize(text);
        assert!(s.is_ok());
        assert_eq!(s.tokens.len(), 15);
    }
}
