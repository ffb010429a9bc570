//! Error types for lexing and parsing.
//!
//! Two tiers: [`LexError`] for failures recognizing tokens in the raw input,
//! and [`ParseError`] for grammar and literal-conversion failures. A lex
//! failure reaching the parser is wrapped as [`ParseError::Lex`]. Every error
//! is fatal to the current parse call; there is no recovery mode.

use thiserror::Error;

use crate::lexer::Token;

/// Errors produced by the tokenizer.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached before a string's closing quote.
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    /// Unrecognized character after a backslash, or a non-hex digit inside
    /// a `\uXXXX` escape.
    #[error("invalid escape character {0:?} at byte {1}")]
    InvalidEscape(char, usize),
    /// A `\u` escape that does not denote a Unicode scalar value: an
    /// unpaired surrogate, or a surrogate pair combining out of range.
    #[error("\\u escape does not encode a character (value {0:#06x}) at byte {1}")]
    InvalidUnicodeEscape(u32, usize),
    /// Malformed number literal: a leading zero followed by digits, or a
    /// missing digit after `-`, `.`, or an exponent marker.
    #[error("malformed number starting at byte {0}")]
    InvalidNumber(usize),
    /// A character that cannot begin or continue any token.
    #[error("unexpected character {0:?} at byte {1}")]
    UnexpectedChar(char, usize),
    /// Input ended in the middle of a `true`, `false`, or `null` keyword.
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEndOfInput(usize),
}

/// Errors produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer failed where the grammar needed another token.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// The lookahead token does not fit the grammar at this point.
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken {
        /// What the active production was looking for.
        expected: &'static str,
        /// The token actually seen.
        found: Token,
    },
    /// A complete value was parsed but non-whitespace input remains.
    #[error("trailing content at byte {0}")]
    TrailingInput(usize),
    /// Integer literal that does not fit in an `i64`.
    #[error("integer literal {0:?} out of range")]
    NumberOutOfRange(String),
    /// Number literal the float converter could not handle.
    #[error("malformed number literal {0:?}")]
    InvalidNumber(String),
    /// Arrays and objects nested deeper than the configured limit.
    #[error("nesting depth {0} exceeds the limit of {1}")]
    NestingTooDeep(usize, usize),
}
