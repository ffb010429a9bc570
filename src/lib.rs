//! jsontree - strict JSON reader producing a typed value tree.
//!
//! Raw JSON text goes in, a [`JsonValue`] tree comes out. The crate is two
//! strictly layered components: a pull-based tokenizer and a
//! one-token-lookahead recursive-descent parser. The parser asks the
//! tokenizer for tokens on demand; the tokenizer knows nothing about the
//! grammar.
//!
//! # Architecture
//!
//! - [`lexer`] - Tokenizer with escape and number handling
//! - [`parser`] - Recursive descent parser and entry points
//! - [`value`] - The JSON value tree
//! - [`error`] - Lex and parse error taxonomy
//! - [`limits`] - Recursion depth limits
//!
//! # Example
//!
//! ```
//! use jsontree::{parse, JsonValue};
//!
//! let value = parse(r#"[{"foo":"bar"},[1,2,3]]"#).unwrap();
//! assert!(value.is_array());
//! assert_eq!(
//!     value
//!         .get_index(0)
//!         .and_then(|v| v.get("foo"))
//!         .and_then(JsonValue::as_str),
//!     Some("bar"),
//! );
//! ```
//!
//! Parsing is all-or-nothing: any lex or grammar failure aborts the call
//! with an error, never a partial tree.

// Library code reports failures through the error types; unwrap/expect/panic
// stay out of non-test code.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod value;

// Re-export commonly used types
pub use error::{LexError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser};
pub use value::JsonValue;
