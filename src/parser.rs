//! Recursive-descent JSON parser.
//!
//! Pulls tokens from the lexer one at a time and builds a [`JsonValue`]
//! tree. The parser holds exactly one token of lookahead; each grammar
//! production assumes the lookahead sits at the start of its construct and
//! consumes required tokens through [`Parser::eat`].
//!
//! The lookahead slot stores `Result<Token, LexError>` rather than failing
//! the moment a pull goes wrong: a lex failure surfaces only when the
//! grammar actually needs that token. Garbage after a complete top-level
//! value is therefore reported as [`ParseError::TrailingInput`] whether or
//! not it lexes, while garbage inside a value still reports the underlying
//! lex failure.

use indexmap::IndexMap;

use crate::error::{LexError, ParseError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::limits::Limits;
use crate::value::JsonValue;

/// JSON parser over a single input string.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Result<Token, LexError>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            limits,
            depth: 0,
        }
    }

    /// Parse the input as exactly one JSON value.
    ///
    /// Non-whitespace content after the value fails with
    /// [`ParseError::TrailingInput`].
    pub fn parse(&mut self) -> Result<JsonValue, ParseError> {
        let value = self.parse_value()?;

        match &self.current {
            Ok(token) if token.kind == TokenKind::Eof => Ok(value),
            _ => Err(ParseError::TrailingInput(self.lexer.token_start())),
        }
    }

    /// The lookahead token, surfacing a stored lex failure.
    fn current(&self) -> Result<&Token, ParseError> {
        match &self.current {
            Ok(token) => Ok(token),
            Err(err) => Err(ParseError::Lex(err.clone())),
        }
    }

    /// Pull the next token into the lookahead slot.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Consume the lookahead if it has the expected kind, returning it and
    /// advancing; otherwise fail with [`ParseError::UnexpectedToken`].
    fn eat(&mut self, expected: TokenKind) -> Result<Token, ParseError> {
        let token = self.current()?;
        if token.kind != expected {
            return Err(ParseError::UnexpectedToken {
                expected: expected.describe(),
                found: token.clone(),
            });
        }
        let token = token.clone();
        self.advance();
        Ok(token)
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        match self.current()?.kind {
            TokenKind::Null => {
                self.eat(TokenKind::Null)?;
                Ok(JsonValue::Null)
            }
            TokenKind::Bool => {
                let token = self.eat(TokenKind::Bool)?;
                Ok(JsonValue::Bool(token.text == "true"))
            }
            TokenKind::Int => {
                let token = self.eat(TokenKind::Int)?;
                match token.text.parse::<i64>() {
                    Ok(n) => Ok(JsonValue::Int(n)),
                    Err(_) => Err(ParseError::NumberOutOfRange(token.text)),
                }
            }
            TokenKind::Float => {
                let token = self.eat(TokenKind::Float)?;
                match token.text.parse::<f64>() {
                    Ok(x) => Ok(JsonValue::Float(x)),
                    Err(_) => Err(ParseError::InvalidNumber(token.text)),
                }
            }
            TokenKind::String => {
                let token = self.eat(TokenKind::String)?;
                Ok(JsonValue::String(token.text))
            }
            TokenKind::LeftBrace => self.parse_object(),
            TokenKind::LeftBracket => self.parse_array(),
            _ => Err(ParseError::UnexpectedToken {
                expected: "a value",
                found: self.current()?.clone(),
            }),
        }
    }

    /// Parse a JSON object.
    ///
    /// Duplicate keys are collapsed: the last value wins.
    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }

        self.eat(TokenKind::LeftBrace)?;

        let mut fields = IndexMap::new();

        // Empty object
        if self.current()?.kind == TokenKind::RightBrace {
            self.eat(TokenKind::RightBrace)?;
            self.depth -= 1;
            return Ok(JsonValue::Object(fields));
        }

        loop {
            let key = self.eat(TokenKind::String)?.text;
            self.eat(TokenKind::Colon)?;
            let value = self.parse_value()?;
            fields.insert(key, value);

            match self.current()?.kind {
                TokenKind::Comma => {
                    self.eat(TokenKind::Comma)?;
                }
                TokenKind::RightBrace => {
                    self.eat(TokenKind::RightBrace)?;
                    break;
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "',' or '}'",
                        found: self.current()?.clone(),
                    })
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Object(fields))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }

        self.eat(TokenKind::LeftBracket)?;

        let mut elements = Vec::new();

        // Empty array
        if self.current()?.kind == TokenKind::RightBracket {
            self.eat(TokenKind::RightBracket)?;
            self.depth -= 1;
            return Ok(JsonValue::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);

            match self.current()?.kind {
                TokenKind::Comma => {
                    self.eat(TokenKind::Comma)?;
                }
                TokenKind::RightBracket => {
                    self.eat(TokenKind::RightBracket)?;
                    break;
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        expected: "',' or ']'",
                        found: self.current()?.clone(),
                    })
                }
            }
        }

        self.depth -= 1;
        Ok(JsonValue::Array(elements))
    }
}

/// Parse a JSON document with the standard limits.
///
/// # Example
///
/// ```
/// use jsontree::{parse, JsonValue};
///
/// let value = parse(r#"{"name":"ada","tags":[1,2]}"#).unwrap();
/// assert_eq!(
///     value.get("name").and_then(JsonValue::as_str),
///     Some("ada"),
/// );
/// ```
pub fn parse(input: &str) -> Result<JsonValue, ParseError> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document with caller-supplied limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<JsonValue, ParseError> {
    let mut parser = Parser::new(input, limits);
    parser.parse()
}
