//! Lenient parser for AnyScript value expressions.
//!
//! AnyBody prints values like `{1.0, nan, 3.0}` or `{...}` that no standard
//! literal grammar accepts. [`parse_literal`] normalizes the text in layers,
//! attempting a strict parse after each one:
//!
//! 1. `{`/`}` braces are rewritten to `[`/`]`; an elided `[...]` becomes the
//!    string `"..."`.
//! 2. Strict parse.
//! 3. If the text contains `nan,`, each one is quoted, the text is parsed
//!    again and the `"nan"` strings are turned back into `f64::NAN`.
//! 4. Every bare token is wrapped in `'''` quotes and the text is parsed a
//!    last time. Only this pass can fail the call.
//!
//! The strict grammar accepts only numbers, quoted strings, `None` and nested
//! bracketed lists. Nothing is ever evaluated.

use crate::points::Point;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::trace;

/// Deepest array nesting the strict grammar accepts.
pub const MAX_DEPTH: usize = 200;

/// A parsed AnyScript value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The `None` keyword; what empty input turns into.
    None,
    /// Any number. Integers are widened to `f64`.
    Scalar(f64),
    /// Opaque text: quoted strings, bare tokens, `...` placeholders.
    Str(String),
    Array(Vec<Literal>),
}

impl Literal {
    /// Numeric value of a scalar, or of a string holding a number.
    ///
    /// Strings count because the last-resort pass quotes every bare token,
    /// numbers included.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Scalar(v) => Some(*v),
            Literal::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The point this value describes, if it is a flat 3-element array.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Literal::Array(items) if items.len() == 3 => Some(Point::new(
                items[0].as_f64()?,
                items[1].as_f64()?,
                items[2].as_f64()?,
            )),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Literal]> {
        match self {
            Literal::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Error from the strict literal grammar.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LiteralError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("unexpected {found:?} at offset {offset}, expected {expected}")]
    UnexpectedChar {
        found: char,
        offset: usize,
        expected: &'static str,
    },

    #[error("invalid number {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unknown name {name:?} at offset {offset}")]
    UnknownName { name: String, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("arrays nested deeper than {MAX_DEPTH} levels at offset {offset}")]
    TooDeep { offset: usize },
}

/// Parse one AnyScript value expression, falling back to ever more
/// permissive rewrites before giving up.
pub fn parse_literal(text: &str) -> Result<Literal, LiteralError> {
    let mut text = Cow::Borrowed(text);
    if text.starts_with('{') && text.ends_with('}') {
        text = Cow::Owned(text.replace('{', "[").replace('}', "]"));
    }
    if text == "[...]" {
        text = Cow::Borrowed("\"...\"");
    }

    match parse_strict(&text) {
        Ok(value) => return Ok(value),
        Err(err) => trace!(%err, "strict literal parse failed"),
    }

    if text.contains("nan,") {
        let patched = text.replace("nan,", " \"nan\",");
        match parse_strict(&patched) {
            Ok(value) => return Ok(replace_nan_placeholders(value)),
            Err(err) => trace!(%err, "nan-patched literal parse failed"),
        }
    }

    parse_strict(&quote_bare_tokens(&text))
}

/// Parse `source` with the strict grammar only.
pub fn parse_strict(source: &str) -> Result<Literal, LiteralError> {
    let mut parser = LiteralParser::new(source);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(value),
        Some(found) => Err(LiteralError::UnexpectedChar {
            found,
            offset: parser.pos,
            expected: "end of input",
        }),
    }
}

/// Replace every `"nan"` string, at any depth, with `f64::NAN`.
fn replace_nan_placeholders(value: Literal) -> Literal {
    match value {
        Literal::Array(items) => {
            Literal::Array(items.into_iter().map(replace_nan_placeholders).collect())
        }
        Literal::Str(s) if s == "nan" => Literal::Scalar(f64::NAN),
        other => other,
    }
}

/// Runs of characters that are not brackets, double quotes, commas or
/// whitespace. Changing this class changes which tokens end up as strings.
fn bare_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[^\[\]",\s]+"#).unwrap())
}

fn quote_bare_tokens(text: &str) -> String {
    let quoted = bare_token().replace_all(text, "'''${0}'''");
    if quoted.is_empty() {
        return "None".to_string();
    }
    if quoted.starts_with('"') && quoted.ends_with('"') {
        let inner = if quoted.len() > 1 {
            &quoted[1..quoted.len() - 1]
        } else {
            ""
        };
        return format!("'''{inner}'''");
    }
    quoted.into_owned()
}

/// Recursive-descent parser over the strict literal grammar.
struct LiteralParser<'a> {
    source: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self, expected: &'static str) -> LiteralError {
        match self.peek() {
            Some(found) => LiteralError::UnexpectedChar {
                found,
                offset: self.pos,
                expected,
            },
            None => LiteralError::UnexpectedEof { expected },
        }
    }

    fn parse_value(&mut self) -> Result<Literal, LiteralError> {
        match self.peek() {
            Some('[') => self.parse_array(),
            Some('"' | '\'') => self.parse_strings(),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number()
            }
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_name(),
            _ => Err(self.unexpected("a value")),
        }
    }

    fn parse_array(&mut self) -> Result<Literal, LiteralError> {
        if self.depth == MAX_DEPTH {
            return Err(LiteralError::TooDeep { offset: self.pos });
        }
        self.depth += 1;
        let result = self.parse_array_items();
        self.depth -= 1;
        result
    }

    fn parse_array_items(&mut self) -> Result<Literal, LiteralError> {
        self.bump(); // [
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(']') {
                self.bump();
                return Ok(Literal::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(Literal::Array(items));
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };
        self.skip_whitespace();

        let digits_start = self.pos;
        let mut mantissa_digits = 0;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            mantissa_digits += 1;
        }
        if self.peek() == Some('.') {
            self.bump();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
                mantissa_digits += 1;
            }
        }
        if mantissa_digits == 0 {
            return Err(self.unexpected("a number"));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_start = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos = exponent_start;
                return Err(self.unexpected("an exponent"));
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump();
            }
        }
        // `1.0.0`, `1abc`
        if self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            return Err(LiteralError::InvalidNumber {
                text: self.source[start..].to_string(),
                offset: start,
            });
        }

        let text = &self.source[digits_start..self.pos];
        let value: f64 = text.parse().map_err(|_| LiteralError::InvalidNumber {
            text: text.to_string(),
            offset: digits_start,
        })?;
        Ok(Literal::Scalar(if negative { -value } else { value }))
    }

    fn parse_name(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.source[start..self.pos] {
            "None" => Ok(Literal::None),
            name => Err(LiteralError::UnknownName {
                name: name.to_string(),
                offset: start,
            }),
        }
    }

    /// One or more adjacent string literals, concatenated.
    fn parse_strings(&mut self) -> Result<Literal, LiteralError> {
        let mut text = self.parse_string()?;
        loop {
            self.skip_whitespace();
            if !matches!(self.peek(), Some('"' | '\'')) {
                return Ok(Literal::Str(text));
            }
            text.push_str(&self.parse_string()?);
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let start = self.pos;
        let Some(quote) = self.bump() else {
            return Err(LiteralError::UnexpectedEof {
                expected: "a string",
            });
        };
        let pair = if quote == '"' { "\"\"" } else { "''" };
        let triple = self.rest().starts_with(pair);
        if triple {
            self.bump();
            self.bump();
        }

        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(LiteralError::UnterminatedString { offset: start });
            };
            match c {
                '\\' => {
                    let Some(escaped) = self.bump() else {
                        return Err(LiteralError::UnterminatedString { offset: start });
                    };
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        '0' => out.push('\0'),
                        '\\' | '\'' | '"' => out.push(escaped),
                        '\n' => {}
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                c if c == quote && !triple => return Ok(out),
                c if c == quote && self.rest().starts_with(pair) => {
                    self.bump();
                    self.bump();
                    return Ok(out);
                }
                '\n' if !triple => {
                    return Err(LiteralError::UnterminatedString { offset: start });
                }
                c => out.push(c),
            }
        }
    }
}
