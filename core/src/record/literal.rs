// ## 📂 File: `src/record/literal.rs`

//! record/literal.rs
//! Restricted literal-mapping parser and renderer.
//!
//! Grammar (whitespace allowed between tokens):
//!   mapping := '{' [ entry { ',' entry } [ ',' ] ] '}'
//!   entry   := string ':' scalar
//!   scalar  := string | number | 'True' | 'False' | 'None'
//!   string  := '\'' { char | escape } '\''
//!   escape  := '\\' ( '\\' | '\'' | '"' | 'n' | 'r' | 't' | 'x' hex hex )
//!
//! Security notes:
//! - This is a parser, not an evaluator. Names, calls, operators and nested
//!   containers are rejected outright.
//! - Strings are single-quoted only. Double-quoted text is left to the JSON probe,
//!   so `{"a": 1}` is JSON, never a literal mapping.

use std::fmt;

use crate::record::types::{Record, Scalar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Unexpected character (or end of input) at byte offset.
    Unexpected { pos: usize, found: Option<char>, expected: &'static str },

    /// Numeric token that does not fit i64/f64.
    BadNumber { pos: usize, token: String },

    /// The same key appears twice.
    DuplicateKey(String),

    /// Non-whitespace after the closing brace.
    TrailingInput { pos: usize },
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Unexpected { pos, found: Some(c), expected } =>
                write!(f, "unexpected '{}' at {}, expected {}", c, pos, expected),
            LiteralError::Unexpected { pos, found: None, expected } =>
                write!(f, "unexpected end of input at {}, expected {}", pos, expected),
            LiteralError::BadNumber { pos, token } =>
                write!(f, "invalid number '{}' at {}", token, pos),
            LiteralError::DuplicateKey(key) =>
                write!(f, "duplicate key '{}'", key),
            LiteralError::TrailingInput { pos } =>
                write!(f, "trailing input at {}", pos),
        }
    }
}

impl std::error::Error for LiteralError {}

/// Parse a literal mapping such as `{'Test': 1, 'Data': 2.5, 'On': True}`.
pub fn parse_literal_mapping(text: &str) -> Result<Record, LiteralError> {
    let mut cursor = Cursor { src: text, pos: 0 };
    cursor.skip_ws();
    cursor.expect('{', "'{'")?;

    let mut record = Record::new();
    loop {
        cursor.skip_ws();
        if cursor.eat('}') {
            break;
        }

        let key = cursor.string()?;
        cursor.skip_ws();
        cursor.expect(':', "':'")?;
        cursor.skip_ws();
        let value = cursor.scalar()?;
        record
            .insert(key, value)
            .map_err(|e| LiteralError::DuplicateKey(e.0))?;

        cursor.skip_ws();
        if cursor.eat(',') {
            continue;
        }
        cursor.expect('}', "',' or '}'")?;
        break;
    }

    cursor.skip_ws();
    if cursor.pos != text.len() {
        return Err(LiteralError::TrailingInput { pos: cursor.pos });
    }
    Ok(record)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), LiteralError> {
        if self.eat(want) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> LiteralError {
        LiteralError::Unexpected { pos: self.pos, found: self.peek(), expected }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        self.expect('\'', "quoted string")?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.unexpected("closing quote")),
                Some('\'') => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some('\n') => return Err(LiteralError::Unexpected {
                    pos: self.pos - 1,
                    found: Some('\n'),
                    expected: "closing quote",
                }),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, LiteralError> {
        match self.bump() {
            Some('\\') => Ok('\\'),
            Some('\'') => Ok('\''),
            Some('"') => Ok('"'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('x') => {
                let start = self.pos;
                let hex = self.src.get(start..start + 2)
                    .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
                    .ok_or_else(|| self.unexpected("two hex digits"))?;
                let byte = u8::from_str_radix(hex, 16)
                    .map_err(|_| self.unexpected("two hex digits"))?;
                self.pos += 2;
                Ok(char::from(byte))
            }
            _ => Err(self.unexpected("escape sequence")),
        }
    }

    fn scalar(&mut self) -> Result<Scalar, LiteralError> {
        match self.peek() {
            Some('\'') => Ok(Scalar::Str(self.string()?)),
            Some(c) if c == '-' || c == '+' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                    self.bump();
                }
                match &self.src[start..self.pos] {
                    "True" => Ok(Scalar::Bool(true)),
                    "False" => Ok(Scalar::Bool(false)),
                    "None" => Ok(Scalar::None),
                    _ => Err(LiteralError::Unexpected {
                        pos: start,
                        found: Some(c),
                        expected: "True, False or None",
                    }),
                }
            }
            _ => Err(self.unexpected("scalar value")),
        }
    }

    fn number(&mut self) -> Result<Scalar, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.bump();
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '_' => {}
                '.' | 'e' | 'E' => is_float = true,
                '-' | '+' if is_float => {}
                _ => break,
            }
            self.bump();
        }

        let token = &self.src[start..self.pos];
        let cleaned = token.replace('_', "");
        let bad = || LiteralError::BadNumber { pos: start, token: token.to_string() };
        if is_float {
            cleaned.parse::<f64>().map(Scalar::Float).map_err(|_| bad())
        } else {
            cleaned.parse::<i64>().map(Scalar::Int).map_err(|_| bad())
        }
    }
}

/// Render a record in literal mapping form.
/// The output always parses back with [`parse_literal_mapping`] when every float is finite.
pub fn render_mapping(record: &Record) -> String {
    let body: Vec<String> = record
        .iter()
        .map(|(k, v)| format!("{}: {}", quote(k), render_scalar(v)))
        .collect();
    format!("{{{}}}", body.join(", "))
}

pub fn render_scalar(value: &Scalar) -> String {
    match value {
        Scalar::Str(s) => quote(s),
        other => other.canonical_text(),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_mapping() {
        let r = parse_literal_mapping("{'Test': 1, 'Data': 2, 'Sample': 3}").unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.get("Data"), Some(&Scalar::Int(2)));
    }

    #[test]
    fn rejects_expressions() {
        assert!(parse_literal_mapping("{'a': __import__('os')}").is_err());
        assert!(parse_literal_mapping("{'a': 1 + 1}").is_err());
        assert!(parse_literal_mapping("{'a': [1, 2]}").is_err());
    }

    #[test]
    fn rejects_double_quotes() {
        assert!(parse_literal_mapping(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn hex_escape_needs_two_hex_digits() {
        let r = parse_literal_mapping(r"{'a': '\x41\x0f'}").unwrap();
        assert_eq!(r.get("a"), Some(&Scalar::Str("A\u{f}".into())));
        assert!(parse_literal_mapping(r"{'a': '\x+f'}").is_err());
        assert!(parse_literal_mapping(r"{'a': '\x-1'}").is_err());
        assert!(parse_literal_mapping(r"{'a': '\xg0'}").is_err());
        assert!(parse_literal_mapping(r"{'a': '\x4'}").is_err());
    }

    #[test]
    fn render_escapes_quotes() {
        let r = Record::from_pairs([("it's", "a\\b")]).unwrap();
        let text = render_mapping(&r);
        assert_eq!(text, r"{'it\'s': 'a\\b'}");
        assert_eq!(parse_literal_mapping(&text).unwrap(), r);
    }
}
