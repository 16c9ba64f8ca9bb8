//! JSON parser — builds a [`Value`] tree from RFC 8259 text.
//!
//! A hand-written recursive-descent parser walking the input bytes
//! directly. Every error carries the 0-based byte offset where it was
//! detected. Behavior worth knowing:
//!
//! - **Integer literals** (no fraction, no exponent) become [`Integer`]s
//!   with the narrowest width and signedness that exactly represents the
//!   literal: `5` is an 8-bit signed integer, `200` an 8-bit unsigned one,
//!   `40000` a 16-bit unsigned one, and so on up to 64 bits. Literals
//!   beyond 64-bit range fall back to `Double`.
//! - **Duplicate keys** in an object follow [`Map::append`]: the last
//!   value wins, at the first occurrence's position.
//! - **Nesting** beyond [`MAX_DEPTH`] levels is rejected rather than
//!   risking a stack overflow on adversarial input.
//! - Trailing text after the document, raw control characters in strings,
//!   unpaired surrogates, and leading zeros are all rejected.

use std::fs;
use std::path::Path;

use crate::array::Array;
use crate::double::Double;
use crate::error::{DynonError, Result};
use crate::integer::Integer;
use crate::map::Map;
use crate::value::Value;

/// Maximum container nesting the parser accepts.
pub const MAX_DEPTH: usize = 128;

/// Parse a JSON document from text.
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser::new(text);
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.fail("trailing characters after the document"));
    }
    Ok(value)
}

/// Read `path` and parse it as a JSON document.
///
/// A file that cannot be read (missing, unreadable, or not UTF-8) fails
/// with [`DynonError::Io`]; a readable file with malformed content fails
/// with [`DynonError::Parse`]. Callers can tell the two apart.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DynonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn fail(&self, message: impl Into<String>) -> DynonError {
        self.fail_at(self.pos, message)
    }

    fn fail_at(&self, position: usize, message: impl Into<String>) -> DynonError {
        DynonError::Parse {
            position,
            message: message.into(),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.fail("unexpected end of input")),
            Some(b'{') => self.parse_map(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b't') => self.parse_keyword("true", Value::Boolean(true)),
            Some(b'f') => self.parse_keyword("false", Value::Boolean(false)),
            Some(b'n') => self.parse_keyword("null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.fail("expected a value")),
        }
    }

    fn parse_keyword(&mut self, keyword: &str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(keyword.as_bytes()) {
            self.pos += keyword.len();
            Ok(value)
        } else {
            Err(self.fail(format!("expected '{keyword}'")))
        }
    }

    fn parse_map(&mut self, depth: usize) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(self.fail("nesting depth limit exceeded"));
        }
        self.advance(); // consumes '{'
        let mut map = Map::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.advance();
            return Ok(Value::Map(map));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.fail("expected a string key"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.fail("expected ':' after key"));
            }
            self.advance();
            let value = self.parse_value(depth + 1)?;
            map.append(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b'}') => {
                    self.advance();
                    return Ok(Value::Map(map));
                }
                _ => return Err(self.fail("expected ',' or '}' in map")),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(self.fail("nesting depth limit exceeded"));
        }
        self.advance(); // consumes '['
        let mut array = Array::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.advance();
            return Ok(Value::Array(array));
        }
        loop {
            let value = self.parse_value(depth + 1)?;
            array.append(value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.advance();
                }
                Some(b']') => {
                    self.advance();
                    return Ok(Value::Array(array));
                }
                _ => return Err(self.fail("expected ',' or ']' in array")),
            }
        }
    }

    /// Parse a quoted string. Unescaped runs are copied span-wise; escapes
    /// are decoded one char at a time. The input is already valid UTF-8 and
    /// every stopping byte is ASCII, so span boundaries are char
    /// boundaries.
    fn parse_string(&mut self) -> Result<String> {
        self.advance(); // consumes '"'
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.fail("unterminated string")),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.advance();
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.advance();
                    let decoded = self.parse_escape()?;
                    out.push(decoded);
                    run_start = self.pos;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.fail("raw control character in string"));
                }
                Some(_) => {
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.advance() {
            None => Err(self.fail("unterminated escape sequence")),
            Some(b'"') => Ok('"'),
            Some(b'\\') => Ok('\\'),
            Some(b'/') => Ok('/'),
            Some(b'b') => Ok('\u{0008}'),
            Some(b'f') => Ok('\u{000C}'),
            Some(b'n') => Ok('\n'),
            Some(b'r') => Ok('\r'),
            Some(b't') => Ok('\t'),
            Some(b'u') => self.parse_unicode_escape(),
            Some(_) => Err(self.fail_at(self.pos - 1, "unknown escape character")),
        }
    }

    /// Decode `\uXXXX`, pairing surrogates into a single scalar value.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let start = self.pos - 2;
        let unit = self.parse_hex4()?;
        if (0xD800..=0xDBFF).contains(&unit) {
            if self.advance() != Some(b'\\') || self.advance() != Some(b'u') {
                return Err(self.fail_at(start, "unpaired surrogate in \\u escape"));
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.fail_at(start, "invalid low surrogate in \\u escape"));
            }
            let code = 0x10000 + ((unit as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
            return char::from_u32(code).ok_or_else(|| self.fail_at(start, "invalid \\u escape"));
        }
        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(self.fail_at(start, "unpaired surrogate in \\u escape"));
        }
        char::from_u32(unit as u32).ok_or_else(|| self.fail_at(start, "invalid \\u escape"))
    }

    fn parse_hex4(&mut self) -> Result<u16> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let digit = match self.advance() {
                Some(b @ b'0'..=b'9') => (b - b'0') as u16,
                Some(b @ b'a'..=b'f') => (b - b'a' + 10) as u16,
                Some(b @ b'A'..=b'F') => (b - b'A' + 10) as u16,
                _ => return Err(self.fail("expected four hex digits in \\u escape")),
            };
            code = (code << 4) | digit;
        }
        Ok(code)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.advance();
        }
        match self.peek() {
            Some(b'0') => {
                self.advance();
                if matches!(self.peek(), Some(b'0'..=b'9')) {
                    return Err(self.fail("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.advance();
                }
            }
            _ => return Err(self.fail("expected a digit in number")),
        }

        let mut is_double = false;
        if self.peek() == Some(b'.') {
            is_double = true;
            self.advance();
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.fail("expected a digit after the decimal point"));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            is_double = true;
            self.advance();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.advance();
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.fail("expected a digit in exponent"));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.advance();
            }
        }

        let literal = &self.text[start..self.pos];
        if !is_double {
            // Integer literals beyond the 64-bit range of their sign fall
            // through to the double path below.
            if negative {
                if let Ok(n) = literal.parse::<i64>() {
                    return Ok(Value::Integer(narrowest_signed(n)));
                }
            } else if let Ok(magnitude) = literal.parse::<u64>() {
                return Ok(Value::Integer(narrowest_unsigned(magnitude)));
            }
        }
        let parsed: f64 = literal
            .parse()
            .map_err(|_| self.fail_at(start, "invalid number"))?;
        if !parsed.is_finite() {
            return Err(self.fail_at(start, "number out of range"));
        }
        Ok(Value::Double(Double::new(parsed)))
    }
}

/// The narrowest declared type for a non-negative literal, preferring the
/// signed type at each width: i8, u8, i16, u16, i32, u32, i64, u64.
fn narrowest_unsigned(magnitude: u64) -> Integer {
    if magnitude <= i8::MAX as u64 {
        Integer::from(magnitude as i8)
    } else if magnitude <= u8::MAX as u64 {
        Integer::from(magnitude as u8)
    } else if magnitude <= i16::MAX as u64 {
        Integer::from(magnitude as i16)
    } else if magnitude <= u16::MAX as u64 {
        Integer::from(magnitude as u16)
    } else if magnitude <= i32::MAX as u64 {
        Integer::from(magnitude as i32)
    } else if magnitude <= u32::MAX as u64 {
        Integer::from(magnitude as u32)
    } else if magnitude <= i64::MAX as u64 {
        Integer::from(magnitude as i64)
    } else {
        Integer::from(magnitude)
    }
}

/// The narrowest signed type for a negative literal: i8, i16, i32, i64.
fn narrowest_signed(n: i64) -> Integer {
    if n >= i8::MIN as i64 {
        Integer::from(n as i8)
    } else if n >= i16::MIN as i64 {
        Integer::from(n as i16)
    } else if n >= i32::MIN as i64 {
        Integer::from(n as i32)
    } else {
        Integer::from(n)
    }
}
