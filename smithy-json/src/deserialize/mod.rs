/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Pull-based JSON tokenizer and the structure mapping built on top of it.

use crate::deserialize::error::DeserializeErrorKind;
use smithy_types::Number;
use std::iter::Peekable;

mod error;
mod structure;
pub mod token;

pub use error::DeserializeError;
pub use structure::{
    deserialize_document, deserialize_list, deserialize_map, deserialize_struct, Field,
};
pub use token::{EscapedStr, Offset, Token};

/// The token stream handed to field decoders.
pub type TokenStream<'a> = Peekable<JsonTokenIterator<'a>>;

/// Returns an iterator over the JSON tokens in `input`.
///
/// Several whitespace-separated top-level values are tokenized one after another; callers that
/// expect a single document check for trailing tokens themselves.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: Vec::new(),
        failed: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// Iterator over JSON tokens. Stops yielding tokens after the first error.
#[derive(Debug)]
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
    failed: bool,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn error(&self, kind: DeserializeErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(self.index))
    }

    fn unexpected(&self, expected: &'static str) -> DeserializeError {
        match self.peek_byte() {
            Some(byte) => self.error(DeserializeErrorKind::UnexpectedToken(byte as char, expected)),
            None => self.error(DeserializeErrorKind::UnexpectedEos),
        }
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.index += 1;
        }
    }

    fn replace_state(&mut self, state: State) {
        if let Some(top) = self.state_stack.last_mut() {
            *top = state;
        }
    }

    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        match self.peek_byte() {
            Some(b'{') => {
                self.index += 1;
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            Some(b'[') => {
                self.index += 1;
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            Some(b'"') => Ok(Token::ValueString {
                offset,
                value: self.read_string()?,
            }),
            Some(b't') => {
                self.expect_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            Some(b'f') => {
                self.expect_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            Some(b'n') => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            Some(b'-' | b'0'..=b'9') => {
                let (value, text) = self.read_number()?;
                Ok(Token::ValueNumber {
                    offset,
                    value,
                    text,
                })
            }
            _ => Err(self.unexpected("'{', '[', '\"', 'true', 'false', 'null', number")),
        }
    }

    fn expect_literal(&mut self, literal: &'static [u8]) -> Result<(), DeserializeError> {
        if self.input[self.index..].starts_with(literal) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(self.error(DeserializeErrorKind::ExpectedLiteral(
                String::from_utf8_lossy(literal).into_owned(),
            )))
        }
    }

    /// Reads a string starting at the opening quote, validating escapes but not unescaping.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, DeserializeError> {
        let start = self.index + 1;
        self.index = start;
        loop {
            match self.peek_byte() {
                None => return Err(self.error(DeserializeErrorKind::UnexpectedEos)),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.index += 1;
                    match self.peek_byte() {
                        Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u') => {
                            self.index += 1
                        }
                        Some(other) => {
                            return Err(self.error(DeserializeErrorKind::InvalidEscape(other as char)))
                        }
                        None => return Err(self.error(DeserializeErrorKind::UnexpectedEos)),
                    }
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.error(DeserializeErrorKind::UnexpectedControlCharacter(byte)))
                }
                Some(_) => self.index += 1,
            }
        }
        let value = std::str::from_utf8(&self.input[start..self.index])
            .map_err(|_| DeserializeError::new(DeserializeErrorKind::InvalidUtf8, Some(start)))?;
        // closing quote
        self.index += 1;
        Ok(EscapedStr::new(value))
    }

    /// Consumes a run of ASCII digits, returning whether there was at least one.
    fn skip_digits(&mut self) -> bool {
        let start = self.index;
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.index += 1;
        }
        self.index > start
    }

    /// Reads a number following the JSON grammar:
    /// `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn read_number(&mut self) -> Result<(Number, &'a str), DeserializeError> {
        let start = self.index;
        let invalid = || DeserializeError::new(DeserializeErrorKind::InvalidNumber, Some(start));
        if self.peek_byte() == Some(b'-') {
            self.index += 1;
        }
        match self.peek_byte() {
            Some(b'0') => self.index += 1,
            Some(b'1'..=b'9') => {
                self.skip_digits();
            }
            _ => return Err(invalid()),
        }
        let mut is_float = false;
        if self.peek_byte() == Some(b'.') {
            self.index += 1;
            if !self.skip_digits() {
                return Err(invalid());
            }
            is_float = true;
        }
        if let Some(b'e' | b'E') = self.peek_byte() {
            self.index += 1;
            if let Some(b'+' | b'-') = self.peek_byte() {
                self.index += 1;
            }
            if !self.skip_digits() {
                return Err(invalid());
            }
            is_float = true;
        }
        // `01`, `1.2.3`, `1e5e5`
        if let Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') = self.peek_byte() {
            return Err(invalid());
        }
        let input: &'a [u8] = self.input;
        // Only ASCII bytes were consumed above
        let text = std::str::from_utf8(&input[start..self.index]).map_err(|_| invalid())?;
        let parse_float = || match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Float(value)),
            _ => Err(invalid()),
        };
        let value = if is_float {
            parse_float()?
        } else if text.starts_with('-') {
            match text.parse::<i64>() {
                Ok(value) => Number::NegInt(value),
                Err(_) => parse_float()?,
            }
        } else {
            match text.parse::<u64>() {
                Ok(value) => Number::PosInt(value),
                Err(_) => parse_float()?,
            }
        };
        Ok((value, text))
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        if self.peek_byte() != Some(b'"') {
            return Err(self.unexpected("'\"'"));
        }
        let key = self.read_string()?;
        self.discard_whitespace();
        if self.peek_byte() != Some(b':') {
            return Err(self.unexpected("':'"));
        }
        self.index += 1;
        Ok(Token::ObjectKey { offset, key })
    }

    fn end_container(&mut self, token: Token<'a>) -> Result<Token<'a>, DeserializeError> {
        self.index += 1;
        self.state_stack.pop();
        Ok(token)
    }

    fn next_token(&mut self) -> Option<Result<Token<'a>, DeserializeError>> {
        self.discard_whitespace();
        let offset = self.offset();
        let state = match self.state_stack.last() {
            Some(state) => *state,
            None if self.index == self.input.len() => return None,
            None => return Some(self.read_value()),
        };
        Some(match (state, self.peek_byte()) {
            (State::ArrayFirstValueOrEnd | State::ArrayNextValueOrEnd, Some(b']')) => {
                self.end_container(Token::EndArray { offset })
            }
            (State::ArrayFirstValueOrEnd, _) => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
            (State::ArrayNextValueOrEnd, Some(b',')) => {
                self.index += 1;
                self.discard_whitespace();
                self.read_value()
            }
            (State::ArrayNextValueOrEnd, _) => Err(self.unexpected("']', ','")),
            (State::ObjectFirstKeyOrEnd | State::ObjectNextKeyOrEnd, Some(b'}')) => {
                self.end_container(Token::EndObject { offset })
            }
            (State::ObjectFirstKeyOrEnd, _) => {
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            (State::ObjectNextKeyOrEnd, Some(b',')) => {
                self.index += 1;
                self.discard_whitespace();
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            (State::ObjectNextKeyOrEnd, _) => Err(self.unexpected("'}', ','")),
            (State::ObjectFieldValue, _) => {
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
        })
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.next_token();
        if matches!(result, Some(Err(_))) {
            self.failed = true;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::error::{DeserializeError, DeserializeErrorKind};
    use super::json_token_iter;
    use crate::deserialize::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use pretty_assertions::assert_eq;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert_eq!(None, json_token_iter(b"").next());
        assert_eq!(None, json_token_iter(b" ").next());
        assert_eq!(None, json_token_iter(b"\t\r\n").next());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        assert_eq!(value_string(0, ""), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_scalars() {
        let mut iter = json_token_iter(b" null true false 5 -7 1.5 \"x\" ");
        assert_eq!(value_null(1), iter.next());
        assert_eq!(value_bool(6, true), iter.next());
        assert_eq!(value_bool(11, false), iter.next());
        assert_eq!(value_number(17, "5", Number::PosInt(5)), iter.next());
        assert_eq!(value_number(19, "-7", Number::NegInt(-7)), iter.next());
        assert_eq!(value_number(22, "1.5", Number::Float(1.5)), iter.next());
        assert_eq!(value_string(26, "x"), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_numbers() {
        let number = |input: &[u8]| match json_token_iter(input).next() {
            Some(Ok(super::Token::ValueNumber { value, .. })) => value,
            other => panic!("expected a number, got {:?}", other),
        };
        assert_eq!(Number::PosInt(0), number(b"0"));
        assert_eq!(Number::PosInt(u64::MAX), number(b"18446744073709551615"));
        assert_eq!(Number::Float(18446744073709551616.0), number(b"18446744073709551616"));
        assert_eq!(Number::NegInt(i64::MIN), number(b"-9223372036854775808"));
        assert_eq!(Number::Float(1.5e10), number(b"1.5e10"));
        assert_eq!(Number::Float(-2E-3), number(b"-2E-3"));
    }

    #[test]
    fn non_json_numerals_are_rejected() {
        for input in [
            &b"-"[..],
            b"1.2.3",
            b"01",
            b"-01",
            b"1.",
            b"1.e5",
            b"1e",
            b"1e+",
            b"1e5e5",
            b"1e400",
            b"-1e400",
        ] {
            assert_eq!(
                Some(Err(DeserializeError::new(DeserializeErrorKind::InvalidNumber, Some(0)))),
                json_token_iter(input).next(),
                "{}",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn number_tokens_keep_their_text() {
        let mut iter = json_token_iter(b"[1.429203623625E9, 1600000000.123456789]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(
            value_number(1, "1.429203623625E9", Number::Float(1.429203623625E9)),
            iter.next()
        );
        assert_eq!(
            value_number(19, "1600000000.123456789", Number::Float(1600000000.123456789)),
            iter.next()
        );
        assert_eq!(end_array(39), iter.next());
    }

    #[test]
    fn test_nested() {
        let mut iter = json_token_iter(br#"{"a": [1, {"b": null}], "c": {}}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "a"), iter.next());
        assert_eq!(start_array(6), iter.next());
        assert_eq!(value_number(7, "1", Number::PosInt(1)), iter.next());
        assert_eq!(start_object(10), iter.next());
        assert_eq!(object_key(11, "b"), iter.next());
        assert_eq!(value_null(16), iter.next());
        assert_eq!(end_object(20), iter.next());
        assert_eq!(end_array(21), iter.next());
        assert_eq!(object_key(24, "c"), iter.next());
        assert_eq!(start_object(29), iter.next());
        assert_eq!(end_object(30), iter.next());
        assert_eq!(end_object(31), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_escaped_strings_stay_escaped() {
        let mut iter = json_token_iter(b"[\"a\\\"b\", \"\xc3\xa9\"]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_string(1, r#"a\"b"#), iter.next());
        assert_eq!(value_string(9, "\u{e9}"), iter.next());
        assert_eq!(end_array(13), iter.next());
    }

    #[test]
    fn test_errors() {
        let first_error = |input: &[u8]| json_token_iter(input).find_map(|t| t.err());
        assert_eq!(
            Some(DeserializeError::new(DeserializeErrorKind::UnexpectedEos, Some(5))),
            first_error(br#"[1, 2"#)
        );
        assert_eq!(
            Some(DeserializeError::new(DeserializeErrorKind::UnexpectedEos, Some(4))),
            first_error(br#""abc"#)
        );
        assert_eq!(
            Some(DeserializeError::new(
                DeserializeErrorKind::ExpectedLiteral("true".into()),
                Some(0)
            )),
            first_error(b"tru")
        );
        assert_eq!(
            Some(DeserializeError::new(
                DeserializeErrorKind::UnexpectedToken('}', "'\"'"),
                Some(7)
            )),
            first_error(br#"{"a":1,}"#)
        );
        assert_eq!(
            Some(DeserializeError::new(
                DeserializeErrorKind::UnexpectedToken('1', "':'"),
                Some(5)
            )),
            first_error(br#"{"a" 1}"#)
        );
        assert_eq!(
            Some(DeserializeError::new(DeserializeErrorKind::InvalidEscape('q'), Some(2))),
            first_error(br#""\q""#)
        );
        assert_eq!(
            Some(DeserializeError::new(
                DeserializeErrorKind::UnexpectedControlCharacter(b'\n'),
                Some(1)
            )),
            first_error(b"\"\n\"")
        );
    }

    #[test]
    fn no_tokens_after_an_error() {
        let mut iter = json_token_iter(b"[1 2]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_number(1, "1", Number::PosInt(1)), iter.next());
        assert!(matches!(iter.next(), Some(Err(_))));
        assert_eq!(None, iter.next());
    }
}
