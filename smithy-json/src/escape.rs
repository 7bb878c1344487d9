/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    UnpairedSurrogate(u16),
    UnexpectedEndOfString,
}

/// Failure to unescape a JSON string literal.
#[derive(Debug, PartialEq, Eq)]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            UnpairedSurrogate(value) => write!(f, "unpaired UTF-16 surrogate: \\u{:04X}", value),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl std::error::Error for EscapeError {}

/// Escapes a string for embedding in a JSON string value.
/// Strings with nothing to escape are returned as-is.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    if !value.bytes().any(|b| b < 0x20 || b == b'"' || b == b'\\') {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for chr in value.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            chr if (chr as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            chr => escaped.push(chr),
        }
    }
    Cow::Owned(escaped)
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    let first_escape = match value.find('\\') {
        Some(index) => index,
        None => return Ok(Cow::Borrowed(value)),
    };
    let mut unescaped = String::with_capacity(value.len());
    unescaped.push_str(&value[..first_escape]);

    let mut chars = value[first_escape..].chars();
    while let Some(chr) = chars.next() {
        if chr != '\\' {
            unescaped.push(chr);
            continue;
        }
        match chars.next() {
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some('/') => unescaped.push('/'),
            Some('b') => unescaped.push('\u{08}'),
            Some('f') => unescaped.push('\u{0C}'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some('u') => unescaped.push(read_unicode_escape(&mut chars)?),
            Some(other) => return Err(EscapeErrorKind::InvalidEscapeCharacter(other).into()),
            None => return Err(EscapeErrorKind::UnexpectedEndOfString.into()),
        }
    }
    Ok(Cow::Owned(unescaped))
}

/// Reads the four hex digits following `\u`
fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Result<u16, EscapeError> {
    let digits: String = chars.take(4).collect();
    if digits.chars().count() < 4 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(digits).into());
    }
    u16::from_str_radix(&digits, 16).map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(digits).into())
}

/// Reads a `\uXXXX` escape, including the low half when the first code unit is a high surrogate.
fn read_unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, EscapeError> {
    let high = read_code_unit(chars)?;
    let codepoint = match high {
        0xD800..=0xDBFF => {
            if chars.next() != Some('\\') || chars.next() != Some('u') {
                return Err(EscapeErrorKind::UnpairedSurrogate(high).into());
            }
            let low = read_code_unit(chars)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
            }
            0x10000 + ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(EscapeErrorKind::UnpairedSurrogate(high).into()),
        other => other as u32,
    };
    char::from_u32(codepoint).ok_or_else(|| EscapeErrorKind::UnpairedSurrogate(high).into())
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, EscapeError, EscapeErrorKind};
    use proptest::proptest;
    use std::borrow::Cow;

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(r#"\bf\fo\to\r\n"#, escape_string("\u{08}f\u{0C}o\to\r\n").as_ref());
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("ünïcödé", escape_string("ünïcödé").as_ref());
    }

    #[test]
    fn unescape_without_escapes_borrows() {
        assert!(matches!(unescape_string("a/b.txt"), Ok(Cow::Borrowed("a/b.txt"))));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\u{08}f\u{0C}o\to\r\n",
            unescape_string(r#"\bf\fo\to\r\n"#).unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("a/b", unescape_string(r#"a\/b"#).unwrap());
        assert_eq!("\u{0}", unescape_string("\\u0000").unwrap());
        assert_eq!("é", unescape_string("\\u00e9").unwrap());
        assert_eq!("😀", unescape_string("\\ud83d\\ude00").unwrap());
    }

    #[test]
    fn unescape_failures() {
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::InvalidEscapeCharacter('q'))),
            unescape_string(r#"\q"#)
        );
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::UnexpectedEndOfString)),
            unescape_string("trailing\\")
        );
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::UnexpectedEndOfString)),
            unescape_string("\\u00")
        );
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::InvalidUnicodeEscape("+04D".into()))),
            unescape_string("\\u+04D")
        );
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::UnpairedSurrogate(0xD83D))),
            unescape_string("\\ud83d")
        );
        assert_eq!(
            Err(EscapeError::from(EscapeErrorKind::InvalidSurrogatePair(0xD83D, 0x0041))),
            unescape_string("\\ud83d\\u0041")
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            let serde_escaped = serde_json::to_string(&s).unwrap();
            let serde_escaped = &serde_escaped[1..serde_escaped.len() - 1];
            assert_eq!(serde_escaped, escape_string(&s));
            assert_eq!(s, unescape_string(&escape_string(&s)).unwrap());
        }
    }
}
