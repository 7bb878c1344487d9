/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::EscapeError;
use smithy_types::instant::DateTimeParseError;
use smithy_types::TryFromNumberError;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq)]
pub(crate) enum DeserializeErrorKind {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidBase64,
    InvalidEscape(char),
    InvalidNumber,
    InvalidTimestamp(DateTimeParseError),
    InvalidUtf8,
    NumberOutOfRange(TryFromNumberError),
    UnescapeFailed(EscapeError),
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}

/// A failure while tokenizing or mapping a JSON document.
///
/// When the failure is tied to a position in the input, `offset` is the byte offset of the
/// offending token.
#[derive(Debug, PartialEq)]
pub struct DeserializeError {
    kind: DeserializeErrorKind,
    offset: Option<usize>,
}

impl DeserializeError {
    pub(crate) fn new(kind: DeserializeErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(DeserializeErrorKind::Custom(message.into()), None)
    }

    /// Returns a custom error at the given byte offset.
    pub fn custom_at(message: impl Into<Cow<'static, str>>, offset: usize) -> Self {
        Self::new(DeserializeErrorKind::Custom(message.into()), Some(offset))
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub(crate) fn with_offset(mut self, offset: usize) -> Self {
        self.offset.get_or_insert(offset);
        self
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DeserializeErrorKind::*;
        match &self.kind {
            UnescapeFailed(source) => Some(source),
            NumberOutOfRange(source) => Some(source),
            InvalidTimestamp(source) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DeserializeErrorKind::*;
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {}: ", offset)?;
        }
        match &self.kind {
            Custom(msg) => write!(f, "failed to parse JSON: {}", msg),
            ExpectedLiteral(literal) => write!(f, "expected literal: {}", literal),
            InvalidBase64 => write!(f, "invalid base64 in blob value"),
            InvalidEscape(escape) => write!(f, "invalid JSON escape: \\{}", escape),
            InvalidNumber => write!(f, "invalid number"),
            InvalidTimestamp(err) => write!(f, "invalid timestamp: {}", err),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            NumberOutOfRange(err) => write!(f, "{}", err),
            UnescapeFailed(_) => write!(f, "failed to unescape JSON string"),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{:X}",
                value
            ),
            UnexpectedToken(token, expected) => {
                write!(f, "unexpected token '{}'. Expected one of {}", token, expected)
            }
            UnexpectedEos => write!(f, "unexpected end of stream"),
        }
    }
}

impl From<EscapeError> for DeserializeError {
    fn from(err: EscapeError) -> Self {
        Self::new(DeserializeErrorKind::UnescapeFailed(err), None)
    }
}

impl From<TryFromNumberError> for DeserializeError {
    fn from(err: TryFromNumberError) -> Self {
        Self::new(DeserializeErrorKind::NumberOutOfRange(err), None)
    }
}

impl From<DateTimeParseError> for DeserializeError {
    fn from(err: DateTimeParseError) -> Self {
        Self::new(DeserializeErrorKind::InvalidTimestamp(err), None)
    }
}
