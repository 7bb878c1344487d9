/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::{DeserializeError as Error, DeserializeErrorKind};
use crate::escape::{unescape_string, EscapeError};
use smithy_types::instant::Format;
use smithy_types::{base64, Blob, Instant, Number};
use std::borrow::Cow;
use std::convert::TryFrom;

/// New-type around `&str` that indicates the string is an escaped JSON string.
/// Provides functions for retrieving the string in either form.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// Returns the escaped string value
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Unescapes the string and returns it.
    /// If the string doesn't need unescaping, it will be returned directly.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Byte offset of a token in the input
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    /// Creates a custom error from the offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        Error::custom_at(msg, self.0)
    }
}

/// JSON tokens produced by [`json_token_iter`](crate::deserialize::json_token_iter).
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray { offset: Offset },
    EndArray { offset: Offset },
    ObjectKey { offset: Offset, key: EscapedStr<'a> },
    StartObject { offset: Offset },
    EndObject { offset: Offset },
    ValueBool { offset: Offset, value: bool },
    ValueNull { offset: Offset },
    /// `text` is the number exactly as written, for decoders that need more than an `f64`.
    ValueNumber {
        offset: Offset,
        value: Number,
        text: &'a str,
    },
    ValueString { offset: Offset, value: EscapedStr<'a> },
}

impl<'a> Token<'a> {
    pub fn offset(&self) -> Offset {
        use Token::*;
        *match self {
            StartArray { offset }
            | EndArray { offset }
            | ObjectKey { offset, .. }
            | StartObject { offset }
            | EndObject { offset }
            | ValueBool { offset, .. }
            | ValueNull { offset }
            | ValueNumber { offset, .. }
            | ValueString { offset, .. } => offset,
        }
    }

    /// Builds an error from the token's offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        self.offset().error(msg)
    }
}

type TokenResult<'a> = Option<Result<Token<'a>, Error>>;

fn unexpected(token: Option<Token<'_>>, expected: &'static str) -> Error {
    match token {
        Some(token) => token.error(Cow::Borrowed(expected)),
        None => Error::new(DeserializeErrorKind::UnexpectedEos, None),
    }
}

macro_rules! expect_fn {
    ($name:ident, $typ:ident) => {
        pub fn $name(token_result: TokenResult<'_>) -> Result<(), Error> {
            match token_result.transpose()? {
                Some(Token::$typ { .. }) => Ok(()),
                other => Err(unexpected(other, concat!("expected ", stringify!($typ)))),
            }
        }
    };
}

expect_fn!(expect_start_object, StartObject);
expect_fn!(expect_start_array, StartArray);

/// Expects a string or null token. If the value was a string, its **unescaped** value will be returned.
pub fn expect_string_or_null(token: TokenResult<'_>) -> Result<Option<String>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { offset, value }) => value
            .to_unescaped()
            .map(|s| Some(s.into_owned()))
            .map_err(|err| Error::from(err).with_offset(offset.0)),
        other => Err(unexpected(other, "expected string or null")),
    }
}

/// Expects a number or null token, and if its a number, returns it.
pub fn expect_number_or_null(token: TokenResult<'_>) -> Result<Option<Number>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
        other => Err(unexpected(other, "expected number or null")),
    }
}

fn expect_integer_or_null<T>(token: TokenResult<'_>) -> Result<Option<T>, Error>
where
    T: TryFrom<Number, Error = smithy_types::TryFromNumberError>,
{
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, offset, .. }) => T::try_from(value)
            .map(Some)
            .map_err(|err| Error::from(err).with_offset(offset.0)),
        other => Err(unexpected(other, "expected number or null")),
    }
}

/// Expects an integer that fits in an `i32`, or null. Floats and out-of-range integers are errors.
pub fn expect_i32_or_null(token: TokenResult<'_>) -> Result<Option<i32>, Error> {
    expect_integer_or_null(token)
}

/// Expects an integer that fits in an `i64`, or null.
pub fn expect_i64_or_null(token: TokenResult<'_>) -> Result<Option<i64>, Error> {
    expect_integer_or_null(token)
}

pub fn expect_bool_or_null(token: TokenResult<'_>) -> Result<Option<bool>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
        other => Err(unexpected(other, "expected boolean or null")),
    }
}

/// Expects a base64 encoded string or null.
pub fn expect_blob_or_null(token: TokenResult<'_>) -> Result<Option<Blob>, Error> {
    let offset = match &token {
        Some(Ok(token)) => token.offset().0,
        _ => 0,
    };
    match expect_string_or_null(token)? {
        Some(encoded) => base64::decode(encoded)
            .map(|bytes| Some(Blob::new(bytes)))
            .map_err(|_| Error::new(DeserializeErrorKind::InvalidBase64, Some(offset))),
        None => Ok(None),
    }
}

/// Expects a timestamp in the given `format`, or null.
///
/// Epoch seconds are accepted as a JSON number and decoded from its text, so every digit down
/// to the nanosecond is kept. Values outside the `i64` seconds range are errors. The calendar
/// formats are JSON strings.
pub fn expect_timestamp_or_null(
    token: TokenResult<'_>,
    format: Format,
) -> Result<Option<Instant>, Error> {
    match (token.transpose()?, format) {
        (Some(Token::ValueNull { .. }), _) => Ok(None),
        (Some(Token::ValueNumber { text, offset, .. }), Format::EpochSeconds) => {
            Instant::from_str(text, format)
                .map(Some)
                .map_err(|err| Error::from(err).with_offset(offset.0))
        }
        (Some(Token::ValueString { value, offset }), Format::DateTime | Format::HttpDate) => {
            let text = value
                .to_unescaped()
                .map_err(|err| Error::from(err).with_offset(offset.0))?;
            Instant::from_str(&text, format)
                .map(Some)
                .map_err(|err| Error::from(err).with_offset(offset.0))
        }
        (other, Format::EpochSeconds) => Err(unexpected(other, "expected epoch seconds or null")),
        (other, _) => Err(unexpected(other, "expected timestamp string or null")),
    }
}

/// Skips an entire value in the token stream. Errors if it isn't a value.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    let mut depth = 0_usize;
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. } | Token::StartArray { .. }) => depth += 1,
            Some(Token::EndObject { .. } | Token::EndArray { .. }) => match depth {
                0 => return Err(Error::custom("expected value")),
                _ => depth -= 1,
            },
            Some(Token::ObjectKey { .. }) if depth > 0 => {}
            Some(
                Token::ValueNull { .. }
                | Token::ValueBool { .. }
                | Token::ValueNumber { .. }
                | Token::ValueString { .. },
            ) => {}
            _ => return Err(Error::custom("expected value")),
        }
        if depth == 0 {
            return Ok(());
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::deserialize::json_token_iter;

    pub fn start_array<'a>(offset: usize) -> TokenResult<'a> {
        Some(Ok(Token::StartArray {
            offset: Offset(offset),
        }))
    }

    pub fn end_array<'a>(offset: usize) -> TokenResult<'a> {
        Some(Ok(Token::EndArray {
            offset: Offset(offset),
        }))
    }

    pub fn start_object<'a>(offset: usize) -> TokenResult<'a> {
        Some(Ok(Token::StartObject {
            offset: Offset(offset),
        }))
    }

    pub fn end_object<'a>(offset: usize) -> TokenResult<'a> {
        Some(Ok(Token::EndObject {
            offset: Offset(offset),
        }))
    }

    pub fn object_key(offset: usize, key: &str) -> TokenResult<'_> {
        Some(Ok(Token::ObjectKey {
            offset: Offset(offset),
            key: EscapedStr::new(key),
        }))
    }

    pub fn value_bool<'a>(offset: usize, boolean: bool) -> TokenResult<'a> {
        Some(Ok(Token::ValueBool {
            offset: Offset(offset),
            value: boolean,
        }))
    }

    pub fn value_number(offset: usize, text: &str, number: Number) -> TokenResult<'_> {
        Some(Ok(Token::ValueNumber {
            offset: Offset(offset),
            value: number,
            text,
        }))
    }

    pub fn value_null<'a>(offset: usize) -> TokenResult<'a> {
        Some(Ok(Token::ValueNull {
            offset: Offset(offset),
        }))
    }

    pub fn value_string(offset: usize, string: &str) -> TokenResult<'_> {
        Some(Ok(Token::ValueString {
            offset: Offset(offset),
            value: EscapedStr::new(string),
        }))
    }

    #[test]
    fn skip_simple_value() {
        let mut tokens = json_token_iter(b"null true");
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_nested() {
        let mut tokens = json_token_iter(
            br#"
            {"struct": {"foo": 5, "bar": 11, "arr": [1, 2, 3, {}, 5, []]},
             "arr": [[], [[]], [{"arr":[]}]],
             "simple": "foo"}
            true
        "#,
        );
        skip_value(&mut tokens).unwrap();
        assert!(matches!(
            tokens.next(),
            Some(Ok(Token::ValueBool { value: true, .. }))
        ))
    }

    #[test]
    fn skip_rejects_a_closing_token() {
        let mut tokens = json_token_iter(b"[]");
        tokens.next();
        assert_eq!(Err(Error::custom("expected value")), skip_value(&mut tokens));
    }

    #[test]
    fn test_expect_start_object() {
        assert_eq!(
            Err(Error::custom_at("expected StartObject", 2)),
            expect_start_object(value_bool(2, true))
        );
        assert_eq!(Ok(()), expect_start_object(start_object(0)));
    }

    #[test]
    fn test_expect_start_array() {
        assert_eq!(
            Err(Error::custom_at("expected StartArray", 2)),
            expect_start_array(value_bool(2, true))
        );
        assert_eq!(Ok(()), expect_start_array(start_array(0)));
    }

    #[test]
    fn test_expect_string_or_null() {
        assert_eq!(Ok(None), expect_string_or_null(value_null(0)));
        assert_eq!(
            Ok(Some("a\"b".to_string())),
            expect_string_or_null(value_string(0, r#"a\"b"#))
        );
        assert_eq!(
            Err(Error::custom_at("expected string or null", 0)),
            expect_string_or_null(value_bool(0, true))
        );
        assert_eq!(
            Err(Error::new(DeserializeErrorKind::UnexpectedEos, None)),
            expect_string_or_null(None)
        );
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(Ok(Some(5)), expect_i32_or_null(value_number(0, "5", Number::PosInt(5))));
        assert_eq!(
            Ok(Some(-5)),
            expect_i64_or_null(value_number(0, "-5", Number::NegInt(-5)))
        );
        assert_eq!(Ok(None), expect_i32_or_null(value_null(0)));
        let too_big =
            expect_i32_or_null(value_number(3, "1099511627776", Number::PosInt(1 << 40)))
                .expect_err("does not fit in an i32");
        assert_eq!(too_big.offset(), Some(3));
        assert!(expect_i64_or_null(value_number(0, "1.5", Number::Float(1.5))).is_err());
        assert!(expect_i32_or_null(value_string(0, "5")).is_err());
    }

    #[test]
    fn test_expect_bool_or_null() {
        assert_eq!(Ok(Some(false)), expect_bool_or_null(value_bool(0, false)));
        assert_eq!(Ok(None), expect_bool_or_null(value_null(0)));
        assert!(expect_bool_or_null(value_string(0, "true")).is_err());
    }

    #[test]
    fn test_expect_blob_or_null() {
        assert_eq!(
            Ok(Some(Blob::new("hello"))),
            expect_blob_or_null(value_string(0, "aGVsbG8="))
        );
        assert_eq!(
            Err(Error::new(DeserializeErrorKind::InvalidBase64, Some(7))),
            expect_blob_or_null(value_string(7, "!!"))
        );
    }

    #[test]
    fn test_expect_timestamp_or_null() {
        let epoch_seconds = |text: &str, number: Number| {
            expect_timestamp_or_null(value_number(4, text, number), Format::EpochSeconds)
        };
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(1576540098))),
            epoch_seconds("1576540098", Number::PosInt(1576540098))
        );
        assert_eq!(
            Ok(Some(Instant::from_secs_and_nanos(1576540098, 520_000_000))),
            epoch_seconds("1576540098.52", Number::Float(1576540098.52))
        );
        assert_eq!(
            Ok(Some(Instant::from_secs_and_nanos(1_429_203_623, 625_000_000))),
            epoch_seconds("1.429203623625E9", Number::Float(1.429203623625E9))
        );
        assert_eq!(
            Ok(Some(Instant::from_epoch_seconds(1576540098))),
            expect_timestamp_or_null(value_string(0, "2019-12-16T23:48:18Z"), Format::DateTime)
        );
        assert_eq!(
            Ok(None),
            expect_timestamp_or_null(value_null(0), Format::HttpDate)
        );
        assert!(expect_timestamp_or_null(value_string(0, "12"), Format::EpochSeconds).is_err());
        assert!(expect_timestamp_or_null(value_string(0, "nope"), Format::DateTime).is_err());
    }

    #[test]
    fn epoch_seconds_keep_nanoseconds() {
        let decoded = expect_timestamp_or_null(
            value_number(0, "1600000000.123456789", Number::Float(1600000000.123456789)),
            Format::EpochSeconds,
        );
        assert_eq!(
            Ok(Some(Instant::from_secs_and_nanos(1_600_000_000, 123_456_789))),
            decoded
        );
    }

    #[test]
    fn out_of_range_epoch_seconds_are_errors() {
        let err = expect_timestamp_or_null(
            value_number(
                5,
                "18446744073709551615",
                Number::PosInt(18446744073709551615),
            ),
            Format::EpochSeconds,
        )
        .expect_err("larger than i64::MAX");
        assert_eq!(err.offset(), Some(5));

        let err = expect_timestamp_or_null(
            value_number(
                2,
                "-9223372036854775808.5",
                Number::Float(-9223372036854775808.5),
            ),
            Format::EpochSeconds,
        )
        .expect_err("before i64::MIN");
        assert_eq!(err.offset(), Some(2));
    }
}
