/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Extraction of generic error metadata from AWS JSON error responses.

use crate::deserialize::token::expect_string_or_null;
use crate::deserialize::{deserialize_document, DeserializeError, Field};
use http::HeaderMap;
use smithy_types::Error as GenericError;

#[derive(Debug, Default)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

const ERROR_BODY_FIELDS: &[Field<ErrorBody>] = &[
    Field {
        name: "__type",
        decode: |body, tokens| {
            if let Some(code) = expect_string_or_null(tokens.next())? {
                body.code = Some(code);
            }
            Ok(())
        },
    },
    Field {
        name: "code",
        decode: |body, tokens| {
            let code = expect_string_or_null(tokens.next())?;
            // `__type` wins when both are present
            body.code = body.code.take().or(code);
            Ok(())
        },
    },
    Field {
        name: "message",
        decode: |body, tokens| {
            if let Some(message) = expect_string_or_null(tokens.next())? {
                body.message = Some(message);
            }
            Ok(())
        },
    },
    Field {
        name: "Message",
        decode: |body, tokens| {
            if let Some(message) = expect_string_or_null(tokens.next())? {
                body.message = Some(message);
            }
            Ok(())
        },
    },
];

/// Strips the decorations services add around an error code: a trailing `:http://...` URL
/// and a leading `namespace#`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.split_once(':') {
        Some((code, _)) => code,
        None => error_code,
    };
    match error_code.rsplit_once('#') {
        Some((_, code)) => code,
        None => error_code,
    }
}

fn error_type_from_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
}

fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok())
}

/// Builds generic error metadata from an error response.
///
/// The code comes from the `x-amzn-errortype` header when present, otherwise from the body's
/// `__type` (or `code`) member. An empty body is allowed.
pub fn parse_generic_error(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<GenericError, DeserializeError> {
    let ErrorBody { code, message } = deserialize_document(body, ERROR_BODY_FIELDS)?;
    let mut builder = GenericError::builder();
    if let Some(code) = error_type_from_header(headers)
        .or(code.as_deref())
        .map(sanitize_error_code)
    {
        builder = builder.code(code);
    }
    if let Some(message) = message {
        builder = builder.message(message);
    }
    if let Some(request_id) = request_id(headers) {
        builder = builder.request_id(request_id);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod test {
    use super::{parse_generic_error, sanitize_error_code};
    use http::{HeaderMap, HeaderValue};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn generic_error_from_body() {
        let err = parse_generic_error(
            &headers(&[("x-amzn-requestid", "1234")]),
            br#"{"__type":"InvalidPathException","message":"the path is invalid"}"#,
        )
        .unwrap();
        assert_eq!(err.code(), Some("InvalidPathException"));
        assert_eq!(err.message(), Some("the path is invalid"));
        assert_eq!(err.request_id(), Some("1234"));
    }

    #[test]
    fn header_takes_precedence() {
        let err = parse_generic_error(
            &headers(&[("x-amzn-errortype", "FromHeader:http://internal.amazon.com/")]),
            br#"{"__type":"FromBody","Message":"capitalized"}"#,
        )
        .unwrap();
        assert_eq!(err.code(), Some("FromHeader"));
        assert_eq!(err.message(), Some("capitalized"));
    }

    #[test]
    fn code_member_and_namespaces() {
        let err = parse_generic_error(
            &HeaderMap::new(),
            br#"{"code":"com.amazonaws.codecommit#RepositoryDoesNotExistException"}"#,
        )
        .unwrap();
        assert_eq!(err.code(), Some("RepositoryDoesNotExistException"));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn null_members_do_not_erase_earlier_ones() {
        let err = parse_generic_error(
            &HeaderMap::new(),
            br#"{"code":"InvalidPathException","message":"bad path","__type":null,"Message":null}"#,
        )
        .unwrap();
        assert_eq!(err.code(), Some("InvalidPathException"));
        assert_eq!(err.message(), Some("bad path"));
    }

    #[test]
    fn empty_body() {
        let err = parse_generic_error(&HeaderMap::new(), b"").unwrap();
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_generic_error(&HeaderMap::new(), b"<html>").is_err());
    }

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
