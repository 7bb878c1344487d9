/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Assertions for the HTTP requests produced by the service clients.

use http::Request;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader { forbidden: String },
    #[error("body did not match. Hint:\n{hint}\nExpected:\n{expected}\nActual:\n{found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
    #[error("expected method `{expected}`, found `{found}`")]
    InvalidMethod { expected: String, found: String },
    #[error("expected uri `{expected}`, found `{found}`")]
    InvalidUri { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

/// How a request or response body should be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Compared structurally: whitespace and member order do not matter.
    Json,
    /// Compared byte for byte.
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" | "application/x-amz-json-1.0" | "application/x-amz-json-1.1" => {
                MediaType::Json
            }
            other => MediaType::Other(other.to_string()),
        }
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks the method and the path-and-query of a request.
pub fn validate_method_and_path<B>(
    request: &Request<B>,
    method: &str,
    path_and_query: &str,
) -> Result<(), ProtocolTestFailure> {
    if request.method().as_str() != method {
        return Err(ProtocolTestFailure::InvalidMethod {
            expected: method.to_string(),
            found: request.method().to_string(),
        });
    }
    let actual = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    if actual != path_and_query {
        return Err(ProtocolTestFailure::InvalidUri {
            expected: path_and_query.to_string(),
            found: actual.to_string(),
        });
    }
    Ok(())
}

/// Compares a body against the expected body. JSON bodies are compared structurally; an
/// expected body of `""` matches only an empty actual body.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    match (media_type, std::str::from_utf8(actual_body)) {
        (MediaType::Json, Ok(actual)) if !expected_body.is_empty() => {
            try_json_eq(actual, expected_body)
        }
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        _ if actual_body == expected_body.as_bytes() => Ok(()),
        _ => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_string(),
            found: String::from_utf8_lossy(actual_body).into_owned(),
            hint: "bodies differ byte for byte".to_string(),
        }),
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "expected body to be valid json".to_owned(),
            found: format!("{}", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} {}", e, actual),
        })?;
    match assert_json_diff::assert_json_eq_no_panic(&actual_json, &expected_json) {
        Ok(()) => Ok(()),
        Err(hint) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: actual.to_string(),
            hint,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, validate_body, validate_headers, validate_method_and_path, MediaType,
        ProtocolTestFailure,
    };
    use http::Request;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_forbid_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .body(())
            .unwrap();
        forbid_headers(&request, &["X-Bar"]).expect("header not present");
        assert_eq!(
            forbid_headers(&request, &["x-foo"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "x-foo".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_method_and_path() {
        let request = Request::builder()
            .method("POST")
            .uri("https://codecommit.us-east-1.amazonaws.com/")
            .body(())
            .unwrap();
        validate_method_and_path(&request, "POST", "/").expect("matches");
        validate_method_and_path(&request, "GET", "/").expect_err("wrong method");
        validate_method_and_path(&request, "POST", "/foo").expect_err("wrong path");
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json).expect("inputs matched as JSON");

        let expected = r#"{"a":1,"b":[1,2]}"#;
        let actual = r#"{"b":[1,2],"a":1}"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect("member order does not matter");

        let actual = r#"{"b":[2,1],"a":1}"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect_err("list order matters");

        validate_body(b"not json", expected, MediaType::Json).expect_err("invalid json");
    }

    #[test]
    fn test_validate_empty_and_other_bodies() {
        validate_body(b"", "", MediaType::Json).expect("both empty");
        validate_body(b"{}", "", MediaType::Json).expect_err("non-empty actual");
        validate_body(b"raw", "raw", MediaType::Other("text/plain".into())).expect("bytes match");
        validate_body(b"raw", "RAW", MediaType::Other("text/plain".into()))
            .expect_err("bytes differ");
    }

    #[test]
    fn media_types() {
        assert_eq!(MediaType::Json, MediaType::from("application/x-amz-json-1.1"));
        assert_eq!(
            MediaType::Other("text/plain".into()),
            MediaType::from("text/plain")
        );
    }
}
