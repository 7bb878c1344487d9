/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The AWS JSON 1.1 request envelope.
//!
//! Every operation is a `POST` to `/` whose target operation is named in the `X-Amz-Target`
//! header as `<target prefix>.<operation name>`.

use crate::body::SdkBody;
use crate::operation::BuildError;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;

pub const JSON_1_1_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub const X_AMZ_TARGET: &str = "x-amz-target";

/// Wraps a serialized payload in the JSON-RPC envelope.
///
/// Headers already set on `builder` are kept. In particular a caller-supplied `Content-Type`
/// is never replaced.
pub fn build_request(
    builder: http::request::Builder,
    target_prefix: &str,
    operation_name: &str,
    payload: String,
) -> Result<http::Request<SdkBody>, BuildError> {
    let content_type_set = builder
        .headers_ref()
        .map(|headers| headers.contains_key(CONTENT_TYPE))
        .unwrap_or(false);
    let mut builder = builder
        .method(Method::POST)
        .uri("/")
        .header(X_AMZ_TARGET, format!("{}.{}", target_prefix, operation_name))
        .header(CONTENT_LENGTH, payload.len());
    if !content_type_set {
        builder = builder.header(CONTENT_TYPE, JSON_1_1_CONTENT_TYPE);
    }
    Ok(builder.body(SdkBody::from(payload))?)
}

#[cfg(test)]
mod test {
    use super::build_request;
    use http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_shape() {
        let request = build_request(
            http::Request::builder(),
            "CodeCommit_20150413",
            "GetRepository",
            r#"{"repositoryName":"demo"}"#.to_string(),
        )
        .unwrap();
        assert_eq!("POST", *request.method());
        assert_eq!("/", *request.uri());
        assert_eq!(
            "CodeCommit_20150413.GetRepository",
            request.headers()["X-Amz-Target"]
        );
        assert_eq!("25", request.headers()["content-length"]);
        assert_eq!(
            "application/x-amz-json-1.1",
            request.headers()["content-type"]
        );
        assert_eq!(br#"{"repositoryName":"demo"}"#, request.body().bytes());
    }

    #[test]
    fn content_type_is_not_replaced() {
        let request = build_request(
            http::Request::builder().header(CONTENT_TYPE, "application/json"),
            "AppMesh_20190125",
            "ListMeshes",
            "{}".to_string(),
        )
        .unwrap();
        assert_eq!(1, request.headers().get_all(CONTENT_TYPE).iter().count());
        assert_eq!("application/json", request.headers()[CONTENT_TYPE]);
        assert_eq!("2", request.headers()["content-length"]);
    }

    #[test]
    fn content_length_counts_bytes() {
        let request = build_request(
            http::Request::builder(),
            "CodeCommit_20150413",
            "GetComment",
            r#"{"commentId":"é"}"#.to_string(),
        )
        .unwrap();
        assert_eq!("18", request.headers()["content-length"]);
    }
}
