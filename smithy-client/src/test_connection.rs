/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! Connectors useful for testing.

use crate::{BoxError, Connector};
use bytes::Bytes;
use http::header::{HeaderName, CONTENT_TYPE};
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Test connection used to capture a single request
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<Inner>>);

#[derive(Debug)]
struct Inner {
    response: Option<http::Response<Bytes>>,
    request: Option<http::Request<SdkBody>>,
}

/// Receiver for [`CaptureRequestHandler`](CaptureRequestHandler)
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    inner: Arc<Mutex<Inner>>,
}

impl CaptureRequestReceiver {
    pub fn expect_request(self) -> http::Request<SdkBody> {
        lock(&self.inner)
            .request
            .take()
            .expect("no request was received")
    }
}

impl Connector for CaptureRequestHandler {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        let mut inner = lock(&self.0);
        if inner.request.is_some() {
            return Err("could not handle second request".into());
        }
        inner.request = Some(request);
        inner
            .response
            .take()
            .ok_or_else(|| "no response left to return".into())
    }
}

/// Test connection used to capture a single request
///
/// If response is `None`, it will reply with a 200 response with an empty JSON body.
pub fn capture_request(
    response: Option<http::Response<Bytes>>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let response = response.unwrap_or_else(|| {
        let mut response = http::Response::new(Bytes::from_static(b"{}"));
        *response.status_mut() = http::StatusCode::OK;
        response
    });
    let inner = Arc::new(Mutex::new(Inner {
        response: Some(response),
        request: None,
    }));
    (
        CaptureRequestHandler(inner.clone()),
        CaptureRequestReceiver { inner },
    )
}

type ConnectVec = Vec<(http::Request<SdkBody>, http::Response<Bytes>)>;

#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Asserts the actual request has every expected header (minus `ignore_headers`), the
    /// expected URI and a matching body. JSON bodies are compared structurally.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let media_type = match actual.headers().get(CONTENT_TYPE) {
            Some(content_type) if content_type.as_bytes().windows(4).any(|w| w == b"json") => {
                MediaType::Json
            }
            _ => MediaType::Other("unknown".to_string()),
        };
        match std::str::from_utf8(expected.body().bytes()) {
            Ok(expected_body) => {
                assert_ok(validate_body(actual.body().bytes(), expected_body, media_type))
            }
            Err(_) => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        };
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// TestConnection for use with a [`Client`](crate::Client).
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// ```rust
/// use bytes::Bytes;
/// use smithy_client::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body(Bytes::from_static(b"response body"))
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = smithy_client::Client::new(conn);
/// ```
#[derive(Debug, Clone)]
pub struct TestConnection {
    data: Arc<Mutex<ConnectVec>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl TestConnection {
    pub fn new(mut data: ConnectVec) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = lock(&self.data).len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

impl Connector for TestConnection {
    fn call(&self, actual: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        match lock(&self.data).pop() {
            Some((expected, response)) => {
                lock(&self.requests).push(ValidateRequest { expected, actual });
                Ok(response)
            }
            None => Err("No more data".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{capture_request, TestConnection};
    use crate::Connector;
    use bytes::Bytes;
    use http::header::CONTENT_TYPE;
    use smithy_http::body::SdkBody;

    fn json_request(body: &str) -> http::Request<SdkBody> {
        http::Request::builder()
            .uri("https://example.com/")
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .body(SdkBody::from(body))
            .unwrap()
    }

    #[test]
    fn responses_are_replayed_in_order() {
        let conn = TestConnection::new(vec![
            (json_request("{}"), http::Response::new(Bytes::from_static(b"first"))),
            (json_request("{}"), http::Response::new(Bytes::from_static(b"second"))),
        ]);
        assert_eq!(&b"first"[..], conn.call(json_request("{}")).unwrap().body());
        assert_eq!(&b"second"[..], conn.call(json_request("{ }")).unwrap().body());
        assert!(conn.call(json_request("{}")).is_err());
        assert_eq!(2, conn.requests().len());
        conn.assert_requests_match(&[]);
    }

    #[test]
    #[should_panic]
    fn mismatched_bodies_panic() {
        let conn = TestConnection::new(vec![(
            json_request(r#"{"a":1}"#),
            http::Response::new(Bytes::new()),
        )]);
        conn.call(json_request(r#"{"a":2}"#)).unwrap();
        conn.assert_requests_match(&[]);
    }

    #[test]
    fn capture_single_request() {
        let (conn, request) = capture_request(None);
        let response = conn.call(json_request("hello")).unwrap();
        assert_eq!(200, response.status());
        assert!(conn.call(json_request("again")).is_err());
        assert_eq!(b"hello", request.expect_request().body().bytes());
    }
}
