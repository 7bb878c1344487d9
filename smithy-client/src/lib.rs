/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A blocking client for the generated JSON-RPC service crates.
//!
//! The client owns a [`Connector`] and turns an [`Operation`] into a typed result: it sends
//! the operation's request through the connector and hands the buffered response to the
//! operation's [`ParseStrictResponse`] handler.

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

#[cfg(feature = "ureq")]
mod ureq_connector;
#[cfg(feature = "ureq")]
pub use ureq_connector::UreqConnector;

use bytes::Bytes;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::{ParseError, ParseStrictResponse};
use smithy_http::result::{SdkError, SdkSuccess};
use std::sync::Arc;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Sends an HTTP request and returns the fully buffered response.
///
/// Non-2xx statuses are responses, not errors: only failures to get any response at all
/// (connection refused, timeouts, TLS errors) are returned as `Err`.
pub trait Connector: Send + Sync {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError>;
}

impl<C: Connector + ?Sized> Connector for Box<C> {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        (**self).call(request)
    }
}

impl<C: Connector + ?Sized> Connector for Arc<C> {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        (**self).call(request)
    }
}

/// A type-erased connector.
pub type DynConnector = Box<dyn Connector>;

#[derive(Debug)]
pub struct Client<C> {
    connector: C,
}

impl<C> Client<C> {
    pub fn new(connector: C) -> Self {
        Client { connector }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}

impl<C: Connector> Client<C> {
    /// Dispatches an operation and returns the parsed output.
    pub fn call<H, O, E>(&self, operation: Operation<H>) -> Result<O, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<O, ParseError<E>>>,
    {
        self.call_raw(operation).map(|success| success.parsed)
    }

    /// Dispatches an operation and returns the parsed output along with the raw response.
    pub fn call_raw<H, O, E>(&self, operation: Operation<H>) -> Result<SdkSuccess<O>, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<O, ParseError<E>>>,
    {
        let (request, handler, metadata) = operation.into_parts();
        let span = tracing::debug_span!(
            "send_operation",
            operation = metadata.name(),
            service = metadata.service()
        );
        let _entered = span.enter();

        let request = request.into_http();
        tracing::debug!(method = %request.method(), uri = %request.uri(), "dispatching request");
        let raw = match self.connector.call(request) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(error = %err, "dispatch failed");
                return Err(SdkError::DispatchFailure(err));
            }
        };
        tracing::debug!(status = %raw.status(), "received response");

        match handler.parse(&raw) {
            Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
            Err(ParseError::Service(err)) => Err(SdkError::ServiceError { raw, err }),
            Err(ParseError::Unparseable(err)) => {
                tracing::debug!(error = %err, "response could not be parsed");
                Err(SdkError::ResponseError { raw, err })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::test_connection::TestConnection;
    use crate::{BoxError, Client, Connector};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{Metadata, Operation, Request};
    use smithy_http::response::{ParseError, ParseStrictResponse};
    use smithy_http::result::SdkError;

    /// Succeeds with the body text on 200, fails with the status otherwise.
    struct Echo;

    impl ParseStrictResponse for Echo {
        type Output = Result<String, ParseError<u16>>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            match response.status().as_u16() {
                200 => String::from_utf8(response.body().to_vec())
                    .map_err(|err| ParseError::Unparseable(err.into())),
                status => Err(ParseError::Service(status)),
            }
        }
    }

    fn operation(body: &str) -> Operation<Echo> {
        Operation::new(
            Request::new(
                http::Request::builder()
                    .method("POST")
                    .uri("https://example.com/")
                    .body(SdkBody::from(body))
                    .unwrap(),
            ),
            Echo,
            Metadata::new("Echo", "test"),
        )
    }

    fn response(status: u16, body: &'static [u8]) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body))
            .unwrap()
    }

    fn expected_request(body: &str) -> http::Request<SdkBody> {
        http::Request::builder()
            .uri("https://example.com/")
            .body(SdkBody::from(body))
            .unwrap()
    }

    #[test]
    fn success_is_parsed() {
        let conn = TestConnection::new(vec![(expected_request("hi"), response(200, b"hello"))]);
        let client = Client::new(conn.clone());
        assert_eq!("hello", client.call(operation("hi")).unwrap());
        conn.assert_requests_match(&[]);
    }

    #[test]
    fn failures_are_classified() {
        let conn = TestConnection::new(vec![
            (expected_request("a"), response(404, b"")),
            (expected_request("b"), response(200, b"\xff")),
        ]);
        let client = Client::new(conn.clone());
        match client.call(operation("a")) {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(404, err);
                assert_eq!(404, raw.status());
            }
            other => panic!("expected a service error, got {:?}", other),
        }
        match client.call(operation("b")) {
            Err(SdkError::ResponseError { .. }) => {}
            other => panic!("expected a response error, got {:?}", other),
        }
        conn.assert_requests_match(&[]);
    }

    #[test]
    fn dispatch_failures_are_reported() {
        struct Refuse;
        impl Connector for Refuse {
            fn call(
                &self,
                _request: http::Request<SdkBody>,
            ) -> Result<http::Response<Bytes>, BoxError> {
                Err("connection refused".into())
            }
        }
        let client = Client::new(Box::new(Refuse) as crate::DynConnector);
        match client.call(operation("a")) {
            Err(SdkError::DispatchFailure(err)) => assert_eq!("connection refused", err.to_string()),
            other => panic!("expected a dispatch failure, got {:?}", other),
        }
    }
}
