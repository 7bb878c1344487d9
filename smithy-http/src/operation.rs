/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A fully-built operation: the HTTP request plus the handler that will parse its response.

use crate::body::SdkBody;
use smithy_types::instant::DateTimeFormatError;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// Errors raised while constructing a request. None of these ever reach the network.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] DateTimeFormatError),

    #[error("invalid endpoint `{uri}`: {message}")]
    InvalidEndpoint {
        uri: String,
        message: Cow<'static, str>,
    },

    #[error("failed to build the HTTP request: {0}")]
    InvalidRequest(#[from] http::Error),
}

#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    handler: H,
    metadata: Metadata,
}

impl<H> Operation<H> {
    pub fn new(request: Request, handler: H, metadata: Metadata) -> Self {
        Operation {
            request,
            handler,
            metadata,
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn into_parts(self) -> (Request, H, Metadata) {
        (self.request, self.handler, self.metadata)
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request { inner: base }
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn into_http(self) -> http::Request<SdkBody> {
        self.inner
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};

    #[test]
    fn operation_parts() {
        let op = Operation::new(
            Request::new(http::Request::new(SdkBody::empty())),
            (),
            Metadata::new("GetRepository", "codecommit"),
        );
        assert_eq!("GetRepository", op.metadata().name());
        assert_eq!("codecommit", op.metadata().service());
        let (_request, (), metadata) = op.into_parts();
        assert_eq!(Metadata::new("GetRepository", "codecommit"), metadata);
    }

    #[test]
    fn build_error_messages() {
        let err = BuildError::InvalidEndpoint {
            uri: "not a uri".to_string(),
            message: "invalid uri character".into(),
        };
        assert_eq!(
            "invalid endpoint `not a uri`: invalid uri character",
            err.to_string()
        );
    }
}
