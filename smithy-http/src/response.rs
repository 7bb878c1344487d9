/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Parses a fully buffered HTTP response.
///
/// Each operation has a zero-sized handler implementing this trait. The handler receives
/// every response, success or failure, and decides which one it is.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Why a response handler did not produce an output.
#[derive(Debug)]
pub enum ParseError<E> {
    /// The service answered with an error.
    Service(E),
    /// The response did not follow the protocol, e.g. a success body that is not valid JSON.
    Unparseable(BoxError),
}

impl<E: fmt::Display> fmt::Display for ParseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Service(err) => write!(f, "{}", err),
            ParseError::Unparseable(err) => write!(f, "unparseable response: {}", err),
        }
    }
}

impl<E> ParseError<E> {
    pub fn unparseable(err: impl Into<BoxError>) -> Self {
        ParseError::Unparseable(err.into())
    }
}
