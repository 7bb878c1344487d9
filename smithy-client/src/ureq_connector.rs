/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{BoxError, Connector};
use bytes::Bytes;
use smithy_http::body::SdkBody;
use std::io::Read;
use std::time::Duration;

/// A [`Connector`] backed by a blocking [`ureq::Agent`].
#[derive(Debug, Clone)]
pub struct UreqConnector {
    agent: ureq::Agent,
}

impl Default for UreqConnector {
    fn default() -> Self {
        Self::from_agent(ureq::AgentBuilder::new().build())
    }
}

impl UreqConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector whose requests fail once `timeout` elapses without a complete response.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::from_agent(ureq::AgentBuilder::new().timeout(timeout).build())
    }

    pub fn from_agent(agent: ureq::Agent) -> Self {
        UreqConnector { agent }
    }
}

impl Connector for UreqConnector {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        let (parts, body) = request.into_parts();
        let mut outgoing = self
            .agent
            .request(parts.method.as_str(), &parts.uri.to_string());
        for (name, value) in parts.headers.iter() {
            outgoing = outgoing.set(name.as_str(), value.to_str()?);
        }
        let response = match outgoing.send_bytes(body.bytes()) {
            Ok(response) => response,
            // error statuses still carry a protocol response
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(err)) => return Err(Box::new(err)),
        };

        let mut builder = http::Response::builder().status(response.status());
        for name in response.headers_names() {
            for value in response.all(&name) {
                builder = builder.header(name.as_str(), value);
            }
        }
        let mut payload = Vec::new();
        response.into_reader().read_to_end(&mut payload)?;
        Ok(builder.body(Bytes::from(payload))?)
    }
}
