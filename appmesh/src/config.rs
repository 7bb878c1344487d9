/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;
use smithy_http::operation::BuildError;
use std::time::Duration;

static DEFAULT_REGION: Region = Region::from_static("us-east-1");

/// Service configuration: where requests go and how long the default connector waits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
    timeout: Option<Duration>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from `AWS_REGION` / `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Builder::default().set_region(Region::from_env()).build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The endpoint requests are sent to.
    ///
    /// An explicit endpoint wins. Otherwise the regional endpoint
    /// `https://appmesh.{region}.amazonaws.com` is used, with `us-east-1` standing in for a
    /// missing region.
    pub fn endpoint(&self) -> Result<Endpoint, BuildError> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let region = self.region.as_ref().unwrap_or(&DEFAULT_REGION);
        Endpoint::parse(&format!(
            "https://{}.{}.amazonaws.com",
            crate::ENDPOINT_PREFIX,
            region
        ))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint: Option<Endpoint>,
    timeout: Option<Duration>,
}

impl Builder {
    pub fn region(self, region: impl Into<Region>) -> Self {
        self.set_region(Some(region.into()))
    }

    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Overrides the regional endpoint, e.g. to talk to a local stand-in for the service.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Read timeout for the default connector.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint: self.endpoint,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use aws_types::region::Region;
    use smithy_http::endpoint::Endpoint;
    use std::time::Duration;

    #[test]
    fn regional_endpoint() {
        let conf = Config::builder().region(Region::new("ap-southeast-2")).build();
        assert_eq!(
            conf.endpoint().unwrap().uri().to_string(),
            "https://appmesh.ap-southeast-2.amazonaws.com/"
        );
    }

    #[test]
    fn missing_region_uses_us_east_1() {
        let conf = Config::builder().build();
        assert_eq!(conf.region(), None);
        assert_eq!(
            conf.endpoint().unwrap().uri().to_string(),
            "https://appmesh.us-east-1.amazonaws.com/"
        );
    }

    #[test]
    fn explicit_endpoint_wins() {
        let conf = Config::builder()
            .region(Region::new("ap-southeast-2"))
            .endpoint(Endpoint::parse("http://localhost:8080").unwrap())
            .timeout(Duration::from_secs(3))
            .build();
        assert_eq!(
            conf.endpoint().unwrap().uri().to_string(),
            "http://localhost:8080/"
        );
        assert_eq!(conf.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn unparseable_region_is_a_build_error() {
        let conf = Config::builder().region(Region::new("not a region")).build();
        assert!(conf.endpoint().is_err());
    }
}
