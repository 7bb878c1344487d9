/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::operation::BuildError;
use http::uri::Uri;
use std::borrow::Cow;

/// The base URI a service client sends its requests to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// Creates an endpoint from a URI. The URI must carry a scheme and an authority.
    pub fn new(uri: Uri) -> Result<Self, BuildError> {
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(BuildError::InvalidEndpoint {
                uri: uri.to_string(),
                message: "endpoint must have a scheme and an authority".into(),
            });
        }
        Ok(Endpoint { uri })
    }

    pub fn parse(uri: &str) -> Result<Self, BuildError> {
        let parsed = uri.parse::<Uri>().map_err(|err| BuildError::InvalidEndpoint {
            uri: uri.to_string(),
            message: err.to_string().into(),
        })?;
        Self::new(parsed)
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Rewrites `uri` to point at this endpoint. The endpoint's path, if any, is prefixed to
    /// the request path.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), BuildError> {
        let mut builder = Uri::builder().path_and_query(Self::merge_paths(&self.uri, uri).as_ref());
        if let Some(scheme) = self.uri.scheme() {
            builder = builder.scheme(scheme.clone());
        }
        if let Some(authority) = self.uri.authority() {
            builder = builder.authority(authority.clone());
        }
        *uri = builder.build().map_err(|err| BuildError::InvalidEndpoint {
            uri: self.uri.to_string(),
            message: err.to_string().into(),
        })?;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use super::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let endpoint = Endpoint::parse("https://codecommit.us-east-1.amazonaws.com").unwrap();
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            Uri::from_static("https://codecommit.us-east-1.amazonaws.com/"),
            uri
        );
    }

    #[test]
    fn endpoint_paths_are_prefixed() {
        let endpoint = Endpoint::parse("http://localhost:8080/proxy/").unwrap();
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).unwrap();
        assert_eq!(Uri::from_static("http://localhost:8080/proxy/"), uri);
    }

    #[test]
    fn endpoints_need_a_host() {
        assert!(Endpoint::parse("/just/a/path").is_err());
        assert!(Endpoint::parse("not a uri").is_err());
    }
}
