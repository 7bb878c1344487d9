/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

const REGION_ENV_VARS: &[&str] = &["AWS_REGION", "AWS_DEFAULT_REGION"];

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    /// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Option<Self> {
        Self::from_env_fn(|key| std::env::var(key).ok())
    }

    fn from_env_fn(env: impl Fn(&str) -> Option<String>) -> Option<Self> {
        for key in REGION_ENV_VARS {
            match env(key) {
                Some(region) if !region.trim().is_empty() => {
                    tracing::debug!(source = %key, region = %region, "loaded region from environment");
                    return Some(Region::new(region));
                }
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::Region;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn aws_region_wins() {
        let region = Region::from_env_fn(env(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(Some(Region::from_static("us-west-2")), region);
    }

    #[test]
    fn falls_back_to_default_region() {
        let region = Region::from_env_fn(env(&[("AWS_REGION", ""), ("AWS_DEFAULT_REGION", "eu-west-1")]));
        assert_eq!(Some(Region::new("eu-west-1")), region);
        assert_eq!(None, Region::from_env_fn(env(&[])));
    }

    #[test]
    fn display() {
        assert_eq!("us-east-1", Region::from_static("us-east-1").to_string());
    }
}
