/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]
#![allow(clippy::wrong_self_convention)]

//! A client for AWS CodeCommit, a version control service for privately stored Git
//! repositories.
//!
//! Requests use the AWS JSON 1.1 protocol: every operation is a `POST` to `/` whose target is
//! named in the `X-Amz-Target` header.
//!
//! ```no_run
//! let client = codecommit::Client::from_env();
//! let repo = client
//!     .get_repository()
//!     .repository_name("my-repo")
//!     .send()?;
//! println!("{:?}", repo.repository_metadata);
//! # Ok::<(), codecommit::SdkError<codecommit::CodeCommitError>>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod json_deser;
pub mod json_ser;
pub mod model;
pub mod operation;
pub mod output;

pub use aws_types::region::Region;
pub use client::Client;
pub use config::Config;
pub use error::{CodeCommitError, CodeCommitErrorKind};
pub use smithy_http::result::SdkError;
pub use smithy_types::{Blob, Instant};

/// Prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "CodeCommit_20150413";
/// First label of the regional endpoint host.
pub const ENDPOINT_PREFIX: &str = "codecommit";
pub const SERVICE_NAME: &str = "codecommit";
pub(crate) const TIMESTAMP_FORMAT: smithy_types::instant::Format =
    smithy_types::instant::Format::EpochSeconds;

#[cfg(test)]
mod test;
