/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]
#![allow(clippy::wrong_self_convention)]

//! A client for AWS App Mesh, a service mesh that standardizes how services communicate and
//! gives end-to-end visibility of application traffic.
//!
//! ```no_run
//! use appmesh::model::{EgressFilter, EgressFilterType, MeshSpec};
//!
//! let client = appmesh::Client::from_env();
//! let created = client
//!     .create_mesh()
//!     .mesh_name("my-mesh")
//!     .spec(
//!         MeshSpec::builder()
//!             .egress_filter(EgressFilter::builder().r#type(EgressFilterType::AllowAll).build())
//!             .build(),
//!     )
//!     .send()?;
//! println!("{:?}", created.mesh);
//! # Ok::<(), appmesh::SdkError<appmesh::AppMeshError>>(())
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
pub use error::{AppMeshError, AppMeshErrorKind};
pub use smithy_http::result::SdkError;
pub use smithy_types::Instant;

/// Prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "AppMesh_20190125";
/// First label of the regional endpoint host.
pub const ENDPOINT_PREFIX: &str = "appmesh";
pub const SERVICE_NAME: &str = "appmesh";
pub(crate) const TIMESTAMP_FORMAT: smithy_types::instant::Format =
    smithy_types::instant::Format::EpochSeconds;

#[cfg(test)]
mod test;
