/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one zero-sized type per operation.

use crate::error::AppMeshError;
use bytes::Bytes;
use smithy_http::response::{ParseError, ParseStrictResponse};
use smithy_json::deserialize::DeserializeError;
use smithy_json::json_errors::parse_generic_error;

/// Success statuses decode the output document; anything else is classified as a service
/// error.
fn parse_response<O>(
    response: &http::Response<Bytes>,
    parse_output: fn(&[u8]) -> Result<O, DeserializeError>,
) -> Result<O, ParseError<AppMeshError>> {
    if response.status().is_success() {
        return parse_output(response.body()).map_err(ParseError::unparseable);
    }
    let meta = parse_generic_error(response.headers(), response.body())
        .map_err(ParseError::unparseable)?;
    let err = AppMeshError::from_meta(meta);
    if err.is_unhandled() {
        tracing::trace!(code = ?err.code(), status = %response.status(), "unrecognized error code");
    }
    Err(ParseError::Service(err))
}

/// Creates a service mesh.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct CreateMesh {
    _private: (),
}
impl CreateMesh {
    /// Creates a new builder-style object to manufacture [`CreateMeshInput`](crate::input::CreateMeshInput)
    pub fn builder() -> crate::input::create_mesh_input::Builder {
        crate::input::create_mesh_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateMesh {
    type Output = Result<crate::output::CreateMeshOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_create_mesh)
    }
}

/// Deletes an existing service mesh.
///
/// All virtual services, virtual nodes and virtual routers in the mesh must be deleted first.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DeleteMesh {
    _private: (),
}
impl DeleteMesh {
    /// Creates a new builder-style object to manufacture [`DeleteMeshInput`](crate::input::DeleteMeshInput)
    pub fn builder() -> crate::input::delete_mesh_input::Builder {
        crate::input::delete_mesh_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteMesh {
    type Output = Result<crate::output::DeleteMeshOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_delete_mesh)
    }
}

/// Describes an existing service mesh.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DescribeMesh {
    _private: (),
}
impl DescribeMesh {
    /// Creates a new builder-style object to manufacture [`DescribeMeshInput`](crate::input::DescribeMeshInput)
    pub fn builder() -> crate::input::describe_mesh_input::Builder {
        crate::input::describe_mesh_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeMesh {
    type Output = Result<crate::output::DescribeMeshOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_describe_mesh)
    }
}

/// Describes an existing virtual node.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DescribeVirtualNode {
    _private: (),
}
impl DescribeVirtualNode {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualNodeInput`](crate::input::DescribeVirtualNodeInput)
    pub fn builder() -> crate::input::describe_virtual_node_input::Builder {
        crate::input::describe_virtual_node_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DescribeVirtualNode {
    type Output = Result<crate::output::DescribeVirtualNodeOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_describe_virtual_node)
    }
}

/// Returns a list of existing service meshes.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct ListMeshes {
    _private: (),
}
impl ListMeshes {
    /// Creates a new builder-style object to manufacture [`ListMeshesInput`](crate::input::ListMeshesInput)
    pub fn builder() -> crate::input::list_meshes_input::Builder {
        crate::input::list_meshes_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for ListMeshes {
    type Output = Result<crate::output::ListMeshesOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_list_meshes)
    }
}

/// Associates the specified tags to a resource.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct TagResource {
    _private: (),
}
impl TagResource {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for TagResource {
    type Output = Result<crate::output::TagResourceOutput, ParseError<AppMeshError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_tag_resource)
    }
}
