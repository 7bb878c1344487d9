/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

/// Wraps a serialized payload in the JSON-RPC envelope and points it at the configured endpoint.
fn make_operation<H>(
    config: &Config,
    operation_name: &'static str,
    payload: String,
    handler: H,
) -> Result<Operation<H>, BuildError> {
    let mut request = smithy_http::json_rpc::build_request(
        http::Request::builder(),
        crate::TARGET_PREFIX,
        operation_name,
        payload,
    )?;
    config.endpoint()?.set_endpoint(request.uri_mut())?;
    Ok(Operation::new(
        Request::new(request),
        handler,
        Metadata::new(operation_name, crate::SERVICE_NAME),
    ))
}

/// Input for [`CreateMesh`](crate::operation::CreateMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateMeshInput {
    /// Unique, case-sensitive identifier used to ensure the idempotency of the request.
    pub client_token: std::option::Option<std::string::String>,
    /// The name to use for the service mesh.
    pub mesh_name: std::option::Option<std::string::String>,
    pub spec: std::option::Option<crate::model::MeshSpec>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::TagRef>>,
}
/// See [`CreateMeshInput`](crate::input::CreateMeshInput)
pub mod create_mesh_input {
    /// A builder for [`CreateMeshInput`](crate::input::CreateMeshInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) client_token: std::option::Option<std::string::String>,
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) spec: std::option::Option<crate::model::MeshSpec>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::TagRef>>,
    }
    impl Builder {
        /// Unique, case-sensitive identifier used to ensure the idempotency of the request.
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_token = Some(input.into());
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_token = input;
            self
        }
        /// The name to use for the service mesh.
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_name = Some(input.into());
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_name = input;
            self
        }
        pub fn spec(mut self, input: crate::model::MeshSpec) -> Self {
            self.spec = Some(input);
            self
        }
        pub fn set_spec(mut self, input: std::option::Option<crate::model::MeshSpec>) -> Self {
            self.spec = input;
            self
        }
        pub fn tags(mut self, input: std::vec::Vec<crate::model::TagRef>) -> Self {
            self.tags = Some(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagRef>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateMeshInput`](crate::input::CreateMeshInput)
        pub fn build_input(self) -> crate::input::CreateMeshInput {
            crate::input::CreateMeshInput {
                client_token: self.client_token,
                mesh_name: self.mesh_name,
                spec: self.spec,
                tags: self.tags,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::CreateMesh>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl CreateMeshInput {
    /// Creates a new builder-style object to manufacture [`CreateMeshInput`](crate::input::CreateMeshInput)
    pub fn builder() -> crate::input::create_mesh_input::Builder {
        crate::input::create_mesh_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateMesh>, BuildError> {
        make_operation(
            config,
            "CreateMesh",
            crate::json_ser::serialize_operation_create_mesh(self)?,
            crate::operation::CreateMesh::new(),
        )
    }
}

/// Input for [`DeleteMesh`](crate::operation::DeleteMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteMeshInput {
    pub mesh_name: std::option::Option<std::string::String>,
}
/// See [`DeleteMeshInput`](crate::input::DeleteMeshInput)
pub mod delete_mesh_input {
    /// A builder for [`DeleteMeshInput`](crate::input::DeleteMeshInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_name = Some(input.into());
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteMeshInput`](crate::input::DeleteMeshInput)
        pub fn build_input(self) -> crate::input::DeleteMeshInput {
            crate::input::DeleteMeshInput {
                mesh_name: self.mesh_name,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::DeleteMesh>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl DeleteMeshInput {
    /// Creates a new builder-style object to manufacture [`DeleteMeshInput`](crate::input::DeleteMeshInput)
    pub fn builder() -> crate::input::delete_mesh_input::Builder {
        crate::input::delete_mesh_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteMesh>, BuildError> {
        make_operation(
            config,
            "DeleteMesh",
            crate::json_ser::serialize_operation_delete_mesh(self)?,
            crate::operation::DeleteMesh::new(),
        )
    }
}

/// Input for [`DescribeMesh`](crate::operation::DescribeMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DescribeMeshInput {
    pub mesh_name: std::option::Option<std::string::String>,
    /// The AWS account ID of the mesh owner, when the mesh is shared with you.
    pub mesh_owner: std::option::Option<std::string::String>,
}
/// See [`DescribeMeshInput`](crate::input::DescribeMeshInput)
pub mod describe_mesh_input {
    /// A builder for [`DescribeMeshInput`](crate::input::DescribeMeshInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) mesh_owner: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_name = Some(input.into());
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_name = input;
            self
        }
        /// The AWS account ID of the mesh owner, when the mesh is shared with you.
        pub fn mesh_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_owner = Some(input.into());
            self
        }
        pub fn set_mesh_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_owner = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeMeshInput`](crate::input::DescribeMeshInput)
        pub fn build_input(self) -> crate::input::DescribeMeshInput {
            crate::input::DescribeMeshInput {
                mesh_name: self.mesh_name,
                mesh_owner: self.mesh_owner,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::DescribeMesh>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl DescribeMeshInput {
    /// Creates a new builder-style object to manufacture [`DescribeMeshInput`](crate::input::DescribeMeshInput)
    pub fn builder() -> crate::input::describe_mesh_input::Builder {
        crate::input::describe_mesh_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeMesh>, BuildError> {
        make_operation(
            config,
            "DescribeMesh",
            crate::json_ser::serialize_operation_describe_mesh(self)?,
            crate::operation::DescribeMesh::new(),
        )
    }
}

/// Input for [`DescribeVirtualNode`](crate::operation::DescribeVirtualNode).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DescribeVirtualNodeInput {
    pub mesh_name: std::option::Option<std::string::String>,
    pub mesh_owner: std::option::Option<std::string::String>,
    pub virtual_node_name: std::option::Option<std::string::String>,
}
/// See [`DescribeVirtualNodeInput`](crate::input::DescribeVirtualNodeInput)
pub mod describe_virtual_node_input {
    /// A builder for [`DescribeVirtualNodeInput`](crate::input::DescribeVirtualNodeInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) mesh_owner: std::option::Option<std::string::String>,
        pub(crate) virtual_node_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_name = Some(input.into());
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_name = input;
            self
        }
        pub fn mesh_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.mesh_owner = Some(input.into());
            self
        }
        pub fn set_mesh_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mesh_owner = input;
            self
        }
        pub fn virtual_node_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_node_name = Some(input.into());
            self
        }
        pub fn set_virtual_node_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_node_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeVirtualNodeInput`](crate::input::DescribeVirtualNodeInput)
        pub fn build_input(self) -> crate::input::DescribeVirtualNodeInput {
            crate::input::DescribeVirtualNodeInput {
                mesh_name: self.mesh_name,
                mesh_owner: self.mesh_owner,
                virtual_node_name: self.virtual_node_name,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::DescribeVirtualNode>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl DescribeVirtualNodeInput {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualNodeInput`](crate::input::DescribeVirtualNodeInput)
    pub fn builder() -> crate::input::describe_virtual_node_input::Builder {
        crate::input::describe_virtual_node_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeVirtualNode>, BuildError> {
        make_operation(
            config,
            "DescribeVirtualNode",
            crate::json_ser::serialize_operation_describe_virtual_node(self)?,
            crate::operation::DescribeVirtualNode::new(),
        )
    }
}

/// Input for [`ListMeshes`](crate::operation::ListMeshes).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ListMeshesInput {
    /// The maximum number of results returned in paginated output.
    pub limit: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListMeshesInput`](crate::input::ListMeshesInput)
pub mod list_meshes_input {
    /// A builder for [`ListMeshesInput`](crate::input::ListMeshesInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) limit: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The maximum number of results returned in paginated output.
        pub fn limit(mut self, input: i32) -> Self {
            self.limit = Some(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.limit = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListMeshesInput`](crate::input::ListMeshesInput)
        pub fn build_input(self) -> crate::input::ListMeshesInput {
            crate::input::ListMeshesInput {
                limit: self.limit,
                next_token: self.next_token,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::ListMeshes>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl ListMeshesInput {
    /// Creates a new builder-style object to manufacture [`ListMeshesInput`](crate::input::ListMeshesInput)
    pub fn builder() -> crate::input::list_meshes_input::Builder {
        crate::input::list_meshes_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListMeshes>, BuildError> {
        make_operation(
            config,
            "ListMeshes",
            crate::json_ser::serialize_operation_list_meshes(self)?,
            crate::operation::ListMeshes::new(),
        )
    }
}

/// Input for [`TagResource`](crate::operation::TagResource).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct TagResourceInput {
    pub resource_arn: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::TagRef>>,
}
/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::TagRef>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        pub fn tags(mut self, input: std::vec::Vec<crate::model::TagRef>) -> Self {
            self.tags = Some(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagRef>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build_input(self) -> crate::input::TagResourceInput {
            crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::TagResource>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl TagResourceInput {
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::TagResource>, BuildError> {
        make_operation(
            config,
            "TagResource",
            crate::json_ser::serialize_operation_tag_resource(self)?,
            crate::operation::TagResource::new(),
        )
    }
}
