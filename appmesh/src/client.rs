/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Fluent client: one method per operation, each returning a builder whose `send` dispatches
//! the request and blocks for the result.

use crate::config::Config;
use smithy_client::{Connector, DynConnector};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle<C> {
    client: smithy_client::Client<C>,
    conf: Config,
}

/// A client for AWS App Mesh.
#[derive(Debug)]
pub struct Client<C = DynConnector> {
    handle: Arc<Handle<C>>,
}

impl<C> std::clone::Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let client = smithy_client::Client::new(conn);
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

#[cfg(feature = "ureq")]
impl Client<DynConnector> {
    /// A client that sends requests over the default blocking HTTP connector.
    pub fn from_conf(conf: Config) -> Self {
        let conn = match conf.timeout() {
            Some(timeout) => smithy_client::UreqConnector::with_timeout(timeout),
            None => smithy_client::UreqConnector::new(),
        };
        Self::from_conf_conn(conf, Box::new(conn) as DynConnector)
    }

    /// A client configured from the environment. See [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }
}

impl<C: Connector> Client<C> {
    pub fn create_mesh(&self) -> fluent_builders::CreateMesh<C> {
        fluent_builders::CreateMesh::new(self.handle.clone())
    }
    pub fn delete_mesh(&self) -> fluent_builders::DeleteMesh<C> {
        fluent_builders::DeleteMesh::new(self.handle.clone())
    }
    pub fn describe_mesh(&self) -> fluent_builders::DescribeMesh<C> {
        fluent_builders::DescribeMesh::new(self.handle.clone())
    }
    pub fn describe_virtual_node(&self) -> fluent_builders::DescribeVirtualNode<C> {
        fluent_builders::DescribeVirtualNode::new(self.handle.clone())
    }
    pub fn list_meshes(&self) -> fluent_builders::ListMeshes<C> {
        fluent_builders::ListMeshes::new(self.handle.clone())
    }
    pub fn tag_resource(&self) -> fluent_builders::TagResource<C> {
        fluent_builders::TagResource::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use crate::error::AppMeshError;
    use smithy_client::Connector;
    use smithy_http::result::SdkError;
    use std::sync::Arc;

    #[derive(std::fmt::Debug)]
    pub struct CreateMesh<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_mesh_input::Builder,
    }
    impl<C: Connector> CreateMesh<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::CreateMeshOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        /// Unique, case-sensitive identifier used to ensure the idempotency of the request.
        pub fn client_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(input);
            self
        }
        pub fn set_client_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(input);
            self
        }
        /// The name to use for the service mesh.
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_name(input);
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_name(input);
            self
        }
        pub fn spec(mut self, input: crate::model::MeshSpec) -> Self {
            self.inner = self.inner.spec(input);
            self
        }
        pub fn set_spec(mut self, input: std::option::Option<crate::model::MeshSpec>) -> Self {
            self.inner = self.inner.set_spec(input);
            self
        }
        pub fn tags(mut self, input: std::vec::Vec<crate::model::TagRef>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagRef>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteMesh<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_mesh_input::Builder,
    }
    impl<C: Connector> DeleteMesh<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::DeleteMeshOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_name(input);
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_name(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeMesh<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_mesh_input::Builder,
    }
    impl<C: Connector> DescribeMesh<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::DescribeMeshOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_name(input);
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_name(input);
            self
        }
        /// The AWS account ID of the mesh owner, when the mesh is shared with you.
        pub fn mesh_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_owner(input);
            self
        }
        pub fn set_mesh_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_owner(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeVirtualNode<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::describe_virtual_node_input::Builder,
    }
    impl<C: Connector> DescribeVirtualNode<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::DescribeVirtualNodeOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn mesh_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_name(input);
            self
        }
        pub fn set_mesh_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_name(input);
            self
        }
        pub fn mesh_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.mesh_owner(input);
            self
        }
        pub fn set_mesh_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_mesh_owner(input);
            self
        }
        pub fn virtual_node_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.virtual_node_name(input);
            self
        }
        pub fn set_virtual_node_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_virtual_node_name(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListMeshes<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::list_meshes_input::Builder,
    }
    impl<C: Connector> ListMeshes<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::ListMeshesOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        /// The maximum number of results returned in paginated output.
        pub fn limit(mut self, input: i32) -> Self {
            self.inner = self.inner.limit(input);
            self
        }
        pub fn set_limit(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_limit(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct TagResource<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::tag_resource_input::Builder,
    }
    impl<C: Connector> TagResource<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::TagResourceOutput, SdkError<AppMeshError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
        pub fn tags(mut self, input: std::vec::Vec<crate::model::TagRef>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::TagRef>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
}
