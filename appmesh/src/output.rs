/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Output of [`CreateMesh`](crate::operation::CreateMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateMeshOutput {
    pub mesh: std::option::Option<crate::model::MeshData>,
}
/// See [`CreateMeshOutput`](crate::output::CreateMeshOutput)
pub mod create_mesh_output {
    /// A builder for [`CreateMeshOutput`](crate::output::CreateMeshOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh: std::option::Option<crate::model::MeshData>,
    }
    impl Builder {
        pub fn mesh(mut self, input: crate::model::MeshData) -> Self {
            self.mesh = Some(input);
            self
        }
        pub fn set_mesh(mut self, input: std::option::Option<crate::model::MeshData>) -> Self {
            self.mesh = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateMeshOutput`](crate::output::CreateMeshOutput)
        pub fn build(self) -> crate::output::CreateMeshOutput {
            crate::output::CreateMeshOutput {
                mesh: self.mesh,
            }
        }
    }
}
impl CreateMeshOutput {
    /// Creates a new builder-style object to manufacture [`CreateMeshOutput`](crate::output::CreateMeshOutput)
    pub fn builder() -> crate::output::create_mesh_output::Builder {
        crate::output::create_mesh_output::Builder::default()
    }
}

/// Output of [`DeleteMesh`](crate::operation::DeleteMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteMeshOutput {
    pub mesh: std::option::Option<crate::model::MeshData>,
}
/// See [`DeleteMeshOutput`](crate::output::DeleteMeshOutput)
pub mod delete_mesh_output {
    /// A builder for [`DeleteMeshOutput`](crate::output::DeleteMeshOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh: std::option::Option<crate::model::MeshData>,
    }
    impl Builder {
        pub fn mesh(mut self, input: crate::model::MeshData) -> Self {
            self.mesh = Some(input);
            self
        }
        pub fn set_mesh(mut self, input: std::option::Option<crate::model::MeshData>) -> Self {
            self.mesh = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteMeshOutput`](crate::output::DeleteMeshOutput)
        pub fn build(self) -> crate::output::DeleteMeshOutput {
            crate::output::DeleteMeshOutput {
                mesh: self.mesh,
            }
        }
    }
}
impl DeleteMeshOutput {
    /// Creates a new builder-style object to manufacture [`DeleteMeshOutput`](crate::output::DeleteMeshOutput)
    pub fn builder() -> crate::output::delete_mesh_output::Builder {
        crate::output::delete_mesh_output::Builder::default()
    }
}

/// Output of [`DescribeMesh`](crate::operation::DescribeMesh).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DescribeMeshOutput {
    pub mesh: std::option::Option<crate::model::MeshData>,
}
/// See [`DescribeMeshOutput`](crate::output::DescribeMeshOutput)
pub mod describe_mesh_output {
    /// A builder for [`DescribeMeshOutput`](crate::output::DescribeMeshOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh: std::option::Option<crate::model::MeshData>,
    }
    impl Builder {
        pub fn mesh(mut self, input: crate::model::MeshData) -> Self {
            self.mesh = Some(input);
            self
        }
        pub fn set_mesh(mut self, input: std::option::Option<crate::model::MeshData>) -> Self {
            self.mesh = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeMeshOutput`](crate::output::DescribeMeshOutput)
        pub fn build(self) -> crate::output::DescribeMeshOutput {
            crate::output::DescribeMeshOutput {
                mesh: self.mesh,
            }
        }
    }
}
impl DescribeMeshOutput {
    /// Creates a new builder-style object to manufacture [`DescribeMeshOutput`](crate::output::DescribeMeshOutput)
    pub fn builder() -> crate::output::describe_mesh_output::Builder {
        crate::output::describe_mesh_output::Builder::default()
    }
}

/// Output of [`DescribeVirtualNode`](crate::operation::DescribeVirtualNode).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DescribeVirtualNodeOutput {
    pub virtual_node: std::option::Option<crate::model::VirtualNodeData>,
}
/// See [`DescribeVirtualNodeOutput`](crate::output::DescribeVirtualNodeOutput)
pub mod describe_virtual_node_output {
    /// A builder for [`DescribeVirtualNodeOutput`](crate::output::DescribeVirtualNodeOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_node: std::option::Option<crate::model::VirtualNodeData>,
    }
    impl Builder {
        pub fn virtual_node(mut self, input: crate::model::VirtualNodeData) -> Self {
            self.virtual_node = Some(input);
            self
        }
        pub fn set_virtual_node(mut self, input: std::option::Option<crate::model::VirtualNodeData>) -> Self {
            self.virtual_node = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeVirtualNodeOutput`](crate::output::DescribeVirtualNodeOutput)
        pub fn build(self) -> crate::output::DescribeVirtualNodeOutput {
            crate::output::DescribeVirtualNodeOutput {
                virtual_node: self.virtual_node,
            }
        }
    }
}
impl DescribeVirtualNodeOutput {
    /// Creates a new builder-style object to manufacture [`DescribeVirtualNodeOutput`](crate::output::DescribeVirtualNodeOutput)
    pub fn builder() -> crate::output::describe_virtual_node_output::Builder {
        crate::output::describe_virtual_node_output::Builder::default()
    }
}

/// Output of [`ListMeshes`](crate::operation::ListMeshes).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ListMeshesOutput {
    pub meshes: std::option::Option<std::vec::Vec<crate::model::MeshRef>>,
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`ListMeshesOutput`](crate::output::ListMeshesOutput)
pub mod list_meshes_output {
    /// A builder for [`ListMeshesOutput`](crate::output::ListMeshesOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) meshes: std::option::Option<std::vec::Vec<crate::model::MeshRef>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn meshes(mut self, input: std::vec::Vec<crate::model::MeshRef>) -> Self {
            self.meshes = Some(input);
            self
        }
        pub fn set_meshes(mut self, input: std::option::Option<std::vec::Vec<crate::model::MeshRef>>) -> Self {
            self.meshes = input;
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
        /// Consumes the builder and constructs a [`ListMeshesOutput`](crate::output::ListMeshesOutput)
        pub fn build(self) -> crate::output::ListMeshesOutput {
            crate::output::ListMeshesOutput {
                meshes: self.meshes,
                next_token: self.next_token,
            }
        }
    }
}
impl ListMeshesOutput {
    /// Creates a new builder-style object to manufacture [`ListMeshesOutput`](crate::output::ListMeshesOutput)
    pub fn builder() -> crate::output::list_meshes_output::Builder {
        crate::output::list_meshes_output::Builder::default()
    }
}

/// Output of [`TagResource`](crate::operation::TagResource).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct TagResourceOutput {
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput)
pub mod tag_resource_output {
    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput)
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {
            }
        }
    }
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput)
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}
