/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data structures shared by the operation inputs and outputs.

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum EgressFilterType {
    AllowAll,
    DropAll,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for EgressFilterType {
    fn from(s: &str) -> Self {
        match s {
            "ALLOW_ALL" => EgressFilterType::AllowAll,
            "DROP_ALL" => EgressFilterType::DropAll,
            other => EgressFilterType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EgressFilterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EgressFilterType::from(s))
    }
}
impl EgressFilterType {
    pub fn as_str(&self) -> &str {
        match self {
            EgressFilterType::AllowAll => "ALLOW_ALL",
            EgressFilterType::DropAll => "DROP_ALL",
            EgressFilterType::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["ALLOW_ALL", "DROP_ALL"]
    }
}
impl std::convert::AsRef<str> for EgressFilterType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum MeshStatusCode {
    Active,
    Deleted,
    Inactive,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for MeshStatusCode {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => MeshStatusCode::Active,
            "DELETED" => MeshStatusCode::Deleted,
            "INACTIVE" => MeshStatusCode::Inactive,
            other => MeshStatusCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MeshStatusCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MeshStatusCode::from(s))
    }
}
impl MeshStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            MeshStatusCode::Active => "ACTIVE",
            MeshStatusCode::Deleted => "DELETED",
            MeshStatusCode::Inactive => "INACTIVE",
            MeshStatusCode::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "DELETED", "INACTIVE"]
    }
}
impl std::convert::AsRef<str> for MeshStatusCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum PortProtocol {
    Grpc,
    Http,
    Http2,
    Tcp,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for PortProtocol {
    fn from(s: &str) -> Self {
        match s {
            "grpc" => PortProtocol::Grpc,
            "http" => PortProtocol::Http,
            "http2" => PortProtocol::Http2,
            "tcp" => PortProtocol::Tcp,
            other => PortProtocol::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PortProtocol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PortProtocol::from(s))
    }
}
impl PortProtocol {
    pub fn as_str(&self) -> &str {
        match self {
            PortProtocol::Grpc => "grpc",
            PortProtocol::Http => "http",
            PortProtocol::Http2 => "http2",
            PortProtocol::Tcp => "tcp",
            PortProtocol::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["grpc", "http", "http2", "tcp"]
    }
}
impl std::convert::AsRef<str> for PortProtocol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum VirtualNodeStatusCode {
    Active,
    Deleted,
    Inactive,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for VirtualNodeStatusCode {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => VirtualNodeStatusCode::Active,
            "DELETED" => VirtualNodeStatusCode::Deleted,
            "INACTIVE" => VirtualNodeStatusCode::Inactive,
            other => VirtualNodeStatusCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for VirtualNodeStatusCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(VirtualNodeStatusCode::from(s))
    }
}
impl VirtualNodeStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            VirtualNodeStatusCode::Active => "ACTIVE",
            VirtualNodeStatusCode::Deleted => "DELETED",
            VirtualNodeStatusCode::Inactive => "INACTIVE",
            VirtualNodeStatusCode::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "DELETED", "INACTIVE"]
    }
}
impl std::convert::AsRef<str> for VirtualNodeStatusCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A backend a virtual node is expected to send outbound traffic to.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Backend {
    pub virtual_service: std::option::Option<crate::model::VirtualServiceBackend>,
}
/// See [`Backend`](crate::model::Backend)
pub mod backend {
    /// A builder for [`Backend`](crate::model::Backend)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_service: std::option::Option<crate::model::VirtualServiceBackend>,
    }
    impl Builder {
        pub fn virtual_service(mut self, input: crate::model::VirtualServiceBackend) -> Self {
            self.virtual_service = Some(input);
            self
        }
        pub fn set_virtual_service(mut self, input: std::option::Option<crate::model::VirtualServiceBackend>) -> Self {
            self.virtual_service = input;
            self
        }
        /// Consumes the builder and constructs a [`Backend`](crate::model::Backend)
        pub fn build(self) -> crate::model::Backend {
            crate::model::Backend {
                virtual_service: self.virtual_service,
            }
        }
    }
}
impl Backend {
    /// Creates a new builder-style object to manufacture [`Backend`](crate::model::Backend)
    pub fn builder() -> crate::model::backend::Builder {
        crate::model::backend::Builder::default()
    }
}

/// DNS service discovery information for a virtual node.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DnsServiceDiscovery {
    /// The DNS service discovery hostname for the virtual node.
    pub hostname: std::option::Option<std::string::String>,
}
/// See [`DnsServiceDiscovery`](crate::model::DnsServiceDiscovery)
pub mod dns_service_discovery {
    /// A builder for [`DnsServiceDiscovery`](crate::model::DnsServiceDiscovery)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) hostname: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The DNS service discovery hostname for the virtual node.
        pub fn hostname(mut self, input: impl Into<std::string::String>) -> Self {
            self.hostname = Some(input.into());
            self
        }
        pub fn set_hostname(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hostname = input;
            self
        }
        /// Consumes the builder and constructs a [`DnsServiceDiscovery`](crate::model::DnsServiceDiscovery)
        pub fn build(self) -> crate::model::DnsServiceDiscovery {
            crate::model::DnsServiceDiscovery {
                hostname: self.hostname,
            }
        }
    }
}
impl DnsServiceDiscovery {
    /// Creates a new builder-style object to manufacture [`DnsServiceDiscovery`](crate::model::DnsServiceDiscovery)
    pub fn builder() -> crate::model::dns_service_discovery::Builder {
        crate::model::dns_service_discovery::Builder::default()
    }
}

/// The egress filter rules for a service mesh.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct EgressFilter {
    /// The egress filter type. `ALLOW_ALL` allows egress to any endpoint inside or outside of the mesh.
    pub r#type: std::option::Option<crate::model::EgressFilterType>,
}
/// See [`EgressFilter`](crate::model::EgressFilter)
pub mod egress_filter {
    /// A builder for [`EgressFilter`](crate::model::EgressFilter)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::EgressFilterType>,
    }
    impl Builder {
        /// The egress filter type. `ALLOW_ALL` allows egress to any endpoint inside or outside of the mesh.
        pub fn r#type(mut self, input: crate::model::EgressFilterType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::EgressFilterType>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`EgressFilter`](crate::model::EgressFilter)
        pub fn build(self) -> crate::model::EgressFilter {
            crate::model::EgressFilter {
                r#type: self.r#type,
            }
        }
    }
}
impl EgressFilter {
    /// Creates a new builder-style object to manufacture [`EgressFilter`](crate::model::EgressFilter)
    pub fn builder() -> crate::model::egress_filter::Builder {
        crate::model::egress_filter::Builder::default()
    }
}

/// A listener for a virtual node.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Listener {
    pub port_mapping: std::option::Option<crate::model::PortMapping>,
}
/// See [`Listener`](crate::model::Listener)
pub mod listener {
    /// A builder for [`Listener`](crate::model::Listener)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) port_mapping: std::option::Option<crate::model::PortMapping>,
    }
    impl Builder {
        pub fn port_mapping(mut self, input: crate::model::PortMapping) -> Self {
            self.port_mapping = Some(input);
            self
        }
        pub fn set_port_mapping(mut self, input: std::option::Option<crate::model::PortMapping>) -> Self {
            self.port_mapping = input;
            self
        }
        /// Consumes the builder and constructs a [`Listener`](crate::model::Listener)
        pub fn build(self) -> crate::model::Listener {
            crate::model::Listener {
                port_mapping: self.port_mapping,
            }
        }
    }
}
impl Listener {
    /// Creates a new builder-style object to manufacture [`Listener`](crate::model::Listener)
    pub fn builder() -> crate::model::listener::Builder {
        crate::model::listener::Builder::default()
    }
}

/// A service mesh returned by a describe operation.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct MeshData {
    pub mesh_name: std::option::Option<std::string::String>,
    pub metadata: std::option::Option<crate::model::ResourceMetadata>,
    pub spec: std::option::Option<crate::model::MeshSpec>,
    pub status: std::option::Option<crate::model::MeshStatus>,
}
/// See [`MeshData`](crate::model::MeshData)
pub mod mesh_data {
    /// A builder for [`MeshData`](crate::model::MeshData)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) metadata: std::option::Option<crate::model::ResourceMetadata>,
        pub(crate) spec: std::option::Option<crate::model::MeshSpec>,
        pub(crate) status: std::option::Option<crate::model::MeshStatus>,
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
        pub fn metadata(mut self, input: crate::model::ResourceMetadata) -> Self {
            self.metadata = Some(input);
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<crate::model::ResourceMetadata>) -> Self {
            self.metadata = input;
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
        pub fn status(mut self, input: crate::model::MeshStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::MeshStatus>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`MeshData`](crate::model::MeshData)
        pub fn build(self) -> crate::model::MeshData {
            crate::model::MeshData {
                mesh_name: self.mesh_name,
                metadata: self.metadata,
                spec: self.spec,
                status: self.status,
            }
        }
    }
}
impl MeshData {
    /// Creates a new builder-style object to manufacture [`MeshData`](crate::model::MeshData)
    pub fn builder() -> crate::model::mesh_data::Builder {
        crate::model::mesh_data::Builder::default()
    }
}

/// A service mesh returned by a list operation.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct MeshRef {
    pub arn: std::option::Option<std::string::String>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub last_updated_at: std::option::Option<smithy_types::Instant>,
    pub mesh_name: std::option::Option<std::string::String>,
    pub mesh_owner: std::option::Option<std::string::String>,
    pub resource_owner: std::option::Option<std::string::String>,
    pub version: std::option::Option<i64>,
}
/// See [`MeshRef`](crate::model::MeshRef)
pub mod mesh_ref {
    /// A builder for [`MeshRef`](crate::model::MeshRef)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) last_updated_at: std::option::Option<smithy_types::Instant>,
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) mesh_owner: std::option::Option<std::string::String>,
        pub(crate) resource_owner: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i64>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn last_updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.last_updated_at = Some(input);
            self
        }
        pub fn set_last_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_updated_at = input;
            self
        }
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
        pub fn resource_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner = Some(input.into());
            self
        }
        pub fn set_resource_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner = input;
            self
        }
        pub fn version(mut self, input: i64) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i64>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`MeshRef`](crate::model::MeshRef)
        pub fn build(self) -> crate::model::MeshRef {
            crate::model::MeshRef {
                arn: self.arn,
                created_at: self.created_at,
                last_updated_at: self.last_updated_at,
                mesh_name: self.mesh_name,
                mesh_owner: self.mesh_owner,
                resource_owner: self.resource_owner,
                version: self.version,
            }
        }
    }
}
impl MeshRef {
    /// Creates a new builder-style object to manufacture [`MeshRef`](crate::model::MeshRef)
    pub fn builder() -> crate::model::mesh_ref::Builder {
        crate::model::mesh_ref::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct MeshSpec {
    pub egress_filter: std::option::Option<crate::model::EgressFilter>,
}
/// See [`MeshSpec`](crate::model::MeshSpec)
pub mod mesh_spec {
    /// A builder for [`MeshSpec`](crate::model::MeshSpec)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) egress_filter: std::option::Option<crate::model::EgressFilter>,
    }
    impl Builder {
        pub fn egress_filter(mut self, input: crate::model::EgressFilter) -> Self {
            self.egress_filter = Some(input);
            self
        }
        pub fn set_egress_filter(mut self, input: std::option::Option<crate::model::EgressFilter>) -> Self {
            self.egress_filter = input;
            self
        }
        /// Consumes the builder and constructs a [`MeshSpec`](crate::model::MeshSpec)
        pub fn build(self) -> crate::model::MeshSpec {
            crate::model::MeshSpec {
                egress_filter: self.egress_filter,
            }
        }
    }
}
impl MeshSpec {
    /// Creates a new builder-style object to manufacture [`MeshSpec`](crate::model::MeshSpec)
    pub fn builder() -> crate::model::mesh_spec::Builder {
        crate::model::mesh_spec::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct MeshStatus {
    /// The current mesh status.
    pub status: std::option::Option<crate::model::MeshStatusCode>,
}
/// See [`MeshStatus`](crate::model::MeshStatus)
pub mod mesh_status {
    /// A builder for [`MeshStatus`](crate::model::MeshStatus)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::MeshStatusCode>,
    }
    impl Builder {
        /// The current mesh status.
        pub fn status(mut self, input: crate::model::MeshStatusCode) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::MeshStatusCode>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`MeshStatus`](crate::model::MeshStatus)
        pub fn build(self) -> crate::model::MeshStatus {
            crate::model::MeshStatus {
                status: self.status,
            }
        }
    }
}
impl MeshStatus {
    /// Creates a new builder-style object to manufacture [`MeshStatus`](crate::model::MeshStatus)
    pub fn builder() -> crate::model::mesh_status::Builder {
        crate::model::mesh_status::Builder::default()
    }
}

/// A port mapping.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct PortMapping {
    pub port: std::option::Option<i32>,
    pub protocol: std::option::Option<crate::model::PortProtocol>,
}
/// See [`PortMapping`](crate::model::PortMapping)
pub mod port_mapping {
    /// A builder for [`PortMapping`](crate::model::PortMapping)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) port: std::option::Option<i32>,
        pub(crate) protocol: std::option::Option<crate::model::PortProtocol>,
    }
    impl Builder {
        pub fn port(mut self, input: i32) -> Self {
            self.port = Some(input);
            self
        }
        pub fn set_port(mut self, input: std::option::Option<i32>) -> Self {
            self.port = input;
            self
        }
        pub fn protocol(mut self, input: crate::model::PortProtocol) -> Self {
            self.protocol = Some(input);
            self
        }
        pub fn set_protocol(mut self, input: std::option::Option<crate::model::PortProtocol>) -> Self {
            self.protocol = input;
            self
        }
        /// Consumes the builder and constructs a [`PortMapping`](crate::model::PortMapping)
        pub fn build(self) -> crate::model::PortMapping {
            crate::model::PortMapping {
                port: self.port,
                protocol: self.protocol,
            }
        }
    }
}
impl PortMapping {
    /// Creates a new builder-style object to manufacture [`PortMapping`](crate::model::PortMapping)
    pub fn builder() -> crate::model::port_mapping::Builder {
        crate::model::port_mapping::Builder::default()
    }
}

/// Metadata common to every App Mesh resource.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ResourceMetadata {
    /// The full Amazon Resource Name (ARN) for the resource.
    pub arn: std::option::Option<std::string::String>,
    pub created_at: std::option::Option<smithy_types::Instant>,
    pub last_updated_at: std::option::Option<smithy_types::Instant>,
    pub mesh_owner: std::option::Option<std::string::String>,
    pub resource_owner: std::option::Option<std::string::String>,
    /// The unique identifier for the resource.
    pub uid: std::option::Option<std::string::String>,
    /// The version of the resource. Resources are created at version 1, and this version is incremented each time that they are updated.
    pub version: std::option::Option<i64>,
}
/// See [`ResourceMetadata`](crate::model::ResourceMetadata)
pub mod resource_metadata {
    /// A builder for [`ResourceMetadata`](crate::model::ResourceMetadata)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) created_at: std::option::Option<smithy_types::Instant>,
        pub(crate) last_updated_at: std::option::Option<smithy_types::Instant>,
        pub(crate) mesh_owner: std::option::Option<std::string::String>,
        pub(crate) resource_owner: std::option::Option<std::string::String>,
        pub(crate) uid: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i64>,
    }
    impl Builder {
        /// The full Amazon Resource Name (ARN) for the resource.
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn created_at(mut self, input: smithy_types::Instant) -> Self {
            self.created_at = Some(input);
            self
        }
        pub fn set_created_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = input;
            self
        }
        pub fn last_updated_at(mut self, input: smithy_types::Instant) -> Self {
            self.last_updated_at = Some(input);
            self
        }
        pub fn set_last_updated_at(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_updated_at = input;
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
        pub fn resource_owner(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_owner = Some(input.into());
            self
        }
        pub fn set_resource_owner(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_owner = input;
            self
        }
        /// The unique identifier for the resource.
        pub fn uid(mut self, input: impl Into<std::string::String>) -> Self {
            self.uid = Some(input.into());
            self
        }
        pub fn set_uid(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.uid = input;
            self
        }
        /// The version of the resource. Resources are created at version 1, and this version is incremented each time that they are updated.
        pub fn version(mut self, input: i64) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i64>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`ResourceMetadata`](crate::model::ResourceMetadata)
        pub fn build(self) -> crate::model::ResourceMetadata {
            crate::model::ResourceMetadata {
                arn: self.arn,
                created_at: self.created_at,
                last_updated_at: self.last_updated_at,
                mesh_owner: self.mesh_owner,
                resource_owner: self.resource_owner,
                uid: self.uid,
                version: self.version,
            }
        }
    }
}
impl ResourceMetadata {
    /// Creates a new builder-style object to manufacture [`ResourceMetadata`](crate::model::ResourceMetadata)
    pub fn builder() -> crate::model::resource_metadata::Builder {
        crate::model::resource_metadata::Builder::default()
    }
}

/// The service discovery information for a virtual node.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ServiceDiscovery {
    pub dns: std::option::Option<crate::model::DnsServiceDiscovery>,
}
/// See [`ServiceDiscovery`](crate::model::ServiceDiscovery)
pub mod service_discovery {
    /// A builder for [`ServiceDiscovery`](crate::model::ServiceDiscovery)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dns: std::option::Option<crate::model::DnsServiceDiscovery>,
    }
    impl Builder {
        pub fn dns(mut self, input: crate::model::DnsServiceDiscovery) -> Self {
            self.dns = Some(input);
            self
        }
        pub fn set_dns(mut self, input: std::option::Option<crate::model::DnsServiceDiscovery>) -> Self {
            self.dns = input;
            self
        }
        /// Consumes the builder and constructs a [`ServiceDiscovery`](crate::model::ServiceDiscovery)
        pub fn build(self) -> crate::model::ServiceDiscovery {
            crate::model::ServiceDiscovery {
                dns: self.dns,
            }
        }
    }
}
impl ServiceDiscovery {
    /// Creates a new builder-style object to manufacture [`ServiceDiscovery`](crate::model::ServiceDiscovery)
    pub fn builder() -> crate::model::service_discovery::Builder {
        crate::model::service_discovery::Builder::default()
    }
}

/// Optional metadata applied to a resource, made of a key and an optional value.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct TagRef {
    pub key: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
}
/// See [`TagRef`](crate::model::TagRef)
pub mod tag_ref {
    /// A builder for [`TagRef`](crate::model::TagRef)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`TagRef`](crate::model::TagRef)
        pub fn build(self) -> crate::model::TagRef {
            crate::model::TagRef {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl TagRef {
    /// Creates a new builder-style object to manufacture [`TagRef`](crate::model::TagRef)
    pub fn builder() -> crate::model::tag_ref::Builder {
        crate::model::tag_ref::Builder::default()
    }
}

/// A virtual node returned by a describe operation.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct VirtualNodeData {
    pub mesh_name: std::option::Option<std::string::String>,
    pub metadata: std::option::Option<crate::model::ResourceMetadata>,
    pub spec: std::option::Option<crate::model::VirtualNodeSpec>,
    pub status: std::option::Option<crate::model::VirtualNodeStatus>,
    pub virtual_node_name: std::option::Option<std::string::String>,
}
/// See [`VirtualNodeData`](crate::model::VirtualNodeData)
pub mod virtual_node_data {
    /// A builder for [`VirtualNodeData`](crate::model::VirtualNodeData)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) mesh_name: std::option::Option<std::string::String>,
        pub(crate) metadata: std::option::Option<crate::model::ResourceMetadata>,
        pub(crate) spec: std::option::Option<crate::model::VirtualNodeSpec>,
        pub(crate) status: std::option::Option<crate::model::VirtualNodeStatus>,
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
        pub fn metadata(mut self, input: crate::model::ResourceMetadata) -> Self {
            self.metadata = Some(input);
            self
        }
        pub fn set_metadata(mut self, input: std::option::Option<crate::model::ResourceMetadata>) -> Self {
            self.metadata = input;
            self
        }
        pub fn spec(mut self, input: crate::model::VirtualNodeSpec) -> Self {
            self.spec = Some(input);
            self
        }
        pub fn set_spec(mut self, input: std::option::Option<crate::model::VirtualNodeSpec>) -> Self {
            self.spec = input;
            self
        }
        pub fn status(mut self, input: crate::model::VirtualNodeStatus) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::VirtualNodeStatus>) -> Self {
            self.status = input;
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
        /// Consumes the builder and constructs a [`VirtualNodeData`](crate::model::VirtualNodeData)
        pub fn build(self) -> crate::model::VirtualNodeData {
            crate::model::VirtualNodeData {
                mesh_name: self.mesh_name,
                metadata: self.metadata,
                spec: self.spec,
                status: self.status,
                virtual_node_name: self.virtual_node_name,
            }
        }
    }
}
impl VirtualNodeData {
    /// Creates a new builder-style object to manufacture [`VirtualNodeData`](crate::model::VirtualNodeData)
    pub fn builder() -> crate::model::virtual_node_data::Builder {
        crate::model::virtual_node_data::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct VirtualNodeSpec {
    pub backends: std::option::Option<std::vec::Vec<crate::model::Backend>>,
    /// The listener the virtual node is expected to receive inbound traffic from.
    pub listeners: std::option::Option<std::vec::Vec<crate::model::Listener>>,
    pub service_discovery: std::option::Option<crate::model::ServiceDiscovery>,
}
/// See [`VirtualNodeSpec`](crate::model::VirtualNodeSpec)
pub mod virtual_node_spec {
    /// A builder for [`VirtualNodeSpec`](crate::model::VirtualNodeSpec)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) backends: std::option::Option<std::vec::Vec<crate::model::Backend>>,
        pub(crate) listeners: std::option::Option<std::vec::Vec<crate::model::Listener>>,
        pub(crate) service_discovery: std::option::Option<crate::model::ServiceDiscovery>,
    }
    impl Builder {
        pub fn backends(mut self, input: std::vec::Vec<crate::model::Backend>) -> Self {
            self.backends = Some(input);
            self
        }
        pub fn set_backends(mut self, input: std::option::Option<std::vec::Vec<crate::model::Backend>>) -> Self {
            self.backends = input;
            self
        }
        /// The listener the virtual node is expected to receive inbound traffic from.
        pub fn listeners(mut self, input: std::vec::Vec<crate::model::Listener>) -> Self {
            self.listeners = Some(input);
            self
        }
        pub fn set_listeners(mut self, input: std::option::Option<std::vec::Vec<crate::model::Listener>>) -> Self {
            self.listeners = input;
            self
        }
        pub fn service_discovery(mut self, input: crate::model::ServiceDiscovery) -> Self {
            self.service_discovery = Some(input);
            self
        }
        pub fn set_service_discovery(mut self, input: std::option::Option<crate::model::ServiceDiscovery>) -> Self {
            self.service_discovery = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualNodeSpec`](crate::model::VirtualNodeSpec)
        pub fn build(self) -> crate::model::VirtualNodeSpec {
            crate::model::VirtualNodeSpec {
                backends: self.backends,
                listeners: self.listeners,
                service_discovery: self.service_discovery,
            }
        }
    }
}
impl VirtualNodeSpec {
    /// Creates a new builder-style object to manufacture [`VirtualNodeSpec`](crate::model::VirtualNodeSpec)
    pub fn builder() -> crate::model::virtual_node_spec::Builder {
        crate::model::virtual_node_spec::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct VirtualNodeStatus {
    pub status: std::option::Option<crate::model::VirtualNodeStatusCode>,
}
/// See [`VirtualNodeStatus`](crate::model::VirtualNodeStatus)
pub mod virtual_node_status {
    /// A builder for [`VirtualNodeStatus`](crate::model::VirtualNodeStatus)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::VirtualNodeStatusCode>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::VirtualNodeStatusCode) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::VirtualNodeStatusCode>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualNodeStatus`](crate::model::VirtualNodeStatus)
        pub fn build(self) -> crate::model::VirtualNodeStatus {
            crate::model::VirtualNodeStatus {
                status: self.status,
            }
        }
    }
}
impl VirtualNodeStatus {
    /// Creates a new builder-style object to manufacture [`VirtualNodeStatus`](crate::model::VirtualNodeStatus)
    pub fn builder() -> crate::model::virtual_node_status::Builder {
        crate::model::virtual_node_status::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct VirtualServiceBackend {
    /// The name of the virtual service that is acting as a virtual node backend.
    pub virtual_service_name: std::option::Option<std::string::String>,
}
/// See [`VirtualServiceBackend`](crate::model::VirtualServiceBackend)
pub mod virtual_service_backend {
    /// A builder for [`VirtualServiceBackend`](crate::model::VirtualServiceBackend)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) virtual_service_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The name of the virtual service that is acting as a virtual node backend.
        pub fn virtual_service_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.virtual_service_name = Some(input.into());
            self
        }
        pub fn set_virtual_service_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.virtual_service_name = input;
            self
        }
        /// Consumes the builder and constructs a [`VirtualServiceBackend`](crate::model::VirtualServiceBackend)
        pub fn build(self) -> crate::model::VirtualServiceBackend {
            crate::model::VirtualServiceBackend {
                virtual_service_name: self.virtual_service_name,
            }
        }
    }
}
impl VirtualServiceBackend {
    /// Creates a new builder-style object to manufacture [`VirtualServiceBackend`](crate::model::VirtualServiceBackend)
    pub fn builder() -> crate::model::virtual_service_backend::Builder {
        crate::model::virtual_service_backend::Builder::default()
    }
}
