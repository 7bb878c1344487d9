/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Decoders for every operation output and model structure, driven by per-structure
//! field tables. Members may arrive in any order; unknown members are skipped.

use smithy_json::deserialize::token::{expect_i32_or_null, expect_i64_or_null, expect_string_or_null, expect_timestamp_or_null};
use smithy_json::deserialize::{
    deserialize_document, deserialize_list, deserialize_struct, DeserializeError, Field, TokenStream,
};

const CREATE_MESH_OUTPUT_FIELDS: &[Field<crate::output::CreateMeshOutput>] = &[
    Field {
        name: "mesh",
        decode: |shape, tokens| {
            shape.mesh = deser_structure_mesh_data(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_create_mesh(
    input: &[u8],
) -> Result<crate::output::CreateMeshOutput, DeserializeError> {
    deserialize_document(input, CREATE_MESH_OUTPUT_FIELDS)
}

const DELETE_MESH_OUTPUT_FIELDS: &[Field<crate::output::DeleteMeshOutput>] = &[
    Field {
        name: "mesh",
        decode: |shape, tokens| {
            shape.mesh = deser_structure_mesh_data(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_delete_mesh(
    input: &[u8],
) -> Result<crate::output::DeleteMeshOutput, DeserializeError> {
    deserialize_document(input, DELETE_MESH_OUTPUT_FIELDS)
}

const DESCRIBE_MESH_OUTPUT_FIELDS: &[Field<crate::output::DescribeMeshOutput>] = &[
    Field {
        name: "mesh",
        decode: |shape, tokens| {
            shape.mesh = deser_structure_mesh_data(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_describe_mesh(
    input: &[u8],
) -> Result<crate::output::DescribeMeshOutput, DeserializeError> {
    deserialize_document(input, DESCRIBE_MESH_OUTPUT_FIELDS)
}

const DESCRIBE_VIRTUAL_NODE_OUTPUT_FIELDS: &[Field<crate::output::DescribeVirtualNodeOutput>] = &[
    Field {
        name: "virtualNode",
        decode: |shape, tokens| {
            shape.virtual_node = deser_structure_virtual_node_data(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_describe_virtual_node(
    input: &[u8],
) -> Result<crate::output::DescribeVirtualNodeOutput, DeserializeError> {
    deserialize_document(input, DESCRIBE_VIRTUAL_NODE_OUTPUT_FIELDS)
}

const LIST_MESHES_OUTPUT_FIELDS: &[Field<crate::output::ListMeshesOutput>] = &[
    Field {
        name: "meshes",
        decode: |shape, tokens| {
            shape.meshes = deserialize_list(tokens, |tokens| deser_structure_mesh_ref(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "nextToken",
        decode: |shape, tokens| {
            shape.next_token = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_operation_list_meshes(
    input: &[u8],
) -> Result<crate::output::ListMeshesOutput, DeserializeError> {
    deserialize_document(input, LIST_MESHES_OUTPUT_FIELDS)
}

pub fn deser_operation_tag_resource(
    input: &[u8],
) -> Result<crate::output::TagResourceOutput, DeserializeError> {
    deserialize_document(input, &[])
}

const BACKEND_FIELDS: &[Field<crate::model::Backend>] = &[
    Field {
        name: "virtualService",
        decode: |shape, tokens| {
            shape.virtual_service = deser_structure_virtual_service_backend(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_backend(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::Backend>, DeserializeError> {
    deserialize_struct(tokens, BACKEND_FIELDS)
}

const DNS_SERVICE_DISCOVERY_FIELDS: &[Field<crate::model::DnsServiceDiscovery>] = &[
    Field {
        name: "hostname",
        decode: |shape, tokens| {
            shape.hostname = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_dns_service_discovery(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::DnsServiceDiscovery>, DeserializeError> {
    deserialize_struct(tokens, DNS_SERVICE_DISCOVERY_FIELDS)
}

const EGRESS_FILTER_FIELDS: &[Field<crate::model::EgressFilter>] = &[
    Field {
        name: "type",
        decode: |shape, tokens| {
            shape.r#type = expect_string_or_null(tokens.next())?.map(|s| crate::model::EgressFilterType::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_egress_filter(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::EgressFilter>, DeserializeError> {
    deserialize_struct(tokens, EGRESS_FILTER_FIELDS)
}

const LISTENER_FIELDS: &[Field<crate::model::Listener>] = &[
    Field {
        name: "portMapping",
        decode: |shape, tokens| {
            shape.port_mapping = deser_structure_port_mapping(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_listener(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::Listener>, DeserializeError> {
    deserialize_struct(tokens, LISTENER_FIELDS)
}

const MESH_DATA_FIELDS: &[Field<crate::model::MeshData>] = &[
    Field {
        name: "meshName",
        decode: |shape, tokens| {
            shape.mesh_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "metadata",
        decode: |shape, tokens| {
            shape.metadata = deser_structure_resource_metadata(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "spec",
        decode: |shape, tokens| {
            shape.spec = deser_structure_mesh_spec(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "status",
        decode: |shape, tokens| {
            shape.status = deser_structure_mesh_status(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_mesh_data(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::MeshData>, DeserializeError> {
    deserialize_struct(tokens, MESH_DATA_FIELDS)
}

const MESH_REF_FIELDS: &[Field<crate::model::MeshRef>] = &[
    Field {
        name: "arn",
        decode: |shape, tokens| {
            shape.arn = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "createdAt",
        decode: |shape, tokens| {
            shape.created_at = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "lastUpdatedAt",
        decode: |shape, tokens| {
            shape.last_updated_at = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "meshName",
        decode: |shape, tokens| {
            shape.mesh_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "meshOwner",
        decode: |shape, tokens| {
            shape.mesh_owner = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "resourceOwner",
        decode: |shape, tokens| {
            shape.resource_owner = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "version",
        decode: |shape, tokens| {
            shape.version = expect_i64_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_mesh_ref(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::MeshRef>, DeserializeError> {
    deserialize_struct(tokens, MESH_REF_FIELDS)
}

const MESH_SPEC_FIELDS: &[Field<crate::model::MeshSpec>] = &[
    Field {
        name: "egressFilter",
        decode: |shape, tokens| {
            shape.egress_filter = deser_structure_egress_filter(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_mesh_spec(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::MeshSpec>, DeserializeError> {
    deserialize_struct(tokens, MESH_SPEC_FIELDS)
}

const MESH_STATUS_FIELDS: &[Field<crate::model::MeshStatus>] = &[
    Field {
        name: "status",
        decode: |shape, tokens| {
            shape.status = expect_string_or_null(tokens.next())?.map(|s| crate::model::MeshStatusCode::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_mesh_status(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::MeshStatus>, DeserializeError> {
    deserialize_struct(tokens, MESH_STATUS_FIELDS)
}

const PORT_MAPPING_FIELDS: &[Field<crate::model::PortMapping>] = &[
    Field {
        name: "port",
        decode: |shape, tokens| {
            shape.port = expect_i32_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "protocol",
        decode: |shape, tokens| {
            shape.protocol = expect_string_or_null(tokens.next())?.map(|s| crate::model::PortProtocol::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_port_mapping(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::PortMapping>, DeserializeError> {
    deserialize_struct(tokens, PORT_MAPPING_FIELDS)
}

const RESOURCE_METADATA_FIELDS: &[Field<crate::model::ResourceMetadata>] = &[
    Field {
        name: "arn",
        decode: |shape, tokens| {
            shape.arn = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "createdAt",
        decode: |shape, tokens| {
            shape.created_at = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "lastUpdatedAt",
        decode: |shape, tokens| {
            shape.last_updated_at = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "meshOwner",
        decode: |shape, tokens| {
            shape.mesh_owner = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "resourceOwner",
        decode: |shape, tokens| {
            shape.resource_owner = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "uid",
        decode: |shape, tokens| {
            shape.uid = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "version",
        decode: |shape, tokens| {
            shape.version = expect_i64_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_resource_metadata(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::ResourceMetadata>, DeserializeError> {
    deserialize_struct(tokens, RESOURCE_METADATA_FIELDS)
}

const SERVICE_DISCOVERY_FIELDS: &[Field<crate::model::ServiceDiscovery>] = &[
    Field {
        name: "dns",
        decode: |shape, tokens| {
            shape.dns = deser_structure_dns_service_discovery(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_service_discovery(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::ServiceDiscovery>, DeserializeError> {
    deserialize_struct(tokens, SERVICE_DISCOVERY_FIELDS)
}

const TAG_REF_FIELDS: &[Field<crate::model::TagRef>] = &[
    Field {
        name: "key",
        decode: |shape, tokens| {
            shape.key = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "value",
        decode: |shape, tokens| {
            shape.value = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_tag_ref(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::TagRef>, DeserializeError> {
    deserialize_struct(tokens, TAG_REF_FIELDS)
}

const VIRTUAL_NODE_DATA_FIELDS: &[Field<crate::model::VirtualNodeData>] = &[
    Field {
        name: "meshName",
        decode: |shape, tokens| {
            shape.mesh_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "metadata",
        decode: |shape, tokens| {
            shape.metadata = deser_structure_resource_metadata(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "spec",
        decode: |shape, tokens| {
            shape.spec = deser_structure_virtual_node_spec(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "status",
        decode: |shape, tokens| {
            shape.status = deser_structure_virtual_node_status(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "virtualNodeName",
        decode: |shape, tokens| {
            shape.virtual_node_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_virtual_node_data(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::VirtualNodeData>, DeserializeError> {
    deserialize_struct(tokens, VIRTUAL_NODE_DATA_FIELDS)
}

const VIRTUAL_NODE_SPEC_FIELDS: &[Field<crate::model::VirtualNodeSpec>] = &[
    Field {
        name: "backends",
        decode: |shape, tokens| {
            shape.backends = deserialize_list(tokens, |tokens| deser_structure_backend(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "listeners",
        decode: |shape, tokens| {
            shape.listeners = deserialize_list(tokens, |tokens| deser_structure_listener(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "serviceDiscovery",
        decode: |shape, tokens| {
            shape.service_discovery = deser_structure_service_discovery(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_virtual_node_spec(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::VirtualNodeSpec>, DeserializeError> {
    deserialize_struct(tokens, VIRTUAL_NODE_SPEC_FIELDS)
}

const VIRTUAL_NODE_STATUS_FIELDS: &[Field<crate::model::VirtualNodeStatus>] = &[
    Field {
        name: "status",
        decode: |shape, tokens| {
            shape.status = expect_string_or_null(tokens.next())?.map(|s| crate::model::VirtualNodeStatusCode::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_virtual_node_status(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::VirtualNodeStatus>, DeserializeError> {
    deserialize_struct(tokens, VIRTUAL_NODE_STATUS_FIELDS)
}

const VIRTUAL_SERVICE_BACKEND_FIELDS: &[Field<crate::model::VirtualServiceBackend>] = &[
    Field {
        name: "virtualServiceName",
        decode: |shape, tokens| {
            shape.virtual_service_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_virtual_service_backend(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::VirtualServiceBackend>, DeserializeError> {
    deserialize_struct(tokens, VIRTUAL_SERVICE_BACKEND_FIELDS)
}
