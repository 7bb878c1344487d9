/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Encoders for every operation input and model structure. Members are written in
//! declaration order and absent members are omitted.

use smithy_json::serialize::JsonObjectWriter;
use smithy_types::instant::DateTimeFormatError;

pub fn serialize_operation_create_mesh(
    input: &crate::input::CreateMeshInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_create_mesh_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_delete_mesh(
    input: &crate::input::DeleteMeshInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_delete_mesh_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_describe_mesh(
    input: &crate::input::DescribeMeshInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_describe_mesh_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_describe_virtual_node(
    input: &crate::input::DescribeVirtualNodeInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_describe_virtual_node_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_list_meshes(
    input: &crate::input::ListMeshesInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_list_meshes_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_tag_resource(
    input: &crate::input::TagResourceInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_tag_resource_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_structure_create_mesh_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::CreateMeshInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.client_token {
        object.key("clientToken").string(var_1);
    }
    if let Some(var_2) = &input.mesh_name {
        object.key("meshName").string(var_2);
    }
    if let Some(var_3) = &input.spec {
        {
            let mut object_4 = object.key("spec").start_object();
            crate::json_ser::serialize_structure_mesh_spec(&mut object_4, var_3)?;
            object_4.finish();
        }
    }
    if let Some(var_5) = &input.tags {
        let mut array_6 = object.key("tags").start_array();
        for item_7 in var_5 {
            {
                let mut object_8 = array_6.value().start_object();
                crate::json_ser::serialize_structure_tag_ref(&mut object_8, item_7)?;
                object_8.finish();
            }
        }
        array_6.finish();
    }
    Ok(())
}

pub fn serialize_structure_delete_mesh_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DeleteMeshInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.mesh_name {
        object.key("meshName").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_describe_mesh_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeMeshInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.mesh_name {
        object.key("meshName").string(var_1);
    }
    if let Some(var_2) = &input.mesh_owner {
        object.key("meshOwner").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_describe_virtual_node_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DescribeVirtualNodeInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.mesh_name {
        object.key("meshName").string(var_1);
    }
    if let Some(var_2) = &input.mesh_owner {
        object.key("meshOwner").string(var_2);
    }
    if let Some(var_3) = &input.virtual_node_name {
        object.key("virtualNodeName").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_list_meshes_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::ListMeshesInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.limit {
        object.key("limit").number(smithy_types::Number::from(*var_1));
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_tag_resource_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::TagResourceInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
    if let Some(var_2) = &input.tags {
        let mut array_3 = object.key("tags").start_array();
        for item_4 in var_2 {
            {
                let mut object_5 = array_3.value().start_object();
                crate::json_ser::serialize_structure_tag_ref(&mut object_5, item_4)?;
                object_5.finish();
            }
        }
        array_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_backend(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Backend,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.virtual_service {
        {
            let mut object_2 = object.key("virtualService").start_object();
            crate::json_ser::serialize_structure_virtual_service_backend(&mut object_2, var_1)?;
            object_2.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_dns_service_discovery(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::DnsServiceDiscovery,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.hostname {
        object.key("hostname").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_egress_filter(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::EgressFilter,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_listener(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Listener,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.port_mapping {
        {
            let mut object_2 = object.key("portMapping").start_object();
            crate::json_ser::serialize_structure_port_mapping(&mut object_2, var_1)?;
            object_2.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_mesh_data(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MeshData,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.mesh_name {
        object.key("meshName").string(var_1);
    }
    if let Some(var_2) = &input.metadata {
        {
            let mut object_3 = object.key("metadata").start_object();
            crate::json_ser::serialize_structure_resource_metadata(&mut object_3, var_2)?;
            object_3.finish();
        }
    }
    if let Some(var_4) = &input.spec {
        {
            let mut object_5 = object.key("spec").start_object();
            crate::json_ser::serialize_structure_mesh_spec(&mut object_5, var_4)?;
            object_5.finish();
        }
    }
    if let Some(var_6) = &input.status {
        {
            let mut object_7 = object.key("status").start_object();
            crate::json_ser::serialize_structure_mesh_status(&mut object_7, var_6)?;
            object_7.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_mesh_ref(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MeshRef,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
    if let Some(var_2) = &input.created_at {
        object.key("createdAt").instant(var_2, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_3) = &input.last_updated_at {
        object.key("lastUpdatedAt").instant(var_3, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_4) = &input.mesh_name {
        object.key("meshName").string(var_4);
    }
    if let Some(var_5) = &input.mesh_owner {
        object.key("meshOwner").string(var_5);
    }
    if let Some(var_6) = &input.resource_owner {
        object.key("resourceOwner").string(var_6);
    }
    if let Some(var_7) = &input.version {
        object.key("version").number(smithy_types::Number::from(*var_7));
    }
    Ok(())
}

pub fn serialize_structure_mesh_spec(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MeshSpec,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.egress_filter {
        {
            let mut object_2 = object.key("egressFilter").start_object();
            crate::json_ser::serialize_structure_egress_filter(&mut object_2, var_1)?;
            object_2.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_mesh_status(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MeshStatus,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_port_mapping(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::PortMapping,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.port {
        object.key("port").number(smithy_types::Number::from(*var_1));
    }
    if let Some(var_2) = &input.protocol {
        object.key("protocol").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_resource_metadata(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ResourceMetadata,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
    if let Some(var_2) = &input.created_at {
        object.key("createdAt").instant(var_2, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_3) = &input.last_updated_at {
        object.key("lastUpdatedAt").instant(var_3, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_4) = &input.mesh_owner {
        object.key("meshOwner").string(var_4);
    }
    if let Some(var_5) = &input.resource_owner {
        object.key("resourceOwner").string(var_5);
    }
    if let Some(var_6) = &input.uid {
        object.key("uid").string(var_6);
    }
    if let Some(var_7) = &input.version {
        object.key("version").number(smithy_types::Number::from(*var_7));
    }
    Ok(())
}

pub fn serialize_structure_service_discovery(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ServiceDiscovery,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.dns {
        {
            let mut object_2 = object.key("dns").start_object();
            crate::json_ser::serialize_structure_dns_service_discovery(&mut object_2, var_1)?;
            object_2.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_tag_ref(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::TagRef,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.key {
        object.key("key").string(var_1);
    }
    if let Some(var_2) = &input.value {
        object.key("value").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_virtual_node_data(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::VirtualNodeData,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.mesh_name {
        object.key("meshName").string(var_1);
    }
    if let Some(var_2) = &input.metadata {
        {
            let mut object_3 = object.key("metadata").start_object();
            crate::json_ser::serialize_structure_resource_metadata(&mut object_3, var_2)?;
            object_3.finish();
        }
    }
    if let Some(var_4) = &input.spec {
        {
            let mut object_5 = object.key("spec").start_object();
            crate::json_ser::serialize_structure_virtual_node_spec(&mut object_5, var_4)?;
            object_5.finish();
        }
    }
    if let Some(var_6) = &input.status {
        {
            let mut object_7 = object.key("status").start_object();
            crate::json_ser::serialize_structure_virtual_node_status(&mut object_7, var_6)?;
            object_7.finish();
        }
    }
    if let Some(var_8) = &input.virtual_node_name {
        object.key("virtualNodeName").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_virtual_node_spec(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::VirtualNodeSpec,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.backends {
        let mut array_2 = object.key("backends").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_backend(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.listeners {
        let mut array_6 = object.key("listeners").start_array();
        for item_7 in var_5 {
            {
                let mut object_8 = array_6.value().start_object();
                crate::json_ser::serialize_structure_listener(&mut object_8, item_7)?;
                object_8.finish();
            }
        }
        array_6.finish();
    }
    if let Some(var_9) = &input.service_discovery {
        {
            let mut object_10 = object.key("serviceDiscovery").start_object();
            crate::json_ser::serialize_structure_service_discovery(&mut object_10, var_9)?;
            object_10.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_virtual_node_status(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::VirtualNodeStatus,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_virtual_service_backend(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::VirtualServiceBackend,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.virtual_service_name {
        object.key("virtualServiceName").string(var_1);
    }
    Ok(())
}
