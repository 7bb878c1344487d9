/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::AppMeshErrorKind;
use crate::input::CreateMeshInput;
use crate::json_deser::{deser_operation_describe_virtual_node, deser_operation_list_meshes};
use crate::json_ser::serialize_operation_create_mesh;
use crate::model::{
    EgressFilter, EgressFilterType, MeshSpec, PortMapping, PortProtocol, TagRef,
    VirtualNodeStatusCode,
};
use crate::operation::{DeleteMesh, DescribeMesh};
use crate::{Config, Instant};
use bytes::Bytes;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smithy_http::response::{ParseError, ParseStrictResponse};

fn error_response(body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(404)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn create_mesh_input_encoding() {
    let input = CreateMeshInput::builder()
        .mesh_name("app")
        .spec(
            MeshSpec::builder()
                .egress_filter(
                    EgressFilter::builder()
                        .r#type(EgressFilterType::DropAll)
                        .build(),
                )
                .build(),
        )
        .tags(vec![
            TagRef::builder().key("team").value("core").build(),
            TagRef::builder().key("empty").build(),
        ])
        .build_input();
    assert_eq!(
        serialize_operation_create_mesh(&input).unwrap(),
        r#"{"meshName":"app","spec":{"egressFilter":{"type":"DROP_ALL"}},"tags":[{"key":"team","value":"core"},{"key":"empty"}]}"#
    );
}

#[test]
fn nested_lists_of_structures() {
    let body = br#"{"virtualNode":{
        "status":{"status":"ACTIVE"},
        "virtualNodeName":"serviceB",
        "spec":{
            "listeners":[{"portMapping":{"port":80,"protocol":"http"}}, null, {"portMapping":{"port":9000,"protocol":"quic"}}],
            "backends":[{"virtualService":{"virtualServiceName":"serviceA.svc.cluster.local"}}],
            "serviceDiscovery":{"dns":{"hostname":"serviceB.svc.cluster.local"}}
        },
        "meshName":"app",
        "metadata":{"version":3,"uid":"a1","createdAt":1563810109.459,"unknown":true}
    }}"#;
    let node = deser_operation_describe_virtual_node(body)
        .unwrap()
        .virtual_node
        .unwrap();
    assert_eq!(node.virtual_node_name.as_deref(), Some("serviceB"));
    assert_eq!(
        node.status.unwrap().status,
        Some(VirtualNodeStatusCode::Active)
    );
    let spec = node.spec.unwrap();
    let ports: Vec<PortMapping> = spec
        .listeners
        .unwrap()
        .into_iter()
        .map(|listener| listener.port_mapping.unwrap())
        .collect();
    assert_eq!(
        ports,
        vec![
            PortMapping::builder()
                .port(80)
                .protocol(PortProtocol::Http)
                .build(),
            PortMapping::builder()
                .port(9000)
                .protocol(PortProtocol::Unknown("quic".to_string()))
                .build(),
        ]
    );
    assert_eq!(
        spec.service_discovery.unwrap().dns.unwrap().hostname.as_deref(),
        Some("serviceB.svc.cluster.local")
    );
    let metadata = node.metadata.unwrap();
    assert_eq!(metadata.version, Some(3));
    assert_eq!(
        metadata.created_at,
        Some(Instant::from_secs_and_nanos(1_563_810_109, 459_000_000))
    );
}

#[test]
fn large_versions_fit_i64() {
    let body = br#"{"meshes":[{"meshName":"a","version":9007199254740993}],"nextToken":"t"}"#;
    let output = deser_operation_list_meshes(body).unwrap();
    assert_eq!(output.next_token.as_deref(), Some("t"));
    assert_eq!(output.meshes.unwrap()[0].version, Some(9_007_199_254_740_993));
    assert!(deser_operation_list_meshes(br#"{"meshes":[{"version":1.5}]}"#).is_err());
}

#[test]
fn not_found_is_modeled() {
    let raw = error_response(r#"{"__type":"NotFoundException","message":"mesh not found"}"#);
    match DescribeMesh::new().parse(&raw) {
        Err(ParseError::Service(err)) => {
            assert!(err.is(AppMeshErrorKind::NotFound));
            assert_eq!(err.to_string(), "NotFoundException: mesh not found");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[test]
fn unknown_code_is_unhandled() {
    let raw = error_response(r#"{"code":"SomeUnknownError"}"#);
    match DeleteMesh::new().parse(&raw) {
        Err(ParseError::Service(err)) => {
            assert!(err.is_unhandled());
            assert_eq!(err.code(), Some("SomeUnknownError"));
            assert_eq!(err.message(), None);
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[test]
fn envelope_shape() {
    let op = DescribeMesh::builder()
        .mesh_name("app")
        .build(&Config::builder().build())
        .unwrap();
    let request = op.request().http();
    assert_eq!(*request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/");
    assert_eq!(request.uri().host(), Some("appmesh.us-east-1.amazonaws.com"));
    assert_eq!(request.headers()["x-amz-target"], "AppMesh_20190125.DescribeMesh");
    assert_eq!(request.headers()["content-length"], "18");
    assert_eq!(request.body().bytes(), br#"{"meshName":"app"}"#);
}

proptest! {
    #[test]
    fn enum_strings_survive(value in "[a-zA-Z0-9_]{0,16}") {
        let parsed = EgressFilterType::from(value.as_str());
        prop_assert_eq!(parsed.as_str(), value.as_str());
        let known = EgressFilterType::values().contains(&value.as_str());
        prop_assert_eq!(known, !matches!(parsed, EgressFilterType::Unknown(_)));
    }
}
