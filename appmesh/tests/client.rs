/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use appmesh::model::{MeshStatusCode, TagRef};
use appmesh::{AppMeshErrorKind, Client, Config, Region, SdkError};
use bytes::Bytes;
use http::Uri;
use smithy_client::test_connection::TestConnection;
use smithy_http::body::SdkBody;

fn request(operation: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("AppMesh_20190125.{}", operation))
        .header("content-length", body.len().to_string())
        .uri(Uri::from_static("https://appmesh.eu-central-1.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

fn client(conn: TestConnection) -> Client<TestConnection> {
    let conf = Config::builder()
        .region(Region::new("eu-central-1"))
        .build();
    Client::from_conf_conn(conf, conn)
}

#[test]
fn list_then_describe() {
    let conn = TestConnection::new(vec![
        (
            request("ListMeshes", r#"{"limit":2}"#),
            response(
                200,
                r#"{"meshes":[{"arn":"arn:aws:appmesh:eu-central-1:123456789012:mesh/app","meshName":"app","version":1}],"nextToken":null}"#,
            ),
        ),
        (
            request("DescribeMesh", r#"{"meshName":"app","meshOwner":"123456789012"}"#),
            response(
                200,
                r#"{"mesh":{"meshName":"app","status":{"status":"ACTIVE"},"spec":{}}}"#,
            ),
        ),
    ]);
    let client = client(conn.clone());

    let listed = client.list_meshes().limit(2).send().expect("list succeeds");
    assert_eq!(listed.next_token, None);
    let meshes = listed.meshes.expect("meshes");
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].mesh_name.as_deref(), Some("app"));

    let described = client
        .describe_mesh()
        .mesh_name("app")
        .mesh_owner("123456789012")
        .send()
        .expect("describe succeeds");
    let mesh = described.mesh.expect("mesh");
    assert_eq!(mesh.status.unwrap().status, Some(MeshStatusCode::Active));
    assert_eq!(mesh.spec.unwrap().egress_filter, None);

    conn.assert_requests_match(&[]);
}

#[test]
fn tag_resource_has_empty_output() {
    let conn = TestConnection::new(vec![(
        request(
            "TagResource",
            r#"{"resourceArn":"arn:mesh","tags":[{"key":"env","value":"prod"}]}"#,
        ),
        response(200, ""),
    )]);
    let client = client(conn.clone());
    client
        .tag_resource()
        .resource_arn("arn:mesh")
        .tags(vec![TagRef::builder().key("env").value("prod").build()])
        .send()
        .expect("tagging succeeds");
    conn.assert_requests_match(&[]);
}

#[test]
fn error_type_header_wins_over_body() {
    let conn = TestConnection::new(vec![(
        request("DeleteMesh", r#"{"meshName":"app"}"#),
        http::Response::builder()
            .status(409)
            .header("x-amzn-errortype", "ResourceInUseException")
            .body(Bytes::from_static(
                br#"{"__type":"ConflictException","message":"mesh has virtual nodes"}"#,
            ))
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client
        .delete_mesh()
        .mesh_name("app")
        .send()
        .expect_err("mesh is in use");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(err.is(AppMeshErrorKind::ResourceInUse));
            assert_eq!(err.message(), Some("mesh has virtual nodes"));
        }
        other => panic!("Incorrect error received: {}", other),
    }
}
