/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use codecommit::model::{DeleteFileEntry, FileModeTypeEnum, PutFileEntry, SetFileModeEntry};
use codecommit::operation::{CreateCommit, GetRepository};
use codecommit::{Client, CodeCommitErrorKind, Config, Instant, Region, SdkError};
use http::Uri;
use smithy_client::test_connection::{capture_request, TestConnection};
use smithy_http::body::SdkBody;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn expected_request(operation: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("CodeCommit_20150413.{}", operation))
        .header("content-length", body.len().to_string())
        .uri(Uri::from_static("https://codecommit.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", "application/x-amz-json-1.1")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[test]
fn get_repository() {
    init_tracing();
    let conn = TestConnection::new(vec![(
        expected_request("GetRepository", r#"{"repositoryName":"MyDemoRepo"}"#),
        response(
            200,
            r#"{"repositoryMetadata":{
                "creationDate":1.429203623625E9,
                "defaultBranch":"main",
                "repositoryName":"MyDemoRepo",
                "cloneUrlSsh":"ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/MyDemoRepo",
                "lastModifiedDate":1.430783812143E9,
                "repositoryDescription":"My demonstration repository",
                "cloneUrlHttp":"https://git-codecommit.us-east-1.amazonaws.com/v1/repos/MyDemoRepo",
                "repositoryId":"f7579e13-b83e-4027-aaef-650c0EXAMPLE",
                "Arn":"arn:aws:codecommit:us-east-1:80398EXAMPLE:MyDemoRepo",
                "accountId":"111111111111",
                "someFutureMember":{"a":[1,2,3]}
            }}"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .get_repository()
        .repository_name("MyDemoRepo")
        .send()
        .expect("request succeeds");
    let repo = output.repository_metadata.expect("metadata is present");
    assert_eq!(repo.repository_name.as_deref(), Some("MyDemoRepo"));
    assert_eq!(repo.default_branch.as_deref(), Some("main"));
    assert_eq!(
        repo.arn.as_deref(),
        Some("arn:aws:codecommit:us-east-1:80398EXAMPLE:MyDemoRepo")
    );
    assert_eq!(
        repo.creation_date,
        Some(Instant::from_secs_and_nanos(1_429_203_623, 625_000_000))
    );
    conn.assert_requests_match(&[]);
}

#[test]
fn create_commit_encodes_nested_lists() {
    let body = r#"{"repositoryName":"repo","branchName":"main","putFiles":[{"filePath":"README.md","fileContent":"aGVsbG8="}],"deleteFiles":[{"filePath":"a/b.txt"}],"setFileModes":[{"filePath":"run.sh","fileMode":"EXECUTABLE"}]}"#;
    let conn = TestConnection::new(vec![(
        expected_request("CreateCommit", body),
        response(
            200,
            r#"{"commitId":"4c925148","treeId":"7e9fd3091",
                "filesAdded":[{"absolutePath":"README.md","blobId":"2f42","fileMode":"NORMAL"}, null],
                "filesDeleted":[],
                "filesUpdated":null}"#,
        ),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let output = client
        .create_commit()
        .repository_name("repo")
        .branch_name("main")
        .put_files(vec![PutFileEntry::builder()
            .file_path("README.md")
            .file_content(codecommit::Blob::new("hello"))
            .build()])
        .delete_files(vec![DeleteFileEntry::builder().file_path("a/b.txt").build()])
        .set_file_modes(vec![SetFileModeEntry::builder()
            .file_path("run.sh")
            .file_mode(FileModeTypeEnum::Executable)
            .build()])
        .send()
        .expect("request succeeds");
    assert_eq!(output.commit_id.as_deref(), Some("4c925148"));
    let added = output.files_added.expect("files added");
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].file_mode, Some(FileModeTypeEnum::Normal));
    assert_eq!(output.files_deleted, Some(vec![]));
    assert_eq!(output.files_updated, None);
    conn.assert_requests_match(&[]);
}

#[test]
fn modeled_error() {
    let conn = TestConnection::new(vec![(
        expected_request("GetRepository", r#"{"repositoryName":"missing"}"#),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
            .body(Bytes::from_static(
                br#"{"__type":"RepositoryDoesNotExistException","message":"missing does not exist"}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .get_repository()
        .repository_name("missing")
        .send()
        .expect_err("repository does not exist");
    let (raw, err) = match err {
        SdkError::ServiceError { raw, err } => (raw, err),
        other => panic!("Incorrect error received: {}", other),
    };
    assert_eq!(raw.status(), 400);
    assert!(err.is(CodeCommitErrorKind::RepositoryDoesNotExist));
    assert_eq!(err.message(), Some("missing does not exist"));
    assert_eq!(
        err.request_id(),
        Some("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
    );
    conn.assert_requests_match(&[]);
}

#[test]
fn unmodeled_error() {
    let conn = TestConnection::new(vec![(
        expected_request("GetBlob", r#"{"repositoryName":"repo","blobId":"x"}"#),
        response(500, r#"{"__type":"SomeUnknownError","Message":"try again later"}"#),
    )]);
    let client = Client::from_conf_conn(conf(), conn.clone());
    let err = client
        .get_blob()
        .repository_name("repo")
        .blob_id("x")
        .send()
        .expect_err("server failed");
    let err = err.into_service_error().expect("service error");
    assert!(err.is_unhandled());
    assert_eq!(err.code(), Some("SomeUnknownError"));
    assert_eq!(err.message(), Some("try again later"));
    assert_eq!(err.to_string(), "unhandled error (SomeUnknownError): try again later");
}

#[test]
fn malformed_response() {
    let conn = TestConnection::new(vec![(
        expected_request("GetBlob", r#"{"repositoryName":"repo","blobId":"x"}"#),
        // last `}` replaced with a space
        response(200, r#"{"content":"aGVsbG8=" "#),
    )]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .get_blob()
        .repository_name("repo")
        .blob_id("x")
        .send()
        .expect_err("response was malformed");
    assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
}

#[test]
fn dispatch_failure() {
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .create_branch()
        .repository_name("repo")
        .branch_name("b")
        .commit_id("c")
        .send()
        .expect_err("no responses are loaded");
    assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
}

#[test]
fn endpoint_override_and_low_level_call() {
    let (conn, request) = capture_request(None);
    let conf = Config::builder()
        .endpoint(smithy_http::endpoint::Endpoint::parse("http://localhost:4510/prefix").unwrap())
        .build();
    let client = smithy_client::Client::new(conn);
    let op = GetRepository::builder()
        .repository_name("repo")
        .build(&conf)
        .expect("valid input");
    let output = client.call(op).expect("empty object is a valid output");
    assert_eq!(output.repository_metadata, None);
    let request = request.expect_request();
    assert_eq!(request.uri(), &Uri::from_static("http://localhost:4510/prefix/"));
    assert_eq!(
        request.headers()["x-amz-target"],
        "CodeCommit_20150413.GetRepository"
    );
}

#[test]
fn builder_and_operation_agree() {
    let op = CreateCommit::builder()
        .repository_name("repo")
        .build(&conf())
        .unwrap();
    assert_eq!(op.metadata().name(), "CreateCommit");
    assert_eq!(
        op.request().http().body().bytes(),
        br#"{"repositoryName":"repo"}"#
    );
}
