/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::CodeCommitErrorKind;
use crate::json_deser::{
    deser_operation_get_comment, deser_operation_get_repository, deser_structure_comment,
    deser_structure_put_file_entry, deser_structure_set_file_mode_entry,
};
use crate::json_ser::{
    serialize_structure_delete_file_entry, serialize_structure_put_file_entry,
    serialize_structure_set_file_mode_entry,
};
use crate::model::{
    Comment, DeleteFileEntry, FileModeTypeEnum, PutFileEntry, SetFileModeEntry,
    SourceFileSpecifier,
};
use crate::operation::{GetBlob, GetRepository};
use crate::{Blob, Config, Instant, Region};
use bytes::Bytes;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use smithy_http::response::{ParseError, ParseStrictResponse};
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::instant::DateTimeFormatError;
use std::collections::BTreeMap;

fn encode<T>(
    serialize: fn(&mut JsonObjectWriter<'_>, &T) -> Result<(), DateTimeFormatError>,
    value: &T,
) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize(&mut object, value).expect("encodes");
    object.finish();
    out
}

fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> http::Response<Bytes> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Bytes::from_static(body.as_bytes())).unwrap()
}

#[test]
fn file_path_only() {
    let entry = DeleteFileEntry::builder().file_path("a/b.txt").build();
    assert_eq!(
        encode(serialize_structure_delete_file_entry, &entry),
        r#"{"filePath":"a/b.txt"}"#
    );
    let entry = SetFileModeEntry::builder().file_path("a/b.txt").build();
    assert_eq!(
        encode(serialize_structure_set_file_mode_entry, &entry),
        r#"{"filePath":"a/b.txt"}"#
    );
}

#[test]
fn file_path_and_mode_in_declared_order() {
    let entry = SetFileModeEntry::builder()
        .file_mode(FileModeTypeEnum::Normal)
        .file_path("a/b.txt")
        .build();
    assert_eq!(
        encode(serialize_structure_set_file_mode_entry, &entry),
        r#"{"filePath":"a/b.txt","fileMode":"NORMAL"}"#
    );
}

#[test]
fn nested_structures_and_blobs() {
    let entry = PutFileEntry::builder()
        .file_path("bin/run.sh")
        .file_mode(FileModeTypeEnum::Executable)
        .file_content(Blob::new("echo hi"))
        .source_file(
            SourceFileSpecifier::builder()
                .file_path("old/run.sh")
                .is_move(true)
                .build(),
        )
        .build();
    let encoded = encode(serialize_structure_put_file_entry, &entry);
    assert_eq!(
        encoded,
        r#"{"filePath":"bin/run.sh","fileMode":"EXECUTABLE","fileContent":"ZWNobyBoaQ==","sourceFile":{"filePath":"old/run.sh","isMove":true}}"#
    );
    let mut tokens = json_token_iter(encoded.as_bytes()).peekable();
    assert_eq!(deser_structure_put_file_entry(&mut tokens).unwrap(), Some(entry));
}

#[test]
fn decode_ignores_order_and_unknown_members() {
    let body = br#"{
        "extra": {"nested": [1, 2, {"deep": null}]},
        "fileMode": "SYMLINK",
        "somethingElse": "ignored",
        "filePath": "link"
    }"#;
    let mut tokens = json_token_iter(body).peekable();
    let entry = deser_structure_set_file_mode_entry(&mut tokens).unwrap();
    assert_eq!(
        entry,
        Some(
            SetFileModeEntry::builder()
                .file_path("link")
                .file_mode(FileModeTypeEnum::Symlink)
                .build()
        )
    );
}

#[test]
fn non_object_decodes_to_none() {
    for body in [&b"null"[..], b"\"a string\"", b"[1,2]", b"12"] {
        let mut tokens = json_token_iter(body).peekable();
        assert_eq!(deser_structure_set_file_mode_entry(&mut tokens).unwrap(), None);
    }
}

#[test]
fn unknown_enum_values_are_kept() {
    let body = br#"{"fileMode":"STICKY"}"#;
    let mut tokens = json_token_iter(body).peekable();
    let entry = deser_structure_set_file_mode_entry(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(
        entry.file_mode,
        Some(FileModeTypeEnum::Unknown("STICKY".to_string()))
    );
    assert_eq!(
        encode(serialize_structure_set_file_mode_entry, &entry),
        r#"{"fileMode":"STICKY"}"#
    );
}

#[test]
fn collections_skip_nulls_and_keep_order() {
    let body = br#"{"comment":{
        "commentId": "c-1",
        "callerReactions": ["b", null, "a", "c"],
        "reactionCounts": {"z": 1, "A b": 2, "nothing": null},
        "deleted": false,
        "creationDate": 1.6e9
    }}"#;
    let output = deser_operation_get_comment(body).unwrap();
    let comment = output.comment.unwrap();
    assert_eq!(
        comment.caller_reactions,
        Some(vec!["b".to_string(), "a".to_string(), "c".to_string()])
    );
    let mut counts = BTreeMap::new();
    counts.insert("A b".to_string(), 2);
    counts.insert("z".to_string(), 1);
    assert_eq!(comment.reaction_counts, Some(counts));
    assert_eq!(comment.deleted, Some(false));
    assert_eq!(
        comment.creation_date,
        Some(Instant::from_epoch_seconds(1_600_000_000))
    );
}

#[test]
fn timestamps_keep_nanoseconds() {
    let comment = Comment::builder()
        .comment_id("c-1")
        .creation_date(Instant::from_secs_and_nanos(1_600_000_000, 123_456_789))
        .build();
    let encoded = encode(crate::json_ser::serialize_structure_comment, &comment);
    assert_eq!(
        encoded,
        r#"{"commentId":"c-1","creationDate":1600000000.123456789}"#
    );
    let mut tokens = json_token_iter(encoded.as_bytes()).peekable();
    assert_eq!(deser_structure_comment(&mut tokens).unwrap(), Some(comment));
}

#[test]
fn out_of_range_timestamps_are_errors() {
    for body in [
        &br#"{"comment":{"creationDate":18446744073709551615}}"#[..],
        br#"{"comment":{"creationDate":9223372036854775808}}"#,
        br#"{"comment":{"creationDate":1e400}}"#,
        br#"{"comment":{"creationDate":-1e400}}"#,
        br#"{"comment":{"creationDate":1e19}}"#,
    ] {
        assert!(
            deser_operation_get_comment(body).is_err(),
            "{}",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn type_mismatches_are_errors() {
    assert!(deser_operation_get_comment(br#"{"comment":{"deleted":"yes"}}"#).is_err());
    assert!(deser_operation_get_comment(br#"{"comment":{"callerReactions":{}}}"#).is_err());
    assert!(deser_operation_get_comment(br#"{"comment":{"reactionCounts":{"a":1.5}}}"#).is_err());
    assert!(deser_operation_get_comment(br#"{"comment":{"content":12}}"#).is_err());
}

#[test]
fn empty_output_body() {
    assert_eq!(
        deser_operation_get_repository(b"").unwrap(),
        crate::output::GetRepositoryOutput::builder().build()
    );
}

#[test]
fn modeled_error_is_retagged() {
    let raw = response(
        400,
        &[("x-amzn-requestid", "req-1")],
        r#"{"__type":"com.amazonaws.codecommit#InvalidPathException","message":"bad path"}"#,
    );
    let err = match GetBlob::new().parse(&raw) {
        Err(ParseError::Service(err)) => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is(CodeCommitErrorKind::InvalidPath));
    assert_eq!(err.code(), Some("InvalidPathException"));
    assert_eq!(err.message(), Some("bad path"));
    assert_eq!(err.request_id(), Some("req-1"));
}

#[test]
fn unknown_error_falls_back() {
    let raw = response(
        400,
        &[],
        r#"{"__type":"SomeUnknownError","message":"something odd"}"#,
    );
    let err = match GetBlob::new().parse(&raw) {
        Err(ParseError::Service(err)) => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_unhandled());
    assert_eq!(err.code(), Some("SomeUnknownError"));
    assert_eq!(err.message(), Some("something odd"));
}

#[test]
fn error_code_from_header() {
    let raw = response(
        400,
        &[("x-amzn-errortype", "RepositoryDoesNotExistException:http://internal.amazon.com/")],
        "",
    );
    let err = match GetRepository::new().parse(&raw) {
        Err(ParseError::Service(err)) => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is(CodeCommitErrorKind::RepositoryDoesNotExist));
    assert_eq!(err.message(), None);
}

#[test]
fn malformed_success_body_is_unparseable() {
    let raw = response(200, &[], r#"{"content":"not base64!"}"#);
    assert!(matches!(
        GetBlob::new().parse(&raw),
        Err(ParseError::Unparseable(_))
    ));
}

#[test]
fn envelope_shape() {
    let conf = Config::builder().region(Region::new("us-west-2")).build();
    let op = GetRepository::builder()
        .repository_name("my-repo")
        .build(&conf)
        .unwrap();
    assert_eq!(op.metadata().name(), "GetRepository");
    assert_eq!(op.metadata().service(), "codecommit");
    let request = op.request().http();
    assert_eq!(*request.method(), http::Method::POST);
    assert_eq!(
        request.uri().to_string(),
        "https://codecommit.us-west-2.amazonaws.com/"
    );
    assert_eq!(
        request.headers()["x-amz-target"],
        "CodeCommit_20150413.GetRepository"
    );
    assert_eq!(
        request.headers()["content-type"],
        "application/x-amz-json-1.1"
    );
    assert_eq!(request.headers()["content-length"], "28");
    assert_eq!(request.body().bytes(), br#"{"repositoryName":"my-repo"}"#);
}

#[test]
fn empty_input_sends_empty_object() {
    let conf = Config::builder().build();
    let op = crate::operation::GetComment::builder().build(&conf).unwrap();
    assert_eq!(op.request().http().body().bytes(), b"{}");
}

prop_compose! {
    fn file_mode()(value in prop_oneof![
        Just("EXECUTABLE".to_string()),
        Just("NORMAL".to_string()),
        Just("SYMLINK".to_string()),
        "[A-Z_]{1,12}",
    ]) -> FileModeTypeEnum {
        FileModeTypeEnum::from(value.as_str())
    }
}

prop_compose! {
    fn comment()(
        comment_id in proptest::option::of(".*"),
        content in proptest::option::of(".*"),
        deleted in proptest::option::of(any::<bool>()),
        creation_date in proptest::option::of((-10_000_000_000_i64..10_000_000_000_i64, 0..1_000_000_000_u32)),
        caller_reactions in proptest::option::of(proptest::collection::vec(".*", 0..4)),
        reaction_counts in proptest::option::of(proptest::collection::btree_map(".*", any::<i32>(), 0..4)),
    ) -> Comment {
        Comment::builder()
            .set_comment_id(comment_id)
            .set_content(content)
            .set_deleted(deleted)
            .set_creation_date(creation_date.map(|(secs, nanos)| Instant::from_secs_and_nanos(secs, nanos)))
            .set_caller_reactions(caller_reactions)
            .set_reaction_counts(reaction_counts)
            .build()
    }
}

proptest! {
    #[test]
    fn set_file_mode_entry_round_trips(
        file_path in proptest::option::of(".*"),
        file_mode in proptest::option::of(file_mode()),
    ) {
        let entry = SetFileModeEntry::builder()
            .set_file_path(file_path)
            .set_file_mode(file_mode)
            .build();
        let encoded = encode(serialize_structure_set_file_mode_entry, &entry);
        let mut tokens = json_token_iter(encoded.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_set_file_mode_entry(&mut tokens).unwrap(), Some(entry));
    }

    #[test]
    fn comment_round_trips(comment in comment()) {
        let encoded = encode(crate::json_ser::serialize_structure_comment, &comment);
        let parsed: serde_json::Value = serde_json::from_str(&encoded).expect("valid JSON");
        prop_assert!(parsed.is_object());
        let mut tokens = json_token_iter(encoded.as_bytes()).peekable();
        prop_assert_eq!(deser_structure_comment(&mut tokens).unwrap(), Some(comment));
    }
}
