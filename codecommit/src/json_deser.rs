/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Decoders for every operation output and model structure, driven by per-structure
//! field tables. Members may arrive in any order; unknown members are skipped.

use smithy_json::deserialize::token::{expect_blob_or_null, expect_bool_or_null, expect_i32_or_null, expect_string_or_null, expect_timestamp_or_null};
use smithy_json::deserialize::{
    deserialize_document, deserialize_list, deserialize_map, deserialize_struct, DeserializeError, Field, TokenStream,
};

const BATCH_GET_REPOSITORIES_OUTPUT_FIELDS: &[Field<crate::output::BatchGetRepositoriesOutput>] = &[
    Field {
        name: "repositories",
        decode: |shape, tokens| {
            shape.repositories = deserialize_list(tokens, |tokens| deser_structure_repository_metadata(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "repositoriesNotFound",
        decode: |shape, tokens| {
            shape.repositories_not_found = deserialize_list(tokens, |tokens| expect_string_or_null(tokens.next()))?;
            Ok(())
        },
    },
];

pub fn deser_operation_batch_get_repositories(
    input: &[u8],
) -> Result<crate::output::BatchGetRepositoriesOutput, DeserializeError> {
    deserialize_document(input, BATCH_GET_REPOSITORIES_OUTPUT_FIELDS)
}

pub fn deser_operation_create_branch(
    input: &[u8],
) -> Result<crate::output::CreateBranchOutput, DeserializeError> {
    deserialize_document(input, &[])
}

const CREATE_COMMIT_OUTPUT_FIELDS: &[Field<crate::output::CreateCommitOutput>] = &[
    Field {
        name: "commitId",
        decode: |shape, tokens| {
            shape.commit_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "treeId",
        decode: |shape, tokens| {
            shape.tree_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "filesAdded",
        decode: |shape, tokens| {
            shape.files_added = deserialize_list(tokens, |tokens| deser_structure_file_metadata(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "filesUpdated",
        decode: |shape, tokens| {
            shape.files_updated = deserialize_list(tokens, |tokens| deser_structure_file_metadata(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "filesDeleted",
        decode: |shape, tokens| {
            shape.files_deleted = deserialize_list(tokens, |tokens| deser_structure_file_metadata(tokens))?;
            Ok(())
        },
    },
];

pub fn deser_operation_create_commit(
    input: &[u8],
) -> Result<crate::output::CreateCommitOutput, DeserializeError> {
    deserialize_document(input, CREATE_COMMIT_OUTPUT_FIELDS)
}

const DELETE_BRANCH_OUTPUT_FIELDS: &[Field<crate::output::DeleteBranchOutput>] = &[
    Field {
        name: "deletedBranch",
        decode: |shape, tokens| {
            shape.deleted_branch = deser_structure_branch_info(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_delete_branch(
    input: &[u8],
) -> Result<crate::output::DeleteBranchOutput, DeserializeError> {
    deserialize_document(input, DELETE_BRANCH_OUTPUT_FIELDS)
}

const DELETE_FILE_OUTPUT_FIELDS: &[Field<crate::output::DeleteFileOutput>] = &[
    Field {
        name: "commitId",
        decode: |shape, tokens| {
            shape.commit_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "blobId",
        decode: |shape, tokens| {
            shape.blob_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "treeId",
        decode: |shape, tokens| {
            shape.tree_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "filePath",
        decode: |shape, tokens| {
            shape.file_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_operation_delete_file(
    input: &[u8],
) -> Result<crate::output::DeleteFileOutput, DeserializeError> {
    deserialize_document(input, DELETE_FILE_OUTPUT_FIELDS)
}

const GET_BLOB_OUTPUT_FIELDS: &[Field<crate::output::GetBlobOutput>] = &[
    Field {
        name: "content",
        decode: |shape, tokens| {
            shape.content = expect_blob_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_operation_get_blob(
    input: &[u8],
) -> Result<crate::output::GetBlobOutput, DeserializeError> {
    deserialize_document(input, GET_BLOB_OUTPUT_FIELDS)
}

const GET_COMMENT_OUTPUT_FIELDS: &[Field<crate::output::GetCommentOutput>] = &[
    Field {
        name: "comment",
        decode: |shape, tokens| {
            shape.comment = deser_structure_comment(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_get_comment(
    input: &[u8],
) -> Result<crate::output::GetCommentOutput, DeserializeError> {
    deserialize_document(input, GET_COMMENT_OUTPUT_FIELDS)
}

const GET_COMMENT_REACTIONS_OUTPUT_FIELDS: &[Field<crate::output::GetCommentReactionsOutput>] = &[
    Field {
        name: "reactionsForComment",
        decode: |shape, tokens| {
            shape.reactions_for_comment = deserialize_list(tokens, |tokens| deser_structure_reaction_for_comment(tokens))?;
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

pub fn deser_operation_get_comment_reactions(
    input: &[u8],
) -> Result<crate::output::GetCommentReactionsOutput, DeserializeError> {
    deserialize_document(input, GET_COMMENT_REACTIONS_OUTPUT_FIELDS)
}

const GET_COMMIT_OUTPUT_FIELDS: &[Field<crate::output::GetCommitOutput>] = &[
    Field {
        name: "commit",
        decode: |shape, tokens| {
            shape.commit = deser_structure_commit(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_get_commit(
    input: &[u8],
) -> Result<crate::output::GetCommitOutput, DeserializeError> {
    deserialize_document(input, GET_COMMIT_OUTPUT_FIELDS)
}

const GET_PULL_REQUEST_OUTPUT_FIELDS: &[Field<crate::output::GetPullRequestOutput>] = &[
    Field {
        name: "pullRequest",
        decode: |shape, tokens| {
            shape.pull_request = deser_structure_pull_request(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_get_pull_request(
    input: &[u8],
) -> Result<crate::output::GetPullRequestOutput, DeserializeError> {
    deserialize_document(input, GET_PULL_REQUEST_OUTPUT_FIELDS)
}

const GET_REPOSITORY_OUTPUT_FIELDS: &[Field<crate::output::GetRepositoryOutput>] = &[
    Field {
        name: "repositoryMetadata",
        decode: |shape, tokens| {
            shape.repository_metadata = deser_structure_repository_metadata(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_operation_get_repository(
    input: &[u8],
) -> Result<crate::output::GetRepositoryOutput, DeserializeError> {
    deserialize_document(input, GET_REPOSITORY_OUTPUT_FIELDS)
}

const APPROVAL_RULE_FIELDS: &[Field<crate::model::ApprovalRule>] = &[
    Field {
        name: "approvalRuleId",
        decode: |shape, tokens| {
            shape.approval_rule_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "approvalRuleName",
        decode: |shape, tokens| {
            shape.approval_rule_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "approvalRuleContent",
        decode: |shape, tokens| {
            shape.approval_rule_content = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "ruleContentSha256",
        decode: |shape, tokens| {
            shape.rule_content_sha256 = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "lastModifiedDate",
        decode: |shape, tokens| {
            shape.last_modified_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "creationDate",
        decode: |shape, tokens| {
            shape.creation_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "lastModifiedUser",
        decode: |shape, tokens| {
            shape.last_modified_user = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "originApprovalRuleTemplate",
        decode: |shape, tokens| {
            shape.origin_approval_rule_template = deser_structure_origin_approval_rule_template(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_approval_rule(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::ApprovalRule>, DeserializeError> {
    deserialize_struct(tokens, APPROVAL_RULE_FIELDS)
}

const BRANCH_INFO_FIELDS: &[Field<crate::model::BranchInfo>] = &[
    Field {
        name: "branchName",
        decode: |shape, tokens| {
            shape.branch_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "commitId",
        decode: |shape, tokens| {
            shape.commit_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_branch_info(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::BranchInfo>, DeserializeError> {
    deserialize_struct(tokens, BRANCH_INFO_FIELDS)
}

const COMMENT_FIELDS: &[Field<crate::model::Comment>] = &[
    Field {
        name: "commentId",
        decode: |shape, tokens| {
            shape.comment_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "content",
        decode: |shape, tokens| {
            shape.content = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "inReplyTo",
        decode: |shape, tokens| {
            shape.in_reply_to = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "creationDate",
        decode: |shape, tokens| {
            shape.creation_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "lastModifiedDate",
        decode: |shape, tokens| {
            shape.last_modified_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "authorArn",
        decode: |shape, tokens| {
            shape.author_arn = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "deleted",
        decode: |shape, tokens| {
            shape.deleted = expect_bool_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "clientRequestToken",
        decode: |shape, tokens| {
            shape.client_request_token = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "callerReactions",
        decode: |shape, tokens| {
            shape.caller_reactions = deserialize_list(tokens, |tokens| expect_string_or_null(tokens.next()))?;
            Ok(())
        },
    },
    Field {
        name: "reactionCounts",
        decode: |shape, tokens| {
            shape.reaction_counts = deserialize_map(tokens, |tokens| expect_i32_or_null(tokens.next()))?;
            Ok(())
        },
    },
];

pub fn deser_structure_comment(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::Comment>, DeserializeError> {
    deserialize_struct(tokens, COMMENT_FIELDS)
}

const COMMIT_FIELDS: &[Field<crate::model::Commit>] = &[
    Field {
        name: "commitId",
        decode: |shape, tokens| {
            shape.commit_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "treeId",
        decode: |shape, tokens| {
            shape.tree_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "parents",
        decode: |shape, tokens| {
            shape.parents = deserialize_list(tokens, |tokens| expect_string_or_null(tokens.next()))?;
            Ok(())
        },
    },
    Field {
        name: "message",
        decode: |shape, tokens| {
            shape.message = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "author",
        decode: |shape, tokens| {
            shape.author = deser_structure_user_info(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "committer",
        decode: |shape, tokens| {
            shape.committer = deser_structure_user_info(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "additionalData",
        decode: |shape, tokens| {
            shape.additional_data = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_commit(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::Commit>, DeserializeError> {
    deserialize_struct(tokens, COMMIT_FIELDS)
}

const DELETE_FILE_ENTRY_FIELDS: &[Field<crate::model::DeleteFileEntry>] = &[
    Field {
        name: "filePath",
        decode: |shape, tokens| {
            shape.file_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_delete_file_entry(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::DeleteFileEntry>, DeserializeError> {
    deserialize_struct(tokens, DELETE_FILE_ENTRY_FIELDS)
}

const FILE_METADATA_FIELDS: &[Field<crate::model::FileMetadata>] = &[
    Field {
        name: "absolutePath",
        decode: |shape, tokens| {
            shape.absolute_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "blobId",
        decode: |shape, tokens| {
            shape.blob_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "fileMode",
        decode: |shape, tokens| {
            shape.file_mode = expect_string_or_null(tokens.next())?.map(|s| crate::model::FileModeTypeEnum::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_file_metadata(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::FileMetadata>, DeserializeError> {
    deserialize_struct(tokens, FILE_METADATA_FIELDS)
}

const MERGE_METADATA_FIELDS: &[Field<crate::model::MergeMetadata>] = &[
    Field {
        name: "isMerged",
        decode: |shape, tokens| {
            shape.is_merged = expect_bool_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "mergedBy",
        decode: |shape, tokens| {
            shape.merged_by = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "mergeCommitId",
        decode: |shape, tokens| {
            shape.merge_commit_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "mergeOption",
        decode: |shape, tokens| {
            shape.merge_option = expect_string_or_null(tokens.next())?.map(|s| crate::model::MergeOptionTypeEnum::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_merge_metadata(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::MergeMetadata>, DeserializeError> {
    deserialize_struct(tokens, MERGE_METADATA_FIELDS)
}

const ORIGIN_APPROVAL_RULE_TEMPLATE_FIELDS: &[Field<crate::model::OriginApprovalRuleTemplate>] = &[
    Field {
        name: "approvalRuleTemplateId",
        decode: |shape, tokens| {
            shape.approval_rule_template_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "approvalRuleTemplateName",
        decode: |shape, tokens| {
            shape.approval_rule_template_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_origin_approval_rule_template(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::OriginApprovalRuleTemplate>, DeserializeError> {
    deserialize_struct(tokens, ORIGIN_APPROVAL_RULE_TEMPLATE_FIELDS)
}

const PULL_REQUEST_FIELDS: &[Field<crate::model::PullRequest>] = &[
    Field {
        name: "pullRequestId",
        decode: |shape, tokens| {
            shape.pull_request_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "title",
        decode: |shape, tokens| {
            shape.title = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "description",
        decode: |shape, tokens| {
            shape.description = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "lastActivityDate",
        decode: |shape, tokens| {
            shape.last_activity_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "creationDate",
        decode: |shape, tokens| {
            shape.creation_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "pullRequestStatus",
        decode: |shape, tokens| {
            shape.pull_request_status = expect_string_or_null(tokens.next())?.map(|s| crate::model::PullRequestStatusEnum::from(s.as_str()));
            Ok(())
        },
    },
    Field {
        name: "authorArn",
        decode: |shape, tokens| {
            shape.author_arn = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "pullRequestTargets",
        decode: |shape, tokens| {
            shape.pull_request_targets = deserialize_list(tokens, |tokens| deser_structure_pull_request_target(tokens))?;
            Ok(())
        },
    },
    Field {
        name: "clientRequestToken",
        decode: |shape, tokens| {
            shape.client_request_token = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "revisionId",
        decode: |shape, tokens| {
            shape.revision_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "approvalRules",
        decode: |shape, tokens| {
            shape.approval_rules = deserialize_list(tokens, |tokens| deser_structure_approval_rule(tokens))?;
            Ok(())
        },
    },
];

pub fn deser_structure_pull_request(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::PullRequest>, DeserializeError> {
    deserialize_struct(tokens, PULL_REQUEST_FIELDS)
}

const PULL_REQUEST_TARGET_FIELDS: &[Field<crate::model::PullRequestTarget>] = &[
    Field {
        name: "repositoryName",
        decode: |shape, tokens| {
            shape.repository_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "sourceReference",
        decode: |shape, tokens| {
            shape.source_reference = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "destinationReference",
        decode: |shape, tokens| {
            shape.destination_reference = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "destinationCommit",
        decode: |shape, tokens| {
            shape.destination_commit = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "sourceCommit",
        decode: |shape, tokens| {
            shape.source_commit = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "mergeBase",
        decode: |shape, tokens| {
            shape.merge_base = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "mergeMetadata",
        decode: |shape, tokens| {
            shape.merge_metadata = deser_structure_merge_metadata(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_pull_request_target(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::PullRequestTarget>, DeserializeError> {
    deserialize_struct(tokens, PULL_REQUEST_TARGET_FIELDS)
}

const PUT_FILE_ENTRY_FIELDS: &[Field<crate::model::PutFileEntry>] = &[
    Field {
        name: "filePath",
        decode: |shape, tokens| {
            shape.file_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "fileMode",
        decode: |shape, tokens| {
            shape.file_mode = expect_string_or_null(tokens.next())?.map(|s| crate::model::FileModeTypeEnum::from(s.as_str()));
            Ok(())
        },
    },
    Field {
        name: "fileContent",
        decode: |shape, tokens| {
            shape.file_content = expect_blob_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "sourceFile",
        decode: |shape, tokens| {
            shape.source_file = deser_structure_source_file_specifier(tokens)?;
            Ok(())
        },
    },
];

pub fn deser_structure_put_file_entry(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::PutFileEntry>, DeserializeError> {
    deserialize_struct(tokens, PUT_FILE_ENTRY_FIELDS)
}

const REACTION_FOR_COMMENT_FIELDS: &[Field<crate::model::ReactionForComment>] = &[
    Field {
        name: "reaction",
        decode: |shape, tokens| {
            shape.reaction = deser_structure_reaction_value_formats(tokens)?;
            Ok(())
        },
    },
    Field {
        name: "reactionUsers",
        decode: |shape, tokens| {
            shape.reaction_users = deserialize_list(tokens, |tokens| expect_string_or_null(tokens.next()))?;
            Ok(())
        },
    },
    Field {
        name: "reactionsFromDeletedUsersCount",
        decode: |shape, tokens| {
            shape.reactions_from_deleted_users_count = expect_i32_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_reaction_for_comment(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::ReactionForComment>, DeserializeError> {
    deserialize_struct(tokens, REACTION_FOR_COMMENT_FIELDS)
}

const REACTION_VALUE_FORMATS_FIELDS: &[Field<crate::model::ReactionValueFormats>] = &[
    Field {
        name: "emoji",
        decode: |shape, tokens| {
            shape.emoji = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "shortCode",
        decode: |shape, tokens| {
            shape.short_code = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "unicode",
        decode: |shape, tokens| {
            shape.unicode = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_reaction_value_formats(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::ReactionValueFormats>, DeserializeError> {
    deserialize_struct(tokens, REACTION_VALUE_FORMATS_FIELDS)
}

const REPOSITORY_METADATA_FIELDS: &[Field<crate::model::RepositoryMetadata>] = &[
    Field {
        name: "accountId",
        decode: |shape, tokens| {
            shape.account_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "repositoryId",
        decode: |shape, tokens| {
            shape.repository_id = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "repositoryName",
        decode: |shape, tokens| {
            shape.repository_name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "repositoryDescription",
        decode: |shape, tokens| {
            shape.repository_description = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "defaultBranch",
        decode: |shape, tokens| {
            shape.default_branch = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "lastModifiedDate",
        decode: |shape, tokens| {
            shape.last_modified_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "creationDate",
        decode: |shape, tokens| {
            shape.creation_date = expect_timestamp_or_null(tokens.next(), crate::TIMESTAMP_FORMAT)?;
            Ok(())
        },
    },
    Field {
        name: "cloneUrlHttp",
        decode: |shape, tokens| {
            shape.clone_url_http = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "cloneUrlSsh",
        decode: |shape, tokens| {
            shape.clone_url_ssh = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "Arn",
        decode: |shape, tokens| {
            shape.arn = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_repository_metadata(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::RepositoryMetadata>, DeserializeError> {
    deserialize_struct(tokens, REPOSITORY_METADATA_FIELDS)
}

const SET_FILE_MODE_ENTRY_FIELDS: &[Field<crate::model::SetFileModeEntry>] = &[
    Field {
        name: "filePath",
        decode: |shape, tokens| {
            shape.file_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "fileMode",
        decode: |shape, tokens| {
            shape.file_mode = expect_string_or_null(tokens.next())?.map(|s| crate::model::FileModeTypeEnum::from(s.as_str()));
            Ok(())
        },
    },
];

pub fn deser_structure_set_file_mode_entry(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::SetFileModeEntry>, DeserializeError> {
    deserialize_struct(tokens, SET_FILE_MODE_ENTRY_FIELDS)
}

const SOURCE_FILE_SPECIFIER_FIELDS: &[Field<crate::model::SourceFileSpecifier>] = &[
    Field {
        name: "filePath",
        decode: |shape, tokens| {
            shape.file_path = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "isMove",
        decode: |shape, tokens| {
            shape.is_move = expect_bool_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_source_file_specifier(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::SourceFileSpecifier>, DeserializeError> {
    deserialize_struct(tokens, SOURCE_FILE_SPECIFIER_FIELDS)
}

const USER_INFO_FIELDS: &[Field<crate::model::UserInfo>] = &[
    Field {
        name: "name",
        decode: |shape, tokens| {
            shape.name = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "email",
        decode: |shape, tokens| {
            shape.email = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
    Field {
        name: "date",
        decode: |shape, tokens| {
            shape.date = expect_string_or_null(tokens.next())?;
            Ok(())
        },
    },
];

pub fn deser_structure_user_info(
    tokens: &mut TokenStream<'_>,
) -> Result<Option<crate::model::UserInfo>, DeserializeError> {
    deserialize_struct(tokens, USER_INFO_FIELDS)
}
