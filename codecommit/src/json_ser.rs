/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Encoders for every operation input and model structure. Members are written in
//! declaration order and absent members are omitted.

use smithy_json::serialize::JsonObjectWriter;
use smithy_types::instant::DateTimeFormatError;

pub fn serialize_operation_batch_get_repositories(
    input: &crate::input::BatchGetRepositoriesInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_batch_get_repositories_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_create_branch(
    input: &crate::input::CreateBranchInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_create_branch_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_create_commit(
    input: &crate::input::CreateCommitInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_create_commit_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_delete_branch(
    input: &crate::input::DeleteBranchInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_delete_branch_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_delete_file(
    input: &crate::input::DeleteFileInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_delete_file_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_blob(
    input: &crate::input::GetBlobInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_blob_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_comment(
    input: &crate::input::GetCommentInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_comment_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_comment_reactions(
    input: &crate::input::GetCommentReactionsInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_comment_reactions_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_commit(
    input: &crate::input::GetCommitInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_commit_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_pull_request(
    input: &crate::input::GetPullRequestInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_pull_request_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_operation_get_repository(
    input: &crate::input::GetRepositoryInput,
) -> Result<String, DateTimeFormatError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    serialize_structure_get_repository_input(&mut object, input)?;
    object.finish();
    Ok(out)
}

pub fn serialize_structure_batch_get_repositories_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::BatchGetRepositoriesInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_names {
        let mut array_2 = object.key("repositoryNames").start_array();
        for item_3 in var_1 {
            array_2.value().string(item_3);
        }
        array_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_create_branch_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::CreateBranchInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.branch_name {
        object.key("branchName").string(var_2);
    }
    if let Some(var_3) = &input.commit_id {
        object.key("commitId").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_create_commit_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::CreateCommitInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.branch_name {
        object.key("branchName").string(var_2);
    }
    if let Some(var_3) = &input.parent_commit_id {
        object.key("parentCommitId").string(var_3);
    }
    if let Some(var_4) = &input.author_name {
        object.key("authorName").string(var_4);
    }
    if let Some(var_5) = &input.email {
        object.key("email").string(var_5);
    }
    if let Some(var_6) = &input.commit_message {
        object.key("commitMessage").string(var_6);
    }
    if let Some(var_7) = &input.keep_empty_folders {
        object.key("keepEmptyFolders").boolean(*var_7);
    }
    if let Some(var_8) = &input.put_files {
        let mut array_9 = object.key("putFiles").start_array();
        for item_10 in var_8 {
            {
                let mut object_11 = array_9.value().start_object();
                crate::json_ser::serialize_structure_put_file_entry(&mut object_11, item_10)?;
                object_11.finish();
            }
        }
        array_9.finish();
    }
    if let Some(var_12) = &input.delete_files {
        let mut array_13 = object.key("deleteFiles").start_array();
        for item_14 in var_12 {
            {
                let mut object_15 = array_13.value().start_object();
                crate::json_ser::serialize_structure_delete_file_entry(&mut object_15, item_14)?;
                object_15.finish();
            }
        }
        array_13.finish();
    }
    if let Some(var_16) = &input.set_file_modes {
        let mut array_17 = object.key("setFileModes").start_array();
        for item_18 in var_16 {
            {
                let mut object_19 = array_17.value().start_object();
                crate::json_ser::serialize_structure_set_file_mode_entry(&mut object_19, item_18)?;
                object_19.finish();
            }
        }
        array_17.finish();
    }
    Ok(())
}

pub fn serialize_structure_delete_branch_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DeleteBranchInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.branch_name {
        object.key("branchName").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_delete_file_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::DeleteFileInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.branch_name {
        object.key("branchName").string(var_2);
    }
    if let Some(var_3) = &input.file_path {
        object.key("filePath").string(var_3);
    }
    if let Some(var_4) = &input.parent_commit_id {
        object.key("parentCommitId").string(var_4);
    }
    if let Some(var_5) = &input.keep_empty_folders {
        object.key("keepEmptyFolders").boolean(*var_5);
    }
    if let Some(var_6) = &input.commit_message {
        object.key("commitMessage").string(var_6);
    }
    if let Some(var_7) = &input.name {
        object.key("name").string(var_7);
    }
    if let Some(var_8) = &input.email {
        object.key("email").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_get_blob_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetBlobInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.blob_id {
        object.key("blobId").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_get_comment_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetCommentInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.comment_id {
        object.key("commentId").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_get_comment_reactions_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetCommentReactionsInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.comment_id {
        object.key("commentId").string(var_1);
    }
    if let Some(var_2) = &input.reaction_user_arn {
        object.key("reactionUserArn").string(var_2);
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
    Ok(())
}

pub fn serialize_structure_get_commit_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetCommitInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.commit_id {
        object.key("commitId").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_get_pull_request_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetPullRequestInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.pull_request_id {
        object.key("pullRequestId").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_get_repository_input(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::input::GetRepositoryInput,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_approval_rule(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ApprovalRule,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.approval_rule_id {
        object.key("approvalRuleId").string(var_1);
    }
    if let Some(var_2) = &input.approval_rule_name {
        object.key("approvalRuleName").string(var_2);
    }
    if let Some(var_3) = &input.approval_rule_content {
        object.key("approvalRuleContent").string(var_3);
    }
    if let Some(var_4) = &input.rule_content_sha256 {
        object.key("ruleContentSha256").string(var_4);
    }
    if let Some(var_5) = &input.last_modified_date {
        object.key("lastModifiedDate").instant(var_5, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_6) = &input.creation_date {
        object.key("creationDate").instant(var_6, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_7) = &input.last_modified_user {
        object.key("lastModifiedUser").string(var_7);
    }
    if let Some(var_8) = &input.origin_approval_rule_template {
        {
            let mut object_9 = object.key("originApprovalRuleTemplate").start_object();
            crate::json_ser::serialize_structure_origin_approval_rule_template(&mut object_9, var_8)?;
            object_9.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_branch_info(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::BranchInfo,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.branch_name {
        object.key("branchName").string(var_1);
    }
    if let Some(var_2) = &input.commit_id {
        object.key("commitId").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_comment(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Comment,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.comment_id {
        object.key("commentId").string(var_1);
    }
    if let Some(var_2) = &input.content {
        object.key("content").string(var_2);
    }
    if let Some(var_3) = &input.in_reply_to {
        object.key("inReplyTo").string(var_3);
    }
    if let Some(var_4) = &input.creation_date {
        object.key("creationDate").instant(var_4, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_5) = &input.last_modified_date {
        object.key("lastModifiedDate").instant(var_5, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_6) = &input.author_arn {
        object.key("authorArn").string(var_6);
    }
    if let Some(var_7) = &input.deleted {
        object.key("deleted").boolean(*var_7);
    }
    if let Some(var_8) = &input.client_request_token {
        object.key("clientRequestToken").string(var_8);
    }
    if let Some(var_9) = &input.caller_reactions {
        let mut array_10 = object.key("callerReactions").start_array();
        for item_11 in var_9 {
            array_10.value().string(item_11);
        }
        array_10.finish();
    }
    if let Some(var_12) = &input.reaction_counts {
        let mut object_13 = object.key("reactionCounts").start_object();
        for (key_14, value_14) in var_12 {
            object_13.key(key_14).number(smithy_types::Number::from(*value_14));
        }
        object_13.finish();
    }
    Ok(())
}

pub fn serialize_structure_commit(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::Commit,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.commit_id {
        object.key("commitId").string(var_1);
    }
    if let Some(var_2) = &input.tree_id {
        object.key("treeId").string(var_2);
    }
    if let Some(var_3) = &input.parents {
        let mut array_4 = object.key("parents").start_array();
        for item_5 in var_3 {
            array_4.value().string(item_5);
        }
        array_4.finish();
    }
    if let Some(var_6) = &input.message {
        object.key("message").string(var_6);
    }
    if let Some(var_7) = &input.author {
        {
            let mut object_8 = object.key("author").start_object();
            crate::json_ser::serialize_structure_user_info(&mut object_8, var_7)?;
            object_8.finish();
        }
    }
    if let Some(var_9) = &input.committer {
        {
            let mut object_10 = object.key("committer").start_object();
            crate::json_ser::serialize_structure_user_info(&mut object_10, var_9)?;
            object_10.finish();
        }
    }
    if let Some(var_11) = &input.additional_data {
        object.key("additionalData").string(var_11);
    }
    Ok(())
}

pub fn serialize_structure_delete_file_entry(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::DeleteFileEntry,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.file_path {
        object.key("filePath").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_file_metadata(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::FileMetadata,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.absolute_path {
        object.key("absolutePath").string(var_1);
    }
    if let Some(var_2) = &input.blob_id {
        object.key("blobId").string(var_2);
    }
    if let Some(var_3) = &input.file_mode {
        object.key("fileMode").string(var_3.as_str());
    }
    Ok(())
}

pub fn serialize_structure_merge_metadata(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::MergeMetadata,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.is_merged {
        object.key("isMerged").boolean(*var_1);
    }
    if let Some(var_2) = &input.merged_by {
        object.key("mergedBy").string(var_2);
    }
    if let Some(var_3) = &input.merge_commit_id {
        object.key("mergeCommitId").string(var_3);
    }
    if let Some(var_4) = &input.merge_option {
        object.key("mergeOption").string(var_4.as_str());
    }
    Ok(())
}

pub fn serialize_structure_origin_approval_rule_template(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::OriginApprovalRuleTemplate,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.approval_rule_template_id {
        object.key("approvalRuleTemplateId").string(var_1);
    }
    if let Some(var_2) = &input.approval_rule_template_name {
        object.key("approvalRuleTemplateName").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_pull_request(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::PullRequest,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.pull_request_id {
        object.key("pullRequestId").string(var_1);
    }
    if let Some(var_2) = &input.title {
        object.key("title").string(var_2);
    }
    if let Some(var_3) = &input.description {
        object.key("description").string(var_3);
    }
    if let Some(var_4) = &input.last_activity_date {
        object.key("lastActivityDate").instant(var_4, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_5) = &input.creation_date {
        object.key("creationDate").instant(var_5, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_6) = &input.pull_request_status {
        object.key("pullRequestStatus").string(var_6.as_str());
    }
    if let Some(var_7) = &input.author_arn {
        object.key("authorArn").string(var_7);
    }
    if let Some(var_8) = &input.pull_request_targets {
        let mut array_9 = object.key("pullRequestTargets").start_array();
        for item_10 in var_8 {
            {
                let mut object_11 = array_9.value().start_object();
                crate::json_ser::serialize_structure_pull_request_target(&mut object_11, item_10)?;
                object_11.finish();
            }
        }
        array_9.finish();
    }
    if let Some(var_12) = &input.client_request_token {
        object.key("clientRequestToken").string(var_12);
    }
    if let Some(var_13) = &input.revision_id {
        object.key("revisionId").string(var_13);
    }
    if let Some(var_14) = &input.approval_rules {
        let mut array_15 = object.key("approvalRules").start_array();
        for item_16 in var_14 {
            {
                let mut object_17 = array_15.value().start_object();
                crate::json_ser::serialize_structure_approval_rule(&mut object_17, item_16)?;
                object_17.finish();
            }
        }
        array_15.finish();
    }
    Ok(())
}

pub fn serialize_structure_pull_request_target(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::PullRequestTarget,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.repository_name {
        object.key("repositoryName").string(var_1);
    }
    if let Some(var_2) = &input.source_reference {
        object.key("sourceReference").string(var_2);
    }
    if let Some(var_3) = &input.destination_reference {
        object.key("destinationReference").string(var_3);
    }
    if let Some(var_4) = &input.destination_commit {
        object.key("destinationCommit").string(var_4);
    }
    if let Some(var_5) = &input.source_commit {
        object.key("sourceCommit").string(var_5);
    }
    if let Some(var_6) = &input.merge_base {
        object.key("mergeBase").string(var_6);
    }
    if let Some(var_7) = &input.merge_metadata {
        {
            let mut object_8 = object.key("mergeMetadata").start_object();
            crate::json_ser::serialize_structure_merge_metadata(&mut object_8, var_7)?;
            object_8.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_put_file_entry(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::PutFileEntry,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.file_path {
        object.key("filePath").string(var_1);
    }
    if let Some(var_2) = &input.file_mode {
        object.key("fileMode").string(var_2.as_str());
    }
    if let Some(var_3) = &input.file_content {
        object.key("fileContent").blob(var_3);
    }
    if let Some(var_4) = &input.source_file {
        {
            let mut object_5 = object.key("sourceFile").start_object();
            crate::json_ser::serialize_structure_source_file_specifier(&mut object_5, var_4)?;
            object_5.finish();
        }
    }
    Ok(())
}

pub fn serialize_structure_reaction_for_comment(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ReactionForComment,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.reaction {
        {
            let mut object_2 = object.key("reaction").start_object();
            crate::json_ser::serialize_structure_reaction_value_formats(&mut object_2, var_1)?;
            object_2.finish();
        }
    }
    if let Some(var_3) = &input.reaction_users {
        let mut array_4 = object.key("reactionUsers").start_array();
        for item_5 in var_3 {
            array_4.value().string(item_5);
        }
        array_4.finish();
    }
    if let Some(var_6) = &input.reactions_from_deleted_users_count {
        object.key("reactionsFromDeletedUsersCount").number(smithy_types::Number::from(*var_6));
    }
    Ok(())
}

pub fn serialize_structure_reaction_value_formats(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::ReactionValueFormats,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.emoji {
        object.key("emoji").string(var_1);
    }
    if let Some(var_2) = &input.short_code {
        object.key("shortCode").string(var_2);
    }
    if let Some(var_3) = &input.unicode {
        object.key("unicode").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_repository_metadata(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::RepositoryMetadata,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.account_id {
        object.key("accountId").string(var_1);
    }
    if let Some(var_2) = &input.repository_id {
        object.key("repositoryId").string(var_2);
    }
    if let Some(var_3) = &input.repository_name {
        object.key("repositoryName").string(var_3);
    }
    if let Some(var_4) = &input.repository_description {
        object.key("repositoryDescription").string(var_4);
    }
    if let Some(var_5) = &input.default_branch {
        object.key("defaultBranch").string(var_5);
    }
    if let Some(var_6) = &input.last_modified_date {
        object.key("lastModifiedDate").instant(var_6, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_7) = &input.creation_date {
        object.key("creationDate").instant(var_7, crate::TIMESTAMP_FORMAT)?;
    }
    if let Some(var_8) = &input.clone_url_http {
        object.key("cloneUrlHttp").string(var_8);
    }
    if let Some(var_9) = &input.clone_url_ssh {
        object.key("cloneUrlSsh").string(var_9);
    }
    if let Some(var_10) = &input.arn {
        object.key("Arn").string(var_10);
    }
    Ok(())
}

pub fn serialize_structure_set_file_mode_entry(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::SetFileModeEntry,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.file_path {
        object.key("filePath").string(var_1);
    }
    if let Some(var_2) = &input.file_mode {
        object.key("fileMode").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_source_file_specifier(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::SourceFileSpecifier,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.file_path {
        object.key("filePath").string(var_1);
    }
    if let Some(var_2) = &input.is_move {
        object.key("isMove").boolean(*var_2);
    }
    Ok(())
}

pub fn serialize_structure_user_info(
    object: &mut JsonObjectWriter<'_>,
    input: &crate::model::UserInfo,
) -> Result<(), DateTimeFormatError> {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
    if let Some(var_2) = &input.email {
        object.key("email").string(var_2);
    }
    if let Some(var_3) = &input.date {
        object.key("date").string(var_3);
    }
    Ok(())
}
