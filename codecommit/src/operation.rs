/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one zero-sized type per operation.

use crate::error::CodeCommitError;
use bytes::Bytes;
use smithy_http::response::{ParseError, ParseStrictResponse};
use smithy_json::deserialize::DeserializeError;
use smithy_json::json_errors::parse_generic_error;

/// Success statuses decode the output document; anything else is classified as a service
/// error.
fn parse_response<O>(
    response: &http::Response<Bytes>,
    parse_output: fn(&[u8]) -> Result<O, DeserializeError>,
) -> Result<O, ParseError<CodeCommitError>> {
    if response.status().is_success() {
        return parse_output(response.body()).map_err(ParseError::unparseable);
    }
    let meta = parse_generic_error(response.headers(), response.body())
        .map_err(ParseError::unparseable)?;
    let err = CodeCommitError::from_meta(meta);
    if err.is_unhandled() {
        tracing::trace!(code = ?err.code(), status = %response.status(), "unrecognized error code");
    }
    Err(ParseError::Service(err))
}

/// Returns information about one or more repositories.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct BatchGetRepositories {
    _private: (),
}
impl BatchGetRepositories {
    /// Creates a new builder-style object to manufacture [`BatchGetRepositoriesInput`](crate::input::BatchGetRepositoriesInput)
    pub fn builder() -> crate::input::batch_get_repositories_input::Builder {
        crate::input::batch_get_repositories_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for BatchGetRepositories {
    type Output = Result<crate::output::BatchGetRepositoriesOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_batch_get_repositories)
    }
}

/// Creates a branch in a repository and points the branch to a commit.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct CreateBranch {
    _private: (),
}
impl CreateBranch {
    /// Creates a new builder-style object to manufacture [`CreateBranchInput`](crate::input::CreateBranchInput)
    pub fn builder() -> crate::input::create_branch_input::Builder {
        crate::input::create_branch_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateBranch {
    type Output = Result<crate::output::CreateBranchOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_create_branch)
    }
}

/// Creates a commit for a repository on the tip of a specified branch.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct CreateCommit {
    _private: (),
}
impl CreateCommit {
    /// Creates a new builder-style object to manufacture [`CreateCommitInput`](crate::input::CreateCommitInput)
    pub fn builder() -> crate::input::create_commit_input::Builder {
        crate::input::create_commit_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for CreateCommit {
    type Output = Result<crate::output::CreateCommitOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_create_commit)
    }
}

/// Deletes a branch from a repository, unless that branch is the default branch.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DeleteBranch {
    _private: (),
}
impl DeleteBranch {
    /// Creates a new builder-style object to manufacture [`DeleteBranchInput`](crate::input::DeleteBranchInput)
    pub fn builder() -> crate::input::delete_branch_input::Builder {
        crate::input::delete_branch_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteBranch {
    type Output = Result<crate::output::DeleteBranchOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_delete_branch)
    }
}

/// Deletes a specified file from a specified branch, creating a new commit.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DeleteFile {
    _private: (),
}
impl DeleteFile {
    /// Creates a new builder-style object to manufacture [`DeleteFileInput`](crate::input::DeleteFileInput)
    pub fn builder() -> crate::input::delete_file_input::Builder {
        crate::input::delete_file_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for DeleteFile {
    type Output = Result<crate::output::DeleteFileOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_delete_file)
    }
}

/// Returns the base-64 encoded content of an individual blob in a repository.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetBlob {
    _private: (),
}
impl GetBlob {
    /// Creates a new builder-style object to manufacture [`GetBlobInput`](crate::input::GetBlobInput)
    pub fn builder() -> crate::input::get_blob_input::Builder {
        crate::input::get_blob_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetBlob {
    type Output = Result<crate::output::GetBlobOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_blob)
    }
}

/// Returns the content of a comment made on a change, file or commit.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetComment {
    _private: (),
}
impl GetComment {
    /// Creates a new builder-style object to manufacture [`GetCommentInput`](crate::input::GetCommentInput)
    pub fn builder() -> crate::input::get_comment_input::Builder {
        crate::input::get_comment_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetComment {
    type Output = Result<crate::output::GetCommentOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_comment)
    }
}

/// Returns information about reactions to a specified comment.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetCommentReactions {
    _private: (),
}
impl GetCommentReactions {
    /// Creates a new builder-style object to manufacture [`GetCommentReactionsInput`](crate::input::GetCommentReactionsInput)
    pub fn builder() -> crate::input::get_comment_reactions_input::Builder {
        crate::input::get_comment_reactions_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetCommentReactions {
    type Output = Result<crate::output::GetCommentReactionsOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_comment_reactions)
    }
}

/// Returns information about a commit, including commit message and committer information.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetCommit {
    _private: (),
}
impl GetCommit {
    /// Creates a new builder-style object to manufacture [`GetCommitInput`](crate::input::GetCommitInput)
    pub fn builder() -> crate::input::get_commit_input::Builder {
        crate::input::get_commit_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetCommit {
    type Output = Result<crate::output::GetCommitOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_commit)
    }
}

/// Gets information about a pull request in a specified repository.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetPullRequest {
    _private: (),
}
impl GetPullRequest {
    /// Creates a new builder-style object to manufacture [`GetPullRequestInput`](crate::input::GetPullRequestInput)
    pub fn builder() -> crate::input::get_pull_request_input::Builder {
        crate::input::get_pull_request_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetPullRequest {
    type Output = Result<crate::output::GetPullRequestOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_pull_request)
    }
}

/// Returns information about a repository.
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct GetRepository {
    _private: (),
}
impl GetRepository {
    /// Creates a new builder-style object to manufacture [`GetRepositoryInput`](crate::input::GetRepositoryInput)
    pub fn builder() -> crate::input::get_repository_input::Builder {
        crate::input::get_repository_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl ParseStrictResponse for GetRepository {
    type Output = Result<crate::output::GetRepositoryOutput, ParseError<CodeCommitError>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        parse_response(response, crate::json_deser::deser_operation_get_repository)
    }
}
