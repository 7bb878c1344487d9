/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

/// Wraps a serialized payload in the JSON-RPC envelope and points it at the configured endpoint.
fn make_operation<H>(
    config: &Config,
    operation_name: &'static str,
    payload: String,
    handler: H,
) -> Result<Operation<H>, BuildError> {
    let mut request = smithy_http::json_rpc::build_request(
        http::Request::builder(),
        crate::TARGET_PREFIX,
        operation_name,
        payload,
    )?;
    config.endpoint()?.set_endpoint(request.uri_mut())?;
    Ok(Operation::new(
        Request::new(request),
        handler,
        Metadata::new(operation_name, crate::SERVICE_NAME),
    ))
}

/// Input for [`BatchGetRepositories`](crate::operation::BatchGetRepositories).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct BatchGetRepositoriesInput {
    /// The names of the repositories to get information about.
    pub repository_names: std::option::Option<std::vec::Vec<std::string::String>>,
}
/// See [`BatchGetRepositoriesInput`](crate::input::BatchGetRepositoriesInput)
pub mod batch_get_repositories_input {
    /// A builder for [`BatchGetRepositoriesInput`](crate::input::BatchGetRepositoriesInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_names: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// The names of the repositories to get information about.
        pub fn repository_names(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.repository_names = Some(input);
            self
        }
        pub fn set_repository_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.repository_names = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetRepositoriesInput`](crate::input::BatchGetRepositoriesInput)
        pub fn build_input(self) -> crate::input::BatchGetRepositoriesInput {
            crate::input::BatchGetRepositoriesInput {
                repository_names: self.repository_names,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::BatchGetRepositories>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl BatchGetRepositoriesInput {
    /// Creates a new builder-style object to manufacture [`BatchGetRepositoriesInput`](crate::input::BatchGetRepositoriesInput)
    pub fn builder() -> crate::input::batch_get_repositories_input::Builder {
        crate::input::batch_get_repositories_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::BatchGetRepositories>, BuildError> {
        make_operation(
            config,
            "BatchGetRepositories",
            crate::json_ser::serialize_operation_batch_get_repositories(self)?,
            crate::operation::BatchGetRepositories::new(),
        )
    }
}

/// Input for [`CreateBranch`](crate::operation::CreateBranch).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateBranchInput {
    pub repository_name: std::option::Option<std::string::String>,
    /// The name of the new branch to create.
    pub branch_name: std::option::Option<std::string::String>,
    /// The ID of the commit to point the new branch to.
    pub commit_id: std::option::Option<std::string::String>,
}
/// See [`CreateBranchInput`](crate::input::CreateBranchInput)
pub mod create_branch_input {
    /// A builder for [`CreateBranchInput`](crate::input::CreateBranchInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) branch_name: std::option::Option<std::string::String>,
        pub(crate) commit_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        /// The name of the new branch to create.
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_name = Some(input.into());
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_name = input;
            self
        }
        /// The ID of the commit to point the new branch to.
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateBranchInput`](crate::input::CreateBranchInput)
        pub fn build_input(self) -> crate::input::CreateBranchInput {
            crate::input::CreateBranchInput {
                repository_name: self.repository_name,
                branch_name: self.branch_name,
                commit_id: self.commit_id,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::CreateBranch>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl CreateBranchInput {
    /// Creates a new builder-style object to manufacture [`CreateBranchInput`](crate::input::CreateBranchInput)
    pub fn builder() -> crate::input::create_branch_input::Builder {
        crate::input::create_branch_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateBranch>, BuildError> {
        make_operation(
            config,
            "CreateBranch",
            crate::json_ser::serialize_operation_create_branch(self)?,
            crate::operation::CreateBranch::new(),
        )
    }
}

/// Input for [`CreateCommit`](crate::operation::CreateCommit).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateCommitInput {
    pub repository_name: std::option::Option<std::string::String>,
    /// The name of the branch where you create the commit.
    pub branch_name: std::option::Option<std::string::String>,
    /// The ID of the commit that is the parent of the commit you create.
    pub parent_commit_id: std::option::Option<std::string::String>,
    pub author_name: std::option::Option<std::string::String>,
    pub email: std::option::Option<std::string::String>,
    pub commit_message: std::option::Option<std::string::String>,
    /// Whether to keep folders that become empty as a result of the commit.
    pub keep_empty_folders: std::option::Option<bool>,
    /// The files to add or update in this commit.
    pub put_files: std::option::Option<std::vec::Vec<crate::model::PutFileEntry>>,
    /// The files to delete in this commit.
    pub delete_files: std::option::Option<std::vec::Vec<crate::model::DeleteFileEntry>>,
    /// The file modes to update for files in this commit.
    pub set_file_modes: std::option::Option<std::vec::Vec<crate::model::SetFileModeEntry>>,
}
/// See [`CreateCommitInput`](crate::input::CreateCommitInput)
pub mod create_commit_input {
    /// A builder for [`CreateCommitInput`](crate::input::CreateCommitInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) branch_name: std::option::Option<std::string::String>,
        pub(crate) parent_commit_id: std::option::Option<std::string::String>,
        pub(crate) author_name: std::option::Option<std::string::String>,
        pub(crate) email: std::option::Option<std::string::String>,
        pub(crate) commit_message: std::option::Option<std::string::String>,
        pub(crate) keep_empty_folders: std::option::Option<bool>,
        pub(crate) put_files: std::option::Option<std::vec::Vec<crate::model::PutFileEntry>>,
        pub(crate) delete_files: std::option::Option<std::vec::Vec<crate::model::DeleteFileEntry>>,
        pub(crate) set_file_modes: std::option::Option<std::vec::Vec<crate::model::SetFileModeEntry>>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        /// The name of the branch where you create the commit.
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_name = Some(input.into());
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_name = input;
            self
        }
        /// The ID of the commit that is the parent of the commit you create.
        pub fn parent_commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.parent_commit_id = Some(input.into());
            self
        }
        pub fn set_parent_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.parent_commit_id = input;
            self
        }
        pub fn author_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.author_name = Some(input.into());
            self
        }
        pub fn set_author_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.author_name = input;
            self
        }
        pub fn email(mut self, input: impl Into<std::string::String>) -> Self {
            self.email = Some(input.into());
            self
        }
        pub fn set_email(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.email = input;
            self
        }
        pub fn commit_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_message = Some(input.into());
            self
        }
        pub fn set_commit_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_message = input;
            self
        }
        /// Whether to keep folders that become empty as a result of the commit.
        pub fn keep_empty_folders(mut self, input: bool) -> Self {
            self.keep_empty_folders = Some(input);
            self
        }
        pub fn set_keep_empty_folders(mut self, input: std::option::Option<bool>) -> Self {
            self.keep_empty_folders = input;
            self
        }
        /// The files to add or update in this commit.
        pub fn put_files(mut self, input: std::vec::Vec<crate::model::PutFileEntry>) -> Self {
            self.put_files = Some(input);
            self
        }
        pub fn set_put_files(mut self, input: std::option::Option<std::vec::Vec<crate::model::PutFileEntry>>) -> Self {
            self.put_files = input;
            self
        }
        /// The files to delete in this commit.
        pub fn delete_files(mut self, input: std::vec::Vec<crate::model::DeleteFileEntry>) -> Self {
            self.delete_files = Some(input);
            self
        }
        pub fn set_delete_files(mut self, input: std::option::Option<std::vec::Vec<crate::model::DeleteFileEntry>>) -> Self {
            self.delete_files = input;
            self
        }
        /// The file modes to update for files in this commit.
        pub fn set_file_modes(mut self, input: std::vec::Vec<crate::model::SetFileModeEntry>) -> Self {
            self.set_file_modes = Some(input);
            self
        }
        pub fn set_set_file_modes(mut self, input: std::option::Option<std::vec::Vec<crate::model::SetFileModeEntry>>) -> Self {
            self.set_file_modes = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCommitInput`](crate::input::CreateCommitInput)
        pub fn build_input(self) -> crate::input::CreateCommitInput {
            crate::input::CreateCommitInput {
                repository_name: self.repository_name,
                branch_name: self.branch_name,
                parent_commit_id: self.parent_commit_id,
                author_name: self.author_name,
                email: self.email,
                commit_message: self.commit_message,
                keep_empty_folders: self.keep_empty_folders,
                put_files: self.put_files,
                delete_files: self.delete_files,
                set_file_modes: self.set_file_modes,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::CreateCommit>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl CreateCommitInput {
    /// Creates a new builder-style object to manufacture [`CreateCommitInput`](crate::input::CreateCommitInput)
    pub fn builder() -> crate::input::create_commit_input::Builder {
        crate::input::create_commit_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateCommit>, BuildError> {
        make_operation(
            config,
            "CreateCommit",
            crate::json_ser::serialize_operation_create_commit(self)?,
            crate::operation::CreateCommit::new(),
        )
    }
}

/// Input for [`DeleteBranch`](crate::operation::DeleteBranch).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteBranchInput {
    pub repository_name: std::option::Option<std::string::String>,
    pub branch_name: std::option::Option<std::string::String>,
}
/// See [`DeleteBranchInput`](crate::input::DeleteBranchInput)
pub mod delete_branch_input {
    /// A builder for [`DeleteBranchInput`](crate::input::DeleteBranchInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) branch_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_name = Some(input.into());
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteBranchInput`](crate::input::DeleteBranchInput)
        pub fn build_input(self) -> crate::input::DeleteBranchInput {
            crate::input::DeleteBranchInput {
                repository_name: self.repository_name,
                branch_name: self.branch_name,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::DeleteBranch>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl DeleteBranchInput {
    /// Creates a new builder-style object to manufacture [`DeleteBranchInput`](crate::input::DeleteBranchInput)
    pub fn builder() -> crate::input::delete_branch_input::Builder {
        crate::input::delete_branch_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteBranch>, BuildError> {
        make_operation(
            config,
            "DeleteBranch",
            crate::json_ser::serialize_operation_delete_branch(self)?,
            crate::operation::DeleteBranch::new(),
        )
    }
}

/// Input for [`DeleteFile`](crate::operation::DeleteFile).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteFileInput {
    pub repository_name: std::option::Option<std::string::String>,
    pub branch_name: std::option::Option<std::string::String>,
    /// The fully qualified path to the file that to be deleted.
    pub file_path: std::option::Option<std::string::String>,
    pub parent_commit_id: std::option::Option<std::string::String>,
    pub keep_empty_folders: std::option::Option<bool>,
    pub commit_message: std::option::Option<std::string::String>,
    pub name: std::option::Option<std::string::String>,
    pub email: std::option::Option<std::string::String>,
}
/// See [`DeleteFileInput`](crate::input::DeleteFileInput)
pub mod delete_file_input {
    /// A builder for [`DeleteFileInput`](crate::input::DeleteFileInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) branch_name: std::option::Option<std::string::String>,
        pub(crate) file_path: std::option::Option<std::string::String>,
        pub(crate) parent_commit_id: std::option::Option<std::string::String>,
        pub(crate) keep_empty_folders: std::option::Option<bool>,
        pub(crate) commit_message: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) email: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_name = Some(input.into());
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_name = input;
            self
        }
        /// The fully qualified path to the file that to be deleted.
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        pub fn parent_commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.parent_commit_id = Some(input.into());
            self
        }
        pub fn set_parent_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.parent_commit_id = input;
            self
        }
        pub fn keep_empty_folders(mut self, input: bool) -> Self {
            self.keep_empty_folders = Some(input);
            self
        }
        pub fn set_keep_empty_folders(mut self, input: std::option::Option<bool>) -> Self {
            self.keep_empty_folders = input;
            self
        }
        pub fn commit_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_message = Some(input.into());
            self
        }
        pub fn set_commit_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_message = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn email(mut self, input: impl Into<std::string::String>) -> Self {
            self.email = Some(input.into());
            self
        }
        pub fn set_email(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.email = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteFileInput`](crate::input::DeleteFileInput)
        pub fn build_input(self) -> crate::input::DeleteFileInput {
            crate::input::DeleteFileInput {
                repository_name: self.repository_name,
                branch_name: self.branch_name,
                file_path: self.file_path,
                parent_commit_id: self.parent_commit_id,
                keep_empty_folders: self.keep_empty_folders,
                commit_message: self.commit_message,
                name: self.name,
                email: self.email,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::DeleteFile>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl DeleteFileInput {
    /// Creates a new builder-style object to manufacture [`DeleteFileInput`](crate::input::DeleteFileInput)
    pub fn builder() -> crate::input::delete_file_input::Builder {
        crate::input::delete_file_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteFile>, BuildError> {
        make_operation(
            config,
            "DeleteFile",
            crate::json_ser::serialize_operation_delete_file(self)?,
            crate::operation::DeleteFile::new(),
        )
    }
}

/// Input for [`GetBlob`](crate::operation::GetBlob).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetBlobInput {
    pub repository_name: std::option::Option<std::string::String>,
    pub blob_id: std::option::Option<std::string::String>,
}
/// See [`GetBlobInput`](crate::input::GetBlobInput)
pub mod get_blob_input {
    /// A builder for [`GetBlobInput`](crate::input::GetBlobInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) blob_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        pub fn blob_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.blob_id = Some(input.into());
            self
        }
        pub fn set_blob_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.blob_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetBlobInput`](crate::input::GetBlobInput)
        pub fn build_input(self) -> crate::input::GetBlobInput {
            crate::input::GetBlobInput {
                repository_name: self.repository_name,
                blob_id: self.blob_id,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetBlob>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetBlobInput {
    /// Creates a new builder-style object to manufacture [`GetBlobInput`](crate::input::GetBlobInput)
    pub fn builder() -> crate::input::get_blob_input::Builder {
        crate::input::get_blob_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetBlob>, BuildError> {
        make_operation(
            config,
            "GetBlob",
            crate::json_ser::serialize_operation_get_blob(self)?,
            crate::operation::GetBlob::new(),
        )
    }
}

/// Input for [`GetComment`](crate::operation::GetComment).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommentInput {
    pub comment_id: std::option::Option<std::string::String>,
}
/// See [`GetCommentInput`](crate::input::GetCommentInput)
pub mod get_comment_input {
    /// A builder for [`GetCommentInput`](crate::input::GetCommentInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn comment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.comment_id = Some(input.into());
            self
        }
        pub fn set_comment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.comment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCommentInput`](crate::input::GetCommentInput)
        pub fn build_input(self) -> crate::input::GetCommentInput {
            crate::input::GetCommentInput {
                comment_id: self.comment_id,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetComment>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetCommentInput {
    /// Creates a new builder-style object to manufacture [`GetCommentInput`](crate::input::GetCommentInput)
    pub fn builder() -> crate::input::get_comment_input::Builder {
        crate::input::get_comment_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetComment>, BuildError> {
        make_operation(
            config,
            "GetComment",
            crate::json_ser::serialize_operation_get_comment(self)?,
            crate::operation::GetComment::new(),
        )
    }
}

/// Input for [`GetCommentReactions`](crate::operation::GetCommentReactions).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommentReactionsInput {
    pub comment_id: std::option::Option<std::string::String>,
    /// Only return reactions made by this user.
    pub reaction_user_arn: std::option::Option<std::string::String>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}
/// See [`GetCommentReactionsInput`](crate::input::GetCommentReactionsInput)
pub mod get_comment_reactions_input {
    /// A builder for [`GetCommentReactionsInput`](crate::input::GetCommentReactionsInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comment_id: std::option::Option<std::string::String>,
        pub(crate) reaction_user_arn: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn comment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.comment_id = Some(input.into());
            self
        }
        pub fn set_comment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.comment_id = input;
            self
        }
        /// Only return reactions made by this user.
        pub fn reaction_user_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.reaction_user_arn = Some(input.into());
            self
        }
        pub fn set_reaction_user_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.reaction_user_arn = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCommentReactionsInput`](crate::input::GetCommentReactionsInput)
        pub fn build_input(self) -> crate::input::GetCommentReactionsInput {
            crate::input::GetCommentReactionsInput {
                comment_id: self.comment_id,
                reaction_user_arn: self.reaction_user_arn,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetCommentReactions>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetCommentReactionsInput {
    /// Creates a new builder-style object to manufacture [`GetCommentReactionsInput`](crate::input::GetCommentReactionsInput)
    pub fn builder() -> crate::input::get_comment_reactions_input::Builder {
        crate::input::get_comment_reactions_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetCommentReactions>, BuildError> {
        make_operation(
            config,
            "GetCommentReactions",
            crate::json_ser::serialize_operation_get_comment_reactions(self)?,
            crate::operation::GetCommentReactions::new(),
        )
    }
}

/// Input for [`GetCommit`](crate::operation::GetCommit).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommitInput {
    pub repository_name: std::option::Option<std::string::String>,
    pub commit_id: std::option::Option<std::string::String>,
}
/// See [`GetCommitInput`](crate::input::GetCommitInput)
pub mod get_commit_input {
    /// A builder for [`GetCommitInput`](crate::input::GetCommitInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) commit_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCommitInput`](crate::input::GetCommitInput)
        pub fn build_input(self) -> crate::input::GetCommitInput {
            crate::input::GetCommitInput {
                repository_name: self.repository_name,
                commit_id: self.commit_id,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetCommit>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetCommitInput {
    /// Creates a new builder-style object to manufacture [`GetCommitInput`](crate::input::GetCommitInput)
    pub fn builder() -> crate::input::get_commit_input::Builder {
        crate::input::get_commit_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetCommit>, BuildError> {
        make_operation(
            config,
            "GetCommit",
            crate::json_ser::serialize_operation_get_commit(self)?,
            crate::operation::GetCommit::new(),
        )
    }
}

/// Input for [`GetPullRequest`](crate::operation::GetPullRequest).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetPullRequestInput {
    pub pull_request_id: std::option::Option<std::string::String>,
}
/// See [`GetPullRequestInput`](crate::input::GetPullRequestInput)
pub mod get_pull_request_input {
    /// A builder for [`GetPullRequestInput`](crate::input::GetPullRequestInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) pull_request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn pull_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.pull_request_id = Some(input.into());
            self
        }
        pub fn set_pull_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pull_request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetPullRequestInput`](crate::input::GetPullRequestInput)
        pub fn build_input(self) -> crate::input::GetPullRequestInput {
            crate::input::GetPullRequestInput {
                pull_request_id: self.pull_request_id,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetPullRequest>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetPullRequestInput {
    /// Creates a new builder-style object to manufacture [`GetPullRequestInput`](crate::input::GetPullRequestInput)
    pub fn builder() -> crate::input::get_pull_request_input::Builder {
        crate::input::get_pull_request_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetPullRequest>, BuildError> {
        make_operation(
            config,
            "GetPullRequest",
            crate::json_ser::serialize_operation_get_pull_request(self)?,
            crate::operation::GetPullRequest::new(),
        )
    }
}

/// Input for [`GetRepository`](crate::operation::GetRepository).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetRepositoryInput {
    /// The name of the repository to get information about.
    pub repository_name: std::option::Option<std::string::String>,
}
/// See [`GetRepositoryInput`](crate::input::GetRepositoryInput)
pub mod get_repository_input {
    /// A builder for [`GetRepositoryInput`](crate::input::GetRepositoryInput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The name of the repository to get information about.
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        /// Consumes the builder and constructs a [`GetRepositoryInput`](crate::input::GetRepositoryInput)
        pub fn build_input(self) -> crate::input::GetRepositoryInput {
            crate::input::GetRepositoryInput {
                repository_name: self.repository_name,
            }
        }
        /// Consumes the builder and constructs an operation ready to send
        pub fn build(
            self,
            config: &crate::config::Config,
        ) -> std::result::Result<
            smithy_http::operation::Operation<crate::operation::GetRepository>,
            smithy_http::operation::BuildError,
        > {
            self.build_input().make_operation(config)
        }
    }
}
impl GetRepositoryInput {
    /// Creates a new builder-style object to manufacture [`GetRepositoryInput`](crate::input::GetRepositoryInput)
    pub fn builder() -> crate::input::get_repository_input::Builder {
        crate::input::get_repository_input::Builder::default()
    }
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetRepository>, BuildError> {
        make_operation(
            config,
            "GetRepository",
            crate::json_ser::serialize_operation_get_repository(self)?,
            crate::operation::GetRepository::new(),
        )
    }
}
