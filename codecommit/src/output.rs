/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Output of [`BatchGetRepositories`](crate::operation::BatchGetRepositories).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct BatchGetRepositoriesOutput {
    pub repositories: std::option::Option<std::vec::Vec<crate::model::RepositoryMetadata>>,
    /// Names of repositories that could not be found.
    pub repositories_not_found: std::option::Option<std::vec::Vec<std::string::String>>,
}
/// See [`BatchGetRepositoriesOutput`](crate::output::BatchGetRepositoriesOutput)
pub mod batch_get_repositories_output {
    /// A builder for [`BatchGetRepositoriesOutput`](crate::output::BatchGetRepositoriesOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repositories: std::option::Option<std::vec::Vec<crate::model::RepositoryMetadata>>,
        pub(crate) repositories_not_found: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn repositories(mut self, input: std::vec::Vec<crate::model::RepositoryMetadata>) -> Self {
            self.repositories = Some(input);
            self
        }
        pub fn set_repositories(mut self, input: std::option::Option<std::vec::Vec<crate::model::RepositoryMetadata>>) -> Self {
            self.repositories = input;
            self
        }
        /// Names of repositories that could not be found.
        pub fn repositories_not_found(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.repositories_not_found = Some(input);
            self
        }
        pub fn set_repositories_not_found(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.repositories_not_found = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetRepositoriesOutput`](crate::output::BatchGetRepositoriesOutput)
        pub fn build(self) -> crate::output::BatchGetRepositoriesOutput {
            crate::output::BatchGetRepositoriesOutput {
                repositories: self.repositories,
                repositories_not_found: self.repositories_not_found,
            }
        }
    }
}
impl BatchGetRepositoriesOutput {
    /// Creates a new builder-style object to manufacture [`BatchGetRepositoriesOutput`](crate::output::BatchGetRepositoriesOutput)
    pub fn builder() -> crate::output::batch_get_repositories_output::Builder {
        crate::output::batch_get_repositories_output::Builder::default()
    }
}

/// Output of [`CreateBranch`](crate::operation::CreateBranch).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateBranchOutput {
}
/// See [`CreateBranchOutput`](crate::output::CreateBranchOutput)
pub mod create_branch_output {
    /// A builder for [`CreateBranchOutput`](crate::output::CreateBranchOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`CreateBranchOutput`](crate::output::CreateBranchOutput)
        pub fn build(self) -> crate::output::CreateBranchOutput {
            crate::output::CreateBranchOutput {
            }
        }
    }
}
impl CreateBranchOutput {
    /// Creates a new builder-style object to manufacture [`CreateBranchOutput`](crate::output::CreateBranchOutput)
    pub fn builder() -> crate::output::create_branch_output::Builder {
        crate::output::create_branch_output::Builder::default()
    }
}

/// Output of [`CreateCommit`](crate::operation::CreateCommit).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct CreateCommitOutput {
    pub commit_id: std::option::Option<std::string::String>,
    pub tree_id: std::option::Option<std::string::String>,
    pub files_added: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
    pub files_updated: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
    pub files_deleted: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
}
/// See [`CreateCommitOutput`](crate::output::CreateCommitOutput)
pub mod create_commit_output {
    /// A builder for [`CreateCommitOutput`](crate::output::CreateCommitOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) commit_id: std::option::Option<std::string::String>,
        pub(crate) tree_id: std::option::Option<std::string::String>,
        pub(crate) files_added: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
        pub(crate) files_updated: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
        pub(crate) files_deleted: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>,
    }
    impl Builder {
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
            self
        }
        pub fn tree_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.tree_id = Some(input.into());
            self
        }
        pub fn set_tree_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tree_id = input;
            self
        }
        pub fn files_added(mut self, input: std::vec::Vec<crate::model::FileMetadata>) -> Self {
            self.files_added = Some(input);
            self
        }
        pub fn set_files_added(mut self, input: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>) -> Self {
            self.files_added = input;
            self
        }
        pub fn files_updated(mut self, input: std::vec::Vec<crate::model::FileMetadata>) -> Self {
            self.files_updated = Some(input);
            self
        }
        pub fn set_files_updated(mut self, input: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>) -> Self {
            self.files_updated = input;
            self
        }
        pub fn files_deleted(mut self, input: std::vec::Vec<crate::model::FileMetadata>) -> Self {
            self.files_deleted = Some(input);
            self
        }
        pub fn set_files_deleted(mut self, input: std::option::Option<std::vec::Vec<crate::model::FileMetadata>>) -> Self {
            self.files_deleted = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCommitOutput`](crate::output::CreateCommitOutput)
        pub fn build(self) -> crate::output::CreateCommitOutput {
            crate::output::CreateCommitOutput {
                commit_id: self.commit_id,
                tree_id: self.tree_id,
                files_added: self.files_added,
                files_updated: self.files_updated,
                files_deleted: self.files_deleted,
            }
        }
    }
}
impl CreateCommitOutput {
    /// Creates a new builder-style object to manufacture [`CreateCommitOutput`](crate::output::CreateCommitOutput)
    pub fn builder() -> crate::output::create_commit_output::Builder {
        crate::output::create_commit_output::Builder::default()
    }
}

/// Output of [`DeleteBranch`](crate::operation::DeleteBranch).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteBranchOutput {
    /// Information about the branch deleted by the operation.
    pub deleted_branch: std::option::Option<crate::model::BranchInfo>,
}
/// See [`DeleteBranchOutput`](crate::output::DeleteBranchOutput)
pub mod delete_branch_output {
    /// A builder for [`DeleteBranchOutput`](crate::output::DeleteBranchOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) deleted_branch: std::option::Option<crate::model::BranchInfo>,
    }
    impl Builder {
        /// Information about the branch deleted by the operation.
        pub fn deleted_branch(mut self, input: crate::model::BranchInfo) -> Self {
            self.deleted_branch = Some(input);
            self
        }
        pub fn set_deleted_branch(mut self, input: std::option::Option<crate::model::BranchInfo>) -> Self {
            self.deleted_branch = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteBranchOutput`](crate::output::DeleteBranchOutput)
        pub fn build(self) -> crate::output::DeleteBranchOutput {
            crate::output::DeleteBranchOutput {
                deleted_branch: self.deleted_branch,
            }
        }
    }
}
impl DeleteBranchOutput {
    /// Creates a new builder-style object to manufacture [`DeleteBranchOutput`](crate::output::DeleteBranchOutput)
    pub fn builder() -> crate::output::delete_branch_output::Builder {
        crate::output::delete_branch_output::Builder::default()
    }
}

/// Output of [`DeleteFile`](crate::operation::DeleteFile).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteFileOutput {
    pub commit_id: std::option::Option<std::string::String>,
    pub blob_id: std::option::Option<std::string::String>,
    pub tree_id: std::option::Option<std::string::String>,
    pub file_path: std::option::Option<std::string::String>,
}
/// See [`DeleteFileOutput`](crate::output::DeleteFileOutput)
pub mod delete_file_output {
    /// A builder for [`DeleteFileOutput`](crate::output::DeleteFileOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) commit_id: std::option::Option<std::string::String>,
        pub(crate) blob_id: std::option::Option<std::string::String>,
        pub(crate) tree_id: std::option::Option<std::string::String>,
        pub(crate) file_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
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
        pub fn tree_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.tree_id = Some(input.into());
            self
        }
        pub fn set_tree_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tree_id = input;
            self
        }
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteFileOutput`](crate::output::DeleteFileOutput)
        pub fn build(self) -> crate::output::DeleteFileOutput {
            crate::output::DeleteFileOutput {
                commit_id: self.commit_id,
                blob_id: self.blob_id,
                tree_id: self.tree_id,
                file_path: self.file_path,
            }
        }
    }
}
impl DeleteFileOutput {
    /// Creates a new builder-style object to manufacture [`DeleteFileOutput`](crate::output::DeleteFileOutput)
    pub fn builder() -> crate::output::delete_file_output::Builder {
        crate::output::delete_file_output::Builder::default()
    }
}

/// Output of [`GetBlob`](crate::operation::GetBlob).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetBlobOutput {
    /// The content of the blob.
    pub content: std::option::Option<smithy_types::Blob>,
}
/// See [`GetBlobOutput`](crate::output::GetBlobOutput)
pub mod get_blob_output {
    /// A builder for [`GetBlobOutput`](crate::output::GetBlobOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) content: std::option::Option<smithy_types::Blob>,
    }
    impl Builder {
        /// The content of the blob.
        pub fn content(mut self, input: smithy_types::Blob) -> Self {
            self.content = Some(input);
            self
        }
        pub fn set_content(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.content = input;
            self
        }
        /// Consumes the builder and constructs a [`GetBlobOutput`](crate::output::GetBlobOutput)
        pub fn build(self) -> crate::output::GetBlobOutput {
            crate::output::GetBlobOutput {
                content: self.content,
            }
        }
    }
}
impl GetBlobOutput {
    /// Creates a new builder-style object to manufacture [`GetBlobOutput`](crate::output::GetBlobOutput)
    pub fn builder() -> crate::output::get_blob_output::Builder {
        crate::output::get_blob_output::Builder::default()
    }
}

/// Output of [`GetComment`](crate::operation::GetComment).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommentOutput {
    pub comment: std::option::Option<crate::model::Comment>,
}
/// See [`GetCommentOutput`](crate::output::GetCommentOutput)
pub mod get_comment_output {
    /// A builder for [`GetCommentOutput`](crate::output::GetCommentOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comment: std::option::Option<crate::model::Comment>,
    }
    impl Builder {
        pub fn comment(mut self, input: crate::model::Comment) -> Self {
            self.comment = Some(input);
            self
        }
        pub fn set_comment(mut self, input: std::option::Option<crate::model::Comment>) -> Self {
            self.comment = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCommentOutput`](crate::output::GetCommentOutput)
        pub fn build(self) -> crate::output::GetCommentOutput {
            crate::output::GetCommentOutput {
                comment: self.comment,
            }
        }
    }
}
impl GetCommentOutput {
    /// Creates a new builder-style object to manufacture [`GetCommentOutput`](crate::output::GetCommentOutput)
    pub fn builder() -> crate::output::get_comment_output::Builder {
        crate::output::get_comment_output::Builder::default()
    }
}

/// Output of [`GetCommentReactions`](crate::operation::GetCommentReactions).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommentReactionsOutput {
    pub reactions_for_comment: std::option::Option<std::vec::Vec<crate::model::ReactionForComment>>,
    pub next_token: std::option::Option<std::string::String>,
}
/// See [`GetCommentReactionsOutput`](crate::output::GetCommentReactionsOutput)
pub mod get_comment_reactions_output {
    /// A builder for [`GetCommentReactionsOutput`](crate::output::GetCommentReactionsOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) reactions_for_comment: std::option::Option<std::vec::Vec<crate::model::ReactionForComment>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn reactions_for_comment(mut self, input: std::vec::Vec<crate::model::ReactionForComment>) -> Self {
            self.reactions_for_comment = Some(input);
            self
        }
        pub fn set_reactions_for_comment(mut self, input: std::option::Option<std::vec::Vec<crate::model::ReactionForComment>>) -> Self {
            self.reactions_for_comment = input;
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
        /// Consumes the builder and constructs a [`GetCommentReactionsOutput`](crate::output::GetCommentReactionsOutput)
        pub fn build(self) -> crate::output::GetCommentReactionsOutput {
            crate::output::GetCommentReactionsOutput {
                reactions_for_comment: self.reactions_for_comment,
                next_token: self.next_token,
            }
        }
    }
}
impl GetCommentReactionsOutput {
    /// Creates a new builder-style object to manufacture [`GetCommentReactionsOutput`](crate::output::GetCommentReactionsOutput)
    pub fn builder() -> crate::output::get_comment_reactions_output::Builder {
        crate::output::get_comment_reactions_output::Builder::default()
    }
}

/// Output of [`GetCommit`](crate::operation::GetCommit).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetCommitOutput {
    pub commit: std::option::Option<crate::model::Commit>,
}
/// See [`GetCommitOutput`](crate::output::GetCommitOutput)
pub mod get_commit_output {
    /// A builder for [`GetCommitOutput`](crate::output::GetCommitOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) commit: std::option::Option<crate::model::Commit>,
    }
    impl Builder {
        pub fn commit(mut self, input: crate::model::Commit) -> Self {
            self.commit = Some(input);
            self
        }
        pub fn set_commit(mut self, input: std::option::Option<crate::model::Commit>) -> Self {
            self.commit = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCommitOutput`](crate::output::GetCommitOutput)
        pub fn build(self) -> crate::output::GetCommitOutput {
            crate::output::GetCommitOutput {
                commit: self.commit,
            }
        }
    }
}
impl GetCommitOutput {
    /// Creates a new builder-style object to manufacture [`GetCommitOutput`](crate::output::GetCommitOutput)
    pub fn builder() -> crate::output::get_commit_output::Builder {
        crate::output::get_commit_output::Builder::default()
    }
}

/// Output of [`GetPullRequest`](crate::operation::GetPullRequest).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetPullRequestOutput {
    pub pull_request: std::option::Option<crate::model::PullRequest>,
}
/// See [`GetPullRequestOutput`](crate::output::GetPullRequestOutput)
pub mod get_pull_request_output {
    /// A builder for [`GetPullRequestOutput`](crate::output::GetPullRequestOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) pull_request: std::option::Option<crate::model::PullRequest>,
    }
    impl Builder {
        pub fn pull_request(mut self, input: crate::model::PullRequest) -> Self {
            self.pull_request = Some(input);
            self
        }
        pub fn set_pull_request(mut self, input: std::option::Option<crate::model::PullRequest>) -> Self {
            self.pull_request = input;
            self
        }
        /// Consumes the builder and constructs a [`GetPullRequestOutput`](crate::output::GetPullRequestOutput)
        pub fn build(self) -> crate::output::GetPullRequestOutput {
            crate::output::GetPullRequestOutput {
                pull_request: self.pull_request,
            }
        }
    }
}
impl GetPullRequestOutput {
    /// Creates a new builder-style object to manufacture [`GetPullRequestOutput`](crate::output::GetPullRequestOutput)
    pub fn builder() -> crate::output::get_pull_request_output::Builder {
        crate::output::get_pull_request_output::Builder::default()
    }
}

/// Output of [`GetRepository`](crate::operation::GetRepository).
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct GetRepositoryOutput {
    pub repository_metadata: std::option::Option<crate::model::RepositoryMetadata>,
}
/// See [`GetRepositoryOutput`](crate::output::GetRepositoryOutput)
pub mod get_repository_output {
    /// A builder for [`GetRepositoryOutput`](crate::output::GetRepositoryOutput)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_metadata: std::option::Option<crate::model::RepositoryMetadata>,
    }
    impl Builder {
        pub fn repository_metadata(mut self, input: crate::model::RepositoryMetadata) -> Self {
            self.repository_metadata = Some(input);
            self
        }
        pub fn set_repository_metadata(mut self, input: std::option::Option<crate::model::RepositoryMetadata>) -> Self {
            self.repository_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`GetRepositoryOutput`](crate::output::GetRepositoryOutput)
        pub fn build(self) -> crate::output::GetRepositoryOutput {
            crate::output::GetRepositoryOutput {
                repository_metadata: self.repository_metadata,
            }
        }
    }
}
impl GetRepositoryOutput {
    /// Creates a new builder-style object to manufacture [`GetRepositoryOutput`](crate::output::GetRepositoryOutput)
    pub fn builder() -> crate::output::get_repository_output::Builder {
        crate::output::get_repository_output::Builder::default()
    }
}
