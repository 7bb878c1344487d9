/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Fluent client: one method per operation, each returning a builder whose `send` dispatches
//! the request and blocks for the result.

use crate::config::Config;
use smithy_client::{Connector, DynConnector};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle<C> {
    client: smithy_client::Client<C>,
    conf: Config,
}

/// A client for AWS CodeCommit.
#[derive(Debug)]
pub struct Client<C = DynConnector> {
    handle: Arc<Handle<C>>,
}

impl<C> std::clone::Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }
}

impl<C> Client<C> {
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let client = smithy_client::Client::new(conn);
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }
}

#[cfg(feature = "ureq")]
impl Client<DynConnector> {
    /// A client that sends requests over the default blocking HTTP connector.
    pub fn from_conf(conf: Config) -> Self {
        let conn = match conf.timeout() {
            Some(timeout) => smithy_client::UreqConnector::with_timeout(timeout),
            None => smithy_client::UreqConnector::new(),
        };
        Self::from_conf_conn(conf, Box::new(conn) as DynConnector)
    }

    /// A client configured from the environment. See [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }
}

impl<C: Connector> Client<C> {
    pub fn batch_get_repositories(&self) -> fluent_builders::BatchGetRepositories<C> {
        fluent_builders::BatchGetRepositories::new(self.handle.clone())
    }
    pub fn create_branch(&self) -> fluent_builders::CreateBranch<C> {
        fluent_builders::CreateBranch::new(self.handle.clone())
    }
    pub fn create_commit(&self) -> fluent_builders::CreateCommit<C> {
        fluent_builders::CreateCommit::new(self.handle.clone())
    }
    pub fn delete_branch(&self) -> fluent_builders::DeleteBranch<C> {
        fluent_builders::DeleteBranch::new(self.handle.clone())
    }
    pub fn delete_file(&self) -> fluent_builders::DeleteFile<C> {
        fluent_builders::DeleteFile::new(self.handle.clone())
    }
    pub fn get_blob(&self) -> fluent_builders::GetBlob<C> {
        fluent_builders::GetBlob::new(self.handle.clone())
    }
    pub fn get_comment(&self) -> fluent_builders::GetComment<C> {
        fluent_builders::GetComment::new(self.handle.clone())
    }
    pub fn get_comment_reactions(&self) -> fluent_builders::GetCommentReactions<C> {
        fluent_builders::GetCommentReactions::new(self.handle.clone())
    }
    pub fn get_commit(&self) -> fluent_builders::GetCommit<C> {
        fluent_builders::GetCommit::new(self.handle.clone())
    }
    pub fn get_pull_request(&self) -> fluent_builders::GetPullRequest<C> {
        fluent_builders::GetPullRequest::new(self.handle.clone())
    }
    pub fn get_repository(&self) -> fluent_builders::GetRepository<C> {
        fluent_builders::GetRepository::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use super::Handle;
    use crate::error::CodeCommitError;
    use smithy_client::Connector;
    use smithy_http::result::SdkError;
    use std::sync::Arc;

    #[derive(std::fmt::Debug)]
    pub struct BatchGetRepositories<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::batch_get_repositories_input::Builder,
    }
    impl<C: Connector> BatchGetRepositories<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::BatchGetRepositoriesOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        /// The names of the repositories to get information about.
        pub fn repository_names(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.inner = self.inner.repository_names(input);
            self
        }
        pub fn set_repository_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_repository_names(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct CreateBranch<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_branch_input::Builder,
    }
    impl<C: Connector> CreateBranch<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::CreateBranchOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        /// The name of the new branch to create.
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_name(input);
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_name(input);
            self
        }
        /// The ID of the commit to point the new branch to.
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.commit_id(input);
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_commit_id(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct CreateCommit<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::create_commit_input::Builder,
    }
    impl<C: Connector> CreateCommit<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::CreateCommitOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        /// The name of the branch where you create the commit.
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_name(input);
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_name(input);
            self
        }
        /// The ID of the commit that is the parent of the commit you create.
        pub fn parent_commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.parent_commit_id(input);
            self
        }
        pub fn set_parent_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_parent_commit_id(input);
            self
        }
        pub fn author_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.author_name(input);
            self
        }
        pub fn set_author_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_author_name(input);
            self
        }
        pub fn email(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.email(input);
            self
        }
        pub fn set_email(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_email(input);
            self
        }
        pub fn commit_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.commit_message(input);
            self
        }
        pub fn set_commit_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_commit_message(input);
            self
        }
        /// Whether to keep folders that become empty as a result of the commit.
        pub fn keep_empty_folders(mut self, input: bool) -> Self {
            self.inner = self.inner.keep_empty_folders(input);
            self
        }
        pub fn set_keep_empty_folders(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_keep_empty_folders(input);
            self
        }
        /// The files to add or update in this commit.
        pub fn put_files(mut self, input: std::vec::Vec<crate::model::PutFileEntry>) -> Self {
            self.inner = self.inner.put_files(input);
            self
        }
        pub fn set_put_files(mut self, input: std::option::Option<std::vec::Vec<crate::model::PutFileEntry>>) -> Self {
            self.inner = self.inner.set_put_files(input);
            self
        }
        /// The files to delete in this commit.
        pub fn delete_files(mut self, input: std::vec::Vec<crate::model::DeleteFileEntry>) -> Self {
            self.inner = self.inner.delete_files(input);
            self
        }
        pub fn set_delete_files(mut self, input: std::option::Option<std::vec::Vec<crate::model::DeleteFileEntry>>) -> Self {
            self.inner = self.inner.set_delete_files(input);
            self
        }
        /// The file modes to update for files in this commit.
        pub fn set_file_modes(mut self, input: std::vec::Vec<crate::model::SetFileModeEntry>) -> Self {
            self.inner = self.inner.set_file_modes(input);
            self
        }
        pub fn set_set_file_modes(mut self, input: std::option::Option<std::vec::Vec<crate::model::SetFileModeEntry>>) -> Self {
            self.inner = self.inner.set_set_file_modes(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteBranch<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_branch_input::Builder,
    }
    impl<C: Connector> DeleteBranch<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::DeleteBranchOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_name(input);
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_name(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteFile<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::delete_file_input::Builder,
    }
    impl<C: Connector> DeleteFile<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::DeleteFileOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_name(input);
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_name(input);
            self
        }
        /// The fully qualified path to the file that to be deleted.
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.file_path(input);
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_file_path(input);
            self
        }
        pub fn parent_commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.parent_commit_id(input);
            self
        }
        pub fn set_parent_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_parent_commit_id(input);
            self
        }
        pub fn keep_empty_folders(mut self, input: bool) -> Self {
            self.inner = self.inner.keep_empty_folders(input);
            self
        }
        pub fn set_keep_empty_folders(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_keep_empty_folders(input);
            self
        }
        pub fn commit_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.commit_message(input);
            self
        }
        pub fn set_commit_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_commit_message(input);
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn email(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.email(input);
            self
        }
        pub fn set_email(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_email(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetBlob<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_blob_input::Builder,
    }
    impl<C: Connector> GetBlob<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetBlobOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        pub fn blob_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.blob_id(input);
            self
        }
        pub fn set_blob_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_blob_id(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetComment<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_comment_input::Builder,
    }
    impl<C: Connector> GetComment<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetCommentOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn comment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.comment_id(input);
            self
        }
        pub fn set_comment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_comment_id(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetCommentReactions<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_comment_reactions_input::Builder,
    }
    impl<C: Connector> GetCommentReactions<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetCommentReactionsOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn comment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.comment_id(input);
            self
        }
        pub fn set_comment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_comment_id(input);
            self
        }
        /// Only return reactions made by this user.
        pub fn reaction_user_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.reaction_user_arn(input);
            self
        }
        pub fn set_reaction_user_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_reaction_user_arn(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetCommit<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_commit_input::Builder,
    }
    impl<C: Connector> GetCommit<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetCommitOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.commit_id(input);
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_commit_id(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetPullRequest<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_pull_request_input::Builder,
    }
    impl<C: Connector> GetPullRequest<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetPullRequestOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        pub fn pull_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.pull_request_id(input);
            self
        }
        pub fn set_pull_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_pull_request_id(input);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetRepository<C> {
        handle: Arc<Handle<C>>,
        inner: crate::input::get_repository_input::Builder,
    }
    impl<C: Connector> GetRepository<C> {
        pub(crate) fn new(handle: Arc<Handle<C>>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn send(self) -> Result<crate::output::GetRepositoryOutput, SdkError<CodeCommitError>> {
            let op = self
                .inner
                .build(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op)
        }
        /// The name of the repository to get information about.
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.repository_name(input);
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_repository_name(input);
            self
        }
    }
}
