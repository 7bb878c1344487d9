/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data structures shared by the operation inputs and outputs.

/// The mode of a file in a repository.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum FileModeTypeEnum {
    Executable,
    Normal,
    Symlink,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for FileModeTypeEnum {
    fn from(s: &str) -> Self {
        match s {
            "EXECUTABLE" => FileModeTypeEnum::Executable,
            "NORMAL" => FileModeTypeEnum::Normal,
            "SYMLINK" => FileModeTypeEnum::Symlink,
            other => FileModeTypeEnum::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FileModeTypeEnum {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FileModeTypeEnum::from(s))
    }
}
impl FileModeTypeEnum {
    pub fn as_str(&self) -> &str {
        match self {
            FileModeTypeEnum::Executable => "EXECUTABLE",
            FileModeTypeEnum::Normal => "NORMAL",
            FileModeTypeEnum::Symlink => "SYMLINK",
            FileModeTypeEnum::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["EXECUTABLE", "NORMAL", "SYMLINK"]
    }
}
impl std::convert::AsRef<str> for FileModeTypeEnum {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum MergeOptionTypeEnum {
    FastForwardMerge,
    SquashMerge,
    ThreeWayMerge,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for MergeOptionTypeEnum {
    fn from(s: &str) -> Self {
        match s {
            "FAST_FORWARD_MERGE" => MergeOptionTypeEnum::FastForwardMerge,
            "SQUASH_MERGE" => MergeOptionTypeEnum::SquashMerge,
            "THREE_WAY_MERGE" => MergeOptionTypeEnum::ThreeWayMerge,
            other => MergeOptionTypeEnum::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MergeOptionTypeEnum {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MergeOptionTypeEnum::from(s))
    }
}
impl MergeOptionTypeEnum {
    pub fn as_str(&self) -> &str {
        match self {
            MergeOptionTypeEnum::FastForwardMerge => "FAST_FORWARD_MERGE",
            MergeOptionTypeEnum::SquashMerge => "SQUASH_MERGE",
            MergeOptionTypeEnum::ThreeWayMerge => "THREE_WAY_MERGE",
            MergeOptionTypeEnum::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["FAST_FORWARD_MERGE", "SQUASH_MERGE", "THREE_WAY_MERGE"]
    }
}
impl std::convert::AsRef<str> for MergeOptionTypeEnum {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Whether a pull request is open or closed.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
pub enum PullRequestStatusEnum {
    Closed,
    Open,
    /// A value the service returned that this client does not know about.
    Unknown(std::string::String),
}
impl std::convert::From<&str> for PullRequestStatusEnum {
    fn from(s: &str) -> Self {
        match s {
            "CLOSED" => PullRequestStatusEnum::Closed,
            "OPEN" => PullRequestStatusEnum::Open,
            other => PullRequestStatusEnum::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PullRequestStatusEnum {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PullRequestStatusEnum::from(s))
    }
}
impl PullRequestStatusEnum {
    pub fn as_str(&self) -> &str {
        match self {
            PullRequestStatusEnum::Closed => "CLOSED",
            PullRequestStatusEnum::Open => "OPEN",
            PullRequestStatusEnum::Unknown(s) => s.as_str(),
        }
    }
    /// The values this client knows about.
    pub fn values() -> &'static [&'static str] {
        &["CLOSED", "OPEN"]
    }
}
impl std::convert::AsRef<str> for PullRequestStatusEnum {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// An approval rule attached to a pull request.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ApprovalRule {
    /// The system-generated ID of the approval rule.
    pub approval_rule_id: std::option::Option<std::string::String>,
    /// The name of the approval rule.
    pub approval_rule_name: std::option::Option<std::string::String>,
    /// The content of the approval rule.
    pub approval_rule_content: std::option::Option<std::string::String>,
    /// The SHA-256 hash signature for the content of the approval rule.
    pub rule_content_sha256: std::option::Option<std::string::String>,
    pub last_modified_date: std::option::Option<smithy_types::Instant>,
    pub creation_date: std::option::Option<smithy_types::Instant>,
    /// The Amazon Resource Name (ARN) of the user who made the most recent changes to the approval rule.
    pub last_modified_user: std::option::Option<std::string::String>,
    /// The template the rule was created from, if any.
    pub origin_approval_rule_template: std::option::Option<crate::model::OriginApprovalRuleTemplate>,
}
/// See [`ApprovalRule`](crate::model::ApprovalRule)
pub mod approval_rule {
    /// A builder for [`ApprovalRule`](crate::model::ApprovalRule)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) approval_rule_id: std::option::Option<std::string::String>,
        pub(crate) approval_rule_name: std::option::Option<std::string::String>,
        pub(crate) approval_rule_content: std::option::Option<std::string::String>,
        pub(crate) rule_content_sha256: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<smithy_types::Instant>,
        pub(crate) creation_date: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified_user: std::option::Option<std::string::String>,
        pub(crate) origin_approval_rule_template: std::option::Option<crate::model::OriginApprovalRuleTemplate>,
    }
    impl Builder {
        /// The system-generated ID of the approval rule.
        pub fn approval_rule_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.approval_rule_id = Some(input.into());
            self
        }
        pub fn set_approval_rule_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.approval_rule_id = input;
            self
        }
        /// The name of the approval rule.
        pub fn approval_rule_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.approval_rule_name = Some(input.into());
            self
        }
        pub fn set_approval_rule_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.approval_rule_name = input;
            self
        }
        /// The content of the approval rule.
        pub fn approval_rule_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.approval_rule_content = Some(input.into());
            self
        }
        pub fn set_approval_rule_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.approval_rule_content = input;
            self
        }
        /// The SHA-256 hash signature for the content of the approval rule.
        pub fn rule_content_sha256(mut self, input: impl Into<std::string::String>) -> Self {
            self.rule_content_sha256 = Some(input.into());
            self
        }
        pub fn set_rule_content_sha256(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.rule_content_sha256 = input;
            self
        }
        pub fn last_modified_date(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_date = Some(input);
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the user who made the most recent changes to the approval rule.
        pub fn last_modified_user(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_user = Some(input.into());
            self
        }
        pub fn set_last_modified_user(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_user = input;
            self
        }
        /// The template the rule was created from, if any.
        pub fn origin_approval_rule_template(mut self, input: crate::model::OriginApprovalRuleTemplate) -> Self {
            self.origin_approval_rule_template = Some(input);
            self
        }
        pub fn set_origin_approval_rule_template(mut self, input: std::option::Option<crate::model::OriginApprovalRuleTemplate>) -> Self {
            self.origin_approval_rule_template = input;
            self
        }
        /// Consumes the builder and constructs a [`ApprovalRule`](crate::model::ApprovalRule)
        pub fn build(self) -> crate::model::ApprovalRule {
            crate::model::ApprovalRule {
                approval_rule_id: self.approval_rule_id,
                approval_rule_name: self.approval_rule_name,
                approval_rule_content: self.approval_rule_content,
                rule_content_sha256: self.rule_content_sha256,
                last_modified_date: self.last_modified_date,
                creation_date: self.creation_date,
                last_modified_user: self.last_modified_user,
                origin_approval_rule_template: self.origin_approval_rule_template,
            }
        }
    }
}
impl ApprovalRule {
    /// Creates a new builder-style object to manufacture [`ApprovalRule`](crate::model::ApprovalRule)
    pub fn builder() -> crate::model::approval_rule::Builder {
        crate::model::approval_rule::Builder::default()
    }
}

/// Returns information about a branch.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct BranchInfo {
    /// The name of the branch.
    pub branch_name: std::option::Option<std::string::String>,
    /// The ID of the last commit made to the branch.
    pub commit_id: std::option::Option<std::string::String>,
}
/// See [`BranchInfo`](crate::model::BranchInfo)
pub mod branch_info {
    /// A builder for [`BranchInfo`](crate::model::BranchInfo)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) branch_name: std::option::Option<std::string::String>,
        pub(crate) commit_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The name of the branch.
        pub fn branch_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_name = Some(input.into());
            self
        }
        pub fn set_branch_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_name = input;
            self
        }
        /// The ID of the last commit made to the branch.
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
            self
        }
        /// Consumes the builder and constructs a [`BranchInfo`](crate::model::BranchInfo)
        pub fn build(self) -> crate::model::BranchInfo {
            crate::model::BranchInfo {
                branch_name: self.branch_name,
                commit_id: self.commit_id,
            }
        }
    }
}
impl BranchInfo {
    /// Creates a new builder-style object to manufacture [`BranchInfo`](crate::model::BranchInfo)
    pub fn builder() -> crate::model::branch_info::Builder {
        crate::model::branch_info::Builder::default()
    }
}

/// A comment made on a pull request, commit or file.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Comment {
    /// The system-generated comment ID.
    pub comment_id: std::option::Option<std::string::String>,
    /// The content of the comment.
    pub content: std::option::Option<std::string::String>,
    /// The ID of the comment for which this comment is a reply, if any.
    pub in_reply_to: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<smithy_types::Instant>,
    pub last_modified_date: std::option::Option<smithy_types::Instant>,
    pub author_arn: std::option::Option<std::string::String>,
    /// Whether the comment has been deleted.
    pub deleted: std::option::Option<bool>,
    pub client_request_token: std::option::Option<std::string::String>,
    /// The emoji reactions the caller made to this comment.
    pub caller_reactions: std::option::Option<std::vec::Vec<std::string::String>>,
    /// How many times each reaction was made, keyed by reaction value.
    pub reaction_counts: std::option::Option<std::collections::BTreeMap<std::string::String, i32>>,
}
/// See [`Comment`](crate::model::Comment)
pub mod comment {
    /// A builder for [`Comment`](crate::model::Comment)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comment_id: std::option::Option<std::string::String>,
        pub(crate) content: std::option::Option<std::string::String>,
        pub(crate) in_reply_to: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified_date: std::option::Option<smithy_types::Instant>,
        pub(crate) author_arn: std::option::Option<std::string::String>,
        pub(crate) deleted: std::option::Option<bool>,
        pub(crate) client_request_token: std::option::Option<std::string::String>,
        pub(crate) caller_reactions: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) reaction_counts: std::option::Option<std::collections::BTreeMap<std::string::String, i32>>,
    }
    impl Builder {
        /// The system-generated comment ID.
        pub fn comment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.comment_id = Some(input.into());
            self
        }
        pub fn set_comment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.comment_id = input;
            self
        }
        /// The content of the comment.
        pub fn content(mut self, input: impl Into<std::string::String>) -> Self {
            self.content = Some(input.into());
            self
        }
        pub fn set_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.content = input;
            self
        }
        /// The ID of the comment for which this comment is a reply, if any.
        pub fn in_reply_to(mut self, input: impl Into<std::string::String>) -> Self {
            self.in_reply_to = Some(input.into());
            self
        }
        pub fn set_in_reply_to(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.in_reply_to = input;
            self
        }
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn last_modified_date(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_date = Some(input);
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn author_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.author_arn = Some(input.into());
            self
        }
        pub fn set_author_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.author_arn = input;
            self
        }
        /// Whether the comment has been deleted.
        pub fn deleted(mut self, input: bool) -> Self {
            self.deleted = Some(input);
            self
        }
        pub fn set_deleted(mut self, input: std::option::Option<bool>) -> Self {
            self.deleted = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// The emoji reactions the caller made to this comment.
        pub fn caller_reactions(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.caller_reactions = Some(input);
            self
        }
        pub fn set_caller_reactions(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.caller_reactions = input;
            self
        }
        /// How many times each reaction was made, keyed by reaction value.
        pub fn reaction_counts(mut self, input: std::collections::BTreeMap<std::string::String, i32>) -> Self {
            self.reaction_counts = Some(input);
            self
        }
        pub fn set_reaction_counts(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, i32>>) -> Self {
            self.reaction_counts = input;
            self
        }
        /// Consumes the builder and constructs a [`Comment`](crate::model::Comment)
        pub fn build(self) -> crate::model::Comment {
            crate::model::Comment {
                comment_id: self.comment_id,
                content: self.content,
                in_reply_to: self.in_reply_to,
                creation_date: self.creation_date,
                last_modified_date: self.last_modified_date,
                author_arn: self.author_arn,
                deleted: self.deleted,
                client_request_token: self.client_request_token,
                caller_reactions: self.caller_reactions,
                reaction_counts: self.reaction_counts,
            }
        }
    }
}
impl Comment {
    /// Creates a new builder-style object to manufacture [`Comment`](crate::model::Comment)
    pub fn builder() -> crate::model::comment::Builder {
        crate::model::comment::Builder::default()
    }
}

/// Information about a specific commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct Commit {
    /// The full SHA ID of the specified commit.
    pub commit_id: std::option::Option<std::string::String>,
    /// Tree information for the specified commit.
    pub tree_id: std::option::Option<std::string::String>,
    /// The parent list for the specified commit.
    pub parents: std::option::Option<std::vec::Vec<std::string::String>>,
    /// The commit message associated with the specified commit.
    pub message: std::option::Option<std::string::String>,
    /// Information about the author of the specified commit.
    pub author: std::option::Option<crate::model::UserInfo>,
    /// Information about the person who committed the specified commit.
    pub committer: std::option::Option<crate::model::UserInfo>,
    /// Any other data associated with the specified commit.
    pub additional_data: std::option::Option<std::string::String>,
}
/// See [`Commit`](crate::model::Commit)
pub mod commit {
    /// A builder for [`Commit`](crate::model::Commit)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) commit_id: std::option::Option<std::string::String>,
        pub(crate) tree_id: std::option::Option<std::string::String>,
        pub(crate) parents: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) author: std::option::Option<crate::model::UserInfo>,
        pub(crate) committer: std::option::Option<crate::model::UserInfo>,
        pub(crate) additional_data: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The full SHA ID of the specified commit.
        pub fn commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.commit_id = Some(input.into());
            self
        }
        pub fn set_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.commit_id = input;
            self
        }
        /// Tree information for the specified commit.
        pub fn tree_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.tree_id = Some(input.into());
            self
        }
        pub fn set_tree_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tree_id = input;
            self
        }
        /// The parent list for the specified commit.
        pub fn parents(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.parents = Some(input);
            self
        }
        pub fn set_parents(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.parents = input;
            self
        }
        /// The commit message associated with the specified commit.
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Information about the author of the specified commit.
        pub fn author(mut self, input: crate::model::UserInfo) -> Self {
            self.author = Some(input);
            self
        }
        pub fn set_author(mut self, input: std::option::Option<crate::model::UserInfo>) -> Self {
            self.author = input;
            self
        }
        /// Information about the person who committed the specified commit.
        pub fn committer(mut self, input: crate::model::UserInfo) -> Self {
            self.committer = Some(input);
            self
        }
        pub fn set_committer(mut self, input: std::option::Option<crate::model::UserInfo>) -> Self {
            self.committer = input;
            self
        }
        /// Any other data associated with the specified commit.
        pub fn additional_data(mut self, input: impl Into<std::string::String>) -> Self {
            self.additional_data = Some(input.into());
            self
        }
        pub fn set_additional_data(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.additional_data = input;
            self
        }
        /// Consumes the builder and constructs a [`Commit`](crate::model::Commit)
        pub fn build(self) -> crate::model::Commit {
            crate::model::Commit {
                commit_id: self.commit_id,
                tree_id: self.tree_id,
                parents: self.parents,
                message: self.message,
                author: self.author,
                committer: self.committer,
                additional_data: self.additional_data,
            }
        }
    }
}
impl Commit {
    /// Creates a new builder-style object to manufacture [`Commit`](crate::model::Commit)
    pub fn builder() -> crate::model::commit::Builder {
        crate::model::commit::Builder::default()
    }
}

/// A file that is deleted as part of a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct DeleteFileEntry {
    /// The full path of the file to be deleted, including the name of the file.
    pub file_path: std::option::Option<std::string::String>,
}
/// See [`DeleteFileEntry`](crate::model::DeleteFileEntry)
pub mod delete_file_entry {
    /// A builder for [`DeleteFileEntry`](crate::model::DeleteFileEntry)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) file_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The full path of the file to be deleted, including the name of the file.
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteFileEntry`](crate::model::DeleteFileEntry)
        pub fn build(self) -> crate::model::DeleteFileEntry {
            crate::model::DeleteFileEntry {
                file_path: self.file_path,
            }
        }
    }
}
impl DeleteFileEntry {
    /// Creates a new builder-style object to manufacture [`DeleteFileEntry`](crate::model::DeleteFileEntry)
    pub fn builder() -> crate::model::delete_file_entry::Builder {
        crate::model::delete_file_entry::Builder::default()
    }
}

/// A file added, updated or deleted by a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct FileMetadata {
    /// The full path to the file, including the name of the file.
    pub absolute_path: std::option::Option<std::string::String>,
    /// The blob ID that contains the file information.
    pub blob_id: std::option::Option<std::string::String>,
    pub file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
}
/// See [`FileMetadata`](crate::model::FileMetadata)
pub mod file_metadata {
    /// A builder for [`FileMetadata`](crate::model::FileMetadata)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) absolute_path: std::option::Option<std::string::String>,
        pub(crate) blob_id: std::option::Option<std::string::String>,
        pub(crate) file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
    }
    impl Builder {
        /// The full path to the file, including the name of the file.
        pub fn absolute_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.absolute_path = Some(input.into());
            self
        }
        pub fn set_absolute_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.absolute_path = input;
            self
        }
        /// The blob ID that contains the file information.
        pub fn blob_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.blob_id = Some(input.into());
            self
        }
        pub fn set_blob_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.blob_id = input;
            self
        }
        pub fn file_mode(mut self, input: crate::model::FileModeTypeEnum) -> Self {
            self.file_mode = Some(input);
            self
        }
        pub fn set_file_mode(mut self, input: std::option::Option<crate::model::FileModeTypeEnum>) -> Self {
            self.file_mode = input;
            self
        }
        /// Consumes the builder and constructs a [`FileMetadata`](crate::model::FileMetadata)
        pub fn build(self) -> crate::model::FileMetadata {
            crate::model::FileMetadata {
                absolute_path: self.absolute_path,
                blob_id: self.blob_id,
                file_mode: self.file_mode,
            }
        }
    }
}
impl FileMetadata {
    /// Creates a new builder-style object to manufacture [`FileMetadata`](crate::model::FileMetadata)
    pub fn builder() -> crate::model::file_metadata::Builder {
        crate::model::file_metadata::Builder::default()
    }
}

/// Information about the merge of a pull request.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct MergeMetadata {
    /// Whether the merge has been made.
    pub is_merged: std::option::Option<bool>,
    /// The Amazon Resource Name (ARN) of the user who merged the branches.
    pub merged_by: std::option::Option<std::string::String>,
    pub merge_commit_id: std::option::Option<std::string::String>,
    /// The merge strategy used in the merge.
    pub merge_option: std::option::Option<crate::model::MergeOptionTypeEnum>,
}
/// See [`MergeMetadata`](crate::model::MergeMetadata)
pub mod merge_metadata {
    /// A builder for [`MergeMetadata`](crate::model::MergeMetadata)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) is_merged: std::option::Option<bool>,
        pub(crate) merged_by: std::option::Option<std::string::String>,
        pub(crate) merge_commit_id: std::option::Option<std::string::String>,
        pub(crate) merge_option: std::option::Option<crate::model::MergeOptionTypeEnum>,
    }
    impl Builder {
        /// Whether the merge has been made.
        pub fn is_merged(mut self, input: bool) -> Self {
            self.is_merged = Some(input);
            self
        }
        pub fn set_is_merged(mut self, input: std::option::Option<bool>) -> Self {
            self.is_merged = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the user who merged the branches.
        pub fn merged_by(mut self, input: impl Into<std::string::String>) -> Self {
            self.merged_by = Some(input.into());
            self
        }
        pub fn set_merged_by(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.merged_by = input;
            self
        }
        pub fn merge_commit_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.merge_commit_id = Some(input.into());
            self
        }
        pub fn set_merge_commit_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.merge_commit_id = input;
            self
        }
        /// The merge strategy used in the merge.
        pub fn merge_option(mut self, input: crate::model::MergeOptionTypeEnum) -> Self {
            self.merge_option = Some(input);
            self
        }
        pub fn set_merge_option(mut self, input: std::option::Option<crate::model::MergeOptionTypeEnum>) -> Self {
            self.merge_option = input;
            self
        }
        /// Consumes the builder and constructs a [`MergeMetadata`](crate::model::MergeMetadata)
        pub fn build(self) -> crate::model::MergeMetadata {
            crate::model::MergeMetadata {
                is_merged: self.is_merged,
                merged_by: self.merged_by,
                merge_commit_id: self.merge_commit_id,
                merge_option: self.merge_option,
            }
        }
    }
}
impl MergeMetadata {
    /// Creates a new builder-style object to manufacture [`MergeMetadata`](crate::model::MergeMetadata)
    pub fn builder() -> crate::model::merge_metadata::Builder {
        crate::model::merge_metadata::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct OriginApprovalRuleTemplate {
    pub approval_rule_template_id: std::option::Option<std::string::String>,
    pub approval_rule_template_name: std::option::Option<std::string::String>,
}
/// See [`OriginApprovalRuleTemplate`](crate::model::OriginApprovalRuleTemplate)
pub mod origin_approval_rule_template {
    /// A builder for [`OriginApprovalRuleTemplate`](crate::model::OriginApprovalRuleTemplate)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) approval_rule_template_id: std::option::Option<std::string::String>,
        pub(crate) approval_rule_template_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn approval_rule_template_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.approval_rule_template_id = Some(input.into());
            self
        }
        pub fn set_approval_rule_template_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.approval_rule_template_id = input;
            self
        }
        pub fn approval_rule_template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.approval_rule_template_name = Some(input.into());
            self
        }
        pub fn set_approval_rule_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.approval_rule_template_name = input;
            self
        }
        /// Consumes the builder and constructs a [`OriginApprovalRuleTemplate`](crate::model::OriginApprovalRuleTemplate)
        pub fn build(self) -> crate::model::OriginApprovalRuleTemplate {
            crate::model::OriginApprovalRuleTemplate {
                approval_rule_template_id: self.approval_rule_template_id,
                approval_rule_template_name: self.approval_rule_template_name,
            }
        }
    }
}
impl OriginApprovalRuleTemplate {
    /// Creates a new builder-style object to manufacture [`OriginApprovalRuleTemplate`](crate::model::OriginApprovalRuleTemplate)
    pub fn builder() -> crate::model::origin_approval_rule_template::Builder {
        crate::model::origin_approval_rule_template::Builder::default()
    }
}

/// Information about a pull request.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct PullRequest {
    /// The system-generated ID of the pull request.
    pub pull_request_id: std::option::Option<std::string::String>,
    /// The user-defined title of the pull request.
    pub title: std::option::Option<std::string::String>,
    /// The user-defined description of the pull request.
    pub description: std::option::Option<std::string::String>,
    /// The day and time of the last user or system activity on the pull request.
    pub last_activity_date: std::option::Option<smithy_types::Instant>,
    /// The date and time the pull request was originally created.
    pub creation_date: std::option::Option<smithy_types::Instant>,
    pub pull_request_status: std::option::Option<crate::model::PullRequestStatusEnum>,
    pub author_arn: std::option::Option<std::string::String>,
    /// The targets of the pull request, including the source branch and destination branch.
    pub pull_request_targets: std::option::Option<std::vec::Vec<crate::model::PullRequestTarget>>,
    pub client_request_token: std::option::Option<std::string::String>,
    /// The system-generated revision ID for the pull request.
    pub revision_id: std::option::Option<std::string::String>,
    /// The approval rules applied to the pull request.
    pub approval_rules: std::option::Option<std::vec::Vec<crate::model::ApprovalRule>>,
}
/// See [`PullRequest`](crate::model::PullRequest)
pub mod pull_request {
    /// A builder for [`PullRequest`](crate::model::PullRequest)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) pull_request_id: std::option::Option<std::string::String>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) last_activity_date: std::option::Option<smithy_types::Instant>,
        pub(crate) creation_date: std::option::Option<smithy_types::Instant>,
        pub(crate) pull_request_status: std::option::Option<crate::model::PullRequestStatusEnum>,
        pub(crate) author_arn: std::option::Option<std::string::String>,
        pub(crate) pull_request_targets: std::option::Option<std::vec::Vec<crate::model::PullRequestTarget>>,
        pub(crate) client_request_token: std::option::Option<std::string::String>,
        pub(crate) revision_id: std::option::Option<std::string::String>,
        pub(crate) approval_rules: std::option::Option<std::vec::Vec<crate::model::ApprovalRule>>,
    }
    impl Builder {
        /// The system-generated ID of the pull request.
        pub fn pull_request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.pull_request_id = Some(input.into());
            self
        }
        pub fn set_pull_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pull_request_id = input;
            self
        }
        /// The user-defined title of the pull request.
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        /// The user-defined description of the pull request.
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        /// The day and time of the last user or system activity on the pull request.
        pub fn last_activity_date(mut self, input: smithy_types::Instant) -> Self {
            self.last_activity_date = Some(input);
            self
        }
        pub fn set_last_activity_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_activity_date = input;
            self
        }
        /// The date and time the pull request was originally created.
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn pull_request_status(mut self, input: crate::model::PullRequestStatusEnum) -> Self {
            self.pull_request_status = Some(input);
            self
        }
        pub fn set_pull_request_status(mut self, input: std::option::Option<crate::model::PullRequestStatusEnum>) -> Self {
            self.pull_request_status = input;
            self
        }
        pub fn author_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.author_arn = Some(input.into());
            self
        }
        pub fn set_author_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.author_arn = input;
            self
        }
        /// The targets of the pull request, including the source branch and destination branch.
        pub fn pull_request_targets(mut self, input: std::vec::Vec<crate::model::PullRequestTarget>) -> Self {
            self.pull_request_targets = Some(input);
            self
        }
        pub fn set_pull_request_targets(mut self, input: std::option::Option<std::vec::Vec<crate::model::PullRequestTarget>>) -> Self {
            self.pull_request_targets = input;
            self
        }
        pub fn client_request_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        pub fn set_client_request_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.client_request_token = input;
            self
        }
        /// The system-generated revision ID for the pull request.
        pub fn revision_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.revision_id = Some(input.into());
            self
        }
        pub fn set_revision_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.revision_id = input;
            self
        }
        /// The approval rules applied to the pull request.
        pub fn approval_rules(mut self, input: std::vec::Vec<crate::model::ApprovalRule>) -> Self {
            self.approval_rules = Some(input);
            self
        }
        pub fn set_approval_rules(mut self, input: std::option::Option<std::vec::Vec<crate::model::ApprovalRule>>) -> Self {
            self.approval_rules = input;
            self
        }
        /// Consumes the builder and constructs a [`PullRequest`](crate::model::PullRequest)
        pub fn build(self) -> crate::model::PullRequest {
            crate::model::PullRequest {
                pull_request_id: self.pull_request_id,
                title: self.title,
                description: self.description,
                last_activity_date: self.last_activity_date,
                creation_date: self.creation_date,
                pull_request_status: self.pull_request_status,
                author_arn: self.author_arn,
                pull_request_targets: self.pull_request_targets,
                client_request_token: self.client_request_token,
                revision_id: self.revision_id,
                approval_rules: self.approval_rules,
            }
        }
    }
}
impl PullRequest {
    /// Creates a new builder-style object to manufacture [`PullRequest`](crate::model::PullRequest)
    pub fn builder() -> crate::model::pull_request::Builder {
        crate::model::pull_request::Builder::default()
    }
}

/// The repository and references a pull request merges between.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct PullRequestTarget {
    pub repository_name: std::option::Option<std::string::String>,
    /// The branch of the repository that contains the changes for the pull request.
    pub source_reference: std::option::Option<std::string::String>,
    /// The branch of the repository where the pull request changes are merged.
    pub destination_reference: std::option::Option<std::string::String>,
    pub destination_commit: std::option::Option<std::string::String>,
    pub source_commit: std::option::Option<std::string::String>,
    /// The commit ID of the most recent commit that the source branch and the destination branch have in common.
    pub merge_base: std::option::Option<std::string::String>,
    pub merge_metadata: std::option::Option<crate::model::MergeMetadata>,
}
/// See [`PullRequestTarget`](crate::model::PullRequestTarget)
pub mod pull_request_target {
    /// A builder for [`PullRequestTarget`](crate::model::PullRequestTarget)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) source_reference: std::option::Option<std::string::String>,
        pub(crate) destination_reference: std::option::Option<std::string::String>,
        pub(crate) destination_commit: std::option::Option<std::string::String>,
        pub(crate) source_commit: std::option::Option<std::string::String>,
        pub(crate) merge_base: std::option::Option<std::string::String>,
        pub(crate) merge_metadata: std::option::Option<crate::model::MergeMetadata>,
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
        /// The branch of the repository that contains the changes for the pull request.
        pub fn source_reference(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_reference = Some(input.into());
            self
        }
        pub fn set_source_reference(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_reference = input;
            self
        }
        /// The branch of the repository where the pull request changes are merged.
        pub fn destination_reference(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_reference = Some(input.into());
            self
        }
        pub fn set_destination_reference(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_reference = input;
            self
        }
        pub fn destination_commit(mut self, input: impl Into<std::string::String>) -> Self {
            self.destination_commit = Some(input.into());
            self
        }
        pub fn set_destination_commit(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.destination_commit = input;
            self
        }
        pub fn source_commit(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_commit = Some(input.into());
            self
        }
        pub fn set_source_commit(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_commit = input;
            self
        }
        /// The commit ID of the most recent commit that the source branch and the destination branch have in common.
        pub fn merge_base(mut self, input: impl Into<std::string::String>) -> Self {
            self.merge_base = Some(input.into());
            self
        }
        pub fn set_merge_base(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.merge_base = input;
            self
        }
        pub fn merge_metadata(mut self, input: crate::model::MergeMetadata) -> Self {
            self.merge_metadata = Some(input);
            self
        }
        pub fn set_merge_metadata(mut self, input: std::option::Option<crate::model::MergeMetadata>) -> Self {
            self.merge_metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`PullRequestTarget`](crate::model::PullRequestTarget)
        pub fn build(self) -> crate::model::PullRequestTarget {
            crate::model::PullRequestTarget {
                repository_name: self.repository_name,
                source_reference: self.source_reference,
                destination_reference: self.destination_reference,
                destination_commit: self.destination_commit,
                source_commit: self.source_commit,
                merge_base: self.merge_base,
                merge_metadata: self.merge_metadata,
            }
        }
    }
}
impl PullRequestTarget {
    /// Creates a new builder-style object to manufacture [`PullRequestTarget`](crate::model::PullRequestTarget)
    pub fn builder() -> crate::model::pull_request_target::Builder {
        crate::model::pull_request_target::Builder::default()
    }
}

/// A file added or updated as part of a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct PutFileEntry {
    /// The full path to the file in the repository, including the name of the file.
    pub file_path: std::option::Option<std::string::String>,
    pub file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
    /// The content of the file, if a source file is not specified.
    pub file_content: std::option::Option<smithy_types::Blob>,
    /// The name and full path of the file that contains the changes you want to make.
    pub source_file: std::option::Option<crate::model::SourceFileSpecifier>,
}
/// See [`PutFileEntry`](crate::model::PutFileEntry)
pub mod put_file_entry {
    /// A builder for [`PutFileEntry`](crate::model::PutFileEntry)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) file_path: std::option::Option<std::string::String>,
        pub(crate) file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
        pub(crate) file_content: std::option::Option<smithy_types::Blob>,
        pub(crate) source_file: std::option::Option<crate::model::SourceFileSpecifier>,
    }
    impl Builder {
        /// The full path to the file in the repository, including the name of the file.
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        pub fn file_mode(mut self, input: crate::model::FileModeTypeEnum) -> Self {
            self.file_mode = Some(input);
            self
        }
        pub fn set_file_mode(mut self, input: std::option::Option<crate::model::FileModeTypeEnum>) -> Self {
            self.file_mode = input;
            self
        }
        /// The content of the file, if a source file is not specified.
        pub fn file_content(mut self, input: smithy_types::Blob) -> Self {
            self.file_content = Some(input);
            self
        }
        pub fn set_file_content(mut self, input: std::option::Option<smithy_types::Blob>) -> Self {
            self.file_content = input;
            self
        }
        /// The name and full path of the file that contains the changes you want to make.
        pub fn source_file(mut self, input: crate::model::SourceFileSpecifier) -> Self {
            self.source_file = Some(input);
            self
        }
        pub fn set_source_file(mut self, input: std::option::Option<crate::model::SourceFileSpecifier>) -> Self {
            self.source_file = input;
            self
        }
        /// Consumes the builder and constructs a [`PutFileEntry`](crate::model::PutFileEntry)
        pub fn build(self) -> crate::model::PutFileEntry {
            crate::model::PutFileEntry {
                file_path: self.file_path,
                file_mode: self.file_mode,
                file_content: self.file_content,
                source_file: self.source_file,
            }
        }
    }
}
impl PutFileEntry {
    /// Creates a new builder-style object to manufacture [`PutFileEntry`](crate::model::PutFileEntry)
    pub fn builder() -> crate::model::put_file_entry::Builder {
        crate::model::put_file_entry::Builder::default()
    }
}

/// Information about the reaction values provided by users on a comment.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ReactionForComment {
    pub reaction: std::option::Option<crate::model::ReactionValueFormats>,
    /// The Amazon Resource Names (ARNs) of users who have provided reactions to the comment.
    pub reaction_users: std::option::Option<std::vec::Vec<std::string::String>>,
    pub reactions_from_deleted_users_count: std::option::Option<i32>,
}
/// See [`ReactionForComment`](crate::model::ReactionForComment)
pub mod reaction_for_comment {
    /// A builder for [`ReactionForComment`](crate::model::ReactionForComment)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) reaction: std::option::Option<crate::model::ReactionValueFormats>,
        pub(crate) reaction_users: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) reactions_from_deleted_users_count: std::option::Option<i32>,
    }
    impl Builder {
        pub fn reaction(mut self, input: crate::model::ReactionValueFormats) -> Self {
            self.reaction = Some(input);
            self
        }
        pub fn set_reaction(mut self, input: std::option::Option<crate::model::ReactionValueFormats>) -> Self {
            self.reaction = input;
            self
        }
        /// The Amazon Resource Names (ARNs) of users who have provided reactions to the comment.
        pub fn reaction_users(mut self, input: std::vec::Vec<std::string::String>) -> Self {
            self.reaction_users = Some(input);
            self
        }
        pub fn set_reaction_users(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.reaction_users = input;
            self
        }
        pub fn reactions_from_deleted_users_count(mut self, input: i32) -> Self {
            self.reactions_from_deleted_users_count = Some(input);
            self
        }
        pub fn set_reactions_from_deleted_users_count(mut self, input: std::option::Option<i32>) -> Self {
            self.reactions_from_deleted_users_count = input;
            self
        }
        /// Consumes the builder and constructs a [`ReactionForComment`](crate::model::ReactionForComment)
        pub fn build(self) -> crate::model::ReactionForComment {
            crate::model::ReactionForComment {
                reaction: self.reaction,
                reaction_users: self.reaction_users,
                reactions_from_deleted_users_count: self.reactions_from_deleted_users_count,
            }
        }
    }
}
impl ReactionForComment {
    /// Creates a new builder-style object to manufacture [`ReactionForComment`](crate::model::ReactionForComment)
    pub fn builder() -> crate::model::reaction_for_comment::Builder {
        crate::model::reaction_for_comment::Builder::default()
    }
}

/// The formats a reaction value is available in.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct ReactionValueFormats {
    pub emoji: std::option::Option<std::string::String>,
    pub short_code: std::option::Option<std::string::String>,
    pub unicode: std::option::Option<std::string::String>,
}
/// See [`ReactionValueFormats`](crate::model::ReactionValueFormats)
pub mod reaction_value_formats {
    /// A builder for [`ReactionValueFormats`](crate::model::ReactionValueFormats)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) emoji: std::option::Option<std::string::String>,
        pub(crate) short_code: std::option::Option<std::string::String>,
        pub(crate) unicode: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn emoji(mut self, input: impl Into<std::string::String>) -> Self {
            self.emoji = Some(input.into());
            self
        }
        pub fn set_emoji(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.emoji = input;
            self
        }
        pub fn short_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.short_code = Some(input.into());
            self
        }
        pub fn set_short_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.short_code = input;
            self
        }
        pub fn unicode(mut self, input: impl Into<std::string::String>) -> Self {
            self.unicode = Some(input.into());
            self
        }
        pub fn set_unicode(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.unicode = input;
            self
        }
        /// Consumes the builder and constructs a [`ReactionValueFormats`](crate::model::ReactionValueFormats)
        pub fn build(self) -> crate::model::ReactionValueFormats {
            crate::model::ReactionValueFormats {
                emoji: self.emoji,
                short_code: self.short_code,
                unicode: self.unicode,
            }
        }
    }
}
impl ReactionValueFormats {
    /// Creates a new builder-style object to manufacture [`ReactionValueFormats`](crate::model::ReactionValueFormats)
    pub fn builder() -> crate::model::reaction_value_formats::Builder {
        crate::model::reaction_value_formats::Builder::default()
    }
}

/// Information about a repository.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct RepositoryMetadata {
    /// The ID of the AWS account associated with the repository.
    pub account_id: std::option::Option<std::string::String>,
    pub repository_id: std::option::Option<std::string::String>,
    pub repository_name: std::option::Option<std::string::String>,
    pub repository_description: std::option::Option<std::string::String>,
    /// The repository's default branch name.
    pub default_branch: std::option::Option<std::string::String>,
    pub last_modified_date: std::option::Option<smithy_types::Instant>,
    pub creation_date: std::option::Option<smithy_types::Instant>,
    /// The URL to use for cloning the repository over HTTPS.
    pub clone_url_http: std::option::Option<std::string::String>,
    /// The URL to use for cloning the repository over SSH.
    pub clone_url_ssh: std::option::Option<std::string::String>,
    /// The Amazon Resource Name (ARN) of the repository.
    pub arn: std::option::Option<std::string::String>,
}
/// See [`RepositoryMetadata`](crate::model::RepositoryMetadata)
pub mod repository_metadata {
    /// A builder for [`RepositoryMetadata`](crate::model::RepositoryMetadata)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) account_id: std::option::Option<std::string::String>,
        pub(crate) repository_id: std::option::Option<std::string::String>,
        pub(crate) repository_name: std::option::Option<std::string::String>,
        pub(crate) repository_description: std::option::Option<std::string::String>,
        pub(crate) default_branch: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<smithy_types::Instant>,
        pub(crate) creation_date: std::option::Option<smithy_types::Instant>,
        pub(crate) clone_url_http: std::option::Option<std::string::String>,
        pub(crate) clone_url_ssh: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The ID of the AWS account associated with the repository.
        pub fn account_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.account_id = Some(input.into());
            self
        }
        pub fn set_account_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.account_id = input;
            self
        }
        pub fn repository_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_id = Some(input.into());
            self
        }
        pub fn set_repository_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_id = input;
            self
        }
        pub fn repository_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_name = Some(input.into());
            self
        }
        pub fn set_repository_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_name = input;
            self
        }
        pub fn repository_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.repository_description = Some(input.into());
            self
        }
        pub fn set_repository_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.repository_description = input;
            self
        }
        /// The repository's default branch name.
        pub fn default_branch(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_branch = Some(input.into());
            self
        }
        pub fn set_default_branch(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_branch = input;
            self
        }
        pub fn last_modified_date(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_date = Some(input);
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn creation_date(mut self, input: smithy_types::Instant) -> Self {
            self.creation_date = Some(input);
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_date = input;
            self
        }
        /// The URL to use for cloning the repository over HTTPS.
        pub fn clone_url_http(mut self, input: impl Into<std::string::String>) -> Self {
            self.clone_url_http = Some(input.into());
            self
        }
        pub fn set_clone_url_http(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.clone_url_http = input;
            self
        }
        /// The URL to use for cloning the repository over SSH.
        pub fn clone_url_ssh(mut self, input: impl Into<std::string::String>) -> Self {
            self.clone_url_ssh = Some(input.into());
            self
        }
        pub fn set_clone_url_ssh(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.clone_url_ssh = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the repository.
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// Consumes the builder and constructs a [`RepositoryMetadata`](crate::model::RepositoryMetadata)
        pub fn build(self) -> crate::model::RepositoryMetadata {
            crate::model::RepositoryMetadata {
                account_id: self.account_id,
                repository_id: self.repository_id,
                repository_name: self.repository_name,
                repository_description: self.repository_description,
                default_branch: self.default_branch,
                last_modified_date: self.last_modified_date,
                creation_date: self.creation_date,
                clone_url_http: self.clone_url_http,
                clone_url_ssh: self.clone_url_ssh,
                arn: self.arn,
            }
        }
    }
}
impl RepositoryMetadata {
    /// Creates a new builder-style object to manufacture [`RepositoryMetadata`](crate::model::RepositoryMetadata)
    pub fn builder() -> crate::model::repository_metadata::Builder {
        crate::model::repository_metadata::Builder::default()
    }
}

/// A file whose mode changes as part of a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct SetFileModeEntry {
    /// The full path to the file, including the name of the file.
    pub file_path: std::option::Option<std::string::String>,
    /// The file mode for the file.
    pub file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
}
/// See [`SetFileModeEntry`](crate::model::SetFileModeEntry)
pub mod set_file_mode_entry {
    /// A builder for [`SetFileModeEntry`](crate::model::SetFileModeEntry)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) file_path: std::option::Option<std::string::String>,
        pub(crate) file_mode: std::option::Option<crate::model::FileModeTypeEnum>,
    }
    impl Builder {
        /// The full path to the file, including the name of the file.
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        /// The file mode for the file.
        pub fn file_mode(mut self, input: crate::model::FileModeTypeEnum) -> Self {
            self.file_mode = Some(input);
            self
        }
        pub fn set_file_mode(mut self, input: std::option::Option<crate::model::FileModeTypeEnum>) -> Self {
            self.file_mode = input;
            self
        }
        /// Consumes the builder and constructs a [`SetFileModeEntry`](crate::model::SetFileModeEntry)
        pub fn build(self) -> crate::model::SetFileModeEntry {
            crate::model::SetFileModeEntry {
                file_path: self.file_path,
                file_mode: self.file_mode,
            }
        }
    }
}
impl SetFileModeEntry {
    /// Creates a new builder-style object to manufacture [`SetFileModeEntry`](crate::model::SetFileModeEntry)
    pub fn builder() -> crate::model::set_file_mode_entry::Builder {
        crate::model::set_file_mode_entry::Builder::default()
    }
}

/// A file that is the source of a file added by a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct SourceFileSpecifier {
    pub file_path: std::option::Option<std::string::String>,
    /// Whether to remove the source file from the parent commit.
    pub is_move: std::option::Option<bool>,
}
/// See [`SourceFileSpecifier`](crate::model::SourceFileSpecifier)
pub mod source_file_specifier {
    /// A builder for [`SourceFileSpecifier`](crate::model::SourceFileSpecifier)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) file_path: std::option::Option<std::string::String>,
        pub(crate) is_move: std::option::Option<bool>,
    }
    impl Builder {
        pub fn file_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.file_path = Some(input.into());
            self
        }
        pub fn set_file_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.file_path = input;
            self
        }
        /// Whether to remove the source file from the parent commit.
        pub fn is_move(mut self, input: bool) -> Self {
            self.is_move = Some(input);
            self
        }
        pub fn set_is_move(mut self, input: std::option::Option<bool>) -> Self {
            self.is_move = input;
            self
        }
        /// Consumes the builder and constructs a [`SourceFileSpecifier`](crate::model::SourceFileSpecifier)
        pub fn build(self) -> crate::model::SourceFileSpecifier {
            crate::model::SourceFileSpecifier {
                file_path: self.file_path,
                is_move: self.is_move,
            }
        }
    }
}
impl SourceFileSpecifier {
    /// Creates a new builder-style object to manufacture [`SourceFileSpecifier`](crate::model::SourceFileSpecifier)
    pub fn builder() -> crate::model::source_file_specifier::Builder {
        crate::model::source_file_specifier::Builder::default()
    }
}

/// The user name, email address and date of a commit.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
pub struct UserInfo {
    pub name: std::option::Option<std::string::String>,
    pub email: std::option::Option<std::string::String>,
    /// The date when the specified commit was committed, in timestamp format with GMT offset.
    pub date: std::option::Option<std::string::String>,
}
/// See [`UserInfo`](crate::model::UserInfo)
pub mod user_info {
    /// A builder for [`UserInfo`](crate::model::UserInfo)
    #[non_exhaustive]
    #[derive(std::clone::Clone, std::cmp::PartialEq, std::default::Default, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) email: std::option::Option<std::string::String>,
        pub(crate) date: std::option::Option<std::string::String>,
    }
    impl Builder {
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
        /// The date when the specified commit was committed, in timestamp format with GMT offset.
        pub fn date(mut self, input: impl Into<std::string::String>) -> Self {
            self.date = Some(input.into());
            self
        }
        pub fn set_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.date = input;
            self
        }
        /// Consumes the builder and constructs a [`UserInfo`](crate::model::UserInfo)
        pub fn build(self) -> crate::model::UserInfo {
            crate::model::UserInfo {
                name: self.name,
                email: self.email,
                date: self.date,
            }
        }
    }
}
impl UserInfo {
    /// Creates a new builder-style object to manufacture [`UserInfo`](crate::model::UserInfo)
    pub fn builder() -> crate::model::user_info::Builder {
        crate::model::user_info::Builder::default()
    }
}
