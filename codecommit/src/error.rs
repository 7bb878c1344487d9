/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by AWS CodeCommit.

smithy_types::error_registry! {
    /// Every error code AWS CodeCommit declares.
    pub enum CodeCommitErrorKind {
        ActorDoesNotExist => "ActorDoesNotExistException",
        ApprovalRuleContentRequired => "ApprovalRuleContentRequiredException",
        ApprovalRuleDoesNotExist => "ApprovalRuleDoesNotExistException",
        ApprovalRuleNameAlreadyExists => "ApprovalRuleNameAlreadyExistsException",
        ApprovalRuleNameRequired => "ApprovalRuleNameRequiredException",
        ApprovalRuleTemplateContentRequired => "ApprovalRuleTemplateContentRequiredException",
        ApprovalRuleTemplateDoesNotExist => "ApprovalRuleTemplateDoesNotExistException",
        ApprovalRuleTemplateInUse => "ApprovalRuleTemplateInUseException",
        ApprovalRuleTemplateNameAlreadyExists => "ApprovalRuleTemplateNameAlreadyExistsException",
        ApprovalRuleTemplateNameRequired => "ApprovalRuleTemplateNameRequiredException",
        ApprovalStateRequired => "ApprovalStateRequiredException",
        AuthorDoesNotExist => "AuthorDoesNotExistException",
        BeforeCommitIdAndAfterCommitIdAreSame => "BeforeCommitIdAndAfterCommitIdAreSameException",
        BlobIdDoesNotExist => "BlobIdDoesNotExistException",
        BlobIdRequired => "BlobIdRequiredException",
        BranchDoesNotExist => "BranchDoesNotExistException",
        BranchNameExists => "BranchNameExistsException",
        BranchNameIsTagName => "BranchNameIsTagNameException",
        BranchNameRequired => "BranchNameRequiredException",
        CannotDeleteApprovalRuleFromTemplate => "CannotDeleteApprovalRuleFromTemplateException",
        CannotModifyApprovalRuleFromTemplate => "CannotModifyApprovalRuleFromTemplateException",
        ClientRequestTokenRequired => "ClientRequestTokenRequiredException",
        CommentContentRequired => "CommentContentRequiredException",
        CommentContentSizeLimitExceeded => "CommentContentSizeLimitExceededException",
        CommentDeleted => "CommentDeletedException",
        CommentDoesNotExist => "CommentDoesNotExistException",
        CommentIdRequired => "CommentIdRequiredException",
        CommentNotCreatedByCaller => "CommentNotCreatedByCallerException",
        CommitDoesNotExist => "CommitDoesNotExistException",
        CommitIdDoesNotExist => "CommitIdDoesNotExistException",
        CommitIdRequired => "CommitIdRequiredException",
        CommitIdsLimitExceeded => "CommitIdsLimitExceededException",
        CommitIdsListRequired => "CommitIdsListRequiredException",
        CommitMessageLengthExceeded => "CommitMessageLengthExceededException",
        CommitRequired => "CommitRequiredException",
        ConcurrentReferenceUpdate => "ConcurrentReferenceUpdateException",
        DefaultBranchCannotBeDeleted => "DefaultBranchCannotBeDeletedException",
        DirectoryNameConflictsWithFileName => "DirectoryNameConflictsWithFileNameException",
        EncryptionIntegrityChecksFailed => "EncryptionIntegrityChecksFailedException",
        EncryptionKeyAccessDenied => "EncryptionKeyAccessDeniedException",
        EncryptionKeyDisabled => "EncryptionKeyDisabledException",
        EncryptionKeyNotFound => "EncryptionKeyNotFoundException",
        EncryptionKeyUnavailable => "EncryptionKeyUnavailableException",
        FileContentAndSourceFileSpecified => "FileContentAndSourceFileSpecifiedException",
        FileContentRequired => "FileContentRequiredException",
        FileContentSizeLimitExceeded => "FileContentSizeLimitExceededException",
        FileDoesNotExist => "FileDoesNotExistException",
        FileEntryRequired => "FileEntryRequiredException",
        FileModeRequired => "FileModeRequiredException",
        FileNameConflictsWithDirectoryName => "FileNameConflictsWithDirectoryNameException",
        FilePathConflictsWithSubmodulePath => "FilePathConflictsWithSubmodulePathException",
        FileTooLarge => "FileTooLargeException",
        FolderContentSizeLimitExceeded => "FolderContentSizeLimitExceededException",
        FolderDoesNotExist => "FolderDoesNotExistException",
        IdempotencyParameterMismatch => "IdempotencyParameterMismatchException",
        InvalidActorArn => "InvalidActorArnException",
        InvalidApprovalRuleContent => "InvalidApprovalRuleContentException",
        InvalidApprovalRuleName => "InvalidApprovalRuleNameException",
        InvalidApprovalRuleTemplateContent => "InvalidApprovalRuleTemplateContentException",
        InvalidApprovalRuleTemplateDescription => "InvalidApprovalRuleTemplateDescriptionException",
        InvalidApprovalRuleTemplateName => "InvalidApprovalRuleTemplateNameException",
        InvalidApprovalState => "InvalidApprovalStateException",
        InvalidAuthorArn => "InvalidAuthorArnException",
        InvalidBlobId => "InvalidBlobIdException",
        InvalidBranchName => "InvalidBranchNameException",
        InvalidClientRequestToken => "InvalidClientRequestTokenException",
        InvalidCommentId => "InvalidCommentIdException",
        InvalidCommit => "InvalidCommitException",
        InvalidCommitId => "InvalidCommitIdException",
        InvalidConflictDetailLevel => "InvalidConflictDetailLevelException",
        InvalidConflictResolution => "InvalidConflictResolutionException",
        InvalidConflictResolutionStrategy => "InvalidConflictResolutionStrategyException",
        InvalidContinuationToken => "InvalidContinuationTokenException",
        InvalidDeletionParameter => "InvalidDeletionParameterException",
        InvalidDescription => "InvalidDescriptionException",
        InvalidDestinationCommitSpecifier => "InvalidDestinationCommitSpecifierException",
        InvalidEmail => "InvalidEmailException",
        InvalidFileLocation => "InvalidFileLocationException",
        InvalidFileMode => "InvalidFileModeException",
        InvalidFilePosition => "InvalidFilePositionException",
        InvalidMaxConflictFiles => "InvalidMaxConflictFilesException",
        InvalidMaxMergeHunks => "InvalidMaxMergeHunksException",
        InvalidMaxResults => "InvalidMaxResultsException",
        InvalidMergeOption => "InvalidMergeOptionException",
        InvalidOrder => "InvalidOrderException",
        InvalidOverrideStatus => "InvalidOverrideStatusException",
        InvalidParentCommitId => "InvalidParentCommitIdException",
        InvalidPath => "InvalidPathException",
        InvalidPullRequestEventType => "InvalidPullRequestEventTypeException",
        InvalidPullRequestId => "InvalidPullRequestIdException",
        InvalidPullRequestStatus => "InvalidPullRequestStatusException",
        InvalidPullRequestStatusUpdate => "InvalidPullRequestStatusUpdateException",
        InvalidReactionUserArn => "InvalidReactionUserArnException",
        InvalidReactionValue => "InvalidReactionValueException",
        InvalidReferenceName => "InvalidReferenceNameException",
        InvalidRelativeFileVersionEnum => "InvalidRelativeFileVersionEnumException",
        InvalidReplacementContent => "InvalidReplacementContentException",
        InvalidReplacementType => "InvalidReplacementTypeException",
        InvalidRepositoryDescription => "InvalidRepositoryDescriptionException",
        InvalidRepositoryName => "InvalidRepositoryNameException",
        InvalidRepositoryTriggerBranchName => "InvalidRepositoryTriggerBranchNameException",
        InvalidRepositoryTriggerCustomData => "InvalidRepositoryTriggerCustomDataException",
        InvalidRepositoryTriggerDestinationArn => "InvalidRepositoryTriggerDestinationArnException",
        InvalidRepositoryTriggerEvents => "InvalidRepositoryTriggerEventsException",
        InvalidRepositoryTriggerName => "InvalidRepositoryTriggerNameException",
        InvalidRepositoryTriggerRegion => "InvalidRepositoryTriggerRegionException",
        InvalidResourceArn => "InvalidResourceArnException",
        InvalidRevisionId => "InvalidRevisionIdException",
        InvalidSortBy => "InvalidSortByException",
        InvalidSourceCommitSpecifier => "InvalidSourceCommitSpecifierException",
        InvalidSystemTagUsage => "InvalidSystemTagUsageException",
        InvalidTagKeysList => "InvalidTagKeysListException",
        InvalidTagsMap => "InvalidTagsMapException",
        InvalidTargetBranch => "InvalidTargetBranchException",
        InvalidTarget => "InvalidTargetException",
        InvalidTargets => "InvalidTargetsException",
        InvalidTitle => "InvalidTitleException",
        ManualMergeRequired => "ManualMergeRequiredException",
        MaximumBranchesExceeded => "MaximumBranchesExceededException",
        MaximumConflictResolutionEntriesExceeded => "MaximumConflictResolutionEntriesExceededException",
        MaximumFileContentToLoadExceeded => "MaximumFileContentToLoadExceededException",
        MaximumFileEntriesExceeded => "MaximumFileEntriesExceededException",
        MaximumItemsToCompareExceeded => "MaximumItemsToCompareExceededException",
        MaximumNumberOfApprovalsExceeded => "MaximumNumberOfApprovalsExceededException",
        MaximumOpenPullRequestsExceeded => "MaximumOpenPullRequestsExceededException",
        MaximumRepositoryNamesExceeded => "MaximumRepositoryNamesExceededException",
        MaximumRepositoryTriggersExceeded => "MaximumRepositoryTriggersExceededException",
        MaximumRuleTemplatesAssociatedWithRepository => "MaximumRuleTemplatesAssociatedWithRepositoryException",
        MergeOptionRequired => "MergeOptionRequiredException",
        MultipleConflictResolutionEntries => "MultipleConflictResolutionEntriesException",
        MultipleRepositoriesInPullRequest => "MultipleRepositoriesInPullRequestException",
        NameLengthExceeded => "NameLengthExceededException",
        NoChange => "NoChangeException",
        NumberOfRuleTemplatesExceeded => "NumberOfRuleTemplatesExceededException",
        NumberOfRulesExceeded => "NumberOfRulesExceededException",
        OverrideAlreadySet => "OverrideAlreadySetException",
        OverrideStatusRequired => "OverrideStatusRequiredException",
        ParentCommitDoesNotExist => "ParentCommitDoesNotExistException",
        ParentCommitIdOutdated => "ParentCommitIdOutdatedException",
        ParentCommitIdRequired => "ParentCommitIdRequiredException",
        PathDoesNotExist => "PathDoesNotExistException",
        PathRequired => "PathRequiredException",
        PullRequestAlreadyClosed => "PullRequestAlreadyClosedException",
        PullRequestApprovalRulesNotSatisfied => "PullRequestApprovalRulesNotSatisfiedException",
        PullRequestCannotBeApprovedByAuthor => "PullRequestCannotBeApprovedByAuthorException",
        PullRequestDoesNotExist => "PullRequestDoesNotExistException",
        PullRequestIdRequired => "PullRequestIdRequiredException",
        PullRequestStatusRequired => "PullRequestStatusRequiredException",
        PutFileEntryConflict => "PutFileEntryConflictException",
        ReactionLimitExceeded => "ReactionLimitExceededException",
        ReactionValueRequired => "ReactionValueRequiredException",
        ReferenceDoesNotExist => "ReferenceDoesNotExistException",
        ReferenceNameRequired => "ReferenceNameRequiredException",
        ReferenceTypeNotSupported => "ReferenceTypeNotSupportedException",
        ReplacementContentRequired => "ReplacementContentRequiredException",
        ReplacementTypeRequired => "ReplacementTypeRequiredException",
        RepositoryDoesNotExist => "RepositoryDoesNotExistException",
        RepositoryLimitExceeded => "RepositoryLimitExceededException",
        RepositoryNameExists => "RepositoryNameExistsException",
        RepositoryNameRequired => "RepositoryNameRequiredException",
        RepositoryNamesRequired => "RepositoryNamesRequiredException",
        RepositoryNotAssociatedWithPullRequest => "RepositoryNotAssociatedWithPullRequestException",
        RepositoryTriggerBranchNameListRequired => "RepositoryTriggerBranchNameListRequiredException",
        RepositoryTriggerDestinationArnRequired => "RepositoryTriggerDestinationArnRequiredException",
        RepositoryTriggerEventsListRequired => "RepositoryTriggerEventsListRequiredException",
        RepositoryTriggerNameRequired => "RepositoryTriggerNameRequiredException",
        RepositoryTriggersListRequired => "RepositoryTriggersListRequiredException",
        ResourceArnRequired => "ResourceArnRequiredException",
        RestrictedSourceFile => "RestrictedSourceFileException",
        RevisionIdRequired => "RevisionIdRequiredException",
        RevisionNotCurrent => "RevisionNotCurrentException",
        SameFileContent => "SameFileContentException",
        SamePathRequest => "SamePathRequestException",
        SourceAndDestinationAreSame => "SourceAndDestinationAreSameException",
        SourceFileOrContentRequired => "SourceFileOrContentRequiredException",
        TagKeysListRequired => "TagKeysListRequiredException",
        TagPolicy => "TagPolicyException",
        TagsMapRequired => "TagsMapRequiredException",
        TargetRequired => "TargetRequiredException",
        TargetsRequired => "TargetsRequiredException",
        TipOfSourceReferenceIsDifferent => "TipOfSourceReferenceIsDifferentException",
        TipsDivergenceExceeded => "TipsDivergenceExceededException",
        TitleRequired => "TitleRequiredException",
        TooManyTags => "TooManyTagsException",
    }
}

/// An error response from AWS CodeCommit, classified against [`CodeCommitErrorKind`].
pub type CodeCommitError = smithy_types::error::ServiceError<CodeCommitErrorKind>;
