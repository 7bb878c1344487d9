/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by AWS App Mesh.

smithy_types::error_registry! {
    /// Every error code AWS App Mesh declares.
    pub enum AppMeshErrorKind {
        BadRequest => "BadRequestException",
        Conflict => "ConflictException",
        Forbidden => "ForbiddenException",
        InternalServerError => "InternalServerErrorException",
        LimitExceeded => "LimitExceededException",
        NotFound => "NotFoundException",
        ResourceInUse => "ResourceInUseException",
        ServiceUnavailable => "ServiceUnavailableException",
        TooManyRequests => "TooManyRequestsException",
        TooManyTags => "TooManyTagsException",
    }
}

/// An error response from AWS App Mesh, classified against [`AppMeshErrorKind`].
pub type AppMeshError = smithy_types::error::ServiceError<AppMeshErrorKind>;
