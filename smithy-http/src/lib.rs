/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP plumbing shared by the generated JSON-RPC service clients: the request body, the
//! operation bundle handed to the client, the JSON-RPC request envelope and the result types.

pub mod body;
pub mod endpoint;
pub mod json_rpc;
pub mod operation;
pub mod response;
pub mod result;
