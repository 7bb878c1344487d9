/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON serializer and deserializer used by the AWS JSON-RPC service clients.
//!
//! Serialization writes members in call order through [`serialize::JsonObjectWriter`].
//! Deserialization pulls tokens from [`deserialize::json_token_iter`] and maps objects through
//! declarative field tables ([`deserialize::Field`]).

pub mod deserialize;
mod escape;
pub mod json_errors;
pub mod serialize;

pub use escape::EscapeError;
