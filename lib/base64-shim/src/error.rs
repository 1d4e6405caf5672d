/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use thiserror::Error;

/// Returned by [`decode`](crate::decode) for text that is not valid
/// standard base64.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid base64 encoding: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);
