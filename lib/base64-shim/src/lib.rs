/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

//! Drop-in substitute for the platform base64 codec, for unit tests that
//! run outside the platform runtime.
//!
//! Both operations delegate to the standard RFC 4648 alphabet with `=`
//! padding. The `flags` parameter exists only so that callers written
//! against the platform API compile unchanged; it never affects the output.

use base64::prelude::*;

mod error;
pub use error::DecodeError;

/// Default flag value of the shimmed platform API.
pub const DEFAULT: i32 = 0;
/// Accepted for call compatibility, ignored: output is always padded.
pub const NO_PADDING: i32 = 1;
/// Accepted for call compatibility, ignored: output is never wrapped.
pub const NO_WRAP: i32 = 2;
/// Accepted for call compatibility, ignored.
pub const CRLF: i32 = 4;
/// Accepted for call compatibility, ignored: output always uses the
/// standard alphabet.
pub const URL_SAFE: i32 = 8;

/// Encode `data` as standard padded base64.
///
/// Never fails. Empty input yields an empty string, and the output length
/// is always a multiple of 4 characters.
pub fn encode(data: &[u8], _flags: i32) -> String {
    BASE64_STANDARD.encode(data)
}

/// Decode standard padded base64 `text` back to the original bytes.
///
/// Fails with [`DecodeError`] if `text` contains a character outside the
/// standard alphabet or its length/padding breaks the 4-character grouping
/// rules.
pub fn decode(text: &str, _flags: i32) -> Result<Vec<u8>, DecodeError> {
    let decoded = BASE64_STANDARD.decode(text)?;
    Ok(decoded)
}
