//! Encoding and decoding of global id tokens.
//!
//! Encoding never fails. Decoding restores the `=` padding stripped on
//! output (padding is a function of the token length mod 4), decodes with
//! the URL-safe alphabet, and splits the payload on the first [`SEPARATOR`].
//! Local ids may therefore contain the separator; type names may not.
//!
//! Decoding is strict. Characters outside the URL-safe alphabet, a length
//! of 1 mod 4, and non-zero trailing bits in the final symbol are all
//! `Malformed`. Lenient base64 decoders skip or mask these, so a token one
//! of them accepts may be rejected here.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use crate::error::{GlobalIdError, MalformedReason};
use crate::global_id::GlobalId;

/// Character joining the type name and the local id inside a token.
pub const SEPARATOR: char = ':';

/// Encode a `(type_name, local_id)` pair into an opaque token.
///
/// `local_id` is rendered through its `Display` impl, so numeric ids encode
/// the same as their decimal string form.
pub fn encode_global_id(type_name: &str, local_id: impl fmt::Display) -> String {
    let payload = format!("{type_name}{SEPARATOR}{local_id}");
    let mut token = URL_SAFE.encode(payload.as_bytes());
    let unpadded = token.trim_end_matches('=').len();
    token.truncate(unpadded);
    token
}

/// Decode a token produced by [`encode_global_id`].
pub fn decode_global_id(token: &str) -> Result<GlobalId, GlobalIdError> {
    let padding = (4 - token.len() % 4) % 4;
    let mut padded = String::with_capacity(token.len() + padding);
    padded.push_str(token);
    padded.extend(std::iter::repeat('=').take(padding));

    let bytes = URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| GlobalIdError::malformed(token, e))?;
    let payload =
        String::from_utf8(bytes).map_err(|_| GlobalIdError::malformed(token, MalformedReason::Utf8))?;

    let (type_name, local_id) = payload
        .split_once(SEPARATOR)
        .ok_or_else(|| GlobalIdError::malformed(token, MalformedReason::MissingSeparator))?;

    Ok(GlobalId::from_parts(type_name, local_id))
}
