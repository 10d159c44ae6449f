//! Global object identifiers for GraphQL schemas.
//!
//! A global id is an opaque, URL-safe token that qualifies a type-local
//! identifier with the name of the type it belongs to. Clients treat the token
//! as a handle; only this crate decomposes it.
//!
//! # Token format
//!
//! `base64url(type_name + ":" + local_id)` with trailing `=` padding removed.
//! Padding is restored before decoding, so `"VXNlcjo0Mg"` and `"VXNlcjo0Mg=="`
//! both decode to `("User", "42")`.
//!
//! # Key Types
//!
//! - [`encode_global_id`] / [`decode_global_id`] — the codec
//! - [`GlobalId`] — decoded `(type_name, local_id)` pair
//! - [`GlobalIdError`] — decode and validation failures

pub mod codec;
pub mod error;
pub mod global_id;

pub use codec::{decode_global_id, encode_global_id, SEPARATOR};
pub use error::{GlobalIdError, MalformedReason};
pub use global_id::GlobalId;
